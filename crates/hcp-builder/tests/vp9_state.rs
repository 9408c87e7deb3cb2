//! VP9 picture and segment state: motion-compensation scale factors,
//! previous-frame gating, and sign/magnitude delta encoding.

mod common;

use common::RecordingSink;
use hcp_builder::gen12::Gen12Hcp;
use hcp_builder::gen9::Gen9Hcp;
use hcp_builder::params::{
    Vp9EncSegData, Vp9EncodePicState, Vp9PicParams, Vp9PicState, Vp9PrevFrameParams, Vp9RefCtrl,
    Vp9RefFrame, Vp9SegData, Vp9SegmentParams, VP9_SEGMENTS,
};
use hcp_builder::HcpError;

fn inter_pic_320x240() -> Vp9PicParams {
    let mut pic = Vp9PicParams {
        frame_width_minus1: 319,
        frame_height_minus1: 239,
        inter_frame: true,
        ..Default::default()
    };
    pic.last_ref_idx = 0;
    pic.golden_ref_idx = 1;
    pic.alt_ref_idx = 2;
    for (i, entry) in pic.ref_frame_list.iter_mut().enumerate().take(3) {
        entry.frame_idx = i as u8;
    }
    pic
}

fn ref_list() -> Vec<Vp9RefFrame> {
    vec![
        Vp9RefFrame {
            width: 320,
            height: 240,
        },
        Vp9RefFrame {
            width: 160,
            height: 120,
        },
        Vp9RefFrame {
            width: 640,
            height: 480,
        },
    ]
}

fn decode_state<'a>(pic: &'a Vp9PicParams, refs: &'a [Vp9RefFrame]) -> Vp9PicState<'a> {
    Vp9PicState {
        pic,
        ref_list: refs,
        prev_frame: Vp9PrevFrameParams {
            key_frame: false,
            intra_only: false,
            display: true,
        },
        prev_frame_width: 320,
        prev_frame_height: 240,
    }
}

#[test]
fn decode_scale_factors_use_q14_fixed_point() {
    let pic = inter_pic_320x240();
    let refs = ref_list();
    let hcp = Gen12Hcp::new(true);
    let mut sink = RecordingSink::new();

    hcp.add_vp9_pic_state(Some(&mut sink), None, &decode_state(&pic, &refs))
        .unwrap();

    let cmd = &sink.commands()[0];
    // Same-size reference scales by exactly 1 << 14.
    assert_eq!(cmd[4], 0x4000_4000);
    // Half-size reference scales by 1 << 13.
    assert_eq!(cmd[5], 0x2000_2000);
    // Double-size reference scales by 1 << 15.
    assert_eq!(cmd[6], 0x8000_8000);

    // Raw reference dimensions minus one.
    assert_eq!(cmd[7], (320 - 1) | ((240 - 1) << 16));
    assert_eq!(cmd[8], (160 - 1) | ((120 - 1) << 16));
    assert_eq!(cmd[9], (640 - 1) | ((480 - 1) << 16));

    // Frame dimensions are aligned to the 8-pixel block grid.
    assert_eq!(cmd[1], 319 | (239 << 16));

    // Decode overrides the DW0 length to the 12 consumed dwords.
    assert_eq!(cmd[0], 0x73b0_000a);
    // Prev frame usable: inter, displayed, same size.
    assert_eq!((cmd[2] >> 10) & 1, 1);
}

#[test]
fn decode_prev_frame_unusable_after_resolution_change() {
    let pic = inter_pic_320x240();
    let refs = ref_list();
    let mut state = decode_state(&pic, &refs);
    state.prev_frame_width = 640;
    let hcp = Gen12Hcp::new(true);
    let mut sink = RecordingSink::new();

    hcp.add_vp9_pic_state(Some(&mut sink), None, &state).unwrap();

    let cmd = &sink.commands()[0];
    assert_eq!((cmd[2] >> 10) & 1, 0);
}

#[test]
fn key_frame_leaves_reference_fields_at_reset() {
    let mut pic = inter_pic_320x240();
    pic.inter_frame = false;
    let refs = ref_list();
    let hcp = Gen12Hcp::new(true);
    let mut sink = RecordingSink::new();

    hcp.add_vp9_pic_state(Some(&mut sink), None, &decode_state(&pic, &refs))
        .unwrap();

    let cmd = &sink.commands()[0];
    for dw in 4..=9 {
        assert_eq!(cmd[dw], 0, "dw {dw}");
    }
}

#[test]
fn encode_skips_unused_reference_roles() {
    let mut pic = inter_pic_320x240();
    pic.src_frame_width_minus1 = 319;
    pic.src_frame_height_minus1 = 239;
    pic.ref_ctrl_l0 = Vp9RefCtrl::LAST;
    pic.ref_ctrl_l1 = Vp9RefCtrl::empty();
    let refs = ref_list();

    let state = Vp9EncodePicState {
        pic: &pic,
        ref_list: &refs,
        prev_frame: Vp9PrevFrameParams {
            key_frame: false,
            intra_only: false,
            display: true,
        },
        prev_frame_width: 320,
        prev_frame_height: 240,
        encoded_format: 0,
        encoded_bit_depth: 8,
        tx_mode: 4,
        use_dys_ref_surface: false,
        sse_enable: false,
        vdenc_pak_only_pass: false,
    };

    let hcp = Gen12Hcp::new(false);
    let mut sink = RecordingSink::new();
    hcp.add_vp9_pic_state_enc(Some(&mut sink), None, &state).unwrap();

    let cmd = &sink.commands()[0];
    // Only the LAST role is programmed.
    assert_eq!(cmd[4], 0x4000_4000);
    assert_eq!(cmd[5], 0);
    assert_eq!(cmd[6], 0);
    assert_eq!(cmd[8], 0);
    assert_eq!(cmd[9], 0);
}

#[test]
fn encode_dynamic_scaling_references_current_dimensions() {
    let mut pic = inter_pic_320x240();
    pic.src_frame_width_minus1 = 319;
    pic.src_frame_height_minus1 = 239;
    pic.ref_ctrl_l0 = Vp9RefCtrl::GOLDEN;
    let refs = ref_list(); // golden is 160x120 in the tracked list

    let state = Vp9EncodePicState {
        pic: &pic,
        ref_list: &refs,
        prev_frame: Vp9PrevFrameParams {
            key_frame: false,
            intra_only: false,
            display: true,
        },
        prev_frame_width: 320,
        prev_frame_height: 240,
        encoded_format: 0,
        encoded_bit_depth: 8,
        tx_mode: 0,
        use_dys_ref_surface: true,
        sse_enable: false,
        vdenc_pak_only_pass: false,
    };

    let hcp = Gen12Hcp::new(false);
    let mut sink = RecordingSink::new();
    hcp.add_vp9_pic_state_enc(Some(&mut sink), None, &state).unwrap();

    let cmd = &sink.commands()[0];
    // The fast path substitutes the current frame's dimensions, so the
    // golden role scales by unity despite the smaller tracked reference.
    assert_eq!(cmd[5], 0x4000_4000);
    assert_eq!(cmd[8], 319 | (239 << 16));
}

#[test]
fn encode_q_index_deltas_are_sign_magnitude() {
    let mut pic = inter_pic_320x240();
    pic.inter_frame = false;
    pic.luma_ac_q_index = 100;
    pic.luma_dc_q_index_delta = -5;
    pic.chroma_ac_q_index_delta = 3;
    pic.chroma_dc_q_index_delta = -1;
    pic.lf_ref_delta = [-63, 63, 0, -1];
    pic.lf_mode_delta = [-2, 2];

    let refs = ref_list();
    let state = Vp9EncodePicState {
        pic: &pic,
        ref_list: &refs,
        prev_frame: Vp9PrevFrameParams::default(),
        prev_frame_width: 320,
        prev_frame_height: 240,
        encoded_format: 0,
        encoded_bit_depth: 10,
        tx_mode: 0,
        use_dys_ref_surface: false,
        sse_enable: false,
        vdenc_pak_only_pass: false,
    };

    let hcp = Gen12Hcp::new(false);
    let mut sink = RecordingSink::new();
    hcp.add_vp9_pic_state_enc(Some(&mut sink), None, &state).unwrap();

    let cmd = &sink.commands()[0];
    assert_eq!(cmd[13] >> 16 & 0xff, 100);
    // 10-bit encode maps to bit depth minus 8 = 2.
    assert_eq!(cmd[3] >> 24 & 0xf, 2);
    // chroma ac 3, chroma dc -(1) -> 0x11, luma dc -(5) -> 0x15.
    assert_eq!(cmd[14], 3 | (0x11 << 8) | (0x15 << 16));
    // -63 -> 0x7f, 63 -> 0x3f, 0, -1 -> 0x41.
    assert_eq!(cmd[15], 0x7f | (0x3f << 8) | (0x41 << 24));
    assert_eq!(cmd[16], 0x42 | (0x02 << 8));
}

#[test]
fn decode_segment_state_programs_quant_scales() {
    let mut seg_data = [Vp9SegData::default(); VP9_SEGMENTS];
    seg_data[2] = Vp9SegData {
        segment_skipped: true,
        segment_reference: 2,
        segment_reference_enabled: true,
        filter_level: [[1, 2], [3, 4], [5, 6], [7, 8]],
        luma_dc_quant_scale: 0x1111,
        luma_ac_quant_scale: 0x2222,
        chroma_dc_quant_scale: 0x3333,
        chroma_ac_quant_scale: 0x4444,
    };

    let hcp = Gen12Hcp::new(true);
    let mut sink = RecordingSink::new();
    hcp.add_vp9_segment_state(
        Some(&mut sink),
        None,
        &Vp9SegmentParams {
            segment_id: 2,
            decode: Some(&seg_data),
            encode: None,
        },
    )
    .unwrap();

    let cmd = &sink.commands()[0];
    assert_eq!(cmd[1], 2);
    assert_eq!(cmd[2], 1 | (2 << 1) | (1 << 3));
    assert_eq!(cmd[3], 1 | (2 << 8) | (3 << 16) | (4 << 24));
    assert_eq!(cmd[4], 5 | (6 << 8) | (7 << 16) | (8 << 24));
    assert_eq!(cmd[5], 0x1111 | (0x2222 << 16));
    assert_eq!(cmd[6], 0x3333 | (0x4444 << 16));
}

#[test]
fn encode_segment_state_uses_sign_magnitude_deltas() {
    let mut seg_data = [Vp9EncSegData::default(); VP9_SEGMENTS];
    seg_data[0] = Vp9EncSegData {
        segment_skipped: false,
        segment_reference: 1,
        segment_reference_enabled: true,
        qindex_delta: -5,
        lf_level_delta: -3,
    };

    let hcp = Gen9Hcp::new(false);
    let mut sink = RecordingSink::new();
    hcp.add_vp9_segment_state(
        Some(&mut sink),
        None,
        &Vp9SegmentParams {
            segment_id: 0,
            decode: None,
            encode: Some(&seg_data),
        },
    )
    .unwrap();

    let cmd = &sink.commands()[0];
    // 9-bit sign/magnitude -5 -> 0x105; 7-bit -3 -> 0x43.
    assert_eq!(cmd[7], 0x105 | (0x43 << 16));
}

#[test]
fn segment_state_requires_matching_mode_data() {
    let hcp = Gen12Hcp::new(true);
    let mut sink = RecordingSink::new();
    let err = hcp
        .add_vp9_segment_state(
            Some(&mut sink),
            None,
            &Vp9SegmentParams {
                segment_id: 0,
                decode: None,
                encode: None,
            },
        )
        .unwrap_err();
    assert_eq!(err, HcpError::MissingParam("decode segment data"));
}

#[test]
fn dual_target_requires_a_buffer() {
    let pic = inter_pic_320x240();
    let refs = ref_list();
    let hcp = Gen12Hcp::new(true);

    let err = hcp
        .add_vp9_pic_state(None, None, &decode_state(&pic, &refs))
        .unwrap_err();
    assert_eq!(
        err,
        HcpError::InvalidParam("no valid buffer to add the command to")
    );
}
