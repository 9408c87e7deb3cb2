//! Slice-level geometry, low-delay classification, and the collocated
//! reference carry-forward.

mod common;

use common::RecordingSink;
use hcp_builder::gen12::Gen12Hcp;
use hcp_builder::generic::{self, CollocatedRefContext};
use hcp_builder::params::{
    BsdParams, HevcPicParams, HevcSliceParams, HevcSliceState, HevcSliceType, MAX_REF_FRAMES,
};
use hcp_cmds::gen12::Gen12;
use hcp_cmds::iface::{HcpCommand, SliceStateFields};

/// 64x64 picture, 8-pixel minimum CBs, 64-pixel CTBs: exactly one CTB.
fn pic_64x64_single_ctb() -> HevcPicParams {
    HevcPicParams {
        pic_width_in_min_cbs_y: 8,
        pic_height_in_min_cbs_y: 8,
        log2_min_luma_coding_block_size_minus3: 0,
        log2_diff_max_min_luma_coding_block_size: 3,
        ..Default::default()
    }
}

/// 64x64 picture with 8-pixel CTBs: 8 CTBs per row.
fn pic_64x64_small_ctb() -> HevcPicParams {
    HevcPicParams {
        pic_width_in_min_cbs_y: 8,
        pic_height_in_min_cbs_y: 8,
        ..Default::default()
    }
}

fn ref_mapping() -> [i8; MAX_REF_FRAMES] {
    let mut mapping = [-1i8; MAX_REF_FRAMES];
    mapping[0] = 0;
    mapping[3] = 2;
    mapping
}

#[test]
fn two_slice_decode_scenario() {
    // Slice 0 is an I slice with a (malformed) nonzero segment address; the
    // hardware still requires it to start at CTB (0, 0). Slice 1 is the last
    // slice, so its next-slice position is forced to (0, 0) as well.
    let pic = pic_64x64_single_ctb();
    assert_eq!(pic.width_in_ctbs(), 1);

    let slice1 = HevcSliceParams {
        slice_type: HevcSliceType::P,
        slice_segment_address: 1,
        ..Default::default()
    };
    let slice0 = HevcSliceParams {
        slice_type: HevcSliceType::I,
        slice_segment_address: 7,
        ..Default::default()
    };
    let mapping = ref_mapping();
    let mut ctx = CollocatedRefContext::new();

    let cmd0 = generic::decode_slice_state::<Gen12>(
        &HevcSliceState {
            pic: &pic,
            slice: &slice0,
            next_slice: Some(&slice1),
            slice_index: 0,
            last_slice: false,
            ref_idx_mapping: &mapping,
            data_buffer: None,
            data_buffer_offset: 0,
        },
        &mut ctx,
    )
    .unwrap();

    // First slice never reads its segment address for positioning.
    assert_eq!(cmd0.dwords()[1], 0);
    // Next slice start comes from slice 1's segment address: (1 % 1, 1 / 1).
    assert_eq!(cmd0.dwords()[2], 1 << 16);
    // An I slice is not marked low-delay.
    assert_eq!(cmd0.dwords()[4] >> 14 & 1, 0);

    let cmd1 = generic::decode_slice_state::<Gen12>(
        &HevcSliceState {
            pic: &pic,
            slice: &slice1,
            next_slice: None,
            slice_index: 1,
            last_slice: true,
            ref_idx_mapping: &mapping,
            data_buffer: None,
            data_buffer_offset: 0,
        },
        &mut ctx,
    )
    .unwrap();

    // Slice 1 derives its position from the segment address (0, 1), and the
    // last slice's next position is (0, 0).
    assert_eq!(cmd1.dwords()[1], 1 << 16);
    assert_eq!(cmd1.dwords()[2], 0);
    // P slice with all references at or before the current POC is low-delay.
    assert_eq!(cmd1.dwords()[4] >> 14 & 1, 1);
}

#[test]
fn non_first_slice_position_uses_width_in_ctbs() {
    let pic = pic_64x64_small_ctb();
    assert_eq!(pic.width_in_ctbs(), 8);

    let slice = HevcSliceParams {
        slice_type: HevcSliceType::I,
        slice_segment_address: 19,
        ..Default::default()
    };
    let mapping = ref_mapping();
    let mut ctx = CollocatedRefContext::new();

    let cmd = generic::decode_slice_state::<Gen12>(
        &HevcSliceState {
            pic: &pic,
            slice: &slice,
            next_slice: None,
            slice_index: 3,
            last_slice: true,
            ref_idx_mapping: &mapping,
            data_buffer: None,
            data_buffer_offset: 0,
        },
        &mut ctx,
    )
    .unwrap();

    // 19 = 2 * 8 + 3.
    assert_eq!(cmd.dwords()[1], 3 | (2 << 16));
}

#[test]
fn missing_next_slice_is_rejected() {
    let pic = pic_64x64_single_ctb();
    let slice = HevcSliceParams::default();
    let mapping = ref_mapping();
    let mut ctx = CollocatedRefContext::new();

    let err = generic::decode_slice_state::<Gen12>(
        &HevcSliceState {
            pic: &pic,
            slice: &slice,
            next_slice: None,
            slice_index: 0,
            last_slice: false,
            ref_idx_mapping: &mapping,
            data_buffer: None,
            data_buffer_offset: 0,
        },
        &mut ctx,
    )
    .unwrap_err();

    assert_eq!(
        err,
        hcp_builder::HcpError::MissingParam("next slice parameters")
    );
}

#[test]
fn decode_low_delay_cleared_by_future_reference() {
    let mut pic = pic_64x64_small_ctb();
    pic.curr_pic_order_cnt = 10;
    pic.pic_order_cnt_list[0] = 8;
    pic.pic_order_cnt_list[1] = 12; // lies in the future

    let mut slice = HevcSliceParams {
        slice_type: HevcSliceType::B,
        num_ref_idx_l0_active_minus1: 0,
        num_ref_idx_l1_active_minus1: 0,
        ..Default::default()
    };
    slice.ref_pic_list[0][0].frame_idx = 0;
    slice.ref_pic_list[1][0].frame_idx = 1;

    let mapping = ref_mapping();
    let mut ctx = CollocatedRefContext::new();
    let cmd = generic::decode_slice_state::<Gen12>(
        &HevcSliceState {
            pic: &pic,
            slice: &slice,
            next_slice: None,
            slice_index: 0,
            last_slice: true,
            ref_idx_mapping: &mapping,
            data_buffer: None,
            data_buffer_offset: 0,
        },
        &mut ctx,
    )
    .unwrap();

    assert_eq!(cmd.dwords()[4] >> 14 & 1, 0);
}

#[test]
fn encode_low_delay_requires_all_l0_before_current() {
    let mut pic = pic_64x64_small_ctb();
    pic.curr_pic_order_cnt = 10;
    pic.pic_order_cnt_list[0] = 8;
    pic.pic_order_cnt_list[1] = 6;

    let mut slice = HevcSliceParams {
        slice_type: HevcSliceType::P,
        num_ref_idx_l0_active_minus1: 1,
        ..Default::default()
    };
    slice.ref_pic_list[0][0].frame_idx = 0;
    slice.ref_pic_list[0][1].frame_idx = 1;

    let mapping = ref_mapping();
    let mut ctx = CollocatedRefContext::new();
    let cmd = generic::encode_slice_state::<Gen12>(
        &HevcSliceState {
            pic: &pic,
            slice: &slice,
            next_slice: None,
            slice_index: 0,
            last_slice: true,
            ref_idx_mapping: &mapping,
            data_buffer: None,
            data_buffer_offset: 0,
        },
        &mut ctx,
    )
    .unwrap();
    assert_eq!(cmd.dwords()[4] >> 14 & 1, 1);

    // A reference at the current POC breaks the all-precede condition.
    pic.pic_order_cnt_list[1] = 10;
    let mut ctx = CollocatedRefContext::new();
    let cmd = generic::encode_slice_state::<Gen12>(
        &HevcSliceState {
            pic: &pic,
            slice: &slice,
            next_slice: None,
            slice_index: 0,
            last_slice: true,
            ref_idx_mapping: &mapping,
            data_buffer: None,
            data_buffer_offset: 0,
        },
        &mut ctx,
    )
    .unwrap();
    assert_eq!(cmd.dwords()[4] >> 14 & 1, 0);
}

#[test]
fn collocated_state_carries_from_first_inter_slice() {
    let pic = pic_64x64_small_ctb();
    let mapping = ref_mapping();

    // Slice 0: intra, temporal MVP off.
    let slice0 = HevcSliceParams {
        slice_type: HevcSliceType::I,
        temporal_mvp_enabled: false,
        ..Default::default()
    };
    // Slice 1: inter with temporal MVP; collocated resolves through frame
    // index 3 to hardware slot 2.
    let mut slice1 = HevcSliceParams {
        slice_type: HevcSliceType::P,
        temporal_mvp_enabled: true,
        collocated_ref_idx: 0,
        collocated_from_l0: true,
        ..Default::default()
    };
    slice1.ref_pic_list[0][0].frame_idx = 3;
    // Slice 2: intra again, temporal MVP on.
    let slice2 = HevcSliceParams {
        slice_type: HevcSliceType::I,
        temporal_mvp_enabled: true,
        ..Default::default()
    };

    fn state<'a>(
        pic: &'a HevcPicParams,
        mapping: &'a [i8; MAX_REF_FRAMES],
        slice: &'a HevcSliceParams,
        index: u32,
        last: bool,
        next: Option<&'a HevcSliceParams>,
    ) -> HevcSliceState<'a> {
        HevcSliceState {
            pic,
            slice,
            next_slice: next,
            slice_index: index,
            last_slice: last,
            ref_idx_mapping: mapping,
            data_buffer: None,
            data_buffer_offset: 0,
        }
    }

    let mut ctx = CollocatedRefContext::new();

    let cmd0 = generic::decode_slice_state::<Gen12>(
        &state(&pic, &mapping, &slice0, 0, false, Some(&slice1)),
        &mut ctx,
    )
    .unwrap();
    assert_eq!(cmd0.collocated_ref_idx(), 0);

    let cmd1 = generic::decode_slice_state::<Gen12>(
        &state(&pic, &mapping, &slice1, 1, false, Some(&slice2)),
        &mut ctx,
    )
    .unwrap();
    assert_eq!(cmd1.collocated_ref_idx(), 2);
    assert!(cmd1.collocated_from_l0());

    // The intra slice reuses slice 1's collocated slot and list selection,
    // not its own naive computation.
    let cmd2 = generic::decode_slice_state::<Gen12>(
        &state(&pic, &mapping, &slice2, 2, true, None),
        &mut ctx,
    )
    .unwrap();
    assert_eq!(cmd2.collocated_ref_idx(), 2);
    assert!(cmd2.collocated_from_l0());

    // A new picture (slice index 0) clears the carried state.
    let cmd_new = generic::decode_slice_state::<Gen12>(
        &state(&pic, &mapping, &slice2, 0, true, None),
        &mut ctx,
    )
    .unwrap();
    assert_eq!(cmd_new.collocated_ref_idx(), 0);
    assert!(!cmd_new.collocated_from_l0());
}

#[test]
fn unmapped_collocated_reference_is_invalid() {
    let pic = pic_64x64_small_ctb();
    let mapping = [-1i8; MAX_REF_FRAMES];

    let mut slice = HevcSliceParams {
        slice_type: HevcSliceType::P,
        temporal_mvp_enabled: true,
        ..Default::default()
    };
    slice.ref_pic_list[0][0].frame_idx = 5;

    let mut ctx = CollocatedRefContext::new();
    let err = generic::decode_slice_state::<Gen12>(
        &HevcSliceState {
            pic: &pic,
            slice: &slice,
            next_slice: None,
            slice_index: 0,
            last_slice: true,
            ref_idx_mapping: &mapping,
            data_buffer: None,
            data_buffer_offset: 0,
        },
        &mut ctx,
    )
    .unwrap_err();

    assert_eq!(
        err,
        hcp_builder::HcpError::InvalidParam("collocated reference not mapped")
    );
}

#[test]
fn decode_slice_and_bsd_append_in_order() {
    let pic = pic_64x64_single_ctb();
    let mapping = ref_mapping();
    let hcp = Gen12Hcp::new(true);
    let mut sink = RecordingSink::new();
    let mut ctx = CollocatedRefContext::new();

    let slice1 = HevcSliceParams {
        slice_type: HevcSliceType::P,
        slice_segment_address: 1,
        ..Default::default()
    };
    let slice0 = HevcSliceParams {
        slice_type: HevcSliceType::I,
        ..Default::default()
    };

    hcp.add_decode_slice_state(
        &mut sink,
        &HevcSliceState {
            pic: &pic,
            slice: &slice0,
            next_slice: Some(&slice1),
            slice_index: 0,
            last_slice: false,
            ref_idx_mapping: &mapping,
            data_buffer: None,
            data_buffer_offset: 0,
        },
        &mut ctx,
    )
    .unwrap();
    hcp.add_bsd_object(
        &mut sink,
        &BsdParams {
            data_length: 100,
            data_start_offset: 0,
        },
    )
    .unwrap();
    hcp.add_decode_slice_state(
        &mut sink,
        &HevcSliceState {
            pic: &pic,
            slice: &slice1,
            next_slice: None,
            slice_index: 1,
            last_slice: true,
            ref_idx_mapping: &mapping,
            data_buffer: None,
            data_buffer_offset: 0,
        },
        &mut ctx,
    )
    .unwrap();
    hcp.add_bsd_object(
        &mut sink,
        &BsdParams {
            data_length: 60,
            data_start_offset: 100,
        },
    )
    .unwrap();

    assert_eq!(sink.append_sizes, vec![52, 12, 52, 12]);
    let commands = sink.commands();
    assert_eq!(commands[0][0], 0x7394_000b);
    assert_eq!(commands[1][0], 0x73a0_0001);
    assert_eq!(commands[1][1], 100);
    assert_eq!(commands[3][2], 100);
}
