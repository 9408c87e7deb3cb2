//! Byte-exact golden vectors for representative commands, plus append and
//! relocation bookkeeping through the sink boundary.

mod common;

use common::RecordingSink;
use hcp_builder::gen12::Gen12Hcp;
use pretty_assertions::assert_eq;
use hcp_builder::gen9::Gen9Hcp;
use hcp_builder::params::{
    ChromaFormat, CodecMode, HevcIqMatrix, IndObjBaseAddrParams, IndObjParams, PixelFormat,
    QmParams, Standard, Surface, SurfaceId, SurfaceParams,
};
use hcp_builder::sink::ResourceId;
use hcp_builder::{HcpError, SinkError};

fn nv12_surface() -> Surface {
    Surface {
        pitch: 256,
        format: PixelFormat::Nv12,
        u_plane_y_offset: 100,
    }
}

fn decode_surface_params<'a>(surface: &'a Surface) -> SurfaceParams<'a> {
    SurfaceParams {
        mode: CodecMode::HevcDecode,
        surface_id: SurfaceId::DecodedPicture,
        surface: Some(surface),
        bit_depth_luma_minus8: 0,
        bit_depth_chroma_minus8: 0,
        chroma_format: ChromaFormat::Yuv420,
        uv_plane_alignment: 0,
        recon_surface_height: 0,
    }
}

#[test]
fn gen12_decode_surface_state_golden_bytes() {
    let surface = nv12_surface();
    let hcp = Gen12Hcp::new(true);
    let mut sink = RecordingSink::new();

    hcp.add_decode_surface_state(&mut sink, &decode_surface_params(&surface))
        .unwrap();

    // Pitch 256 -> 255; chroma offset 100 aligned up to 104; format
    // PLANAR_420_8 (4) in bits 27..31 of DW2.
    let expected: Vec<u8> = [0x7381_0003u32, 0x0000_00ff, 0x2000_0068, 0, 0]
        .iter()
        .flat_map(|dw| dw.to_le_bytes())
        .collect();
    assert_eq!(sink.data, expected);
}

#[test]
fn gen9_surface_state_is_three_dwords() {
    let surface = nv12_surface();
    let mut params = decode_surface_params(&surface);
    params.mode = CodecMode::HevcDecode;
    let hcp = Gen9Hcp::new(true);
    let mut sink = RecordingSink::new();

    hcp.add_decode_surface_state(&mut sink, &params).unwrap();

    assert_eq!(sink.append_sizes, vec![12]);
    let cmd = &sink.commands()[0];
    assert_eq!(cmd[0], 0x7381_0001);
    // Gen9 places the 4-bit format at bits 28..31.
    assert_eq!(cmd[2], 0x68 | (4 << 28));
}

#[test]
fn encode_recon_ayuv_uses_quarter_pitch() {
    let surface = Surface {
        pitch: 1024,
        format: PixelFormat::Ayuv,
        u_plane_y_offset: 64,
    };
    let params = SurfaceParams {
        mode: CodecMode::HevcEncode,
        surface_id: SurfaceId::DecodedPicture,
        surface: Some(&surface),
        bit_depth_luma_minus8: 0,
        bit_depth_chroma_minus8: 0,
        chroma_format: ChromaFormat::Yuv444,
        uv_plane_alignment: 0,
        recon_surface_height: 240,
    };
    let hcp = Gen12Hcp::new(false);
    let mut sink = RecordingSink::new();

    hcp.add_encode_surface_state(&mut sink, &params).unwrap();

    let cmd = &sink.commands()[0];
    assert_eq!(cmd[1] & 0x1ffff, 1024 / 4 - 1);
    // AYUV variant chroma planes are addressed from the recon height.
    assert_eq!(cmd[2] & 0x7fff, 240);
    assert_eq!(cmd[3] >> 16, 480);
}

#[test]
fn missing_surface_is_rejected_before_any_append() {
    let binding = nv12_surface();
    let mut params = decode_surface_params(&binding);
    params.surface = None;
    let hcp = Gen12Hcp::new(true);
    let mut sink = RecordingSink::new();

    let err = hcp.add_decode_surface_state(&mut sink, &params).unwrap_err();
    assert_eq!(err, HcpError::MissingParam("surface"));
    assert!(sink.data.is_empty());
}

#[test]
fn qm_state_emits_twenty_commands() {
    let matrix = HevcIqMatrix::default();
    let hcp = Gen12Hcp::new(true);
    let mut sink = RecordingSink::new();

    hcp.add_qm_state(
        &mut sink,
        &QmParams {
            standard: Standard::Hevc,
            matrix: Some(&matrix),
        },
    )
    .unwrap();

    assert_eq!(sink.append_sizes.len(), 20);
    assert!(sink.append_sizes.iter().all(|&size| size == 72));

    let commands = sink.commands();
    // First combination: 4x4 intra luma, flat matrix of 16s in the first
    // four table dwords only.
    assert_eq!(commands[0][1], 0);
    assert_eq!(commands[0][2], 0x1010_1010);
    assert_eq!(commands[0][5], 0x1010_1010);
    assert_eq!(commands[0][6], 0);
    // Last two commands are the 32x32 luma lists with their DC values.
    assert_eq!(commands[18][1], (3 << 1) | (16 << 5));
    assert_eq!(commands[19][1], 1 | (3 << 1) | (16 << 5));
}

#[test]
fn qm_state_requires_hevc() {
    let hcp = Gen12Hcp::new(true);
    let mut sink = RecordingSink::new();
    let err = hcp
        .add_qm_state(
            &mut sink,
            &QmParams {
                standard: Standard::Vp9,
                matrix: None,
            },
        )
        .unwrap_err();
    assert_eq!(err, HcpError::InvalidParam("QM state requires HEVC"));
}

#[test]
fn qm_state_fails_cleanly_when_buffer_runs_out() {
    let matrix = HevcIqMatrix::default();
    let hcp = Gen12Hcp::new(true);
    // Room for two commands only.
    let mut sink = RecordingSink::with_capacity(150);

    let err = hcp
        .add_qm_state(
            &mut sink,
            &QmParams {
                standard: Standard::Hevc,
                matrix: Some(&matrix),
            },
        )
        .unwrap_err();
    assert_eq!(err, HcpError::Sink(SinkError::OutOfSpace));
    assert_eq!(sink.append_sizes.len(), 2);
}

#[test]
fn decode_ind_obj_registers_bitstream_with_upper_bound() {
    let hcp = Gen12Hcp::new(true);
    let mut sink = RecordingSink::new();

    hcp.add_ind_obj_base_addr(
        &mut sink,
        &IndObjBaseAddrParams {
            mode: CodecMode::HevcDecode,
            buffers: IndObjParams {
                data_buffer: Some(ResourceId(7)),
                data_offset: 0x1000,
                data_size: 0x4000,
                ..Default::default()
            },
        },
    )
    .unwrap();

    assert_eq!(sink.append_sizes, vec![116]);
    assert_eq!(sink.relocs.len(), 1);
    let reloc = &sink.relocs[0];
    assert_eq!(reloc.resource, ResourceId(7));
    assert_eq!(reloc.location_dw, 1);
    assert_eq!(reloc.upper_bound_dw_offset, Some(3));

    // The sentinel the sink stamped must be visible in the appended bytes.
    let cmd = &sink.commands()[0];
    assert_eq!(cmd[1], 0xadd0_0007);
    assert_eq!(cmd[4], 0xadd8_4000);
}

#[test]
fn decode_ind_obj_requires_data_buffer() {
    let hcp = Gen12Hcp::new(true);
    let mut sink = RecordingSink::new();

    let err = hcp
        .add_ind_obj_base_addr(
            &mut sink,
            &IndObjBaseAddrParams {
                mode: CodecMode::HevcDecode,
                buffers: IndObjParams::default(),
            },
        )
        .unwrap_err();
    assert_eq!(err, HcpError::MissingParam("bitstream data buffer"));
    assert!(sink.data.is_empty());
}

#[test]
fn palette_initializer_packs_entries_and_count() {
    let hcp = Gen12Hcp::new(true);
    let mut sink = RecordingSink::new();

    hcp.add_palette_initializer_state(&mut sink, &[(0x100, 0x200, 0x300), (0x400, 0x500, 0x600)])
        .unwrap();

    assert_eq!(sink.append_sizes, vec![776]);
    let cmd = &sink.commands()[0];
    assert_eq!(cmd[1], 2);
    assert_eq!(cmd[2], 0x0200_0100);
    assert_eq!(cmd[3], 0x0400_0300);
    assert_eq!(cmd[4], 0x0600_0500);

    let err = hcp
        .add_palette_initializer_state(&mut sink, &[(0, 0, 0); 129])
        .unwrap_err();
    assert_eq!(err, HcpError::InvalidParam("palette entry count"));
}

#[test]
fn encode_ind_obj_registers_only_supplied_buffers() {
    let hcp = Gen12Hcp::new(false);
    let mut sink = RecordingSink::new();

    hcp.add_ind_obj_base_addr(
        &mut sink,
        &IndObjBaseAddrParams {
            mode: CodecMode::HevcEncode,
            buffers: IndObjParams {
                mv_object_buffer: Some(ResourceId(1)),
                mv_object_size: 100, // rounded up to 4096
                pak_base_object_buffer: Some(ResourceId(2)),
                pak_base_object_size: 0x1800, // rounded down to 4096
                ..Default::default()
            },
        },
    )
    .unwrap();

    assert_eq!(sink.relocs.len(), 2);
    assert_eq!(sink.relocs[0].location_dw, 6);
    assert_eq!(sink.relocs[0].size, 0x1000);
    assert_eq!(sink.relocs[1].location_dw, 9);
    assert_eq!(sink.relocs[1].size, 0x1000);
    assert_eq!(sink.relocs[1].upper_bound_dw_offset, Some(3));
    assert!(sink.relocs[1].writable);
}
