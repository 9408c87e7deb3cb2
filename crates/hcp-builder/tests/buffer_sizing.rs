//! Worst-case command sizing and internal scratch-buffer formulas.

mod common;

use common::RecordingSink;
use hcp_builder::gen12::Gen12Hcp;
use hcp_builder::gen9::Gen9Hcp;
use hcp_builder::params::{
    ChromaFormat, CodecMode, HevcIqMatrix, HevcPicParams, IndObjBaseAddrParams, IndObjParams,
    QmParams, Standard, TileParams,
};
use hcp_builder::sink::ResourceId;
use hcp_builder::sizing::{BufferSizeParams, InternalBuffer, ReallocParams, RowstoreParams};
use hcp_builder::HcpError;

const HEVC_BUFFERS: [InternalBuffer; 13] = [
    InternalBuffer::DeblockLine,
    InternalBuffer::DeblockTileLine,
    InternalBuffer::DeblockTileColumn,
    InternalBuffer::MvUpRightColumn,
    InternalBuffer::MetadataLine,
    InternalBuffer::MetadataTileLine,
    InternalBuffer::MetadataTileColumn,
    InternalBuffer::SaoLine,
    InternalBuffer::SaoTileLine,
    InternalBuffer::SaoTileColumn,
    InternalBuffer::IntraPredUpRightColumn,
    InternalBuffer::IntraPredLeftReconColumn,
    InternalBuffer::CurrentMvTemporal,
];

fn size_params(width: u32, height: u32) -> BufferSizeParams {
    BufferSizeParams {
        max_bit_depth: 8,
        chroma_format: ChromaFormat::Yuv420,
        ctb_log2_size_y: 6,
        pic_width: width,
        pic_height: height,
        max_frame_size: 1 << 20,
    }
}

#[test]
fn hevc_buffer_sizes_grow_with_picture_dimensions() {
    let hcp = Gen12Hcp::new(true);
    for buffer in HEVC_BUFFERS {
        let mut previous = 0;
        for (width, height) in [(64, 64), (1920, 1088), (3840, 2160), (8192, 4320)] {
            let size = hcp.hevc_buffer_size(buffer, &size_params(width, height)).unwrap();
            assert!(
                size >= previous,
                "{buffer:?} shrank from {previous} at {width}x{height}"
            );
            previous = size;
        }
    }
}

#[test]
fn hevc_buffer_sizes_grow_with_bit_depth() {
    let hcp = Gen12Hcp::new(true);
    for buffer in [
        InternalBuffer::DeblockLine,
        InternalBuffer::DeblockTileColumn,
        InternalBuffer::SaoLine,
    ] {
        let mut params = size_params(1920, 1088);
        let base = hcp.hevc_buffer_size(buffer, &params).unwrap();
        params.max_bit_depth = 10;
        let deep = hcp.hevc_buffer_size(buffer, &params).unwrap();
        assert!(deep >= base, "{buffer:?}");
    }
}

#[test]
fn vp9_buffer_sizes_reject_unsupported_chroma() {
    let hcp = Gen12Hcp::new(true);
    let mut params = size_params(30, 17); // superblock units
    params.chroma_format = ChromaFormat::Yuv422;
    let err = hcp
        .vp9_buffer_size(InternalBuffer::DeblockLine, &params)
        .unwrap_err();
    assert_eq!(err, HcpError::InvalidParam("chroma format"));
}

#[test]
fn vp9_buffer_sizes_use_superblock_dimensions() {
    let hcp = Gen12Hcp::new(true);
    let params = size_params(30, 17);

    assert_eq!(
        hcp.vp9_buffer_size(InternalBuffer::DeblockLine, &params).unwrap(),
        30 * 18 * 64
    );
    assert_eq!(
        hcp.vp9_buffer_size(InternalBuffer::DeblockTileColumn, &params).unwrap(),
        17 * 17 * 64
    );
    assert_eq!(
        hcp.vp9_buffer_size(InternalBuffer::CollocatedMvTemporal, &params).unwrap(),
        30 * 17 * 9 * 64
    );
    assert_eq!(
        hcp.vp9_buffer_size(InternalBuffer::SegmentId, &params).unwrap(),
        30 * 17 * 64
    );
    assert_eq!(
        hcp.vp9_buffer_size(InternalBuffer::HvdLine, &params).unwrap(),
        30 * 64
    );
}

#[test]
fn gen9_has_no_scalable_column_stores() {
    let gen9 = Gen9Hcp::new(true);
    let gen12 = Gen12Hcp::new(true);
    let params = size_params(1920, 1088);

    assert!(gen9
        .hevc_buffer_size(InternalBuffer::IntraPredUpRightColumn, &params)
        .is_err());
    assert!(gen12
        .hevc_buffer_size(InternalBuffer::IntraPredUpRightColumn, &params)
        .is_ok());
}

#[test]
fn realloc_triggers_only_on_relevant_dimension_growth() {
    let hcp = Gen12Hcp::new(true);
    let base = ReallocParams {
        max_bit_depth: 8,
        chroma_format: ChromaFormat::Yuv420,
        pic_width: 1920,
        pic_height: 1088,
        pic_width_allocated: 1920,
        pic_height_allocated: 1088,
        ctb_log2_size_y: 5,
        ctb_log2_size_y_max: 6,
        frame_size: 0,
        frame_size_allocated: 0,
    };

    // Equal dimensions never trigger a reallocation.
    for buffer in HEVC_BUFFERS {
        assert!(!hcp.hevc_realloc_needed(buffer, &base).unwrap(), "{buffer:?}");
    }

    // Width growth affects line buffers but not column stores.
    let wider = ReallocParams {
        pic_width: 2048,
        ..base
    };
    assert!(hcp
        .hevc_realloc_needed(InternalBuffer::DeblockLine, &wider)
        .unwrap());
    assert!(hcp
        .hevc_realloc_needed(InternalBuffer::MetadataLine, &wider)
        .unwrap());
    assert!(!hcp
        .hevc_realloc_needed(InternalBuffer::DeblockTileColumn, &wider)
        .unwrap());

    // Height growth affects column stores but not line buffers.
    let taller = ReallocParams {
        pic_height: 1200,
        ..base
    };
    assert!(hcp
        .hevc_realloc_needed(InternalBuffer::DeblockTileColumn, &taller)
        .unwrap());
    assert!(!hcp
        .hevc_realloc_needed(InternalBuffer::DeblockLine, &taller)
        .unwrap());

    // The MV temporal buffer depends on both dimensions.
    assert!(hcp
        .hevc_realloc_needed(InternalBuffer::CurrentMvTemporal, &wider)
        .unwrap());
    assert!(hcp
        .hevc_realloc_needed(InternalBuffer::CurrentMvTemporal, &taller)
        .unwrap());

    // An LCU size first seen at 64x64 regrows the metadata stores.
    let bigger_lcu = ReallocParams {
        ctb_log2_size_y: 6,
        ctb_log2_size_y_max: 5,
        ..base
    };
    assert!(hcp
        .hevc_realloc_needed(InternalBuffer::MetadataLine, &bigger_lcu)
        .unwrap());
}

#[test]
fn vp9_realloc_is_grow_only() {
    let hcp = Gen12Hcp::new(true);
    let shrunk = ReallocParams {
        pic_width: 10,
        pic_height: 10,
        pic_width_allocated: 30,
        pic_height_allocated: 17,
        ..Default::default()
    };
    for buffer in [
        InternalBuffer::DeblockLine,
        InternalBuffer::MetadataTileColumn,
        InternalBuffer::SegmentId,
        InternalBuffer::CollocatedMvTemporal,
    ] {
        assert!(!hcp.vp9_realloc_needed(buffer, &shrunk).unwrap(), "{buffer:?}");
    }

    let grown = ReallocParams {
        pic_width: 31,
        pic_height: 18,
        pic_width_allocated: 30,
        pic_height_allocated: 17,
        ..Default::default()
    };
    assert!(hcp.vp9_realloc_needed(InternalBuffer::SegmentId, &grown).unwrap());
}

#[test]
fn state_command_estimate_covers_built_commands() {
    let hcp = Gen12Hcp::new(true);
    let mut sink = RecordingSink::new();

    hcp.add_ind_obj_base_addr(
        &mut sink,
        &IndObjBaseAddrParams {
            mode: CodecMode::HevcDecode,
            buffers: IndObjParams {
                data_buffer: Some(ResourceId(1)),
                data_offset: 0,
                data_size: 0x1000,
                ..Default::default()
            },
        },
    )
    .unwrap();

    let matrix = HevcIqMatrix::default();
    hcp.add_qm_state(
        &mut sink,
        &QmParams {
            standard: Standard::Hevc,
            matrix: Some(&matrix),
        },
    )
    .unwrap();

    let pic = HevcPicParams {
        pic_width_in_min_cbs_y: 8,
        pic_height_in_min_cbs_y: 8,
        num_tile_columns_minus1: 1,
        num_tile_rows_minus1: 1,
        tiles_enabled: true,
        ..Default::default()
    };
    hcp.add_decode_pic_state(&mut sink, &pic, None).unwrap();
    hcp.add_tile_state(
        &mut sink,
        &TileParams {
            pic: &pic,
            tile_col_widths: &[1; 20],
            tile_row_heights: &[1; 22],
        },
    )
    .unwrap();

    let estimate = hcp.state_command_size(CodecMode::HevcDecode, false);
    assert!(estimate.commands as usize >= sink.data.len());
    assert!(estimate.patch_entries as usize >= sink.relocs.len());
}

#[test]
fn estimates_are_nonzero_for_every_mode() {
    let gen12 = Gen12Hcp::new(true);
    let gen9 = Gen9Hcp::new(true);

    for mode in [
        CodecMode::HevcDecode,
        CodecMode::HevcEncode,
        CodecMode::Vp9Decode,
        CodecMode::Vp9Encode,
    ] {
        assert!(gen12.state_command_size(mode, false).commands > 0);
        assert!(gen12.state_command_size(mode, true).commands > 0);
        assert!(gen9.state_command_size(mode).commands > 0);
    }

    // Clear VP9 decode has no slice-level commands.
    assert_eq!(
        gen12.primitive_command_size(CodecMode::Vp9Decode, false).commands,
        0
    );
    assert!(gen12.primitive_command_size(CodecMode::Vp9Decode, true).commands > 0);
    assert!(gen12.primitive_command_size(CodecMode::HevcDecode, false).commands > 0);
    assert!(gen9.primitive_command_size(CodecMode::HevcEncode, false).commands > 0);
}

#[test]
fn gen12_rowstore_disabled_above_eight_k() {
    let mut hcp = Gen12Hcp::new(true);
    hcp.set_rowstore_caching_offsets(&RowstoreParams {
        mode: CodecMode::HevcDecode,
        pic_width: 1920,
        bit_depth_minus8: 0,
        chroma_format: ChromaFormat::Yuv420,
        lcu_size: 64,
    });
    assert!(hcp.hevc_dat_rowstore().enabled);
    assert!(hcp.hevc_df_rowstore().enabled);
    // 4:2:0 with LCU 32/64 selects the second configuration row.
    assert_eq!(hcp.hevc_df_rowstore().address, 256);
    assert_eq!(hcp.hevc_sao_rowstore().address, 1280);

    hcp.set_rowstore_caching_offsets(&RowstoreParams {
        mode: CodecMode::HevcDecode,
        pic_width: 8193,
        bit_depth_minus8: 0,
        chroma_format: ChromaFormat::Yuv420,
        lcu_size: 64,
    });
    assert!(!hcp.hevc_dat_rowstore().enabled);
    assert!(!hcp.hevc_df_rowstore().enabled);
    assert!(!hcp.hevc_sao_rowstore().enabled);
}

#[test]
fn gen12_vp9_rowstore_indexes_by_format_and_width() {
    let mut hcp = Gen12Hcp::new(true);
    hcp.set_rowstore_caching_offsets(&RowstoreParams {
        mode: CodecMode::Vp9Decode,
        pic_width: 1920,
        bit_depth_minus8: 0,
        chroma_format: ChromaFormat::Yuv420,
        lcu_size: 64,
    });
    // Index 0: all three caches enabled.
    assert!(hcp.vp9_hvd_rowstore().enabled);
    assert!(hcp.vp9_dat_rowstore().enabled);
    assert_eq!(hcp.vp9_dat_rowstore().address, 64);
    assert!(hcp.vp9_df_rowstore().enabled);
    assert_eq!(hcp.vp9_df_rowstore().address, 384);
}
