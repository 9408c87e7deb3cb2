//! Shared types for command-buffer and scratch-buffer size estimation.

use crate::error::{HcpError, Result};
use crate::params::ChromaFormat;

/// GPU cache line granularity for scratch buffer sizing.
pub const CACHELINE_SIZE: u32 = 64;

/// Worst-case CU/TU info per LCU in the CABAC streamout (18+4+4 lines).
pub const WORST_CASE_LCU_CU_TU_INFO: u32 = 26 * CACHELINE_SIZE;
/// Range-extension worst case (27+4+4 lines).
pub const WORST_CASE_LCU_CU_TU_INFO_REXT: u32 = 35 * CACHELINE_SIZE;

/// Internal hardware scratch buffers whose sizes this crate computes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InternalBuffer {
    /// Deblocking filter line buffer.
    DeblockLine,
    /// Deblocking filter tile line buffer.
    DeblockTileLine,
    /// Deblocking filter tile column buffer.
    DeblockTileColumn,
    /// Motion vector upper-right column store.
    MvUpRightColumn,
    /// Metadata line buffer.
    MetadataLine,
    /// Metadata tile line buffer.
    MetadataTileLine,
    /// Metadata tile column buffer.
    MetadataTileColumn,
    /// SAO line buffer.
    SaoLine,
    /// SAO tile line buffer.
    SaoTileLine,
    /// SAO tile column buffer.
    SaoTileColumn,
    /// Intra prediction upper-right column store.
    IntraPredUpRightColumn,
    /// Intra prediction left reconstruction column store.
    IntraPredLeftReconColumn,
    /// Current picture motion vector temporal buffer.
    CurrentMvTemporal,
    /// Collocated picture motion vector temporal buffer (VP9).
    CollocatedMvTemporal,
    /// CABAC streamout buffer.
    CabacStreamout,
    /// VP9 segment id buffer.
    SegmentId,
    /// VP9 HVD line row store.
    HvdLine,
    /// VP9 HVD tile row store.
    HvdTile,
}

/// Inputs to a scratch-buffer size query. HEVC passes picture dimensions in
/// pixels; VP9 passes them in superblocks.
#[derive(Clone, Copy, Debug, Default)]
pub struct BufferSizeParams {
    pub max_bit_depth: u8,
    pub chroma_format: crate::params::ChromaFormat,
    pub ctb_log2_size_y: u32,
    pub pic_width: u32,
    pub pic_height: u32,
    pub max_frame_size: u32,
}

/// Inputs to a grow-only reallocation decision.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReallocParams {
    pub max_bit_depth: u8,
    pub chroma_format: crate::params::ChromaFormat,
    pub pic_width: u32,
    pub pic_height: u32,
    pub pic_width_allocated: u32,
    pub pic_height_allocated: u32,
    pub ctb_log2_size_y: u32,
    pub ctb_log2_size_y_max: u32,
    pub frame_size: u32,
    pub frame_size_allocated: u32,
}

/// Worst-case byte and patch-entry counts for a command sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CommandSizes {
    pub commands: u32,
    pub patch_entries: u32,
}

/// Row-store scratch buffer cache state for one buffer class.
#[derive(Clone, Copy, Debug, Default)]
pub struct RowstoreCache {
    pub supported: bool,
    pub enabled: bool,
    pub address: u32,
}

/// Row-store policy inputs, gathered once per stream configuration.
#[derive(Clone, Copy, Debug)]
pub struct RowstoreParams {
    pub mode: crate::params::CodecMode,
    pub pic_width: u32,
    pub bit_depth_minus8: u8,
    pub chroma_format: crate::params::ChromaFormat,
    /// LCU edge size in pixels (HEVC only).
    pub lcu_size: u8,
}

pub(crate) fn align_to_cacheline(size: u32) -> u32 {
    size.div_ceil(CACHELINE_SIZE) * CACHELINE_SIZE
}

/// Closed-form HEVC scratch buffer sizes. `scalable_columns` gates the
/// multi-pipe column stores that exist from gen11 onwards.
pub(crate) fn hevc_scratch_size(
    buffer: InternalBuffer,
    params: &BufferSizeParams,
    scalable_columns: bool,
) -> Result<u32> {
    // The smallest LCU yields the maximum dimensions in CTBs.
    let width_in_ctb = params.pic_width.div_ceil(16);
    let height_in_ctb = params.pic_height.div_ceil(16);
    let bit_depth_factor: u32 = if params.max_bit_depth > 8 { 2 } else { 1 };

    if matches!(
        buffer,
        InternalBuffer::IntraPredUpRightColumn | InternalBuffer::IntraPredLeftReconColumn
    ) && !scalable_columns
    {
        return Err(HcpError::InvalidParam("buffer type"));
    }

    let size = match buffer {
        InternalBuffer::DeblockLine | InternalBuffer::DeblockTileLine => {
            // 4x4 units per LCU column; 4:4:4 stores half again as much.
            let num_base_units = 1u32 << (params.ctb_log2_size_y - 2);
            let numerator = if params.chroma_format == ChromaFormat::Yuv444 {
                3 * num_base_units * 128 * bit_depth_factor
            } else {
                2 * num_base_units * 128 * bit_depth_factor
            };
            let row_store_lcu = (numerator + 511) / 512;
            row_store_lcu * CACHELINE_SIZE * width_in_ctb
        }
        InternalBuffer::DeblockTileColumn => {
            let num_base_units = 1u32 << (params.ctb_log2_size_y - 2);
            let numerator = if params.chroma_format == ChromaFormat::Yuv420 {
                2 * num_base_units * 128 * bit_depth_factor
            } else {
                3 * num_base_units * 128 * bit_depth_factor
            };
            let col_store_lcu = (numerator + 3 * 128 * bit_depth_factor + 511) / 512;
            col_store_lcu * CACHELINE_SIZE * height_in_ctb
        }
        InternalBuffer::MvUpRightColumn | InternalBuffer::MetadataTileColumn => {
            let col_store_lcu = if params.ctb_log2_size_y == 6 { 2 } else { 1 };
            col_store_lcu * CACHELINE_SIZE * height_in_ctb
        }
        InternalBuffer::MetadataLine | InternalBuffer::MetadataTileLine => {
            let row_store_lcu = if params.ctb_log2_size_y == 6 { 2 } else { 1 };
            row_store_lcu * CACHELINE_SIZE * width_in_ctb
        }
        InternalBuffer::IntraPredUpRightColumn | InternalBuffer::IntraPredLeftReconColumn => {
            // [bit depth 8 / deeper][LCU 16/32/64]
            let table: [[u32; 3]; 2] = if params.chroma_format == ChromaFormat::Yuv422
                || params.chroma_format == ChromaFormat::Yuv444
            {
                [[1, 2, 3], [2, 3, 6]]
            } else {
                [[1, 1, 2], [1, 2, 4]]
            };
            let depth_index = usize::from(params.max_bit_depth != 8);
            let lcu_index = (params.ctb_log2_size_y - 4) as usize;
            table[depth_index][lcu_index] * CACHELINE_SIZE * height_in_ctb
        }
        InternalBuffer::SaoLine | InternalBuffer::SaoTileLine => {
            let table: [[u32; 3]; 2] = if params.chroma_format == ChromaFormat::Yuv420
                || params.chroma_format == ChromaFormat::Yuv422
            {
                [[2, 3, 5], [2, 3, 5]]
            } else {
                [[2, 4, 7], [3, 4, 8]]
            };
            let depth_index = usize::from(params.max_bit_depth != 8);
            let lcu_index = (params.ctb_log2_size_y - 4) as usize;
            table[depth_index][lcu_index] * CACHELINE_SIZE * width_in_ctb
        }
        InternalBuffer::SaoTileColumn => {
            // [chroma format 420/422/444][LCU 16/32/64]
            let table: [[u32; 3]; 3] = [[4, 5, 9], [5, 7, 12], [5, 7, 12]];
            if params.chroma_format == ChromaFormat::Monochrome {
                return Err(HcpError::InvalidParam("chroma format"));
            }
            let format_index = params.chroma_format.idc() as usize - 1;
            let lcu_index = (params.ctb_log2_size_y - 4) as usize;
            table[format_index][lcu_index] * CACHELINE_SIZE * height_in_ctb
        }
        InternalBuffer::CurrentMvTemporal => {
            let mvt =
                (params.pic_width.div_ceil(64) * params.pic_height.div_ceil(16) + 1) & !1u32;
            let mvtb =
                (params.pic_width.div_ceil(32) * params.pic_height.div_ceil(32) + 1) & !1u32;
            mvt.max(mvtb) * CACHELINE_SIZE
        }
        InternalBuffer::CabacStreamout => {
            // LCU count times worst-case CU/TU info, one alignment byte per
            // LCU, plus three times the bitstream size.
            let per_lcu =
                if params.chroma_format == ChromaFormat::Yuv420 && params.max_bit_depth == 8 {
                    WORST_CASE_LCU_CU_TU_INFO
                } else {
                    WORST_CASE_LCU_CU_TU_INFO_REXT
                };
            align_to_cacheline(
                width_in_ctb * height_in_ctb * per_lcu
                    + width_in_ctb * height_in_ctb
                    + params.max_frame_size * 3,
            )
        }
        _ => return Err(HcpError::InvalidParam("buffer type")),
    };

    Ok(size)
}

/// Closed-form VP9 scratch buffer sizes. Dimensions are in superblocks;
/// only 4:2:0 and 4:4:4 are defined.
pub(crate) fn vp9_scratch_size(
    buffer: InternalBuffer,
    params: &BufferSizeParams,
    scalable_columns: bool,
) -> Result<u32> {
    let width_in_sb = params.pic_width;
    let height_in_sb = params.pic_height;
    // Smallest coding block yields the maximum dimension in CBs.
    let width_in_min_cb = width_in_sb * 64 / 8;
    let height_in_min_cb = height_in_sb * 64 / 8;
    let deep = params.max_bit_depth > 8;

    let (dblk_line_mult, dblk_col_mult, intra_pred_mult) = match params.chroma_format {
        ChromaFormat::Yuv420 => {
            if deep {
                (36u32, 34u32, 4u32)
            } else {
                (18, 17, 2)
            }
        }
        ChromaFormat::Yuv444 => {
            if deep {
                (54, 50, 6)
            } else {
                (27, 25, 3)
            }
        }
        _ => return Err(HcpError::InvalidParam("chroma format")),
    };

    if matches!(
        buffer,
        InternalBuffer::IntraPredUpRightColumn | InternalBuffer::IntraPredLeftReconColumn
    ) && !scalable_columns
    {
        return Err(HcpError::InvalidParam("buffer type"));
    }

    let size = match buffer {
        InternalBuffer::DeblockLine | InternalBuffer::DeblockTileLine => {
            width_in_sb * dblk_line_mult * CACHELINE_SIZE
        }
        InternalBuffer::DeblockTileColumn => height_in_sb * dblk_col_mult * CACHELINE_SIZE,
        InternalBuffer::MetadataLine | InternalBuffer::MetadataTileLine => {
            width_in_sb * 5 * CACHELINE_SIZE
        }
        InternalBuffer::MetadataTileColumn => height_in_sb * 5 * CACHELINE_SIZE,
        InternalBuffer::CurrentMvTemporal | InternalBuffer::CollocatedMvTemporal => {
            width_in_sb * height_in_sb * 9 * CACHELINE_SIZE
        }
        InternalBuffer::SegmentId => width_in_sb * height_in_sb * CACHELINE_SIZE,
        InternalBuffer::HvdLine | InternalBuffer::HvdTile => width_in_sb * CACHELINE_SIZE,
        InternalBuffer::IntraPredUpRightColumn | InternalBuffer::IntraPredLeftReconColumn => {
            intra_pred_mult * height_in_sb * CACHELINE_SIZE
        }
        InternalBuffer::CabacStreamout => {
            let per_lcu =
                if params.chroma_format == ChromaFormat::Yuv420 && params.max_bit_depth == 8 {
                    WORST_CASE_LCU_CU_TU_INFO
                } else {
                    WORST_CASE_LCU_CU_TU_INFO_REXT
                };
            align_to_cacheline(
                width_in_min_cb * height_in_min_cb * per_lcu
                    + width_in_min_cb * height_in_min_cb
                    + params.max_frame_size * 3,
            )
        }
        _ => return Err(HcpError::InvalidParam("buffer type")),
    };

    Ok(size)
}

/// Grow-only HEVC reallocation rule per buffer class.
pub(crate) fn hevc_realloc_needed(
    buffer: InternalBuffer,
    params: &ReallocParams,
    scalable_columns: bool,
) -> Result<bool> {
    let grew_lcu = params.ctb_log2_size_y_max < 6 && params.ctb_log2_size_y == 6;
    let wider = params.pic_width > params.pic_width_allocated;
    let taller = params.pic_height > params.pic_height_allocated;
    let lcu_exceeds = params.ctb_log2_size_y > params.ctb_log2_size_y_max;

    let realloc = match buffer {
        InternalBuffer::DeblockLine | InternalBuffer::DeblockTileLine => wider || lcu_exceeds,
        InternalBuffer::DeblockTileColumn => taller || lcu_exceeds,
        InternalBuffer::MetadataLine | InternalBuffer::MetadataTileLine => grew_lcu || wider,
        InternalBuffer::MvUpRightColumn | InternalBuffer::MetadataTileColumn => grew_lcu || taller,
        InternalBuffer::IntraPredUpRightColumn | InternalBuffer::IntraPredLeftReconColumn => {
            if !scalable_columns {
                return Err(HcpError::InvalidParam("buffer type"));
            }
            if params.max_bit_depth == 8 && params.chroma_format == ChromaFormat::Yuv420 {
                grew_lcu || taller
            } else {
                taller || lcu_exceeds
            }
        }
        InternalBuffer::SaoLine | InternalBuffer::SaoTileLine => wider || lcu_exceeds,
        InternalBuffer::SaoTileColumn => taller || lcu_exceeds,
        InternalBuffer::CurrentMvTemporal => wider || taller,
        InternalBuffer::CabacStreamout => params.frame_size > params.frame_size_allocated,
        _ => return Err(HcpError::InvalidParam("buffer type")),
    };

    Ok(realloc)
}

/// Grow-only VP9 reallocation rule; dimensions are in superblocks.
pub(crate) fn vp9_realloc_needed(
    buffer: InternalBuffer,
    params: &ReallocParams,
    scalable_columns: bool,
) -> Result<bool> {
    let wider = params.pic_width > params.pic_width_allocated;
    let taller = params.pic_height > params.pic_height_allocated;

    let realloc = match buffer {
        InternalBuffer::MetadataLine
        | InternalBuffer::MetadataTileLine
        | InternalBuffer::DeblockLine
        | InternalBuffer::DeblockTileLine
        | InternalBuffer::HvdLine
        | InternalBuffer::HvdTile => wider,
        InternalBuffer::DeblockTileColumn | InternalBuffer::MetadataTileColumn => taller,
        InternalBuffer::IntraPredUpRightColumn | InternalBuffer::IntraPredLeftReconColumn => {
            if !scalable_columns {
                return Err(HcpError::InvalidParam("buffer type"));
            }
            taller
        }
        InternalBuffer::CurrentMvTemporal
        | InternalBuffer::CollocatedMvTemporal
        | InternalBuffer::SegmentId => taller || wider,
        InternalBuffer::CabacStreamout => params.frame_size > params.frame_size_allocated,
        _ => return Err(HcpError::InvalidParam("buffer type")),
    };

    Ok(realloc)
}
