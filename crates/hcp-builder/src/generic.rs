//! Generation-independent command construction.
//!
//! One builder body per command type, generic over a [`CmdSet`], so the same
//! derivation logic produces each generation's binary layout. Every function
//! validates its inputs first and populates a descriptor entirely in local
//! state; appending (and any per-generation field fix-up) happens in the
//! generation interfaces, which receive the populated value.

use hcp_cmds::iface::{
    BsdObjectFields, CmdSet, HcpCommand, IndObjBaseAddrFields, PicStateFields, QmStateFields,
    RefIdxStateFields, SliceStateFields, SurfaceStateFields, TileStateFields,
    WeightOffsetStateFields,
};
use hcp_cmds::{RefEntry, REF_ENTRY_COUNT, TILE_COLUMN_GROUPS};

use crate::error::{HcpError, Result};
use crate::params::{
    BsdParams, HevcSliceState, HevcSliceType, IndObjBaseAddrParams, PixelFormat, QmParams,
    RefIdxParams, Standard, SurfaceId, SurfaceParams, TileParams, WeightOffsetParams,
    MAX_REF_FRAMES, MAX_TILE_COLUMNS, MAX_TILE_ROWS,
};
use crate::sink::{AddressShift, CommandSink, ProtectionSink, RelocRequest, SliceProtection};

/// Raw (source) surface chroma plane alignment. Gen9 relaxed this from the
/// older 16-pixel requirement.
const RAW_UV_PLANE_ALIGNMENT: u32 = 4;
/// Reconstructed and decode surface chroma plane alignment.
const RECON_UV_PLANE_ALIGNMENT: u32 = 8;

fn align_up(value: u32, alignment: u32) -> u32 {
    value.div_ceil(alignment) * alignment
}

fn align_down(value: u32, alignment: u32) -> u32 {
    value / alignment * alignment
}

/// Decode-side surface state: pitch and legacy-aligned chroma plane offset.
pub fn decode_surface_state<S: CmdSet>(params: &SurfaceParams<'_>) -> Result<S::SurfaceState> {
    let surface = params
        .surface
        .ok_or(HcpError::MissingParam("surface"))?;

    let mut cmd = S::SurfaceState::default();

    cmd.set_surface_id(params.surface_id.raw());
    cmd.set_pitch_minus1(surface.pitch - 1);

    let uv_alignment = if params.uv_plane_alignment != 0 {
        params.uv_plane_alignment
    } else if params.surface_id == SurfaceId::Source {
        RAW_UV_PLANE_ALIGNMENT
    } else {
        RECON_UV_PLANE_ALIGNMENT
    };

    cmd.set_y_offset_for_cb(align_up(surface.u_plane_y_offset, uv_alignment));

    Ok(cmd)
}

/// Encode-side surface state. The reconstructed Y410/AYUV surfaces are
/// addressed at a quarter or half of the allocation pitch.
pub fn encode_surface_state<S: CmdSet>(params: &SurfaceParams<'_>) -> Result<S::SurfaceState> {
    let surface = params
        .surface
        .ok_or(HcpError::MissingParam("surface"))?;

    let mut cmd = S::SurfaceState::default();

    cmd.set_surface_id(params.surface_id.raw());
    cmd.set_pitch_minus1(surface.pitch - 1);

    if params.surface_id != SurfaceId::Source && surface.format == PixelFormat::Y410 {
        cmd.set_pitch_minus1(surface.pitch / 2 - 1);
    }

    if params.surface_id != SurfaceId::Source && surface.format == PixelFormat::Ayuv {
        cmd.set_pitch_minus1(surface.pitch / 4 - 1);
    }

    cmd.set_y_offset_for_cb(surface.u_plane_y_offset);

    Ok(cmd)
}

/// Indirect-object base addresses. The decode bitstream buffer carries an
/// access upper bound three dwords past the address field; each encode
/// buffer is registered only when supplied.
pub fn ind_obj_base_addr<S: CmdSet>(
    sink: &mut dyn CommandSink,
    params: &IndObjBaseAddrParams,
) -> Result<()> {
    let mut cmd = S::IndObjBaseAddrState::default();
    let buffers = &params.buffers;

    if params.mode.is_decode() {
        let data_buffer = buffers
            .data_buffer
            .ok_or(HcpError::MissingParam("bitstream data buffer"))?;

        sink.register_resource(
            cmd.dwords_mut(),
            &RelocRequest {
                resource: data_buffer,
                offset: buffers.data_offset,
                size: buffers.data_size,
                location_dw: S::IndObjBaseAddrState::BITSTREAM_ADDR_DW,
                shift: AddressShift::Page4k,
                writable: false,
                upper_bound_dw_offset: Some(3),
            },
        )?;
    } else {
        if let Some(mv_buffer) = buffers.mv_object_buffer {
            sink.register_resource(
                cmd.dwords_mut(),
                &RelocRequest {
                    resource: mv_buffer,
                    offset: buffers.mv_object_offset,
                    size: align_up(buffers.mv_object_size, 0x1000),
                    location_dw: S::IndObjBaseAddrState::CU_OBJECT_ADDR_DW,
                    shift: AddressShift::Page4k,
                    writable: false,
                    upper_bound_dw_offset: None,
                },
            )?;
        }

        if let Some(pak_buffer) = buffers.pak_base_object_buffer {
            sink.register_resource(
                cmd.dwords_mut(),
                &RelocRequest {
                    resource: pak_buffer,
                    offset: 0,
                    size: align_down(buffers.pak_base_object_size, 0x1000),
                    location_dw: S::IndObjBaseAddrState::PAK_BSE_ADDR_DW,
                    shift: AddressShift::Page4k,
                    writable: true,
                    upper_bound_dw_offset: Some(3),
                },
            )?;
        }

        if let Some(hdr_buffer) = buffers.compressed_header_buffer {
            sink.register_resource(
                cmd.dwords_mut(),
                &RelocRequest {
                    resource: hdr_buffer,
                    offset: 0,
                    size: buffers.compressed_header_size,
                    location_dw: S::IndObjBaseAddrState::COMPRESSED_HEADER_ADDR_DW,
                    shift: AddressShift::Page4k,
                    writable: false,
                    upper_bound_dw_offset: None,
                },
            )?;
        }

        if let Some(counter_buffer) = buffers.probability_counter_buffer {
            sink.register_resource(
                cmd.dwords_mut(),
                &RelocRequest {
                    resource: counter_buffer,
                    offset: buffers.probability_counter_offset,
                    size: buffers.probability_counter_size,
                    location_dw: S::IndObjBaseAddrState::PROB_COUNTER_ADDR_DW,
                    shift: AddressShift::Page4k,
                    writable: true,
                    upper_bound_dw_offset: None,
                },
            )?;
        }

        if let Some(delta_buffer) = buffers.probability_delta_buffer {
            sink.register_resource(
                cmd.dwords_mut(),
                &RelocRequest {
                    resource: delta_buffer,
                    offset: 0,
                    size: buffers.probability_delta_size,
                    location_dw: S::IndObjBaseAddrState::PROB_DELTA_ADDR_DW,
                    shift: AddressShift::Page4k,
                    writable: false,
                    upper_bound_dw_offset: None,
                },
            )?;
        }

        if let Some(record_buffer) = buffers.tile_record_buffer {
            sink.register_resource(
                cmd.dwords_mut(),
                &RelocRequest {
                    resource: record_buffer,
                    offset: 0,
                    size: buffers.tile_record_size,
                    location_dw: S::IndObjBaseAddrState::TILE_RECORD_ADDR_DW,
                    shift: AddressShift::Page4k,
                    writable: true,
                    upper_bound_dw_offset: None,
                },
            )?;
        }
    }

    sink.append(cmd.as_bytes())?;
    Ok(())
}

/// Quantization-matrix state: one command per valid (size, prediction,
/// colour) combination, up to 20 appends. HEVC only.
pub fn qm_state<S: CmdSet>(sink: &mut dyn CommandSink, params: &QmParams<'_>) -> Result<()> {
    if params.standard != Standard::Hevc {
        return Err(HcpError::InvalidParam("QM state requires HEVC"));
    }
    let matrix = params
        .matrix
        .ok_or(HcpError::MissingParam("iq matrix"))?;

    for size_id in 0u32..4 {
        for pred_type in 0u32..2 {
            for color in 0u32..3 {
                // 32x32 exists for luma only.
                if size_id == 3 && color != 0 {
                    break;
                }

                let mut cmd = S::QmState::default();
                cmd.set_size_id(size_id);
                cmd.set_prediction_type(pred_type);
                cmd.set_color_component(color);

                let list = (3 * pred_type + color) as usize;
                match size_id {
                    2 => cmd.set_dc_coefficient(matrix.dc_16x16[list] as u32),
                    3 => cmd.set_dc_coefficient(matrix.dc_32x32[pred_type as usize] as u32),
                    _ => cmd.set_dc_coefficient(0),
                }

                let bytes = cmd.matrix_bytes_mut();
                match size_id {
                    0 => bytes[..16].copy_from_slice(&matrix.list_4x4[list]),
                    1 => bytes.copy_from_slice(&matrix.list_8x8[list]),
                    2 => bytes.copy_from_slice(&matrix.list_16x16[list]),
                    _ => bytes.copy_from_slice(&matrix.list_32x32[pred_type as usize]),
                }

                sink.append(cmd.as_bytes())?;
            }
        }
    }

    Ok(())
}

/// Decode picture state from the sequence/picture parameters.
pub fn decode_pic_state<S: CmdSet>(
    pic: &crate::params::HevcPicParams,
) -> Result<S::PicState> {
    let mut cmd = S::PicState::default();

    cmd.set_frame_width_in_min_cb_minus1(pic.pic_width_in_min_cbs_y as u32 - 1);
    cmd.set_frame_height_in_min_cb_minus1(pic.pic_height_in_min_cbs_y as u32 - 1);

    cmd.set_min_cu_size(pic.log2_min_luma_coding_block_size_minus3 as u32 & 0x3);
    cmd.set_ctb_size(
        (pic.log2_diff_max_min_luma_coding_block_size as u32
            + pic.log2_min_luma_coding_block_size_minus3 as u32)
            & 0x3,
    );
    cmd.set_max_tu_size(
        (pic.log2_diff_max_min_transform_block_size as u32
            + pic.log2_min_transform_block_size_minus2 as u32)
            & 0x3,
    );
    cmd.set_min_tu_size(pic.log2_min_transform_block_size_minus2 as u32 & 0x3);
    cmd.set_min_pcm_size(pic.log2_min_pcm_luma_coding_block_size_minus3 as u32 & 0x3);
    cmd.set_max_pcm_size(
        (pic.log2_diff_max_min_pcm_luma_coding_block_size as u32
            + pic.log2_min_pcm_luma_coding_block_size_minus3 as u32)
            & 0x3,
    );

    // The hardware requires ColPicIsI and CurPicIsI to agree, and the
    // short-format path cannot compute either reliably, so both stay zero.
    cmd.set_col_pic_is_i(false);
    cmd.set_cur_pic_is_i(false);

    cmd.set_sao_enabled(pic.sample_adaptive_offset_enabled);
    cmd.set_pcm_enabled(pic.pcm_enabled);
    cmd.set_cu_qp_delta_enabled(pic.cu_qp_delta_enabled);
    cmd.set_diff_cu_qp_delta_depth(pic.diff_cu_qp_delta_depth as u32);
    cmd.set_pcm_loop_filter_disable(pic.pcm_loop_filter_disabled);
    cmd.set_constrained_intra_pred(pic.constrained_intra_pred);
    cmd.set_log2_parallel_merge_level_minus2(pic.log2_parallel_merge_level_minus2 as u32);
    cmd.set_sign_data_hiding(pic.sign_data_hiding_enabled);
    cmd.set_loop_filter_across_tiles(pic.loop_filter_across_tiles_enabled);
    cmd.set_entropy_coding_sync(pic.entropy_coding_sync_enabled);
    cmd.set_tiles_enabled(pic.tiles_enabled);
    cmd.set_weighted_pred(pic.weighted_pred);
    cmd.set_weighted_bipred(pic.weighted_bipred);
    cmd.set_field_pic((pic.ref_field_pic_flags >> 15) & 0x1 != 0);
    cmd.set_bottom_field((pic.ref_bottom_field_flags >> 15) & 0x1 == 0);
    cmd.set_transform_skip_enabled(pic.transform_skip_enabled);
    cmd.set_amp_enabled(pic.amp_enabled);
    cmd.set_transquant_bypass_enabled(pic.transquant_bypass_enabled);
    cmd.set_strong_intra_smoothing(pic.strong_intra_smoothing_enabled);

    cmd.set_pic_cb_qp_offset(pic.pps_cb_qp_offset as u32 & 0x1f);
    cmd.set_pic_cr_qp_offset(pic.pps_cr_qp_offset as u32 & 0x1f);
    cmd.set_max_tu_depth_intra(pic.max_transform_hierarchy_depth_intra as u32 & 0x7);
    cmd.set_max_tu_depth_inter(pic.max_transform_hierarchy_depth_inter as u32 & 0x7);
    cmd.set_pcm_bit_depth_chroma_minus1(pic.pcm_sample_bit_depth_chroma_minus1 as u32);
    cmd.set_pcm_bit_depth_luma_minus1(pic.pcm_sample_bit_depth_luma_minus1 as u32);

    Ok(cmd)
}

/// Bitstream object: indirect data span for one decode slice.
pub fn bsd_object<S: CmdSet>(params: &BsdParams) -> S::BsdObject {
    let mut cmd = S::BsdObject::default();
    cmd.set_bsd_data_length(params.data_length);
    cmd.set_data_start_offset(params.data_start_offset);
    cmd
}

/// Tile state: cumulative CTB positions of tile columns and rows.
///
/// The position groups hold four entries each; the walk stops as soon as the
/// running index reaches the declared count, including mid-group. Row counts
/// of 21 and 22 (minus-one values 20 and 21) spill into the sixth row group
/// the general loop never reaches.
pub fn tile_state<S: CmdSet>(params: &TileParams<'_>) -> Result<S::TileState> {
    let pic = params.pic;
    let num_cols_minus1 = pic.num_tile_columns_minus1 as usize;
    let num_rows_minus1 = pic.num_tile_rows_minus1 as usize;

    if num_cols_minus1 >= MAX_TILE_COLUMNS || num_rows_minus1 >= MAX_TILE_ROWS {
        return Err(HcpError::InvalidParam("tile count exceeds hardware maximum"));
    }
    if params.tile_col_widths.len() < num_cols_minus1
        || params.tile_row_heights.len() < num_rows_minus1
    {
        return Err(HcpError::InvalidParam("tile dimension array too short"));
    }

    let mut cmd = S::TileState::default();
    cmd.set_num_tile_columns_minus1(num_cols_minus1 as u32);
    cmd.set_num_tile_rows_minus1(num_rows_minus1 as u32);

    let mut col_cumulative: u32 = 0;
    'columns: for group in 0..TILE_COLUMN_GROUPS {
        for slot in 0..4 {
            cmd.set_column_position(group, slot, col_cumulative);
            let index = 4 * group + slot;
            if index == num_cols_minus1 {
                break 'columns;
            }
            col_cumulative += params.tile_col_widths[index] as u32;
        }
    }

    let mut row_cumulative: u32 = 0;
    'rows: for group in 0..5 {
        for slot in 0..4 {
            cmd.set_row_position(group, slot, row_cumulative);
            let index = 4 * group + slot;
            if index == num_rows_minus1 {
                break 'rows;
            }
            row_cumulative += params.tile_row_heights[index] as u32;
        }
    }

    if num_rows_minus1 == 20 {
        cmd.set_row_position(5, 0, row_cumulative);
    }

    if num_rows_minus1 == 21 {
        cmd.set_row_position(5, 0, row_cumulative);
        row_cumulative += params.tile_row_heights[20] as u32;
        cmd.set_row_position(5, 1, row_cumulative);
    }

    Ok(cmd)
}

/// Reference-index state for one list, or the structurally empty dummy
/// command intra-only pictures still require.
pub fn ref_idx_state<S: CmdSet>(params: &RefIdxParams<'_>) -> Result<S::RefIdxState> {
    let mut cmd = S::RefIdxState::default();

    if params.dummy_reference {
        return Ok(cmd);
    }

    debug_assert!(params.curr_pic_frame_idx != 0x7f);

    cmd.set_ref_pic_list_num(params.list as u32);
    cmd.set_num_ref_idx_active_minus1(params.num_refs_in_list.wrapping_sub(1) as u32);

    for i in 0..params.num_refs_in_list as usize {
        let ref_frame_idx = params.ref_pic_list[params.list as usize][i].frame_idx;
        if (ref_frame_idx as usize) < MAX_REF_FRAMES {
            let mapping = params.ref_idx_mapping[ref_frame_idx as usize];
            debug_assert!(mapping >= 0, "reference slot mapping not resolved");

            let poc_diff =
                params.poc_curr_pic - params.poc_list[ref_frame_idx as usize];
            cmd.set_entry(
                i,
                RefEntry {
                    tb_value: poc_diff.clamp(-128, 127) as i8 as u8,
                    frame_id: mapping.max(0) as u8,
                    long_term: (params.long_term_flags >> ref_frame_idx) & 0x1 != 0,
                    field_pic: (params.field_pic_flags >> ref_frame_idx) & 0x1 != 0,
                    bottom_field: (params.bottom_field_flags >> ref_frame_idx) & 0x1 == 0,
                },
            );
        } else {
            cmd.clear_entry(i);
        }
    }

    for i in params.num_refs_in_list as usize..REF_ENTRY_COUNT {
        cmd.clear_entry(i);
    }

    Ok(cmd)
}

/// Weight/offset tables for one list; a direct structural copy.
pub fn weight_offset_state<S: CmdSet>(params: &WeightOffsetParams) -> S::WeightOffsetState {
    let mut cmd = S::WeightOffsetState::default();
    let list = params.list as usize;

    cmd.set_ref_pic_list_num(params.list as u32);

    for ref_idx in 0..MAX_REF_FRAMES {
        cmd.set_luma_entry(
            ref_idx,
            params.luma_weights[list][ref_idx],
            params.luma_offsets[list][ref_idx],
        );
    }

    for ref_idx in 0..MAX_REF_FRAMES {
        cmd.set_chroma_entry(
            ref_idx,
            params.chroma_weights[list][ref_idx],
            params.chroma_offsets[list][ref_idx],
        );
    }

    // Entry 15 of both tables stays at its reset value; the list carries at
    // most 15 active references.
    cmd
}

/// Collocated-reference state carried across the slices of one picture.
///
/// The hardware cannot guarantee the collocated buffer fetch has completed
/// before an early intra slice executes, so every intra slice (and any slice
/// without temporal MVP) reuses the first inter slice's collocated slot and
/// list-selection flag. Reset at slice index zero.
#[derive(Clone, Debug, Default)]
pub struct CollocatedRefContext {
    frame_idx: u32,
    from_l0: bool,
    captured: bool,
}

impl CollocatedRefContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn slice_start_positions<S: CmdSet>(
    cmd: &mut S::SliceState,
    state: &HevcSliceState<'_>,
) -> Result<()> {
    let width_in_ctbs = state.pic.width_in_ctbs();

    // The first slice of a workload must start at CTB (0, 0); a nonzero
    // segment address here means the bitstream is malformed.
    if state.slice_index == 0 {
        cmd.set_slice_start_ctb(0, 0);
    } else {
        cmd.set_slice_start_ctb(
            state.slice.slice_segment_address % width_in_ctbs,
            state.slice.slice_segment_address / width_in_ctbs,
        );
    }

    if state.last_slice {
        cmd.set_next_slice_start_ctb(0, 0);
    } else {
        let next = state
            .next_slice
            .ok_or(HcpError::MissingParam("next slice parameters"))?;
        cmd.set_next_slice_start_ctb(
            next.slice_segment_address % width_in_ctbs,
            next.slice_segment_address / width_in_ctbs,
        );
    }

    Ok(())
}

fn resolve_collocated<S: CmdSet>(
    cmd: &mut S::SliceState,
    state: &HevcSliceState<'_>,
    ctx: &mut CollocatedRefContext,
) -> Result<()> {
    let slice = state.slice;

    cmd.set_collocated_from_l0(slice.collocated_from_l0);

    if slice.temporal_mvp_enabled {
        let collocated_ref_index = slice.collocated_ref_idx as usize;
        let mut collocated_frame_idx = 0u8;
        if slice.slice_type == HevcSliceType::P {
            collocated_frame_idx = slice.ref_pic_list[0][collocated_ref_index].frame_idx;
        } else if slice.slice_type == HevcSliceType::B {
            let list = !slice.collocated_from_l0 as usize;
            collocated_frame_idx = slice.ref_pic_list[list][collocated_ref_index].frame_idx;
        }

        if slice.slice_type == HevcSliceType::I {
            cmd.set_collocated_ref_idx(0);
        } else {
            let mapping = state.ref_idx_mapping[collocated_frame_idx as usize];
            if mapping < 0 {
                return Err(HcpError::InvalidParam("collocated reference not mapped"));
            }
            cmd.set_collocated_ref_idx(mapping as u32);
        }
    } else {
        cmd.set_collocated_ref_idx(0);
    }

    if state.slice_index == 0 {
        ctx.reset();
    }

    if !ctx.captured
        && slice.slice_type != HevcSliceType::I
        && slice.temporal_mvp_enabled
    {
        ctx.frame_idx = cmd.collocated_ref_idx();
        ctx.from_l0 = cmd.collocated_from_l0();
        ctx.captured = true;
    }

    if ctx.captured && (slice.slice_type == HevcSliceType::I || !slice.temporal_mvp_enabled) {
        cmd.set_collocated_ref_idx(ctx.frame_idx);
        cmd.set_collocated_from_l0(ctx.from_l0);
    }

    Ok(())
}

fn common_slice_flags<S: CmdSet>(cmd: &mut S::SliceState, state: &HevcSliceState<'_>) {
    let slice = state.slice;

    cmd.set_slice_type(slice.slice_type.raw());
    cmd.set_last_slice_of_pic(state.last_slice);
    cmd.set_dependent_slice(slice.dependent_slice_segment);
    cmd.set_temporal_mvp_enabled(slice.temporal_mvp_enabled);
    cmd.set_slice_cb_qp_offset(slice.slice_cb_qp_offset as u32);
    cmd.set_slice_cr_qp_offset(slice.slice_cr_qp_offset as u32);

    cmd.set_deblocking_filter_disabled(slice.deblocking_filter_disabled);
    cmd.set_tc_offset_div2(slice.tc_offset_div2 as u32);
    cmd.set_beta_offset_div2(slice.beta_offset_div2 as u32);
    cmd.set_loop_filter_across_slices(slice.loop_filter_across_slices_enabled);
    cmd.set_sao_chroma(slice.sao_chroma);
    cmd.set_sao_luma(slice.sao_luma);
    cmd.set_mvd_l1_zero(slice.mvd_l1_zero);
    cmd.set_cabac_init(slice.cabac_init);
    cmd.set_max_merge_idx(
        5u32.wrapping_sub(slice.five_minus_max_num_merge_cand as u32)
            .wrapping_sub(1),
    );
}

/// Decode slice state. Low-delay means no active reference lies in the
/// future of the current picture; I slices are not marked low-delay.
pub fn decode_slice_state<S: CmdSet>(
    state: &HevcSliceState<'_>,
    ctx: &mut CollocatedRefContext,
) -> Result<S::SliceState> {
    let slice = state.slice;
    let pic = state.pic;
    let mut cmd = S::SliceState::default();

    slice_start_positions::<S>(&mut cmd, state)?;
    common_slice_flags::<S>(&mut cmd, state);

    let mut is_low_delay = true;
    if slice.slice_type == HevcSliceType::I {
        is_low_delay = false;
    } else {
        'lists: for list in 0..2 {
            if list == 1 && slice.slice_type != HevcSliceType::B {
                break;
            }
            let active = if list == 0 {
                slice.num_ref_idx_l0_active_minus1
            } else {
                slice.num_ref_idx_l1_active_minus1
            };
            for i in 0..=active as usize {
                let ref_frame_idx = slice.ref_pic_list[list][i].frame_idx;
                if let Some(&poc) = pic.pic_order_cnt_list.get(ref_frame_idx as usize) {
                    if poc > pic.curr_pic_order_cnt {
                        is_low_delay = false;
                        break 'lists;
                    }
                }
            }
        }
    }
    cmd.set_is_low_delay(is_low_delay);

    // Decode computes the weight denominators unconditionally from the
    // slice header.
    cmd.set_chroma_log2_weight_denom(
        (slice.luma_log2_weight_denom as i32 + slice.delta_chroma_log2_weight_denom as i32)
            as u32,
    );
    cmd.set_luma_log2_weight_denom(slice.luma_log2_weight_denom as u32);

    resolve_collocated::<S>(&mut cmd, state, ctx)?;

    cmd.set_slice_header_length(slice.byte_offset_to_slice_data);

    Ok(cmd)
}

/// Encode slice state. Low-delay holds when every active L0 reference
/// precedes the current picture and no active L1 reference follows it.
pub fn encode_slice_state<S: CmdSet>(
    state: &HevcSliceState<'_>,
    ctx: &mut CollocatedRefContext,
) -> Result<S::SliceState> {
    let slice = state.slice;
    let pic = state.pic;
    let mut cmd = S::SliceState::default();

    slice_start_positions::<S>(&mut cmd, state)?;
    common_slice_flags::<S>(&mut cmd, state);

    cmd.set_slice_qp(
        (slice.slice_qp_delta as i32 + pic.init_qp_minus26 as i32 + 26) as u32,
    );

    let mut num_negative = 0u32;
    if slice.slice_type != HevcSliceType::I {
        for i in 0..=slice.num_ref_idx_l0_active_minus1 as usize {
            let ref_frame_idx = slice.ref_pic_list[0][i].frame_idx;
            if let Some(&poc) = pic.pic_order_cnt_list.get(ref_frame_idx as usize) {
                if pic.curr_pic_order_cnt - poc > 0 {
                    num_negative += 1;
                }
            }
        }
    }

    let mut num_positive = 0u32;
    if slice.slice_type == HevcSliceType::B {
        for i in 0..=slice.num_ref_idx_l1_active_minus1 as usize {
            let ref_frame_idx = slice.ref_pic_list[1][i].frame_idx;
            if let Some(&poc) = pic.pic_order_cnt_list.get(ref_frame_idx as usize) {
                if pic.curr_pic_order_cnt - poc < 0 {
                    num_positive += 1;
                }
            }
        }
    }

    cmd.set_is_low_delay(
        num_negative == slice.num_ref_idx_l0_active_minus1 as u32 + 1 && num_positive == 0,
    );

    // Weight denominators apply only when weighted prediction is active.
    let weighted = pic.weighted_pred || pic.weighted_bipred;
    cmd.set_chroma_log2_weight_denom(if weighted {
        (slice.luma_log2_weight_denom as i32 + slice.delta_chroma_log2_weight_denom as i32)
            as u32
    } else {
        0
    });
    cmd.set_luma_log2_weight_denom(if weighted {
        slice.luma_log2_weight_denom as u32
    } else {
        0
    });

    resolve_collocated::<S>(&mut cmd, state, ctx)?;

    cmd.set_slice_header_length(slice.byte_offset_to_slice_data);

    Ok(cmd)
}

/// Protected-content decode state: parameter marshaling only.
pub fn protect_state(
    protection: &mut dyn ProtectionSink,
    state: &HevcSliceState<'_>,
) -> Result<()> {
    let data_buffer = state
        .data_buffer
        .ok_or(HcpError::MissingParam("slice data buffer"))?;
    let offset = state.slice.slice_data_offset + state.data_buffer_offset;

    protection
        .set_protection_state(&SliceProtection {
            data_buffer,
            slice_index: state.slice_index,
            data_start_offsets: [offset; 2],
            data_lengths: [state.slice.slice_data_size; 2],
            last_pass: state.last_slice,
        })
        .map_err(HcpError::from)
}
