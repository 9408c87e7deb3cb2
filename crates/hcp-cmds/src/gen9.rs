//! Gen9 (SKL/KBL-class) HCP command layouts.
//!
//! Main/Main10 era hardware: 32-dword picture state, 3-dword surface state
//! with a 4-bit format field, no chroma-offset MSB extension, no tile-coding
//! or palette commands, and narrower slice-start coordinate fields (9 bits,
//! enough for 8K at 16-pixel CTBs).

use crate::bits::{get, put};
use crate::hcp_command;
use crate::iface::{
    BsdObjectFields, CmdSet, IndObjBaseAddrFields, PicStateFields, QmStateFields,
    RefEntry, RefIdxStateFields, SliceStateFields, SurfaceStateFields, TileStateFields,
    WeightOffsetStateFields,
};

/// Marker type bundling the Gen9 descriptor set.
pub struct Gen9;

impl CmdSet for Gen9 {
    type SurfaceState = SurfaceState;
    type IndObjBaseAddrState = IndObjBaseAddrState;
    type QmState = QmState;
    type PicState = PicState;
    type TileState = TileState;
    type RefIdxState = RefIdxState;
    type WeightOffsetState = WeightOffsetState;
    type SliceState = SliceState;
    type BsdObject = BsdObject;
}

/// HCP_SURFACE_STATE surface format encodings (4-bit field). Gen9 hardware
/// only decodes planar 4:2:0.
pub mod surface_format {
    pub const P010_VARIANT: u32 = 3;
    pub const PLANAR_420_8: u32 = 4;
    pub const P010: u32 = 13;
    pub const P016: u32 = 14;
}

/// Fixed serialized byte sizes for commands the size estimator counts but
/// this crate does not otherwise populate.
pub mod sizes {
    pub const HCP_PIPE_MODE_SELECT: u32 = 24;
    pub const HCP_PIPE_BUF_ADDR_STATE: u32 = 416;
    pub const HCP_FQM_STATE: u32 = 136;
    pub const HCP_PAK_INSERT_OBJECT: u32 = 8;
    pub const VD_PIPELINE_FLUSH: u32 = 8;
    pub const MI_BATCH_BUFFER_END: u32 = 4;
    pub const MI_BATCH_BUFFER_START: u32 = 12;
    pub const MI_FLUSH_DW: u32 = 20;
    pub const MI_CONDITIONAL_BATCH_BUFFER_END: u32 = 16;
}

/// Patch-list entries (relocated address fields) per command.
pub mod patch_counts {
    pub const MI_BATCH_BUFFER_START: u32 = 1;
    pub const MI_FLUSH_DW: u32 = 1;
    pub const MI_CONDITIONAL_BATCH_BUFFER_END: u32 = 1;
    pub const VD_PIPELINE_FLUSH: u32 = 0;
    pub const HCP_PIPE_MODE_SELECT: u32 = 0;
    pub const HCP_SURFACE_STATE: u32 = 0;
    pub const HCP_PIPE_BUF_ADDR_STATE: u32 = 45;
    pub const HCP_IND_OBJ_BASE_ADDR_STATE: u32 = 11;
    pub const HCP_QM_STATE: u32 = 0;
    pub const HCP_FQM_STATE: u32 = 0;
    pub const HCP_PIC_STATE: u32 = 0;
    pub const HCP_REF_IDX_STATE: u32 = 0;
    pub const HCP_WEIGHTOFFSET_STATE: u32 = 0;
    pub const HCP_SLICE_STATE: u32 = 0;
    pub const HCP_PAK_INSERT_OBJECT: u32 = 0;
    pub const HCP_TILE_STATE: u32 = 0;
    pub const HCP_BSD_OBJECT: u32 = 0;
    pub const HCP_VP9_SEGMENT_STATE: u32 = 0;
    pub const HCP_VP9_PIC_STATE: u32 = 0;
}

hcp_command!(
    /// HCP_SURFACE_STATE (media instruction command 1).
    SurfaceState,
    3,
    0x7381_0001
);

impl SurfaceStateFields for SurfaceState {
    fn set_surface_id(&mut self, id: u32) {
        put(&mut self.dw[1], 28, 31, id);
    }

    fn set_pitch_minus1(&mut self, pitch_minus1: u32) {
        put(&mut self.dw[1], 0, 16, pitch_minus1);
    }

    fn set_y_offset_for_cb(&mut self, pixels: u32) {
        put(&mut self.dw[2], 0, 14, pixels);
    }
}

impl SurfaceState {
    pub fn set_surface_format(&mut self, format: u32) {
        put(&mut self.dw[2], 28, 31, format);
    }

    pub fn surface_format(&self) -> u32 {
        get(self.dw[2], 28, 31)
    }
}

hcp_command!(
    /// HCP_IND_OBJ_BASE_ADDR_STATE (media instruction command 3).
    IndObjBaseAddrState,
    29,
    0x7383_001b
);

impl IndObjBaseAddrFields for IndObjBaseAddrState {
    const BITSTREAM_ADDR_DW: usize = 1;
    const CU_OBJECT_ADDR_DW: usize = 6;
    const PAK_BSE_ADDR_DW: usize = 9;
    const COMPRESSED_HEADER_ADDR_DW: usize = 14;
    const PROB_COUNTER_ADDR_DW: usize = 17;
    const PROB_DELTA_ADDR_DW: usize = 20;
    const TILE_RECORD_ADDR_DW: usize = 23;
}

hcp_command!(
    /// HCP_QM_STATE (media instruction command 4).
    QmState,
    18,
    0x7384_0010
);

impl QmStateFields for QmState {
    fn set_prediction_type(&mut self, intra0_inter1: u32) {
        put(&mut self.dw[1], 0, 0, intra0_inter1);
    }

    fn set_size_id(&mut self, size_id: u32) {
        put(&mut self.dw[1], 1, 2, size_id);
    }

    fn set_color_component(&mut self, component: u32) {
        put(&mut self.dw[1], 3, 4, component);
    }

    fn set_dc_coefficient(&mut self, dc: u32) {
        put(&mut self.dw[1], 5, 12, dc);
    }

    fn matrix_bytes_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(&mut self.dw[2..18])
    }
}

hcp_command!(
    /// HCP_PIC_STATE (media instruction command 16). Gen9 stops at the BRC
    /// dwords; the range-extension block does not exist here.
    PicState,
    32,
    0x7390_001e
);

impl PicStateFields for PicState {
    fn set_frame_width_in_min_cb_minus1(&mut self, v: u32) {
        put(&mut self.dw[1], 0, 9, v);
    }

    fn set_frame_height_in_min_cb_minus1(&mut self, v: u32) {
        put(&mut self.dw[1], 16, 25, v);
    }

    fn set_min_cu_size(&mut self, v: u32) {
        put(&mut self.dw[2], 0, 1, v);
    }

    fn set_ctb_size(&mut self, v: u32) {
        put(&mut self.dw[2], 2, 3, v);
    }

    fn set_min_tu_size(&mut self, v: u32) {
        put(&mut self.dw[2], 4, 5, v);
    }

    fn set_max_tu_size(&mut self, v: u32) {
        put(&mut self.dw[2], 6, 7, v);
    }

    fn set_min_pcm_size(&mut self, v: u32) {
        put(&mut self.dw[2], 8, 9, v);
    }

    fn set_max_pcm_size(&mut self, v: u32) {
        put(&mut self.dw[2], 10, 11, v);
    }

    fn set_col_pic_is_i(&mut self, v: bool) {
        put(&mut self.dw[3], 0, 0, v as u32);
    }

    fn set_cur_pic_is_i(&mut self, v: bool) {
        put(&mut self.dw[3], 1, 1, v as u32);
    }

    fn set_sao_enabled(&mut self, v: bool) {
        put(&mut self.dw[4], 3, 3, v as u32);
    }

    fn set_pcm_enabled(&mut self, v: bool) {
        put(&mut self.dw[4], 4, 4, v as u32);
    }

    fn set_cu_qp_delta_enabled(&mut self, v: bool) {
        put(&mut self.dw[4], 5, 5, v as u32);
    }

    fn set_diff_cu_qp_delta_depth(&mut self, v: u32) {
        put(&mut self.dw[4], 6, 7, v);
    }

    fn set_pcm_loop_filter_disable(&mut self, v: bool) {
        put(&mut self.dw[4], 8, 8, v as u32);
    }

    fn set_constrained_intra_pred(&mut self, v: bool) {
        put(&mut self.dw[4], 9, 9, v as u32);
    }

    fn set_log2_parallel_merge_level_minus2(&mut self, v: u32) {
        put(&mut self.dw[4], 10, 12, v);
    }

    fn set_sign_data_hiding(&mut self, v: bool) {
        put(&mut self.dw[4], 13, 13, v as u32);
    }

    fn set_loop_filter_across_tiles(&mut self, v: bool) {
        put(&mut self.dw[4], 15, 15, v as u32);
    }

    fn set_entropy_coding_sync(&mut self, v: bool) {
        put(&mut self.dw[4], 16, 16, v as u32);
    }

    fn set_tiles_enabled(&mut self, v: bool) {
        put(&mut self.dw[4], 17, 17, v as u32);
    }

    fn set_weighted_bipred(&mut self, v: bool) {
        put(&mut self.dw[4], 18, 18, v as u32);
    }

    fn set_weighted_pred(&mut self, v: bool) {
        put(&mut self.dw[4], 19, 19, v as u32);
    }

    fn set_field_pic(&mut self, v: bool) {
        put(&mut self.dw[4], 20, 20, v as u32);
    }

    fn set_bottom_field(&mut self, v: bool) {
        put(&mut self.dw[4], 21, 21, v as u32);
    }

    fn set_transform_skip_enabled(&mut self, v: bool) {
        put(&mut self.dw[4], 22, 22, v as u32);
    }

    fn set_amp_enabled(&mut self, v: bool) {
        put(&mut self.dw[4], 23, 23, v as u32);
    }

    fn set_transquant_bypass_enabled(&mut self, v: bool) {
        put(&mut self.dw[4], 25, 25, v as u32);
    }

    fn set_strong_intra_smoothing(&mut self, v: bool) {
        put(&mut self.dw[4], 26, 26, v as u32);
    }

    fn set_pic_cb_qp_offset(&mut self, v: u32) {
        put(&mut self.dw[5], 0, 4, v);
    }

    fn set_pic_cr_qp_offset(&mut self, v: u32) {
        put(&mut self.dw[5], 5, 9, v);
    }

    fn set_max_tu_depth_intra(&mut self, v: u32) {
        put(&mut self.dw[5], 10, 12, v);
    }

    fn set_max_tu_depth_inter(&mut self, v: u32) {
        put(&mut self.dw[5], 13, 15, v);
    }

    fn set_pcm_bit_depth_chroma_minus1(&mut self, v: u32) {
        put(&mut self.dw[5], 16, 19, v);
    }

    fn set_pcm_bit_depth_luma_minus1(&mut self, v: u32) {
        put(&mut self.dw[5], 20, 23, v);
    }

    fn set_bit_depth_chroma_minus8(&mut self, v: u32) {
        put(&mut self.dw[5], 24, 26, v);
    }

    fn set_bit_depth_luma_minus8(&mut self, v: u32) {
        put(&mut self.dw[5], 27, 29, v);
    }
}

impl PicState {
    pub fn set_pak_transform_skip(&mut self, v: bool) {
        put(&mut self.dw[1], 15, 15, v as u32);
    }

    pub fn set_insert_test_flag(&mut self, v: bool) {
        put(&mut self.dw[3], 2, 2, v as u32);
    }

    pub fn set_lcu_max_bitsize_allowed(&mut self, v: u32) {
        put(&mut self.dw[6], 0, 15, v);
    }

    pub fn set_non_first_pass(&mut self, v: bool) {
        put(&mut self.dw[6], 16, 16, v as u32);
    }

    pub fn set_lcu_max_bit_status_enable(&mut self, v: bool) {
        put(&mut self.dw[6], 24, 24, v as u32);
    }

    pub fn set_frame_size_over_status_enable(&mut self, v: bool) {
        put(&mut self.dw[6], 25, 25, v as u32);
    }

    pub fn set_frame_size_under_status_enable(&mut self, v: bool) {
        put(&mut self.dw[6], 26, 26, v as u32);
    }

    pub fn set_load_slice_pointer(&mut self, v: bool) {
        put(&mut self.dw[6], 29, 29, v as u32);
    }

    pub fn set_min_frame_size(&mut self, size: u32, units: u32) {
        put(&mut self.dw[18], 0, 15, size);
        put(&mut self.dw[18], 30, 31, units);
    }
}

hcp_command!(
    /// HCP_TILE_STATE (media instruction command 17), decode only.
    TileState,
    13,
    0x7391_000b
);

impl TileStateFields for TileState {
    fn set_num_tile_columns_minus1(&mut self, v: u32) {
        put(&mut self.dw[1], 5, 9, v);
    }

    fn set_num_tile_rows_minus1(&mut self, v: u32) {
        put(&mut self.dw[1], 0, 4, v);
    }

    fn set_column_position(&mut self, group: usize, slot: usize, ctb_pos: u32) {
        debug_assert!(group < 5 && slot < 4);
        let lo = (slot as u32) * 8;
        put(&mut self.dw[2 + group], lo, lo + 7, ctb_pos);
    }

    fn set_row_position(&mut self, group: usize, slot: usize, ctb_pos: u32) {
        debug_assert!(group < 6 && slot < 4);
        let lo = (slot as u32) * 8;
        put(&mut self.dw[7 + group], lo, lo + 7, ctb_pos);
    }
}

hcp_command!(
    /// HCP_REF_IDX_STATE (media instruction command 18).
    RefIdxState,
    18,
    0x7392_0010
);

impl RefIdxStateFields for RefIdxState {
    fn set_ref_pic_list_num(&mut self, v: u32) {
        put(&mut self.dw[1], 0, 0, v);
    }

    fn set_num_ref_idx_active_minus1(&mut self, v: u32) {
        put(&mut self.dw[1], 1, 4, v);
    }

    fn set_entry(&mut self, index: usize, entry: RefEntry) {
        debug_assert!(index < crate::REF_ENTRY_COUNT);
        let dw = &mut self.dw[2 + index];
        put(dw, 0, 7, entry.tb_value as u32);
        put(dw, 8, 10, entry.frame_id as u32);
        put(dw, 13, 13, entry.long_term as u32);
        put(dw, 14, 14, entry.field_pic as u32);
        put(dw, 15, 15, entry.bottom_field as u32);
    }

    fn clear_entry(&mut self, index: usize) {
        debug_assert!(index < crate::REF_ENTRY_COUNT);
        self.dw[2 + index] = 0;
    }
}

hcp_command!(
    /// HCP_WEIGHTOFFSET_STATE (media instruction command 19). No chroma MSB
    /// extension dwords on gen9.
    WeightOffsetState,
    34,
    0x7393_0020
);

impl WeightOffsetStateFields for WeightOffsetState {
    fn set_ref_pic_list_num(&mut self, v: u32) {
        put(&mut self.dw[1], 0, 0, v);
    }

    fn set_luma_entry(&mut self, index: usize, delta_weight: i8, offset: i16) {
        debug_assert!(index < crate::REF_ENTRY_COUNT);
        let dw = &mut self.dw[2 + index];
        put(dw, 0, 7, delta_weight as u8 as u32);
        put(dw, 8, 15, offset as u8 as u32);
    }

    fn set_chroma_entry(&mut self, index: usize, delta_weights: [i8; 2], offsets: [i16; 2]) {
        debug_assert!(index < crate::REF_ENTRY_COUNT);
        let dw = &mut self.dw[18 + index];
        put(dw, 0, 7, delta_weights[0] as u8 as u32);
        put(dw, 8, 15, offsets[0] as u8 as u32);
        put(dw, 16, 23, delta_weights[1] as u8 as u32);
        put(dw, 24, 31, offsets[1] as u8 as u32);
    }
}

hcp_command!(
    /// HCP_SLICE_STATE (media instruction command 20). 9-bit slice start
    /// coordinates; DW6 reset carries the default 5/32 rounding.
    SliceState,
    11,
    0x7394_0009,
    |d| {
        d[6] = 0x1040_0000;
    }
);

impl SliceStateFields for SliceState {
    fn set_slice_start_ctb(&mut self, x: u32, y: u32) {
        put(&mut self.dw[1], 0, 8, x);
        put(&mut self.dw[1], 16, 24, y);
    }

    fn set_next_slice_start_ctb(&mut self, x: u32, y: u32) {
        put(&mut self.dw[2], 0, 8, x);
        put(&mut self.dw[2], 16, 24, y);
    }

    fn set_slice_type(&mut self, v: u32) {
        put(&mut self.dw[3], 0, 1, v);
    }

    fn set_last_slice_of_pic(&mut self, v: bool) {
        put(&mut self.dw[3], 2, 2, v as u32);
    }

    fn set_dependent_slice(&mut self, v: bool) {
        put(&mut self.dw[3], 4, 4, v as u32);
    }

    fn set_temporal_mvp_enabled(&mut self, v: bool) {
        put(&mut self.dw[3], 5, 5, v as u32);
    }

    fn set_slice_qp(&mut self, v: u32) {
        put(&mut self.dw[3], 6, 11, v);
    }

    fn set_slice_cb_qp_offset(&mut self, v: u32) {
        put(&mut self.dw[3], 12, 16, v);
    }

    fn set_slice_cr_qp_offset(&mut self, v: u32) {
        put(&mut self.dw[3], 17, 21, v);
    }

    fn set_deblocking_filter_disabled(&mut self, v: bool) {
        put(&mut self.dw[4], 0, 0, v as u32);
    }

    fn set_tc_offset_div2(&mut self, v: u32) {
        put(&mut self.dw[4], 1, 4, v);
    }

    fn set_beta_offset_div2(&mut self, v: u32) {
        put(&mut self.dw[4], 5, 8, v);
    }

    fn set_loop_filter_across_slices(&mut self, v: bool) {
        put(&mut self.dw[4], 10, 10, v as u32);
    }

    fn set_sao_chroma(&mut self, v: bool) {
        put(&mut self.dw[4], 11, 11, v as u32);
    }

    fn set_sao_luma(&mut self, v: bool) {
        put(&mut self.dw[4], 12, 12, v as u32);
    }

    fn set_mvd_l1_zero(&mut self, v: bool) {
        put(&mut self.dw[4], 13, 13, v as u32);
    }

    fn set_is_low_delay(&mut self, v: bool) {
        put(&mut self.dw[4], 14, 14, v as u32);
    }

    fn set_collocated_from_l0(&mut self, v: bool) {
        put(&mut self.dw[4], 15, 15, v as u32);
    }

    fn collocated_from_l0(&self) -> bool {
        get(self.dw[4], 15, 15) != 0
    }

    fn set_chroma_log2_weight_denom(&mut self, v: u32) {
        put(&mut self.dw[4], 16, 18, v);
    }

    fn set_luma_log2_weight_denom(&mut self, v: u32) {
        put(&mut self.dw[4], 19, 21, v);
    }

    fn set_cabac_init(&mut self, v: bool) {
        put(&mut self.dw[4], 22, 22, v as u32);
    }

    fn set_max_merge_idx(&mut self, v: u32) {
        put(&mut self.dw[4], 23, 25, v);
    }

    fn set_collocated_ref_idx(&mut self, v: u32) {
        put(&mut self.dw[4], 26, 28, v);
    }

    fn collocated_ref_idx(&self) -> u32 {
        get(self.dw[4], 26, 28)
    }

    fn set_slice_header_length(&mut self, v: u32) {
        put(&mut self.dw[5], 0, 15, v);
    }
}

impl SliceState {
    pub fn set_slice_qp_sign(&mut self, negative: bool) {
        put(&mut self.dw[3], 3, 3, negative as u32);
    }

    pub fn set_round_intra(&mut self, v: u32) {
        put(&mut self.dw[6], 20, 23, v);
    }

    pub fn set_round_inter(&mut self, v: u32) {
        put(&mut self.dw[6], 26, 29, v);
    }

    pub fn set_cabac_zero_word_insertion_enable(&mut self, v: bool) {
        put(&mut self.dw[7], 1, 1, v as u32);
    }

    pub fn set_emulation_byte_insert_enable(&mut self, v: bool) {
        put(&mut self.dw[7], 2, 2, v as u32);
    }

    pub fn set_tail_insertion_enable(&mut self, v: bool) {
        put(&mut self.dw[7], 8, 8, v as u32);
    }

    pub fn set_slice_data_enable(&mut self, v: bool) {
        put(&mut self.dw[7], 9, 9, v as u32);
    }

    pub fn set_header_insertion_enable(&mut self, v: bool) {
        put(&mut self.dw[7], 10, 10, v as u32);
    }

    pub fn set_indirect_pak_bse_data_start_offset(&mut self, v: u32) {
        put(&mut self.dw[8], 6, 28, v);
    }

    pub fn set_transform_skip_lambda(&mut self, v: u32) {
        put(&mut self.dw[9], 0, 15, v);
    }

    pub fn set_transform_skip_zero_coeff_factors(&mut self, factor0: u32, factor1: u32) {
        put(&mut self.dw[10], 0, 7, factor0);
        put(&mut self.dw[10], 16, 23, factor1);
    }

    pub fn set_transform_skip_nonzero_coeff_factors(&mut self, factor0: u32, factor1: u32) {
        put(&mut self.dw[10], 8, 15, factor0);
        put(&mut self.dw[10], 24, 31, factor1);
    }
}

hcp_command!(
    /// HCP_BSD_OBJECT (media instruction command 32).
    BsdObject,
    3,
    0x73a0_0001
);

impl BsdObjectFields for BsdObject {
    fn set_bsd_data_length(&mut self, v: u32) {
        self.dw[1] = v;
    }

    fn set_data_start_offset(&mut self, v: u32) {
        put(&mut self.dw[2], 0, 28, v);
    }
}

hcp_command!(
    /// HCP_VP9_PIC_STATE (media instruction command 48). The decoder uses
    /// only the first 12 of the 33 generated dwords.
    Vp9PicState,
    33,
    0x73b0_001f
);

impl Vp9PicState {
    /// Number of dwords the decoder actually consumes.
    pub const DECODER_DW_USED: usize = 12;

    pub fn set_dword_length(&mut self, dw_used: usize) {
        put(&mut self.dw[0], 0, 11, crate::op_length(dw_used));
    }

    pub fn set_frame_size_minus1(&mut self, width_minus1: u32, height_minus1: u32) {
        put(&mut self.dw[1], 0, 13, width_minus1);
        put(&mut self.dw[1], 16, 29, height_minus1);
    }

    pub fn set_frame_type(&mut self, inter: bool) {
        put(&mut self.dw[2], 0, 0, inter as u32);
    }

    pub fn set_adapt_probabilities(&mut self, v: bool) {
        put(&mut self.dw[2], 1, 1, v as u32);
    }

    pub fn set_intra_only(&mut self, v: bool) {
        put(&mut self.dw[2], 2, 2, v as u32);
    }

    pub fn set_allow_hi_precision_mv(&mut self, v: bool) {
        put(&mut self.dw[2], 3, 3, v as u32);
    }

    pub fn set_mcomp_filter_type(&mut self, v: u32) {
        put(&mut self.dw[2], 4, 6, v);
    }

    pub fn set_ref_frame_sign_bias(&mut self, mask: u32) {
        put(&mut self.dw[2], 7, 9, mask);
    }

    pub fn set_use_prev_in_find_mv_references(&mut self, v: bool) {
        put(&mut self.dw[2], 10, 10, v as u32);
    }

    pub fn set_hybrid_prediction_mode(&mut self, v: bool) {
        put(&mut self.dw[2], 11, 11, v as u32);
    }

    pub fn set_selectable_tx_mode(&mut self, v: bool) {
        put(&mut self.dw[2], 12, 12, v as u32);
    }

    pub fn set_last_frame_type_non_key(&mut self, v: bool) {
        put(&mut self.dw[2], 13, 13, v as u32);
    }

    pub fn set_refresh_frame_context(&mut self, v: bool) {
        put(&mut self.dw[2], 14, 14, v as u32);
    }

    pub fn set_error_resilient_mode(&mut self, v: bool) {
        put(&mut self.dw[2], 15, 15, v as u32);
    }

    pub fn set_frame_parallel_decoding_mode(&mut self, v: bool) {
        put(&mut self.dw[2], 16, 16, v as u32);
    }

    pub fn set_filter_level(&mut self, v: u32) {
        put(&mut self.dw[2], 17, 22, v);
    }

    pub fn set_sharpness_level(&mut self, v: u32) {
        put(&mut self.dw[2], 23, 25, v);
    }

    pub fn set_segmentation_enabled(&mut self, v: bool) {
        put(&mut self.dw[2], 26, 26, v as u32);
    }

    pub fn segmentation_enabled(&self) -> bool {
        get(self.dw[2], 26, 26) != 0
    }

    pub fn set_segmentation_update_map(&mut self, v: bool) {
        put(&mut self.dw[2], 27, 27, v as u32);
    }

    pub fn segmentation_update_map(&self) -> bool {
        get(self.dw[2], 27, 27) != 0
    }

    pub fn set_segmentation_temporal_update(&mut self, v: bool) {
        put(&mut self.dw[2], 28, 28, v as u32);
    }

    pub fn set_lossless_mode(&mut self, v: bool) {
        put(&mut self.dw[2], 29, 29, v as u32);
    }

    pub fn set_segment_id_streamout_enable(&mut self, v: bool) {
        put(&mut self.dw[2], 30, 30, v as u32);
    }

    pub fn set_segment_id_streamin_enable(&mut self, v: bool) {
        put(&mut self.dw[2], 31, 31, v as u32);
    }

    pub fn set_log2_tile_column(&mut self, v: u32) {
        put(&mut self.dw[3], 0, 3, v);
    }

    pub fn set_log2_tile_row(&mut self, v: u32) {
        put(&mut self.dw[3], 8, 9, v);
    }

    pub fn set_chroma_sampling_format(&mut self, v: u32) {
        put(&mut self.dw[3], 22, 23, v);
    }

    pub fn set_bit_depth_minus8(&mut self, v: u32) {
        put(&mut self.dw[3], 24, 27, v);
    }

    pub fn set_profile_level(&mut self, v: u32) {
        put(&mut self.dw[3], 28, 31, v);
    }

    /// `role`: 0 = last, 1 = golden, 2 = altref (DW4..6).
    pub fn set_scale_factor(&mut self, role: usize, horizontal: u32, vertical: u32) {
        debug_assert!(role < 3);
        put(&mut self.dw[4 + role], 0, 15, vertical);
        put(&mut self.dw[4 + role], 16, 31, horizontal);
    }

    /// `role`: 0 = last, 1 = golden, 2 = altref (DW7..9).
    pub fn set_ref_frame_size_minus1(&mut self, role: usize, width_minus1: u32, height_minus1: u32) {
        debug_assert!(role < 3);
        put(&mut self.dw[7 + role], 0, 13, width_minus1);
        put(&mut self.dw[7 + role], 16, 29, height_minus1);
    }

    pub fn set_uncompressed_header_length(&mut self, bytes: u32) {
        put(&mut self.dw[10], 0, 7, bytes);
    }

    pub fn set_first_partition_size(&mut self, bytes: u32) {
        put(&mut self.dw[10], 16, 31, bytes);
    }

    pub fn set_base_q_index(&mut self, v: u32) {
        put(&mut self.dw[13], 16, 23, v);
    }

    /// Sign/magnitude encoded q-index deltas (5-bit fields).
    pub fn set_q_index_deltas(&mut self, chroma_ac: u32, chroma_dc: u32, luma_dc: u32) {
        put(&mut self.dw[14], 0, 4, chroma_ac);
        put(&mut self.dw[14], 8, 12, chroma_dc);
        put(&mut self.dw[14], 16, 20, luma_dc);
    }

    /// Sign/magnitude encoded loop-filter reference deltas (7-bit fields).
    pub fn set_lf_ref_deltas(&mut self, deltas: [u32; 4]) {
        for (i, &v) in deltas.iter().enumerate() {
            let lo = (i as u32) * 8;
            put(&mut self.dw[15], lo, lo + 6, v);
        }
    }

    /// Sign/magnitude encoded loop-filter mode deltas (7-bit fields).
    pub fn set_lf_mode_deltas(&mut self, deltas: [u32; 2]) {
        put(&mut self.dw[16], 0, 6, deltas[0]);
        put(&mut self.dw[16], 8, 14, deltas[1]);
    }

    pub fn set_bit_offsets_for_lf_deltas(&mut self, ref_delta: u32, mode_delta: u32) {
        put(&mut self.dw[17], 0, 15, ref_delta);
        put(&mut self.dw[17], 16, 31, mode_delta);
    }

    pub fn set_bit_offsets_for_qindex_and_lf_level(&mut self, qindex: u32, lf_level: u32) {
        put(&mut self.dw[18], 0, 15, qindex);
        put(&mut self.dw[18], 16, 31, lf_level);
    }
}

hcp_command!(
    /// HCP_VP9_SEGMENT_STATE (media instruction command 50).
    Vp9SegmentState,
    8,
    0x73b2_0006
);

impl Vp9SegmentState {
    pub fn set_segment_id(&mut self, v: u32) {
        put(&mut self.dw[1], 0, 2, v);
    }

    pub fn set_segment_skipped(&mut self, v: bool) {
        put(&mut self.dw[2], 0, 0, v as u32);
    }

    pub fn set_segment_reference(&mut self, v: u32) {
        put(&mut self.dw[2], 1, 2, v);
    }

    pub fn set_segment_reference_enabled(&mut self, v: bool) {
        put(&mut self.dw[2], 3, 3, v as u32);
    }

    /// Filter level per (reference, mode); references 0/1 in DW3, 2/3 in DW4.
    pub fn set_filter_level(&mut self, reference: usize, mode: usize, level: u32) {
        debug_assert!(reference < 4 && mode < 2);
        let dw = 3 + reference / 2;
        let lo = ((reference % 2) as u32) * 16 + (mode as u32) * 8;
        put(&mut self.dw[dw], lo, lo + 5, level);
    }

    pub fn set_luma_quant_scales(&mut self, dc: u32, ac: u32) {
        put(&mut self.dw[5], 0, 15, dc);
        put(&mut self.dw[5], 16, 31, ac);
    }

    pub fn set_chroma_quant_scales(&mut self, dc: u32, ac: u32) {
        put(&mut self.dw[6], 0, 15, dc);
        put(&mut self.dw[6], 16, 31, ac);
    }

    /// Sign/magnitude encoded encode-mode deltas (9-bit qindex, 7-bit LF).
    pub fn set_encode_deltas(&mut self, qindex_delta: u32, lf_level_delta: u32) {
        put(&mut self.dw[7], 0, 8, qindex_delta);
        put(&mut self.dw[7], 16, 22, lf_level_delta);
    }
}
