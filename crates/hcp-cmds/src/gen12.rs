//! Gen12 (TGL-class) HCP command layouts.
//!
//! Range-extension and screen-content capable hardware: 41-dword picture
//! state, 5-bit surface format field, chroma-offset MSB extension in the
//! weight/offset state, tile-position MSB dwords for 16K pictures, and the
//! tile-coding / palette-initializer commands that earlier generations lack.
//! Every DW0 reset value and bit range matches the hardware documentation;
//! changing any of them breaks the command stream silently.

use crate::bits::{get, put};
use crate::hcp_command;
use crate::iface::{
    BsdObjectFields, CmdSet, IndObjBaseAddrFields, PicStateFields, QmStateFields,
    RefEntry, RefIdxStateFields, SliceStateFields, SurfaceStateFields, TileStateFields,
    WeightOffsetStateFields,
};

/// Marker type bundling the Gen12 descriptor set.
pub struct Gen12;

impl CmdSet for Gen12 {
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

/// HCP_SURFACE_STATE surface format encodings (5-bit field).
pub mod surface_format {
    pub const YUY2: u32 = 0;
    pub const RGB8: u32 = 1;
    pub const AYUV4444: u32 = 2;
    pub const P010_VARIANT: u32 = 3;
    pub const PLANAR_420_8: u32 = 4;
    pub const Y216_Y210: u32 = 8;
    pub const RGB10: u32 = 9;
    pub const Y410: u32 = 10;
    pub const NV21_PLANAR_420_8: u32 = 11;
    pub const Y416: u32 = 12;
    pub const P010: u32 = 13;
    pub const P016: u32 = 14;
    pub const Y8: u32 = 15;
    pub const Y16: u32 = 16;
    pub const Y216_VARIANT: u32 = 17;
    pub const Y416_VARIANT: u32 = 18;
    pub const YUY2_VARIANT: u32 = 19;
    pub const AYUV4444_VARIANT: u32 = 20;
}

/// Fixed serialized byte sizes for the commands the size estimator counts
/// but this crate does not otherwise populate.
pub mod sizes {
    pub const HCP_PIPE_MODE_SELECT: u32 = 28;
    pub const HCP_PIPE_BUF_ADDR_STATE: u32 = 484;
    pub const HCP_FQM_STATE: u32 = 136;
    pub const HCP_PAK_INSERT_OBJECT: u32 = 8;
    pub const VD_PIPELINE_FLUSH: u32 = 8;
    pub const MFX_WAIT: u32 = 4;
    pub const MI_BATCH_BUFFER_END: u32 = 4;
    pub const MI_BATCH_BUFFER_START: u32 = 12;
    pub const MI_FLUSH_DW: u32 = 20;
    pub const MI_LOAD_REGISTER_IMM: u32 = 12;
    pub const MI_LOAD_REGISTER_MEM: u32 = 16;
    pub const MI_LOAD_REGISTER_REG: u32 = 12;
    pub const MI_STORE_REGISTER_MEM: u32 = 16;
    pub const MI_STORE_DATA_IMM: u32 = 20;
    pub const MI_COPY_MEM_MEM: u32 = 20;
    pub const MI_SEMAPHORE_WAIT: u32 = 20;
    pub const MI_CONDITIONAL_BATCH_BUFFER_END: u32 = 16;
    pub const MI_ATOMIC: u32 = 44;
    pub const MI_MATH: u32 = 4;
    pub const MI_ALU_PARAMS: u32 = 4;
}

/// Patch-list entries (relocated address fields) per command.
pub mod patch_counts {
    pub const MI_BATCH_BUFFER_START: u32 = 1;
    pub const MI_STORE_DATA_IMM: u32 = 1;
    pub const MI_FLUSH_DW: u32 = 1;
    pub const MI_CONDITIONAL_BATCH_BUFFER_END: u32 = 1;
    pub const MI_STORE_REGISTER_MEM: u32 = 1;
    pub const MI_COPY_MEM_MEM: u32 = 4;
    pub const MI_SEMAPHORE_WAIT: u32 = 1;
    pub const MI_ATOMIC: u32 = 1;
    pub const MFX_WAIT: u32 = 0;
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
    pub const HCP_TILE_CODING: u32 = 1;
    pub const HCP_PALETTE_INITIALIZER_STATE: u32 = 0;
}

hcp_command!(
    /// HCP_SURFACE_STATE (media instruction command 1).
    SurfaceState,
    5,
    0x7381_0003
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
        put(&mut self.dw[2], 27, 31, format);
    }

    pub fn surface_format(&self) -> u32 {
        get(self.dw[2], 27, 31)
    }

    pub fn set_default_alpha(&mut self, alpha: u32) {
        put(&mut self.dw[3], 0, 15, alpha);
    }

    /// V(Cr) plane Y offset, used by the planar variant formats.
    pub fn set_y_offset_for_cr(&mut self, pixels: u32) {
        put(&mut self.dw[3], 16, 31, pixels);
    }

    pub fn set_memory_compression_enable(&mut self, refs_mask: u32) {
        put(&mut self.dw[4], 0, 7, refs_mask);
    }

    pub fn set_compression_type(&mut self, refs_mask: u32) {
        put(&mut self.dw[4], 8, 15, refs_mask);
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
    /// HCP_QM_STATE (media instruction command 4). Issued up to 20 times per
    /// picture: 4 size ids x intra/inter x 3 colour components, minus the
    /// illegal 32x32 chroma combinations.
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
    /// HCP_PIC_STATE (media instruction command 16), issued once per picture.
    PicState,
    41,
    0x7390_0027
);

impl PicStateFields for PicState {
    fn set_frame_width_in_min_cb_minus1(&mut self, v: u32) {
        put(&mut self.dw[1], 0, 10, v);
    }

    fn set_frame_height_in_min_cb_minus1(&mut self, v: u32) {
        put(&mut self.dw[1], 16, 26, v);
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

    pub fn set_chroma_subsampling(&mut self, chroma_format_idc: u32) {
        put(&mut self.dw[2], 29, 31, chroma_format_idc);
    }

    pub fn set_log2_sao_offset_scale_luma(&mut self, v: u32) {
        put(&mut self.dw[2], 12, 14, v);
    }

    pub fn set_log2_sao_offset_scale_chroma(&mut self, v: u32) {
        put(&mut self.dw[2], 16, 18, v);
    }

    pub fn set_chroma_qp_offset_list_len_minus1(&mut self, v: u32) {
        put(&mut self.dw[2], 20, 22, v);
    }

    pub fn set_diff_cu_chroma_qp_offset_depth(&mut self, v: u32) {
        put(&mut self.dw[2], 24, 27, v);
    }

    pub fn set_chroma_qp_offset_list_enabled(&mut self, v: bool) {
        put(&mut self.dw[2], 28, 28, v as u32);
    }

    pub fn set_high_precision_offsets_enabled(&mut self, v: bool) {
        put(&mut self.dw[3], 19, 19, v as u32);
    }

    pub fn set_log2_max_transform_skip_size(&mut self, v: u32) {
        put(&mut self.dw[3], 20, 22, v);
    }

    pub fn set_cross_component_prediction_enabled(&mut self, v: bool) {
        put(&mut self.dw[3], 23, 23, v as u32);
    }

    pub fn set_cabac_bypass_alignment_enabled(&mut self, v: bool) {
        put(&mut self.dw[3], 24, 24, v as u32);
    }

    pub fn set_persistent_rice_adaptation_enabled(&mut self, v: bool) {
        put(&mut self.dw[3], 25, 25, v as u32);
    }

    pub fn set_intra_smoothing_disabled(&mut self, v: bool) {
        put(&mut self.dw[3], 26, 26, v as u32);
    }

    pub fn set_explicit_rdpcm_enabled(&mut self, v: bool) {
        put(&mut self.dw[3], 27, 27, v as u32);
    }

    pub fn set_implicit_rdpcm_enabled(&mut self, v: bool) {
        put(&mut self.dw[3], 28, 28, v as u32);
    }

    pub fn set_transform_skip_context_enabled(&mut self, v: bool) {
        put(&mut self.dw[3], 29, 29, v as u32);
    }

    pub fn set_transform_skip_rotation_enabled(&mut self, v: bool) {
        put(&mut self.dw[3], 30, 30, v as u32);
    }

    pub fn set_sps_range_extension_enabled(&mut self, v: bool) {
        put(&mut self.dw[3], 31, 31, v as u32);
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

    pub fn set_rho_domain_rate_control_enable(&mut self, v: bool) {
        put(&mut self.dw[19], 6, 6, v as u32);
    }

    pub fn set_fractional_qp_adjustment_enable(&mut self, v: bool) {
        put(&mut self.dw[19], 7, 7, v as u32);
    }

    pub fn set_rho_domain_frame_level_qp(&mut self, v: u32) {
        put(&mut self.dw[19], 8, 13, v);
    }

    pub fn set_pak_dynamic_slice_mode_enable(&mut self, v: bool) {
        put(&mut self.dw[19], 14, 14, v as u32);
    }

    pub fn set_no_output_of_prior_pics(&mut self, v: bool) {
        put(&mut self.dw[19], 15, 15, v as u32);
    }

    pub fn set_first_slice_segment_in_pic(&mut self, v: bool) {
        put(&mut self.dw[19], 16, 16, v as u32);
    }

    pub fn set_nal_unit_type_flag(&mut self, v: bool) {
        put(&mut self.dw[19], 17, 17, v as u32);
    }

    pub fn set_slice_pic_parameter_set_id(&mut self, v: u32) {
        put(&mut self.dw[19], 18, 23, v);
    }

    pub fn set_sse_enable(&mut self, v: bool) {
        put(&mut self.dw[19], 24, 24, v as u32);
    }

    pub fn set_rdoq_enable(&mut self, v: bool) {
        put(&mut self.dw[19], 25, 25, v as u32);
    }

    pub fn set_partial_frame_update_mode(&mut self, v: bool) {
        put(&mut self.dw[19], 30, 30, v as u32);
    }

    pub fn set_temporal_mv_pred_disable(&mut self, v: bool) {
        put(&mut self.dw[19], 31, 31, v as u32);
    }

    pub fn set_intra_tu_count_based_rdoq_disable(&mut self, v: bool) {
        put(&mut self.dw[20], 6, 6, v as u32);
    }

    pub fn set_slice_size_threshold_in_bytes(&mut self, v: u32) {
        self.dw[21] = v;
    }

    pub fn set_target_slice_size_in_bytes(&mut self, v: u32) {
        self.dw[22] = v;
    }

    pub fn set_cb_qp_offset_list(&mut self, list: &[i8; 6]) {
        for (i, &v) in list.iter().enumerate() {
            let lo = (i as u32) * 5;
            put(&mut self.dw[32], lo, lo + 4, v as u32);
        }
    }

    pub fn set_cr_qp_offset_list(&mut self, list: &[i8; 6]) {
        for (i, &v) in list.iter().enumerate() {
            let lo = (i as u32) * 5;
            put(&mut self.dw[33], lo, lo + 4, v as u32);
        }
    }

    pub fn set_rdoq_intra_tu_threshold(&mut self, v: u32) {
        put(&mut self.dw[37], 0, 15, v);
    }
}

hcp_command!(
    /// HCP_TILE_STATE (media instruction command 17), decode only. Includes
    /// the MSB dwords added for 16K picture support.
    TileState,
    17,
    0x7391_000f
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
    /// HCP_REF_IDX_STATE (media instruction command 18). One per list; a
    /// structurally empty instance serves as the dummy reference for
    /// intra-only pictures.
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
    /// HCP_WEIGHTOFFSET_STATE (media instruction command 19). Gen12 extends
    /// the layout with chroma-offset MSB dwords for high-precision offsets.
    WeightOffsetState,
    42,
    0x7393_0028
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
    /// HCP_SLICE_STATE (media instruction command 20). The DW6 reset value
    /// carries the hardware default intra/inter rounding of 5/32.
    SliceState,
    13,
    0x7394_000b,
    |d| {
        d[6] = 0x1040_0000;
    }
);

impl SliceStateFields for SliceState {
    fn set_slice_start_ctb(&mut self, x: u32, y: u32) {
        put(&mut self.dw[1], 0, 9, x);
        put(&mut self.dw[1], 16, 25, y);
    }

    fn set_next_slice_start_ctb(&mut self, x: u32, y: u32) {
        put(&mut self.dw[2], 0, 9, x);
        put(&mut self.dw[2], 16, 26, y);
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

    pub fn set_intra_ref_fetch_disable(&mut self, v: bool) {
        put(&mut self.dw[3], 22, 22, v as u32);
    }

    pub fn set_cu_chroma_qp_offset_enabled(&mut self, v: bool) {
        put(&mut self.dw[3], 23, 23, v as u32);
    }

    pub fn set_last_slice_of_tile(&mut self, v: bool) {
        put(&mut self.dw[3], 24, 24, v as u32);
    }

    pub fn set_last_slice_of_tile_column(&mut self, v: bool) {
        put(&mut self.dw[3], 25, 25, v as u32);
    }

    pub fn set_round_intra(&mut self, v: u32) {
        put(&mut self.dw[6], 20, 23, v);
    }

    pub fn set_round_inter(&mut self, v: u32) {
        put(&mut self.dw[6], 26, 29, v);
    }

    pub fn set_dependent_slice_due_to_tile_split(&mut self, v: bool) {
        put(&mut self.dw[7], 0, 0, v as u32);
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

    pub fn set_original_slice_start_ctb(&mut self, x: u32, y: u32) {
        put(&mut self.dw[11], 0, 9, x);
        put(&mut self.dw[11], 16, 25, y);
    }

    pub fn set_use_integer_mv(&mut self, v: bool) {
        put(&mut self.dw[12], 31, 31, v as u32);
    }
}

hcp_command!(
    /// HCP_BSD_OBJECT (media instruction command 32), the last command of a
    /// decode slice sequence.
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
    /// HCP_VP9_PIC_STATE (media instruction command 48). The decoder consumes
    /// only the first 12 dwords of the full layout; the DW0 length field is
    /// overridden accordingly on the decode path. Motion-comp scaling is
    /// enabled in the reset value.
    Vp9PicState,
    42,
    0x73b0_0028,
    |d| {
        d[11] = 0x0000_0002;
    }
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

    pub fn set_sse_enable(&mut self, v: bool) {
        put(&mut self.dw[3], 21, 21, v as u32);
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

    pub fn set_compressed_header_bin_count(&mut self, v: u32) {
        put(&mut self.dw[13], 0, 15, v);
    }

    pub fn set_base_q_index(&mut self, v: u32) {
        put(&mut self.dw[13], 16, 23, v);
    }

    pub fn set_tail_insertion_enable(&mut self, v: bool) {
        put(&mut self.dw[13], 24, 24, v as u32);
    }

    pub fn set_header_insertion_enable(&mut self, v: bool) {
        put(&mut self.dw[13], 25, 25, v as u32);
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

    pub fn set_non_first_pass(&mut self, v: bool) {
        put(&mut self.dw[19], 16, 16, v as u32);
    }

    pub fn set_vdenc_pak_only_pass(&mut self, v: bool) {
        put(&mut self.dw[19], 17, 17, v as u32);
    }

    pub fn set_bit_offset_for_first_partition_size(&mut self, v: u32) {
        put(&mut self.dw[32], 0, 15, v);
    }
}

hcp_command!(
    /// HCP_VP9_SEGMENT_STATE (media instruction command 50), issued once per
    /// segment id (up to 8).
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

hcp_command!(
    /// HEVC_VP9_RDOQ_STATE (sub-opcode 8): four 32-dword lambda tables packed
    /// two 16-bit values per dword, plus the 12-bit-depth tail.
    RdoqState,
    154,
    0x7388_0098
);

impl RdoqState {
    pub fn set_disable_htq_performance_fix0(&mut self, v: bool) {
        put(&mut self.dw[1], 31, 31, v as u32);
    }

    pub fn set_disable_htq_performance_fix1(&mut self, v: bool) {
        put(&mut self.dw[1], 30, 30, v as u32);
    }

    pub fn set_intra_luma_lambda(&mut self, index: usize, value0: u16, value1: u16) {
        Self::set_lambda_pair(&mut self.dw[2 + index], value0, value1);
    }

    pub fn set_intra_chroma_lambda(&mut self, index: usize, value0: u16, value1: u16) {
        Self::set_lambda_pair(&mut self.dw[34 + index], value0, value1);
    }

    pub fn set_inter_luma_lambda(&mut self, index: usize, value0: u16, value1: u16) {
        Self::set_lambda_pair(&mut self.dw[66 + index], value0, value1);
    }

    pub fn set_inter_chroma_lambda(&mut self, index: usize, value0: u16, value1: u16) {
        Self::set_lambda_pair(&mut self.dw[98 + index], value0, value1);
    }

    fn set_lambda_pair(dw: &mut u32, value0: u16, value1: u16) {
        put(dw, 0, 15, value0 as u32);
        put(dw, 16, 31, value1 as u32);
    }
}

hcp_command!(
    /// HCP_TILE_CODING (media instruction command 21), the gen11+ multi-pipe
    /// tile dispatch command.
    TileCoding,
    20,
    0x7395_0012
);

impl TileCoding {
    /// Dword location of the scalability synchronize buffer address pair.
    pub const SYNC_BUFFER_ADDR_DW: usize = 13;

    pub fn set_number_of_active_be_pipes(&mut self, v: u32) {
        put(&mut self.dw[1], 0, 7, v);
    }

    pub fn set_num_of_tile_columns_in_frame(&mut self, v: u32) {
        put(&mut self.dw[1], 16, 31, v);
    }

    pub fn set_tile_column_position(&mut self, v: u32) {
        put(&mut self.dw[2], 0, 9, v);
    }

    pub fn set_tile_row_position(&mut self, v: u32) {
        put(&mut self.dw[2], 16, 25, v);
    }

    pub fn set_is_last_tile_of_row(&mut self, v: bool) {
        put(&mut self.dw[2], 30, 30, v as u32);
    }

    pub fn set_is_last_tile_of_column(&mut self, v: bool) {
        put(&mut self.dw[2], 31, 31, v as u32);
    }

    pub fn set_tile_height_in_min_cb_minus1(&mut self, v: u32) {
        put(&mut self.dw[3], 0, 10, v);
    }

    pub fn set_tile_width_in_min_cb_minus1(&mut self, v: u32) {
        put(&mut self.dw[3], 16, 26, v);
    }

    pub fn set_bitstream_byte_offset(&mut self, v: u32) {
        put(&mut self.dw[4], 6, 31, v);
    }

    pub fn set_pak_frame_statistics_offset(&mut self, v: u32) {
        put(&mut self.dw[5], 6, 31, v);
    }

    pub fn set_cu_level_streamout_offset(&mut self, v: u32) {
        put(&mut self.dw[6], 6, 31, v);
    }

    pub fn set_slice_size_streamout_offset(&mut self, v: u32) {
        put(&mut self.dw[7], 6, 31, v);
    }

    pub fn set_cu_record_offset(&mut self, v: u32) {
        put(&mut self.dw[8], 6, 31, v);
    }

    pub fn set_sse_rowstore_offset(&mut self, v: u32) {
        put(&mut self.dw[9], 6, 31, v);
    }

    pub fn set_sao_rowstore_offset(&mut self, v: u32) {
        put(&mut self.dw[10], 6, 31, v);
    }

    pub fn set_tile_size_streamout_offset(&mut self, v: u32) {
        put(&mut self.dw[11], 6, 31, v);
    }

    pub fn set_vp9_probability_counter_streamout_offset(&mut self, v: u32) {
        put(&mut self.dw[12], 6, 31, v);
    }
}

hcp_command!(
    /// HCP_PALETTE_INITIALIZER_STATE (media instruction command 9), decode
    /// only: the screen-content-coding palette table. 128 entries of three
    /// 16-bit components packed 1.5 dwords per entry.
    PaletteInitializerState,
    194,
    0x7389_00c0
);

impl PaletteInitializerState {
    pub const MAX_ENTRIES: usize = 128;

    pub fn set_active_entries(&mut self, count: u32) {
        put(&mut self.dw[1], 0, 7, count);
    }

    /// Writes one palette entry (Y, Cb, Cr). Entries pack two per 3 dwords:
    /// DW(base)   = Cb0 | Y0, DW(base+1) = Y1 | Cr0, DW(base+2) = Cr1 | Cb1.
    pub fn set_entry(&mut self, index: usize, y: u16, cb: u16, cr: u16) {
        debug_assert!(index < Self::MAX_ENTRIES);
        let base = 2 + (index / 2) * 3;
        if index % 2 == 0 {
            put(&mut self.dw[base], 0, 15, y as u32);
            put(&mut self.dw[base], 16, 31, cb as u32);
            put(&mut self.dw[base + 1], 0, 15, cr as u32);
        } else {
            put(&mut self.dw[base + 1], 16, 31, y as u32);
            put(&mut self.dw[base + 2], 0, 15, cb as u32);
            put(&mut self.dw[base + 2], 16, 31, cr as u32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iface::HcpCommand;

    #[test]
    fn reset_headers_match_hardware_defaults() {
        assert_eq!(SurfaceState::default().dwords()[0], 0x7381_0003);
        assert_eq!(IndObjBaseAddrState::default().dwords()[0], 0x7383_001b);
        assert_eq!(QmState::default().dwords()[0], 0x7384_0010);
        assert_eq!(PicState::default().dwords()[0], 0x7390_0027);
        assert_eq!(TileState::default().dwords()[0], 0x7391_000f);
        assert_eq!(RefIdxState::default().dwords()[0], 0x7392_0010);
        assert_eq!(WeightOffsetState::default().dwords()[0], 0x7393_0028);
        assert_eq!(SliceState::default().dwords()[0], 0x7394_000b);
        assert_eq!(BsdObject::default().dwords()[0], 0x73a0_0001);
        assert_eq!(Vp9PicState::default().dwords()[0], 0x73b0_0028);
        assert_eq!(Vp9SegmentState::default().dwords()[0], 0x73b2_0006);
        assert_eq!(RdoqState::default().dwords()[0], 0x7388_0098);
        assert_eq!(TileCoding::default().dwords()[0], 0x7395_0012);
        assert_eq!(PaletteInitializerState::default().dwords()[0], 0x7389_00c0);
    }

    #[test]
    fn header_length_fields_encode_dword_count() {
        // DW0 bits 0..11 must hold dwords - 2 for every command.
        fn length_field<C: HcpCommand>() -> u32 {
            C::default().dwords()[0] & 0xfff
        }
        assert_eq!(length_field::<SurfaceState>(), 3);
        assert_eq!(length_field::<PicState>(), 39);
        assert_eq!(length_field::<SliceState>(), 11);
        assert_eq!(length_field::<RdoqState>(), 152);
        assert_eq!(length_field::<PaletteInitializerState>(), 192);
    }

    #[test]
    fn slice_state_reset_carries_default_rounding() {
        let cmd = SliceState::default();
        assert_eq!(cmd.dwords()[6], 0x1040_0000);
    }

    #[test]
    fn vp9_pic_state_reset_enables_motion_comp_scaling() {
        let cmd = Vp9PicState::default();
        assert_eq!(cmd.dwords()[11], 0x0000_0002);
    }

    #[test]
    fn ref_entry_packing() {
        let mut cmd = RefIdxState::default();
        cmd.set_entry(
            0,
            RefEntry {
                tb_value: 0x81, // clipped -127
                frame_id: 5,
                long_term: true,
                field_pic: false,
                bottom_field: true,
            },
        );
        assert_eq!(cmd.dwords()[2], 0x81 | (5 << 8) | (1 << 13) | (1 << 15));
    }

    #[test]
    fn qm_matrix_bytes_cover_sixteen_dwords() {
        let mut cmd = QmState::default();
        assert_eq!(cmd.matrix_bytes_mut().len(), 64);
        cmd.matrix_bytes_mut()[0] = 16;
        cmd.matrix_bytes_mut()[63] = 17;
        assert_eq!(cmd.dwords()[2] & 0xff, 16);
        assert_eq!(cmd.dwords()[17] >> 24, 17);
    }

    #[test]
    fn field_writes_do_not_spill() {
        let mut cmd = SliceState::default();
        cmd.set_slice_start_ctb(0xffff_ffff, 0xffff_ffff);
        // 10-bit x, 10-bit y; nothing outside those ranges may change.
        assert_eq!(cmd.dwords()[1], 0x03ff_03ff);
    }

    #[test]
    fn palette_entry_packing() {
        let mut cmd = PaletteInitializerState::default();
        cmd.set_entry(0, 0x0100, 0x0200, 0x0300);
        cmd.set_entry(1, 0x0400, 0x0500, 0x0600);
        assert_eq!(cmd.dwords()[2], 0x0200_0100);
        assert_eq!(cmd.dwords()[3], 0x0400_0300);
        assert_eq!(cmd.dwords()[4], 0x0600_0500);
    }
}
