//! Field-level abstraction over the per-generation command layouts.
//!
//! The generation-independent builders only ever touch descriptor fields
//! through these traits; each hardware generation implements them with its
//! own bit positions and widths. A [`CmdSet`] bundles one generation's
//! descriptor types so a builder written once monomorphizes per generation
//! with no runtime dispatch.

/// A fixed-size hardware command descriptor.
pub trait HcpCommand: Default {
    /// Total dword count, matching the length encoded in the DW0 header.
    const DW_SIZE: usize;

    /// Total serialized byte size.
    const BYTE_SIZE: usize = Self::DW_SIZE * 4;

    fn dwords(&self) -> &[u32];

    fn dwords_mut(&mut self) -> &mut [u32];

    /// The exact bytes appended to the command buffer.
    fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.dwords())
    }
}

/// HCP_SURFACE_STATE fields written by the shared surface builders.
pub trait SurfaceStateFields: HcpCommand {
    fn set_surface_id(&mut self, id: u32);
    fn set_pitch_minus1(&mut self, pitch_minus1: u32);
    fn set_y_offset_for_cb(&mut self, pixels: u32);
}

/// HCP_IND_OBJ_BASE_ADDR_STATE: the builder only needs the dword locations
/// of the address fields the resource collaborator patches.
pub trait IndObjBaseAddrFields: HcpCommand {
    const BITSTREAM_ADDR_DW: usize;
    const CU_OBJECT_ADDR_DW: usize;
    const PAK_BSE_ADDR_DW: usize;
    const COMPRESSED_HEADER_ADDR_DW: usize;
    const PROB_COUNTER_ADDR_DW: usize;
    const PROB_DELTA_ADDR_DW: usize;
    const TILE_RECORD_ADDR_DW: usize;
}

/// HCP_QM_STATE fields.
pub trait QmStateFields: HcpCommand {
    fn set_prediction_type(&mut self, intra0_inter1: u32);
    fn set_size_id(&mut self, size_id: u32);
    fn set_color_component(&mut self, component: u32);
    fn set_dc_coefficient(&mut self, dc: u32);
    /// The 64-byte coefficient table, packed four 8-bit values per dword.
    fn matrix_bytes_mut(&mut self) -> &mut [u8];
}

/// HCP_PIC_STATE fields shared between decode and encode.
pub trait PicStateFields: HcpCommand {
    fn set_frame_width_in_min_cb_minus1(&mut self, v: u32);
    fn set_frame_height_in_min_cb_minus1(&mut self, v: u32);
    fn set_min_cu_size(&mut self, v: u32);
    fn set_ctb_size(&mut self, v: u32);
    fn set_min_tu_size(&mut self, v: u32);
    fn set_max_tu_size(&mut self, v: u32);
    fn set_min_pcm_size(&mut self, v: u32);
    fn set_max_pcm_size(&mut self, v: u32);
    fn set_col_pic_is_i(&mut self, v: bool);
    fn set_cur_pic_is_i(&mut self, v: bool);
    fn set_sao_enabled(&mut self, v: bool);
    fn set_pcm_enabled(&mut self, v: bool);
    fn set_cu_qp_delta_enabled(&mut self, v: bool);
    fn set_diff_cu_qp_delta_depth(&mut self, v: u32);
    fn set_pcm_loop_filter_disable(&mut self, v: bool);
    fn set_constrained_intra_pred(&mut self, v: bool);
    fn set_log2_parallel_merge_level_minus2(&mut self, v: u32);
    fn set_sign_data_hiding(&mut self, v: bool);
    fn set_loop_filter_across_tiles(&mut self, v: bool);
    fn set_entropy_coding_sync(&mut self, v: bool);
    fn set_tiles_enabled(&mut self, v: bool);
    fn set_weighted_bipred(&mut self, v: bool);
    fn set_weighted_pred(&mut self, v: bool);
    fn set_field_pic(&mut self, v: bool);
    fn set_bottom_field(&mut self, v: bool);
    fn set_transform_skip_enabled(&mut self, v: bool);
    fn set_amp_enabled(&mut self, v: bool);
    fn set_transquant_bypass_enabled(&mut self, v: bool);
    fn set_strong_intra_smoothing(&mut self, v: bool);
    fn set_pic_cb_qp_offset(&mut self, v: u32);
    fn set_pic_cr_qp_offset(&mut self, v: u32);
    fn set_max_tu_depth_intra(&mut self, v: u32);
    fn set_max_tu_depth_inter(&mut self, v: u32);
    fn set_pcm_bit_depth_chroma_minus1(&mut self, v: u32);
    fn set_pcm_bit_depth_luma_minus1(&mut self, v: u32);
    fn set_bit_depth_chroma_minus8(&mut self, v: u32);
    fn set_bit_depth_luma_minus8(&mut self, v: u32);
}

/// HCP_TILE_STATE fields.
pub trait TileStateFields: HcpCommand {
    fn set_num_tile_columns_minus1(&mut self, v: u32);
    fn set_num_tile_rows_minus1(&mut self, v: u32);
    /// Writes one CTB position into a column-position group (4 slots each).
    fn set_column_position(&mut self, group: usize, slot: usize, ctb_pos: u32);
    /// Writes one CTB position into a row-position group (4 slots each).
    fn set_row_position(&mut self, group: usize, slot: usize, ctb_pos: u32);
}

/// One resolved reference-list entry for HCP_REF_IDX_STATE.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RefEntry {
    /// Picture order count delta to the current picture, clipped to i8.
    pub tb_value: u8,
    /// Hardware reference slot (RefAddr index).
    pub frame_id: u8,
    pub long_term: bool,
    pub field_pic: bool,
    pub bottom_field: bool,
}

/// HCP_REF_IDX_STATE fields.
pub trait RefIdxStateFields: HcpCommand {
    fn set_ref_pic_list_num(&mut self, v: u32);
    fn set_num_ref_idx_active_minus1(&mut self, v: u32);
    fn set_entry(&mut self, index: usize, entry: RefEntry);
    fn clear_entry(&mut self, index: usize);
}

/// HCP_WEIGHTOFFSET_STATE fields. Offsets are truncated to their 8-bit
/// command fields the same way the hardware interface defines them.
pub trait WeightOffsetStateFields: HcpCommand {
    fn set_ref_pic_list_num(&mut self, v: u32);
    fn set_luma_entry(&mut self, index: usize, delta_weight: i8, offset: i16);
    fn set_chroma_entry(&mut self, index: usize, delta_weights: [i8; 2], offsets: [i16; 2]);
}

/// HCP_SLICE_STATE fields written by the shared slice builders.
pub trait SliceStateFields: HcpCommand {
    fn set_slice_start_ctb(&mut self, x: u32, y: u32);
    fn set_next_slice_start_ctb(&mut self, x: u32, y: u32);
    fn set_slice_type(&mut self, v: u32);
    fn set_last_slice_of_pic(&mut self, v: bool);
    fn set_dependent_slice(&mut self, v: bool);
    fn set_temporal_mvp_enabled(&mut self, v: bool);
    fn set_slice_qp(&mut self, v: u32);
    fn set_slice_cb_qp_offset(&mut self, v: u32);
    fn set_slice_cr_qp_offset(&mut self, v: u32);
    fn set_deblocking_filter_disabled(&mut self, v: bool);
    fn set_tc_offset_div2(&mut self, v: u32);
    fn set_beta_offset_div2(&mut self, v: u32);
    fn set_loop_filter_across_slices(&mut self, v: bool);
    fn set_sao_chroma(&mut self, v: bool);
    fn set_sao_luma(&mut self, v: bool);
    fn set_mvd_l1_zero(&mut self, v: bool);
    fn set_is_low_delay(&mut self, v: bool);
    fn set_collocated_from_l0(&mut self, v: bool);
    fn collocated_from_l0(&self) -> bool;
    fn set_chroma_log2_weight_denom(&mut self, v: u32);
    fn set_luma_log2_weight_denom(&mut self, v: u32);
    fn set_cabac_init(&mut self, v: bool);
    fn set_max_merge_idx(&mut self, v: u32);
    fn set_collocated_ref_idx(&mut self, v: u32);
    fn collocated_ref_idx(&self) -> u32;
    fn set_slice_header_length(&mut self, v: u32);
}

/// HCP_BSD_OBJECT fields.
pub trait BsdObjectFields: HcpCommand {
    fn set_bsd_data_length(&mut self, v: u32);
    fn set_data_start_offset(&mut self, v: u32);
}

/// One hardware generation's descriptor types, bundled for the generic
/// builders.
pub trait CmdSet {
    type SurfaceState: SurfaceStateFields;
    type IndObjBaseAddrState: IndObjBaseAddrFields;
    type QmState: QmStateFields;
    type PicState: PicStateFields;
    type TileState: TileStateFields;
    type RefIdxState: RefIdxStateFields;
    type WeightOffsetState: WeightOffsetStateFields;
    type SliceState: SliceStateFields;
    type BsdObject: BsdObjectFields;
}
