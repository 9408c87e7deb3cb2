//! Semantic (codec-level) parameter structs consumed by the builders.
//!
//! These mirror what the slice/picture headers of the bitstream carry; the
//! orchestrating pipeline owns them and passes them by reference. The
//! builders read them and derive hardware fields; nothing here is
//! bit-packed.

use bitflags::bitflags;

use crate::sink::ResourceId;

/// Maximum reference pictures HEVC tracks per list.
pub const MAX_REF_FRAMES: usize = 15;

/// VP9 reference frame slots in the uncompressed header.
pub const VP9_REF_FRAMES: usize = 8;

/// VP9 segment count.
pub const VP9_SEGMENTS: usize = 8;

/// Smallest VP9 coded block width; frame dimensions are aligned up to it.
pub const VP9_MIN_BLOCK_WIDTH: u32 = 8;

/// Hardware limits on HEVC tile partitioning.
pub const MAX_TILE_COLUMNS: usize = 20;
pub const MAX_TILE_ROWS: usize = 22;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Standard {
    Hevc,
    Vp9,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodecMode {
    HevcDecode,
    HevcEncode,
    Vp9Decode,
    Vp9Encode,
}

impl CodecMode {
    pub fn standard(self) -> Standard {
        match self {
            CodecMode::HevcDecode | CodecMode::HevcEncode => Standard::Hevc,
            CodecMode::Vp9Decode | CodecMode::Vp9Encode => Standard::Vp9,
        }
    }

    pub fn is_decode(self) -> bool {
        matches!(self, CodecMode::HevcDecode | CodecMode::Vp9Decode)
    }
}

/// Chroma subsampling, numbered as the bitstream's chroma_format_idc.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd)]
pub enum ChromaFormat {
    Monochrome = 0,
    #[default]
    Yuv420 = 1,
    Yuv422 = 2,
    Yuv444 = 3,
}

impl ChromaFormat {
    pub fn idc(self) -> u32 {
        self as u32
    }
}

/// Pixel layout of a surface as allocated by the driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    Nv12,
    P010,
    P016,
    P210,
    Yuy2,
    Y210,
    Ayuv,
    Y410,
    Y416,
    Rgb10,
    Bgr10,
}

impl PixelFormat {
    /// True for the formats that carry 10 or more bits per component.
    pub fn is_10bit(self) -> bool {
        matches!(
            self,
            PixelFormat::P010
                | PixelFormat::P210
                | PixelFormat::Y210
                | PixelFormat::Y410
                | PixelFormat::Rgb10
                | PixelFormat::Bgr10
        )
    }
}

/// Surface role in the HCP_SURFACE_STATE command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceId {
    /// HEVC current decoded picture.
    DecodedPicture,
    /// Encoder source input.
    Source,
    /// VP9 previous reference.
    PrevReference,
    /// VP9 golden reference.
    GoldenReference,
    /// VP9 altref reference.
    AltRefReference,
    /// HEVC reference pictures.
    HevcReferences,
}

impl SurfaceId {
    pub fn raw(self) -> u32 {
        match self {
            SurfaceId::DecodedPicture => 0,
            SurfaceId::Source => 1,
            SurfaceId::PrevReference => 2,
            SurfaceId::GoldenReference => 3,
            SurfaceId::AltRefReference => 4,
            SurfaceId::HevcReferences => 5,
        }
    }
}

/// The subset of a driver surface the surface-state builder needs.
#[derive(Clone, Copy, Debug)]
pub struct Surface {
    pub pitch: u32,
    pub format: PixelFormat,
    /// Y offset of the U(Cb) plane, in rows.
    pub u_plane_y_offset: u32,
}

#[derive(Clone, Copy, Debug)]
pub struct SurfaceParams<'a> {
    pub mode: CodecMode,
    pub surface_id: SurfaceId,
    pub surface: Option<&'a Surface>,
    pub bit_depth_luma_minus8: u8,
    pub bit_depth_chroma_minus8: u8,
    pub chroma_format: ChromaFormat,
    /// Caller override for the chroma plane alignment; 0 selects the
    /// per-role default.
    pub uv_plane_alignment: u32,
    /// Reconstructed surface height, used for the planar variant formats.
    pub recon_surface_height: u32,
}

/// HEVC sequence/picture parameter fields consumed by the builders.
#[derive(Clone, Debug, Default)]
pub struct HevcPicParams {
    pub pic_width_in_min_cbs_y: u16,
    pub pic_height_in_min_cbs_y: u16,
    pub log2_min_luma_coding_block_size_minus3: u8,
    pub log2_diff_max_min_luma_coding_block_size: u8,
    pub log2_min_transform_block_size_minus2: u8,
    pub log2_diff_max_min_transform_block_size: u8,
    pub log2_min_pcm_luma_coding_block_size_minus3: u8,
    pub log2_diff_max_min_pcm_luma_coding_block_size: u8,
    pub chroma_format_idc: u8,
    pub bit_depth_luma_minus8: u8,
    pub bit_depth_chroma_minus8: u8,

    pub sample_adaptive_offset_enabled: bool,
    pub pcm_enabled: bool,
    pub cu_qp_delta_enabled: bool,
    pub diff_cu_qp_delta_depth: u8,
    pub pcm_loop_filter_disabled: bool,
    pub constrained_intra_pred: bool,
    pub log2_parallel_merge_level_minus2: u8,
    pub sign_data_hiding_enabled: bool,
    pub loop_filter_across_tiles_enabled: bool,
    pub entropy_coding_sync_enabled: bool,
    pub tiles_enabled: bool,
    pub weighted_pred: bool,
    pub weighted_bipred: bool,
    pub transform_skip_enabled: bool,
    pub amp_enabled: bool,
    pub transquant_bypass_enabled: bool,
    pub strong_intra_smoothing_enabled: bool,

    pub pps_cb_qp_offset: i8,
    pub pps_cr_qp_offset: i8,
    pub max_transform_hierarchy_depth_intra: u8,
    pub max_transform_hierarchy_depth_inter: u8,
    pub pcm_sample_bit_depth_luma_minus1: u8,
    pub pcm_sample_bit_depth_chroma_minus1: u8,
    pub init_qp_minus26: i8,

    pub num_tile_columns_minus1: u8,
    pub num_tile_rows_minus1: u8,

    pub curr_pic_order_cnt: i32,
    pub pic_order_cnt_list: [i32; MAX_REF_FRAMES],
    /// Per-reference field/bottom-field flags, one bit per frame index.
    /// Bit 15 describes the current picture.
    pub ref_field_pic_flags: u16,
    pub ref_bottom_field_flags: u16,
}

impl HevcPicParams {
    /// CTB edge size in pixels.
    pub fn ctb_size(&self) -> u32 {
        1 << (self.log2_diff_max_min_luma_coding_block_size as u32
            + self.log2_min_luma_coding_block_size_minus3 as u32
            + 3)
    }

    /// Picture width in pixels, from the minimum-CB geometry.
    pub fn width_in_pixels(&self) -> u32 {
        (1 << (self.log2_min_luma_coding_block_size_minus3 as u32 + 3))
            * self.pic_width_in_min_cbs_y as u32
    }

    /// Picture width in CTBs, rounded up.
    pub fn width_in_ctbs(&self) -> u32 {
        self.width_in_pixels().div_ceil(self.ctb_size())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HevcSliceType {
    #[default]
    B,
    P,
    I,
}

impl HevcSliceType {
    pub fn raw(self) -> u32 {
        match self {
            HevcSliceType::B => 0,
            HevcSliceType::P => 1,
            HevcSliceType::I => 2,
        }
    }
}

/// One reference-list entry as signaled in the slice header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PicEntry {
    pub frame_idx: u8,
    pub invalid: bool,
}

/// HEVC slice header fields consumed by the slice-level builders.
#[derive(Clone, Debug)]
pub struct HevcSliceParams {
    pub slice_segment_address: u32,
    pub slice_type: HevcSliceType,
    pub dependent_slice_segment: bool,
    pub temporal_mvp_enabled: bool,
    pub slice_qp_delta: i8,
    pub slice_cb_qp_offset: i8,
    pub slice_cr_qp_offset: i8,
    pub deblocking_filter_disabled: bool,
    pub tc_offset_div2: i8,
    pub beta_offset_div2: i8,
    pub loop_filter_across_slices_enabled: bool,
    pub sao_luma: bool,
    pub sao_chroma: bool,
    pub mvd_l1_zero: bool,
    pub cabac_init: bool,
    pub collocated_from_l0: bool,
    pub collocated_ref_idx: u8,
    pub five_minus_max_num_merge_cand: u8,
    pub luma_log2_weight_denom: u8,
    pub delta_chroma_log2_weight_denom: i8,
    pub num_ref_idx_l0_active_minus1: u8,
    pub num_ref_idx_l1_active_minus1: u8,
    pub ref_pic_list: [[PicEntry; MAX_REF_FRAMES]; 2],
    pub byte_offset_to_slice_data: u32,
    pub slice_data_offset: u32,
    pub slice_data_size: u32,
}

impl Default for HevcSliceParams {
    fn default() -> Self {
        Self {
            slice_segment_address: 0,
            slice_type: HevcSliceType::I,
            dependent_slice_segment: false,
            temporal_mvp_enabled: false,
            slice_qp_delta: 0,
            slice_cb_qp_offset: 0,
            slice_cr_qp_offset: 0,
            deblocking_filter_disabled: false,
            tc_offset_div2: 0,
            beta_offset_div2: 0,
            loop_filter_across_slices_enabled: false,
            sao_luma: false,
            sao_chroma: false,
            mvd_l1_zero: false,
            cabac_init: false,
            collocated_from_l0: false,
            collocated_ref_idx: 0,
            five_minus_max_num_merge_cand: 0,
            luma_log2_weight_denom: 0,
            delta_chroma_log2_weight_denom: 0,
            num_ref_idx_l0_active_minus1: 0,
            num_ref_idx_l1_active_minus1: 0,
            ref_pic_list: [[PicEntry::default(); MAX_REF_FRAMES]; 2],
            byte_offset_to_slice_data: 0,
            slice_data_offset: 0,
            slice_data_size: 0,
        }
    }
}

/// Everything a slice-level build needs, bundled per invocation.
#[derive(Clone, Copy, Debug)]
pub struct HevcSliceState<'a> {
    pub pic: &'a HevcPicParams,
    pub slice: &'a HevcSliceParams,
    /// Slice following this one in decode order; `None` for the last slice.
    pub next_slice: Option<&'a HevcSliceParams>,
    pub slice_index: u32,
    pub last_slice: bool,
    /// Frame index to hardware reference slot mapping; negative means the
    /// frame is not mapped.
    pub ref_idx_mapping: &'a [i8; MAX_REF_FRAMES],
    /// Bitstream buffer backing this slice (protection pass-through).
    pub data_buffer: Option<ResourceId>,
    /// Byte offset added to the slice data offset for protection setup.
    pub data_buffer_offset: u32,
}

/// Reference-list state for one HCP_REF_IDX_STATE command.
#[derive(Clone, Debug)]
pub struct RefIdxParams<'a> {
    pub curr_pic_frame_idx: u8,
    /// 0 = L0, 1 = L1.
    pub list: u8,
    pub num_refs_in_list: u8,
    pub ref_pic_list: &'a [[PicEntry; MAX_REF_FRAMES]; 2],
    pub poc_curr_pic: i32,
    pub poc_list: &'a [i32; MAX_REF_FRAMES],
    pub ref_idx_mapping: &'a [i8; MAX_REF_FRAMES],
    /// One bit per frame index.
    pub long_term_flags: u16,
    pub field_pic_flags: u16,
    pub bottom_field_flags: u16,
    /// Emit the structurally empty command required for intra-only pictures.
    pub dummy_reference: bool,
}

/// Explicit weighted-prediction tables for one list.
#[derive(Clone, Debug)]
pub struct WeightOffsetParams {
    /// 0 = L0, 1 = L1.
    pub list: u8,
    pub luma_weights: [[i8; MAX_REF_FRAMES]; 2],
    pub luma_offsets: [[i16; MAX_REF_FRAMES]; 2],
    pub chroma_weights: [[[i8; 2]; MAX_REF_FRAMES]; 2],
    pub chroma_offsets: [[[i16; 2]; MAX_REF_FRAMES]; 2],
}

impl Default for WeightOffsetParams {
    fn default() -> Self {
        Self {
            list: 0,
            luma_weights: [[0; MAX_REF_FRAMES]; 2],
            luma_offsets: [[0; MAX_REF_FRAMES]; 2],
            chroma_weights: [[[0; 2]; MAX_REF_FRAMES]; 2],
            chroma_offsets: [[[0; 2]; MAX_REF_FRAMES]; 2],
        }
    }
}

/// Flattened HEVC scaling lists, laid out per size id.
#[derive(Clone, Debug)]
pub struct HevcIqMatrix {
    /// 4x4 lists: [3 * pred_type + colour][16].
    pub list_4x4: [[u8; 16]; 6],
    /// 8x8 lists: [3 * pred_type + colour][64].
    pub list_8x8: [[u8; 64]; 6],
    /// 16x16 lists: [3 * pred_type + colour][64].
    pub list_16x16: [[u8; 64]; 6],
    /// 32x32 lists: [pred_type][64]; chroma is illegal at this size.
    pub list_32x32: [[u8; 64]; 2],
    pub dc_16x16: [u8; 6],
    pub dc_32x32: [u8; 2],
}

impl Default for HevcIqMatrix {
    fn default() -> Self {
        // Flat default matrices (scaling disabled still programs 16s).
        Self {
            list_4x4: [[16; 16]; 6],
            list_8x8: [[16; 64]; 6],
            list_16x16: [[16; 64]; 6],
            list_32x32: [[16; 64]; 2],
            dc_16x16: [16; 6],
            dc_32x32: [16; 2],
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct QmParams<'a> {
    pub standard: Standard,
    pub matrix: Option<&'a HevcIqMatrix>,
}

/// Tile partitioning for the decode-only HCP_TILE_STATE.
#[derive(Clone, Copy, Debug)]
pub struct TileParams<'a> {
    pub pic: &'a HevcPicParams,
    /// Per-column widths in CTBs.
    pub tile_col_widths: &'a [u16],
    /// Per-row heights in CTBs.
    pub tile_row_heights: &'a [u16],
}

/// Indirect-object base addresses for one picture.
#[derive(Clone, Copy, Debug, Default)]
pub struct IndObjParams {
    pub data_buffer: Option<ResourceId>,
    pub data_offset: u32,
    pub data_size: u32,
    pub mv_object_buffer: Option<ResourceId>,
    pub mv_object_offset: u32,
    pub mv_object_size: u32,
    pub pak_base_object_buffer: Option<ResourceId>,
    pub pak_base_object_size: u32,
    pub compressed_header_buffer: Option<ResourceId>,
    pub compressed_header_size: u32,
    pub probability_counter_buffer: Option<ResourceId>,
    pub probability_counter_offset: u32,
    pub probability_counter_size: u32,
    pub probability_delta_buffer: Option<ResourceId>,
    pub probability_delta_size: u32,
    pub tile_record_buffer: Option<ResourceId>,
    pub tile_record_size: u32,
}

#[derive(Clone, Copy, Debug)]
pub struct IndObjBaseAddrParams {
    pub mode: CodecMode,
    pub buffers: IndObjParams,
}

/// Bitstream object span for one decode slice.
#[derive(Clone, Copy, Debug, Default)]
pub struct BsdParams {
    pub data_length: u32,
    pub data_start_offset: u32,
}

bitflags! {
    /// VP9 per-list reference-control mask: which of last/golden/altref the
    /// current frame actually uses.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Vp9RefCtrl: u8 {
        const LAST = 1 << 0;
        const GOLDEN = 1 << 1;
        const ALTREF = 1 << 2;
    }
}

/// VP9 uncompressed-header picture fields consumed by the builders.
#[derive(Clone, Debug, Default)]
pub struct Vp9PicParams {
    pub frame_width_minus1: u16,
    pub frame_height_minus1: u16,
    /// False = key frame.
    pub inter_frame: bool,
    pub intra_only: bool,
    pub error_resilient_mode: bool,
    pub frame_parallel_decoding_mode: bool,
    pub refresh_frame_context: bool,
    pub allow_high_precision_mv: bool,
    pub mcomp_filter_type: u8,
    pub segmentation_enabled: bool,
    pub segmentation_update_map: bool,
    pub segmentation_temporal_update: bool,
    pub lossless: bool,
    pub filter_level: u8,
    pub sharpness_level: u8,
    pub log2_tile_columns: u8,
    pub log2_tile_rows: u8,
    pub subsampling_x: u8,
    pub subsampling_y: u8,
    pub bit_depth_minus8: u8,
    pub profile: u8,
    pub uncompressed_header_length_in_bytes: u8,
    pub first_partition_size: u16,

    pub ref_frame_list: [PicEntry; VP9_REF_FRAMES],
    pub last_ref_idx: u8,
    pub golden_ref_idx: u8,
    pub alt_ref_idx: u8,
    pub last_ref_sign_bias: bool,
    pub golden_ref_sign_bias: bool,
    pub alt_ref_sign_bias: bool,

    // Encode only.
    pub src_frame_width_minus1: u16,
    pub src_frame_height_minus1: u16,
    pub ref_ctrl_l0: Vp9RefCtrl,
    pub ref_ctrl_l1: Vp9RefCtrl,
    pub comp_prediction_mode: u8,
    pub luma_ac_q_index: u8,
    pub luma_dc_q_index_delta: i8,
    pub chroma_ac_q_index_delta: i8,
    pub chroma_dc_q_index_delta: i8,
    pub lf_ref_delta: [i8; 4],
    pub lf_mode_delta: [i8; 2],
    pub bit_offset_for_lf_ref_delta: u16,
    pub bit_offset_for_lf_mode_delta: u16,
    pub bit_offset_for_lf_level: u16,
    pub bit_offset_for_q_index: u16,
    pub bit_offset_for_first_partition_size: u16,
}

impl Vp9PicParams {
    pub fn sign_bias_mask(&self) -> u32 {
        self.last_ref_sign_bias as u32
            | (self.golden_ref_sign_bias as u32) << 1
            | (self.alt_ref_sign_bias as u32) << 2
    }
}

/// Reconstructed dimensions of one tracked VP9 reference frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct Vp9RefFrame {
    pub width: u32,
    pub height: u32,
}

/// Relevant state of the previously decoded/encoded frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct Vp9PrevFrameParams {
    pub key_frame: bool,
    pub intra_only: bool,
    pub display: bool,
}

/// VP9 picture-state build input, decode variant.
#[derive(Clone, Copy, Debug)]
pub struct Vp9PicState<'a> {
    pub pic: &'a Vp9PicParams,
    pub ref_list: &'a [Vp9RefFrame],
    pub prev_frame: Vp9PrevFrameParams,
    pub prev_frame_width: u32,
    pub prev_frame_height: u32,
}

/// VP9 picture-state build input, encode variant.
#[derive(Clone, Copy, Debug)]
pub struct Vp9EncodePicState<'a> {
    pub pic: &'a Vp9PicParams,
    pub ref_list: &'a [Vp9RefFrame],
    pub prev_frame: Vp9PrevFrameParams,
    pub prev_frame_width: u32,
    pub prev_frame_height: u32,
    /// Encoded chroma sampling (0 = 4:2:0, 1 = 4:2:2, 2 = 4:4:4).
    pub encoded_format: u8,
    /// 8 or 10.
    pub encoded_bit_depth: u8,
    pub tx_mode: u8,
    /// Dynamic-scaling fast path: reference the previous frame directly with
    /// the current frame's dimensions.
    pub use_dys_ref_surface: bool,
    pub sse_enable: bool,
    pub vdenc_pak_only_pass: bool,
}

/// Decode-mode segment data (from the segmentation syntax).
#[derive(Clone, Copy, Debug, Default)]
pub struct Vp9SegData {
    pub segment_skipped: bool,
    pub segment_reference: u8,
    pub segment_reference_enabled: bool,
    pub filter_level: [[u8; 2]; 4],
    pub luma_dc_quant_scale: u16,
    pub luma_ac_quant_scale: u16,
    pub chroma_dc_quant_scale: u16,
    pub chroma_ac_quant_scale: u16,
}

/// Encode-mode segment data.
#[derive(Clone, Copy, Debug, Default)]
pub struct Vp9EncSegData {
    pub segment_skipped: bool,
    pub segment_reference: u8,
    pub segment_reference_enabled: bool,
    pub qindex_delta: i16,
    pub lf_level_delta: i8,
}

#[derive(Clone, Copy, Debug)]
pub struct Vp9SegmentParams<'a> {
    pub segment_id: u8,
    pub decode: Option<&'a [Vp9SegData; VP9_SEGMENTS]>,
    pub encode: Option<&'a [Vp9EncSegData; VP9_SEGMENTS]>,
}

/// HEVC range-extension picture fields (gen12-class hardware).
#[derive(Clone, Copy, Debug, Default)]
pub struct HevcRextPicParams {
    pub log2_max_transform_skip_block_size_minus2: u8,
    pub cross_component_prediction_enabled: bool,
    pub cabac_bypass_alignment_enabled: bool,
    pub persistent_rice_adaptation_enabled: bool,
    pub intra_smoothing_disabled: bool,
    pub explicit_rdpcm_enabled: bool,
    pub implicit_rdpcm_enabled: bool,
    pub transform_skip_context_enabled: bool,
    pub transform_skip_rotation_enabled: bool,
    pub high_precision_offsets_enabled: bool,
    pub chroma_qp_offset_list_enabled: bool,
    pub diff_cu_chroma_qp_offset_depth: u8,
    pub chroma_qp_offset_list_len_minus1: u8,
    pub log2_sao_offset_scale_luma: u8,
    pub log2_sao_offset_scale_chroma: u8,
    pub cb_qp_offset_list: [i8; 6],
    pub cr_qp_offset_list: [i8; 6],
}

/// HEVC encode sequence parameters consumed by the picture-state builder.
#[derive(Clone, Copy, Debug, Default)]
pub struct HevcEncodeSeqParams {
    pub frame_width_in_min_cb_minus1: u16,
    pub frame_height_in_min_cb_minus1: u16,
    pub log2_min_coding_block_size_minus3: u8,
    pub log2_max_coding_block_size_minus3: u8,
    pub log2_min_transform_block_size_minus2: u8,
    pub log2_max_transform_block_size_minus2: u8,
    pub max_transform_hierarchy_depth_intra: u8,
    pub max_transform_hierarchy_depth_inter: u8,
    pub pcm_loop_filter_disable: bool,
    pub amp_enabled: bool,
    pub strong_intra_smoothing_enabled: bool,
    pub bit_depth_luma_minus8: u8,
    pub bit_depth_chroma_minus8: u8,
    pub chroma_format_idc: u8,
    pub pcm_sample_bit_depth_luma_minus1: u8,
    pub pcm_sample_bit_depth_chroma_minus1: u8,
    /// Dynamic slice size control requested.
    pub slice_size_control: bool,
}

/// HEVC encode picture parameters consumed by the picture-state builder.
#[derive(Clone, Copy, Debug, Default)]
pub struct HevcEncodePicParams {
    pub transform_skip_enabled: bool,
    pub cu_qp_delta_enabled: bool,
    pub diff_cu_qp_delta_depth: u8,
    pub pps_cb_qp_offset: i8,
    pub pps_cr_qp_offset: i8,
    pub weighted_pred: bool,
    pub weighted_bipred: bool,
    pub transquant_bypass_enabled: bool,
    pub tiles_enabled: bool,
    pub loop_filter_across_tiles_enabled: bool,
    pub lcu_max_bitsize_allowed: u32,
    pub qp_y: u8,
    pub slice_pic_parameter_set_id: u8,
    /// NAL unit type lies in the IRAP range.
    pub nal_unit_type_is_irap: bool,
    pub no_output_of_prior_pics: bool,
    pub max_slice_size_in_bytes: u32,
}

/// Encode picture-state build input.
#[derive(Clone, Copy, Debug)]
pub struct HevcEncodePicState<'a> {
    pub seq: &'a HevcEncodeSeqParams,
    pub pic: &'a HevcEncodePicParams,
    pub sao_enable: bool,
    pub rdoq_enabled: bool,
    pub use_vdenc: bool,
    pub sse_enabled_in_vme: bool,
    pub rho_domain_rc_enabled: bool,
    pub rdoq_intra_tu_disable: bool,
    pub rdoq_intra_tu_threshold: u16,
}

/// PAK transform-skip tuning for one encode slice.
#[derive(Clone, Copy, Debug, Default)]
pub struct TransformSkipParams {
    pub lambda: u16,
    pub num_zero_coeffs_factor0: u8,
    pub num_nonzero_coeffs_factor0: u8,
    pub num_zero_coeffs_factor1: u8,
    pub num_nonzero_coeffs_factor1: u8,
}

/// Encode-only slice fields layered on top of the shared slice state.
#[derive(Clone, Copy, Debug, Default)]
pub struct EncodeSliceExtras {
    pub rounding_intra: u8,
    pub rounding_inter: u8,
    pub vdenc_in_use: bool,
    /// Last picture of the sequence or stream; gates tail insertion on the
    /// last slice.
    pub last_pic: bool,
    pub header_bytes_inserted: u32,
    pub transform_skip: Option<TransformSkipParams>,
}

/// Slice class and bit depth selecting an RDOQ lambda table.
#[derive(Clone, Copy, Debug)]
pub struct RdoqParams {
    /// True when the current picture codes only intra blocks.
    pub intra_slice: bool,
    pub bit_depth_luma_minus8: u8,
    /// Workaround toggle carried from the platform tables.
    pub disable_htq_performance_fix: bool,
}
