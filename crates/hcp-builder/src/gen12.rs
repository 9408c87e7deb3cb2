//! Gen12 (TGL-class) HCP interface.
//!
//! Delegates the shared derivations to [`crate::generic`] and supplies what
//! this generation changes: the full variant surface-format table, the
//! table-driven row-store cache policy, range-extension picture fields, VP9
//! picture/segment state, the RDOQ lambda command, tile coding, and the
//! worst-case command/scratch sizing formulas.

use hcp_cmds::gen12::{self, Gen12};
use hcp_cmds::iface::{HcpCommand, PicStateFields, SliceStateFields, SurfaceStateFields};
use hcp_cmds::sign_magnitude;
use tracing::trace;

use crate::error::{HcpError, Result};
use crate::generic::{self, CollocatedRefContext};
use crate::params::{
    BsdParams, ChromaFormat, CodecMode, EncodeSliceExtras, HevcEncodePicState, HevcPicParams,
    HevcRextPicParams, HevcSliceState, IndObjBaseAddrParams, PixelFormat, QmParams, RdoqParams,
    RefIdxParams, Standard, SurfaceId, SurfaceParams, TileParams, Vp9EncodePicState, Vp9PicState,
    Vp9SegmentParams, WeightOffsetParams, VP9_MIN_BLOCK_WIDTH,
};
use crate::sink::{
    append_to_cmd_or_batch, AddressShift, CommandSink, ProtectionSink, RelocRequest, ResourceId,
};
use crate::sizing::{
    BufferSizeParams, CommandSizes, InternalBuffer, ReallocParams, RowstoreCache, RowstoreParams,
};

/// VP9 motion-compensation scaling factor numerator (1 << 14).
const VP9_SCALING_FACTOR: u32 = 1 << 14;

/// Tile-coding parameters for one tile dispatch.
#[derive(Clone, Copy, Debug, Default)]
pub struct TileCodingParams {
    pub number_of_active_be_pipes: u32,
    pub num_of_tile_columns_in_frame: u32,
    pub tile_start_lcu_x: u32,
    pub tile_start_lcu_y: u32,
    pub is_last_tile_of_column: bool,
    pub is_last_tile_of_row: bool,
    pub tile_width_in_min_cb_minus1: u32,
    pub tile_height_in_min_cb_minus1: u32,
    pub bitstream_byte_offset: u32,
    pub pak_tile_statistics_offset: u32,
    pub cu_level_streamout_offset: u32,
    pub slice_size_streamout_offset: u32,
    pub cu_record_offset: u32,
    pub sse_rowstore_offset: u32,
    pub sao_rowstore_offset: u32,
    pub tile_size_streamout_offset: u32,
    pub vp9_probability_counter_streamout_offset: u32,
    pub sync_buffer: Option<ResourceId>,
}

/// Gen12 command construction interface. One instance per in-flight picture
/// stream; the collocated-reference carry-forward is threaded explicitly
/// through the slice calls.
pub struct Gen12Hcp {
    decode_in_use: bool,
    hevc_dat_rowstore: RowstoreCache,
    hevc_df_rowstore: RowstoreCache,
    hevc_sao_rowstore: RowstoreCache,
    hevc_hsao_rowstore: RowstoreCache,
    vp9_hvd_rowstore: RowstoreCache,
    vp9_dat_rowstore: RowstoreCache,
    vp9_df_rowstore: RowstoreCache,
}

impl Gen12Hcp {
    pub fn new(decode_in_use: bool) -> Self {
        let supported = RowstoreCache {
            supported: true,
            enabled: false,
            address: 0,
        };
        Self {
            decode_in_use,
            hevc_dat_rowstore: supported,
            hevc_df_rowstore: supported,
            hevc_sao_rowstore: supported,
            hevc_hsao_rowstore: supported,
            vp9_hvd_rowstore: supported,
            vp9_dat_rowstore: supported,
            vp9_df_rowstore: supported,
        }
    }

    pub fn is_decode_in_use(&self) -> bool {
        self.decode_in_use
    }

    pub fn hevc_dat_rowstore(&self) -> &RowstoreCache {
        &self.hevc_dat_rowstore
    }

    pub fn hevc_df_rowstore(&self) -> &RowstoreCache {
        &self.hevc_df_rowstore
    }

    pub fn hevc_sao_rowstore(&self) -> &RowstoreCache {
        &self.hevc_sao_rowstore
    }

    pub fn hevc_hsao_rowstore(&self) -> &RowstoreCache {
        &self.hevc_hsao_rowstore
    }

    pub fn vp9_hvd_rowstore(&self) -> &RowstoreCache {
        &self.vp9_hvd_rowstore
    }

    pub fn vp9_dat_rowstore(&self) -> &RowstoreCache {
        &self.vp9_dat_rowstore
    }

    pub fn vp9_df_rowstore(&self) -> &RowstoreCache {
        &self.vp9_df_rowstore
    }

    /// Configures the on-chip row-store cache for a stream. Buffers the
    /// table leaves disabled must be backed by driver memory instead.
    pub fn set_rowstore_caching_offsets(&mut self, params: &RowstoreParams) {
        trace!(mode = ?params.mode, width = params.pic_width, "rowstore policy");

        let is_8bit = params.bit_depth_minus8 == 0;
        let is_10bit = params.bit_depth_minus8 == 1 || params.bit_depth_minus8 == 2;
        let is_12bit = params.bit_depth_minus8 > 2;
        let is_lcu_32_or_64 = params.lcu_size == 32 || params.lcu_size == 64;
        let gt_2k = params.pic_width > 2048;
        let gt_4k = params.pic_width > 4096;
        let gt_8k = params.pic_width > 8192;

        if params.mode.standard() == Standard::Hevc {
            // [dat, df, sao, vdenc, hsao] per configuration row.
            const ENABLE: [[bool; 5]; 16] = [
                [true, true, true, false, true],
                [true, true, true, true, true],
                [true, true, false, false, false],
                [true, true, false, true, false],
                [true, true, true, true, true],
                [true, true, false, false, true],
                [true, true, true, false, false],
                [true, false, true, false, true],
                [true, true, true, false, false],
                [true, false, true, false, true],
                [true, true, true, true, true],
                [true, true, false, true, true],
                [true, true, true, true, true],
                [true, false, true, true, true],
                [true, true, true, true, true],
                [true, false, true, true, true],
            ];
            const ADDRESS: [[u32; 5]; 16] = [
                [0, 256, 1280, 0, 2048],
                [0, 256, 1280, 1824, 1792],
                [0, 512, 0, 0, 0],
                [0, 256, 0, 2304, 0],
                [0, 256, 1024, 0, 1792],
                [0, 512, 0, 0, 2048],
                [0, 256, 1792, 0, 0],
                [0, 0, 512, 0, 2048],
                [0, 256, 1792, 0, 0],
                [0, 0, 256, 0, 1792],
                [0, 256, 1024, 1568, 1536],
                [0, 512, 0, 2112, 2048],
                [0, 256, 1792, 2336, 2304],
                [0, 0, 512, 1600, 1536],
                [0, 128, 1664, 2336, 2304],
                [0, 0, 256, 1600, 1536],
            ];

            for cache in [
                &mut self.hevc_dat_rowstore,
                &mut self.hevc_df_rowstore,
                &mut self.hevc_sao_rowstore,
                &mut self.hevc_hsao_rowstore,
            ] {
                cache.enabled = false;
                cache.address = 0;
            }

            if gt_8k {
                return;
            }

            let index = match params.chroma_format {
                ChromaFormat::Yuv420 | ChromaFormat::Yuv422 => {
                    2 * gt_4k as usize + is_lcu_32_or_64 as usize
                }
                ChromaFormat::Yuv444 => {
                    let depth = if is_12bit {
                        2
                    } else if is_10bit {
                        1
                    } else {
                        0
                    };
                    4 + 6 * is_lcu_32_or_64 as usize + 2 * depth + gt_4k as usize
                }
                ChromaFormat::Monochrome => return,
            };

            if self.hevc_dat_rowstore.supported {
                self.hevc_dat_rowstore.enabled = ENABLE[index][0];
                self.hevc_dat_rowstore.address = ADDRESS[index][0];
            }
            if self.hevc_df_rowstore.supported {
                self.hevc_df_rowstore.enabled = ENABLE[index][1];
                self.hevc_df_rowstore.address = ADDRESS[index][1];
            }
            if self.hevc_sao_rowstore.supported {
                self.hevc_sao_rowstore.enabled = ENABLE[index][2];
                self.hevc_sao_rowstore.address = ADDRESS[index][2];
            }
            if self.hevc_hsao_rowstore.supported {
                self.hevc_hsao_rowstore.enabled = ENABLE[index][4];
                self.hevc_hsao_rowstore.address = ADDRESS[index][4];
            }
        } else {
            // [hvd, dat, df, vdenc] per configuration row.
            const ENABLE: [[bool; 4]; 13] = [
                [true, true, true, true],
                [false, false, true, true],
                [true, false, true, true],
                [true, true, false, true],
                [true, true, true, true],
                [false, false, true, true],
                [false, false, true, false],
                [true, true, false, true],
                [true, true, true, true],
                [true, true, false, true],
                [true, true, true, true],
                [true, true, false, true],
                [true, true, false, true],
            ];
            const ADDRESS: [[u32; 4]; 13] = [
                [0, 64, 384, 1536],
                [0, 0, 0, 2304],
                [0, 0, 64, 2368],
                [0, 128, 0, 768],
                [0, 64, 384, 1536],
                [0, 0, 0, 2304],
                [0, 0, 0, 0],
                [0, 128, 0, 768],
                [0, 64, 384, 2112],
                [0, 128, 0, 768],
                [0, 32, 192, 1920],
                [0, 128, 0, 768],
                [0, 128, 0, 768],
            ];

            for cache in [
                &mut self.vp9_hvd_rowstore,
                &mut self.vp9_dat_rowstore,
                &mut self.vp9_df_rowstore,
            ] {
                cache.enabled = false;
                cache.address = 0;
            }

            if gt_8k || params.chroma_format == ChromaFormat::Monochrome {
                return;
            }

            let mut index = 4 * (params.chroma_format.idc() as usize - 1)
                + 2 * (!is_8bit) as usize
                + gt_4k as usize;
            if params.chroma_format == ChromaFormat::Yuv444 && !is_8bit {
                index += gt_2k as usize;
            }

            if self.vp9_hvd_rowstore.supported {
                self.vp9_hvd_rowstore.enabled = ENABLE[index][0];
                self.vp9_hvd_rowstore.address = ADDRESS[index][0];
            }
            if self.vp9_dat_rowstore.supported {
                self.vp9_dat_rowstore.enabled = ENABLE[index][1];
                self.vp9_dat_rowstore.address = ADDRESS[index][1];
            }
            if self.vp9_df_rowstore.supported {
                self.vp9_df_rowstore.enabled = ENABLE[index][2];
                self.vp9_df_rowstore.address = ADDRESS[index][2];
            }
        }
    }

    fn select_decode_surface_format(params: &SurfaceParams<'_>) -> Result<u32> {
        let surface = params.surface.ok_or(HcpError::MissingParam("surface"))?;
        use hcp_cmds::gen12::surface_format as fmt;
        let format = if params.bit_depth_luma_minus8 == 0 && params.bit_depth_chroma_minus8 == 0 {
            match (params.chroma_format, surface.format) {
                (ChromaFormat::Yuv420, PixelFormat::Nv12) => fmt::PLANAR_420_8,
                (ChromaFormat::Yuv420, PixelFormat::P010) => fmt::P010,
                (ChromaFormat::Yuv422, PixelFormat::Yuy2) => fmt::YUY2,
                (ChromaFormat::Yuv422, PixelFormat::Y210) => fmt::Y216_Y210,
                (ChromaFormat::Yuv444, PixelFormat::Ayuv) => fmt::AYUV4444,
                (ChromaFormat::Yuv444, PixelFormat::Y410) => fmt::Y410,
                _ => return Err(HcpError::InvalidParam("decode surface format")),
            }
        } else {
            // Bit depths above 8 support the 10-bit layouts only.
            match (params.chroma_format, surface.format) {
                (ChromaFormat::Yuv420, PixelFormat::P010) => fmt::P010,
                (ChromaFormat::Yuv422, PixelFormat::Y210) => fmt::Y216_Y210,
                (ChromaFormat::Yuv444, PixelFormat::Y410) => fmt::Y410,
                _ => return Err(HcpError::InvalidParam("decode surface format")),
            }
        };
        Ok(format)
    }

    pub fn add_decode_surface_state(
        &self,
        sink: &mut dyn CommandSink,
        params: &SurfaceParams<'_>,
    ) -> Result<()> {
        trace!(surface_id = ?params.surface_id, "decode surface state");
        let mut cmd = generic::decode_surface_state::<Gen12>(params)?;

        cmd.set_surface_format(Self::select_decode_surface_format(params)?);
        cmd.set_default_alpha(0);

        sink.append(cmd.as_bytes())?;
        Ok(())
    }

    pub fn add_encode_surface_state(
        &self,
        sink: &mut dyn CommandSink,
        params: &SurfaceParams<'_>,
    ) -> Result<()> {
        trace!(surface_id = ?params.surface_id, "encode surface state");
        let surface = params.surface.ok_or(HcpError::MissingParam("surface"))?;
        let mut cmd = generic::encode_surface_state::<Gen12>(params)?;

        use hcp_cmds::gen12::surface_format as fmt;
        let is_source = params.surface_id == SurfaceId::Source;
        let surf_10bit = surface.format.is_10bit();

        let format = match params.chroma_format {
            ChromaFormat::Yuv422 => {
                if params.bit_depth_luma_minus8 > 0 {
                    if is_source {
                        if surf_10bit {
                            fmt::Y216_Y210
                        } else {
                            fmt::YUY2
                        }
                    } else {
                        fmt::Y216_VARIANT
                    }
                } else if is_source {
                    fmt::YUY2
                } else {
                    fmt::YUY2_VARIANT
                }
            }
            ChromaFormat::Yuv444 => {
                if params.bit_depth_luma_minus8 == 0 {
                    if is_source {
                        fmt::AYUV4444
                    } else {
                        fmt::AYUV4444_VARIANT
                    }
                } else if params.bit_depth_luma_minus8 <= 2 {
                    if is_source {
                        if surf_10bit {
                            fmt::Y410
                        } else {
                            fmt::AYUV4444
                        }
                    } else {
                        fmt::Y416_VARIANT
                    }
                } else {
                    fmt::Y416
                }
            }
            _ => {
                if params.bit_depth_luma_minus8 > 0 {
                    if is_source {
                        if surf_10bit {
                            fmt::P010
                        } else {
                            fmt::PLANAR_420_8
                        }
                    } else {
                        fmt::P010_VARIANT
                    }
                } else {
                    fmt::PLANAR_420_8
                }
            }
        };
        cmd.set_surface_format(format);

        cmd.set_y_offset_for_cb(surface.u_plane_y_offset);
        cmd.set_y_offset_for_cr(surface.u_plane_y_offset);

        // The planar variant formats address their chroma planes at offsets
        // derived from the reconstructed surface height.
        if format == fmt::Y416_VARIANT || format == fmt::AYUV4444_VARIANT {
            cmd.set_y_offset_for_cb(params.recon_surface_height);
            cmd.set_y_offset_for_cr(params.recon_surface_height << 1);
        } else if format == fmt::Y216_VARIANT || format == fmt::YUY2_VARIANT {
            cmd.set_y_offset_for_cb(params.recon_surface_height);
            cmd.set_y_offset_for_cr(params.recon_surface_height);
        }

        sink.append(cmd.as_bytes())?;
        Ok(())
    }

    pub fn add_ind_obj_base_addr(
        &self,
        sink: &mut dyn CommandSink,
        params: &IndObjBaseAddrParams,
    ) -> Result<()> {
        trace!("indirect object base address state");
        generic::ind_obj_base_addr::<Gen12>(sink, params)
    }

    pub fn add_qm_state(&self, sink: &mut dyn CommandSink, params: &QmParams<'_>) -> Result<()> {
        trace!("qm state");
        generic::qm_state::<Gen12>(sink, params)
    }

    pub fn add_decode_pic_state(
        &self,
        sink: &mut dyn CommandSink,
        pic: &HevcPicParams,
        rext: Option<&HevcRextPicParams>,
    ) -> Result<()> {
        trace!("decode pic state");

        if let Some(rext) = rext {
            // The fixed-function decoder has no high-throughput profile
            // support; bypass alignment cannot be honoured.
            if rext.cabac_bypass_alignment_enabled {
                return Err(HcpError::Unsupported("cabac_bypass_alignment_enabled"));
            }
        }

        let mut cmd = generic::decode_pic_state::<Gen12>(pic)?;

        cmd.set_chroma_subsampling(pic.chroma_format_idc as u32);
        cmd.set_log2_max_transform_skip_size(2);

        if let Some(rext) = rext {
            cmd.set_log2_max_transform_skip_size(
                rext.log2_max_transform_skip_block_size_minus2 as u32 + 2,
            );
            cmd.set_cross_component_prediction_enabled(rext.cross_component_prediction_enabled);
            cmd.set_cabac_bypass_alignment_enabled(rext.cabac_bypass_alignment_enabled);
            cmd.set_persistent_rice_adaptation_enabled(rext.persistent_rice_adaptation_enabled);
            cmd.set_intra_smoothing_disabled(rext.intra_smoothing_disabled);
            cmd.set_explicit_rdpcm_enabled(rext.explicit_rdpcm_enabled);
            cmd.set_implicit_rdpcm_enabled(rext.implicit_rdpcm_enabled);
            cmd.set_transform_skip_context_enabled(rext.transform_skip_context_enabled);
            cmd.set_transform_skip_rotation_enabled(rext.transform_skip_rotation_enabled);
            cmd.set_high_precision_offsets_enabled(rext.high_precision_offsets_enabled);
            cmd.set_chroma_qp_offset_list_enabled(rext.chroma_qp_offset_list_enabled);
            cmd.set_diff_cu_chroma_qp_offset_depth(rext.diff_cu_chroma_qp_offset_depth as u32);
            cmd.set_chroma_qp_offset_list_len_minus1(rext.chroma_qp_offset_list_len_minus1 as u32);
            cmd.set_log2_sao_offset_scale_luma(rext.log2_sao_offset_scale_luma as u32);
            cmd.set_log2_sao_offset_scale_chroma(rext.log2_sao_offset_scale_chroma as u32);
            cmd.set_cb_qp_offset_list(&rext.cb_qp_offset_list);
            cmd.set_cr_qp_offset_list(&rext.cr_qp_offset_list);
        }

        cmd.set_bit_depth_chroma_minus8(pic.bit_depth_chroma_minus8 as u32);
        cmd.set_bit_depth_luma_minus8(pic.bit_depth_luma_minus8 as u32);

        sink.append(cmd.as_bytes())?;
        Ok(())
    }

    pub fn add_encode_pic_state(
        &self,
        sink: &mut dyn CommandSink,
        state: &HevcEncodePicState<'_>,
    ) -> Result<()> {
        trace!("encode pic state");

        let seq = state.seq;
        let pic = state.pic;
        let mut cmd = gen12::PicState::default();

        cmd.set_frame_width_in_min_cb_minus1(seq.frame_width_in_min_cb_minus1 as u32);
        cmd.set_frame_height_in_min_cb_minus1(seq.frame_height_in_min_cb_minus1 as u32);
        cmd.set_pak_transform_skip(pic.transform_skip_enabled);

        cmd.set_min_cu_size(seq.log2_min_coding_block_size_minus3 as u32);
        cmd.set_ctb_size(seq.log2_max_coding_block_size_minus3 as u32);
        cmd.set_max_tu_size(seq.log2_max_transform_block_size_minus2 as u32);
        cmd.set_min_tu_size(seq.log2_min_transform_block_size_minus2 as u32);
        // PCM is not supported by the fixed-function encoder.
        cmd.set_min_pcm_size(0);
        cmd.set_max_pcm_size(0);

        cmd.set_col_pic_is_i(false);
        cmd.set_cur_pic_is_i(false);

        cmd.set_sao_enabled(state.sao_enable);
        cmd.set_pcm_enabled(false);
        cmd.set_cu_qp_delta_enabled(pic.cu_qp_delta_enabled);
        cmd.set_diff_cu_qp_delta_depth(pic.diff_cu_qp_delta_depth as u32);
        cmd.set_pcm_loop_filter_disable(seq.pcm_loop_filter_disable);
        cmd.set_constrained_intra_pred(false);
        cmd.set_log2_parallel_merge_level_minus2(0);
        cmd.set_sign_data_hiding(false);
        cmd.set_entropy_coding_sync(false);
        cmd.set_weighted_pred(pic.weighted_pred);
        cmd.set_weighted_bipred(pic.weighted_bipred);
        cmd.set_field_pic(false);
        cmd.set_bottom_field(false);
        cmd.set_transform_skip_enabled(pic.transform_skip_enabled);
        cmd.set_amp_enabled(seq.amp_enabled);
        cmd.set_transquant_bypass_enabled(pic.transquant_bypass_enabled);
        cmd.set_strong_intra_smoothing(seq.strong_intra_smoothing_enabled);

        cmd.set_pic_cb_qp_offset(pic.pps_cb_qp_offset as u32 & 0x1f);
        cmd.set_pic_cr_qp_offset(pic.pps_cr_qp_offset as u32 & 0x1f);
        cmd.set_max_tu_depth_intra(seq.max_transform_hierarchy_depth_intra as u32);
        cmd.set_max_tu_depth_inter(seq.max_transform_hierarchy_depth_inter as u32);
        cmd.set_pcm_bit_depth_chroma_minus1(seq.pcm_sample_bit_depth_chroma_minus1 as u32);
        cmd.set_pcm_bit_depth_luma_minus1(seq.pcm_sample_bit_depth_luma_minus1 as u32);
        cmd.set_bit_depth_chroma_minus8(seq.bit_depth_chroma_minus8 as u32);
        cmd.set_bit_depth_luma_minus8(seq.bit_depth_luma_minus8 as u32);

        cmd.set_lcu_max_bitsize_allowed(pic.lcu_max_bitsize_allowed & 0xffff);
        cmd.set_non_first_pass(false);
        cmd.set_load_slice_pointer(false);

        cmd.set_rdoq_enable(state.rdoq_enabled);
        cmd.set_sse_enable(state.use_vdenc || state.sse_enabled_in_vme);
        let rho_domain = state.use_vdenc || state.rho_domain_rc_enabled;
        cmd.set_rho_domain_rate_control_enable(rho_domain);
        cmd.set_rho_domain_frame_level_qp(if rho_domain { pic.qp_y as u32 } else { 0 });
        cmd.set_fractional_qp_adjustment_enable(state.use_vdenc);

        cmd.set_first_slice_segment_in_pic(true);
        cmd.set_nal_unit_type_flag(true);

        if seq.slice_size_control {
            cmd.set_pak_dynamic_slice_mode_enable(true);
            cmd.set_slice_pic_parameter_set_id(pic.slice_pic_parameter_set_id as u32);
            cmd.set_nal_unit_type_flag(pic.nal_unit_type_is_irap);
            cmd.set_no_output_of_prior_pics(pic.no_output_of_prior_pics);
            cmd.set_slice_size_threshold_in_bytes(pic.max_slice_size_in_bytes);
            cmd.set_target_slice_size_in_bytes(pic.max_slice_size_in_bytes);
        }

        cmd.set_tiles_enabled(pic.tiles_enabled);
        cmd.set_chroma_subsampling(seq.chroma_format_idc as u32);
        cmd.set_loop_filter_across_tiles(pic.loop_filter_across_tiles_enabled);

        cmd.set_intra_tu_count_based_rdoq_disable(state.rdoq_intra_tu_disable);
        cmd.set_rdoq_intra_tu_threshold(state.rdoq_intra_tu_threshold as u32);

        sink.append(cmd.as_bytes())?;
        Ok(())
    }

    pub fn add_bsd_object(&self, sink: &mut dyn CommandSink, params: &BsdParams) -> Result<()> {
        trace!("bsd object");
        let cmd = generic::bsd_object::<Gen12>(params);
        sink.append(cmd.as_bytes())?;
        Ok(())
    }

    pub fn add_tile_state(&self, sink: &mut dyn CommandSink, params: &TileParams<'_>) -> Result<()> {
        trace!("tile state");
        let cmd = generic::tile_state::<Gen12>(params)?;
        sink.append(cmd.as_bytes())?;
        Ok(())
    }

    pub fn add_ref_idx_state(
        &self,
        cmd_buffer: Option<&mut dyn CommandSink>,
        batch_buffer: Option<&mut dyn CommandSink>,
        params: &RefIdxParams<'_>,
    ) -> Result<()> {
        trace!(list = params.list, "ref idx state");
        let cmd = generic::ref_idx_state::<Gen12>(params)?;
        append_to_cmd_or_batch(cmd_buffer, batch_buffer, cmd.as_bytes())
    }

    pub fn add_weight_offset_state(
        &self,
        cmd_buffer: Option<&mut dyn CommandSink>,
        batch_buffer: Option<&mut dyn CommandSink>,
        params: &WeightOffsetParams,
    ) -> Result<()> {
        trace!(list = params.list, "weight offset state");
        let cmd = generic::weight_offset_state::<Gen12>(params);
        append_to_cmd_or_batch(cmd_buffer, batch_buffer, cmd.as_bytes())
    }

    pub fn add_decode_slice_state(
        &self,
        sink: &mut dyn CommandSink,
        state: &HevcSliceState<'_>,
        ctx: &mut CollocatedRefContext,
    ) -> Result<()> {
        trace!(slice = state.slice_index, "decode slice state");
        let mut cmd = generic::decode_slice_state::<Gen12>(state, ctx)?;

        // Long-format decode also programs the reconstructed slice QP.
        let slice_qp =
            state.slice.slice_qp_delta as i32 + state.pic.init_qp_minus26 as i32 + 26;
        cmd.set_slice_qp_sign(slice_qp < 0);
        cmd.set_slice_qp(slice_qp.unsigned_abs());

        sink.append(cmd.as_bytes())?;
        Ok(())
    }

    pub fn add_encode_slice_state(
        &self,
        sink: &mut dyn CommandSink,
        state: &HevcSliceState<'_>,
        extras: &EncodeSliceExtras,
        ctx: &mut CollocatedRefContext,
    ) -> Result<()> {
        trace!(slice = state.slice_index, "encode slice state");
        let mut cmd = generic::encode_slice_state::<Gen12>(state, ctx)?;

        cmd.set_round_intra(extras.rounding_intra as u32);
        cmd.set_round_inter(extras.rounding_inter as u32);

        cmd.set_cabac_zero_word_insertion_enable(!extras.vdenc_in_use);
        cmd.set_emulation_byte_insert_enable(true);
        cmd.set_tail_insertion_enable(extras.last_pic && state.last_slice);
        cmd.set_slice_data_enable(true);
        cmd.set_header_insertion_enable(true);
        cmd.set_indirect_pak_bse_data_start_offset(extras.header_bytes_inserted);

        if let Some(ts) = &extras.transform_skip {
            cmd.set_transform_skip_lambda(ts.lambda as u32);
            cmd.set_transform_skip_zero_coeff_factors(
                ts.num_zero_coeffs_factor0 as u32,
                ts.num_zero_coeffs_factor1 as u32,
            );
            cmd.set_transform_skip_nonzero_coeff_factors(
                ts.num_nonzero_coeffs_factor0 as u32,
                ts.num_nonzero_coeffs_factor1 as u32,
            );
        }

        sink.append(cmd.as_bytes())?;
        Ok(())
    }

    pub fn add_protect_state(
        &self,
        protection: &mut dyn ProtectionSink,
        state: &HevcSliceState<'_>,
    ) -> Result<()> {
        trace!(slice = state.slice_index, "protect state");
        generic::protect_state(protection, state)
    }

    pub fn add_vp9_pic_state(
        &self,
        cmd_buffer: Option<&mut dyn CommandSink>,
        batch_buffer: Option<&mut dyn CommandSink>,
        state: &Vp9PicState<'_>,
    ) -> Result<()> {
        trace!("vp9 pic state (decode)");
        let pic = state.pic;
        let mut cmd = gen12::Vp9PicState::default();

        // The decoder consumes only the leading dwords of the shared layout.
        cmd.set_dword_length(gen12::Vp9PicState::DECODER_DW_USED);

        let cur_width = pic.frame_width_minus1 as u32 + 1;
        let cur_height = pic.frame_height_minus1 as u32 + 1;
        cmd.set_frame_size_minus1(
            cur_width.next_multiple_of(VP9_MIN_BLOCK_WIDTH) - 1,
            cur_height.next_multiple_of(VP9_MIN_BLOCK_WIDTH) - 1,
        );

        cmd.set_frame_type(pic.inter_frame);
        cmd.set_adapt_probabilities(
            !pic.error_resilient_mode && !pic.frame_parallel_decoding_mode,
        );
        cmd.set_intra_only(pic.intra_only);
        cmd.set_refresh_frame_context(pic.refresh_frame_context);
        cmd.set_error_resilient_mode(pic.error_resilient_mode);
        cmd.set_frame_parallel_decoding_mode(pic.frame_parallel_decoding_mode);
        cmd.set_filter_level(pic.filter_level as u32);
        cmd.set_sharpness_level(pic.sharpness_level as u32);
        cmd.set_segmentation_enabled(pic.segmentation_enabled);
        cmd.set_segmentation_update_map(pic.segmentation_enabled && pic.segmentation_update_map);
        cmd.set_lossless_mode(pic.lossless);
        cmd.set_segment_id_streamout_enable(cmd.segmentation_update_map());

        cmd.set_log2_tile_row(pic.log2_tile_rows as u32);
        cmd.set_log2_tile_column(pic.log2_tile_columns as u32);
        match (pic.subsampling_x, pic.subsampling_y) {
            (1, 1) => cmd.set_chroma_sampling_format(0),
            (1, 0) => cmd.set_chroma_sampling_format(1),
            (0, 0) => cmd.set_chroma_sampling_format(2),
            _ => {}
        }
        cmd.set_bit_depth_minus8(pic.bit_depth_minus8 as u32);
        cmd.set_profile_level(pic.profile as u32);

        cmd.set_uncompressed_header_length(pic.uncompressed_header_length_in_bytes as u32);
        cmd.set_first_partition_size(pic.first_partition_size as u32);

        if pic.inter_frame && !pic.intra_only {
            let is_scaling =
                cur_width != state.prev_frame_width || cur_height != state.prev_frame_height;

            cmd.set_allow_hi_precision_mv(pic.allow_high_precision_mv);
            cmd.set_mcomp_filter_type(pic.mcomp_filter_type as u32);
            cmd.set_segmentation_temporal_update(
                cmd.segmentation_update_map() && pic.segmentation_temporal_update,
            );
            cmd.set_ref_frame_sign_bias(pic.sign_bias_mask());
            cmd.set_last_frame_type_non_key(!state.prev_frame.key_frame);

            cmd.set_use_prev_in_find_mv_references(
                !(pic.error_resilient_mode
                    || state.prev_frame.key_frame
                    || state.prev_frame.intra_only
                    || !state.prev_frame.display
                    || is_scaling),
            );

            cmd.set_segment_id_streamin_enable(
                !(pic.error_resilient_mode || !cmd.segmentation_enabled() || is_scaling),
            );

            for (role, ref_idx) in [
                (0usize, pic.last_ref_idx),
                (1, pic.golden_ref_idx),
                (2, pic.alt_ref_idx),
            ] {
                let frame_idx = pic.ref_frame_list[ref_idx as usize].frame_idx as usize;
                let reference = state
                    .ref_list
                    .get(frame_idx)
                    .ok_or(HcpError::InvalidParam("vp9 reference index"))?;

                cmd.set_scale_factor(
                    role,
                    reference.width * VP9_SCALING_FACTOR / cur_width,
                    reference.height * VP9_SCALING_FACTOR / cur_height,
                );
                cmd.set_ref_frame_size_minus1(role, reference.width - 1, reference.height - 1);
            }
        }

        append_to_cmd_or_batch(cmd_buffer, batch_buffer, cmd.as_bytes())
    }

    pub fn add_vp9_pic_state_enc(
        &self,
        cmd_buffer: Option<&mut dyn CommandSink>,
        batch_buffer: Option<&mut dyn CommandSink>,
        state: &Vp9EncodePicState<'_>,
    ) -> Result<()> {
        trace!("vp9 pic state (encode)");
        let pic = state.pic;
        let mut cmd = gen12::Vp9PicState::default();

        cmd.set_frame_size_minus1(
            (pic.src_frame_width_minus1 as u32).next_multiple_of(VP9_MIN_BLOCK_WIDTH) - 1,
            (pic.src_frame_height_minus1 as u32).next_multiple_of(VP9_MIN_BLOCK_WIDTH) - 1,
        );

        cmd.set_frame_type(pic.inter_frame);
        cmd.set_adapt_probabilities(
            !pic.error_resilient_mode && !pic.frame_parallel_decoding_mode,
        );
        cmd.set_intra_only(pic.intra_only);
        cmd.set_allow_hi_precision_mv(pic.allow_high_precision_mv);
        cmd.set_mcomp_filter_type(pic.mcomp_filter_type as u32);
        cmd.set_ref_frame_sign_bias(pic.sign_bias_mask());
        cmd.set_hybrid_prediction_mode(pic.comp_prediction_mode == 2);
        cmd.set_selectable_tx_mode(state.tx_mode == 4);
        cmd.set_refresh_frame_context(pic.refresh_frame_context);
        cmd.set_error_resilient_mode(pic.error_resilient_mode);
        cmd.set_frame_parallel_decoding_mode(pic.frame_parallel_decoding_mode);
        cmd.set_filter_level(pic.filter_level as u32);
        cmd.set_sharpness_level(pic.sharpness_level as u32);
        cmd.set_segmentation_enabled(pic.segmentation_enabled);
        cmd.set_segmentation_update_map(pic.segmentation_update_map);
        cmd.set_segmentation_temporal_update(pic.segmentation_temporal_update);
        cmd.set_lossless_mode(pic.lossless);

        cmd.set_log2_tile_column(pic.log2_tile_columns as u32);
        cmd.set_log2_tile_row(pic.log2_tile_rows as u32);
        cmd.set_sse_enable(state.sse_enable);
        cmd.set_chroma_sampling_format(state.encoded_format as u32);
        cmd.set_bit_depth_minus8(match state.encoded_bit_depth {
            10 => 2,
            _ => 0,
        });

        if pic.inter_frame && !pic.intra_only {
            let cur_width = pic.src_frame_width_minus1 as u32 + 1;
            let cur_height = pic.src_frame_height_minus1 as u32 + 1;

            cmd.set_last_frame_type_non_key(!state.prev_frame.key_frame);
            cmd.set_use_prev_in_find_mv_references(
                !(pic.error_resilient_mode
                    || state.prev_frame.key_frame
                    || state.prev_frame.intra_only
                    || !state.prev_frame.display
                    || cur_width != state.prev_frame_width
                    || cur_height != state.prev_frame_height),
            );

            let used = pic.ref_ctrl_l0 | pic.ref_ctrl_l1;
            for (role, ctrl, ref_idx) in [
                (0usize, crate::params::Vp9RefCtrl::LAST, pic.last_ref_idx),
                (1, crate::params::Vp9RefCtrl::GOLDEN, pic.golden_ref_idx),
                (2, crate::params::Vp9RefCtrl::ALTREF, pic.alt_ref_idx),
            ] {
                if !used.contains(ctrl) {
                    continue;
                }
                let entry = pic.ref_frame_list[ref_idx as usize];
                debug_assert!(!entry.invalid, "reference role in use but invalid");

                // With dynamic scaling the previous frame is referenced
                // directly at the current frame's dimensions.
                let (ref_width, ref_height) = if state.use_dys_ref_surface {
                    (cur_width, cur_height)
                } else {
                    let reference = state
                        .ref_list
                        .get(entry.frame_idx as usize)
                        .ok_or(HcpError::InvalidParam("vp9 reference index"))?;
                    (reference.width, reference.height)
                };

                cmd.set_scale_factor(
                    role,
                    ref_width * VP9_SCALING_FACTOR / cur_width,
                    ref_height * VP9_SCALING_FACTOR / cur_height,
                );
                cmd.set_ref_frame_size_minus1(role, ref_width - 1, ref_height - 1);
            }
        }

        cmd.set_base_q_index(pic.luma_ac_q_index as u32);
        cmd.set_header_insertion_enable(true);

        cmd.set_q_index_deltas(
            sign_magnitude(pic.chroma_ac_q_index_delta as i32, 5),
            sign_magnitude(pic.chroma_dc_q_index_delta as i32, 5),
            sign_magnitude(pic.luma_dc_q_index_delta as i32, 5),
        );
        cmd.set_lf_ref_deltas([
            sign_magnitude(pic.lf_ref_delta[0] as i32, 7),
            sign_magnitude(pic.lf_ref_delta[1] as i32, 7),
            sign_magnitude(pic.lf_ref_delta[2] as i32, 7),
            sign_magnitude(pic.lf_ref_delta[3] as i32, 7),
        ]);
        cmd.set_lf_mode_deltas([
            sign_magnitude(pic.lf_mode_delta[0] as i32, 7),
            sign_magnitude(pic.lf_mode_delta[1] as i32, 7),
        ]);

        cmd.set_bit_offsets_for_lf_deltas(
            pic.bit_offset_for_lf_ref_delta as u32,
            pic.bit_offset_for_lf_mode_delta as u32,
        );
        cmd.set_bit_offsets_for_qindex_and_lf_level(
            pic.bit_offset_for_q_index as u32,
            pic.bit_offset_for_lf_level as u32,
        );
        cmd.set_bit_offset_for_first_partition_size(
            pic.bit_offset_for_first_partition_size as u32,
        );

        cmd.set_vdenc_pak_only_pass(state.vdenc_pak_only_pass);

        append_to_cmd_or_batch(cmd_buffer, batch_buffer, cmd.as_bytes())
    }

    pub fn add_vp9_segment_state(
        &self,
        cmd_buffer: Option<&mut dyn CommandSink>,
        batch_buffer: Option<&mut dyn CommandSink>,
        params: &Vp9SegmentParams<'_>,
    ) -> Result<()> {
        trace!(segment = params.segment_id, "vp9 segment state");
        let mut cmd = gen12::Vp9SegmentState::default();

        cmd.set_segment_id(params.segment_id as u32);

        if !self.decode_in_use {
            let seg_data = params
                .encode
                .ok_or(HcpError::MissingParam("encode segment data"))?
                [params.segment_id as usize];

            cmd.set_segment_skipped(seg_data.segment_skipped);
            cmd.set_segment_reference(seg_data.segment_reference as u32);
            cmd.set_segment_reference_enabled(seg_data.segment_reference_enabled);
            cmd.set_encode_deltas(
                sign_magnitude(seg_data.qindex_delta as i32, 9),
                sign_magnitude(seg_data.lf_level_delta as i32, 7),
            );
        } else {
            let seg_data = params
                .decode
                .ok_or(HcpError::MissingParam("decode segment data"))?
                [params.segment_id as usize];

            cmd.set_segment_skipped(seg_data.segment_skipped);
            cmd.set_segment_reference(seg_data.segment_reference as u32);
            cmd.set_segment_reference_enabled(seg_data.segment_reference_enabled);

            for reference in 0..4 {
                for mode in 0..2 {
                    cmd.set_filter_level(
                        reference,
                        mode,
                        seg_data.filter_level[reference][mode] as u32,
                    );
                }
            }

            cmd.set_luma_quant_scales(
                seg_data.luma_dc_quant_scale as u32,
                seg_data.luma_ac_quant_scale as u32,
            );
            cmd.set_chroma_quant_scales(
                seg_data.chroma_dc_quant_scale as u32,
                seg_data.chroma_ac_quant_scale as u32,
            );
        }

        append_to_cmd_or_batch(cmd_buffer, batch_buffer, cmd.as_bytes())
    }

    pub fn add_rdoq_state(&self, sink: &mut dyn CommandSink, params: &RdoqParams) -> Result<()> {
        trace!(intra = params.intra_slice, "rdoq state");
        let mut cmd = gen12::RdoqState::default();
        let tables = crate::rdoq::select_lambda_tables(
            params.intra_slice,
            params.bit_depth_luma_minus8,
        );

        for i in 0..32 {
            cmd.set_intra_luma_lambda(i, tables.intra_luma[i * 2], tables.intra_luma[i * 2 + 1]);
            cmd.set_intra_chroma_lambda(
                i,
                tables.intra_chroma[i * 2],
                tables.intra_chroma[i * 2 + 1],
            );
            cmd.set_inter_luma_lambda(i, tables.inter_luma[i * 2], tables.inter_luma[i * 2 + 1]);
            cmd.set_inter_chroma_lambda(
                i,
                tables.inter_chroma[i * 2],
                tables.inter_chroma[i * 2 + 1],
            );
        }

        if params.disable_htq_performance_fix {
            cmd.set_disable_htq_performance_fix0(true);
            cmd.set_disable_htq_performance_fix1(true);
        }

        sink.append(cmd.as_bytes())?;
        Ok(())
    }

    /// Screen-content palette initializer, decode only. Must be issued at
    /// the start of each frame, tile, and independent slice when palette
    /// mode is enabled.
    pub fn add_palette_initializer_state(
        &self,
        sink: &mut dyn CommandSink,
        entries: &[(u16, u16, u16)],
    ) -> Result<()> {
        trace!(entries = entries.len(), "palette initializer state");
        if entries.len() > gen12::PaletteInitializerState::MAX_ENTRIES {
            return Err(HcpError::InvalidParam("palette entry count"));
        }

        let mut cmd = gen12::PaletteInitializerState::default();
        cmd.set_active_entries(entries.len() as u32);
        for (index, &(y, cb, cr)) in entries.iter().enumerate() {
            cmd.set_entry(index, y, cb, cr);
        }

        sink.append(cmd.as_bytes())?;
        Ok(())
    }

    pub fn add_tile_coding(
        &self,
        sink: &mut dyn CommandSink,
        params: &TileCodingParams,
    ) -> Result<()> {
        trace!("tile coding");
        let mut cmd = gen12::TileCoding::default();

        cmd.set_number_of_active_be_pipes(params.number_of_active_be_pipes);
        // Not consumed by hardware; must match the active BE pipe count.
        cmd.set_num_of_tile_columns_in_frame(params.num_of_tile_columns_in_frame);
        cmd.set_tile_column_position(params.tile_start_lcu_x);
        cmd.set_tile_row_position(params.tile_start_lcu_y);
        cmd.set_is_last_tile_of_column(params.is_last_tile_of_column);
        cmd.set_is_last_tile_of_row(params.is_last_tile_of_row);
        cmd.set_tile_height_in_min_cb_minus1(params.tile_height_in_min_cb_minus1);
        cmd.set_tile_width_in_min_cb_minus1(params.tile_width_in_min_cb_minus1);

        cmd.set_cu_record_offset(params.cu_record_offset);
        cmd.set_bitstream_byte_offset(params.bitstream_byte_offset);
        cmd.set_pak_frame_statistics_offset(params.pak_tile_statistics_offset);
        cmd.set_cu_level_streamout_offset(params.cu_level_streamout_offset);
        cmd.set_slice_size_streamout_offset(params.slice_size_streamout_offset);
        cmd.set_sse_rowstore_offset(params.sse_rowstore_offset);
        cmd.set_sao_rowstore_offset(params.sao_rowstore_offset);
        cmd.set_tile_size_streamout_offset(params.tile_size_streamout_offset);
        cmd.set_vp9_probability_counter_streamout_offset(
            params.vp9_probability_counter_streamout_offset,
        );

        if let Some(sync_buffer) = params.sync_buffer {
            sink.register_resource(
                cmd.dwords_mut(),
                &RelocRequest {
                    resource: sync_buffer,
                    offset: 0,
                    size: 0,
                    location_dw: gen12::TileCoding::SYNC_BUFFER_ADDR_DW,
                    shift: AddressShift::CacheLine,
                    writable: true,
                    upper_bound_dw_offset: None,
                },
            )?;
        }

        sink.append(cmd.as_bytes())?;
        Ok(())
    }

    /// Worst-case byte and patch-entry counts for the picture-level command
    /// sequence of `mode`.
    pub fn state_command_size(&self, mode: CodecMode, scalable: bool) -> CommandSizes {
        use hcp_cmds::gen12::{patch_counts as plc, sizes};

        let mut commands;
        let mut patches;

        match mode.standard() {
            Standard::Hevc => {
                commands = sizes::VD_PIPELINE_FLUSH
                    + sizes::MI_FLUSH_DW
                    + sizes::HCP_PIPE_MODE_SELECT
                    + gen12::SurfaceState::BYTE_SIZE as u32
                    + sizes::HCP_PIPE_BUF_ADDR_STATE
                    + gen12::IndObjBaseAddrState::BYTE_SIZE as u32
                    + sizes::MI_LOAD_REGISTER_REG * 8;

                patches = plc::VD_PIPELINE_FLUSH
                    + plc::MI_FLUSH_DW
                    + plc::HCP_PIPE_MODE_SELECT
                    + plc::HCP_SURFACE_STATE
                    + plc::HCP_PIPE_BUF_ADDR_STATE
                    + plc::HCP_IND_OBJ_BASE_ADDR_STATE;

                if mode == CodecMode::HevcEncode {
                    // QM may repeat 20 times, FQM 8; the remaining terms cover
                    // BRC multi-pass flushes, status reporting, semaphores
                    // and the SSE statistics copies.
                    commands += gen12::SurfaceState::BYTE_SIZE as u32
                        + 20 * gen12::QmState::BYTE_SIZE as u32
                        + 8 * sizes::HCP_FQM_STATE
                        + gen12::PicState::BYTE_SIZE as u32
                        + gen12::RdoqState::BYTE_SIZE as u32
                        + 2 * sizes::MI_STORE_DATA_IMM
                        + 2 * sizes::MI_FLUSH_DW
                        + 10 * sizes::MI_STORE_REGISTER_MEM
                        + sizes::MI_LOAD_REGISTER_MEM
                        + 2 * sizes::HCP_PAK_INSERT_OBJECT
                        + 4 * sizes::MI_STORE_DATA_IMM
                        + 17 * sizes::MI_SEMAPHORE_WAIT
                        + sizes::MI_SEMAPHORE_WAIT
                        + sizes::MI_SEMAPHORE_WAIT
                        + 2 * sizes::MI_STORE_DATA_IMM
                        + 8 * sizes::MI_COPY_MEM_MEM;

                    patches += 20 * plc::HCP_QM_STATE
                        + 8 * plc::HCP_FQM_STATE
                        + plc::HCP_PIC_STATE
                        + plc::MI_BATCH_BUFFER_START
                        + 2 * plc::MI_STORE_DATA_IMM
                        + 2 * plc::MI_FLUSH_DW
                        + 11 * plc::MI_STORE_REGISTER_MEM
                        + 22 * plc::MI_STORE_DATA_IMM
                        + 8 * plc::MI_BATCH_BUFFER_START
                        + plc::MI_FLUSH_DW
                        + plc::MFX_WAIT
                        + 3 * plc::MI_STORE_DATA_IMM
                        + 8 * plc::MI_COPY_MEM_MEM;
                } else {
                    commands += 20 * gen12::QmState::BYTE_SIZE as u32
                        + gen12::PicState::BYTE_SIZE as u32
                        + gen12::TileState::BYTE_SIZE as u32
                        + gen12::TileCoding::BYTE_SIZE as u32
                        + gen12::PaletteInitializerState::BYTE_SIZE as u32;

                    patches += 20 * plc::HCP_QM_STATE
                        + plc::HCP_PIC_STATE
                        + plc::HCP_TILE_STATE
                        + plc::HCP_TILE_CODING
                        + plc::HCP_PALETTE_INITIALIZER_STATE;

                    if scalable {
                        // Front-end/back-end synchronisation commands.
                        commands += 4 * sizes::MI_ATOMIC
                            + 2 * sizes::MI_CONDITIONAL_BATCH_BUFFER_END
                            + 3 * sizes::MI_SEMAPHORE_WAIT
                            + 15 * sizes::MI_STORE_DATA_IMM
                            + 3 * sizes::MI_STORE_DATA_IMM
                            + 3 * sizes::MI_LOAD_REGISTER_IMM
                            + 2 * sizes::MI_FLUSH_DW
                            + 2 * sizes::MI_STORE_REGISTER_MEM
                            + 4 * sizes::MI_ALU_PARAMS
                            + sizes::MI_MATH
                            + sizes::MI_LOAD_REGISTER_REG;

                        patches += 4 * plc::MI_ATOMIC
                            + 2 * plc::MI_CONDITIONAL_BATCH_BUFFER_END
                            + 3 * plc::MI_SEMAPHORE_WAIT
                            + 3 * plc::MI_STORE_DATA_IMM
                            + 2 * plc::MI_FLUSH_DW
                            + 2 * plc::MI_STORE_REGISTER_MEM;
                    }
                }
            }
            Standard::Vp9 => {
                commands = sizes::VD_PIPELINE_FLUSH
                    + sizes::MI_FLUSH_DW
                    + sizes::HCP_PIPE_MODE_SELECT
                    + gen12::SurfaceState::BYTE_SIZE as u32 * 4
                    + sizes::HCP_PIPE_BUF_ADDR_STATE
                    + gen12::IndObjBaseAddrState::BYTE_SIZE as u32
                    + gen12::Vp9SegmentState::BYTE_SIZE as u32 * 8
                    + gen12::BsdObject::BYTE_SIZE as u32
                    + sizes::MI_LOAD_REGISTER_REG * 8;

                patches = plc::VD_PIPELINE_FLUSH
                    + plc::MI_FLUSH_DW
                    + plc::HCP_PIPE_MODE_SELECT
                    + plc::HCP_SURFACE_STATE * 4
                    + plc::HCP_PIPE_BUF_ADDR_STATE
                    + plc::HCP_IND_OBJ_BASE_ADDR_STATE
                    + plc::HCP_VP9_SEGMENT_STATE * 8
                    + plc::HCP_BSD_OBJECT;

                if mode == CodecMode::Vp9Encode {
                    commands += gen12::Vp9PicState::BYTE_SIZE as u32
                        + sizes::MI_FLUSH_DW * 2
                        + sizes::MI_STORE_DATA_IMM * 4
                        + sizes::MI_STORE_REGISTER_MEM * 11
                        + sizes::MI_COPY_MEM_MEM * 4
                        + sizes::MI_BATCH_BUFFER_START * 3
                        + sizes::MI_STORE_DATA_IMM * 2
                        + sizes::MI_LOAD_REGISTER_MEM * 2
                        + sizes::HCP_PAK_INSERT_OBJECT * 2
                        + gen12::TileCoding::BYTE_SIZE as u32
                        + sizes::MI_BATCH_BUFFER_START
                        + sizes::MI_SEMAPHORE_WAIT * 3
                        + sizes::MI_SEMAPHORE_WAIT
                        + sizes::MI_STORE_DATA_IMM * 50;

                    patches += plc::HCP_VP9_PIC_STATE
                        + plc::MI_FLUSH_DW * 2
                        + plc::MI_STORE_DATA_IMM * 4
                        + plc::MI_STORE_REGISTER_MEM * 11
                        + plc::MI_COPY_MEM_MEM * 4
                        + plc::MI_BATCH_BUFFER_START * 3
                        + plc::MI_STORE_DATA_IMM * 2
                        + plc::HCP_PAK_INSERT_OBJECT * 2
                        + plc::HCP_TILE_CODING
                        + plc::MI_BATCH_BUFFER_START
                        + plc::MI_STORE_DATA_IMM * 50;
                } else {
                    commands += gen12::Vp9PicState::BYTE_SIZE as u32;
                    patches += plc::HCP_VP9_PIC_STATE;

                    if scalable {
                        commands += gen12::TileCoding::BYTE_SIZE as u32
                            + sizes::MI_ATOMIC * 4
                            + sizes::MI_CONDITIONAL_BATCH_BUFFER_END
                            + sizes::MI_SEMAPHORE_WAIT * 3
                            + sizes::MI_STORE_DATA_IMM * 15
                            + sizes::MI_STORE_DATA_IMM
                            + sizes::MI_LOAD_REGISTER_IMM * 3
                            + sizes::MI_FLUSH_DW
                            + sizes::MI_STORE_REGISTER_MEM * 2
                            + 4 * sizes::MI_ALU_PARAMS
                            + sizes::MI_MATH
                            + sizes::MI_LOAD_REGISTER_REG;

                        patches += plc::HCP_TILE_CODING
                            + plc::MI_ATOMIC * 4
                            + plc::MI_CONDITIONAL_BATCH_BUFFER_END
                            + plc::MI_SEMAPHORE_WAIT * 3
                            + plc::MI_STORE_DATA_IMM
                            + plc::MI_FLUSH_DW
                            + plc::MI_STORE_REGISTER_MEM * 2;
                    }
                }
            }
        }

        CommandSizes {
            commands,
            patch_entries: patches,
        }
    }

    /// Worst-case byte and patch-entry counts for one slice (HEVC) or one
    /// protected partition (VP9).
    pub fn primitive_command_size(&self, mode: CodecMode, vp9_protected: bool) -> CommandSizes {
        use hcp_cmds::gen12::{patch_counts as plc, sizes};

        match mode {
            CodecMode::HevcEncode => CommandSizes {
                commands: 2 * gen12::RefIdxState::BYTE_SIZE as u32
                    + 2 * gen12::WeightOffsetState::BYTE_SIZE as u32
                    + gen12::SliceState::BYTE_SIZE as u32
                    + sizes::HCP_PAK_INSERT_OBJECT
                    + 2 * sizes::MI_BATCH_BUFFER_START
                    // One slice cannot span more than one tile.
                    + gen12::TileCoding::BYTE_SIZE as u32,
                patch_entries: 2 * plc::HCP_REF_IDX_STATE
                    + 2 * plc::HCP_WEIGHTOFFSET_STATE
                    + plc::HCP_SLICE_STATE
                    + plc::HCP_PAK_INSERT_OBJECT
                    + 2 * plc::MI_BATCH_BUFFER_START
                    + plc::HCP_TILE_CODING,
            },
            CodecMode::HevcDecode => CommandSizes {
                commands: 2 * gen12::RefIdxState::BYTE_SIZE as u32
                    + 2 * gen12::WeightOffsetState::BYTE_SIZE as u32
                    + gen12::SliceState::BYTE_SIZE as u32
                    + gen12::BsdObject::BYTE_SIZE as u32
                    + sizes::MI_BATCH_BUFFER_END,
                patch_entries: 2 * plc::HCP_REF_IDX_STATE
                    + 2 * plc::HCP_WEIGHTOFFSET_STATE
                    + plc::HCP_SLICE_STATE
                    + plc::HCP_BSD_OBJECT,
            },
            CodecMode::Vp9Decode | CodecMode::Vp9Encode => {
                // Clear VP9 decode needs no primitive-level commands; the
                // protected path replays segment and picture state.
                if vp9_protected {
                    CommandSizes {
                        commands: gen12::Vp9SegmentState::BYTE_SIZE as u32 * 8
                            + gen12::Vp9PicState::BYTE_SIZE as u32
                            + gen12::BsdObject::BYTE_SIZE as u32
                            + sizes::MI_BATCH_BUFFER_END,
                        patch_entries: plc::HCP_VP9_SEGMENT_STATE * 8
                            + plc::HCP_VP9_PIC_STATE
                            + plc::HCP_BSD_OBJECT,
                    }
                } else {
                    CommandSizes::default()
                }
            }
        }
    }

    /// Required size of an internal HEVC scratch buffer.
    pub fn hevc_buffer_size(
        &self,
        buffer: InternalBuffer,
        params: &BufferSizeParams,
    ) -> Result<u32> {
        crate::sizing::hevc_scratch_size(buffer, params, true)
    }

    /// Required size of an internal VP9 scratch buffer. Dimensions are in
    /// superblocks; only 4:2:0 and 4:4:4 are defined.
    pub fn vp9_buffer_size(
        &self,
        buffer: InternalBuffer,
        params: &BufferSizeParams,
    ) -> Result<u32> {
        crate::sizing::vp9_scratch_size(buffer, params, true)
    }

    /// Grow-only reallocation decision for an HEVC scratch buffer.
    pub fn hevc_realloc_needed(
        &self,
        buffer: InternalBuffer,
        params: &ReallocParams,
    ) -> Result<bool> {
        crate::sizing::hevc_realloc_needed(buffer, params, true)
    }

    /// Grow-only reallocation decision for a VP9 scratch buffer; dimensions
    /// are in superblocks.
    pub fn vp9_realloc_needed(
        &self,
        buffer: InternalBuffer,
        params: &ReallocParams,
    ) -> Result<bool> {
        crate::sizing::vp9_realloc_needed(buffer, params, true)
    }
}
