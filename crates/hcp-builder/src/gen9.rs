//! Gen9 (SKL/KBL-class) HCP interface.
//!
//! The earliest generation this crate supports: planar 4:2:0 surfaces only,
//! no row-store caching, no RDOQ or tile-coding commands, and the smaller
//! descriptor layouts of [`hcp_cmds::gen9`]. Shared derivations come from
//! [`crate::generic`].

use hcp_cmds::gen9::{self, Gen9};
use hcp_cmds::iface::{HcpCommand, PicStateFields};
use hcp_cmds::sign_magnitude;
use tracing::trace;

use crate::error::{HcpError, Result};
use crate::generic::{self, CollocatedRefContext};
use crate::params::{
    BsdParams, ChromaFormat, CodecMode, EncodeSliceExtras, HevcEncodePicState, HevcPicParams,
    HevcSliceState, IndObjBaseAddrParams, PixelFormat, QmParams, RefIdxParams, Standard,
    SurfaceParams, TileParams, Vp9EncodePicState, Vp9PicState, Vp9SegmentParams,
    WeightOffsetParams, VP9_MIN_BLOCK_WIDTH,
};
use crate::sink::{append_to_cmd_or_batch, CommandSink, ProtectionSink};
use crate::sizing::{BufferSizeParams, CommandSizes, InternalBuffer, ReallocParams};

/// VP9 motion-compensation scaling factor numerator (1 << 14).
const VP9_SCALING_FACTOR: u32 = 1 << 14;

/// Gen9 command construction interface.
pub struct Gen9Hcp {
    decode_in_use: bool,
}

impl Gen9Hcp {
    pub fn new(decode_in_use: bool) -> Self {
        Self { decode_in_use }
    }

    pub fn is_decode_in_use(&self) -> bool {
        self.decode_in_use
    }

    /// Gen9 has no HCP row-store cache; every scratch buffer is backed by
    /// driver memory.
    pub fn rowstore_caching_supported(&self) -> bool {
        false
    }

    fn select_surface_format(params: &SurfaceParams<'_>) -> Result<u32> {
        let surface = params.surface.ok_or(HcpError::MissingParam("surface"))?;
        if params.chroma_format != ChromaFormat::Yuv420 {
            return Err(HcpError::InvalidParam("surface chroma format"));
        }
        let format = match surface.format {
            PixelFormat::Nv12 if params.bit_depth_luma_minus8 == 0 => {
                gen9::surface_format::PLANAR_420_8
            }
            PixelFormat::Nv12 | PixelFormat::P010 => gen9::surface_format::P010,
            _ => return Err(HcpError::InvalidParam("surface format")),
        };
        Ok(format)
    }

    pub fn add_decode_surface_state(
        &self,
        sink: &mut dyn CommandSink,
        params: &SurfaceParams<'_>,
    ) -> Result<()> {
        trace!(surface_id = ?params.surface_id, "decode surface state");
        let mut cmd = generic::decode_surface_state::<Gen9>(params)?;
        cmd.set_surface_format(Self::select_surface_format(params)?);
        sink.append(cmd.as_bytes())?;
        Ok(())
    }

    /// Gen9 encode surfaces use the decode-side chroma alignment rules.
    pub fn add_encode_surface_state(
        &self,
        sink: &mut dyn CommandSink,
        params: &SurfaceParams<'_>,
    ) -> Result<()> {
        trace!(surface_id = ?params.surface_id, "encode surface state");
        let mut cmd = generic::decode_surface_state::<Gen9>(params)?;
        cmd.set_surface_format(Self::select_surface_format(params)?);
        sink.append(cmd.as_bytes())?;
        Ok(())
    }

    pub fn add_ind_obj_base_addr(
        &self,
        sink: &mut dyn CommandSink,
        params: &IndObjBaseAddrParams,
    ) -> Result<()> {
        trace!("indirect object base address state");
        generic::ind_obj_base_addr::<Gen9>(sink, params)
    }

    pub fn add_qm_state(&self, sink: &mut dyn CommandSink, params: &QmParams<'_>) -> Result<()> {
        trace!("qm state");
        generic::qm_state::<Gen9>(sink, params)
    }

    pub fn add_decode_pic_state(
        &self,
        sink: &mut dyn CommandSink,
        pic: &HevcPicParams,
    ) -> Result<()> {
        trace!("decode pic state");
        let mut cmd = generic::decode_pic_state::<Gen9>(pic)?;
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
        let mut cmd = gen9::PicState::default();

        cmd.set_frame_width_in_min_cb_minus1(seq.frame_width_in_min_cb_minus1 as u32);
        cmd.set_frame_height_in_min_cb_minus1(seq.frame_height_in_min_cb_minus1 as u32);
        cmd.set_pak_transform_skip(pic.transform_skip_enabled);

        cmd.set_min_cu_size(seq.log2_min_coding_block_size_minus3 as u32);
        cmd.set_ctb_size(seq.log2_max_coding_block_size_minus3 as u32);
        cmd.set_max_tu_size(seq.log2_max_transform_block_size_minus2 as u32);
        cmd.set_min_tu_size(seq.log2_min_transform_block_size_minus2 as u32);
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
        cmd.set_loop_filter_across_tiles(false);
        cmd.set_entropy_coding_sync(false);
        cmd.set_tiles_enabled(false);
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

        sink.append(cmd.as_bytes())?;
        Ok(())
    }

    pub fn add_bsd_object(&self, sink: &mut dyn CommandSink, params: &BsdParams) -> Result<()> {
        trace!("bsd object");
        let cmd = generic::bsd_object::<Gen9>(params);
        sink.append(cmd.as_bytes())?;
        Ok(())
    }

    pub fn add_tile_state(&self, sink: &mut dyn CommandSink, params: &TileParams<'_>) -> Result<()> {
        trace!("tile state");
        let cmd = generic::tile_state::<Gen9>(params)?;
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
        let cmd = generic::ref_idx_state::<Gen9>(params)?;
        append_to_cmd_or_batch(cmd_buffer, batch_buffer, cmd.as_bytes())
    }

    pub fn add_weight_offset_state(
        &self,
        cmd_buffer: Option<&mut dyn CommandSink>,
        batch_buffer: Option<&mut dyn CommandSink>,
        params: &WeightOffsetParams,
    ) -> Result<()> {
        trace!(list = params.list, "weight offset state");
        let cmd = generic::weight_offset_state::<Gen9>(params);
        append_to_cmd_or_batch(cmd_buffer, batch_buffer, cmd.as_bytes())
    }

    pub fn add_decode_slice_state(
        &self,
        sink: &mut dyn CommandSink,
        state: &HevcSliceState<'_>,
        ctx: &mut CollocatedRefContext,
    ) -> Result<()> {
        trace!(slice = state.slice_index, "decode slice state");
        let cmd = generic::decode_slice_state::<Gen9>(state, ctx)?;
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
        let mut cmd = generic::encode_slice_state::<Gen9>(state, ctx)?;

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
        let mut cmd = gen9::Vp9PicState::default();

        // The decoder consumes only the leading dwords of the shared layout.
        cmd.set_dword_length(gen9::Vp9PicState::DECODER_DW_USED);

        let cur_width = pic.frame_width_minus1 as u32 + 1;
        let cur_height = pic.frame_height_minus1 as u32 + 1;
        let is_scaling =
            cur_width != state.prev_frame_width || cur_height != state.prev_frame_height;

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

        // Segment id prediction must re-seed from memory whenever the map
        // cannot be carried over from the previous frame.
        let mut segment_id_streamin = false;
        if pic.intra_only || !pic.inter_frame {
            segment_id_streamin = true;
        } else if pic.segmentation_enabled {
            if !pic.segmentation_update_map || pic.segmentation_temporal_update {
                segment_id_streamin = true;
            }
        }
        if pic.error_resilient_mode {
            segment_id_streamin = true;
        }
        // A resolution change resets the segment id buffer.
        if is_scaling {
            segment_id_streamin = true;
        }
        cmd.set_segment_id_streamin_enable(segment_id_streamin);

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
            cmd.set_allow_hi_precision_mv(pic.allow_high_precision_mv);
            cmd.set_mcomp_filter_type(pic.mcomp_filter_type as u32);
            cmd.set_segmentation_temporal_update(
                cmd.segmentation_update_map() && pic.segmentation_temporal_update,
            );
            cmd.set_ref_frame_sign_bias(pic.sign_bias_mask());
            cmd.set_last_frame_type_non_key(!state.prev_frame.key_frame);

            let mut use_prev = !(pic.error_resilient_mode
                || state.prev_frame.key_frame
                || state.prev_frame.intra_only
                || !state.prev_frame.display);
            if is_scaling {
                use_prev = false;
            }
            cmd.set_use_prev_in_find_mv_references(use_prev);

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
        let mut cmd = gen9::Vp9PicState::default();

        // The encoder programs the source dimensions unaligned.
        cmd.set_frame_size_minus1(
            pic.src_frame_width_minus1 as u32,
            pic.src_frame_height_minus1 as u32,
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

                let reference = state
                    .ref_list
                    .get(entry.frame_idx as usize)
                    .ok_or(HcpError::InvalidParam("vp9 reference index"))?;

                cmd.set_scale_factor(
                    role,
                    reference.width * VP9_SCALING_FACTOR / cur_width,
                    reference.height * VP9_SCALING_FACTOR / cur_height,
                );
                cmd.set_ref_frame_size_minus1(role, reference.width - 1, reference.height - 1);
            }
        }

        cmd.set_base_q_index(pic.luma_ac_q_index as u32);

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

        append_to_cmd_or_batch(cmd_buffer, batch_buffer, cmd.as_bytes())
    }

    pub fn add_vp9_segment_state(
        &self,
        cmd_buffer: Option<&mut dyn CommandSink>,
        batch_buffer: Option<&mut dyn CommandSink>,
        params: &Vp9SegmentParams<'_>,
    ) -> Result<()> {
        trace!(segment = params.segment_id, "vp9 segment state");
        let mut cmd = gen9::Vp9SegmentState::default();

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

    /// Worst-case byte and patch-entry counts for the picture-level command
    /// sequence of `mode`.
    pub fn state_command_size(&self, mode: CodecMode) -> CommandSizes {
        use hcp_cmds::gen9::{patch_counts as plc, sizes};

        let mut commands;
        let mut patches;

        match mode.standard() {
            Standard::Hevc => {
                commands = sizes::VD_PIPELINE_FLUSH
                    + sizes::MI_FLUSH_DW
                    + sizes::HCP_PIPE_MODE_SELECT
                    + gen9::SurfaceState::BYTE_SIZE as u32
                    + sizes::HCP_PIPE_BUF_ADDR_STATE
                    + gen9::IndObjBaseAddrState::BYTE_SIZE as u32;

                patches = plc::VD_PIPELINE_FLUSH
                    + plc::MI_FLUSH_DW
                    + plc::HCP_SURFACE_STATE
                    + plc::HCP_PIPE_BUF_ADDR_STATE
                    + plc::HCP_IND_OBJ_BASE_ADDR_STATE;

                if mode == CodecMode::HevcEncode {
                    // QM may repeat 20 times, FQM 8.
                    commands += 20 * gen9::QmState::BYTE_SIZE as u32
                        + 8 * sizes::HCP_FQM_STATE
                        + gen9::PicState::BYTE_SIZE as u32;

                    patches += 20 * plc::HCP_QM_STATE + 8 * plc::HCP_FQM_STATE;
                } else {
                    commands += 20 * gen9::QmState::BYTE_SIZE as u32
                        + gen9::PicState::BYTE_SIZE as u32
                        + gen9::TileState::BYTE_SIZE as u32;

                    patches += 20 * plc::HCP_QM_STATE
                        + plc::HCP_PIC_STATE
                        + plc::HCP_TILE_STATE;
                }
            }
            Standard::Vp9 => {
                if mode == CodecMode::Vp9Encode {
                    commands = sizes::MI_FLUSH_DW * 2
                        + sizes::HCP_PIPE_MODE_SELECT
                        + gen9::SurfaceState::BYTE_SIZE as u32 * 5
                        + sizes::HCP_PIPE_BUF_ADDR_STATE
                        + gen9::IndObjBaseAddrState::BYTE_SIZE as u32
                        + gen9::Vp9SegmentState::BYTE_SIZE as u32 * 8
                        + gen9::Vp9PicState::BYTE_SIZE as u32
                        + sizes::MI_CONDITIONAL_BATCH_BUFFER_END
                        + sizes::HCP_PAK_INSERT_OBJECT
                        + sizes::MI_BATCH_BUFFER_START * 2
                        + sizes::VD_PIPELINE_FLUSH;

                    patches = plc::MI_FLUSH_DW * 2
                        + plc::HCP_PIPE_MODE_SELECT
                        + plc::HCP_SURFACE_STATE * 5
                        + plc::HCP_PIPE_BUF_ADDR_STATE
                        + plc::HCP_IND_OBJ_BASE_ADDR_STATE
                        + plc::HCP_VP9_SEGMENT_STATE * 8
                        + plc::HCP_VP9_PIC_STATE
                        + plc::MI_CONDITIONAL_BATCH_BUFFER_END
                        + plc::HCP_PAK_INSERT_OBJECT
                        + plc::MI_BATCH_BUFFER_START * 2
                        + plc::VD_PIPELINE_FLUSH;
                } else {
                    commands = sizes::VD_PIPELINE_FLUSH
                        + sizes::MI_FLUSH_DW
                        + sizes::HCP_PIPE_MODE_SELECT
                        + gen9::SurfaceState::BYTE_SIZE as u32 * 4
                        + sizes::HCP_PIPE_BUF_ADDR_STATE
                        + gen9::IndObjBaseAddrState::BYTE_SIZE as u32
                        + gen9::Vp9SegmentState::BYTE_SIZE as u32 * 8
                        + gen9::Vp9PicState::BYTE_SIZE as u32
                        + gen9::BsdObject::BYTE_SIZE as u32;

                    patches = plc::VD_PIPELINE_FLUSH
                        + plc::MI_FLUSH_DW
                        + plc::HCP_PIPE_MODE_SELECT
                        + plc::HCP_SURFACE_STATE * 4
                        + plc::HCP_PIPE_BUF_ADDR_STATE
                        + plc::HCP_IND_OBJ_BASE_ADDR_STATE
                        + plc::HCP_VP9_SEGMENT_STATE * 8
                        + plc::HCP_VP9_PIC_STATE
                        + plc::HCP_BSD_OBJECT;
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
        use hcp_cmds::gen9::{patch_counts as plc, sizes};

        match mode {
            CodecMode::HevcEncode => CommandSizes {
                commands: 2 * gen9::RefIdxState::BYTE_SIZE as u32
                    + 2 * gen9::WeightOffsetState::BYTE_SIZE as u32
                    + gen9::SliceState::BYTE_SIZE as u32
                    + sizes::HCP_PAK_INSERT_OBJECT
                    + sizes::MI_BATCH_BUFFER_START,
                patch_entries: 2 * plc::HCP_REF_IDX_STATE
                    + 2 * plc::HCP_WEIGHTOFFSET_STATE
                    + plc::HCP_SLICE_STATE
                    + plc::HCP_PAK_INSERT_OBJECT
                    + 2 * plc::MI_BATCH_BUFFER_START,
            },
            CodecMode::HevcDecode => CommandSizes {
                commands: 2 * gen9::RefIdxState::BYTE_SIZE as u32
                    + 2 * gen9::WeightOffsetState::BYTE_SIZE as u32
                    + gen9::SliceState::BYTE_SIZE as u32
                    + gen9::BsdObject::BYTE_SIZE as u32
                    + sizes::MI_BATCH_BUFFER_END,
                patch_entries: 2 * plc::HCP_REF_IDX_STATE
                    + 2 * plc::HCP_WEIGHTOFFSET_STATE
                    + plc::HCP_SLICE_STATE
                    + plc::HCP_BSD_OBJECT,
            },
            CodecMode::Vp9Decode | CodecMode::Vp9Encode => {
                if vp9_protected {
                    CommandSizes {
                        commands: gen9::Vp9SegmentState::BYTE_SIZE as u32 * 8
                            + gen9::Vp9PicState::BYTE_SIZE as u32
                            + gen9::BsdObject::BYTE_SIZE as u32
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

    /// Required size of an internal HEVC scratch buffer. The multi-pipe
    /// column stores do not exist on this generation.
    pub fn hevc_buffer_size(
        &self,
        buffer: InternalBuffer,
        params: &BufferSizeParams,
    ) -> Result<u32> {
        crate::sizing::hevc_scratch_size(buffer, params, false)
    }

    /// Required size of an internal VP9 scratch buffer; dimensions are in
    /// superblocks.
    pub fn vp9_buffer_size(
        &self,
        buffer: InternalBuffer,
        params: &BufferSizeParams,
    ) -> Result<u32> {
        crate::sizing::vp9_scratch_size(buffer, params, false)
    }

    /// Grow-only reallocation decision for an HEVC scratch buffer.
    pub fn hevc_realloc_needed(
        &self,
        buffer: InternalBuffer,
        params: &ReallocParams,
    ) -> Result<bool> {
        crate::sizing::hevc_realloc_needed(buffer, params, false)
    }

    /// Grow-only reallocation decision for a VP9 scratch buffer; dimensions
    /// are in superblocks.
    pub fn vp9_realloc_needed(
        &self,
        buffer: InternalBuffer,
        params: &ReallocParams,
    ) -> Result<bool> {
        crate::sizing::vp9_realloc_needed(buffer, params, false)
    }
}
