//! HCP command-stream construction for HEVC and VP9 fixed-function video
//! hardware.
//!
//! The codec pipeline decides *what* to code; this crate translates those
//! decisions (picture parameters, slice headers, reference lists, scaling
//! matrices) into the exact bit-packed command sequences the hardware
//! consumes, and pre-computes the worst-case buffer sizes the caller must
//! allocate before building a frame.
//!
//! Construction is synchronous and strictly ordered: commands for one
//! picture are appended in the sequence the caller invokes the builders,
//! and the hardware requires that order to be exact. The only state that
//! outlives a single call is the per-picture collocated-reference context
//! ([`generic::CollocatedRefContext`]), threaded explicitly through the
//! slice-level builders and reset at the first slice of each picture.
//!
//! Generation support: [`gen9::Gen9Hcp`] (SKL/KBL-class) and
//! [`gen12::Gen12Hcp`] (TGL-class). The shared derivations live in
//! [`generic`], monomorphized over the descriptor layouts of `hcp-cmds`.

pub mod error;
pub mod gen12;
pub mod gen9;
pub mod generic;
pub mod params;
mod rdoq;
pub mod sink;
pub mod sizing;

pub use error::{HcpError, Result};
pub use generic::CollocatedRefContext;
pub use sink::{CommandSink, ProtectionSink, RelocRequest, ResourceId, SinkError};
