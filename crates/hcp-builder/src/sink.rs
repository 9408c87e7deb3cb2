//! External collaborator boundary: command-buffer append and resource
//! registration.
//!
//! The builder never owns GPU memory. It populates a descriptor in local
//! state, asks the sink to record any address relocations against the
//! descriptor body, then appends the raw bytes exactly once. The sink may
//! resolve addresses immediately (direct graphics-address model) or defer
//! them to submission time (patch-list model); both fit the same call shape.

use crate::error::{HcpError, Result};

/// Opaque handle to a driver-owned memory resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResourceId(pub u64);

/// Failures reported by the sink. Capacity exhaustion is detected here, not
/// in the builder: the buffer was pre-sized from the worst-case estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SinkError {
    #[error("command buffer out of space")]
    OutOfSpace,
    #[error("resource relocation failed")]
    Relocation,
    #[error("protection setup failed")]
    Protection,
}

/// Address alignment granularity for a relocated field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressShift {
    /// 64-byte aligned (general state addresses).
    CacheLine,
    /// 4096-byte aligned (upper-bound and surface base addresses).
    Page4k,
}

impl AddressShift {
    pub fn lsb(self) -> u32 {
        match self {
            AddressShift::CacheLine => 6,
            AddressShift::Page4k => 12,
        }
    }
}

/// One address field to resolve inside a not-yet-appended descriptor.
#[derive(Clone, Copy, Debug)]
pub struct RelocRequest {
    pub resource: ResourceId,
    /// Byte offset within the resource.
    pub offset: u32,
    /// Valid extent of the resource, for hardware bounds checking.
    pub size: u32,
    /// Dword index of the address field pair within the descriptor.
    pub location_dw: usize,
    pub shift: AddressShift,
    pub writable: bool,
    /// If set, the resource end address is written this many dwords past the
    /// address field so the hardware can bounds-check accesses.
    pub upper_bound_dw_offset: Option<usize>,
}

/// Append primitive plus resource registration, implemented by the
/// surrounding driver. Append order is preserved; the hardware requires the
/// emitted sequence to be exact.
pub trait CommandSink {
    fn append(&mut self, bytes: &[u8]) -> core::result::Result<(), SinkError>;

    /// Records `req` against the descriptor body in `dwords`. Called before
    /// the descriptor is appended; implementations may write a resolved
    /// address into the location immediately or remember a patch for
    /// submission time.
    fn register_resource(
        &mut self,
        dwords: &mut [u32],
        req: &RelocRequest,
    ) -> core::result::Result<(), SinkError>;
}

/// Per-slice content-protection state setter; parameters are marshaled
/// through untouched.
#[derive(Clone, Copy, Debug)]
pub struct SliceProtection {
    pub data_buffer: ResourceId,
    pub slice_index: u32,
    /// Start offset per internal pass (both passes see the same slice).
    pub data_start_offsets: [u32; 2],
    pub data_lengths: [u32; 2],
    pub last_pass: bool,
}

pub trait ProtectionSink {
    fn set_protection_state(
        &mut self,
        info: &SliceProtection,
    ) -> core::result::Result<(), SinkError>;
}

/// Slice-level commands target either the primary command buffer or a batch
/// buffer; exactly one must be supplied.
pub fn append_to_cmd_or_batch(
    cmd_buffer: Option<&mut dyn CommandSink>,
    batch_buffer: Option<&mut dyn CommandSink>,
    bytes: &[u8],
) -> Result<()> {
    match (cmd_buffer, batch_buffer) {
        (Some(sink), _) => sink.append(bytes).map_err(HcpError::from),
        (None, Some(sink)) => sink.append(bytes).map_err(HcpError::from),
        (None, None) => Err(HcpError::InvalidParam(
            "no valid buffer to add the command to",
        )),
    }
}
