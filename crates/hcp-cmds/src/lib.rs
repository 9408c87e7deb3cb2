//! Bit-exact HCP (HEVC/VP9 codec pipe) command descriptors.
//!
//! Each hardware command is a fixed-size sequence of 32-bit dwords. DW0 is a
//! header carrying the opcode and the command's dword length; the remaining
//! dwords are subdivided into named bit ranges. A descriptor is constructed
//! with its hardware reset values, populated field by field, then serialized
//! verbatim into a command buffer. Layouts are versioned per hardware
//! generation ([`gen9`], [`gen12`]); the [`iface`] traits expose the fields
//! the generation-independent builders touch, so one builder body
//! monomorphizes into per-generation binary layouts.

mod bits;
pub mod gen12;
pub mod gen9;
pub mod iface;

pub use bits::{op_length, sign_magnitude};
pub use iface::{CmdSet, HcpCommand, RefEntry};

/// Fixed number of reference entries in REF_IDX / WEIGHTOFFSET commands.
pub const REF_ENTRY_COUNT: usize = 16;

/// Column-position groups in HCP_TILE_STATE (4 positions each).
pub const TILE_COLUMN_GROUPS: usize = 5;

/// Row-position groups in HCP_TILE_STATE (4 positions each). The 6th group
/// is only reachable through the 21/22-row special cases.
pub const TILE_ROW_GROUPS: usize = 6;

macro_rules! hcp_command {
    ($(#[$attr:meta])* $name:ident, $dw_size:expr, $header:expr) => {
        hcp_command!($(#[$attr])* $name, $dw_size, $header, |_d| {});
    };
    ($(#[$attr:meta])* $name:ident, $dw_size:expr, $header:expr, |$d:ident| $init:block) => {
        $(#[$attr])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $name {
            dw: [u32; $dw_size],
        }

        impl Default for $name {
            fn default() -> Self {
                #[allow(unused_mut)]
                let mut $d = [0u32; $dw_size];
                $d[0] = $header;
                $init
                Self { dw: $d }
            }
        }

        impl $crate::iface::HcpCommand for $name {
            const DW_SIZE: usize = $dw_size;

            fn dwords(&self) -> &[u32] {
                &self.dw
            }

            fn dwords_mut(&mut self) -> &mut [u32] {
                &mut self.dw
            }
        }
    };
}

pub(crate) use hcp_command;
