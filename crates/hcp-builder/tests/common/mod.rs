//! Shared test doubles for the builder integration tests.

use hcp_builder::sink::{CommandSink, ProtectionSink, RelocRequest, SinkError, SliceProtection};

/// Command sink that records every append and relocation. Registered
/// addresses are stamped with a recognisable sentinel so tests can verify
/// the patch location.
pub struct RecordingSink {
    pub capacity: usize,
    pub data: Vec<u8>,
    pub append_sizes: Vec<usize>,
    pub relocs: Vec<RelocRequest>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::with_capacity(usize::MAX)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            data: Vec::new(),
            append_sizes: Vec::new(),
            relocs: Vec::new(),
        }
    }

    /// Splits the recorded stream back into per-command dword vectors.
    pub fn commands(&self) -> Vec<Vec<u32>> {
        let mut out = Vec::new();
        let mut offset = 0;
        for &size in &self.append_sizes {
            let words = self.data[offset..offset + size]
                .chunks_exact(4)
                .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
                .collect();
            out.push(words);
            offset += size;
        }
        out
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandSink for RecordingSink {
    fn append(&mut self, bytes: &[u8]) -> Result<(), SinkError> {
        if self.data.len() + bytes.len() > self.capacity {
            return Err(SinkError::OutOfSpace);
        }
        self.append_sizes.push(bytes.len());
        self.data.extend_from_slice(bytes);
        Ok(())
    }

    fn register_resource(
        &mut self,
        dwords: &mut [u32],
        req: &RelocRequest,
    ) -> Result<(), SinkError> {
        dwords[req.location_dw] = 0xadd0_0000 | (req.resource.0 as u32 & 0xffff);
        if let Some(upper) = req.upper_bound_dw_offset {
            dwords[req.location_dw + upper] = 0xadd8_0000 | (req.size & 0xffff);
        }
        self.relocs.push(*req);
        Ok(())
    }
}

/// Protection sink that records the slice info it receives.
#[derive(Default)]
pub struct RecordingProtection {
    pub slices: Vec<SliceProtection>,
}

impl ProtectionSink for RecordingProtection {
    fn set_protection_state(&mut self, info: &SliceProtection) -> Result<(), SinkError> {
        self.slices.push(*info);
        Ok(())
    }
}
