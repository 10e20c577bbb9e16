use zydro_n2k_frame::{MessageBuilder, PayloadReader};

use crate::error::Result;
use crate::layout::{PGN_PARAMETER_REPORT, PGN_PARAMETER_SET};
use crate::pgn::{payload_len, read_bool, ZydroPgn};

/// PGN 65291: parameter value report.
///
/// Response to a parameter read. The value is the parameter's bits widened
/// to a u64; `param_type` tells the receiver how to interpret them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterReport {
    pub param_id: u64,
    pub param_type: u64,
    pub param_value: u64,
    /// True if the value survives a reboot.
    pub is_persisted: bool,
}

impl ZydroPgn for ParameterReport {
    const PGN: u32 = PGN_PARAMETER_REPORT;
    const NAME: &'static str = "parameter report";
    const FAST_PACKET: bool = true;
    const PAYLOAD_LEN: usize = payload_len(3 * 8 + 1);

    fn write_fields(&self, builder: &mut MessageBuilder) {
        builder
            .put_u64(self.param_id)
            .put_u64(self.param_type)
            .put_u64(self.param_value)
            .put_u8(u8::from(self.is_persisted));
    }

    fn read_fields(reader: &mut PayloadReader<'_>) -> Result<Self> {
        Ok(Self {
            param_id: reader.read_u64()?,
            param_type: reader.read_u64()?,
            param_value: reader.read_u64()?,
            is_persisted: read_bool(reader)?,
        })
    }
}

/// PGN 65292: parameter set request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterSet {
    /// Target device; 0 broadcasts to every device.
    pub target_id: u8,
    pub param_id: u64,
    pub param_type: u64,
    pub param_value: u64,
}

impl ZydroPgn for ParameterSet {
    const PGN: u32 = PGN_PARAMETER_SET;
    const NAME: &'static str = "parameter set";
    const FAST_PACKET: bool = true;
    const PAYLOAD_LEN: usize = payload_len(1 + 3 * 8);

    fn write_fields(&self, builder: &mut MessageBuilder) {
        builder
            .put_u8(self.target_id)
            .put_u64(self.param_id)
            .put_u64(self.param_type)
            .put_u64(self.param_value);
    }

    fn read_fields(reader: &mut PayloadReader<'_>) -> Result<Self> {
        Ok(Self {
            target_id: reader.read_u8()?,
            param_id: reader.read_u64()?,
            param_type: reader.read_u64()?,
            param_value: reader.read_u64()?,
        })
    }
}
