use zydro_n2k_frame::{MessageBuilder, PayloadReader};

use crate::error::Result;
use crate::layout::PGN_GENERIC_COMMAND;
use crate::pgn::{payload_len, ZydroPgn};
use crate::types::Command;

/// PGN 65290: generic command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenericCommand {
    /// Target device; 0 broadcasts to every device.
    pub target_id: u8,
    pub command: Command,
    /// Command-specific parameters.
    pub params: [u64; 4],
}

impl GenericCommand {
    pub fn is_broadcast(&self) -> bool {
        self.target_id == 0
    }
}

impl ZydroPgn for GenericCommand {
    const PGN: u32 = PGN_GENERIC_COMMAND;
    const NAME: &'static str = "generic command";
    const FAST_PACKET: bool = true;
    const PAYLOAD_LEN: usize = payload_len(1 + 1 + 4 * 8);

    fn write_fields(&self, builder: &mut MessageBuilder) {
        builder.put_u8(self.target_id).put_u8(self.command.code());
        for param in self.params {
            builder.put_u64(param);
        }
    }

    fn read_fields(reader: &mut PayloadReader<'_>) -> Result<Self> {
        let target_id = reader.read_u8()?;
        let command = Command::from_code(reader.read_u8()?);
        let mut params = [0u64; 4];
        for param in &mut params {
            *param = reader.read_u64()?;
        }
        Ok(Self {
            target_id,
            command,
            params,
        })
    }
}
