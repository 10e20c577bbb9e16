//! Single-byte enumerations carried in Zydro payloads.
//!
//! Decoding never rejects a byte. Codes without a declared meaning become
//! `Unknown(code)` and encode back to the same byte.

use std::fmt;
use std::str::FromStr;

use crate::error::PgnError;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A code with no declared meaning, kept verbatim.
            Unknown(u8),
        }

        impl $name {
            /// Every declared (non-`Unknown`) value.
            pub const ALL: &'static [$name] = &[$( $name::$variant, )+];

            /// Wire code for this value.
            pub const fn code(self) -> u8 {
                match self {
                    $( $name::$variant => $code, )+
                    $name::Unknown(code) => code,
                }
            }

            /// Interpret a raw wire byte.
            pub const fn from_code(code: u8) -> Self {
                match code {
                    $( $code => $name::$variant, )+
                    other => $name::Unknown(other),
                }
            }

            pub const fn is_known(self) -> bool {
                !matches!(self, $name::Unknown(_))
            }

            /// Short snake_case label, `None` for unknown codes.
            pub const fn label(self) -> Option<&'static str> {
                match self {
                    $( $name::$variant => Some($label), )+
                    $name::Unknown(_) => None,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::Invalid
            }
        }

        impl From<u8> for $name {
            fn from(code: u8) -> Self {
                $name::from_code(code)
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> Self {
                value.code()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.label() {
                    Some(label) => f.write_str(label),
                    None => write!(f, "unknown({})", self.code()),
                }
            }
        }

        impl FromStr for $name {
            type Err = PgnError;

            /// Accepts a label (`_` or `-` separated) or a decimal code.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
                if let Some(value) = $name::ALL
                    .iter()
                    .copied()
                    .find(|value| value.label() == Some(normalized.as_str()))
                {
                    return Ok(value);
                }
                normalized
                    .parse::<u8>()
                    .map($name::from_code)
                    .map_err(|_| PgnError::UnknownName {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

wire_enum! {
    /// Zydro product model reported in the heartbeat.
    DeviceModel, "device model" {
        Invalid = 0 => "invalid",
        Estop = 1 => "estop",
        AutonomyCore = 2 => "autonomy_core",
    }
}

wire_enum! {
    /// Health status reported in the heartbeat.
    DeviceHealth, "device health" {
        Invalid = 0 => "invalid",
        Pending = 1 => "pending",
        Healthy = 2 => "healthy",
        Unhealthy = 3 => "unhealthy",
        EmergencyStop = 4 => "emergency_stop",
    }
}

wire_enum! {
    /// Control mode of a throttle setpoint.
    ThrottleSetpointMode, "throttle setpoint mode" {
        Invalid = 0 => "invalid",
        Idle = 1 => "idle",
        /// Target is a fraction from -1.0 to 1.0.
        ThrottlePercentage = 2 => "throttle_percentage",
        /// Target is engine RPM.
        Rpm = 3 => "rpm",
    }
}

wire_enum! {
    /// Command carried by the generic command message.
    Command, "command" {
        Invalid = 0 => "invalid",
        ParameterGet = 1 => "parameter_get",
        ParameterGetAll = 2 => "parameter_get_all",
        ParameterSet = 3 => "parameter_set",
        ParameterReset = 4 => "parameter_reset",
        ParameterResetAll = 5 => "parameter_reset_all",
    }
}
