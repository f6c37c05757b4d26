//! Volume level and its wire parsing
//!
//! Clients send the volume either as a JSON integer or as a string
//! (`{"volume": 70}` or `{"volume": "70"}`). Parsing is explicit and
//! checks, in order: presence, integer syntax, range.

use std::num::IntErrorKind;

use crate::error::{Error, Result};
use serde_json::Value;

/// Volume level, always within `0..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Volume(u8);

impl Volume {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;

    /// Initial volume of a fresh player
    pub const DEFAULT: Volume = Volume(50);

    /// Range-checked constructor
    pub fn new(level: i64) -> Result<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&level) {
            Ok(Volume(level as u8))
        } else {
            Err(out_of_range())
        }
    }

    /// Parse the raw `volume` field of a request body
    ///
    /// `None` and JSON `null` both mean the field is missing.
    pub fn parse(raw: Option<&Value>) -> Result<Self> {
        let level = match raw {
            None | Some(Value::Null) => {
                return Err(Error::invalid_request("Volume parameter required"));
            }
            Some(Value::String(text)) => match text.trim().parse::<i64>() {
                Ok(level) => level,
                // Still an integer, just beyond i64
                Err(e)
                    if matches!(
                        e.kind(),
                        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
                    ) =>
                {
                    return Err(out_of_range());
                }
                Err(e) => {
                    return Err(Error::invalid_request(format!(
                        "Invalid volume '{}': {}",
                        text, e
                    )));
                }
            },
            Some(Value::Number(number)) => match number.as_i64() {
                Some(level) => level,
                // Positive integer beyond i64
                None if number.is_u64() => return Err(out_of_range()),
                // Negative integer below i64::MIN, which serde_json stores as f64
                None if number.as_f64().map_or(false, is_whole_beyond_i64) => {
                    return Err(out_of_range());
                }
                None => {
                    return Err(Error::invalid_request(format!(
                        "Invalid volume {}: volume must be an integer",
                        number
                    )));
                }
            },
            Some(other) => {
                return Err(Error::invalid_request(format!(
                    "Invalid volume {}: volume must be an integer",
                    other
                )));
            }
        };

        Self::new(level)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for Volume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_whole_beyond_i64(value: f64) -> bool {
    value.fract() == 0.0 && value.abs() >= i64::MAX as f64
}

fn out_of_range() -> Error {
    Error::invalid_request("Volume must be between 0 and 100")
}
