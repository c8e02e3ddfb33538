use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectionColorError {
    #[error("Color cannot be empty")]
    Empty,
    #[error("Color must look like #rrggbb: {0}")]
    Malformed(String),
}

/// Accent color shown next to a connection, stored as lowercase `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnectionColor(String);

impl ConnectionColor {
    pub fn new(color: impl Into<String>) -> Result<Self, ConnectionColorError> {
        let color = color.into();
        let trimmed = color.trim();

        if trimmed.is_empty() {
            return Err(ConnectionColorError::Empty);
        }

        let Some(hex) = trimmed.strip_prefix('#') else {
            return Err(ConnectionColorError::Malformed(trimmed.to_string()));
        };
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConnectionColorError::Malformed(trimmed.to_string()));
        }

        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ConnectionColor {
    fn default() -> Self {
        Self(super::DEFAULT_COLOR.to_string())
    }
}

impl FromStr for ConnectionColor {
    type Err = ConnectionColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for ConnectionColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ConnectionColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ConnectionColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}
