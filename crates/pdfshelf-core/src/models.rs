//! Domain models shared by the storage and API crates.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use utoipa::ToSchema;

/// A file in the bucket, optionally with a time-limited download URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StoredFile {
    pub key: String,
    /// Signed GET URL; absent for non-PDF keys or when signing failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl StoredFile {
    pub fn new(key: impl Into<String>, url: Option<String>) -> Self {
        Self {
            key: key.into(),
            url,
        }
    }
}

/// How storage keys are derived from uploaded file names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyStrategy {
    /// Keep the (sanitized) original file name. Uploads with the same name overwrite each other.
    Original,
    /// Prefix the sanitized file name with a random UUID: `{uuid}_{name}`.
    #[default]
    UuidPrefix,
}

impl FromStr for KeyStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "original" => Ok(KeyStrategy::Original),
            "uuid-prefix" | "uuid" => Ok(KeyStrategy::UuidPrefix),
            _ => Err(anyhow::anyhow!(
                "Invalid key strategy: {} (expected 'original' or 'uuid-prefix')",
                s
            )),
        }
    }
}

impl Display for KeyStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            KeyStrategy::Original => write!(f, "original"),
            KeyStrategy::UuidPrefix => write!(f, "uuid-prefix"),
        }
    }
}
