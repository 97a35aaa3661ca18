//! Watchlist configuration — which coins the dashboard tracks.
//!
//! Stored as a small TOML file; also buildable from a comma-separated
//! command-line argument.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// The tracked coin ids, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Watchlist {
    pub ids: Vec<String>,
}

impl Default for Watchlist {
    /// The stock four-coin board.
    fn default() -> Self {
        Self {
            ids: ["bitcoin", "ethereum", "solana", "dogecoin"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl Watchlist {
    /// Load a watchlist from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("read watchlist file: {e}"))?;
        Self::from_toml(&content)
    }

    /// Parse a watchlist from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, String> {
        let list: Self =
            toml::from_str(content).map_err(|e| format!("parse watchlist TOML: {e}"))?;
        if list.ids.is_empty() {
            return Err("watchlist has no coin ids".into());
        }
        Ok(list)
    }

    /// Build a watchlist from a comma-separated id list, e.g.
    /// `"bitcoin,ethereum"`. Whitespace around ids is trimmed.
    pub fn from_csv_arg(arg: &str) -> Result<Self, String> {
        let ids: Vec<String> = arg
            .split(',')
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .collect();
        if ids.is_empty() {
            return Err(format!("no coin ids in {arg:?}"));
        }
        Ok(Self { ids })
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("serialize watchlist: {e}"))
    }

    /// Ids joined with commas, the shape the market endpoint expects.
    pub fn joined(&self) -> String {
        self.ids.join(",")
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
