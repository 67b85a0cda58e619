// SPDX-License-Identifier: MPL-2.0
//! Top-level layout of the preview area.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How visible devices are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Every (filtered) device in a scrollable grid.
    #[default]
    Grid,
    /// One phone, one desktop and one tablet on a rotating carousel.
    Carousel,
}

impl LayoutMode {
    pub const ALL: [LayoutMode; 2] = [LayoutMode::Grid, LayoutMode::Carousel];

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            LayoutMode::Grid => "layout-grid",
            LayoutMode::Carousel => "layout-carousel",
        }
    }
}

impl FromStr for LayoutMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "grid" => Ok(LayoutMode::Grid),
            "carousel" => Ok(LayoutMode::Carousel),
            other => Err(format!("unknown layout '{other}' (expected grid or carousel)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Carousel".parse::<LayoutMode>(), Ok(LayoutMode::Carousel));
        assert_eq!("grid".parse::<LayoutMode>(), Ok(LayoutMode::Grid));
        assert!("list".parse::<LayoutMode>().is_err());
    }
}
