//! Fixed set of service areas a venue can belong to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Area label of a venue.
///
/// Serialized with its display label (e.g. `"Karachi East"`), which is
/// also the text matched by free-text search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Area {
    /// `Karachi East`
    #[serde(rename = "Karachi East")]
    KarachiEast,
    /// `Karachi West`
    #[serde(rename = "Karachi West")]
    KarachiWest,
    /// `Karachi Central`
    #[serde(rename = "Karachi Central")]
    KarachiCentral,
}

impl Area {
    /// Every area, in the order offered by the area selector.
    pub const ALL: [Self; 3] = [Self::KarachiEast, Self::KarachiWest, Self::KarachiCentral];

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::KarachiEast => "Karachi East",
            Self::KarachiWest => "Karachi West",
            Self::KarachiCentral => "Karachi Central",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Area {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|area| area.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CatalogError::UnknownArea(s.to_string()))
    }
}
