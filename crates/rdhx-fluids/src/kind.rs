//! Coolant kind definitions.

use crate::error::FluidError;
use std::fmt;
use std::str::FromStr;

/// Coolant kinds supported by the property tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FluidKind {
    #[default]
    Water,
    PropyleneGlycol,
    EthyleneGlycol,
}

impl FluidKind {
    /// Canonical catalog identifier for this kind.
    pub fn canonical_id(&self) -> &'static str {
        match self {
            FluidKind::Water => "water",
            FluidKind::PropyleneGlycol => "propylene_glycol",
            FluidKind::EthyleneGlycol => "ethylene_glycol",
        }
    }

    /// True for glycol mixtures (anything that takes a concentration).
    pub fn is_glycol(&self) -> bool {
        !matches!(self, FluidKind::Water)
    }
}

impl fmt::Display for FluidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_id())
    }
}

impl FromStr for FluidKind {
    type Err = FluidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "water" => Ok(FluidKind::Water),
            "propylene_glycol" => Ok(FluidKind::PropyleneGlycol),
            "ethylene_glycol" => Ok(FluidKind::EthyleneGlycol),
            other => Err(FluidError::UnknownKind {
                name: other.to_string(),
            }),
        }
    }
}
