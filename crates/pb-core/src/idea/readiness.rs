//! Idea readiness: how many required ingredients are missing from the pantry.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Largest missing count that is persisted. Anything above is stored as this.
pub const MAX_STORED_MISSING: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReadinessTier {
    /// Nothing missing.
    #[serde(rename = "READY")]
    Ready,
    /// Exactly one ingredient missing.
    #[serde(rename = "N1")]
    N1,
    /// Two or more ingredients missing.
    #[serde(rename = "N2")]
    N2,
}

impl ReadinessTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadinessTier::Ready => "READY",
            ReadinessTier::N1 => "N1",
            ReadinessTier::N2 => "N2",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "READY" => Some(ReadinessTier::Ready),
            "N1" => Some(ReadinessTier::N1),
            "N2" => Some(ReadinessTier::N2),
            _ => None,
        }
    }
}

impl Display for ReadinessTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying a raw missing count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Readiness {
    /// Count to persist, always in `0..=2`.
    pub stored_count: u32,
    pub tier: ReadinessTier,
}

/// Classify a raw missing-ingredient count.
///
/// The input is floored and clamped at zero, then mapped to a tier
/// (`0 → READY`, `1 → N1`, `≥2 → N2`). The stored count is clamped to `2`.
/// Total over `f64`: NaN counts as zero, `+∞` as "two or more".
pub fn classify(missing: f64) -> Readiness {
    let floored = if missing.is_nan() { 0.0 } else { missing.floor().max(0.0) };

    let tier = if floored == 0.0 {
        ReadinessTier::Ready
    } else if floored == 1.0 {
        ReadinessTier::N1
    } else {
        ReadinessTier::N2
    };

    Readiness {
        stored_count: floored.min(MAX_STORED_MISSING as f64) as u32,
        tier,
    }
}
