//! Membership plan tiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The purchasable membership tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanType {
    #[serde(rename = "6-month")]
    SixMonth,
    #[serde(rename = "1-year")]
    OneYear,
    #[serde(rename = "lifetime")]
    Lifetime,
}

impl PlanType {
    /// Duration in calendar months; `None` for the unlimited lifetime tier.
    pub fn duration_months(&self) -> Option<u32> {
        match self {
            PlanType::SixMonth => Some(6),
            PlanType::OneYear => Some(12),
            PlanType::Lifetime => None,
        }
    }

    pub fn is_lifetime(&self) -> bool {
        matches!(self, PlanType::Lifetime)
    }

    /// Stable key used in the database and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::SixMonth => "6-month",
            PlanType::OneYear => "1-year",
            PlanType::Lifetime => "lifetime",
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlanType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "6-month" => Ok(PlanType::SixMonth),
            "1-year" => Ok(PlanType::OneYear),
            "lifetime" => Ok(PlanType::Lifetime),
            other => Err(format!("unknown plan type: {}", other)),
        }
    }
}
