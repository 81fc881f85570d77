//! Scoring categories and their multiplier tables
//!
//! Global invariants enforced:
//! - Every category maps to exactly one multiplier
//! - Multipliers are exact hundredths (no binary float drift)
//! - Declaration order is the canonical enumeration order

use crate::error::CategoryError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Fixed-point scaling factor stored in hundredths (1.05 == 105)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Multiplier(u32);

impl Multiplier {
    pub const ONE: Multiplier = Multiplier(100);

    pub const fn from_hundredths(hundredths: u32) -> Self {
        Multiplier(hundredths)
    }

    pub const fn hundredths(self) -> u32 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Multiplier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Multiplier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        if !value.is_finite() || value < 0.0 {
            return Err(serde::de::Error::custom(format!(
                "multiplier must be a non-negative number (got {})",
                value
            )));
        }
        if value > f64::from(u32::MAX / 100) {
            return Err(serde::de::Error::custom(format!(
                "multiplier is out of range (got {}, max {})",
                value,
                u32::MAX / 100
            )));
        }
        Ok(Multiplier((value * 100.0).round() as u32))
    }
}

/// How unknown category strings are handled at the input boundary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryMode {
    /// Unknown values are rejected with `CategoryError::InvalidCategory`
    #[default]
    Strict,
    /// Unknown values fall back to the default multiplier bucket
    Lenient,
}

impl CategoryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryMode::Strict => "strict",
            CategoryMode::Lenient => "lenient",
        }
    }
}

/// Common behaviour of the three scoring input categories
pub trait Category: Copy + FromStr<Err = CategoryError> + 'static {
    /// Input field name used in errors and logs
    const FIELD: &'static str;

    /// Variant used when lenient parsing meets an unknown value
    const FALLBACK: Self;

    /// All variants in canonical order
    fn all() -> &'static [Self];

    fn as_str(&self) -> &'static str;

    fn display_name(&self) -> &'static str;

    fn multiplier(&self) -> Multiplier;

    /// Canonical names, for error messages
    fn names() -> Vec<&'static str> {
        Self::all().iter().map(|c| c.as_str()).collect()
    }
}

/// Parse a category string honouring the given mode
pub fn parse_category<T: Category>(raw: &str, mode: CategoryMode) -> Result<T, CategoryError> {
    match (raw.parse::<T>(), mode) {
        (Ok(value), _) => Ok(value),
        (Err(err), CategoryMode::Strict) => Err(err),
        (Err(_), CategoryMode::Lenient) => {
            tracing::warn!(
                field = T::FIELD,
                value = raw,
                fallback = T::FALLBACK.as_str(),
                "unknown category, using default multiplier bucket"
            );
            Ok(T::FALLBACK)
        }
    }
}

fn normalize(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// Industry the investing company operates in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Manufacturing,
    Technology,
    Logistics,
    Finance,
    Healthcare,
    Energy,
}

impl Category for Industry {
    const FIELD: &'static str = "industry";
    const FALLBACK: Self = Industry::Logistics;

    fn all() -> &'static [Self] {
        &[
            Industry::Manufacturing,
            Industry::Technology,
            Industry::Logistics,
            Industry::Finance,
            Industry::Healthcare,
            Industry::Energy,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Industry::Manufacturing => "manufacturing",
            Industry::Technology => "technology",
            Industry::Logistics => "logistics",
            Industry::Finance => "finance",
            Industry::Healthcare => "healthcare",
            Industry::Energy => "energy",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Industry::Manufacturing => "Manufacturing",
            Industry::Technology => "Technology",
            Industry::Logistics => "Logistics & Distribution",
            Industry::Finance => "Financial Services",
            Industry::Healthcare => "Healthcare",
            Industry::Energy => "Energy & Resources",
        }
    }

    /// technology 1.10, manufacturing 1.05, everything else 1.00
    fn multiplier(&self) -> Multiplier {
        match self {
            Industry::Technology => Multiplier::from_hundredths(110),
            Industry::Manufacturing => Multiplier::from_hundredths(105),
            Industry::Logistics | Industry::Finance | Industry::Healthcare | Industry::Energy => {
                Multiplier::ONE
            }
        }
    }
}

impl FromStr for Industry {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        if key == "tech" {
            return Ok(Industry::Technology);
        }
        Industry::all()
            .iter()
            .copied()
            .find(|i| key == i.as_str() || key == i.display_name().to_ascii_lowercase())
            .ok_or_else(|| CategoryError::invalid(Self::FIELD, s, &Self::names()))
    }
}

/// Size bracket of the planned investment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentSize {
    Small,
    Medium,
    Large,
    Enterprise,
}

impl Category for InvestmentSize {
    const FIELD: &'static str = "investment size";
    const FALLBACK: Self = InvestmentSize::Small;

    fn all() -> &'static [Self] {
        &[
            InvestmentSize::Small,
            InvestmentSize::Medium,
            InvestmentSize::Large,
            InvestmentSize::Enterprise,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            InvestmentSize::Small => "small",
            InvestmentSize::Medium => "medium",
            InvestmentSize::Large => "large",
            InvestmentSize::Enterprise => "enterprise",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            InvestmentSize::Small => "Small",
            InvestmentSize::Medium => "Medium",
            InvestmentSize::Large => "Large",
            InvestmentSize::Enterprise => "Enterprise",
        }
    }

    /// large 1.10, enterprise 1.15, small/medium 0.95
    fn multiplier(&self) -> Multiplier {
        match self {
            InvestmentSize::Large => Multiplier::from_hundredths(110),
            InvestmentSize::Enterprise => Multiplier::from_hundredths(115),
            InvestmentSize::Small | InvestmentSize::Medium => Multiplier::from_hundredths(95),
        }
    }
}

impl FromStr for InvestmentSize {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        InvestmentSize::all()
            .iter()
            .copied()
            .find(|size| key == size.as_str())
            .ok_or_else(|| CategoryError::invalid(Self::FIELD, s, &Self::names()))
    }
}

/// Appetite for risk declared by the investor
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

impl Category for RiskTolerance {
    const FIELD: &'static str = "risk tolerance";
    const FALLBACK: Self = RiskTolerance::Medium;

    fn all() -> &'static [Self] {
        &[RiskTolerance::Low, RiskTolerance::Medium, RiskTolerance::High]
    }

    fn as_str(&self) -> &'static str {
        match self {
            RiskTolerance::Low => "low",
            RiskTolerance::Medium => "medium",
            RiskTolerance::High => "high",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            RiskTolerance::Low => "Low",
            RiskTolerance::Medium => "Medium",
            RiskTolerance::High => "High",
        }
    }

    /// low 0.90, high 1.10, medium 1.00
    fn multiplier(&self) -> Multiplier {
        match self {
            RiskTolerance::Low => Multiplier::from_hundredths(90),
            RiskTolerance::High => Multiplier::from_hundredths(110),
            RiskTolerance::Medium => Multiplier::ONE,
        }
    }
}

impl FromStr for RiskTolerance {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        RiskTolerance::all()
            .iter()
            .copied()
            .find(|risk| key == risk.as_str())
            .ok_or_else(|| CategoryError::invalid(Self::FIELD, s, &Self::names()))
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(Industry, InvestmentSize, RiskTolerance);
