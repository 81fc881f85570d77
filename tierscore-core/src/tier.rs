//! Tier assignment and per-tier display metrics
//!
//! Global invariants enforced:
//! - Tier lower bounds are inclusive (`>=`), evaluated highest tier first
//! - Confidence bounds are strict (`>`) against the same thresholds
//! - Per-tier metrics are constants, never computed from input

use serde::{Deserialize, Serialize};

/// Investment tier classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "TIER_1")]
    Tier1, // >= 85
    #[serde(rename = "TIER_2")]
    Tier2, // 70-84
    #[serde(rename = "TIER_3")]
    Tier3, // < 70
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Tier1, Tier::Tier2, Tier::Tier3];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Tier1 => "TIER_1",
            Tier::Tier2 => "TIER_2",
            Tier::Tier3 => "TIER_3",
        }
    }

    /// 1-based tier number
    pub fn number(&self) -> u8 {
        match self {
            Tier::Tier1 => 1,
            Tier::Tier2 => 2,
            Tier::Tier3 => 3,
        }
    }

    pub fn from_number(n: u8) -> Option<Tier> {
        match n {
            1 => Some(Tier::Tier1),
            2 => Some(Tier::Tier2),
            3 => Some(Tier::Tier3),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Tier::Tier1 => "Tier 1 - Premium Investment",
            Tier::Tier2 => "Tier 2 - Strategic Investment",
            Tier::Tier3 => "Tier 3 - Emerging Opportunity",
        }
    }

    pub fn profile(&self) -> TierProfile {
        match self {
            Tier::Tier1 => TierProfile {
                roi_projection: 18.5,
                cost_savings: 45,
                break_even_months: break_even_months(18.5),
                risk_level: RiskLevel::Low,
            },
            Tier::Tier2 => TierProfile {
                roi_projection: 15.2,
                cost_savings: 32,
                break_even_months: break_even_months(15.2),
                risk_level: RiskLevel::Medium,
            },
            Tier::Tier3 => TierProfile {
                roi_projection: 22.8,
                cost_savings: 28,
                break_even_months: break_even_months(22.8),
                risk_level: RiskLevel::High,
            },
        }
    }
}

/// Risk label attached to a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Medium Risk")]
    Medium,
    #[serde(rename = "High Risk")]
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
        }
    }

    /// Insurance coverage suggested for this risk level, most basic first
    pub fn insurance_recommendations(&self) -> &'static [&'static str] {
        match self {
            RiskLevel::Low => &["Standard business insurance", "Property insurance"],
            RiskLevel::Medium => &[
                "Enhanced business insurance",
                "Political risk insurance",
                "Currency insurance",
            ],
            RiskLevel::High => &[
                "Comprehensive risk insurance",
                "Political risk insurance",
                "Currency insurance",
                "Supply chain insurance",
            ],
        }
    }
}

/// Fixed display metrics for one tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierProfile {
    /// Projected ROI in percent
    pub roi_projection: f64,
    /// Projected cost savings in percent
    pub cost_savings: u32,
    /// Months until the projected ROI pays back the investment
    pub break_even_months: Option<u32>,
    pub risk_level: RiskLevel,
}

/// Whole months to break even at the given annual ROI percentage
///
/// Returns `None` when the ROI is not positive.
pub fn break_even_months(roi_projection: f64) -> Option<u32> {
    if roi_projection <= 0.0 || !roi_projection.is_finite() {
        return None;
    }
    Some((12.0 / (roi_projection / 100.0)).floor() as u32)
}

/// Confidence label derived from the composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Confidence {
    #[serde(rename = "Very High (95%)")]
    VeryHigh,
    #[serde(rename = "High (85%)")]
    High,
    #[serde(rename = "Medium (75%)")]
    Medium,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::VeryHigh => "Very High (95%)",
            Confidence::High => "High (85%)",
            Confidence::Medium => "Medium (75%)",
        }
    }
}

/// Configurable tier thresholds (inclusive lower bounds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThresholds {
    pub tier_1: u32,
    pub tier_2: u32,
}

impl Default for TierThresholds {
    fn default() -> Self {
        TierThresholds {
            tier_1: 85,
            tier_2: 70,
        }
    }
}

/// Assign tier with default thresholds
pub fn assign_tier(score: u32) -> Tier {
    assign_tier_with_thresholds(score, &TierThresholds::default())
}

/// Assign tier with custom thresholds
pub fn assign_tier_with_thresholds(score: u32, thresholds: &TierThresholds) -> Tier {
    if score >= thresholds.tier_1 {
        Tier::Tier1
    } else if score >= thresholds.tier_2 {
        Tier::Tier2
    } else {
        Tier::Tier3
    }
}

/// Confidence label with default thresholds
pub fn assign_confidence(score: u32) -> Confidence {
    assign_confidence_with_thresholds(score, &TierThresholds::default())
}

/// Confidence label with custom thresholds
///
/// Comparisons are strict, so a score sitting exactly on a tier boundary
/// reports the confidence of the tier below it.
pub fn assign_confidence_with_thresholds(score: u32, thresholds: &TierThresholds) -> Confidence {
    if score > thresholds.tier_1 {
        Confidence::VeryHigh
    } else if score > thresholds.tier_2 {
        Confidence::High
    } else {
        Confidence::Medium
    }
}
