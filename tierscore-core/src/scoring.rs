//! Composite score calculation
//!
//! Combines a base score with three categorical multipliers and classifies
//! the result into a tier with fixed display metrics.
//!
//! Global invariants enforced:
//! - Pure: no IO, no clocks, no randomness
//! - Products are computed exactly in fixed point
//! - Rounding is half away from zero on the exact product

use crate::category::{
    parse_category, Category, CategoryMode, Industry, InvestmentSize, Multiplier, RiskTolerance,
};
use crate::error::CategoryError;
use crate::tier::{
    assign_confidence_with_thresholds, assign_tier_with_thresholds, Confidence, RiskLevel, Tier,
    TierThresholds,
};
use serde::{Deserialize, Serialize};

/// Base score every classification starts from
pub const DEFAULT_BASE_SCORE: u32 = 85;

/// Three multipliers in hundredths each
const FIXED_POINT_SCALE: u64 = 100 * 100 * 100;

/// Categorical inputs to the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ScoringInput {
    pub industry: Industry,
    pub investment_size: InvestmentSize,
    pub risk_tolerance: RiskTolerance,
}

impl ScoringInput {
    pub fn new(
        industry: Industry,
        investment_size: InvestmentSize,
        risk_tolerance: RiskTolerance,
    ) -> Self {
        ScoringInput {
            industry,
            investment_size,
            risk_tolerance,
        }
    }

    /// Build an input from raw strings
    ///
    /// In strict mode the first unknown field is reported. In lenient mode
    /// unknown fields fall back to their default multiplier bucket.
    pub fn parse(
        industry: &str,
        investment_size: &str,
        risk_tolerance: &str,
        mode: CategoryMode,
    ) -> Result<Self, CategoryError> {
        Ok(ScoringInput {
            industry: parse_category(industry, mode)?,
            investment_size: parse_category(investment_size, mode)?,
            risk_tolerance: parse_category(risk_tolerance, mode)?,
        })
    }

    /// Every valid input triple in canonical order (industry, size, risk)
    pub fn all() -> Vec<ScoringInput> {
        let mut inputs = Vec::with_capacity(
            Industry::all().len() * InvestmentSize::all().len() * RiskTolerance::all().len(),
        );
        for &industry in Industry::all() {
            for &size in InvestmentSize::all() {
                for &risk in RiskTolerance::all() {
                    inputs.push(ScoringInput::new(industry, size, risk));
                }
            }
        }
        inputs
    }
}

/// Score model parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringModel {
    pub base_score: u32,
    pub thresholds: TierThresholds,
}

impl Default for ScoringModel {
    fn default() -> Self {
        ScoringModel {
            base_score: DEFAULT_BASE_SCORE,
            thresholds: TierThresholds::default(),
        }
    }
}

/// Breakdown of the factors that produced a composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ScoreFactors {
    pub base_score: u32,
    pub company: Multiplier,
    pub size: Multiplier,
    pub risk: Multiplier,
}

impl ScoreFactors {
    pub fn for_input(input: &ScoringInput, base_score: u32) -> Self {
        ScoreFactors {
            base_score,
            company: input.industry.multiplier(),
            size: input.investment_size.multiplier(),
            risk: input.risk_tolerance.multiplier(),
        }
    }

    /// Unrounded product, for display only
    pub fn raw_score(&self) -> f64 {
        let product = u64::from(self.base_score)
            * u64::from(self.company.hundredths())
            * u64::from(self.size.hundredths())
            * u64::from(self.risk.hundredths());
        product as f64 / FIXED_POINT_SCALE as f64
    }

    /// round(base * company * size * risk), ties away from zero
    pub fn composite_score(&self) -> u32 {
        let product = u64::from(self.base_score)
            * u64::from(self.company.hundredths())
            * u64::from(self.size.hundredths())
            * u64::from(self.risk.hundredths());
        let rounded = (product + FIXED_POINT_SCALE / 2) / FIXED_POINT_SCALE;
        u32::try_from(rounded).unwrap_or(u32::MAX)
    }
}

/// Classification output for a single input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ScoringResult {
    pub composite_score: u32,
    pub tier: Tier,
    pub tier_name: String,
    pub confidence_label: Confidence,
    pub roi_projection: f64,
    pub cost_savings: u32,
    pub break_even_months: Option<u32>,
    pub risk_level: RiskLevel,
    pub insurance_recommendations: Vec<String>,
    pub factors: ScoreFactors,
}

/// Classify an input with the default model
pub fn classify(
    industry: Industry,
    investment_size: InvestmentSize,
    risk_tolerance: RiskTolerance,
) -> ScoringResult {
    classify_with_model(
        &ScoringInput::new(industry, investment_size, risk_tolerance),
        &ScoringModel::default(),
    )
}

/// Classify an input with a custom model
pub fn classify_with_model(input: &ScoringInput, model: &ScoringModel) -> ScoringResult {
    let factors = ScoreFactors::for_input(input, model.base_score);
    let score = factors.composite_score();
    let tier = assign_tier_with_thresholds(score, &model.thresholds);
    let profile = tier.profile();

    ScoringResult {
        composite_score: score,
        tier,
        tier_name: tier.display_name().to_string(),
        confidence_label: assign_confidence_with_thresholds(score, &model.thresholds),
        roi_projection: profile.roi_projection,
        cost_savings: profile.cost_savings,
        break_even_months: profile.break_even_months,
        risk_level: profile.risk_level,
        insurance_recommendations: profile
            .risk_level
            .insurance_recommendations()
            .iter()
            .map(|s| s.to_string())
            .collect(),
        factors,
    }
}
