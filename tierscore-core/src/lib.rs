//! tierscore core library - deterministic investment tier classification

#![deny(warnings)]

// Global invariants enforced in this crate:
// - Classification is a pure function of its typed inputs
// - No global mutable state
// - No randomness, clocks, threads, or async
// - Deterministic ordering must be explicit
// - Identical input yields byte-for-byte identical output

pub mod category;
pub mod config;
pub mod error;
pub mod report;
pub mod scoring;
pub mod tier;

pub use category::{Category, CategoryMode, Industry, InvestmentSize, Multiplier, RiskTolerance};
pub use error::CategoryError;
pub use report::{render_document, render_json, render_text, sort_reports, ScoringReport};
pub use scoring::{classify, classify_with_model, ScoringInput, ScoringModel, ScoringResult};
pub use tier::{Confidence, RiskLevel, Tier, TierThresholds};

/// Filters applied when enumerating the full input matrix
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatrixOptions {
    pub min_score: Option<u32>,
    pub tier: Option<Tier>,
    pub top_n: Option<usize>,
}

impl MatrixOptions {
    /// Fill unset filters from the resolved config
    ///
    /// Values already set (command-line flags) take precedence.
    pub fn merge(self, config: &config::ResolvedConfig) -> Self {
        MatrixOptions {
            min_score: self.min_score.or(config.min_score),
            tier: self.tier.or(config.tier),
            top_n: self.top_n.or(config.top_n),
        }
    }
}

/// Classify a single input into a report
pub fn classify_report(input: ScoringInput, model: &ScoringModel) -> ScoringReport {
    ScoringReport::new(input, classify_with_model(&input, model))
}

/// Classify every valid input triple
///
/// Reports are filtered, sorted by score descending (ties in category
/// declaration order) and truncated to `top_n`.
pub fn classify_matrix(model: &ScoringModel, options: &MatrixOptions) -> Vec<ScoringReport> {
    let reports: Vec<ScoringReport> = ScoringInput::all()
        .into_iter()
        .map(|input| classify_report(input, model))
        .filter(|report| match options.min_score {
            Some(min) => report.result.composite_score >= min,
            None => true,
        })
        .filter(|report| match options.tier {
            Some(tier) => report.result.tier == tier,
            None => true,
        })
        .collect();

    tracing::debug!(matched = reports.len(), "classified input matrix");

    // Sort deterministically
    let sorted_reports = sort_reports(reports);

    // Apply top_n filter if specified
    if let Some(top_n) = options.top_n {
        sorted_reports.into_iter().take(top_n).collect()
    } else {
        sorted_reports
    }
}
