//! Reporting and output generation
//!
//! Global invariants enforced:
//! - Deterministic output ordering
//! - Byte-for-byte identical output across runs

use crate::category::Category;
use crate::scoring::{ScoringInput, ScoringResult};
use serde::{Deserialize, Serialize};

/// Classification report for one input triple
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ScoringReport {
    pub input: ScoringInput,
    pub result: ScoringResult,
}

impl ScoringReport {
    pub fn new(input: ScoringInput, result: ScoringResult) -> Self {
        ScoringReport { input, result }
    }

    /// Ordered key/value pairs for tabular document export
    pub fn to_key_values(&self) -> Vec<(&'static str, String)> {
        let r = &self.result;
        vec![
            ("Industry", self.input.industry.display_name().to_string()),
            (
                "Investment Size",
                self.input.investment_size.display_name().to_string(),
            ),
            (
                "Risk Tolerance",
                self.input.risk_tolerance.display_name().to_string(),
            ),
            ("Composite Score", r.composite_score.to_string()),
            ("Investment Tier", r.tier_name.clone()),
            ("Tier Level", r.tier.as_str().to_string()),
            ("Confidence", r.confidence_label.as_str().to_string()),
            ("ROI Projection", format!("{:.1}%", r.roi_projection)),
            ("Cost Savings", format!("{}%", r.cost_savings)),
            (
                "Break-even",
                match r.break_even_months {
                    Some(months) => format!("{} months", months),
                    None => "N/A".to_string(),
                },
            ),
            ("Risk Level", r.risk_level.as_str().to_string()),
            ("Insurance", r.insurance_recommendations.join("; ")),
            (
                "Score Factors",
                format!(
                    "{} x {} x {} x {} = {:.4}",
                    r.factors.base_score,
                    r.factors.company,
                    r.factors.size,
                    r.factors.risk,
                    r.factors.raw_score()
                ),
            ),
        ]
    }
}

/// Sort reports deterministically
pub fn sort_reports(mut reports: Vec<ScoringReport>) -> Vec<ScoringReport> {
    reports.sort_by(|a, b| {
        // 1. Score descending
        b.result
            .composite_score
            .cmp(&a.result.composite_score)
            // 2. Input triple in declaration order
            .then_with(|| a.input.industry.cmp(&b.input.industry))
            .then_with(|| a.input.investment_size.cmp(&b.input.investment_size))
            .then_with(|| a.input.risk_tolerance.cmp(&b.input.risk_tolerance))
    });
    reports
}

/// Render reports as text output
pub fn render_text(reports: &[ScoringReport]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<6} {:<7} {:<14} {:<11} {:<7} {:<6} {:<8} {:<12} {}\n",
        "SCORE", "TIER", "INDUSTRY", "SIZE", "RISK", "ROI", "SAVINGS", "RISK LEVEL", "CONFIDENCE"
    ));

    for report in reports {
        let r = &report.result;
        let roi_str = format!("{:.1}%", r.roi_projection);
        let savings_str = format!("{}%", r.cost_savings);
        output.push_str(&format!(
            "{:<6} {:<7} {:<14} {:<11} {:<7} {:<6} {:<8} {:<12} {}\n",
            r.composite_score,
            r.tier.as_str(),
            report.input.industry.as_str(),
            report.input.investment_size.as_str(),
            report.input.risk_tolerance.as_str(),
            roi_str,
            savings_str,
            r.risk_level.as_str(),
            r.confidence_label.as_str(),
        ));
    }

    output
}

/// Render reports as JSON output
pub fn render_json(reports: &[ScoringReport]) -> String {
    serde_json::to_string_pretty(reports).unwrap_or_else(|_| "[]".to_string())
}

/// Render a single report as aligned key/value lines
pub fn render_document(report: &ScoringReport) -> String {
    let pairs = report.to_key_values();
    let width = pairs.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    let mut output = String::new();
    for (key, value) in pairs {
        output.push_str(&format!("{:<width$}  {}\n", key, value, width = width));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{Industry, InvestmentSize, RiskTolerance};
    use crate::scoring::{classify_with_model, ScoringModel};

    fn report(i: Industry, s: InvestmentSize, r: RiskTolerance) -> ScoringReport {
        let input = ScoringInput::new(i, s, r);
        ScoringReport::new(input, classify_with_model(&input, &ScoringModel::default()))
    }

    #[test]
    fn test_sort_by_score_then_input() {
        let reports = vec![
            report(Industry::Finance, InvestmentSize::Small, RiskTolerance::Low),
            report(Industry::Technology, InvestmentSize::Enterprise, RiskTolerance::High),
            report(Industry::Healthcare, InvestmentSize::Small, RiskTolerance::Low),
        ];
        let sorted = sort_reports(reports);
        assert_eq!(sorted[0].result.composite_score, 118);
        // finance and healthcare tie on 73; declaration order decides
        assert_eq!(sorted[1].input.industry, Industry::Finance);
        assert_eq!(sorted[2].input.industry, Industry::Healthcare);
    }

    #[test]
    fn test_key_values_order_and_content() {
        let r = report(Industry::Manufacturing, InvestmentSize::Large, RiskTolerance::Medium);
        let kv = r.to_key_values();
        let keys: Vec<_> = kv.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys[0], "Industry");
        assert_eq!(keys[3], "Composite Score");
        assert_eq!(kv[3].1, "98");
        assert_eq!(kv[4].1, "Tier 1 - Premium Investment");
        assert_eq!(kv[7].1, "18.5%");
        assert_eq!(kv[8].1, "45%");
        assert_eq!(kv[9], ("Break-even", "64 months".to_string()));
        assert_eq!(kv[10].1, "Low Risk");
        assert_eq!(kv[12].1, "85 x 1.05 x 1.10 x 1.00 = 98.1750");
    }

    #[test]
    fn test_key_values_break_even_per_tier() {
        let t2 = report(Industry::Healthcare, InvestmentSize::Small, RiskTolerance::Low);
        assert_eq!(t2.to_key_values()[9].1, "78 months");

        let mut t3 = t2.clone();
        t3.result.break_even_months = None;
        assert_eq!(t3.to_key_values()[9].1, "N/A");
    }

    #[test]
    fn test_render_json_includes_break_even() {
        let reports = vec![report(Industry::Finance, InvestmentSize::Small, RiskTolerance::Low)];
        let json = render_json(&reports);
        assert!(json.contains("\"break_even_months\": 78"));
    }

    #[test]
    fn test_render_text_has_header_and_rows() {
        let reports = vec![report(
            Industry::Logistics,
            InvestmentSize::Medium,
            RiskTolerance::Medium,
        )];
        let text = render_text(&reports);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("SCORE"));
        assert!(lines[1].starts_with("81 "));
        assert!(lines[1].contains("TIER_2"));
        assert!(lines[1].ends_with("High (85%)"));
    }

    #[test]
    fn test_render_text_keeps_columns_for_longest_industry() {
        let reports = vec![
            report(Industry::Manufacturing, InvestmentSize::Enterprise, RiskTolerance::High),
            report(Industry::Energy, InvestmentSize::Enterprise, RiskTolerance::High),
        ];
        let text = render_text(&reports);
        let lines: Vec<_> = text.lines().collect();
        assert!(lines[1].contains(" manufacturing  enterprise "));
        assert!(lines[2].contains(" energy         enterprise "));
        let size_col = lines[0].find("SIZE").unwrap();
        assert_eq!(lines[1].find("enterprise"), Some(size_col));
        assert_eq!(lines[2].find("enterprise"), Some(size_col));
    }

    #[test]
    fn test_render_json_is_stable() {
        let reports = vec![report(Industry::Energy, InvestmentSize::Large, RiskTolerance::High)];
        let a = render_json(&reports);
        let b = render_json(&reports);
        assert_eq!(a, b);

        let parsed: Vec<ScoringReport> = serde_json::from_str(&a).unwrap();
        assert_eq!(parsed, reports);
        assert!(a.contains("\"tier\": \"TIER_1\""));
        assert!(a.contains("\"investment_size\": \"large\""));
    }

    #[test]
    fn test_render_document_aligns_keys() {
        let r = report(Industry::Technology, InvestmentSize::Small, RiskTolerance::Low);
        let doc = render_document(&r);
        assert!(doc.starts_with("Industry         Technology\n"));
        assert!(doc.contains("Composite Score  80\n"));
        assert!(doc.contains("Confidence       High (85%)\n"));
    }
}
