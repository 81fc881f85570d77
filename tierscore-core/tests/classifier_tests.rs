//! Classifier invariant tests
//!
//! These tests pin the scoring table and the boundary behaviour that must
//! hold for every valid input.

use tierscore_core::{
    classify, classify_matrix, classify_with_model, render_json, Category, Confidence, Industry,
    InvestmentSize, MatrixOptions, RiskLevel, RiskTolerance, ScoringInput, ScoringModel, Tier,
    TierThresholds,
};

#[test]
fn test_classify_is_deterministic_for_all_inputs() {
    for input in ScoringInput::all() {
        let a = classify(input.industry, input.investment_size, input.risk_tolerance);
        let b = classify(input.industry, input.investment_size, input.risk_tolerance);
        assert_eq!(a, b, "classification must be deterministic for {:?}", input);
    }
}

#[test]
fn test_technology_enterprise_high() {
    // 85 * 1.10 * 1.15 * 1.10 = 118.2775
    let r = classify(Industry::Technology, InvestmentSize::Enterprise, RiskTolerance::High);
    assert_eq!(r.composite_score, 118);
    assert_eq!(r.tier, Tier::Tier1);
    assert_eq!(r.confidence_label, Confidence::VeryHigh);
}

#[test]
fn test_healthcare_small_low() {
    // 85 * 1.00 * 0.95 * 0.90 = 72.675
    let r = classify(Industry::Healthcare, InvestmentSize::Small, RiskTolerance::Low);
    assert_eq!(r.composite_score, 73);
    assert_eq!(r.tier, Tier::Tier2);
}

#[test]
fn test_manufacturing_large_medium() {
    // 85 * 1.05 * 1.10 * 1.00 = 98.175
    let r = classify(Industry::Manufacturing, InvestmentSize::Large, RiskTolerance::Medium);
    assert_eq!(r.composite_score, 98);
    assert_eq!(r.tier, Tier::Tier1);
    assert_eq!(r.roi_projection, 18.5);
    assert_eq!(r.cost_savings, 45);
    assert_eq!(r.risk_level.as_str(), "Low Risk");
}

#[test]
fn test_score_of_85_is_tier_1_with_high_confidence() {
    // 85 * 1.05 * 0.95 * 1.00 = 84.7875, rounds onto the boundary
    let r = classify(Industry::Manufacturing, InvestmentSize::Small, RiskTolerance::Medium);
    assert_eq!(r.composite_score, 85);
    assert_eq!(r.tier, Tier::Tier1);
    assert_eq!(r.confidence_label.as_str(), "High (85%)");
}

#[test]
fn test_tier_boundaries_with_custom_base_score() {
    // energy/large/medium scales the base score by exactly 1.10
    let input = ScoringInput::new(Industry::Energy, InvestmentSize::Large, RiskTolerance::Medium);
    let model = |base_score| ScoringModel {
        base_score,
        thresholds: TierThresholds::default(),
    };

    // 64 * 1.10 = 70.4, 62 * 1.10 = 68.2
    let r = classify_with_model(&input, &model(64));
    assert_eq!(r.composite_score, 70);
    assert_eq!(r.tier, Tier::Tier2);
    assert_eq!(r.confidence_label, Confidence::Medium);

    let r = classify_with_model(&input, &model(62));
    assert_eq!(r.composite_score, 68);
    assert_eq!(r.tier, Tier::Tier3);
    assert_eq!(r.risk_level, RiskLevel::High);
}

#[test]
fn test_every_result_matches_exactly_one_tier_row() {
    let rows = [
        (18.5, 45, RiskLevel::Low),
        (15.2, 32, RiskLevel::Medium),
        (22.8, 28, RiskLevel::High),
    ];
    let model = ScoringModel::default();

    for input in ScoringInput::all() {
        let r = classify_with_model(&input, &model);
        let matches = rows
            .iter()
            .filter(|(roi, savings, risk)| {
                r.roi_projection == *roi && r.cost_savings == *savings && r.risk_level == *risk
            })
            .count();
        assert_eq!(matches, 1, "result for {:?} must match one tier row", input);

        let expected = r.tier.profile();
        assert_eq!(r.roi_projection, expected.roi_projection);
        assert_eq!(r.cost_savings, expected.cost_savings);
        assert_eq!(r.risk_level, expected.risk_level);
    }
}

#[test]
fn test_default_model_tier_distribution() {
    let reports = classify_matrix(&ScoringModel::default(), &MatrixOptions::default());
    assert_eq!(reports.len(), 72);

    let count = |tier: Tier| reports.iter().filter(|r| r.result.tier == tier).count();
    assert_eq!(count(Tier::Tier1), 48);
    assert_eq!(count(Tier::Tier2), 24);
    assert_eq!(count(Tier::Tier3), 0);

    let min = reports.iter().map(|r| r.result.composite_score).min().unwrap();
    let max = reports.iter().map(|r| r.result.composite_score).max().unwrap();
    assert_eq!(min, 73);
    assert_eq!(max, 118);
}

#[test]
fn test_matrix_is_sorted_and_filtered() {
    let options = MatrixOptions {
        min_score: Some(100),
        tier: None,
        top_n: None,
    };
    let reports = classify_matrix(&ScoringModel::default(), &options);
    assert!(reports.iter().all(|r| r.result.composite_score >= 100));
    assert!(reports
        .windows(2)
        .all(|w| w[0].result.composite_score >= w[1].result.composite_score));
    assert_eq!(reports[0].input.industry, Industry::Technology);
    assert_eq!(reports[0].result.composite_score, 118);

    let options = MatrixOptions {
        min_score: None,
        tier: Some(Tier::Tier2),
        top_n: Some(3),
    };
    let reports = classify_matrix(&ScoringModel::default(), &options);
    assert_eq!(reports.len(), 3);
    assert!(reports.iter().all(|r| r.result.tier == Tier::Tier2));
    // logistics/finance/healthcare/energy large low = 84.15
    assert_eq!(reports[0].result.composite_score, 84);
    assert_eq!(reports[0].input.industry, Industry::Logistics);
}

#[test]
fn test_matrix_json_is_byte_for_byte_stable() {
    let a = render_json(&classify_matrix(&ScoringModel::default(), &MatrixOptions::default()));
    let b = render_json(&classify_matrix(&ScoringModel::default(), &MatrixOptions::default()));
    assert_eq!(a, b);
}

#[test]
fn test_multipliers_only_depend_on_category() {
    for &industry in Industry::all() {
        let r = classify(industry, InvestmentSize::Medium, RiskTolerance::Medium);
        assert_eq!(r.factors.company, industry.multiplier());
        assert_eq!(r.factors.base_score, 85);
    }
}
