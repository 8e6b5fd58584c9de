use std::collections::HashSet;
use std::sync::Arc;

use macro_sniper::analysis::{aggregate, classify, combine, estimate_duration, score};
use macro_sniper::config::{DecisionThresholds, DurationSettings};
use macro_sniper::domain::catalog_with_overrides;
use macro_sniper::models::{RegionResult, SentimentResult};
use macro_sniper::{
    ANALYSIS, AnalysisError, AnalysisRequest, Decision, DurationLabel, IndicatorCatalog,
    Observation, Pair, PairAnalyzer, SentimentLabel, SentimentProviderError, WeightOverrides,
};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn region(name: &str, aggregate_score: f64) -> RegionResult {
    RegionResult {
        region_name: name.to_string(),
        indicator_scores: Vec::new(),
        aggregate_score,
    }
}

fn fixed_polarity(p: f64) -> PairAnalyzer {
    PairAnalyzer::new(
        ANALYSIS,
        Arc::new(move |_: &str| -> Result<f64, SentimentProviderError> { Ok(p) }),
    )
}

#[test]
fn rate_surprise_scores_fifty_points_either_way() {
    let catalog = IndicatorCatalog::builtin();
    let rates = catalog.get("Taux d'intérêt").unwrap();

    let beat = Observation::new("Taux d'intérêt", 0.0, 2.0, 2.5);
    let miss = Observation::new("Taux d'intérêt", 0.0, 2.0, 1.5);
    assert!(approx_eq(score(&beat, rates), 50.0));
    assert!(approx_eq(score(&miss, rates), -50.0));
}

#[test]
fn eighty_versus_ten_is_a_long_buy() {
    let total = combine(
        &region("Zone euro", 80.0),
        &region("États-Unis", 10.0),
        &SentimentResult::empty(""),
    );
    assert_eq!(total, 70.0);
    assert_eq!(classify(total, &DecisionThresholds::default()), Decision::Buy);
    assert_eq!(
        estimate_duration(total, &DurationSettings::default()),
        (72.0, DurationLabel::LongTerm)
    );
}

#[test]
fn balanced_regions_with_flat_statement_are_neutral() {
    let analyzer = fixed_polarity(0.0);
    let mut request = AnalysisRequest::new(Pair::lookup("EUR/USD").unwrap());
    // 0.125 x 40 = 5 on each side
    request.region1_observations = vec![Observation::new("Création d'emplois", 0.0, 1.0, 1.125)];
    request.region2_observations = vec![Observation::new("Création d'emplois", 0.0, 1.0, 1.125)];
    request.statement = "Nothing to add today.".to_string();

    let result = analyzer.analyze(&request).unwrap();
    assert_eq!(result.total_score, 0.0);
    assert_eq!(result.sentiment.label, SentimentLabel::Neutral);
    assert_eq!(result.decision, Decision::Neutral);
    assert_eq!(result.duration_hours, 1.0);
    assert_eq!(result.duration_label, DurationLabel::ShortTerm);
}

#[test]
fn statement_can_tip_the_decision() {
    let mut request = AnalysisRequest::new(Pair::lookup("USD/JPY").unwrap());
    // +15 for the US side, below the buy threshold on its own
    request.region1_observations = vec![Observation::new("PMI (ISM, Markit)", 50.0, 50.0, 51.0)];
    request.statement = "Very hawkish".to_string();

    let without = fixed_polarity(0.0).analyze(&request).unwrap();
    assert_eq!(without.decision, Decision::Neutral);

    let with = fixed_polarity(0.2).analyze(&request).unwrap();
    assert!(approx_eq(with.total_score, 25.0));
    assert_eq!(with.decision, Decision::Buy);
    assert_eq!(with.sentiment.label, SentimentLabel::Positive);
}

#[test]
fn strong_quote_region_sells_the_pair() {
    let analyzer = fixed_polarity(0.0);
    let mut request = AnalysisRequest::new(Pair::lookup("GBP/USD").unwrap());
    request.region2_observations = vec![
        Observation::new("Taux d'intérêt", 5.0, 5.0, 5.25),              // +25
        Observation::new("Inflation (CPI, Core CPI, PCE)", 3.0, 3.0, 3.2), // +10
    ];

    let result = analyzer.analyze(&request).unwrap();
    assert!(approx_eq(result.total_score, -35.0));
    assert_eq!(result.decision, Decision::Sell);
    assert_eq!(result.duration_label, DurationLabel::LongTerm);
}

#[test]
fn overrides_are_local_to_a_request() {
    let analyzer = fixed_polarity(0.0);
    let pair = Pair::lookup("EUR/USD").unwrap();

    let mut heavy = AnalysisRequest::new(pair.clone());
    heavy.region1_observations = vec![Observation::new("Ventes au détail", 0.0, 1.0, 2.0)];
    heavy.weight_overrides.insert("Ventes au détail".to_string(), 100.0);

    let mut plain = AnalysisRequest::new(pair);
    plain.region1_observations = heavy.region1_observations.clone();

    let results = analyzer.analyze_batch(&[heavy, plain]);
    let heavy = results[0].as_ref().unwrap();
    let plain = results[1].as_ref().unwrap();
    assert!(approx_eq(heavy.total_score, 100.0));
    assert!(approx_eq(plain.total_score, 15.0));
}

#[test]
fn invalid_input_is_surfaced_not_skipped() {
    let analyzer = fixed_polarity(0.0);
    let pair = Pair::lookup("AUD/USD").unwrap();

    let mut unknown = AnalysisRequest::new(pair.clone());
    unknown.region1_observations = vec![Observation::new("Iron ore exports", 0.0, 1.0, 3.0)];
    assert!(matches!(
        analyzer.analyze(&unknown),
        Err(AnalysisError::MissingIndicator { .. })
    ));

    let mut bad_weight = AnalysisRequest::new(pair);
    bad_weight.weight_overrides.insert("Chômage".to_string(), 150.0);
    assert_eq!(
        analyzer.analyze(&bad_weight),
        Err(AnalysisError::InvalidWeight {
            name: "Chômage".to_string(),
            weight: 150.0
        })
    );
}

#[test]
fn catalog_names_are_unique_and_order_is_stable() {
    let first = catalog_with_overrides(&WeightOverrides::new()).unwrap();
    let second = catalog_with_overrides(&WeightOverrides::new()).unwrap();
    assert_eq!(first, second);

    let names: HashSet<&str> = first.iter().map(|ind| ind.name.as_str()).collect();
    assert_eq!(names.len(), first.len());
    assert!(first.iter().all(|ind| (0.0..=100.0).contains(&ind.weight)));
}

#[test]
fn empty_regions_aggregate_to_zero() {
    let catalog = IndicatorCatalog::builtin();
    let result = aggregate("Suisse", &catalog, &[]).unwrap();
    assert_eq!(result.aggregate_score, 0.0);
}
