use chrono::{Duration, NaiveDate};
use pretty_assertions::assert_eq;
use price_features::{
    create_features, training_set, CalendarFeatures, FeatureRow, LagFeatures, PricePoint,
    PriceSeries, MAX_LAG,
};
use rstest::rstest;

fn day0() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

// Consecutive days starting at day0 with closes 10, 11, 12, ...
fn create_test_series(len: usize) -> PriceSeries {
    PriceSeries::from_pairs((0..len).map(|i| (day0() + Duration::days(i as i64), 10.0 + i as f64)))
        .unwrap()
}

#[rstest]
#[case(0, 0)]
#[case(1, 0)]
#[case(7, 0)]
#[case(8, 1)]
#[case(9, 2)]
#[case(30, 23)]
fn test_output_length_drops_incomplete_rows(#[case] input: usize, #[case] expected: usize) {
    let rows = create_features(&create_test_series(input));
    assert_eq!(rows.len(), expected);
}

#[test]
fn test_eight_day_scenario() {
    let series = create_test_series(8);
    let rows = create_features(&series);

    let day7 = day0() + Duration::days(7);
    assert_eq!(
        rows,
        vec![FeatureRow {
            date: day7,
            close: 17.0,
            calendar: CalendarFeatures::from_date(day7),
            lags: LagFeatures {
                lag1: 16.0,
                lag2: 15.0,
                lag3: 14.0,
                lag7: 10.0,
            },
        }]
    );
}

#[test]
fn test_lags_follow_rows_not_calendar_days() {
    // Trading days only: a weekend gap between Friday and Monday
    let dates = [
        (2024, 3, 4),
        (2024, 3, 5),
        (2024, 3, 6),
        (2024, 3, 7),
        (2024, 3, 8),
        (2024, 3, 11),
        (2024, 3, 12),
        (2024, 3, 13),
        (2024, 3, 14),
    ];
    let points: Vec<PricePoint> = dates
        .iter()
        .enumerate()
        .map(|(i, &(y, m, d))| PricePoint::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), i as f64))
        .collect();
    let series = PriceSeries::new(points).unwrap();

    let rows = create_features(&series);
    assert_eq!(rows.len(), 2);

    let last = rows.last().unwrap();
    assert_eq!(last.date, NaiveDate::from_ymd_opt(2024, 3, 14).unwrap());
    assert_eq!(last.lags.as_array(), [7.0, 6.0, 5.0, 1.0]);
    // Thursday
    assert_eq!(last.calendar.day_of_week, 3);
}

#[test]
fn test_rows_keep_input_order() {
    let rows = create_features(&create_test_series(20));

    assert!(rows.windows(2).all(|w| w[0].date < w[1].date));
    assert_eq!(rows[0].date, day0() + Duration::days(MAX_LAG as i64));
}

#[test]
fn test_create_features_is_pure() {
    let series = create_test_series(12);
    let before = series.clone();

    let first = create_features(&series);
    let second = create_features(&series);

    assert_eq!(first, second);
    assert_eq!(series, before);
}

#[test]
fn test_feature_vector_layout() {
    let rows = create_features(&create_test_series(8));
    let vector = rows[0].feature_vector();

    // 2024-03-08 is a Friday
    assert_eq!(vector, [2024.0, 3.0, 8.0, 4.0, 16.0, 15.0, 14.0, 10.0]);
}

#[test]
fn test_training_set_shapes() {
    let rows = create_features(&create_test_series(10));
    let (inputs, targets) = training_set(&rows);

    assert_eq!(inputs.len(), 3);
    assert_eq!(targets, vec![17.0, 18.0, 19.0]);
    assert_eq!(inputs[2][4], 18.0);
}

#[test]
fn test_series_deserialize_validates_order() {
    let json = r#"{"points":[{"date":"2024-03-02","close":1.0},{"date":"2024-03-01","close":2.0}]}"#;
    let result: Result<PriceSeries, _> = serde_json::from_str(json);
    assert!(result.is_err());

    let json = r#"{"points":[{"date":"2024-03-01","close":1.0},{"date":"2024-03-02","close":2.0}]}"#;
    let series: PriceSeries = serde_json::from_str(json).unwrap();
    assert_eq!(series.closes(), vec![1.0, 2.0]);
}
