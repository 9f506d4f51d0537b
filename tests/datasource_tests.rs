use gpui_bar_chart::data_types::{coerce_value, CoercionPolicy, RawRecord, Row, RowSet};
use gpui_bar_chart::error::QualityReason;
use gpui_bar_chart::{ChartError, DataSource, VecDataSource};

#[test]
fn test_coerce_value() {
    assert_eq!(coerce_value("120"), Ok(120.0));
    assert_eq!(coerce_value("  12 "), Ok(12.0));
    assert_eq!(coerce_value("1e3"), Ok(1000.0));
    assert_eq!(coerce_value("0x1F"), Ok(31.0));
    assert_eq!(coerce_value(""), Ok(0.0));
    assert_eq!(coerce_value("abc"), Err(QualityReason::NotANumber));
    assert_eq!(coerce_value("NaN"), Err(QualityReason::NotANumber));
    assert_eq!(coerce_value("inf"), Err(QualityReason::NotFinite));
    assert_eq!(coerce_value("-5"), Err(QualityReason::Negative));
}

#[test]
fn test_rows_sorted_ascending_and_stable() {
    let set = VecDataSource::from_pairs([("b", "3"), ("a", "1"), ("c", "3"), ("d", "2")])
        .load()
        .unwrap();
    let order: Vec<&str> = set.categories().collect();
    assert_eq!(order, vec!["a", "d", "b", "c"]);
    assert_eq!(set.max_value(), 3.0);
}

#[test]
fn test_reject_policy_drops_bad_rows() {
    let set = VecDataSource::from_pairs([("Chess", "120"), ("Broken", "twelve")])
        .load()
        .unwrap();
    assert_eq!(set.len(), 1);
    assert!(set.get("Broken").is_none());
    let issue = &set.issues()[0];
    assert_eq!(issue.line, 1);
    assert_eq!(issue.category, "Broken");
    assert_eq!(issue.reason, QualityReason::NotANumber);
}

#[test]
fn test_zero_policy_keeps_bad_rows() {
    let set = VecDataSource::from_pairs([("Chess", "120"), ("Broken", "twelve")])
        .with_policy(CoercionPolicy::Zero)
        .load()
        .unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.rows()[0], Row::new("Broken", 0.0));
    assert_eq!(set.issues().len(), 1);
}

#[test]
fn test_missing_value_cell_is_zero() {
    let set = RowSet::from_records(
        vec![RawRecord {
            game: "Go".into(),
            value: None,
        }],
        CoercionPolicy::Reject,
    )
    .unwrap();
    assert_eq!(set.rows(), &[Row::new("Go", 0.0)]);
    assert!(set.issues().is_empty());
}

#[test]
fn test_duplicate_category_fails_fast() {
    let err = VecDataSource::from_pairs([("Chess", "1"), ("Chess", "2")])
        .load()
        .unwrap_err();
    assert!(matches!(err, ChartError::DuplicateCategory(ref c) if c == "Chess"));
}

#[test]
fn test_typed_rows_must_be_finite_and_non_negative() {
    let err = RowSet::new(vec![Row::new("a", f64::NAN), Row::new("b", 3.0)]).unwrap_err();
    assert!(matches!(
        err,
        ChartError::InvalidValue { ref category, reason: QualityReason::NotANumber } if category == "a"
    ));

    let err = RowSet::new(vec![Row::new("a", -5.0)]).unwrap_err();
    assert!(matches!(
        err,
        ChartError::InvalidValue { reason: QualityReason::Negative, .. }
    ));

    let err = RowSet::new(vec![Row::new("a", f64::INFINITY)]).unwrap_err();
    assert!(matches!(
        err,
        ChartError::InvalidValue { reason: QualityReason::NotFinite, .. }
    ));

    let set = RowSet::new(vec![Row::new("a", 0.0), Row::new("b", 2.5)]).unwrap();
    assert_eq!(set.max_value(), 2.5);
}

#[cfg(feature = "polars")]
mod csv {
    use super::*;
    use gpui_bar_chart::CsvDataSource;

    #[test]
    fn test_csv_loads_and_sorts() {
        let csv = "game,value\nChess,120\nGo,45\nCheckers,900\n";
        let set = CsvDataSource::from_bytes(csv.as_bytes().to_vec()).load().unwrap();
        let order: Vec<&str> = set.categories().collect();
        assert_eq!(order, vec!["Go", "Chess", "Checkers"]);
        assert_eq!(set.max_value(), 900.0);
    }

    #[test]
    fn test_csv_extra_columns_and_quotes() {
        let csv = "rank,game,value\n1,\"Magic: The Gathering, Arena\",10\n2,Hearthstone,7\n";
        let set = CsvDataSource::from_bytes(csv.as_bytes().to_vec()).load().unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("Magic: The Gathering, Arena").unwrap().value, 10.0);
    }

    #[test]
    fn test_csv_bad_value_reported() {
        let csv = "game,value\nChess,120\nGo,lots\n";
        let set = CsvDataSource::from_bytes(csv.as_bytes().to_vec()).load().unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.issues().len(), 1);
    }

    #[test]
    fn test_csv_missing_column() {
        let csv = "game,count\nChess,120\n";
        let err = CsvDataSource::from_bytes(csv.as_bytes().to_vec()).load().unwrap_err();
        assert!(matches!(err, ChartError::MissingColumn("value")));
    }

    #[test]
    fn test_csv_unreachable_path() {
        let err = CsvDataSource::from_path("/definitely/not/here.csv")
            .load()
            .unwrap_err();
        assert!(matches!(err, ChartError::Unreachable { .. }));
    }
}
