use chrono::{Datelike, NaiveDate};
use pretty_assertions::assert_eq;
use price_store::{PriceStore, StoreError};
use rstest::rstest;
use std::io::Write;
use tempfile::NamedTempFile;

// Helper function to create a small raw table file
fn create_sample_table() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();

    writeln!(file, "Commodities,2014-01,2014-02,2014-03,2014-04").unwrap();
    writeln!(file, "Onion,100.0,110.0,,130.0").unwrap();
    writeln!(file, "Potato,,,55.0,60.0").unwrap();
    writeln!(file, "Rice,42.0,43.0,44.0,45.0").unwrap();

    file
}

#[test]
fn test_commodities_in_source_row_order() {
    let file = create_sample_table();
    let store = PriceStore::from_csv(file.path()).unwrap();

    assert_eq!(store.commodities(), &["Onion", "Potato", "Rice"]);
}

#[test]
fn test_index_matches_value_columns() {
    let file = create_sample_table();
    let store = PriceStore::from_csv(file.path()).unwrap();

    let index = store.index();
    assert_eq!(index.len(), 4);
    assert_eq!(index[0], NaiveDate::from_ymd_opt(2014, 1, 31).unwrap());
    assert_eq!(index[3], NaiveDate::from_ymd_opt(2014, 4, 30).unwrap());

    // Strictly increasing, one calendar month per step
    for pair in index.windows(2) {
        assert!(pair[0] < pair[1]);
        let next_month = (pair[0].month() % 12) + 1;
        assert_eq!(pair[1].month(), next_month);
    }
}

#[test]
fn test_forward_fill_inside_series() {
    let file = create_sample_table();
    let store = PriceStore::from_csv(file.path()).unwrap();

    let onion = store.series("Onion").unwrap();
    assert_eq!(onion.values(), vec![100.0, 110.0, 110.0, 130.0]);
    assert_eq!(onion.len(), 4);
}

#[test]
fn test_leading_gap_is_not_served() {
    let file = create_sample_table();
    let store = PriceStore::from_csv(file.path()).unwrap();

    // Potato has no observation before 2014-03; the series starts there.
    let potato = store.series("Potato").unwrap();
    assert_eq!(potato.len(), 2);
    assert_eq!(
        potato.points()[0],
        (NaiveDate::from_ymd_opt(2014, 3, 31).unwrap(), 55.0)
    );
    assert_eq!(potato.values(), vec![55.0, 60.0]);
}

#[rstest]
#[case("100.0,,,,", vec![100.0, 100.0, 100.0, 100.0, 100.0])]
#[case(",,30.0,,50.0", vec![30.0, 30.0, 50.0])]
#[case("1.0,2.0,3.0,4.0,5.0", vec![1.0, 2.0, 3.0, 4.0, 5.0])]
fn test_forward_fill_patterns(#[case] row: &str, #[case] expected: Vec<f64>) {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Commodities,a,b,c,d,e").unwrap();
    writeln!(file, "Wheat,{}", row).unwrap();

    let store = PriceStore::from_csv(file.path()).unwrap();
    assert_eq!(store.series("Wheat").unwrap().values(), expected);
}

#[test]
fn test_unknown_commodity() {
    let file = create_sample_table();
    let store = PriceStore::from_csv(file.path()).unwrap();

    let err = store.series("Tomato").unwrap_err();
    assert!(matches!(err, StoreError::UnknownCommodity(ref name) if name == "Tomato"));
}

#[test]
fn test_missing_file() {
    let result = PriceStore::from_csv("no_such_table.csv");
    assert!(result.is_err());
}

#[test]
fn test_table_without_value_columns() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Commodities").unwrap();
    writeln!(file, "Onion").unwrap();

    let err = PriceStore::from_csv(file.path()).unwrap_err();
    assert!(matches!(err, StoreError::DataLoad(_)));
}

#[test]
fn test_duplicate_commodity_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Commodities,2014-01,2014-02").unwrap();
    writeln!(file, "Onion,100.0,110.0").unwrap();
    writeln!(file, "Onion,90.0,95.0").unwrap();

    let err = PriceStore::from_csv(file.path()).unwrap_err();
    assert!(matches!(err, StoreError::DataLoad(_)));
}

#[test]
fn test_long_index_crosses_years() {
    let mut file = NamedTempFile::new().unwrap();
    let months = 36;
    let header: Vec<String> = (0..months).map(|i| format!("m{}", i)).collect();
    writeln!(file, "Commodities,{}", header.join(",")).unwrap();
    let row: Vec<String> = (0..months).map(|i| format!("{}", 100 + 10 * i)).collect();
    writeln!(file, "Onion,{}", row.join(",")).unwrap();

    let store = PriceStore::from_csv(file.path()).unwrap();
    let onion = store.series("Onion").unwrap();

    assert_eq!(onion.len(), 36);
    assert_eq!(
        onion.points()[0].0,
        NaiveDate::from_ymd_opt(2014, 1, 31).unwrap()
    );
    assert_eq!(
        onion.points()[35].0,
        NaiveDate::from_ymd_opt(2016, 12, 31).unwrap()
    );
}
