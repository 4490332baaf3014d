use std::collections::BTreeSet;

use phone8ez::dataset::DataSet;
use phone8ez::engine::{
    CellPos, calculate_final_amount, calculate_highlighted_cells, find_matching_value,
    get_public_support_amount,
};
use phone8ez::sheet::encoding::{DeviceEncoding, OfferCell};
use phone8ez::sheet::{Sheet, SheetIndex};
use phone8ez::subsidy::PublicSubsidyData;

#[path = "common/mod.rs"]
mod common;

const HEADERS: [&[&str]; 5] = [
    &["", "SK"],
    &["", "공시"],
    &["", "5GX 프라임"],
    &["", "번호이동"],
    &["", "대리점A"],
];

fn source(id: &str, code: &str, value: &str) -> DataSet {
    let mut rows: Vec<&[&str]> = HEADERS.to_vec();
    let data = [code, value];
    rows.push(&data);
    common::policy(id, &rows)
}

fn integrated_index(device: &str) -> SheetIndex {
    let mut rows: Vec<&[&str]> = HEADERS.to_vec();
    let data = [device, ""];
    rows.push(&data);
    SheetIndex::new(&common::sheet(&rows))
}

#[test]
fn test_matcher_is_independent_of_dataset_order() {
    let index = integrated_index("codes:A,B,C");
    let datasets = vec![
        source("one", "A", "30"),
        source("two", "B", "5"),
        source("three", "C", "120"),
        source("four", "A", "30"),
    ];
    let expected = find_matching_value(5, 1, &index, &datasets);
    assert_eq!(expected.to_string(), "5;30;120|WARN_MULTI");

    let orders: [[usize; 4]; 4] = [[3, 2, 1, 0], [1, 3, 0, 2], [2, 0, 3, 1], [0, 2, 1, 3]];
    for order in orders {
        let permuted: Vec<DataSet> = order.iter().map(|&i| datasets[i].clone()).collect();
        assert_eq!(find_matching_value(5, 1, &index, &permuted), expected);
    }
}

#[test]
fn test_single_source_value_is_bare() {
    let index = integrated_index("codes:A");
    let result = find_matching_value(5, 1, &index, &[source("one", "A", "35")]);
    assert_eq!(result, OfferCell::Value("35".to_string()));
    assert!(!result.to_string().contains("WARN_MULTI"));
}

#[test]
fn test_two_sources_same_value_deduplicate() {
    let index = integrated_index("codes:A");
    let same = [source("one", "A", "35"), source("two", "A", "35")];
    assert_eq!(find_matching_value(5, 1, &index, &same).to_string(), "35");

    let differ = [source("one", "A", "35"), source("two", "A", "40")];
    let text = find_matching_value(5, 1, &index, &differ).to_string();
    assert!(text.contains("35") && text.contains("40"));
    assert!(text.ends_with("|WARN_MULTI"));
}

#[test]
fn test_zero_policy_never_prices_an_offer() {
    for price in [0, 500_000, 1_350_000] {
        for policy in ["", "0", "-", "없음"] {
            let device = format!("codes:SM-S928N|standard:SM-S928N|price:{price}");
            let sheet = common::sheet(&[
                &["", "SK"],
                &["", "공시"],
                &["", "5GX 프라임|89000"],
                &["", "번호이동"],
                &["", "대리점A"],
                &[device.as_str(), policy],
            ]);
            let index = SheetIndex::new(&sheet);
            let public = PublicSubsidyData::from_json(common::SUBSIDY_JSON).unwrap();
            let amount = calculate_final_amount(5, 1, &index, &[], Some(&public), &sheet);
            assert_eq!(amount.final_amount, 0, "price {price}, policy {policy:?}");
        }
    }
}

#[test]
fn test_final_amount_worked_examples() {
    // price 1,350,000, policy 10, public 50,000 → 120; policy 0 → 0.
    let subsidy = r#"{"manufacturers":{"m":{"models":[{"model_number":"X","support_info":{"sections":[
        {"carriers":{"SK":{"plan_name":"p","monthly_fee":55000,"device_support":50000,"number_port_support":50000}}}
    ]}}]}}}"#;
    let public = PublicSubsidyData::from_json(subsidy).unwrap();

    for (policy, expected) in [("10", 120), ("0", 0)] {
        let sheet = common::sheet(&[
            &["", "SK"],
            &["", "공시"],
            &["", "요금제|55000"],
            &["", "기기변경"],
            &["", "대리점A"],
            &["codes:X|standard:X|price:1350000", policy],
        ]);
        let index = SheetIndex::new(&sheet);
        let amount = calculate_final_amount(5, 1, &index, &[], Some(&public), &sheet);
        assert_eq!(amount.public_support, 50_000);
        assert_eq!(amount.final_amount, expected);
    }
}

#[test]
fn test_public_support_degrades_to_zero() {
    let index = integrated_index("codes:A|standard:SM-S928N");
    let public = PublicSubsidyData::from_json(common::SUBSIDY_JSON).unwrap();

    assert_eq!(get_public_support_amount(5, 1, &index, None), 0);
    // Plan header carries no monthly fee.
    assert_eq!(get_public_support_amount(5, 1, &index, Some(&public)), 0);

    let no_standard = integrated_index("codes:A");
    assert_eq!(get_public_support_amount(5, 1, &no_standard, Some(&public)), 0);
}

#[test]
fn test_highlight_ties_within_carrier_and_join_type() {
    let sheet: Sheet = common::sheet(&[
        &["", "SK", "SK", "SK"],
        &["", "공시", "공시", "공시"],
        &["", "A", "B", "C"],
        &["", "번호이동", "번호이동", "기기변경"],
        &["", "대리점A", "대리점A", "대리점A"],
        &["codes:A", "100", "100", "200"],
    ]);
    let marked = calculate_highlighted_cells(&sheet, &sheet.header_rows());
    assert!(marked.contains(&CellPos::new(5, 1)));
    assert!(marked.contains(&CellPos::new(5, 2)));

    // With a cheaper 기기변경 sibling, the 200 column is no longer the best of its group.
    let wider: Sheet = common::sheet(&[
        &["", "SK", "SK", "SK", "SK"],
        &["", "공시", "공시", "공시", "공시"],
        &["", "A", "B", "C", "D"],
        &["", "번호이동", "번호이동", "기기변경", "기기변경"],
        &["", "대리점A", "대리점A", "대리점A", "대리점A"],
        &["codes:A", "100", "100", "200", "150"],
    ]);
    let marked = calculate_highlighted_cells(&wider, &wider.header_rows());
    let expected: BTreeSet<_> = [CellPos::new(5, 1), CellPos::new(5, 2), CellPos::new(5, 4)]
        .into_iter()
        .collect();
    assert_eq!(marked, expected);
}

#[test]
fn test_device_encoding_round_trip_in_any_key_order() {
    for text in [
        "codes:A,B|standard:S|price:1350000",
        "price:1350000|standard:S|codes:A,B",
        "standard:S|codes:A,B|price:1350000",
    ] {
        let parsed = DeviceEncoding::parse(text);
        let reparsed = DeviceEncoding::parse(&parsed.to_string());
        assert_eq!(reparsed.codes, vec!["A", "B"]);
        assert_eq!(reparsed.standard.as_deref(), Some("S"));
        assert_eq!(reparsed.price, Some(1_350_000));
    }
}
