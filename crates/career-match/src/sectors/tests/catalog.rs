use super::common::*;
use crate::psychometrics::Trait;
use crate::sectors::catalog::{parse_weights_csv, WeightsCsvError};
use crate::sectors::{SectorConfig, SectorConfigError, SectorRequirements, DEFAULT_ROW_TOLERANCE};

fn two_sectors() -> crate::sectors::SectorTables {
    tables(&[
        ("retail", single_trait_row(Trait::Communication), SectorRequirements::none()),
        ("security", single_trait_row(Trait::Safety), needs_night()),
    ])
}

#[test]
fn valid_tables_freeze_in_weights_order() {
    let mut tables = two_sectors();
    tables.weights.reverse();

    let config = SectorConfig::from_tables(tables, DEFAULT_ROW_TOLERANCE).expect("valid tables");

    let ids: Vec<&str> = config.sectors().iter().map(|sector| sector.id.as_str()).collect();
    assert_eq!(ids, vec!["security", "retail"]);
    let security = config.get("security").expect("security present");
    assert_eq!(security.name, "Sector security");
    assert_eq!(security.requirements.needs_night_ok, Some(true));
    assert_eq!(security.weights.get(Trait::Safety), 1.0);
    assert_eq!(security.top_traits()[0], Trait::Safety);
    assert!(config.get("unknown").is_none());
}

#[test]
fn mismatched_id_sets_are_reported_per_table() {
    let mut tables = two_sectors();
    tables.gates.retain(|entry| entry.id != "security");
    tables.catalog.push(crate::sectors::CatalogEntry {
        id: "hospitality".to_string(),
        name: "Hospitality".to_string(),
    });

    let report = tables.validate(DEFAULT_ROW_TOLERANCE);

    assert!(!report.is_valid());
    assert_eq!(report.sector_count, 3);
    assert!(report
        .problems
        .contains(&"gates table is missing sector ids: hospitality, security".to_string()));
    assert!(report
        .problems
        .contains(&"weights table is missing sector ids: hospitality".to_string()));
}

#[test]
fn duplicate_ids_are_problems() {
    let mut tables = two_sectors();
    let duplicate = tables.catalog[0].clone();
    tables.catalog.push(duplicate);

    let report = tables.validate(DEFAULT_ROW_TOLERANCE);

    assert_eq!(
        report.problems,
        vec!["duplicate sector id retail in catalog table".to_string()]
    );
}

#[test]
fn row_sums_must_fall_within_tolerance() {
    let mut tables = two_sectors();
    tables.weights[0]
        .weights
        .insert(Trait::Teamwork.code().to_string(), 0.0005);
    assert!(tables.validate(DEFAULT_ROW_TOLERANCE).is_valid());

    tables.weights[0]
        .weights
        .insert(Trait::Teamwork.code().to_string(), 0.05);
    let report = tables.validate(DEFAULT_ROW_TOLERANCE);
    assert_eq!(report.problems.len(), 1);
    assert!(report.problems[0].starts_with("weights for retail sum to 1.0500"));
    assert!(tables.validate(0.1).is_valid());
}

#[test]
fn weight_keys_must_be_exactly_the_twelve_codes() {
    let mut tables = two_sectors();
    let row = &mut tables.weights[1].weights;
    let safety = row.remove("T01").expect("T01 present");
    row.insert("T1".to_string(), safety);
    row.insert("T13".to_string(), 0.0);

    let report = tables.validate(DEFAULT_ROW_TOLERANCE);

    assert_eq!(
        report.problems,
        vec![
            "weights for security use unknown trait codes: T1, T13".to_string(),
            "weights for security are missing trait codes: T01".to_string(),
        ]
    );
}

#[test]
fn invalid_tables_are_rejected_whole() {
    let mut tables = two_sectors();
    tables.weights.pop();

    match SectorConfig::from_tables(tables, DEFAULT_ROW_TOLERANCE) {
        Err(SectorConfigError::Invalid { problems }) => {
            assert_eq!(problems, vec!["weights table is missing sector ids: security".to_string()]);
        }
        other => panic!("expected invalid configuration, got {other:?}"),
    }
}

#[test]
fn csv_weights_parse_into_rows() {
    let csv = "id,T01,T02,T03,T04,T05,T06,T07,T08,T09,T10,T11,T12\n\
retail, 0.05,0.10,0.20,0.20,0.10,0.05,0.05,0.05,0.05,0.05,0.05,0.05\n";

    let rows = parse_weights_csv(csv.as_bytes()).expect("csv parses");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "retail");
    assert_eq!(rows[0].weights.len(), Trait::COUNT);
    assert_eq!(rows[0].weights["T04"], 0.20);
    assert_eq!(rows[0].weights["T01"], 0.05);
}

#[test]
fn csv_weights_reject_non_numeric_cells() {
    let csv = "id,T01,T02\nretail,0.5,lots\n";

    match parse_weights_csv(csv.as_bytes()) {
        Err(WeightsCsvError::Number {
            sector,
            column,
            value,
        }) => {
            assert_eq!(sector, "retail");
            assert_eq!(column, "T02");
            assert_eq!(value, "lots");
        }
        other => panic!("expected number error, got {other:?}"),
    }
}
