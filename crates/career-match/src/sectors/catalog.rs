//! Loading and validation of the three sector tables (catalog, gates, weights).
//!
//! Tables are read once, cross-checked, then frozen into a [`SectorConfig`] that is shared
//! read-only by every request.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::requirements::SectorRequirements;
use super::weights::{TraitWeights, TOP_TRAIT_COUNT};
use crate::config::SectorSettings;
use crate::psychometrics::Trait;

pub const DEFAULT_ROW_TOLERANCE: f64 = 0.001;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateEntry {
    pub id: String,
    #[serde(default)]
    pub req: SectorRequirements,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub id: String,
    pub weights: BTreeMap<String, f64>,
}

#[derive(Debug, Deserialize)]
struct TableFile<T> {
    sectors: Vec<T>,
}

/// The three raw tables before cross-validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectorTables {
    pub catalog: Vec<CatalogEntry>,
    pub gates: Vec<GateEntry>,
    pub weights: Vec<WeightEntry>,
}

/// Outcome of cross-checking the sector tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub sector_count: usize,
    pub problems: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.problems.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SectorConfigError {
    #[error("unable to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("malformed CSV in {}: {source}", .path.display())]
    Csv { path: PathBuf, source: csv::Error },
    #[error("non-numeric weight {value:?} for sector {sector} column {column} in {}", .path.display())]
    Number {
        path: PathBuf,
        sector: String,
        column: String,
        value: String,
    },
    #[error("sector configuration invalid: {}", .problems.join("; "))]
    Invalid { problems: Vec<String> },
}

impl SectorTables {
    pub fn load(settings: &SectorSettings) -> Result<Self, SectorConfigError> {
        let catalog = read_json_table(&settings.catalog_path)?;
        let gates = read_json_table(&settings.gates_path)?;
        let weights = if is_csv(&settings.weights_path) {
            read_weights_csv(&settings.weights_path)?
        } else {
            read_json_table(&settings.weights_path)?
        };
        Ok(Self {
            catalog,
            gates,
            weights,
        })
    }

    pub fn validate(&self, tolerance: f64) -> ValidationReport {
        let mut problems = Vec::new();

        let catalog_ids = collect_ids("catalog", self.catalog.iter().map(|e| &e.id), &mut problems);
        let gate_ids = collect_ids("gates", self.gates.iter().map(|e| &e.id), &mut problems);
        let weight_ids = collect_ids("weights", self.weights.iter().map(|e| &e.id), &mut problems);

        let all_ids: BTreeSet<&str> = catalog_ids
            .iter()
            .chain(gate_ids.iter())
            .chain(weight_ids.iter())
            .copied()
            .collect();

        for (table, ids) in [
            ("catalog", &catalog_ids),
            ("gates", &gate_ids),
            ("weights", &weight_ids),
        ] {
            let missing: Vec<&str> = all_ids.difference(ids).copied().collect();
            if !missing.is_empty() {
                problems.push(format!(
                    "{table} table is missing sector ids: {}",
                    missing.join(", ")
                ));
            }
        }

        for entry in &self.weights {
            problems.extend(weight_row_problems(entry, tolerance));
        }

        ValidationReport {
            sector_count: all_ids.len(),
            problems,
        }
    }
}

fn collect_ids<'a>(
    table: &str,
    ids: impl Iterator<Item = &'a String>,
    problems: &mut Vec<String>,
) -> BTreeSet<&'a str> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(id.as_str()) {
            problems.push(format!("duplicate sector id {id} in {table} table"));
        }
    }
    seen
}

fn weight_row_problems(entry: &WeightEntry, tolerance: f64) -> Vec<String> {
    let mut problems = Vec::new();

    let invalid: Vec<&str> = entry
        .weights
        .keys()
        .filter(|code| Trait::from_canonical_code(code).is_none())
        .map(String::as_str)
        .collect();
    if !invalid.is_empty() {
        problems.push(format!(
            "weights for {} use unknown trait codes: {}",
            entry.id,
            invalid.join(", ")
        ));
    }

    let missing: Vec<&str> = Trait::ordered()
        .into_iter()
        .map(Trait::code)
        .filter(|code| !entry.weights.contains_key(*code))
        .collect();
    if !missing.is_empty() {
        problems.push(format!(
            "weights for {} are missing trait codes: {}",
            entry.id,
            missing.join(", ")
        ));
    }

    let sum: f64 = entry.weights.values().sum();
    if !sum.is_finite() || (sum - 1.0).abs() > tolerance {
        problems.push(format!(
            "weights for {} sum to {sum:.4}, expected 1.0 within {tolerance}",
            entry.id
        ));
    }

    problems
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

fn read_json_table<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<Vec<T>, SectorConfigError> {
    let mut raw = String::new();
    File::open(path)
        .and_then(|mut file| file.read_to_string(&mut raw))
        .map_err(|source| SectorConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let table: TableFile<T> =
        serde_json::from_str(&raw).map_err(|source| SectorConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(table.sectors)
}

fn read_weights_csv(path: &Path) -> Result<Vec<WeightEntry>, SectorConfigError> {
    let file = File::open(path).map_err(|source| SectorConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_weights_csv(file).map_err(|err| match err {
        WeightsCsvError::Csv(source) => SectorConfigError::Csv {
            path: path.to_path_buf(),
            source,
        },
        WeightsCsvError::Number {
            sector,
            column,
            value,
        } => SectorConfigError::Number {
            path: path.to_path_buf(),
            sector,
            column,
            value,
        },
    })
}

#[derive(Debug)]
pub(crate) enum WeightsCsvError {
    Csv(csv::Error),
    Number {
        sector: String,
        column: String,
        value: String,
    },
}

impl From<csv::Error> for WeightsCsvError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Reads a header row `id,T01,...,T12` followed by one row per sector.
pub(crate) fn parse_weights_csv<R: Read>(reader: R) -> Result<Vec<WeightEntry>, WeightsCsvError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut entries = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        let mut id = String::new();
        let mut weights = BTreeMap::new();
        for (column, value) in headers.iter().zip(record.iter()) {
            if column.eq_ignore_ascii_case("id") {
                id = value.to_string();
                continue;
            }
            let weight = value.parse::<f64>().map_err(|_| WeightsCsvError::Number {
                sector: record.get(0).unwrap_or_default().to_string(),
                column: column.to_string(),
                value: value.to_string(),
            })?;
            weights.insert(column.to_string(), weight);
        }
        entries.push(WeightEntry { id, weights });
    }

    Ok(entries)
}

/// One fully validated sector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorDefinition {
    pub id: String,
    pub name: String,
    pub requirements: SectorRequirements,
    pub weights: TraitWeights,
}

impl SectorDefinition {
    pub fn top_traits(&self) -> Vec<Trait> {
        self.weights.top_traits(TOP_TRAIT_COUNT)
    }
}

/// Frozen sector configuration, in weights-table order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SectorConfig {
    sectors: Vec<SectorDefinition>,
}

impl SectorConfig {
    pub fn load(settings: &SectorSettings) -> Result<Self, SectorConfigError> {
        let tables = SectorTables::load(settings)?;
        let config = Self::from_tables(tables, settings.row_tolerance)?;
        info!(
            sectors = config.len(),
            weights = %settings.weights_path.display(),
            "sector configuration loaded"
        );
        Ok(config)
    }

    /// Validates the tables and freezes them. Any problem rejects the whole configuration.
    pub fn from_tables(tables: SectorTables, tolerance: f64) -> Result<Self, SectorConfigError> {
        let report = tables.validate(tolerance);
        if !report.is_valid() {
            error!(problems = ?report.problems, "sector configuration rejected");
            return Err(SectorConfigError::Invalid {
                problems: report.problems,
            });
        }

        let names: BTreeMap<String, String> = tables
            .catalog
            .into_iter()
            .map(|entry| (entry.id, entry.name))
            .collect();
        let mut requirements: BTreeMap<String, SectorRequirements> = tables
            .gates
            .into_iter()
            .map(|entry| (entry.id, entry.req))
            .collect();

        let sectors = tables
            .weights
            .into_iter()
            .map(|entry| {
                let mut row = [0.0; Trait::COUNT];
                for (code, weight) in &entry.weights {
                    if let Some(trait_) = Trait::from_canonical_code(code) {
                        row[trait_.index()] = *weight;
                    }
                }
                SectorDefinition {
                    name: names.get(&entry.id).cloned().unwrap_or_default(),
                    requirements: requirements.remove(&entry.id).unwrap_or_default(),
                    weights: TraitWeights(row),
                    id: entry.id,
                }
            })
            .collect();

        Ok(Self { sectors })
    }

    pub fn sectors(&self) -> &[SectorDefinition] {
        &self.sectors
    }

    pub fn get(&self, id: &str) -> Option<&SectorDefinition> {
        self.sectors.iter().find(|sector| sector.id == id)
    }

    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }
}
