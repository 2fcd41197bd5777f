//! Module providing CSV and JSON IO for kinetics tables
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::kinetics::{KineticsEntry, KineticsError, KineticsTable};

/// A row of the kinetics sheet as exported from the GRASP input workbook
///
/// Column names follow the workbook, other columns (order, effectors, references, ...) are
/// ignored.
#[derive(Serialize, Deserialize, Debug)]
struct KineticsRow {
    #[serde(rename = "reaction ID", alias = "reaction_id")]
    reaction_id: String,
    #[serde(rename = "kinetic mechanism", alias = "mechanism")]
    mechanism: String,
    #[serde(default)]
    promiscuous: Option<String>,
    #[serde(default)]
    inhibitors: Option<String>,
    #[serde(default)]
    activators: Option<String>,
}

impl From<KineticsRow> for KineticsEntry {
    fn from(row: KineticsRow) -> Self {
        Self {
            reaction_id: row.reaction_id,
            mechanism: row.mechanism,
            promiscuous: row.promiscuous,
            inhibitors: row.inhibitors,
            activators: row.activators,
        }
    }
}

impl From<&KineticsEntry> for KineticsRow {
    fn from(entry: &KineticsEntry) -> Self {
        Self {
            reaction_id: entry.reaction_id.clone(),
            mechanism: entry.mechanism.clone(),
            promiscuous: entry.promiscuous.clone(),
            inhibitors: entry.inhibitors.clone(),
            activators: entry.activators.clone(),
        }
    }
}

impl KineticsTable {
    /// Read a kinetics table from a CSV file with a header row
    pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<KineticsTable, KineticsError> {
        let mut reader = match csv::Reader::from_path(path.as_ref()) {
            Ok(reader) => reader,
            Err(err) => return Err(KineticsError::UnableToRead(format!("{}", err))),
        };
        let mut entries = Vec::new();
        for row in reader.deserialize::<KineticsRow>() {
            match row {
                Ok(row) => entries.push(KineticsEntry::from(row)),
                Err(err) => return Err(KineticsError::UnableToParse(format!("{}", err))),
            }
        }
        Ok(KineticsTable::new(entries))
    }

    /// Read a kinetics table from a JSON array of rows
    pub fn read_json<P: AsRef<Path>>(path: P) -> Result<KineticsTable, KineticsError> {
        let table_str = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(err) => return Err(KineticsError::UnableToRead(format!("{:?}", err))),
        };
        let rows = match serde_json::from_str::<Vec<KineticsRow>>(&table_str) {
            Ok(rows) => rows,
            Err(err) => return Err(KineticsError::UnableToParse(format!("{}", err))),
        };
        Ok(KineticsTable::new(
            rows.into_iter().map(KineticsEntry::from).collect(),
        ))
    }

    /// Read a kinetics table, choosing the format from the file extension (`.json` or CSV)
    pub fn read<P: AsRef<Path>>(path: P) -> Result<KineticsTable, KineticsError> {
        let is_json = path
            .as_ref()
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::read_json(path)
        } else {
            Self::read_csv(path)
        }
    }

    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<(), KineticsError> {
        let rows: Vec<KineticsRow> = self.entries.iter().map(KineticsRow::from).collect();
        let table_string = match serde_json::to_string_pretty(&rows) {
            Ok(s) => s,
            Err(err) => return Err(KineticsError::UnableToParse(format!("{}", err))),
        };
        if let Err(err) = fs::write(path, table_string) {
            return Err(KineticsError::UnableToWrite(format!("{:?}", err)));
        }
        Ok(())
    }
}
