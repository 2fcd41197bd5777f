//! Module providing the rows of a GRASP kinetics sheet and the bulk pattern generation built on
//! them.

pub mod resolver;

use derive_builder::Builder;
use thiserror::Error;

use crate::mechanism::ConversionOptions;

/// Characters that must not separate metabolites in list cells
const BAD_SEPARATORS: [char; 3] = [',', ';', '.'];

/// One row of the kinetics sheet
#[derive(Builder, Debug, Clone, PartialEq)]
pub struct KineticsEntry {
    /// Reaction the row describes
    pub reaction_id: String,
    /// Name of the kinetic mechanism, also the name of its mechanism and pattern files
    pub mechanism: String,
    /// Reactions sharing the enzyme, present only if the enzyme is promiscuous
    #[builder(default = "None")]
    pub promiscuous: Option<String>,
    /// Space separated inhibiting metabolites
    #[builder(default = "None")]
    pub inhibitors: Option<String>,
    /// Space separated activating metabolites
    #[builder(default = "None")]
    pub activators: Option<String>,
}

impl KineticsEntry {
    /// Whether the promiscuous cell holds anything
    pub fn is_promiscuous(&self) -> bool {
        cell_value(&self.promiscuous).is_some()
    }

    pub fn inhibitor_list(&self) -> Vec<String> {
        split_cell(&self.inhibitors)
    }

    pub fn activator_list(&self) -> Vec<String> {
        split_cell(&self.activators)
    }

    /// Make sure list cells separate metabolites with spaces only
    pub fn check_separators(&self) -> Result<(), KineticsError> {
        for (column, cell) in [
            ("promiscuous", &self.promiscuous),
            ("inhibitors", &self.inhibitors),
            ("activators", &self.activators),
        ] {
            if let Some(value) = cell_value(cell) {
                if value.contains(BAD_SEPARATORS) {
                    return Err(KineticsError::BadSeparator {
                        reaction_id: self.reaction_id.clone(),
                        column: column.to_string(),
                        value: value.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Conversion options described by this row
    pub fn conversion_options(&self) -> Result<ConversionOptions, KineticsError> {
        self.check_separators()?;
        Ok(ConversionOptions::new(
            self.is_promiscuous(),
            self.inhibitor_list(),
            self.activator_list(),
        ))
    }
}

/// Trimmed content of a cell, None for blank cells and the `0` placeholder of empty sheets
fn cell_value(cell: &Option<String>) -> Option<&str> {
    cell.as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty() && *value != "0")
}

fn split_cell(cell: &Option<String>) -> Vec<String> {
    cell_value(cell)
        .map(|value| value.split_whitespace().map(String::from).collect())
        .unwrap_or_default()
}

/// The kinetics sheet of a GRASP model
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KineticsTable {
    pub entries: Vec<KineticsEntry>,
}

impl KineticsTable {
    pub fn new(entries: Vec<KineticsEntry>) -> Self {
        KineticsTable { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &KineticsEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Error, Debug)]
pub enum KineticsError {
    #[error("Unable to read kinetics table due to {0}")]
    UnableToRead(String),
    #[error("Unable to parse kinetics table due to {0}")]
    UnableToParse(String),
    #[error("Unable to write kinetics table due to {0}")]
    UnableToWrite(String),
    #[error(
        "Make sure all metabolites are separated by a single space in column \"{column}\" of \
         reaction {reaction_id}: {value}"
    )]
    BadSeparator {
        reaction_id: String,
        column: String,
        value: String,
    },
}
