//! Generates missing pattern files for every mechanism named in a kinetics table
use std::collections::HashSet;
use std::path::Path;

use indexmap::IndexMap;
use log::{info, warn};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use thiserror::Error;

use crate::configuration::{self, Configuration};
use crate::io::pattern_file::{convert_er_mech_to_grasp_pattern, PatternFileError};
use crate::kinetics::{KineticsEntry, KineticsError, KineticsTable};

/// Outcome of generating the patterns of a kinetics table
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Mechanisms whose pattern file was written
    pub generated: Vec<String>,
    /// Mechanisms that already had a pattern file
    pub already_present: Vec<String>,
    /// Mechanisms implemented by GRASP itself
    pub hard_coded: Vec<String>,
    /// Mechanisms that could not be converted, keyed by mechanism name
    pub failures: IndexMap<String, BatchFailure>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Error, Debug)]
pub enum BatchFailure {
    #[error(transparent)]
    Kinetics(#[from] KineticsError),
    #[error(transparent)]
    PatternFile(#[from] PatternFileError),
}

/// Generate a pattern file for every mechanism of the table that does not have one yet
///
/// For each row whose mechanism is not hard coded in GRASP and has no `<mechanism>.txt` in
/// `pattern_out_dir`, `<mechanism>.txt` is read from `mech_in_dir` and converted using the
/// promiscuity, inhibitors and activators of the row. When several rows use the same mechanism
/// the first one is used. A failing mechanism is recorded in the report and does not stop the
/// others.
///
/// # Parameters
/// - `table`: the kinetics sheet
/// - `mech_in_dir`: folder with the mechanisms written as elementary reactions
/// - `pattern_out_dir`: folder with the GRASP pattern files
/// - `hard_coded_mechs`: mechanisms to skip, the configured ones if None or empty
pub fn generate_mechanisms<P: AsRef<Path>, Q: AsRef<Path>>(
    table: &KineticsTable,
    mech_in_dir: P,
    pattern_out_dir: Q,
    hard_coded_mechs: Option<&[String]>,
) -> BatchReport {
    let config = configuration::current();
    let hard_coded: HashSet<&str> = match hard_coded_mechs {
        Some(mechs) if !mechs.is_empty() => mechs.iter().map(String::as_str).collect(),
        _ => config
            .hard_coded_mechanisms
            .iter()
            .map(String::as_str)
            .collect(),
    };
    let mech_in_dir = mech_in_dir.as_ref();
    let pattern_out_dir = pattern_out_dir.as_ref();

    let mut report = BatchReport::default();
    let mut pending: IndexMap<&str, &KineticsEntry> = IndexMap::new();
    for entry in table.iter() {
        let mechanism = entry.mechanism.trim();
        if pending.contains_key(mechanism)
            || report.hard_coded.iter().any(|m| m == mechanism)
            || report.already_present.iter().any(|m| m == mechanism)
        {
            continue;
        }
        if hard_coded.contains(mechanism) {
            report.hard_coded.push(mechanism.to_string());
        } else if pattern_out_dir
            .join(config.mechanism_file_name(mechanism))
            .is_file()
        {
            report.already_present.push(mechanism.to_string());
        } else {
            pending.insert(mechanism, entry);
        }
    }

    let pending: Vec<(&str, &KineticsEntry)> = pending.into_iter().collect();
    let convert_all = || {
        pending
            .par_iter()
            .map(|(mechanism, entry)| {
                info!("Generating pattern for mechanism {}", mechanism);
                let result = convert_entry(mechanism, entry, mech_in_dir, pattern_out_dir, &config);
                (mechanism.to_string(), result)
            })
            .collect::<Vec<(String, Result<(), BatchFailure>)>>()
    };
    let results = match ThreadPoolBuilder::new().num_threads(config.processes).build() {
        Ok(pool) => pool.install(convert_all),
        Err(e) => {
            warn!("Unable to build thread pool ({}), using the global one", e);
            convert_all()
        }
    };

    for (mechanism, result) in results {
        match result {
            Ok(()) => report.generated.push(mechanism),
            Err(failure) => {
                warn!("Failed to generate pattern for {}: {}", mechanism, failure);
                report.failures.insert(mechanism, failure);
            }
        }
    }
    report
}

fn convert_entry(
    mechanism: &str,
    entry: &KineticsEntry,
    mech_in_dir: &Path,
    pattern_out_dir: &Path,
    config: &Configuration,
) -> Result<(), BatchFailure> {
    let options = entry.conversion_options()?;
    let file_name = config.mechanism_file_name(mechanism);
    convert_er_mech_to_grasp_pattern(
        mech_in_dir.join(&file_name),
        pattern_out_dir.join(&file_name),
        &options,
    )?;
    Ok(())
}
