//! Module providing the enzyme mechanism representation and its conversion into GRASP patterns.

pub mod cycle;
pub mod ligand;
pub mod pattern;

use std::fmt::{Display, Formatter};

use derive_builder::Builder;
use indexmap::IndexMap;
use thiserror::Error;

use crate::io::mech_parse::parser::ParseError;
use crate::io::mech_parse::{parse_mechanism, MechParseError};
use crate::mechanism::pattern::{generate_pattern, PatternError};

/// One occurrence of an enzyme state in a mechanism, with the ligand written right after it
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StateRecord {
    /// Number of the enzyme state, 1 is the first state in the mechanism (the free enzyme)
    pub state: usize,
    /// Ligand binding to (forward record) or released from (reverse record) the state
    pub ligand: Option<String>,
}

impl StateRecord {
    pub fn new(state: usize, ligand: Option<String>) -> Self {
        StateRecord { state, ligand }
    }
}

impl Display for StateRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.ligand {
            Some(ligand) => write!(f, "({}, {})", self.state, ligand),
            None => write!(f, "({})", self.state),
        }
    }
}

/// An enzyme mechanism as an ordered list of state records
///
/// Records `2k` and `2k + 1` form one elementary step, the forward (binding) and reverse
/// (release) direction of the same reversible reaction. Construction guarantees that there is at
/// least one step and that every record has a partner.
#[derive(Clone, Debug, PartialEq)]
pub struct EnzymeMechanism {
    records: Vec<StateRecord>,
    /// Map of enzyme state labels to state numbers, empty if built directly from records
    states: IndexMap<String, usize>,
}

impl EnzymeMechanism {
    /// Create a mechanism from state records
    ///
    /// # Examples
    /// ```rust
    /// use graspmech_core::mechanism::{EnzymeMechanism, StateRecord};
    /// let mechanism = EnzymeMechanism::from_records(vec![
    ///     StateRecord::new(1, Some("A".to_string())),
    ///     StateRecord::new(2, None),
    /// ])
    /// .unwrap();
    /// assert_eq!(mechanism.n_steps(), 1);
    /// ```
    pub fn from_records(records: Vec<StateRecord>) -> Result<Self, ParseError> {
        Self::from_parts(records, IndexMap::new())
    }

    pub(crate) fn from_parts(
        records: Vec<StateRecord>,
        states: IndexMap<String, usize>,
    ) -> Result<Self, ParseError> {
        if records.is_empty() {
            return Err(ParseError::NoEnzymeStates);
        }
        if records.len() % 2 != 0 {
            return Err(ParseError::UnpairedStep {
                records: records.len(),
            });
        }
        Ok(EnzymeMechanism { records, states })
    }

    pub fn records(&self) -> &[StateRecord] {
        &self.records
    }

    /// Iterate over the elementary steps as (forward, reverse) record pairs
    pub fn steps(&self) -> impl Iterator<Item = (&StateRecord, &StateRecord)> {
        self.records
            .chunks_exact(2)
            .map(|pair| (&pair[0], &pair[1]))
    }

    pub fn n_steps(&self) -> usize {
        self.records.len() / 2
    }

    /// Number of distinct enzyme states
    pub fn n_states(&self) -> usize {
        if self.states.is_empty() {
            self.records.iter().map(|r| r.state).max().unwrap_or(0)
        } else {
            self.states.len()
        }
    }

    /// Label of the enzyme state with the given number, if the mechanism was parsed from text
    pub fn state_label(&self, state: usize) -> Option<&str> {
        self.states
            .iter()
            .find(|(_, number)| **number == state)
            .map(|(label, _)| label.as_str())
    }
}

/// Options controlling how ligands and reactions are named in the pattern
#[derive(Builder, Debug, Clone, Default, PartialEq)]
pub struct ConversionOptions {
    /// The enzyme catalyses more than one reaction sharing part of the mechanism
    #[builder(default = "false")]
    pub promiscuous: bool,
    /// Inhibiting metabolites, named I1, I2, ... in this order
    #[builder(default = "Vec::new()")]
    pub inhibitors: Vec<String>,
    /// Activating metabolites, named Z1, Z2, ... in this order
    #[builder(default = "Vec::new()")]
    pub activators: Vec<String>,
}

impl ConversionOptions {
    pub fn new(promiscuous: bool, inhibitors: Vec<String>, activators: Vec<String>) -> Self {
        ConversionOptions {
            promiscuous,
            inhibitors,
            activators,
        }
    }
}

/// Convert a mechanism written as elementary reactions into a GRASP pattern
///
/// # Parameters
/// - `er_mech`: the mechanism, e.g. `E_1 + A <-> E_2`, one or more steps separated by whitespace
/// - `options`: promiscuity flag and inhibitor/activator lists (see [`ConversionOptions`])
///
/// # Returns
/// The pattern text, one line per direction of each elementary step without a trailing newline.
///
/// # Examples
/// ```rust
/// use graspmech_core::mechanism::{convert_mechanism, ConversionOptions};
/// let pattern = convert_mechanism(
///     "E_1 + A <-> E_2\nE_2 <-> E_1 + P",
///     &ConversionOptions::default(),
/// )
/// .unwrap();
/// assert_eq!(pattern, "1 2 k01.*A\n2 1 k02\n2 1 k03\n1 2 k04.*P");
/// ```
pub fn convert_mechanism(
    er_mech: &str,
    options: &ConversionOptions,
) -> Result<String, ConversionError> {
    let mechanism = parse_mechanism(er_mech)?;
    let pattern = generate_pattern(&mechanism, options)?;
    Ok(pattern.to_string())
}

/// Errors converting a mechanism into a pattern
#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConversionError {
    #[error(transparent)]
    Parse(#[from] MechParseError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
}
