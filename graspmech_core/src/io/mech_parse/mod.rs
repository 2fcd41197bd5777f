//! Module for parsing elementary reaction mechanisms into ordered enzyme state records

use crate::io::mech_parse::parser::ParseError;
use crate::mechanism::EnzymeMechanism;
use thiserror::Error;

mod lexer;
pub mod parser;
mod token;

pub use lexer::LexerError;

/// Parse an elementary reaction mechanism into its enzyme state records
///
/// # Parameters
/// - `input`: &str with the mechanism written as elementary reactions, e.g.
///   `E_1 + A <-> E_2`. `<->` and `+` are ignored, tokens starting with `E_` are enzyme
///   states and everything else is a ligand.
///
/// # Returns
/// Parse result which is
/// - `Ok`: the [`EnzymeMechanism`], one record per enzyme state occurrence in reading order.
/// - `Err`: the MechParseError describing the issue with the mechanism.
///
/// # Examples
/// ```rust
/// use graspmech_core::io::mech_parse::parse_mechanism;
/// let mechanism = parse_mechanism("E_1 + A <-> E_2\nE_2 <-> E_1 + P").unwrap();
/// assert_eq!(mechanism.records().len(), 4);
/// assert_eq!(mechanism.n_steps(), 2);
/// ```
pub fn parse_mechanism(input: &str) -> Result<EnzymeMechanism, MechParseError> {
    // Convert the mechanism string into tokens
    let tokens = lexer::Lexer::new(input).lex()?;
    // Group the tokens into enzyme state records
    let mechanism = parser::MechanismParser::new(tokens).parse()?;
    Ok(mechanism)
}

/// Enum representing possible lex and parse errors
#[derive(Debug, Error, PartialEq, Clone)]
pub enum MechParseError {
    /// Lexing Error
    #[error("Error occurred during lexing of the mechanism: {0}")]
    LexingError(#[from] LexerError),
    /// Parsing Error
    #[error("Error occurred during parsing of the mechanism: {0}")]
    ParsingError(#[from] ParseError),
}
