//! Module providing Token enum for lexing

/// Represents Tokens in an elementary reaction mechanism
#[derive(Debug, PartialEq, Clone, Eq, Hash)]
pub enum Token {
    /// Enzyme state label, anything starting with `E_`
    State(String),
    /// Metabolite binding to or released from an enzyme state
    Ligand(String),
    Eof,
}
