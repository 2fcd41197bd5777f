use crate::io::mech_parse::token::Token;
use crate::mechanism::{EnzymeMechanism, StateRecord};

use indexmap::IndexMap;
use log::warn;
use thiserror::Error;
/*
Mechanism Grammar (after `<->` and `+` are removed by the lexer):
mechanism -> record* ;
record -> STATE LIGAND? ;

e.g. E_1 A E_2 E_2 E_1 P
 */

/// Mechanism Parser
pub struct MechanismParser {
    /// Vector of tokens from the mechanism string
    tokens: Vec<Token>,
    /// Current token being processed
    current: usize,
    /// Map of enzyme state labels to state numbers, in order of first appearance
    pub(crate) state_map: IndexMap<String, usize>,
}

impl MechanismParser {
    /// Create a new MechanismParser
    pub fn new(tokens: Vec<Token>) -> MechanismParser {
        MechanismParser {
            tokens,
            current: 0,
            state_map: IndexMap::new(),
        }
    }

    /// Parse the token vector into the ordered enzyme state records of the mechanism
    pub fn parse(mut self) -> Result<EnzymeMechanism, ParseError> {
        let mut records: Vec<StateRecord> = Vec::new();
        while !self.is_at_end() {
            match self.advance() {
                Token::State(label) => {
                    let state = self.resolve_state(label);
                    let ligand = self.match_ligand();
                    records.push(StateRecord::new(state, ligand));
                }
                Token::Ligand(name) => {
                    if records.is_empty() {
                        return Err(ParseError::LigandBeforeState(name));
                    }
                    warn!(
                        "Ligand `{}` does not directly follow an enzyme state and is ignored",
                        name
                    );
                }
                Token::Eof => break,
            }
        }
        EnzymeMechanism::from_parts(records, self.state_map)
    }

    // region parsing helper functions

    /// If the current token is a ligand return `Some(name)` and advance, otherwise return None
    fn match_ligand(&mut self) -> Option<String> {
        if let Token::Ligand(name) = self.peek() {
            self.advance();
            return Some(name);
        }
        None
    }

    /// Advance `self.current` one position unless at end of token Vec, then return the previous
    /// token.
    fn advance(&mut self) -> Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    fn is_at_end(&self) -> bool {
        self.peek() == Token::Eof
    }

    /// Get a copy of the current token
    fn peek(&self) -> Token {
        self.tokens.get(self.current).cloned().unwrap_or(Token::Eof)
    }

    /// Get a copy of the previous token
    fn previous(&self) -> Token {
        self.tokens
            .get(self.current.wrapping_sub(1))
            .cloned()
            .unwrap_or(Token::Eof)
    }

    // endregion parsing helper functions

    // region State Map Functions

    /// Look up the number of an enzyme state label, numbering it if it is new
    fn resolve_state(&mut self, label: String) -> usize {
        let next = self.state_map.len() + 1;
        *self.state_map.entry(label).or_insert(next)
    }

    // endregion State Map Functions
}

/// Enum representing possible parse errors
#[derive(Debug, Error, PartialEq, Clone)]
pub enum ParseError {
    /// The mechanism has no enzyme state at all
    #[error("No enzyme states found, check that the mechanism is not empty and states start with `E_`")]
    NoEnzymeStates,
    /// A ligand appeared before any enzyme state
    #[error("Ligand `{0}` appears before the first enzyme state")]
    LigandBeforeState(String),
    /// The records can't be grouped into forward/reverse pairs
    #[error("Found {records} enzyme state records, expected an even number (one pair per elementary step)")]
    UnpairedStep { records: usize },
}
