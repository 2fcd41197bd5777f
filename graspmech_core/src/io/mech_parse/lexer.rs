//! Lex an elementary reaction mechanism into a series of tokens for later parsing

use crate::io::mech_parse::token::Token;
use thiserror::Error;

/// Prefix marking an enzyme state identifier
pub(crate) const STATE_PREFIX: &str = "E_";
/// Reversible reaction arrow, carries no information for the pattern
const ARROW: [char; 3] = ['<', '-', '>'];

pub struct Lexer {
    source: Vec<char>,
    tokens: Vec<Token>,
    /// Characters of the word currently being read, with structural symbols removed
    word: String,
    current: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Lexer {
            source: source.chars().collect(),
            tokens: Vec::new(),
            word: String::new(),
            current: 0,
        }
    }

    /// Convert the mechanism into a token vector terminated by [`Token::Eof`]
    ///
    /// `<->` and `+` are deleted where they appear, the remaining text is split on whitespace.
    pub fn lex(mut self) -> Result<Vec<Token>, LexerError> {
        while !self.is_at_end() {
            self.scan_token()?;
        }
        self.finish_word();
        self.tokens.push(Token::Eof);
        Ok(self.tokens)
    }

    fn scan_token(&mut self) -> Result<(), LexerError> {
        if self.match_arrow() {
            return Ok(());
        }
        let c: char = self.advance();
        match c {
            '+' => {}
            c if c.is_whitespace() => self.finish_word(),
            c if c.is_control() => {
                return Err(LexerError::InvalidCharacter {
                    character: c,
                    position: self.current - 1,
                })
            }
            c => self.word.push(c),
        };
        Ok(())
    }

    /// Skip over a `<->` if one starts at the current position
    fn match_arrow(&mut self) -> bool {
        let end = self.current + ARROW.len();
        if end <= self.source.len() && self.source[self.current..end] == ARROW {
            self.current = end;
            return true;
        }
        false
    }

    fn advance(&mut self) -> char {
        let char_at_current = self.source[self.current];
        self.current += 1;
        char_at_current
    }

    fn finish_word(&mut self) {
        if self.word.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.word);
        if text.starts_with(STATE_PREFIX) {
            self.tokens.push(Token::State(text));
        } else {
            self.tokens.push(Token::Ligand(text));
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}

#[derive(Debug, Error, PartialEq, Clone)]
pub enum LexerError {
    #[error("Invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
}
