//! Module for reading mechanisms and kinetics tables and writing patterns
pub mod kinetics_table;
pub mod mech_parse;
pub mod pattern_file;
