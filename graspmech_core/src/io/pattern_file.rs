//! Module converting mechanism files into GRASP pattern files
use std::fs;
use std::path::Path;

use log::info;
use thiserror::Error;

use crate::io::mech_parse::parse_mechanism;
use crate::mechanism::pattern::{generate_pattern, GraspPattern};
use crate::mechanism::{ConversionError, ConversionOptions};

/// Convert a file with a mechanism written as elementary reactions into a GRASP pattern file
///
/// # Parameters
/// - `file_in`: path to the mechanism file
/// - `file_out`: path of the pattern file, overwritten if it exists
/// - `options`: promiscuity flag and inhibitor/activator lists
///
/// # Returns
/// The generated [`GraspPattern`] once it has been written.
///
/// # Examples
/// ```rust,no_run
/// use graspmech_core::io::pattern_file::convert_er_mech_to_grasp_pattern;
/// use graspmech_core::mechanism::ConversionOptions;
/// convert_er_mech_to_grasp_pattern(
///     "mechanisms/orderedBiBi.txt",
///     "patterns/orderedBiBi.txt",
///     &ConversionOptions::default(),
/// )
/// .unwrap();
/// ```
pub fn convert_er_mech_to_grasp_pattern<P: AsRef<Path>, Q: AsRef<Path>>(
    file_in: P,
    file_out: Q,
    options: &ConversionOptions,
) -> Result<GraspPattern, PatternFileError> {
    let er_mech = match fs::read_to_string(file_in.as_ref()) {
        Ok(data) => data,
        Err(err) => {
            return Err(PatternFileError::UnableToRead(format!(
                "{}: {}",
                file_in.as_ref().display(),
                err
            )))
        }
    };

    let mechanism = parse_mechanism(&er_mech).map_err(ConversionError::from)?;
    let pattern = generate_pattern(&mechanism, options).map_err(ConversionError::from)?;

    if let Err(err) = fs::write(file_out.as_ref(), pattern.to_string()) {
        return Err(PatternFileError::UnableToWrite(format!(
            "{}: {}",
            file_out.as_ref().display(),
            err
        )));
    }
    info!(
        "Wrote pattern {} ({} steps, {} reaction(s))",
        file_out.as_ref().display(),
        mechanism.n_steps(),
        pattern.reaction_count()
    );
    Ok(pattern)
}

#[derive(Error, Debug)]
pub enum PatternFileError {
    #[error("Unable to read mechanism file {0}")]
    UnableToRead(String),
    #[error("Unable to write pattern file {0}")]
    UnableToWrite(String),
    #[error("Unable to convert mechanism: {0}")]
    Conversion(#[from] ConversionError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::mech_parse::MechParseError;
    use std::fs::read_to_string;

    #[test]
    fn test_convert_file() {
        let dir = tempfile::tempdir().unwrap();
        let file_in = dir.path().join("orderedUniBi.txt");
        let file_out = dir.path().join("orderedUniBi_pattern.txt");
        fs::write(
            &file_in,
            "E_c + A <-> E_cA\nE_cA <-> E_cPQ\nE_cPQ <-> E_cQ + P\nE_cQ <-> E_c + Q\n",
        )
        .unwrap();

        let pattern =
            convert_er_mech_to_grasp_pattern(&file_in, &file_out, &ConversionOptions::default())
                .unwrap();
        assert_eq!(pattern.reaction_count(), 1);
        assert_eq!(
            read_to_string(&file_out).unwrap(),
            "1 2 k01.*A\n2 1 k02\n2 3 k03\n3 2 k04\n3 4 k05\n4 3 k06.*P\n4 1 k07\n1 4 k08.*Q"
        );
    }

    #[test]
    fn test_overwrites_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let file_in = dir.path().join("mech.txt");
        let file_out = dir.path().join("pattern.txt");
        fs::write(&file_in, "E_1 + A <-> E_2\nE_2 <-> E_1 + P").unwrap();
        fs::write(&file_out, "stale content that is longer than the pattern\n".repeat(5)).unwrap();

        convert_er_mech_to_grasp_pattern(&file_in, &file_out, &ConversionOptions::default())
            .unwrap();
        assert_eq!(
            read_to_string(&file_out).unwrap(),
            "1 2 k01.*A\n2 1 k02\n2 1 k03\n1 2 k04.*P"
        );
    }

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let result = convert_er_mech_to_grasp_pattern(
            dir.path().join("missing.txt"),
            dir.path().join("out.txt"),
            &ConversionOptions::default(),
        );
        assert!(matches!(result, Err(PatternFileError::UnableToRead(_))));
        assert!(!dir.path().join("out.txt").exists());
    }

    #[test]
    fn test_malformed_mechanism_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let file_in = dir.path().join("mech.txt");
        let file_out = dir.path().join("pattern.txt");
        fs::write(&file_in, "E_1 + A <-> E_2\nE_2 <->").unwrap();

        match convert_er_mech_to_grasp_pattern(&file_in, &file_out, &ConversionOptions::default())
        {
            Err(PatternFileError::Conversion(ConversionError::Parse(
                MechParseError::ParsingError(_),
            ))) => {}
            other => panic!("Expected a parsing error, got {:?}", other),
        }
        assert!(!file_out.exists());
    }
}
