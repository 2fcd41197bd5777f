use anyhow::{Context, Result};
use log::{error, info};

use graspmech_core::configuration::Configuration;
use graspmech_core::convert_er_mech_to_grasp_pattern;
use graspmech_core::generate_mechanisms;
use graspmech_core::kinetics::KineticsTable;
use graspmech_core::mechanism::ConversionOptions;

use crate::cli::{Args, Command};

/// Exit code when some mechanisms of a batch could not be converted
pub const EXIT_BATCH_FAILURES: i32 = 1;

pub fn run(args: Args) -> Result<i32> {
    if let Some(path) = &args.config {
        Configuration::load_or_default(path).install();
    }

    match args.command {
        Command::Convert {
            file_in,
            file_out,
            promiscuous,
            inhibitors,
            activators,
        } => {
            let options = ConversionOptions::new(promiscuous, inhibitors, activators);
            let pattern = convert_er_mech_to_grasp_pattern(&file_in, &file_out, &options)
                .with_context(|| format!("converting {}", file_in.display()))?;
            info!(
                "{} -> {} ({} reaction(s))",
                file_in.display(),
                file_out.display(),
                pattern.reaction_count()
            );
            Ok(0)
        }
        Command::Generate {
            model,
            mechanisms,
            patterns,
            hard_coded,
        } => {
            let table = KineticsTable::read(&model)
                .with_context(|| format!("reading kinetics table {}", model.display()))?;
            let report = generate_mechanisms(&table, &mechanisms, &patterns, hard_coded.as_deref());
            info!(
                "{} pattern(s) generated, {} already present, {} hard coded",
                report.generated.len(),
                report.already_present.len(),
                report.hard_coded.len()
            );
            for mechanism in &report.generated {
                println!("{}", mechanism);
            }
            if report.is_success() {
                return Ok(0);
            }
            for (mechanism, failure) in &report.failures {
                error!("{}: {}", mechanism, failure);
            }
            Ok(EXIT_BATCH_FAILURES)
        }
    }
}
