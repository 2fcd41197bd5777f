use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "graspmech",
    version,
    about = "Convert enzyme mechanisms into GRASP pattern files"
)]
pub struct Args {
    /// JSON configuration file (hard coded mechanisms, file extension, threads)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert one mechanism file into a pattern file
    Convert {
        /// Mechanism written as elementary reactions
        file_in: PathBuf,
        /// Pattern file to write, overwritten if it exists
        file_out: PathBuf,
        /// The enzyme catalyses several reactions sharing part of the mechanism
        #[arg(short, long)]
        promiscuous: bool,
        /// Inhibiting metabolites (comma-separated), named I1, I2, ...
        #[arg(short, long, value_delimiter = ',')]
        inhibitors: Vec<String>,
        /// Activating metabolites (comma-separated), named Z1, Z2, ...
        #[arg(short, long, value_delimiter = ',')]
        activators: Vec<String>,
    },
    /// Generate the missing pattern files for every mechanism of a kinetics table
    Generate {
        /// Kinetics table (.csv or .json)
        #[arg(short, long, value_name = "FILE")]
        model: PathBuf,
        /// Folder with the mechanisms written as elementary reactions
        #[arg(long, value_name = "DIR")]
        mechanisms: PathBuf,
        /// Folder with the pattern files
        #[arg(long, value_name = "DIR")]
        patterns: PathBuf,
        /// Mechanisms implemented by GRASP itself (comma-separated), replaces the configured ones
        #[arg(long, value_delimiter = ',')]
        hard_coded: Option<Vec<String>>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_convert() {
        let args = Args::try_parse_from([
            "graspmech",
            "convert",
            "mech.txt",
            "pattern.txt",
            "--promiscuous",
            "--inhibitors",
            "pyr_c,mltn_c",
        ])
        .unwrap();
        match args.command {
            Command::Convert {
                promiscuous,
                inhibitors,
                activators,
                ..
            } => {
                assert!(promiscuous);
                assert_eq!(inhibitors, vec!["pyr_c", "mltn_c"]);
                assert!(activators.is_empty());
            }
            _ => panic!("Expected convert command"),
        }
        assert!(!args.verbose);
    }

    #[test]
    fn parse_generate_with_global_flags() {
        let args = Args::try_parse_from([
            "graspmech",
            "generate",
            "--model",
            "kinetics1.csv",
            "--mechanisms",
            "mechanisms",
            "--patterns",
            "patterns",
            "-v",
            "--config",
            "graspmech.json",
        ])
        .unwrap();
        assert!(args.verbose);
        assert_eq!(args.config, Some(PathBuf::from("graspmech.json")));
        match args.command {
            Command::Generate { hard_coded, .. } => assert!(hard_coded.is_none()),
            _ => panic!("Expected generate command"),
        }
    }

    #[test]
    fn generate_requires_model() {
        assert!(Args::try_parse_from(["graspmech", "generate", "--patterns", "p"]).is_err());
    }
}
