//! graspmech command line entry point
//!
//! Usage:
//!   graspmech convert mech.txt pattern.txt --inhibitors pyr_c
//!   graspmech generate --model kinetics1.csv --mechanisms mechanisms --patterns patterns

mod cli;
mod run;

use std::process;

use clap::Parser;

use crate::cli::Args;

fn main() {
    let args = Args::parse();
    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run::run(args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(2);
        }
    }
}
