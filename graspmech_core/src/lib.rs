//! Core rust implementation of graspmech, a crate for turning enzyme mechanisms written as
//! elementary reactions into the pattern files used by GRASP to build rate laws.

pub mod configuration;
pub mod io;
pub mod kinetics;
pub mod mechanism;

pub use io::pattern_file::convert_er_mech_to_grasp_pattern;
pub use kinetics::resolver::generate_mechanisms;
pub use mechanism::{convert_mechanism, ConversionOptions};
