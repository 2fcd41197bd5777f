use std::path::Path;
use std::sync::{LazyLock, RwLock};

use log::{info, warn};
use serde::{Deserialize, Serialize};

pub static CONFIGURATION: LazyLock<RwLock<Configuration>> =
    LazyLock::new(|| RwLock::new(Configuration::default()));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Mechanisms GRASP implements itself, no pattern file is generated for them
    pub hard_coded_mechanisms: Vec<String>,
    /// Extension of mechanism and pattern files, without the dot
    pub mechanism_extension: String,
    /// Number of threads used when generating patterns in bulk, 0 lets rayon decide
    pub processes: usize,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            hard_coded_mechanisms: vec![
                "massAction".to_string(),
                "diffusion".to_string(),
                "fixedExchange".to_string(),
                "freeExchange".to_string(),
            ],
            mechanism_extension: "txt".to_string(),
            processes: 0,
        }
    }
}

impl Configuration {
    /// Load a configuration from a JSON file, falling back to the defaults if it can't be read
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(configuration) => {
                    info!("Loaded configuration from {:?}", path.as_ref());
                    configuration
                }
                Err(e) => {
                    warn!("Failed to parse configuration: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(_) => {
                info!("Configuration file {:?} not found, using defaults", path.as_ref());
                Self::default()
            }
        }
    }

    /// File name of the mechanism or pattern file for a mechanism name
    pub fn mechanism_file_name(&self, mechanism: &str) -> String {
        format!("{}.{}", mechanism, self.mechanism_extension)
    }

    /// Make this configuration the process-wide one
    pub fn install(self) {
        match CONFIGURATION.write() {
            Ok(mut guard) => *guard = self,
            Err(poisoned) => *poisoned.into_inner() = self,
        }
    }
}

/// Copy of the current process-wide configuration
pub fn current() -> Configuration {
    match CONFIGURATION.read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_partial_configuration() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graspmech.json");
        std::fs::write(&path, r#"{"processes": 4}"#).unwrap();
        let configuration = Configuration::load_or_default(&path);
        assert_eq!(configuration.processes, 4);
        assert_eq!(configuration.mechanism_extension, "txt");
        assert_eq!(configuration.hard_coded_mechanisms.len(), 4);
    }

    #[test]
    fn test_load_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            Configuration::load_or_default(dir.path().join("missing.json")),
            Configuration::default()
        );
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(Configuration::load_or_default(&path), Configuration::default());
    }

    #[test]
    fn test_mechanism_file_name() {
        assert_eq!(
            Configuration::default().mechanism_file_name("orderedBiBi"),
            "orderedBiBi.txt"
        );
    }
}
