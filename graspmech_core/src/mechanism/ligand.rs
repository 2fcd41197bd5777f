//! Canonical ligand naming for GRASP patterns
//!
//! GRASP expects substrates to be named A-E, products P-T, inhibitors I1, I2, ... and activators
//! Z1, Z2, ... . Substrate and product letters are handed out in order of first appearance.

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;

use crate::mechanism::pattern::PatternError;

pub const SUBSTRATE_LABELS: [&str; 5] = ["A", "B", "C", "D", "E"];
pub const PRODUCT_LABELS: [&str; 5] = ["P", "Q", "R", "S", "T"];

/// Role a ligand plays in a labelling scope
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LigandRole {
    Substrate,
    Product,
}

impl Display for LigandRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LigandRole::Substrate => write!(f, "substrate"),
            LigandRole::Product => write!(f, "product"),
        }
    }
}

/// Fixed set of letters handed out to ligands in order of first appearance
#[derive(Debug, Clone)]
struct LabelPool {
    role: LigandRole,
    letters: &'static [&'static str],
    /// Position of the next unused letter
    next: usize,
    /// Map of ligand names to their labels in the current scope
    assigned: IndexMap<String, String>,
}

impl LabelPool {
    fn new(role: LigandRole, letters: &'static [&'static str]) -> Self {
        LabelPool {
            role,
            letters,
            next: 0,
            assigned: IndexMap::new(),
        }
    }

    /// Get the label of a ligand, taking the next letter if it has none yet
    ///
    /// The returned flag is true when a letter was taken by this call.
    fn label_for(&mut self, ligand: &str) -> Result<(String, bool), PatternError> {
        if let Some(label) = self.assigned.get(ligand) {
            return Ok((label.clone(), false));
        }
        let letter = self
            .letters
            .get(self.next)
            .ok_or_else(|| PatternError::LabelPoolExhausted {
                role: self.role,
                ligand: ligand.to_string(),
            })?;
        self.next += 1;
        self.assigned.insert(ligand.to_string(), letter.to_string());
        Ok((letter.to_string(), true))
    }
}

/// Assigns GRASP ligand labels while a mechanism is walked
#[derive(Debug, Clone)]
pub struct LigandLabeller {
    substrates: LabelPool,
    products: LabelPool,
    inhibitors: IndexMap<String, String>,
    activators: IndexMap<String, String>,
}

impl LigandLabeller {
    pub fn new(inhibitors: &[String], activators: &[String]) -> Self {
        LigandLabeller {
            substrates: LabelPool::new(LigandRole::Substrate, &SUBSTRATE_LABELS),
            products: LabelPool::new(LigandRole::Product, &PRODUCT_LABELS),
            inhibitors: numbered_labels("I", inhibitors),
            activators: numbered_labels("Z", activators),
        }
    }

    /// Label of an inhibitor or activator, inhibitors take precedence
    pub fn effector_label(&self, ligand: &str) -> Option<&str> {
        self.inhibitors
            .get(ligand)
            .or_else(|| self.activators.get(ligand))
            .map(String::as_str)
    }

    /// Label of a binding substrate, assigning the next of A-E on first sight
    pub fn substrate_label(&mut self, ligand: &str) -> Result<String, PatternError> {
        self.substrates.label_for(ligand).map(|(label, _)| label)
    }

    /// Label of a released product, assigning the next of P-T on first sight
    ///
    /// Returns the label and whether a new letter was used for it.
    pub fn product_label(&mut self, ligand: &str) -> Result<(String, bool), PatternError> {
        self.products.label_for(ligand)
    }

    /// Give a product a literal label (e.g. `P2`) for the rest of the scope
    pub fn rename_product(&mut self, ligand: &str, label: String) {
        self.products.assigned.insert(ligand.to_string(), label);
    }

    /// Hand the most recently taken product letter back to the pool
    pub fn return_product_letter(&mut self) {
        self.products.next = self.products.next.saturating_sub(1);
    }

    /// Forget which ligands have labels, without reusing letters already handed out
    pub fn reset_scope(&mut self) {
        self.substrates.assigned.clear();
        self.products.assigned.clear();
    }
}

fn numbered_labels(prefix: &str, ligands: &[String]) -> IndexMap<String, String> {
    ligands
        .iter()
        .enumerate()
        .map(|(i, ligand)| (ligand.clone(), format!("{}{}", prefix, i + 1)))
        .collect()
}
