//! Generates GRASP patterns from enzyme mechanisms
//!
//! A pattern has one line per direction of every elementary step:
//! ```text
//! 1 2 k01.*A
//! 2 1 k02
//! ```
//! The first two fields are the enzyme states the step goes from and to, followed by the rate
//! constant and, if a ligand binds in that direction, `.*` and the ligand label.

use std::fmt::{Display, Formatter};

use log::{debug, warn};
use thiserror::Error;

use crate::mechanism::cycle::CycleTracker;
use crate::mechanism::ligand::{LigandLabeller, LigandRole};
use crate::mechanism::{ConversionOptions, EnzymeMechanism, StateRecord};

/// Label of the first product before reactions are counted
const FIRST_PRODUCT: &str = "P";
/// Label of the first product of the first reaction
const FIRST_PRODUCT_INDEXED: &str = "P1";

/// One line of a GRASP pattern
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternStep {
    pub from: usize,
    pub to: usize,
    /// 1-based rate constant index, shared by all lines of the pattern
    pub rate_constant: usize,
    /// Label of the ligand binding in this direction
    pub ligand: Option<String>,
}

impl Display for PatternStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} k{:02}", self.from, self.to, self.rate_constant)?;
        if let Some(ligand) = &self.ligand {
            write!(f, ".*{}", ligand)?;
        }
        Ok(())
    }
}

/// A generated GRASP pattern
#[derive(Clone, Debug, PartialEq)]
pub struct GraspPattern {
    steps: Vec<PatternStep>,
    n_reactions: usize,
    n_transitions: usize,
}

impl GraspPattern {
    pub fn steps(&self) -> &[PatternStep] {
        &self.steps
    }

    /// Number of reactions catalysed through this mechanism
    pub fn reaction_count(&self) -> usize {
        self.n_reactions
    }

    /// Number of steps where no ligand binds or is released
    pub fn transition_count(&self) -> usize {
        self.n_transitions
    }
}

impl Display for GraspPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}

/// Walks a mechanism one elementary step at a time, naming ligands and detecting reactions
pub struct PatternGenerator<'o> {
    options: &'o ConversionOptions,
    labeller: LigandLabeller,
    cycle: CycleTracker,
    steps: Vec<PatternStep>,
    rate_constant: usize,
}

impl<'o> PatternGenerator<'o> {
    pub fn new(options: &'o ConversionOptions) -> Self {
        PatternGenerator {
            options,
            labeller: LigandLabeller::new(&options.inhibitors, &options.activators),
            cycle: CycleTracker::new(),
            steps: Vec::new(),
            rate_constant: 1,
        }
    }

    /// Generate the pattern for a whole mechanism
    pub fn generate(mut self, mechanism: &EnzymeMechanism) -> Result<GraspPattern, PatternError> {
        for (forward, reverse) in mechanism.steps() {
            self.add_step(forward, reverse)?;
        }

        let n_reactions = self.cycle.n_reactions();
        if n_reactions == 1 {
            // Indexed product names only matter when several reactions share the enzyme
            for step in self.steps.iter_mut() {
                if step.ligand.as_deref() == Some(FIRST_PRODUCT_INDEXED) {
                    step.ligand = Some(FIRST_PRODUCT.to_string());
                }
            }
            if self.options.promiscuous {
                warn!(
                    "Mechanism is marked promiscuous but no second reaction was found, check \
                     that every reaction starts from the free enzyme after a transition step"
                );
            }
        }

        Ok(GraspPattern {
            steps: self.steps,
            n_reactions,
            n_transitions: self.cycle.transition_count(),
        })
    }

    fn add_step(&mut self, forward: &StateRecord, reverse: &StateRecord) -> Result<(), PatternError> {
        if self.cycle.enter_step(forward.state) {
            debug!(
                "Reaction {} starts at step {}",
                self.cycle.n_reactions(),
                self.rate_constant
            );
            if self.options.promiscuous {
                self.labeller.reset_scope();
            }
        }

        let bind_ligand = match &forward.ligand {
            Some(ligand) => Some(self.binding_label(ligand)?),
            None => None,
        };
        self.push_line(forward.state, reverse.state, bind_ligand.clone());

        let release_ligand = match &reverse.ligand {
            Some(ligand) => Some(self.release_label(ligand)?),
            None => {
                if bind_ligand.is_none() {
                    self.cycle.record_transition();
                }
                None
            }
        };
        self.push_line(reverse.state, forward.state, release_ligand);
        Ok(())
    }

    fn binding_label(&mut self, ligand: &str) -> Result<String, PatternError> {
        if let Some(label) = self.labeller.effector_label(ligand) {
            return Ok(label.to_string());
        }
        self.labeller.substrate_label(ligand)
    }

    fn release_label(&mut self, ligand: &str) -> Result<String, PatternError> {
        // Inhibitors and activators only show up on this side when their binding is written
        // backwards, they keep their own label
        if let Some(label) = self.labeller.effector_label(ligand) {
            return Ok(label.to_string());
        }

        let (letter, new_letter) = self.labeller.product_label(ligand)?;
        let mut label = if letter == FIRST_PRODUCT {
            FIRST_PRODUCT_INDEXED.to_string()
        } else {
            letter
        };

        if self.options.promiscuous && self.cycle.take_after_transition() {
            // First product after a transition is named after its reaction
            label = format!("{}{}", FIRST_PRODUCT, self.cycle.n_reactions());
            self.labeller.rename_product(ligand, label.clone());
            if self.cycle.reaction_index() > 0 && new_letter {
                self.labeller.return_product_letter();
            }
        }
        Ok(label)
    }

    fn push_line(&mut self, from: usize, to: usize, ligand: Option<String>) {
        let step = PatternStep {
            from,
            to,
            rate_constant: self.rate_constant,
            ligand,
        };
        debug!("{}", step);
        self.steps.push(step);
        self.rate_constant += 1;
    }
}

/// Generate the GRASP pattern of a parsed mechanism
///
/// # Examples
/// ```rust
/// use graspmech_core::io::mech_parse::parse_mechanism;
/// use graspmech_core::mechanism::ConversionOptions;
/// use graspmech_core::mechanism::pattern::generate_pattern;
/// let mechanism = parse_mechanism("E_1 + A <-> E_2\nE_2 <-> E_1 + P").unwrap();
/// let pattern = generate_pattern(&mechanism, &ConversionOptions::default()).unwrap();
/// assert_eq!(pattern.reaction_count(), 1);
/// assert_eq!(pattern.steps()[3].to_string(), "1 2 k04.*P");
/// ```
pub fn generate_pattern(
    mechanism: &EnzymeMechanism,
    options: &ConversionOptions,
) -> Result<GraspPattern, PatternError> {
    PatternGenerator::new(options).generate(mechanism)
}

/// Enum representing possible pattern generation errors
#[derive(Debug, Error, PartialEq, Clone)]
pub enum PatternError {
    /// More distinct ligands than GRASP has labels for
    #[error("Too many distinct {role}s, no label left for `{ligand}` (GRASP supports at most 5)")]
    LabelPoolExhausted { role: LigandRole, ligand: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::mech_parse::parse_mechanism;
    use crate::mechanism::ConversionOptionsBuilder;

    fn convert(mech: &str, options: &ConversionOptions) -> GraspPattern {
        let mechanism = parse_mechanism(mech).unwrap();
        generate_pattern(&mechanism, options).unwrap()
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    const ORDERED_BI_BI: &str = "E_c + g6p_c <-> E_c&g6p_c
E_c&g6p_c + nadp_c <-> E_c&g6p_c&nadp_c
E_c&g6p_c&nadp_c <-> E_c&6pgl_c&nadph_c
E_c&6pgl_c&nadph_c <-> E_c&nadph_c + 6pgl_c
E_c&nadph_c <-> E_c + nadph_c";

    const PING_PONG_BI_BI: &str = "E_c + A <-> E_cA
E_cA <-> E_cFP
E_cFP <-> E_cF + P
E_cF + B <-> E_cFB
E_cFB <-> E_cQ
E_cQ <-> E_c + Q";

    const UNI_UNI_PROMISCUOUS: &str = "E_c + A <-> E_cA
E_cA <-> E_cP
E_cP <-> E_c + P
E_c + B <-> E_cB
E_cB <-> E_cQ
E_cQ <-> E_c + Q";

    #[test]
    fn test_ordered_bi_bi() {
        let pattern = convert(ORDERED_BI_BI, &ConversionOptions::default());
        assert_eq!(
            pattern.to_string(),
            "1 2 k01.*A
2 1 k02
2 3 k03.*B
3 2 k04
3 4 k05
4 3 k06
4 5 k07
5 4 k08.*P
5 1 k09
1 5 k10.*Q"
        );
        assert_eq!(pattern.reaction_count(), 1);
        assert_eq!(pattern.transition_count(), 1);
    }

    #[test]
    fn test_ping_pong_keeps_plain_product_letters() {
        let pattern = convert(PING_PONG_BI_BI, &ConversionOptions::default());
        assert_eq!(
            pattern.to_string(),
            "1 2 k01.*A
2 1 k02
2 3 k03
3 2 k04
3 4 k05
4 3 k06.*P
4 5 k07.*B
5 4 k08
5 6 k09
6 5 k10
6 1 k11
1 6 k12.*Q"
        );
        assert_eq!(pattern.reaction_count(), 1);
        assert_eq!(pattern.transition_count(), 2);
    }

    #[test]
    fn test_promiscuous_products_are_indexed_by_reaction() {
        let options = ConversionOptionsBuilder::default()
            .promiscuous(true)
            .build()
            .unwrap();
        let pattern = convert(UNI_UNI_PROMISCUOUS, &options);
        assert_eq!(
            pattern.to_string(),
            "1 2 k01.*A
2 1 k02
2 3 k03
3 2 k04
3 1 k05
1 3 k06.*P1
1 4 k07.*B
4 1 k08
4 5 k09
5 4 k10
5 1 k11
1 5 k12.*P2"
        );
        assert_eq!(pattern.reaction_count(), 2);
    }

    #[test]
    fn test_promiscuous_shared_cofactor_gets_new_letter() {
        // Both reactions use nadp_c, the second reaction must not reuse its label
        let mech = "E_c + nadp_c <-> E_c&nadp_c
E_c&nadp_c + g6p_c <-> E_c&nadp_c&g6p_c
E_c&nadp_c&g6p_c <-> E_c&nadph_c&6pgl_c
E_c&nadph_c&6pgl_c <-> E_c&nadph_c + 6pgl_c
E_c&nadph_c <-> E_c + nadph_c
E_c + nadp_c <-> E_c&nadp_c2
E_c&nadp_c2 + 6pgc_c <-> E_c&nadp_c&6pgc_c
E_c&nadp_c&6pgc_c <-> E_c&nadph_c&ru5p_c
E_c&nadph_c&ru5p_c <-> E_c&nadph_c2 + ru5p_c
E_c&nadph_c2 <-> E_c + nadph_c";
        let options = ConversionOptions::new(true, vec![], vec![]);
        let pattern = convert(mech, &options);
        let labels: Vec<Option<&str>> = pattern
            .steps()
            .iter()
            .map(|step| step.ligand.as_deref())
            .collect();
        assert_eq!(
            labels,
            vec![
                Some("A"), None, Some("B"), None, None, None, None, Some("P1"), None, Some("Q"),
                Some("C"), None, Some("D"), None, None, None, None, Some("P2"), None, Some("R"),
            ]
        );
    }

    #[test]
    fn test_renamed_product_keeps_its_letter_taken() {
        // Q leaves once before and once after the transition of the second reaction
        let mech = "E_c + A <-> E_cA
E_cA <-> E_cP
E_cP <-> E_c + P
E_c + B <-> E_cB
E_cB <-> E_cX + Q
E_cX <-> E_cY
E_cY <-> E_cW + Q
E_cW <-> E_c + S";
        let options = ConversionOptions::new(true, vec![], vec![]);
        let pattern = convert(mech, &options);
        assert_eq!(pattern.reaction_count(), 2);
        assert_eq!(
            pattern.to_string(),
            "1 2 k01.*A\n2 1 k02\n2 3 k03\n3 2 k04\n3 1 k05\n1 3 k06.*P1\n\
             1 4 k07.*B\n4 1 k08\n4 5 k09\n5 4 k10.*Q\n5 6 k11\n6 5 k12\n\
             6 7 k13\n7 6 k14.*P2\n7 1 k15\n1 7 k16.*R"
        );
    }

    #[test]
    fn test_non_promiscuous_multi_reaction_keeps_indexed_first_product() {
        let pattern = convert(UNI_UNI_PROMISCUOUS, &ConversionOptions::default());
        assert_eq!(pattern.reaction_count(), 2);
        assert_eq!(pattern.steps()[5].ligand.as_deref(), Some("P1"));
        assert_eq!(pattern.steps()[6].ligand.as_deref(), Some("B"));
        assert_eq!(pattern.steps()[11].ligand.as_deref(), Some("Q"));
    }

    #[test]
    fn test_promiscuous_without_second_reaction() {
        let options = ConversionOptions::new(true, vec![], vec![]);
        let pattern = convert(ORDERED_BI_BI, &options);
        assert_eq!(pattern.reaction_count(), 1);
        // P1 still collapses to P
        assert_eq!(pattern.steps()[7].ligand.as_deref(), Some("P"));
    }

    #[test]
    fn test_competitive_inhibitor_never_gets_substrate_letter() {
        let mech = "E_c + pyr_c <-> E_c&pyr_c
E_c + A <-> E_cA
E_cA <-> E_cP
E_cP <-> E_c + P";
        let options = ConversionOptions::new(false, names(&["pyr_c"]), vec![]);
        let pattern = convert(mech, &options);
        assert_eq!(
            pattern.to_string(),
            "1 2 k01.*I1
2 1 k02
1 3 k03.*A
3 1 k04
3 4 k05
4 3 k06
4 1 k07
1 4 k08.*P"
        );
    }

    #[test]
    fn test_activator_label() {
        let mech = "E_c + pyr_c <-> E_c&pyr_c
E_c&pyr_c + A <-> E_c&pyr_c&A
E_c&pyr_c&A <-> E_c&pyr_c&P
E_c&pyr_c&P <-> E_c&pyr_c + P
E_c&pyr_c <-> E_c + pyr_c";
        let options = ConversionOptions::new(false, vec![], names(&["pyr_c"]));
        let pattern = convert(mech, &options);
        let labels: Vec<Option<&str>> = pattern
            .steps()
            .iter()
            .map(|step| step.ligand.as_deref())
            .collect();
        assert_eq!(
            labels,
            vec![
                Some("Z1"), None, Some("A"), None, None, None, None, Some("P"), None, Some("Z1"),
            ]
        );
    }

    #[test]
    fn test_rate_constants_are_sequential() {
        let pattern = convert(PING_PONG_BI_BI, &ConversionOptions::default());
        let constants: Vec<usize> = pattern.steps().iter().map(|s| s.rate_constant).collect();
        assert_eq!(constants, (1..=12).collect::<Vec<usize>>());
    }

    #[test]
    fn test_product_pool_exhausted() {
        let mech = "E_1 <-> E_2 + a
E_2 <-> E_3 + b
E_3 <-> E_4 + c
E_4 <-> E_5 + d
E_5 <-> E_6 + e
E_6 <-> E_1 + f";
        let mechanism = parse_mechanism(mech).unwrap();
        assert_eq!(
            generate_pattern(&mechanism, &ConversionOptions::default()).unwrap_err(),
            PatternError::LabelPoolExhausted {
                role: LigandRole::Product,
                ligand: "f".to_string()
            }
        );
    }

    #[test]
    fn test_step_display() {
        let step = PatternStep {
            from: 12,
            to: 3,
            rate_constant: 7,
            ligand: None,
        };
        assert_eq!(step.to_string(), "12 3 k07");
    }
}
