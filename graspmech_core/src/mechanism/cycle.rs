//! Tracks transition steps and reaction boundaries while walking a mechanism

/// Enzyme state number of the free enzyme, every reaction cycle starts here
pub const FREE_ENZYME: usize = 1;

/// Counters deciding where one reaction of a mechanism ends and the next begins
///
/// A transition step (no ligand bound or released) links two half-reactions. A new reaction
/// starts when a step leaves the free enzyme and at least one transition step has happened since
/// the previous reaction boundary. Ping-pong mechanisms have several transition steps within one
/// reaction but only return to the free enzyme once the reaction is complete.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CycleTracker {
    /// Transition steps seen so far
    transition_count: usize,
    /// Value of `transition_count` at the last reaction boundary
    boundary_transition_count: usize,
    /// 0-based index of the current reaction
    reaction_index: usize,
    /// The last step without a ligand has not yet been followed by a product release
    after_transition: bool,
}

impl CycleTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the forward state of the next step, returns true if it starts a new reaction
    pub fn enter_step(&mut self, forward_state: usize) -> bool {
        if self.transition_count > 0
            && self.transition_count > self.boundary_transition_count
            && forward_state == FREE_ENZYME
        {
            self.boundary_transition_count = self.transition_count;
            self.reaction_index += 1;
            return true;
        }
        false
    }

    /// Register a step where no ligand binds or is released
    pub fn record_transition(&mut self) {
        self.transition_count += 1;
        self.after_transition = true;
    }

    /// Consume the "just passed a transition step" flag, returning its previous value
    pub fn take_after_transition(&mut self) -> bool {
        std::mem::take(&mut self.after_transition)
    }

    pub fn after_transition(&self) -> bool {
        self.after_transition
    }

    pub fn reaction_index(&self) -> usize {
        self.reaction_index
    }

    pub fn transition_count(&self) -> usize {
        self.transition_count
    }

    /// Number of reactions detected so far (at least one)
    pub fn n_reactions(&self) -> usize {
        self.reaction_index + 1
    }
}
