//! Counterexamples attached to failing properties.
//!
//! A counterexample is the sequence of container states that led to a
//! violation, plus the DST seed (when known) that reproduces it.

/// One recorded state on the way to a violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    /// Step number within the run (1-based)
    pub step: u64,
    /// What happened at this step
    pub description: String,
    /// Named values observed at this step
    pub variables: Vec<(String, String)>,
}

/// Trace of states leading to a property violation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counterexample {
    /// Seed that reproduces the run, if it came from DST
    pub dst_seed: Option<u64>,
    /// Recorded states in step order
    pub states: Vec<StateSnapshot>,
}

impl Counterexample {
    /// Create an empty counterexample with no seed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty counterexample tied to a DST seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        debug_assert!(seed != 0, "DST seed should not be zero");
        Self {
            dst_seed: Some(seed),
            states: Vec::new(),
        }
    }

    /// Append a state. Steps must be recorded in increasing order.
    pub fn add_state(&mut self, state: StateSnapshot) {
        debug_assert!(
            self.states.last().map_or(true, |last| last.step < state.step),
            "Counterexample steps must increase"
        );
        self.states.push(state);
    }

    /// Render the trace as a plain-text diagram.
    #[must_use]
    pub fn render_diagram(&self) -> String {
        let mut out = String::new();

        if let Some(seed) = self.dst_seed {
            out.push_str(&format!("Reproduce with DST_SEED={}\n", seed));
        }

        for state in &self.states {
            out.push_str(&format!("  step {:>4} | {}\n", state.step, state.description));
            for (name, value) in &state.variables {
                out.push_str(&format!("           |   {} = {}\n", name, value));
            }
        }

        out
    }
}
