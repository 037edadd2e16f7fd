//! Wizard steps: fixed, ordered, with a mutable completion flag.

use serde::{Deserialize, Serialize};

use offerwiz_core::Entity;

pub const FIRST_STEP: u32 = 1;
pub const TOTAL_STEPS: u32 = 4;

const STEP_LABELS: [&str; TOTAL_STEPS as usize] = ["Offering Type", "Details", "Pricing", "Media"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub id: u32,
    pub label: String,
    pub completed: bool,
}

impl Entity for Step {
    type Id = u32;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Build the initial step sequence.
///
/// Always returns a freshly allocated vector so a reset never aliases a
/// sequence that has been mutated since.
pub fn initial_steps() -> Vec<Step> {
    STEP_LABELS
        .iter()
        .zip(FIRST_STEP..)
        .map(|(label, id)| Step {
            id,
            label: (*label).to_string(),
            completed: false,
        })
        .collect()
}

/// Whether `n` addresses a step.
pub fn is_valid_step(n: u32) -> bool {
    (FIRST_STEP..=TOTAL_STEPS).contains(&n)
}
