//! Sample todo content for the "Generate todos" action.

#[cfg(test)]
#[path = "sample_test.rs"]
mod sample_test;

use crate::validation::TodoDraft;

const VERBS: [&str; 8] = ["Review", "Write", "Plan", "Fix", "Call", "Clean", "Book", "Ship"];
const NOUNS: [&str; 8] = ["report", "groceries", "release", "invoice", "garden", "tickets", "budget", "notes"];

/// Deterministic title for the `n`th sample, with a random tag in the description.
pub fn sample_draft(n: usize) -> TodoDraft {
    let verb = VERBS[n % VERBS.len()];
    let noun = NOUNS[(n / VERBS.len()) % NOUNS.len()];
    let tag = uuid::Uuid::new_v4().simple().to_string();
    TodoDraft {
        title: format!("{verb} {noun} #{n}"),
        description: format!("Generated sample todo {n} ({})", &tag[..8]),
    }
}
