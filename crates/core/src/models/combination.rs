use serde::Serialize;

use crate::engine::conflict::conflicts;
use crate::models::section::Section;

/// The section picked for one course in a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub course: String,
    pub section: Section,
}

/// One section per course, in course order. Produced by the generator only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleCombination {
    choices: Vec<Choice>,
}

impl ScheduleCombination {
    pub fn new(choices: Vec<Choice>) -> Self {
        Self { choices }
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    pub fn is_conflict_free(&self) -> bool {
        self.choices.iter().enumerate().all(|(i, a)| {
            self.choices[i + 1..]
                .iter()
                .all(|b| !conflicts(&a.section, &b.section))
        })
    }

    /// Choices ordered by day of week, then start time.
    pub fn chronological(&self) -> Vec<&Choice> {
        let mut ordered: Vec<&Choice> = self.choices.iter().collect();
        ordered.sort_by_key(|choice| (choice.section.day().index(), choice.section.start_time()));
        ordered
    }
}
