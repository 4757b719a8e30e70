use tracing::debug;

use crate::engine::conflict::conflicts;
use crate::models::{
    combination::{Choice, ScheduleCombination},
    course::Course,
    section::Section,
};

/// Generates every conflict-free schedule that takes one section per course.
///
/// Combinations come out in lexicographic order of (course order, section
/// order), the same order a filtered Cartesian product would give. The walk
/// is depth-first and abandons a prefix as soon as its newest section
/// conflicts with an earlier one, so the full product is never built.
///
/// Courses without sections cannot contribute a choice and are skipped. When
/// no course has a section the result is empty.
pub fn generate_schedules(courses: &[Course]) -> Vec<ScheduleCombination> {
    let candidates: Vec<&Course> = courses
        .iter()
        .filter(|course| {
            if !course.has_sections() {
                debug!(course = %course.name, "Skipping course without sections");
            }
            course.has_sections()
        })
        .collect();

    if candidates.is_empty() {
        return Vec::new();
    }

    let mut found = Vec::new();
    let mut chosen = Vec::with_capacity(candidates.len());
    extend(&candidates, &mut chosen, &mut found);

    debug!(
        courses = candidates.len(),
        schedules = found.len(),
        "Generated schedule combinations"
    );

    found
}

fn extend<'a>(
    courses: &[&'a Course],
    chosen: &mut Vec<&'a Section>,
    found: &mut Vec<ScheduleCombination>,
) {
    let Some(&course) = courses.get(chosen.len()) else {
        let choices = courses
            .iter()
            .zip(chosen.iter())
            .map(|(course, section)| Choice {
                course: course.name.clone(),
                section: **section,
            })
            .collect();
        found.push(ScheduleCombination::new(choices));
        return;
    };

    for section in &course.sections {
        if chosen.iter().any(|earlier| conflicts(earlier, section)) {
            continue;
        }
        chosen.push(section);
        extend(courses, chosen, found);
        chosen.pop();
    }
}
