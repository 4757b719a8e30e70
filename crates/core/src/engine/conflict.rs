use crate::models::{course::Course, section::Section};

/// Whether two sections meet on the same day at overlapping times.
///
/// Intervals are compared as open intervals, so a section ending at 10:00
/// does not conflict with one starting at 10:00.
pub fn conflicts(a: &Section, b: &Section) -> bool {
    a.day() == b.day() && a.start_time() < b.end_time() && b.start_time() < a.end_time()
}

/// Finds the first section of another course that `candidate` overlaps.
///
/// Courses named like `course_being_edited` are skipped: alternative
/// sections of the same course never constrain each other.
pub fn find_conflict<'a, I>(
    candidate: &Section,
    course_being_edited: &Course,
    all_courses: I,
) -> Option<(&'a Course, &'a Section)>
where
    I: IntoIterator<Item = &'a Course>,
{
    all_courses
        .into_iter()
        .filter(|course| course.name != course_being_edited.name)
        .flat_map(|course| course.sections.iter().map(move |section| (course, section)))
        .find(|(_, existing)| conflicts(candidate, existing))
}

pub fn has_conflict_with_existing(
    candidate: &Section,
    course_being_edited: &Course,
    all_courses: &[Course],
) -> bool {
    find_conflict(candidate, course_being_edited, all_courses).is_some()
}
