//! Text output for the shell.

use std::fmt::Write;

use coursesched_core::models::{
    clock::format_clock, combination::ScheduleCombination, draft::CourseDraft,
    student::StudentRecord,
};

pub fn render_draft(draft: &CourseDraft) -> String {
    if draft.is_blank() {
        return "No course is being edited, start one with `course <name>`.\n".to_string();
    }

    let mut out = String::new();
    let name = if draft.name.is_empty() {
        "(unnamed)"
    } else {
        draft.name.as_str()
    };
    let _ = writeln!(out, "Course: {}", name);

    if draft.sections.is_empty() {
        out.push_str("   (no sections)\n");
    }
    for (position, section) in draft.sections.iter().enumerate() {
        let _ = writeln!(out, "   {}. {}", position + 1, section);
    }
    out
}

pub fn render_courses(record: &StudentRecord) -> String {
    if record.is_empty() {
        return format!("No courses saved for student {}.\n", record.student_id);
    }

    let mut out = format!("Courses for Student {}:\n\n", record.student_id);
    for course in record.list_courses() {
        let _ = writeln!(out, "Course: {}", course.name);
        for section in &course.sections {
            let _ = writeln!(out, "   - {}", section);
        }
        out.push('\n');
    }
    out
}

/// Lists schedules with each one's sections in weekly order.
pub fn render_schedules(student_id: &str, schedules: &[ScheduleCombination]) -> String {
    let mut out = format!(
        "Found {} valid schedules for student {}.\n\n",
        schedules.len(),
        student_id
    );

    for (number, schedule) in schedules.iter().enumerate() {
        let _ = writeln!(out, "--- Schedule #{} ---", number + 1);
        for choice in schedule.chronological() {
            let _ = writeln!(
                out,
                "{}, {} - {}: {}",
                choice.section.day(),
                format_clock(choice.section.start_time()),
                format_clock(choice.section.end_time()),
                choice.course
            );
        }
        out.push('\n');
    }
    out
}

pub fn render_users(student_ids: &[String]) -> String {
    if student_ids.is_empty() {
        return "No users found.\n".to_string();
    }

    let mut out = String::from("All Users:\n\n");
    for id in student_ids {
        let _ = writeln!(out, "- {}", id);
    }
    out
}
