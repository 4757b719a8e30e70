use coursesched_core::commands::EditCommand;
use coursesched_core::errors::{ScheduleError, ScheduleResult};
use coursesched_core::models::{day::Day, section::Section};

/// One line of shell input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Set the active student, loading their saved courses.
    Student(String),
    Save,
    Users,
    Edit(EditCommand),
    Draft,
    Courses,
    Generate,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  student <id>                 load (or start) a student's record
  save                         save the active student now
  users                        list every saved student
  course <name>                start a new course
  add <day> <HH:MM> <HH:MM>    add a section to the course being edited
  rename <name>                rename the course being edited
  remove <n>                   remove section n from the course being edited
  commit                       save/update the course being edited
  edit <name>                  open a saved course for editing
  delete <name>                delete a saved course
  draft                        show the course being edited
  courses                      show all saved courses and sections
  generate                     list every conflict-free schedule
  help                         show this help
  quit                         save and exit
";

/// Parses a line of input. Blank lines yield `None`.
pub fn parse_line(line: &str) -> ScheduleResult<Option<ShellCommand>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    let command = match keyword.to_ascii_lowercase().as_str() {
        "student" => ShellCommand::Student(required(rest, "student <id>")?.to_string()),
        "save" => ShellCommand::Save,
        "users" => ShellCommand::Users,
        "course" => ShellCommand::Edit(EditCommand::StartCourse {
            name: required(rest, "course <name>")?.to_string(),
        }),
        "add" => ShellCommand::Edit(EditCommand::AddSection(parse_section(rest)?)),
        "rename" => ShellCommand::Edit(EditCommand::RenameDraft {
            name: required(rest, "rename <name>")?.to_string(),
        }),
        "remove" => ShellCommand::Edit(EditCommand::RemoveSection(parse_position(rest)?)),
        "commit" => ShellCommand::Edit(EditCommand::SaveCourse),
        "edit" => ShellCommand::Edit(EditCommand::EditCourse {
            name: required(rest, "edit <name>")?.to_string(),
        }),
        "delete" => ShellCommand::Edit(EditCommand::DeleteCourse {
            name: required(rest, "delete <name>")?.to_string(),
        }),
        "draft" => ShellCommand::Draft,
        "courses" => ShellCommand::Courses,
        "generate" => ShellCommand::Generate,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => {
            return Err(ScheduleError::Validation(format!(
                "Unknown command '{}', type `help` for a list",
                other
            )));
        }
    };

    Ok(Some(command))
}

fn required<'a>(argument: &'a str, usage: &str) -> ScheduleResult<&'a str> {
    if argument.is_empty() {
        return Err(ScheduleError::Validation(format!("Usage: {}", usage)));
    }
    Ok(argument)
}

fn parse_section(arguments: &str) -> ScheduleResult<Section> {
    let parts: Vec<&str> = arguments.split_whitespace().collect();
    let [day, start, end] = parts.as_slice() else {
        return Err(ScheduleError::Validation(
            "Usage: add <day> <HH:MM> <HH:MM>".to_string(),
        ));
    };

    Section::parse(day.parse::<Day>()?, start, end)
}

/// Converts a 1-based position to an index.
fn parse_position(argument: &str) -> ScheduleResult<usize> {
    match argument.parse::<usize>() {
        Ok(position) if position >= 1 => Ok(position - 1),
        _ => Err(ScheduleError::Validation("Usage: remove <n>, n >= 1".to_string())),
    }
}
