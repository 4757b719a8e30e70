pub mod clock;
pub mod combination;
pub mod course;
pub mod day;
pub mod draft;
pub mod section;
pub mod student;
