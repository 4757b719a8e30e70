pub mod student;

pub use student::{JsonFileStore, StudentRepository};
