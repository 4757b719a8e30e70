//! On-disk shapes of the data file.
//!
//! ```json
//! {
//!   "s123": {
//!     "courses": {
//!       "Math": [["Monday", "09:00", "10:30"], ["Wednesday", "09:00", "10:30"]]
//!     }
//!   }
//! }
//! ```
//!
//! Students are keyed by id. Each student's `courses` object keeps the order
//! the courses were saved in, which is the order schedules are generated in.
//!
//! Entries are decoded one student at a time. A damaged entry only affects
//! that student; every other entry is carried through a save byte for byte.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveTime;
use coursesched_core::errors::{ScheduleError, ScheduleResult};
use coursesched_core::models::{
    clock::hhmm, course::Course, day::Day, section::Section, student::StudentRecord,
};
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;

/// The whole data file: student id to that student's undecoded entry.
pub type StoredDocument = BTreeMap<String, Box<RawValue>>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredStudent {
    #[serde(default)]
    pub courses: StoredCourses,
}

/// Course name to sections, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredCourses(pub Vec<(String, Vec<StoredSection>)>);

/// `[day, "HH:MM", "HH:MM"]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoredSection(
    pub Day,
    #[serde(with = "hhmm")] pub NaiveTime,
    #[serde(with = "hhmm")] pub NaiveTime,
);

impl From<&Section> for StoredSection {
    fn from(section: &Section) -> Self {
        Self(section.day(), section.start_time(), section.end_time())
    }
}

impl TryFrom<StoredSection> for Section {
    type Error = ScheduleError;

    fn try_from(stored: StoredSection) -> Result<Self, Self::Error> {
        Section::new(stored.0, stored.1, stored.2)
    }
}

impl From<&StudentRecord> for StoredStudent {
    fn from(record: &StudentRecord) -> Self {
        let courses = record
            .list_courses()
            .iter()
            .map(|course| {
                (
                    course.name.clone(),
                    course.sections.iter().map(StoredSection::from).collect(),
                )
            })
            .collect();

        Self {
            courses: StoredCourses(courses),
        }
    }
}

impl StoredStudent {
    pub fn from_raw(raw: &RawValue) -> serde_json::Result<Self> {
        serde_json::from_str(raw.get())
    }

    pub fn to_raw(&self) -> serde_json::Result<Box<RawValue>> {
        serde_json::value::to_raw_value(self)
    }

    /// Validates the stored data and rebuilds the student's record.
    pub fn into_record(self, student_id: &str) -> ScheduleResult<StudentRecord> {
        let courses = self
            .courses
            .0
            .into_iter()
            .map(|(name, sections)| {
                let sections = sections
                    .into_iter()
                    .map(Section::try_from)
                    .collect::<ScheduleResult<Vec<_>>>()?;
                Course::new(name, sections)
            })
            .collect::<ScheduleResult<Vec<_>>>()?;

        StudentRecord::with_courses(student_id, courses)
    }
}

impl Serialize for StoredCourses {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, sections) in &self.0 {
            map.serialize_entry(name, sections)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StoredCourses {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(StoredCoursesVisitor)
    }
}

struct StoredCoursesVisitor;

impl<'de> Visitor<'de> for StoredCoursesVisitor {
    type Value = StoredCourses;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of course names to section lists")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut courses: Vec<(String, Vec<StoredSection>)> =
            Vec::with_capacity(access.size_hint().unwrap_or(0));

        while let Some((name, sections)) = access.next_entry::<String, Vec<StoredSection>>()? {
            if courses.iter().any(|(existing, _)| *existing == name) {
                return Err(de::Error::custom(format!("duplicate course '{}'", name)));
            }
            courses.push((name, sections));
        }

        Ok(StoredCourses(courses))
    }
}
