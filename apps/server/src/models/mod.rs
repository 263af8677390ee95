//! Domain models: students, grades, and the composite views built from them.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A college student.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Student fields prior to persistence; the store assigns the identifier.
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Tag distinguishing the three otherwise-identical grade kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Math,
    Science,
    History,
}

impl Subject {
    pub const ALL: [Subject; 3] = [Subject::Math, Subject::Science, Subject::History];

    pub fn as_str(self) -> &'static str {
        match self {
            Subject::Math => "math",
            Subject::Science => "science",
            Subject::History => "history",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subject {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "math" => Ok(Subject::Math),
            "science" => Ok(Subject::Science),
            "history" => Ok(Subject::History),
            other => Err(crate::Error::UnknownSubject(other.to_string())),
        }
    }
}

/// A single grade belonging to one student. The subject is contextual: it is
/// carried by the query, not the row model.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    pub id: i32,
    pub student_id: i32,
    pub grade: f64,
}

/// Grade fields prior to persistence; the store assigns the identifier.
#[derive(Debug, Clone)]
pub struct NewGrade {
    pub student_id: i32,
    pub grade: f64,
}

/// Read-only aggregate of a student's identity and their grade sequences,
/// assembled for presentation. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentGradebook {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub math_grades: Vec<Grade>,
    pub science_grades: Vec<Grade>,
    pub history_grades: Vec<Grade>,
}

impl StudentGradebook {
    pub fn grades(&self, subject: Subject) -> &[Grade] {
        match subject {
            Subject::Math => &self.math_grades,
            Subject::Science => &self.science_grades,
            Subject::History => &self.history_grades,
        }
    }
}

/// Per-subject average as shown to clients: a number, or the literal string
/// "N/A" when the student has no grades in that subject.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SubjectAverage {
    Value(f64),
    NotAvailable,
}

impl Serialize for SubjectAverage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SubjectAverage::Value(v) => serializer.serialize_f64(*v),
            SubjectAverage::NotAvailable => serializer.serialize_str("N/A"),
        }
    }
}

impl From<Option<f64>> for SubjectAverage {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) => SubjectAverage::Value(v),
            None => SubjectAverage::NotAvailable,
        }
    }
}

/// Presentation model for the student information page: the composite view
/// plus one average attribute per subject.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentViewModel {
    pub student: StudentGradebook,
    pub math_average: SubjectAverage,
    pub science_average: SubjectAverage,
    pub history_average: SubjectAverage,
}
