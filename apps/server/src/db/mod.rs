//! Persistence layer: repositories over the relational store.

pub mod grades;
pub mod students;

pub use grades::GradeRepository;
pub use students::StudentRepository;
