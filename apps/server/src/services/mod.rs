//! Business logic layer
//!
//! Services orchestrate operations by coordinating repositories,
//! applying business rules, and managing transactions.

pub mod average;
pub mod gradebook;

pub use gradebook::GradebookService;
