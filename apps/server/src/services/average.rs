//! Grade aggregation.

use crate::models::Grade;

/// Unweighted arithmetic mean of the grade values.
///
/// Returns `None` for an empty sequence: an average over zero grades is
/// meaningless, and callers render the absence as "N/A" instead of a silent
/// zero.
pub fn grade_point_average(grades: &[Grade]) -> Option<f64> {
    if grades.is_empty() {
        return None;
    }

    let sum: f64 = grades.iter().map(|g| g.grade).sum();
    Some(sum / grades.len() as f64)
}
