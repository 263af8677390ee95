//! Grade repository, generic over the subject tag.
//!
//! The three grade kinds share one table; every query filters on the
//! `subject` column, so each subject behaves as an independent store with an
//! identical contract.

use crate::models::{Grade, NewGrade, Subject};
use crate::Result;
use sqlx::{PgExecutor, PgPool};

#[derive(Clone)]
pub struct GradeRepository {
    pool: PgPool,
}

impl GradeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a new grade; the store assigns the identifier.
    pub async fn create(&self, subject: Subject, new: &NewGrade) -> Result<Grade> {
        let grade = sqlx::query_as::<_, Grade>(
            r#"
            INSERT INTO grades (subject, student_id, grade)
            VALUES ($1, $2, $3)
            RETURNING id, student_id, grade
            "#,
        )
        .bind(subject.as_str())
        .bind(new.student_id)
        .bind(new.grade)
        .fetch_one(&self.pool)
        .await?;

        Ok(grade)
    }

    pub async fn find_by_id(&self, subject: Subject, id: i32) -> Result<Option<Grade>> {
        let grade = sqlx::query_as::<_, Grade>(
            "SELECT id, student_id, grade
             FROM grades
             WHERE subject = $1 AND id = $2",
        )
        .bind(subject.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(grade)
    }

    /// All grades of one subject for one student, in the store's native
    /// order (ascending identifier).
    pub async fn find_by_student_id(
        &self,
        subject: Subject,
        student_id: i32,
    ) -> Result<Vec<Grade>> {
        let grades = sqlx::query_as::<_, Grade>(
            "SELECT id, student_id, grade
             FROM grades
             WHERE subject = $1 AND student_id = $2
             ORDER BY id",
        )
        .bind(subject.as_str())
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(grades)
    }

    pub async fn delete_by_id(&self, subject: Subject, id: i32) -> Result<u64> {
        let result = sqlx::query("DELETE FROM grades WHERE subject = $1 AND id = $2")
            .bind(subject.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Delete every grade of one subject referencing a student. Takes an
    /// executor so the orchestration service can run the cascade inside a
    /// single transaction.
    pub async fn delete_by_student_id<'e>(
        executor: impl PgExecutor<'e>,
        subject: Subject,
        student_id: i32,
    ) -> Result<u64> {
        let result = sqlx::query("DELETE FROM grades WHERE subject = $1 AND student_id = $2")
            .bind(subject.as_str())
            .bind(student_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
