//! Student repository.

use crate::models::{NewStudent, Student};
use crate::Result;
use sqlx::{PgExecutor, PgPool};

#[derive(Clone)]
pub struct StudentRepository {
    pool: PgPool,
}

impl StudentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a new student; the store assigns the identifier.
    pub async fn create(&self, new: &NewStudent) -> Result<Student> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (first_name, last_name, email)
            VALUES ($1, $2, $3)
            RETURNING id, first_name, last_name, email, created_at
            "#,
        )
        .bind(&new.first_name)
        .bind(&new.last_name)
        .bind(&new.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(student)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Student>> {
        let student = sqlx::query_as::<_, Student>(
            "SELECT id, first_name, last_name, email, created_at
             FROM students
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(student)
    }

    /// All students in the store's native order (ascending identifier).
    pub async fn find_all(&self) -> Result<Vec<Student>> {
        let students = sqlx::query_as::<_, Student>(
            "SELECT id, first_name, last_name, email, created_at
             FROM students
             ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(students)
    }

    /// Delete a student row. Takes an executor so the orchestration service
    /// can run it inside the same transaction as the grade deletions.
    pub async fn delete_by_id<'e>(executor: impl PgExecutor<'e>, id: i32) -> Result<u64> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
