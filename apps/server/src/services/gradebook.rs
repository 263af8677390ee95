//! Student/grade orchestration - validation gates and store coordination.
//!
//! Every operation is a stateless transformation over persisted state.
//! Validation failures surface as `false`/`None` return values rather than
//! errors; only store-level failures propagate as `Err`.

use crate::{
    db::{GradeRepository, StudentRepository},
    models::{NewGrade, NewStudent, Student, StudentGradebook, StudentViewModel, Subject},
    services::average::grade_point_average,
    Result,
};
use sqlx::PgPool;

/// Inclusive bounds for an acceptable grade value.
pub const GRADE_MIN: f64 = 0.0;
pub const GRADE_MAX: f64 = 100.0;

pub struct GradebookService {
    pool: PgPool,
    students: StudentRepository,
    grades: GradeRepository,
}

impl GradebookService {
    pub fn new(pool: PgPool, students: StudentRepository, grades: GradeRepository) -> Self {
        Self {
            pool,
            students,
            grades,
        }
    }

    /// Create and persist a student. No email uniqueness check is performed
    /// at this layer.
    pub async fn create_student(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<Student> {
        let new = NewStudent {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
        };
        let student = self.students.create(&new).await?;

        tracing::debug!(student_id = student.id, "created student");
        Ok(student)
    }

    /// Existence gate used before grade creation, deletion, and lookups.
    pub async fn student_exists(&self, id: i32) -> Result<bool> {
        Ok(self.students.find_by_id(id).await?.is_some())
    }

    /// Delete a student and all of their grades.
    ///
    /// A no-op when the student does not exist. The four deletions run in
    /// one transaction so a failure partway leaves no orphaned grade rows.
    pub async fn delete_student(&self, id: i32) -> Result<()> {
        if !self.student_exists(id).await? {
            return Ok(());
        }

        let mut tx = self.pool.begin().await?;
        StudentRepository::delete_by_id(&mut *tx, id).await?;
        for subject in Subject::ALL {
            GradeRepository::delete_by_student_id(&mut *tx, subject, id).await?;
        }
        tx.commit().await?;

        tracing::debug!(student_id = id, "deleted student and grades");
        Ok(())
    }

    pub async fn list_students(&self) -> Result<Vec<Student>> {
        self.students.find_all().await
    }

    /// Create a grade for a student.
    ///
    /// Returns `false`, with no side effect, when the student does not exist
    /// or the value falls outside [0, 100].
    pub async fn create_grade(&self, grade: f64, student_id: i32, subject: Subject) -> Result<bool> {
        if !self.student_exists(student_id).await? {
            return Ok(false);
        }
        if !(GRADE_MIN..=GRADE_MAX).contains(&grade) {
            return Ok(false);
        }

        let new = NewGrade { student_id, grade };
        let created = self.grades.create(subject, &new).await?;

        tracing::debug!(grade_id = created.id, student_id, %subject, "created grade");
        Ok(true)
    }

    /// Delete a grade, returning the owning student's identifier, or `None`
    /// when no grade of that subject has the given identifier.
    pub async fn delete_grade(&self, id: i32, subject: Subject) -> Result<Option<i32>> {
        let Some(grade) = self.grades.find_by_id(subject, id).await? else {
            return Ok(None);
        };

        self.grades.delete_by_id(subject, id).await?;

        tracing::debug!(grade_id = id, student_id = grade.student_id, %subject, "deleted grade");
        Ok(Some(grade.student_id))
    }

    /// Assemble the composite student view, or `None` when the student does
    /// not exist. Grade sequences come back in the store's native order.
    pub async fn student_information(&self, student_id: i32) -> Result<Option<StudentGradebook>> {
        let Some(student) = self.students.find_by_id(student_id).await? else {
            return Ok(None);
        };

        let math_grades = self
            .grades
            .find_by_student_id(Subject::Math, student_id)
            .await?;
        let science_grades = self
            .grades
            .find_by_student_id(Subject::Science, student_id)
            .await?;
        let history_grades = self
            .grades
            .find_by_student_id(Subject::History, student_id)
            .await?;

        Ok(Some(StudentGradebook {
            id: student.id,
            first_name: student.first_name,
            last_name: student.last_name,
            email: student.email,
            math_grades,
            science_grades,
            history_grades,
        }))
    }

    /// Presentation model for the student information page: the composite
    /// view plus a per-subject average, with "N/A" standing in for subjects
    /// that have no grades yet.
    pub async fn student_view_model(&self, student_id: i32) -> Result<Option<StudentViewModel>> {
        let Some(student) = self.student_information(student_id).await? else {
            return Ok(None);
        };

        Ok(Some(build_view_model(student)))
    }
}

fn build_view_model(student: StudentGradebook) -> StudentViewModel {
    let math_average = grade_point_average(&student.math_grades).into();
    let science_average = grade_point_average(&student.science_grades).into();
    let history_average = grade_point_average(&student.history_grades).into();

    StudentViewModel {
        student,
        math_average,
        science_average,
        history_average,
    }
}
