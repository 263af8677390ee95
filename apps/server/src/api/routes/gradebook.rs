use crate::api::handlers::{grades, students};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn gradebook_routes() -> Router<AppState> {
    Router::new()
        // Students
        .route(
            "/students",
            get(students::list_students).post(students::create_student),
        )
        .route(
            "/students/:id",
            get(students::student_information).delete(students::delete_student),
        )
        // Grades
        .route("/grades", post(grades::create_grade))
        .route("/grades/:subject/:id", delete(grades::delete_grade))
}
