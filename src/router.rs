use axum::{
    Router,
    routing::{get, put},
};
use tower_http::trace::TraceLayer;

use crate::db::StudentsStorage;
use crate::handlers::students::{create_student, delete_student, list_students, update_student};
use crate::middleware::cors_layer;

#[derive(Clone)]
pub struct StudentsState {
    pub storage: StudentsStorage,
}

impl StudentsState {
    pub fn new(storage: StudentsStorage) -> Self {
        Self { storage }
    }
}

pub fn students_router(state: StudentsState) -> Router {
    Router::new()
        .route("/api/students", get(list_students).post(create_student))
        .route(
            "/api/students/{id}",
            put(update_student).delete(delete_student),
        )
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
