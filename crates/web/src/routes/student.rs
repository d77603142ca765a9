use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{WebState, handlers};

pub fn routes() -> Router<Arc<WebState>> {
    Router::new()
        .route("/api/students", post(handlers::student::register_student))
        .route(
            "/api/students/me/bookings",
            get(handlers::student::booking_history),
        )
}
