use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::{WebState, handlers};

pub fn routes() -> Router<Arc<WebState>> {
    Router::new()
        .route(
            "/api/mentors",
            get(handlers::mentor::list_mentors).post(handlers::mentor::register_mentor),
        )
        .route("/api/mentors/:id", get(handlers::mentor::get_mentor_profile))
        .route(
            "/api/mentors/:id/calendar",
            get(handlers::calendar::get_calendar),
        )
        .route(
            "/api/mentors/:id/selection",
            put(handlers::calendar::select_day),
        )
        .route(
            "/api/mentors/:id/bookings",
            post(handlers::calendar::confirm_booking),
        )
}
