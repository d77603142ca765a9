//! # Mentorbook Web
//!
//! The web crate is the backend-for-frontend of the Mentorbook booking client.
//! It exposes JSON endpoints for mentor discovery, the availability calendar,
//! day selection and booking submission, and forwards persistence to the
//! external mentor/booking service through `mentorbook-backend`.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate requests into calendar and backend operations
//! - **Middleware**: Error mapping and student session extraction
//! - **Config**: Handle environment and application configuration
//!
//! The only state held here is each student's current day selection. Mentors,
//! slots and bookings always come fresh from the backend.

/// Configuration module for web settings
pub mod config;
/// Request handlers that implement the booking flow
pub mod handlers;
/// Middleware for error mapping and sessions
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;
/// Bounded store of pending day selections
pub mod selection_store;

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method, header},
};
use eyre::Result;
use mentorbook_backend::BackendClient;
use mentorbook_core::clock::Clock;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::{middleware::session::STUDENT_HEADER, selection_store::SelectionStore};

/// Shared application state that is accessible to all request handlers
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use mentorbook_core::clock::SystemClock;
/// use mentorbook_web::WebState;
///
/// fn example() -> eyre::Result<()> {
///     let backend = mentorbook_backend::create_client("http://localhost:5000/api")?;
///     let state = Arc::new(WebState::new(backend, Arc::new(SystemClock::default())));
///     let _app = mentorbook_web::app(state, None);
///     Ok(())
/// }
/// ```
pub struct WebState {
    /// Client for the external mentor/booking service
    pub backend: BackendClient,

    /// Source of "today" for calendar projection
    pub clock: Arc<dyn Clock>,

    /// Pending day selection of each student
    pub selections: SelectionStore,
}

impl WebState {
    pub fn new(backend: BackendClient, clock: Arc<dyn Clock>) -> Self {
        Self::with_selection_store(backend, clock, SelectionStore::default())
    }

    pub fn with_selection_store(
        backend: BackendClient,
        clock: Arc<dyn Clock>,
        selections: SelectionStore,
    ) -> Self {
        Self {
            backend,
            clock,
            selections,
        }
    }
}

/// Builds the application router with all routes and layers
///
/// CORS is only applied when `cors_origins` is given. Origins that do not
/// parse as header values are skipped with a warning.
pub fn app(state: Arc<WebState>, cors_origins: Option<&[String]>) -> Router {
    let app = Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Mentor discovery, calendar and booking endpoints
        .merge(routes::mentor::routes())
        // Student registration and history endpoints
        .merge(routes::student::routes())
        // Attach shared state to all routes
        .with_state(state);

    match cors_origins {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin {}", origin);
                None
            }
        })
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static(STUDENT_HEADER),
        ])
        .allow_origin(allowed)
        .allow_credentials(true)
}

/// Starts the web server with the provided configuration and state
///
/// # Arguments
///
/// * `config` - Web configuration including host, port, and other settings
/// * `state` - Shared state holding the backend client and clock
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use mentorbook_core::clock::SystemClock;
/// use mentorbook_web::{WebState, config::WebConfig, start_server};
///
/// async fn example() -> eyre::Result<()> {
///     let config = WebConfig::from_env()?;
///     let backend = mentorbook_backend::create_client(&config.backend_url)?;
///     let clock = Arc::new(SystemClock::new(config.display_timezone));
///     start_server(config, Arc::new(WebState::new(backend, clock))).await
/// }
/// ```
pub async fn start_server(config: config::WebConfig, state: Arc<WebState>) -> Result<()> {
    let app = app(state, config.cors_origins.as_deref()).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    info!("Forwarding to backend at {}", config.backend_url);
    axum::serve(listener, app).await?;

    Ok(())
}
