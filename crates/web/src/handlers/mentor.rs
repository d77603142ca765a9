use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Datelike;
use mentorbook_backend::repositories::mentor;
use mentorbook_core::{
    calendar::{Selection, add_months, month_label},
    discovery::{ExperienceLevel, MentorCard, MentorFilter, filter_mentors},
    errors::MentorError,
    models::mentor::MentorRegistrationForm,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{
    MessageResponse, MonthQuery,
    calendar::{CalendarView, calendar_view},
};
use crate::{
    WebState,
    middleware::{
        error_handling::{AppError, registration_failure},
        session::StudentSession,
    },
};

/// Months offered as tabs on a mentor profile
const PROFILE_MONTH_OFFSETS: [i32; 2] = [0, 1];

/// Query string of the mentor list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MentorListQuery {
    pub search: Option<String>,
    pub domain: Option<String>,
    pub experience: Option<String>,
    #[serde(default)]
    pub availability: bool,
}

impl TryFrom<MentorListQuery> for MentorFilter {
    type Error = MentorError;

    fn try_from(query: MentorListQuery) -> Result<Self, Self::Error> {
        let experience = match query.experience.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(level) => Some(level.parse::<ExperienceLevel>()?),
        };

        Ok(MentorFilter {
            search: query.search,
            domain: query.domain,
            experience,
            available_only: query.availability,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthTab {
    pub offset: i32,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentorProfile {
    pub mentor: MentorCard,
    pub email: Option<String>,
    pub headline: String,
    pub month_tabs: Vec<MonthTab>,
    pub calendar: CalendarView,
}

#[axum::debug_handler]
pub async fn list_mentors(
    State(state): State<Arc<WebState>>,
    Query(query): Query<MentorListQuery>,
) -> Result<Json<Vec<MentorCard>>, AppError> {
    let filter = MentorFilter::try_from(query)?;
    let mentors = mentor::list_mentors(&state.backend).await?;

    let cards: Vec<MentorCard> = filter_mentors(&mentors, &filter)
        .into_iter()
        .map(MentorCard::from)
        .collect();
    debug!("{} of {} mentors match {:?}", cards.len(), mentors.len(), filter);

    Ok(Json(cards))
}

#[axum::debug_handler]
pub async fn get_mentor_profile(
    State(state): State<Arc<WebState>>,
    Path(mentor_id): Path<String>,
    Query(query): Query<MonthQuery>,
    session: Option<StudentSession>,
) -> Result<Json<MentorProfile>, AppError> {
    let mentor = mentor::get_mentor(&state.backend, &mentor_id).await?;

    let selection = match &session {
        Some(session) => state.selections.get(session.student_id(), &mentor_id).await,
        None => Selection::none(),
    };

    let today = state.clock.today();
    let month_tabs = PROFILE_MONTH_OFFSETS
        .iter()
        .map(|&offset| {
            let (year, month) = add_months(today.year(), today.month(), offset);
            MonthTab {
                offset,
                label: month_label(year, month),
            }
        })
        .collect();

    let calendar = calendar_view(&state, &mentor, query.month, &selection);

    Ok(Json(MentorProfile {
        mentor: MentorCard::from(&mentor),
        email: mentor.email.clone(),
        headline: mentor.headline(),
        month_tabs,
        calendar,
    }))
}

#[axum::debug_handler]
pub async fn register_mentor(
    State(state): State<Arc<WebState>>,
    Json(form): Json<MentorRegistrationForm>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let record = form.into_record()?;

    mentor::create_mentor(&state.backend, &record)
        .await
        .map_err(registration_failure)?;
    info!("Registered mentor {}", record.email);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(
            "Registration successful! You can now log in.",
        )),
    ))
}
