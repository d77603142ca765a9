use mentorbook_core::errors::MentorResult;
use mentorbook_core::models::booking::{
    BookingHistoryEntry, BookingHistoryResponse, BookingRequest,
};
use tracing::debug;

use crate::BackendClient;

/// Submits a booking. The backend decides whether the slot is still free.
pub async fn create_booking(client: &BackendClient, request: &BookingRequest) -> MentorResult<()> {
    debug!(
        "Submitting booking: mentor={}, student={}, date={}, time={}",
        request.mentor_id, request.student_id, request.date, request.time
    );
    client.post_unit("/bookings", request).await
}

pub async fn get_booking_history(
    client: &BackendClient,
    student_id: &str,
) -> MentorResult<Vec<BookingHistoryEntry>> {
    let path = format!("/bookings/student/{}/history", urlencoding::encode(student_id));
    let response: BookingHistoryResponse = client.get_json(&path).await?;

    Ok(response.bookings.into_iter().map(Into::into).collect())
}
