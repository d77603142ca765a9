use mentorbook_core::errors::MentorResult;
use mentorbook_core::models::mentor::{Mentor, MentorRecord, NewMentorRecord};
use tracing::debug;

use crate::BackendClient;

pub async fn list_mentors(client: &BackendClient) -> MentorResult<Vec<Mentor>> {
    let records: Vec<MentorRecord> = client.get_json("/mentors").await?;
    debug!("Fetched {} mentors", records.len());

    Ok(records.into_iter().map(Mentor::from).collect())
}

pub async fn get_mentor(client: &BackendClient, mentor_id: &str) -> MentorResult<Mentor> {
    let path = format!("/mentors/{}", urlencoding::encode(mentor_id));
    let record: MentorRecord = client.get_json(&path).await?;
    debug!(
        "Fetched mentor {} with {} slots",
        record.id,
        record.avaliable_slots.len()
    );

    Ok(record.into())
}

pub async fn create_mentor(client: &BackendClient, mentor: &NewMentorRecord) -> MentorResult<()> {
    debug!("Registering mentor: email={}", mentor.email);
    client.post_unit("/mentors", mentor).await
}
