use mentorbook_core::errors::MentorResult;
use mentorbook_core::models::student::{
    RegisterStudentResponse, Student, StudentRegistrationForm,
};
use tracing::debug;

use crate::BackendClient;

pub async fn create_student(
    client: &BackendClient,
    form: &StudentRegistrationForm,
) -> MentorResult<Student> {
    let response: RegisterStudentResponse = client.post_json("/students", form).await?;
    debug!("Registered student: id={}", response.student_data.id);

    Ok(response.student_data)
}
