//! Registration form checks, run before anything is sent to the backend.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{FieldErrors, MentorResult};
use crate::models::mentor::{
    MentorRegistrationForm, NewMentorRecord, NewSlotRecord, split_list,
};
use crate::models::slot::SlotDate;
use crate::models::student::StudentRegistrationForm;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX pattern is valid")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

fn check_name_and_email(errors: &mut FieldErrors, name: &str, email: &str) {
    if name.trim().is_empty() {
        errors.add("name", "Name is required");
    }
    let email = email.trim();
    if email.is_empty() {
        errors.add("email", "Email is required");
    } else if !is_valid_email(email) {
        errors.add("email", "Email is invalid");
    }
}

impl MentorRegistrationForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_name_and_email(&mut errors, &self.name, &self.email);

        if split_list(&self.domain).is_empty() {
            errors.add("domain", "Domain is required");
        }
        let experience = self.experience.trim();
        if experience.is_empty() {
            errors.add("experience", "Experience is required");
        } else if experience.parse::<u32>().is_err() {
            errors.add("experience", "Experience must be a whole number of years");
        }
        if self.bio.trim().is_empty() {
            errors.add("bio", "Bio is required");
        }
        if split_list(&self.skills).is_empty() {
            errors.add("skills", "Skills are required");
        }

        errors
    }

    /// Validates the form and builds the backend payload.
    ///
    /// Slot drafts missing a date or a time are dropped, as the form never
    /// lets them into the list.
    pub fn into_record(self) -> MentorResult<NewMentorRecord> {
        self.validate().into_result()?;

        let experience = self.experience.trim().parse().unwrap_or_default();
        let avaliable_slots = self
            .available_slots
            .iter()
            .filter(|draft| draft.is_complete())
            .map(|draft| NewSlotRecord {
                date: SlotDate::from(draft.date.trim()),
                time: draft.time.trim().to_string(),
            })
            .collect();

        Ok(NewMentorRecord {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            domain: split_list(&self.domain),
            experience,
            bio: self.bio.trim().to_string(),
            skills: split_list(&self.skills),
            avaliable_slots,
        })
    }
}

impl StudentRegistrationForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_name_and_email(&mut errors, &self.name, &self.email);
        errors
    }

    /// Validates the form and returns it with surrounding whitespace removed.
    pub fn normalized(self) -> MentorResult<StudentRegistrationForm> {
        self.validate().into_result()?;
        Ok(StudentRegistrationForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
        })
    }
}
