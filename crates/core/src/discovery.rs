//! Mentor discovery: the search box and filter drop-downs of the mentor list.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::MentorError;
use crate::models::mentor::Mentor;

/// Mentors with at least this many years count as senior.
pub const SENIOR_THRESHOLD_YEARS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Junior,
    Senior,
}

impl ExperienceLevel {
    pub fn matches(self, years: u32) -> bool {
        match self {
            ExperienceLevel::Junior => years < SENIOR_THRESHOLD_YEARS,
            ExperienceLevel::Senior => years >= SENIOR_THRESHOLD_YEARS,
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = MentorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "junior" => Ok(ExperienceLevel::Junior),
            "senior" => Ok(ExperienceLevel::Senior),
            other => Err(MentorError::Validation(format!(
                "Unknown experience level '{other}', expected 'junior' or 'senior'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MentorFilter {
    pub search: Option<String>,
    pub domain: Option<String>,
    pub experience: Option<ExperienceLevel>,
    pub available_only: bool,
}

impl MentorFilter {
    pub fn matches(&self, mentor: &Mentor) -> bool {
        let matches_search = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                mentor.name.to_lowercase().contains(&term)
                    || mentor.bio.to_lowercase().contains(&term)
            }
        };

        let matches_domain = match self.domain.as_deref() {
            None | Some("") => true,
            Some(domain) => mentor.domains.iter().any(|d| d == domain),
        };

        let matches_experience = self
            .experience
            .is_none_or(|level| level.matches(mentor.experience));

        let matches_availability = !self.available_only || mentor.has_availability();

        matches_search && matches_domain && matches_experience && matches_availability
    }
}

pub fn filter_mentors<'a>(mentors: &'a [Mentor], filter: &MentorFilter) -> Vec<&'a Mentor> {
    mentors.iter().filter(|mentor| filter.matches(mentor)).collect()
}

/// Card shown for each mentor in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentorCard {
    pub id: String,
    pub name: String,
    pub initial: Option<char>,
    pub domains: Vec<String>,
    pub skills: Vec<String>,
    pub experience: u32,
    pub bio: String,
    pub slot_count: usize,
}

impl From<&Mentor> for MentorCard {
    fn from(mentor: &Mentor) -> Self {
        Self {
            id: mentor.id.clone(),
            name: mentor.name.clone(),
            initial: mentor.initial(),
            domains: mentor.domains.clone(),
            skills: mentor.skills.clone(),
            experience: mentor.experience,
            bio: mentor.bio.clone(),
            slot_count: mentor.available_slots.len(),
        }
    }
}
