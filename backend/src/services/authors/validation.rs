//! Validation and sanitization of the author creation form.
//!
//! The whole form is checked in one ordered pass before anything is stored.
//! For each field the first failing rule produces the error; later rules
//! for that field are skipped. Names are trimmed and HTML-escaped, dates are
//! parsed into `NaiveDate`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use common::model::author::NewAuthor;
use common::requests::AuthorForm;
use regex::Regex;
use serde::Serialize;

use crate::error::AppResult;

pub const MAX_NAME_LEN: usize = 100;

/// One failed rule, shown next to the re-rendered form.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// A submission that did not pass validation. `form` carries the sanitized
/// values so the user does not have to retype them.
#[derive(Debug, Clone)]
pub struct Rejected {
    pub form: AuthorForm,
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Clone)]
pub struct AuthorValidator {
    name_re: Regex,
    date_re: Regex,
}

impl AuthorValidator {
    pub fn new() -> AppResult<Self> {
        Ok(Self {
            name_re: Regex::new(r"^[A-Za-z0-9]+$")?,
            date_re: Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}(?:$|T)")?,
        })
    }

    pub fn validate(&self, form: AuthorForm) -> Result<NewAuthor, Rejected> {
        let mut errors = Vec::new();

        let first_name = form.first_name.trim();
        let family_name = form.family_name.trim();
        let date_of_birth = form.date_of_birth.trim();
        let date_of_death = form.date_of_death.trim();

        self.check_name("first_name", "First name", first_name, &mut errors);
        self.check_name("family_name", "Family name", family_name, &mut errors);
        let date_of_birth_parsed =
            self.check_date("date_of_birth", "Invalid date of birth", date_of_birth, &mut errors);
        let date_of_death_parsed =
            self.check_date("date_of_death", "Invalid date of death", date_of_death, &mut errors);

        let first_name = handlebars::html_escape(first_name);
        let family_name = handlebars::html_escape(family_name);

        if errors.is_empty() {
            Ok(NewAuthor {
                first_name,
                family_name,
                date_of_birth: date_of_birth_parsed,
                date_of_death: date_of_death_parsed,
            })
        } else {
            Err(Rejected {
                form: AuthorForm {
                    first_name,
                    family_name,
                    date_of_birth: echo_date(date_of_birth_parsed, date_of_birth),
                    date_of_death: echo_date(date_of_death_parsed, date_of_death),
                },
                errors,
            })
        }
    }

    fn check_name(
        &self,
        field: &'static str,
        label: &str,
        value: &str,
        errors: &mut Vec<FieldError>,
    ) {
        let message = if value.is_empty() {
            format!("{label} must be specified.")
        } else if value.chars().count() > MAX_NAME_LEN {
            format!("{label} must be at most {MAX_NAME_LEN} characters.")
        } else if !self.name_re.is_match(value) {
            format!("{label} has non-alphanumeric characters.")
        } else {
            return;
        };
        errors.push(FieldError { field, message });
    }

    /// Empty input means "unknown" and is accepted.
    fn check_date(
        &self,
        field: &'static str,
        message: &str,
        value: &str,
        errors: &mut Vec<FieldError>,
    ) -> Option<NaiveDate> {
        if value.is_empty() {
            return None;
        }
        let parsed = self.parse_iso8601_date(value);
        if parsed.is_none() {
            errors.push(FieldError {
                field,
                message: message.to_string(),
            });
        }
        parsed
    }

    /// Accepts a zero-padded calendar date (`1775-12-16`), optionally
    /// followed by a local time (`T10:00`, `T10:00:00`) or an RFC 3339 time
    /// with offset. Only the date is kept.
    fn parse_iso8601_date(&self, value: &str) -> Option<NaiveDate> {
        if !self.date_re.is_match(value) {
            return None;
        }
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .or_else(|| {
                DateTime::parse_from_rfc3339(value)
                    .ok()
                    .map(|dt| dt.date_naive())
            })
            .or_else(|| {
                ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
                    .iter()
                    .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                    .map(|dt| dt.date())
            })
    }
}

/// Parsed dates go back to the form as `YYYY-MM-DD` so a date input can
/// show them; unparsable text is echoed as typed.
fn echo_date(parsed: Option<NaiveDate>, raw: &str) -> String {
    match parsed {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => raw.to_string(),
    }
}
