use serde::{Deserialize, Serialize};

/// Raw payload of the author creation form (`POST /authors`).
///
/// Every field defaults to an empty string so a missing input behaves the
/// same as an empty one. The same struct is echoed back into the form when
/// validation rejects the submission.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct AuthorForm {
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: String,
    pub date_of_death: String,
}
