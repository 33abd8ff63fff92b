use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Base path of the author resources. An author's canonical URL is this
/// path followed by its id.
pub const AUTHORS_PATH: &str = "/authors";

/// A persisted author.
///
/// `first_name` and `family_name` are never empty for a stored author; the
/// store assigns `id` on insert and it never changes afterwards. Derived
/// values (`full_name`, `url`, formatted dates) are computed on read and are
/// not part of the stored record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    pub id: String,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

/// A validated author that has not been stored yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewAuthor {
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

impl NewAuthor {
    pub fn with_id(self, id: String) -> Author {
        Author {
            id,
            first_name: self.first_name,
            family_name: self.family_name,
            date_of_birth: self.date_of_birth,
            date_of_death: self.date_of_death,
        }
    }
}

impl Author {
    /// `"Family, First"`.
    pub fn full_name(&self) -> String {
        format!("{}, {}", self.family_name, self.first_name)
    }

    pub fn url(&self) -> String {
        author_url(&self.id)
    }

    pub fn date_of_birth_formatted(&self) -> String {
        self.date_of_birth.map(format_date).unwrap_or_default()
    }

    pub fn date_of_death_formatted(&self) -> String {
        self.date_of_death.map(format_date).unwrap_or_default()
    }

    /// `"June 5th, 1900 - May 1st, 1980"`, with either side left blank when
    /// unknown. Empty when neither date is known.
    pub fn lifespan(&self) -> String {
        if self.date_of_birth.is_none() && self.date_of_death.is_none() {
            return String::new();
        }
        format!(
            "{} - {}",
            self.date_of_birth_formatted(),
            self.date_of_death_formatted()
        )
        .trim()
        .to_string()
    }
}

pub fn author_url(id: &str) -> String {
    format!("{AUTHORS_PATH}/{id}")
}

/// Formats a date as `"MMMM Do, YYYY"`, e.g. `"December 16th, 1775"`.
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        date.day(),
        ordinal_suffix(date.day()),
        date.year()
    )
}

fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Render-ready projection of an [`Author`] with every derived value
/// resolved. Dates are kept in ISO form for form inputs alongside their
/// human-readable rendering.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorView {
    pub id: String,
    pub first_name: String,
    pub family_name: String,
    pub full_name: String,
    pub url: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
    pub date_of_birth_formatted: String,
    pub date_of_death_formatted: String,
    pub lifespan: String,
}

impl From<&Author> for AuthorView {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id.clone(),
            first_name: author.first_name.clone(),
            family_name: author.family_name.clone(),
            full_name: author.full_name(),
            url: author.url(),
            date_of_birth: author.date_of_birth,
            date_of_death: author.date_of_death,
            date_of_birth_formatted: author.date_of_birth_formatted(),
            date_of_death_formatted: author.date_of_death_formatted(),
            lifespan: author.lifespan(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn austen() -> Author {
        Author {
            id: "a1".to_string(),
            first_name: "Jane".to_string(),
            family_name: "Austen".to_string(),
            date_of_birth: Some(date(1775, 12, 16)),
            date_of_death: Some(date(1817, 7, 18)),
        }
    }

    #[test]
    fn full_name_is_family_then_first() {
        assert_eq!(austen().full_name(), "Austen, Jane");
    }

    #[test]
    fn url_contains_id() {
        assert_eq!(austen().url(), "/authors/a1");
    }

    #[test]
    fn formats_own_dates() {
        let author = austen();
        assert_eq!(author.date_of_birth_formatted(), "December 16th, 1775");
        assert_eq!(author.date_of_death_formatted(), "July 18th, 1817");
        assert_eq!(
            author.lifespan(),
            "December 16th, 1775 - July 18th, 1817"
        );
    }

    #[test]
    fn missing_dates_format_empty() {
        let author = Author {
            date_of_birth: None,
            date_of_death: None,
            ..austen()
        };
        assert_eq!(author.date_of_birth_formatted(), "");
        assert_eq!(author.date_of_death_formatted(), "");
        assert_eq!(author.lifespan(), "");

        let living = Author {
            date_of_death: None,
            ..austen()
        };
        assert_eq!(living.lifespan(), "December 16th, 1775 -");
    }

    #[test]
    fn ordinal_suffixes() {
        let cases = [
            (1, "1st"),
            (2, "2nd"),
            (3, "3rd"),
            (4, "4th"),
            (11, "11th"),
            (12, "12th"),
            (13, "13th"),
            (21, "21st"),
            (22, "22nd"),
            (23, "23rd"),
            (30, "30th"),
            (31, "31st"),
        ];
        for (day, expected) in cases {
            assert_eq!(format!("{day}{}", ordinal_suffix(day)), expected);
        }
    }

    #[test]
    fn view_serializes_derived_values() {
        let view = AuthorView::from(&austen());
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["full_name"], "Austen, Jane");
        assert_eq!(json["url"], "/authors/a1");
        assert_eq!(json["date_of_birth"], "1775-12-16");
        assert_eq!(json["date_of_birth_formatted"], "December 16th, 1775");
    }
}
