//! Product model and field validation.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A financial product in the catalog.
///
/// Field names match the wire format of the product API
/// (`date_release`, `date_revision` as ISO dates).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product id, 3-10 characters of `[a-z0-9-]`.
    pub id: String,
    /// Display name, 5-100 characters.
    pub name: String,
    /// Description, 10-200 characters.
    pub description: String,
    /// Logo URL.
    pub logo: String,
    /// Release date.
    pub date_release: NaiveDate,
    /// Revision date, exactly one year after release.
    pub date_revision: NaiveDate,
}

impl Product {
    /// Validates all fields against the catalog rules.
    ///
    /// `today` is passed in rather than read from the clock so the
    /// release-date rule is deterministic under test.
    pub fn validate(&self, today: NaiveDate) -> Result<(), ValidationError> {
        let id_ok = (3..=10).contains(&self.id.len())
            && self
                .id
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !id_ok {
            return Err(ValidationError::InvalidId);
        }

        if !(5..=100).contains(&self.name.chars().count()) {
            return Err(ValidationError::InvalidName);
        }

        if !(10..=200).contains(&self.description.chars().count()) {
            return Err(ValidationError::InvalidDescription);
        }

        if !is_url(&self.logo) {
            return Err(ValidationError::InvalidLogo);
        }

        if self.date_release < today {
            return Err(ValidationError::ReleaseInPast);
        }

        if Some(self.date_revision) != plus_one_year(self.date_release) {
            return Err(ValidationError::RevisionNotPlusOneYear);
        }

        Ok(())
    }

    /// The revision date implied by a release date: exactly one year later.
    /// Feb 29 clamps to Feb 28 in the following year.
    pub fn revision_for(release: NaiveDate) -> Option<NaiveDate> {
        plus_one_year(release)
    }
}

fn plus_one_year(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(12))
}

/// Minimal absolute-URL shape check: `scheme://rest` with an alphabetic
/// scheme and a non-empty remainder.
fn is_url(s: &str) -> bool {
    let Some((scheme, rest)) = s.split_once("://") else {
        return false;
    };
    let scheme_ok = !scheme.is_empty()
        && scheme.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-'));
    scheme_ok && !rest.is_empty()
}
