use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of one search submission, sent as `{city, checkIn, checkOut}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub city: String,
    pub check_in: String,
    pub check_out: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    City,
    CheckIn,
    CheckOut,
}

impl FormField {
    pub const ALL: [Self; 3] = [Self::City, Self::CheckIn, Self::CheckOut];

    pub fn label(self) -> &'static str {
        match self {
            Self::City => "City",
            Self::CheckIn => "Check-in",
            Self::CheckOut => "Check-out",
        }
    }

    fn is_date(self) -> bool {
        matches!(self, Self::CheckIn | Self::CheckOut)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "city" => Ok(Self::City),
            "checkin" => Ok(Self::CheckIn),
            "checkout" => Ok(Self::CheckOut),
            other => Err(format!("unknown field '{other}'")),
        }
    }
}

/// Why a submission was refused before any request went out.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("{0} is required")]
    MissingField(FormField),

    #[error("{field} must be a date in YYYY-MM-DD format, got '{value}'")]
    InvalidDate { field: FormField, value: String },

    #[error("a search is already in progress")]
    AlreadyLoading,
}

/// Editable field state behind the search form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub city: String,
    pub check_in: String,
    pub check_out: String,
}

impl SearchForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::City => &self.city,
            FormField::CheckIn => &self.check_in,
            FormField::CheckOut => &self.check_out,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::City => &mut self.city,
            FormField::CheckIn => &mut self.check_in,
            FormField::CheckOut => &mut self.check_out,
        };
        *slot = value.into();
    }

    /// Checks the required fields and snapshots them into a query.
    ///
    /// Dates must look like what a native date input produces. Their order is
    /// left to the server.
    pub fn to_query(&self) -> std::result::Result<SearchQuery, SubmitRejected> {
        for field in FormField::ALL {
            let value = self.get(field).trim();
            if value.is_empty() {
                return Err(SubmitRejected::MissingField(field));
            }
            if field.is_date() && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
                return Err(SubmitRejected::InvalidDate {
                    field,
                    value: value.to_string(),
                });
            }
        }

        Ok(SearchQuery {
            city: self.city.trim().to_string(),
            check_in: self.check_in.trim().to_string(),
            check_out: self.check_out.trim().to_string(),
        })
    }
}
