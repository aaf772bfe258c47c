//! Shared validation helpers for inbound HTTP adapters.

use chrono::NaiveDate;
use serde_json::json;

use crate::domain::{Error, UserId};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidUserId,
    InvalidDateFilter,
    InvalidDate,
    InvalidLimit,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidUserId => "invalid_user_id",
            ErrorCode::InvalidDateFilter => "invalid_date_filter",
            ErrorCode::InvalidDate => "invalid_date",
            ErrorCode::InvalidLimit => "invalid_limit",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

fn field_error(field: FieldName, message: String, code: ErrorCode) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

fn value_error(field: FieldName, message: String, code: ErrorCode, value: &str) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "value": value,
        "code": code.as_str(),
    }))
}

/// Require a field to be present in the request body.
pub(crate) fn require_field<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| {
        let name = field.as_str();
        field_error(
            field,
            format!("missing required field: {name}"),
            ErrorCode::MissingField,
        )
    })
}

/// Parse a path segment into a [`UserId`].
pub(crate) fn parse_user_id(value: &str) -> Result<UserId, Error> {
    UserId::parse(value).map_err(|_| {
        value_error(
            FieldName::new("id"),
            "id must be a valid user identifier".to_owned(),
            ErrorCode::InvalidUserId,
            value,
        )
    })
}

fn parse_calendar_date(value: &str, field: FieldName, code: ErrorCode) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        let name = field.as_str();
        value_error(
            field,
            format!("{name} must be a calendar date formatted YYYY-MM-DD"),
            code,
            value,
        )
    })
}

/// Parse an optional `from`/`to` query parameter.
///
/// A malformed value is an explicit error rather than a filter that matches
/// nothing.
pub(crate) fn parse_date_filter(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<NaiveDate>, Error> {
    value
        .map(|raw| parse_calendar_date(&raw, field, ErrorCode::InvalidDateFilter))
        .transpose()
}

/// Parse an optional exercise date from a request body.
///
/// Blank input counts as absent so form submissions with an empty date
/// field fall back to the default.
pub(crate) fn parse_date_input(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<NaiveDate>, Error> {
    value
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| parse_calendar_date(&raw, field, ErrorCode::InvalidDate))
        .transpose()
}

/// Parse an optional `limit` query parameter into a result cap.
pub(crate) fn parse_limit(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<usize>, Error> {
    value
        .map(|raw| {
            raw.trim().parse::<usize>().map_err(|_| {
                let name = field.as_str();
                value_error(
                    field,
                    format!("{name} must be a non-negative integer"),
                    ErrorCode::InvalidLimit,
                    &raw,
                )
            })
        })
        .transpose()
}
