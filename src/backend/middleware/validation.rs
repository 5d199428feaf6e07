/**
 * Request Validation
 *
 * `ValidatedJson<T>` deserializes a JSON body and runs the `validator`
 * rules declared on `T` before the handler sees it. Failures become a 400
 * with one `{field, message}` entry per failing rule.
 *
 * `validator` reports errors in a map, so each schema lists its fields in
 * [`RequestSchema::FIELDS`] to give the response a stable order.
 */

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use chrono::{DateTime, NaiveDate};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::backend::error::BackendError;
use crate::shared::{FieldError, SharedError};

/// A validated request body
pub trait RequestSchema: DeserializeOwned + Validate + Send {
    /// Field names in declaration order
    const FIELDS: &'static [&'static str];
}

/// JSON extractor that also runs validation
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: RequestSchema,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::warn!("Rejected request body: {}", rejection.body_text());
                SharedError::serialization(rejection.body_text())
            })?;

        if let Err(errors) = value.validate() {
            let field_errors = ordered_field_errors(&errors, T::FIELDS);
            tracing::warn!("Validation failed on {} field(s)", field_errors.len());
            return Err(SharedError::validation(field_errors).into());
        }

        Ok(ValidatedJson(value))
    }
}

/// Flatten `errors` into `{field, message}` entries following `order`
///
/// Fields missing from `order` are appended alphabetically.
pub fn ordered_field_errors(errors: &ValidationErrors, order: &[&str]) -> Vec<FieldError> {
    let by_field = errors.field_errors();

    let mut extra: Vec<&str> = by_field
        .keys()
        .map(|k| k.as_ref())
        .filter(|k| !order.contains(k))
        .collect();
    extra.sort_unstable();

    order
        .iter()
        .copied()
        .chain(extra)
        .filter_map(|field| by_field.get(field).map(|errs| (field, errs)))
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                FieldError::new(field, message)
            })
        })
        .collect()
}

/// Parse `YYYY-MM-DD` or an RFC 3339 timestamp
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|d| d.date_naive()))
}

/// `validator` rule for date fields; empty values are left to `length`
pub fn validate_date(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || parse_date(value).is_some() {
        return Ok(());
    }
    Err(ValidationError::new("date").with_message(Cow::Borrowed("Please include a valid date")))
}
