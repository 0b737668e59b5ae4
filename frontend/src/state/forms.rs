use std::{collections::BTreeMap, future::Future};

use crate::api::ApiError;

/// Transient banner content. Setting one kind clears the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl MessageState {
    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.success = None;
    }

    pub fn is_empty(&self) -> bool {
        self.success.is_none() && self.error.is_none()
    }
}

/// Per-field validation messages keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    /// Marks `field` invalid when `value` is blank.
    pub fn require(&mut self, field: &'static str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.add(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Editable string-backed state of one entity form.
pub trait FormFields: Clone + Default + 'static {
    type Record: Clone + 'static;
    type Input: 'static;

    fn from_record(record: &Self::Record) -> Self;

    /// Checks required fields and builds the request body.
    fn validate(&self) -> Result<Self::Input, FieldErrors>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    Invalid(FieldErrors),
    Api(ApiError),
}

impl From<ApiError> for SubmitError {
    fn from(error: ApiError) -> Self {
        SubmitError::Api(error)
    }
}

/// Validates `fields` and only then hands the input to `save`.
pub async fn submit_form<F, S, Fut, T>(fields: &F, save: S) -> Result<T, SubmitError>
where
    F: FormFields,
    S: FnOnce(F::Input) -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let input = fields.validate().map_err(SubmitError::Invalid)?;
    Ok(save(input).await?)
}

pub fn parse_positive(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|n| *n > 0)
}

pub fn looks_like_email(raw: &str) -> bool {
    let raw = raw.trim();
    match raw.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}
