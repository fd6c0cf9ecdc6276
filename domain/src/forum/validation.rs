//! Field validation for forum posts.
//!
//! The store trusts its callers, so blank checks happen here before any
//! repository call. Every failing field is reported, not just the first.

use crate::core::error::DomainError;
use crate::core::string::is_blank;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const AUTHOR_BLANK_MESSAGE: &str = "Author should not be blank";
pub const MESSAGE_BLANK_MESSAGE: &str = "Message should not be blank";

/// What kind of post is being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostKind {
    Question,
    Reply,
}

impl PostKind {
    pub fn object_name(&self) -> &'static str {
        match self {
            PostKind::Question => "question",
            PostKind::Reply => "reply",
        }
    }
}

/// One rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_value: Option<String>,
    pub message: String,
}

impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field_name = Some(field.into());
        self
    }

    pub fn with_object(mut self, object: impl Into<String>) -> Self {
        self.object_name = Some(object.into());
        self
    }

    pub fn with_rejected(mut self, value: impl Into<String>) -> Self {
        self.rejected_value = Some(value.into());
        self
    }

    pub fn with_expected(mut self, value: impl Into<String>) -> Self {
        self.expected_value = Some(value.into());
        self
    }
}

impl From<DomainError> for FieldError {
    fn from(err: DomainError) -> Self {
        let field = match err {
            DomainError::InvalidQuestionId(_) => "questionId",
        };
        FieldError::new(err.to_string())
            .with_field(field)
            .with_rejected(err.rejected_value())
            .with_expected("unsigned integer")
    }
}

/// A non-empty list of rejected fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", .0.iter().map(|e| e.message.as_str()).collect::<Vec<_>>().join("; "))]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn single(error: FieldError) -> Self {
        Self(vec![error])
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.0
    }
}

impl From<DomainError> for ValidationErrors {
    fn from(err: DomainError) -> Self {
        Self::single(err.into())
    }
}

/// Author and message that passed the blank checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent {
    author: String,
    message: String,
}

impl PostContent {
    /// Validate both fields, collecting every failure.
    pub fn try_new(
        kind: PostKind,
        author: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, ValidationErrors> {
        let author = author.into();
        let message = message.into();
        let mut errors = Vec::new();

        if is_blank(&author) {
            errors.push(
                FieldError::new(AUTHOR_BLANK_MESSAGE)
                    .with_field("author")
                    .with_object(kind.object_name())
                    .with_rejected(author.as_str()),
            );
        }
        if is_blank(&message) {
            errors.push(
                FieldError::new(MESSAGE_BLANK_MESSAGE)
                    .with_field("message")
                    .with_object(kind.object_name())
                    .with_rejected(message.as_str()),
            );
        }

        if errors.is_empty() {
            Ok(Self { author, message })
        } else {
            Err(ValidationErrors(errors))
        }
    }

    /// Consume and return `(author, message)`
    pub fn into_parts(self) -> (String, String) {
        (self.author, self.message)
    }
}
