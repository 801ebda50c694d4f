//! Book field validation.
//!
//! Rules live in a static table, one entry per accepted field, and are all
//! evaluated on every call so that a response reports every violation at
//! once. Each failure is carried as a [`validator::ValidationError`] tagged
//! with the wire name of its field.

pub mod isbn;

use std::borrow::Cow;

use chrono::{Datelike, Utc};
use serde::Serialize;
use validator::ValidationError;

use crate::{
    config::IsbnFormat,
    models::{BookInput, NewBook},
};

use isbn::is_valid_isbn;

const BLANK_MESSAGE: &str = "This value should not be blank.";
const UNEXPECTED_MESSAGE: &str = "This field was not expected.";
const NOT_A_NUMBER_MESSAGE: &str = "This value should be a valid number.";
const MIN_PUBLISHED_YEAR: i64 = 0;

/// A single field rule failure
#[derive(Debug, Clone, Serialize)]
pub struct Violation {
    pub field: String,
    #[serde(flatten)]
    pub error: ValidationError,
}

impl Violation {
    pub fn new(field: impl Into<String>, error: ValidationError) -> Self {
        Self {
            field: field.into(),
            error,
        }
    }

    pub fn code(&self) -> &str {
        &self.error.code
    }

    pub fn message(&self) -> Option<&str> {
        self.error.message.as_deref()
    }
}

#[derive(Debug, Clone, Copy)]
enum Rule {
    NotBlank,
    Length { min: u64, max: u64 },
    Isbn,
    PublishedYear,
}

#[derive(Debug)]
struct FieldRules {
    name: &'static str,
    /// Noun used in length messages
    label: &'static str,
    rules: &'static [Rule],
}

const BOOK_FIELDS: &[FieldRules] = &[
    FieldRules {
        name: "title",
        label: "title",
        rules: &[Rule::NotBlank, Rule::Length { min: 3, max: 255 }],
    },
    FieldRules {
        name: "author",
        label: "author name",
        rules: &[Rule::NotBlank, Rule::Length { min: 3, max: 100 }],
    },
    FieldRules {
        name: "isbn",
        label: "isbn",
        rules: &[Rule::NotBlank, Rule::Isbn],
    },
    FieldRules {
        name: "published-year",
        label: "published year",
        rules: &[Rule::NotBlank, Rule::PublishedYear],
    },
    FieldRules {
        name: "genre",
        label: "genre",
        rules: &[Rule::NotBlank, Rule::Length { min: 3, max: 50 }],
    },
];

fn error(code: &'static str, message: String) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Owned(message));
    err
}

fn parse_year(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

impl Rule {
    /// Empty and absent values are only judged by `NotBlank`, except
    /// `Length`, which also rejects a present empty string.
    fn check(
        &self,
        field: &FieldRules,
        value: Option<&str>,
        isbn_format: IsbnFormat,
        current_year: i32,
    ) -> Option<ValidationError> {
        match *self {
            Rule::NotBlank => match value {
                None | Some("") => Some(error("blank", BLANK_MESSAGE.to_string())),
                Some(_) => None,
            },
            Rule::Length { min, max } => {
                let value = value?;
                let length = value.chars().count() as u64;
                let mut err = if length < min {
                    error(
                        "length",
                        format!("The {} must be at least {} characters long", field.label, min),
                    )
                } else if length > max {
                    error(
                        "length",
                        format!("The {} cannot be longer than {} characters", field.label, max),
                    )
                } else {
                    return None;
                };
                err.add_param(Cow::Borrowed("min"), &min);
                err.add_param(Cow::Borrowed("max"), &max);
                err.add_param(Cow::Borrowed("value"), &value);
                Some(err)
            }
            Rule::Isbn => {
                let value = value.filter(|v| !v.is_empty())?;
                if is_valid_isbn(value, isbn_format) {
                    return None;
                }
                let message = match isbn_format {
                    IsbnFormat::Isbn10 => "This value is not a valid ISBN-10.",
                    IsbnFormat::Any => "This value is neither a valid ISBN-10 nor a valid ISBN-13.",
                };
                let mut err = error("isbn", message.to_string());
                err.add_param(Cow::Borrowed("value"), &value);
                Some(err)
            }
            Rule::PublishedYear => {
                let value = value.filter(|v| !v.is_empty())?;
                let Some(year) = parse_year(value) else {
                    let mut err = error("type", NOT_A_NUMBER_MESSAGE.to_string());
                    err.add_param(Cow::Borrowed("value"), &value);
                    return Some(err);
                };
                let max = i64::from(current_year);
                if (MIN_PUBLISHED_YEAR..=max).contains(&year) {
                    return None;
                }
                let mut err = error(
                    "range",
                    format!(
                        "Published year must be between {} and {}.",
                        MIN_PUBLISHED_YEAR, max
                    ),
                );
                err.add_param(Cow::Borrowed("min"), &MIN_PUBLISHED_YEAR);
                err.add_param(Cow::Borrowed("max"), &max);
                err.add_param(Cow::Borrowed("value"), &year);
                Some(err)
            }
        }
    }
}

/// Validates submitted book fields against the book rule table
#[derive(Debug, Clone, Copy, Default)]
pub struct BookValidator {
    isbn_format: IsbnFormat,
}

impl BookValidator {
    pub fn new(isbn_format: IsbnFormat) -> Self {
        Self { isbn_format }
    }

    /// Validate against the current calendar year (UTC).
    pub fn validate(&self, input: &BookInput) -> Result<NewBook, Vec<Violation>> {
        self.validate_at(input, Utc::now().year())
    }

    /// Validate with an explicit upper bound for `published-year`.
    pub fn validate_at(&self, input: &BookInput, current_year: i32) -> Result<NewBook, Vec<Violation>> {
        let mut violations = Vec::new();

        for field in BOOK_FIELDS {
            let value = input.get(field.name);
            for rule in field.rules {
                if let Some(err) = rule.check(field, value, self.isbn_format, current_year) {
                    violations.push(Violation::new(field.name, err));
                }
            }
        }

        for name in input.fields() {
            if !BOOK_FIELDS.iter().any(|f| f.name == name) {
                violations.push(Violation::new(
                    name,
                    error("unexpected", UNEXPECTED_MESSAGE.to_string()),
                ));
            }
        }

        if !violations.is_empty() {
            return Err(violations);
        }

        let text = |name: &str| input.get(name).unwrap_or_default().to_string();
        let published_year = input
            .get("published-year")
            .and_then(parse_year)
            .and_then(|year| i32::try_from(year).ok())
            .unwrap_or_default();

        Ok(NewBook {
            title: text("title"),
            author: text("author"),
            isbn: text("isbn"),
            published_year,
            genre: text("genre"),
        })
    }
}
