use std::fmt;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;
use utoipa::ToSchema;

use crate::entities::scholarship::{ApplicationStatus, FundingType};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

const FUNDING_TYPES: &str = "'Full' | 'Partial'";
const STATUSES: &str = "'Applied' | 'Preparing' | 'Submitted'";

/// A single validation failure, in the shape clients receive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

/// Everything wrong with a request body, ordered by field declaration.
/// Responses surface only the first entry.
#[derive(Debug, Clone)]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    fn new(mut errors: Vec<FieldError>) -> Self {
        if errors.is_empty() {
            errors.push(FieldError {
                path: String::new(),
                message: "Invalid input".to_string(),
            });
        }
        Self { errors }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn first(&self) -> &FieldError {
        &self.errors[0]
    }

    pub fn into_first(self) -> FieldError {
        self.errors
            .into_iter()
            .next()
            .unwrap_or_else(|| FieldError {
                path: String::new(),
                message: "Invalid input".to_string(),
            })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let first = self.first();
        if first.path.is_empty() {
            write!(f, "{}", first.message)
        } else {
            write!(f, "{}: {}", first.path, first.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A create payload after validation, ready for the store.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewScholarship {
    pub scholarship_name: String,
    pub university_name: String,
    pub country: String,
    pub funding_type: FundingType,
    pub professor_email: String,
    pub required_documents: Vec<String>,
    pub deadline: DateTime<Utc>,
    pub status: ApplicationStatus,
    pub apply_link: Option<String>,
    pub notes: Option<String>,
}

/// Fields supplied by an update request. Outer `None` means the field was
/// absent and keeps its stored value; for `apply_link` and `notes` an inner
/// `None` clears the column.
#[derive(Debug, Clone, Default)]
pub struct ScholarshipPatch {
    pub scholarship_name: Option<String>,
    pub university_name: Option<String>,
    pub country: Option<String>,
    pub funding_type: Option<FundingType>,
    pub professor_email: Option<String>,
    pub required_documents: Option<Vec<String>>,
    pub deadline: Option<DateTime<Utc>>,
    pub status: Option<ApplicationStatus>,
    pub apply_link: Option<Option<String>>,
    pub notes: Option<Option<String>>,
}

impl ScholarshipPatch {
    pub fn is_empty(&self) -> bool {
        self.scholarship_name.is_none()
            && self.university_name.is_none()
            && self.country.is_none()
            && self.funding_type.is_none()
            && self.professor_email.is_none()
            && self.required_documents.is_none()
            && self.deadline.is_none()
            && self.status.is_none()
            && self.apply_link.is_none()
            && self.notes.is_none()
    }
}

/// Checks a create payload against the scholarship schema. Unknown keys are
/// ignored; the id always comes from the store.
pub fn validate_create(body: &Value) -> Result<NewScholarship, ValidationError> {
    let obj = match body.as_object() {
        Some(obj) => obj,
        None => return Err(not_an_object(body)),
    };

    let mut errors = Vec::new();

    let scholarship_name = required_string(obj, "scholarshipName", &mut errors);
    let university_name = required_string(obj, "universityName", &mut errors);
    let country = required_string(obj, "country", &mut errors);
    let funding_type = required_enum::<FundingType>(obj, "fundingType", FUNDING_TYPES, &mut errors);
    let professor_email = required_email(obj, "professorEmail", &mut errors);
    let required_documents = required_string_array(obj, "requiredDocuments", &mut errors);
    let deadline = required_datetime(obj, "deadline", &mut errors);
    let status = required_enum::<ApplicationStatus>(obj, "status", STATUSES, &mut errors);
    let apply_link = optional_url(obj, "applyLink", &mut errors);
    let notes = optional_string(obj, "notes", &mut errors);

    let (
        Some(scholarship_name),
        Some(university_name),
        Some(country),
        Some(funding_type),
        Some(professor_email),
        Some(required_documents),
        Some(deadline),
        Some(status),
    ) = (
        scholarship_name,
        university_name,
        country,
        funding_type,
        professor_email,
        required_documents,
        deadline,
        status,
    )
    else {
        return Err(ValidationError::new(errors));
    };

    if !errors.is_empty() {
        return Err(ValidationError::new(errors));
    }

    Ok(NewScholarship {
        scholarship_name,
        university_name,
        country,
        funding_type,
        professor_email,
        required_documents,
        deadline,
        status,
        apply_link,
        notes,
    })
}

/// Checks an update payload. Every field is optional; supplied fields must
/// satisfy the same rules as on create. `null` clears `applyLink` and
/// `notes` and is rejected everywhere else.
pub fn validate_update(body: &Value) -> Result<ScholarshipPatch, ValidationError> {
    let obj = match body.as_object() {
        Some(obj) => obj,
        None => return Err(not_an_object(body)),
    };

    let mut errors = Vec::new();

    let patch = ScholarshipPatch {
        scholarship_name: patch_string(obj, "scholarshipName", &mut errors),
        university_name: patch_string(obj, "universityName", &mut errors),
        country: patch_string(obj, "country", &mut errors),
        funding_type: patch_enum::<FundingType>(obj, "fundingType", FUNDING_TYPES, &mut errors),
        professor_email: patch_email(obj, "professorEmail", &mut errors),
        required_documents: patch_string_array(obj, "requiredDocuments", &mut errors),
        deadline: patch_datetime(obj, "deadline", &mut errors),
        status: patch_enum::<ApplicationStatus>(obj, "status", STATUSES, &mut errors),
        apply_link: patch_nullable_url(obj, "applyLink", &mut errors),
        notes: patch_nullable_string(obj, "notes", &mut errors),
    };

    if errors.is_empty() {
        Ok(patch)
    } else {
        Err(ValidationError::new(errors))
    }
}

fn not_an_object(body: &Value) -> ValidationError {
    ValidationError::new(vec![FieldError {
        path: String::new(),
        message: format!("Expected object, received {}", json_type(body)),
    }])
}

fn required_string(
    obj: &Map<String, Value>,
    name: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match obj.get(name) {
        None => {
            push(errors, name, "Required");
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            push(
                errors,
                name,
                format!("Expected string, received {}", json_type(other)),
            );
            None
        }
    }
}

fn required_email(
    obj: &Map<String, Value>,
    name: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let value = required_string(obj, name, errors)?;
    if EMAIL_RE.is_match(&value) {
        Some(value)
    } else {
        push(errors, name, "Invalid email");
        None
    }
}

fn required_datetime(
    obj: &Map<String, Value>,
    name: &str,
    errors: &mut Vec<FieldError>,
) -> Option<DateTime<Utc>> {
    let value = required_string(obj, name, errors)?;
    match DateTime::parse_from_rfc3339(&value) {
        Ok(parsed) => Some(parsed.with_timezone(&Utc)),
        Err(_) => {
            push(errors, name, "Invalid datetime");
            None
        }
    }
}

fn required_enum<T: DeserializeOwned>(
    obj: &Map<String, Value>,
    name: &str,
    allowed: &str,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    let value = required_string(obj, name, errors)?;
    match serde_json::from_value(Value::String(value.clone())) {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            push(
                errors,
                name,
                format!("Invalid enum value. Expected {allowed}, received '{value}'"),
            );
            None
        }
    }
}

fn required_string_array(
    obj: &Map<String, Value>,
    name: &str,
    errors: &mut Vec<FieldError>,
) -> Option<Vec<String>> {
    let items = match obj.get(name) {
        None => {
            push(errors, name, "Required");
            return None;
        }
        Some(Value::Array(items)) => items,
        Some(other) => {
            push(
                errors,
                name,
                format!("Expected array, received {}", json_type(other)),
            );
            return None;
        }
    };

    let mut documents = Vec::with_capacity(items.len());
    let mut valid = true;
    for (index, item) in items.iter().enumerate() {
        match item {
            Value::String(s) => documents.push(s.clone()),
            other => {
                push(
                    errors,
                    format!("{name}.{index}"),
                    format!("Expected string, received {}", json_type(other)),
                );
                valid = false;
            }
        }
    }
    valid.then_some(documents)
}

fn optional_string(
    obj: &Map<String, Value>,
    name: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match obj.get(name) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            push(
                errors,
                name,
                format!("Expected string, received {}", json_type(other)),
            );
            None
        }
    }
}

fn optional_url(
    obj: &Map<String, Value>,
    name: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let value = optional_string(obj, name, errors)?;
    if Url::parse(&value).is_ok() {
        Some(value)
    } else {
        push(errors, name, "Invalid url");
        None
    }
}

fn patch_string(
    obj: &Map<String, Value>,
    name: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    if !obj.contains_key(name) {
        return None;
    }
    required_string(obj, name, errors)
}

fn patch_email(
    obj: &Map<String, Value>,
    name: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    if !obj.contains_key(name) {
        return None;
    }
    required_email(obj, name, errors)
}

fn patch_datetime(
    obj: &Map<String, Value>,
    name: &str,
    errors: &mut Vec<FieldError>,
) -> Option<DateTime<Utc>> {
    if !obj.contains_key(name) {
        return None;
    }
    required_datetime(obj, name, errors)
}

fn patch_enum<T: DeserializeOwned>(
    obj: &Map<String, Value>,
    name: &str,
    allowed: &str,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    if !obj.contains_key(name) {
        return None;
    }
    required_enum(obj, name, allowed, errors)
}

fn patch_string_array(
    obj: &Map<String, Value>,
    name: &str,
    errors: &mut Vec<FieldError>,
) -> Option<Vec<String>> {
    if !obj.contains_key(name) {
        return None;
    }
    required_string_array(obj, name, errors)
}

fn patch_nullable_string(
    obj: &Map<String, Value>,
    name: &str,
    errors: &mut Vec<FieldError>,
) -> Option<Option<String>> {
    match obj.get(name) {
        None => None,
        Some(Value::Null) => Some(None),
        Some(Value::String(s)) => Some(Some(s.clone())),
        Some(other) => {
            push(
                errors,
                name,
                format!("Expected string, received {}", json_type(other)),
            );
            None
        }
    }
}

fn patch_nullable_url(
    obj: &Map<String, Value>,
    name: &str,
    errors: &mut Vec<FieldError>,
) -> Option<Option<String>> {
    match patch_nullable_string(obj, name, errors)? {
        None => Some(None),
        Some(value) => {
            if Url::parse(&value).is_ok() {
                Some(Some(value))
            } else {
                push(errors, name, "Invalid url");
                None
            }
        }
    }
}

fn push(errors: &mut Vec<FieldError>, path: impl Into<String>, message: impl Into<String>) {
    errors.push(FieldError {
        path: path.into(),
        message: message.into(),
    });
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
