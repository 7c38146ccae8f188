//! Shape contract for property documents.
//!
//! Every document leaving the store passes through [`validate_property`]
//! before a caller sees it. The checker walks the whole document and reports
//! every offending field instead of stopping at the first one; nothing is
//! coerced. Missing optional fields get their defaults during the typed
//! conversion that follows a clean check.

use crate::domain::model::{Document, Property, PropertyStatus};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: String,
    pub reason: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(field, "required field is missing")
    }

    fn wrong_type(field: impl Into<String>, expected: &str, found: &Value) -> Self {
        Self::new(
            field,
            format!("expected {}, found {}", expected, json_kind(found)),
        )
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("document{} failed validation: {}", id_suffix(.document_id), join_issues(.issues))]
pub struct ValidationError {
    pub document_id: Option<String>,
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        Self {
            document_id: None,
            issues,
        }
    }

    pub fn for_document(document_id: Option<String>, issues: Vec<FieldIssue>) -> Self {
        Self {
            document_id,
            issues,
        }
    }

    pub fn fields(&self) -> Vec<&str> {
        self.issues.iter().map(|issue| issue.field.as_str()).collect()
    }
}

fn id_suffix(document_id: &Option<String>) -> String {
    document_id
        .as_ref()
        .map(|id| format!(" '{}'", id))
        .unwrap_or_default()
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Collects issues for one document. `prefix` scopes nested field names
/// (`features.parking`, `proximity[1].icon`).
struct Checker<'d, 'i> {
    doc: &'d Document,
    prefix: String,
    issues: &'i mut Vec<FieldIssue>,
}

impl<'d, 'i> Checker<'d, 'i> {
    fn new(doc: &'d Document, prefix: String, issues: &'i mut Vec<FieldIssue>) -> Self {
        Self {
            doc,
            prefix,
            issues,
        }
    }

    fn path(&self, field: &str) -> String {
        if self.prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", self.prefix, field)
        }
    }

    /// Present and non-null, or records a missing-field issue.
    fn required(&mut self, field: &str) -> Option<&'d Value> {
        match self.doc.get(field) {
            Some(Value::Null) | None => {
                let path = self.path(field);
                self.issues.push(FieldIssue::missing(path));
                None
            }
            Some(value) => Some(value),
        }
    }

    fn optional(&self, field: &str) -> Option<&'d Value> {
        match self.doc.get(field) {
            Some(Value::Null) | None => None,
            Some(value) => Some(value),
        }
    }

    fn push_wrong_type(&mut self, field: &str, expected: &str, found: &Value) {
        let path = self.path(field);
        self.issues.push(FieldIssue::wrong_type(path, expected, found));
    }

    fn string(&mut self, field: &str, value: Option<&'d Value>) -> Option<&'d str> {
        let value = value?;
        match value.as_str() {
            Some(s) => Some(s),
            None => {
                self.push_wrong_type(field, "string", value);
                None
            }
        }
    }

    fn required_string(&mut self, field: &str) -> Option<&'d str> {
        let value = self.required(field);
        self.string(field, value)
    }

    fn optional_string(&mut self, field: &str) {
        let value = self.optional(field);
        self.string(field, value);
    }

    fn non_negative_number(&mut self, field: &str, value: Option<&Value>) {
        let Some(value) = value else { return };
        match value.as_f64() {
            Some(n) if n < 0.0 => {
                let path = self.path(field);
                self.issues
                    .push(FieldIssue::new(path, format!("must be non-negative, got {}", n)));
            }
            Some(_) => {}
            None => self.push_wrong_type(field, "number", value),
        }
    }

    fn non_negative_integer(&mut self, field: &str, value: Option<&Value>) {
        let Some(value) = value else { return };
        if value.as_u64().is_some_and(|n| n <= u64::from(u32::MAX)) {
            return;
        }
        let path = self.path(field);
        match value.as_i64() {
            Some(n) if n < 0 => self
                .issues
                .push(FieldIssue::new(path, format!("must be non-negative, got {}", n))),
            _ if value.is_u64() => self
                .issues
                .push(FieldIssue::new(path, "integer is out of range")),
            _ => self
                .issues
                .push(FieldIssue::wrong_type(path, "integer", value)),
        }
    }

    fn boolean(&mut self, field: &str, value: Option<&Value>) {
        let Some(value) = value else { return };
        if !value.is_boolean() {
            self.push_wrong_type(field, "boolean", value);
        }
    }

    fn string_array(&mut self, field: &str, value: Option<&Value>) {
        let Some(value) = value else { return };
        let Some(items) = value.as_array() else {
            self.push_wrong_type(field, "array of strings", value);
            return;
        };
        for (index, item) in items.iter().enumerate() {
            if !item.is_string() {
                let path = format!("{}[{}]", self.path(field), index);
                self.issues
                    .push(FieldIssue::wrong_type(path, "string", item));
            }
        }
    }

    fn object(&mut self, field: &str, value: Option<&'d Value>) -> Option<&'d Document> {
        let value = value?;
        match value.as_object() {
            Some(obj) => Some(obj),
            None => {
                self.push_wrong_type(field, "object", value);
                None
            }
        }
    }
}

fn check_features(features: &Document, issues: &mut Vec<FieldIssue>) {
    let mut checker = Checker::new(features, "features".to_string(), issues);
    let parking = checker.optional("parking");
    checker.non_negative_integer("parking", parking);
    let balcony = checker.optional("balcony");
    checker.boolean("balcony", balcony);
    let furnished = checker.optional("furnished");
    checker.boolean("furnished", furnished);
    checker.optional_string("view");
}

fn check_proximity(items: &[Value], issues: &mut Vec<FieldIssue>) {
    for (index, item) in items.iter().enumerate() {
        let prefix = format!("proximity[{}]", index);
        match item.as_object() {
            Some(obj) => {
                let mut checker = Checker::new(obj, prefix, issues);
                for field in ["name", "time", "icon"] {
                    checker.required_string(field);
                }
            }
            None => issues.push(FieldIssue::wrong_type(prefix, "object", item)),
        }
    }
}

fn check_document(doc: &Document) -> Vec<FieldIssue> {
    let mut issues = Vec::new();
    let mut checker = Checker::new(doc, String::new(), &mut issues);

    for field in ["id", "name", "project", "location", "description", "type"] {
        checker.required_string(field);
    }
    for field in ["tagline", "handoverDate"] {
        checker.optional_string(field);
    }

    for field in ["price", "size"] {
        let value = checker.required(field);
        checker.non_negative_number(field, value);
    }
    for field in ["bedrooms", "bathrooms"] {
        let value = checker.required(field);
        checker.non_negative_integer(field, value);
    }

    if let Some(status) = checker.required_string("status") {
        if PropertyStatus::parse(status).is_none() {
            let allowed = PropertyStatus::ALL.map(|s| s.as_str()).join(", ");
            checker.issues.push(FieldIssue::new(
                "status",
                format!("'{}' is not one of: {}", status, allowed),
            ));
        }
    }

    for field in ["images", "amenities"] {
        let value = checker.required(field);
        checker.string_array(field, value);
    }

    let features = checker.required("features");
    let features = checker.object("features", features);

    let proximity = checker.optional("proximity");
    let proximity = match proximity {
        Some(value) if !value.is_array() => {
            checker.push_wrong_type("proximity", "array", value);
            None
        }
        other => other.and_then(Value::as_array),
    };

    if let Some(features) = features {
        check_features(features, &mut issues);
    }
    if let Some(items) = proximity {
        check_proximity(items, &mut issues);
    }

    issues
}

/// Validate one raw document and convert it into a typed [`Property`].
pub fn validate_property(doc: &Document) -> Result<Property, ValidationError> {
    let document_id = doc
        .get("id")
        .and_then(Value::as_str)
        .map(ToString::to_string);

    let issues = check_document(doc);
    if !issues.is_empty() {
        return Err(ValidationError::for_document(document_id, issues));
    }

    let property: Property = serde_json::from_value(Value::Object(doc.clone())).map_err(|e| {
        ValidationError::for_document(
            document_id.clone(),
            vec![FieldIssue::new("document", e.to_string())],
        )
    })?;

    if property.known_type().is_none() {
        tracing::debug!(
            id = %property.id,
            property_type = %property.property_type,
            "property type outside the recommended vocabulary"
        );
    }

    Ok(property)
}

/// Validate every document in order; the first failure rejects the whole list.
pub fn validate_property_list(docs: &[Document]) -> Result<Vec<Property>, ValidationError> {
    docs.iter().map(validate_property).collect()
}
