//! Declarative record schema.
//!
//! A flat list of named fields, each with a kind and a required flag.
//! Unknown attributes are rejected rather than stripped, so a record that
//! validates is exactly what gets written.

use serde_json::Value;

use super::{Record, Schema, Violation};

/// Kinds a declared attribute can take.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    String,
    Number,
    Bool,
    /// A nested record with its own schema.
    Object(ObjectSchema),
}

#[derive(Debug, Clone, PartialEq)]
struct Field {
    name: String,
    kind: FieldKind,
    required: bool,
}

/// A record schema declared field by field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectSchema {
    fields: Vec<Field>,
}

impl ObjectSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a required field.
    pub fn field(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.fields.push(Field {
            name: name.into(),
            kind,
            required: true,
        });
        self
    }

    /// Declares an optional field.
    pub fn optional(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.fields.push(Field {
            name: name.into(),
            kind,
            required: false,
        });
        self
    }

    fn field_named(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    fn check(&self, candidate: &Value, require_all: bool) -> Result<Record, Vec<Violation>> {
        let Some(object) = candidate.as_object() else {
            return Err(vec![Violation::new("", "expected an object")]);
        };

        let mut violations = Vec::new();

        if require_all {
            for field in &self.fields {
                if field.required && !object.contains_key(&field.name) {
                    violations.push(Violation::new(&field.name, "required attribute is missing"));
                }
            }
        }

        for (name, value) in object {
            match self.field_named(name) {
                Some(field) => check_kind(&field.kind, name, value, &mut violations),
                None => violations.push(Violation::new(name, "unknown attribute")),
            }
        }

        if violations.is_empty() {
            Ok(object.clone())
        } else {
            Err(violations)
        }
    }
}

fn check_kind(kind: &FieldKind, field: &str, value: &Value, violations: &mut Vec<Violation>) {
    let expected = match kind {
        FieldKind::String => {
            if value.is_string() {
                return;
            }
            "expected a string"
        }
        FieldKind::Number => {
            if value.is_number() {
                return;
            }
            "expected a number"
        }
        FieldKind::Bool => {
            if value.is_boolean() {
                return;
            }
            "expected a boolean"
        }
        FieldKind::Object(schema) => {
            if let Err(nested) = schema.validate(value) {
                for violation in nested {
                    let path = if violation.field.is_empty() {
                        field.to_string()
                    } else {
                        format!("{}.{}", field, violation.field)
                    };
                    violations.push(Violation::new(path, violation.message));
                }
            }
            return;
        }
    };
    violations.push(Violation::new(field, expected));
}

impl Schema for ObjectSchema {
    fn validate(&self, candidate: &Value) -> Result<Record, Vec<Violation>> {
        self.check(candidate, true)
    }

    fn validate_partial(&self, candidate: &Value) -> Result<Record, Vec<Violation>> {
        let record = self.check(candidate, false)?;
        if record.is_empty() {
            return Err(vec![Violation::new("", "at least one attribute is required")]);
        }
        Ok(record)
    }
}
