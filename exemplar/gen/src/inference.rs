//! Structural type inference from example JSON.
//!
//! Only top-level JSON objects produce a typed shape. Everything else (arrays,
//! scalars, `null`, empty or malformed text) yields `None`, which the emitter
//! renders as an untyped `serde_json::Value` passthrough.
//!
//! ## Inference Rules
//!
//! | Example value | Inferred type                                   |
//! |---------------|-------------------------------------------------|
//! | string        | `String`                                        |
//! | boolean       | `bool`                                          |
//! | number        | `f64`                                           |
//! | array         | `Vec<T>` of the first element, `Vec<Value>` if empty |
//! | object        | `serde_json::Map<String, Value>` (one level only) |
//! | null          | `serde_json::Value`                             |
//!
//! ## Examples
//!
//! ```
//! use exemplar_gen::inference::{FieldType, infer_shape};
//! use exemplar_gen::naming::NamingTables;
//!
//! let shape = infer_shape(r#"{"name": "x", "id": "1"}"#, &NamingTables::default()).unwrap();
//! let names: Vec<_> = shape.fields.iter().map(|f| f.identifier.as_str()).collect();
//! assert_eq!(names, vec!["ID", "Name"]);
//! assert_eq!(shape.fields[0].inferred_type, FieldType::String);
//!
//! assert!(infer_shape("[1, 2, 3]", &NamingTables::default()).is_none());
//! ```

use std::fmt;

use proc_macro2::TokenStream;
use quote::quote;
use serde_json::Value;
use tracing::debug;

use crate::naming::{NamingTables, normalize_or};

/// Identifier used when a JSON key has no alphanumeric content.
const FALLBACK_FIELD_IDENTIFIER: &str = "Field";

/// The inferred type of a single JSON value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    String,
    Bool,
    Float,
    Array(Box<FieldType>),
    /// A nested object, kept as an untyped map.
    Map,
    Any,
}

impl FieldType {
    /// Infers the type of an example value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => FieldType::String,
            Value::Bool(_) => FieldType::Bool,
            Value::Number(_) => FieldType::Float,
            Value::Array(items) => match items.first() {
                Some(first) => FieldType::Array(Box::new(FieldType::of(first))),
                None => FieldType::Array(Box::new(FieldType::Any)),
            },
            Value::Object(_) => FieldType::Map,
            Value::Null => FieldType::Any,
        }
    }

    /// Renders the Rust type for this field.
    pub fn to_tokens(&self) -> TokenStream {
        match self {
            FieldType::String => quote! { String },
            FieldType::Bool => quote! { bool },
            FieldType::Float => quote! { f64 },
            FieldType::Array(inner) => {
                let inner = inner.to_tokens();
                quote! { Vec<#inner> }
            }
            FieldType::Map => quote! { serde_json::Map<String, serde_json::Value> },
            FieldType::Any => quote! { serde_json::Value },
        }
    }
}

/// The signature form used when comparing shapes (`string`, `[]float64`, ...).
impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::String => write!(f, "string"),
            FieldType::Bool => write!(f, "bool"),
            FieldType::Float => write!(f, "float64"),
            FieldType::Array(inner) => write!(f, "[]{inner}"),
            FieldType::Map => write!(f, "map[string]any"),
            FieldType::Any => write!(f, "any"),
        }
    }
}

/// One field of an inferred object shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Normalized PascalCase identifier; fields are ordered by this.
    pub identifier: String,
    pub inferred_type: FieldType,
    /// The JSON key, used as the serde rename.
    pub original_key: String,
    /// Position of the key in the example.
    pub declaration_order: usize,
}

/// The inferred structure of an example body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeDescriptor {
    pub is_object: bool,
    pub fields: Vec<Field>,
}

impl ShapeDescriptor {
    /// Sorted `key:type` list used to recognize identical shapes.
    pub fn signature(&self) -> String {
        if !self.is_object {
            return "none".to_string();
        }
        let mut parts: Vec<String> = self
            .fields
            .iter()
            .map(|f| format!("{}:{}", f.original_key, f.inferred_type))
            .collect();
        parts.sort();
        parts.join(",")
    }
}

/// Infers a shape from raw example text.
///
/// Returns `None` for empty or malformed text and for any JSON value that is
/// not an object. Fields are sorted by identifier (then original key), and a
/// key whose identifier duplicates an earlier one is dropped.
pub fn infer_shape(raw: &str, tables: &NamingTables) -> Option<ShapeDescriptor> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let value: Value = serde_json::from_str(raw).ok()?;
    let Value::Object(object) = value else {
        return None;
    };

    let mut fields: Vec<Field> = object
        .iter()
        .enumerate()
        .map(|(order, (key, val))| Field {
            identifier: normalize_or(key, FALLBACK_FIELD_IDENTIFIER, tables),
            inferred_type: FieldType::of(val),
            original_key: key.clone(),
            declaration_order: order,
        })
        .collect();

    fields.sort_by(|a, b| {
        a.identifier
            .cmp(&b.identifier)
            .then_with(|| a.original_key.cmp(&b.original_key))
    });

    let before = fields.len();
    fields.dedup_by(|later, earlier| {
        let duplicate = later.identifier == earlier.identifier;
        if duplicate {
            debug!(
                key = %later.original_key,
                kept = %earlier.original_key,
                identifier = %later.identifier,
                "dropping example key with duplicate identifier"
            );
        }
        duplicate
    });
    if fields.len() != before {
        debug!(dropped = before - fields.len(), "collapsed duplicate field identifiers");
    }

    Some(ShapeDescriptor {
        is_object: true,
        fields,
    })
}
