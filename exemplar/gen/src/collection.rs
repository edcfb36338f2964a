//! Collection document loading.
//!
//! Parses a Postman-style collection into a tree of [`CollectionNode`]s. Only
//! the structure is checked here; every field is optional, an explicit `null`
//! reads the same as a missing field, and nodes without a request or children
//! are simply inert.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::errors::GeneratorError;

/// The root of a collection document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Collection {
    /// Top-level folders and requests.
    #[serde(default, rename = "item", deserialize_with = "null_as_default")]
    pub items: Vec<CollectionNode>,
}

/// A folder or request in the collection tree.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollectionNode {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<Description>,
    /// Nested folders and requests.
    #[serde(default, rename = "item", deserialize_with = "null_as_default")]
    pub children: Vec<CollectionNode>,
    #[serde(default)]
    pub request: Option<RequestSpec>,
    /// Saved example responses.
    #[serde(default, rename = "response", deserialize_with = "null_as_default")]
    pub responses: Vec<ResponseExample>,
}

/// An example request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestSpec {
    #[serde(default, deserialize_with = "null_as_default")]
    pub method: String,
    #[serde(default)]
    pub description: Option<Description>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: RequestUrl,
    #[serde(default)]
    pub body: Option<RequestBody>,
}

impl CollectionNode {
    /// Returns the node-level description, or `""` when absent.
    pub fn description(&self) -> &str {
        self.description.as_ref().map_or("", Description::as_str)
    }
}

impl RequestSpec {
    /// Returns the request-level description, or `""` when absent.
    pub fn description(&self) -> &str {
        self.description.as_ref().map_or("", Description::as_str)
    }
}

/// A request body with its Postman mode tag (`raw`, `formdata`, ...).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestBody {
    #[serde(default, deserialize_with = "null_as_default")]
    pub mode: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub raw: String,
}

/// A saved example response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseExample {
    #[serde(default)]
    pub body: Option<String>,
}

/// A request URL, either a bare string or the decomposed object form.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RequestUrl {
    Raw(String),
    Detailed {
        #[serde(default, deserialize_with = "null_as_default")]
        raw: String,
        #[serde(default, deserialize_with = "null_as_default")]
        query: Vec<QueryItem>,
    },
}

impl Default for RequestUrl {
    fn default() -> Self {
        RequestUrl::Raw(String::new())
    }
}

impl RequestUrl {
    /// Returns the raw URL string.
    pub fn raw(&self) -> &str {
        match self {
            RequestUrl::Raw(raw) | RequestUrl::Detailed { raw, .. } => raw,
        }
    }

    /// Returns the explicit query items, if the URL was given in object form.
    pub fn query(&self) -> &[QueryItem] {
        match self {
            RequestUrl::Raw(_) => &[],
            RequestUrl::Detailed { query, .. } => query,
        }
    }
}

/// A single query entry from a URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QueryItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// A description, either plain text or a `{ "content": ... }` object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Text(String),
    Rich {
        #[serde(default, deserialize_with = "null_as_default")]
        content: String,
    },
}

impl Description {
    pub fn as_str(&self) -> &str {
        match self {
            Description::Text(text) | Description::Rich { content: text } => text,
        }
    }
}

/// Reads `null` as the field's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parses a collection document from its JSON text.
///
/// ## Errors
///
/// Returns `GeneratorError::ParseError` if the text is not a structurally
/// valid collection.
pub fn parse_collection(text: &str) -> Result<Collection, GeneratorError> {
    serde_json::from_str(text).map_err(|e| GeneratorError::ParseError(e.to_string()))
}

/// Reads and parses a collection document from disk.
///
/// ## Errors
///
/// Returns `GeneratorError::ReadError` if the file cannot be read and
/// `GeneratorError::ParseError` if it cannot be parsed.
pub fn load_collection(path: &Path) -> Result<Collection, GeneratorError> {
    let text = fs::read_to_string(path).map_err(|e| GeneratorError::ReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_collection(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_items() {
        let collection = parse_collection(
            r#"{
                "info": {"name": "Example"},
                "item": [
                    {
                        "name": "Controls",
                        "item": [
                            {
                                "name": "Get control by an ID",
                                "request": {
                                    "method": "GET",
                                    "url": {
                                        "raw": "{{baseUrl}}/controls/:controlId",
                                        "query": [{"key": "pageSize", "value": "10"}]
                                    }
                                },
                                "response": [{"name": "OK", "body": "{\"id\": \"abc\"}"}]
                            }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(collection.items.len(), 1);
        let folder = &collection.items[0];
        assert_eq!(folder.name, "Controls");
        assert!(folder.request.is_none());

        let leaf = &folder.children[0];
        let request = leaf.request.as_ref().unwrap();
        assert_eq!(request.method, "GET");
        assert_eq!(request.url.raw(), "{{baseUrl}}/controls/:controlId");
        assert_eq!(request.url.query()[0].key, "pageSize");
        assert_eq!(leaf.responses[0].body.as_deref(), Some("{\"id\": \"abc\"}"));
    }

    #[test]
    fn accepts_string_url_and_rich_description() {
        let collection = parse_collection(
            r#"{"item": [{
                "name": "Ping",
                "description": {"content": "Health check", "type": "text/markdown"},
                "request": {"method": "GET", "url": "{{baseUrl}}/ping?verbose=true"}
            }]}"#,
        )
        .unwrap();

        let node = &collection.items[0];
        assert_eq!(node.description(), "Health check");
        let request = node.request.as_ref().unwrap();
        assert_eq!(request.url.raw(), "{{baseUrl}}/ping?verbose=true");
        assert!(request.url.query().is_empty());
    }

    #[test]
    fn missing_fields_default() {
        let collection = parse_collection(r#"{"item": [{}]}"#).unwrap();
        let node = &collection.items[0];
        assert!(node.name.is_empty());
        assert_eq!(node.description(), "");
        assert!(node.children.is_empty());
        assert!(node.request.is_none());
        assert!(node.responses.is_empty());
    }

    #[test]
    fn null_response_body_is_none() {
        let collection =
            parse_collection(r#"{"item": [{"name": "x", "response": [{"body": null}]}]}"#)
                .unwrap();
        assert!(collection.items[0].responses[0].body.is_none());
    }

    #[test]
    fn explicit_nulls_read_as_defaults() {
        let collection = parse_collection(
            r#"{"item": [{
                "name": null,
                "item": null,
                "response": null,
                "description": {"content": null},
                "request": {
                    "method": null,
                    "url": {"raw": null, "query": [{"key": null, "value": "1"}]},
                    "body": {"mode": null, "raw": null}
                }
            }, {"request": {"url": null}}]}"#,
        )
        .unwrap();

        let node = &collection.items[0];
        assert!(node.name.is_empty());
        assert!(node.children.is_empty());
        assert!(node.responses.is_empty());
        assert_eq!(node.description(), "");

        let request = node.request.as_ref().unwrap();
        assert!(request.method.is_empty());
        assert_eq!(request.url.raw(), "");
        assert_eq!(request.url.query()[0].key, "");
        let body = request.body.as_ref().unwrap();
        assert!(body.mode.is_empty() && body.raw.is_empty());

        let bare = collection.items[1].request.as_ref().unwrap();
        assert_eq!(bare.url.raw(), "");
    }

    #[test]
    fn structurally_invalid_document_fails() {
        let result = parse_collection(r#"{"item": "not a list"}"#);
        assert!(matches!(result, Err(GeneratorError::ParseError(_))));

        let result = parse_collection("not json at all");
        assert!(matches!(result, Err(GeneratorError::ParseError(_))));
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let result = load_collection(Path::new("/nonexistent/collection.json"));
        assert!(matches!(result, Err(GeneratorError::ReadError { .. })));
    }
}
