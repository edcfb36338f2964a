//! Operation records built from collection requests.
//!
//! Each request node in the collection tree becomes one [`Operation`]: a
//! normalized description of the endpoint with its namespace, method name,
//! parameters and inferred body shapes. Nodes that cannot be turned into an
//! operation (no URL, unknown verb) are skipped rather than failing the run.

use std::str::FromStr;

use strum::{Display, EnumIter, EnumString};
use tracing::{trace, warn};

use crate::collection::{CollectionNode, RequestSpec};
use crate::inference::{ShapeDescriptor, infer_shape};
use crate::naming::{NamingTables, normalize, normalize_or};
use crate::parser::{
    extract_path_params, namespace_from_path, normalize_raw_url, one_line, parse_raw_query,
};

/// Body mode for a JSON request body.
const RAW_BODY_MODE: &str = "raw";

/// Body modes for a multipart form body.
const MULTIPART_BODY_MODES: &[&str] = &["formdata", "form-data"];

/// Identifier used when a query key has no alphanumeric content.
const FALLBACK_QUERY_IDENTIFIER: &str = "Param";

/// HTTP methods an operation may use.
///
/// ## Examples
///
/// ```
/// use exemplar_gen::operation::HttpMethod;
/// use strum::IntoEnumIterator;
///
/// assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
/// assert_eq!(HttpMethod::iter().count(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl HttpMethod {
    /// Parses a collection verb; empty means GET.
    pub fn from_collection(verb: &str) -> Option<Self> {
        let verb = verb.trim().to_ascii_uppercase();
        if verb.is_empty() {
            return Some(HttpMethod::Get);
        }
        HttpMethod::from_str(&verb).ok()
    }

    /// The verb in title case (`Get`), used as the last-resort method name.
    pub fn title(&self) -> String {
        let upper = self.to_string();
        let (first, rest) = upper.split_at(1);
        format!("{first}{}", rest.to_ascii_lowercase())
    }
}

/// The inferred type of a query parameter sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum QueryType {
    Bool,
    Int,
    String,
}

impl QueryType {
    /// Infers a query type from a sample value.
    pub fn infer(sample: &str) -> Self {
        let sample = sample.trim();
        if sample == "true" || sample == "false" {
            QueryType::Bool
        } else if !sample.is_empty() && sample.parse::<i64>().is_ok() {
            QueryType::Int
        } else {
            QueryType::String
        }
    }
}

/// A query parameter of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParam {
    /// The key as sent on the wire.
    pub name: String,
    /// Normalized PascalCase identifier.
    pub identifier: String,
    pub query_type: QueryType,
}

/// A normalized endpoint extracted from the collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub namespace: String,
    /// PascalCase method name, unique within the namespace after disambiguation.
    pub method_name: String,
    pub http_method: HttpMethod,
    /// Normalized path with `:param` placeholders, always starting with `/`.
    pub path: String,
    /// Single-line description; may be empty.
    pub description: String,
    pub query_params: Vec<QueryParam>,
    pub path_params: Vec<String>,
    pub has_json_body: bool,
    pub has_multipart_body: bool,
    pub request_shape: Option<ShapeDescriptor>,
    pub response_shape: Option<ShapeDescriptor>,
}

impl Operation {
    /// Whether the generated callable takes a params struct.
    pub fn needs_params(&self) -> bool {
        !self.path_params.is_empty()
            || !self.query_params.is_empty()
            || self.has_json_body
            || self.has_multipart_body
    }

    /// The request shape, only when it is used as a typed JSON body.
    pub fn typed_request_shape(&self) -> Option<&ShapeDescriptor> {
        if self.has_json_body {
            self.request_shape.as_ref().filter(|s| s.is_object)
        } else {
            None
        }
    }

    /// The response shape, when a typed response is emitted.
    pub fn typed_response_shape(&self) -> Option<&ShapeDescriptor> {
        self.response_shape.as_ref().filter(|s| s.is_object)
    }
}

/// Walks the collection tree and builds an operation for every usable request.
///
/// Operations are returned in document order (depth first, parents before
/// children).
pub fn walk_collection(nodes: &[CollectionNode], tables: &NamingTables) -> Vec<Operation> {
    let mut operations = Vec::new();
    walk_nodes(nodes, &[], tables, &mut operations);
    operations
}

fn walk_nodes(
    nodes: &[CollectionNode],
    parents: &[String],
    tables: &NamingTables,
    out: &mut Vec<Operation>,
) {
    for node in nodes {
        let mut trail = parents.to_vec();
        trail.push(node.name.clone());

        if node.request.is_some()
            && let Some(operation) = build_operation(&trail, node, tables)
        {
            out.push(operation);
        }
        if !node.children.is_empty() {
            walk_nodes(&node.children, &trail, tables, out);
        }
    }
}

/// Builds the operation for a single request node.
///
/// `trail` is the list of ancestor names ending with the node's own name.
/// Returns `None` when the node has no request, no usable URL, or an
/// unknown HTTP verb.
pub fn build_operation(
    trail: &[String],
    node: &CollectionNode,
    tables: &NamingTables,
) -> Option<Operation> {
    let request = node.request.as_ref()?;
    let (path, raw_query) = normalize_raw_url(request.url.raw())?;

    let Some(http_method) = HttpMethod::from_collection(&request.method) else {
        warn!(
            name = %node.name,
            method = %request.method,
            "skipping request with unsupported HTTP method"
        );
        return None;
    };

    let namespace = namespace_from_path(&path, tables);
    let method_name = method_name_for(trail, node, http_method, tables);
    let query_params = query_params_for(request, &raw_query, tables);
    let path_params = extract_path_params(&path);

    let description = {
        let own = request.description().trim();
        if own.is_empty() {
            one_line(node.description())
        } else {
            one_line(own)
        }
    };

    let body_mode = request.body.as_ref().map_or("", |b| b.mode.as_str());
    let has_json_body = body_mode == RAW_BODY_MODE;
    let has_multipart_body = MULTIPART_BODY_MODES.contains(&body_mode);

    let request_shape = match &request.body {
        Some(body) if has_json_body => infer_shape(&body.raw, tables),
        _ => None,
    };
    let response_shape = node
        .responses
        .iter()
        .filter_map(|r| r.body.as_deref())
        .find_map(|body| infer_shape(body, tables));

    trace!(
        namespace = %namespace,
        method = %method_name,
        path = %path,
        "built operation"
    );

    Some(Operation {
        namespace,
        method_name,
        http_method,
        path,
        description,
        query_params,
        path_params,
        has_json_body,
        has_multipart_body,
        request_shape,
        response_shape,
    })
}

fn method_name_for(
    trail: &[String],
    node: &CollectionNode,
    http_method: HttpMethod,
    tables: &NamingTables,
) -> String {
    let mut name = normalize(&node.name, true, tables);
    if name.is_empty() {
        name = normalize(&trail.join(" "), true, tables);
    }
    if name.is_empty() {
        name = http_method.title();
    }
    if name == "List" {
        name = "ListItems".to_string();
    }
    name
}

fn query_params_for(
    request: &RequestSpec,
    raw_query: &str,
    tables: &NamingTables,
) -> Vec<QueryParam> {
    let items: Vec<(String, String)> = if request.url.query().is_empty() {
        parse_raw_query(raw_query)
    } else {
        request
            .url
            .query()
            .iter()
            .map(|q| (q.key.clone(), q.value.clone().unwrap_or_default()))
            .collect()
    };

    let mut params: Vec<QueryParam> = Vec::with_capacity(items.len());
    for (key, value) in items {
        if key.is_empty() || params.iter().any(|p| p.name == key) {
            continue;
        }
        params.push(QueryParam {
            identifier: normalize_or(&key, FALLBACK_QUERY_IDENTIFIER, tables),
            query_type: QueryType::infer(&value),
            name: key,
        });
    }
    params
}
