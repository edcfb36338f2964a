//! Shared test utilities for exemplar-gen tests.
//!
//! Builders for operations and shapes so individual tests only spell out the
//! fields they care about.

use proc_macro2::TokenStream;

use crate::inference::{ShapeDescriptor, infer_shape};
use crate::model::Service;
use crate::naming::NamingTables;
use crate::operation::{HttpMethod, Operation, QueryParam, QueryType};
use crate::parser::extract_path_params;

/// Creates a GET operation with no query, body or shapes.
///
/// Path params are taken from `path`.
pub fn operation(namespace: &str, method_name: &str, path: &str) -> Operation {
    Operation {
        namespace: namespace.to_string(),
        method_name: method_name.to_string(),
        http_method: HttpMethod::Get,
        path: path.to_string(),
        description: String::new(),
        query_params: vec![],
        path_params: extract_path_params(path),
        has_json_body: false,
        has_multipart_body: false,
        request_shape: None,
        response_shape: None,
    }
}

/// Infers a shape from example JSON.
pub fn shape(raw: &str, tables: &NamingTables) -> Option<ShapeDescriptor> {
    infer_shape(raw, tables)
}

/// Creates a query parameter with its identifier normalized.
pub fn query(name: &str, query_type: QueryType) -> QueryParam {
    QueryParam {
        name: name.to_string(),
        identifier: crate::naming::normalize_or(name, "Param", &NamingTables::default()),
        query_type,
    }
}

/// The two `Controls` operations used across the emitter tests.
pub fn controls_service() -> Service {
    let tables = NamingTables::default();

    let mut get = operation("Controls", "GetControlByID", "/controls/:controlId");
    get.response_shape = shape(r#"{"id": "ctl_1"}"#, &tables);

    let mut list = operation(
        "Controls",
        "ListControlsDocuments",
        "/controls/:controlId/documents",
    );
    list.description = "Lists documents attached to a control.".to_string();
    list.query_params = vec![query("pageSize", QueryType::Int)];
    list.response_shape = shape(r#"{"results": {}}"#, &tables);

    Service {
        name: "Controls".to_string(),
        operations: vec![get, list],
    }
}

/// Validates that generated code is syntactically correct.
///
/// ## Errors
///
/// Returns an error string if the generated code fails to parse.
pub fn validate_generated_code(tokens: &TokenStream) -> Result<(), String> {
    syn::parse2::<syn::File>(tokens.clone()).map_err(|e| e.to_string())?;
    Ok(())
}

/// Formats generated code using prettyplease.
///
/// ## Errors
///
/// Returns an error string if the code fails to parse.
pub fn format_generated_code(tokens: &TokenStream) -> Result<String, String> {
    let file = syn::parse2::<syn::File>(tokens.clone()).map_err(|e| e.to_string())?;
    Ok(prettyplease::unparse(&file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_extracts_path_params() {
        let op = operation("Controls", "Get", "/controls/:controlId");
        assert_eq!(op.path_params, vec!["controlId"]);
        assert!(op.needs_params());
    }

    #[test]
    fn controls_service_has_typed_responses() {
        let service = controls_service();
        assert_eq!(service.operations.len(), 2);
        assert!(
            service
                .operations
                .iter()
                .all(|o| o.typed_response_shape().is_some())
        );
    }
}
