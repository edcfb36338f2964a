//! Collapsing of duplicate operations.
//!
//! Collections often repeat a request under several folders. Two operations
//! are duplicates when their full signature matches: verb, path, query
//! parameters, body kinds and both inferred shapes. Operations that differ in
//! any of these survive side by side and are renamed later.

use std::collections::HashMap;

use tracing::debug;

use crate::inference::ShapeDescriptor;
use crate::operation::Operation;

const NO_SHAPE: &str = "none";

/// Builds the identity signature of an operation.
///
/// ## Examples
///
/// ```
/// use exemplar_gen::dedupe::operation_signature;
/// use exemplar_gen::operation::{HttpMethod, Operation};
///
/// let op = Operation {
///     namespace: "Controls".into(),
///     method_name: "ListControls".into(),
///     http_method: HttpMethod::Get,
///     path: "/controls".into(),
///     description: String::new(),
///     query_params: vec![],
///     path_params: vec![],
///     has_json_body: false,
///     has_multipart_body: false,
///     request_shape: None,
///     response_shape: None,
/// };
/// assert_eq!(
///     operation_signature(&op),
///     "GET|/controls||json:false|multipart:false|req:none|resp:none"
/// );
/// ```
pub fn operation_signature(op: &Operation) -> String {
    let mut query: Vec<String> = op
        .query_params
        .iter()
        .map(|q| format!("{}:{}", q.name, q.query_type))
        .collect();
    query.sort();

    [
        op.http_method.to_string(),
        op.path.clone(),
        query.join(","),
        format!("json:{}", op.has_json_body),
        format!("multipart:{}", op.has_multipart_body),
        format!("req:{}", shape_signature(op.request_shape.as_ref())),
        format!("resp:{}", shape_signature(op.response_shape.as_ref())),
    ]
    .join("|")
}

/// The signature of an optional shape; `none` when absent.
pub fn shape_signature(shape: Option<&ShapeDescriptor>) -> String {
    shape.map_or_else(|| NO_SHAPE.to_string(), ShapeDescriptor::signature)
}

/// Removes duplicate operations, keeping the first occurrence of each
/// signature in its original position.
///
/// The retained record takes the description and shapes of later
/// duplicates where it has none of its own.
pub fn dedupe_operations(operations: Vec<Operation>) -> Vec<Operation> {
    let mut index_by_signature: HashMap<String, usize> = HashMap::new();
    let mut retained: Vec<Operation> = Vec::with_capacity(operations.len());

    for op in operations {
        let signature = operation_signature(&op);
        match index_by_signature.get(&signature) {
            Some(&index) => {
                debug!(
                    namespace = %op.namespace,
                    method = %op.method_name,
                    kept = %retained[index].method_name,
                    "merging duplicate operation"
                );
                absorb(&mut retained[index], op);
            }
            None => {
                index_by_signature.insert(signature, retained.len());
                retained.push(op);
            }
        }
    }

    retained
}

fn absorb(existing: &mut Operation, duplicate: Operation) {
    if existing.description.is_empty() && !duplicate.description.is_empty() {
        existing.description = duplicate.description;
    }
    if existing.request_shape.is_none() {
        existing.request_shape = duplicate.request_shape;
    }
    if existing.response_shape.is_none() {
        existing.response_shape = duplicate.response_shape;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::NamingTables;
    use crate::test_utils::{operation, shape};

    #[test]
    fn identical_operations_collapse() {
        let mut first = operation("Controls", "ListControls", "/controls");
        first.description = String::new();
        let mut second = operation("Controls", "ListAllControls", "/controls");
        second.description = "Lists controls.".to_string();

        let out = dedupe_operations(vec![first, second]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].method_name, "ListControls");
        assert_eq!(out[0].description, "Lists controls.");
    }

    #[test]
    fn retained_description_is_not_overwritten() {
        let mut first = operation("Controls", "ListControls", "/controls");
        first.description = "Original.".to_string();
        let mut second = first.clone();
        second.description = "Other.".to_string();

        let out = dedupe_operations(vec![first, second]);
        assert_eq!(out[0].description, "Original.");
    }

    #[test]
    fn different_request_shapes_stay_distinct() {
        let tables = NamingTables::default();
        let mut a = operation("Controls", "Create", "/controls");
        a.has_json_body = true;
        a.request_shape = shape(r#"{"name": "x"}"#, &tables);
        let mut b = a.clone();
        b.request_shape = shape(r#"{"name": "x", "owner": "y"}"#, &tables);

        let out = dedupe_operations(vec![a, b]);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn body_kind_and_query_differences_stay_distinct() {
        let plain = operation("Documents", "Upload", "/documents");
        let mut multipart = plain.clone();
        multipart.has_multipart_body = true;
        let mut json = plain.clone();
        json.has_json_body = true;

        let out = dedupe_operations(vec![plain, multipart, json]);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn order_of_first_occurrence_is_kept() {
        let a = operation("A", "One", "/a");
        let b = operation("B", "Two", "/b");
        let a_again = operation("A", "Again", "/a");
        let c = operation("C", "Three", "/c");

        let out = dedupe_operations(vec![a, b, a_again, c]);
        let names: Vec<_> = out.iter().map(|o| o.method_name.as_str()).collect();
        assert_eq!(names, vec!["One", "Two", "Three"]);
    }

    #[test]
    fn shape_signatures() {
        let tables = NamingTables::default();
        assert_eq!(shape_signature(None), "none");
        let s = shape(r#"{"b": true, "a": [1]}"#, &tables);
        assert_eq!(shape_signature(s.as_ref()), "a:[]float64,b:bool");
    }
}
