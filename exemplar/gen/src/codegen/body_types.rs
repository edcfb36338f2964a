//! Request and response body struct generation.
//!
//! Every inferred object shape becomes a plain serde struct whose fields are
//! all optional, so partial payloads still round-trip.

use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::quote;

use crate::inference::ShapeDescriptor;
use crate::naming::{NamingTables, claim_unique, member_ident, to_snake_case, type_ident};

/// Generates a serde struct for an inferred object shape.
///
/// Fields keep the shape's order (sorted by identifier). Each field is an
/// `Option<T>` renamed to its original JSON key and skipped when `None`.
/// Identifiers that snake-case to the same member get a numeric suffix.
///
/// ## Example Output
///
/// ```ignore
/// /// Response body of `ControlsService::get_control_by_id`.
/// #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// pub struct ControlsGetControlByIDResponse {
///     #[serde(rename = "id", skip_serializing_if = "Option::is_none")]
///     pub id: Option<String>,
/// }
/// ```
pub fn generate_shape_struct(
    name: &str,
    doc: &str,
    shape: &ShapeDescriptor,
    tables: &NamingTables,
) -> TokenStream {
    let struct_name = type_ident(name);
    let doc = format!(" {doc}");

    let mut used: HashSet<String> = HashSet::with_capacity(shape.fields.len());
    let fields = shape.fields.iter().map(|field| {
        let member = member_ident(&claim_unique(
            &to_snake_case(&field.identifier, tables),
            &mut used,
        ));
        let ty = field.inferred_type.to_tokens();
        let key = &field.original_key;
        quote! {
            #[serde(rename = #key, skip_serializing_if = "Option::is_none")]
            pub #member: Option<#ty>,
        }
    });

    quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct #struct_name {
            #(#fields)*
        }
    }
}
