//! Params struct generation.
//!
//! An operation with any path, query, body or multipart input takes a single
//! `&{Ns}{Method}Params` argument. [`ParamLayout`] decides the member name of
//! every input once, so the struct and the method body always agree.

use std::collections::HashSet;

use proc_macro2::{Ident, TokenStream};
use quote::quote;

use crate::naming::{
    NamingTables, claim_unique, member_ident, normalize_or, to_snake_case, type_ident,
};
use crate::operation::{Operation, QueryParam, QueryType};

const BODY_MEMBER: &str = "body";
const FORM_DATA_MEMBER: &str = "form_data";

/// A path parameter and its member.
#[derive(Debug, Clone)]
pub struct PathMember {
    /// The name as written in the path, after the `:`.
    pub name: String,
    pub member: Ident,
}

/// A query parameter and its member.
#[derive(Debug, Clone)]
pub struct QueryMember {
    pub param: QueryParam,
    pub member: Ident,
}

/// The member names of an operation's inputs.
#[derive(Debug, Clone)]
pub struct ParamLayout {
    pub path: Vec<PathMember>,
    pub query: Vec<QueryMember>,
    pub body: Option<Ident>,
    pub form_data: Option<Ident>,
}

impl ParamLayout {
    /// Assigns member names for an operation.
    ///
    /// `body` and `form_data` are claimed first; path then query members take
    /// the snake_case of their identifier, with a numeric suffix when two
    /// inputs land on the same name.
    pub fn for_operation(op: &Operation, tables: &NamingTables) -> Self {
        let mut used: HashSet<String> = HashSet::new();

        let body = op.has_json_body.then(|| claim(BODY_MEMBER, &mut used));
        let form_data = op
            .has_multipart_body
            .then(|| claim(FORM_DATA_MEMBER, &mut used));

        let path = op
            .path_params
            .iter()
            .map(|name| {
                let snake = to_snake_case(&normalize_or(name, "Param", tables), tables);
                PathMember {
                    name: name.clone(),
                    member: claim(&snake, &mut used),
                }
            })
            .collect();

        let query = op
            .query_params
            .iter()
            .map(|param| {
                let snake = to_snake_case(&param.identifier, tables);
                QueryMember {
                    param: param.clone(),
                    member: claim(&snake, &mut used),
                }
            })
            .collect();

        Self {
            path,
            query,
            body,
            form_data,
        }
    }
}

fn claim(base: &str, used: &mut HashSet<String>) -> Ident {
    member_ident(&claim_unique(base, used))
}

/// The Rust type of a query parameter.
pub fn query_type_tokens(query_type: QueryType) -> TokenStream {
    match query_type {
        QueryType::Bool => quote! { bool },
        QueryType::Int => quote! { i64 },
        QueryType::String => quote! { String },
    }
}

/// Generates the params struct for an operation.
///
/// `body_type` is the typed request body, or `None` for an untyped
/// `serde_json::Value` body.
pub fn generate_params_struct(
    name: &str,
    doc: &str,
    layout: &ParamLayout,
    body_type: Option<&str>,
) -> TokenStream {
    let struct_name = type_ident(name);
    let doc = format!(" {doc}");

    let path_fields = layout.path.iter().map(|p| {
        let member = &p.member;
        let field_doc = format!(" Path parameter `{}`. Must not be empty.", p.name);
        quote! {
            #[doc = #field_doc]
            pub #member: String,
        }
    });

    let query_fields = layout.query.iter().map(|q| {
        let member = &q.member;
        let ty = query_type_tokens(q.param.query_type);
        let field_doc = format!(" Query parameter `{}`.", q.param.name);
        quote! {
            #[doc = #field_doc]
            pub #member: Option<#ty>,
        }
    });

    let body_field = layout.body.as_ref().map(|member| {
        let ty = match body_type {
            Some(ty) => {
                let ty = type_ident(ty);
                quote! { #ty }
            }
            None => quote! { serde_json::Value },
        };
        quote! {
            /// JSON request body.
            pub #member: Option<#ty>,
        }
    });

    let form_field = layout.form_data.as_ref().map(|member| {
        quote! {
            /// Multipart field names mapped to their values.
            pub #member: std::collections::BTreeMap<String, String>,
        }
    });

    quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct #struct_name {
            #(#path_fields)*
            #(#query_fields)*
            #body_field
            #form_field
        }
    }
}
