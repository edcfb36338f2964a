//! Service struct and callable generation.
//!
//! Each namespace becomes a `{Ns}Service<'a>` that borrows the runtime client
//! and exposes one `async fn` per operation. The supporting body, response and
//! params types are emitted next to their service.

use std::collections::HashSet;

use proc_macro2::{Ident, Literal, TokenStream};
use quote::{format_ident, quote};

use super::body_types::generate_shape_struct;
use super::params::{ParamLayout, generate_params_struct};
use crate::model::Service;
use crate::naming::{NamingTables, claim_unique, member_ident, to_snake_case, type_ident};
use crate::operation::Operation;

/// Name of the params argument of generated callables.
const PARAMS_ARG: &str = "params";

/// Generated type names for one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationTypeNames {
    pub request_body: String,
    pub response: String,
    pub params: String,
}

impl OperationTypeNames {
    pub fn new(namespace: &str, method_name: &str) -> Self {
        Self {
            request_body: format!("{namespace}{method_name}RequestBody"),
            response: format!("{namespace}{method_name}Response"),
            params: format!("{namespace}{method_name}Params"),
        }
    }
}

/// Builds the `format!` string for a path, with one `{}` per `:param`.
///
/// Braces in literal segments are doubled. Params are returned in order of
/// appearance, repeated if the path repeats them.
///
/// ## Examples
///
/// ```
/// use exemplar_gen::codegen::service::build_format_string;
///
/// let (fmt, params) = build_format_string("/controls/:controlId/documents");
/// assert_eq!(fmt, "/controls/{}/documents");
/// assert_eq!(params, vec!["controlId"]);
/// ```
pub fn build_format_string(path: &str) -> (String, Vec<&str>) {
    let mut params = Vec::new();
    let pieces: Vec<String> = path
        .split('/')
        .map(|piece| match piece.strip_prefix(':') {
            Some(name) if !name.is_empty() => {
                params.push(name);
                "{}".to_string()
            }
            _ => piece.replace('{', "{{").replace('}', "}}"),
        })
        .collect();
    (pieces.join("/"), params)
}

/// Generates everything for one namespace: types, service struct and impl.
pub fn generate_service(service: &Service, tables: &NamingTables) -> TokenStream {
    let struct_name = type_ident(&service.struct_name());
    let count = service.operations.len();
    let noun = if count == 1 { "endpoint" } else { "endpoints" };
    let doc = format!(
        " Operations under the `{}` namespace ({count} {noun}).",
        service.name
    );

    let types = service
        .operations
        .iter()
        .map(|op| generate_operation_types(service, op, tables));
    let methods = service
        .operations
        .iter()
        .map(|op| generate_operation_method(service, op, tables));

    quote! {
        #(#types)*

        #[doc = #doc]
        #[derive(Debug, Clone, Copy)]
        pub struct #struct_name<'a> {
            client: &'a Client,
        }

        impl #struct_name<'_> {
            #(#methods)*
        }
    }
}

fn method_path(service: &Service, op: &Operation, tables: &NamingTables) -> String {
    format!(
        "{}::{}",
        service.struct_name(),
        to_snake_case(&op.method_name, tables)
    )
}

fn generate_operation_types(service: &Service, op: &Operation, tables: &NamingTables) -> TokenStream {
    let names = OperationTypeNames::new(&service.name, &op.method_name);
    let target = method_path(service, op, tables);

    let request_body = op.typed_request_shape().map(|shape| {
        let doc = format!("Request body of [`{target}`].");
        generate_shape_struct(&names.request_body, &doc, shape, tables)
    });

    let response = op.typed_response_shape().map(|shape| {
        let doc = format!("Response body of [`{target}`].");
        generate_shape_struct(&names.response, &doc, shape, tables)
    });

    let params = op.needs_params().then(|| {
        let layout = ParamLayout::for_operation(op, tables);
        let body_type = op
            .typed_request_shape()
            .map(|_| names.request_body.as_str());
        let doc = format!("Parameters for [`{target}`].");
        generate_params_struct(&names.params, &doc, &layout, body_type)
    });

    quote! {
        #request_body
        #response
        #params
    }
}

fn generate_operation_method(service: &Service, op: &Operation, tables: &NamingTables) -> TokenStream {
    let names = OperationTypeNames::new(&service.name, &op.method_name);
    let fn_name = member_ident(&to_snake_case(&op.method_name, tables));

    let doc = if op.description.is_empty() {
        format!(
            " {} performs {} {}.",
            op.method_name, op.http_method, op.path
        )
    } else {
        format!(" {}", op.description)
    };

    let return_type = match op.typed_response_shape() {
        Some(_) => {
            let ty = type_ident(&names.response);
            quote! { #ty }
        }
        None => quote! { serde_json::Value },
    };

    let http_method = format_ident!("{}", op.http_method.to_string());

    if !op.needs_params() {
        let path = Literal::string(&op.path);
        return quote! {
            #[doc = #doc]
            pub async fn #fn_name(&self) -> Result<#return_type, ClientError> {
                let query: Vec<(&'static str, String)> = Vec::new();
                let request = self.client.new_request(
                    reqwest::Method::#http_method,
                    #path,
                    &query,
                    None::<&()>,
                )?;
                self.client.do_json(request).await
            }
        };
    }

    let layout = ParamLayout::for_operation(op, tables);
    let params_type = type_ident(&names.params);

    let required_checks = layout.path.iter().map(|p| {
        let member = &p.member;
        let name = &p.name;
        quote! {
            if params.#member.is_empty() {
                return Err(ClientError::MissingParameter(#name));
            }
        }
    });

    let path_binding = if layout.path.is_empty() {
        let path = Literal::string(&op.path);
        quote! { let path = #path; }
    } else {
        // prettyplease leaves macro arguments unformatted, so `format!` only
        // ever receives plain locals.
        let mut used: HashSet<String> = HashSet::from([PARAMS_ARG.to_string()]);
        let segments: Vec<(&str, Ident)> = layout
            .path
            .iter()
            .map(|p| {
                let member = p.member.to_string();
                let local = claim_unique(member.trim_start_matches("r#"), &mut used);
                (p.name.as_str(), member_ident(&local))
            })
            .collect();
        let encodes = layout.path.iter().zip(&segments).map(|(p, (_, local))| {
            let member = &p.member;
            quote! {
                let #local = crate::client::encode_path_segment(&params.#member);
            }
        });

        let (format_string, occurrences) = build_format_string(&op.path);
        let args = occurrences.iter().filter_map(|name| {
            segments
                .iter()
                .find(|(segment, _)| segment == name)
                .map(|(_, local)| local)
        });
        quote! {
            #(#encodes)*
            let path = format!(#format_string, #(#args),*);
        }
    };
    let path_arg = if layout.path.is_empty() {
        quote! { path }
    } else {
        quote! { &path }
    };

    let query_binding = if layout.query.is_empty() {
        quote! { let query: Vec<(&'static str, String)> = Vec::new(); }
    } else {
        let pushes = layout.query.iter().map(|q| {
            let member = &q.member;
            let key = &q.param.name;
            quote! {
                if let Some(value) = &params.#member {
                    query.push((#key, value.to_string()));
                }
            }
        });
        quote! {
            let mut query: Vec<(&'static str, String)> = Vec::new();
            #(#pushes)*
        }
    };

    let request = match (&layout.form_data, &layout.body) {
        (Some(form), _) => quote! {
            let request = self.client.new_multipart_request(
                reqwest::Method::#http_method,
                #path_arg,
                &query,
                &params.#form,
            )?;
        },
        (None, Some(body)) => quote! {
            let request = self.client.new_request(
                reqwest::Method::#http_method,
                #path_arg,
                &query,
                params.#body.as_ref(),
            )?;
        },
        (None, None) => quote! {
            let request = self.client.new_request(
                reqwest::Method::#http_method,
                #path_arg,
                &query,
                None::<&()>,
            )?;
        },
    };

    quote! {
        #[doc = #doc]
        pub async fn #fn_name(
            &self,
            params: &#params_type,
        ) -> Result<#return_type, ClientError> {
            #(#required_checks)*
            #path_binding
            #query_binding
            #request
            self.client.do_json(request).await
        }
    }
}
