//! `Services` registry generation.

use proc_macro2::TokenStream;
use quote::quote;

use crate::model::ApiModel;
use crate::naming::{NamingTables, member_ident, type_ident};

/// Generates the `Services` registry with one accessor per namespace.
///
/// ## Example Output
///
/// ```ignore
/// pub struct Services<'a> {
///     client: &'a Client,
/// }
///
/// impl<'a> Services<'a> {
///     pub fn controls(&self) -> ControlsService<'a> { ... }
/// }
/// ```
pub fn generate_registry(model: &ApiModel, tables: &NamingTables) -> TokenStream {
    let accessors = model.services.iter().map(|service| {
        let accessor = member_ident(&service.accessor_name(tables));
        let service_type = type_ident(&service.struct_name());
        let doc = format!(" Operations under the `{}` namespace.", service.name);
        quote! {
            #[doc = #doc]
            pub fn #accessor(&self) -> #service_type<'a> {
                #service_type { client: self.client }
            }
        }
    });

    quote! {
        /// Service registry with one accessor per API namespace.
        #[derive(Debug, Clone, Copy)]
        pub struct Services<'a> {
            client: &'a Client,
        }

        impl<'a> Services<'a> {
            pub(crate) fn new(client: &'a Client) -> Self {
                Self { client }
            }

            #(#accessors)*
        }
    }
}
