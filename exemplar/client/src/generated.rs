// This code was automatically generated by exemplar-gen. Do not edit manually.

//! Generated service bindings.
//!
//! 9 operations across 5 services, reachable through [`Services`].
//!
//! ## Services
//!
//! - `ControlsService` (2)
//! - `DocumentsService` (1)
//! - `HealthService` (1)
//! - `IntegrationsService` (1)
//! - `VendorsService` (4)
//!
//! ## Example
//!
//! ```ignore
//! let client = Client::builder().bearer_token(token).build()?;
//! let response = client.services().health().health().await?;
//! ```
use crate::client::Client;
use crate::error::ClientError;
/// Service registry with one accessor per API namespace.
#[derive(Debug, Clone, Copy)]
pub struct Services<'a> {
    client: &'a Client,
}
impl<'a> Services<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }
    /// Operations under the `Controls` namespace.
    pub fn controls(&self) -> ControlsService<'a> {
        ControlsService {
            client: self.client,
        }
    }
    /// Operations under the `Documents` namespace.
    pub fn documents(&self) -> DocumentsService<'a> {
        DocumentsService {
            client: self.client,
        }
    }
    /// Operations under the `Health` namespace.
    pub fn health(&self) -> HealthService<'a> {
        HealthService {
            client: self.client,
        }
    }
    /// Operations under the `Integrations` namespace.
    pub fn integrations(&self) -> IntegrationsService<'a> {
        IntegrationsService {
            client: self.client,
        }
    }
    /// Operations under the `Vendors` namespace.
    pub fn vendors(&self) -> VendorsService<'a> {
        VendorsService {
            client: self.client,
        }
    }
}
/// Response body of [`ControlsService::get_control_by_id`].
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ControlsGetControlByIDResponse {
    #[serde(rename = "active", skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(rename = "id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
/// Parameters for [`ControlsService::get_control_by_id`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlsGetControlByIDParams {
    /// Path parameter `controlId`. Must not be empty.
    pub control_id: String,
}
/// Response body of [`ControlsService::list_controls_documents`].
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ControlsListControlsDocumentsResponse {
    #[serde(rename = "results", skip_serializing_if = "Option::is_none")]
    pub results: Option<serde_json::Map<String, serde_json::Value>>,
}
/// Parameters for [`ControlsService::list_controls_documents`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlsListControlsDocumentsParams {
    /// Path parameter `controlId`. Must not be empty.
    pub control_id: String,
    /// Query parameter `pageSize`.
    pub page_size: Option<i64>,
    /// Query parameter `pageCursor`.
    pub page_cursor: Option<String>,
}
/// Operations under the `Controls` namespace (2 endpoints).
#[derive(Debug, Clone, Copy)]
pub struct ControlsService<'a> {
    client: &'a Client,
}
impl ControlsService<'_> {
    /// Returns a single control.
    pub async fn get_control_by_id(
        &self,
        params: &ControlsGetControlByIDParams,
    ) -> Result<ControlsGetControlByIDResponse, ClientError> {
        if params.control_id.is_empty() {
            return Err(ClientError::MissingParameter("controlId"));
        }
        let control_id = crate::client::encode_path_segment(&params.control_id);
        let path = format!("/controls/{}", control_id);
        let query: Vec<(&'static str, String)> = Vec::new();
        let request = self
            .client
            .new_request(reqwest::Method::GET, &path, &query, None::<&()>)?;
        self.client.do_json(request).await
    }
    /// Lists documents attached to a control. Results are paginated.
    pub async fn list_controls_documents(
        &self,
        params: &ControlsListControlsDocumentsParams,
    ) -> Result<ControlsListControlsDocumentsResponse, ClientError> {
        if params.control_id.is_empty() {
            return Err(ClientError::MissingParameter("controlId"));
        }
        let control_id = crate::client::encode_path_segment(&params.control_id);
        let path = format!("/controls/{}/documents", control_id);
        let mut query: Vec<(&'static str, String)> = Vec::new();
        if let Some(value) = &params.page_size {
            query.push(("pageSize", value.to_string()));
        }
        if let Some(value) = &params.page_cursor {
            query.push(("pageCursor", value.to_string()));
        }
        let request = self
            .client
            .new_request(reqwest::Method::GET, &path, &query, None::<&()>)?;
        self.client.do_json(request).await
    }
}
/// Response body of [`DocumentsService::upload_file_for_document`].
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DocumentsUploadFileForDocumentResponse {
    #[serde(rename = "fileName", skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(rename = "id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}
/// Parameters for [`DocumentsService::upload_file_for_document`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentsUploadFileForDocumentParams {
    /// Path parameter `documentId`. Must not be empty.
    pub document_id: String,
    /// Multipart field names mapped to their values.
    pub form_data: std::collections::BTreeMap<String, String>,
}
/// Operations under the `Documents` namespace (1 endpoint).
#[derive(Debug, Clone, Copy)]
pub struct DocumentsService<'a> {
    client: &'a Client,
}
impl DocumentsService<'_> {
    /// UploadFileForDocument performs POST /documents/:documentId/uploads.
    pub async fn upload_file_for_document(
        &self,
        params: &DocumentsUploadFileForDocumentParams,
    ) -> Result<DocumentsUploadFileForDocumentResponse, ClientError> {
        if params.document_id.is_empty() {
            return Err(ClientError::MissingParameter("documentId"));
        }
        let document_id = crate::client::encode_path_segment(&params.document_id);
        let path = format!("/documents/{}/uploads", document_id);
        let query: Vec<(&'static str, String)> = Vec::new();
        let request = self
            .client
            .new_multipart_request(
                reqwest::Method::POST,
                &path,
                &query,
                &params.form_data,
            )?;
        self.client.do_json(request).await
    }
}
/// Operations under the `Health` namespace (1 endpoint).
#[derive(Debug, Clone, Copy)]
pub struct HealthService<'a> {
    client: &'a Client,
}
impl HealthService<'_> {
    /// Health performs GET /health.
    pub async fn health(&self) -> Result<serde_json::Value, ClientError> {
        let query: Vec<(&'static str, String)> = Vec::new();
        let request = self
            .client
            .new_request(reqwest::Method::GET, "/health", &query, None::<&()>)?;
        self.client.do_json(request).await
    }
}
/// Parameters for [`IntegrationsService::list_items`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntegrationsListItemsParams {
    /// Query parameter `includeDisabled`.
    pub include_disabled: Option<bool>,
}
/// Operations under the `Integrations` namespace (1 endpoint).
#[derive(Debug, Clone, Copy)]
pub struct IntegrationsService<'a> {
    client: &'a Client,
}
impl IntegrationsService<'_> {
    /// ListItems performs GET /v1/integrations.
    pub async fn list_items(
        &self,
        params: &IntegrationsListItemsParams,
    ) -> Result<serde_json::Value, ClientError> {
        let path = "/v1/integrations";
        let mut query: Vec<(&'static str, String)> = Vec::new();
        if let Some(value) = &params.include_disabled {
            query.push(("includeDisabled", value.to_string()));
        }
        let request = self
            .client
            .new_request(reqwest::Method::GET, path, &query, None::<&()>)?;
        self.client.do_json(request).await
    }
}
/// Request body of [`VendorsService::create_vendor`].
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VendorsCreateVendorRequestBody {
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(rename = "websiteUrl", skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
}
/// Response body of [`VendorsService::create_vendor`].
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VendorsCreateVendorResponse {
    #[serde(rename = "id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
/// Parameters for [`VendorsService::create_vendor`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VendorsCreateVendorParams {
    /// JSON request body.
    pub body: Option<VendorsCreateVendorRequestBody>,
}
/// Parameters for [`VendorsService::set_vendor_tags`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VendorsSetVendorTagsParams {
    /// Path parameter `vendorId`. Must not be empty.
    pub vendor_id: String,
    /// JSON request body.
    pub body: Option<serde_json::Value>,
}
/// Request body of [`VendorsService::update`].
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VendorsUpdateRequestBody {
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
/// Parameters for [`VendorsService::update`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VendorsUpdateParams {
    /// Path parameter `vendorId`. Must not be empty.
    pub vendor_id: String,
    /// JSON request body.
    pub body: Option<VendorsUpdateRequestBody>,
}
/// Request body of [`VendorsService::update_for_state`].
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VendorsUpdateForStateRequestBody {
    #[serde(rename = "state", skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}
/// Parameters for [`VendorsService::update_for_state`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VendorsUpdateForStateParams {
    /// Path parameter `vendorId`. Must not be empty.
    pub vendor_id: String,
    /// JSON request body.
    pub body: Option<VendorsUpdateForStateRequestBody>,
}
/// Operations under the `Vendors` namespace (4 endpoints).
#[derive(Debug, Clone, Copy)]
pub struct VendorsService<'a> {
    client: &'a Client,
}
impl VendorsService<'_> {
    /// CreateVendor performs POST /vendors.
    pub async fn create_vendor(
        &self,
        params: &VendorsCreateVendorParams,
    ) -> Result<VendorsCreateVendorResponse, ClientError> {
        let path = "/vendors";
        let query: Vec<(&'static str, String)> = Vec::new();
        let request = self
            .client
            .new_request(reqwest::Method::POST, path, &query, params.body.as_ref())?;
        self.client.do_json(request).await
    }
    /// SetVendorTags performs PUT /vendors/:vendorId/tags.
    pub async fn set_vendor_tags(
        &self,
        params: &VendorsSetVendorTagsParams,
    ) -> Result<serde_json::Value, ClientError> {
        if params.vendor_id.is_empty() {
            return Err(ClientError::MissingParameter("vendorId"));
        }
        let vendor_id = crate::client::encode_path_segment(&params.vendor_id);
        let path = format!("/vendors/{}/tags", vendor_id);
        let query: Vec<(&'static str, String)> = Vec::new();
        let request = self
            .client
            .new_request(reqwest::Method::PUT, &path, &query, params.body.as_ref())?;
        self.client.do_json(request).await
    }
    /// Update performs PATCH /vendors/:vendorId.
    pub async fn update(
        &self,
        params: &VendorsUpdateParams,
    ) -> Result<serde_json::Value, ClientError> {
        if params.vendor_id.is_empty() {
            return Err(ClientError::MissingParameter("vendorId"));
        }
        let vendor_id = crate::client::encode_path_segment(&params.vendor_id);
        let path = format!("/vendors/{}", vendor_id);
        let query: Vec<(&'static str, String)> = Vec::new();
        let request = self
            .client
            .new_request(reqwest::Method::PATCH, &path, &query, params.body.as_ref())?;
        self.client.do_json(request).await
    }
    /// UpdateForState performs POST /vendors/:vendorId/state.
    pub async fn update_for_state(
        &self,
        params: &VendorsUpdateForStateParams,
    ) -> Result<serde_json::Value, ClientError> {
        if params.vendor_id.is_empty() {
            return Err(ClientError::MissingParameter("vendorId"));
        }
        let vendor_id = crate::client::encode_path_segment(&params.vendor_id);
        let path = format!("/vendors/{}/state", vendor_id);
        let query: Vec<(&'static str, String)> = Vec::new();
        let request = self
            .client
            .new_request(reqwest::Method::POST, &path, &query, params.body.as_ref())?;
        self.client.do_json(request).await
    }
}
