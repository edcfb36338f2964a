//! Runtime client for the exemplar-generated bindings.
//!
//! [`Client`] carries the HTTP transport, base URL and credentials. The
//! [`generated`] module is written by `exemplar-gen` and adds one typed
//! service per API namespace, reached through [`Client::services`].
//!
//! ## Example Usage
//!
//! ```no_run
//! use exemplar_client::{Client, ClientError};
//! use exemplar_client::generated::ControlsGetControlByIDParams;
//!
//! # async fn run() -> Result<(), ClientError> {
//! let client = Client::builder().bearer_token("token").build()?;
//!
//! let params = ControlsGetControlByIDParams {
//!     control_id: "ctl_123".to_string(),
//! };
//! let control = client.services().controls().get_control_by_id(&params).await?;
//! println!("{:?}", control.name);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod generated;

pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL, encode_path_segment};
pub use error::{ApiError, ClientError};
pub use generated::Services;
