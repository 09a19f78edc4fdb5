//! Image Analysis Common Library
//!
//! Web(WASM)のUIから切り離してネイティブでテストできる型とロジック

pub mod config;
pub mod data_url;
pub mod error;
pub mod form;
pub mod types;

pub use config::WebhookConfig;
pub use data_url::{
    decode_data_url, extract_base64_from_data_url, extract_mime_type_from_data_url, to_data_url,
};
pub use error::{Error, Result};
pub use form::{SelectedFile, SubmissionState, UploadForm};
pub use types::{AnalysisOutcome, ErrorPayload, UploadPayload};
