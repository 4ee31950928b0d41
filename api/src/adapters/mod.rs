//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod google;
pub mod passthrough;
pub mod random;

pub use google::{
    GoogleCloudTranslator, GoogleWebTranslator, DEFAULT_CLOUD_BASE_URL, DEFAULT_WEB_BASE_URL,
};
pub use passthrough::PassthroughTranslator;
pub use random::ThreadRngIndexSource;
