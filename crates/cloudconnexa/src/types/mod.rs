//! Validated value types used throughout the library.

mod api_url;
mod timestamp;

pub use api_url::ApiUrl;
pub use timestamp::Timestamp;
