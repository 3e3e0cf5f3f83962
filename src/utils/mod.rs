pub mod http;
pub mod nonce;
pub mod url;

// Re-export common utilities
pub use url::{url_decode, url_encode};
