//! HTTP protocol layer module
//!
//! Response builders and query-string helpers shared by the request handlers.

pub mod query;
pub mod response;

// Re-export commonly used functions
pub use query::first_query_value;
pub use response::{
    build_400_response, build_404_response, build_empty_response, build_file_response,
    build_json_response,
};
