pub mod http_probe;
pub mod transport;
pub mod types;
pub mod url_parser;

// Re-export commonly used items
pub use http_probe::{compose_request, validate_response, HealthProbe};
pub use transport::{Connection, TcpTransport, Transport};
pub use types::*;
pub use url_parser::UrlError;
