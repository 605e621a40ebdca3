//! # Módulo HTTP
//!
//! Este módulo implementa un subconjunto de HTTP/1.1 desde cero, sin usar
//! librerías de alto nivel. Incluye:
//!
//! - Parsing de requests (request line, headers y body)
//! - Construcción de responses
//! - Manejo de status codes
//!
//! ## Subconjunto soportado
//!
//! Una request por conexión, sin keep-alive, sin chunked transfer
//! encoding y sin folding de headers.
//!
//! ### Formato de Request
//!
//! ```text
//! GET /path HTTP/1.1\r\n
//! Header-Name: Header-Value\r\n
//! Another-Header: Value\r\n
//! \r\n
//! cuerpo opcional
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 3\r\n
//! \r\n
//! abc
//! ```

pub mod request;   // Parsing de HTTP requests
pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
pub use request::{ParseError, Request};
pub use response::Response;
pub use status::StatusCode;
