//! # Handlers de Rutas
//! src/handlers/mod.rs
//!
//! Implementación de las rutas fijas del servidor:
//! - `basic`: `/`, `/echo/<msg>`, `/user-agent`
//! - `files`: `GET /files/<name>`, `POST /files/<name>`
//!
//! Un handler recibe el request (y, para las rutas de archivos, el
//! [`FileStore`](crate::storage::FileStore)) y retorna una `Response`
//! completa. El router decide cuál handler ejecutar.

pub mod basic;
pub mod files;

pub use basic::{echo_handler, root_handler, user_agent_handler};
pub use files::{get_file_handler, post_file_handler};
