//! # File Server
//! src/lib.rs
//!
//! Servidor HTTP/1.1 minimalista implementado desde cero sobre TCP.
//! Acepta conexiones, parsea la request line y los headers, despacha a
//! un conjunto fijo de rutas y escribe la respuesta cruda sobre la misma
//! conexión. Sin keep-alive: una request por conexión.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: Parsing y construcción del protocolo HTTP
//! - `server`: Lógica del servidor TCP y manejo de conexiones
//! - `router`: Enrutamiento de peticiones a handlers
//! - `handlers`: Implementación de las rutas (/, /echo, /user-agent, /files)
//! - `storage`: Resolución y lectura/escritura de archivos bajo el
//!   directorio base configurado
//!
//! ## Ejemplo de uso
//!
//! ```ignore
//! use file_server::server::Server;
//! use file_server::config::Config;
//!
//! let config = Config::default();
//! let mut server = Server::new(config);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod handlers;
pub mod http;
pub mod router;
pub mod server;
pub mod storage;
