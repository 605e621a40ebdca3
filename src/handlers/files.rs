//! # Handlers de Archivos
//! src/handlers/files.rs
//!
//! Implementación de las rutas `/files`:
//! - `GET /files/<name>`: Retorna el contenido del archivo como
//!   `application/octet-stream`, o 404 si no existe
//! - `POST /files/<name>`: Escribe el body del request en el archivo
//!   (creándolo o truncándolo) y retorna 201
//!
//! Cualquier error de filesystem distinto de "no existe" responde 500 y
//! cierra solo esa conexión: el proceso nunca termina por una request.

use crate::http::{Request, Response, StatusCode};
use crate::storage::FileStore;
use std::io::ErrorKind;

/// Handler para `GET /files/<name>`
pub fn get_file_handler(req: &Request, store: &FileStore) -> Response {
    let filename = match req.path().strip_prefix("/files/") {
        Some(name) => name,
        None => return Response::new(StatusCode::NotFound),
    };

    match store.read(filename) {
        Ok(contents) => Response::new(StatusCode::Ok)
            .with_header("Content-Type", "application/octet-stream")
            .with_body_bytes(contents),
        Err(e) if e.kind() == ErrorKind::NotFound => Response::new(StatusCode::NotFound),
        Err(e) => {
            eprintln!("   ❌ Error leyendo '{}': {}", filename, e);
            Response::new(StatusCode::InternalServerError)
        }
    }
}

/// Handler para `POST /files/<name>`
pub fn post_file_handler(req: &Request, store: &FileStore) -> Response {
    let filename = match req.path().strip_prefix("/files/") {
        Some(name) => name,
        None => return Response::new(StatusCode::BadRequest),
    };

    match store.write(filename, req.body().as_bytes()) {
        Ok(()) => Response::new(StatusCode::Created),
        Err(e) if e.kind() == ErrorKind::InvalidInput => {
            Response::new(StatusCode::BadRequest)
        }
        Err(e) => {
            eprintln!("   ❌ Error escribiendo '{}': {}", filename, e);
            Response::new(StatusCode::InternalServerError)
        }
    }
}
