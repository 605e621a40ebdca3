//! # Handlers Básicos
//! src/handlers/basic.rs
//!
//! Implementación de las rutas sin acceso a archivos:
//! - `/`: Health check, 200 sin headers ni body
//! - `/echo/<msg>`: Refleja el mensaje del path como text/plain
//! - `/user-agent`: Refleja el header `User-Agent` como text/plain

use crate::http::{Request, Response, StatusCode};

/// Handler para `/`
///
/// Retorna exactamente `HTTP/1.1 200 OK\r\n\r\n`, sin headers ni body.
pub fn root_handler(_req: &Request) -> Response {
    Response::new(StatusCode::Ok)
}

/// Handler para `/echo/<msg>`
///
/// Extrae el mensaje como el sufijo posterior a la *última* aparición de
/// `echo/` en el path y lo retorna como body text/plain.
///
/// # Ejemplo de response
/// ```text
/// HTTP/1.1 200 OK\r\n
/// Content-Type: text/plain\r\n
/// Content-Length: 3\r\n
/// \r\n
/// abc
/// ```
///
/// Un mensaje vacío (`GET /echo/`) retorna 400.
pub fn echo_handler(req: &Request) -> Response {
    let message = extract_echo_message(req.path());

    if message.is_empty() {
        return Response::new(StatusCode::BadRequest);
    }

    Response::new(StatusCode::Ok)
        .with_header("Content-Type", "text/plain")
        .with_body(message)
}

/// Extrae el mensaje de un path `/echo/...`
///
/// Se toma el sufijo tras la última aparición de `echo/`, de modo que
/// `/echo/foo/echo/bar` produce `bar`.
fn extract_echo_message(path: &str) -> &str {
    path.split("echo/").last().unwrap_or("")
}

/// Handler para `/user-agent`
///
/// Retorna el valor del header `User-Agent` como body text/plain.
/// Si el header no está presente, retorna 400.
pub fn user_agent_handler(req: &Request) -> Response {
    match req.header("User-Agent") {
        Some(agent) => Response::new(StatusCode::Ok)
            .with_header("Content-Type", "text/plain")
            .with_body(agent),
        None => Response::new(StatusCode::BadRequest),
    }
}
