//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Este módulo implementa el router que mapea paths HTTP a handlers.
//!
//! ## Arquitectura
//!
//! ```text
//! Request → Router → Handler → Response
//! ```
//!
//! El router aplica un conjunto fijo y ordenado de chequeos por prefijo
//! de path (y método, para `/user-agent` y `/files`); gana el primero que
//! coincide. Si ninguno coincide, retorna 404 Not Found sin headers ni
//! body.
//!
//! No se agregan headers comunes: las rutas fijas prometen secuencias de
//! bytes exactas (`GET /` responde literalmente `HTTP/1.1 200 OK\r\n\r\n`).

use crate::handlers;
use crate::http::{Request, Response, StatusCode};
use crate::storage::FileStore;

/// Router con el conjunto fijo de rutas del servidor
pub struct Router {
    /// Adaptador de archivos para las rutas `/files`
    store: FileStore,
}

impl Router {
    /// Crea un router anclado al adaptador de archivos indicado
    pub fn new(store: FileStore) -> Self {
        Self { store }
    }

    /// Selecciona y ejecuta el handler apropiado para un request
    ///
    /// Chequeos en orden:
    /// 1. path exactamente `/`
    /// 2. path con prefijo `/echo/`
    /// 3. path con prefijo `/user-agent` y método GET
    /// 4. path con prefijo `/files` y método GET
    /// 5. path con prefijo `/files` y método POST
    /// 6. cualquier otra cosa → 404
    ///
    /// # Ejemplo
    /// ```
    /// use file_server::router::Router;
    /// use file_server::http::Request;
    /// use file_server::storage::FileStore;
    ///
    /// let router = Router::new(FileStore::new("."));
    /// let raw = b"GET / HTTP/1.1\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    /// let response = router.route(&request);
    /// assert_eq!(response.to_bytes(), b"HTTP/1.1 200 OK\r\n\r\n");
    /// ```
    pub fn route(&self, request: &Request) -> Response {
        let path = request.path();
        let method = request.method();

        if path == "/" {
            handlers::root_handler(request)
        } else if path.starts_with("/echo/") {
            handlers::echo_handler(request)
        } else if path.starts_with("/user-agent") && method == "GET" {
            handlers::user_agent_handler(request)
        } else if path.starts_with("/files") && method == "GET" {
            handlers::get_file_handler(request, &self.store)
        } else if path.starts_with("/files") && method == "POST" {
            handlers::post_file_handler(request, &self.store)
        } else {
            Response::new(StatusCode::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU32, Ordering};

    static DIR_SEQ: AtomicU32 = AtomicU32::new(0);

    fn temp_router() -> (Router, PathBuf) {
        let seq = DIR_SEQ.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "file_server_router_test_{}_{}",
            std::process::id(),
            seq
        ));
        fs::create_dir_all(&dir).unwrap();
        (Router::new(FileStore::new(&dir)), dir)
    }

    fn route(router: &Router, raw: &[u8]) -> Response {
        let request = Request::parse(raw).unwrap();
        router.route(&request)
    }

    #[test]
    fn test_root_route_exact_bytes() {
        let (router, dir) = temp_router();

        let response = route(&router, b"GET / HTTP/1.1\r\n\r\n");
        assert_eq!(response.to_bytes(), b"HTTP/1.1 200 OK\r\n\r\n");

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_root_route_any_method() {
        let (router, dir) = temp_router();

        // La ruta raíz acepta cualquier método
        let response = route(&router, b"POST / HTTP/1.1\r\n\r\n");
        assert_eq!(response.status(), StatusCode::Ok);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_echo_route() {
        let (router, dir) = temp_router();

        let response = route(&router, b"GET /echo/abc HTTP/1.1\r\n\r\n");
        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.body(), b"abc");

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_user_agent_route_requires_get() {
        let (router, dir) = temp_router();

        let response = route(
            &router,
            b"POST /user-agent HTTP/1.1\r\nUser-Agent: curl/7.64.1\r\n\r\n",
        );
        assert_eq!(response.status(), StatusCode::NotFound);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_user_agent_route() {
        let (router, dir) = temp_router();

        let response = route(
            &router,
            b"GET /user-agent HTTP/1.1\r\nUser-Agent: curl/7.64.1\r\n\r\n",
        );
        assert_eq!(response.body(), b"curl/7.64.1");

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_files_route_get_and_post() {
        let (router, dir) = temp_router();

        let post = route(&router, b"POST /files/f.txt HTTP/1.1\r\n\r\nABC");
        assert_eq!(post.status(), StatusCode::Created);

        let get = route(&router, b"GET /files/f.txt HTTP/1.1\r\n\r\n");
        assert_eq!(get.status(), StatusCode::Ok);
        assert_eq!(get.body(), b"ABC");

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_files_route_other_method_is_not_found() {
        let (router, dir) = temp_router();

        let response = route(&router, b"DELETE /files/f.txt HTTP/1.1\r\n\r\n");
        assert_eq!(response.status(), StatusCode::NotFound);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_unmatched_route_exact_404() {
        let (router, dir) = temp_router();

        let response = route(&router, b"GET /nonexistent HTTP/1.1\r\n\r\n");
        assert_eq!(response.to_bytes(), b"HTTP/1.1 404 Not Found\r\n\r\n");

        fs::remove_dir_all(dir).unwrap();
    }
}
