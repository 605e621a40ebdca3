//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Implementación del servidor TCP que maneja múltiples conexiones
//! simultáneas usando threads. Cada conexión se procesa en su propio
//! thread, sin estado mutable compartido.
//!
//! Un fallo al atender una conexión se registra y cierra solo esa
//! conexión: el proceso nunca termina por un error de handler. El loop de
//! accept también sobrevive a errores de accept individuales.

use crate::config::Config;
use crate::http::{Request, Response, StatusCode};
use crate::router::Router;
use crate::storage::FileStore;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;

/// Tamaño del buffer de lectura: una sola lectura acotada de 100 KiB.
///
/// Requests más grandes se truncan en silencio (sin loop de lectura ni
/// framing por Content-Length). Es una simplificación deliberada del
/// protocolo soportado, no un descuido.
const READ_BUFFER_SIZE: usize = 102_400;

/// Servidor HTTP/1.1 concurrente
pub struct Server {
    config: Config,
    router: Arc<Router>,
    listener: Option<TcpListener>,
}

impl Server {
    /// Crea el servidor a partir de la configuración
    ///
    /// El adaptador de archivos queda anclado al directorio base de la
    /// configuración; los handlers nunca leen estado global.
    pub fn new(config: Config) -> Self {
        let store = FileStore::new(config.directory.clone());
        let router = Router::new(store);

        Self {
            config,
            router: Arc::new(router),
            listener: None,
        }
    }

    /// Hace bind del socket de escucha sin empezar a aceptar conexiones
    ///
    /// Separado de [`serve`](Self::serve) para que los tests puedan hacer
    /// bind al puerto 0 y consultar la dirección efectiva con
    /// [`local_addr`](Self::local_addr).
    pub fn bind(&mut self) -> std::io::Result<()> {
        let address = self.config.address();
        println!("[*] Iniciando servidor en {}", address);

        let listener = TcpListener::bind(&address)?;
        println!("[+] Servidor escuchando en {}", listener.local_addr()?);

        self.listener = Some(listener);
        Ok(())
    }

    /// Obtiene la dirección local efectiva del socket de escucha
    ///
    /// Retorna `None` si todavía no se hizo bind.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.listener.as_ref().and_then(|l| l.local_addr().ok())
    }

    /// Acepta conexiones indefinidamente, una por thread
    pub fn serve(&self) -> std::io::Result<()> {
        let listener = match self.listener.as_ref() {
            Some(l) => l,
            None => {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::NotConnected,
                    "serve() called before bind()",
                ));
            }
        };

        println!("[*] Modo concurrente: un thread por conexión\n");

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let router = Arc::clone(&self.router);

                    let peer_addr = stream
                        .peer_addr()
                        .map(|addr| addr.to_string())
                        .unwrap_or_else(|_| "unknown".to_string());

                    println!("   ✅ Nueva conexión desde: {}", peer_addr);

                    thread::spawn(move || {
                        if let Err(e) = Self::handle_connection(stream, router) {
                            eprintln!("   ❌ Error en conexión de {}: {}", peer_addr, e);
                        }
                    });
                }
                Err(e) => {
                    eprintln!("   ❌ Error al aceptar conexión: {}", e);
                }
            }
        }

        Ok(())
    }

    /// Hace bind y atiende conexiones (bloquea el thread actual)
    pub fn run(&mut self) -> std::io::Result<()> {
        self.bind()?;
        self.serve()
    }

    /// Atiende una conexión completa: leer, parsear, rutear, responder
    ///
    /// Una única lectura acotada; el stream se cierra al salir. Los
    /// errores de parseo responden un 400 fijo en vez de propagarse.
    fn handle_connection(mut stream: TcpStream, router: Arc<Router>) -> std::io::Result<()> {
        let mut buffer = vec![0u8; READ_BUFFER_SIZE];
        let bytes_read = stream.read(&mut buffer)?;

        if bytes_read == 0 {
            println!("   ✅ Conexión cerrada sin datos");
            return Ok(());
        }

        let response = match Request::parse(&buffer[..bytes_read]) {
            Ok(request) => {
                println!("   ✅ {} {}", request.method(), request.path());
                router.route(&request)
            }
            Err(e) => {
                println!("   ❌ Parse error: {}", e);
                Response::new(StatusCode::BadRequest)
            }
        };

        stream.write_all(&response.to_bytes())?;
        stream.flush()?;

        println!("   ✅ {}\n", response.status());

        Ok(())
    }
}
