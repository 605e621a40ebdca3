//! # Parsing de Requests HTTP
//! src/http/request.rs
//!
//! Este módulo implementa un parser HTTP desde cero.
//!
//! ## Formato de un Request
//!
//! ```text
//! GET /echo/abc HTTP/1.1\r\n
//! Host: localhost:4221\r\n
//! User-Agent: curl/7.64.1\r\n
//! \r\n
//! cuerpo opcional
//! ```
//!
//! ## Componentes
//!
//! 1. **Request Line**: `METHOD /path PROTOCOL` — exactamente tres tokens
//!    separados por espacios simples
//! 2. **Headers**: Pares `Name: Value` (uno por línea, ambos recortados);
//!    una línea sin `:` se ignora en silencio
//! 3. **Empty Line**: `\r\n` que separa headers del body
//! 4. **Body**: Todo lo que sigue a la primera línea vacía
//!
//! El método y el protocolo se conservan textualmente: el router decide
//! qué métodos acepta cada ruta, no el parser.

use std::collections::HashMap;

/// Representa un request HTTP parseado
#[derive(Debug, Clone)]
pub struct Request {
    /// Método HTTP tal como llegó (ej: "GET", "POST")
    method: String,

    /// Path de la petición (ej: "/echo/abc")
    path: String,

    /// Protocolo tal como llegó (ej: "HTTP/1.1")
    protocol: String,

    /// Headers HTTP (ej: {"Host": "localhost:4221"})
    ///
    /// Nombres case-sensitive tal como se recibieron; un nombre duplicado
    /// sobrescribe al anterior.
    headers: HashMap<String, String>,

    /// Body del request (todo lo posterior a la primera línea vacía)
    body: String,
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Request vacío
    EmptyRequest,

    /// Formato inválido de la request line (no son exactamente 3 tokens)
    InvalidRequestLine,

    /// El buffer no es UTF-8 válido
    InvalidUtf8,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::EmptyRequest => write!(f, "Empty request"),
            ParseError::InvalidRequestLine => write!(f, "Invalid request line format"),
            ParseError::InvalidUtf8 => write!(f, "Request is not valid UTF-8"),
        }
    }
}

impl std::error::Error for ParseError {}

impl Request {
    /// Parsea un request HTTP desde bytes
    ///
    /// # Argumentos
    ///
    /// * `buffer` - Buffer conteniendo el request tal como se leyó del socket
    ///
    /// # Retorna
    ///
    /// * `Ok(Request)` - Request parseado exitosamente
    /// * `Err(ParseError)` - Error durante el parsing
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use file_server::http::Request;
    ///
    /// let raw = b"GET /echo/abc HTTP/1.1\r\nHost: localhost:4221\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.method(), "GET");
    /// assert_eq!(request.path(), "/echo/abc");
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        // Convertir a string (validando que sea UTF-8 válido)
        let request_str = std::str::from_utf8(buffer)
            .map_err(|_| ParseError::InvalidUtf8)?;

        if request_str.is_empty() {
            return Err(ParseError::EmptyRequest);
        }

        // Separar por \r\n para obtener líneas
        let lines: Vec<&str> = request_str.split("\r\n").collect();

        // 1. Parsear la request line (primera línea)
        let (method, path, protocol) = Self::parse_request_line(lines[0])?;

        // 2. Parsear headers (resto de líneas hasta encontrar línea vacía)
        let headers = Self::parse_headers(&lines[1..]);

        // 3. Parsear body (todo lo posterior a la primera línea vacía)
        let body = Self::parse_body(&lines[1..]);

        Ok(Request {
            method,
            path,
            protocol,
            headers,
            body,
        })
    }

    /// Parsea la request line (primera línea del request)
    ///
    /// Formato: `GET /path HTTP/1.1` — la línea se separa por espacios
    /// simples y debe producir exactamente tres tokens.
    fn parse_request_line(line: &str) -> Result<(String, String, String), ParseError> {
        let parts: Vec<&str> = line.split(' ').collect();

        // Debe tener exactamente 3 partes: METHOD PATH PROTOCOL
        if parts.len() != 3 {
            return Err(ParseError::InvalidRequestLine);
        }

        Ok((
            parts[0].to_string(),
            parts[1].to_string(),
            parts[2].to_string(),
        ))
    }

    /// Parsea los headers HTTP
    ///
    /// Cada header tiene formato: "Name: Value". Nombre y valor se
    /// recortan de espacios. Una línea sin ':' se ignora. Un nombre
    /// repetido sobrescribe el valor anterior.
    fn parse_headers(lines: &[&str]) -> HashMap<String, String> {
        let mut headers = HashMap::new();

        for line in lines {
            // La línea vacía marca el fin de los headers
            if line.is_empty() {
                break;
            }

            // Separar en el primer ':'
            if let Some((name, value)) = line.split_once(':') {
                headers.insert(name.trim().to_string(), value.trim().to_string());
            }
        }

        headers
    }

    /// Parsea el cuerpo del request
    ///
    /// El body es todo lo que sigue a la primera línea vacía, re-unido
    /// con `\r\n`.
    fn parse_body(lines: &[&str]) -> String {
        for (i, line) in lines.iter().enumerate() {
            if line.is_empty() {
                return lines[i + 1..].join("\r\n");
            }
        }
        String::new()
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Obtiene el path del request
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Obtiene el protocolo del request
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// Obtiene todos los headers
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header específico
    ///
    /// # Ejemplo
    /// ```
    /// use file_server::http::Request;
    ///
    /// let raw = b"GET / HTTP/1.1\r\nUser-Agent: curl/7.64.1\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.header("User-Agent"), Some("curl/7.64.1"));
    /// assert_eq!(request.header("Missing"), None);
    /// ```
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    /// Obtiene el body del request
    pub fn body(&self) -> &str {
        &self.body
    }
}
