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
//! User-Agent: curl/7.68.0\r\n
//! \r\n
//! body opcional
//! ```
//!
//! ## Componentes
//!
//! 1. **Request Line**: `METHOD /path VERSION` (la versión se ignora)
//! 2. **Headers**: Pares `Name: Value` (uno por línea)
//! 3. **Empty Line**: `\r\n` que separa headers del body
//! 4. **Body**: bytes crudos (opcional)
//!
//! ## Política de terminación de headers
//!
//! El parsing de headers se detiene en la PRIMERA línea que no contiene
//! `:`. Eso termina en la línea vacía separadora, pero también en
//! cualquier línea de header malformada: los headers acumulados hasta
//! ese punto se conservan y el resto se descarta. Los handlers solo
//! necesitan los headers acumulados antes del corte.

use std::collections::HashMap;

/// Representa un request HTTP parseado
#[derive(Debug, Clone)]
pub struct Request {
    /// Método HTTP como token crudo (ej: "GET", "POST").
    /// Se conserva como string: un método desconocido no es un error
    /// de parsing, simplemente no tendrá entrada en la tabla de rutas.
    method: String,

    /// Path de la petición (ej: "/echo/abc"), siempre empieza con "/"
    path: String,

    /// Headers HTTP (ej: {"Host": "localhost:4221"}).
    /// Nombres case-sensitive; la última ocurrencia gana.
    headers: HashMap<String, String>,

    /// Body del request en bytes crudos
    body: Vec<u8>,
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Request vacío
    EmptyRequest,

    /// Formato inválido de la request line
    InvalidRequestLine,

    /// El bloque de headers no es UTF-8 válido
    InvalidEncoding,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::EmptyRequest => write!(f, "Empty request"),
            ParseError::InvalidRequestLine => write!(f, "Invalid request line format"),
            ParseError::InvalidEncoding => write!(f, "Request head is not valid UTF-8"),
        }
    }
}

impl std::error::Error for ParseError {}

impl Request {
    /// Parsea un request HTTP desde bytes
    ///
    /// El buffer debe contener la request line, los headers, la línea
    /// vacía separadora y los bytes de body que ya se hayan leído. Si
    /// el separador `\r\n\r\n` no está presente (request truncado), todo
    /// el buffer se trata como head y el body queda vacío.
    ///
    /// # Argumentos
    ///
    /// * `buffer` - Buffer conteniendo el request HTTP
    ///
    /// # Retorna
    ///
    /// * `Ok(Request)` - Request parseado exitosamente
    /// * `Err(ParseError)` - Error durante el parsing
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use mini_http::http::Request;
    ///
    /// let raw = b"GET /echo/abc HTTP/1.1\r\nHost: localhost\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.method(), "GET");
    /// assert_eq!(request.path(), "/echo/abc");
    /// assert_eq!(request.header("Host"), Some("localhost"));
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        // Separar head y body en el primer \r\n\r\n
        let (head, body) = match find_terminator(buffer) {
            Some(pos) => (&buffer[..pos], buffer[pos + 4..].to_vec()),
            None => (buffer, Vec::new()),
        };

        // El head debe ser UTF-8 válido; el body se queda en bytes crudos
        let head = std::str::from_utf8(head)
            .map_err(|_| ParseError::InvalidEncoding)?;

        if head.trim().is_empty() {
            return Err(ParseError::EmptyRequest);
        }

        let lines: Vec<&str> = head.split("\r\n").collect();

        // 1. Parsear la request line (primera línea)
        let (method, path) = Self::parse_request_line(lines[0])?;

        // 2. Parsear headers (resto de líneas, con política de corte)
        let headers = Self::parse_headers(&lines[1..]);

        Ok(Request {
            method,
            path,
            headers,
            body,
        })
    }

    /// Parsea la request line (primera línea del request)
    ///
    /// Formato: `GET /path HTTP/1.1`. La versión se ignora; con menos de
    /// dos tokens el request se rechaza en vez de indexar fuera de rango.
    fn parse_request_line(line: &str) -> Result<(String, String), ParseError> {
        let parts: Vec<&str> = line.split_whitespace().collect();

        if parts.len() < 2 {
            return Err(ParseError::InvalidRequestLine);
        }

        let method = parts[0].to_string();
        let path = parts[1].to_string();

        // Un path que no empieza con "/" no puede rutearse por segmentos
        if !path.starts_with('/') {
            return Err(ParseError::InvalidRequestLine);
        }

        Ok((method, path))
    }

    /// Parsea los headers HTTP
    ///
    /// Cada header tiene formato `Name: Value`. Se corta en la primera
    /// línea sin `:` (incluida la línea vacía); lo acumulado se conserva.
    fn parse_headers(lines: &[&str]) -> HashMap<String, String> {
        let mut headers = HashMap::new();

        for line in lines {
            match line.split_once(':') {
                Some((name, value)) => {
                    headers.insert(name.trim().to_string(), value.trim().to_string());
                }
                None => break,
            }
        }

        headers
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP del request como token
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Obtiene el path del request
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Obtiene el segmento del path en la posición `index`
    ///
    /// Los segmentos son el resultado de dividir el path por "/": para
    /// `/echo/abc`, el segmento 1 es "echo" y el 2 es "abc". Los
    /// segmentos posteriores a los consumidos se ignoran.
    ///
    /// # Ejemplo
    /// ```
    /// use mini_http::http::Request;
    ///
    /// let raw = b"GET /echo/abc/extra HTTP/1.1\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.path_segment(1), Some("echo"));
    /// assert_eq!(request.path_segment(2), Some("abc"));
    /// assert_eq!(request.path_segment(5), None);
    /// ```
    pub fn path_segment(&self, index: usize) -> Option<&str> {
        self.path.split('/').nth(index)
    }

    /// Obtiene todos los headers
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header específico (nombre case-sensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    /// Obtiene el body del request
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Busca el separador `\r\n\r\n` entre headers y body
fn find_terminator(buffer: &[u8]) -> Option<usize> {
    buffer.windows(4).position(|window| window == b"\r\n\r\n")
}
