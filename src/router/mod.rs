//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Este módulo implementa la tabla de rutas que mapea requests a handlers.
//!
//! ## Arquitectura
//!
//! ```text
//! Request → Router → Handler → Response
//! ```
//!
//! La tabla tiene dos niveles: método HTTP → primer segmento del path →
//! handler. El primer segmento es el texto entre el "/" inicial y el
//! siguiente "/" (o el resto del path si no hay más). Los parámetros de
//! path posteriores (el mensaje de /echo, el nombre de /files) los
//! extrae cada handler, no el router.
//!
//! La tabla se construye una sola vez al arrancar y es de solo lectura
//! durante toda la vida del proceso, así que se comparte entre threads
//! sin sincronización.

use crate::config::Config;
use crate::http::{Request, Response, StatusCode};
use std::collections::HashMap;

/// Tipo de función handler
///
/// Un handler recibe un Request y la configuración (de solo lectura,
/// para el directorio de archivos) y retorna una Response
pub type Handler = fn(&Request, &Config) -> Response;

/// Tabla de rutas: método → primer segmento del path → handler
pub struct Router {
    routes: HashMap<String, HashMap<String, Handler>>,
}

impl Router {
    /// Crea un nuevo router vacío
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Registra una ruta con su handler
    ///
    /// El segmento "" corresponde al path raíz "/".
    ///
    /// # Ejemplo
    /// ```
    /// use mini_http::router::Router;
    /// use mini_http::config::Config;
    /// use mini_http::http::{Request, Response, StatusCode};
    ///
    /// fn hello_handler(_req: &Request, _config: &Config) -> Response {
    ///     Response::new(StatusCode::Ok).with_body("hello")
    /// }
    ///
    /// let mut router = Router::new();
    /// router.register("GET", "hello", hello_handler);
    /// ```
    pub fn register(&mut self, method: &str, segment: &str, handler: Handler) {
        self.routes
            .entry(method.to_string())
            .or_default()
            .insert(segment.to_string(), handler);
    }

    /// Encuentra y ejecuta el handler apropiado para un request
    ///
    /// La búsqueda es O(1) esperado en cada nivel. Si no hay entrada
    /// para el método o para el primer segmento del path, retorna
    /// 404 Not Found con body vacío y sin headers.
    pub fn route(&self, request: &Request, config: &Config) -> Response {
        let segment = request.path_segment(1).unwrap_or("");

        match self
            .routes
            .get(request.method())
            .and_then(|by_segment| by_segment.get(segment))
        {
            Some(handler) => handler(request, config),
            None => Response::new(StatusCode::NotFound),
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
