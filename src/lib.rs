//! # Mini HTTP Server
//! src/lib.rs
//!
//! Servidor HTTP/1.1 concurrente implementado desde cero sobre sockets TCP,
//! sin librerías HTTP de alto nivel: el parsing de requests, el routing y
//! la serialización de responses son propios.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: Parsing de requests y serialización de responses (wire codec)
//! - `encoding`: Negociación de contenido (Content-Encoding: gzip)
//! - `router`: Tabla de rutas método → primer segmento del path → handler
//! - `handlers`: Implementación de los handlers de cada ruta
//! - `server`: Accept loop TCP y despacho por conexión
//! - `config`: Configuración por CLI y variables de entorno
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use mini_http::server::Server;
//! use mini_http::config::Config;
//!
//! let config = Config::default();
//! let mut server = Server::new(config);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod encoding;
pub mod handlers;
pub mod http;
pub mod router;
pub mod server;
