//! # Handlers de Archivos
//! src/handlers/files.rs
//!
//! Implementación de los handlers que tocan el filesystem:
//! - GET /files/{name}: Leer un archivo del directorio configurado
//! - POST /files/{name}: Escribir el body del request a un archivo
//!
//! El nombre de archivo es el segmento 2 del path y se resuelve como
//! `directory + name`, con el directorio configurado actuando de
//! prefijo literal. No hay sanitización de `..` ni de paths absolutos.
//! Las escrituras concurrentes al mismo nombre no se sincronizan: el
//! filesystem es la única fuente de verdad y de fallo.

use crate::config::Config;
use crate::http::{Request, Response, StatusCode};
use std::fs;

/// Handler para `GET /files/{name}`
///
/// Lee el archivo `directory + name` completo en memoria.
///
/// - Éxito: 200 con el contenido como body, `Content-Type:
///   application/octet-stream` y `Content-Length` del contenido.
/// - Fallo de lectura (no existe, permisos, etc.): 404 con body vacío,
///   `Content-Type: text/plain` y `Content-Length: 0`.
pub fn read_file_handler(req: &Request, config: &Config) -> Response {
    let name = req.path_segment(2).unwrap_or("");
    let path = format!("{}{}", config.directory, name);

    match fs::read(&path) {
        Ok(contents) => Response::new(StatusCode::Ok)
            .with_header("Content-Type", "application/octet-stream")
            .with_body_bytes(contents),
        Err(_) => Response::new(StatusCode::NotFound)
            .with_header("Content-Type", "text/plain")
            .with_body(""),
    }
}

/// Handler para `POST /files/{name}`
///
/// Escribe el body del request tal cual a `directory + name`,
/// creando o truncando el archivo con permisos estándar.
///
/// - Éxito: 201 con body vacío y `Content-Type: text/plain`.
/// - Fallo de escritura: 500 con body vacío y sin headers.
pub fn write_file_handler(req: &Request, config: &Config) -> Response {
    let name = req.path_segment(2).unwrap_or("");
    let path = format!("{}{}", config.directory, name);

    match fs::write(&path, req.body()) {
        Ok(()) => Response::new(StatusCode::Created)
            .with_header("Content-Type", "text/plain"),
        Err(_) => Response::new(StatusCode::InternalServerError),
    }
}
