//! # Handlers Básicos
//! src/handlers/basic.rs
//!
//! Implementación de los handlers sin efectos secundarios:
//! - /: Página raíz
//! - /echo/{msg}: Devuelve el mensaje del path
//! - /user-agent: Devuelve el header User-Agent del request

use crate::config::Config;
use crate::http::{Request, Response, StatusCode};

/// Handler para `GET /`
///
/// Retorna 200 con body vacío y sin headers.
pub fn root_handler(_req: &Request, _config: &Config) -> Response {
    Response::new(StatusCode::Ok)
}

/// Handler para `GET /echo/{msg}`
///
/// Devuelve como body el segmento del path en la posición 2 (el tercer
/// token separado por "/"). Los segmentos extra se ignoran: para
/// `/echo/abc/extra` el body es "abc". Si el segmento no existe
/// (`/echo`), el mensaje es la cadena vacía.
///
/// # Ejemplo de response
/// ```text
/// HTTP/1.1 200 OK
/// Content-Type: text/plain
/// Content-Length: 3
///
/// abc
/// ```
pub fn echo_handler(req: &Request, _config: &Config) -> Response {
    let msg = req.path_segment(2).unwrap_or("");

    Response::new(StatusCode::Ok)
        .with_header("Content-Type", "text/plain")
        .with_body(msg)
}

/// Handler para `GET /user-agent`
///
/// Devuelve como body el valor del header `User-Agent` del request,
/// o la cadena vacía si no está presente.
pub fn user_agent_handler(req: &Request, _config: &Config) -> Response {
    let body = req.header("User-Agent").unwrap_or("");

    Response::new(StatusCode::Ok)
        .with_header("Content-Type", "text/plain")
        .with_body(body)
}
