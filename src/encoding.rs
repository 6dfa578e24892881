//! # Negociación de Contenido
//! src/encoding.rs
//!
//! Este módulo decide si la respuesta se comprime con gzip, en función
//! del header `Accept-Encoding` del request.
//!
//! ## Reglas de negociación
//!
//! - El valor de `Accept-Encoding` se divide por comas y cada token se
//!   recorta de espacios.
//! - Solo el token exacto `gzip` activa la compresión: nada de
//!   wildcards, q-values ni otras codificaciones, y la comparación es
//!   case-sensitive.
//! - La compresión se aplica al body tal cual, sin umbral mínimo de
//!   tamaño, y `Content-Length` se recalcula al tamaño comprimido.

use crate::http::{Request, Response};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;

/// Decide si el request acepta la codificación gzip
///
/// # Ejemplo
/// ```
/// use mini_http::encoding::accepts_gzip;
/// use mini_http::http::Request;
///
/// let raw = b"GET /echo/abc HTTP/1.1\r\nAccept-Encoding: deflate, gzip\r\n\r\n";
/// let request = Request::parse(raw).unwrap();
/// assert!(accepts_gzip(&request));
/// ```
pub fn accepts_gzip(request: &Request) -> bool {
    match request.header("Accept-Encoding") {
        Some(value) => value.split(',').any(|token| token.trim() == "gzip"),
        None => false,
    }
}

/// Aplica la negociación de contenido a una respuesta ya generada
///
/// Corre después del handler y antes de serializar. Si el request
/// acepta gzip, comprime el body en memoria, agrega
/// `Content-Encoding: gzip` y recalcula `Content-Length`. Si no,
/// deja la respuesta intacta.
pub fn negotiate(request: &Request, response: &mut Response) -> std::io::Result<()> {
    if !accepts_gzip(request) {
        return Ok(());
    }

    let compressed = gzip(response.body())?;
    response.add_header("Content-Encoding", "gzip");
    response.set_body_bytes(compressed);

    Ok(())
}

/// Comprime bytes con gzip (nivel de compresión por defecto)
fn gzip(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}
