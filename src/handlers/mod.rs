//! # Handlers del Servidor
//!
//! Este módulo contiene la implementación de los handlers de cada ruta.
//!
//! ## Rutas soportadas
//!
//! - **basic**: `GET /`, `GET /echo/{msg}`, `GET /user-agent`
//! - **files**: `GET /files/{name}`, `POST /files/{name}`
//!
//! Cada handler es una función que recibe un Request y la configuración
//! (de solo lectura) y retorna una Response. Solo los handlers de
//! archivos tienen efectos secundarios, y el filesystem es su única
//! fuente de fallo.

pub mod basic;
pub mod files;

// Re-exportar funciones útiles
pub use basic::*;
pub use files::*;
