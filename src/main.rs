//! # Mini HTTP Server - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor. Parsea la configuración desde CLI y
//! variables de entorno, la valida y arranca el servidor. Solo el fallo
//! del bind inicial es fatal para el proceso.

use mini_http::config::Config;
use mini_http::server::Server;

fn main() {
    println!("=================================");
    println!("  Mini HTTP/1.1 Server");
    println!("=================================\n");

    // Crear configuración desde CLI args y env
    let config = Config::new();

    if let Err(e) = config.validate() {
        eprintln!("[!] Configuración inválida: {}", e);
        std::process::exit(1);
    }

    config.print_summary();

    // Crear el servidor
    let mut server = Server::new(config);

    // Iniciar el servidor (esto bloqueará el thread)
    if let Err(e) = server.run() {
        eprintln!("[!] Error fatal: {}", e);
        std::process::exit(1);
    }
}
