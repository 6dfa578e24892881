//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Implementación del servidor TCP que maneja múltiples conexiones
//! simultáneas usando threads. Cada conexión se procesa en su propio
//! thread y se cierra al terminar: sin keep-alive, sin timeouts y sin
//! límite de conexiones.
//!
//! ## Ciclo de una conexión
//!
//! ```text
//! read loop → Request::parse → Router::route → handler
//!           → encoding::negotiate → Response::to_bytes → write → close
//! ```

use crate::config::Config;
use crate::encoding;
use crate::handlers;
use crate::http::{Request, Response, StatusCode};
use crate::router::Router;
use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

/// Tamaño de cada lectura del socket
const READ_CHUNK_SIZE: usize = 4096;

/// Máximo de bytes acumulados buscando el separador de headers.
/// Pasado este límite, lo leído se entrega al parser tal cual.
const MAX_HEAD_SIZE: usize = 8192;

/// Servidor HTTP/1.1 concurrente
pub struct Server {
    config: Arc<Config>,
    router: Arc<Router>,
    listener: Option<TcpListener>,
}

impl Server {
    /// Crea el servidor y construye la tabla de rutas.
    ///
    /// La tabla se construye una única vez aquí; después del bind nadie
    /// la muta, así que se comparte entre threads sin sincronización.
    pub fn new(config: Config) -> Self {
        let mut router = Router::new();

        // Rutas GET
        router.register("GET", "", handlers::root_handler);
        router.register("GET", "echo", handlers::echo_handler);
        router.register("GET", "user-agent", handlers::user_agent_handler);
        router.register("GET", "files", handlers::read_file_handler);

        // Rutas POST
        router.register("POST", "files", handlers::write_file_handler);

        Self {
            config: Arc::new(config),
            router: Arc::new(router),
            listener: None,
        }
    }

    /// Hace bind del listener sin empezar a aceptar conexiones.
    ///
    /// Separado de `run` para poder consultar el puerto efectivo con
    /// `local_addr` cuando se configura el puerto 0 (efímero).
    pub fn bind(&mut self) -> io::Result<()> {
        let address = self.config.address();
        println!("[*] Iniciando servidor en {}", address);

        let listener = TcpListener::bind(&address)?;
        println!("[+] Servidor escuchando en {}", listener.local_addr()?);

        self.listener = Some(listener);
        Ok(())
    }

    /// Dirección local real del listener, disponible tras `bind`
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.listener.as_ref().and_then(|l| l.local_addr().ok())
    }

    /// Corre el accept loop: un thread por conexión aceptada.
    ///
    /// Solo el fallo del bind inicial es fatal; los errores de una
    /// conexión se registran y no afectan al resto.
    pub fn run(&mut self) -> io::Result<()> {
        if self.listener.is_none() {
            self.bind()?;
        }
        let listener = self.listener.as_ref().unwrap();
        println!("[*] Modo concurrente: un thread por conexión\n");

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let router = Arc::clone(&self.router);
                    let config = Arc::clone(&self.config);

                    let peer_addr = stream
                        .peer_addr()
                        .map(|addr| addr.to_string())
                        .unwrap_or_else(|_| "unknown".to_string());
                    println!("[*] Nueva conexión desde {}", peer_addr);

                    thread::spawn(move || {
                        if let Err(e) = Self::handle_connection(stream, router, config) {
                            eprintln!("[!] Error en conexión: {}", e);
                        }
                    });
                }
                Err(e) => {
                    eprintln!("[!] Error al aceptar conexión: {}", e);
                }
            }
        }

        Ok(())
    }

    /// Procesa una conexión completa: leer, parsear, rutear, negociar,
    /// serializar y escribir. Al retornar, el stream se cierra (drop).
    fn handle_connection(
        mut stream: TcpStream,
        router: Arc<Router>,
        config: Arc<Config>,
    ) -> io::Result<()> {
        let start = Instant::now();

        let buffer = read_request(&mut stream)?;
        if buffer.is_empty() {
            // El peer cerró sin enviar nada
            return Ok(());
        }

        let response = match Request::parse(&buffer) {
            Ok(request) => {
                println!("   {} {}", request.method(), request.path());

                let mut response = router.route(&request, &config);
                encoding::negotiate(&request, &mut response)?;
                response
            }
            Err(e) => {
                println!("   Parse error: {}", e);
                Response::error(StatusCode::BadRequest, &e.to_string())
            }
        };

        stream.write_all(&response.to_bytes())?;
        stream.flush()?;

        let latency = start.elapsed();
        println!(
            "   {} ({:.2}ms)\n",
            response.status(),
            latency.as_secs_f64() * 1000.0
        );

        Ok(())
    }
}

/// Lee un request completo del socket.
///
/// Acumula lecturas de `READ_CHUNK_SIZE` bytes hasta encontrar el
/// separador `\r\n\r\n`; después, si el bloque de headers declara
/// `Content-Length`, sigue leyendo hasta acumular esa cantidad de bytes
/// de body. Si el peer cierra antes de completar, retorna lo acumulado
/// y el parser decide.
fn read_request<R: Read>(reader: &mut R) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; READ_CHUNK_SIZE];

    // 1. Leer hasta el separador de headers
    let head_end = loop {
        if let Some(pos) = header_terminator(&buffer) {
            break pos;
        }
        if buffer.len() >= MAX_HEAD_SIZE {
            return Ok(buffer);
        }
        let n = reader.read(&mut chunk)?;
        if n == 0 {
            return Ok(buffer);
        }
        buffer.extend_from_slice(&chunk[..n]);
    };

    // 2. Completar el body según Content-Length
    let expected = head_end + 4 + content_length(&buffer[..head_end]);
    while buffer.len() < expected {
        let n = reader.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..n]);
    }

    Ok(buffer)
}

/// Busca el separador `\r\n\r\n` entre headers y body
fn header_terminator(buffer: &[u8]) -> Option<usize> {
    buffer.windows(4).position(|window| window == b"\r\n\r\n")
}

/// Extrae el valor de `Content-Length` del bloque de headers.
///
/// El nombre se compara exacto (case-sensitive) y la última ocurrencia
/// gana, igual que en el parser. Sin header o con valor no numérico, 0.
fn content_length(head: &[u8]) -> usize {
    let head = String::from_utf8_lossy(head);
    head.split("\r\n")
        .skip(1)
        .filter_map(|line| line.split_once(':'))
        .filter(|(name, _)| name.trim() == "Content-Length")
        .filter_map(|(_, value)| value.trim().parse().ok())
        .last()
        .unwrap_or(0)
}
