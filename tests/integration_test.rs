//! Tests de integración para el servidor HTTP
//!
//! Cada test arranca un servidor real en un puerto efímero (puerto 0)
//! dentro del proceso y habla HTTP crudo por TCP, igual que un cliente
//! externo. No requieren ningún proceso previo corriendo.

use flate2::read::GzDecoder;
use mini_http::config::Config;
use mini_http::server::Server;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

/// Arranca un servidor en 127.0.0.1 con puerto efímero y retorna su
/// dirección real. El thread del accept loop queda corriendo de fondo.
fn start_server(directory: String) -> SocketAddr {
    let mut config = Config::default();
    config.host = "127.0.0.1".to_string();
    config.port = 0;
    config.directory = directory;

    let mut server = Server::new(config);
    server.bind().expect("bind");
    let addr = server.local_addr().expect("local addr");

    thread::spawn(move || {
        let _ = server.run();
    });

    addr
}

/// Servidor con un directorio temporal de archivos
fn start_server_with_dir() -> (SocketAddr, TempDir) {
    let dir = TempDir::new().expect("tempdir");
    let addr = start_server(format!("{}/", dir.path().display()));
    (addr, dir)
}

/// Helper: envía bytes crudos y retorna la response completa
fn send_raw(addr: SocketAddr, request: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).expect("connect");
    stream
        .set_read_timeout(Some(Duration::from_secs(5)))
        .unwrap();
    stream
        .set_write_timeout(Some(Duration::from_secs(5)))
        .unwrap();

    stream.write_all(request).expect("write");
    stream.flush().expect("flush");
    stream.shutdown(std::net::Shutdown::Write).expect("shutdown");

    let mut response = Vec::new();
    stream.read_to_end(&mut response).expect("read");
    response
}

/// Helper: separa la response en (head como texto, body en bytes)
fn split_response(raw: &[u8]) -> (String, Vec<u8>) {
    let pos = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("response sin separador de headers");
    let head = String::from_utf8(raw[..pos].to_vec()).expect("head no UTF-8");
    (head, raw[pos + 4..].to_vec())
}

/// Helper: verifica que el head contenga la línea de header exacta.
/// El orden de serialización de headers no está garantizado, así que
/// se compara línea a línea en vez de buscar substrings.
fn has_header(head: &str, line: &str) -> bool {
    head.lines().any(|l| l == line)
}

fn gunzip(data: &[u8]) -> Vec<u8> {
    let mut decoder = GzDecoder::new(data);
    let mut output = Vec::new();
    decoder.read_to_end(&mut output).expect("gunzip");
    output
}

#[test]
fn test_get_root() {
    let addr = start_server("./data/".to_string());

    let raw = send_raw(addr, b"GET / HTTP/1.1\r\n\r\n");

    // 200 con body vacío y sin headers: la imagen exacta en el wire
    assert_eq!(raw, b"HTTP/1.1 200 OK\r\n\r\n");
}

#[test]
fn test_echo() {
    let addr = start_server("./data/".to_string());

    let raw = send_raw(addr, b"GET /echo/abc HTTP/1.1\r\n\r\n");
    let (head, body) = split_response(&raw);

    assert!(head.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(has_header(&head, "Content-Type: text/plain"));
    assert!(has_header(&head, "Content-Length: 3"));
    assert_eq!(body, b"abc");
}

#[test]
fn test_echo_ignores_trailing_segments() {
    let addr = start_server("./data/".to_string());

    let raw = send_raw(addr, b"GET /echo/abc/extra HTTP/1.1\r\n\r\n");
    let (head, body) = split_response(&raw);

    assert!(head.starts_with("HTTP/1.1 200 OK"));
    assert_eq!(body, b"abc");
}

#[test]
fn test_user_agent() {
    let addr = start_server("./data/".to_string());

    let raw = send_raw(
        addr,
        b"GET /user-agent HTTP/1.1\r\nUser-Agent: foo/1.0\r\n\r\n",
    );
    let (head, body) = split_response(&raw);

    assert!(head.starts_with("HTTP/1.1 200 OK"));
    assert!(has_header(&head, "Content-Length: 7"));
    assert_eq!(body, b"foo/1.0");
}

#[test]
fn test_files_missing_is_404() {
    let (addr, _dir) = start_server_with_dir();

    let raw = send_raw(addr, b"GET /files/missing.txt HTTP/1.1\r\n\r\n");
    let (head, body) = split_response(&raw);

    assert!(head.starts_with("HTTP/1.1 404 Not Found\r\n"));
    assert!(has_header(&head, "Content-Length: 0"));
    assert!(body.is_empty());
}

#[test]
fn test_files_post_then_get() {
    let (addr, dir) = start_server_with_dir();

    let raw = send_raw(
        addr,
        b"POST /files/test.txt HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello",
    );
    let (head, _body) = split_response(&raw);
    assert!(head.starts_with("HTTP/1.1 201 Created\r\n"));
    assert!(has_header(&head, "Content-Type: text/plain"));

    // El archivo quedó en disco con el body literal
    let on_disk = std::fs::read(dir.path().join("test.txt")).unwrap();
    assert_eq!(on_disk, b"hello");

    let raw = send_raw(addr, b"GET /files/test.txt HTTP/1.1\r\n\r\n");
    let (head, body) = split_response(&raw);

    assert!(head.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(has_header(&head, "Content-Type: application/octet-stream"));
    assert!(has_header(&head, "Content-Length: 5"));
    assert_eq!(body, b"hello");
}

#[test]
fn test_files_serves_existing_file() {
    let (addr, dir) = start_server_with_dir();
    std::fs::write(dir.path().join("pre.txt"), "ya estaba").unwrap();

    let raw = send_raw(addr, b"GET /files/pre.txt HTTP/1.1\r\n\r\n");
    let (head, body) = split_response(&raw);

    assert!(head.starts_with("HTTP/1.1 200 OK"));
    assert_eq!(body, b"ya estaba");
}

#[test]
fn test_echo_with_gzip() {
    let addr = start_server("./data/".to_string());

    let raw = send_raw(
        addr,
        b"GET /echo/abc HTTP/1.1\r\nAccept-Encoding: gzip\r\n\r\n",
    );
    let (head, body) = split_response(&raw);

    assert!(head.starts_with("HTTP/1.1 200 OK"));
    assert!(has_header(&head, "Content-Encoding: gzip"));
    assert_eq!(gunzip(&body), b"abc");

    // Content-Length refleja el tamaño comprimido real
    let content_length: usize = head
        .lines()
        .find_map(|line| line.strip_prefix("Content-Length: "))
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(content_length, body.len());
}

#[test]
fn test_gzip_negotiated_from_token_list() {
    let addr = start_server("./data/".to_string());

    let raw = send_raw(
        addr,
        b"GET /echo/abc HTTP/1.1\r\nAccept-Encoding: deflate, gzip , br\r\n\r\n",
    );
    let (head, body) = split_response(&raw);

    assert!(has_header(&head, "Content-Encoding: gzip"));
    assert_eq!(gunzip(&body), b"abc");
}

#[test]
fn test_gzip_not_negotiated_for_other_tokens() {
    let addr = start_server("./data/".to_string());

    for accept in ["GZIP", "gzip;q=0", "supergzip", "deflate, br"] {
        let request = format!(
            "GET /echo/abc HTTP/1.1\r\nAccept-Encoding: {}\r\n\r\n",
            accept
        );
        let raw = send_raw(addr, request.as_bytes());
        let (head, body) = split_response(&raw);

        assert!(
            !head.contains("Content-Encoding"),
            "no debería comprimir con Accept-Encoding: {}",
            accept
        );
        assert_eq!(body, b"abc");
    }
}

#[test]
fn test_unknown_route_is_404() {
    let addr = start_server("./data/".to_string());

    for path in ["/unknown-route", "/echoes", "/files2/x", "/a/b/c"] {
        let request = format!("GET {} HTTP/1.1\r\n\r\n", path);
        let raw = send_raw(addr, request.as_bytes());

        assert_eq!(raw, b"HTTP/1.1 404 Not Found\r\n\r\n", "path: {}", path);
    }
}

#[test]
fn test_unknown_method_is_404() {
    let addr = start_server("./data/".to_string());

    let raw = send_raw(addr, b"DELETE /echo/abc HTTP/1.1\r\n\r\n");
    assert_eq!(raw, b"HTTP/1.1 404 Not Found\r\n\r\n");
}

#[test]
fn test_malformed_request_line_is_400() {
    let addr = start_server("./data/".to_string());

    let raw = send_raw(addr, b"GET\r\n\r\n");
    let (head, _body) = split_response(&raw);

    assert!(head.starts_with("HTTP/1.1 400 Bad Request\r\n"));
}

#[test]
fn test_request_split_across_writes() {
    // El servidor debe acumular lecturas hasta el separador de headers
    // y después completar el body según Content-Length
    let (addr, dir) = start_server_with_dir();

    let mut stream = TcpStream::connect(addr).unwrap();
    stream
        .set_read_timeout(Some(Duration::from_secs(5)))
        .unwrap();

    stream
        .write_all(b"POST /files/split.txt HTTP/1.1\r\nConten")
        .unwrap();
    stream.flush().unwrap();
    thread::sleep(Duration::from_millis(50));

    stream.write_all(b"t-Length: 11\r\n\r\nhel").unwrap();
    stream.flush().unwrap();
    thread::sleep(Duration::from_millis(50));

    stream.write_all(b"lo mundo").unwrap();
    stream.flush().unwrap();

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).unwrap();
    let (head, _body) = split_response(&raw);

    assert!(head.starts_with("HTTP/1.1 201 Created"));
    let on_disk = std::fs::read(dir.path().join("split.txt")).unwrap();
    assert_eq!(on_disk, b"hello mundo");
}

#[test]
fn test_concurrent_connections() {
    let addr = start_server("./data/".to_string());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let request = format!("GET /echo/msg{} HTTP/1.1\r\n\r\n", i);
                let raw = send_raw(addr, request.as_bytes());
                let (head, body) = split_response(&raw);

                assert!(head.starts_with("HTTP/1.1 200 OK"));
                assert_eq!(body, format!("msg{}", i).as_bytes());
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
