//! Loopback HTTP server for fetch and robots tests

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;

use url::Url;

/// Answer exactly one request on a free local port, returns the server root URL
pub(crate) fn serve_once(status: &str, body: &str) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream);
        let mut line = String::new();
        loop {
            line.clear();
            match reader.read_line(&mut line) {
                Ok(0) | Err(_) => break,
                Ok(_) if line == "\r\n" => break,
                Ok(_) => {}
            }
        }
        let _ = reader.get_mut().write_all(response.as_bytes());
    });

    Url::parse(&format!("http://127.0.0.1:{port}/")).unwrap()
}
