//! Throwaway HTTP/1.1 server for exercising the real clients
#![allow(dead_code)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct Route {
    method: &'static str,
    path: String,
    status: u16,
    body: String,
}

impl Route {
    pub fn get(path: &str, status: u16, body: &str) -> Self {
        Self {
            method: "GET",
            path: path.to_string(),
            status,
            body: body.to_string(),
        }
    }

    pub fn post(path: &str, status: u16, body: &str) -> Self {
        Self {
            method: "POST",
            path: path.to_string(),
            status,
            body: body.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path including the query string
    pub target: String,
    pub body: String,
}

impl RecordedRequest {
    pub fn path(&self) -> &str {
        self.target.split('?').next().unwrap_or("")
    }
}

pub struct MockServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockServer {
    /// Serve `routes` until the test process exits; unknown paths get 404
    pub fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock server");
        let addr = listener.local_addr().expect("mock server address");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        thread::spawn(move || {
            for stream in listener.incoming() {
                match stream {
                    Ok(stream) => handle(stream, &routes, &recorded),
                    Err(_) => break,
                }
            }
        });

        Self { addr, requests }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Wiki base template serving each language under `/{lang}`
    pub fn wiki_template(&self) -> String {
        self.url("/{lang}")
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// An address nothing listens on
pub fn closed_url(path: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{}{}", addr, path)
}

fn handle(stream: TcpStream, routes: &[Route], recorded: &Arc<Mutex<Vec<RecordedRequest>>>) {
    let mut reader = BufReader::new(&stream);

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("").to_string();
    let target = parts.next().unwrap_or("").to_string();

    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            }
        }
    }

    let mut body = vec![0u8; content_length];
    if content_length > 0 && reader.read_exact(&mut body).is_err() {
        return;
    }

    let request = RecordedRequest {
        method,
        target,
        body: String::from_utf8_lossy(&body).into_owned(),
    };

    let (status, response_body) = routes
        .iter()
        .find(|r| r.method == request.method && r.path == request.path())
        .map(|r| (r.status, r.body.clone()))
        .unwrap_or((404, r#"{"title": "Not found."}"#.to_string()));

    recorded.lock().unwrap().push(request);

    let response = format!(
        "HTTP/1.1 {} Mock\r\nContent-Type: application/json; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        response_body.len(),
        response_body
    );
    let mut writer = &stream;
    let _ = writer.write_all(response.as_bytes());
    let _ = writer.flush();
}
