//! Minimal HTTP/1.1 server standing in for the WordPress API and download host.
//!
//! Serves fixed responses keyed by request path and records every path it is
//! asked for, in order. Unrouted paths get a 404.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct Route {
    pub status: u16,
    pub body: Vec<u8>,
    pub content_type: &'static str,
    /// `Location` header for redirects.
    pub location: Option<&'static str>,
    /// Advertised `Content-Length` when it should differ from the body sent.
    pub declared_len: Option<usize>,
}

impl Route {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.as_bytes().to_vec(),
            content_type: "application/json",
            location: None,
            declared_len: None,
        }
    }

    pub fn archive(body: Vec<u8>) -> Self {
        Self {
            status: 200,
            body,
            content_type: "application/octet-stream",
            location: None,
            declared_len: None,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: format!("<html>{}</html>", status).into_bytes(),
            content_type: "text/html",
            location: None,
            declared_len: None,
        }
    }

    /// 302 pointing at `to` (a path on the same server).
    pub fn redirect(to: &'static str) -> Self {
        Self {
            location: Some(to),
            ..Self::status(302)
        }
    }

    /// 200 that promises `declared_len` bytes but closes after `body`.
    pub fn truncated(body: Vec<u8>, declared_len: usize) -> Self {
        Self {
            declared_len: Some(declared_len),
            ..Self::archive(body)
        }
    }
}

pub struct WpServer {
    /// Base URL without trailing slash, e.g. "http://127.0.0.1:12345".
    pub base: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl WpServer {
    /// Paths requested so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

/// Starts a server in a background thread. It runs until the process exits.
pub fn start(routes: Vec<(&str, Route)>) -> WpServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<String, Route>> = Arc::new(
        routes
            .into_iter()
            .map(|(path, route)| (path.to_string(), route))
            .collect(),
    );
    let requests = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let log = Arc::clone(&log);
            thread::spawn(move || handle(stream, &routes, &log));
        }
    });
    WpServer {
        base: format!("http://127.0.0.1:{}", port),
        requests,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    routes: &HashMap<String, Route>,
    log: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));

    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    let request = String::from_utf8_lossy(&buf);
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    log.lock().unwrap().push(path.clone());

    let route = routes.get(&path).cloned().unwrap_or_else(|| Route::status(404));
    let location = route
        .location
        .map(|to| format!("Location: {}\r\n", to))
        .unwrap_or_default();
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n",
        route.status,
        reason(route.status),
        route.content_type,
        route.declared_len.unwrap_or(route.body.len()),
        location
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&route.body);
    let _ = stream.flush();
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        302 => "Found",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

/// A URL on a port nothing listens on.
pub fn refused_base() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
