//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed map of request path → body with 200, a map of request
//! path → `Location` with 302, and 404 for anything else. Counts every
//! request so tests can assert that nothing was fetched.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

pub struct PageServer {
    /// Base URL ending in `/`, e.g. `http://127.0.0.1:12345/`.
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl PageServer {
    /// Number of requests received so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread. Keys of `pages` are request paths
/// such as `/book/7.jpg`. The server runs until the process exits.
pub fn start(pages: HashMap<String, Vec<u8>>) -> PageServer {
    start_with_redirects(pages, HashMap::new())
}

/// Like [`start`], but paths in `redirects` answer `302 Found` with the
/// mapped value as `Location` (absolute or server-relative).
pub fn start_with_redirects(
    pages: HashMap<String, Vec<u8>>,
    redirects: HashMap<String, String>,
) -> PageServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let pages = Arc::new(pages);
    let redirects = Arc::new(redirects);
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_srv = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let pages = Arc::clone(&pages);
            let redirects = Arc::clone(&redirects);
            let hits = Arc::clone(&hits_srv);
            thread::spawn(move || {
                hits.fetch_add(1, Ordering::SeqCst);
                handle(stream, &pages, &redirects);
            });
        }
    });
    PageServer {
        base_url: format!("http://127.0.0.1:{}/", port),
        hits,
    }
}

/// Builds `/{prefix}{i}.{ext}` → body for every `i` in `indices`, with a body that names the page.
pub fn numbered_pages(
    prefix: &str,
    ext: &str,
    indices: impl IntoIterator<Item = u32>,
) -> HashMap<String, Vec<u8>> {
    indices
        .into_iter()
        .map(|i| (format!("/{prefix}{i}.{ext}"), page_body(i)))
        .collect()
}

pub fn page_body(i: u32) -> Vec<u8> {
    format!("page {i} image data").into_bytes()
}

fn handle(
    mut stream: TcpStream,
    pages: &HashMap<String, Vec<u8>>,
    redirects: &HashMap<String, String>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let mut request_line = request.lines().next().unwrap_or("").split_whitespace();
    let method = request_line.next().unwrap_or("");
    let path = request_line.next().unwrap_or("");

    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
        return;
    }

    if let Some(location) = redirects.get(path) {
        let head = format!(
            "HTTP/1.1 302 Found\r\nLocation: {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            location
        );
        let _ = stream.write_all(head.as_bytes());
        return;
    }

    match pages.get(path) {
        Some(body) => {
            let head = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: image/jpeg\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(body);
        }
        None => {
            let body = b"<html>not found</html>";
            let head = format!(
                "HTTP/1.1 404 Not Found\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(body);
        }
    }
}
