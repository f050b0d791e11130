//! A throwaway HTTP/1.1 listener for tests that need a real peer.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// What the listener does with one request.
pub enum Reply {
    Answer(&'static str, String),
    /// Read the request, then hold the connection open without answering.
    Stall(Duration),
}

pub struct TestServer {
    pub url: String,
    requests: Receiver<String>,
}

impl TestServer {
    /// Serves every connection on its own thread. Each request, head and
    /// body, is sent back through `next_request`.
    pub fn start<F>(path: &str, reply: F) -> TestServer
    where
        F: Fn(&str) -> Reply + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}{}", listener.local_addr().unwrap(), path);
        let (tx, requests) = channel();
        let reply = Arc::new(reply);

        thread::spawn(move || {
            for stream in listener.incoming() {
                let mut stream = match stream {
                    Ok(s) => s,
                    Err(_) => break,
                };
                let tx = tx.clone();
                let reply = Arc::clone(&reply);
                thread::spawn(move || {
                    let request = read_request(&mut stream);
                    let _ = tx.send(request.clone());
                    match reply(&request) {
                        Reply::Answer(status, body) => {
                            let response = format!(
                                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                                status,
                                body.len(),
                                body
                            );
                            let _ = stream.write_all(response.as_bytes());
                        }
                        Reply::Stall(d) => thread::sleep(d),
                    }
                });
            }
        });

        TestServer { url, requests }
    }

    pub fn ok(path: &str, body: &str) -> TestServer {
        let body = body.to_owned();
        TestServer::start(path, move |_| Reply::Answer("200 OK", body.clone()))
    }

    pub fn next_request(&self) -> String {
        self.requests.recv_timeout(Duration::from_secs(5)).unwrap()
    }
}

fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let mut wanted = None;
    loop {
        if let Some(total) = wanted {
            if buf.len() >= total {
                break;
            }
        }
        let n = match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => n,
        };
        buf.extend_from_slice(&chunk[..n]);
        if wanted.is_none() {
            if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                let length = head
                    .lines()
                    .filter_map(|l| l.strip_prefix("content-length:"))
                    .find_map(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                wanted = Some(end + 4 + length);
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// The body of a captured request.
pub fn body(request: &str) -> &str {
    request.split_once("\r\n\r\n").map(|(_, b)| b).unwrap_or("")
}

/// Google-style answer with a single hit.
pub fn geocode_hit(lat: f64, lng: f64) -> String {
    format!(
        r#"{{"status": "OK", "results": [{{"geometry": {{"location": {{"lat": {}, "lng": {}}}}}}}]}}"#,
        lat, lng
    )
}

pub const GEOCODE_MISS: &str = r#"{"status": "ZERO_RESULTS", "results": []}"#;
