//! Minimal HTTP/1.1 server simulating a drive-style download host.
//!
//! `/open?id=...` serves a share page whose `<title>` carries the filename.
//! Any other target is the download endpoint: in challenge mode the first
//! unconfirmed request gets a `download_warning_*` cookie and an HTML
//! interstitial; a request carrying `confirm=<token>` (or direct mode) gets
//! the real body. HEAD requests get headers only.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

/// Token issued by the warning cookie and expected back in `confirm=`.
pub const TOKEN: &str = "TOKEN123";

#[derive(Debug, Clone, Copy)]
pub struct DriveServerOptions {
    /// If true, the unconfirmed download request is answered with the
    /// warning cookie and an interstitial page instead of the body.
    pub challenge: bool,
    /// Title served on the share page.
    pub page_title: &'static str,
}

impl Default for DriveServerOptions {
    fn default() -> Self {
        Self {
            challenge: false,
            page_title: "shared-file.bin - Google Drive",
        }
    }
}

pub struct DriveServer {
    base: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl DriveServer {
    /// Download endpoint in the shape the drive module expects.
    pub fn export_endpoint(&self) -> String {
        format!("{}/uc?export=download", self.base)
    }

    /// Share-link prefix for filename resolution.
    pub fn open_prefix(&self) -> String {
        format!("{}/open?id=", self.base)
    }

    /// Request targets (path + query) seen so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread serving `body`. The server runs
/// until the process exits.
pub fn start(body: Vec<u8>, opts: DriveServerOptions) -> DriveServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&requests);
    let body = Arc::new(body);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let log = Arc::clone(&log);
            thread::spawn(move || handle(stream, &body, opts, &log));
        }
    });
    DriveServer {
        base: format!("http://127.0.0.1:{}", port),
        requests,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    body: &[u8],
    opts: DriveServerOptions,
    log: &Mutex<Vec<String>>,
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
    let mut first_line = request.lines().next().unwrap_or("").split_whitespace();
    let method = first_line.next().unwrap_or("");
    let target = first_line.next().unwrap_or("").to_string();
    log.lock().unwrap().push(target.clone());

    if target.starts_with("/open") {
        let page = format!(
            "<html><head><title>{}</title></head><body></body></html>",
            opts.page_title
        );
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            page.len(),
            page
        );
        let _ = stream.write_all(response.as_bytes());
        return;
    }

    if method.eq_ignore_ascii_case("HEAD") {
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/octet-stream\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        let _ = stream.write_all(response.as_bytes());
        return;
    }

    let confirmed = target.contains(&format!("confirm={}", TOKEN));
    if opts.challenge && !confirmed {
        let page =
            "<html><head><title>Warning - Google Drive</title></head><body>scan warning</body></html>";
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nSet-Cookie: download_warning_13Ab={}; Path=/\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            TOKEN,
            page.len(),
            page
        );
        let _ = stream.write_all(response.as_bytes());
        return;
    }

    let header = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/octet-stream\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    );
    let _ = stream.write_all(header.as_bytes());
    let _ = stream.write_all(body);
}
