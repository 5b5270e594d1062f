//! Blocking HTTP helpers over libcurl.
//!
//! Three shapes of request, all synchronous:
//! - [`get`]: buffered GET with a total timeout, for small metadata bodies.
//! - [`probe`]: header-only probe for size lookups.
//! - [`HttpSession::get_streaming`]: body pushed into a sink as it arrives,
//!   cookies carried across requests for the confirmation handshake.

use crate::error::FetchError;
use std::io;
use std::str;
use std::time::Duration;

/// Connect timeout applied to every request, including unbounded body
/// transfers.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// One cookie recorded by libcurl's cookie engine.
#[derive(Debug, Clone)]
pub struct Cookie {
    pub name: String,
    pub value: String,
}

/// Buffered response from [`get`].
#[derive(Debug)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

/// Header-only result from [`probe`].
#[derive(Debug, Clone, Copy)]
pub struct HeadProbe {
    pub status: u32,
    /// `Content-Length` of the final response, if the server sent one.
    pub content_length: Option<u64>,
}

/// Buffered GET with redirects followed and a total timeout.
///
/// Non-2xx terminal status is an error; the body of the final response is
/// returned whole.
pub fn get(url: &str, timeout: Duration) -> Result<HttpResponse, FetchError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.connect_timeout(CONNECT_TIMEOUT)?;
    easy.timeout(timeout)?;

    let mut body = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    if !(200..300).contains(&status) {
        return Err(FetchError::Status(status));
    }
    Ok(HttpResponse { status, body })
}

/// HEAD-style probe: headers of the final response only, no body transfer.
pub fn probe(url: &str, timeout: Duration) -> Result<HeadProbe, FetchError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.nobody(true)?;
    easy.follow_location(true)?;
    easy.connect_timeout(CONNECT_TIMEOUT)?;
    easy.timeout(timeout)?;

    // Redirect hops each report headers; keep overwriting so the final
    // response wins.
    let mut content_length: Option<u64> = None;
    {
        let mut transfer = easy.transfer();
        transfer.header_function(|line| {
            if let Some((name, value)) =
                str::from_utf8(line).ok().and_then(|s| s.split_once(':'))
            {
                if name.trim().eq_ignore_ascii_case("content-length") {
                    content_length = value.trim().parse::<u64>().ok();
                }
            }
            true
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    if !(200..300).contains(&status) {
        return Err(FetchError::Status(status));
    }
    Ok(HeadProbe {
        status,
        content_length,
    })
}

/// Cookie-carrying session for multi-request flows.
///
/// libcurl stores cookies set by earlier responses and replays them on later
/// requests on the same handle, so a challenge cookie from the first request
/// is sent back with the confirmed one.
pub struct HttpSession {
    easy: curl::easy::Easy,
}

impl HttpSession {
    pub fn new() -> Result<Self, FetchError> {
        let mut easy = curl::easy::Easy::new();
        // Empty filename enables the in-memory cookie engine without a jar
        // on disk.
        easy.cookie_file("")?;
        easy.follow_location(true)?;
        easy.connect_timeout(CONNECT_TIMEOUT)?;
        Ok(Self { easy })
    }

    /// Streaming GET: body bytes are pushed into `sink` in arrival order.
    ///
    /// No total timeout; a large body takes as long as it takes. A sink
    /// error aborts the transfer and is returned as [`FetchError::Io`].
    pub fn get_streaming<F>(&mut self, url: &str, mut sink: F) -> Result<u32, FetchError>
    where
        F: FnMut(&[u8]) -> io::Result<()>,
    {
        self.easy.url(url)?;

        let mut sink_error: Option<io::Error> = None;
        let result = {
            let mut transfer = self.easy.transfer();
            transfer.write_function(|data| match sink(data) {
                Ok(()) => Ok(data.len()),
                Err(e) => {
                    // Short write makes libcurl abort the transfer.
                    sink_error = Some(e);
                    Ok(0)
                }
            })?;
            transfer.perform()
        };

        if let Err(e) = result {
            if let Some(io_err) = sink_error.take() {
                return Err(FetchError::Io(io_err));
            }
            return Err(FetchError::Transport(e));
        }

        let status = self.easy.response_code()?;
        if !(200..300).contains(&status) {
            return Err(FetchError::Status(status));
        }
        Ok(status)
    }

    /// Cookies accumulated on this session so far.
    pub fn cookies(&mut self) -> Result<Vec<Cookie>, FetchError> {
        let list = self.easy.cookies()?;
        let mut out = Vec::new();
        for line in list.iter() {
            if let Some(cookie) = str::from_utf8(line).ok().and_then(parse_cookie_line) {
                out.push(cookie);
            }
        }
        Ok(out)
    }
}

/// Parses one line of libcurl's netscape cookie-jar format:
/// `domain <TAB> subdomains <TAB> path <TAB> secure <TAB> expiry <TAB> name <TAB> value`.
fn parse_cookie_line(line: &str) -> Option<Cookie> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != 7 {
        return None;
    }
    Some(Cookie {
        name: fields[5].to_string(),
        value: fields[6].to_string(),
    })
}
