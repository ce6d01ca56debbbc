//! Shared test fixtures
//!
//! - `StubServer`: scripted HTTP/1.1 endpoint on 127.0.0.1
//! - `RecordingReporter`: in-memory ProgressReporter

#![allow(dead_code)]

use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use cxdupload::adapter::config::Config;
use cxdupload::domain::entities::severity::Severity;
use cxdupload::domain::repositories::progress_reporter::ProgressReporter;

/// What the stub does after reading a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Status(u16),
    /// Hold the request open for a while, then answer
    Delayed(u16, Duration),
    /// Read the request, then never answer
    Hang,
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub body: Vec<u8>,
}

type Script = Arc<dyn Fn(&str) -> Reply + Send + Sync>;

/// Requests being answered right now, and the highest value seen
#[derive(Default)]
struct InFlight {
    current: AtomicUsize,
    peak: AtomicUsize,
}

pub struct StubServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    in_flight: Arc<InFlight>,
}

impl StubServer {
    /// Start a server whose reply depends on the request path
    pub async fn start(script: impl Fn(&str) -> Reply + Send + Sync + 'static) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let script: Script = Arc::new(script);
        let in_flight = Arc::new(InFlight::default());

        let recorded = requests.clone();
        let counters = in_flight.clone();
        tokio::spawn(async move {
            while let Ok((socket, _)) = listener.accept().await {
                let recorded = recorded.clone();
                let script = script.clone();
                let counters = counters.clone();
                tokio::spawn(async move {
                    let _ = handle_connection(socket, script, recorded, counters).await;
                });
            }
        });

        Self {
            addr,
            requests,
            in_flight,
        }
    }

    /// Reply with the same status to every request
    pub async fn always(status: u16) -> Self {
        Self::start(move |_| Reply::Status(status)).await
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/home/", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Most requests that were held open at the same time
    pub fn peak_in_flight(&self) -> usize {
        self.in_flight.peak.load(Ordering::SeqCst)
    }

    /// Config pointing at this server, bypassing any proxy
    pub fn config(&self) -> Config {
        Config {
            base_url: self.base_url(),
            connect_timeout_secs: 5,
            read_timeout_secs: 5,
            use_system_proxy: false,
        }
    }
}

async fn handle_connection(
    mut socket: TcpStream,
    script: Script,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
    in_flight: Arc<InFlight>,
) -> std::io::Result<()> {
    let Some(request) = read_request(&mut socket).await? else {
        return Ok(());
    };
    let reply = script(&request.path);
    recorded.lock().unwrap().push(request);

    match reply {
        Reply::Status(status) => respond(&mut socket, status).await,
        Reply::Delayed(status, delay) => {
            let now = in_flight.current.fetch_add(1, Ordering::SeqCst) + 1;
            in_flight.peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(delay).await;
            in_flight.current.fetch_sub(1, Ordering::SeqCst);
            respond(&mut socket, status).await
        }
        Reply::Hang => {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        }
    }
}

async fn respond(socket: &mut TcpStream, status: u16) -> std::io::Result<()> {
    let response = format!(
        "HTTP/1.1 {} Stub\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
        status
    );
    socket.write_all(response.as_bytes()).await?;
    socket.shutdown().await
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Decode a complete chunked body, `None` while more bytes are needed
fn decode_chunked(raw: &[u8]) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    let mut pos = 0;
    loop {
        let line_end = pos + find(&raw[pos..], b"\r\n")?;
        let size_line = std::str::from_utf8(&raw[pos..line_end]).ok()?;
        let size = usize::from_str_radix(size_line.split(';').next()?.trim(), 16).ok()?;
        pos = line_end + 2;
        if size == 0 {
            return if raw.len() >= pos + 2 { Some(out) } else { None };
        }
        if raw.len() < pos + size + 2 {
            return None;
        }
        out.extend_from_slice(&raw[pos..pos + size]);
        pos += size + 2;
    }
}

async fn read_more(socket: &mut TcpStream, buf: &mut Vec<u8>) -> std::io::Result<bool> {
    let mut chunk = [0u8; 8192];
    let n = socket.read(&mut chunk).await?;
    buf.extend_from_slice(&chunk[..n]);
    Ok(n > 0)
}

async fn read_request(socket: &mut TcpStream) -> std::io::Result<Option<RecordedRequest>> {
    let mut buf = Vec::new();
    let head_end = loop {
        if let Some(pos) = find(&buf, b"\r\n\r\n") {
            break pos + 4;
        }
        if !read_more(socket, &mut buf).await? {
            return Ok(None);
        }
    };

    let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next().unwrap_or_default().split_whitespace();
    let method = request_line.next().unwrap_or_default().to_string();
    let path = request_line.next().unwrap_or_default().to_string();

    let mut authorization = None;
    let mut content_length = None;
    let mut chunked = false;
    for line in lines {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match name.trim().to_ascii_lowercase().as_str() {
            "authorization" => authorization = Some(value.to_string()),
            "content-length" => content_length = value.parse::<usize>().ok(),
            "transfer-encoding" => chunked = value.eq_ignore_ascii_case("chunked"),
            _ => {}
        }
    }

    let mut raw = buf[head_end..].to_vec();
    let body = if chunked {
        loop {
            if let Some(body) = decode_chunked(&raw) {
                break body;
            }
            if !read_more(socket, &mut raw).await? {
                break Vec::new();
            }
        }
    } else {
        let len = content_length.unwrap_or(0);
        while raw.len() < len {
            if !read_more(socket, &mut raw).await? {
                break;
            }
        }
        raw.truncate(len);
        raw
    };

    Ok(Some(RecordedRequest {
        method,
        path,
        authorization,
        body,
    }))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Line(String),
    Progress(usize, usize),
    Severity(Severity),
    Finish(bool),
}

/// ProgressReporter that keeps every call in order
#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<Event>>,
    severity: Mutex<Severity>,
}

impl RecordingReporter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Line(line) => Some(line),
                _ => None,
            })
            .collect()
    }

    pub fn progress(&self) -> Vec<(usize, usize)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Progress(done, total) => Some((done, total)),
                _ => None,
            })
            .collect()
    }
}

impl ProgressReporter for RecordingReporter {
    fn write_line(&self, text: &str) {
        self.events.lock().unwrap().push(Event::Line(text.to_string()));
    }

    fn set_progress(&self, done: usize, total: usize) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Progress(done, total));
    }

    fn mark_severity(&self, level: Severity) {
        let mut severity = self.severity.lock().unwrap();
        *severity = severity.transition(level);
        self.events.lock().unwrap().push(Event::Severity(*severity));
    }

    fn severity(&self) -> Severity {
        *self.severity.lock().unwrap()
    }

    fn finish(&self, all_succeeded: bool) {
        self.events.lock().unwrap().push(Event::Finish(all_succeeded));
    }
}

/// Write `files` (name, contents) into `dir`
pub fn write_files(dir: &Path, files: &[(&str, &[u8])]) {
    for (name, contents) in files {
        fs::write(dir.join(name), contents).unwrap();
    }
}
