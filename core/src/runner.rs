//! Executes one HTTP round-trip per call, with timing diagnostics.
//!
//! # Design
//! The runner is the only place in the harness that touches the network.
//! It performs exactly one synchronous call with ureq — no retries, no
//! timeout override — and hands a `RequestRecord` (method, URL, status,
//! elapsed time, decoded body) to an injectable `Reporter` before returning
//! the response. ureq's status-as-error behavior is disabled so 4xx/5xx
//! responses come back as data for the caller to assert on; only transport
//! failures become errors.

use std::fmt;
use std::time::{Duration, Instant};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Diagnostic snapshot of one executed request. Emitted to the `Reporter`
/// and dropped; never retained by the runner.
#[derive(Debug, Clone)]
pub struct RequestRecord {
    pub method: HttpMethod,
    pub url: String,
    pub status: u16,
    pub elapsed: Duration,
    pub body: String,
}

impl fmt::Display for RequestRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}\nStatus: {}, Time: {:.2}s",
            self.method.as_str(),
            self.url,
            self.status,
            self.elapsed.as_secs_f64()
        )?;
        if !self.body.is_empty() {
            write!(f, "\nResponse: {}", self.body)?;
        }
        Ok(())
    }
}

/// Sink for per-request diagnostics. Injectable so suites can run quietly
/// in automated pipelines or capture records for inspection.
pub trait Reporter: Send + Sync {
    fn record(&self, record: &RequestRecord);
}

/// Prints one human-readable block per request to stdout.
pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn record(&self, record: &RequestRecord) {
        println!("\n{record}");
    }
}

/// Discards all diagnostics.
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn record(&self, _record: &RequestRecord) {}
}

/// Executes `HttpRequest` values built by `PostClient`.
pub struct Runner {
    agent: ureq::Agent,
    reporter: Box<dyn Reporter>,
}

impl Runner {
    pub fn new() -> Self {
        Self::with_reporter(Box::new(StdoutReporter))
    }

    pub fn with_reporter(reporter: Box<dyn Reporter>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent, reporter }
    }

    /// Perform exactly one HTTP call and return the response as data.
    ///
    /// The status code is not interpreted here; a 404 or 500 is a valid
    /// `Ok` result. Only failures to complete the round-trip at all
    /// (DNS, refused connection, broken stream) become `Err`.
    pub fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let started = Instant::now();

        let result = match (req.method, req.body.as_deref()) {
            (HttpMethod::Get, _) => {
                let mut rb = self.agent.get(&req.url);
                for (name, value) in &req.headers {
                    rb = rb.header(name.as_str(), value.as_str());
                }
                rb.call()
            }
            (HttpMethod::Delete, _) => {
                let mut rb = self.agent.delete(&req.url);
                for (name, value) in &req.headers {
                    rb = rb.header(name.as_str(), value.as_str());
                }
                rb.call()
            }
            (HttpMethod::Post, body) => {
                let mut rb = self.agent.post(&req.url);
                for (name, value) in &req.headers {
                    rb = rb.header(name.as_str(), value.as_str());
                }
                match body {
                    Some(body) => rb.send(body.as_bytes()),
                    None => rb.send_empty(),
                }
            }
            (HttpMethod::Put, body) => {
                let mut rb = self.agent.put(&req.url);
                for (name, value) in &req.headers {
                    rb = rb.header(name.as_str(), value.as_str());
                }
                match body {
                    Some(body) => rb.send(body.as_bytes()),
                    None => rb.send_empty(),
                }
            }
        };

        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let elapsed = started.elapsed();

        self.reporter.record(&RequestRecord {
            method: req.method,
            url: req.url.clone(),
            status,
            elapsed,
            body: body.clone(),
        });

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}
