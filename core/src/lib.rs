//! Black-box functional test harness for a remote posts REST resource.
//!
//! # Overview
//! The subject under test is an external JSONPlaceholder-style service
//! reachable over HTTP; this crate supplies everything the suite needs to
//! exercise it: fixtures, a request builder/parser, and a timed request
//! runner. The actual test cases live in `tests/`.
//!
//! # Design
//! - `PostClient` is stateless — it holds only `base_url`. Each operation
//!   is split into `build_*` (produces a request) and `parse_*` (consumes a
//!   response), so everything except the round-trip itself is testable
//!   offline.
//! - `Runner` performs exactly one synchronous HTTP call per `execute`,
//!   measures elapsed time, and reports diagnostics through an injectable
//!   `Reporter`.
//! - `fixtures` are pure value constructors, built fresh per test; no state
//!   is shared between cases.
//! - Non-2xx statuses travel as data; the tests decide what counts as a
//!   failure.

pub mod client;
pub mod error;
pub mod fixtures;
pub mod http;
pub mod runner;
pub mod types;

pub use client::PostClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use runner::{Reporter, RequestRecord, Runner, SilentReporter, StdoutReporter};
pub use types::{NewPost, Post};
