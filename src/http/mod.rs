//! HTTP protocol implementation.
//!
//! This module implements the GET-only HTTP/1.1 subset the server speaks:
//! incremental request-line parsing, response head emission, and streaming
//! of file bodies.
//!
//! # Architecture
//!
//! - **`connection`**: The per-connection handler implementing the
//!   request-response state machine
//! - **`parser`**: Recognizes a request line in the bytes read so far
//! - **`response`**: Status codes and response head rendering
//! - **`writer`**: Writes heads in full and streams file bodies
//! - **`mime`**: MIME type selection based on file extensions
//!
//! # Connection State Machine
//!
//! Each client connection serves exactly one request:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Accumulate bytes until a request line appears
//!        └──────┬──────┘
//!               │ Request recognized
//!               ▼
//!        ┌──────────────────┐
//!        │    Serving       │ ← Resolve path, open file, send head + body
//!        └──────┬───────────┘
//!               │
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │
//!        └──────────────────┘
//! ```
//!
//! Rejected requests (non-GET, oversized line, unresolvable path) take a
//! side exit through `Failing`, which sends a short error response before
//! the connection closes. There is no keep-alive: one request per accepted
//! connection.

pub mod connection;
pub mod mime;
pub mod parser;
pub mod response;
pub mod writer;
