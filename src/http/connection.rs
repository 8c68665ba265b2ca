use anyhow::Context;
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::config::StaticFileConfig;
use crate::http::mime;
use crate::http::parser::{ParseError, RequestLine, parse_request_line};
use crate::http::response::{self, StatusCode};
use crate::http::writer::ResponseWriter;
use crate::static_files::resolve_path;

/// Upper bound on the bytes a request line may occupy.
const MAX_REQUEST_SIZE: usize = 4096;

/// Handles one accepted connection: serves exactly one GET request, then
/// closes. The stream and any opened file are released on every exit path
/// when the handler drops them.
pub struct Connection {
    stream: TcpStream,
    buffer: Vec<u8>,
    config: StaticFileConfig,
    state: ConnectionState,
}

enum ConnectionState {
    Reading,
    Serving(RequestLine),
    Failing(StatusCode),
    Closed,
}

/// What the read loop decided about the bytes it accumulated.
enum ReadOutcome {
    Request(RequestLine),
    Reject(StatusCode),
}

impl Connection {
    pub fn new(stream: TcpStream, config: StaticFileConfig) -> Self {
        Self {
            stream,
            buffer: Vec::with_capacity(MAX_REQUEST_SIZE),
            config,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &self.state {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await? {
                        ReadOutcome::Request(line) => ConnectionState::Serving(line),
                        ReadOutcome::Reject(status) => ConnectionState::Failing(status),
                    };
                }

                ConnectionState::Serving(line) => {
                    let line = line.clone();
                    self.state = match self.serve_file(&line).await? {
                        Some(status) => ConnectionState::Failing(status),
                        None => ConnectionState::Closed,
                    };
                }

                ConnectionState::Failing(status) => {
                    let status = *status;
                    self.send_error(status).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads until a request line is recognized, the buffer cap is hit, or
    /// the peer gives up.
    ///
    /// Each read is bounded by the connection timeout and by the space left
    /// in the request buffer, so the buffer never exceeds its cap.
    async fn read_request(&mut self) -> anyhow::Result<ReadOutcome> {
        loop {
            // Try parsing whatever we already have
            match parse_request_line(&self.buffer) {
                Ok(line) => return Ok(ReadOutcome::Request(line)),

                Err(ParseError::Method) => {
                    warn!("Rejected non-GET request");
                    return Ok(ReadOutcome::Reject(StatusCode::MethodNotAllowed));
                }

                Err(ParseError::Path) => {
                    warn!("Rejected request with malformed path");
                    return Ok(ReadOutcome::Reject(StatusCode::NotFound));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }
            }

            let remaining = MAX_REQUEST_SIZE - self.buffer.len();
            if remaining == 0 {
                warn!("Request line exceeded {} bytes", MAX_REQUEST_SIZE);
                return Ok(ReadOutcome::Reject(StatusCode::UriTooLong));
            }

            let mut temp = [0u8; 1024];
            let read_len = remaining.min(temp.len());
            let n = timeout(
                self.config.io_timeout(),
                self.stream.read(&mut temp[..read_len]),
            )
            .await
            .context("read timed out")?
            .context("failed to read request")?;

            if n == 0 {
                // Peer closed before sending a full request
                anyhow::bail!("connection closed before a full request arrived");
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }
    }

    /// Resolves the request path and streams the file back.
    ///
    /// Returns `Some(status)` if the request must be answered with an error
    /// instead; the file is opened before any response bytes go out so a
    /// missing file still gets a clean status line.
    async fn serve_file(&mut self, line: &RequestLine) -> anyhow::Result<Option<StatusCode>> {
        let Some(path) = resolve_path(&self.config.root, &self.config.index, &line.path) else {
            warn!("Rejected request path {:?}", line.path);
            return Ok(Some(StatusCode::NotFound));
        };

        let mut file = match File::open(&path).await {
            Ok(file) => file,
            Err(e) => {
                warn!("Failed to open {}: {}", path.display(), e);
                return Ok(Some(StatusCode::NotFound));
            }
        };
        let size = file
            .metadata()
            .await
            .with_context(|| format!("failed to stat {}", path.display()))?
            .len();

        let writer = ResponseWriter::new(self.config.io_timeout());
        let head = response::render_ok_head(mime::from_path(&path));
        writer.write_head(&mut self.stream, &head).await?;

        let sent = writer
            .stream_file(&mut self.stream, &mut file, size)
            .await?;
        debug!("Served {} ({} of {} bytes)", path.display(), sent, size);

        Ok(None)
    }

    async fn send_error(&mut self, status: StatusCode) -> anyhow::Result<()> {
        let writer = ResponseWriter::new(self.config.io_timeout());
        writer
            .write_head(&mut self.stream, &response::render_error(status))
            .await
    }
}
