use std::time::Duration;

use anyhow::Context;
use bytes::BytesMut;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Staging buffer size for the file transfer loop.
const BUFFER_SIZE: usize = 8192;

/// Writes response heads and streams file bodies to a connection.
///
/// Every write is bounded by the per-connection I/O timeout and looped until
/// complete, so a short write never truncates a head silently.
pub struct ResponseWriter {
    io_timeout: Duration,
}

impl ResponseWriter {
    pub fn new(io_timeout: Duration) -> Self {
        Self { io_timeout }
    }

    /// Writes a fully rendered head (or complete error response) to the
    /// stream.
    pub async fn write_head(&self, stream: &mut TcpStream, head: &[u8]) -> anyhow::Result<()> {
        timeout(self.io_timeout, stream.write_all(head))
            .await
            .context("write timed out")?
            .context("connection closed while writing head")?;
        Ok(())
    }

    /// Streams `size` bytes of `file` to the connection.
    ///
    /// Advances a byte cursor until it reaches the file size or a transfer
    /// call fails. Returns the number of bytes actually sent.
    pub async fn stream_file(
        &self,
        stream: &mut TcpStream,
        file: &mut File,
        size: u64,
    ) -> anyhow::Result<u64> {
        let mut buf = BytesMut::with_capacity(BUFFER_SIZE);
        let mut sent: u64 = 0;

        while sent < size {
            buf.clear();
            let n = file
                .read_buf(&mut buf)
                .await
                .context("failed to read from file")?;
            if n == 0 {
                // File shrank underneath us; stop rather than spin.
                break;
            }

            timeout(self.io_timeout, stream.write_all(&buf[..n]))
                .await
                .context("write timed out")?
                .context("connection closed while writing body")?;

            sent += n as u64;
        }

        Ok(sent)
    }
}
