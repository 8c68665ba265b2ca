use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket};
use tracing::{error, info};

use crate::config::Config;
use crate::http::connection::Connection;

/// The listening half of the server.
///
/// Binding is separate from running so callers can bind port 0 and discover
/// the assigned address before the accept loop starts.
pub struct Server {
    listener: TcpListener,
    cfg: Config,
}

impl Server {
    /// Creates the listening socket: socket, SO_REUSEADDR, bind, listen.
    ///
    /// Any failure here is a configuration error; callers treat it as fatal.
    pub fn bind(cfg: &Config) -> anyhow::Result<Self> {
        let addr: SocketAddr = cfg
            .listen_addr()
            .parse()
            .context("invalid listen address")?;

        let socket = TcpSocket::new_v4().context("failed to create server socket")?;
        socket
            .set_reuseaddr(true)
            .context("failed to enable SO_REUSEADDR on server socket")?;
        socket
            .bind(addr)
            .with_context(|| format!("failed to bind {addr}"))?;
        let listener = socket
            .listen(cfg.server.backlog)
            .context("failed to listen on server socket")?;

        Ok(Self {
            listener,
            cfg: cfg.clone(),
        })
    }

    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept loop. Never returns under normal operation.
    ///
    /// Accept failures are transient: they are logged and the loop keeps
    /// going. Nothing a spawned handler does can reach back into this loop.
    pub async fn run(self) -> anyhow::Result<()> {
        info!("Listening on {}", self.local_addr()?);

        loop {
            let (socket, peer) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    error!("Accept failed: {}", e);
                    continue;
                }
            };
            info!("Accepted connection from {}", peer);

            let static_config = self.cfg.static_files.clone();
            tokio::spawn(async move {
                let mut conn = Connection::new(socket, static_config);
                if let Err(e) = conn.run().await {
                    error!("Connection error from {}: {}", peer, e);
                }
            });
        }
    }
}

/// Binds the configured port and serves requests until the process exits.
pub async fn serve(cfg: &Config) -> anyhow::Result<()> {
    Server::bind(cfg)?.run().await
}
