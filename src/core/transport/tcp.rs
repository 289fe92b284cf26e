//! TCP transport implementation.
//!
//! Line-delimited JSON-RPC, one rmcp session per accepted connection. All
//! sessions share the same server, and with it the connection pool to the
//! Airtable API.

use std::net::SocketAddr;

use rmcp::ServiceExt;
use tokio::net::{TcpListener, TcpStream};
use tokio::time::{Duration, sleep};
use tracing::{info, warn};

use super::{TransportError, TransportResult, config::TcpConfig};
use crate::core::McpServer;

/// TCP transport handler.
pub struct TcpTransport {
    config: TcpConfig,
}

impl TcpTransport {
    pub fn new(config: TcpConfig) -> Self {
        Self { config }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Accept connections forever.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - listening on {} (JSON-RPC over TCP)", addr);

        loop {
            match listener.accept().await {
                Ok((stream, peer)) => {
                    if let Err(e) = stream.set_nodelay(true) {
                        warn!("Failed to set TCP_NODELAY for {}: {}", peer, e);
                    }
                    tokio::spawn(Self::serve_client(server.clone(), stream, peer));
                }
                Err(e) => {
                    warn!("Failed to accept connection: {}", e);
                    // avoid spinning on persistent accept errors
                    sleep(Duration::from_millis(100)).await;
                }
            }
        }
    }

    async fn serve_client(server: McpServer, stream: TcpStream, peer: SocketAddr) {
        let service = match server.serve(stream).await {
            Ok(service) => service,
            Err(e) => {
                warn!("Handshake with {} failed: {}", peer, e);
                return;
            }
        };
        info!("Client {} connected", peer);

        match service.waiting().await {
            Ok(reason) => info!("Client {} disconnected: {:?}", peer, reason),
            Err(e) => warn!("Error while serving client {}: {}", peer, e),
        }
    }
}
