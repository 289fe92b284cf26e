//! STDIO transport.
//!
//! The host spawns the server as a child process and speaks line-delimited
//! JSON-RPC on its stdin/stdout. stdout belongs to the protocol stream, so
//! every log line goes to stderr.

use rmcp::ServiceExt;
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{debug, info};

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// Serves one host over the process's standard streams.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve until the host closes stdin.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        let (stdin, stdout) = rmcp::transport::stdio();
        Self::serve_streams(server, stdin, stdout).await
    }

    /// Serve a single session over any reader/writer pair.
    ///
    /// Returns once the peer closes its side of the stream.
    pub async fn serve_streams<R, W>(server: McpServer, reader: R, writer: W) -> TransportResult<()>
    where
        R: AsyncRead + Send + Unpin + 'static,
        W: AsyncWrite + Send + Unpin + 'static,
    {
        let name = server.name().to_string();

        let session = server
            .serve((reader, writer))
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;
        info!(server = %name, "Serving Airtable tools on stdin/stdout");

        let reason = session
            .waiting()
            .await
            .map_err(|e| TransportError::ServiceError(e.to_string()))?;
        debug!(?reason, "Session closed");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use serde_json::{Value, json};
    use std::time::Duration;
    use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
    use tokio::time::timeout;

    #[tokio::test]
    async fn test_session_lists_tools_and_ends_on_eof() {
        let server = McpServer::new(Config::default()).unwrap();
        let (host, process) = tokio::io::duplex(64 * 1024);
        let (process_in, process_out) = tokio::io::split(process);
        let session = tokio::spawn(StdioTransport::serve_streams(
            server,
            process_in,
            process_out,
        ));

        let (host_in, mut host_out) = tokio::io::split(host);
        let mut lines = BufReader::new(host_in).lines();

        let initialize = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": {"name": "host", "version": "0.0.0"}
            }
        });
        host_out
            .write_all(format!("{}\n", initialize).as_bytes())
            .await
            .unwrap();

        let line = timeout(Duration::from_secs(5), lines.next_line())
            .await
            .unwrap()
            .unwrap()
            .unwrap();
        let reply: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(reply["id"], 1);
        assert_eq!(reply["result"]["serverInfo"]["name"], "airtable-mcp");

        let initialized = json!({"jsonrpc": "2.0", "method": "notifications/initialized"});
        let list = json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"});
        host_out
            .write_all(format!("{}\n{}\n", initialized, list).as_bytes())
            .await
            .unwrap();

        let line = timeout(Duration::from_secs(5), lines.next_line())
            .await
            .unwrap()
            .unwrap()
            .unwrap();
        let reply: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(reply["id"], 2);
        assert_eq!(reply["result"]["tools"].as_array().map(Vec::len), Some(18));

        host_out.shutdown().await.unwrap();
        let outcome = timeout(Duration::from_secs(5), session)
            .await
            .unwrap()
            .unwrap();
        assert!(outcome.is_ok());
    }
}
