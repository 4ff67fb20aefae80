// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cardstore server entry point.
use anyhow::{Result, anyhow};
use log::info;
use tokio::{net::TcpListener, signal};

use cardstore_cards::CardCollection;

use crate::api;

/// Networking config.
#[derive(Debug)]
pub struct Config {
    /// The server listening address.
    pub address: String,
    /// The server listening port.
    pub port: u16,
}

/// Server entry point.
pub async fn run(config: Config) -> Result<()> {
    let addr = format!("{}:{}", config.address, config.port);
    info!("Starting server listening on {}", addr);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow!("Tcp listener bind error: {e}"))?;

    info!("Playing Card Collection API is running on http://{addr}");
    info!("Available endpoints:");
    info!("  GET    /              - API information");
    info!("  GET    /cards         - List all cards");
    info!("  GET    /cards/:id     - Get a specific card");
    info!("  POST   /cards         - Add a new card");
    info!("  DELETE /cards/:id     - Delete a card");

    serve(listener, CardCollection::default()).await
}

/// Serves a collection on a bound listener until ctrl-c is received.
pub async fn serve(listener: TcpListener, cards: CardCollection) -> Result<()> {
    axum::serve(listener, api::router(cards))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow!("Http server error: {e}"))
}

async fn shutdown_signal() {
    if signal::ctrl_c().await.is_ok() {
        info!("Received shutdown signal...");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpStream,
    };

    async fn request(addr: &str, req: &str) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream.write_all(req.as_bytes()).await.unwrap();

        let mut res = String::new();
        stream.read_to_string(&mut res).await.unwrap();
        res
    }

    #[tokio::test]
    async fn serve_over_tcp() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();

        tokio::spawn(async move {
            serve(listener, CardCollection::default()).await.unwrap();
        });

        let res = request(
            &addr,
            "GET /cards HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        )
        .await;
        assert!(res.starts_with("HTTP/1.1 200 OK"));
        assert!(res.contains("\"count\":4"));

        let body = r#"{"suit":"Hearts","value":"7"}"#;
        let req = format!(
            "POST /cards HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\n\
             Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let res = request(&addr, &req).await;
        assert!(res.starts_with("HTTP/1.1 201 Created"));
        assert!(res.contains(r#""card":{"id":5,"suit":"Hearts","value":"7"}"#));
    }
}
