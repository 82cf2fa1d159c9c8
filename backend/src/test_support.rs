//! Helpers for integration tests, compiled with the `test-support` feature.
//!
//! Other workspace crates use these to run the real HTTP stack on an
//! ephemeral port.

use std::net::SocketAddr;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};

use crate::Trace;
use crate::inbound::http::configure;
use crate::inbound::http::state::HttpState;

/// A server bound to `127.0.0.1` on an ephemeral port.
pub struct TestServer {
    addr: SocketAddr,
    handle: ServerHandle,
}

impl TestServer {
    /// Start a single-worker server over `state` on the current actix runtime.
    ///
    /// # Errors
    ///
    /// Propagates [`std::io::Error`] when the socket cannot be bound.
    pub fn start(state: HttpState) -> std::io::Result<Self> {
        let data = web::Data::new(state);
        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .wrap(Trace)
                .configure(configure)
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))?;
        let addr = server
            .addrs()
            .first()
            .copied()
            .ok_or_else(|| std::io::Error::other("server bound no address"))?;
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);
        Ok(Self { addr, handle })
    }

    /// Start a server over empty in-memory collections.
    ///
    /// # Errors
    ///
    /// Propagates [`std::io::Error`] when the socket cannot be bound.
    pub fn start_in_memory() -> std::io::Result<Self> {
        Self::start(HttpState::in_memory())
    }

    /// Base URL such as `http://127.0.0.1:41234`.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stop accepting connections and wait for workers to finish.
    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}
