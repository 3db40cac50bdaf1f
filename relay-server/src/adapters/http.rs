use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::*, Router};
use circl_rs::{types, Circl};
use tokio::net;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::app_state::AppState;
use super::geolookup::{geolookup_handler, root_handler};
use crate::config::Config;

pub struct HttpServer {
    router: Router,
    listener: net::TcpListener,
}

impl HttpServer {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let circl = Circl::init(Some(types::Config {
            base_url: config.circl_api_url.clone(),
            ..Default::default()
        }));
        let state = AppState {
            config: config.clone(),
            circl: Arc::new(circl),
        };

        let router = app(state);

        let addr = SocketAddr::from((
            [0, 0, 0, 0, 0, 0, 0, 0],
            config.server_port.parse::<u16>().unwrap_or(3000),
        ));

        let listener = net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to listen on port {}", config.server_port))?;

        Ok(Self { router, listener })
    }

    pub async fn run(self) -> anyhow::Result<()> {
        tracing::debug!("listening on {}", self.listener.local_addr().unwrap());
        axum::serve(self.listener, self.router)
            .await
            .context("received error from running server")?;
        Ok(())
    }
}

pub fn app(state: AppState) -> Router {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::extract::Request<_>| {
            let uri = request.uri().to_string();
            tracing::info_span!("http_request", method = ?request.method(), uri)
        });

    Router::new()
        .route("/", get(root_handler))
        .route("/ip/{ip}", get(geolookup_handler))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
