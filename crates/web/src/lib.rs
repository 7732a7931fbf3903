pub use crate::common::RouteResult;

use std::{env, sync::Arc};

use axum::{routing::get_service, Router};
use storage::PgStore;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use transfer::{fleet::FleetTracking, service::TransferService};

pub mod api;
pub mod common;
pub mod hateoas;
pub mod middleware;

#[derive(Clone)]
pub struct WebState {
    pub service: TransferService<PgStore>,
    /// Live vehicle lookup; `None` when no provider is configured.
    pub fleet: Option<Arc<dyn FleetTracking + Send + Sync>>,
}

pub async fn start_web_server(state: WebState) -> std::io::Result<()> {
    let routes = Router::new()
        .nest_service("/api", api::routes(state))
        .fallback_service(static_content_router());

    let bind_addr =
        env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_owned());
    let listener = TcpListener::bind(&bind_addr).await?;
    log::info!("listening on {}", bind_addr);
    axum::serve(listener, routes.into_make_service()).await?;

    Ok(())
}

fn static_content_router() -> Router {
    // the mini-app frontend is served as plain static content
    Router::new().nest_service(
        "/",
        get_service(
            ServeDir::new("./resources/www/")
                .not_found_service(ServeFile::new("./resources/www/error404.html")),
        ),
    )
}
