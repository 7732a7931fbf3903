use std::{env, sync::Arc};

use storage::{DatabaseConnectionInfo, PgStore};
use transfer::{fleet::FleetTracking, service::TransferService};
use web::{start_web_server, WebState};
use wialon::client::{WialonClient, WialonCredentials};

#[tokio::main]
async fn main() {
    env_logger::init();

    // database
    let connection_info = DatabaseConnectionInfo::from_env()
        .expect("expected database connection info in env.");
    let store = PgStore::connect(connection_info)
        .await
        .expect("could not connect to database.");
    storage::seed::ensure_defaults(&store)
        .await
        .expect("could not install default registry data.");

    // fleet tracking is optional; without a token the endpoints answer 503
    let fleet: Option<Arc<dyn FleetTracking + Send + Sync>> =
        match env::var("WIALON_TOKEN") {
            Ok(_) => Some(Arc::new(WialonClient::new(WialonCredentials::env()))),
            Err(_) => {
                log::warn!("WIALON_TOKEN not set, fleet tracking disabled");
                None
            }
        };

    // web server
    let web_future = start_web_server(WebState {
        service: TransferService::new(store),
        fleet,
    });

    let _ = web_future.await;
}
