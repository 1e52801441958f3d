/// Axum webserver implementation
///
/// Server lifecycle: bind, serve the view slot, stop when the shared shutdown fires
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::{
    config::WebserverConfig,
    fleet::ViewSlot,
    logger::{self, LogTag},
    shutdown::Shutdown,
    webserver::{routes, state::AppState},
};

/// Start the webserver
///
/// This function blocks until the server is shut down
pub async fn start_server(
    config: WebserverConfig,
    slot: Arc<ViewSlot>,
    shutdown: Arc<Shutdown>,
) -> Result<(), String> {
    let listener = bind(&config).await?;
    let state = Arc::new(AppState::new(slot));
    serve(listener, state, shutdown).await
}

/// Bind the configured address (host names are resolved)
pub async fn bind(config: &WebserverConfig) -> Result<TcpListener, String> {
    let addr = format!("{}:{}", config.host, config.port);

    TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::AddrInUse => format!(
                "Failed to bind to {}: Address already in use\n\
                 \n\
                 Another process (possibly another fleetboard) is listening on port {}.\n\
                 Change [webserver].port in the config file or stop the other process.",
                addr, config.port
            ),
            std::io::ErrorKind::PermissionDenied => format!(
                "Failed to bind to {}: Permission denied\n\
                 \n\
                 Port {} requires elevated privileges on this system.\n\
                 Consider using a port above 1024.",
                addr, config.port
            ),
            _ => format!("Failed to bind to {}: {}", addr, e),
        })
}

/// Serve on an already bound listener until `shutdown` fires
pub async fn serve(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: Arc<Shutdown>,
) -> Result<(), String> {
    let addr = listener
        .local_addr()
        .map_err(|e| format!("Failed to read listener address: {}", e))?;

    logger::info(
        LogTag::Webserver,
        &format!("Webserver listening on http://{}", addr),
    );
    logger::debug(
        LogTag::Webserver,
        &format!("Fleet view available at http://{}/api/fleet", addr),
    );

    let app = build_app(state);

    let shutdown_signal = async move {
        shutdown.wait().await;
        logger::debug(
            LogTag::Webserver,
            "Received shutdown signal, stopping webserver...",
        );
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .map_err(|e| format!("Server error: {}", e))?;

    logger::info(LogTag::Webserver, "Webserver stopped gracefully");

    Ok(())
}

/// Build the Axum application with all routes and middleware
fn build_app(state: Arc<AppState>) -> Router {
    routes::create_router(state).layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::testing::test_client;
    use crate::fleet::{FleetCard, FleetView};
    use std::time::Duration;
    use tokio::task::JoinHandle;

    async fn spawn(
        slot: Arc<ViewSlot>,
    ) -> (String, Arc<Shutdown>, JoinHandle<Result<(), String>>) {
        let config = WebserverConfig {
            enabled: true,
            host: "127.0.0.1".to_string(),
            port: 0,
        };
        let listener = bind(&config).await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());

        let shutdown = Arc::new(Shutdown::new());
        let state = Arc::new(AppState::new(slot));
        let handle = tokio::spawn(serve(listener, state, Arc::clone(&shutdown)));
        (base, shutdown, handle)
    }

    #[tokio::test]
    async fn test_fleet_before_first_publish() {
        let (base, shutdown, _handle) = spawn(Arc::new(ViewSlot::new())).await;

        let body: serde_json::Value = test_client(2000)
            .get(format!("{}/api/fleet", base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body["cycle"], serde_json::Value::Null);
        assert_eq!(body["connected"], false);
        assert!(body["fleetCards"].as_array().unwrap().is_empty());
        assert_eq!(body["clock"].as_str().unwrap().len(), 8);
        shutdown.trigger();
    }

    #[tokio::test]
    async fn test_fleet_serves_latest_view() {
        let slot = Arc::new(ViewSlot::new());
        slot.publish(
            3,
            FleetView {
                fleet_cards: vec![FleetCard::up("VPS-01", "http://a", Some(5), Some(7777))],
                latency_rows: vec![],
                connected: true,
            },
        );
        let (base, shutdown, _handle) = spawn(Arc::clone(&slot)).await;
        let client = test_client(2000);

        let body: serde_json::Value = client
            .get(format!("{}/api/fleet", base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["cycle"], 3);
        assert_eq!(body["connectivityLabel"], "CONNECTED");
        assert_eq!(body["fleetCards"][0]["badge"], "OK");

        slot.publish(4, FleetView::default());
        let body: serde_json::Value = client
            .get(format!("{}/api/fleet", base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["cycle"], 4);
        assert_eq!(body["connected"], false);
        shutdown.trigger();
    }

    #[tokio::test]
    async fn test_health_and_not_found() {
        let (base, shutdown, _handle) = spawn(Arc::new(ViewSlot::new())).await;
        let client = test_client(2000);

        let health = client
            .get(format!("{}/api/health", base))
            .send()
            .await
            .unwrap();
        assert_eq!(health.status().as_u16(), 200);
        let body: serde_json::Value = health.json().await.unwrap();
        assert_eq!(body["status"], "ok");

        let missing = client
            .get(format!("{}/api/nope", base))
            .send()
            .await
            .unwrap();
        assert_eq!(missing.status().as_u16(), 404);
        let body: serde_json::Value = missing.json().await.unwrap();
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        shutdown.trigger();
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let (base, shutdown, _handle) = spawn(Arc::new(ViewSlot::new())).await;

        let response = test_client(2000)
            .get(format!("{}/api/fleet", base))
            .header("Origin", "http://dashboard.local")
            .send()
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );
        shutdown.trigger();
    }

    #[tokio::test]
    async fn test_stops_on_shutdown() {
        let (_base, shutdown, handle) = spawn(Arc::new(ViewSlot::new())).await;

        tokio::time::sleep(Duration::from_millis(50)).await;
        shutdown.trigger();

        let result = tokio::time::timeout(Duration::from_secs(2), handle)
            .await
            .expect("server should stop")
            .unwrap();
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_bind_reports_address_in_use() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let config = WebserverConfig {
            enabled: true,
            host: "127.0.0.1".to_string(),
            port: taken.local_addr().unwrap().port(),
        };

        let err = bind(&config).await.unwrap_err();
        assert!(err.contains("Address already in use"), "{}", err);
    }
}
