use std::sync::Arc;

use client_intake::config::{self, SheetsConfig};
use client_intake::server::intake_routes;
use client_intake::sheets::SheetStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let port = config::server_port();

    // Sheets persistence is optional: missing credentials disable it,
    // broken credentials disable it with a louder complaint.
    let store: Option<Arc<dyn SheetStore>> = match SheetsConfig::from_env() {
        Ok(Some(cfg)) => {
            tracing::info!(
                spreadsheet = %cfg.spreadsheet_id,
                worksheet = %cfg.worksheet,
                "Google Sheets logging enabled"
            );
            Some(Arc::new(cfg.client()))
        }
        Ok(None) => {
            tracing::info!("GOOGLE_SERVICE_ACCOUNT_JSON not set; Sheets logging disabled");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "Sheets configuration invalid; Sheets logging disabled");
            None
        }
    };

    eprintln!("📋 Client Intake v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   API: http://0.0.0.0:{port}");
    eprintln!(
        "   Sheets: {}\n",
        if store.is_some() { "enabled" } else { "disabled" }
    );

    let app = intake_routes(store);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!(port, "Intake server started");
    axum::serve(listener, app).await?;

    Ok(())
}
