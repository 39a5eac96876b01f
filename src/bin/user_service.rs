//! `user-service` - serves `user.UserService` over gRPC.

use field_reservation::{bootstrap, config::settings::load_default_settings, errors::Result};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load .env and initialize tracing (as early as possible)
    bootstrap::init();

    // 2. Settings, then the database
    let settings = load_default_settings()
        .inspect_err(|e| error!("Failed to load settings: {}", e))?;
    let db = bootstrap::connect(&settings)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    // 3. Serve until Ctrl-C
    bootstrap::serve_user(db, settings.server.user_addr)
        .await
        .inspect_err(|e| error!("User service failed: {}", e))
}
