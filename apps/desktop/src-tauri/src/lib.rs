//! # Velo Desktop Library
//!
//! Core library for the Velo OMS desktop application.
//! This is the main entry point that configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! velo_desktop_lib/
//! ├── lib.rs          ◄─── You are here (Tauri setup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── db.rs       ◄─── Database state wrapper
//! │   ├── draft.rs    ◄─── Order draft state
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Inventory commands
//! │   ├── catalog.rs  ◄─── Category/bike model commands
//! │   ├── draft.rs    ◄─── Draft assembly commands
//! │   ├── order.rs    ◄─── Order lifecycle commands
//! │   ├── invoice.rs  ◄─── Invoice generation
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State Management (Option B: Multiple State Types)
//! Instead of a single `AppState` struct, we use multiple focused state types:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri State Management                               │
//! │                                                                         │
//! │  Option B: Multiple State Types (CHOSEN)                               │
//! │  ─────────────────────────────────────────                             │
//! │                                                                         │
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐   │
//! │  │    DbState       │ │   DraftState     │ │    ConfigState       │   │
//! │  │                  │ │                  │ │                      │   │
//! │  │  • Database pool │ │  • Order draft   │ │  • Shop identity     │   │
//! │  │  • Repositories  │ │  • Draft lines   │ │  • Default GST rate  │   │
//! │  │                  │ │  • Header fields │ │  • Currency          │   │
//! │  └──────────────────┘ └──────────────────┘ └──────────────────────┘   │
//! │                                                                         │
//! │  WHY: Each command only requests the state it needs.                   │
//! │       Better separation of concerns and testability.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use directories::ProjectDirs;
use std::path::PathBuf;
use tauri::Manager;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use state::{ConfigState, DbState, DraftState};
use velo_db::{Database, DbConfig};

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Determine Database Path ──────────────────────────────────────────► │
/// │     • macOS: ~/Library/Application Support/com.velo.oms/velo.db         │
/// │     • Windows: %APPDATA%/velo/oms/velo.db                               │
/// │     • Linux: ~/.local/share/velo-oms/velo.db                            │
/// │                                                                         │
/// │  3. Connect to Database ──────────────────────────────────────────────► │
/// │     • SQLite with WAL mode                                              │
/// │     • Run pending migrations                                            │
/// │                                                                         │
/// │  4. Initialize State Objects ─────────────────────────────────────────► │
/// │     • DbState: Wraps Database connection                                │
/// │     • DraftState: Empty order draft dated today                         │
/// │     • ConfigState: Defaults overlaid with VELO_* env vars               │
/// │                                                                         │
/// │  5. Build & Run Tauri App ────────────────────────────────────────────► │
/// │     • Register all commands                                             │
/// │     • Manage state                                                      │
/// │     • Launch window                                                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() {
    // Initialize tracing (logging)
    init_tracing();

    info!("Starting Velo OMS Desktop Application");

    // Build and run the Tauri app
    tauri::Builder::default()
        // Setup hook runs before the app starts
        .setup(|app| {
            // Determine database path
            let db_path = get_database_path(app)?;
            info!(?db_path, "Database path determined");

            // Initialize database (blocking in setup, async in runtime)
            let db = tauri::async_runtime::block_on(async {
                let config = DbConfig::new(db_path);
                Database::new(config).await
            })?;

            info!("Database connected and migrations applied");

            // Initialize state objects
            let db_state = DbState::new(db);
            let draft_state = DraftState::new();
            let config_state = ConfigState::from_env();

            // Register state with Tauri
            app.manage(db_state);
            app.manage(draft_state);
            app.manage(config_state);

            info!("State initialized");
            Ok(())
        })
        // Register all commands
        .invoke_handler(tauri::generate_handler![
            // Product commands
            commands::product::list_products,
            commands::product::search_products,
            commands::product::get_product,
            commands::product::create_product,
            commands::product::update_product,
            commands::product::delete_product,
            commands::product::low_stock_products,
            // Catalog commands
            commands::catalog::list_categories,
            commands::catalog::add_category,
            commands::catalog::delete_category,
            commands::catalog::list_bike_models,
            commands::catalog::add_bike_model,
            commands::catalog::delete_bike_model,
            // Draft commands
            commands::draft::get_draft,
            commands::draft::draft_add_item,
            commands::draft::draft_set_quantity,
            commands::draft::draft_remove_item,
            commands::draft::draft_set_details,
            commands::draft::draft_clear,
            commands::draft::draft_billing,
            // Order commands
            commands::order::create_order,
            commands::order::list_orders,
            commands::order::get_order,
            commands::order::update_order,
            commands::order::delete_order,
            commands::order::next_order_id,
            // Invoice commands
            commands::invoice::generate_invoice,
            // Config commands
            commands::config::get_config,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=velo=trace` - Show trace for velo crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,velo=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}

/// Determines the database file path based on the platform.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.velo.oms/velo.db`
/// - **Windows**: `%APPDATA%\velo\oms\velo.db`
/// - **Linux**: `~/.local/share/velo-oms/velo.db`
///
/// ## Development Override
/// Set `VELO_DB_PATH` environment variable to use a custom path.
fn get_database_path(_app: &tauri::App) -> Result<PathBuf, Box<dyn std::error::Error>> {
    // Check for override
    if let Ok(path) = std::env::var("VELO_DB_PATH") {
        return Ok(PathBuf::from(path));
    }

    // Use platform-specific app data directory
    let proj_dirs = ProjectDirs::from("com", "velo", "oms")
        .ok_or("Could not determine app data directory")?;

    let data_dir = proj_dirs.data_dir();

    // Create directory if it doesn't exist
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join("velo.db"))
}
