//! Server Module
//!
//! Configuration loading, application state and app creation.
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - Environment configuration, store selection
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - App creation and background tasks
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `AppConfig::from_env()`
//! 2. **Store Selection**: PostgreSQL if `DATABASE_URL` is set, else in-memory
//! 3. **State Creation**: token issuer, session store, credentials, OAuth client
//! 4. **Background Tasks**: expired session purge
//! 5. **Router Creation**: routes, role gates and layers

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{AppConfig, ConfigError};
pub use init::{create_app, create_app_with};
pub use state::AppState;
