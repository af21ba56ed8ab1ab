//! RentifyTech server - gadget rental REST backend
//!
//! # Module layout
//!
//! ```text
//! rentify-server/src/
//! ├── core/          # configuration, state, HTTP server
//! ├── auth/          # tokens, gates, identity checks
//! ├── db/            # embedded SurrealDB, models, repositories
//! ├── payments/      # payment provider client
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # errors, logging, validation
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod payments;
pub mod utils;

pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use utils::logger::init_logger_with_file;

/// Security event logging under the `security` target
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}
