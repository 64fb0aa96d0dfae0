pub mod config;
pub mod counter;
pub mod error;
pub mod handler;
pub mod response;
pub mod router;
pub mod state;
pub mod stats;

pub use config::Config;
pub use router::build_router;
pub use state::AppState;
