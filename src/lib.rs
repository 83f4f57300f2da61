pub mod app;
pub mod categories;
pub mod config;
pub mod errors;
pub mod fetch;
pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod state;
pub mod ui;

pub use app::router;
pub use categories::Category;
pub use config::Config;
pub use fetch::Fetcher;
pub use state::{AppState, DashboardState};
