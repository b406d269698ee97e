pub mod app;
pub mod client;
pub mod config;
pub mod errors;
pub mod flows;
pub mod handlers;
pub mod models;
pub mod render;
pub mod state;
pub mod ui;
pub mod view;

pub use app::router;
pub use client::PredictClient;
pub use config::Config;
pub use flows::{Outcome, Session};
pub use state::AppState;
pub use view::{Mode, ViewModel};
