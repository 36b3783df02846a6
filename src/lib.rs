pub mod app;
pub mod clock;
pub mod config;
pub mod controller;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use controller::CounterController;
pub use state::AppState;
pub use storage::{load_data, DailyCounterStore};
