use crate::controller::CounterController;
use crate::ui::DisplayFont;
use std::sync::Arc;
use tokio::sync::{Mutex, Notify};

#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<Mutex<CounterController>>,
    pub font: Arc<DisplayFont>,
    /// Notified by the exit button; the server shuts down and flushes.
    pub exit: Arc<Notify>,
}

impl AppState {
    pub fn new(controller: CounterController, font: DisplayFont) -> Self {
        Self {
            controller: Arc::new(Mutex::new(controller)),
            font: Arc::new(font),
            exit: Arc::new(Notify::new()),
        }
    }
}
