use crate::models::{ClickAction, TodayResponse};
use crate::storage::DailyCounterStore;
use tracing::debug;

/// Today's count, written through to the store on every change.
///
/// The today-key is fixed when the controller is built, so a session that runs past
/// midnight keeps counting against the day it started on.
#[derive(Debug)]
pub struct CounterController {
    count: u64,
    today_key: String,
    store: DailyCounterStore,
}

impl CounterController {
    pub fn new(store: DailyCounterStore, today_key: impl Into<String>) -> Self {
        let today_key = today_key.into();
        let count = store.get(&today_key, 0);
        Self {
            count,
            today_key,
            store,
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn today_key(&self) -> &str {
        &self.today_key
    }

    pub fn store(&self) -> &DailyCounterStore {
        &self.store
    }

    pub async fn increase(&mut self) -> u64 {
        self.count = self.count.saturating_add(1);
        self.write_through().await;
        self.count
    }

    /// Clamps at zero. Still saves when the count was already zero.
    pub async fn decrease(&mut self) -> u64 {
        self.count = self.count.saturating_sub(1);
        self.write_through().await;
        self.count
    }

    pub async fn apply(&mut self, action: ClickAction) -> u64 {
        match action {
            ClickAction::Increase => self.increase().await,
            ClickAction::Decrease => self.decrease().await,
        }
    }

    pub async fn flush(&self) -> bool {
        self.store.save().await
    }

    pub fn snapshot(&self) -> TodayResponse {
        TodayResponse {
            date: self.today_key.clone(),
            count: self.count,
        }
    }

    async fn write_through(&mut self) {
        debug!(date = %self.today_key, count = self.count, "count changed");
        self.store.set(&self.today_key, self.count);
        self.store.save().await;
    }
}
