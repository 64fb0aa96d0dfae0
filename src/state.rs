use std::sync::Arc;

use super::counter::ViewCounter;
use super::stats::StatsSource;

#[derive(Clone)]
pub struct AppState {
    pub counter: Arc<dyn ViewCounter>,
    pub stats: Arc<dyn StatsSource>,
}

impl AppState {
    pub fn new(counter: impl ViewCounter + 'static, stats: impl StatsSource + 'static) -> AppState {
        AppState {
            counter: Arc::new(counter),
            stats: Arc::new(stats),
        }
    }
}
