use std::sync::Arc;

use presenter::ChartSource;

#[derive(Clone, Debug)]
pub struct AppState {
    source: Arc<ChartSource>,
}

impl AppState {
    pub fn new(source: ChartSource) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    pub fn source(&self) -> &ChartSource {
        &self.source
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ChartSource::default())
    }
}
