use std::sync::Arc;

use crate::{
    config::Config,
    sheets::{OrderStore, SheetsStore},
};

pub struct State {
    pub config: Config,
    pub store: Arc<dyn OrderStore>,
}

impl State {
    pub fn new() -> Arc<Self> {
        let config = Config::load();

        let store = Arc::new(SheetsStore::new(&config));

        Arc::new(Self { config, store })
    }
}
