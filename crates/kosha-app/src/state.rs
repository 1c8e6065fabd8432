use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::RwLock;

use kosha_config::Settings;
use kosha_types::Mode;

/// Shared mutable state, mutated only through event handlers and the input
/// loop. Mode and language selections are transient; settings persist.
pub struct AppState {
    pub settings: Arc<RwLock<Settings>>,
    pub config_dir: PathBuf,
    pub mode: RwLock<Mode>,
    pub search_lang: RwLock<String>,
    pub source_lang: RwLock<String>,
    pub target_lang: RwLock<String>,
}

impl AppState {
    pub fn new(settings: Settings, config_dir: PathBuf) -> Self {
        Self {
            settings: Arc::new(RwLock::new(settings)),
            config_dir,
            mode: RwLock::new(Mode::Dictionary),
            search_lang: RwLock::new("en".to_string()),
            source_lang: RwLock::new("en".to_string()),
            target_lang: RwLock::new("hi".to_string()),
        }
    }
}
