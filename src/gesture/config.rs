use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;
pub const DEFAULT_PINCH_THRESHOLD: f64 = 0.1;

const STORAGE_KEY: &str = "wg_gesture_config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid gesture config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("swipe threshold must be a positive distance, got {0}")]
    SwipeThreshold(f64),
    #[error("pinch threshold must be a non-negative scale delta, got {0}")]
    PinchThreshold(f64),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    // logical px
    pub swipe_threshold: f64,
    // scale delta since the last reported pinch
    pub pinch_threshold: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            pinch_threshold: DEFAULT_PINCH_THRESHOLD,
        }
    }
}

impl GestureConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.swipe_threshold.is_finite() || self.swipe_threshold <= 0.0 {
            return Err(ConfigError::SwipeThreshold(self.swipe_threshold));
        }
        if !self.pinch_threshold.is_finite() || self.pinch_threshold < 0.0 {
            return Err(ConfigError::PinchThreshold(self.pinch_threshold));
        }
        Ok(())
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load() -> Self {
        let Some(raw) = read_storage() else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!(error = %e, "ignoring stored gesture config");
                Self::default()
            }
        }
    }

    pub fn save(&self) {
        let Ok(raw) = serde_json::to_string(self) else {
            return;
        };
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                storage_ok("save", store.set_item(STORAGE_KEY, &raw));
            }
        }
    }

    pub fn clear_saved() {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                storage_ok("clear", store.remove_item(STORAGE_KEY));
            }
        }
    }
}

fn storage_ok<E: std::fmt::Debug>(op: &'static str, res: Result<(), E>) -> bool {
    match res {
        Ok(()) => true,
        Err(e) => {
            warn!(op, error = ?e, "gesture config storage failed");
            false
        }
    }
}

fn read_storage() -> Option<String> {
    let store = web_sys::window()?.local_storage().ok()??;
    store.get_item(STORAGE_KEY).ok()?
}
