pub mod config;
pub mod handlers;
pub mod hook;
pub mod recognizer;
pub mod session;
pub mod surface;

pub use config::GestureConfig;
pub use handlers::GestureHandlers;
pub use hook::use_gestures;
