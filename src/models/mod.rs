pub mod config;
pub mod credentials;
pub mod item;

// Re-export commonly used types at models root for convenience
pub use config::AppConfig;
pub use credentials::{AuthRequest, LoginForm, ResetForm, SignUpForm, ValidationError};
pub use item::{Item, ItemId};
