pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::AuthService;
pub use domain::SessionUser;
pub use infrastructure::{AuthApi, HttpAuthApi};
