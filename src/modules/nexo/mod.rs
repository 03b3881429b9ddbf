pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use domain::{NewNexo, Nexo, NexoPatch, WatchState};
pub use infrastructure::{HttpNexoApi, NexoApi};
