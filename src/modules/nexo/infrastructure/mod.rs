pub mod api;

pub use api::{HttpNexoApi, NexoApi};
