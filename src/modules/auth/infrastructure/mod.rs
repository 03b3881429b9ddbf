pub mod api;

pub use api::{AuthApi, HttpAuthApi, LoginUser};
