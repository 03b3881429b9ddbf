pub mod builder;
pub mod guard;
pub mod route;
pub mod routes;

// Re-exports for easy external access
pub use builder::{build_routes, find_route, path_matches, BuiltRoute, RouteElement};
pub use guard::{Guard, Outcome, DEFAULT_PUBLIC_ONLY_REDIRECT, LOGIN_PATH};
pub use route::{RouteAccess, RouteNode, View};
pub use routes::app_routes;
