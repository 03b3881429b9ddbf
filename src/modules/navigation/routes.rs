//! The application's static route table.
//!
//! One Layout root; every child carries its own access policy. The table
//! is data — `build_routes` turns it into the runtime structure.

use super::route::{RouteNode, View};

pub fn app_routes() -> Vec<RouteNode> {
    vec![RouteNode::new("/", View::Layout).with_children(vec![
        // Public
        RouteNode::new("/", View::Home).titled("Home"),
        RouteNode::new("/login", View::Login)
            .public_only() // authenticated users go straight to the catalog
            .titled("Sign In"),
        // Protected
        RouteNode::new("/dashboard", View::Dashboard)
            .protected()
            .titled("Dashboard"),
        RouteNode::new("/series", View::SeriesList)
            .protected()
            .titled("Series"),
        RouteNode::new("/series/add", View::SeriesAdd)
            .protected()
            .titled("Add Series"),
        RouteNode::new("/series/edit/:id", View::SeriesEdit)
            .protected()
            .titled("Edit Series"),
        RouteNode::new("/series/:id", View::SeriesDetail)
            .protected()
            .titled("Series Details"),
    ])]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::navigation::builder::{build_routes, find_route, RouteElement};
    use crate::modules::navigation::guard::{Guard, Outcome};

    #[test]
    fn table_covers_the_full_route_surface() {
        let built = build_routes(app_routes());
        for path in [
            "/",
            "/login",
            "/dashboard",
            "/series",
            "/series/add",
            "/series/edit/7",
            "/series/7",
        ] {
            assert!(find_route(&built, path).is_some(), "missing route {path}");
        }
    }

    #[test]
    fn literal_series_routes_win_over_the_param_route() {
        let built = build_routes(app_routes());
        let add = find_route(&built, "/series/add").unwrap();
        assert_eq!(
            add.element,
            RouteElement::Guarded {
                guard: Guard::Protected,
                view: View::SeriesAdd,
            }
        );
    }

    #[test]
    fn every_protected_path_redirects_anonymous_visitors_to_login() {
        let built = build_routes(app_routes());
        for path in ["/dashboard", "/series", "/series/add", "/series/edit/7", "/series/7"] {
            let route = find_route(&built, path).unwrap();
            assert_eq!(
                route.element.resolve(false),
                Outcome::Redirect {
                    to: "/login".to_string(),
                    replace: true,
                },
                "path {path}"
            );
        }
    }

    #[test]
    fn login_redirects_authenticated_visitors_to_the_catalog() {
        let built = build_routes(app_routes());
        let login = find_route(&built, "/login").unwrap();
        assert_eq!(
            login.element.resolve(true),
            Outcome::Redirect {
                to: "/series".to_string(),
                replace: true,
            }
        );
        assert_eq!(login.element.resolve(false), Outcome::Render(View::Login));
    }
}
