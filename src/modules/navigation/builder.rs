//! Builds the runtime navigation structure from the declarative route
//! configuration, wrapping each node's view with the access decision its
//! policy calls for.

use super::guard::{Guard, Outcome};
use super::route::{RouteAccess, RouteNode, View};

/// A view, possibly wrapped with an access decision.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteElement {
    Plain(View),
    Guarded { guard: Guard, view: View },
}

impl RouteElement {
    /// Resolves the element against the current authentication flag.
    pub fn resolve(&self, authenticated: bool) -> Outcome {
        match self {
            Self::Plain(view) => Outcome::Render(*view),
            Self::Guarded { guard, view } => guard.evaluate(authenticated, *view),
        }
    }
}

/// One node of the built navigation structure. Path, title, ordering and
/// nesting are carried over from the configuration untouched; only the
/// element differs.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltRoute {
    pub path: String,
    pub title: Option<String>,
    pub element: RouteElement,
    pub children: Vec<BuiltRoute>,
}

/// Wraps every node's view according to its access policy, recursively.
/// Pure: no I/O, no session reads; ordering is preserved at every level
/// and each node's policy is evaluated independently of its parent's.
pub fn build_routes(routes: Vec<RouteNode>) -> Vec<BuiltRoute> {
    routes
        .into_iter()
        .map(|route| {
            let children = build_routes(route.children);

            let element = match route.access {
                RouteAccess::Protected => RouteElement::Guarded {
                    guard: Guard::Protected,
                    view: route.view,
                },
                RouteAccess::PublicOnly => RouteElement::Guarded {
                    guard: Guard::public_only(),
                    view: route.view,
                },
                RouteAccess::Public => RouteElement::Plain(route.view),
            };

            BuiltRoute {
                path: route.path,
                title: route.title,
                element,
                children,
            }
        })
        .collect()
}

/// Matches a route pattern against a concrete path, segment by segment.
/// `:param` segments match any non-empty segment.
pub fn path_matches(pattern: &str, path: &str) -> bool {
    let pattern_segments: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    let path_segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    if pattern_segments.len() != path_segments.len() {
        return false;
    }

    pattern_segments
        .iter()
        .zip(path_segments.iter())
        .all(|(pat, seg)| pat.starts_with(':') || pat == seg)
}

/// Finds the route responsible for a concrete path. Children are searched
/// before their parent so the deepest declaration wins; siblings keep
/// declaration order, which puts literal paths like `/series/add` ahead of
/// the parameterized `/series/:id` they precede in the table.
pub fn find_route<'a>(routes: &'a [BuiltRoute], path: &str) -> Option<&'a BuiltRoute> {
    for route in routes {
        if let Some(found) = find_route(&route.children, path) {
            return Some(found);
        }
        if path_matches(&route.path, path) {
            return Some(route);
        }
    }
    None
}
