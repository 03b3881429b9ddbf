use serde::{Deserialize, Serialize};

/// Page identifiers the rendering shell knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    Layout,
    Home,
    Login,
    Dashboard,
    SeriesList,
    SeriesDetail,
    SeriesAdd,
    SeriesEdit,
}

/// Access policy of one route node. Every node carries its own policy; a
/// parent's policy never extends to its children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteAccess {
    #[default]
    Public,
    /// Only authenticated sessions; others are redirected to the login
    /// path.
    Protected,
    /// Only unauthenticated sessions; authenticated ones are redirected to
    /// the configured default.
    PublicOnly,
}

/// One node of the declarative route configuration. Static, defined once
/// at startup, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteNode {
    pub path: String,
    pub view: View,
    pub access: RouteAccess,
    pub title: Option<String>,
    pub children: Vec<RouteNode>,
}

impl RouteNode {
    pub fn new(path: &str, view: View) -> Self {
        Self {
            path: path.to_string(),
            view,
            access: RouteAccess::Public,
            title: None,
            children: Vec::new(),
        }
    }

    pub fn protected(mut self) -> Self {
        self.access = RouteAccess::Protected;
        self
    }

    pub fn public_only(mut self) -> Self {
        self.access = RouteAccess::PublicOnly;
        self
    }

    pub fn titled(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_children(mut self, children: Vec<RouteNode>) -> Self {
        self.children = children;
        self
    }
}
