//! Access-control decisions for guarded views.

use serde::{Deserialize, Serialize};

use super::route::View;

/// Where unauthenticated visitors of protected views are sent.
pub const LOGIN_PATH: &str = "/login";
/// Where authenticated visitors of visitor-only views are sent by default.
pub const DEFAULT_PUBLIC_ONLY_REDIRECT: &str = "/series";

/// A stateless access decision around one routed view. Guards consume
/// only the session's authentication flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Guard {
    /// Render for authenticated sessions, otherwise redirect to login.
    Protected,
    /// Render for unauthenticated sessions, otherwise redirect away.
    PublicOnly { redirect_to: String },
}

impl Guard {
    pub fn public_only() -> Self {
        Self::PublicOnly {
            redirect_to: DEFAULT_PUBLIC_ONLY_REDIRECT.to_string(),
        }
    }

    pub fn evaluate(&self, authenticated: bool, view: View) -> Outcome {
        match self {
            Self::Protected => {
                if authenticated {
                    Outcome::Render(view)
                } else {
                    Outcome::redirect(LOGIN_PATH)
                }
            }
            Self::PublicOnly { redirect_to } => {
                if authenticated {
                    Outcome::redirect(redirect_to)
                } else {
                    Outcome::Render(view)
                }
            }
        }
    }
}

/// What the navigation engine should do with a resolved route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Render(View),
    /// Navigate elsewhere. `replace` is always true: the redirected-away
    /// route must not be revisitable through back navigation.
    Redirect {
        to: String,
        replace: bool,
    },
}

impl Outcome {
    fn redirect(to: &str) -> Self {
        Self::Redirect {
            to: to.to_string(),
            replace: true,
        }
    }
}
