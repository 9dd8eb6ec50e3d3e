//! Navigation routes and the route guard.
//!
//! The guard is a pure function of the requested destination and whether a
//! session is active. It holds no state of its own and is re-evaluated on
//! every navigation, since the session can change between navigations.

use serde::{Deserialize, Serialize};

/// The navigation destinations of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// Public marketing page.
    Landing,
    /// Sign-in form; redirects to `Main` when already authenticated.
    Login,
    /// Registration form; redirects to `Main` when already authenticated.
    Register,
    /// Authenticated home screen.
    Main,
    /// The conversation + model preview screen.
    Conversation,
    /// Profile view/edit screen.
    Profile,
}

impl Route {
    /// All routes, in navigation-table order.
    pub const ALL: [Route; 6] = [
        Route::Landing,
        Route::Login,
        Route::Register,
        Route::Main,
        Route::Conversation,
        Route::Profile,
    ];

    /// Whether this destination requires an active session.
    pub fn is_protected(self) -> bool {
        matches!(self, Route::Main | Route::Conversation | Route::Profile)
    }

    /// Whether this destination only makes sense without a session.
    pub fn is_auth_only(self) -> bool {
        matches!(self, Route::Login | Route::Register)
    }

    /// Path-style name, used for display and logging.
    pub fn path(self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Main => "/main",
            Route::Conversation => "/conversation",
            Route::Profile => "/profile",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Resolves a requested destination against the current session state.
///
/// Protected destinations redirect to `Login` when no session is active;
/// the unauthenticated-only screens (`Login`, `Register`) redirect to
/// `Main` when a session is already active. Everything else renders as
/// requested.
pub fn resolve(requested: Route, authenticated: bool) -> Route {
    if requested.is_protected() && !authenticated {
        return Route::Login;
    }
    if requested.is_auth_only() && authenticated {
        return Route::Main;
    }
    requested
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_routes_redirect_to_login_when_logged_out() {
        for route in [Route::Main, Route::Conversation, Route::Profile] {
            assert_eq!(resolve(route, false), Route::Login, "{route}");
        }
    }

    #[test]
    fn test_protected_routes_render_when_logged_in() {
        for route in [Route::Main, Route::Conversation, Route::Profile] {
            assert_eq!(resolve(route, true), route, "{route}");
        }
    }

    #[test]
    fn test_auth_screens_redirect_away_when_logged_in() {
        assert_eq!(resolve(Route::Login, true), Route::Main);
        assert_eq!(resolve(Route::Register, true), Route::Main);
    }

    #[test]
    fn test_auth_screens_render_when_logged_out() {
        assert_eq!(resolve(Route::Login, false), Route::Login);
        assert_eq!(resolve(Route::Register, false), Route::Register);
    }

    #[test]
    fn test_landing_is_always_allowed() {
        assert_eq!(resolve(Route::Landing, false), Route::Landing);
        assert_eq!(resolve(Route::Landing, true), Route::Landing);
    }

    #[test]
    fn test_resolved_route_is_always_renderable() {
        // The guard must never resolve to a destination that would itself
        // redirect again under the same session state.
        for route in Route::ALL {
            for authenticated in [false, true] {
                let resolved = resolve(route, authenticated);
                assert_eq!(resolve(resolved, authenticated), resolved);
            }
        }
    }
}
