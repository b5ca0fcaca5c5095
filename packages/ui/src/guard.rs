//! Route access rules applied before any page renders.

/// Where a navigation may go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(&'static str),
}

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

/// `/admin` and everything under it.
pub fn is_admin_path(path: &str) -> bool {
    let path = strip_query(path);
    path == "/admin" || path.starts_with("/admin/")
}

/// Sign-in pages a signed-in user has no business visiting.
pub fn is_auth_page(path: &str) -> bool {
    matches!(
        strip_query(path).trim_end_matches('/'),
        "/login" | "/signup"
    )
}

pub fn route_access(path: &str, authenticated: bool) -> Access {
    if is_admin_path(path) && !authenticated {
        Access::Redirect(LOGIN_PATH)
    } else if is_auth_page(path) && authenticated {
        Access::Redirect(HOME_PATH)
    } else {
        Access::Allow
    }
}

fn strip_query(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_requires_session() {
        for path in [
            "/admin",
            "/admin/",
            "/admin/campaigns",
            "/admin/campaigns/create?type=basic",
            "/admin/settings",
        ] {
            assert_eq!(route_access(path, false), Access::Redirect("/login"), "{path}");
            assert_eq!(route_access(path, true), Access::Allow, "{path}");
        }
    }

    #[test]
    fn test_lookalike_paths_are_public() {
        assert_eq!(route_access("/administrator", false), Access::Allow);
        assert_eq!(route_access("/fundraisers", false), Access::Allow);
        assert_eq!(route_access("/", false), Access::Allow);
    }

    #[test]
    fn test_signed_in_users_skip_login() {
        assert_eq!(route_access("/login", true), Access::Redirect("/"));
        assert_eq!(route_access("/signup/", true), Access::Redirect("/"));
        assert_eq!(route_access("/login", false), Access::Allow);
        assert_eq!(route_access("/auth/callback", true), Access::Allow);
    }
}
