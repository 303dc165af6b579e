use serde::{Deserialize, Serialize};

/// The three account roles. Each role is authorized for exactly one dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Candidate,
    Recruiter,
    Admin,
}

impl Role {
    /// Parses a stored role string. Returns `None` for anything outside the
    /// three known variants so callers can fall back to logged-out handling.
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "candidate" => Some(Role::Candidate),
            "recruiter" => Some(Role::Recruiter),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Candidate => "candidate",
            Role::Recruiter => "recruiter",
            Role::Admin => "admin",
        }
    }

    /// The one route this role is allowed to land on. Exhaustive so adding a
    /// role without a dashboard fails to compile.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Candidate => "/candidate",
            Role::Recruiter => "/recruiter",
            Role::Admin => "/admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user record carried inside a session.
///
/// `role` is kept as a raw string so a stored record with an unknown role
/// still deserializes; the route guard decides what to do with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

impl User {
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }
}

/// A logged-in session: opaque token plus the user it was minted for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [Role::Candidate, Role::Recruiter, Role::Admin] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert_eq!(Role::parse("superadmin"), None);
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("Candidate"), None); // stored roles are lowercase
    }

    #[test]
    fn test_every_role_has_a_dashboard() {
        assert_eq!(Role::Candidate.dashboard_path(), "/candidate");
        assert_eq!(Role::Recruiter.dashboard_path(), "/recruiter");
        assert_eq!(Role::Admin.dashboard_path(), "/admin");
    }
}
