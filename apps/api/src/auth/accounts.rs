use crate::models::user::Role;

/// A hard-coded demo credential record. Plaintext passwords are intentional:
/// these accounts exist only so the demo can be driven without a backend.
pub struct DemoAccount {
    pub email: &'static str,
    pub password: &'static str,
    pub role: Role,
    pub name: &'static str,
}

/// The closed set of accounts the demo accepts. Defined at process start,
/// never created or destroyed at runtime.
pub const DEMO_ACCOUNTS: [DemoAccount; 3] = [
    DemoAccount {
        email: "candidate@demo.com",
        password: "Candidate@123",
        role: Role::Candidate,
        name: "Demo Candidate",
    },
    DemoAccount {
        email: "recruiter@demo.com",
        password: "Recruiter@123",
        role: Role::Recruiter,
        name: "Demo Recruiter",
    },
    DemoAccount {
        email: "admin@demo.com",
        password: "Admin@123",
        role: Role::Admin,
        name: "Admin",
    },
];

/// Case-insensitive lookup by email.
pub fn find(email: &str) -> Option<&'static DemoAccount> {
    DEMO_ACCOUNTS
        .iter()
        .find(|account| account.email.eq_ignore_ascii_case(email))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let account = find("CANDIDATE@Demo.Com").expect("demo account should match");
        assert_eq!(account.role, Role::Candidate);
    }

    #[test]
    fn test_unknown_email_not_found() {
        assert!(find("wrong@demo.com").is_none());
    }
}
