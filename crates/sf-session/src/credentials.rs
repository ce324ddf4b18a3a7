//! Fixed demo credential check. No hashing, no lockout.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credentials {
    pub username: &'static str,
    pub password: &'static str,
}

pub const DEMO_CREDENTIALS: Credentials = Credentials {
    username: "admin",
    password: "12345",
};

/// A submitted login form, fields already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginAttempt {
    pub username: String,
    pub password: String,
}

impl LoginAttempt {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.trim().to_owned(),
            password: password.trim().to_owned(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// A field was left empty; the form is flagged, nothing is submitted.
    Incomplete,
    Accepted { username: String },
    Rejected,
}

impl Credentials {
    pub fn check(&self, attempt: &LoginAttempt) -> LoginOutcome {
        if !attempt.is_complete() {
            return LoginOutcome::Incomplete;
        }
        if attempt.username == self.username && attempt.password == self.password {
            LoginOutcome::Accepted {
                username: attempt.username.clone(),
            }
        } else {
            LoginOutcome::Rejected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_pair_is_accepted_after_trimming() {
        let attempt = LoginAttempt::new("  admin ", "12345\n");
        assert_eq!(
            DEMO_CREDENTIALS.check(&attempt),
            LoginOutcome::Accepted {
                username: "admin".to_owned()
            }
        );
    }

    #[test]
    fn wrong_pair_is_rejected() {
        let attempt = LoginAttempt::new("x", "y");
        assert_eq!(DEMO_CREDENTIALS.check(&attempt), LoginOutcome::Rejected);

        let attempt = LoginAttempt::new("Admin", "12345");
        assert_eq!(DEMO_CREDENTIALS.check(&attempt), LoginOutcome::Rejected);
    }

    #[test]
    fn blank_fields_are_incomplete() {
        for (user, pass) in [("", "12345"), ("admin", "   "), ("", "")] {
            let attempt = LoginAttempt::new(user, pass);
            assert_eq!(DEMO_CREDENTIALS.check(&attempt), LoginOutcome::Incomplete);
        }
    }
}
