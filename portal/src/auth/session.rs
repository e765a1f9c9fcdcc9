use shared::UserProfile;

/// An authenticated session: bearer token plus the profile the backend
/// returned with it. The profile is only ever replaced wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

impl Session {
    pub fn new(token: impl Into<String>, user: UserProfile) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }
}
