use super::User;

/// A synthetic user together with the credentials the backend issued for it.
///
/// Owned by the scenario that registered the user; lets that scenario log in
/// again, refresh, or compare the profile echo against what it sent.
#[derive(Debug, Clone)]
pub struct RegistrationResult {
    pub registered_user: User,
    pub access_token: String,
    pub refresh_token: String,
}
