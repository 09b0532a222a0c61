use crate::domain::User;

/// Source of synthetic users.
pub trait UserFactory: Send + Sync {
    /// Produce a fresh user. Uniqueness is only statistical.
    fn generate(&self) -> User;
}
