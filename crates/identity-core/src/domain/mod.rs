//! Domain entities - the synthetic users and what registration yields for them.

mod registration;
mod user;

pub use registration::RegistrationResult;
pub use user::{Gender, User};
