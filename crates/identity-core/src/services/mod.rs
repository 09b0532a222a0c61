//! Services composed from the ports.

mod registration;

pub use registration::RegistrationFixture;
