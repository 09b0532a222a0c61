//! Synthetic data generation.

mod user_factory;

pub use user_factory::{FIXED_PASSWORD, FakeUserFactory};
