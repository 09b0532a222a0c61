//! Random user generation backed by the `fake` crate.

use std::sync::Mutex;

use fake::Fake;
use fake::faker::address::en::CountryName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Word;
use fake::faker::name::en::Name;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use identity_core::domain::{Gender, User};
use identity_core::ports::UserFactory;

/// Password given to every generated user, so credentials stay predictable.
pub const FIXED_PASSWORD: &str = "Password123";

/// Number of preferred category keys per user.
const CATEGORY_COUNT: usize = 2;

/// Generates users from a random source.
///
/// `new()` seeds from the OS. `seeded()` gives a reproducible sequence.
pub struct FakeUserFactory {
    rng: Mutex<StdRng>,
}

impl FakeUserFactory {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Safe-domain email with a numeric tag spliced into the local part,
    /// which widens the space far beyond the name list alone.
    fn email(rng: &mut StdRng) -> String {
        let email: String = SafeEmail().fake_with_rng(rng);
        let tag: u32 = rng.random_range(1_000..1_000_000);
        match email.split_once('@') {
            Some((local, domain)) => format!("{}{}@{}", local, tag, domain),
            None => format!("user{}@example.com", tag),
        }
    }

    fn category_key(rng: &mut StdRng) -> String {
        let word: String = Word().fake_with_rng(rng);
        if word.is_empty() {
            "general".to_string()
        } else {
            word
        }
    }
}

impl Default for FakeUserFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl UserFactory for FakeUserFactory {
    fn generate(&self) -> User {
        // Poisoning leaves the RNG state usable.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let rng = &mut *rng;

        let email = Self::email(rng);
        let display_name: String = Name().fake_with_rng(rng);
        let gender = if rng.random_bool(0.5) {
            Gender::Male
        } else {
            Gender::Female
        };
        let categories = (0..CATEGORY_COUNT)
            .map(|_| Self::category_key(rng))
            .collect();
        let country: String = CountryName().fake_with_rng(rng);

        User::new(email, FIXED_PASSWORD, display_name, gender, categories, country)
    }
}
