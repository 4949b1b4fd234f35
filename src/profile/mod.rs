//! Retirement profile input record and batch loading

mod data;
pub mod loader;

pub use data::{RetirementProfile, MAX_AGE};
pub use loader::{load_profiles, load_profiles_from_reader};

#[cfg(test)]
pub(crate) use data::tests::sample_profile;
