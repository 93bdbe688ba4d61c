//! Entity model: profiles, careers, and the built-in catalog.

pub mod career;
pub mod profile;

pub use career::{Career, Catalog};
pub use profile::{MAX_LEVEL, Profile, Roster};
