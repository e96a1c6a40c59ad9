//! Ports: async interfaces at the crate's external boundaries.

mod mentor;
mod profile_store;

pub use mentor::{
    MentorError, MentorProvider, MentorRequest, RawCareerSuggestion, Speaker, TurnSnapshot,
};
pub use profile_store::{ProfileStore, ProfileStoreError};
