//! Profile storage adapters.

mod file_profile_store;
mod in_memory_profile_store;

pub use file_profile_store::FileProfileStore;
pub use in_memory_profile_store::InMemoryProfileStore;
