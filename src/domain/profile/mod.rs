//! User profile aggregate and its value objects.

mod record;
mod stored;
mod values;

pub use record::UserProfile;
pub use stored::{ProfileCodecError, StoredProfile, SCHEMA_VERSION};
pub use values::{AcademicLevel, CareerRole, LearningPace};
