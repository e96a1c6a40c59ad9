//! Read-only reference data: career domains, market series, and the
//! course catalog.
//!
//! Everything here is assembled once at first use and never mutated.
//! Lookups are by role or by text; nothing is keyed by identity.

mod courses;
mod domains;
mod values;

pub use courses::{all_courses, categories, courses_for, find_course, search_courses, Course};
pub use domains::{domain_stats, stats_for, DomainStats};
pub use values::{CourseLevel, DemandTrend, Difficulty, MarketStat, Provider};
