//! The course catalog and its query surface.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::CourseId;
use crate::domain::profile::CareerRole;

use super::values::{CourseLevel, Provider};

/// One catalog course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub provider: Provider,
    pub level: CourseLevel,
    pub is_free: bool,
    pub duration_hours: u32,
    pub category: CareerRole,
    pub rating: f32,
    pub enrolled_count: String,
}

const MASTERCLASS_TRACKS: [&str; 4] = [
    "Level 1 Fundamentals",
    "Advanced Architectures",
    "Real-world Projects",
    "Professional Certification",
];

const TRACK_LEVELS: [CourseLevel; 4] = [
    CourseLevel::Beginner,
    CourseLevel::Intermediate,
    CourseLevel::Advanced,
    CourseLevel::AllLevels,
];

const PROVIDER_ROTATION: [Provider; 6] = [
    Provider::Google,
    Provider::Meta,
    Provider::Ibm,
    Provider::Microsoft,
    Provider::Udemy,
    Provider::Coursera,
];

/// Number of first-wave courses mirrored into the "2025 Update" block.
const UPDATED_REISSUE_COUNT: usize = 10;

fn masterclass(role: CareerRole, domain_idx: usize, track_idx: usize) -> Course {
    Course {
        id: CourseId::new(format!("{}-{}", role.slug(), track_idx)),
        title: format!("{} Masterclass: {}", role.name(), MASTERCLASS_TRACKS[track_idx]),
        provider: PROVIDER_ROTATION[(domain_idx + track_idx) % PROVIDER_ROTATION.len()],
        level: TRACK_LEVELS[track_idx],
        is_free: track_idx == 0,
        duration_hours: 15 + (track_idx as u32) * 10,
        category: role,
        rating: 4.5 + ((domain_idx + track_idx) % 5) as f32 / 10.0,
        enrolled_count: format!("{}.{}k", 10 + (domain_idx * 7 + track_idx * 13) % 100, (domain_idx + track_idx) % 10),
    }
}

fn soft_skill(id: &str, title: &str, provider: Provider, level: CourseLevel, is_free: bool, duration_hours: u32, category: CareerRole, rating: f32, enrolled_count: &str) -> Course {
    Course {
        id: CourseId::new(id),
        title: title.to_string(),
        provider,
        level,
        is_free,
        duration_hours,
        category,
        rating,
        enrolled_count: enrolled_count.to_string(),
    }
}

static ALL_COURSES: Lazy<Vec<Course>> = Lazy::new(|| {
    let concrete_roles = CareerRole::ALL.iter().filter(|r| !r.is_undecided());

    let mut courses: Vec<Course> = concrete_roles
        .enumerate()
        .flat_map(|(domain_idx, &role)| {
            (0..MASTERCLASS_TRACKS.len()).map(move |track_idx| masterclass(role, domain_idx, track_idx))
        })
        .collect();

    courses.push(soft_skill(
        "soft-1",
        "Technical Leadership for Devs",
        Provider::Ibm,
        CourseLevel::Advanced,
        false,
        20,
        CareerRole::FullStackDeveloper,
        4.9,
        "15k",
    ));
    courses.push(soft_skill(
        "soft-2",
        "Agile Project Management",
        Provider::Google,
        CourseLevel::Beginner,
        true,
        12,
        CareerRole::DevOpsEngineer,
        4.8,
        "80k",
    ));
    courses.push(soft_skill(
        "soft-3",
        "Clean Code Principles",
        Provider::Microsoft,
        CourseLevel::Intermediate,
        false,
        18,
        CareerRole::BackendDeveloper,
        4.9,
        "45k",
    ));

    let reissues: Vec<Course> = courses
        .iter()
        .take(UPDATED_REISSUE_COUNT)
        .map(|c| Course {
            id: CourseId::new(format!("ext-{}", c.id)),
            title: format!("2025 Update: {}", c.title),
            ..c.clone()
        })
        .collect();
    courses.extend(reissues);

    courses
});

/// The full catalog, assembly order.
pub fn all_courses() -> &'static [Course] {
    &ALL_COURSES
}

/// Courses belonging to one career domain's curriculum.
pub fn courses_for(role: CareerRole) -> Vec<&'static Course> {
    ALL_COURSES.iter().filter(|c| c.category == role).collect()
}

/// Looks a course up by id.
pub fn find_course(id: &CourseId) -> Option<&'static Course> {
    ALL_COURSES.iter().find(|c| &c.id == id)
}

/// Case-insensitive title search, optionally restricted to one category.
pub fn search_courses(query: &str, category: Option<CareerRole>) -> Vec<&'static Course> {
    let needle = query.to_lowercase();
    ALL_COURSES
        .iter()
        .filter(|c| c.title.to_lowercase().contains(&needle))
        .filter(|c| category.map_or(true, |cat| c.category == cat))
        .collect()
}

/// Distinct course categories, catalog order.
pub fn categories() -> Vec<CareerRole> {
    let mut seen = Vec::new();
    for course in ALL_COURSES.iter() {
        if !seen.contains(&course.category) {
            seen.push(course.category);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_exceeds_fifty_courses() {
        // 15 domains x 4 tracks + 3 soft skills + 10 reissues
        assert_eq!(all_courses().len(), 73);
    }

    #[test]
    fn course_ids_are_unique() {
        let mut ids: Vec<&str> = all_courses().iter().map(|c| c.id.as_str()).collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn ids_use_role_slugs() {
        assert!(find_course(&CourseId::new("frontend-developer-0")).is_some());
        assert!(find_course(&CourseId::new("machine-learning-engineer-3")).is_some());
        assert!(find_course(&CourseId::new("not-sure-0")).is_none());
    }

    #[test]
    fn first_track_is_free() {
        for role in CareerRole::ALL.iter().filter(|r| !r.is_undecided()) {
            let curriculum = courses_for(*role);
            let fundamentals = curriculum
                .iter()
                .find(|c| c.id.as_str().ends_with("-0") && !c.id.as_str().starts_with("ext-"))
                .unwrap();
            assert!(fundamentals.is_free, "{role} fundamentals should be free");
        }
    }

    #[test]
    fn every_domain_has_a_curriculum() {
        for role in CareerRole::ALL.iter().filter(|r| !r.is_undecided()) {
            assert!(courses_for(*role).len() >= 4, "{role} curriculum too small");
        }
    }

    #[test]
    fn search_matches_title_case_insensitively() {
        let hits = search_courses("clean code", None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "soft-3");
    }

    #[test]
    fn search_respects_category_filter() {
        let all = search_courses("Masterclass", None);
        let frontend_only = search_courses("Masterclass", Some(CareerRole::FrontendDeveloper));
        assert!(frontend_only.len() < all.len());
        assert!(frontend_only.iter().all(|c| c.category == CareerRole::FrontendDeveloper));
    }

    #[test]
    fn empty_query_matches_everything() {
        assert_eq!(search_courses("", None).len(), all_courses().len());
    }

    #[test]
    fn reissues_mirror_originals() {
        let original = find_course(&CourseId::new("frontend-developer-0")).unwrap();
        let reissue = find_course(&CourseId::new("ext-frontend-developer-0")).unwrap();
        assert_eq!(reissue.title, format!("2025 Update: {}", original.title));
        assert_eq!(reissue.category, original.category);
        assert_eq!(reissue.provider, original.provider);
    }

    #[test]
    fn ratings_stay_in_display_band() {
        for course in all_courses() {
            assert!((4.5..=5.0).contains(&course.rating), "{} rating out of band", course.id);
        }
    }

    #[test]
    fn categories_are_distinct_and_cover_roles() {
        let cats = categories();
        assert_eq!(cats.len(), 15);
        assert!(!cats.contains(&CareerRole::NotSure));
    }
}
