//! The user profile record and its mutations.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::CourseId;

use super::{AcademicLevel, CareerRole, LearningPace};

/// Number of completed courses that fills the first dashboard milestone.
const FIRST_MILESTONE_COURSES: usize = 5;

/// The durable record describing one user's identity, goal, and progress.
///
/// Field names on the wire keep the original camelCase shape so an
/// existing stored blob keeps loading. The whole record is replaced on
/// every settings save; targeted mutations exist for enrollment and
/// goal-setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub academic_level: AcademicLevel,
    pub interests: Vec<String>,
    pub career_goal: CareerRole,
    pub learning_pace: LearningPace,
    /// Hours per day, constrained to [1, 12] by the input surface.
    pub daily_availability: u8,
    pub onboarded: bool,
    pub completed_courses: Vec<CourseId>,
}

impl UserProfile {
    /// Profile fabricated by the mock auth flow.
    ///
    /// Blank fields fall back to the stock explorer identity; the rest of
    /// the record gets the onboarding defaults.
    pub fn mock_explorer(name: &str, email: &str) -> Self {
        let name = name.trim();
        let email = email.trim();
        Self {
            name: if name.is_empty() { "Explorer".to_string() } else { name.to_string() },
            email: if email.is_empty() { "user@example.com".to_string() } else { email.to_string() },
            academic_level: AcademicLevel::Undergraduate,
            interests: vec!["Coding".to_string(), "Design".to_string()],
            career_goal: CareerRole::FrontendDeveloper,
            learning_pace: LearningPace::Moderate,
            daily_availability: 4,
            onboarded: true,
            completed_courses: Vec::new(),
        }
    }

    /// Records an enrollment.
    ///
    /// Returns true if the course was appended, false if it was already
    /// present (duplicate enrollments are no-ops).
    pub fn enroll(&mut self, course_id: CourseId) -> bool {
        if self.is_enrolled(&course_id) {
            return false;
        }
        self.completed_courses.push(course_id);
        true
    }

    /// Returns true if the course id is already recorded.
    pub fn is_enrolled(&self, course_id: &CourseId) -> bool {
        self.completed_courses.contains(course_id)
    }

    /// Replaces the career goal.
    pub fn set_goal(&mut self, role: CareerRole) {
        self.career_goal = role;
    }

    /// Progress toward the first milestone, as a whole percentage capped
    /// at 100.
    pub fn milestone_progress_percent(&self) -> u32 {
        let percent = self.completed_courses.len() * 100 / FIRST_MILESTONE_COURSES;
        percent.min(100) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_explorer_uses_given_identity() {
        let profile = UserProfile::mock_explorer("Ana", "a@x.com");
        assert_eq!(profile.name, "Ana");
        assert_eq!(profile.email, "a@x.com");
        assert!(profile.onboarded);
        assert!(profile.completed_courses.is_empty());
    }

    #[test]
    fn mock_explorer_fills_blank_fields() {
        let profile = UserProfile::mock_explorer("", "  ");
        assert_eq!(profile.name, "Explorer");
        assert_eq!(profile.email, "user@example.com");
        assert_eq!(profile.career_goal, CareerRole::FrontendDeveloper);
        assert_eq!(profile.learning_pace, LearningPace::Moderate);
        assert_eq!(profile.daily_availability, 4);
        assert_eq!(profile.interests, vec!["Coding", "Design"]);
    }

    #[test]
    fn enroll_appends_once() {
        let mut profile = UserProfile::mock_explorer("Ana", "a@x.com");
        assert!(profile.enroll(CourseId::new("ml-0")));
        assert_eq!(profile.completed_courses, vec![CourseId::new("ml-0")]);

        assert!(!profile.enroll(CourseId::new("ml-0")));
        assert_eq!(profile.completed_courses.len(), 1);
    }

    #[test]
    fn enroll_preserves_order() {
        let mut profile = UserProfile::mock_explorer("Ana", "a@x.com");
        profile.enroll(CourseId::new("b-1"));
        profile.enroll(CourseId::new("a-0"));
        assert_eq!(
            profile.completed_courses,
            vec![CourseId::new("b-1"), CourseId::new("a-0")]
        );
    }

    #[test]
    fn set_goal_replaces_value() {
        let mut profile = UserProfile::mock_explorer("Ana", "a@x.com");
        profile.set_goal(CareerRole::DataEngineer);
        assert_eq!(profile.career_goal, CareerRole::DataEngineer);
    }

    #[test]
    fn milestone_progress_caps_at_100() {
        let mut profile = UserProfile::mock_explorer("Ana", "a@x.com");
        assert_eq!(profile.milestone_progress_percent(), 0);

        profile.enroll(CourseId::new("c-1"));
        assert_eq!(profile.milestone_progress_percent(), 20);

        for i in 2..=9 {
            profile.enroll(CourseId::new(format!("c-{i}")));
        }
        assert_eq!(profile.milestone_progress_percent(), 100);
    }

    #[test]
    fn wire_shape_is_camel_case() {
        let profile = UserProfile::mock_explorer("Ana", "a@x.com");
        let value = serde_json::to_value(&profile).unwrap();
        assert!(value.get("academicLevel").is_some());
        assert!(value.get("careerGoal").is_some());
        assert!(value.get("learningPace").is_some());
        assert!(value.get("dailyAvailability").is_some());
        assert!(value.get("completedCourses").is_some());
        assert_eq!(value["careerGoal"], "Frontend Developer");
    }
}
