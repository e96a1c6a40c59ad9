//! Closed enumerations describing a user's identity and goals.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Career roles the catalog knows about.
///
/// `NotSure` is a sentinel chosen during onboarding; every other value is
/// a valid lookup key into the market-stat and course tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CareerRole {
    #[serde(rename = "Frontend Developer")]
    FrontendDeveloper,
    #[serde(rename = "Backend Developer")]
    BackendDeveloper,
    #[serde(rename = "Full Stack Developer")]
    FullStackDeveloper,
    #[serde(rename = "Mobile App Developer")]
    MobileAppDeveloper,
    #[serde(rename = "UI/UX Designer")]
    UiUxDesigner,
    #[serde(rename = "Data Scientist")]
    DataScientist,
    #[serde(rename = "Data Engineer")]
    DataEngineer,
    #[serde(rename = "Machine Learning Engineer")]
    MachineLearningEngineer,
    #[serde(rename = "DevOps Engineer")]
    DevOpsEngineer,
    #[serde(rename = "Cloud Architect")]
    CloudArchitect,
    #[serde(rename = "Cybersecurity Analyst")]
    CybersecurityAnalyst,
    #[serde(rename = "Blockchain Developer")]
    BlockchainDeveloper,
    #[serde(rename = "Game Developer")]
    GameDeveloper,
    #[serde(rename = "Embedded Systems Engineer")]
    EmbeddedSystemsEngineer,
    #[serde(rename = "QA Automation Engineer")]
    QaAutomationEngineer,
    #[serde(rename = "Not Sure")]
    NotSure,
}

impl CareerRole {
    /// Every role, catalog order first, sentinel last.
    pub const ALL: [CareerRole; 16] = [
        CareerRole::FrontendDeveloper,
        CareerRole::BackendDeveloper,
        CareerRole::FullStackDeveloper,
        CareerRole::MobileAppDeveloper,
        CareerRole::UiUxDesigner,
        CareerRole::DataScientist,
        CareerRole::DataEngineer,
        CareerRole::MachineLearningEngineer,
        CareerRole::DevOpsEngineer,
        CareerRole::CloudArchitect,
        CareerRole::CybersecurityAnalyst,
        CareerRole::BlockchainDeveloper,
        CareerRole::GameDeveloper,
        CareerRole::EmbeddedSystemsEngineer,
        CareerRole::QaAutomationEngineer,
        CareerRole::NotSure,
    ];

    /// Display name, as rendered in the UI and on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            CareerRole::FrontendDeveloper => "Frontend Developer",
            CareerRole::BackendDeveloper => "Backend Developer",
            CareerRole::FullStackDeveloper => "Full Stack Developer",
            CareerRole::MobileAppDeveloper => "Mobile App Developer",
            CareerRole::UiUxDesigner => "UI/UX Designer",
            CareerRole::DataScientist => "Data Scientist",
            CareerRole::DataEngineer => "Data Engineer",
            CareerRole::MachineLearningEngineer => "Machine Learning Engineer",
            CareerRole::DevOpsEngineer => "DevOps Engineer",
            CareerRole::CloudArchitect => "Cloud Architect",
            CareerRole::CybersecurityAnalyst => "Cybersecurity Analyst",
            CareerRole::BlockchainDeveloper => "Blockchain Developer",
            CareerRole::GameDeveloper => "Game Developer",
            CareerRole::EmbeddedSystemsEngineer => "Embedded Systems Engineer",
            CareerRole::QaAutomationEngineer => "QA Automation Engineer",
            CareerRole::NotSure => "Not Sure",
        }
    }

    /// Lowercase hyphenated form, used to build course id slugs.
    pub fn slug(&self) -> String {
        self.name().to_lowercase().replace([' ', '/'], "-")
    }

    /// Returns true for the onboarding sentinel.
    pub fn is_undecided(&self) -> bool {
        matches!(self, CareerRole::NotSure)
    }
}

impl fmt::Display for CareerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CareerRole {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        CareerRole::ALL
            .iter()
            .find(|role| role.name().eq_ignore_ascii_case(trimmed))
            .copied()
            .ok_or_else(|| {
                ValidationError::invalid_format("career_role", format!("unknown role '{s}'"))
            })
    }
}

/// Academic level collected during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcademicLevel {
    #[serde(rename = "High School")]
    HighSchool,
    Undergraduate,
    Postgraduate,
    #[serde(rename = "Self-Taught")]
    SelfTaught,
}

impl fmt::Display for AcademicLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AcademicLevel::HighSchool => "High School",
            AcademicLevel::Undergraduate => "Undergraduate",
            AcademicLevel::Postgraduate => "Postgraduate",
            AcademicLevel::SelfTaught => "Self-Taught",
        };
        write!(f, "{s}")
    }
}

/// How quickly the user wants to move through material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LearningPace {
    Slow,
    Moderate,
    Fast,
}

impl fmt::Display for LearningPace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LearningPace::Slow => "Slow",
            LearningPace::Moderate => "Moderate",
            LearningPace::Fast => "Fast",
        };
        write!(f, "{s}")
    }
}
