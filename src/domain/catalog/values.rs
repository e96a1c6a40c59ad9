//! Value objects shared by the catalog tables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One year of market data for a career domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketStat {
    pub year: u16,
    /// Relative demand index, 0-100.
    pub demand: u32,
    /// Median salary in USD for that year.
    pub salary: f64,
}

/// Builds the five-year market series from a base (2023) salary.
pub(super) fn market_series(base_salary: f64) -> Vec<MarketStat> {
    const YEARS: [u16; 5] = [2021, 2022, 2023, 2024, 2025];
    const DEMAND: [u32; 5] = [30, 45, 70, 85, 95];
    const SALARY_FACTOR: [f64; 5] = [0.85, 0.92, 1.0, 1.1, 1.25];

    YEARS
        .iter()
        .zip(DEMAND.iter().zip(SALARY_FACTOR.iter()))
        .map(|(&year, (&demand, &factor))| MarketStat {
            year,
            demand,
            salary: base_salary * factor,
        })
        .collect()
}

/// Hiring-demand trend label for a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemandTrend {
    High,
    Steady,
    Rising,
}

impl fmt::Display for DemandTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DemandTrend::High => "High",
            DemandTrend::Steady => "Steady",
            DemandTrend::Rising => "Rising",
        };
        write!(f, "{s}")
    }
}

/// Entry difficulty of a career domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        };
        write!(f, "{s}")
    }
}

/// Difficulty band of a single course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
    #[serde(rename = "All Levels")]
    AllLevels,
}

impl fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CourseLevel::Beginner => "Beginner",
            CourseLevel::Intermediate => "Intermediate",
            CourseLevel::Advanced => "Advanced",
            CourseLevel::AllLevels => "All Levels",
        };
        write!(f, "{s}")
    }
}

/// Course provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provider {
    #[serde(rename = "IBM")]
    Ibm,
    Coursera,
    Udemy,
    Google,
    Meta,
    Microsoft,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Provider::Ibm => "IBM",
            Provider::Coursera => "Coursera",
            Provider::Udemy => "Udemy",
            Provider::Google => "Google",
            Provider::Meta => "Meta",
            Provider::Microsoft => "Microsoft",
        };
        write!(f, "{s}")
    }
}
