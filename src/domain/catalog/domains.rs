//! The career-domain table: one entry per role, with market series.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::profile::CareerRole;

use super::values::{market_series, DemandTrend, Difficulty, MarketStat};

/// Market snapshot for one career domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainStats {
    pub role: CareerRole,
    pub avg_salary: String,
    pub trend: DemandTrend,
    pub openings: String,
    pub difficulty: Difficulty,
    pub description: String,
    pub market_stats: Vec<MarketStat>,
}

struct DomainSeed {
    role: CareerRole,
    base_salary: f64,
    trend: DemandTrend,
    openings: &'static str,
    difficulty: Difficulty,
    description: &'static str,
}

const DOMAIN_SEEDS: [DomainSeed; 15] = [
    DomainSeed {
        role: CareerRole::FrontendDeveloper,
        base_salary: 112_000.0,
        trend: DemandTrend::Steady,
        openings: "240k+",
        difficulty: Difficulty::Beginner,
        description: "Crafting responsive and interactive user interfaces using modern web technologies.",
    },
    DomainSeed {
        role: CareerRole::BackendDeveloper,
        base_salary: 128_000.0,
        trend: DemandTrend::High,
        openings: "190k+",
        difficulty: Difficulty::Intermediate,
        description: "Building the server-side logic, databases, and APIs that power applications.",
    },
    DomainSeed {
        role: CareerRole::FullStackDeveloper,
        base_salary: 135_000.0,
        trend: DemandTrend::High,
        openings: "310k+",
        difficulty: Difficulty::Intermediate,
        description: "Mastering both client and server-side development for complete end-to-end solutions.",
    },
    DomainSeed {
        role: CareerRole::MobileAppDeveloper,
        base_salary: 118_000.0,
        trend: DemandTrend::Steady,
        openings: "115k+",
        difficulty: Difficulty::Intermediate,
        description: "Creating native and cross-platform applications for iOS and Android devices.",
    },
    DomainSeed {
        role: CareerRole::UiUxDesigner,
        base_salary: 98_000.0,
        trend: DemandTrend::Steady,
        openings: "85k+",
        difficulty: Difficulty::Beginner,
        description: "Designing intuitive user journeys and aesthetically pleasing interfaces.",
    },
    DomainSeed {
        role: CareerRole::DataScientist,
        base_salary: 145_000.0,
        trend: DemandTrend::High,
        openings: "140k+",
        difficulty: Difficulty::Advanced,
        description: "Uncovering patterns in complex data to drive strategic business decisions.",
    },
    DomainSeed {
        role: CareerRole::DataEngineer,
        base_salary: 138_000.0,
        trend: DemandTrend::Rising,
        openings: "95k+",
        difficulty: Difficulty::Advanced,
        description: "Designing and building systems for collecting, storing, and analyzing data at scale.",
    },
    DomainSeed {
        role: CareerRole::MachineLearningEngineer,
        base_salary: 162_000.0,
        trend: DemandTrend::High,
        openings: "105k+",
        difficulty: Difficulty::Advanced,
        description: "Developing autonomous AI systems and predictive models.",
    },
    DomainSeed {
        role: CareerRole::DevOpsEngineer,
        base_salary: 142_000.0,
        trend: DemandTrend::High,
        openings: "155k+",
        difficulty: Difficulty::Advanced,
        description: "Bridging the gap between development and operations through automation.",
    },
    DomainSeed {
        role: CareerRole::CloudArchitect,
        base_salary: 165_000.0,
        trend: DemandTrend::Rising,
        openings: "80k+",
        difficulty: Difficulty::Advanced,
        description: "Designing robust and scalable cloud infrastructure for modern enterprises.",
    },
    DomainSeed {
        role: CareerRole::CybersecurityAnalyst,
        base_salary: 122_000.0,
        trend: DemandTrend::High,
        openings: "210k+",
        difficulty: Difficulty::Intermediate,
        description: "Protecting networks, devices, and data from unauthorized access or attack.",
    },
    DomainSeed {
        role: CareerRole::BlockchainDeveloper,
        base_salary: 155_000.0,
        trend: DemandTrend::Rising,
        openings: "40k+",
        difficulty: Difficulty::Advanced,
        description: "Developing decentralized applications and smart contracts.",
    },
    DomainSeed {
        role: CareerRole::GameDeveloper,
        base_salary: 105_000.0,
        trend: DemandTrend::Steady,
        openings: "65k+",
        difficulty: Difficulty::Intermediate,
        description: "Creating immersive digital experiences through game engines and interactive logic.",
    },
    DomainSeed {
        role: CareerRole::EmbeddedSystemsEngineer,
        base_salary: 115_000.0,
        trend: DemandTrend::Steady,
        openings: "50k+",
        difficulty: Difficulty::Advanced,
        description: "Designing specialized computer systems within larger mechanical or electrical systems.",
    },
    DomainSeed {
        role: CareerRole::QaAutomationEngineer,
        base_salary: 102_000.0,
        trend: DemandTrend::Steady,
        openings: "90k+",
        difficulty: Difficulty::Beginner,
        description: "Ensuring software quality through automated testing frameworks and bug tracking.",
    },
];

static DOMAIN_STATS: Lazy<Vec<DomainStats>> = Lazy::new(|| {
    DOMAIN_SEEDS
        .iter()
        .map(|seed| DomainStats {
            role: seed.role,
            avg_salary: format_salary(seed.base_salary),
            trend: seed.trend,
            openings: seed.openings.to_string(),
            difficulty: seed.difficulty,
            description: seed.description.to_string(),
            market_stats: market_series(seed.base_salary),
        })
        .collect()
});

/// All career domains, catalog order.
pub fn domain_stats() -> &'static [DomainStats] {
    &DOMAIN_STATS
}

/// Looks up the domain card for a role.
///
/// The `NotSure` sentinel (and only it) has no entry.
pub fn stats_for(role: CareerRole) -> Option<&'static DomainStats> {
    DOMAIN_STATS.iter().find(|d| d.role == role)
}

/// Renders `112000.0` as `"$112,000"`.
fn format_salary(amount: f64) -> String {
    let digits: Vec<char> = format!("{amount:.0}").chars().collect();
    let mut out = String::from("$");
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_one_entry_per_concrete_role() {
        assert_eq!(domain_stats().len(), 15);
        for role in CareerRole::ALL {
            if role.is_undecided() {
                assert!(stats_for(role).is_none());
            } else {
                assert!(stats_for(role).is_some(), "missing domain card for {role}");
            }
        }
    }

    #[test]
    fn salary_strings_are_grouped() {
        let frontend = stats_for(CareerRole::FrontendDeveloper).unwrap();
        assert_eq!(frontend.avg_salary, "$112,000");
        let designer = stats_for(CareerRole::UiUxDesigner).unwrap();
        assert_eq!(designer.avg_salary, "$98,000");
    }

    #[test]
    fn market_series_uses_domain_base_salary() {
        let ml = stats_for(CareerRole::MachineLearningEngineer).unwrap();
        assert_eq!(ml.market_stats.len(), 5);
        assert_eq!(ml.market_stats[2].salary, 162_000.0);
    }

    #[test]
    fn roles_are_unique() {
        let stats = domain_stats();
        for (i, a) in stats.iter().enumerate() {
            for b in &stats[i + 1..] {
                assert_ne!(a.role, b.role);
            }
        }
    }
}
