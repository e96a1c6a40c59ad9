//! Top-level view navigation.
//!
//! There is no history stack: the session holds a single view tag, back
//! actions hard-set their target, and protected views fall back to the
//! auth prompt at render time without rewriting the stored tag.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{StateMachine, ValidationError};

/// The enumerated identifier of the currently rendered top-level view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Landing,
    Auth,
    Dashboard,
    Explore,
    DomainDetail,
    Courses,
    Schedule,
    Settings,
}

impl View {
    /// Views that render the auth prompt instead while logged out.
    pub fn requires_login(&self) -> bool {
        matches!(self, View::Dashboard | View::Settings)
    }

    /// The string tag, as stored and rendered.
    pub fn tag(&self) -> &'static str {
        match self {
            View::Landing => "landing",
            View::Auth => "auth",
            View::Dashboard => "dashboard",
            View::Explore => "explore",
            View::DomainDetail => "domain-detail",
            View::Courses => "courses",
            View::Schedule => "schedule",
            View::Settings => "settings",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for View {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "landing" => Ok(View::Landing),
            "auth" => Ok(View::Auth),
            "dashboard" => Ok(View::Dashboard),
            "explore" => Ok(View::Explore),
            "domain-detail" => Ok(View::DomainDetail),
            "courses" => Ok(View::Courses),
            "schedule" => Ok(View::Schedule),
            "settings" => Ok(View::Settings),
            other => Err(ValidationError::invalid_format(
                "view",
                format!("unknown view tag '{other}'"),
            )),
        }
    }
}

/// The complete transition table.
///
/// Arcs cover user navigation (landing actions, the sidebar, the explore
/// drill-down and its back action) plus the internal hard-sets: login to
/// the dashboard, logout to the landing page, and the redirect to the
/// auth prompt when a protected action fires while logged out.
impl StateMachine for View {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use View::*;
        match self {
            Landing => vec![Explore, Auth],
            Auth => vec![Dashboard, Landing],
            Dashboard => vec![Explore, Courses, Schedule, Settings, Landing],
            Explore => vec![DomainDetail, Dashboard, Courses, Schedule, Settings, Landing],
            DomainDetail => vec![Explore, Dashboard, Courses, Schedule, Settings, Auth, Landing],
            Courses => vec![Dashboard, Explore, Schedule, Settings, Auth, Landing],
            Schedule => vec![Dashboard, Explore, Courses, Settings, Landing],
            Settings => vec![Dashboard, Explore, Courses, Schedule, Landing],
        }
    }
}

/// Render-time routing decision.
///
/// A protected view requested while logged out renders the auth prompt
/// instead of the requested one; the stored navigation state is not
/// rewritten, so this is a fallback, not a transition.
pub fn resolve(view: View, logged_in: bool) -> View {
    if view.requires_login() && !logged_in {
        View::Auth
    } else {
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_VIEWS: [View; 8] = [
        View::Landing,
        View::Auth,
        View::Dashboard,
        View::Explore,
        View::DomainDetail,
        View::Courses,
        View::Schedule,
        View::Settings,
    ];

    #[test]
    fn tags_round_trip() {
        for view in ALL_VIEWS {
            assert_eq!(view.tag().parse::<View>().unwrap(), view);
        }
        assert!("onboarding".parse::<View>().is_err());
    }

    #[test]
    fn serde_uses_kebab_tags() {
        assert_eq!(serde_json::to_string(&View::DomainDetail).unwrap(), "\"domain-detail\"");
        let view: View = serde_json::from_str("\"schedule\"").unwrap();
        assert_eq!(view, View::Schedule);
    }

    #[test]
    fn only_dashboard_and_settings_are_protected() {
        for view in ALL_VIEWS {
            let expected = matches!(view, View::Dashboard | View::Settings);
            assert_eq!(view.requires_login(), expected, "{view}");
        }
    }

    #[test]
    fn protected_views_resolve_to_auth_when_logged_out() {
        assert_eq!(resolve(View::Dashboard, false), View::Auth);
        assert_eq!(resolve(View::Settings, false), View::Auth);
        assert_eq!(resolve(View::Dashboard, true), View::Dashboard);
    }

    #[test]
    fn public_views_resolve_to_themselves() {
        for view in [View::Landing, View::Explore, View::DomainDetail, View::Courses, View::Schedule] {
            assert_eq!(resolve(view, false), view);
        }
    }

    #[test]
    fn landing_offers_start_and_login() {
        assert_eq!(View::Landing.valid_transitions(), vec![View::Explore, View::Auth]);
    }

    #[test]
    fn auth_leads_to_dashboard_or_back() {
        assert!(View::Auth.can_transition_to(&View::Dashboard));
        assert!(View::Auth.can_transition_to(&View::Landing));
        assert!(!View::Auth.can_transition_to(&View::Settings));
    }

    #[test]
    fn domain_detail_is_entered_only_from_explore() {
        for view in ALL_VIEWS {
            let allowed = view.can_transition_to(&View::DomainDetail);
            assert_eq!(allowed, view == View::Explore, "{view} -> domain-detail");
        }
    }

    #[test]
    fn protected_action_redirects_reach_auth() {
        assert!(View::DomainDetail.can_transition_to(&View::Auth));
        assert!(View::Courses.can_transition_to(&View::Auth));
        assert!(!View::Schedule.can_transition_to(&View::Auth));
    }

    #[test]
    fn every_view_can_reach_landing_except_landing() {
        for view in ALL_VIEWS {
            if view == View::Landing {
                continue;
            }
            assert!(view.can_transition_to(&View::Landing), "{view} -> landing");
        }
    }

    #[test]
    fn table_and_predicate_agree() {
        for view in ALL_VIEWS {
            for target in view.valid_transitions() {
                assert!(view.can_transition_to(&target));
            }
            for target in ALL_VIEWS {
                if !view.valid_transitions().contains(&target) {
                    assert!(!view.can_transition_to(&target));
                }
            }
        }
    }

    #[test]
    fn transition_to_rejects_unknown_arcs() {
        assert!(View::Landing.transition_to(View::Settings).is_err());
        assert_eq!(View::Landing.transition_to(View::Explore), Ok(View::Explore));
    }
}
