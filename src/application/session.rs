//! The application session: one reducer over profile, navigation, and
//! schedule state.
//!
//! Every mutation is a variant of [`Action`] consumed by
//! [`AppSession::apply`], so the transition rules live in one place.
//! Profile mutations write through to the durable store immediately; a
//! failed write keeps the session operating from memory and retries on
//! the next mutation.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::foundation::{CourseId, StateMachine, TaskId, ValidationError};
use crate::domain::navigation::{resolve, View};
use crate::domain::profile::{CareerRole, UserProfile};
use crate::domain::schedule::{TaskDraft, TaskList};
use crate::ports::ProfileStore;

/// A protected action parked while the user authenticates.
///
/// Enroll and goal-set attempts made while logged out redirect to the
/// auth prompt; the intent is kept here and executed once login
/// completes instead of being dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum ProtectedIntent {
    Enroll(CourseId),
    SetGoal(CareerRole),
}

/// Session mutations, as one tagged union.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Landing-page "start exploring" action.
    Start,
    /// Landing-page "log in" action.
    RequestLogin,
    /// Mock auth form submission. Always succeeds; blank fields fabricate
    /// the stock explorer identity.
    SubmitAuth { name: String, email: String },
    /// First-time setup completed with a fully built profile.
    CompleteOnboarding(UserProfile),
    /// Settings save: the profile is replaced wholesale, not merged.
    SaveSettings(UserProfile),
    Logout,
    /// Sidebar or back-button navigation, validated against the view
    /// transition table.
    Navigate(View),
    /// Explore drill-down; stores the selection atomically with the
    /// transition into the detail view.
    SelectDomain(CareerRole),
    /// Back from the domain detail to the explore grid. The stale
    /// selection is left in place; it is always overwritten before reuse.
    BackToExplore,
    Enroll(CourseId),
    SetGoal(CareerRole),
    AddTask(TaskDraft),
    RemoveTask(TaskId),
    GenerateSchedule,
}

/// Errors surfaced by the session reducer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// The session state container.
pub struct AppSession {
    store: Arc<dyn ProfileStore>,
    profile: Option<UserProfile>,
    view: View,
    selected_domain: Option<CareerRole>,
    tasks: TaskList,
    pending_intent: Option<ProtectedIntent>,
    unsaved_changes: bool,
}

impl AppSession {
    /// Starts a session against the given store.
    ///
    /// A readable stored profile resumes an authenticated session at the
    /// dashboard. An absent blob, an unreadable blob, or an unavailable
    /// store all start a fresh session at the landing page; unreadable
    /// and unavailable cases are logged but never surfaced.
    pub async fn start(store: Arc<dyn ProfileStore>) -> Self {
        let profile = match store.load().await {
            Ok(profile) => profile,
            Err(e) if e.is_unreadable_blob() => {
                warn!(error = %e, "stored profile unreadable, starting unauthenticated");
                None
            }
            Err(e) => {
                warn!(error = %e, "profile storage unavailable, starting unauthenticated");
                None
            }
        };

        let view = if profile.is_some() {
            info!("resuming session from stored profile");
            View::Dashboard
        } else {
            View::Landing
        };

        Self {
            store,
            profile,
            view,
            selected_domain: None,
            tasks: TaskList::new(),
            pending_intent: None,
            unsaved_changes: false,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.profile.is_some()
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// The stored navigation tag.
    pub fn view(&self) -> View {
        self.view
    }

    /// The view that actually renders: protected tags fall back to the
    /// auth prompt while logged out, without rewriting the stored tag.
    pub fn rendered_view(&self) -> View {
        resolve(self.view, self.is_logged_in())
    }

    pub fn selected_domain(&self) -> Option<CareerRole> {
        self.selected_domain
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn pending_intent(&self) -> Option<&ProtectedIntent> {
        self.pending_intent.as_ref()
    }

    /// True when an earlier write-through failed and the durable blob
    /// lags the in-memory profile. Non-blocking; the next mutation (or
    /// [`flush`](Self::flush)) retries.
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved_changes
    }

    /// Applies one session action.
    pub async fn apply(&mut self, action: Action) -> Result<(), SessionError> {
        match action {
            Action::Start => {
                self.view = self.view.transition_to(View::Explore)?;
            }
            Action::RequestLogin => {
                self.view = self.view.transition_to(View::Auth)?;
            }
            Action::SubmitAuth { name, email } => {
                let profile = UserProfile::mock_explorer(&name, &email);
                self.login(profile).await;
            }
            Action::CompleteOnboarding(profile) | Action::SaveSettings(profile) => {
                self.login(profile).await;
            }
            Action::Logout => {
                self.logout().await;
            }
            Action::Navigate(target) => {
                // The detail view needs its selection set atomically;
                // plain navigation may not enter it.
                if target == View::DomainDetail {
                    return Err(ValidationError::invalid_format(
                        "view",
                        "domain-detail requires a selected domain",
                    )
                    .into());
                }
                self.view = self.view.transition_to(target)?;
            }
            Action::SelectDomain(role) => {
                self.view = self.view.transition_to(View::DomainDetail)?;
                self.selected_domain = Some(role);
            }
            Action::BackToExplore => {
                self.view = self.view.transition_to(View::Explore)?;
            }
            Action::Enroll(course_id) => {
                self.enroll(course_id).await;
            }
            Action::SetGoal(role) => {
                self.set_goal(role).await;
            }
            Action::AddTask(draft) => {
                self.tasks.add(draft)?;
            }
            Action::RemoveTask(id) => {
                self.tasks.remove(&id);
            }
            Action::GenerateSchedule => {
                self.tasks.generate_ai_schedule();
            }
        }
        Ok(())
    }

    /// Retries the write-through if a previous save failed.
    pub async fn flush(&mut self) {
        if self.unsaved_changes {
            self.persist().await;
        }
    }

    /// Shared login path for mock auth, onboarding, and settings saves:
    /// replace the profile, write through, land on the dashboard, then
    /// run any parked intent.
    async fn login(&mut self, profile: UserProfile) {
        info!(name = %profile.name, "session authenticated");
        self.profile = Some(profile);
        self.persist().await;
        self.view = View::Dashboard;

        if let Some(intent) = self.pending_intent.take() {
            debug!(?intent, "resuming parked action after login");
            match intent {
                ProtectedIntent::Enroll(course_id) => self.enroll(course_id).await,
                ProtectedIntent::SetGoal(role) => self.set_goal(role).await,
            }
        }
    }

    async fn logout(&mut self) {
        if let Err(e) = self.store.clear().await {
            warn!(error = %e, "failed to clear stored profile on logout");
        }
        self.profile = None;
        self.view = View::Landing;
        self.selected_domain = None;
        self.pending_intent = None;
        self.unsaved_changes = false;
        info!("logged out");
    }

    async fn enroll(&mut self, course_id: CourseId) {
        match self.profile.as_mut() {
            Some(profile) => {
                if profile.enroll(course_id) {
                    self.persist().await;
                }
            }
            None => self.redirect_to_auth(ProtectedIntent::Enroll(course_id)),
        }
    }

    async fn set_goal(&mut self, role: CareerRole) {
        match self.profile.as_mut() {
            Some(profile) => {
                profile.set_goal(role);
                self.persist().await;
            }
            None => self.redirect_to_auth(ProtectedIntent::SetGoal(role)),
        }
    }

    /// Hard-set redirect for a protected action attempted while logged
    /// out. The profile is untouched; the intent is parked for resume.
    fn redirect_to_auth(&mut self, intent: ProtectedIntent) {
        debug!(?intent, "protected action while logged out, redirecting to auth");
        self.pending_intent = Some(intent);
        self.view = View::Auth;
    }

    /// Write-through: mirrors the in-memory profile to durable storage.
    ///
    /// On failure the session keeps the mutation in memory, logs a
    /// warning, and leaves the dirty flag set so the next mutation
    /// retries the full write.
    async fn persist(&mut self) {
        let Some(profile) = self.profile.clone() else {
            return;
        };

        match self.store.save(&profile).await {
            Ok(()) => {
                if self.unsaved_changes {
                    debug!("durable profile caught up with in-memory state");
                }
                self.unsaved_changes = false;
            }
            Err(e) => {
                warn!(error = %e, "profile write failed; keeping changes in memory");
                self.unsaved_changes = true;
            }
        }
    }
}
