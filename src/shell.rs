//! Application shell state
//!
//! [`Shell`] is the single state value the UI controller owns: session,
//! visible page, fragment, open modal, tab groups, FAQ, staged evidence,
//! mobile menu and the pending notifications. Every navigation and
//! authentication transition goes through one of its methods; the UI only
//! renders it and schedules the simulated service calls in between.

use std::collections::VecDeque;

use crate::layout::Layout;
use crate::model::{User, Vote};
use crate::notify::Notification;
use crate::router::{tabs, Page, PageAction};
use crate::session::{logged_out_notification, AuthMode, Session};
use crate::staging::{validate_claim, EvidenceStaging, StageOutcome, StagedFile};
use crate::validation::{Form, ValidationError};
use crate::widgets::{FaqGroup, TabGroup};

/// Modal dialogs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    Login,
    Signup,
}

impl From<AuthMode> for Modal {
    fn from(mode: AuthMode) -> Self {
        match mode {
            AuthMode::Login => Modal::Login,
            AuthMode::Signup => Modal::Signup,
        }
    }
}

/// A queued notification. `id` grows with every notification raised, so a
/// timer can tell its notice apart from an identical later one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub notification: Notification,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shell {
    session: Session,
    page: Option<Page>,
    fragment: String,
    modal: Option<Modal>,
    pool_tabs: TabGroup,
    claim_tabs: TabGroup,
    faq: FaqGroup,
    staging: EvidenceStaging,
    menu_open: bool,
    two_factor: bool,
    notices: VecDeque<Notice>,
    next_notice: u64,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell {
    /// Anonymous shell on the home page
    pub fn new() -> Self {
        Self {
            session: Session::Anonymous,
            page: Some(Page::Home),
            fragment: String::new(),
            modal: None,
            pool_tabs: TabGroup::new(&tabs::POOL_TABS),
            claim_tabs: TabGroup::new(&tabs::CLAIM_TABS),
            faq: FaqGroup::new(),
            staging: EvidenceStaging::new(),
            menu_open: false,
            two_factor: false,
            notices: VecDeque::new(),
            next_notice: 0,
        }
    }

    /// Shell for a page load; a cached user restores the signed-in state
    pub fn restore(cached: Option<User>) -> Self {
        let mut shell = Self::new();
        if let Some(user) = cached {
            tracing::debug!(user = %user.name, "restored cached session");
            shell.session = Session::Authenticated(user);
        }
        shell
    }

    // ---- accessors ----

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Visible page; `None` after showing an unknown id
    pub fn page(&self) -> Option<Page> {
        self.page
    }

    pub fn is_showing(&self, page: Page) -> bool {
        self.page == Some(page)
    }

    /// Fragment mirroring the last shown page id
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn modal(&self) -> Option<Modal> {
        self.modal
    }

    pub fn pool_tabs(&self) -> &TabGroup {
        &self.pool_tabs
    }

    pub fn claim_tabs(&self) -> &TabGroup {
        &self.claim_tabs
    }

    pub fn faq(&self) -> &FaqGroup {
        &self.faq
    }

    pub fn staging(&self) -> &EvidenceStaging {
        &self.staging
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn two_factor_enabled(&self) -> bool {
        self.two_factor
    }

    /// The notification on screen: the oldest one not yet dismissed
    pub fn notification(&self) -> Option<&Notification> {
        self.notices.front().map(|n| &n.notification)
    }

    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    /// Most recently raised notification still pending
    pub fn latest_notification(&self) -> Option<&Notification> {
        self.notices.back().map(|n| &n.notification)
    }

    /// Pending notifications, in the order they will be shown
    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.notices.iter().map(|n| &n.notification)
    }

    // ---- routing ----

    /// Hide every page, show the one matching `id` and mirror it in the
    /// fragment. Returns the page when its initializer should run.
    ///
    /// Unknown ids leave every page hidden.
    pub fn show_page(&mut self, id: &str) -> Option<Page> {
        self.page = id.parse::<Page>().ok();
        self.fragment = id.to_string();
        tracing::debug!(page = id, shown = self.page.is_some(), "show page");
        self.page.filter(Page::has_initializer)
    }

    /// Follow a `data-page` link. Protected pages prompt for login while
    /// anonymous. Returns whether the page was shown.
    pub fn navigate(&mut self, page: Page) -> bool {
        if page.is_public() || self.is_authenticated() {
            self.show_page(page.id());
            self.menu_open = false;
            true
        } else {
            self.open_modal(Modal::Login);
            false
        }
    }

    /// Follow a link carrying a `data-action` as well
    pub fn navigate_with_action(&mut self, page: Page, action: &str) -> bool {
        if !self.navigate(page) {
            return false;
        }
        if let Some(action) = PageAction::parse(page, action) {
            self.apply_action(action);
        }
        true
    }

    pub fn apply_action(&mut self, action: PageAction) {
        match action.page() {
            Page::Pools => self.pool_tabs.select(action.tab()),
            _ => self.claim_tabs.select(action.tab()),
        };
    }

    /// React to the location fragment, on load and on back/forward
    pub fn handle_fragment(&mut self, fragment: &str) {
        let id = crate::router::fragment_id(fragment);
        if id.is_empty() {
            self.show_page(Page::Home.id());
            return;
        }

        let public = id.parse::<Page>().map(|p| p.is_public()).unwrap_or(false);
        if public || self.is_authenticated() {
            self.show_page(id);
        } else {
            self.open_modal(Modal::Login);
        }
    }

    // ---- modals ----

    pub fn open_modal(&mut self, modal: Modal) {
        self.modal = Some(modal);
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// "Sign up instead" / "Log in instead" links
    pub fn switch_modal(&mut self) {
        self.modal = match self.modal {
            Some(Modal::Login) => Some(Modal::Signup),
            Some(Modal::Signup) => Some(Modal::Login),
            None => None,
        };
    }

    // ---- auth ----

    /// Validate an auth form before the simulated call. On failure the
    /// validation notification is raised and nothing else changes.
    pub fn begin_auth(&mut self, form: &Form) -> Result<(), ValidationError> {
        self.check(form.validate())
    }

    /// Finish a successful login or signup
    pub fn complete_auth(&mut self, mode: AuthMode, user: User) {
        tracing::info!(user = %user.name, ?mode, "signed in");
        self.session = Session::Authenticated(user);
        self.modal = None;
        self.show_page(Page::Dashboard.id());
        self.notify(mode.welcome());
    }

    /// Sign out from any page
    pub fn logout(&mut self) {
        tracing::info!("signed out");
        self.session = Session::Anonymous;
        self.menu_open = false;
        self.show_page(Page::Home.id());
        self.notify(logged_out_notification());
    }

    // ---- calls to action ----

    /// "Get started": dashboard when signed in, signup otherwise
    pub fn get_started(&mut self) {
        self.member_or_signup(Page::Dashboard);
    }

    /// "Join now": pools when signed in, signup otherwise
    pub fn join_now(&mut self) {
        self.member_or_signup(Page::Pools);
    }

    pub fn learn_more(&mut self) {
        self.show_page(Page::About.id());
    }

    fn member_or_signup(&mut self, page: Page) {
        if self.is_authenticated() {
            self.show_page(page.id());
        } else {
            self.open_modal(Modal::Signup);
        }
    }

    // ---- widgets ----

    pub fn select_pool_tab(&mut self, tab: &str) -> bool {
        self.pool_tabs.select(tab)
    }

    pub fn select_claim_tab(&mut self, tab: &str) -> bool {
        self.claim_tabs.select(tab)
    }

    pub fn toggle_faq(&mut self, index: usize) {
        self.faq.toggle(index);
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Apply a resize: desktop widths close the mobile menu
    pub fn resize(&mut self, width: f64) -> Layout {
        let layout = Layout::for_width(width);
        if layout == Layout::Desktop {
            self.menu_open = false;
        }
        layout
    }

    // ---- pools ----

    pub fn begin_create_pool(&mut self, form: &Form) -> Result<(), ValidationError> {
        self.check(form.validate())
    }

    pub fn pool_created(&mut self) {
        self.notify(Notification::success(
            "Pool Created!",
            "Your insurance pool has been created successfully. Start inviting members!",
        ));
        self.pool_tabs.select(tabs::MY_POOLS);
    }

    // ---- claims ----

    /// Stage a batch of evidence files, queueing one notification per
    /// rejection in batch order.
    pub fn stage_files(&mut self, files: Vec<StagedFile>) -> StageOutcome {
        let outcome = self.staging.stage(files);
        for rejection in &outcome.rejected {
            self.notify(rejection.notification());
        }
        outcome
    }

    pub fn remove_file(&mut self, name: &str) -> bool {
        self.staging.remove(name)
    }

    /// Submit control state for the claim form
    pub fn claim_submit_enabled(&self, form: &Form) -> bool {
        crate::staging::claim_submit_enabled(form, &self.staging)
    }

    pub fn begin_claim(&mut self, form: &Form) -> Result<(), ValidationError> {
        let result = validate_claim(form, &self.staging);
        self.check(result)
    }

    /// Evidence as sent with the simulated submission
    pub fn staged_files(&self) -> Vec<StagedFile> {
        self.staging.files().to_vec()
    }

    /// The claim went through: clear evidence, confirm, show my claims.
    /// The claim itself is not added anywhere.
    pub fn claim_submitted(&mut self) {
        self.staging.clear();
        self.notify(Notification::success(
            "Claim Submitted",
            "Your claim has been submitted successfully. Pool members will vote on it soon.",
        ));
        self.claim_tabs.select(tabs::MY_CLAIMS);
    }

    pub fn vote_recorded(&mut self, vote: Vote) {
        self.notify(Notification::success(
            "Vote Submitted",
            format!(
                "You have {} this claim. Thank you for participating!",
                vote.verb()
            ),
        ));
    }

    // ---- profile ----

    pub fn profile_updated(&mut self) {
        self.notify(Notification::success(
            "Profile Updated",
            "Your profile information has been updated successfully.",
        ));
    }

    /// Security item toggle. Only enabling raises a notification.
    pub fn toggle_two_factor(&mut self) -> bool {
        self.two_factor = !self.two_factor;
        if self.two_factor {
            self.notify(Notification::success(
                "2FA Enabled",
                "Two-factor authentication has been enabled for your account.",
            ));
        }
        self.two_factor
    }

    pub fn password_changed(&mut self) {
        self.notify(Notification::success(
            "Password Changed",
            "Your password has been updated successfully.",
        ));
    }

    // ---- notifications ----

    pub fn notify(&mut self, notification: Notification) {
        self.notices.push_back(Notice {
            id: self.next_notice,
            notification,
        });
        self.next_notice += 1;
    }

    /// Close the notification on screen; the next pending one takes its place
    pub fn dismiss(&mut self) {
        self.notices.pop_front();
    }

    /// Close notice `id` if it is still the one on screen
    pub fn dismiss_notice(&mut self, id: u64) -> bool {
        if self.notices.front().map(|n| n.id) == Some(id) {
            self.notices.pop_front();
            true
        } else {
            false
        }
    }

    fn check(&mut self, result: Result<(), ValidationError>) -> Result<(), ValidationError> {
        if let Err(e) = &result {
            tracing::debug!("validation failed: {}", e);
            self.notify(e.notification());
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{new_member, AppData};

    fn member() -> User {
        AppData::seeded().users[0].clone()
    }

    fn signed_in() -> Shell {
        Shell::restore(Some(member()))
    }

    #[test]
    fn test_new_shell() {
        let shell = Shell::new();
        assert!(!shell.is_authenticated());
        assert_eq!(shell.page(), Some(Page::Home));
        assert_eq!(shell.modal(), None);
        assert!(shell.notification().is_none());
    }

    #[test]
    fn test_show_page_sets_fragment() {
        let mut shell = signed_in();
        assert_eq!(shell.show_page("claims"), Some(Page::Claims));
        assert_eq!(shell.page(), Some(Page::Claims));
        assert_eq!(shell.fragment(), "claims");

        // Public pages have no initializer
        assert_eq!(shell.show_page("about"), None);
        assert!(shell.is_showing(Page::About));
    }

    #[test]
    fn test_unknown_page_hides_everything() {
        let mut shell = signed_in();
        assert_eq!(shell.show_page("settings"), None);
        assert_eq!(shell.page(), None);
        assert_eq!(shell.fragment(), "settings");
    }

    #[test]
    fn test_protected_link_prompts_login() {
        let mut shell = Shell::new();
        assert!(!shell.navigate(Page::Pools));
        assert_eq!(shell.modal(), Some(Modal::Login));
        assert_eq!(shell.page(), Some(Page::Home));

        assert!(shell.navigate(Page::About));
        assert_eq!(shell.page(), Some(Page::About));
    }

    #[test]
    fn test_navigate_with_action_selects_tab() {
        let mut shell = signed_in();
        assert!(shell.navigate_with_action(Page::Claims, "file"));
        assert_eq!(shell.claim_tabs().active(), Some(tabs::FILE_CLAIM));

        assert!(shell.navigate_with_action(Page::Pools, "create"));
        assert_eq!(shell.pool_tabs().active(), Some(tabs::CREATE_POOL));

        // Unknown actions still navigate
        assert!(shell.navigate_with_action(Page::Pools, "archive"));
        assert_eq!(shell.pool_tabs().active(), Some(tabs::CREATE_POOL));
    }

    #[test]
    fn test_action_ignored_when_anonymous() {
        let mut shell = Shell::new();
        assert!(!shell.navigate_with_action(Page::Claims, "vote"));
        assert_eq!(shell.claim_tabs().active(), Some(tabs::PENDING_VOTES));
        assert_eq!(shell.modal(), Some(Modal::Login));
    }

    #[test]
    fn test_fragment_routing() {
        let mut anon = Shell::new();
        anon.handle_fragment("#dashboard");
        assert_eq!(anon.modal(), Some(Modal::Login));
        assert_eq!(anon.page(), Some(Page::Home));

        anon.close_modal();
        anon.handle_fragment("#about");
        assert_eq!(anon.page(), Some(Page::About));

        let mut member = signed_in();
        member.handle_fragment("#profile");
        assert_eq!(member.page(), Some(Page::Profile));

        member.handle_fragment("");
        assert_eq!(member.page(), Some(Page::Home));
    }

    #[test]
    fn test_modal_switching() {
        let mut shell = Shell::new();
        shell.switch_modal();
        assert_eq!(shell.modal(), None);

        shell.open_modal(Modal::Login);
        shell.switch_modal();
        assert_eq!(shell.modal(), Some(Modal::Signup));
        shell.switch_modal();
        assert_eq!(shell.modal(), Some(Modal::Login));
        shell.close_modal();
        assert_eq!(shell.modal(), None);
    }

    #[test]
    fn test_blank_auth_field_changes_nothing() {
        let mut shell = Shell::new();
        shell.open_modal(Modal::Login);
        let before_page = shell.page();

        let form = Form::new()
            .required("email", "arjun.patel@email.com")
            .required("password", "");
        assert!(shell.begin_auth(&form).is_err());

        assert!(!shell.is_authenticated());
        assert_eq!(shell.page(), before_page);
        assert_eq!(shell.modal(), Some(Modal::Login));
        assert_eq!(shell.notification().unwrap().title, "Validation Error");
    }

    #[test]
    fn test_complete_login() {
        let mut shell = Shell::new();
        shell.open_modal(Modal::Login);

        shell.complete_auth(AuthMode::Login, member());

        assert!(shell.is_authenticated());
        assert_eq!(shell.modal(), None);
        assert_eq!(shell.page(), Some(Page::Dashboard));
        assert_eq!(shell.fragment(), "dashboard");
        assert_eq!(shell.notification().unwrap().title, "Welcome Back!");
    }

    #[test]
    fn test_complete_signup() {
        let mut shell = Shell::new();
        shell.open_modal(Modal::Signup);

        shell.complete_auth(AuthMode::Signup, new_member());

        assert_eq!(shell.user().unwrap().name, "New User");
        assert_eq!(shell.notification().unwrap().title, "Account Created!");
    }

    #[test]
    fn test_logout_from_any_page() {
        for page in Page::ALL {
            let mut shell = signed_in();
            shell.show_page(page.id());
            shell.toggle_menu();

            shell.logout();

            assert!(!shell.is_authenticated());
            assert_eq!(shell.page(), Some(Page::Home));
            assert!(!shell.menu_open());
            assert_eq!(shell.notification().unwrap().title, "Logged Out");
        }
    }

    #[test]
    fn test_calls_to_action() {
        let mut anon = Shell::new();
        anon.get_started();
        assert_eq!(anon.modal(), Some(Modal::Signup));

        anon.learn_more();
        assert_eq!(anon.page(), Some(Page::About));

        let mut member = signed_in();
        member.join_now();
        assert_eq!(member.page(), Some(Page::Pools));
        member.get_started();
        assert_eq!(member.page(), Some(Page::Dashboard));
    }

    #[test]
    fn test_resize_closes_menu_on_desktop() {
        let mut shell = Shell::new();
        shell.toggle_menu();
        assert_eq!(shell.resize(500.0), Layout::Mobile);
        assert!(shell.menu_open());

        assert_eq!(shell.resize(1024.0), Layout::Desktop);
        assert!(!shell.menu_open());
    }

    #[test]
    fn test_claim_flow_resets_staging() {
        let mut shell = signed_in();
        shell.select_claim_tab(tabs::FILE_CLAIM);
        let form = Form::new().required("reason", "Screen damage");

        assert_eq!(shell.begin_claim(&form), Err(ValidationError::MissingEvidence));
        assert_eq!(shell.notification().unwrap().title, "Missing Evidence");
        assert!(!shell.claim_submit_enabled(&form));

        shell.stage_files(vec![StagedFile::new("quote.pdf", "application/pdf", 4096)]);
        assert!(shell.claim_submit_enabled(&form));
        assert!(shell.begin_claim(&form).is_ok());

        shell.claim_submitted();
        assert!(shell.staging().is_empty());
        assert_eq!(shell.claim_tabs().active(), Some(tabs::MY_CLAIMS));
        assert_eq!(shell.latest_notification().unwrap().title, "Claim Submitted");
    }

    #[test]
    fn test_stage_rejection_notifies() {
        let mut shell = signed_in();
        let outcome = shell.stage_files(vec![
            StagedFile::new("virus.exe", "application/x-msdownload", 10),
            StagedFile::new("photo.png", "image/png", 10),
        ]);

        assert_eq!(outcome.accepted.len(), 1);
        assert_eq!(shell.notification().unwrap().title, "Invalid File Type");
        assert!(shell.remove_file("photo.png"));
        assert!(shell.staging().is_empty());
    }

    #[test]
    fn test_batch_rejections_each_get_a_notification() {
        let mut shell = signed_in();
        let outcome = shell.stage_files(vec![
            StagedFile::new("huge.pdf", "application/pdf", crate::staging::MAX_FILE_SIZE + 1),
            StagedFile::new("virus.exe", "application/x-msdownload", 10),
        ]);
        assert_eq!(outcome.rejected.len(), 2);

        let titles: Vec<&str> = shell.notifications().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["File Too Large", "Invalid File Type"]);
        assert_eq!(shell.notification().unwrap().title, "File Too Large");

        shell.dismiss();
        assert_eq!(shell.notification().unwrap().title, "Invalid File Type");
        shell.dismiss();
        assert!(shell.notification().is_none());
    }

    #[test]
    fn test_dismiss_notice_ignores_stale_ids() {
        let mut shell = signed_in();
        shell.password_changed();
        shell.password_changed();
        let first = shell.current_notice().unwrap().id;

        assert!(shell.dismiss_notice(first));
        // Same text, different notice
        assert!(!shell.dismiss_notice(first));
        assert_eq!(shell.notification().unwrap().title, "Password Changed");

        let second = shell.current_notice().unwrap().id;
        assert_ne!(first, second);
        assert!(shell.dismiss_notice(second));
        assert!(shell.notification().is_none());
    }

    #[test]
    fn test_pool_created_switches_tab() {
        let mut shell = signed_in();
        shell.select_pool_tab(tabs::CREATE_POOL);
        shell.pool_created();
        assert_eq!(shell.pool_tabs().active(), Some(tabs::MY_POOLS));
        assert_eq!(shell.notification().unwrap().title, "Pool Created!");
    }

    #[test]
    fn test_vote_message() {
        let mut shell = signed_in();
        shell.vote_recorded(Vote::Reject);
        assert_eq!(
            shell.notification().unwrap().message,
            "You have rejected this claim. Thank you for participating!"
        );
        shell.dismiss();
        assert!(shell.notification().is_none());
    }

    #[test]
    fn test_security_items() {
        let mut shell = signed_in();
        assert!(shell.toggle_two_factor());
        assert_eq!(shell.notification().unwrap().title, "2FA Enabled");

        shell.dismiss();
        assert!(!shell.toggle_two_factor());
        assert!(shell.notification().is_none());

        shell.password_changed();
        assert_eq!(shell.notification().unwrap().title, "Password Changed");
    }

    #[test]
    fn test_faq_via_shell() {
        let mut shell = Shell::new();
        shell.toggle_faq(0);
        shell.toggle_faq(2);
        assert!(shell.faq().is_open(2));
        assert!(!shell.faq().is_open(0));
    }
}
