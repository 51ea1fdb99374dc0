//! Global Application State
//!
//! One reactive [`Shell`] plus the services around it. Components read the
//! shell through signals and change it only through its methods.

use chrono::NaiveDate;
use leptos::*;
use std::rc::Rc;

use sure_circle::layout::Layout;
use sure_circle::model::User;
use sure_circle::notify::Notification;
use sure_circle::router::Page;
use sure_circle::seed::AppData;
use sure_circle::service::MockCircleService;
use sure_circle::session::AuthMode;
use sure_circle::shell::Shell;
use sure_circle::storage::{draft_saved_notification, Persistence};
use sure_circle::validation::Form;

use super::clock::GlooClock;
use super::storage::LocalStorage;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Navigation, session, widgets and the current notification
    pub shell: RwSignal<Shell>,
    /// Grid layout for the current window width
    pub layout: RwSignal<Layout>,
    /// Reference day for relative activity labels
    pub today: RwSignal<NaiveDate>,
    /// Seeded mock dataset
    pub data: Rc<AppData>,
    pub persistence: Rc<Persistence<LocalStorage>>,
    pub service: Rc<MockCircleService<GlooClock>>,
}

/// Provide global state to the component tree, restoring a cached session
pub fn provide_global_state() -> GlobalState {
    let persistence = Persistence::new(LocalStorage);
    let shell = Shell::restore(persistence.cached_user());
    let width = window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(1024.0);

    let state = GlobalState {
        shell: create_rw_signal(shell),
        layout: create_rw_signal(Layout::for_width(width)),
        today: create_rw_signal(today()),
        data: Rc::new(AppData::seeded()),
        persistence: Rc::new(persistence),
        service: Rc::new(MockCircleService::new(GlooClock)),
    };

    provide_context(state.clone());
    state
}

pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

impl GlobalState {
    pub fn user(&self) -> Option<User> {
        self.shell.with(|s| s.user().cloned())
    }

    pub fn is_authenticated(&self) -> bool {
        self.shell.with(|s| s.is_authenticated())
    }

    pub fn is_showing(&self, page: Page) -> bool {
        self.shell.with(|s| s.is_showing(page))
    }

    pub fn navigate(&self, page: Page) {
        self.shell.update(|s| {
            s.navigate(page);
        });
    }

    pub fn navigate_with_action(&self, page: Page, action: &str) {
        self.shell.update(|s| {
            s.navigate_with_action(page, action);
        });
    }

    pub fn notify(&self, notification: Notification) {
        self.shell.update(|s| s.notify(notification));
    }

    /// Sign in with the user the service returned and cache it
    pub fn complete_auth(&self, mode: AuthMode, user: User) {
        if let Err(e) = self.persistence.cache_user(&user) {
            web_sys::console::error_1(&format!("Failed to cache user: {}", e).into());
        }
        self.shell.update(|s| s.complete_auth(mode, user));
    }

    pub fn logout(&self) {
        if let Err(e) = self.persistence.forget_user() {
            web_sys::console::error_1(&format!("Failed to clear cached user: {}", e).into());
        }
        self.shell.update(|s| s.logout());
    }

    /// The claim went through; its draft must not come back on the next visit
    pub fn claim_submitted(&self) {
        if let Err(e) = self.persistence.clear_claim_draft() {
            web_sys::console::error_1(&format!("Failed to clear claim draft: {}", e).into());
        }
        self.shell.update(|s| s.claim_submitted());
    }

    pub fn save_claim_draft(&self, form: &Form) {
        let result = self.persistence.save_claim_draft(form);
        self.notify(draft_saved_notification(&result));
    }
}
