//! Backend service interface
//!
//! Every "network" step of the demo is a [`CircleService`] call. The only
//! implementation is [`MockCircleService`], which waits a fixed delay on its
//! [`Clock`] and returns hardcoded results; a real backend can replace it
//! without touching the views.
//!
//! Both traits are `?Send`: the browser build is single-threaded.

use async_trait::async_trait;
use std::cell::RefCell;
use std::time::Duration;
use thiserror::Error;

use crate::model::{User, Vote, VoteTally};
use crate::seed::{new_member, AppData};
use crate::session::AuthMode;
use crate::staging::StagedFile;
use crate::validation::Form;

/// Simulated login/signup round trip
pub const AUTH_DELAY: Duration = Duration::from_millis(2000);

/// Simulated pool creation
pub const CREATE_POOL_DELAY: Duration = Duration::from_millis(2000);

/// Simulated claim upload
pub const SUBMIT_CLAIM_DELAY: Duration = Duration::from_millis(3000);

/// Simulated vote round trip
pub const VOTE_DELAY: Duration = Duration::from_millis(1500);

/// Simulated profile save
pub const PROFILE_DELAY: Duration = Duration::from_millis(1500);

/// Tally every vote reports, however many times it is cast
pub const FIXED_TALLY: VoteTally = VoteTally {
    votes_for: 9,
    progress_percent: 90,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Request rejected: {0}")]
    Rejected(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Source of delays
#[async_trait(?Send)]
pub trait Clock {
    async fn sleep(&self, duration: Duration);
}

#[async_trait(?Send)]
pub trait CircleService {
    async fn login(&self, form: &Form) -> ServiceResult<User>;

    async fn signup(&self, form: &Form) -> ServiceResult<User>;

    async fn create_pool(&self, form: &Form) -> ServiceResult<()>;

    async fn submit_claim(&self, form: &Form, evidence: &[StagedFile]) -> ServiceResult<()>;

    async fn cast_vote(&self, claim_id: u32, vote: Vote) -> ServiceResult<VoteTally>;

    async fn update_profile(&self, form: &Form) -> ServiceResult<()>;

    /// Dispatch on the flow the form belongs to
    async fn authenticate(&self, mode: AuthMode, form: &Form) -> ServiceResult<User> {
        match mode {
            AuthMode::Login => self.login(form).await,
            AuthMode::Signup => self.signup(form).await,
        }
    }
}

/// Fixed-delay stand-in for a backend
pub struct MockCircleService<C> {
    clock: C,
    data: AppData,
}

impl<C: Clock> MockCircleService<C> {
    pub fn new(clock: C) -> Self {
        Self::with_data(clock, AppData::seeded())
    }

    pub fn with_data(clock: C, data: AppData) -> Self {
        Self { clock, data }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

#[async_trait(?Send)]
impl<C: Clock> CircleService for MockCircleService<C> {
    async fn login(&self, form: &Form) -> ServiceResult<User> {
        self.clock.sleep(AUTH_DELAY).await;
        let user = self
            .data
            .demo_member()
            .cloned()
            .ok_or_else(|| ServiceError::Unavailable("no demo member seeded".to_string()))?;
        tracing::info!(email = form.value("email").unwrap_or_default(), "simulated login");
        Ok(user)
    }

    async fn signup(&self, form: &Form) -> ServiceResult<User> {
        self.clock.sleep(AUTH_DELAY).await;
        tracing::info!(email = form.value("email").unwrap_or_default(), "simulated signup");
        Ok(new_member())
    }

    async fn create_pool(&self, form: &Form) -> ServiceResult<()> {
        self.clock.sleep(CREATE_POOL_DELAY).await;
        tracing::info!(name = form.value("name").unwrap_or_default(), "simulated pool creation");
        Ok(())
    }

    async fn submit_claim(&self, form: &Form, evidence: &[StagedFile]) -> ServiceResult<()> {
        self.clock.sleep(SUBMIT_CLAIM_DELAY).await;
        tracing::info!(
            amount = form.value("amount").unwrap_or_default(),
            files = evidence.len(),
            "simulated claim submission"
        );
        Ok(())
    }

    async fn cast_vote(&self, claim_id: u32, vote: Vote) -> ServiceResult<VoteTally> {
        self.clock.sleep(VOTE_DELAY).await;
        tracing::info!(claim_id, ?vote, "simulated vote");
        Ok(FIXED_TALLY)
    }

    async fn update_profile(&self, _form: &Form) -> ServiceResult<()> {
        self.clock.sleep(PROFILE_DELAY).await;
        tracing::info!("simulated profile update");
        Ok(())
    }
}

/// Clock that returns immediately and records every requested delay
#[derive(Debug, Default)]
pub struct InstantClock {
    slept: RefCell<Vec<Duration>>,
}

impl InstantClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays requested so far, in order
    pub fn slept(&self) -> Vec<Duration> {
        self.slept.borrow().clone()
    }

    pub fn total(&self) -> Duration {
        self.slept.borrow().iter().sum()
    }
}

#[async_trait(?Send)]
impl Clock for InstantClock {
    async fn sleep(&self, duration: Duration) {
        self.slept.borrow_mut().push(duration);
    }
}
