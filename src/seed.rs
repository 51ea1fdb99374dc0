//! Seeded mock dataset
//!
//! Everything the demo shows comes from here. The collections are built once
//! at startup and never mutated afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{
    Claim, ClaimStatus, Governance, Pool, Transaction, TransactionKind, User, VerificationStatus,
};

const DEFAULT_AVATAR: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face";

/// The whole in-memory dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppData {
    pub users: Vec<User>,
    pub pools: Vec<Pool>,
    pub claims: Vec<Claim>,
    pub transactions: Vec<Transaction>,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

impl AppData {
    /// Build the demo dataset
    pub fn seeded() -> Self {
        Self {
            users: vec![
                User {
                    id: 1,
                    name: "Arjun Patel".to_string(),
                    email: "arjun.patel@email.com".to_string(),
                    phone: Some("+91 98765 43210".to_string()),
                    trust_score: 785,
                    verification_status: VerificationStatus::Verified,
                    joined_date: Some(date(2024, 3, 15)),
                    total_pooled: 15_000,
                    claims_submitted: 1,
                    votes_participated: 12,
                    avatar: DEFAULT_AVATAR.to_string(),
                },
                User {
                    id: 2,
                    name: "Priya Sharma".to_string(),
                    email: "priya.sharma@email.com".to_string(),
                    phone: Some("+91 98765 43211".to_string()),
                    trust_score: 820,
                    verification_status: VerificationStatus::Verified,
                    joined_date: Some(date(2024, 2, 20)),
                    total_pooled: 22_000,
                    claims_submitted: 0,
                    votes_participated: 18,
                    avatar: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=150&h=150&fit=crop&crop=face"
                        .to_string(),
                },
            ],
            pools: vec![
                Pool {
                    id: 1,
                    name: "Tech Professionals Mobile Insurance".to_string(),
                    description:
                        "Insurance for smartphones, laptops, and tablets for IT professionals"
                            .to_string(),
                    members: 12,
                    max_members: 15,
                    monthly_contribution: 500,
                    total_pooled: 84_000,
                    coverage_limit: 50_000,
                    category: "Electronics".to_string(),
                    created_date: date(2024, 1, 15),
                    active_claims: 1,
                    governance: Governance::MajorityVote,
                    trust_threshold: 700,
                },
                Pool {
                    id: 2,
                    name: "College Hostel Gadget Protection".to_string(),
                    description:
                        "Comprehensive protection for laptops, phones, and other electronics"
                            .to_string(),
                    members: 8,
                    max_members: 20,
                    monthly_contribution: 300,
                    total_pooled: 28_800,
                    coverage_limit: 30_000,
                    category: "Electronics".to_string(),
                    created_date: date(2024, 2, 1),
                    active_claims: 0,
                    governance: Governance::PeerReview,
                    trust_threshold: 650,
                },
            ],
            claims: vec![Claim {
                id: 1,
                pool_id: 1,
                submitted_by: "Arjun Patel".to_string(),
                amount: 12_000,
                reason: "Smartphone screen damage due to accidental drop".to_string(),
                description: "My iPhone 14 screen got cracked when it fell from my pocket while \
                              getting out of an auto-rickshaw. Attaching repair quote from \
                              authorized service center."
                    .to_string(),
                status: ClaimStatus::Voting,
                submitted_date: date(2024, 6, 25),
                votes_for: 8,
                votes_against: 2,
                total_votes: 10,
                required_votes: 8,
                evidence: vec!["repair_quote.jpg".to_string(), "damage_photo.jpg".to_string()],
                category: "Accidental Damage".to_string(),
            }],
            transactions: vec![
                Transaction {
                    id: 1,
                    kind: TransactionKind::Contribution,
                    amount: 500,
                    description: "Monthly contribution to Tech Professionals Pool".to_string(),
                    date: date(2024, 6, 1),
                    pool_name: "Tech Professionals Mobile Insurance".to_string(),
                },
                Transaction {
                    id: 2,
                    kind: TransactionKind::Refund,
                    amount: 120,
                    description: "Unused funds refund from previous month".to_string(),
                    date: date(2024, 5, 31),
                    pool_name: "Tech Professionals Mobile Insurance".to_string(),
                },
            ],
        }
    }

    /// Account every successful login resolves to
    pub fn demo_member(&self) -> Option<&User> {
        self.users.first()
    }

    pub fn pool(&self, id: u32) -> Option<&Pool> {
        self.pools.iter().find(|p| p.id == id)
    }

    /// Pools whose name, category or description contains `term`
    pub fn search_pools(&self, term: &str) -> Vec<&Pool> {
        self.pools.iter().filter(|p| p.matches(term)).collect()
    }

    /// Pools the demo member has transactions with
    pub fn member_pools(&self) -> Vec<&Pool> {
        self.pools
            .iter()
            .filter(|p| self.transactions.iter().any(|t| t.pool_name == p.name))
            .collect()
    }

    /// Claims still collecting votes
    pub fn open_claims(&self) -> impl Iterator<Item = &Claim> {
        self.claims.iter().filter(|c| c.status == ClaimStatus::Voting)
    }

    /// Claims filed under `name`
    pub fn claims_by<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Claim> {
        self.claims.iter().filter(move |c| c.submitted_by == name)
    }

    /// Transactions, most recent first
    pub fn recent_transactions(&self) -> Vec<&Transaction> {
        let mut txs: Vec<&Transaction> = self.transactions.iter().collect();
        txs.sort_by(|a, b| b.date.cmp(&a.date));
        txs
    }
}

impl Default for AppData {
    fn default() -> Self {
        Self::seeded()
    }
}

/// The record a simulated signup fabricates
pub fn new_member() -> User {
    User {
        id: 3,
        name: "New User".to_string(),
        email: "new.user@email.com".to_string(),
        phone: None,
        trust_score: 650,
        verification_status: VerificationStatus::Pending,
        joined_date: None,
        total_pooled: 0,
        claims_submitted: 0,
        votes_participated: 0,
        avatar: DEFAULT_AVATAR.to_string(),
    }
}
