//! Domain records
//!
//! Flat, seeded records for members, pools, claims and transactions.
//! Field names serialize in camelCase so cached blobs keep the keys the
//! browser build has always written.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Rupee amounts are whole numbers throughout the demo.
pub type Rupees = i64;

/// Lowest trust score on the gauge
pub const TRUST_SCORE_MIN: u16 = 300;

/// Highest trust score on the gauge
pub const TRUST_SCORE_MAX: u16 = 900;

/// A pool member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub trust_score: u16,
    pub verification_status: VerificationStatus,
    #[serde(default)]
    pub joined_date: Option<NaiveDate>,
    #[serde(default)]
    pub total_pooled: Rupees,
    #[serde(default)]
    pub claims_submitted: u32,
    #[serde(default)]
    pub votes_participated: u32,
    pub avatar: String,
}

impl User {
    /// First word of the display name, used in the signed-in navbar.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    pub fn is_verified(&self) -> bool {
        self.verification_status == VerificationStatus::Verified
    }
}

/// KYC verification state of a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Verified,
    Pending,
    Rejected,
}

impl VerificationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Verified => "Verified",
            Self::Pending => "Pending",
            Self::Rejected => "Rejected",
        }
    }
}

/// An insurance pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub members: u32,
    pub max_members: u32,
    pub monthly_contribution: Rupees,
    pub total_pooled: Rupees,
    pub coverage_limit: Rupees,
    pub category: String,
    pub created_date: NaiveDate,
    pub active_claims: u32,
    pub governance: Governance,
    pub trust_threshold: u16,
}

/// `part / whole` as a percentage clamped to 100, computed in `u64` so
/// large counts from stored blobs cannot overflow
fn percent(part: u32, whole: u32) -> u32 {
    (u64::from(part) * 100 / u64::from(whole)).min(100) as u32
}

impl Pool {
    /// Membership as a percentage of capacity, clamped to 0..=100
    pub fn fill_percent(&self) -> u32 {
        if self.max_members == 0 {
            return 100;
        }
        percent(self.members, self.max_members)
    }

    pub fn is_full(&self) -> bool {
        self.members >= self.max_members
    }

    pub fn open_slots(&self) -> u32 {
        self.max_members.saturating_sub(self.members)
    }

    /// Whether a member with `trust_score` meets the pool's threshold.
    /// Display only; nothing enforces it.
    pub fn admits(&self, trust_score: u16) -> bool {
        trust_score >= self.trust_threshold
    }

    /// Case-insensitive match against name, category and description
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        [&self.name, &self.category, &self.description]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }
}

/// Labelled claim-approval policy of a pool (unenforced)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Governance {
    MajorityVote,
    PeerReview,
    ExternalArbitration,
}

impl Governance {
    pub const ALL: [Governance; 3] = [
        Governance::MajorityVote,
        Governance::PeerReview,
        Governance::ExternalArbitration,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::MajorityVote => "Majority Vote",
            Self::PeerReview => "Peer Review",
            Self::ExternalArbitration => "External Arbitration",
        }
    }

    /// Form value, matching the serialized tag
    pub fn value(&self) -> &'static str {
        match self {
            Self::MajorityVote => "majority_vote",
            Self::PeerReview => "peer_review",
            Self::ExternalArbitration => "external_arbitration",
        }
    }
}

/// A reimbursement request against a pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub id: u32,
    /// Owning pool, not validated against the pool list
    pub pool_id: u32,
    pub submitted_by: String,
    pub amount: Rupees,
    pub reason: String,
    pub description: String,
    pub status: ClaimStatus,
    pub submitted_date: NaiveDate,
    pub votes_for: u32,
    pub votes_against: u32,
    pub total_votes: u32,
    pub required_votes: u32,
    pub evidence: Vec<String>,
    pub category: String,
}

impl Claim {
    /// Share of cast votes in favour, 0..=100
    pub fn approval_percent(&self) -> u32 {
        if self.total_votes == 0 {
            return 0;
        }
        percent(self.votes_for, self.total_votes)
    }

    pub fn has_quorum(&self) -> bool {
        self.votes_for >= self.required_votes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    Voting,
    Approved,
    Rejected,
    Paid,
}

impl ClaimStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Voting => "Voting",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Paid => "Paid",
        }
    }
}

/// A ledger line shown in the activity feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: Rupees,
    pub description: String,
    pub date: NaiveDate,
    /// Pool name as displayed, not a reference
    pub pool_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Contribution,
    Refund,
    Payout,
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Contribution => "Contribution",
            Self::Refund => "Refund",
            Self::Payout => "Payout",
        }
    }

    /// Money leaving the member's wallet
    pub fn is_debit(&self) -> bool {
        matches!(self, Self::Contribution)
    }
}

/// A member's vote on a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vote {
    Approve,
    Reject,
}

impl Vote {
    /// Past-tense verb used in the confirmation message
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Approve => "approved",
            Self::Reject => "rejected",
        }
    }
}

/// Tally shown after a vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteTally {
    pub votes_for: u32,
    pub progress_percent: u32,
}

impl VoteTally {
    pub fn for_label(&self) -> String {
        format!("{} For", self.votes_for)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::AppData;

    #[test]
    fn test_user_serializes_camel_case() {
        let data = AppData::seeded();
        let json = serde_json::to_value(&data.users[0]).unwrap();

        assert_eq!(json["trustScore"], 785);
        assert_eq!(json["verificationStatus"], "verified");
        assert_eq!(json["joinedDate"], "2024-03-15");
    }

    #[test]
    fn test_signup_shaped_user_deserializes() {
        // Blob cached by a fresh signup carries no phone or totals
        let json = r#"{
            "id": 3,
            "name": "New User",
            "email": "new.user@email.com",
            "trustScore": 650,
            "verificationStatus": "pending",
            "avatar": "a.png"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.phone, None);
        assert_eq!(user.total_pooled, 0);
        assert!(!user.is_verified());
        assert_eq!(user.first_name(), "New");
    }

    #[test]
    fn test_pool_capacity_and_threshold() {
        let data = AppData::seeded();
        let tech = &data.pools[0];

        assert_eq!(tech.fill_percent(), 80);
        assert_eq!(tech.open_slots(), 3);
        assert!(!tech.is_full());
        assert!(tech.admits(785));
        assert!(!tech.admits(650));
    }

    #[test]
    fn test_pool_matches_is_case_insensitive() {
        let data = AppData::seeded();
        let hostel = &data.pools[1];

        assert!(hostel.matches("HOSTEL"));
        assert!(hostel.matches("electronics"));
        assert!(hostel.matches("  "));
        assert!(!hostel.matches("bicycle"));
    }

    #[test]
    fn test_claim_approval() {
        let data = AppData::seeded();
        let claim = &data.claims[0];

        assert_eq!(claim.approval_percent(), 80);
        assert!(claim.has_quorum());
    }

    #[test]
    fn test_percentages_with_huge_counts() {
        let data = AppData::seeded();

        let mut pool = data.pools[0].clone();
        pool.members = u32::MAX;
        pool.max_members = u32::MAX;
        assert_eq!(pool.fill_percent(), 100);
        pool.members = u32::MAX / 2;
        assert_eq!(pool.fill_percent(), 49);

        let mut claim = data.claims[0].clone();
        claim.votes_for = u32::MAX - 1;
        claim.total_votes = u32::MAX;
        assert_eq!(claim.approval_percent(), 99);
    }

    #[test]
    fn test_transaction_kind_tag() {
        let data = AppData::seeded();
        let json = serde_json::to_value(&data.transactions[1]).unwrap();
        assert_eq!(json["type"], "refund");
        assert_eq!(json["poolName"], "Tech Professionals Mobile Insurance");
    }
}
