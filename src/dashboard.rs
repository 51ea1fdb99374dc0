//! Dashboard figures and activity feed

use chrono::NaiveDate;

use crate::format::{format_currency, relative_day_label};
use crate::model::{Rupees, TransactionKind, User};
use crate::seed::AppData;

/// Shown when the member has no pooled total on record
const FALLBACK_TOTAL_POOLED: Rupees = 15_000;

/// Figures on the dashboard stat cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_pooled: Rupees,
    pub active_pools: usize,
    pub active_claims: usize,
    pub monthly_contribution: Rupees,
}

impl DashboardStats {
    pub fn for_member(user: Option<&User>, data: &AppData) -> Self {
        let total_pooled = user
            .map(|u| u.total_pooled)
            .filter(|total| *total > 0)
            .unwrap_or(FALLBACK_TOTAL_POOLED);

        Self {
            total_pooled,
            active_pools: data.pools.len(),
            active_claims: data.open_claims().count(),
            monthly_contribution: data
                .pools
                .first()
                .map(|p| p.monthly_contribution)
                .unwrap_or_default(),
        }
    }

    /// `(label, value)` pairs in card order
    pub fn cards(&self) -> [(&'static str, String); 4] {
        [
            ("Total Pooled", format_currency(self.total_pooled)),
            ("Active Pools", self.active_pools.to_string()),
            ("Active Claims", self.active_claims.to_string()),
            ("Monthly Contribution", format_currency(self.monthly_contribution)),
        ]
    }
}

/// One line of the activity feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityItem {
    pub title: String,
    pub detail: String,
    pub amount: String,
    pub when: String,
    pub credit: bool,
}

/// Transactions as feed lines, newest first, timed relative to `today`
pub fn activity_feed(data: &AppData, today: NaiveDate) -> Vec<ActivityItem> {
    data.recent_transactions()
        .into_iter()
        .map(|tx| {
            let credit = !tx.kind.is_debit();
            let sign = if credit { "+" } else { "-" };
            ActivityItem {
                title: match tx.kind {
                    TransactionKind::Contribution => format!("Contributed to {}", tx.pool_name),
                    TransactionKind::Refund => format!("Refund from {}", tx.pool_name),
                    TransactionKind::Payout => format!("Payout from {}", tx.pool_name),
                },
                detail: tx.description.clone(),
                amount: format!("{}{}", sign, format_currency(tx.amount)),
                when: relative_day_label(tx.date, today),
                credit,
            }
        })
        .collect()
}
