//! Derived views over the transaction collection
//!
//! Pure, stateless recomputation from a snapshot plus the current filter
//! selection. Collections are user-scale, so nothing is cached.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::{Transaction, TxKind};

/// Kind half of the filter selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum KindFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl KindFilter {
    fn matches(self, tx: &Transaction) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Income => tx.kind == TxKind::Income,
            KindFilter::Expense => tx.kind == TxKind::Expense,
        }
    }
}

/// Current filter selection: kind plus an optional "YYYY-MM" month
#[derive(Debug, Clone, Default)]
pub struct FilterSelection {
    pub kind: KindFilter,
    pub month: Option<String>,
}

impl FilterSelection {
    pub fn matches(&self, tx: &Transaction) -> bool {
        let matches_month = match &self.month {
            Some(month) => tx.date.format("%Y-%m").to_string() == *month,
            None => true,
        };
        self.kind.matches(tx) && matches_month
    }
}

/// Totals over a filtered snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Totals {
    pub income: Decimal,
    pub expenses: Decimal,
    pub net: Decimal,
    pub count: usize,
}

/// One row of the expense category breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub category: String,
    pub amount: Decimal,
    pub count: usize,
    pub percentage: f64,
}

/// One row of the monthly trend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySummary {
    pub month: String,
    pub income: Decimal,
    pub expenses: Decimal,
    pub net: Decimal,
}

/// Records passing the current selection
pub fn filtered<'a>(records: &'a [Transaction], selection: &FilterSelection) -> Vec<&'a Transaction> {
    records.iter().filter(|tx| selection.matches(tx)).collect()
}

/// Income, expense, and net totals over the given records
pub fn totals(records: &[&Transaction]) -> Totals {
    let income: Decimal = records
        .iter()
        .filter(|t| t.kind == TxKind::Income)
        .map(|t| t.amount)
        .sum();
    let expenses: Decimal = records
        .iter()
        .filter(|t| t.kind == TxKind::Expense)
        .map(|t| t.amount)
        .sum();
    Totals {
        income,
        expenses,
        net: income - expenses,
        count: records.len(),
    }
}

/// Expense records grouped by category, each with its share of total
/// expenses (0 when the total is 0), sorted descending by amount
pub fn category_breakdown(records: &[&Transaction]) -> Vec<CategorySummary> {
    let mut groups: BTreeMap<&str, (Decimal, usize)> = BTreeMap::new();
    for tx in records.iter().filter(|t| t.kind == TxKind::Expense) {
        let entry = groups.entry(tx.category.as_str()).or_insert((Decimal::ZERO, 0));
        entry.0 += tx.amount;
        entry.1 += 1;
    }

    let total: Decimal = groups.values().map(|(amount, _)| *amount).sum();

    let mut breakdown: Vec<CategorySummary> = groups
        .into_iter()
        .map(|(category, (amount, count))| CategorySummary {
            category: category.to_string(),
            amount,
            count,
            percentage: if total > Decimal::ZERO {
                (amount / total).to_f64().unwrap_or(0.0) * 100.0
            } else {
                0.0
            },
        })
        .collect();

    breakdown.sort_by(|a, b| b.amount.cmp(&a.amount));
    breakdown
}

/// All records grouped by year-month, chronological, truncated to the
/// most recent six months. Runs over the unfiltered collection.
pub fn monthly_trend(records: &[Transaction]) -> Vec<MonthlySummary> {
    let mut groups: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
    for tx in records {
        let month = tx.date.format("%Y-%m").to_string();
        let entry = groups.entry(month).or_insert((Decimal::ZERO, Decimal::ZERO));
        match tx.kind {
            TxKind::Income => entry.0 += tx.amount,
            TxKind::Expense => entry.1 += tx.amount,
        }
    }

    let mut trend: Vec<MonthlySummary> = groups
        .into_iter()
        .map(|(month, (income, expenses))| MonthlySummary {
            month,
            income,
            expenses,
            net: income - expenses,
        })
        .collect();

    // BTreeMap iteration already yields months in chronological order.
    let keep_from = trend.len().saturating_sub(6);
    trend.split_off(keep_from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn tx(kind: TxKind, amount: Decimal, category: &str, date: &str) -> Transaction {
        Transaction {
            id: format!("{}-{}", date, category),
            kind,
            amount,
            category: category.to_string(),
            description: "entry".to_string(),
            date: date.parse().unwrap(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_expense_filter_totals() {
        let records = vec![tx(TxKind::Expense, dec!(42.50), "Food & Dining", "2026-08-10")];
        let selection = FilterSelection { kind: KindFilter::Expense, month: None };

        let visible = filtered(&records, &selection);
        let totals = totals(&visible);
        assert_eq!(totals.expenses, dec!(42.50));
        assert_eq!(totals.net, dec!(-42.50));
        assert_eq!(totals.income, Decimal::ZERO);
    }

    #[test]
    fn test_month_filter() {
        let records = vec![
            tx(TxKind::Expense, dec!(10), "Travel", "2026-07-03"),
            tx(TxKind::Expense, dec!(20), "Travel", "2026-08-03"),
        ];
        let selection = FilterSelection {
            kind: KindFilter::All,
            month: Some("2026-08".to_string()),
        };
        let visible = filtered(&records, &selection);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].amount, dec!(20));
    }

    #[test]
    fn test_breakdown_sorted_and_percentages() {
        let records = vec![
            tx(TxKind::Expense, dec!(75), "Food & Dining", "2026-08-01"),
            tx(TxKind::Expense, dec!(25), "Transportation", "2026-08-02"),
            tx(TxKind::Income, dec!(500), "Salary", "2026-08-03"),
        ];
        let all: Vec<&Transaction> = records.iter().collect();
        let breakdown = category_breakdown(&all);

        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].category, "Food & Dining");
        assert!((breakdown[0].percentage - 75.0).abs() < 1e-9);
        assert!((breakdown[1].percentage - 25.0).abs() < 1e-9);

        let sum: f64 = breakdown.iter().map(|c| c.percentage).sum();
        assert!(sum <= 100.0 + 1e-9);
    }

    #[test]
    fn test_breakdown_zero_total_gives_zero_percentages() {
        let records = vec![tx(TxKind::Expense, dec!(0), "Other", "2026-08-01")];
        let all: Vec<&Transaction> = records.iter().collect();
        let breakdown = category_breakdown(&all);
        assert_eq!(breakdown[0].percentage, 0.0);
    }

    #[test]
    fn test_monthly_trend_chronological_last_six() {
        let mut records = Vec::new();
        for month in 1..=8 {
            records.push(tx(
                TxKind::Expense,
                dec!(10),
                "Other",
                &format!("2026-{:02}-15", month),
            ));
        }
        records.push(tx(TxKind::Income, dec!(100), "Salary", "2026-08-20"));

        let trend = monthly_trend(&records);
        assert_eq!(trend.len(), 6);
        assert_eq!(trend.first().unwrap().month, "2026-03");
        assert_eq!(trend.last().unwrap().month, "2026-08");
        assert_eq!(trend.last().unwrap().net, dec!(90));
    }
}
