//! Expense tracker widget
//!
//! Income/expense transactions with category vocabularies, derived
//! analytics (totals, category breakdown, monthly trends), and JSON
//! import/export. Amounts are unsigned decimals; income vs. expense
//! semantics live in the transaction kind, never in the sign.

pub mod transfer;
pub mod views;

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::forms::{self, FieldErrors};
use crate::records::next_record_id;
use crate::store::{JsonStore, TRANSACTIONS_SLOT};
use views::{FilterSelection, KindFilter};

/// Transaction kind; carries the income/expense semantics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

impl std::fmt::Display for TxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TxKind::Income => write!(f, "income"),
            TxKind::Expense => write!(f, "expense"),
        }
    }
}

/// Expense category vocabulary
pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Food & Dining",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Bills & Utilities",
    "Healthcare",
    "Education",
    "Travel",
    "Other",
];

/// Income category vocabulary
pub const INCOME_CATEGORIES: &[&str] = &[
    "Salary",
    "Freelance",
    "Business",
    "Investments",
    "Gifts",
    "Other",
];

/// Category vocabulary for a transaction kind
pub fn categories(kind: TxKind) -> &'static [&'static str] {
    match kind {
        TxKind::Income => INCOME_CATEGORIES,
        TxKind::Expense => EXPENSE_CATEGORIES,
    }
}

/// A single transaction record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Validated field values ready to become (or patch) a transaction
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub kind: TxKind,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

/// Pending form state for adding or editing a transaction.
///
/// Holds raw string field values the way the form collects them;
/// `validate` turns them into a draft or a field->message error map.
#[derive(Debug, Clone, Default)]
pub struct TransactionForm {
    pub kind: Option<TxKind>,
    pub amount: String,
    pub category: String,
    pub description: String,
    pub date: String,
}

impl TransactionForm {
    pub fn validate(&self) -> Result<TransactionDraft, FieldErrors> {
        let mut errors = FieldErrors::new();

        let kind = match self.kind {
            Some(kind) => kind,
            None => {
                errors.insert("type", "Type is required".to_string());
                TxKind::Expense
            }
        };

        let amount = forms::parse_amount(&mut errors, "amount", &self.amount);

        let category = self.category.trim();
        if category.is_empty() {
            errors.insert("category", "Category is required".to_string());
        } else if !categories(kind).contains(&category) {
            errors.insert(
                "category",
                format!("Unknown {} category '{}'", kind, category),
            );
        }

        forms::require(&mut errors, "description", &self.description, "Description");

        let date = if self.date.trim().is_empty() {
            // Date defaults to today, matching the form's prefilled value.
            Some(Utc::now().date_naive())
        } else {
            match self.date.trim().parse::<NaiveDate>() {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.insert("date", "Date must be in YYYY-MM-DD form".to_string());
                    None
                }
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(TransactionDraft {
            kind,
            amount: amount.expect("validated"),
            category: category.to_string(),
            description: self.description.trim().to_string(),
            date: date.expect("validated"),
        })
    }
}

/// In-memory record store for transactions. Newest first; operations on
/// a missing id are idempotent no-ops.
#[derive(Debug, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn from_records(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn records(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Append a new transaction to the front
    pub fn add(&mut self, draft: TransactionDraft) -> &Transaction {
        let tx = Transaction {
            id: next_record_id(self.transactions.iter().map(|t| t.id.as_str())),
            kind: draft.kind,
            amount: draft.amount,
            category: draft.category,
            description: draft.description,
            date: draft.date,
            created_at: Utc::now(),
        };
        self.transactions.insert(0, tx);
        &self.transactions[0]
    }

    /// Replace the form-editable fields of an existing transaction,
    /// keeping its id and creation timestamp
    pub fn update(&mut self, id: &str, draft: TransactionDraft) -> bool {
        match self.transactions.iter_mut().find(|t| t.id == id) {
            Some(tx) => {
                tx.kind = draft.kind;
                tx.amount = draft.amount;
                tx.category = draft.category;
                tx.description = draft.description;
                tx.date = draft.date;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        self.transactions.len() != before
    }

    /// Append imported records verbatim, after the existing ones
    pub fn append_all(&mut self, imported: Vec<Transaction>) {
        self.transactions.extend(imported);
    }
}

pub(crate) fn load_ledger(store: &JsonStore) -> Ledger {
    Ledger::from_records(store.load(TRANSACTIONS_SLOT))
}

pub(crate) fn save_ledger(store: &JsonStore, ledger: &Ledger) -> Result<()> {
    store.save(TRANSACTIONS_SLOT, ledger.records())
}

fn format_money(amount: Decimal) -> String {
    format!("${:.2}", amount)
}

/// Validate the form and add a transaction
pub fn add_transaction(form: TransactionForm) -> Result<()> {
    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(errors) => {
            println!("Please fix the errors:");
            println!("{}", forms::format_errors(&errors));
            return Ok(());
        }
    };

    let store = JsonStore::open()?;
    let mut ledger = load_ledger(&store);
    let tx = ledger.add(draft);
    let line = format!(
        "Added {} {} ({}) on {}: {}",
        tx.kind,
        format_money(tx.amount),
        tx.category,
        tx.date,
        tx.description
    );
    save_ledger(&store, &ledger)?;
    println!("{}", line);
    Ok(())
}

/// Validate the form and patch an existing transaction
pub fn edit_transaction(id: &str, form: TransactionForm) -> Result<()> {
    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(errors) => {
            println!("Please fix the errors:");
            println!("{}", forms::format_errors(&errors));
            return Ok(());
        }
    };

    let store = JsonStore::open()?;
    let mut ledger = load_ledger(&store);
    if ledger.update(id, draft) {
        save_ledger(&store, &ledger)?;
        println!("Updated transaction {}", id);
    } else {
        println!("No transaction with id {}", id);
    }
    Ok(())
}

/// Delete a transaction
pub fn delete_transaction(id: &str) -> Result<()> {
    let store = JsonStore::open()?;
    let mut ledger = load_ledger(&store);
    if ledger.remove(id) {
        save_ledger(&store, &ledger)?;
        println!("Deleted transaction {}", id);
    } else {
        println!("No transaction with id {}", id);
    }
    Ok(())
}

/// List transactions under the given filter, with totals
pub fn list_transactions(kind: KindFilter, month: Option<String>) -> Result<()> {
    let store = JsonStore::open()?;
    let ledger = load_ledger(&store);
    let selection = FilterSelection { kind, month };

    let visible = views::filtered(ledger.records(), &selection);
    let totals = views::totals(&visible);

    println!(
        "Income {}  Expenses {}  Net {}  ({} transaction(s))",
        format_money(totals.income),
        format_money(totals.expenses),
        format_money(totals.net),
        totals.count
    );

    if visible.is_empty() {
        println!("No transactions found.");
        return Ok(());
    }

    for tx in visible {
        let sign = match tx.kind {
            TxKind::Income => '+',
            TxKind::Expense => '-',
        };
        println!(
            "  {}  {}{}  {}  {}  {}",
            tx.id,
            sign,
            format_money(tx.amount),
            tx.date,
            tx.category,
            tx.description
        );
    }
    Ok(())
}

/// Print the expense category breakdown for the current filter
pub fn show_breakdown(month: Option<String>) -> Result<()> {
    let store = JsonStore::open()?;
    let ledger = load_ledger(&store);
    let selection = FilterSelection { kind: KindFilter::All, month };
    let visible = views::filtered(ledger.records(), &selection);
    let breakdown = views::category_breakdown(&visible);

    if breakdown.is_empty() {
        println!("No expense data");
        return Ok(());
    }

    println!("Expense categories:");
    for entry in breakdown {
        println!(
            "  {:<18} {:>10}  {} transaction(s)  {:.1}%",
            entry.category,
            format_money(entry.amount),
            entry.count,
            entry.percentage
        );
    }
    Ok(())
}

/// Print income/expense/net per month, most recent six months
pub fn show_trends() -> Result<()> {
    let store = JsonStore::open()?;
    let ledger = load_ledger(&store);
    let trend = views::monthly_trend(ledger.records());

    if trend.is_empty() {
        println!("No trend data available");
        return Ok(());
    }

    println!("Monthly trends:");
    for month in trend {
        println!(
            "  {}  income {:>10}  expenses {:>10}  net {:>10}",
            month.month,
            format_money(month.income),
            format_money(month.expenses),
            format_money(month.net)
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    pub(crate) fn draft(kind: TxKind, amount: Decimal, category: &str, date: &str) -> TransactionDraft {
        TransactionDraft {
            kind,
            amount,
            category: category.to_string(),
            description: "test entry".to_string(),
            date: date.parse().unwrap(),
        }
    }

    #[test]
    fn test_add_prepends_and_keeps_amount_unsigned() {
        let mut ledger = Ledger::default();
        ledger.add(draft(TxKind::Expense, dec!(42.50), "Food & Dining", "2026-08-01"));
        ledger.add(draft(TxKind::Income, dec!(100), "Salary", "2026-08-02"));

        assert_eq!(ledger.records()[0].kind, TxKind::Income);
        assert!(ledger.records().iter().all(|t| t.amount >= Decimal::ZERO));
    }

    #[test]
    fn test_update_missing_is_noop() {
        let mut ledger = Ledger::default();
        ledger.add(draft(TxKind::Expense, dec!(5), "Shopping", "2026-08-01"));
        let before = ledger.records().to_vec();
        assert!(!ledger.update("missing", draft(TxKind::Income, dec!(1), "Salary", "2026-08-01")));
        assert_eq!(ledger.records(), &before[..]);
    }

    #[test]
    fn test_update_keeps_id_and_created_at() {
        let mut ledger = Ledger::default();
        ledger.add(draft(TxKind::Expense, dec!(5), "Shopping", "2026-08-01"));
        let original = ledger.records()[0].clone();

        assert!(ledger.update(&original.id, draft(TxKind::Income, dec!(9), "Gifts", "2026-08-03")));
        let updated = &ledger.records()[0];
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.amount, dec!(9));
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut ledger = Ledger::default();
        ledger.add(draft(TxKind::Expense, dec!(5), "Other", "2026-08-01"));
        assert!(!ledger.remove("missing"));
        assert_eq!(ledger.records().len(), 1);
    }

    #[test]
    fn test_form_validates_category_by_kind() {
        let form = TransactionForm {
            kind: Some(TxKind::Income),
            amount: "10".to_string(),
            category: "Food & Dining".to_string(),
            description: "lunch".to_string(),
            date: "2026-08-01".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.get("category").unwrap().contains("income"));
    }

    #[test]
    fn test_form_reports_each_invalid_field() {
        let form = TransactionForm {
            kind: Some(TxKind::Expense),
            amount: "-3".to_string(),
            category: String::new(),
            description: "  ".to_string(),
            date: "yesterday".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.contains_key("amount"));
        assert!(errors.contains_key("category"));
        assert!(errors.contains_key("description"));
        assert!(errors.contains_key("date"));
    }

    #[test]
    fn test_form_defaults_date_to_today() {
        let form = TransactionForm {
            kind: Some(TxKind::Expense),
            amount: "12".to_string(),
            category: "Travel".to_string(),
            description: "bus fare".to_string(),
            date: String::new(),
        };
        let draft = form.validate().unwrap();
        assert_eq!(draft.date, Utc::now().date_naive());
    }

    #[test]
    fn test_transaction_json_field_names() {
        let mut ledger = Ledger::default();
        ledger.add(draft(TxKind::Expense, dec!(1.25), "Other", "2026-08-01"));
        let json = serde_json::to_value(&ledger.records()[0]).unwrap();
        assert_eq!(json["type"], "expense");
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["date"], "2026-08-01");
    }
}
