//! Integration tests for the persisted widget collections:
//! - Task manager: add/toggle/filter flows surviving a store round trip
//! - Expense tracker: form validation into the ledger, stored field names
//! - Store behavior shared by both: missing and corrupt slots load empty

use folio::expenses::{Ledger, Transaction, TransactionForm, TxKind};
use folio::store::{JsonStore, TASKS_SLOT, TRANSACTIONS_SLOT};
use folio::tasks::{Priority, Task, TaskBook, TaskFilter};

fn temp_store() -> (tempfile::TempDir, JsonStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::with_dir(dir.path().to_path_buf()).unwrap();
    (dir, store)
}

// =====================================================================
// TASK MANAGER
// =====================================================================

#[test]
fn test_task_flow_survives_store_round_trip() {
    let (_dir, store) = temp_store();

    let mut book = TaskBook::default();
    book.add("Write blog post");
    book.add("Review pull request");
    let done_id = book.records()[1].id.clone();
    book.toggle(&done_id);
    book.set_priority(&book.records()[0].id.clone(), Priority::High);

    store.save(TASKS_SLOT, book.records()).unwrap();

    let reloaded = TaskBook::from_records(store.load(TASKS_SLOT));
    assert_eq!(reloaded.records().len(), 2);
    assert_eq!(reloaded.records()[0].text, "Review pull request");
    assert_eq!(reloaded.records()[0].priority, Priority::High);
    assert!(reloaded.records()[1].completed);

    assert_eq!(reloaded.filtered(TaskFilter::Active).len(), 1);
    assert_eq!(reloaded.filtered(TaskFilter::Completed).len(), 1);
}

#[test]
fn test_task_json_uses_camel_case_fields() {
    let mut book = TaskBook::default();
    book.add("Check field names");

    let json = serde_json::to_value(book.records()).unwrap();
    let first = &json[0];
    assert!(first.get("createdAt").is_some());
    assert!(first.get("created_at").is_none());
    assert_eq!(first["priority"], "medium");
    assert_eq!(first["completed"], false);
}

#[test]
fn test_clear_completed_then_persist() {
    let (_dir, store) = temp_store();

    let mut book = TaskBook::default();
    book.add("stays");
    book.add("goes");
    let id = book.records()[0].id.clone();
    book.toggle(&id);
    assert_eq!(book.clear_completed(), 1);

    store.save(TASKS_SLOT, book.records()).unwrap();
    let reloaded: Vec<Task> = store.load(TASKS_SLOT);
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded[0].text, "stays");
}

// =====================================================================
// EXPENSE TRACKER
// =====================================================================

fn filled_form(kind: TxKind, amount: &str, category: &str) -> TransactionForm {
    TransactionForm {
        kind: Some(kind),
        amount: amount.to_string(),
        category: category.to_string(),
        description: "integration entry".to_string(),
        date: "2026-08-15".to_string(),
    }
}

#[test]
fn test_validated_form_lands_in_ledger_and_store() {
    let (_dir, store) = temp_store();

    let mut ledger = Ledger::default();
    let draft = filled_form(TxKind::Expense, "42.50", "Food & Dining")
        .validate()
        .unwrap();
    ledger.add(draft);
    let draft = filled_form(TxKind::Income, "1200", "Salary").validate().unwrap();
    ledger.add(draft);

    store.save(TRANSACTIONS_SLOT, ledger.records()).unwrap();

    let reloaded = Ledger::from_records(store.load(TRANSACTIONS_SLOT));
    assert_eq!(reloaded.records().len(), 2);
    // Newest first: the income entry was added last.
    assert_eq!(reloaded.records()[0].kind, TxKind::Income);
    assert_eq!(reloaded.records()[1].category, "Food & Dining");
}

#[test]
fn test_transaction_json_matches_stored_shape() {
    let mut ledger = Ledger::default();
    let draft = filled_form(TxKind::Expense, "9.99", "Entertainment")
        .validate()
        .unwrap();
    ledger.add(draft);

    let json = serde_json::to_value(ledger.records()).unwrap();
    let first = &json[0];
    assert_eq!(first["type"], "expense");
    assert_eq!(first["category"], "Entertainment");
    assert!(first.get("createdAt").is_some());
    assert!(first.get("kind").is_none());
}

#[test]
fn test_form_rejects_category_from_wrong_kind() {
    // "Salary" belongs to the income vocabulary.
    let errors = filled_form(TxKind::Expense, "10", "Salary")
        .validate()
        .unwrap_err();
    assert!(errors.get("category").unwrap().contains("Salary"));
}

#[test]
fn test_form_rejects_negative_and_garbage_amounts() {
    let errors = filled_form(TxKind::Expense, "-5", "Other").validate().unwrap_err();
    assert!(errors.contains_key("amount"));

    let errors = filled_form(TxKind::Expense, "ten", "Other").validate().unwrap_err();
    assert!(errors.contains_key("amount"));
}

#[test]
fn test_update_keeps_id_and_created_at() {
    let mut ledger = Ledger::default();
    let draft = filled_form(TxKind::Expense, "5.00", "Other").validate().unwrap();
    let tx = ledger.add(draft);
    let id = tx.id.clone();
    let created_at = tx.created_at;

    let patch = filled_form(TxKind::Expense, "7.50", "Travel").validate().unwrap();
    assert!(ledger.update(&id, patch));

    let updated: &Transaction = &ledger.records()[0];
    assert_eq!(updated.id, id);
    assert_eq!(updated.created_at, created_at);
    assert_eq!(updated.category, "Travel");
}

// =====================================================================
// STORE EDGE CASES
// =====================================================================

#[test]
fn test_missing_slots_load_as_empty_collections() {
    let (_dir, store) = temp_store();
    let tasks: Vec<Task> = store.load(TASKS_SLOT);
    let transactions: Vec<Transaction> = store.load(TRANSACTIONS_SLOT);
    assert!(tasks.is_empty());
    assert!(transactions.is_empty());
}

#[test]
fn test_corrupt_slot_loads_empty_without_error() {
    let (dir, store) = temp_store();
    std::fs::write(dir.path().join("tasks.json"), "not json at all").unwrap();
    let tasks: Vec<Task> = store.load(TASKS_SLOT);
    assert!(tasks.is_empty());
}
