//! The expense ledger: create, list, update and delete expense entries.

mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod entry;
mod list_endpoint;

pub use create_endpoint::{ExpenseForm, create_expense, create_expense_endpoint};
pub use delete_endpoint::{delete_expense, delete_expense_endpoint};
pub use edit_endpoint::{EditExpenseForm, ExpenseUpdate, edit_expense_endpoint, update_expense};
pub use entry::{
    DEFAULT_EXPENSE_TYPE, ExpenseEntry, ExpenseState, create_expense_table, list_expenses,
};
pub use list_endpoint::list_expenses_endpoint;
