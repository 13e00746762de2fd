//! The income ledger: create, list, update and delete income entries.

mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod entry;
mod list_endpoint;

pub use create_endpoint::{IncomeForm, create_income, create_income_endpoint};
pub use delete_endpoint::{delete_income, delete_income_endpoint};
pub use edit_endpoint::{EditIncomeForm, IncomeUpdate, edit_income_endpoint, update_income};
pub use entry::{IncomeEntry, IncomeState, create_income_table, list_income};
pub use list_endpoint::list_income_endpoint;
