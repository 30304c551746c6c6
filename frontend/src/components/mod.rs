use yew::prelude::*;

use crate::error::FormErrors;

mod expense_actions;
mod expense_form;
mod expense_list;
mod expense_modal;
mod expense_summary;
mod layout;
mod login;
mod signup;

pub use expense_actions::ExpenseActions;
pub use expense_form::ExpenseForm;
pub use expense_list::ExpenseList;
pub use expense_modal::ExpenseModal;
pub use expense_summary::ExpenseSummary;
pub use layout::Layout;
pub use login::LoginPage;
pub use signup::SignupPage;

/// The messages for one input, rendered beneath it.
fn field_error(errors: &FormErrors, field: &str) -> Html {
    match errors.field(field) {
        Some(message) => html! { <p class="text-sm text-red-600">{ message }</p> },
        None => html! {},
    }
}
