use yew::prelude::*;

use crate::models::Expense;

#[derive(Properties, PartialEq)]
pub struct ExpenseActionsProps {
    pub expense: Expense,
    pub on_edit: Callback<Expense>,
    pub on_delete: Callback<Expense>,
}

/// Edit/delete buttons for one table row.
#[function_component(ExpenseActions)]
pub fn expense_actions(props: &ExpenseActionsProps) -> Html {
    let on_edit = {
        let expense = props.expense.clone();
        let on_edit = props.on_edit.clone();
        Callback::from(move |_: MouseEvent| on_edit.emit(expense.clone()))
    };
    let on_delete = {
        let expense = props.expense.clone();
        let on_delete = props.on_delete.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(expense.clone()))
    };

    html! {
        <div class="flex gap-2 justify-end">
            <button type="button" onclick={on_edit}
                class="px-3 py-1 rounded-lg text-[12px] font-semibold bg-secondary text-secondary-foreground">
                {"Edit"}
            </button>
            <button type="button" onclick={on_delete}
                class="px-3 py-1 rounded-lg text-[12px] font-semibold text-red-600 hover:bg-red-50">
                {"Delete"}
            </button>
        </div>
    }
}
