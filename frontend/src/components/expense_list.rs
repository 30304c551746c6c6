use std::collections::BTreeSet;

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::{
    api::{category_label, delete_expense, get_categories, get_expenses, ApiClient},
    auth,
    components::{ExpenseActions, ExpenseModal, ExpenseSummary},
    error::ApiError,
    filter::{month_options, year_options, MonthFilter},
    list::{confirm_delete, BrowserConfirm, ListAction, ListState, RequestSequence},
    modal::{ModalAction, ModalState},
    models::{Category, Expense},
    summary::{format_currency, Totals},
};

/// Years either side of the current one offered in the year selector.
const YEAR_SPAN: i32 = 5;

fn categories_unavailable(error: &ApiError) -> String {
    format!("Could not load categories: {error}")
}

#[function_component(ExpenseList)]
pub fn expense_list() -> Html {
    let client = use_context::<ApiClient>().unwrap_or_default();
    let filter = use_state(MonthFilter::current);
    let reload = use_state(|| 0u32);
    let list = use_reducer(ListState::default);
    let modal = use_reducer(ModalState::default);
    let categories = use_state(Vec::<Category>::new);
    let sequence = use_mut_ref(RequestSequence::default);
    let action_error = use_state(|| None::<String>);
    let month_select = use_node_ref();
    let year_select = use_node_ref();

    {
        let categories = categories.clone();
        let client = client.clone();
        let action_error = action_error.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(token) = auth::get_token() {
                    spawn_local(async move {
                        match get_categories(&client, &token).await {
                            Ok(loaded) => categories.set(loaded),
                            Err(e) => {
                                log::error!("could not load categories: {e}");
                                action_error.set(Some(categories_unavailable(&e)));
                            }
                        }
                    });
                }
                || ()
            },
            (),
        );
    }

    // `selected` on the options is ignored once the user has picked one by hand
    {
        let month_select = month_select.clone();
        let year_select = year_select.clone();
        use_effect_with_deps(
            move |filter: &MonthFilter| {
                if let Some(select) = month_select.cast::<HtmlSelectElement>() {
                    select.set_value(&filter.month().to_string());
                }
                if let Some(select) = year_select.cast::<HtmlSelectElement>() {
                    select.set_value(&filter.year().to_string());
                }
                || ()
            },
            *filter,
        );
    }

    // fetch the selected month whenever it changes or a mutation asks for a refresh
    {
        let list = list.clone();
        let client = client.clone();
        let sequence = sequence.clone();
        use_effect_with_deps(
            move |deps: &(MonthFilter, u32)| {
                let filter = deps.0;
                let ticket = sequence.borrow_mut().next();
                list.dispatch(ListAction::Started(ticket));

                match auth::get_token() {
                    None => list.dispatch(ListAction::Loaded {
                        ticket,
                        expenses: Vec::new(),
                    }),
                    Some(token) => spawn_local(async move {
                        match get_expenses(&client, filter.month(), filter.year(), &token).await {
                            Ok(expenses) => list.dispatch(ListAction::Loaded { ticket, expenses }),
                            Err(e) => {
                                log::error!("could not load expenses: {e}");
                                list.dispatch(ListAction::Failed {
                                    ticket,
                                    message: e.to_string(),
                                });
                            }
                        }
                    }),
                }
                || ()
            },
            (*filter, *reload),
        );
    }

    let refresh = {
        let reload = reload.clone();
        Callback::from(move |_: ()| reload.set(reload.wrapping_add(1)))
    };

    let on_add = {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| modal.dispatch(ModalAction::OpenForAdd))
    };

    let on_edit = {
        let modal = modal.clone();
        Callback::from(move |expense: Expense| modal.dispatch(ModalAction::OpenForEdit(expense)))
    };

    let on_delete = {
        let client = client.clone();
        let refresh = refresh.clone();
        let action_error = action_error.clone();
        Callback::from(move |expense: Expense| {
            let Some(id) = confirm_delete(&BrowserConfirm, &expense) else {
                return;
            };
            let Some(token) = auth::get_token() else {
                action_error.set(Some(ApiError::NotAuthenticated.to_string()));
                return;
            };

            action_error.set(None);
            let client = client.clone();
            let refresh = refresh.clone();
            let action_error = action_error.clone();
            spawn_local(async move {
                match delete_expense(&client, id, &token).await {
                    Ok(()) => refresh.emit(()),
                    Err(e) => {
                        log::error!("could not delete expense {id}: {e}");
                        action_error.set(Some(e.to_string()));
                    }
                }
            });
        })
    };

    let on_month = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(month) = select.value().parse::<u32>() {
                filter.set(filter.with_month(month));
            }
        })
    };

    let on_year = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(year) = select.value().parse::<i32>() {
                filter.set(filter.with_year(year));
            }
        })
    };

    let on_previous = {
        let filter = filter.clone();
        Callback::from(move |_: MouseEvent| filter.set(filter.previous()))
    };

    let on_next = {
        let filter = filter.clone();
        Callback::from(move |_: MouseEvent| filter.set(filter.next()))
    };

    let totals = Totals::from_expenses(&list.expenses);
    // a year reached with the arrows stays selectable
    let years: BTreeSet<i32> = year_options(MonthFilter::current().year(), YEAR_SPAN)
        .into_iter()
        .chain(std::iter::once(filter.year()))
        .collect();
    let select_class = "w-[150px] bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[13px] text-[#173E63] border-none";
    let error_message = list.error.clone().or_else(|| (*action_error).clone());

    html! {
        <div class="p-6 max-w-7xl mx-auto space-y-6">
            <div class="flex flex-wrap items-center justify-between gap-3 pb-4 border-b border-border">
                <h1 class="text-2xl font-bold text-foreground">
                    { format!("{} {}", filter.month_name(), filter.year()) }
                </h1>
                <div class="flex flex-wrap items-center gap-3">
                    <button type="button" onclick={on_previous} class="px-3 py-2 rounded-xl bg-[#B2CBDE] text-[#173E63] text-sm font-bold">{"‹"}</button>
                    <select ref={month_select} class={select_class} onchange={on_month}>
                        { for month_options().map(|(number, name)| html! {
                            <option value={number.to_string()} selected={number == filter.month()}>{ name }</option>
                        }) }
                    </select>
                    <select ref={year_select} class={select_class} onchange={on_year}>
                        { for years.iter().map(|year| html! {
                            <option value={year.to_string()} selected={*year == filter.year()}>{ year.to_string() }</option>
                        }) }
                    </select>
                    <button type="button" onclick={on_next} class="px-3 py-2 rounded-xl bg-[#B2CBDE] text-[#173E63] text-sm font-bold">{"›"}</button>
                    <button type="button" onclick={on_add} class="flex items-center gap-2 bg-primary text-primary-foreground px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all">
                        {"Add Expense"}
                    </button>
                </div>
            </div>

            <ExpenseSummary totals={totals} />

            if let Some(message) = error_message {
                <p class="text-sm text-red-500">{ message }</p>
            }

            <div class="bg-card rounded-2xl shadow-md border border-border overflow-hidden">
                <div class="overflow-x-auto">
                    <table class="w-full text-left border-collapse">
                        <thead>
                            <tr class="bg-muted text-muted-foreground text-[10px] uppercase tracking-widest">
                                <th class="px-8 py-4 font-bold">{"Date"}</th>
                                <th class="px-8 py-4 font-bold">{"Name"}</th>
                                <th class="px-8 py-4 font-bold">{"Category"}</th>
                                <th class="px-8 py-4 font-bold">{"Method"}</th>
                                <th class="px-8 py-4 font-bold text-right">{"Amount"}</th>
                                <th class="px-8 py-4 font-bold text-right">{"Action"}</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            { if list.loading {
                                html! { <tr><td colspan="6" class="px-8 py-6 text-center text-muted-foreground">{"Loading..."}</td></tr> }
                            } else if list.expenses.is_empty() {
                                html! { <tr><td colspan="6" class="px-8 py-6 text-center text-muted-foreground">{"No expenses for this month."}</td></tr> }
                            } else {
                                html! {
                                    <>
                                        { for list.expenses.iter().map(|expense| html! {
                                            <tr key={expense.id} class="text-sm hover:bg-muted/40 transition-colors">
                                                <td class="px-8 py-4 text-muted-foreground">{ expense.date.format("%Y-%m-%d").to_string() }</td>
                                                <td class="px-8 py-4 text-foreground">{ expense.name.clone() }</td>
                                                <td class="px-8 py-4">
                                                    <span class="bg-secondary text-secondary-foreground px-3 py-1 rounded-full text-[10px] font-bold">
                                                        { category_label(&categories, expense.category_id, expense.category.as_deref()) }
                                                    </span>
                                                </td>
                                                <td class="px-8 py-4 text-muted-foreground">{ expense.method.label() }</td>
                                                <td class="px-8 py-4 text-right font-semibold text-foreground">{ format_currency(expense.amount) }</td>
                                                <td class="px-8 py-4">
                                                    <ExpenseActions expense={expense.clone()} on_edit={on_edit.clone()} on_delete={on_delete.clone()} />
                                                </td>
                                            </tr>
                                        }) }
                                    </>
                                }
                            }}
                        </tbody>
                    </table>
                </div>
            </div>

            <ExpenseModal state={modal} categories={(*categories).clone()} on_saved={refresh} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_failure_is_explained() {
        let message = categories_unavailable(&ApiError::Network("connection refused".into()));

        assert_eq!(message, "Could not load categories: network error: connection refused");
    }
}
