use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::{
    components::field_error,
    error::{FormErrors, FORM_FIELDS},
    filter::today,
    form::ExpenseDraft,
    models::{Category, Expense, PaymentMethod},
};

#[derive(Properties, PartialEq)]
pub struct ExpenseFormProps {
    /// The expense being edited; absent when adding.
    #[prop_or_default]
    pub initial: Option<Expense>,
    pub categories: Vec<Category>,
    pub errors: FormErrors,
    pub saving: bool,
    pub on_submit: Callback<ExpenseDraft>,
    pub on_cancel: Callback<()>,
}

fn on_input(draft: &UseStateHandle<ExpenseDraft>, apply: fn(&mut ExpenseDraft, String)) -> Callback<InputEvent> {
    let draft = draft.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*draft).clone();
        apply(&mut next, input.value());
        draft.set(next);
    })
}

fn on_select(draft: &UseStateHandle<ExpenseDraft>, apply: fn(&mut ExpenseDraft, String)) -> Callback<Event> {
    let draft = draft.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        let mut next = (*draft).clone();
        apply(&mut next, select.value());
        draft.set(next);
    })
}

/// Controlled inputs for one expense. The draft is seeded once, on mount.
#[function_component(ExpenseForm)]
pub fn expense_form(props: &ExpenseFormProps) -> Html {
    let draft = {
        let initial = props.initial.clone();
        use_state(move || ExpenseDraft::for_initial(initial.as_ref(), today()))
    };

    let on_submit = {
        let draft = draft.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit((*draft).clone());
        })
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let errors = &props.errors;
    let banner = errors.banner(&FORM_FIELDS);

    let input_class = "w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[13px] text-[#173E63] border-none";

    html! {
        <form onsubmit={on_submit} class="space-y-4">
            if !banner.is_empty() {
                <div class="mb-4 p-2 bg-red-100 text-red-700 rounded space-y-1">
                    { for banner.iter().map(|message| html! { <div>{ message.clone() }</div> }) }
                </div>
            }

            <div class="space-y-1">
                <label for="category_id" class="text-[12px] font-bold text-muted-foreground">{"Category"}</label>
                <select id="category_id" class={input_class} required={true}
                    onchange={on_select(&draft, |d, v| d.category_id = v)}>
                    <option value="" selected={draft.category_id.is_empty()}>{"Select a category"}</option>
                    { for props.categories.iter().map(|category| {
                        let value = category.id.to_string();
                        let selected = draft.category_id == value;
                        html! { <option value={value} selected={selected}>{ category.name.clone() }</option> }
                    }) }
                </select>
                { field_error(errors, "category_id") }
            </div>

            <div class="space-y-1">
                <label for="name" class="text-[12px] font-bold text-muted-foreground">{"Name"}</label>
                <input id="name" type="text" required={true} placeholder="e.g. Groceries" class={input_class}
                    value={draft.name.clone()} oninput={on_input(&draft, |d, v| d.name = v)} />
                { field_error(errors, "name") }
            </div>

            <div class="space-y-1">
                <label for="amount" class="text-[12px] font-bold text-muted-foreground">{"Amount"}</label>
                <input id="amount" type="number" step="0.01" min="0" required={true} placeholder="e.g. 25.50" class={input_class}
                    value={draft.amount.clone()} oninput={on_input(&draft, |d, v| d.amount = v)} />
                { field_error(errors, "amount") }
            </div>

            <div class="space-y-1">
                <label for="method" class="text-[12px] font-bold text-muted-foreground">{"Payment Method"}</label>
                <select id="method" class={input_class}
                    onchange={on_select(&draft, |d, v| d.method = PaymentMethod::parse(&v).unwrap_or_default())}>
                    { for PaymentMethod::ALL.iter().map(|method| html! {
                        <option value={method.as_str()} selected={draft.method == *method}>{ method.label() }</option>
                    }) }
                </select>
                { field_error(errors, "method") }
            </div>

            <div class="space-y-1">
                <label for="date" class="text-[12px] font-bold text-muted-foreground">{"Date"}</label>
                <input id="date" type="date" required={true} class={input_class}
                    value={draft.date.clone()} oninput={on_input(&draft, |d, v| d.date = v)} />
                { field_error(errors, "date") }
            </div>

            <div class="flex gap-2">
                <button type="button" onclick={on_cancel} disabled={props.saving}
                    class="flex-1 bg-[#B2CBDE] text-[#173E63] py-2 rounded-[10px] text-[12px] font-bold">
                    {"Cancel"}
                </button>
                <button type="submit" disabled={props.saving}
                    class="flex-[2] bg-[#173E63] text-white py-2 rounded-[10px] text-[12px] font-bold">
                    {
                        if props.saving {
                            "Saving..."
                        } else if props.initial.is_some() {
                            "Update Expense"
                        } else {
                            "Add Expense"
                        }
                    }
                </button>
            </div>
        </form>
    }
}
