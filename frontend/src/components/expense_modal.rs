use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::{
    api::{save_expense, ApiClient},
    auth,
    components::ExpenseForm,
    error::ApiError,
    form::ExpenseDraft,
    modal::{ModalAction, ModalState},
    models::Category,
};

#[derive(Properties, PartialEq)]
pub struct ExpenseModalProps {
    pub state: UseReducerHandle<ModalState>,
    pub categories: Vec<Category>,
    /// Emitted after the server accepted the expense, so the owner can re-fetch.
    pub on_saved: Callback<()>,
}

/// Dialog around [ExpenseForm]. Stays open and shows the errors if saving fails.
#[function_component(ExpenseModal)]
pub fn expense_modal(props: &ExpenseModalProps) -> Html {
    let client = use_context::<ApiClient>().unwrap_or_default();
    let state = props.state.clone();

    if !state.open {
        return html! {};
    }

    let on_submit = {
        let state = state.clone();
        let on_saved = props.on_saved.clone();
        Callback::from(move |draft: ExpenseDraft| {
            if state.saving {
                return;
            }

            let payload = match draft.to_payload(client.config().household_id()) {
                Ok(payload) => payload,
                Err(errors) => {
                    state.dispatch(ModalAction::Rejected(errors));
                    return;
                }
            };
            let request = state.request(payload);
            state.dispatch(ModalAction::SaveStarted);

            let client = client.clone();
            let state = state.clone();
            let on_saved = on_saved.clone();
            spawn_local(async move {
                let result = match auth::get_token() {
                    Some(token) => save_expense(&client, &request, &token).await.map(|_| ()),
                    None => Err(ApiError::NotAuthenticated),
                };
                let saved = result.is_ok();
                state.dispatch(ModalAction::SaveFinished(result));
                if saved {
                    on_saved.emit(());
                }
            });
        })
    };

    let on_close = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(ModalAction::Close))
    };

    let on_backdrop = {
        let on_close = on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center">
            <div class="absolute inset-0 bg-black/40" onclick={on_backdrop}></div>
            <div class="relative w-[90%] sm:max-w-[425px] bg-card rounded-2xl shadow-lg border border-border p-6">
                <h2 class="text-lg font-bold text-foreground mb-4">{ state.title() }</h2>
                <ExpenseForm
                    key={state.session}
                    initial={state.editing.clone()}
                    categories={props.categories.clone()}
                    errors={state.errors.clone()}
                    saving={state.saving}
                    on_submit={on_submit}
                    on_cancel={on_close}
                />
            </div>
        </div>
    }
}
