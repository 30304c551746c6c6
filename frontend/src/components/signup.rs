use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api::{self, ApiClient},
    auth,
    components::{field_error, layout::link_classes, Layout},
    error::FormErrors,
    models::{HouseholdChoice, RegisterPayload},
    router::Route,
};

const SIGNUP_FIELDS: [&str; 5] = ["name", "email", "password", "household_name", "household_code"];

#[derive(Clone, Copy, PartialEq)]
enum HouseholdAction {
    Create,
    Join,
}

fn text_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let client = use_context::<ApiClient>().unwrap_or_default();
    let navigator = use_navigator();

    let name = use_state(|| "".to_string());
    let email = use_state(|| "".to_string());
    let password = use_state(|| "".to_string());
    let household_action = use_state(|| HouseholdAction::Create);
    let household_name = use_state(|| "".to_string());
    let household_code = use_state(|| "".to_string());
    let errors = use_state(FormErrors::new);
    let loading = use_state(|| false);

    let on_submit = {
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let household_action = household_action.clone();
        let household_name = household_name.clone();
        let household_code = household_code.clone();
        let errors = errors.clone();
        let loading = loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let household = match *household_action {
                HouseholdAction::Create => HouseholdChoice::Create {
                    household_name: household_name.trim().to_string(),
                },
                HouseholdAction::Join => HouseholdChoice::Join {
                    household_code: household_code.trim().to_string(),
                },
            };
            let payload = RegisterPayload {
                name: name.trim().to_string(),
                email: email.trim().to_string(),
                password: (*password).clone(),
                household,
            };

            loading.set(true);
            errors.set(FormErrors::new());

            let client = client.clone();
            let navigator = navigator.clone();
            let errors = errors.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match api::register(&client, &payload).await {
                    Ok(session) => {
                        auth::save_auth(&session.token, true);
                        if let Some(household) = &session.household {
                            log::info!("registered into household {}", household.id);
                        }
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Home);
                        }
                    }
                    Err(e) => {
                        log::warn!("registration failed: {e}");
                        errors.set(FormErrors::from_error(&e));
                    }
                }
                loading.set(false);
            });
        })
    };

    let input_class = "w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary";

    let banner = errors.banner(&SIGNUP_FIELDS);

    let choose = |action: HouseholdAction| {
        let household_action = household_action.clone();
        Callback::from(move |_: Event| household_action.set(action))
    };

    html! {
        <Layout>
            <div class="min-h-screen flex items-center justify-center bg-background p-4">
                <div class="w-full max-w-md bg-card border border-border rounded-2xl shadow-lg p-8">
                    <h1 class="text-2xl font-bold text-foreground text-center mb-6">{"Sign Up"}</h1>

                    <form class="space-y-6" onsubmit={on_submit}>
                        <div class="space-y-1">
                            <label for="name" class="text-sm font-medium text-foreground">{"Name"}</label>
                            <input id="name" type="text" required={true} placeholder="Your name" class={input_class}
                                value={(*name).clone()} oninput={text_input(&name)} />
                            { field_error(&errors, "name") }
                        </div>
                        <div class="space-y-1">
                            <label for="email" class="text-sm font-medium text-foreground">{"Email"}</label>
                            <input id="email" type="email" required={true} placeholder="you@example.com" class={input_class}
                                value={(*email).clone()} oninput={text_input(&email)} />
                            { field_error(&errors, "email") }
                        </div>
                        <div class="space-y-1">
                            <label for="password" class="text-sm font-medium text-foreground">{"Password"}</label>
                            <input id="password" type="password" required={true} placeholder="••••••••" class={input_class}
                                value={(*password).clone()} oninput={text_input(&password)} />
                            { field_error(&errors, "password") }
                        </div>

                        <div class="space-y-1">
                            <span class="text-sm font-medium text-foreground">{"Household"}</span>
                            <div class="flex gap-4 mt-2 text-sm">
                                <label class="flex items-center gap-2">
                                    <input type="radio" name="household_action" value="create"
                                        checked={*household_action == HouseholdAction::Create}
                                        onchange={choose(HouseholdAction::Create)} />
                                    {"Create new"}
                                </label>
                                <label class="flex items-center gap-2">
                                    <input type="radio" name="household_action" value="join"
                                        checked={*household_action == HouseholdAction::Join}
                                        onchange={choose(HouseholdAction::Join)} />
                                    {"Join existing"}
                                </label>
                            </div>
                        </div>

                        if *household_action == HouseholdAction::Create {
                            <div class="space-y-1">
                                <label for="household_name" class="text-sm font-medium text-foreground">{"Household Name"}</label>
                                <input id="household_name" type="text" required={true} placeholder="Family household" class={input_class}
                                    value={(*household_name).clone()} oninput={text_input(&household_name)} />
                                { field_error(&errors, "household_name") }
                            </div>
                        } else {
                            <div class="space-y-1">
                                <label for="household_code" class="text-sm font-medium text-foreground">{"Join Code"}</label>
                                <input id="household_code" type="text" required={true} placeholder="Enter join code" class={input_class}
                                    value={(*household_code).clone()} oninput={text_input(&household_code)} />
                                { field_error(&errors, "household_code") }
                            </div>
                        }

                        { for banner.iter().map(|message| html! { <p class="text-sm text-red-600">{ message.clone() }</p> }) }

                        <button type="submit" disabled={*loading}
                            class="w-full bg-primary text-primary-foreground py-2 rounded-lg font-semibold hover:opacity-90 transition-opacity">
                            { if *loading { "Signing up..." } else { "Sign Up" } }
                        </button>
                    </form>

                    <div class="mt-6 text-center text-sm text-muted-foreground">
                        {"Already have an account?"}
                        <Link<Route> to={Route::Login} classes={link_classes("ml-2")}>{"Log in"}</Link<Route>>
                    </div>
                </div>
            </div>
        </Layout>
    }
}
