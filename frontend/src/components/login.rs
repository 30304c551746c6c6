use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api::{self, ApiClient},
    auth,
    components::layout::link_classes,
    router::Route,
};

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let client = use_context::<ApiClient>().unwrap_or_default();
    let navigator = use_navigator();

    let email = use_state(|| "".to_string());
    let password = use_state(|| "".to_string());
    let remember = use_state(|| false);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let remember = remember.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email_val = email.trim().to_string();
            let password_val = (*password).clone();
            let remember_val = *remember;

            if email_val.is_empty() || password_val.is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }

            loading.set(true);
            error.set(None);

            let client = client.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match api::login(&client, &email_val, &password_val).await {
                    Ok(session) => {
                        auth::save_auth(&session.token, remember_val);
                        log::info!("logged in as user {}", session.user.id);
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Home);
                        }
                    }
                    Err(e) => {
                        log::warn!("login failed: {e}");
                        error.set(Some(e.to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-background p-4">
            <div class="w-full max-w-md bg-card border border-border rounded-2xl shadow-lg p-8">
                <h1 class="text-2xl font-bold text-foreground text-center mb-6">{"Login"}</h1>

                <form class="space-y-6" onsubmit={on_submit}>
                    <div class="space-y-1">
                        <label for="email" class="block text-sm font-medium text-foreground">{"Email address"}</label>
                        <input
                            id="email"
                            type="email"
                            required={true}
                            placeholder="you@example.com"
                            class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                            value={(*email).clone()}
                            oninput={{
                                let email = email.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    email.set(input.value());
                                })
                            }}
                        />
                    </div>
                    <div class="space-y-1">
                        <label for="password" class="block text-sm font-medium text-foreground">{"Password"}</label>
                        <input
                            id="password"
                            type="password"
                            required={true}
                            placeholder="••••••••"
                            class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                            value={(*password).clone()}
                            oninput={{
                                let password = password.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    password.set(input.value());
                                })
                            }}
                        />
                    </div>

                    <label class="flex items-center gap-2 text-sm text-foreground">
                        <input
                            id="remember"
                            type="checkbox"
                            checked={*remember}
                            onchange={{
                                let remember = remember.clone();
                                Callback::from(move |e: Event| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    remember.set(input.checked());
                                })
                            }}
                        />
                        {"Remember me"}
                    </label>

                    if let Some(msg) = &*error {
                        <div class="text-sm text-red-500">{ msg.clone() }</div>
                    }

                    <button
                        type="submit"
                        class="w-full bg-primary text-primary-foreground py-2 rounded-lg font-semibold hover:opacity-90 transition-opacity"
                        disabled={*loading}
                    >
                        { if *loading { "Signing in..." } else { "Sign In" } }
                    </button>
                </form>

                <div class="mt-6 text-center text-sm text-muted-foreground">
                    {"Don't have an account?"}
                    <Link<Route> to={Route::Register} classes={link_classes("ml-2")}>{"Sign Up"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
