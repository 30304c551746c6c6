use yew::prelude::*;
use yew_router::prelude::*;

mod api;
mod auth;
mod components;
mod config;
mod error;
mod filter;
mod form;
mod list;
mod modal;
mod models;
mod router;
mod storage;
mod summary;

use api::ApiClient;
use router::{switch, Route};

#[function_component(App)]
fn app() -> Html {
    let client = use_state(ApiClient::from_env);

    html! {
        <ContextProvider<ApiClient> context={(*client).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<ApiClient>>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("expenses frontend starting against {}", config::Config::from_env().api_url());
    yew::Renderer::<App>::new().render();
}
