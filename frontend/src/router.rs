use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    auth,
    components::{ExpenseList, Layout, LoginPage, SignupPage},
};

#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn is_protected(self) -> bool {
        matches!(self, Route::Home)
    }
}

/// Where a visit to `route` should be sent instead, if anywhere.
pub fn redirect_for(route: Route, logged_in: bool) -> Option<Route> {
    (route.is_protected() && !logged_in).then_some(Route::Login)
}

pub fn switch(route: Route) -> Html {
    if let Some(target) = redirect_for(route, auth::is_logged_in()) {
        return html! { <Redirect<Route> to={target} /> };
    }

    match route {
        Route::Home => html! { <Layout><ExpenseList /></Layout> },
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <SignupPage /> },
        Route::NotFound => html! {
            <Layout>
                <div class="p-6 text-center text-muted-foreground">{"Page not found."}</div>
            </Layout>
        },
    }
}
