use yew::prelude::*;
use yew_router::prelude::*;

use crate::{auth, router::Route};

/// Styling for the inline auth links, one class per literal.
pub fn link_classes(extra: &'static str) -> Classes {
    classes!(extra, "text-primary", "font-semibold")
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="min-h-screen flex flex-col bg-background">
            <Header />
            <main class="flex-1 overflow-y-auto">
                { for props.children.iter() }
            </main>
        </div>
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let navigator = use_navigator();
    let logged_in = auth::is_logged_in();

    let on_logout = Callback::from(move |_: MouseEvent| {
        auth::logout();
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Login);
        }
    });

    html! {
        <header class="bg-[#D8E1E8] border-b border-border h-16 flex items-center justify-between px-6">
            <div class="flex items-center gap-6">
                <span class="text-[#173E63] text-2xl font-black tracking-tight">{"Expenses App"}</span>
                <nav class="flex items-center gap-4 text-sm font-medium text-[#173E63]">
                    <Link<Route> to={Route::Home}>{"List"}</Link<Route>>
                </nav>
            </div>
            if logged_in {
                <button onclick={on_logout} class="flex items-center gap-2 px-4 py-2 rounded-xl bg-[#173E63] text-white text-[13px] font-medium hover:opacity-90 transition-opacity">
                    {"Log Out"}
                </button>
            } else {
                <Link<Route> to={Route::Login} classes={link_classes("text-sm")}>{"Log In"}</Link<Route>>
            }
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_classes_hold_one_class_each() {
        let classes = link_classes("ml-2");

        assert!(classes.contains("ml-2"));
        assert!(classes.contains("text-primary"));
        assert!(classes.contains("font-semibold"));
        assert_eq!(classes.into_iter().count(), 3);
    }
}
