use leptos::prelude::*;

use super::context::SessionStore;

/// Renders children only while a session is active
#[component]
pub fn RequireAuth(session: SessionStore, children: ChildrenFn) -> impl IntoView {
    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <div>"No autenticado. Inicie sesión."</div> }
        >
            {children()}
        </Show>
    }
}
