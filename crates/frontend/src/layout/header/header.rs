use leptos::prelude::*;

use crate::layout::layout_store::LayoutStore;
use crate::shared::icons::icon;
use crate::system::auth::context::SessionStore;

#[component]
pub fn Header(session: SessionStore, layout: LayoutStore) -> impl IntoView {
    let user_name = move || session.current().map(|identity| identity.name).unwrap_or_default();

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <button class="button button--ghost" aria-label="Toggle sidebar" on:click=move |_| layout.toggle()>
                    {"☰"}
                </button>
            </div>
            <div class="header__actions">
                <span class="header__user">{user_name}</span>
                <button class="button button--ghost" aria-label="Logout" on:click=move |_| session.logout()>
                    {icon("log-out")}
                    " Salir"
                </button>
            </div>
        </header>
    }
}
