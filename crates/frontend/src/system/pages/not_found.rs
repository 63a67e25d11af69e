use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let go_back = move |_| {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.back();
        }
    };

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"La página que buscas no existe."</p>
            <button class="btn-primary" on:click=go_back>"Volver"</button>
        </div>
    }
}
