use leptos::prelude::Effect;
use leptos::prelude::*;
use web_sys::window;

use crate::routes::routes::AppPage;

/// Current page, mirrored into the address bar
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<AppPage>,
}

impl AppGlobalContext {
    pub fn new(initial: AppPage) -> Self {
        Self {
            active: RwSignal::new(initial),
        }
    }

    /// Context seeded from the current location path
    pub fn from_location() -> Self {
        let path = window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        Self::new(AppPage::from_path(&path))
    }

    pub fn navigate(&self, page: AppPage) {
        if self.active.get_untracked() != page {
            log::debug!("navigate: {}", page.path());
            self.active.set(page);
        }
    }

    /// Keep the address bar in sync with `active` and follow back/forward.
    pub fn init_router_integration(&self) {
        let this = *self;
        Effect::new(move |_| {
            let path = this.active.get().path();
            let current = window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_default();

            // Only touch history when the path actually changed
            if current != path {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.push_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(path),
                        );
                    }
                }
            }
        });

        let _ = leptos::prelude::window_event_listener(leptos::ev::popstate, move |_| {
            let path = window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_default();
            this.active.set(AppPage::from_path(&path));
        });
    }
}
