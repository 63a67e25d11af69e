pub mod global_context;
pub mod header;
pub mod layout_store;
pub mod left;

use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::layout_store::LayoutStore;
use crate::system::auth::context::SessionStore;
use crate::system::auth::guard::RequireAuth;

/// Authenticated application shell.
///
/// ```text
/// +---------+--------------------------+
/// |         |          Header          |
/// | Sidebar +--------------------------+
/// |         |         Content          |
/// +---------+--------------------------+
/// ```
///
/// The content column is offset by the sidebar width from `LayoutStore`.
#[component]
pub fn Shell(
    session: SessionStore,
    layout: LayoutStore,
    nav: AppGlobalContext,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <div class="app-layout">
            <left::sidebar::Sidebar layout=layout nav=nav />
            <div class="app-main" style:margin-left=move || layout.offset_css()>
                <header::header::Header session=session layout=layout />
                <main class="app-content">
                    <RequireAuth session=session>
                        {children()}
                    </RequireAuth>
                </main>
            </div>
        </div>
    }
}
