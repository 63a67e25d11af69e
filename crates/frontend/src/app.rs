use crate::layout::global_context::AppGlobalContext;
use crate::layout::layout_store::LayoutStore;
use crate::routes::routes::AppRoutes;
use crate::shared::data::DataGateway;
use crate::system::auth::context::SessionStore;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Stores are owned here and handed down explicitly.
    let session = SessionStore::new();
    let layout = LayoutStore::new();
    let nav = AppGlobalContext::from_location();
    let gateway = DataGateway::http();

    view! {
        <AppRoutes session=session layout=layout nav=nav gateway=gateway />
    }
}
