use leptos::prelude::*;

use crate::dashboards::OverviewDashboard;
use crate::domain::a001_page::ui::form::PageForm;
use crate::domain::a001_page::ui::list::PagesList;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::layout_store::LayoutStore;
use crate::layout::Shell;
use crate::shared::data::DataGateway;
use crate::system::auth::context::SessionStore;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::pages::register::RegisterPage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPage {
    Login,
    Register,
    Dashboard,
    Pages,
    PageNew,
    NotFound,
}

impl AppPage {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => AppPage::Register,
            "/login" => AppPage::Login,
            "/register" => AppPage::Register,
            "/dashboard" => AppPage::Dashboard,
            "/pages" => AppPage::Pages,
            "/pages/new" => AppPage::PageNew,
            _ => AppPage::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            AppPage::Login => "/login",
            AppPage::Register => "/register",
            AppPage::Dashboard => "/dashboard",
            AppPage::Pages => "/pages",
            AppPage::PageNew => "/pages/new",
            AppPage::NotFound => "/404",
        }
    }

    /// Reachable without an identity
    pub fn is_public(&self) -> bool {
        matches!(self, AppPage::Login | AppPage::Register | AppPage::NotFound)
    }
}

/// Page actually shown for a request, given the session state
pub fn resolve_page(requested: AppPage, authenticated: bool) -> AppPage {
    match (requested, authenticated) {
        (page, false) if !page.is_public() => AppPage::Login,
        (AppPage::Login, true) => AppPage::Dashboard,
        (page, _) => page,
    }
}

/// Guarded page as a memo, so an unchanged result does not remount the view
pub fn resolved_page(session: SessionStore, nav: AppGlobalContext) -> Memo<AppPage> {
    Memo::new(move |_| resolve_page(nav.active.get(), session.authenticated().get()))
}

#[component]
pub fn AppRoutes(
    session: SessionStore,
    layout: LayoutStore,
    nav: AppGlobalContext,
    gateway: DataGateway,
) -> impl IntoView {
    nav.init_router_integration();

    let page = resolved_page(session, nav);

    // Redirect whenever the session or the requested page changes
    Effect::new(move |_| {
        let target = page.get();
        if target != nav.active.get_untracked() {
            nav.navigate(target);
        }
    });

    let gateway = StoredValue::new(gateway);

    move || {
        match page.get() {
            AppPage::Login => view! { <LoginPage session=session nav=nav /> }.into_any(),
            AppPage::Register => view! { <RegisterPage session=session nav=nav /> }.into_any(),
            AppPage::NotFound => view! { <NotFoundPage /> }.into_any(),
            AppPage::Dashboard => view! {
                <Shell session=session layout=layout nav=nav>
                    <OverviewDashboard gateway=gateway.get_value() />
                </Shell>
            }
            .into_any(),
            AppPage::Pages => view! {
                <Shell session=session layout=layout nav=nav>
                    <PagesList gateway=gateway.get_value() nav=nav />
                </Shell>
            }
            .into_any(),
            AppPage::PageNew => view! {
                <Shell session=session layout=layout nav=nav>
                    <PageForm gateway=gateway.get_value() nav=nav />
                </Shell>
            }
            .into_any(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::Identity;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_from_path() {
        assert_eq!(AppPage::from_path("/"), AppPage::Register);
        assert_eq!(AppPage::from_path("/pages/new"), AppPage::PageNew);
        assert_eq!(AppPage::from_path("/pages/"), AppPage::Pages);
        assert_eq!(AppPage::from_path("/nope"), AppPage::NotFound);
    }

    #[test]
    fn test_path_round_trips() {
        for page in [
            AppPage::Login,
            AppPage::Register,
            AppPage::Dashboard,
            AppPage::Pages,
            AppPage::PageNew,
        ] {
            assert_eq!(AppPage::from_path(page.path()), page);
        }
    }

    #[test]
    fn test_guard() {
        assert_eq!(resolve_page(AppPage::Dashboard, false), AppPage::Login);
        assert_eq!(resolve_page(AppPage::PageNew, false), AppPage::Login);
        assert_eq!(resolve_page(AppPage::Register, false), AppPage::Register);
        assert_eq!(resolve_page(AppPage::NotFound, false), AppPage::NotFound);
        assert_eq!(resolve_page(AppPage::Login, true), AppPage::Dashboard);
        assert_eq!(resolve_page(AppPage::Pages, true), AppPage::Pages);
    }

    #[test]
    fn test_login_then_navigate_renders_dashboard_once() {
        let session = SessionStore::new();
        let nav = AppGlobalContext::new(AppPage::Login);
        let page = resolved_page(session, nav);

        // Stands in for the page switch: reruns only when the memo changes
        let renders = Arc::new(AtomicUsize::new(0));
        let counter = renders.clone();
        let rendered = Memo::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            page.get()
        });

        assert_eq!(rendered.get(), AppPage::Login);
        assert_eq!(renders.load(Ordering::SeqCst), 1);

        session.login(Identity::new(1, "ray", "ray@example.com"));
        assert_eq!(rendered.get(), AppPage::Dashboard);
        assert_eq!(renders.load(Ordering::SeqCst), 2);

        nav.navigate(AppPage::Dashboard);
        assert_eq!(rendered.get(), AppPage::Dashboard);
        assert_eq!(renders.load(Ordering::SeqCst), 2);
    }
}
