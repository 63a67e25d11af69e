//! Collapsible sidebar with the main navigation

use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::layout_store::LayoutStore;
use crate::routes::routes::AppPage;
use crate::shared::icons::icon;

struct MenuItem {
    page: AppPage,
    label: &'static str,
    icon: &'static str,
}

fn menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            page: AppPage::Dashboard,
            label: "Dashboard",
            icon: "dashboard",
        },
        MenuItem {
            page: AppPage::Pages,
            label: "Páginas",
            icon: "pages",
        },
        MenuItem {
            page: AppPage::PageNew,
            label: "Nueva página",
            icon: "plus",
        },
    ]
}

#[component]
pub fn Sidebar(layout: LayoutStore, nav: AppGlobalContext) -> impl IntoView {
    let collapsed = move || layout.is_collapsed();

    view! {
        <aside
            data-zone="left"
            class="app-sidebar"
            class:app-sidebar--collapsed=collapsed
            style:width=move || layout.offset_css()
        >
            <div class="app-sidebar__brand">
                <Show when=move || !collapsed() fallback=|| view! { <span>"A"</span> }>
                    <span>"Admin"</span>
                </Show>
            </div>
            <nav class="app-sidebar__content">
                {menu_items()
                    .into_iter()
                    .map(|item| {
                        let MenuItem { page, label, icon: icon_name } = item;
                        view! {
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || nav.active.get() == page
                                title=label
                                on:click=move |_| nav.navigate(page)
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(icon_name)}
                                    <Show when=move || !collapsed()>
                                        <span>{label}</span>
                                    </Show>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </nav>
            <button
                class="button button--ghost app-sidebar__toggle"
                aria-label="Toggle sidebar"
                on:click=move |_| layout.toggle()
            >
                {move || if collapsed() { icon("chevron-right") } else { icon("chevron-left") }}
            </button>
        </aside>
    }
}
