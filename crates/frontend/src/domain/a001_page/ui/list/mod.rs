pub mod view_model;

use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppPage;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::data::DataGateway;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use view_model::{category_style, ListFilterViewModel};

#[component]
pub fn PagesList(gateway: DataGateway, nav: AppGlobalContext) -> impl IntoView {
    let vm = ListFilterViewModel::new(gateway);
    let search = RwSignal::new(String::new());

    vm.load();

    // Re-filter whenever the term or the catalog changes
    Effect::new(move |_| {
        let term = search.get();
        vm.pages.track();
        vm.apply_filter(term.trim());
    });

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Páginas"</h1>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| nav.navigate(AppPage::PageNew)
                >
                    {icon("plus")}
                    " Nueva página"
                </Button>
            </div>

            <div class="page__filters">
                {icon("search")}
                <Input value=search placeholder="Buscar por categoría o descripción..." />
            </div>

            <Show
                when=move || !vm.loading.get()
                fallback=|| view! { <Spinner /> }
            >
                <Show
                    when=move || !vm.filtered.with(|pages| pages.is_empty())
                    fallback=|| view! { <div class="page__empty">"No se encontraron páginas"</div> }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th></th>
                                <th>"Categoría"</th>
                                <th>"Subcategoría"</th>
                                <th>"Descripción"</th>
                                <th>"Fecha"</th>
                                <th>"Tipo"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                vm.page_items()
                                    .into_iter()
                                    .map(|page| {
                                        let badge = category_style(&page.category_type);
                                        view! {
                                            <tr>
                                                <td><img class="table__thumb" src=page.image_url alt="" /></td>
                                                <td>{page.category}</td>
                                                <td>{page.subcategory}</td>
                                                <td>{page.description}</td>
                                                <td>{format_date(&page.date)}</td>
                                                <td><span class=badge>{page.category_type}</span></td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </Show>

                <PaginationControls
                    current_page=vm.current_page
                    total_pages=Signal::derive(move || vm.total_pages())
                    total_count=Signal::derive(move || vm.filtered.with(|pages| pages.len()))
                    on_page_change=Callback::new(move |page| vm.set_page(page))
                />
            </Show>
        </div>
    }
}
