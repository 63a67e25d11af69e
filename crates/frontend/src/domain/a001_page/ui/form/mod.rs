pub mod model;

use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppPage;
use crate::shared::data::DataGateway;
use model::{DraftField, PageDraft, PageFormModel, SelectedFile};

#[component]
pub fn PageForm(gateway: DataGateway, nav: AppGlobalContext) -> impl IntoView {
    let model = PageFormModel::new(gateway);
    let draft = RwSignal::new(PageDraft::default());
    let errors = RwSignal::new(Vec::<DraftField>::new());

    model.load();

    on_cleanup(move || {
        if let Some(url) = model.clear_file() {
            let _ = web_sys::Url::revoke_object_url(&url);
        }
    });

    let has_error = move |field: DraftField| errors.with(|list| list.contains(&field));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        match current.validate() {
            Ok(()) => {
                log::info!("a001: page draft submitted: {:?}", current);
                log::info!("a001: selected file: {:?}", model.selected_file_name());
                errors.set(Vec::new());
                nav.navigate(AppPage::Pages);
            }
            Err(failed) => errors.set(failed),
        }
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let selected = SelectedFile {
            name: file.name(),
            mime: file.type_(),
            size: file.size(),
        };
        let preview = if selected.is_image() {
            web_sys::Url::create_object_url_with_blob(&file).ok()
        } else {
            None
        };
        if let Some(previous) = model.select_file(selected, preview) {
            let _ = web_sys::Url::revoke_object_url(&previous);
        }
    };

    let category_options = move || {
        model
            .categories
            .get()
            .into_iter()
            .map(|name| {
                let value = name.clone();
                view! { <option value=value>{name}</option> }
            })
            .collect_view()
    };
    let company_type_options = move || {
        model
            .company_types
            .get()
            .into_iter()
            .map(|kind| {
                let value = kind.name.clone();
                view! { <option value=value>{kind.name}</option> }
            })
            .collect_view()
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Nueva página"</h1>
                <Button on_click=move |_| model.open_contact_modal()>
                    "Contacto"
                </Button>
            </div>

            <Show when=move || model.show_contact_modal.get()>
                <div class="modal-overlay" on:click=move |_| model.close_contact_modal()>
                    <div class="modal" on:click=|ev| ev.stop_propagation()>
                        <h2 class="modal__title">"Formulario de contacto"</h2>
                        <p>"¿Necesita ayuda para publicar su página? Escríbanos y le responderemos."</p>
                        <Button on_click=move |_| model.close_contact_modal()>
                            "Cerrar"
                        </Button>
                    </div>
                </div>
            </Show>

            <Show
                when=move || !model.loading.get()
                fallback=|| view! { <Spinner /> }
            >
                <form class="form" on:submit=on_submit>
                    <div class="form__group">
                        <label>{DraftField::CategoryName1.label()}</label>
                        <select
                            class:form__field--error=move || has_error(DraftField::CategoryName1)
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.category_name_1 = value);
                            }
                        >
                            <option value="">"Seleccione..."</option>
                            {category_options}
                        </select>
                    </div>

                    <div class="form__group">
                        <label>{DraftField::CategoryName2.label()}</label>
                        <input
                            type="text"
                            class:form__field--error=move || has_error(DraftField::CategoryName2)
                            prop:value=move || draft.with(|d| d.category_name_2.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.category_name_2 = value);
                            }
                        />
                    </div>

                    <div class="form__group">
                        <label>{DraftField::Company.label()}</label>
                        <select
                            class:form__field--error=move || has_error(DraftField::Company)
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.company = value);
                            }
                        >
                            <option value="">"Seleccione..."</option>
                            {move || {
                                model
                                    .companies
                                    .get()
                                    .into_iter()
                                    .map(|company| {
                                        view! {
                                            <option value=company.id.to_string()>{company.name}</option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </div>

                    <div class="form__group">
                        <label>{DraftField::CompanyType1.label()}</label>
                        <select
                            class:form__field--error=move || has_error(DraftField::CompanyType1)
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.company_type_1 = value);
                            }
                        >
                            <option value="">"Seleccione..."</option>
                            {company_type_options}
                        </select>
                    </div>

                    <div class="form__group">
                        <label>{DraftField::CompanyType2.label()}</label>
                        <select
                            class:form__field--error=move || has_error(DraftField::CompanyType2)
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.company_type_2 = value);
                            }
                        >
                            <option value="">"Seleccione..."</option>
                            {company_type_options}
                        </select>
                    </div>

                    <div class="form__group">
                        <label>{DraftField::Description.label()}</label>
                        <textarea
                            class:form__field--error=move || has_error(DraftField::Description)
                            prop:value=move || draft.with(|d| d.description.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.description = value);
                            }
                        ></textarea>
                    </div>

                    <div class="form__group">
                        <label>"Archivo"</label>
                        <input type="file" accept="image/*,.pdf,.doc,.docx" on:change=on_file_change />
                        {move || {
                            model
                                .selected_file
                                .get()
                                .map(|file| view! { <span class="form__file-name">{file.name}</span> })
                        }}
                        {move || {
                            model
                                .preview_url
                                .get()
                                .map(|url| view! { <img class="form__preview" src=url alt="Vista previa" /> })
                        }}
                    </div>

                    <Show when=move || !errors.with(|list| list.is_empty())>
                        <div class="form__errors">
                            "Revise los campos: "
                            {move || {
                                errors
                                    .get()
                                    .iter()
                                    .map(|field| field.label())
                                    .collect::<Vec<_>>()
                                    .join(", ")
                            }}
                        </div>
                    </Show>

                    <Space gap=SpaceGap::Small>
                        <button type="submit" class="button button--primary">
                            "Guardar"
                        </button>
                        <Button on_click=move |_| nav.navigate(AppPage::Pages)>
                            "Cancelar"
                        </Button>
                    </Space>
                </form>
            </Show>
        </div>
    }
}
