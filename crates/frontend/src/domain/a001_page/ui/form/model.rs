use contracts::domain::a001_page::{Company, CompanyType};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::data::DataGateway;

pub const MIN_DESCRIPTION_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    CategoryName1,
    CategoryName2,
    Company,
    CompanyType1,
    CompanyType2,
    Description,
}

impl DraftField {
    pub fn label(&self) -> &'static str {
        match self {
            DraftField::CategoryName1 => "Categoría principal",
            DraftField::CategoryName2 => "Categoría secundaria",
            DraftField::Company => "Empresa",
            DraftField::CompanyType1 => "Tipo de empresa",
            DraftField::CompanyType2 => "Tipo de empresa secundario",
            DraftField::Description => "Descripción",
        }
    }
}

/// Values typed into the page form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageDraft {
    pub category_name_1: String,
    pub category_name_2: String,
    pub company: String,
    pub company_type_1: String,
    pub company_type_2: String,
    pub description: String,
}

impl PageDraft {
    /// Every field is required; the description needs at least ten characters.
    pub fn validate(&self) -> Result<(), Vec<DraftField>> {
        let required = [
            (DraftField::CategoryName1, &self.category_name_1),
            (DraftField::CategoryName2, &self.category_name_2),
            (DraftField::Company, &self.company),
            (DraftField::CompanyType1, &self.company_type_1),
            (DraftField::CompanyType2, &self.company_type_2),
        ];
        let mut failed: Vec<DraftField> = required
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect();
        if self.description.trim().chars().count() < MIN_DESCRIPTION_LEN {
            failed.push(DraftField::Description);
        }
        if failed.is_empty() {
            Ok(())
        } else {
            Err(failed)
        }
    }
}

/// File picked in the form, as far as the model needs to know it
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub size: f64,
}

impl SelectedFile {
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

/// Reference lists, picked file and modal state for the page form
#[derive(Clone, Copy)]
pub struct PageFormModel {
    gateway: StoredValue<DataGateway>,
    pub companies: RwSignal<Vec<Company>>,
    pub company_types: RwSignal<Vec<CompanyType>>,
    pub categories: RwSignal<Vec<String>>,
    pub loading: RwSignal<bool>,
    pub selected_file: RwSignal<Option<SelectedFile>>,
    /// Object URL of the picked image, if any
    pub preview_url: RwSignal<Option<String>>,
    pub show_contact_modal: RwSignal<bool>,
}

impl PageFormModel {
    pub fn new(gateway: DataGateway) -> Self {
        Self {
            gateway: StoredValue::new(gateway),
            companies: RwSignal::new(Vec::new()),
            company_types: RwSignal::new(Vec::new()),
            categories: RwSignal::new(Vec::new()),
            loading: RwSignal::new(true),
            selected_file: RwSignal::new(None),
            preview_url: RwSignal::new(None),
            show_contact_modal: RwSignal::new(false),
        }
    }

    pub async fn initialize(&self) {
        self.loading.set(true);
        let data = self.gateway.get_value().form_reference().await;
        if self.loading.is_disposed() {
            return;
        }
        self.companies.set(data.companies);
        self.company_types.set(data.company_types);
        self.categories.set(data.categories);
        self.loading.set(false);
    }

    pub fn load(&self) {
        let model = *self;
        spawn_local(async move { model.initialize().await });
    }

    /// Replace the picked file. Returns the preview URL it displaces so the
    /// caller can release it.
    pub fn select_file(&self, file: SelectedFile, preview_url: Option<String>) -> Option<String> {
        log::debug!("a001: file selected: {} ({})", file.name, file.mime);
        self.selected_file.set(Some(file));
        self.preview_url
            .try_update(|current| std::mem::replace(current, preview_url))
            .flatten()
    }

    /// Forget the picked file, returning its preview URL
    pub fn clear_file(&self) -> Option<String> {
        let _ = self.selected_file.try_set(None);
        self.preview_url.try_update(Option::take).flatten()
    }

    pub fn selected_file_name(&self) -> Option<String> {
        self.selected_file
            .with_untracked(|file| file.as_ref().map(|f| f.name.clone()))
    }

    pub fn open_contact_modal(&self) {
        self.show_contact_modal.set(true);
    }

    pub fn close_contact_modal(&self) {
        self.show_contact_modal.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::gateway::tests::FailingSource;
    use futures::executor::block_on;

    fn complete() -> PageDraft {
        PageDraft {
            category_name_1: "Galería".to_string(),
            category_name_2: "Eventos".to_string(),
            company: "1".to_string(),
            company_type_1: "Privada".to_string(),
            company_type_2: "ONG".to_string(),
            description: "Fotos del aniversario".to_string(),
        }
    }

    #[test]
    fn test_complete_draft_is_valid() {
        assert_eq!(complete().validate(), Ok(()));
    }

    #[test]
    fn test_empty_draft_reports_every_field() {
        let failed = PageDraft::default().validate().unwrap_err();
        assert_eq!(failed.len(), 6);
    }

    #[test]
    fn test_short_description() {
        let draft = PageDraft {
            description: "corta".to_string(),
            ..complete()
        };
        assert_eq!(draft.validate(), Err(vec![DraftField::Description]));
    }

    #[test]
    fn test_reference_data_falls_back() {
        let model = PageFormModel::new(DataGateway::new(FailingSource));
        block_on(model.initialize());
        assert!(!model.loading.get_untracked());
        assert_eq!(model.company_types.get_untracked().len(), 3);
        assert!(model.categories.get_untracked().contains(&"Videos".to_string()));
    }

    fn photo(name: &str) -> SelectedFile {
        SelectedFile {
            name: name.to_string(),
            mime: "image/png".to_string(),
            size: 2048.0,
        }
    }

    #[test]
    fn test_select_file_hands_back_previous_preview() {
        let model = PageFormModel::new(DataGateway::new(FailingSource));
        assert_eq!(model.selected_file_name(), None);

        let displaced = model.select_file(photo("a.png"), Some("blob:a".to_string()));
        assert_eq!(displaced, None);
        assert_eq!(model.preview_url.get_untracked().as_deref(), Some("blob:a"));

        let displaced = model.select_file(photo("b.png"), Some("blob:b".to_string()));
        assert_eq!(displaced.as_deref(), Some("blob:a"));
        assert_eq!(model.selected_file_name().as_deref(), Some("b.png"));

        assert_eq!(model.clear_file().as_deref(), Some("blob:b"));
        assert_eq!(model.selected_file.get_untracked(), None);
        assert_eq!(model.clear_file(), None);
    }

    #[test]
    fn test_non_image_has_no_preview() {
        let model = PageFormModel::new(DataGateway::new(FailingSource));
        let pdf = SelectedFile {
            name: "manual.pdf".to_string(),
            mime: "application/pdf".to_string(),
            size: 10.0,
        };
        assert!(!pdf.is_image());
        assert!(photo("x.jpg").is_image());

        model.select_file(photo("a.png"), Some("blob:a".to_string()));
        let displaced = model.select_file(pdf, None);
        assert_eq!(displaced.as_deref(), Some("blob:a"));
        assert_eq!(model.preview_url.get_untracked(), None);
    }

    #[test]
    fn test_contact_modal_toggles() {
        let model = PageFormModel::new(DataGateway::new(FailingSource));
        assert!(!model.show_contact_modal.get_untracked());
        model.open_contact_modal();
        assert!(model.show_contact_modal.get_untracked());
        model.close_contact_modal();
        assert!(!model.show_contact_modal.get_untracked());
    }
}
