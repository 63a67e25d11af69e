//! ViewModel for the pages list

use contracts::domain::a001_page::PageRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::data::DataGateway;

pub const ITEMS_PER_PAGE: usize = 10;

/// Badge classes for a page's `category_type`
pub fn category_style(category_type: &str) -> &'static str {
    match category_type {
        "Imágenes" => "badge badge--orange",
        "Documento" => "badge badge--green",
        "Videos" => "badge badge--blue",
        _ => "badge badge--gray",
    }
}

/// Case-insensitive substring match on category or description
fn matches_term(page: &PageRecord, term_lower: &str) -> bool {
    page.category.to_lowercase().contains(term_lower)
        || page.description.to_lowercase().contains(term_lower)
}

/// Page catalog plus the filtered, paginated view over it
#[derive(Clone, Copy)]
pub struct ListFilterViewModel {
    gateway: StoredValue<DataGateway>,
    /// Full catalog as loaded
    pub pages: RwSignal<Vec<PageRecord>>,
    /// Active filtered view, always derived from `pages`
    pub filtered: RwSignal<Vec<PageRecord>>,
    pub search_term: RwSignal<String>,
    /// 1-based
    pub current_page: RwSignal<usize>,
    pub loading: RwSignal<bool>,
}

impl ListFilterViewModel {
    pub fn new(gateway: DataGateway) -> Self {
        Self {
            gateway: StoredValue::new(gateway),
            pages: RwSignal::new(Vec::new()),
            filtered: RwSignal::new(Vec::new()),
            search_term: RwSignal::new(String::new()),
            current_page: RwSignal::new(1),
            loading: RwSignal::new(true),
        }
    }

    pub async fn initialize(&self) {
        self.loading.set(true);
        let gateway = self.gateway.get_value();
        let pages = gateway.pages().await;

        if self.loading.is_disposed() {
            return;
        }
        log::debug!("a001: {} pages loaded", pages.len());
        self.filtered.set(pages.clone());
        self.pages.set(pages);
        self.search_term.set(String::new());
        self.current_page.set(1);
        self.loading.set(false);
    }

    pub fn load(&self) {
        let vm = *self;
        spawn_local(async move { vm.initialize().await });
    }

    /// Recompute the filtered view from the full catalog.
    ///
    /// An empty term restores the catalog unchanged. Resets to the first page.
    pub fn apply_filter(&self, term: &str) {
        self.search_term.set(term.to_string());
        let filtered = if term.is_empty() {
            self.pages.get_untracked()
        } else {
            let term_lower = term.to_lowercase();
            self.pages.with_untracked(|pages| {
                pages
                    .iter()
                    .filter(|page| matches_term(page, &term_lower))
                    .cloned()
                    .collect()
            })
        };
        self.filtered.set(filtered);
        self.current_page.set(1);
    }

    pub fn total_pages(&self) -> usize {
        let count = self.filtered.with(|pages| pages.len());
        count.div_ceil(ITEMS_PER_PAGE).max(1)
    }

    /// Clamped into `1..=total_pages()`
    pub fn set_page(&self, page: usize) {
        let page = page.clamp(1, self.total_pages());
        self.current_page.set(page);
    }

    /// Records on the current page of the filtered view
    pub fn page_items(&self) -> Vec<PageRecord> {
        let page = self.current_page.get();
        self.filtered.with(|pages| {
            pages
                .iter()
                .skip(page.saturating_sub(1) * ITEMS_PER_PAGE)
                .take(ITEMS_PER_PAGE)
                .cloned()
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::gateway::tests::{FailingSource, StaticSource};
    use contracts::shared::fixtures;
    use futures::executor::block_on;
    use serde_json::json;

    fn loaded(gateway: DataGateway) -> ListFilterViewModel {
        let vm = ListFilterViewModel::new(gateway);
        block_on(vm.initialize());
        vm
    }

    fn ids(pages: &[PageRecord]) -> Vec<u32> {
        pages.iter().map(|p| p.id).collect()
    }

    fn page(id: u32, category: &str, description: &str, category_type: &str) -> serde_json::Value {
        json!({
            "id": id,
            "category": category,
            "subcategory": "",
            "description": description,
            "date": "2024-01-01",
            "categoryType": category_type,
            "imageUrl": ""
        })
    }

    #[test]
    fn test_initialize_sets_catalog_and_view() {
        let vm = loaded(DataGateway::new(FailingSource));
        assert!(!vm.loading.get_untracked());
        assert_eq!(vm.pages.get_untracked(), fixtures::fallback_pages().pages);
        assert_eq!(vm.filtered.get_untracked(), vm.pages.get_untracked());
    }

    #[test]
    fn test_filter_then_clear_restores_catalog() {
        let vm = loaded(DataGateway::new(FailingSource));
        let original = vm.pages.get_untracked();
        vm.apply_filter("galería");
        assert!(vm.filtered.get_untracked().len() < original.len());
        vm.apply_filter("");
        assert_eq!(vm.filtered.get_untracked(), original);
    }

    #[test]
    fn test_filter_matches_category_or_description_case_insensitively() {
        let vm = loaded(DataGateway::new(StaticSource::new(json!({
            "pages": [
                page(1, "Tutoriales", "Videos de introducción", "Videos"),
                page(2, "VIDEOS", "Material audiovisual", "Videos"),
                page(3, "Manuales", "Guía de uso", "Documento"),
                page(4, "Webinars", "Grabaciones", "Videos"),
            ]
        }))));
        vm.apply_filter("videos");
        // record 4 has categoryType "Videos" but neither field mentions it
        assert_eq!(ids(&vm.filtered.get_untracked()), vec![1, 2]);
    }

    #[test]
    fn test_filter_without_matches_is_empty() {
        let vm = loaded(DataGateway::new(FailingSource));
        vm.apply_filter("zzz-no-such-page");
        assert!(vm.filtered.get_untracked().is_empty());
        assert_eq!(vm.total_pages(), 1);
        assert!(vm.page_items().is_empty());
    }

    #[test]
    fn test_filter_never_narrows_previous_result() {
        let vm = loaded(DataGateway::new(FailingSource));
        vm.apply_filter("galería");
        vm.apply_filter("manuales");
        let filtered = vm.filtered.get_untracked();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].category, "Manuales");
    }

    #[test]
    fn test_pagination() {
        let pages: Vec<_> = (1..=23)
            .map(|i| page(i, "Cat", "desc", "Documento"))
            .collect();
        let vm = loaded(DataGateway::new(StaticSource::new(json!({ "pages": pages }))));
        assert_eq!(vm.total_pages(), 3);
        vm.set_page(3);
        assert_eq!(ids(&vm.page_items()), vec![21, 22, 23]);
        vm.set_page(99);
        assert_eq!(vm.current_page.get_untracked(), 3);
        vm.set_page(0);
        assert_eq!(vm.current_page.get_untracked(), 1);
        vm.set_page(2);
        vm.apply_filter("cat");
        assert_eq!(vm.current_page.get_untracked(), 1);
    }

    #[test]
    fn test_page_zero_reads_as_first_page() {
        let vm = loaded(DataGateway::new(FailingSource));
        vm.current_page.set(0);
        assert_eq!(ids(&vm.page_items()), ids(&vm.filtered.get_untracked()));
    }

    #[test]
    fn test_category_style_default() {
        assert_eq!(category_style("Videos"), "badge badge--blue");
        assert_eq!(category_style("Imágenes"), "badge badge--orange");
        assert_eq!(category_style("Audio"), "badge badge--gray");
    }
}
