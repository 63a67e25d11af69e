use serde::{Deserialize, Serialize};

/// Entry of the page catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
    pub id: u32,
    pub category: String,
    pub subcategory: String,
    pub description: String,
    /// ISO date, e.g. "2024-03-15"
    pub date: String,
    /// One of "Imágenes", "Documento", "Videos"; other values are rendered with the default style
    pub category_type: String,
    pub image_url: String,
}

/// Payload of `pages.json`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PagesResponse {
    pub pages: Vec<PageRecord>,
}

/// Payload of `form-reference.json`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormReferenceData {
    pub companies: Vec<Company>,
    pub company_types: Vec<CompanyType>,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub company_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyType {
    pub id: u32,
    pub name: String,
}
