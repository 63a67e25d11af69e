//! Built-in datasets returned when a fixture cannot be fetched.
//!
//! Every function here yields a value of exactly the same shape as the live
//! payload, so consumers never need to know where their data came from.

use crate::dashboards::d100_overview::{
    DashboardSnapshot, PeriodBreakdown, Referral, SalesHistory, StatCard, WeeklyPoint,
};
use crate::domain::a001_page::{
    Company, CompanyType, FormReferenceData, PageRecord, PagesResponse,
};

const PLACEHOLDER_HOST: &str = "https://picsum.photos";

/// Build a placeholder image URL.
///
/// The same arguments always produce the same URL; a seed pins the image.
///
/// ```
/// use contracts::shared::fixtures::placeholder_image_url;
/// assert_eq!(placeholder_image_url(400, 300, None), "https://picsum.photos/400/300");
/// assert_eq!(
///     placeholder_image_url(400, 300, Some("7")),
///     "https://picsum.photos/seed/7/400/300"
/// );
/// ```
pub fn placeholder_image_url(width: u32, height: u32, seed: Option<&str>) -> String {
    match seed {
        Some(seed) if !seed.is_empty() => {
            format!("{}/seed/{}/{}/{}", PLACEHOLDER_HOST, seed, width, height)
        }
        _ => format!("{}/{}/{}", PLACEHOLDER_HOST, width, height),
    }
}

fn stat(title: &str, value: &str, change: &str) -> StatCard {
    StatCard {
        title: title.to_string(),
        value: value.to_string(),
        change: Some(change.to_string()),
    }
}

pub fn fallback_dashboard() -> DashboardSnapshot {
    let weekly = [
        ("Lun", 65.0),
        ("Mar", 85.0),
        ("Mié", 75.0),
        ("Jue", 95.0),
        ("Vie", 45.0),
        ("Sáb", 70.0),
        ("Dom", 90.0),
    ]
    .into_iter()
    .map(|(day, value)| WeeklyPoint {
        day: day.to_string(),
        value,
    })
    .collect();

    let periods = [
        ("Mañana", 45.0, "S/4,500"),
        ("Tarde", 30.0, "S/3,000"),
        ("Noche", 15.0, "S/1,500"),
        ("Madrugada", 10.0, "S/1,000"),
    ]
    .into_iter()
    .map(|(name, percentage, amount)| PeriodBreakdown {
        name: name.to_string(),
        percentage,
        amount: amount.to_string(),
    })
    .collect();

    let referrals = [
        ("Google", 1245, 45.0),
        ("Facebook", 823, 30.0),
        ("Instagram", 412, 15.0),
        ("Directo", 276, 10.0),
    ]
    .into_iter()
    .map(|(name, count, percentage)| Referral {
        name: name.to_string(),
        count,
        percentage,
    })
    .collect();

    DashboardSnapshot {
        stats: vec![
            stat("Ingresos", "S/1000", "+12%"),
            stat("Clientes", "4956", "+8%"),
            stat("Inversiones", "S/6554k", "-3%"),
            stat("Ganancia", "S/1000", "+5%"),
        ],
        sales_history: SalesHistory { weekly, periods },
        referrals,
    }
}

pub fn fallback_pages() -> PagesResponse {
    let rows = [
        (1, "Galería", "Eventos", "Fotos del aniversario de la empresa", "2024-01-15", "Imágenes"),
        (2, "Manuales", "Recursos humanos", "Guía de bienvenida para nuevos empleados", "2024-02-03", "Documento"),
        (3, "Tutoriales", "Capacitación", "Videos de introducción a la plataforma", "2024-02-20", "Videos"),
        (4, "Galería", "Productos", "Catálogo fotográfico de la temporada", "2024-03-08", "Imágenes"),
        (5, "Contratos", "Legal", "Plantillas de contratos con proveedores", "2024-03-22", "Documento"),
        (6, "Webinars", "Marketing", "Grabaciones de webinars y videos promocionales", "2024-04-11", "Videos"),
        (7, "Reportes", "Finanzas", "Informe trimestral de resultados", "2024-04-30", "Documento"),
        (8, "Banners", "Marketing", "Piezas gráficas para redes sociales", "2024-05-14", "Imágenes"),
    ];

    let pages = rows
        .into_iter()
        .map(
            |(id, category, subcategory, description, date, category_type)| PageRecord {
                id,
                category: category.to_string(),
                subcategory: subcategory.to_string(),
                description: description.to_string(),
                date: date.to_string(),
                category_type: category_type.to_string(),
                image_url: placeholder_image_url(400, 300, Some(&id.to_string())),
            },
        )
        .collect();

    PagesResponse { pages }
}

pub fn fallback_form_reference() -> FormReferenceData {
    FormReferenceData {
        companies: vec![
            Company {
                id: 1,
                name: "Tech Solutions SAC".to_string(),
                company_type: "Privada".to_string(),
            },
            Company {
                id: 2,
                name: "Municipalidad de Lima".to_string(),
                company_type: "Pública".to_string(),
            },
            Company {
                id: 3,
                name: "Fundación Andina".to_string(),
                company_type: "ONG".to_string(),
            },
        ],
        company_types: ["Privada", "Pública", "ONG"]
            .into_iter()
            .zip(1..)
            .map(|(name, id)| CompanyType {
                id,
                name: name.to_string(),
            })
            .collect(),
        categories: ["Imágenes", "Documento", "Videos"]
            .into_iter()
            .map(String::from)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_url_is_deterministic() {
        assert_eq!(
            placeholder_image_url(200, 100, Some("abc")),
            placeholder_image_url(200, 100, Some("abc"))
        );
        assert_eq!(placeholder_image_url(200, 100, Some("")), "https://picsum.photos/200/100");
    }

    #[test]
    fn test_fallback_weekly_has_seven_days() {
        let snapshot = fallback_dashboard();
        let values: Vec<f64> = snapshot
            .sales_history
            .weekly
            .iter()
            .map(|p| p.value)
            .collect();
        assert_eq!(values, vec![65.0, 85.0, 75.0, 95.0, 45.0, 70.0, 90.0]);
        assert!(snapshot.stats.iter().any(|s| s.title == "Ingresos"));
    }

    #[test]
    fn test_fallbacks_survive_json_round_trip() {
        // Fallback and live payloads must be interchangeable on the wire.
        let dashboard = serde_json::to_value(fallback_dashboard()).unwrap();
        assert!(dashboard.get("salesHistory").is_some());
        let pages = serde_json::to_value(fallback_pages()).unwrap();
        assert_eq!(pages["pages"][0]["categoryType"], "Imágenes");
        let reference = serde_json::to_value(fallback_form_reference()).unwrap();
        assert_eq!(reference["companyTypes"].as_array().map(|a| a.len()), Some(3));
    }
}
