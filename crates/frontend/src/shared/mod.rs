pub mod api_utils;
pub mod chart;
pub mod components;
pub mod data;
pub mod date_utils;
pub mod icons;
