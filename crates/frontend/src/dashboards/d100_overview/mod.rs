pub mod charts;
pub mod ui;
pub mod view_model;
