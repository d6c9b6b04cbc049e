pub mod category;
pub mod chart;
pub mod fetch;
pub mod panel;
pub mod period;
pub mod preset;
pub mod settings;
pub mod summary;
