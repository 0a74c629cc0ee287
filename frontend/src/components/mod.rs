pub mod canvas;
pub mod history;
pub mod table;
pub mod theme_toggle;
pub mod upload;
