pub mod compare;
pub mod holiday;
pub mod list;
pub mod save;
pub mod show;
pub mod ui;
