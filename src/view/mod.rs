mod log_view;
mod sidebar_view;
mod theme;
mod ui_fmt;

pub use log_view::render;
pub use theme::Theme;
