mod app_viewmodel;
mod changed_files;
mod filter;
mod log_viewmodel;
mod selection;

pub use app_viewmodel::{Action, AppViewModel, FOOTER_ROWS, HEADER_ROWS, SEARCH_ROWS};
pub use changed_files::{ChangedFilesCache, NO_CHANGES, UNAVAILABLE};
pub use filter::CommitFilter;
pub use log_viewmodel::{LogViewModel, LOOKAHEAD};
pub use selection::Viewport;
