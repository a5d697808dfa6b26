use crate::input::Intent;
use crate::repository::HistorySource;

use super::LogViewModel;

/// Rows taken by the header bar
pub const HEADER_ROWS: u16 = 1;
/// Rows taken by the footer bar
pub const FOOTER_ROWS: u16 = 1;
/// Rows taken by the search prompt while it is open
pub const SEARCH_ROWS: u16 = 1;

/// Action to take after handling an intent
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Redraw,
    Quit,
}

/// Main application ViewModel: panels, search prompt and terminal size
/// around the commit log
pub struct AppViewModel<S> {
    pub log: LogViewModel<S>,
    repo_path: String,
    head_name: String,
    height: u16,
    show_sidebar: bool,
    show_files: bool,
    /// Query being typed; `None` when the prompt is closed
    search: Option<String>,
}

impl<S: HistorySource> AppViewModel<S> {
    pub fn new(log: LogViewModel<S>, repo_path: String, head_name: String) -> Self {
        Self {
            log,
            repo_path,
            head_name,
            height: 0,
            show_sidebar: true,
            show_files: false,
            search: None,
        }
    }

    pub fn repo_path(&self) -> &str {
        &self.repo_path
    }

    pub fn head_name(&self) -> &str {
        &self.head_name
    }

    pub fn show_sidebar(&self) -> bool {
        self.show_sidebar
    }

    pub fn show_files(&self) -> bool {
        self.show_files
    }

    pub fn is_search_mode(&self) -> bool {
        self.search.is_some()
    }

    pub fn search_query(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Rows available to the commit list
    pub fn viewport_height(&self) -> usize {
        let search = if self.is_search_mode() { SEARCH_ROWS } else { 0 };
        self.height
            .saturating_sub(HEADER_ROWS + FOOTER_ROWS + search)
            .max(1) as usize
    }

    /// Track the terminal height; the view reads the width from its frame
    pub fn resize(&mut self, height: u16) {
        self.height = height;
        self.sync();
    }

    /// Handle a user intent and return the action to take
    pub fn handle_intent(&mut self, intent: Intent) -> Action {
        match intent {
            Intent::Quit => return Action::Quit,

            Intent::MoveUp => self.log.move_cursor(-1),
            Intent::MoveDown => self.log.move_cursor(1),
            Intent::PageUp => self.log.page(-1),
            Intent::PageDown => self.log.page(1),
            Intent::Top => self.log.move_to_top(),
            Intent::Bottom => self.log.move_to_bottom(),

            Intent::ToggleFiles => self.show_files = !self.show_files,
            Intent::ToggleSidebar => self.show_sidebar = !self.show_sidebar,

            Intent::EnterSearch => {
                self.search = Some(self.log.filter().query().to_string());
            }
            Intent::SearchChar(c) => {
                if let Some(query) = self.search.as_mut() {
                    query.push(c);
                }
            }
            Intent::SearchBackspace => {
                if let Some(query) = self.search.as_mut() {
                    query.pop();
                }
            }
            Intent::SearchSubmit => {
                if let Some(query) = self.search.take() {
                    self.log.apply_filter(&query);
                }
            }
            Intent::SearchCancel => self.search = None,
        }
        self.sync();
        Action::Redraw
    }

    /// Re-fit the log to the current window and prime the sidebar
    fn sync(&mut self) {
        self.log.resize(self.viewport_height());
        if self.show_files {
            self.log.load_selected_files();
        }
    }
}
