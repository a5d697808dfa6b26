use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// User intents derived from keyboard input
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    // Navigation
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    Top,
    Bottom,

    // Panels
    ToggleFiles,
    ToggleSidebar,

    // Search input
    EnterSearch,
    SearchChar(char),
    SearchBackspace,
    SearchSubmit,
    SearchCancel,

    Quit,
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}

/// Map a key event to a user intent. While the search prompt is open,
/// printable keys are query text.
pub fn map_key_to_intent(key: &KeyEvent, search_mode: bool) -> Option<Intent> {
    if is_ctrl_c(key) {
        return Some(Intent::Quit);
    }

    if search_mode {
        return match key.code {
            KeyCode::Esc => Some(Intent::SearchCancel),
            KeyCode::Enter => Some(Intent::SearchSubmit),
            KeyCode::Backspace | KeyCode::Delete => Some(Intent::SearchBackspace),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(Intent::SearchChar(c))
            }
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(Intent::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Intent::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Intent::MoveDown),
        KeyCode::PageUp => Some(Intent::PageUp),
        KeyCode::PageDown => Some(Intent::PageDown),
        KeyCode::Home | KeyCode::Char('g') => Some(Intent::Top),
        KeyCode::End | KeyCode::Char('G') => Some(Intent::Bottom),
        KeyCode::Enter => Some(Intent::ToggleFiles),
        KeyCode::Tab => Some(Intent::ToggleSidebar),
        KeyCode::Char('/') => Some(Intent::EnterSearch),
        _ => None,
    }
}
