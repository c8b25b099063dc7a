use crate::app::App;
use crate::event::Event;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update {
    Query(KeyEvent),
    MoveSelection(isize),
    Resize(u16),
    Accept,
    Abort,
    None,
}

/// Map a terminal event to an [`Update`].
///
/// Keys the selector does not bind go to the query box.
pub fn handle_input(app: &App, input: Event) -> Update {
    let key = match input {
        Event::Key(key) if key.kind != KeyEventKind::Release => key,
        Event::Resize(height) => return Update::Resize(height),
        _ => return Update::None,
    };

    match key {
        KeyEvent {
            code: KeyCode::Char('c' | 'g'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
        | KeyEvent {
            code: KeyCode::Esc, ..
        } => Update::Abort,
        KeyEvent {
            code: KeyCode::Enter,
            ..
        } => Update::Accept,
        KeyEvent {
            code: KeyCode::Up, ..
        }
        | KeyEvent {
            code: KeyCode::Char('p'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => Update::MoveSelection(-1),
        KeyEvent {
            code: KeyCode::Down,
            ..
        }
        | KeyEvent {
            code: KeyCode::Char('n'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => Update::MoveSelection(1),
        KeyEvent {
            code: KeyCode::PageUp,
            ..
        } => Update::MoveSelection(-app.page.max(1)),
        KeyEvent {
            code: KeyCode::PageDown,
            ..
        } => Update::MoveSelection(app.page.max(1)),
        KeyEvent {
            code: KeyCode::Home,
            modifiers: KeyModifiers::CONTROL,
            ..
        } => Update::MoveSelection(-(app.results.len() as isize)),
        KeyEvent {
            code: KeyCode::End,
            modifiers: KeyModifiers::CONTROL,
            ..
        } => Update::MoveSelection(app.results.len() as isize),
        key => Update::Query(key),
    }
}

pub fn apply(app: &mut App, update: Update) {
    match update {
        Update::Query(key) => {
            app.dismiss_message();
            app.input(key);
        }
        Update::MoveSelection(delta) => app.move_selection(delta),
        Update::Resize(height) => app.resize(height),
        Update::Accept => app.accept(),
        Update::Abort => app.abort(),
        Update::None => {}
    }
}
