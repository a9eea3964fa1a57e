use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    ForceQuit, // Ctrl+C
    AddRow,
    Print,

    // Pointer gestures (column, row)
    MouseDown(u16, u16),
    MouseDrag(u16, u16),
    MouseUp(u16, u16),
    MouseMove(u16, u16),

    // TUI-local events (handled directly in TUI)
    Escape, // cancels a drag, otherwise quits
    ScrollUp,
    ScrollDown,
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            log::warn!("Event poll failed: {}", e);
            return None;
        }
    }
    match event::read() {
        Ok(ev) => translate(ev),
        Err(e) => {
            log::warn!("Event read failed: {}", e);
            None
        }
    }
}

/// Map a raw crossterm event onto a `TuiEvent`.
pub fn translate(ev: Event) -> Option<TuiEvent> {
    match ev {
        Event::Key(key_event) => {
            if key_event.kind == KeyEventKind::Release {
                return None;
            }
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
                (_, KeyCode::Char('a')) => Some(TuiEvent::AddRow),
                (_, KeyCode::Char('p')) => Some(TuiEvent::Print),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Up) => Some(TuiEvent::ScrollUp),
                (_, KeyCode::Down) => Some(TuiEvent::ScrollDown),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => {
            let (col, row) = (mouse_event.column, mouse_event.row);
            match mouse_event.kind {
                MouseEventKind::Down(MouseButton::Left) => Some(TuiEvent::MouseDown(col, row)),
                MouseEventKind::Drag(MouseButton::Left) => Some(TuiEvent::MouseDrag(col, row)),
                MouseEventKind::Up(MouseButton::Left) => Some(TuiEvent::MouseUp(col, row)),
                MouseEventKind::Moved => Some(TuiEvent::MouseMove(col, row)),
                MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
                MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
                _ => None,
            }
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
