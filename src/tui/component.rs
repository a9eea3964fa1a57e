use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components in this architecture follow the React pattern:
/// - They receive data via props (struct fields).
/// - They may hold internal state (via `&mut State` fields).
/// - They render to a `Frame` within a given `Rect`.
///
/// # Mutability
///
/// The `render` method takes `&mut self` so components can record what they
/// drew (hit areas, the rendered markup) for the event handlers that run
/// after the frame.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Something that was drawn and can answer "what is at this cell?".
pub trait HitTest {
    /// What the hit resolves to (a row index, a button).
    type Target;

    fn hit_test(&self, column: u16, row: u16) -> Option<Self::Target>;
}
