use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Screens follow a props-based pattern:
/// - They receive data via struct fields borrowed from the `Game`.
/// - They may hold internal presentation state (the intro form does).
/// - They render to a `Frame` within a given `Rect`.
///
/// The `render` method takes `&mut self` so stateful components can update
/// internal presentation state (e.g. cursor position) during the render pass.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
