//! Cart panel visibility.
//!
//! The panel is either open or closed. Clicks inside the panel content and
//! clicks on the surrounding overlay are separate events: only the overlay
//! closes the panel.

use serde::{Deserialize, Serialize};

/// Whether the cart panel is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CartPanel {
    Open,
    #[default]
    Closed,
}

/// User actions that affect panel visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelEvent {
    /// The cart trigger in the header.
    Open,
    /// The close control, or "Continue Shopping" on an empty cart.
    Close,
    /// A click on the overlay outside the panel content.
    OverlayClick,
    /// A click inside the panel content. Never closes the panel.
    ContentClick,
}

impl CartPanel {
    /// Apply an event and return the resulting state.
    #[must_use]
    pub const fn apply(self, event: PanelEvent) -> Self {
        match event {
            PanelEvent::Open => Self::Open,
            PanelEvent::Close | PanelEvent::OverlayClick => Self::Closed,
            PanelEvent::ContentClick => self,
        }
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATES: [CartPanel; 2] = [CartPanel::Open, CartPanel::Closed];

    #[test]
    fn test_default_is_closed() {
        assert_eq!(CartPanel::default(), CartPanel::Closed);
        assert!(!CartPanel::default().is_open());
    }

    #[test]
    fn test_open_from_any_state() {
        for state in ALL_STATES {
            assert_eq!(state.apply(PanelEvent::Open), CartPanel::Open);
        }
    }

    #[test]
    fn test_close_and_overlay_click_close() {
        for state in ALL_STATES {
            assert_eq!(state.apply(PanelEvent::Close), CartPanel::Closed);
            assert_eq!(state.apply(PanelEvent::OverlayClick), CartPanel::Closed);
        }
    }

    #[test]
    fn test_content_click_does_not_propagate() {
        for state in ALL_STATES {
            assert_eq!(state.apply(PanelEvent::ContentClick), state);
        }
    }
}
