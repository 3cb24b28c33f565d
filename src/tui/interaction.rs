//! Component-level mouse interactivity system.
//!
//! This module provides a registry for routing mouse clicks to
//! components. Components register their clickable regions during
//! render, and clicks are dispatched to the matching region's action.
//!
//! # Example
//!
//! ```ignore
//! // During render, register a keypad button:
//! registry.register(InteractiveRegion::clickable(
//!     "keypad_5",
//!     ClickRegion::new(x, y, width, height),
//!     Action::DigitPressed('5'),
//! ));
//!
//! // Mouse clicks are automatically dispatched to matching regions
//! ```

use crate::events::Action;

/// Rectangular screen region in terminal cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point is within this region
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// A clickable region that responds to mouse clicks.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Unique identifier for this region (for debugging/logging)
    pub id: &'static str,

    /// The bounds of this interactive region
    pub bounds: ClickRegion,

    /// Action to dispatch on left click
    pub on_click: Action,

    /// Priority for overlapping regions (higher = checked first).
    /// Dialogs sit above the keypad.
    pub priority: i32,
}

impl InteractiveRegion {
    /// Create a new clickable region
    pub fn clickable(id: &'static str, bounds: ClickRegion, action: Action) -> Self {
        Self {
            id,
            bounds,
            on_click: action,
            priority: 0,
        }
    }

    /// Set the priority (for builder pattern)
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Check if a point is within this region's bounds
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

/// Registry of clickable regions, rebuilt each frame during render.
///
/// Components register their regions here during render, and the mouse
/// handler queries this registry to dispatch clicks.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Register an interactive region
    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    /// Find the action to dispatch for a click at (x, y)
    ///
    /// Returns the action from the highest-priority region that contains
    /// the point.
    pub fn handle_click(&self, x: u16, y: u16) -> Action {
        let mut candidates: Vec<_> = self.regions.iter().filter(|r| r.contains(x, y)).collect();

        candidates.sort_by(|a, b| b.priority.cmp(&a.priority));

        candidates
            .first()
            .map(|r| r.on_click.clone())
            .unwrap_or(Action::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_contains() {
        let region = InteractiveRegion::clickable(
            "test",
            ClickRegion::new(10, 10, 20, 10),
            Action::None,
        );

        assert!(region.contains(10, 10)); // top-left corner
        assert!(region.contains(15, 15)); // center
        assert!(region.contains(29, 19)); // just inside bottom-right
        assert!(!region.contains(30, 20)); // just outside
        assert!(!region.contains(9, 10)); // just left
    }

    #[test]
    fn test_priority_ordering() {
        let mut registry = InteractionRegistry::new();

        // A keypad button under a dialog choice
        registry.register(
            InteractiveRegion::clickable(
                "keypad_5",
                ClickRegion::new(0, 0, 100, 100),
                Action::DigitPressed('5'),
            )
            .with_priority(0),
        );

        registry.register(
            InteractiveRegion::clickable(
                "dialog_choice",
                ClickRegion::new(20, 20, 60, 60),
                Action::DialogAccept,
            )
            .with_priority(100),
        );

        // Click in the dialog area should return the dialog's action
        assert_eq!(registry.handle_click(50, 50), Action::DialogAccept);

        // Click outside the dialog should reach the keypad
        assert_eq!(registry.handle_click(5, 5), Action::DigitPressed('5'));

        // Click outside everything is a no-op
        registry.clear();
        assert_eq!(registry.handle_click(5, 5), Action::None);
    }
}
