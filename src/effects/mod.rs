//! Scroll-driven ambient effects.
//!
//! This module contains the presentational effects that react only to
//! the scroll position and their own click targets: the scroll progress
//! percentage, the floating contact affordance and its modal, parallax
//! transforms for decorative glyphs, and portfolio item action dispatch.
//! None of it shares state with the navigation machine.

use crate::page::catalog::PortfolioItem;
use clipboard::{ClipboardContext, ClipboardProvider};
use log::*;

/// Scroll position at which the floating contact affordance appears.
///
pub const CONTACT_REVEAL_THRESHOLD: f32 = 200.0;

/// Scroll units represented by one terminal row.
///
pub const ROW_UNITS: f32 = 40.0;

/// Scroll units applied per wheel notch.
///
pub const SCROLL_STEP: f32 = 120.0;

/// Scrollable extent of the presented content.
///
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub scroll_top: f32,
    pub content_height: f32,
    pub viewport_height: f32,
}

impl Viewport {
    /// Return the maximum reachable scroll position.
    ///
    pub fn max_scroll(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            scroll_top: 0.0,
            content_height: 0.0,
            viewport_height: 0.0,
        }
    }
}

/// Return the scroll progress percentage, clamped to [0, 100]. A
/// non-positive scrollable extent reports 0.
///
pub fn scroll_progress(viewport: &Viewport) -> f32 {
    let scrollable = viewport.content_height - viewport.viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (viewport.scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Return whether the floating contact affordance is shown.
///
pub fn contact_visible(scroll_top: f32) -> bool {
    scroll_top >= CONTACT_REVEAL_THRESHOLD
}

/// Vertical offset and rotation for one decorative element.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxTransform {
    pub offset_y: f32,
    pub rotation_deg: f32,
}

impl ParallaxTransform {
    /// Map the rotation onto a four-frame glyph cycle.
    ///
    pub fn glyph_frame(&self) -> usize {
        ((self.rotation_deg / 45.0).floor() as i64).rem_euclid(4) as usize
    }
}

/// Return the parallax transform for the decorative element at `index`.
///
pub fn parallax(scroll_top: f32, index: usize) -> ParallaxTransform {
    ParallaxTransform {
        offset_y: -(scroll_top * (0.5 + index as f32 * 0.1)),
        rotation_deg: 45.0 + scroll_top * 0.1,
    }
}

/// One entry in the contact modal.
///
#[derive(Debug, Clone, Copy)]
pub struct ContactLink {
    pub label: &'static str,
    pub target: &'static str,
}

/// The fixed contact channels offered by the modal.
///
pub const CONTACT_LINKS: [ContactLink; 4] = [
    ContactLink {
        label: "Email",
        target: "mailto:booking@navinkumar.in",
    },
    ContactLink {
        label: "Instagram",
        target: "https://instagram.com/navinkumarcomedy",
    },
    ContactLink {
        label: "YouTube",
        target: "https://youtube.com/@navinkumarcomedy",
    },
    ContactLink {
        label: "LinkedIn",
        target: "https://linkedin.com/in/navin-kumar",
    },
];

/// Transient contact overlay. A fresh value is built on every open and
/// dropped on close, so open/close cycles are independent.
///
#[derive(Debug, Clone)]
pub struct ContactModal {
    pub links: Vec<ContactLink>,
    pub selected: usize,
}

impl ContactModal {
    /// Build a new overlay with the fixed link set.
    ///
    pub fn new() -> Self {
        ContactModal {
            links: CONTACT_LINKS.to_vec(),
            selected: 0,
        }
    }

    /// Move selection to the next link, wrapping.
    ///
    pub fn select_next(&mut self) {
        if !self.links.is_empty() {
            self.selected = (self.selected + 1) % self.links.len();
        }
    }

    /// Move selection to the previous link, wrapping.
    ///
    pub fn select_previous(&mut self) {
        if !self.links.is_empty() {
            self.selected = (self.selected + self.links.len() - 1) % self.links.len();
        }
    }

    /// Return the selected link.
    ///
    pub fn selected_link(&self) -> Option<&ContactLink> {
        self.links.get(self.selected)
    }
}

/// Per-frame ambient effect state.
///
#[derive(Debug, Clone)]
pub struct AmbientEffects {
    pub viewport: Viewport,
    progress: f32,
    modal: Option<ContactModal>,
}

impl AmbientEffects {
    pub fn new() -> Self {
        AmbientEffects {
            viewport: Viewport::default(),
            progress: 0.0,
            modal: None,
        }
    }

    /// Recompute the progress percentage from the viewport. Called on
    /// every scroll event and once eagerly at startup.
    ///
    pub fn recompute(&mut self) {
        self.progress = scroll_progress(&self.viewport);
    }

    /// Return the last computed progress percentage.
    ///
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Scroll by the given delta, clamped to the content extent.
    ///
    pub fn scroll_by(&mut self, delta: f32) {
        let max = self.viewport.max_scroll();
        self.viewport.scroll_top = (self.viewport.scroll_top + delta).clamp(0.0, max);
        self.recompute();
    }

    /// Reset the scroll position to the top.
    ///
    pub fn reset_scroll(&mut self) {
        self.viewport.scroll_top = 0.0;
        self.recompute();
    }

    /// Record the content and viewport extents measured by the renderer.
    ///
    pub fn set_extent(&mut self, content_rows: u16, viewport_rows: u16) {
        self.viewport.content_height = content_rows as f32 * ROW_UNITS;
        self.viewport.viewport_height = viewport_rows as f32 * ROW_UNITS;
        let max = self.viewport.max_scroll();
        if self.viewport.scroll_top > max {
            self.viewport.scroll_top = max;
        }
        self.recompute();
    }

    /// Return the scroll offset expressed in rows, for the renderer.
    ///
    pub fn scroll_row_offset(&self) -> u16 {
        (self.viewport.scroll_top / ROW_UNITS) as u16
    }

    /// Return whether the contact affordance is shown.
    ///
    pub fn contact_visible(&self) -> bool {
        contact_visible(self.viewport.scroll_top)
    }

    /// Open a fresh contact overlay.
    ///
    pub fn open_contact(&mut self) {
        self.modal = Some(ContactModal::new());
    }

    /// Drop the contact overlay entirely.
    ///
    pub fn close_contact(&mut self) {
        self.modal = None;
    }

    pub fn modal(&self) -> Option<&ContactModal> {
        self.modal.as_ref()
    }

    pub fn modal_mut(&mut self) -> Option<&mut ContactModal> {
        self.modal.as_mut()
    }
}

/// Copy the given target to the system clipboard, reporting failures
/// without propagating them.
///
pub fn copy_to_clipboard(target: &str) {
    match ClipboardContext::new() {
        Ok(mut context) => match context.set_contents(target.to_string()) {
            Ok(_) => info!("Copied {} to clipboard", target),
            Err(error) => warn!("Failed to copy to clipboard: {}", error),
        },
        Err(error) => warn!("Failed to initialize clipboard: {}", error),
    }
}

/// Dispatch a portfolio item activation by its action tag. Unknown tags
/// are logged and otherwise ignored.
///
pub fn portfolio_dispatch(action: &str, item: &PortfolioItem) {
    match action {
        "link" => match item.target {
            Some(target) => copy_to_clipboard(target),
            None => warn!("Portfolio item '{}' has no link target", item.title),
        },
        "pending" => info!("'{}' is coming soon", item.title),
        _ => warn!(
            "Unknown portfolio action '{}' for '{}'",
            action, item.title
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_progress_stays_in_bounds() {
        let mut viewport = Viewport {
            scroll_top: 0.0,
            content_height: 2000.0,
            viewport_height: 800.0,
        };
        assert_eq!(scroll_progress(&viewport), 0.0);

        viewport.scroll_top = 600.0;
        assert_eq!(scroll_progress(&viewport), 50.0);

        viewport.scroll_top = 1200.0;
        assert_eq!(scroll_progress(&viewport), 100.0);

        // Overscroll never escapes the range.
        viewport.scroll_top = 5000.0;
        assert_eq!(scroll_progress(&viewport), 100.0);
        viewport.scroll_top = -50.0;
        assert_eq!(scroll_progress(&viewport), 0.0);
    }

    #[test]
    fn test_scroll_progress_degenerate_extent() {
        // Content no taller than the viewport reports 0 by convention.
        let viewport = Viewport {
            scroll_top: 100.0,
            content_height: 800.0,
            viewport_height: 800.0,
        };
        assert_eq!(scroll_progress(&viewport), 0.0);

        let viewport = Viewport {
            scroll_top: 100.0,
            content_height: 400.0,
            viewport_height: 800.0,
        };
        assert_eq!(scroll_progress(&viewport), 0.0);
    }

    #[test]
    fn test_contact_visibility_threshold() {
        assert!(!contact_visible(0.0));
        assert!(!contact_visible(199.9));
        assert!(contact_visible(200.0));
        assert!(contact_visible(350.0));
    }

    #[test]
    fn test_parallax_transform() {
        let still = parallax(0.0, 0);
        assert_eq!(still.offset_y, 0.0);
        assert_eq!(still.rotation_deg, 45.0);

        let scrolled = parallax(100.0, 2);
        assert_eq!(scrolled.offset_y, -70.0);
        assert_eq!(scrolled.rotation_deg, 55.0);

        // Deeper indexes drift faster.
        assert!(parallax(100.0, 3).offset_y < parallax(100.0, 0).offset_y);
    }

    #[test]
    fn test_parallax_glyph_frame_cycles() {
        assert_eq!(parallax(0.0, 0).glyph_frame(), 1);
        assert_eq!(parallax(450.0, 0).glyph_frame(), 2);
        assert_eq!(parallax(1350.0, 0).glyph_frame(), 0);
    }

    #[test]
    fn test_contact_modal_is_fresh_per_open() {
        let mut effects = AmbientEffects::new();
        assert!(effects.modal().is_none());

        effects.open_contact();
        effects.modal_mut().unwrap().select_next();
        assert_eq!(effects.modal().unwrap().selected, 1);

        effects.close_contact();
        assert!(effects.modal().is_none());

        // Reopening yields an untouched overlay.
        effects.open_contact();
        assert_eq!(effects.modal().unwrap().selected, 0);
        assert_eq!(effects.modal().unwrap().links.len(), CONTACT_LINKS.len());
    }

    #[test]
    fn test_scroll_clamps_to_extent() {
        let mut effects = AmbientEffects::new();
        effects.set_extent(30, 20);
        assert_eq!(effects.viewport.max_scroll(), 10.0 * ROW_UNITS);

        effects.scroll_by(SCROLL_STEP * 100.0);
        assert_eq!(effects.viewport.scroll_top, 10.0 * ROW_UNITS);
        assert_eq!(effects.progress(), 100.0);

        effects.scroll_by(-SCROLL_STEP * 100.0);
        assert_eq!(effects.viewport.scroll_top, 0.0);
        assert_eq!(effects.progress(), 0.0);
    }

    #[test]
    fn test_shrinking_extent_pulls_scroll_back() {
        let mut effects = AmbientEffects::new();
        effects.set_extent(40, 20);
        effects.scroll_by(SCROLL_STEP * 100.0);
        assert!(effects.viewport.scroll_top > 0.0);

        effects.set_extent(20, 20);
        assert_eq!(effects.viewport.scroll_top, 0.0);
        assert_eq!(effects.progress(), 0.0);
    }
}
