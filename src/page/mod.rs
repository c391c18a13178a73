//! In-memory page model.
//!
//! This module holds the registry of view containers the navigation
//! controller toggles between, plus the breadcrumb trail, the polite
//! announcer text, and the current focus target. Containers are
//! discovered once at startup and only ever shown or hidden afterwards;
//! the visibility flag and the `aria_hidden` flag on each node are
//! written together so they can never disagree.

pub mod catalog;

use crate::state::Section;

/// Id of the main quadrant grid container.
///
pub const MAIN_CONTAINER_ID: &str = "mainQuadrants";

/// A renderable container with paired visibility and assistive flags.
///
#[derive(Debug, Clone)]
pub struct ViewNode {
    id: String,
    visible: bool,
    aria_hidden: bool,
}

impl ViewNode {
    fn new(id: impl Into<String>, shown: bool) -> Self {
        ViewNode {
            id: id.into(),
            visible: shown,
            aria_hidden: !shown,
        }
    }

    /// Return the node id.
    ///
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Return whether the node is visually presented.
    ///
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Return whether the node is hidden from assistive technology.
    ///
    pub fn aria_hidden(&self) -> bool {
        self.aria_hidden
    }

    fn set_shown(&mut self, shown: bool) {
        self.visible = shown;
        self.aria_hidden = !shown;
    }
}

/// Registry of the page's view containers and navigation chrome.
///
#[derive(Debug, Clone)]
pub struct Page {
    main: Option<ViewNode>,
    sections: Vec<(Section, ViewNode)>,
    breadcrumb: Vec<String>,
    announcement: String,
    focused: Option<String>,
}

impl Page {
    /// Return the standard page: main grid shown, every section detail
    /// container present and hidden.
    ///
    pub fn standard() -> Self {
        Page {
            main: Some(ViewNode::new(MAIN_CONTAINER_ID, true)),
            sections: Section::ALL
                .iter()
                .map(|section| (*section, ViewNode::new(section.container_id(), false)))
                .collect(),
            breadcrumb: vec!["Home".to_string()],
            announcement: String::new(),
            focused: None,
        }
    }

    /// Return a page missing its main container, for degraded setups.
    ///
    #[allow(dead_code)]
    pub fn without_main() -> Self {
        Page {
            main: None,
            ..Page::standard()
        }
    }

    /// Return a page carrying only the given section containers.
    ///
    #[allow(dead_code)]
    pub fn with_sections(sections: &[Section]) -> Self {
        Page {
            sections: sections
                .iter()
                .map(|section| (*section, ViewNode::new(section.container_id(), false)))
                .collect(),
            ..Page::standard()
        }
    }

    /// Return whether the main container was discovered.
    ///
    pub fn has_main(&self) -> bool {
        self.main.is_some()
    }

    /// Return the main container node, if present.
    ///
    #[allow(dead_code)]
    pub fn main_node(&self) -> Option<&ViewNode> {
        self.main.as_ref()
    }

    /// Return the node for the given section, if present.
    ///
    #[allow(dead_code)]
    pub fn section_node(&self, section: Section) -> Option<&ViewNode> {
        self.sections
            .iter()
            .find(|(candidate, _)| *candidate == section)
            .map(|(_, node)| node)
    }

    /// Show or hide the main container. Returns false when the
    /// container is missing.
    ///
    pub fn set_main_shown(&mut self, shown: bool) -> bool {
        match self.main.as_mut() {
            Some(node) => {
                node.set_shown(shown);
                true
            }
            None => false,
        }
    }

    /// Show or hide one section container. Returns false when the
    /// container is missing.
    ///
    pub fn set_section_shown(&mut self, section: Section, shown: bool) -> bool {
        match self
            .sections
            .iter_mut()
            .find(|(candidate, _)| *candidate == section)
        {
            Some((_, node)) => {
                node.set_shown(shown);
                true
            }
            None => false,
        }
    }

    /// Hide every section container.
    ///
    pub fn hide_all_sections(&mut self) {
        for (_, node) in self.sections.iter_mut() {
            node.set_shown(false);
        }
    }

    /// Return the section whose container is currently shown.
    ///
    pub fn visible_section(&self) -> Option<Section> {
        self.sections
            .iter()
            .find(|(_, node)| node.is_visible())
            .map(|(section, _)| *section)
    }

    /// Return whether the main container is currently shown.
    ///
    pub fn main_visible(&self) -> bool {
        self.main
            .as_ref()
            .map(|node| node.is_visible())
            .unwrap_or(false)
    }

    /// Return the ids of every visible container.
    ///
    #[allow(dead_code)]
    pub fn visible_ids(&self) -> Vec<&str> {
        let mut ids = vec![];
        if let Some(node) = &self.main {
            if node.is_visible() {
                ids.push(node.id());
            }
        }
        for (_, node) in &self.sections {
            if node.is_visible() {
                ids.push(node.id());
            }
        }
        ids
    }

    /// Set the breadcrumb trail for the given destination.
    ///
    pub fn set_trail(&mut self, section: Option<Section>) {
        self.breadcrumb = match section {
            Some(section) => vec!["Home".to_string(), section.display_name().to_string()],
            None => vec!["Home".to_string()],
        };
    }

    /// Return the breadcrumb trail.
    ///
    pub fn breadcrumb(&self) -> &[String] {
        &self.breadcrumb
    }

    /// Overwrite the announcer text. Announcements are never queued.
    ///
    pub fn announce(&mut self, message: &str) {
        self.announcement = message.to_string();
    }

    /// Return the current announcer text.
    ///
    pub fn announcement(&self) -> &str {
        &self.announcement
    }

    /// Move focus to the element with the given id.
    ///
    pub fn focus(&mut self, id: impl Into<String>) {
        self.focused = Some(id.into());
    }

    /// Move focus to the first quadrant tile on the main grid.
    ///
    pub fn focus_first_tile(&mut self) {
        self.focused = Some(Section::ALL[0].tile_id());
    }

    /// Return the id of the focused element, if any.
    ///
    #[allow(dead_code)]
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Check that every node's visibility agrees with its aria flag.
    ///
    #[allow(dead_code)]
    pub fn aria_consistent(&self) -> bool {
        let main_ok = self
            .main
            .as_ref()
            .map(|node| node.is_visible() != node.aria_hidden())
            .unwrap_or(true);
        main_ok
            && self
                .sections
                .iter()
                .all(|(_, node)| node.is_visible() != node.aria_hidden())
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_page_shows_only_main() {
        let page = Page::standard();
        assert_eq!(page.visible_ids(), vec![MAIN_CONTAINER_ID]);
        assert!(page.aria_consistent());
    }

    #[test]
    fn test_set_shown_keeps_aria_in_sync() {
        let mut page = Page::standard();
        assert!(page.set_section_shown(Section::Writing, true));
        let node = page.section_node(Section::Writing).unwrap();
        assert!(node.is_visible());
        assert!(!node.aria_hidden());

        assert!(page.set_section_shown(Section::Writing, false));
        let node = page.section_node(Section::Writing).unwrap();
        assert!(!node.is_visible());
        assert!(node.aria_hidden());
        assert!(page.aria_consistent());
    }

    #[test]
    fn test_missing_containers_report_false() {
        let mut page = Page::without_main();
        assert!(!page.set_main_shown(true));

        let mut page = Page::with_sections(&[Section::Standup]);
        assert!(!page.set_section_shown(Section::Branding, true));
        assert!(page.set_section_shown(Section::Standup, true));
    }

    #[test]
    fn test_trail_follows_destination() {
        let mut page = Page::standard();
        page.set_trail(Some(Section::Corporates));
        assert_eq!(page.breadcrumb(), ["Home", "Corporate Services"]);
        page.set_trail(None);
        assert_eq!(page.breadcrumb(), ["Home"]);
    }

    #[test]
    fn test_announcements_overwrite() {
        let mut page = Page::standard();
        page.announce("first");
        page.announce("second");
        assert_eq!(page.announcement(), "second");
    }
}
