//! Compiled-in portfolio content.
//!
//! The sub-quadrant items shown inside each section. The set is fixed
//! at build time; action tags are matched by the dispatcher and unknown
//! tags are ignored with a log entry.

use crate::state::Section;

/// One sub-quadrant entry within a section detail view.
///
#[derive(Debug, Clone, Copy)]
pub struct PortfolioItem {
    pub title: &'static str,
    pub detail: &'static str,
    pub action: &'static str,
    pub target: Option<&'static str>,
}

/// Content for one section: tagline plus its portfolio items.
///
#[derive(Debug, Clone, Copy)]
pub struct SectionContent {
    pub section: Section,
    pub tagline: &'static str,
    pub items: &'static [PortfolioItem],
}

const STANDUP_ITEMS: [PortfolioItem; 6] = [
    PortfolioItem {
        title: "Live Show Dates",
        detail: "Upcoming club and theatre dates",
        action: "link",
        target: Some("https://linktr.ee/navinkumar/shows"),
    },
    PortfolioItem {
        title: "Clips & Reels",
        detail: "Crowd work and festival sets",
        action: "link",
        target: Some("https://youtube.com/@navinkumarcomedy"),
    },
    PortfolioItem {
        title: "Press Kit",
        detail: "Bio, photos, and rider",
        action: "pending",
        target: None,
    },
    PortfolioItem {
        title: "Open Mic Workshop",
        detail: "Monthly beginners' session",
        action: "pending",
        target: None,
    },
    PortfolioItem {
        title: "Festival Sets",
        detail: "Highlights from the circuit",
        action: "link",
        target: Some("https://youtube.com/playlist?list=navin-festivals"),
    },
    PortfolioItem {
        title: "Tour Diary",
        detail: "Notes from the road",
        action: "pending",
        target: None,
    },
];

const BRANDING_ITEMS: [PortfolioItem; 5] = [
    PortfolioItem {
        title: "Identity Work",
        detail: "Logos and naming for small studios",
        action: "link",
        target: Some("https://behance.net/navinkumar"),
    },
    PortfolioItem {
        title: "Strategy Decks",
        detail: "Positioning and voice guidelines",
        action: "pending",
        target: None,
    },
    PortfolioItem {
        title: "Client Notes",
        detail: "Selected testimonials",
        action: "pending",
        target: None,
    },
    PortfolioItem {
        title: "Naming Sprints",
        detail: "Two-day product naming workshops",
        action: "pending",
        target: None,
    },
    PortfolioItem {
        title: "Merch & Posters",
        detail: "Show art and print runs",
        action: "pending",
        target: None,
    },
];

const WRITING_ITEMS: [PortfolioItem; 5] = [
    PortfolioItem {
        title: "Essays & Columns",
        detail: "Long-form humour and culture pieces",
        action: "link",
        target: Some("https://medium.com/@navinkumar"),
    },
    PortfolioItem {
        title: "Newsletter",
        detail: "Fortnightly jokes-in-progress",
        action: "link",
        target: Some("https://navinwrites.substack.com"),
    },
    PortfolioItem {
        title: "Sketch Packets",
        detail: "Samples on request",
        action: "pending",
        target: None,
    },
    PortfolioItem {
        title: "Joke Archive",
        detail: "A decade of one-liners, searchable",
        action: "pending",
        target: None,
    },
    PortfolioItem {
        title: "Punch-up Room",
        detail: "Script doctoring for comedy writers",
        action: "pending",
        target: None,
    },
];

const CORPORATE_ITEMS: [PortfolioItem; 5] = [
    PortfolioItem {
        title: "Event Hosting",
        detail: "Conferences, award nights, panels",
        action: "link",
        target: Some("mailto:booking@navinkumar.in"),
    },
    PortfolioItem {
        title: "Comedy Workshops",
        detail: "Improv and storytelling for teams",
        action: "pending",
        target: None,
    },
    PortfolioItem {
        title: "Custom Roasts",
        detail: "Tailored sets for internal events",
        action: "pending",
        target: None,
    },
    PortfolioItem {
        title: "Emcee Reel",
        detail: "Hosting highlights",
        action: "link",
        target: Some("https://youtube.com/@navinkumarcomedy/reel"),
    },
    PortfolioItem {
        title: "Panel Moderation",
        detail: "Keeping Q&As awake since 2019",
        action: "pending",
        target: None,
    },
];

const SECTIONS: [SectionContent; 4] = [
    SectionContent {
        section: Section::Standup,
        tagline: "Stage time, clips, and where to catch a show.",
        items: &STANDUP_ITEMS,
    },
    SectionContent {
        section: Section::Branding,
        tagline: "Identity and voice work for brands that can take a joke.",
        items: &BRANDING_ITEMS,
    },
    SectionContent {
        section: Section::Writing,
        tagline: "Essays, sketches, and a newsletter of works in progress.",
        items: &WRITING_ITEMS,
    },
    SectionContent {
        section: Section::Corporates,
        tagline: "Hosting and workshops for offsites and award nights.",
        items: &CORPORATE_ITEMS,
    },
];

/// Return the full portfolio catalog in display order.
///
pub fn sections() -> &'static [SectionContent] {
    &SECTIONS
}

/// Return the content for one section.
///
pub fn content_for(section: Section) -> &'static SectionContent {
    // SECTIONS carries one entry per Section variant.
    SECTIONS
        .iter()
        .find(|content| content.section == section)
        .expect("catalog covers every section")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_section() {
        for section in Section::ALL {
            let content = content_for(section);
            assert_eq!(content.section, section);
            assert!(!content.items.is_empty());
        }
    }

    #[test]
    fn test_link_items_carry_targets() {
        for content in sections() {
            for item in content.items {
                if item.action == "link" {
                    assert!(item.target.is_some(), "{} has no target", item.title);
                }
            }
        }
    }
}
