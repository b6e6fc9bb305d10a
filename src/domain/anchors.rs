//! In-page anchor ids shared by sections, navigation links, and call-to-action controls.

use std::fmt;

/// Every navigation target the landing page exposes.
///
/// Sections are tagged with exactly one of these and links may only point at
/// them, so a link to a section that does not exist cannot be written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Anchor {
    Top,
    About,
    Services,
    Process,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 5] = [
        Anchor::Top,
        Anchor::About,
        Anchor::Services,
        Anchor::Process,
        Anchor::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Anchor::Top => "top",
            Anchor::About => "about",
            Anchor::Services => "services",
            Anchor::Process => "process",
            Anchor::Contact => "contact",
        }
    }

    /// Fragment link for navigation within the current document.
    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    /// Link that reloads the page root before jumping to the anchor.
    ///
    /// Used by the stacked mobile menu: the reloaded page carries no menu
    /// state, so following the link also closes the menu.
    pub fn page_href(self) -> String {
        format!("/#{}", self.id())
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = Anchor::ALL.iter().map(|anchor| anchor.id()).collect();
        assert_eq!(ids.len(), Anchor::ALL.len());
    }

    #[test]
    fn hrefs_point_at_ids() {
        assert_eq!(Anchor::Services.href(), "#services");
        assert_eq!(Anchor::Contact.page_href(), "/#contact");
        assert_eq!(Anchor::Top.to_string(), "top");
    }
}
