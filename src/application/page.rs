//! Page assembly: section order, navigation state, and the derived year.

use askama::Template;
use tracing::debug;

use crate::application::clock::Clock;
use crate::application::embed::EmbedFrame;
use crate::domain::{
    anchors::Anchor,
    content::{
        BRAND, CONTACT, CONTACT_BENEFITS, FOOTER_LINKS, HERO_CHIPS, HERO_METRICS, NAV_LINKS,
        PROBLEMS, PROCESS_STEPS, SERVICES,
    },
    state::NavState,
};
use crate::presentation::{
    primitives::{Markup, glow_background},
    sections,
    views::{LandingTemplate, PageMetaView, TemplateRenderError},
};

const SOURCE: &str = "application::page::LandingPage";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Navigation,
    Hero,
    Problems,
    Services,
    Process,
    Contact,
    Footer,
}

/// Document order of the page sections.
pub const SECTION_ORDER: [Section; 7] = [
    Section::Navigation,
    Section::Hero,
    Section::Problems,
    Section::Services,
    Section::Process,
    Section::Contact,
    Section::Footer,
];

/// One render pass of the landing page.
///
/// Owns the mobile navigation state and the copyright year. The year is read
/// from the clock once, in [`LandingPage::assemble`], and reused by every
/// render of this value.
#[derive(Clone, Debug)]
pub struct LandingPage {
    nav: NavState,
    year: i32,
    frame: EmbedFrame,
    client_script_url: Option<String>,
}

impl LandingPage {
    /// The whole document is the `top` anchor.
    pub const TOP_ANCHOR: Anchor = Anchor::Top;

    pub fn assemble(clock: &dyn Clock) -> Self {
        Self {
            nav: NavState::default(),
            year: clock.current_year(),
            frame: EmbedFrame::lead_form(),
            client_script_url: None,
        }
    }

    pub fn with_nav(mut self, nav: NavState) -> Self {
        self.nav = nav;
        self
    }

    /// Include the datastar client bundle so toggles patch the header in place.
    pub fn with_client_script(mut self, url: Option<String>) -> Self {
        self.client_script_url = url;
        self
    }

    pub fn nav(&self) -> NavState {
        self.nav
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn render_section(&self, section: Section) -> askama::Result<Markup> {
        match section {
            Section::Navigation => sections::navigation(&BRAND, NAV_LINKS, self.nav),
            Section::Hero => sections::hero(&BRAND, HERO_CHIPS, HERO_METRICS),
            Section::Problems => sections::problems(PROBLEMS),
            Section::Services => sections::services(SERVICES),
            Section::Process => sections::process(PROCESS_STEPS),
            Section::Contact => sections::contact(CONTACT_BENEFITS, &self.frame),
            Section::Footer => sections::footer(&BRAND, FOOTER_LINKS, &CONTACT, self.year),
        }
    }

    /// Render the full document.
    pub fn render(&self) -> Result<String, TemplateRenderError> {
        debug!(
            target = "autoscale::page",
            mobile_nav_open = self.nav.is_open(),
            year = self.year,
            "assembling landing page"
        );

        let sections = SECTION_ORDER
            .iter()
            .map(|section| self.render_section(*section))
            .collect::<askama::Result<Vec<_>>>()
            .map_err(render_error)?;

        LandingTemplate {
            meta: PageMetaView {
                title: format!("{} | {}", BRAND.name, BRAND.tagline),
                description: "AI integration, workflow automation, and operational systems designed to eliminate manual work and accelerate growth.".to_string(),
            },
            top_anchor: Self::TOP_ANCHOR.id(),
            client_script_url: self.client_script_url.clone(),
            background: glow_background().map_err(render_error)?,
            sections,
        }
        .render()
        .map_err(render_error)
    }

    /// Render only the navigation header, for in-place patches.
    pub fn render_header(&self) -> Result<String, TemplateRenderError> {
        self.render_fragment(Section::Navigation)
    }

    /// Render only the contact section, for in-place patches.
    pub fn render_contact(&self) -> Result<String, TemplateRenderError> {
        self.render_fragment(Section::Contact)
    }

    fn render_fragment(&self, section: Section) -> Result<String, TemplateRenderError> {
        self.render_section(section)
            .map(Markup::into_string)
            .map_err(render_error)
    }
}

fn render_error(err: askama::Error) -> TemplateRenderError {
    TemplateRenderError::new(SOURCE, "Template rendering failed", err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::clock::FixedClock;

    /// Anchors targeted by call-to-action controls outside the navigation tables.
    const CTA_TARGETS: [Anchor; 2] = [Anchor::Contact, Anchor::Services];

    fn page() -> LandingPage {
        LandingPage::assemble(&FixedClock::new(2031).expect("valid year"))
    }

    /// Every anchor referenced by a navigation link or call-to-action control.
    fn linked_anchors() -> Vec<Anchor> {
        let mut anchors: Vec<Anchor> = NAV_LINKS
            .iter()
            .chain(FOOTER_LINKS)
            .map(|link| link.target)
            .chain(CTA_TARGETS)
            .collect();
        anchors.sort();
        anchors.dedup();
        anchors
    }

    /// Number of elements carrying `id="<id>"`.
    fn id_count(html: &str, id: &str) -> usize {
        html.matches(&format!(r#"id="{id}""#)).count()
    }

    /// Every `#fragment` target referenced from an `href` attribute.
    fn referenced_fragments(html: &str) -> Vec<String> {
        let mut fragments = Vec::new();
        for prefix in [r##"href="#"##, r##"href="/#"##] {
            for (start, _) in html.match_indices(prefix) {
                let rest = &html[start + prefix.len()..];
                let end = rest.find('"').expect("closing quote");
                fragments.push(rest[..end].to_string());
            }
        }
        fragments
    }

    #[test]
    fn every_linked_anchor_exists_exactly_once() {
        for nav in [NavState::CLOSED, NavState::OPEN] {
            let html = page().with_nav(nav).render().expect("render page");
            for anchor in linked_anchors() {
                assert_eq!(id_count(&html, anchor.id()), 1, "anchor #{anchor}");
            }
            for fragment in referenced_fragments(&html) {
                assert_eq!(id_count(&html, &fragment), 1, "href target #{fragment}");
            }
        }
    }

    #[test]
    fn sections_follow_document_order() {
        let html = page().render().expect("render page");
        let markers = [
            r#"id="site-header""#,
            "We Build Automation Systems",
            r#"id="about""#,
            r#"id="services""#,
            r#"id="process""#,
            r#"id="contact""#,
            "<footer",
        ];
        let positions: Vec<_> = markers
            .iter()
            .map(|marker| html.find(marker).expect("section rendered"))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn stacked_menu_mirrors_nav_state() {
        let closed = page().render_header().expect("render header");
        assert!(!closed.contains(r#"id="mobile-menu""#));
        assert!(closed.contains(r#"href="/?menu=open""#));

        let open_page = page().with_nav(NavState::OPEN);
        assert!(open_page.nav().is_open());
        let open = open_page.render_header().expect("render header");
        assert!(open.contains(r#"id="mobile-menu""#));
        assert!(open.contains(r#"href="/?menu=closed""#));
    }

    #[test]
    fn year_is_cached_for_the_render() {
        let page = page();
        let first = page.render().expect("first render");
        let second = page.render().expect("second render");
        assert_eq!(page.year(), 2031);
        assert_eq!(first, second);
        assert!(first.contains("2031"));
    }

    #[test]
    fn frame_is_rendered_for_every_state() {
        for nav in [NavState::CLOSED, NavState::OPEN] {
            let html = page().with_nav(nav).render().expect("render page");
            assert_eq!(html.matches("<iframe").count(), 1);
            assert!(html.contains("https://tally.so/embed/rjlEaN"));
        }
    }

    #[test]
    fn client_script_is_optional() {
        let plain = page().render().expect("render page");
        assert!(!plain.contains("<script"));

        let enhanced = page()
            .with_client_script(Some("/static/datastar.js".to_string()))
            .render()
            .expect("render page");
        assert!(enhanced.contains(r#"<script type="module" src="/static/datastar.js">"#));
    }
}
