//! Section composers: one content table in, one page section out.

use askama::Template;

use crate::application::embed::EmbedFrame;
use crate::domain::{
    anchors::Anchor,
    content::{Brand, ContactDetails, HeroMetric, NavLink, ProblemEntry, ProcessStep, ServiceEntry},
    icons::Icon,
    state::NavState,
};

use super::primitives::{
    ButtonOptions, ButtonVariant, Markup, PillTone, brand_mark, button, card, icon, pill,
    section_heading,
};

/// Fill of the problem-card progress bars. Decorative; unrelated to the statistic.
pub const PROBLEM_PROGRESS_PERCENT: u8 = 70;
/// Fill of the hero "System Health" bar.
pub const SYSTEM_HEALTH_PERCENT: u8 = 82;

pub const NAV_PARTIAL_PATH: &str = "/ui/nav";
pub const CONTACT_PARTIAL_PATH: &str = "/ui/contact";
pub const HEADER_ELEMENT_ID: &str = "site-header";
pub const MOBILE_MENU_ID: &str = "mobile-menu";

const AUDIT_CTA_LABEL: &str = "Book Free Audit";

/// A content table entry tagged with the table it came from.
#[derive(Clone, Copy, Debug)]
pub enum ContentRecord<'a> {
    Problem(&'a ProblemEntry),
    Service(&'a ServiceEntry),
    Step(&'a ProcessStep),
}

impl<'a> From<&'a ProblemEntry> for ContentRecord<'a> {
    fn from(entry: &'a ProblemEntry) -> Self {
        ContentRecord::Problem(entry)
    }
}

impl<'a> From<&'a ServiceEntry> for ContentRecord<'a> {
    fn from(entry: &'a ServiceEntry) -> Self {
        ContentRecord::Service(entry)
    }
}

impl<'a> From<&'a ProcessStep> for ContentRecord<'a> {
    fn from(step: &'a ProcessStep) -> Self {
        ContentRecord::Step(step)
    }
}

#[derive(Template)]
#[template(path = "sections/problem_block.html")]
struct ProblemBlockTemplate<'a> {
    entry: &'a ProblemEntry,
    icon: Markup,
    stat: Markup,
    progress: u8,
}

#[derive(Template)]
#[template(path = "sections/service_block.html")]
struct ServiceBlockTemplate<'a> {
    entry: &'a ServiceEntry,
    icon: Markup,
    check: Markup,
}

#[derive(Template)]
#[template(path = "sections/step_block.html")]
struct StepBlockTemplate<'a> {
    step: &'a ProcessStep,
    icon: Markup,
}

/// Render one table entry into its content block.
pub fn render_record(record: ContentRecord<'_>) -> askama::Result<Markup> {
    match record {
        ContentRecord::Problem(entry) => {
            let body = ProblemBlockTemplate {
                entry,
                icon: icon(entry.icon, "h-6 w-6 text-slate-900")?,
                stat: pill(Markup::text(entry.stat)?, PillTone::Dark)?,
                progress: PROBLEM_PROGRESS_PERCENT,
            }
            .render()?;
            card(Markup::from_rendered(body), None)
        }
        ContentRecord::Service(entry) => {
            let body = ServiceBlockTemplate {
                entry,
                icon: icon(entry.icon, "h-6 w-6 text-cyan-700")?,
                check: icon(Icon::CheckCircle, "mt-0.5 h-5 w-5 text-cyan-600")?,
            }
            .render()?;
            card(Markup::from_rendered(body), Some("group"))
        }
        ContentRecord::Step(step) => {
            let body = StepBlockTemplate {
                step,
                icon: icon(step.icon, "h-7 w-7 text-cyan-700")?,
            }
            .render()?;
            card(Markup::from_rendered(body), None)
        }
    }
}

/// Render a whole table, one block per entry, in declared order.
pub fn render_table<'a, E>(entries: &'a [E]) -> askama::Result<Vec<Markup>>
where
    &'a E: Into<ContentRecord<'a>>,
{
    entries
        .iter()
        .map(|entry| render_record(entry.into()))
        .collect()
}

#[derive(Template)]
#[template(path = "sections/hero.html")]
struct HeroTemplate {
    descriptor: &'static str,
    sparkles: Markup,
    primary_cta: Markup,
    secondary_cta: Markup,
    chips: &'static [&'static str],
    check: Markup,
    metrics: &'static [HeroMetric],
    bot: Markup,
    health_percent: u8,
}

pub fn hero(
    brand: &Brand,
    chips: &'static [&'static str],
    metrics: &'static [HeroMetric],
) -> askama::Result<Markup> {
    let primary_label = Markup::concat([
        Markup::text("Book a Free Automation Audit")?,
        icon(Icon::ArrowRight, "ml-2 h-5 w-5")?,
    ]);
    let primary_cta = button(
        primary_label,
        ButtonVariant::Primary,
        ButtonOptions::to(Anchor::Contact).class("px-6 py-6"),
    )?;
    let secondary_cta = button(
        Markup::text("See Our Services")?,
        ButtonVariant::Outline,
        ButtonOptions::to(Anchor::Services).class("px-6 py-6"),
    )?;

    HeroTemplate {
        descriptor: brand.descriptor,
        sparkles: icon(Icon::Sparkles, "h-4 w-4 text-cyan-600")?,
        primary_cta,
        secondary_cta,
        chips,
        check: icon(Icon::CheckCircle, "h-5 w-5 text-cyan-600")?,
        metrics,
        bot: icon(Icon::Bot, "h-6 w-6 text-cyan-600")?,
        health_percent: SYSTEM_HEALTH_PERCENT,
    }
    .render()
    .map(Markup::from_rendered)
}

#[derive(Template)]
#[template(path = "sections/grid_section.html")]
struct GridSectionTemplate {
    anchor: Anchor,
    heading: Markup,
    grid_class: &'static str,
    blocks: Vec<Markup>,
    trailer: Option<Markup>,
}

pub fn problems(entries: &[ProblemEntry]) -> askama::Result<Markup> {
    GridSectionTemplate {
        anchor: Anchor::About,
        heading: section_heading(
            Some("Why it feels hard"),
            "The Problems Holding You Back",
            Some("Most businesses are stuck in operational chaos. We fix that."),
        )?,
        grid_class: "grid gap-6 md:grid-cols-2",
        blocks: render_table(entries)?,
        trailer: None,
    }
    .render()
    .map(Markup::from_rendered)
}

#[derive(Template)]
#[template(path = "sections/services_banner.html")]
struct ServicesBannerTemplate {
    cta: Markup,
}

pub fn services(entries: &[ServiceEntry]) -> askama::Result<Markup> {
    let banner = ServicesBannerTemplate {
        cta: button(
            Markup::text("Book Your Free Automation Audit")?,
            ButtonVariant::Primary,
            ButtonOptions::to(Anchor::Contact).class("px-6 py-6"),
        )?,
    }
    .render()?;

    GridSectionTemplate {
        anchor: Anchor::Services,
        heading: section_heading(
            Some("What we do"),
            "Transform Your Operations",
            Some("Four core services designed to eliminate manual work and accelerate growth."),
        )?,
        grid_class: "grid gap-6 md:grid-cols-2",
        blocks: render_table(entries)?,
        trailer: Some(Markup::from_rendered(banner)),
    }
    .render()
    .map(Markup::from_rendered)
}

pub fn process(steps: &[ProcessStep]) -> askama::Result<Markup> {
    GridSectionTemplate {
        anchor: Anchor::Process,
        heading: section_heading(
            Some("How it works"),
            "How We Transform Your Business",
            Some("A proven 3-step process to eliminate manual work and accelerate growth."),
        )?,
        grid_class: "grid gap-6",
        blocks: render_table(steps)?,
        trailer: None,
    }
    .render()
    .map(Markup::from_rendered)
}

pub struct NavLinkView {
    pub label: &'static str,
    pub href: String,
    pub action: Option<String>,
}

pub struct MobileMenuView {
    pub links: Vec<NavLinkView>,
    pub cta: Markup,
}

#[derive(Template)]
#[template(path = "sections/navigation.html")]
struct NavigationTemplate<'a> {
    header_id: &'static str,
    menu_id: &'static str,
    brand: &'a Brand,
    brand_mark: Markup,
    links: Vec<NavLinkView>,
    desktop_cta: Markup,
    open: bool,
    toggle_href: String,
    toggle_action: String,
    toggle_icon: Markup,
    mobile: Option<MobileMenuView>,
}

fn nav_action(state: NavState) -> String {
    format!("@get('{NAV_PARTIAL_PATH}?menu={}')", state.as_query())
}

/// Header with brand, links, and the mobile toggle.
///
/// The stacked menu is rendered only while `state` is open; each of its
/// links both navigates and requests the closed state.
pub fn navigation(brand: &Brand, links: &[NavLink], state: NavState) -> askama::Result<Markup> {
    let desktop_links = links
        .iter()
        .map(|link| NavLinkView {
            label: link.label,
            href: link.target.href(),
            action: None,
        })
        .collect();

    let mobile = if state.is_open() {
        let close = nav_action(NavState::CLOSED);
        let links = links
            .iter()
            .map(|link| NavLinkView {
                label: link.label,
                href: link.target.page_href(),
                action: Some(close.clone()),
            })
            .collect();
        let cta = button(
            Markup::text(AUDIT_CTA_LABEL)?,
            ButtonVariant::Primary,
            ButtonOptions::default()
                .href(Anchor::Contact.page_href())
                .class("w-full")
                .attr("data-on:click", close),
        )?;
        Some(MobileMenuView { links, cta })
    } else {
        None
    };

    let next = state.toggled();
    let toggle_icon = if state.is_open() {
        icon(Icon::Close, "h-6 w-6")?
    } else {
        icon(Icon::Menu, "h-6 w-6")?
    };

    NavigationTemplate {
        header_id: HEADER_ELEMENT_ID,
        menu_id: MOBILE_MENU_ID,
        brand,
        brand_mark: brand_mark()?,
        links: desktop_links,
        desktop_cta: button(
            Markup::text(AUDIT_CTA_LABEL)?,
            ButtonVariant::Primary,
            ButtonOptions::to(Anchor::Contact),
        )?,
        open: state.is_open(),
        toggle_href: format!("/?menu={}", next.as_query()),
        toggle_action: nav_action(next),
        toggle_icon,
        mobile,
    }
    .render()
    .map(Markup::from_rendered)
}

#[derive(Template)]
#[template(path = "sections/contact.html")]
struct ContactTemplate<'a> {
    anchor: Anchor,
    benefits: &'a [&'static str],
    frame: &'a EmbedFrame,
}

/// Benefits list beside the embedded lead form. The frame is always rendered.
pub fn contact(benefits: &[&'static str], frame: &EmbedFrame) -> askama::Result<Markup> {
    ContactTemplate {
        anchor: Anchor::Contact,
        benefits,
        frame,
    }
    .render()
    .map(Markup::from_rendered)
}

#[derive(Template)]
#[template(path = "sections/footer.html")]
struct FooterTemplate<'a> {
    brand: &'a Brand,
    brand_mark: Markup,
    links: &'a [NavLink],
    contact: &'a ContactDetails,
    shield: Markup,
    year: i32,
}

pub fn footer(
    brand: &Brand,
    links: &[NavLink],
    contact: &ContactDetails,
    year: i32,
) -> askama::Result<Markup> {
    FooterTemplate {
        brand,
        brand_mark: brand_mark()?,
        links,
        contact,
        shield: icon(Icon::ShieldCheck, "h-4 w-4")?,
        year,
    }
    .render()
    .map(Markup::from_rendered)
}
