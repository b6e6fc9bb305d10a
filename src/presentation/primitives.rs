//! Presentational primitives.
//!
//! Each primitive takes explicit inputs and returns self-contained [`Markup`].
//! None of them knows about content tables, navigation state, or the layout
//! it ends up in.

use std::fmt;

use askama::Template;

use crate::domain::{anchors::Anchor, icons::Icon};

/// Pre-rendered HTML, embedded by parent templates with `|safe`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    /// Escape plain text so it can be passed where child markup is expected.
    pub fn text(value: &str) -> askama::Result<Self> {
        TextTemplate { value }.render().map(Markup)
    }

    pub fn concat<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = Markup>,
    {
        Markup(parts.into_iter().map(|part| part.0).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub(crate) fn from_rendered(html: String) -> Self {
        Markup(html)
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Template)]
#[template(source = "{{ value }}", ext = "html")]
struct TextTemplate<'a> {
    value: &'a str,
}

/// Pass-through presentation attribute for a call-to-action control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attr {
    pub name: &'static str,
    pub value: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Dark,
}

const BUTTON_BASE_CLASS: &str = "inline-flex items-center justify-center whitespace-nowrap rounded-2xl px-5 py-3 text-sm sm:text-base font-semibold transition shadow-sm";

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-cyan-500 text-white hover:bg-cyan-600",
            ButtonVariant::Outline => {
                "border border-slate-200 bg-white text-slate-900 hover:bg-slate-50"
            }
            ButtonVariant::Dark => "bg-slate-900 text-white hover:bg-slate-800",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ButtonOptions {
    class: Option<&'static str>,
    href: Option<String>,
    attrs: Vec<Attr>,
}

impl ButtonOptions {
    /// Navigate to an anchor of the current document.
    pub fn to(anchor: Anchor) -> Self {
        Self::default().href(anchor.href())
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push(Attr {
            name,
            value: value.into(),
        });
        self
    }
}

#[derive(Template)]
#[template(path = "primitives/button.html")]
struct ButtonTemplate<'a> {
    content: &'a Markup,
    classes: String,
    href: Option<&'a str>,
    attrs: &'a [Attr],
}

/// Call-to-action control. Renders a link when a target is set, a button otherwise.
pub fn button(
    content: Markup,
    variant: ButtonVariant,
    options: ButtonOptions,
) -> askama::Result<Markup> {
    let mut classes = format!("{BUTTON_BASE_CLASS} {}", variant.class());
    if let Some(extra) = options.class.filter(|extra| !extra.is_empty()) {
        classes.push(' ');
        classes.push_str(extra);
    }

    ButtonTemplate {
        content: &content,
        classes,
        href: options.href.as_deref(),
        attrs: &options.attrs,
    }
    .render()
    .map(Markup)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PillTone {
    /// Category label above section headings.
    Accent,
    /// Statistic label on problem cards.
    Dark,
}

impl PillTone {
    fn class(self) -> &'static str {
        match self {
            PillTone::Accent => {
                "inline-flex items-center rounded-full bg-cyan-600 px-3 py-1 text-xs font-semibold text-white"
            }
            PillTone::Dark => {
                "inline-flex items-center rounded-full bg-slate-900 px-3 py-1 text-xs font-medium text-white shadow-sm"
            }
        }
    }
}

#[derive(Template)]
#[template(source = r#"<span class="{{ class }}">{{ content|safe }}</span>"#, ext = "html")]
struct PillTemplate<'a> {
    class: &'static str,
    content: &'a Markup,
}

pub fn pill(content: Markup, tone: PillTone) -> askama::Result<Markup> {
    PillTemplate {
        class: tone.class(),
        content: &content,
    }
    .render()
    .map(Markup)
}

#[derive(Template)]
#[template(
    source = r#"<div class="{{ class }}">{{ content|safe }}</div>"#,
    ext = "html"
)]
struct CardTemplate<'a> {
    class: String,
    content: &'a Markup,
}

const CARD_CLASS: &str = "rounded-[28px] border border-slate-200 bg-white shadow-sm";

/// Bordered, shadowed container with rounded corners.
pub fn card(content: Markup, extra_class: Option<&str>) -> askama::Result<Markup> {
    let class = match extra_class.filter(|extra| !extra.is_empty()) {
        Some(extra) => format!("{CARD_CLASS} {extra}"),
        None => CARD_CLASS.to_string(),
    };

    CardTemplate {
        class,
        content: &content,
    }
    .render()
    .map(Markup)
}

#[derive(Template)]
#[template(path = "primitives/section_heading.html")]
struct SectionHeadingTemplate<'a> {
    kicker: Option<Markup>,
    title: &'a str,
    subtitle: Option<&'a str>,
}

pub fn section_heading(
    kicker: Option<&str>,
    title: &str,
    subtitle: Option<&str>,
) -> askama::Result<Markup> {
    let kicker = match kicker {
        Some(label) => Some(pill(Markup::text(label)?, PillTone::Accent)?),
        None => None,
    };

    SectionHeadingTemplate {
        kicker,
        title,
        subtitle,
    }
    .render()
    .map(Markup)
}

#[derive(Template)]
#[template(path = "primitives/glow_background.html")]
struct GlowBackgroundTemplate;

/// Grid lines and soft glows behind all content; never intercepts pointer events.
pub fn glow_background() -> askama::Result<Markup> {
    GlowBackgroundTemplate.render().map(Markup)
}

#[derive(Template)]
#[template(
    source = r#"<div class="relative grid h-10 w-10 place-items-center rounded-2xl bg-cyan-500/10 ring-1 ring-cyan-500/20">{{ icon|safe }}</div>"#,
    ext = "html"
)]
struct BrandMarkTemplate {
    icon: Markup,
}

pub fn brand_mark() -> askama::Result<Markup> {
    BrandMarkTemplate {
        icon: icon(Icon::Sparkles, "h-5 w-5 text-cyan-600")?,
    }
    .render()
    .map(Markup)
}

#[derive(Template)]
#[template(
    source = r#"<span class="{{ class }}" data-icon="{{ name }}" aria-hidden="true"></span>"#,
    ext = "html"
)]
struct IconTemplate<'a> {
    class: &'a str,
    name: &'static str,
}

/// Placeholder resolved by the icon set; the page only names the symbol.
pub fn icon(icon: Icon, class: &str) -> askama::Result<Markup> {
    IconTemplate {
        class,
        name: icon.name(),
    }
    .render()
    .map(Markup)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_escaped() {
        let markup = Markup::text("<b>Tom & Jerry</b>").expect("render text");
        assert!(!markup.as_str().contains("<b>"));
        assert!(!markup.as_str().contains("Tom & Jerry"));
        assert!(markup.as_str().contains("Tom &#38; Jerry"));
    }

    #[test]
    fn button_without_target_is_a_button() {
        let html = button(
            Markup::text("Go").unwrap(),
            ButtonVariant::Dark,
            ButtonOptions::default(),
        )
        .unwrap();
        assert!(html.as_str().starts_with("<button type=\"button\""));
        assert!(html.as_str().contains(ButtonVariant::Dark.class()));
        assert!(html.as_str().ends_with("Go</button>"));
    }

    #[test]
    fn button_with_target_links_to_anchor() {
        let html = button(
            Markup::text("Book").unwrap(),
            ButtonVariant::Primary,
            ButtonOptions::to(Anchor::Contact).class("w-full"),
        )
        .unwrap();
        assert!(html.as_str().starts_with("<a href=\"#contact\""));
        assert!(html.as_str().contains("hover:bg-cyan-600 w-full"));
    }

    #[test]
    fn button_passes_attributes_through() {
        let html = button(
            Markup::text("Menu").unwrap(),
            ButtonVariant::Outline,
            ButtonOptions::default().attr("aria-label", "Toggle menu"),
        )
        .unwrap();
        assert!(html.as_str().contains(r#"aria-label="Toggle menu""#));
        assert!(html.as_str().contains(ButtonVariant::Outline.class()));
    }

    #[test]
    fn pill_renders_stat_label() {
        let html = pill(Markup::text("3+ hours daily").unwrap(), PillTone::Dark).unwrap();
        insta::assert_snapshot!(html.as_str(), @r#"<span class="inline-flex items-center rounded-full bg-slate-900 px-3 py-1 text-xs font-medium text-white shadow-sm">3+ hours daily</span>"#);
    }

    #[test]
    fn card_appends_extra_class() {
        let html = card(Markup::text("x").unwrap(), Some("group")).unwrap();
        assert!(html.as_str().contains(&format!("{CARD_CLASS} group")));
        let plain = card(Markup::text("x").unwrap(), None).unwrap();
        assert!(plain.as_str().contains(&format!("class=\"{CARD_CLASS}\"")));
    }

    #[test]
    fn heading_omits_missing_kicker_and_subtitle() {
        let html = section_heading(None, "Only a title", None).unwrap();
        assert!(html.as_str().contains("Only a title"));
        assert!(!html.as_str().contains("bg-cyan-600"));
        assert!(!html.as_str().contains("<p"));

        let full = section_heading(Some("Kicker"), "Title", Some("Sub")).unwrap();
        assert!(full.as_str().contains("Kicker"));
        assert!(full.as_str().contains("<p"));
    }

    #[test]
    fn glow_background_ignores_pointer_events() {
        let html = glow_background().unwrap();
        assert!(html.as_str().contains("pointer-events-none"));
        assert!(html.as_str().contains("aria-hidden=\"true\""));
    }

    #[test]
    fn icon_names_symbol() {
        let html = icon(Icon::CheckCircle, "h-5 w-5").unwrap();
        assert!(html.as_str().contains("data-icon=\"check-circle-2\""));
    }
}
