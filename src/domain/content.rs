//! Content tables for the landing page.
//!
//! Every table is a `static` slice built at compile time. Section composers
//! read them in declared order; nothing mutates them.

use std::collections::HashSet;

use super::anchors::Anchor;
use super::error::DomainError;
use super::icons::Icon;

#[derive(Clone, Copy, Debug)]
pub struct Brand {
    pub name: &'static str,
    pub tagline: &'static str,
    pub descriptor: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct ContactDetails {
    pub email: &'static str,
    pub phone_display: &'static str,
    pub phone_dial: &'static str,
}

impl ContactDetails {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone_dial)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: Anchor,
}

#[derive(Clone, Copy, Debug)]
pub struct ProblemEntry {
    pub title: &'static str,
    pub stat: &'static str,
    pub icon: Icon,
    pub body: &'static str,
    pub before: &'static str,
    pub after: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct ServiceEntry {
    pub title: &'static str,
    pub icon: Icon,
    pub body: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Clone, Copy, Debug)]
pub struct ProcessStep {
    pub ordinal: &'static str,
    pub title: &'static str,
    pub icon: Icon,
    pub body: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct HeroMetric {
    pub label: &'static str,
    pub value: &'static str,
}

pub const BRAND: Brand = Brand {
    name: "AutoScale Systems",
    tagline: "Stop Hiring. Start Automating.",
    descriptor: "AI-Powered Automation",
};

pub const CONTACT: ContactDetails = ContactDetails {
    email: "hello@autoscalesystems.io",
    phone_display: "+44 203 488 6864",
    phone_dial: "+442034886864",
};

pub static NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Home",
        target: Anchor::Top,
    },
    NavLink {
        label: "Services",
        target: Anchor::Services,
    },
    NavLink {
        label: "Process",
        target: Anchor::Process,
    },
    NavLink {
        label: "Contact",
        target: Anchor::Contact,
    },
];

/// Fixed shortcuts in the footer "Company" column.
pub static FOOTER_LINKS: &[NavLink] = &[
    NavLink {
        label: "Home",
        target: Anchor::Top,
    },
    NavLink {
        label: "Services",
        target: Anchor::Services,
    },
    NavLink {
        label: "Process",
        target: Anchor::Process,
    },
];

pub static PROBLEMS: &[ProblemEntry] = &[
    ProblemEntry {
        title: "Too Much Manual Admin",
        stat: "40% time wasted",
        icon: Icon::Users,
        body: "Your team spends hours on repetitive tasks that can be automated.",
        before: "Manual data entry",
        after: "Automated workflows",
    },
    ProblemEntry {
        title: "Disconnected Systems",
        stat: "3+ hours daily",
        icon: Icon::Link,
        body: "Your CRM doesn\u{2019}t talk to your accounting tools. Nothing syncs properly.",
        before: "Copy-paste chaos",
        after: "Unified systems",
    },
    ProblemEntry {
        title: "Slow Operations",
        stat: "72hr response time",
        icon: Icon::LayoutGrid,
        body: "Simple tasks take days. Customers wait. Growth is bottlenecked.",
        before: "Process delays",
        after: "Instant automation",
    },
    ProblemEntry {
        title: "Hiring Instead of Automating",
        stat: "$50k+ per role",
        icon: Icon::Sparkles,
        body: "Adding headcount to handle growth instead of building scalable systems.",
        before: "Linear scaling",
        after: "Exponential systems",
    },
];

pub static SERVICES: &[ServiceEntry] = &[
    ServiceEntry {
        title: "Workflow Automation",
        icon: Icon::Link,
        body: "Eliminate repetitive tasks and connect your tools into seamless workflows.",
        bullets: &[
            "Automate data entry & transfers",
            "Connect apps without code",
            "Reduce errors dramatically",
        ],
    },
    ServiceEntry {
        title: "CRM & Lead Systems",
        icon: Icon::Users,
        body: "Capture, nurture, and convert leads automatically with intelligent follow-ups.",
        bullets: &[
            "Automated lead capture",
            "Smart follow-up sequences",
            "Pipeline optimization",
        ],
    },
    ServiceEntry {
        title: "AI Integration",
        icon: Icon::Brain,
        body: "Deploy AI to handle support, document processing, routing, and more.",
        bullets: &[
            "24/7 AI chat systems",
            "Document automation",
            "Intelligent routing",
        ],
    },
    ServiceEntry {
        title: "System Design",
        icon: Icon::Cog,
        body: "Get a complete operational blueprint designed for scale and efficiency.",
        bullets: &[
            "Process mapping",
            "Automation architecture",
            "Continuous optimization",
        ],
    },
];

pub static PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        ordinal: "01",
        title: "Audit & Strategy",
        icon: Icon::ShieldCheck,
        body: "We analyze your workflows, identify automation opportunities, and create a clear roadmap.",
    },
    ProcessStep {
        ordinal: "02",
        title: "Build & Integrate",
        icon: Icon::Bot,
        body: "We implement automation, connect your tools, and ensure everything runs reliably.",
    },
    ProcessStep {
        ordinal: "03",
        title: "Optimize & Scale",
        icon: Icon::Sparkles,
        body: "We measure ROI, iterate on performance, and help you scale without adding complexity.",
    },
];

pub static HERO_CHIPS: &[&str] = &["Faster ops", "Fewer errors", "More capacity"];

pub static HERO_METRICS: &[HeroMetric] = &[
    HeroMetric {
        label: "Leads followed up",
        value: "+38%",
    },
    HeroMetric {
        label: "Admin time saved",
        value: "~12 hrs",
    },
    HeroMetric {
        label: "Ops response speed",
        value: "2.6\u{d7}",
    },
];

pub static CONTACT_BENEFITS: &[&str] = &[
    "Quick review of your site + offer",
    "3\u{2013}5 high-impact improvements",
    "Automation ideas to increase enquiries",
    "Clear next steps (even if you DIY)",
];

/// Check every table invariant, reporting the first violation found.
pub fn validate_tables() -> Result<(), DomainError> {
    validate_problems(PROBLEMS)?;
    validate_services(SERVICES)?;
    validate_steps(PROCESS_STEPS)?;
    validate_links("nav_links", NAV_LINKS)?;
    validate_links("footer_links", FOOTER_LINKS)?;
    Ok(())
}

pub fn validate_problems(entries: &[ProblemEntry]) -> Result<(), DomainError> {
    for (index, entry) in entries.iter().enumerate() {
        let fields = [
            ("title", entry.title),
            ("stat", entry.stat),
            ("body", entry.body),
            ("before", entry.before),
            ("after", entry.after),
        ];
        for (field, value) in fields {
            require_text("problems", index, field, value)?;
        }
    }
    Ok(())
}

pub fn validate_services(entries: &[ServiceEntry]) -> Result<(), DomainError> {
    for (index, entry) in entries.iter().enumerate() {
        require_text("services", index, "title", entry.title)?;
        require_text("services", index, "body", entry.body)?;
        if entry.bullets.is_empty() {
            return Err(DomainError::invariant(format!(
                "services[{index}] `{}` has no bullets",
                entry.title
            )));
        }
        for bullet in entry.bullets {
            require_text("services", index, "bullets", bullet)?;
        }
    }
    Ok(())
}

pub fn validate_steps(steps: &[ProcessStep]) -> Result<(), DomainError> {
    let mut previous: Option<u32> = None;
    for (index, step) in steps.iter().enumerate() {
        require_text("process_steps", index, "title", step.title)?;
        require_text("process_steps", index, "body", step.body)?;

        let ordinal: u32 = step.ordinal.parse().map_err(|_| {
            DomainError::invariant(format!(
                "process_steps[{index}] ordinal `{}` is not numeric",
                step.ordinal
            ))
        })?;
        if let Some(previous) = previous
            && ordinal <= previous
        {
            return Err(DomainError::invariant(format!(
                "process_steps[{index}] ordinal `{}` does not increase",
                step.ordinal
            )));
        }
        previous = Some(ordinal);
    }
    Ok(())
}

fn validate_links(table: &'static str, links: &[NavLink]) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    for (index, link) in links.iter().enumerate() {
        require_text(table, index, "label", link.label)?;
        if !seen.insert(link.target) {
            return Err(DomainError::invariant(format!(
                "{table}[{index}] repeats target `#{}`",
                link.target
            )));
        }
    }
    Ok(())
}

fn require_text(
    table: &'static str,
    index: usize,
    field: &'static str,
    value: &str,
) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::invariant(format!(
            "{table}[{index}].{field} must not be empty"
        )));
    }
    Ok(())
}
