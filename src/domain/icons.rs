/// Symbol references resolved by the external icon set.
///
/// The page only emits the symbol name; drawing it is the icon set's job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    ArrowRight,
    Bot,
    Brain,
    CheckCircle,
    Cog,
    LayoutGrid,
    Link,
    Menu,
    ShieldCheck,
    Sparkles,
    Users,
    Close,
}

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Icon::ArrowRight => "arrow-right",
            Icon::Bot => "bot",
            Icon::Brain => "brain",
            Icon::CheckCircle => "check-circle-2",
            Icon::Cog => "cog",
            Icon::LayoutGrid => "layout-grid",
            Icon::Link => "link",
            Icon::Menu => "menu",
            Icon::ShieldCheck => "shield-check",
            Icon::Sparkles => "sparkles",
            Icon::Users => "users",
            Icon::Close => "x",
        }
    }
}
