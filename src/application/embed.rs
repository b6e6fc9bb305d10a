//! Third-party lead form embed.
//!
//! The form lives in an isolated frame; this crate only points the frame at a
//! fixed URL. Whatever happens inside it (loading, validation, submission) is
//! the provider's business and never surfaces here.

use url::Url;

const LEAD_FORM_SRC: &str =
    "https://tally.so/embed/rjlEaN?alignLeft=1&hideTitle=1&transparentBackground=1";
const LEAD_FORM_TITLE: &str = "Free Audit Form";
const LEAD_FORM_HEIGHT: u32 = 650;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmbedFrame {
    src: &'static str,
    title: &'static str,
    height: u32,
}

impl EmbedFrame {
    pub fn lead_form() -> Self {
        Self {
            src: LEAD_FORM_SRC,
            title: LEAD_FORM_TITLE,
            height: LEAD_FORM_HEIGHT,
        }
    }

    pub fn src(&self) -> &'static str {
        self.src
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn url(&self) -> Result<Url, url::ParseError> {
        Url::parse(self.src)
    }
}

/// Contract of the provider's script object, published on `window` by the
/// provider's own loader when (and only when) that loader is present.
///
/// Calling `operation` re-scans the document for embed placeholders. The page
/// render never calls it; it is invoked only after a partial re-inserts the
/// contact section, and always behind an existence check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmbedRefresh {
    global: &'static str,
    operation: &'static str,
}

impl EmbedRefresh {
    pub const TALLY: EmbedRefresh = EmbedRefresh {
        global: "Tally",
        operation: "loadEmbeds",
    };

    pub fn global(&self) -> &'static str {
        self.global
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Script that invokes the refresh only if the global and its operation exist.
    pub fn guarded_script(&self) -> String {
        format!(
            "(function() {{ var api = window[{global:?}]; if (api && typeof api[{op:?}] === 'function') {{ api[{op:?}](); }} }})();",
            global = self.global,
            op = self.operation,
        )
    }
}

/// Guarded refresh script for an optional capability.
pub fn refresh_script(capability: Option<&EmbedRefresh>) -> Option<String> {
    capability.map(EmbedRefresh::guarded_script)
}
