//! The page's only interactive state.

use serde::{Deserialize, Serialize};

/// Whether the stacked mobile navigation menu is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavState {
    mobile_open: bool,
}

impl NavState {
    pub const CLOSED: NavState = NavState { mobile_open: false };
    pub const OPEN: NavState = NavState { mobile_open: true };

    pub fn from_open(mobile_open: bool) -> Self {
        Self { mobile_open }
    }

    pub fn is_open(self) -> bool {
        self.mobile_open
    }

    /// State the toggle control would produce if activated now.
    pub fn toggled(self) -> Self {
        Self {
            mobile_open: !self.mobile_open,
        }
    }

    /// Parse a `menu` query value. Anything but `open` means closed.
    pub fn from_query(value: Option<&str>) -> Self {
        Self::from_open(matches!(value.map(str::trim), Some("open")))
    }

    /// Query value understood by the page and partial routes.
    pub fn as_query(self) -> &'static str {
        if self.mobile_open { "open" } else { "closed" }
    }
}
