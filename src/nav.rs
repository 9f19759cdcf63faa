//! Client-side routes and the bottom tab bar.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Login,
    Assessment,
    Workstation,
    Jobs,
    Learning,
}

/// Tab bar entries, left to right.
pub const TAB_ROUTES: [Route; 4] = [
    Route::Assessment,
    Route::Workstation,
    Route::Jobs,
    Route::Learning,
];

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Assessment => "/assessment",
            Self::Workstation => "/workstation",
            Self::Jobs => "/jobs",
            Self::Learning => "/learning",
        }
    }

    /// Exact path match; no parameters or query state.
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Self::Login),
            "/assessment" => Some(Self::Assessment),
            "/workstation" => Some(Self::Workstation),
            "/jobs" => Some(Self::Jobs),
            "/learning" => Some(Self::Learning),
            _ => None,
        }
    }

    /// The tab bar hides on the login route.
    pub fn shows_tab_bar(&self) -> bool {
        !matches!(self, Self::Login)
    }

    /// Tab label; login has none.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::Login => None,
            Self::Assessment => Some("评估"),
            Self::Workstation => Some("协同"),
            Self::Jobs => Some("岗位"),
            Self::Learning => Some("学习"),
        }
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::Login
    }
}
