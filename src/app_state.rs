//! Implements a struct that holds the state of the web server.

use crate::{dashboard::DashboardState, locale::Locale};

/// The state of the web server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The dashboard's load state and display locale.
    pub dashboard: DashboardState,
}

impl AppState {
    /// Create a new [AppState] whose dashboard is waiting for its data.
    ///
    /// Start a [crate::DashboardLoader] with `state.dashboard.load_state` to
    /// fill it in.
    pub fn new(locale: Locale) -> Self {
        Self {
            dashboard: DashboardState::new(locale),
        }
    }
}
