//! Dashboard HTTP handlers and view rendering.

use std::sync::{Arc, RwLock};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    dashboard::{
        cards::summary_cards,
        load::{DashboardData, LoadState},
        tables::transactions_table,
    },
    endpoints,
    html::{HeadElement, base},
    locale::Locale,
    navigation::NavBar,
};

/// How long the browser waits before reloading a page that is still loading.
const LOADING_REFRESH_SECONDS: u32 = 2;

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The result of the dashboard load, written once by the loader.
    pub load_state: Arc<RwLock<LoadState>>,
    /// The locale used for the page labels.
    pub locale: Locale,
}

impl DashboardState {
    /// Create a dashboard state that is still waiting for its data.
    pub fn new(locale: Locale) -> Self {
        Self {
            load_state: Arc::new(RwLock::new(LoadState::Loading)),
            locale,
        }
    }
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        state.dashboard.clone()
    }
}

/// Display the summary cards and transaction table.
///
/// While the data is loading the page is rendered empty. If loading failed the
/// empty page is rendered with an alert and a 502 status.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let load_state = state
        .load_state
        .read()
        .inspect_err(|error| tracing::error!("could not acquire dashboard lock: {error}"))
        .map_err(|_| Error::DashboardLockError)?;

    let status = match *load_state {
        LoadState::Failed(_) => StatusCode::BAD_GATEWAY,
        LoadState::Loading | LoadState::Loaded(_) => StatusCode::OK,
    };

    Ok((status, dashboard_view(&load_state, state.locale)).into_response())
}

/// Renders the dashboard page for the current load state.
fn dashboard_view(load_state: &LoadState, locale: Locale) -> Markup {
    let labels = locale.labels();
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW).into_html();

    let empty = DashboardData::default();
    let data = match load_state {
        LoadState::Loaded(data) => data,
        LoadState::Loading | LoadState::Failed(_) => &empty,
    };

    let content = html!(
        (nav_bar)

        main class="container"
        {
            (summary_cards(&data.balance, labels))

            @match load_state {
                LoadState::Loading => {
                    p class="status" role="status" { (labels.loading) }
                }
                LoadState::Failed(error) => {
                    div class="status error" role="alert"
                    {
                        strong { (labels.load_failed) }
                        p { (failure_description(error)) }
                    }
                }
                LoadState::Loaded(_) => {}
            }

            (transactions_table(&data.transactions, labels))
        }
    );

    let head_elements = match load_state {
        LoadState::Loading => vec![HeadElement::Refresh(LOADING_REFRESH_SECONDS)],
        LoadState::Loaded(_) | LoadState::Failed(_) => Vec::new(),
    };

    base("Dashboard", locale.language_tag(), &head_elements, &content)
}

/// Explains a load failure without exposing internal details.
fn failure_description(error: &Error) -> String {
    match error {
        Error::Request(_) => "The finance API could not be reached. \
            Check that it is running, then restart the dashboard."
            .to_owned(),
        Error::UnexpectedStatus(status) => {
            format!("The finance API responded with status {status}.")
        }
        Error::InvalidResponse(_) | Error::InvalidBalance(_) | Error::InvalidAmount(_) => {
            "The finance API sent data that could not be read.".to_owned()
        }
        _ => "An unexpected error occurred, check the server logs for more details.".to_owned(),
    }
}
