//! A personal finance dashboard.
//!
//! The dashboard fetches the user's transactions and balance from a finance
//! API once at start-up, formats the amounts and dates for the configured
//! locale, and serves them as an HTML page with summary cards and a table.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::response::{IntoResponse, Response};
use axum_server::Handle;
use tokio::signal;

mod api;
mod app_state;
mod balance;
mod dashboard;
mod endpoints;
mod format;
mod html;
mod internal_server_error;
mod locale;
mod logging;
mod navigation;
mod not_found;
mod routing;
mod timezone;
mod transaction;

pub use api::{ApiClient, TransactionSource, TransactionsResponse};
pub use app_state::AppState;
pub use balance::{Balance, BalanceFigures};
pub use dashboard::{DashboardFormatters, DashboardLoader, DashboardState, LoadState};
pub use format::{CurrencyFormatter, DateFormatter, LocaleFormatter};
pub use locale::Locale;
pub use logging::logging_middleware;
pub use routing::build_router;
pub use timezone::{get_timezone, offset_at, resolve_timezone};
pub use transaction::{Amount, Category, Transaction, TransactionKind};

use crate::internal_server_error::InternalServerError;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request to the finance API could not be sent or its body could not
    /// be read.
    ///
    /// The string is the underlying transport error.
    #[error("could not reach the finance API: {0}")]
    Request(String),

    /// The finance API answered with a non-success status code.
    #[error("the finance API responded with status {0}")]
    UnexpectedStatus(u16),

    /// The finance API response body was not the expected JSON document.
    #[error("could not decode the finance API response: {0}")]
    InvalidResponse(String),

    /// A balance figure was not a decimal number.
    #[error("\"{0}\" is not a valid balance amount")]
    InvalidBalance(String),

    /// A transaction value was negative, NaN or infinite.
    #[error("{0} is not a valid transaction amount")]
    InvalidAmount(f64),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),

    /// The grouping separator could not be used to build a number formatter.
    #[error("invalid grouping separator '{0}'")]
    InvalidSeparator(char),

    /// Could not acquire the lock on the dashboard state.
    #[error("could not acquire the dashboard lock")]
    DashboardLockError,
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            Error::InvalidResponse(value.to_string())
        } else if let Some(status) = value.status() {
            Error::UnexpectedStatus(status.as_u16())
        } else {
            Error::Request(value.to_string())
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::DashboardLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}
