//! The client for the finance API that owns the user's transactions.

use std::{future::Future, time::Duration};

use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

use crate::{Error, balance::Balance, transaction::Transaction};

/// The path, relative to the API base URL, of the transaction listing.
const TRANSACTIONS_PATH: &str = "/transactions";

/// How long to wait for the finance API before giving up on a request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The body of `GET /transactions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionsResponse {
    /// Every transaction, in the order the API chose.
    pub transactions: Vec<Transaction>,
    /// The balance summary over all transactions.
    pub balance: Balance,
}

/// Somewhere the dashboard can get its transactions from.
pub trait TransactionSource: Send + Sync + 'static {
    /// Fetch the transaction list and balance summary.
    fn fetch_transactions(
        &self,
    ) -> impl Future<Output = Result<TransactionsResponse, Error>> + Send;
}

/// HTTP client for the finance API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: HttpClient,
    base_url: String,
    api_token: Option<String>,
}

impl ApiClient {
    /// Create a client for the API served at `base_url`, e.g.
    /// "http://localhost:3333".
    ///
    /// If `api_token` is set it is sent as a bearer token with every request.
    /// Requests time out after [DEFAULT_REQUEST_TIMEOUT].
    ///
    /// # Errors
    /// Returns [Error::Request] if the HTTP client could not be built.
    pub fn new(base_url: &str, api_token: Option<String>) -> Result<Self, Error> {
        Self::with_timeout(base_url, api_token, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Like [ApiClient::new], but requests that take longer than `timeout`
    /// fail with [Error::Request].
    ///
    /// # Errors
    /// Returns [Error::Request] if the HTTP client could not be built.
    pub fn with_timeout(
        base_url: &str,
        api_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, Error> {
        let http_client = HttpClient::builder()
            .timeout(timeout)
            .build()
            .inspect_err(|error| tracing::error!("could not build the HTTP client: {error}"))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_token,
        })
    }

    fn transactions_url(&self) -> String {
        format!("{}{}", self.base_url, TRANSACTIONS_PATH)
    }
}

impl TransactionSource for ApiClient {
    async fn fetch_transactions(&self) -> Result<TransactionsResponse, Error> {
        let url = self.transactions_url();
        tracing::debug!("Fetching transactions from {url}");

        let mut request = self.http_client.get(&url);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .inspect_err(|error| tracing::error!("could not send request to {url}: {error}"))?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("{url} responded with status {status}");
            return Err(Error::UnexpectedStatus(status.as_u16()));
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|error| {
            tracing::error!("could not decode response from {url}: {error}");
            Error::InvalidResponse(error.to_string())
        })
    }
}
