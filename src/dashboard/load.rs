//! Loading the dashboard data from the finance API.
//!
//! The data is fetched exactly once by a background task started with
//! [DashboardLoader::spawn]. The task publishes its result with a single write
//! to the shared [LoadState], so readers never see transactions from one
//! response paired with a balance from another.

use std::sync::{Arc, RwLock};

use tokio::task::JoinHandle;

use crate::{
    Error,
    api::{TransactionSource, TransactionsResponse},
    format::{CurrencyFormatter, DateFormatter},
    transaction::{Transaction, TransactionKind},
};

/// A transaction ready to be shown in the dashboard table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRow {
    pub id: String,
    pub title: String,
    pub kind: TransactionKind,
    pub category: String,
    /// The unsigned amount, e.g. "$1,200.00".
    pub formatted_value: String,
    pub formatted_date: String,
}

/// The balance figures ready to be shown on the summary cards.
///
/// Unlike transaction values these keep their sign, so a deficit shows as
/// e.g. "-$200.00".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormattedBalance {
    pub income: String,
    pub outcome: String,
    pub total: String,
}

/// Everything the dashboard displays once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardData {
    /// The rows in the order the API returned them.
    pub transactions: Vec<TransactionRow>,
    pub balance: FormattedBalance,
}

/// The progress of the one-off dashboard load.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    /// The request has not completed yet.
    #[default]
    Loading,
    /// The data was fetched and formatted.
    Loaded(DashboardData),
    /// The data could not be fetched or formatted.
    Failed(Error),
}

/// The formatting collaborators used while loading.
#[derive(Clone)]
pub struct DashboardFormatters {
    /// Formats the transaction values and balance figures.
    pub currency: Arc<dyn CurrencyFormatter>,
    /// Formats the transaction creation dates.
    pub date: Arc<dyn DateFormatter>,
}

impl DashboardFormatters {
    /// Use `formatter` for both money and dates.
    pub fn from_shared<F>(formatter: Arc<F>) -> Self
    where
        F: CurrencyFormatter + DateFormatter + 'static,
    {
        Self {
            currency: formatter.clone(),
            date: formatter,
        }
    }
}

/// Fetch the transactions and balance from `source` and format them for display.
///
/// # Errors
/// Returns an error if the request fails or a balance figure is not a number.
pub async fn load_dashboard<S: TransactionSource>(
    source: &S,
    formatters: &DashboardFormatters,
) -> Result<DashboardData, Error> {
    let response = source.fetch_transactions().await?;

    format_dashboard(response, formatters)
}

/// Format a response from the finance API for display.
///
/// # Errors
/// Returns [Error::InvalidBalance] if a balance figure is not a number.
pub fn format_dashboard(
    response: TransactionsResponse,
    formatters: &DashboardFormatters,
) -> Result<DashboardData, Error> {
    let figures = response
        .balance
        .parse()
        .inspect_err(|error| tracing::error!("could not parse balance: {error}"))?;

    if !figures.is_consistent() {
        tracing::warn!(
            "Balance total {} does not equal income {} minus outcome {}, showing the total as reported",
            figures.total,
            figures.income,
            figures.outcome
        );
    }

    let balance = FormattedBalance {
        income: formatters.currency.format_signed_currency(figures.income),
        outcome: formatters.currency.format_signed_currency(figures.outcome),
        total: formatters.currency.format_signed_currency(figures.total),
    };

    let transactions = response
        .transactions
        .into_iter()
        .map(|transaction| format_transaction(transaction, formatters))
        .collect();

    Ok(DashboardData {
        transactions,
        balance,
    })
}

fn format_transaction(transaction: Transaction, formatters: &DashboardFormatters) -> TransactionRow {
    TransactionRow {
        formatted_value: formatters
            .currency
            .format_currency(transaction.value.as_f64()),
        formatted_date: formatters.date.format_date(transaction.created_at),
        id: transaction.id,
        title: transaction.title,
        kind: transaction.kind,
        category: transaction.category.title,
    }
}

/// Owns the background task that loads the dashboard.
///
/// Dropping the loader cancels the task if it is still running, so a
/// dashboard that has been torn down is never updated.
#[derive(Debug)]
pub struct DashboardLoader {
    task: JoinHandle<()>,
}

impl DashboardLoader {
    /// Start loading the dashboard from `source` into `load_state`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<S: TransactionSource>(
        source: S,
        formatters: DashboardFormatters,
        load_state: Arc<RwLock<LoadState>>,
    ) -> Self {
        let task = tokio::spawn(async move {
            let next_state = match load_dashboard(&source, &formatters).await {
                Ok(data) => {
                    tracing::info!("Loaded {} transactions", data.transactions.len());
                    LoadState::Loaded(data)
                }
                Err(error) => {
                    tracing::error!("could not load the dashboard: {error}");
                    LoadState::Failed(error)
                }
            };

            match load_state.write() {
                Ok(mut state) => *state = next_state,
                Err(error) => tracing::error!("could not acquire dashboard lock: {error}"),
            }
        });

        Self { task }
    }

    /// Whether the load has completed, successfully or not.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for DashboardLoader {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use std::sync::Arc;

    use time::{OffsetDateTime, macros::datetime};

    use crate::{
        Error,
        api::{TransactionSource, TransactionsResponse},
        balance::Balance,
        format::{CurrencyFormatter, DateFormatter},
        transaction::{Amount, Category, Transaction, TransactionKind},
    };

    use super::DashboardFormatters;

    /// Serves a canned response, or a canned error.
    pub struct StubSource(pub Result<TransactionsResponse, Error>);

    impl TransactionSource for StubSource {
        async fn fetch_transactions(&self) -> Result<TransactionsResponse, Error> {
            self.0.clone()
        }
    }

    /// Formats amounts as "<amount to 2 dp> units" and dates as ISO 8601 dates.
    pub struct PlainFormatter;

    impl CurrencyFormatter for PlainFormatter {
        fn format_currency(&self, amount: f64) -> String {
            format!("{:.2} units", amount.abs())
        }

        fn format_signed_currency(&self, amount: f64) -> String {
            format!("{amount:.2} units")
        }
    }

    impl DateFormatter for PlainFormatter {
        fn format_date(&self, timestamp: OffsetDateTime) -> String {
            timestamp.date().to_string()
        }
    }

    pub fn plain_formatters() -> DashboardFormatters {
        DashboardFormatters::from_shared(Arc::new(PlainFormatter))
    }

    pub fn transaction(id: &str, title: &str, value: f64, kind: TransactionKind) -> Transaction {
        Transaction {
            id: id.to_owned(),
            title: title.to_owned(),
            value: Amount::new(value).unwrap(),
            kind,
            category: Category {
                title: "Sales".to_owned(),
            },
            created_at: datetime!(2020-04-20 18:22:01 UTC),
        }
    }

    pub fn response(transactions: Vec<Transaction>) -> TransactionsResponse {
        response_with_balance(transactions, "5000.00", "1200.00", "3800.00")
    }

    pub fn response_with_balance(
        transactions: Vec<Transaction>,
        income: &str,
        outcome: &str,
        total: &str,
    ) -> TransactionsResponse {
        TransactionsResponse {
            transactions,
            balance: Balance {
                income: income.to_owned(),
                outcome: outcome.to_owned(),
                total: total.to_owned(),
            },
        }
    }
}
