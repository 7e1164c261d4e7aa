//! The URIs served by the dashboard.

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The dashboard page.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The icons shown on the summary cards.
pub const ICON: &str = "/assets/{icon}";
/// The icon on the income card.
pub const INCOME_ICON: &str = "/assets/income.svg";
/// The icon on the outcome card.
pub const OUTCOME_ICON: &str = "/assets/outcome.svg";
/// The icon on the total card.
pub const TOTAL_ICON: &str = "/assets/total.svg";
