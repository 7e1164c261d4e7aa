//! Dashboard module
//!
//! Loads the user's transactions and balance once, then renders them as
//! summary cards and a table.

mod cards;
mod handlers;
mod icons;
mod load;
mod tables;

pub use handlers::{DashboardState, get_dashboard_page};
pub use icons::get_icon;
pub use load::{DashboardFormatters, DashboardLoader, LoadState};
