//! Serves the icons shown on the summary cards.

use axum::{
    extract::Path,
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};

use crate::not_found::get_404_not_found_response;

const INCOME_ICON: &str = include_str!("../../assets/income.svg");
const OUTCOME_ICON: &str = include_str!("../../assets/outcome.svg");
const TOTAL_ICON: &str = include_str!("../../assets/total.svg");

/// Get a card icon by file name, e.g. "income.svg".
pub async fn get_icon(Path(icon): Path<String>) -> Response {
    let svg = match icon.as_str() {
        "income.svg" => INCOME_ICON,
        "outcome.svg" => OUTCOME_ICON,
        "total.svg" => TOTAL_ICON,
        _ => return get_404_not_found_response(),
    };

    ([(CONTENT_TYPE, "image/svg+xml")], svg).into_response()
}
