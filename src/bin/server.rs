use std::{env, fs::OpenOptions, net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    Router,
    extract::{MatchedPath, Request},
};
use axum_server::Handle;
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use finance_dashboard::{
    ApiClient, AppState, DashboardFormatters, DashboardLoader, Locale, LocaleFormatter,
    build_router, graceful_shutdown, resolve_timezone,
};

/// The web server for the finance dashboard.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL of the finance API, e.g. "http://localhost:3333".
    #[arg(long)]
    api_url: String,

    /// The port to serve the dashboard from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// The locale used to format amounts and dates and to label the page.
    #[arg(long, value_enum, default_value_t = Locale::EnUs)]
    locale: Locale,

    /// The canonical timezone dates are shown in, e.g. "Pacific/Auckland".
    #[arg(long, default_value = "Etc/UTC")]
    timezone: String,

    /// Seconds to wait for the finance API before showing an error.
    #[arg(long, default_value_t = 10)]
    request_timeout: u64,
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));

    let timezone = resolve_timezone(&args.timezone).unwrap_or_else(|error| {
        panic!("{error}. Use a valid, canonical timezone string, e.g. \"Pacific/Auckland\".")
    });

    let formatter = LocaleFormatter::new(args.locale, timezone)
        .expect("Could not create the currency formatter");
    let formatters = DashboardFormatters::from_shared(Arc::new(formatter));

    let api_token = env::var("API_TOKEN").ok();
    let api_client = ApiClient::with_timeout(
        &args.api_url,
        api_token,
        Duration::from_secs(args.request_timeout),
    )
    .expect("Could not create the finance API client");

    let state = AppState::new(args.locale);
    let _loader = DashboardLoader::spawn(
        api_client,
        formatters,
        state.dashboard.load_state.clone(),
    );

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_router(state));

    tracing::info!("HTTP server listening on {}", addr);
    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .unwrap();
}

fn setup_logging() {
    let stdout_log = tracing_subscriber::fmt::layer().pretty();

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("debug.log")
        .expect("Could not create log file");

    let debug_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(
            stdout_log
                .with_filter(filter::LevelFilter::INFO)
                .and_then(debug_log)
                .with_filter(filter::LevelFilter::DEBUG),
        )
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // By default, `TraceLayer` will log 5xx responses but we're doing our specific
        // logging of errors so disable that
        .on_failure(());

    router.layer(tracing_layer)
}
