//! report-server: HTTP front end for the CVP break-even report.
//!
//! Usage:
//!   report-server --host 0.0.0.0 --port 5001
//!
//! Single route: GET / renders the full report from the query string.
//! Every parameter is optional; anything missing or malformed falls back
//! to its documented default, so the page always renders.

use anyhow::Result;
use axum::{
    extract::Query,
    http::StatusCode,
    response::Html,
    routing::get,
    Router,
};
use cvp_core::{chart::ChartSet, metrics::Metrics, params::ResolvedQuery, report, scenario::Scenario};
use std::collections::HashMap;
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let host = parse_arg(&args, "--host", "0.0.0.0".to_string());
    let port = parse_arg(&args, "--port", 5001u16);

    println!("CVP Desk — report-server");
    println!("  bind: http://{host}:{port}");
    println!();

    let app = Router::new().route("/", get(render_report));

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    log::info!("listening on {host}:{port}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn parse_arg<T: std::str::FromStr>(args: &[String], name: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == name)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

async fn render_report(
    Query(query): Query<HashMap<String, String>>,
) -> Result<Html<String>, (StatusCode, String)> {
    let resolved = ResolvedQuery::from_query(&query);
    let baseline = Metrics::from_params(&resolved.baseline);
    let scenarios = Scenario::build_all(&resolved.baseline, &resolved.scenarios);

    log::info!(
        "GET / sp={} vc={} fc={} units={} tax={} -> B/E {:.0} units",
        resolved.baseline.selling_price,
        resolved.baseline.variable_cost,
        resolved.baseline.fixed_costs,
        resolved.baseline.units_sold,
        resolved.baseline.tax_rate,
        baseline.breakeven_units,
    );

    let charts = ChartSet::render(&resolved.baseline, &scenarios).map_err(|e| {
        log::error!("chart rendering failed: {e}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "chart rendering failed".to_string(),
        )
    })?;

    Ok(Html(report::render_page(&resolved, &baseline, &scenarios, &charts)))
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    log::info!("shutdown signal received");
}
