use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use casamatch::config::AppConfig;
use casamatch::engine::domain::{
    Activity, PendingMatch, Property, PropertyStatus, Request, UrgencyLevel,
};
use casamatch::engine::import::PortfolioSnapshot;
use casamatch::engine::matching::{MatchEngine, MatchScore};
use casamatch::engine::rollup::{rollup_building, BuildingRollup};
use casamatch::engine::urgency::{classify_urgency, UrgencyConfig};
use casamatch::error::AppError;
use casamatch::telemetry;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
    engine: MatchEngine,
    urgency: UrgencyConfig,
}

#[derive(Parser, Debug)]
#[command(
    name = "Casamatch Engine",
    about = "Score request/listing compatibility and prioritize portfolio outreach",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Batch recomputation over an exported portfolio snapshot
    Portfolio {
        #[command(subcommand)]
        command: PortfolioCommand,
    },
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum PortfolioCommand {
    /// Recompute urgency per property and roll it up per building
    Report(PortfolioReportArgs),
}

#[derive(Args, Debug)]
struct PortfolioReportArgs {
    /// Properties CSV export
    #[arg(long)]
    properties: PathBuf,
    /// Optional activities CSV export
    #[arg(long)]
    activities: Option<PathBuf>,
    /// Evaluation date for the report, YYYY-MM-DD (defaults to today)
    #[arg(long, value_parser = parse_date)]
    as_of: Option<NaiveDate>,
    /// Include a per-unit urgency listing in the output
    #[arg(long)]
    list_units: bool,
}

#[derive(Debug, Deserialize)]
struct ScoreMatchRequest {
    property: Property,
    request: Request,
}

#[derive(Debug, Serialize)]
struct ScoreMatchResponse {
    passes_filter: bool,
    score: MatchScore,
}

#[derive(Debug, Deserialize)]
struct ClassifyUrgencyRequest {
    property: Property,
    #[serde(default)]
    activities: Vec<Activity>,
    #[serde(default)]
    pending_matches: Vec<PendingMatch>,
    #[serde(default)]
    as_of: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
struct ClassifyUrgencyResponse {
    urgency: UrgencyLevel,
    score: u8,
}

#[derive(Debug, Deserialize)]
struct RollupBuildingRequest {
    building_code: String,
    #[serde(default)]
    units: Vec<RollupUnit>,
}

#[derive(Debug, Deserialize)]
struct RollupUnit {
    status: PropertyStatus,
    urgency: UrgencyLevel,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Portfolio {
            command: PortfolioCommand::Report(args),
        } => run_portfolio_report(args),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
        engine: MatchEngine::new(config.scoring.weights)?,
        urgency: UrgencyConfig::default(),
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/matches/score", post(score_match_endpoint))
        .route("/api/v1/urgency/classify", post(classify_urgency_endpoint))
        .route("/api/v1/buildings/rollup", post(rollup_building_endpoint))
        .layer(prometheus_layer)
        .with_state(state);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "matching engine ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_portfolio_report(args: PortfolioReportArgs) -> Result<(), AppError> {
    let PortfolioReportArgs {
        properties,
        activities,
        as_of,
        list_units,
    } = args;

    let as_of = as_of
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .unwrap_or_else(Utc::now);

    let snapshot = PortfolioSnapshot::from_paths(properties, activities)?;
    let urgency_config = UrgencyConfig::default();

    // Each unit classifies independently; the per-building reduction only
    // runs once its units are all classified.
    let mut classified = Vec::with_capacity(snapshot.properties.len());
    let mut buildings: BTreeMap<String, Vec<(PropertyStatus, UrgencyLevel)>> = BTreeMap::new();
    for property in &snapshot.properties {
        let level = classify_urgency(
            property,
            snapshot.activities_for(&property.code),
            &[],
            &urgency_config,
            as_of,
        );
        if let Some(building) = &property.building_code {
            buildings
                .entry(building.clone())
                .or_default()
                .push((property.status, level));
        }
        classified.push((property, level));
    }

    let rollups: Vec<BuildingRollup> = buildings
        .iter()
        .map(|(code, units)| rollup_building(code, units))
        .collect();

    render_portfolio_report(&classified, &rollups, as_of, list_units);
    Ok(())
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

async fn score_match_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<ScoreMatchRequest>,
) -> Json<ScoreMatchResponse> {
    let ScoreMatchRequest { property, request } = payload;

    let passes_filter = state.engine.passes_basic_filter(&property, &request);
    let score = state.engine.score(&property, &request);

    Json(ScoreMatchResponse {
        passes_filter,
        score,
    })
}

async fn classify_urgency_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<ClassifyUrgencyRequest>,
) -> Json<ClassifyUrgencyResponse> {
    let ClassifyUrgencyRequest {
        property,
        activities,
        pending_matches,
        as_of,
    } = payload;

    let as_of = as_of.unwrap_or_else(Utc::now);
    let urgency = classify_urgency(&property, &activities, &pending_matches, &state.urgency, as_of);

    Json(ClassifyUrgencyResponse {
        urgency,
        score: urgency.score(),
    })
}

async fn rollup_building_endpoint(
    Json(payload): Json<RollupBuildingRequest>,
) -> Json<BuildingRollup> {
    let units: Vec<(PropertyStatus, UrgencyLevel)> = payload
        .units
        .iter()
        .map(|unit| (unit.status, unit.urgency))
        .collect();

    Json(rollup_building(&payload.building_code, &units))
}

fn render_portfolio_report(
    classified: &[(&Property, UrgencyLevel)],
    rollups: &[BuildingRollup],
    as_of: DateTime<Utc>,
    list_units: bool,
) {
    println!("Portfolio urgency report (as of {})", as_of.date_naive());

    let mut level_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for (_, level) in classified {
        *level_counts.entry(level.label()).or_default() += 1;
    }

    println!("\nUrgency distribution");
    for (label, count) in &level_counts {
        println!("- {label}: {count}");
    }

    if rollups.is_empty() {
        println!("\nBuilding roll-ups: none (no building codes in export)");
    } else {
        println!("\nBuilding roll-ups");
        for rollup in rollups {
            match rollup.avg_urgency {
                Some(avg) => println!(
                    "- {}: {} active, {} sold, avg urgency {:.2}",
                    rollup.building_code, rollup.active_units, rollup.sold_units, avg
                ),
                None => println!(
                    "- {}: no active units ({} sold)",
                    rollup.building_code, rollup.sold_units
                ),
            }
        }
    }

    if list_units {
        println!("\nPer-unit urgency");
        for (property, level) in classified {
            println!(
                "- {} | {} | {} | urgency {} ({})",
                property.code,
                property.city,
                property.status.label(),
                level.score(),
                level.label()
            );
        }
    }
}
