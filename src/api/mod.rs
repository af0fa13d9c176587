use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::core::{Inputs, Milestones, Projection, SeriesPoint, run_projection};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ProjectPayload {
    start_age: Option<u32>,
    target_amount: Option<f64>,
    include_inflation: Option<bool>,
}

#[derive(Parser, Debug)]
#[command(
    name = "sprout",
    about = "Child savings plan projector (annuity-due contribution solve + monthly compounding to age 67)"
)]
struct Cli {
    #[arg(long, default_value_t = 0, help = "Age at which saving starts (0-18)")]
    start_age: u32,
    #[arg(
        long,
        default_value_t = 10_000.0,
        help = "Amount wanted at the 18th birthday, in currency units"
    )]
    target_amount: f64,
    #[arg(
        long,
        help = "Restate the target in age-18 money at 2% annual inflation"
    )]
    include_inflation: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectResponse {
    start_age: u32,
    target_amount: f64,
    include_inflation: bool,
    monthly_contribution: f64,
    series: Vec<SeriesPoint>,
    milestones: Milestones,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn build_inputs(cli: Cli) -> Result<Inputs, String> {
    if cli.start_age > 18 {
        return Err("--start-age must be between 0 and 18".to_string());
    }

    if !cli.target_amount.is_finite() || cli.target_amount <= 0.0 {
        return Err("--target-amount must be > 0".to_string());
    }

    Ok(Inputs {
        start_age: cli.start_age,
        target_amount: cli.target_amount,
        include_inflation: cli.include_inflation,
    })
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route(
            "/api/project",
            get(project_get_handler).post(project_post_handler),
        )
        .fallback(not_found_handler);

    let listener = TcpListener::bind(addr).await?;
    println!("Sprout HTTP API listening on http://{addr}");
    println!("Local access: http://127.0.0.1:{port}/api/project");

    axum::serve(listener, app).await
}

pub fn run_projection_cli(args: &[String]) -> Result<(), String> {
    let mut argv = vec!["sprout".to_string()];
    argv.extend_from_slice(args);
    let cli = Cli::parse_from(argv);

    let inputs = build_inputs(cli)?;
    let response = build_project_response(&inputs, run_projection(&inputs));
    let json = serde_json::to_string_pretty(&response).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn project_get_handler(Query(payload): Query<ProjectPayload>) -> Response {
    project_handler_impl(payload)
}

async fn project_post_handler(Json(payload): Json<ProjectPayload>) -> Response {
    project_handler_impl(payload)
}

fn project_handler_impl(payload: ProjectPayload) -> Response {
    let inputs = match inputs_from_payload(payload) {
        Ok(inputs) => inputs,
        Err(msg) => return error_response(StatusCode::BAD_REQUEST, &msg),
    };

    let response = build_project_response(&inputs, run_projection(&inputs));
    json_response(StatusCode::OK, response)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
fn inputs_from_json(json: &str) -> Result<Inputs, String> {
    let payload = serde_json::from_str::<ProjectPayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    inputs_from_payload(payload)
}

fn inputs_from_payload(payload: ProjectPayload) -> Result<Inputs, String> {
    let mut cli = default_cli_for_api();

    if let Some(v) = payload.start_age {
        cli.start_age = v;
    }
    if let Some(v) = payload.target_amount {
        cli.target_amount = v;
    }
    if let Some(v) = payload.include_inflation {
        cli.include_inflation = v;
    }

    build_inputs(cli)
}

fn default_cli_for_api() -> Cli {
    Cli {
        start_age: 0,
        target_amount: 10_000.0,
        include_inflation: false,
    }
}

fn build_project_response(inputs: &Inputs, projection: Projection) -> ProjectResponse {
    ProjectResponse {
        start_age: inputs.start_age,
        target_amount: inputs.target_amount,
        include_inflation: inputs.include_inflation,
        monthly_contribution: projection.monthly_contribution,
        series: projection.series,
        milestones: projection.milestones,
    }
}
