use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::collections::HashMap;
use std::fmt::Write as _;
use std::sync::{LazyLock, Mutex};
use std::time::Instant;

#[derive(Default)]
struct Registry {
    // http_requests_total{method, path, status}
    http_counts: Mutex<HashMap<String, u64>>,
    // http_request_duration_seconds (sum & count) by method,path
    http_dur_sum: Mutex<HashMap<String, f64>>,
    http_dur_count: Mutex<HashMap<String, u64>>,
    // http_requests_in_flight by path
    http_inflight: Mutex<HashMap<String, i64>>,
    // contact_submissions_total{outcome}
    submissions: Mutex<HashMap<String, u64>>,
}

static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::default);

fn escape(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"")
}

pub struct SiteMetrics;

impl SiteMetrics {
    /// Record a contact submission outcome: accepted, rejected or failed.
    pub fn record_submission(outcome: &str) {
        let mut submissions = REGISTRY.submissions.lock().unwrap();
        *submissions.entry(outcome.to_string()).or_insert(0) += 1;
    }
}

pub async fn http_metrics_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let path_label = req
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| "unknown".to_string(), |p| p.as_str().to_string());
    let method_label = req.method().as_str().to_string();

    {
        let mut inflight = REGISTRY.http_inflight.lock().unwrap();
        *inflight.entry(path_label.clone()).or_insert(0) += 1;
    }

    let response = next.run(req).await;
    let elapsed = start.elapsed();

    {
        let mut inflight = REGISTRY.http_inflight.lock().unwrap();
        if let Some(v) = inflight.get_mut(&path_label) {
            *v -= 1;
        }
    }

    let count_key = format!(
        "method=\"{}\",path=\"{}\",status=\"{}\"",
        escape(&method_label),
        escape(&path_label),
        response.status().as_u16()
    );
    {
        let mut http_counts = REGISTRY.http_counts.lock().unwrap();
        *http_counts.entry(count_key).or_insert(0) += 1;
    }

    let dur_key = format!("method=\"{}\",path=\"{}\"", escape(&method_label), escape(&path_label));
    {
        let mut sum = REGISTRY.http_dur_sum.lock().unwrap();
        let mut cnt = REGISTRY.http_dur_count.lock().unwrap();
        *sum.entry(dur_key.clone()).or_insert(0.0) += elapsed.as_secs_f64();
        *cnt.entry(dur_key).or_insert(0) += 1;
    }

    response
}

pub async fn metrics_handler() -> impl IntoResponse {
    let mut out = String::new();

    let http_counts = REGISTRY.http_counts.lock().unwrap();
    out.push_str("# HELP http_requests_total HTTP requests\n");
    out.push_str("# TYPE http_requests_total counter\n");
    for (labels, value) in http_counts.iter() {
        let _ = writeln!(out, "http_requests_total{{{labels}}} {value}");
    }
    drop(http_counts);

    let http_sum = REGISTRY.http_dur_sum.lock().unwrap();
    let http_cnt = REGISTRY.http_dur_count.lock().unwrap();
    out.push_str("# HELP http_request_duration_seconds HTTP request duration\n");
    out.push_str("# TYPE http_request_duration_seconds summary\n");
    for (labels, sumv) in http_sum.iter() {
        let cntv = http_cnt.get(labels).copied().unwrap_or(0);
        let _ = writeln!(out, "http_request_duration_seconds_sum{{{labels}}} {sumv}");
        let _ = writeln!(out, "http_request_duration_seconds_count{{{labels}}} {cntv}");
    }
    drop(http_cnt);
    drop(http_sum);

    let inflight = REGISTRY.http_inflight.lock().unwrap();
    out.push_str("# HELP http_requests_in_flight In-flight HTTP requests\n");
    out.push_str("# TYPE http_requests_in_flight gauge\n");
    for (path, val) in inflight.iter() {
        let _ = writeln!(out, "http_requests_in_flight{{path=\"{}\"}} {}", escape(path), val);
    }
    drop(inflight);

    let submissions = REGISTRY.submissions.lock().unwrap();
    out.push_str("# HELP contact_submissions_total Contact form submissions by outcome\n");
    out.push_str("# TYPE contact_submissions_total counter\n");
    for (outcome, value) in submissions.iter() {
        let _ = writeln!(
            out,
            "contact_submissions_total{{outcome=\"{}\"}} {}",
            escape(outcome),
            value
        );
    }
    drop(submissions);

    (axum::http::StatusCode::OK, out)
}
