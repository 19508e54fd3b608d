//! Drug–excipient compatibility checker — table, search, and prediction.

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse},
    Form, Json,
};
use serde::{Deserialize, Serialize};

use healio_common::error::ApiError;
use healio_common::HealioError;
use healio_compat::filter::filter_records;
use healio_compat::predictor::{PredictRequest, PredictionResult};
use healio_compat::records::{Compatibility, CompatibilityRecord};
use healio_compat::summary::{summarize, CompatibilitySummary};

use crate::handlers::home::nav_html;
use crate::state::SharedState;

/// Banner shown when the predict form is submitted with a blank identifier.
const MISSING_PAIR_MESSAGE: &str = "Please enter both Drug CID and Excipient CID";

#[derive(Deserialize, Default)]
pub struct CompatQuery {
    #[serde(default, rename = "q")]
    pub query: String,
}

#[derive(Deserialize)]
pub struct PredictForm {
    pub drug_cid: String,
    pub excipient_cid: String,
    /// Filter that was active when the form was sent, carried along so the
    /// re-rendered table keeps it.
    #[serde(default, rename = "q")]
    pub query: String,
}

// === API Types ===

#[derive(Debug, Serialize)]
pub struct ApiCompatibilityResponse {
    pub query: String,
    pub total: usize,
    pub summary: CompatibilitySummary,
    pub records: Vec<CompatibilityRecord>,
}

// === API Endpoints ===

/// GET /api/compatibility?q= - Filtered records plus category counts
pub async fn api_compatibility(
    State(state): State<SharedState>,
    Query(params): Query<CompatQuery>,
) -> Json<ApiCompatibilityResponse> {
    let records = filter_records(state.compat.records(), &params.query);
    let summary = summarize(&records);
    Json(ApiCompatibilityResponse {
        query: params.query,
        total: records.len(),
        summary,
        records,
    })
}

/// POST /api/predict - Run the compatibility model on one identifier pair
pub async fn api_predict(
    State(state): State<SharedState>,
    Json(request): Json<PredictRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .model
        .predict(&request.drug_id, &request.excipient_id)
        .await?;
    Ok(Json(result))
}

// === Pages ===

pub async fn compatibility_page(
    State(state): State<SharedState>,
    Query(params): Query<CompatQuery>,
) -> Html<String> {
    let records = filter_records(state.compat.records(), &params.query);
    let summary = summarize(&records);
    Html(render_compatibility_page(
        &params.query,
        &records,
        summary,
        None,
    ))
}

pub async fn compatibility_submit(
    State(state): State<SharedState>,
    Form(form): Form<PredictForm>,
) -> Html<String> {
    let prediction = match state
        .model
        .predict(&form.drug_cid, &form.excipient_cid)
        .await
    {
        Ok(result) => Ok(result),
        Err(HealioError::MissingIdentifier(_)) => Err(MISSING_PAIR_MESSAGE.to_string()),
        Err(err) => Err(err.to_string()),
    };

    let records = filter_records(state.compat.records(), &form.query);
    let summary = summarize(&records);
    Html(render_compatibility_page(
        &form.query,
        &records,
        summary,
        Some(prediction),
    ))
}

// === Rendering ===

fn category_badge(category: Compatibility) -> &'static str {
    match category {
        Compatibility::Compatible => "badge badge-success",
        Compatibility::Caution => "badge badge-warning",
        Compatibility::Incompatible => "badge badge-danger",
    }
}

fn score_bar_class(category: Compatibility) -> &'static str {
    match category {
        Compatibility::Compatible => "success",
        Compatibility::Caution => "warning",
        Compatibility::Incompatible => "danger",
    }
}

fn render_compatibility_page(
    search: &str,
    records: &[CompatibilityRecord],
    summary: CompatibilitySummary,
    prediction: Option<Result<PredictionResult, String>>,
) -> String {
    let prediction_html = match prediction {
        None => String::new(),
        Some(Err(message)) => {
            format!(r#"<div class="alert alert-warning mt-4">{message}</div>"#)
        }
        Some(Ok(result)) => {
            let badge = if result.prediction == 1 {
                "badge badge-success"
            } else {
                "badge badge-danger"
            };
            format!(
                r#"
    <div class="card mt-4" id="prediction-result">
        <div class="card-header">Prediction Result</div>
        <div class="result-grid">
            <div><span class="result-label">Drug CID</span><span class="result-value">{}</span></div>
            <div><span class="result-label">Excipient CID</span><span class="result-value">{}</span></div>
            <div><span class="result-label">Prediction</span><span class="{}">{}</span></div>
            <div><span class="result-label">Confidence</span><span class="result-value">{:.1}%</span></div>
            <div><span class="result-label">Model</span><span class="result-value">{}</span></div>
            <div><span class="result-label">Processing Time</span><span class="result-value">{}</span></div>
        </div>
    </div>"#,
                result.drug_cid,
                result.excipient_cid,
                badge,
                result.outcome_label(),
                result.confidence * 100.0,
                result.model_version,
                result.processing_time,
            )
        }
    };

    let rows_html: String = if records.is_empty() {
        r#"<tr><td colspan="6" class="text-center text-muted py-4">
            No compatibility data found for your search.
        </td></tr>"#
            .to_string()
    } else {
        records
            .iter()
            .map(|r| {
                format!(
                    r#"
                <tr>
                    <td><strong>{}</strong> <span class="text-muted">({})</span></td>
                    <td>{} <span class="text-muted">({})</span></td>
                    <td><span class="{}">{}</span></td>
                    <td>
                        <div class="d-flex align-center gap-2">
                            <div class="progress-track">
                                <div class="progress-bar {}" style="width:{}%"></div>
                            </div>
                            <span class="score-value">{}%</span>
                        </div>
                    </td>
                    <td><code>{:.2}</code></td>
                    <td class="text-muted small" title="{}">{}</td>
                </tr>"#,
                    r.drug_name,
                    r.drug_cid,
                    r.excipient_name,
                    r.excipient_cid,
                    category_badge(r.compatibility),
                    r.compatibility.label(),
                    score_bar_class(r.compatibility),
                    r.score,
                    r.score,
                    r.confidence,
                    r.fingerprint,
                    r.notes,
                )
            })
            .collect()
    };

    let nav = nav_html("/compatibility");
    let total = summary.total();
    let compatible = summary.compatible;
    let caution = summary.caution;
    let incompatible = summary.incompatible;

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Compatibility — Healio</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{nav}
<main class="main-content">
    <div class="page-header">
        <div>
            <h1 class="page-title">💊 Drug-Excipient Compatibility</h1>
            <p class="text-muted">AI-assisted formulation screening for drug–excipient combinations</p>
        </div>
        <a href="/pharmai" class="btn btn-outline">← Back to PharmAI</a>
    </div>

    <div class="card">
        <div class="card-header">Predict New Combination</div>
        <form method="POST" action="/compatibility" id="predict-form">
            <input type="hidden" name="q" value="{search}">
            <div class="d-flex gap-3 flex-wrap">
                <div class="form-group">
                    <label class="form-label">Drug CID</label>
                    <input type="text" name="drug_cid" class="form-control"
                           placeholder="e.g., 3878 (Aspirin)">
                </div>
                <div class="form-group">
                    <label class="form-label">Excipient CID</label>
                    <input type="text" name="excipient_cid" class="form-control"
                           placeholder="e.g., 104938 (MCC)">
                </div>
                <div class="form-group form-group-submit">
                    <button type="submit" class="btn btn-primary" id="predict-btn"
                            data-busy-label="Analyzing...">Predict</button>
                </div>
            </div>
        </form>
        {prediction_html}
    </div>

    <div class="stats-grid mt-4">
        <div class="stat-card">
            <div class="stat-value">{total}</div>
            <div class="stat-label">Total Combinations</div>
        </div>
        <div class="stat-card">
            <div class="stat-value stat-success">{compatible}</div>
            <div class="stat-label">Compatible</div>
        </div>
        <div class="stat-card">
            <div class="stat-value stat-warning">{caution}</div>
            <div class="stat-label">Caution</div>
        </div>
        <div class="stat-card">
            <div class="stat-value stat-danger">{incompatible}</div>
            <div class="stat-label">Incompatible</div>
        </div>
    </div>

    <form class="d-flex gap-3 mb-4 mt-4 align-center" method="GET" action="/compatibility">
        <input type="text" name="q" class="form-control" style="max-width:360px"
               placeholder="Search by drug name, CID, or excipient..." value="{search}">
        <button type="submit" class="btn btn-primary">Search</button>
    </form>

    <div class="card">
        <div class="card-header">Compatibility Data</div>
        <div class="table-container">
            <table class="table">
                <thead>
                    <tr>
                        <th>Drug (CID)</th>
                        <th>Excipient (CID)</th>
                        <th>Compatibility</th>
                        <th>Score</th>
                        <th>Confidence</th>
                        <th>Notes</th>
                    </tr>
                </thead>
                <tbody>{rows_html}</tbody>
            </table>
        </div>
    </div>
</main>
<script src="/static/js/main.js"></script>
</body>
</html>"#
    )
}
