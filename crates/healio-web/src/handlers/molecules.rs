//! Molecular structure viewer — fixture molecules, properties, and export.

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use serde::Deserialize;
use tracing::info;

use healio_common::error::ApiError;
use healio_common::HealioError;
use healio_molecules::export::{export_filename, ExportDocument};
use healio_molecules::molecule::MoleculeRecord;

use crate::handlers::home::nav_html;
use crate::state::SharedState;

#[derive(Deserialize, Default)]
pub struct VizParams {
    pub molecule: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub smiles: String,
}

// === API Endpoints ===

/// GET /api/molecules - All molecules available in the viewer
pub async fn api_molecules(State(state): State<SharedState>) -> Json<Vec<MoleculeRecord>> {
    Json(state.molecules.molecules().to_vec())
}

/// GET /api/molecules/:id - Single molecule with atoms and properties
pub async fn api_molecule_detail(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let molecule = state
        .molecules
        .find(&id)
        .ok_or_else(|| HealioError::MoleculeNotFound(id.clone()))?;
    Ok(Json(molecule.clone()))
}

/// GET /api/molecules/:id/export - Download the molecule's JSON document
pub async fn api_molecule_export(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let molecule = state
        .molecules
        .find(&id)
        .ok_or_else(|| HealioError::MoleculeNotFound(id.clone()))?;

    let document = ExportDocument::from_record(molecule);
    let bytes = document.to_bytes()?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        export_filename(&molecule.name)
    );

    info!(molecule = %molecule.id, "molecule export downloaded");
    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}

/// POST /api/molecules/analyze - Acknowledge a custom SMILES analysis
pub async fn api_molecule_analyze(
    State(state): State<SharedState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let analysis = state.analyzer.analyze(&request.smiles).await?;
    Ok(Json(analysis))
}

// === Pages ===

pub async fn visualization_page(
    State(state): State<SharedState>,
    Query(params): Query<VizParams>,
) -> Html<String> {
    let molecules = state.molecules.molecules();
    // Unknown or absent selection falls back to the first molecule
    let selected = params
        .molecule
        .as_deref()
        .and_then(|id| state.molecules.find(id))
        .or_else(|| molecules.first());

    let content = match selected {
        Some(molecule) => render_viewer(molecules, molecule),
        None => r#"<div class="alert alert-warning">No molecules available.</div>"#.to_string(),
    };
    Html(render_visualization_page(&content))
}

// === Rendering ===

/// Flat projection of the stored conformer onto an SVG canvas. The sample
/// coordinates all sit in the z = 0 plane, so dropping z loses nothing.
fn render_structure_svg(molecule: &MoleculeRecord) -> String {
    const VIEW: f64 = 420.0;
    const PAD: f64 = 1.2;

    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for atom in &molecule.atoms {
        min_x = min_x.min(atom.position[0]);
        max_x = max_x.max(atom.position[0]);
        min_y = min_y.min(atom.position[1]);
        max_y = max_y.max(atom.position[1]);
    }
    min_x -= PAD;
    max_x += PAD;
    min_y -= PAD;
    max_y += PAD;

    let scale = VIEW / (max_x - min_x).max(max_y - min_y);
    let offset_x = (VIEW - (max_x - min_x) * scale) / 2.0;
    let offset_y = (VIEW - (max_y - min_y) * scale) / 2.0;

    let atoms_svg: String = molecule
        .atoms
        .iter()
        .map(|atom| {
            let cx = offset_x + (atom.position[0] - min_x) * scale;
            let cy = VIEW - offset_y - (atom.position[1] - min_y) * scale;
            format!(
                r##"<circle cx="{cx:.1}" cy="{cy:.1}" r="16" fill="{}" stroke="#222" stroke-width="1.5"><title>{}</title></circle>
    <text x="{cx:.1}" y="{cy:.1}" dy="4.5" text-anchor="middle" fill="#ffffff" font-size="12" font-weight="700">{}</text>"##,
                atom.color, atom.element, atom.element
            )
        })
        .collect();

    format!(
        r#"<svg viewBox="0 0 {VIEW} {VIEW}" class="molecule-canvas" role="img" aria-label="{} structure">
    {atoms_svg}
</svg>"#,
        molecule.name
    )
}

fn render_viewer(molecules: &[MoleculeRecord], selected: &MoleculeRecord) -> String {
    let selector: String = molecules
        .iter()
        .map(|m| {
            let class = if m.id == selected.id {
                "btn btn-primary"
            } else {
                "btn btn-outline"
            };
            format!(
                r#"<a href="/molecular-visualization?molecule={}" class="{}">{}</a>"#,
                m.id, class, m.name
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ");

    let svg = render_structure_svg(selected);

    format!(
        r#"
    <div class="d-flex gap-3 mb-4">
        {selector}
    </div>

    <div class="grid-2">
        <div class="card">
            <div class="card-header">{name} <span class="text-muted">(CID {cid})</span></div>
            {svg}
            <div class="legend">
                <span class="legend-item"><span class="legend-dot" style="background:#404040"></span> Carbon</span>
                <span class="legend-item"><span class="legend-dot" style="background:#ff0000"></span> Oxygen</span>
                <span class="legend-item"><span class="legend-dot" style="background:#0000ff"></span> Nitrogen</span>
                <span class="legend-item"><span class="legend-dot legend-dot-light" style="background:#ffffff"></span> Hydrogen</span>
            </div>
        </div>

        <div class="card">
            <div class="card-header">Properties</div>
            <dl class="properties-list">
                <dt>Formula</dt><dd>{formula}</dd>
                <dt>Molecular Weight</dt><dd>{weight}</dd>
                <dt>LogS</dt><dd>{log_s}</dd>
                <dt>Melting Point</dt><dd>{melting}</dd>
                <dt>Boiling Point</dt><dd>{boiling}</dd>
                <dt>Solubility</dt><dd>{solubility}</dd>
                <dt>SMILES</dt><dd><code>{smiles}</code></dd>
                <dt>Fingerprint</dt><dd class="text-muted small">{ecfp}</dd>
            </dl>
            <a href="/api/molecules/{id}/export" class="btn btn-outline mt-4" download>⬇ Export JSON Data</a>
        </div>
    </div>

    <div class="card mt-4">
        <div class="card-header">Analyze Custom SMILES</div>
        <form id="analyze-form">
            <div class="d-flex gap-3">
                <input type="text" id="smiles-input" class="form-control"
                       placeholder="Enter SMILES string (e.g., CCO for ethanol)">
                <button type="submit" class="btn btn-primary" id="analyze-btn"
                        data-busy-label="Analyzing...">Analyze</button>
            </div>
        </form>
        <div id="analyze-result" class="mt-3"></div>
    </div>"#,
        selector = selector,
        name = selected.name,
        cid = selected.cid,
        svg = svg,
        formula = selected.formula,
        weight = selected.molecular_weight,
        log_s = selected.log_s,
        melting = selected.melting_point,
        boiling = selected.boiling_point,
        solubility = selected.solubility,
        smiles = selected.smiles,
        ecfp = selected.ecfp,
        id = selected.id,
    )
}

fn render_visualization_page(content: &str) -> String {
    let nav = nav_html("/molecular-visualization");
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Molecular Visualization — Healio</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{nav}
<main class="main-content">
    <div class="page-header">
        <div>
            <h1 class="page-title">🧪 3D Molecular Visualization</h1>
            <p class="text-muted">Structures, properties, and export for common drug compounds</p>
        </div>
        <a href="/pharmai" class="btn btn-outline">← Back to PharmAI</a>
    </div>
{content}
</main>
<script src="/static/js/main.js"></script>
</body>
</html>"#
    )
}
