//! Landing page and PharmAI hub.

use axum::{extract::State, response::Html};

use crate::state::SharedState;

/// Navigation bar shared across the analysis pages.
pub fn nav_html(active: &str) -> String {
    let link = |href: &str, label: &str| {
        let class = if href == active {
            "nav-link active"
        } else {
            "nav-link"
        };
        format!(r#"<a href="{href}" class="{class}">{label}</a>"#)
    };
    format!(
        r#"<nav class="topbar">
    <a href="/" class="brand">🧬 Healio</a>
    <div class="nav-links">
        {}
        {}
        {}
    </div>
</nav>"#,
        link("/pharmai", "PharmAI"),
        link("/compatibility", "Compatibility"),
        link("/molecular-visualization", "Molecular Visualization"),
    )
}

pub async fn home_page(State(_state): State<SharedState>) -> Html<String> {
    Html(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Healio</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
<main class="hero">
    <div class="hero-content">
        <h1 class="hero-title">🧬 Healio</h1>
        <p class="hero-subtitle">Advanced Pharmaceutical Intelligence Platform</p>
        <p class="text-muted">Molecular visualization, formulation screening, and compatibility
        prediction in one place.</p>
        <a href="/pharmai" class="btn btn-primary btn-lg">Enter Platform</a>
    </div>
</main>
</body>
</html>"#
            .to_string(),
    )
}

pub async fn pharmai_page(State(_state): State<SharedState>) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>PharmAI — Healio</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{}
<main class="main-content">
    <div class="page-header">
        <div>
            <h1 class="page-title">PharmAI</h1>
            <p class="text-muted">Advanced Drug Analysis Platform</p>
        </div>
        <a href="/" class="btn btn-outline">← Back to Healio</a>
    </div>

    <div class="grid-2">
        <div class="card card-hover">
            <div class="card-header">🧪 3D Molecular Visualization</div>
            <p class="text-muted mb-4">Explore molecular structures of common drug compounds with
            atom-level detail, physicochemical properties, and JSON export.</p>
            <a href="/molecular-visualization" class="btn btn-primary">Explore Molecules</a>
        </div>
        <div class="card card-hover">
            <div class="card-header">💊 Drug-Excipient Compatibility</div>
            <p class="text-muted mb-4">Screen formulation combinations against the compatibility
            table and run the prediction model on new drug–excipient pairs.</p>
            <a href="/compatibility" class="btn btn-primary">Check Compatibility</a>
        </div>
    </div>
</main>
</body>
</html>"#,
        nav_html("/pharmai")
    ))
}
