/// HTTP surface for the record browser.
///
/// Routes:
/// - `GET /?day=N&all=true`: the browser page
/// - `GET /api/records?day=N`: filtered view as JSON
/// - `GET /healthz`: liveness
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    response::Html,
    routing::get,
};
use tracing::debug;

use watercodes_common::browser::RecordBrowser;
use watercodes_common::dataset::Dataset;
use watercodes_common::day::render_record;
use watercodes_common::model::RecordView;

use crate::config::Config;
use crate::error::AppError;
use crate::render::{PageRenderer, SiteInfo};

/// Read-only state shared by every request.
pub struct AppState {
    pub dataset: Dataset,
    pub renderer: PageRenderer,
    pub preview_limit: Option<usize>,
}

impl AppState {
    /// Load the dataset and compile the page template.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let dataset = Dataset::load(&config.data_path())?;
        let renderer = PageRenderer::new(SiteInfo {
            site_title: config.site_title.clone(),
            profile_url: config.profile_url.clone(),
        })?;
        Ok(Self {
            dataset,
            renderer,
            preview_limit: config.preview_limit,
        })
    }
}

#[derive(Debug, Default)]
pub struct BrowseParams {
    pub day: Option<String>,
    pub all: Option<String>,
}

impl BrowseParams {
    /// Repeated keys are not an error; the last occurrence wins. Unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "day" => params.day = Some(value),
                "all" => params.all = Some(value),
                _ => {}
            }
        }
        params
    }

    fn browser(&self) -> RecordBrowser {
        let mut browser = RecordBrowser::new();
        if let Some(day) = &self.day {
            browser.set_search_term(day.as_str());
        }
        browser.set_show_all(matches!(self.all.as_deref(), Some("true" | "1")));
        browser
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(browse_page))
        .route("/api/records", get(records_json))
        .route("/healthz", get(healthz))
        .with_state(state)
}

async fn browse_page(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    let browser = BrowseParams::from_pairs(pairs).browser();
    let view = browser.view(state.dataset.records(), state.preview_limit);
    debug!(
        search_term = browser.search_term(),
        show_all = browser.show_all(),
        matches = view.total(),
        "browse"
    );
    let html = state.renderer.render(&browser, &view)?;
    Ok(Html(html))
}

async fn records_json(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<Vec<RecordView>> {
    let browser = BrowseParams::from_pairs(pairs).browser();
    let views: Vec<RecordView> = browser
        .filtered(state.dataset.records())
        .into_iter()
        .map(render_record)
        .collect();
    debug!(search_term = browser.search_term(), matches = views.len(), "records api");
    Json(views)
}

async fn healthz() -> &'static str {
    "ok"
}
