use crate::error::PagesError;
use crate::renderer::Page;
use crate::views::{ContactView, HomeView, MembersView, NodesView};
use crate::Pages;
use axum::extract::{Path, Query, RawPathParams, State};
use axum::http::{StatusCode, Uri, header};
use axum::response::{Html, IntoResponse};
use ipnt_directory::{Directory, NodeFilter, Snapshot};
use ipnt_kernel::prelude::ApiState;
use serde::Serialize;

/// Both slices a page needs, resolved once per request.
struct Slices<'a> {
    pages: &'a Pages,
    directory: &'a Directory,
}

impl<'a> Slices<'a> {
    fn from_state(state: &'a ApiState) -> Result<Self, PagesError> {
        let missing = |err: ipnt_kernel::prelude::ApiStateError| PagesError::from(err.to_string());
        Ok(Self {
            pages: state.try_get_slice::<Pages>().map_err(missing)?,
            directory: state.try_get_slice::<Directory>().map_err(missing)?,
        })
    }

    async fn snapshot(&self) -> Result<Snapshot, PagesError> {
        Ok(self.directory.snapshot().await?)
    }

    fn render<T: Serialize>(&self, page: Page, view: &T) -> Result<Html<String>, PagesError> {
        self.pages.renderer.render(page, view).map(Html)
    }
}

pub(crate) async fn home(State(state): State<ApiState>) -> Result<Html<String>, PagesError> {
    let slices = Slices::from_state(&state)?;
    let snapshot = slices.snapshot().await?;
    slices.render(Page::Home, &HomeView::new(&snapshot))
}

/// `/{area}/{node_id}` is a shareable short form of the node permalink.
pub(crate) async fn short_link(params: RawPathParams) -> impl IntoResponse {
    let (mut area, mut node_id) = ("", "");
    for (key, value) in params.iter() {
        match key {
            "area" => area = value,
            "node_id" => node_id = value,
            _ => {}
        }
    }

    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, format!("/nodes/{area}/{node_id}"))])
}

/// Section pages live under a trailing slash; the bare path redirects there, keeping the query.
pub(crate) async fn trailing_slash(uri: Uri) -> impl IntoResponse {
    let location = match uri.query() {
        Some(query) => format!("{}/?{query}", uri.path()),
        None => format!("{}/", uri.path()),
    };

    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)])
}

pub(crate) async fn nodes(
    State(state): State<ApiState>,
    Query(filter): Query<NodeFilter>,
) -> Result<Html<String>, PagesError> {
    let slices = Slices::from_state(&state)?;
    let snapshot = slices.snapshot().await?;
    slices.render(Page::Nodes, &NodesView::new(&snapshot, &filter, None))
}

pub(crate) async fn node_detail(
    State(state): State<ApiState>,
    Path((area, node_id)): Path<(String, String)>,
    Query(filter): Query<NodeFilter>,
) -> Result<Html<String>, PagesError> {
    let slices = Slices::from_state(&state)?;
    let snapshot = slices.snapshot().await?;

    let current = snapshot.find_node(&area, &node_id, &slices.directory.domain);
    if current.is_none() {
        tracing::debug!(%area, %node_id, "Node not found, showing listing");
    }

    slices.render(Page::Nodes, &NodesView::new(&snapshot, &filter, current))
}

pub(crate) async fn members(State(state): State<ApiState>) -> Result<Html<String>, PagesError> {
    let slices = Slices::from_state(&state)?;
    let snapshot = slices.snapshot().await?;
    slices.render(Page::Members, &MembersView::new(&snapshot))
}

pub(crate) async fn contact(State(state): State<ApiState>) -> Result<Html<String>, PagesError> {
    let slices = Slices::from_state(&state)?;
    let snapshot = slices.snapshot().await?;
    slices.render(Page::Contact, &ContactView::new(&snapshot))
}
