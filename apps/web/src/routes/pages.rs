use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use axum_extra::extract::{CookieJar, WithRejection};
use serde::Deserialize;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::contact::{submit_contact, ContactSubmission};
use crate::demos::generate_project_demos;
use crate::errors::AppError;
use crate::navigation::session::{session_cookie, session_id};
use crate::navigation::{NavigationState, PageId};
use crate::render::html::render_document;
use crate::render::tree::PageView;
use crate::render::{render_page, ContactFormState, RenderOptions};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub species: Option<String>,
}

impl PageQuery {
    /// The selector's "all" option submits an empty value.
    fn species(&self) -> Option<&str> {
        self.species.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// Builds render options for `page`, generating the demo datasets for Projects.
fn options_for(page: PageId, species: Option<&str>) -> RenderOptions {
    match page {
        PageId::Projects => RenderOptions::default()
            .with_demos(generate_project_demos(&mut rand::thread_rng()))
            .with_species_or_none(species),
        _ => RenderOptions::default(),
    }
}

/// Renders the session's current page with whatever cookies the handler set.
fn html_response(
    state: &AppState,
    jar: CookieJar,
    navigation: NavigationState,
    options: &RenderOptions,
) -> Response {
    let view = render_page(navigation.current_page(), &state.content, options);
    (jar, Html(render_document(&view))).into_response()
}

/// The caller's stored session, if the cookie names one we still hold.
async fn current_session(state: &AppState, jar: &CookieJar) -> Option<(Uuid, NavigationState)> {
    let id = session_id(jar)?;
    let navigation = state.sessions.load(id).await?;
    Some((id, navigation))
}

/// Stores `navigation`, creating the session and its cookie on first selection.
async fn save_session(
    state: &AppState,
    jar: CookieJar,
    session: Option<Uuid>,
    navigation: NavigationState,
) -> CookieJar {
    let id = session.unwrap_or_else(Uuid::new_v4);
    state.sessions.save(id, navigation).await;
    if session.is_some() {
        jar
    } else {
        jar.add(session_cookie(id))
    }
}

/// GET /
/// Visitors without a session are shown Home; nothing is stored for them.
pub async fn handle_current_page(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<PageQuery>,
) -> Response {
    let navigation = current_session(&state, &jar)
        .await
        .map(|(_, navigation)| navigation)
        .unwrap_or_default();
    let options = options_for(navigation.current_page(), query.species());
    html_response(&state, jar, navigation, &options)
}

/// GET /pages/:page
/// Unknown pages are ignored and the current page is rendered again.
pub async fn handle_select_page(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(page): Path<String>,
    Query(query): Query<PageQuery>,
) -> Response {
    let session = current_session(&state, &jar).await;
    let id = session.map(|(id, _)| id);
    let mut navigation = session.map(|(_, navigation)| navigation).unwrap_or_default();

    let jar = match navigation.select(&page) {
        Ok(selected) => {
            debug!(page = %selected, "Page selected");
            save_session(&state, jar, id, navigation).await
        }
        Err(e) => {
            warn!("Ignoring navigation: {e}");
            jar
        }
    };

    let options = options_for(navigation.current_page(), query.species());
    html_response(&state, jar, navigation, &options)
}

/// POST /contact
pub async fn handle_contact_form(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(input): Form<ContactSubmission>,
) -> Response {
    let id = current_session(&state, &jar).await.map(|(id, _)| id);
    let mut navigation = NavigationState::new();
    navigation.select_page(PageId::Contact);
    let jar = save_session(&state, jar, id, navigation).await;

    let result = submit_contact(&input);
    let options = RenderOptions::default().with_contact(ContactFormState::Submitted { input, result });
    html_response(&state, jar, navigation, &options)
}

/// GET /api/v1/pages/:page
pub async fn handle_get_page_view(
    State(state): State<AppState>,
    Path(page): Path<String>,
    WithRejection(Query(query), _): WithRejection<Query<PageQuery>, AppError>,
) -> Result<Json<PageView>, AppError> {
    let page: PageId = page.parse()?;
    let mut options = options_for(page, None);
    if let (PageId::Projects, Some(species)) = (page, query.species()) {
        options = options.with_species(species)?;
    }
    Ok(Json(render_page(page, &state.content, &options)))
}
