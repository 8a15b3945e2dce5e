//! Home page route handler: the product catalog.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use mbhaco_core::Product;

use crate::filters;
use crate::state::AppState;

/// Home page template: the catalog grid with add-to-cart buttons.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub products: Vec<Product>,
}

/// Display the catalog.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    HomeTemplate {
        products: state.catalog().iter().cloned().collect(),
    }
}
