//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart itself lives in the visitor's session; each handler copies it
//! into a store snapshot, runs the core operation, and writes it back.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{AppendHeaders, Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use mbhaco_core::{CartState, CartView, Receipt, abandon_cart, add_to_cart, complete_payment};

use crate::cart_session::SessionCart;
use crate::error::Result;
use crate::filters;
use crate::state::AppState;

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub name: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Payment confirmation page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/confirmation.html")]
pub struct ConfirmationTemplate {
    pub receipt: Receipt,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Display cart page.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Response> {
    let cart_session = SessionCart::load(&session).await?;
    let cart = CartView::read(cart_session.store_ref()).unwrap_or_else(CartView::empty);

    Ok(CartShowTemplate { cart }.into_response())
}

/// Add item to cart (HTMX).
///
/// Looks the product up in the catalog by name, records the add-action,
/// and returns the count badge fragment with an HTMX trigger so other
/// cart elements refresh.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let Some(product) = state.catalog().get(&form.name) else {
        tracing::warn!(product = %form.name, "Add to cart for unknown product");
        return Ok((
            StatusCode::BAD_REQUEST,
            Html("<span class=\"cart-error\">Unknown product</span>"),
        )
            .into_response());
    };

    let mut cart_session = SessionCart::load(&session).await?;
    match add_to_cart(cart_session.store(), product) {
        Ok(summary) => {
            cart_session.save(&session).await?;

            // Return cart count with HTMX trigger to update other elements
            Ok((
                AppendHeaders([("HX-Trigger", "cart-updated")]),
                CartCountTemplate {
                    count: summary.item_count,
                },
            )
                .into_response())
        }
        Err(e) => {
            tracing::error!("Failed to add item to cart: {e}");
            Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("<span class=\"cart-error\">Error adding to cart</span>"),
            )
                .into_response())
        }
    }
}

/// Get cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<Response> {
    let cart_session = SessionCart::load(&session).await?;
    let count = CartState::load(cart_session.store_ref()).item_count();

    Ok(CartCountTemplate { count }.into_response())
}

/// Abandon the cart: clear it and return to the cart page.
#[instrument(skip(session))]
pub async fn clear(session: Session) -> Result<Response> {
    let mut cart_session = SessionCart::load(&session).await?;
    abandon_cart(cart_session.store());
    cart_session.save(&session).await?;

    Ok(Redirect::to("/cart").into_response())
}

/// Complete payment: confirmation page, then an empty cart.
#[instrument(skip(session))]
pub async fn checkout(session: Session) -> Result<Response> {
    let mut cart_session = SessionCart::load(&session).await?;

    match complete_payment(cart_session.store()) {
        Ok(receipt) => {
            cart_session.save(&session).await?;
            Ok(ConfirmationTemplate { receipt }.into_response())
        }
        Err(e) => {
            // Nothing to pay for; back to the (empty) cart page
            tracing::debug!("Checkout refused: {e}");
            Ok(Redirect::to("/cart").into_response())
        }
    }
}
