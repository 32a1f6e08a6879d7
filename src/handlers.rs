use crate::cart::{Cart, LineId};
use crate::errors::AppError;
use crate::models::{CartResponse, QuantityForm, QuantityRequest};
use crate::state::AppState;
use crate::ui::render_cart;
use axum::{
    extract::{rejection::JsonRejection, Form, Path, State},
    response::{Html, Redirect},
    Json,
};
use std::sync::Arc;
use tokio::time::sleep;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction {
    Increment,
    Decrement,
    Quantity,
    Delete,
    Like,
    Select,
}

impl LineAction {
    pub fn parse(action: &str) -> Option<Self> {
        match action.trim() {
            "increment" => Some(Self::Increment),
            "decrement" => Some(Self::Decrement),
            "quantity" => Some(Self::Quantity),
            "delete" => Some(Self::Delete),
            "like" => Some(Self::Like),
            "select" => Some(Self::Select),
            _ => None,
        }
    }
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let cart = state.cart.lock().await;
    Html(render_cart(&cart, state.fade))
}

pub async fn get_cart(State(state): State<AppState>) -> Json<CartResponse> {
    let cart = state.cart.lock().await;
    Json(CartResponse::from(&*cart))
}

pub async fn line_action(
    State(state): State<AppState>,
    Path((id, action)): Path<(LineId, String)>,
    payload: Result<Json<QuantityRequest>, JsonRejection>,
) -> Result<Json<CartResponse>, AppError> {
    let Some(action) = LineAction::parse(&action) else {
        return Err(AppError::bad_request(
            "action must be one of increment, decrement, quantity, delete, like, select",
        ));
    };
    // Only the quantity action reads a body; the others ignore it.
    let value = match (action, payload) {
        (LineAction::Quantity, Err(rejection)) => {
            return Err(AppError::bad_request(rejection.body_text()));
        }
        (_, Ok(Json(request))) => Some(request.value.into_input()),
        (_, Err(_)) => None,
    };

    let mut cart = state.cart.lock().await;
    if !apply_line_action(&state, &mut cart, id, action, value.as_deref()) {
        return Err(AppError::not_found(format!("no cart line with id {id}")));
    }
    Ok(Json(CartResponse::from(&*cart)))
}

pub async fn line_action_form(
    State(state): State<AppState>,
    Path((id, action)): Path<(String, String)>,
    form: Option<Form<QuantityForm>>,
) -> Redirect {
    let id = id.parse::<LineId>().ok();
    if let (Some(id), Some(action)) = (id, LineAction::parse(&action)) {
        let value = form.map(|Form(request)| request.value);
        let mut cart = state.cart.lock().await;
        apply_line_action(&state, &mut cart, id, action, value.as_deref());
    }
    Redirect::to("/")
}

pub async fn select_all(State(state): State<AppState>) -> Json<CartResponse> {
    let mut cart = state.cart.lock().await;
    apply_select_all(&mut cart);
    Json(CartResponse::from(&*cart))
}

pub async fn select_all_form(State(state): State<AppState>) -> Redirect {
    let mut cart = state.cart.lock().await;
    apply_select_all(&mut cart);
    Redirect::to("/")
}

pub async fn delete_selected(State(state): State<AppState>) -> Json<CartResponse> {
    let mut cart = state.cart.lock().await;
    apply_delete_selected(&state, &mut cart);
    Json(CartResponse::from(&*cart))
}

pub async fn delete_selected_form(State(state): State<AppState>) -> Redirect {
    let mut cart = state.cart.lock().await;
    apply_delete_selected(&state, &mut cart);
    Redirect::to("/")
}

/// Runs one line handler. Returns `false` when the line is not displayed.
fn apply_line_action(
    state: &AppState,
    cart: &mut Cart,
    id: LineId,
    action: LineAction,
    value: Option<&str>,
) -> bool {
    match action {
        LineAction::Increment => cart
            .increment(id)
            .inspect(|quantity| debug!("line {id} quantity -> {quantity}"))
            .is_some(),
        LineAction::Decrement => cart
            .decrement(id)
            .inspect(|quantity| debug!("line {id} quantity -> {quantity}"))
            .is_some(),
        LineAction::Quantity => cart
            .set_quantity_input(id, value.unwrap_or_default())
            .inspect(|quantity| debug!("line {id} quantity set to {quantity}"))
            .is_some(),
        LineAction::Like => cart
            .toggle_like(id)
            .inspect(|liked| debug!("line {id} liked -> {liked}"))
            .is_some(),
        LineAction::Select => cart
            .toggle_select(id)
            .inspect(|selected| debug!("line {id} selected -> {selected}"))
            .is_some(),
        LineAction::Delete => match cart.begin_delete(id) {
            Some(started) => {
                if started {
                    schedule_removal(state, id);
                }
                true
            }
            None => false,
        },
    }
}

fn apply_select_all(cart: &mut Cart) {
    let count = cart.select_all();
    debug!("selected {count} lines");
}

fn apply_delete_selected(state: &AppState, cart: &mut Cart) {
    for id in cart.begin_delete_selected() {
        schedule_removal(state, id);
    }
}

/// Removes the line once the fade-out has had time to play.
fn schedule_removal(state: &AppState, id: LineId) {
    let cart = Arc::clone(&state.cart);
    let fade = state.fade;
    debug!("line {id} fading out for {fade:?}");

    tokio::spawn(async move {
        sleep(fade).await;
        let mut cart = cart.lock().await;
        if cart.finish_delete(id) {
            info!("removed line {id}, total {}", cart.total());
        }
        if cart.is_empty() {
            info!("cart is empty");
        }
    });
}
