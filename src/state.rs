use crate::cart::Cart;
use std::{sync::Arc, time::Duration};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub cart: Arc<Mutex<Cart>>,
    pub fade: Duration,
}

impl AppState {
    pub fn new(cart: Cart, fade: Duration) -> Self {
        Self {
            cart: Arc::new(Mutex::new(cart)),
            fade,
        }
    }
}
