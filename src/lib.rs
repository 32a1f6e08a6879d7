pub mod app;
pub mod cart;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod price;
pub mod seed;
pub mod state;
pub mod ui;

pub use app::router;
pub use cart::{Cart, CartLine, LineId};
pub use config::Settings;
pub use price::Price;
pub use seed::load_cart;
pub use state::AppState;
