use crate::cart::{Cart, NewLine};
use crate::models::{SeedData, SeedLine, SeedPrice};
use crate::price::Price;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, warn};

pub async fn load_cart(path: &Path) -> Cart {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<SeedData>(&bytes) {
            Ok(seed) => {
                let cart = build_cart(seed);
                info!("loaded {} cart lines from {}", cart.lines().len(), path.display());
                cart
            }
            Err(err) => {
                error!("failed to parse seed file: {err}");
                demo_cart()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            info!("no seed file at {}, using demo cart", path.display());
            demo_cart()
        }
        Err(err) => {
            error!("failed to read seed file: {err}");
            demo_cart()
        }
    }
}

pub fn build_cart(seed: SeedData) -> Cart {
    Cart::from_lines(seed.lines.into_iter().filter_map(to_new_line))
}

pub fn demo_cart() -> Cart {
    Cart::from_lines([
        demo_line("Baskets", 10000, 1),
        demo_line("Socks", 2000, 2),
        demo_line("Bag", 5000, 1),
    ])
}

fn demo_line(name: &str, cents: u64, quantity: u32) -> NewLine {
    NewLine {
        name: name.to_string(),
        unit_price: Price::from_cents(cents),
        quantity,
        liked: false,
    }
}

fn to_new_line(line: SeedLine) -> Option<NewLine> {
    let unit_price = match &line.price {
        SeedPrice::Text(text) => Price::parse(text),
        SeedPrice::Amount(amount) => Price::from_amount(*amount),
    };
    let Some(unit_price) = unit_price else {
        warn!("skipping seed line {:?}: invalid price {:?}", line.name, line.price);
        return None;
    };

    Some(NewLine {
        name: line.name,
        unit_price,
        quantity: u32::try_from(line.quantity.max(1)).unwrap_or(u32::MAX),
        liked: line.liked,
    })
}
