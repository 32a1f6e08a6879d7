use crate::cart::{Cart, CartLine};
use std::fmt::Write;
use std::time::Duration;

pub const EMPTY_TITLE: &str = "Your cart is empty";
pub const EMPTY_HINT: &str = "Continue shopping to add items";

pub fn render_cart(cart: &Cart, fade: Duration) -> String {
    let mut items = String::new();
    for line in cart.lines() {
        render_line(&mut items, line);
    }

    let empty_message = if cart.empty_message_shown() {
        format!(
            r#"<div class="empty-cart-message" style="text-align: center; padding: 40px"><h3>{EMPTY_TITLE}</h3><p>{EMPTY_HINT}</p></div>"#
        )
    } else {
        String::new()
    };

    // Reload once pending removals have run so the faded lines disappear.
    let refresh = if cart.lines().iter().any(|line| line.fading) {
        let seconds = fade.as_secs_f64().ceil().max(1.0) as u64;
        format!(r#"<meta http-equiv="refresh" content="{seconds}" />"#)
    } else {
        String::new()
    };

    INDEX_HTML
        .replace("{{REFRESH}}", &refresh)
        .replace("{{FADE_MS}}", &fade.as_millis().to_string())
        .replace("{{ITEMS}}", &items)
        .replace("{{EMPTY}}", &empty_message)
        .replace("{{TOTAL}}", &cart.total().to_string())
}

fn render_line(out: &mut String, line: &CartLine) {
    let id = line.id;
    let name = escape_html(&line.name);
    let fading = if line.fading { " fading" } else { "" };
    let liked = if line.liked { " liked" } else { "" };
    let checked = if line.selected { " checked" } else { "" };
    let color = line.like_color();

    let _ = write!(
        out,
        r#"
      <article class="cart-item{fading}" data-id="{id}">
        <form method="post" action="/items/{id}/select">
          <input class="item-select" type="checkbox" name="selected" aria-label="Select {name}"{checked} onchange="this.form.submit()" />
        </form>
        <div class="item-info">
          <h3 class="item-name">{name}</h3>
          <span class="item-price">{price}</span>
        </div>
        <div class="quantity-controls">
          <form method="post" action="/items/{id}/decrement"><button class="minus-btn" type="submit">-</button></form>
          <span class="quantity">{quantity}</span>
          <form method="post" action="/items/{id}/increment"><button class="plus-btn" type="submit">+</button></form>
          <form class="quantity-form" method="post" action="/items/{id}/quantity">
            <input class="quantity-input" name="value" value="{quantity}" inputmode="numeric" />
          </form>
        </div>
        <span class="item-subtotal">{subtotal}</span>
        <div class="item-actions">
          <form method="post" action="/items/{id}/like">
            <button class="like-btn{liked}" type="submit" style="color: {color}; fill: {color}">&#9829;</button>
          </form>
          <form method="post" action="/items/{id}/delete">
            <button class="delete-btn" type="submit">Remove</button>
          </form>
        </div>
      </article>"#,
        price = line.unit_price,
        quantity = line.quantity,
        subtotal = line.subtotal(),
    );
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  {{REFRESH}}
  <title>Shopping Cart</title>
  <style>
    :root {
      --bg: #f6f4f0;
      --ink: #2b2a28;
      --muted: #7a746d;
      --accent: #2f4858;
      --card: #ffffff;
      --shadow: 0 18px 48px rgba(47, 72, 88, 0.14);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
      font-size: 2rem;
    }

    form {
      display: inline;
      margin: 0;
    }

    .bulk-actions {
      display: flex;
      gap: 12px;
    }

    .cart-container {
      display: grid;
      gap: 14px;
    }

    .cart-item {
      display: grid;
      grid-template-columns: auto 1fr auto auto auto;
      align-items: center;
      gap: 16px;
      padding: 16px;
      border-radius: 16px;
      border: 1px solid rgba(47, 72, 88, 0.1);
    }

    .cart-item.fading {
      animation: fade-out {{FADE_MS}}ms ease forwards;
    }

    .item-name {
      margin: 0 0 4px;
      font-size: 1.05rem;
    }

    .item-price {
      color: var(--muted);
    }

    .quantity-controls {
      display: flex;
      align-items: center;
      gap: 8px;
    }

    .quantity {
      min-width: 2ch;
      text-align: center;
      font-weight: 600;
    }

    .quantity-input {
      width: 4em;
    }

    .item-subtotal {
      font-weight: 600;
      color: var(--accent);
    }

    button {
      border: none;
      border-radius: 999px;
      padding: 8px 14px;
      font-weight: 600;
      cursor: pointer;
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent);
    }

    .like-btn {
      background: transparent;
      font-size: 1.4rem;
      padding: 4px 8px;
    }

    .summary {
      display: flex;
      justify-content: flex-end;
      gap: 12px;
      font-size: 1.2rem;
    }

    .total-price {
      font-weight: 700;
    }

    @keyframes fade-out {
      from {
        opacity: 1;
      }
      to {
        opacity: 0;
      }
    }

    @media (max-width: 600px) {
      .cart-item {
        grid-template-columns: auto 1fr;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Shopping Cart</h1>
    </header>

    <section class="bulk-actions">
      <form method="post" action="/select-all">
        <button class="select-all" type="submit">Select all</button>
      </form>
      <form method="post" action="/delete-selected">
        <button class="delete-selected" type="submit">Delete selected</button>
      </form>
    </section>

    <section class="cart-container">{{ITEMS}}
      {{EMPTY}}
    </section>

    <section class="summary">
      <span>Total</span>
      <span class="total-price">{{TOTAL}}</span>
    </section>
  </main>
</body>
</html>
"#;
