use cart_page::cart::{Cart, CartLine, NewLine};
use cart_page::Price;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Step {
    Increment(u64),
    Decrement(u64),
    Quantity(u64, String),
    Like(u64),
    BeginDelete(u64),
    FinishDelete(u64),
}

fn step() -> impl Strategy<Value = Step> {
    // Ids past the seeded lines exercise the no-op path.
    let id = 1u64..=6;
    prop_oneof![
        id.clone().prop_map(Step::Increment),
        id.clone().prop_map(Step::Decrement),
        (id.clone(), "[ +\\-0-9a-z.]{0,6}").prop_map(|(id, raw)| Step::Quantity(id, raw)),
        id.clone().prop_map(Step::Like),
        id.clone().prop_map(Step::BeginDelete),
        id.prop_map(Step::FinishDelete),
    ]
}

fn seeded_lines() -> impl Strategy<Value = Vec<NewLine>> {
    prop::collection::vec((0u64..100_000, 1u32..50, any::<bool>()), 1..5).prop_map(|lines| {
        lines
            .into_iter()
            .enumerate()
            .map(|(index, (cents, quantity, liked))| NewLine {
                name: format!("line {index}"),
                unit_price: Price::from_cents(cents),
                quantity,
                liked,
            })
            .collect()
    })
}

fn sum_of_subtotals(cart: &Cart) -> u64 {
    cart.lines().iter().map(|line| line.subtotal().cents()).sum()
}

proptest! {
    #[test]
    fn prop_subtotal_is_rounded_price_times_quantity(
        cents in 0u64..1_000_000_000,
        quantity in 1u32..100_000,
    ) {
        let amount = cents as f64 / 100.0;
        let price = Price::from_amount(amount).expect("non-negative amount");
        prop_assert_eq!(price, Price::from_cents(cents));
        prop_assert_eq!(Price::parse(&price.to_string()), Some(price));

        let subtotal = price.times(quantity);
        prop_assert_eq!(subtotal.cents(), cents * u64::from(quantity));
        prop_assert_eq!(
            subtotal.to_string(),
            format!("${}.{:02}", subtotal.cents() / 100, subtotal.cents() % 100)
        );
    }

    #[test]
    fn prop_decrement_never_goes_below_one(start in 1u32..20, presses in 0usize..40) {
        let mut cart = Cart::from_lines([NewLine {
            name: "line".to_string(),
            unit_price: Price::from_cents(199),
            quantity: start,
            liked: false,
        }]);

        for press in 1..=presses {
            let quantity = cart.decrement(1).expect("line is displayed");
            prop_assert!(quantity >= 1);
            prop_assert_eq!(quantity, start.saturating_sub(press as u32).max(1));
        }
    }

    #[test]
    fn prop_cart_invariants_hold_after_every_step(
        lines in seeded_lines(),
        steps in prop::collection::vec(step(), 0..60),
    ) {
        let mut cart = Cart::from_lines(lines);
        let like_colors: Vec<(u64, &str)> = cart
            .lines()
            .iter()
            .map(|line| (line.id, line.like_color()))
            .collect();
        let mut like_presses = std::collections::HashMap::<u64, usize>::new();

        for step in steps {
            let before: Option<CartLine> = match &step {
                Step::Increment(id) | Step::Decrement(id) => cart.line(*id).cloned(),
                _ => None,
            };

            match step {
                Step::Increment(id) => {
                    if let (Some(quantity), Some(line)) = (cart.increment(id), before) {
                        prop_assert_eq!(quantity, line.quantity + 1);
                    }
                }
                Step::Decrement(id) => {
                    if let (Some(quantity), Some(line)) = (cart.decrement(id), before) {
                        prop_assert_eq!(quantity, (line.quantity - 1).max(1));
                    }
                }
                Step::Quantity(id, raw) => {
                    cart.set_quantity_input(id, &raw);
                }
                Step::Like(id) => {
                    if cart.toggle_like(id).is_some() {
                        *like_presses.entry(id).or_default() += 1;
                    }
                }
                Step::BeginDelete(id) => {
                    cart.begin_delete(id);
                }
                Step::FinishDelete(id) => {
                    let was_fading = cart.line(id).is_some_and(|line| line.fading);
                    if was_fading {
                        prop_assert!(cart.finish_delete(id));
                        if cart.is_empty() {
                            prop_assert!(cart.empty_message_shown());
                        }
                    }
                }
            }

            prop_assert!(cart.lines().iter().all(|line| line.quantity >= 1));
            prop_assert_eq!(cart.total().cents(), sum_of_subtotals(&cart));
            prop_assert_eq!(cart.empty_message_shown(), cart.is_empty());
        }

        for (id, color) in like_colors {
            if let Some(line) = cart.line(id) {
                let presses = like_presses.get(&id).copied().unwrap_or_default();
                if presses % 2 == 0 {
                    prop_assert_eq!(line.like_color(), color);
                } else {
                    prop_assert_ne!(line.like_color(), color);
                }
            }
        }
    }
}
