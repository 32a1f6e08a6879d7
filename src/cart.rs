use crate::price::Price;

pub type LineId = u64;

pub const LIKED_COLOR: &str = "#ff0000";
pub const UNLIKED_COLOR: &str = "#ccc";

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub id: LineId,
    pub name: String,
    pub unit_price: Price,
    pub quantity: u32,
    pub liked: bool,
    pub selected: bool,
    pub fading: bool,
}

impl CartLine {
    pub fn subtotal(&self) -> Price {
        self.unit_price.times(self.quantity)
    }

    pub fn like_color(&self) -> &'static str {
        if self.liked { LIKED_COLOR } else { UNLIKED_COLOR }
    }
}

/// A line as described by the page before it gets an identifier.
#[derive(Debug, Clone)]
pub struct NewLine {
    pub name: String,
    pub unit_price: Price,
    pub quantity: u32,
    pub liked: bool,
}

/// The lines currently on screen, in display order.
///
/// All mutations are keyed by [`LineId`]; an id that is not displayed turns
/// the call into a no-op that reports `None` (or `false`).
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    next_id: LineId,
    empty_message_shown: bool,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lines(lines: impl IntoIterator<Item = NewLine>) -> Self {
        let mut cart = Self::new();
        for line in lines {
            cart.push(line);
        }
        cart
    }

    pub fn push(&mut self, line: NewLine) -> LineId {
        self.next_id += 1;
        let id = self.next_id;
        self.lines.push(CartLine {
            id,
            name: line.name,
            unit_price: line.unit_price,
            quantity: line.quantity.max(1),
            liked: line.liked,
            selected: false,
            fading: false,
        });
        id
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: LineId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn empty_message_shown(&self) -> bool {
        self.empty_message_shown
    }

    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn increment(&mut self, id: LineId) -> Option<u32> {
        let line = self.line_mut(id)?;
        line.quantity = line.quantity.saturating_add(1);
        Some(line.quantity)
    }

    /// Lowers the quantity by one, stopping at 1.
    pub fn decrement(&mut self, id: LineId) -> Option<u32> {
        let line = self.line_mut(id)?;
        if line.quantity > 1 {
            line.quantity -= 1;
        }
        Some(line.quantity)
    }

    /// Applies a typed quantity, clamping anything that is not an integer >= 1 to 1.
    pub fn set_quantity_input(&mut self, id: LineId, raw: &str) -> Option<u32> {
        let line = self.line_mut(id)?;
        line.quantity = parse_quantity_input(raw);
        Some(line.quantity)
    }

    pub fn toggle_like(&mut self, id: LineId) -> Option<bool> {
        let line = self.line_mut(id)?;
        line.liked = !line.liked;
        Some(line.liked)
    }

    pub fn toggle_select(&mut self, id: LineId) -> Option<bool> {
        let line = self.line_mut(id)?;
        line.selected = !line.selected;
        Some(line.selected)
    }

    pub fn select_all(&mut self) -> usize {
        for line in &mut self.lines {
            line.selected = true;
        }
        self.lines.len()
    }

    /// Starts the fade-out of a line. `Some(false)` means the line is already
    /// fading and no second removal must be scheduled.
    pub fn begin_delete(&mut self, id: LineId) -> Option<bool> {
        let line = self.line_mut(id)?;
        if line.fading {
            return Some(false);
        }
        line.fading = true;
        Some(true)
    }

    /// Starts the fade-out of every selected line and returns the ones that
    /// need a removal scheduled.
    pub fn begin_delete_selected(&mut self) -> Vec<LineId> {
        self.lines
            .iter_mut()
            .filter(|line| line.selected && !line.fading)
            .map(|line| {
                line.fading = true;
                line.id
            })
            .collect()
    }

    /// Removes a line once its fade has elapsed, then runs the empty check.
    pub fn finish_delete(&mut self, id: LineId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id != id);
        let removed = self.lines.len() != before;
        self.check_empty();
        removed
    }

    /// Shows the empty-cart message when no lines remain. Returns `true` only
    /// the first time the message appears.
    pub fn check_empty(&mut self) -> bool {
        if self.lines.is_empty() && !self.empty_message_shown {
            self.empty_message_shown = true;
            return true;
        }
        false
    }

    fn line_mut(&mut self, id: LineId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.id == id)
    }
}

/// Reads the leading integer of a typed quantity, the way a browser's
/// `parseInt` would, and clamps missing or non-positive values to 1.
pub fn parse_quantity_input(raw: &str) -> u32 {
    let text = raw.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: u64 = 0;
    let mut seen = false;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        value = value
            .saturating_mul(10)
            .saturating_add(u64::from(byte - b'0'));
    }

    if !seen || negative || value < 1 {
        return 1;
    }
    u32::try_from(value).unwrap_or(u32::MAX)
}
