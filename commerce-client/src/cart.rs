//! Cart state manager
//!
//! Holds one user's cart between views: pulls the open order down from the
//! server, applies local edits, keeps the order's money fields in step with
//! the lines, and writes the result back through the cart endpoints.

use crate::{ClientResult, HttpClient};
use shared::cart::{Cart, CartTotals, NO_PAYMENT_NOTE, NO_PAYMENT_TYPE};
use shared::models::{LineStatus, OrderLine};
use shared::response::CartSaved;

/// Partial order line accepted by [`CartManager::add_line`].
///
/// Every field is optional; present fields overlay the target line. Line
/// status is owned by the manager and is not part of the input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineInput {
    pub id: Option<i64>,
    pub order_id: Option<i64>,
    pub product_catalog_id: Option<i64>,
    pub ref_id1: Option<i64>,
    pub ref_id2: Option<i64>,
    pub line_no: Option<u32>,
    pub line_type: Option<String>,
    pub description: Option<String>,
    pub unit_price: Option<f64>,
    pub quantity: Option<i32>,
    pub net_amount: Option<f64>,
    pub tax: Option<f64>,
    pub discount: Option<f64>,
    pub gross_amount: Option<f64>,
    pub balance_amount: Option<f64>,
    pub notes: Option<String>,
}

impl LineInput {
    /// Overlay the present fields onto a line.
    pub fn apply_to(self, line: &mut OrderLine) {
        if let Some(id) = self.id {
            line.id = Some(id);
        }
        if let Some(order_id) = self.order_id {
            line.order_id = Some(order_id);
        }
        if let Some(product_catalog_id) = self.product_catalog_id {
            line.product_catalog_id = Some(product_catalog_id);
        }
        if let Some(ref_id1) = self.ref_id1 {
            line.ref_id1 = Some(ref_id1);
        }
        if let Some(ref_id2) = self.ref_id2 {
            line.ref_id2 = Some(ref_id2);
        }
        if let Some(line_no) = self.line_no {
            line.line_no = line_no;
        }
        if let Some(line_type) = self.line_type {
            line.line_type = Some(line_type);
        }
        if let Some(description) = self.description {
            line.description = description;
        }
        if let Some(unit_price) = self.unit_price {
            line.unit_price = unit_price;
        }
        if let Some(quantity) = self.quantity {
            line.quantity = quantity;
        }
        if let Some(net_amount) = self.net_amount {
            line.net_amount = net_amount;
        }
        if let Some(tax) = self.tax {
            line.tax = tax;
        }
        if let Some(discount) = self.discount {
            line.discount = discount;
        }
        if let Some(gross_amount) = self.gross_amount {
            line.gross_amount = gross_amount;
        }
        if let Some(balance_amount) = self.balance_amount {
            line.balance_amount = balance_amount;
        }
        if let Some(notes) = self.notes {
            line.notes = Some(notes);
        }
    }
}

/// Client-side cart state for one user.
///
/// The cart is always present (a fresh shell until [`load`](Self::load)
/// replaces it), and every mutating operation ends by recomputing the
/// order's derived money fields from the active lines.
#[derive(Debug, Clone)]
pub struct CartManager {
    client: HttpClient,
    user_id: i64,
    cart: Cart,
    loading: bool,
    error: Option<String>,
}

impl CartManager {
    /// Create a manager over a fresh cart shell for the user.
    pub fn new(client: HttpClient, user_id: i64) -> Self {
        Self {
            client,
            user_id,
            cart: Cart::new(user_id),
            loading: false,
            error: None,
        }
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Mutable access for callers that edit fields in place. Follow edits
    /// with [`recompute_totals`](Self::recompute_totals).
    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Owner of the cart.
    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    /// Whether a load or save is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message from the last failed remote operation.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Sums over the active lines.
    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    /// Whether the cart holds no active lines.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Pull the user's most recent active order and its active lines from
    /// the server, replacing the in-memory cart.
    ///
    /// Failures are absorbed: the cart stays as it was and the message is
    /// available through [`error`](Self::error). Finding no open order is
    /// success with an untouched cart.
    pub async fn load(&mut self) {
        self.loading = true;
        self.error = None;

        let result = self.fetch_latest().await;
        self.loading = false;

        match result {
            Ok(Some(cart)) => {
                self.cart = cart;
                self.recompute_totals();
                tracing::debug!(
                    user_id = self.user_id,
                    order_id = ?self.cart.order.id,
                    lines = self.cart.lines.len(),
                    "cart loaded"
                );
            }
            Ok(None) => {
                tracing::debug!(user_id = self.user_id, "no active order for user");
            }
            Err(err) => {
                tracing::warn!(user_id = self.user_id, error = %err, "cart load failed");
                self.error = Some(err.to_string());
            }
        }
    }

    async fn fetch_latest(&self) -> ClientResult<Option<Cart>> {
        let Some(order) = self.client.latest_active_order(self.user_id).await? else {
            return Ok(None);
        };

        let lines = match order.id {
            Some(order_id) => self.client.active_order_lines(order_id).await?,
            None => Vec::new(),
        };

        Ok(Some(Cart { order, lines }))
    }

    /// Add or merge a line, then recompute totals.
    ///
    /// An input whose `line_no` matches an active line is merged into it;
    /// anything else appends a new line numbered after the last slot
    /// (removed lines keep their slot, so numbers are not reused).
    pub fn add_line(&mut self, input: LineInput) {
        let merged = input.line_no.and_then(|line_no| {
            self.cart
                .lines
                .iter_mut()
                .find(|line| line.is_active() && line.line_no == line_no)
        });

        match merged {
            Some(line) => {
                input.apply_to(line);
            }
            None => {
                let mut line = OrderLine::new(self.cart.lines.len() as u32 + 1);
                input.apply_to(&mut line);
                self.cart.lines.push(line);
            }
        }

        self.recompute_totals();
    }

    /// Remove the first line with the given number, then recompute totals.
    ///
    /// A persisted line is kept with status `Removed` so the next save
    /// retires it server-side; an unpersisted one is dropped outright.
    /// Unknown numbers are a no-op.
    pub fn remove_line(&mut self, line_no: u32) {
        if let Some(index) = self
            .cart
            .lines
            .iter()
            .position(|line| line.line_no == line_no)
        {
            if self.cart.lines[index].id.is_some() {
                self.cart.lines[index].status = LineStatus::Removed;
            } else {
                self.cart.lines.remove(index);
            }
        }

        self.recompute_totals();
    }

    /// Refresh the order's derived money fields from the active lines.
    ///
    /// A zero gross total stamps `payment_type = "OT"` with its note;
    /// non-zero totals leave the payment fields alone.
    pub fn recompute_totals(&mut self) {
        let totals = self.cart.totals();
        let order = &mut self.cart.order;
        order.net_amount = totals.net_amount;
        order.gross_amount = totals.gross_amount;
        order.tax = totals.tax;
        order.discount = totals.discount;

        if totals.is_zero_gross() {
            order.payment_type = Some(NO_PAYMENT_TYPE.to_string());
            order.payment_note = Some(NO_PAYMENT_NOTE.to_string());
        }
    }

    /// Push the cart to the server and adopt the identities it assigns.
    ///
    /// Failures are recorded in [`error`](Self::error) **and** returned, so
    /// callers can react while the state still tells the story.
    pub async fn save(&mut self) -> ClientResult<()> {
        self.loading = true;
        self.error = None;

        let result = self.client.save_cart(&self.cart).await;
        self.loading = false;

        match result {
            Ok(saved) => {
                self.adopt(saved);
                tracing::debug!(
                    user_id = self.user_id,
                    order_id = ?self.cart.order.id,
                    "cart saved"
                );
                Ok(())
            }
            Err(err) => {
                tracing::warn!(user_id = self.user_id, error = %err, "cart save failed");
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Copy server-assigned ids back onto the order and its lines.
    fn adopt(&mut self, saved: CartSaved) {
        if saved.id.is_some() {
            self.cart.order.id = saved.id;
        }

        for (key, saved_line) in saved.lines {
            let Ok(line_no) = key.parse::<u32>() else {
                continue;
            };
            let Some(id) = saved_line.id else {
                continue;
            };
            if let Some(line) = self
                .cart
                .lines
                .iter_mut()
                .find(|line| line.line_no == line_no)
            {
                line.id = Some(id);
            }
        }
    }

    /// Drop every line locally and recompute totals.
    ///
    /// This is a local reset, not a remote delete; the zero-gross rule
    /// stamps the no-payment sentinel.
    pub fn clear(&mut self) {
        self.cart.lines.clear();
        self.recompute_totals();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientConfig;
    use shared::cart::CART_ORDER_NAME;
    use shared::models::STATUS_ACTIVE;

    fn manager() -> CartManager {
        let client = ClientConfig::new("http://localhost:0")
            .build_client()
            .unwrap();
        CartManager::new(client, 42)
    }

    fn priced(line_no: u32, quantity: i32, gross: f64) -> LineInput {
        LineInput {
            line_no: Some(line_no),
            quantity: Some(quantity),
            description: Some(format!("item {}", line_no)),
            net_amount: Some(gross),
            gross_amount: Some(gross),
            ..LineInput::default()
        }
    }

    #[test]
    fn test_fresh_manager_holds_an_empty_shell() {
        let manager = manager();
        assert_eq!(manager.user_id(), 42);
        assert!(!manager.is_loading());
        assert!(manager.error().is_none());
        assert!(manager.is_empty());
        assert_eq!(manager.cart().order.name, CART_ORDER_NAME);
        assert_eq!(manager.cart().order.status, STATUS_ACTIVE);
        assert_eq!(manager.totals(), CartTotals::default());
        // The shell is never recomputed, so the sentinel is not stamped yet.
        assert_eq!(manager.cart().order.payment_type.as_deref(), Some(""));
    }

    #[test]
    fn test_add_line_merges_into_active_line_with_same_number() {
        let mut manager = manager();
        manager.add_line(priced(1, 1, 10.00));
        manager.add_line(priced(1, 3, 30.00));

        assert_eq!(manager.cart().lines.len(), 1);
        let line = &manager.cart().lines[0];
        assert_eq!(line.quantity, 3);
        assert_eq!(line.gross_amount, 30.00);
        assert_eq!(manager.cart().order.gross_amount, 30.00);
    }

    #[test]
    fn test_add_line_without_number_appends_at_next_slot() {
        let mut manager = manager();
        manager.add_line(LineInput {
            description: Some("first".to_string()),
            ..LineInput::default()
        });
        manager.add_line(LineInput {
            description: Some("second".to_string()),
            ..LineInput::default()
        });

        assert_eq!(manager.cart().lines.len(), 2);
        assert_eq!(manager.cart().lines[0].line_no, 1);
        assert_eq!(manager.cart().lines[1].line_no, 2);
        // Unspecified fields keep the new-line defaults.
        assert_eq!(manager.cart().lines[0].quantity, 1);
        assert!(manager.cart().lines[0].is_active());
    }

    #[test]
    fn test_add_line_ignores_removed_line_with_same_number() {
        let mut manager = manager();
        manager.add_line(priced(1, 1, 9.99));
        manager.cart_mut().lines[0].id = Some(500);
        manager.remove_line(1);

        manager.add_line(priced(1, 2, 19.98));

        let lines = &manager.cart().lines;
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].status, LineStatus::Removed);
        assert_eq!(lines[1].line_no, 1);
        assert!(lines[1].is_active());
        // Only the active duplicate counts.
        assert_eq!(manager.totals().quantity, 2);
        assert_eq!(manager.cart().order.gross_amount, 19.98);
    }

    #[test]
    fn test_remove_line_soft_removes_persisted_lines() {
        let mut manager = manager();
        manager.add_line(priced(1, 1, 25.00));
        manager.cart_mut().lines[0].id = Some(77);

        manager.remove_line(1);

        assert_eq!(manager.cart().lines.len(), 1);
        assert_eq!(manager.cart().lines[0].status, LineStatus::Removed);
        assert!(manager.is_empty());
        assert_eq!(manager.cart().order.gross_amount, 0.0);
    }

    #[test]
    fn test_remove_line_hard_removes_unpersisted_lines() {
        let mut manager = manager();
        manager.add_line(priced(1, 1, 25.00));

        manager.remove_line(1);

        assert!(manager.cart().lines.is_empty());
    }

    #[test]
    fn test_remove_line_with_unknown_number_is_a_noop() {
        let mut manager = manager();
        manager.add_line(priced(1, 2, 12.34));

        manager.remove_line(9);

        assert_eq!(manager.cart().lines.len(), 1);
        assert_eq!(manager.cart().order.gross_amount, 12.34);
    }

    #[test]
    fn test_recompute_sums_active_lines_and_spares_epay_commission() {
        let mut manager = manager();
        manager.cart_mut().order.epay_commission = 1.50;
        manager.add_line(priced(1, 2, 19.98));
        manager.add_line(priced(2, 1, 0.12));

        let order = &manager.cart().order;
        assert_eq!(order.gross_amount, 20.10);
        assert_eq!(order.net_amount, 20.10);
        assert_eq!(order.epay_commission, 1.50);
        // Non-zero gross leaves the shell's payment fields untouched.
        assert_eq!(order.payment_type.as_deref(), Some(""));
        assert!(order.payment_note.is_none());
    }

    #[test]
    fn test_zero_gross_total_stamps_no_payment_sentinel() {
        let mut manager = manager();
        manager.add_line(LineInput {
            description: Some("free sample".to_string()),
            ..LineInput::default()
        });

        let order = &manager.cart().order;
        assert_eq!(order.gross_amount, 0.0);
        assert_eq!(order.payment_type.as_deref(), Some("OT"));
        assert_eq!(order.payment_note.as_deref(), Some("No Payment Needed"));
    }

    #[test]
    fn test_clear_drops_every_line_and_stamps_sentinel() {
        let mut manager = manager();
        manager.add_line(priced(1, 1, 10.00));
        manager.cart_mut().lines[0].id = Some(3);
        manager.add_line(priced(2, 1, 5.00));

        manager.clear();

        assert!(manager.cart().lines.is_empty());
        assert_eq!(manager.cart().order.gross_amount, 0.0);
        assert_eq!(manager.cart().order.payment_type.as_deref(), Some("OT"));
        assert_eq!(
            manager.cart().order.payment_note.as_deref(),
            Some("No Payment Needed")
        );
    }

    #[test]
    fn test_totals_accumulate_exactly_over_float_prices() {
        let mut manager = manager();
        for n in 1..=10 {
            manager.add_line(priced(n, 1, 0.1));
        }

        assert_eq!(manager.cart().order.gross_amount, 1.0);
        assert_eq!(manager.totals().quantity, 10);
    }
}
