//! Cart aggregate
//!
//! One open sales order plus its lines, held client-side while the user
//! shops. Totals derive from the active lines only; the server copy is
//! refreshed through the cart endpoints.

use crate::models::{OrderLine, SalesOrder, STATUS_ACTIVE};
use crate::util::{to_decimal, to_f64};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order name stamped on carts created client-side.
pub const CART_ORDER_NAME: &str = "UserCart";
/// Order description stamped on carts created client-side.
pub const CART_ORDER_DESCRIPTION: &str = "User Cart";
/// Order discriminator for cart orders.
pub const CART_ORDER_TYPE: &str = "G";
/// Payment type stamped when nothing is owed.
pub const NO_PAYMENT_TYPE: &str = "OT";
/// Payment note stamped when nothing is owed.
pub const NO_PAYMENT_NOTE: &str = "No Payment Needed";

/// Cart aggregate - one order and its lines
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    pub order: SalesOrder,
    pub lines: Vec<OrderLine>,
}

impl Cart {
    /// Create the default cart shell for a user: no lines, zero totals,
    /// order dated now.
    pub fn new(user_id: i64) -> Self {
        let order_date = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        Self {
            order: SalesOrder {
                id: None,
                year: None,
                name: CART_ORDER_NAME.to_string(),
                description: Some(CART_ORDER_DESCRIPTION.to_string()),
                order_number: None,
                contract_number: None,
                order_status: None,
                order_type: Some(CART_ORDER_TYPE.to_string()),
                parent_id: None,
                user_id,
                approver_id: None,
                order_date: Some(order_date),
                expiry_date: None,
                net_amount: 0.0,
                tax: 0.0,
                discount: 0.0,
                epay_commission: 0.0,
                gross_amount: 0.0,
                payment_type: Some(String::new()),
                payment_ref: None,
                payment_link: None,
                payment_date: None,
                payment_note: None,
                notes: None,
                meta: None,
                status: STATUS_ACTIVE.to_string(),
            },
            lines: Vec::new(),
        }
    }

    /// Lines that count toward totals.
    pub fn active_lines(&self) -> impl Iterator<Item = &OrderLine> {
        self.lines.iter().filter(|line| line.is_active())
    }

    /// Whether the cart holds no active lines.
    pub fn is_empty(&self) -> bool {
        self.active_lines().next().is_none()
    }

    /// Fold the active lines into derived totals.
    pub fn totals(&self) -> CartTotals {
        CartTotals::of(self.active_lines())
    }
}

/// Derived sums over the active cart lines
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct CartTotals {
    pub quantity: i32,
    pub net_amount: f64,
    pub gross_amount: f64,
    pub tax: f64,
    pub discount: f64,
}

impl CartTotals {
    /// Sum lines with decimal arithmetic, each total rounded to two places.
    pub fn of<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a OrderLine>,
    {
        let mut quantity = 0i32;
        let mut net = Decimal::ZERO;
        let mut gross = Decimal::ZERO;
        let mut tax = Decimal::ZERO;
        let mut discount = Decimal::ZERO;
        for line in lines {
            quantity += line.quantity;
            net += to_decimal(line.net_amount);
            gross += to_decimal(line.gross_amount);
            tax += to_decimal(line.tax);
            discount += to_decimal(line.discount);
        }
        Self {
            quantity,
            net_amount: to_f64(net),
            gross_amount: to_f64(gross),
            tax: to_f64(tax),
            discount: to_f64(discount),
        }
    }

    /// Whether nothing is owed.
    pub fn is_zero_gross(&self) -> bool {
        self.gross_amount == 0.0
    }
}

/// Payment choice offered at checkout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentOption {
    pub id: String,
    pub label: String,
}

/// Payment choices offered at checkout.
///
/// The `"OT"` sentinel is stamped by the totals rule, never offered here.
pub fn payment_options() -> Vec<PaymentOption> {
    [
        ("credit_card", "Credit Card"),
        ("invoice", "Invoice"),
        ("paypal", "PayPal"),
    ]
    .into_iter()
    .map(|(id, label)| PaymentOption {
        id: id.to_string(),
        label: label.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LineStatus;

    fn line(line_no: u32, quantity: i32, gross: f64, status: LineStatus) -> OrderLine {
        let mut line = OrderLine::new(line_no);
        line.quantity = quantity;
        line.net_amount = gross;
        line.gross_amount = gross;
        line.status = status;
        line
    }

    #[test]
    fn test_new_cart_is_an_empty_active_shell() {
        let cart = Cart::new(42);
        assert_eq!(cart.order.user_id, 42);
        assert_eq!(cart.order.name, CART_ORDER_NAME);
        assert_eq!(cart.order.description.as_deref(), Some(CART_ORDER_DESCRIPTION));
        assert_eq!(cart.order.order_type.as_deref(), Some(CART_ORDER_TYPE));
        assert_eq!(cart.order.status, STATUS_ACTIVE);
        assert!(cart.order.order_date.is_some());
        assert!(cart.order.id.is_none());
        assert!(cart.is_empty());
        assert_eq!(cart.totals(), CartTotals::default());
    }

    #[test]
    fn test_totals_fold_active_lines_only() {
        let cart = Cart {
            lines: vec![
                line(1, 2, 19.98, LineStatus::Active),
                line(2, 1, 5.00, LineStatus::Removed),
                line(3, 3, 0.12, LineStatus::Active),
                line(4, 1, 7.77, LineStatus::Deleted),
            ],
            ..Cart::new(1)
        };

        let totals = cart.totals();
        assert_eq!(totals.quantity, 5);
        assert_eq!(totals.gross_amount, 20.10);
        assert_eq!(totals.net_amount, 20.10);
        assert_eq!(totals.tax, 0.0);
        assert!(!cart.is_empty());
    }

    #[test]
    fn test_totals_sum_exactly_despite_float_inputs() {
        let cart = Cart {
            lines: (1..=10).map(|n| line(n, 1, 0.1, LineStatus::Active)).collect(),
            ..Cart::new(1)
        };

        assert_eq!(cart.totals().gross_amount, 1.0);
    }

    #[test]
    fn test_removed_and_deleted_lines_leave_the_cart_empty() {
        let cart = Cart {
            lines: vec![line(1, 1, 9.99, LineStatus::Removed)],
            ..Cart::new(1)
        };
        assert!(cart.is_empty());
        assert!(cart.totals().is_zero_gross());
    }
}
