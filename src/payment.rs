//! Payment boundary.

use rust_decimal::Decimal;

/// Attempts to charge an amount. `false` means declined, not faulted; the
/// caller treats a decline as final and does not retry.
pub trait PaymentAuthorizer: Send + Sync {
    fn charge(&self, amount: Decimal) -> bool;
}

/// Stand-in gateway that approves any strictly positive amount.
#[derive(Debug, Clone, Default)]
pub struct BasicPayment;

impl PaymentAuthorizer for BasicPayment {
    fn charge(&self, amount: Decimal) -> bool {
        amount > Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_payment_approves_positive_amounts_only() {
        let gateway = BasicPayment;
        assert!(gateway.charge(Decimal::new(1929, 2)));
        assert!(!gateway.charge(Decimal::ZERO));
        assert!(!gateway.charge(Decimal::new(-100, 2)));
    }
}
