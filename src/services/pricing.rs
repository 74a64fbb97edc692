//! Discount arithmetic shared by the basket, checkout and order views.

use bigdecimal::{BigDecimal, Zero};

/// Anything carrying a sale price and a discount percentage.
pub trait Priced {
    fn sale_price(&self) -> &BigDecimal;
    fn discount_percent(&self) -> &BigDecimal;

    fn effective_price(&self) -> BigDecimal {
        effective_price(self.sale_price(), self.discount_percent())
    }
}

/// Sale price after the discount percentage is applied.
///
/// `sale_price * (100 - discount_percent) / 100` when the discount is positive,
/// otherwise `sale_price` unchanged.
pub fn effective_price(sale_price: &BigDecimal, discount_percent: &BigDecimal) -> BigDecimal {
    if discount_percent > &BigDecimal::zero() {
        let hundred = BigDecimal::from(100);
        sale_price * (&hundred - discount_percent) / hundred
    } else {
        sale_price.clone()
    }
}

pub fn line_total(unit_price: &BigDecimal, count: i32) -> BigDecimal {
    unit_price * BigDecimal::from(count)
}

/// Sums `count * unit_price` over the given lines.
pub fn total<'a, I>(lines: I) -> BigDecimal
where
    I: IntoIterator<Item = (&'a BigDecimal, i32)>,
{
    lines
        .into_iter()
        .fold(BigDecimal::zero(), |acc, (price, count)| acc + line_total(price, count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn discount_is_applied_when_positive() {
        assert_eq!(effective_price(&dec("100"), &dec("20")), dec("80"));
        assert_eq!(effective_price(&dec("19.99"), &dec("12.50")), dec("17.49125"));
    }

    #[test]
    fn zero_discount_keeps_sale_price() {
        assert_eq!(effective_price(&dec("42.50"), &dec("0")), dec("42.50"));
    }

    #[test]
    fn negative_discount_is_ignored() {
        assert_eq!(effective_price(&dec("10"), &dec("-5")), dec("10"));
    }

    #[test]
    fn total_sums_count_times_price() {
        let eighty = effective_price(&dec("100"), &dec("20"));
        assert_eq!(line_total(&eighty, 3), dec("240"));

        let ten = dec("10");
        assert_eq!(total([(&eighty, 3), (&ten, 2)]), dec("260"));
    }

    #[test]
    fn total_of_nothing_is_zero() {
        assert_eq!(total(std::iter::empty()), BigDecimal::zero());
    }
}
