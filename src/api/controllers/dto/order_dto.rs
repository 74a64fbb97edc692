use crate::data::models::book::Book;
use crate::data::models::order::Order;
use crate::data::models::order_item::OrderItem;
use crate::services::order_service::OrderDetails;
use crate::services::pricing::{self, Priced};
use bigdecimal::BigDecimal;
use serde::Serialize;

fn order_total(items: &[OrderItem]) -> BigDecimal {
    items
        .iter()
        .map(|i| pricing::line_total(&i.effective_price(), i.count))
        .sum()
}

#[derive(Serialize)]
pub struct OrderSummaryResponse {
    pub id: i32,
    pub status: String,
    pub created_at: String,
    pub item_count: i64,
    pub total_price: BigDecimal,
}

impl From<(Order, Vec<OrderItem>)> for OrderSummaryResponse {
    fn from((order, items): (Order, Vec<OrderItem>)) -> Self {
        Self {
            id: order.id,
            status: order.status,
            created_at: order.created_at.to_string(),
            item_count: items.iter().map(|i| i64::from(i.count)).sum(),
            total_price: order_total(&items),
        }
    }
}

#[derive(Serialize)]
pub struct OrderLineResponse {
    pub book_id: i32,
    pub book_name: String,
    pub count: i32,
    pub sale_price: BigDecimal,
    pub discount_percent: BigDecimal,
    pub unit_price: BigDecimal,
    pub line_total: BigDecimal,
}

impl From<(OrderItem, Book)> for OrderLineResponse {
    fn from((item, book): (OrderItem, Book)) -> Self {
        let unit_price = item.effective_price();

        Self {
            book_id: item.book_id,
            book_name: book.name,
            count: item.count,
            line_total: pricing::line_total(&unit_price, item.count),
            unit_price,
            sale_price: item.sale_price,
            discount_percent: item.discount_percent,
        }
    }
}

#[derive(Serialize)]
pub struct OrderDetailsResponse {
    pub id: i32,
    pub status: String,
    pub full_name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
    pub note: Option<String>,
    pub created_at: String,
    pub items: Vec<OrderLineResponse>,
    pub total_price: BigDecimal,
}

impl From<OrderDetails> for OrderDetailsResponse {
    fn from(details: OrderDetails) -> Self {
        let OrderDetails { order, lines } = details;

        let items: Vec<OrderItem> = lines.iter().map(|(item, _)| item.clone()).collect();
        let total_price = order_total(&items);

        Self {
            id: order.id,
            status: order.status,
            full_name: order.full_name,
            email: order.email,
            address: order.address,
            phone: order.phone,
            note: order.note,
            created_at: order.created_at.to_string(),
            items: lines.into_iter().map(OrderLineResponse::from).collect(),
            total_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn item(order_id: i32, book_id: i32, count: i32, sale: &str, discount: &str) -> OrderItem {
        OrderItem {
            id: book_id,
            order_id,
            book_id,
            count,
            sale_price: BigDecimal::from_str(sale).unwrap(),
            discount_percent: BigDecimal::from_str(discount).unwrap(),
            cost_price: BigDecimal::from(1),
        }
    }

    fn order(id: i32) -> Order {
        Order {
            id,
            user_id: 3,
            full_name: "Avid Reader".to_string(),
            email: "reader@example.com".to_string(),
            address: "1 Main St".to_string(),
            phone: "5550100".to_string(),
            note: None,
            status: "Pending".to_string(),
            created_at: chrono::NaiveDate::from_ymd_opt(2024, 4, 22)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
            updated_at: None,
        }
    }

    #[test]
    fn summary_total_uses_snapshot_prices() {
        let items = vec![item(1, 1, 3, "100", "20"), item(1, 2, 1, "15.50", "0")];

        let summary = OrderSummaryResponse::from((order(1), items));

        assert_eq!(summary.item_count, 4);
        assert_eq!(summary.total_price, BigDecimal::from_str("255.50").unwrap());
        assert_eq!(summary.status, "Pending");
    }

    #[test]
    fn order_without_items_totals_zero() {
        let summary = OrderSummaryResponse::from((order(2), Vec::new()));

        assert_eq!(summary.item_count, 0);
        assert_eq!(summary.total_price, BigDecimal::from(0));
    }

    #[test]
    fn item_count_does_not_wrap_on_large_lines() {
        let items = vec![item(3, 1, i32::MAX, "1", "0"), item(3, 2, i32::MAX, "1", "0")];

        let summary = OrderSummaryResponse::from((order(3), items));

        assert_eq!(summary.item_count, 2 * i64::from(i32::MAX));
    }
}
