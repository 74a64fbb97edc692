use crate::data::models::basket_item::BasketItem;
use crate::data::models::book::Book;
use crate::data::models::order::{NewOrder, Order, UpdateOrder};
use crate::data::models::order_item::{NewOrderItem, OrderItem};
use crate::data::models::user::User;
use crate::data::repos::implementors::order_repo::OrderRepo;
use crate::data::repos::implementors::user_repo::UserRepo;
use crate::data::repos::traits::repository::Repository;
use crate::services::errors::OrderServiceError;
use serde::Serialize;

const MAX_ADDRESS_LEN: usize = 255;
const MAX_PHONE_LEN: usize = 50;
const MAX_NOTE_LEN: usize = 1000;

/// Order statuses for workflow management
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Accepted,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Accepted => "Accepted",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Pending may be accepted or cancelled, accepted may be completed or
    /// cancelled. Completed and cancelled orders are final.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::Accepted)
                | (OrderStatus::Pending, OrderStatus::Cancelled)
                | (OrderStatus::Accepted, OrderStatus::Completed)
                | (OrderStatus::Accepted, OrderStatus::Cancelled)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOrderStatus(pub String);

impl std::str::FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "accepted" => Ok(OrderStatus::Accepted),
            "completed" => Ok(OrderStatus::Completed),
            "cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(UnknownOrderStatus(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Shipping details a member submits at checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderContact {
    pub address: String,
    pub phone: String,
    pub note: Option<String>,
}

impl OrderContact {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        let address = self.address.trim();
        if address.is_empty() {
            errors.push(FieldError { field: "address", message: "Address is required" });
        } else if address.chars().count() > MAX_ADDRESS_LEN {
            errors.push(FieldError { field: "address", message: "Address is too long" });
        }

        let phone = self.phone.trim();
        if phone.is_empty() {
            errors.push(FieldError { field: "phone", message: "Phone is required" });
        } else if phone.chars().count() > MAX_PHONE_LEN {
            errors.push(FieldError { field: "phone", message: "Phone is too long" });
        } else if !phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'))
            || !phone.chars().any(|c| c.is_ascii_digit())
        {
            errors.push(FieldError { field: "phone", message: "Phone number is invalid" });
        }

        if self.note.as_deref().is_some_and(|n| n.chars().count() > MAX_NOTE_LEN) {
            errors.push(FieldError { field: "note", message: "Note is too long" });
        }

        errors
    }
}

/// Copies each book's current price fields into an order line.
pub fn snapshot_basket(rows: &[(BasketItem, Book)]) -> Vec<NewOrderItem> {
    rows.iter()
        .map(|(item, book)| NewOrderItem::snapshot(book, item.count))
        .collect()
}

pub fn new_pending_order(user: &User, contact: OrderContact, placed_at: chrono::NaiveDateTime) -> NewOrder {
    let note = contact
        .note
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());

    NewOrder {
        user_id: user.id,
        full_name: user.full_name.clone(),
        email: user.email.clone(),
        address: contact.address.trim().to_string(),
        phone: contact.phone.trim().to_string(),
        note,
        status: OrderStatus::Pending.as_str().to_string(),
        created_at: placed_at,
    }
}

/// One order with each line and the book it references.
#[derive(Debug, Clone)]
pub struct OrderDetails {
    pub order: Order,
    pub lines: Vec<(OrderItem, Book)>,
}

pub struct OrderService;

impl OrderService {
    pub fn new() -> Self {
        OrderService
    }

    /// Turns the member's live basket into a pending order and returns its id.
    /// Prices come from the books as they are now, not from any earlier basket view.
    pub async fn checkout(&self, user_id: i32, contact: OrderContact) -> Result<i32, OrderServiceError> {
        let user = UserRepo::new()
            .get_by_id(user_id)
            .await
            .map_err(|_| OrderServiceError::DatabaseError)?
            .ok_or(OrderServiceError::MemberNotFound)?;

        let new_order = new_pending_order(&user, contact, chrono::Utc::now().naive_utc());

        let order_id = OrderRepo::new()
            .create_from_basket(new_order)
            .await
            .map_err(|e| {
                tracing::error!("Error creating order for user {}: {}", user_id, e);
                OrderServiceError::OrderCreationFailed
            })?
            .ok_or(OrderServiceError::EmptyBasket)?;

        tracing::info!("Order {} placed by user {}", order_id, user_id);

        Ok(order_id)
    }

    /// Members only see their own orders; for anyone else the order does not exist.
    pub async fn get_order_details(
        &self,
        order_id: i32,
        requester_id: i32,
        is_admin: bool,
    ) -> Result<OrderDetails, OrderServiceError> {
        let (order, lines) = OrderRepo::new()
            .get_with_items(order_id)
            .await
            .map_err(|_| OrderServiceError::DatabaseError)?
            .ok_or(OrderServiceError::OrderNotFound)?;

        if !is_admin && order.user_id != requester_id {
            tracing::warn!("User {} requested order {} of another user", requester_id, order_id);
            return Err(OrderServiceError::OrderNotFound);
        }

        Ok(OrderDetails { order, lines })
    }

    /// Gets all orders for a specific user, newest first
    pub async fn get_user_orders(&self, user_id: i32) -> Result<Vec<(Order, Vec<OrderItem>)>, OrderServiceError> {
        let repo = OrderRepo::new();

        let orders = repo
            .get_by_user_id(user_id)
            .await
            .map_err(|_| OrderServiceError::DatabaseError)?;

        repo.attach_items(orders)
            .await
            .map_err(|_| OrderServiceError::DatabaseError)
    }

    /// Gets all orders (admin only)
    pub async fn get_all_orders(&self, is_admin: bool) -> Result<Vec<(Order, Vec<OrderItem>)>, OrderServiceError> {
        if !is_admin {
            return Err(OrderServiceError::PermissionDenied);
        }

        let repo = OrderRepo::new();

        let orders = repo
            .get_all()
            .await
            .map_err(|_| OrderServiceError::DatabaseError)?
            .unwrap_or_default();

        repo.attach_items(orders)
            .await
            .map_err(|_| OrderServiceError::DatabaseError)
    }

    /// Updates order status (admin only)
    pub async fn update_order_status(
        &self,
        order_id: i32,
        new_status: OrderStatus,
        is_admin: bool,
    ) -> Result<(), OrderServiceError> {
        if !is_admin {
            return Err(OrderServiceError::PermissionDenied);
        }

        let repo = OrderRepo::new();

        let order = repo
            .get_by_id(order_id)
            .await
            .map_err(|_| OrderServiceError::DatabaseError)?
            .ok_or(OrderServiceError::OrderNotFound)?;

        let current: OrderStatus = order.status.parse().map_err(|_| {
            tracing::error!("Order {} has an unknown stored status {:?}", order_id, order.status);
            OrderServiceError::DatabaseError
        })?;

        if !current.can_transition_to(new_status) {
            return Err(OrderServiceError::InvalidStatusTransition);
        }

        let update = UpdateOrder {
            address: None,
            phone: None,
            note: None,
            status: Some(new_status.as_str()),
        };

        repo.update(order_id, update)
            .await
            .map_err(|_| OrderServiceError::OrderUpdateFailed)?;

        tracing::info!(
            "Order {} moved from {} to {}",
            order_id,
            current.as_str(),
            new_status.as_str()
        );

        Ok(())
    }
}

impl Default for OrderService {
    fn default() -> Self {
        Self::new()
    }
}
