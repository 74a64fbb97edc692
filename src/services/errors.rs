use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum BasketServiceError {
    #[error("Basket cookie is malformed")]
    MalformedBasketCookie,
    #[error("Book not found")]
    BookNotFound,
    #[error("Count must be at least 1")]
    InvalidCount,
    #[error("Basket cookie could not be encoded")]
    CookieEncoding,
    #[error("Database error")]
    DatabaseError,
}

#[derive(Debug, Error, PartialEq)]
pub enum OrderServiceError {
    #[error("Order not found")]
    OrderNotFound,
    #[error("Member not found")]
    MemberNotFound,
    #[error("Basket is empty")]
    EmptyBasket,
    #[error("Order creation failed")]
    OrderCreationFailed,
    #[error("Order update failed")]
    OrderUpdateFailed,
    #[error("Permission denied")]
    PermissionDenied,
    #[error("Invalid status transition")]
    InvalidStatusTransition,
    #[error("Database error")]
    DatabaseError,
}

#[derive(Debug, Error, PartialEq)]
pub enum BookServiceError {
    #[error("Book not found")]
    BookNotFound,
    #[error("Database error")]
    DatabaseError,
}

#[derive(Debug, Error, PartialEq)]
pub enum AccountServiceError {
    #[error("User name is already taken")]
    UserNameTaken,
    #[error("Email is already registered")]
    EmailTaken,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Password processing failed")]
    PasswordProcessing,
    #[error("Token creation failed")]
    TokenCreation,
    #[error("Database error")]
    DatabaseError,
}
