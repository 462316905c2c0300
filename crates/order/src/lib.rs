pub mod cart;
pub mod cart_item;
pub mod payment;
pub mod transaction;

pub use payment::{HttpPaymentGateway, PaymentGateway};
