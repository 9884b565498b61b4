//! Record module - Contains the typed rows for the six source tables.
//! Each table has its own file; rows are deserialized straight out of the
//! CSV headers at load time and never mutated afterwards.

pub mod category_translation;
pub mod customer;
pub mod order;
pub mod order_item;
pub mod payment;
pub mod product;

pub use category_translation::CategoryTranslation;
pub use customer::Customer;
pub use order::Order;
pub use order_item::OrderItem;
pub use payment::Payment;
pub use product::Product;
