pub mod errors;
pub mod order;
pub mod payload;

pub use errors::DomainError;
pub use order::{map_order, ItemDocument, OrderDocument};
pub use payload::{ItemPayload, OrderPayload};
