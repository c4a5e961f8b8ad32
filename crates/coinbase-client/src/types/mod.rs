/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs/enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod entities;
pub mod enums;
pub mod envelope;
pub mod money;
pub mod requests;
pub mod timestamp;

pub use entities::{Account, Address, Button, Contact, Order, Quote, Transaction, Transfer, User};
pub use enums::*;
pub use envelope::{ApiResponse, Pagination};
pub use money::Money;
pub use requests::*;
pub use timestamp::Timestamp;
