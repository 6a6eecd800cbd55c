//! Chain of responsibility over three independent types: the callback handler
//! `H` kept by every node, the data `D` offered to the chain and the result `R`
//! of the consumer that claims it.

pub mod consumer;
pub mod error;
pub mod node;

pub use consumer::*;
pub use error::*;
pub use node::*;
