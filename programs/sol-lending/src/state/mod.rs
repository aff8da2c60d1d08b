pub mod balance;
pub mod config;
pub mod global_state;
pub mod order;
pub mod receipt;

pub use balance::*;
pub use config::*;
pub use global_state::*;
pub use order::*;
pub use receipt::*;
