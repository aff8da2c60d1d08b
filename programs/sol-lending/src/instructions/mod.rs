pub mod initialize;
pub mod deposit;
pub mod withdraw;
pub mod place_order;
pub mod cancel_order;
pub mod borrow;
pub mod repay;

pub use initialize::*;
pub use deposit::*;
pub use withdraw::*;
pub use place_order::*;
pub use cancel_order::*;
pub use borrow::*;
pub use repay::*;
