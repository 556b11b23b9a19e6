pub mod controller;
pub mod log;
pub mod session;

pub use controller::*;
pub use log::*;
pub use session::*;
