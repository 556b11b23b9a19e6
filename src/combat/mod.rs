pub mod actions;
pub mod animation;
pub mod math;
pub mod policy;
pub mod spawn;
pub mod types;

pub use actions::*;
pub use animation::*;
pub use math::*;
pub use policy::*;
pub use spawn::*;
pub use types::*;
