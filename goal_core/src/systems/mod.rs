pub mod animation;
pub mod collision;
pub mod reset;
pub mod scoring;

pub use animation::*;
pub use collision::*;
pub use reset::*;
pub use scoring::*;
