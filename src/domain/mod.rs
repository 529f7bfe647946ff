pub mod plant;
pub mod request;

pub use plant::*;
pub use request::*;
