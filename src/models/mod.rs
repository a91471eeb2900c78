pub mod document;
pub mod pricing;
pub mod user;

pub use document::*;
pub use pricing::*;
pub use user::*;
