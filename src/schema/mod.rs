pub mod model;
pub mod types;
pub mod validate;

pub use model::restaurant_model;
pub use types::*;
pub use validate::validate;
