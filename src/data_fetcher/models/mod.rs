// Generic response models
pub mod model;
pub mod response;

pub use model::{Attr, Model};
pub use response::Response;
