pub mod model;
pub mod schemes;

pub use model::{DublinCore, DublinCoreDocument};
