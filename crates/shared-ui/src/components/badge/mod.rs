mod component;
mod variant;

pub use component::*;
pub use variant::*;
