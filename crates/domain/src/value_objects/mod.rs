//! Value objects - Immutable objects defined by their attributes

mod amount;
mod color;
mod model_year;

pub use amount::{NonNegativeAmount, PositiveAmount};
pub use color::Color;
pub use model_year::{ModelYear, FIRST_MODEL_YEAR};
