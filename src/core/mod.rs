pub mod scale;
pub mod types;

pub use scale::LinearScale;
pub use types::{AxisValue, Coords, LinePoints, Point};
