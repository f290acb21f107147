mod assertions;
mod scenes;
mod setup;

pub use assertions::*;
pub use scenes::*;
pub use setup::*;
