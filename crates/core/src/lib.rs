pub mod driver;
pub mod error;
pub mod keys;
pub mod logger;
pub mod platform;
pub mod readiness;
pub mod routine;
pub mod script;
pub mod simulator;
pub mod sleep;
pub mod types;

pub use error::InputError;
pub use script::{ActionStep, TaskScript};
pub use simulator::{InputSimulator, Simulator};
pub use types::{ScreenGeometry, ScreenPoint};
