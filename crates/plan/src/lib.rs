mod error;
mod plan;
mod session;
mod suggestion;
mod types;

pub use error::*;
pub use plan::*;
pub use session::*;
pub use suggestion::*;
pub use types::*;
