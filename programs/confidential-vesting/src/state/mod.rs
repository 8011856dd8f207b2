pub mod index;
pub mod record;
pub mod registry;
pub mod release;
pub mod verification;

pub use index::*;
pub use record::*;
pub use registry::*;
pub use verification::*;
