//! Command implementations

mod init;
mod sync;
mod validate;

pub use init::run_init;
pub use sync::run_sync;
pub use validate::run_validate;
