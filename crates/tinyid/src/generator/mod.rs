mod basic;
mod interface;
mod lock;
mod mutex;
mod state;

#[cfg(feature = "thread-local")]
mod thread_local;

pub use basic::*;
pub use interface::*;
pub use lock::*;
#[cfg_attr(docsrs, doc(cfg(feature = "thread-local")))]
#[cfg(feature = "thread-local")]
pub use thread_local::*;
