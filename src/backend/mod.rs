//! Computation backends behind a common trait.

pub mod native;
pub mod pure;
pub mod traits;

pub use native::{library_file_name, NativeBackend, NativeOrigin};
pub use pure::PureBackend;
pub use traits::{BackendError, BackendKind, ComputeBackend, FailureClass};
