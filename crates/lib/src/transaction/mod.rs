mod amount;
mod builder;
mod transaction;
mod verifier;
pub use amount::*;
pub use builder::*;
pub use transaction::*;
pub use verifier::*;
