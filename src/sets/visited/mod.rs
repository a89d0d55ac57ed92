mod identity_set;
mod key_set;
mod visitor_set;

pub use identity_set::*;
pub use key_set::*;
pub use visitor_set::*;
