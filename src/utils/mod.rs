mod pagination;
mod password;
mod validate;

pub use pagination::*;
pub use password::*;
pub use validate::*;
