pub(crate) use super::macros::*;
pub use super::{request::*, response::*, setup::*, user::*};
pub use eventos_backend::error;
pub use http::StatusCode;
pub use serde_json::{json, Value};
