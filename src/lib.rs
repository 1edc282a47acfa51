pub mod expr;
pub mod session;

pub use expr::strip_whitespace;
pub use session::{EvalError, Session};
