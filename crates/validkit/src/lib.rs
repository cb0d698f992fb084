//! validkit
//!
//! Stateless validation predicates shared by server-side and client-side
//! code. Every function is pure: a value goes in, a boolean verdict comes
//! out. Failure to validate is `false`, never an error or a panic.

pub mod date;
pub mod email;
pub mod numeric;
pub mod password;
pub mod phone;
pub mod string;
pub mod url;

// Re-export all validators
pub use self::date::*;
pub use self::email::*;
pub use self::numeric::*;
pub use self::password::*;
pub use self::phone::*;
pub use self::string::*;
pub use self::url::*;
