//! Pure string transforms backing the template helpers
//!
//! Nothing in here knows about templates or JSON values. The helper layer
//! takes care of missing arguments and type checks before calling in.

pub mod affix;
pub mod case;
pub mod pattern;

pub use affix::{remove_prefix, remove_suffix, trim};
pub use case::{
    camel_case, lower_first, lowercase, pascal_case, snake_case, upper_first, uppercase,
};
pub use pattern::{is_match, replace_all};
