//! A generic optional value with JSON and SQL integration.
//!
//! [`Optional<T>`] holds either a value of type `T` or nothing. It bridges
//! the usual ways of signalling absence into one explicit type:
//!
//! - nullable references: [`Optional::from_ptr`], [`Optional::ptr`]
//! - results: [`Optional::from_result`]
//! - `(value, found)` pairs: [`Optional::from_existence_check`]
//! - iterators: [`Optional::from_iterator`], [`Optional::iter`]
//!
//! Predicates and combinators live in [`ops`] and are re-exported here.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize`; absent values are `null`
//! - `json`: [`json::to_json`], [`json::from_json`] and `Optional::unmarshal_json`
//! - `sqlx`: binds absent values as SQL `NULL` and decodes `NULL` as absent
//!
//! All three are enabled by default.
//!
//! ```
//! use optional::{Optional, or};
//!
//! let configured = Optional::<u16>::none();
//! let from_env = Optional::from_result("8080".parse::<u16>());
//!
//! let port = or([configured, from_env, Optional::some(80)]);
//! assert_eq!(port, Optional::some(8080));
//! ```

mod optional;
pub mod ops;

#[cfg(feature = "serde")]
mod serialize;

#[cfg(feature = "json")]
pub mod json;

#[cfg(feature = "sqlx")]
mod sql;

pub use optional::{IntoIter, Iter, IterMut, Optional};
pub use ops::{equal, is_none, is_some, or, unwrap};
