//! # Cowbell
//!
//! Copy-on-write wrappers for dynamic container values.
//!
//! A wrapper starts out aliasing an existing container and duplicates it
//! the first time a mutating operation is attempted, so the holder of
//! the original never observes a change made through the wrapper. Reads
//! are free; the cost of the deep copy is deferred until a write
//! actually happens, and paid at most once per wrapper.
//!
//! ## Example
//!
//! ```
//! use cowbell::{wrap, CowValue, Value};
//!
//! let original = Value::list(vec![Value::Int(1), Value::Int(2)]);
//! let mut cow = wrap(original.clone())?;
//!
//! // Reads alias the original: no copy yet
//! assert!(cow.is_shared());
//!
//! // The first write copies, then mutates only the copy
//! if let CowValue::Seq(seq) = &mut cow {
//!     seq.append(Value::Int(3));
//! }
//! assert_eq!(cow, Value::list(vec![Value::Int(1), Value::Int(2), Value::Int(3)]));
//! assert_eq!(original, Value::list(vec![Value::Int(1), Value::Int(2)]));
//! # Ok::<(), cowbell::CowError>(())
//! ```
//!
//! ## Architecture
//!
//! - **Value model**: a closed dynamic [`Value`] enum (scalars plus the
//!   four container kinds), with aliasing clones and explicit
//!   [`DeepClone`] duplication
//! - **Wrapper family**: one wrapper type per kind behind the
//!   [`CowValue`] dispatch enum, so each kind only exposes its own
//!   mutators
//! - **Single-threaded by contract**: handles are `Rc`, the
//!   shared-to-private transition is not atomic, and no synchronization
//!   is provided

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cow;
pub mod error;
pub mod value;

// Re-export main types
pub use cow::{wrap, CowMap, CowSeq, CowSet, CowText, CowValue};
pub use error::{type_name, CowError, Result};
pub use value::{DeepClone, HashableValue, Kind, Value};

/// Cowbell version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
