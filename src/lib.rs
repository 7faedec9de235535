//! Read and write property lists through one stable interface.
//!
//! All encoding and decoding is done by the [plist] crate. This crate only
//! takes care of file handling and of turning every failure into either a
//! [ReadError] or a [WriteError], both of which convert into [PlistError].
//!
//! ```
//! use plistio::{Dictionary, Value};
//!
//! let mut dict = Dictionary::new();
//! dict.insert("name".into(), Value::String("test".into()));
//! dict.insert("count".into(), Value::Integer(3i64.into()));
//! let value = Value::Dictionary(dict);
//!
//! let bytes = plistio::write_plist_to_bytes(&value)?;
//! assert_eq!(plistio::read_plist_from_bytes(&bytes)?, value);
//! # Ok::<(), plistio::PlistError>(())
//! ```

mod codec;
mod error;
mod input;
#[cfg(feature = "serde")]
pub mod typed;

pub use codec::*;
pub use error::*;
pub use input::*;
pub use plist::{Date, Dictionary, Integer, Uid, Value};
