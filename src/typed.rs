//! Reading and writing plists straight into Rust types through `serde`.

use crate::{
    PlistCodec, PlistFormat, ReadError, WriteError,
    codec::{create, decode_error, encode_error, open},
};
use log::debug;
use serde::{Serialize, de::DeserializeOwned};
use std::{
    io::{Cursor, Write},
    path::Path,
};

impl PlistCodec {
    /// Reads a plist file and deserializes it into `T`.
    pub fn read_typed_from_path<T, P>(&self, path: P) -> Result<T, ReadError>
    where
        T: DeserializeOwned,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        debug!("Reading typed plist from '{}'", path.display());
        plist::from_reader(open(path)?).map_err(decode_error)
    }

    /// Deserializes `T` from a plist byte slice.
    pub fn read_typed_from_bytes<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, ReadError> {
        plist::from_reader(Cursor::new(bytes)).map_err(decode_error)
    }

    /// Serializes `value` into a file, creating it or truncating an existing one.
    pub fn write_typed_to_path<T, P>(&self, value: &T, path: P) -> Result<(), WriteError>
    where
        T: Serialize,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        debug!("Writing typed {:?} plist to '{}'", self.format(), path.display());
        self.encode_typed(value, create(path)?)
    }

    /// Serializes `value` into a new byte buffer.
    pub fn write_typed_to_bytes<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, WriteError> {
        let mut buf = Vec::new();
        self.encode_typed(value, &mut buf)?;
        Ok(buf)
    }

    fn encode_typed<T, W>(&self, value: &T, writer: W) -> Result<(), WriteError>
    where
        T: Serialize,
        W: Write,
    {
        let result = match self.format() {
            PlistFormat::Xml => plist::to_writer_xml(writer, value),
            PlistFormat::Binary => plist::to_writer_binary(writer, value),
        };
        result.map_err(encode_error)
    }
}

/// Reads a plist file into `T`.
pub fn from_path<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, ReadError> {
    PlistCodec::new().read_typed_from_path(path)
}

/// Deserializes `T` from a plist byte slice.
pub fn from_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ReadError> {
    PlistCodec::new().read_typed_from_bytes(bytes)
}

/// Serializes `value` into an XML plist file.
pub fn to_path<T: Serialize, P: AsRef<Path>>(value: &T, path: P) -> Result<(), WriteError> {
    PlistCodec::new().write_typed_to_path(value, path)
}

/// Serializes `value` as an XML plist.
pub fn to_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, WriteError> {
    PlistCodec::new().write_typed_to_bytes(value)
}
