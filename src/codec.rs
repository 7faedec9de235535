use crate::{ReadError, WriteError};
use log::debug;
use plist::Value;
use std::{
    fs::File,
    io::{BufReader, BufWriter, Cursor, Write},
    path::Path,
};

/// An on-disk encoding of a property list.
///
/// Reading always detects the encoding by itself, so a format only matters
/// when writing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PlistFormat {
    #[default]
    Xml,
    Binary,
}

/// Reads and writes property lists.
///
/// Every failure of the underlying codec or the file system is reported
/// either as a [ReadError] or as a [WriteError]. A codec holds no state
/// besides its output format, so it may be freely copied and shared
/// between threads.
///
/// ```no_run
/// use plistio::{PlistCodec, PlistFormat};
///
/// let codec = PlistCodec::new().with_format(PlistFormat::Binary);
/// let value = codec.read_from_path("/Library/Preferences/ManagedInstalls.plist")?;
/// codec.write_to_path(&value, "/tmp/ManagedInstalls.plist")?;
/// # Ok::<(), plistio::PlistError>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlistCodec {
    format: PlistFormat,
}

impl PlistCodec {
    /// Creates a codec that writes XML plists.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the format used by the `write_*` methods.
    pub fn with_format(mut self, format: PlistFormat) -> Self {
        self.format = format;
        self
    }

    /// Returns the format used by the `write_*` methods.
    pub fn format(&self) -> PlistFormat {
        self.format
    }

    /// Reads a plist file of any supported format.
    pub fn read_from_path<P: AsRef<Path>>(&self, path: P) -> Result<Value, ReadError> {
        let path = path.as_ref();
        debug!("Reading plist from '{}'", path.display());
        Value::from_reader(open(path)?).map_err(decode_error)
    }

    /// Reads a plist of any supported format from a byte slice.
    pub fn read_from_bytes(&self, bytes: &[u8]) -> Result<Value, ReadError> {
        debug!("Reading plist from {} bytes", bytes.len());
        Value::from_reader(Cursor::new(bytes)).map_err(decode_error)
    }

    /// Writes a value into a file, creating it or truncating an existing one.
    ///
    /// If encoding fails halfway a partially written file may be left behind,
    /// but the failure is still returned.
    pub fn write_to_path<P: AsRef<Path>>(&self, value: &Value, path: P) -> Result<(), WriteError> {
        let path = path.as_ref();
        debug!("Writing {:?} plist to '{}'", self.format, path.display());
        self.encode(value, create(path)?)
    }

    /// Encodes a value into a new byte buffer.
    pub fn write_to_bytes(&self, value: &Value) -> Result<Vec<u8>, WriteError> {
        let mut buf = Vec::new();
        self.encode(value, &mut buf)?;
        debug!("Wrote {:?} plist of {} bytes", self.format, buf.len());
        Ok(buf)
    }

    fn encode<W: Write>(&self, value: &Value, writer: W) -> Result<(), WriteError> {
        let result = match self.format {
            PlistFormat::Xml => value.to_writer_xml(writer),
            PlistFormat::Binary => value.to_writer_binary(writer),
        };
        result.map_err(encode_error)
    }
}

/// Opens a file for buffered reading.
pub(crate) fn open(path: &Path) -> Result<BufReader<File>, ReadError> {
    File::open(path).map(BufReader::new).map_err(|source| {
        debug!("Unable to open '{}': {source}", path.display());
        ReadError::Open {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Creates or truncates a file for buffered writing.
pub(crate) fn create(path: &Path) -> Result<BufWriter<File>, WriteError> {
    File::create(path).map(BufWriter::new).map_err(|source| {
        debug!("Unable to create '{}': {source}", path.display());
        WriteError::Create {
            path: path.to_path_buf(),
            source,
        }
    })
}

pub(crate) fn decode_error(err: plist::Error) -> ReadError {
    debug!("Unable to decode plist: {err}");
    ReadError::Decode(err)
}

pub(crate) fn encode_error(err: plist::Error) -> WriteError {
    debug!("Unable to encode plist: {err}");
    WriteError::Encode(err)
}

/// Reads a plist file with the default [PlistCodec].
pub fn read_plist<P: AsRef<Path>>(path: P) -> Result<Value, ReadError> {
    PlistCodec::new().read_from_path(path)
}

/// Reads a plist from a byte slice with the default [PlistCodec].
pub fn read_plist_from_bytes(bytes: &[u8]) -> Result<Value, ReadError> {
    PlistCodec::new().read_from_bytes(bytes)
}

/// Writes a value into an XML plist file.
pub fn write_plist<P: AsRef<Path>>(value: &Value, path: P) -> Result<(), WriteError> {
    PlistCodec::new().write_to_path(value, path)
}

/// Encodes a value as an XML plist.
pub fn write_plist_to_bytes(value: &Value) -> Result<Vec<u8>, WriteError> {
    PlistCodec::new().write_to_bytes(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use plist::{Dictionary, Uid};

    fn sample() -> Value {
        let mut dict = Dictionary::new();
        dict.insert("name".into(), Value::String("test".into()));
        dict.insert("count".into(), Value::Integer(3i64.into()));
        dict.insert("active".into(), Value::Boolean(true));
        Value::Dictionary(dict)
    }

    #[test]
    fn default_format_is_xml() {
        let codec = PlistCodec::default();
        assert_eq!(codec.format(), PlistFormat::Xml);
        let bytes = codec.write_to_bytes(&sample()).unwrap();
        assert!(bytes.starts_with(b"<?xml"));
    }

    #[test]
    fn binary_format() {
        let codec = PlistCodec::new().with_format(PlistFormat::Binary);
        let bytes = codec.write_to_bytes(&sample()).unwrap();
        assert!(bytes.starts_with(b"bplist00"));
        assert_eq!(codec.read_from_bytes(&bytes).unwrap(), sample());
    }

    #[test]
    fn binary_is_detected_by_default_codec() {
        let bytes = PlistCodec::new()
            .with_format(PlistFormat::Binary)
            .write_to_bytes(&sample())
            .unwrap();
        assert_eq!(read_plist_from_bytes(&bytes).unwrap(), sample());
    }

    #[test]
    fn uid_is_not_encodable_as_xml() {
        let value = Value::Array(vec![Value::Uid(Uid::new(1))]);
        let err = write_plist_to_bytes(&value).unwrap_err();
        assert!(matches!(err, WriteError::Encode(_)));
    }

    #[test]
    fn corrupt_binary_is_a_read_error() {
        let err = read_plist_from_bytes(b"bplist00\x00\x01\x02").unwrap_err();
        assert!(matches!(err, ReadError::Decode(_)));
    }
}
