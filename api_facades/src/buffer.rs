//! Buffer Facade
//!
//! [`Buffer`] is the public face of the workspace: a view onto an arena with
//! the Node.js `Buffer` method surface. Every method takes loosely-typed
//! arguments as `impl Into<Value>`, so `()` stands for a missing argument:
//!
//! ```rust
//! use api_facades::Buffer;
//!
//! let buf = Buffer::from_string("hello world", ()).unwrap();
//! assert_eq!(buf.index_of("world", -5, ()).unwrap(), 6);
//! assert_eq!(buf.to_string("hex", 0, 5).unwrap(), "68656c6c6f");
//! ```
//!
//! Argument handling (defaults, shifting of a string into the encoding
//! position, coercion) happens here; the inner layers receive validated
//! positions or plain `Value`s.

use entities_data_handling::constants::K_MAX_LENGTH;
use entities_data_handling::validation::{adjust_offset, to_integer, validate_offset, validate_size};
use entities_data_handling::value::inspect_bytes;
use entities_data_handling::{Arena, BufferError, BufferResult, Encoding, Value, View};
use infrastructure_data_handling::{base64_codec, transcoder};
use std::fmt;
use tracing::trace;
use usecases_byte_operations::search::{self, Direction};
use usecases_byte_operations::{compare, fill, swap};
use usecases_memory_management::BufferPool;

/// A Node.js-compatible byte buffer
///
/// Cloning a `Buffer` clones the handle: both values alias the same bytes.
/// Use [`Buffer::copy_bytes`] for independent storage.
#[derive(Clone, Default)]
pub struct Buffer {
    view: View,
}

impl Buffer {
    // ---------------------------------------------------------------------
    // Construction
    // ---------------------------------------------------------------------

    /// Wrap an existing view without copying
    pub fn from_view(view: View) -> Self {
        Self { view }
    }

    /// A zero-length buffer
    pub fn empty() -> Self {
        Self::default()
    }

    /// Encode `text` into a fresh buffer
    ///
    /// A non-string encoding argument means utf8.
    ///
    /// # Errors
    /// TypeError `Unknown encoding: <name>`, or a base64 decoding error.
    pub fn from_string(text: &str, encoding: impl Into<Value>) -> BufferResult<Self> {
        let encoding = Encoding::from_value_lenient(&encoding.into())?;
        Ok(Self::from(transcoder::encode(text, encoding)?))
    }

    /// Copy `bytes` into a fresh buffer
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from(bytes.to_vec())
    }

    /// Build a buffer from array elements, each reduced to a byte
    pub fn from_array(values: &[Value]) -> BufferResult<Self> {
        let bytes = values
            .iter()
            .map(Value::to_uint8)
            .collect::<BufferResult<Vec<u8>>>()?;
        Ok(Self::from(bytes))
    }

    /// Share `arena[offset..offset + length]` without copying
    ///
    /// A missing offset is 0 and a missing length runs to the end of the
    /// arena; a non-positive length is an empty buffer.
    ///
    /// # Errors
    /// RangeError `"offset" is outside of buffer bounds` or
    /// `"length" is outside of buffer bounds`.
    pub fn from_arena(
        arena: Arena,
        offset: impl Into<Value>,
        length: impl Into<Value>,
    ) -> BufferResult<Self> {
        let (offset, length) = (offset.into(), length.into());
        let start = match offset {
            Value::Undefined => 0.0,
            other => {
                let n = other.to_number()?;
                if n.is_nan() {
                    0.0
                } else {
                    n.trunc()
                }
            }
        };
        let max_length = arena.capacity() as f64 - start;
        if start < 0.0 || max_length < 0.0 {
            return Err(BufferError::buffer_out_of_bounds(Some("offset")));
        }
        let count = match length {
            Value::Undefined => max_length,
            other => {
                let n = other.to_number()?;
                if n > max_length {
                    return Err(BufferError::buffer_out_of_bounds(Some("length")));
                }
                if n > 0.0 {
                    n.trunc()
                } else {
                    0.0
                }
            }
        };
        Ok(Self::from_view(View::new(arena, start as usize, count as usize)?))
    }

    /// Independent copy of `other`
    pub fn copy_bytes(other: &Buffer) -> Self {
        Self::from(other.to_vec())
    }

    /// Allocate `size` zeroed bytes, optionally filled
    ///
    /// `fill` and `encoding` behave as in [`Buffer::fill`] over the whole
    /// buffer.
    ///
    /// ```rust
    /// use api_facades::Buffer;
    ///
    /// let buf = Buffer::alloc(5, "ab", ()).unwrap();
    /// assert_eq!(buf.to_vec(), b"ababa");
    /// ```
    pub fn alloc(
        size: impl Into<Value>,
        fill: impl Into<Value>,
        encoding: impl Into<Value>,
    ) -> BufferResult<Self> {
        let size = validate_size(&size.into())?;
        let buf = Self::from_view(View::whole(Arena::allocate(size)?));
        let fill = fill.into();
        let is_zero = matches!(fill, Value::Number(n) if n == 0.0);
        if !fill.is_undefined() && !is_zero && size > 0 {
            fill::fill(
                &buf.view,
                &fill,
                &Value::from(0),
                &Value::from(size),
                &encoding.into(),
            )?;
        }
        Ok(buf)
    }

    /// Allocate `size` bytes from `pool`
    ///
    /// Small requests share a slab with other pooled buffers; the contents
    /// are unspecified.
    pub fn alloc_unsafe(pool: &BufferPool, size: impl Into<Value>) -> BufferResult<Self> {
        let size = validate_size(&size.into())?;
        let (arena, offset) = pool.allocate_pooled(size)?;
        Ok(Self::from_view(View::new(arena, offset, size)?))
    }

    /// Allocate `size` bytes in a dedicated arena; the contents are unspecified
    pub fn alloc_unsafe_slow(size: impl Into<Value>) -> BufferResult<Self> {
        let size = validate_size(&size.into())?;
        Ok(Self::from_view(View::whole(Arena::allocate(size)?)))
    }

    /// Concatenate `list` into a fresh buffer
    ///
    /// With `total_length` the result is cut or zero-padded to that length.
    pub fn concat(list: &[Buffer], total_length: impl Into<Value>) -> BufferResult<Self> {
        if list.is_empty() {
            return Ok(Self::empty());
        }
        let total_length = total_length.into();
        let length = match total_length {
            Value::Undefined => list.iter().map(Buffer::len).sum(),
            ref other => validate_offset(other, "length", K_MAX_LENGTH)?,
        };
        trace!(parts = list.len(), length, "concatenating buffers");
        let target = View::whole(Arena::allocate(length)?);
        let mut position = 0;
        for part in list {
            if position >= length {
                break;
            }
            position += part.view.copy_into(&target, position, 0, part.len());
        }
        Ok(Self::from_view(target))
    }

    // ---------------------------------------------------------------------
    // Statics
    // ---------------------------------------------------------------------

    /// Encoded length of a string, or the length of a buffer or byte array
    ///
    /// An unrecognised encoding counts utf8 bytes.
    pub fn byte_length(value: impl Into<Value>, encoding: impl Into<Value>) -> BufferResult<usize> {
        let text = match value.into() {
            Value::String(text) => text,
            Value::Bytes(bytes) => return Ok(bytes.len()),
            Value::View(view) => return Ok(view.len()),
            other => {
                return Err(BufferError::invalid_arg_type(
                    "string",
                    "of type string or an instance of Buffer or ArrayBuffer",
                    &other,
                ))
            }
        };
        let encoding = match encoding.into() {
            Value::Undefined => Encoding::Utf8,
            other => Encoding::normalize(&other.to_js_string()).unwrap_or(Encoding::Utf8),
        };
        Ok(transcoder::byte_length(&text, encoding))
    }

    /// True for a non-empty string naming a supported encoding
    pub fn is_encoding(value: impl Into<Value>) -> bool {
        match value.into() {
            Value::String(name) => Encoding::is_encoding(&name),
            _ => false,
        }
    }

    /// Order two buffers: -1, 0 or 1
    pub fn compare_buffers(a: &Buffer, b: &Buffer) -> i32 {
        compare::compare(&a.view, &b.view)
    }

    pub fn is_utf8(buf: &Buffer) -> bool {
        buf.view.with_bytes(transcoder::is_utf8)
    }

    pub fn is_ascii(buf: &Buffer) -> bool {
        buf.view.with_bytes(transcoder::is_ascii)
    }

    /// Decode base64 into a Latin-1 string
    pub fn atob(text: &str) -> BufferResult<String> {
        base64_codec::atob(text)
    }

    /// Encode a Latin-1 string as base64
    pub fn btoa(text: &str) -> BufferResult<String> {
        base64_codec::btoa(text)
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    pub fn len(&self) -> usize {
        self.view.len()
    }

    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    /// The underlying view
    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn into_view(self) -> View {
        self.view
    }

    /// Byte at `index`
    pub fn byte_at(&self, index: usize) -> BufferResult<u8> {
        self.view.byte_at(index)
    }

    /// Overwrite the byte at `index`
    pub fn set_byte(&self, index: usize, value: u8) -> BufferResult<()> {
        self.view.set_byte(index, value)
    }

    /// Snapshot of the bytes
    pub fn to_vec(&self) -> Vec<u8> {
        self.view.to_vec()
    }

    /// Iterate over a snapshot of the bytes
    pub fn iter(&self) -> std::vec::IntoIter<u8> {
        self.to_vec().into_iter()
    }

    // ---------------------------------------------------------------------
    // Text
    // ---------------------------------------------------------------------

    /// Decode `self[start..end]`
    ///
    /// Out-of-range positions clamp and an empty range is `""`; the
    /// encoding is only checked for a non-empty range.
    pub fn to_string(
        &self,
        encoding: impl Into<Value>,
        start: impl Into<Value>,
        end: impl Into<Value>,
    ) -> BufferResult<String> {
        let len = self.len() as f64;
        let start = start.into().to_number()?;
        let start = if start.is_nan() || start <= 0.0 {
            0.0
        } else if start >= len {
            return Ok(String::new());
        } else {
            start.trunc()
        };
        let end = match end.into() {
            Value::Undefined => len,
            other => {
                let n = other.to_number()?;
                if n > len {
                    len
                } else if n.is_nan() {
                    0.0
                } else {
                    n.trunc()
                }
            }
        };
        if end <= start {
            return Ok(String::new());
        }
        let encoding = match encoding.into() {
            Value::Undefined => Encoding::Utf8,
            other => named_encoding(&other)?,
        };
        let (start, end) = (start as usize, end as usize);
        Ok(self
            .view
            .with_bytes(|bytes| transcoder::decode(&bytes[start..end], encoding)))
    }

    /// Encode `text` into `self[offset..offset + length]`, returning the
    /// number of bytes written
    ///
    /// A string in the offset or length position is the encoding.
    /// Characters that do not fit entirely are not written.
    pub fn write(
        &self,
        text: &str,
        offset: impl Into<Value>,
        length: impl Into<Value>,
        encoding: impl Into<Value>,
    ) -> BufferResult<usize> {
        let (offset, length, encoding) = (offset.into(), length.into(), encoding.into());
        let total = self.len();
        let (start, count, encoding) = if offset.is_undefined() {
            (0, total, Value::Undefined)
        } else if length.is_undefined() && offset.as_str().is_some() {
            (0, total, offset)
        } else {
            let start = validate_offset(&offset, "offset", total)?;
            let remaining = total - start;
            match length {
                Value::Undefined => (start, remaining, encoding),
                Value::String(_) => (start, remaining, length),
                other => {
                    let count = validate_offset(&other, "length", total)?;
                    (start, count.min(remaining), encoding)
                }
            }
        };
        let encoding = if is_falsy(&encoding) {
            Encoding::Utf8
        } else {
            named_encoding(&encoding)?
        };
        self.view.with_bytes_mut(|bytes| {
            transcoder::write_into(&mut bytes[start..start + count], text, encoding)
        })
    }

    // ---------------------------------------------------------------------
    // Search and comparison
    // ---------------------------------------------------------------------

    /// First index of `needle` at or after `byte_offset`, or -1
    pub fn index_of(
        &self,
        needle: impl Into<Value>,
        byte_offset: impl Into<Value>,
        encoding: impl Into<Value>,
    ) -> BufferResult<i64> {
        search::index_of(
            &self.view,
            &needle.into(),
            &byte_offset.into(),
            &encoding.into(),
            Direction::Forward,
        )
    }

    /// Last index of `needle` at or before `byte_offset`, or -1
    pub fn last_index_of(
        &self,
        needle: impl Into<Value>,
        byte_offset: impl Into<Value>,
        encoding: impl Into<Value>,
    ) -> BufferResult<i64> {
        search::index_of(
            &self.view,
            &needle.into(),
            &byte_offset.into(),
            &encoding.into(),
            Direction::Backward,
        )
    }

    pub fn includes(
        &self,
        needle: impl Into<Value>,
        byte_offset: impl Into<Value>,
        encoding: impl Into<Value>,
    ) -> BufferResult<bool> {
        search::includes(&self.view, &needle.into(), &byte_offset.into(), &encoding.into())
    }

    /// Order `self` against `target`: -1, 0 or 1
    pub fn compare(&self, target: &Buffer) -> i32 {
        compare::compare(&self.view, &target.view)
    }

    /// Order `self[source_start..source_end]` against
    /// `target[target_start..target_end]`
    pub fn compare_range(
        &self,
        target: &Buffer,
        target_start: impl Into<Value>,
        target_end: impl Into<Value>,
        source_start: impl Into<Value>,
        source_end: impl Into<Value>,
    ) -> BufferResult<i32> {
        compare::compare_range(
            &self.view,
            &target.view,
            &target_start.into(),
            &target_end.into(),
            &source_start.into(),
            &source_end.into(),
        )
    }

    pub fn equals(&self, other: &Buffer) -> bool {
        compare::equals(&self.view, &other.view)
    }

    // ---------------------------------------------------------------------
    // Mutation
    // ---------------------------------------------------------------------

    /// Fill `self[offset..end]` with `value`, returning `self`
    pub fn fill(
        &self,
        value: impl Into<Value>,
        offset: impl Into<Value>,
        end: impl Into<Value>,
        encoding: impl Into<Value>,
    ) -> BufferResult<&Self> {
        fill::fill(
            &self.view,
            &value.into(),
            &offset.into(),
            &end.into(),
            &encoding.into(),
        )?;
        Ok(self)
    }

    /// Copy `self[source_start..source_end]` into `target` at `target_start`,
    /// returning the number of bytes copied
    ///
    /// The copy shrinks to what fits in both buffers. Overlapping regions of
    /// one arena are copied as if through a temporary.
    ///
    /// # Errors
    /// RangeError for a negative position or a `source_start` beyond the end.
    pub fn copy(
        &self,
        target: &Buffer,
        target_start: impl Into<Value>,
        source_start: impl Into<Value>,
        source_end: impl Into<Value>,
    ) -> BufferResult<usize> {
        let target_start = copy_position(&target_start.into(), 0)?;
        if target_start < 0 {
            return Err(BufferError::out_of_range_number(
                "targetStart",
                ">= 0",
                target_start as f64,
            ));
        }
        let source_start = copy_position(&source_start.into(), 0)?;
        if source_start < 0 || source_start > self.len() as i64 {
            return Err(BufferError::out_of_range_number(
                "sourceStart",
                &format!(">= 0 && <= {}", self.len()),
                source_start as f64,
            ));
        }
        let source_end = copy_position(&source_end.into(), self.len() as i64)?;
        if source_end < 0 {
            return Err(BufferError::out_of_range_number(
                "sourceEnd",
                ">= 0",
                source_end as f64,
            ));
        }
        if target_start >= target.len() as i64 || source_start >= source_end {
            return Ok(0);
        }
        Ok(self.view.copy_into(
            &target.view,
            target_start as usize,
            source_start as usize,
            source_end.min(self.len() as i64) as usize,
        ))
    }

    /// Aliasing view over `[start, end)`; negative positions count from the end
    ///
    /// ```rust
    /// use api_facades::Buffer;
    ///
    /// let buf = Buffer::from_string("buffer", ()).unwrap();
    /// let tail = buf.subarray(-3, ()).unwrap();
    /// tail.set_byte(0, b'F').unwrap();
    /// assert_eq!(buf.to_string((), (), ()).unwrap(), "bufFer");
    /// ```
    pub fn subarray(&self, start: impl Into<Value>, end: impl Into<Value>) -> BufferResult<Self> {
        let len = self.len();
        let start = adjust_offset(&start.into(), len, 0)?;
        let end = adjust_offset(&end.into(), len, len)?;
        Ok(Self::from_view(self.view.slice_alias(start as i64, end as i64)))
    }

    /// Same as [`Buffer::subarray`]: the result aliases `self`
    pub fn slice(&self, start: impl Into<Value>, end: impl Into<Value>) -> BufferResult<Self> {
        self.subarray(start, end)
    }

    pub fn swap16(&self) -> BufferResult<&Self> {
        swap::swap16(&self.view)?;
        Ok(self)
    }

    pub fn swap32(&self) -> BufferResult<&Self> {
        swap::swap32(&self.view)?;
        Ok(self)
    }

    pub fn swap64(&self) -> BufferResult<&Self> {
        swap::swap64(&self.view)?;
        Ok(self)
    }

    /// `<Buffer 48 65 6c 6c 6f>`
    pub fn inspect(&self) -> String {
        self.view.with_bytes(inspect_bytes)
    }
}

/// Encoding named by a defined argument, with no utf8 fallback for `""`
fn named_encoding(value: &Value) -> BufferResult<Encoding> {
    let name = value.to_js_string();
    if name.is_empty() {
        return Err(BufferError::unknown_encoding(&name));
    }
    Encoding::normalize(&name).ok_or_else(|| BufferError::unknown_encoding(&name))
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Undefined | Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => *n == 0.0 || n.is_nan(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Integer positions pass through; anything else goes through `toInteger`
fn copy_position(value: &Value, default: i64) -> BufferResult<i64> {
    match value {
        Value::Undefined => Ok(default),
        Value::Number(n) if n.is_finite() && n.fract() == 0.0 => Ok(*n as i64),
        other => to_integer(other, 0),
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_view(View::from_vec(bytes))
    }
}

impl From<View> for Buffer {
    fn from(view: View) -> Self {
        Self::from_view(view)
    }
}

impl From<&Buffer> for Value {
    fn from(buf: &Buffer) -> Self {
        Value::View(buf.view.clone())
    }
}

impl From<Buffer> for Value {
    fn from(buf: Buffer) -> Self {
        Value::View(buf.view)
    }
}

impl PartialEq for Buffer {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Buffer {}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspect())
    }
}

impl IntoIterator for &Buffer {
    type Item = u8;
    type IntoIter = std::vec::IntoIter<u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use usecases_memory_management::PoolConfig;

    fn buf(text: &str) -> Buffer {
        Buffer::from_string(text, ()).unwrap()
    }

    #[test]
    fn test_from_string_encodings() {
        assert_eq!(Buffer::from_string("48656c6c6f", "hex").unwrap().to_vec(), b"Hello");
        assert_eq!(Buffer::from_string("aGk=", "base64").unwrap().to_vec(), b"hi");
        assert_eq!(Buffer::from_string("hi", 5).unwrap().to_vec(), b"hi");
        let err = Buffer::from_string("hi", "utf9").unwrap_err();
        assert_eq!(err.message(), "Unknown encoding: utf9");
    }

    #[test]
    fn test_from_array_coerces() {
        let values = [Value::from(256), Value::from(-1), Value::from("7"), Value::from(1.9)];
        assert_eq!(Buffer::from_array(&values).unwrap().to_vec(), vec![0, 255, 7, 1]);
    }

    #[test]
    fn test_from_arena_bounds() {
        let arena = Arena::wrap(vec![1, 2, 3, 4]);
        let buf = Buffer::from_arena(arena.clone(), 1, 2).unwrap();
        assert_eq!(buf.to_vec(), vec![2, 3]);
        buf.set_byte(0, 9).unwrap();
        assert_eq!(arena.read_byte(1).unwrap(), 9);
        assert_eq!(Buffer::from_arena(arena.clone(), (), ()).unwrap().len(), 4);
        assert_eq!(Buffer::from_arena(arena.clone(), 2, -1).unwrap().len(), 0);
        let err = Buffer::from_arena(arena.clone(), 5, ()).unwrap_err();
        assert_eq!(err.message(), "\"offset\" is outside of buffer bounds");
        let err = Buffer::from_arena(arena, 1, 4).unwrap_err();
        assert_eq!(err.message(), "\"length\" is outside of buffer bounds");
    }

    #[test]
    fn test_alloc_variants() {
        assert_eq!(Buffer::alloc(3, (), ()).unwrap().to_vec(), vec![0; 3]);
        assert_eq!(Buffer::alloc(3, 0xAA, ()).unwrap().to_vec(), vec![0xAA; 3]);
        assert_eq!(Buffer::alloc(4, "AQI=", "base64").unwrap().to_vec(), vec![1, 2, 1, 2]);
        let err = Buffer::alloc(-1, (), ()).unwrap_err();
        assert_eq!(
            err.message(),
            "The value of \"size\" is out of range. It must be >= 0 && <= 2147483647. Received -1"
        );
        let err = Buffer::alloc("5", (), ()).unwrap_err();
        assert!(err.is_type_error());
        assert_eq!(Buffer::alloc_unsafe_slow(7).unwrap().len(), 7);
    }

    #[test]
    fn test_alloc_unsafe_uses_pool() {
        let pool = BufferPool::new(PoolConfig::with_pool_size(64).unwrap()).unwrap();
        let a = Buffer::alloc_unsafe(&pool, 4).unwrap();
        let b = Buffer::alloc_unsafe(&pool, 4).unwrap();
        assert!(a.view().shares_arena(b.view()));
        assert_eq!(pool.slab_count(), 1);
        let big = Buffer::alloc_unsafe(&pool, 32).unwrap();
        assert!(!big.view().shares_arena(a.view()));
    }

    #[test]
    fn test_concat() {
        let parts = [buf("ab"), buf("cd"), buf("e")];
        assert_eq!(Buffer::concat(&parts, ()).unwrap().to_vec(), b"abcde");
        assert_eq!(Buffer::concat(&parts, 3).unwrap().to_vec(), b"abc");
        assert_eq!(Buffer::concat(&parts, 7).unwrap().to_vec(), b"abcde\0\0");
        assert!(Buffer::concat(&[], 10).unwrap().is_empty());
        let joined = Buffer::concat(&parts[..1], ()).unwrap();
        assert!(!joined.view().shares_arena(parts[0].view()));
    }

    #[test]
    fn test_byte_length() {
        assert_eq!(Buffer::byte_length("€", ()).unwrap(), 3);
        assert_eq!(Buffer::byte_length("€", "ucs2").unwrap(), 2);
        assert_eq!(Buffer::byte_length("€", "nope").unwrap(), 3);
        assert_eq!(Buffer::byte_length(&buf("abc"), ()).unwrap(), 3);
        let err = Buffer::byte_length(5, ()).unwrap_err();
        assert_eq!(
            err.message(),
            "The \"string\" argument must be of type string or an instance of Buffer or ArrayBuffer. Received type number (5)"
        );
    }

    #[test]
    fn test_is_encoding() {
        assert!(Buffer::is_encoding("UTF-8"));
        assert!(Buffer::is_encoding("binary"));
        assert!(!Buffer::is_encoding(""));
        assert!(!Buffer::is_encoding(8));
    }

    #[test]
    fn test_to_string_ranges() {
        let b = buf("hello");
        assert_eq!(b.to_string((), 1, 3).unwrap(), "el");
        assert_eq!(b.to_string((), -2, ()).unwrap(), "hello");
        assert_eq!(b.to_string((), 9, ()).unwrap(), "");
        assert_eq!(b.to_string((), 3, 1).unwrap(), "");
        assert_eq!(b.to_string("bogus", 3, 1).unwrap(), "");
        assert_eq!(b.to_string("latin1", 0, 100).unwrap(), "hello");
        let err = b.to_string("bogus", (), ()).unwrap_err();
        assert_eq!(err.message(), "Unknown encoding: bogus");
    }

    #[test]
    fn test_write_shifts_arguments() {
        let b = Buffer::alloc(6, (), ()).unwrap();
        assert_eq!(b.write("ffee", "hex", (), ()).unwrap(), 2);
        assert_eq!(b.write("dd", 2, "hex", ()).unwrap(), 1);
        assert_eq!(b.write("abcdef", 3, 2, ()).unwrap(), 2);
        assert_eq!(b.to_vec(), vec![0xFF, 0xEE, 0xDD, b'a', b'b', 0]);
        assert_eq!(b.write("xyz", 5, (), ()).unwrap(), 1);
        let err = b.write("x", 7, (), ()).unwrap_err();
        assert_eq!(
            err.message(),
            "The value of \"offset\" is out of range. It must be >= 0 && <= 6. Received 7"
        );
        let err = b.write("x", 0, 1, "bogus").unwrap_err();
        assert_eq!(err.message(), "Unknown encoding: bogus");
    }

    #[test]
    fn test_copy() {
        let source = buf("abcdef");
        let target = Buffer::alloc(4, (), ()).unwrap();
        assert_eq!(source.copy(&target, 1, 2, ()).unwrap(), 3);
        assert_eq!(target.to_vec(), b"\0cde");
        assert_eq!(source.copy(&target, 10, (), ()).unwrap(), 0);
        assert_eq!(source.copy(&target, 0, 1.7, 2).unwrap(), 1);
        assert_eq!(target.byte_at(0).unwrap(), b'b');
        let err = source.copy(&target, -1, (), ()).unwrap_err();
        assert_eq!(
            err.message(),
            "The value of \"targetStart\" is out of range. It must be >= 0. Received -1"
        );
        let err = source.copy(&target, 0, 7, ()).unwrap_err();
        assert_eq!(
            err.message(),
            "The value of \"sourceStart\" is out of range. It must be >= 0 && <= 6. Received 7"
        );
    }

    #[test]
    fn test_copy_overlapping() {
        let b = buf("abcdef");
        let tail = b.subarray(2, ()).unwrap();
        assert_eq!(b.copy(&tail, 0, 0, 4).unwrap(), 4);
        assert_eq!(b.to_vec(), b"ababcd");
    }

    #[test]
    fn test_slice_aliases() {
        let b = buf("abcdef");
        let s = b.slice(1, -1).unwrap();
        assert_eq!(s.to_vec(), b"bcde");
        s.fill("z", (), (), ()).unwrap();
        assert_eq!(b.to_vec(), b"azzzzf");
        assert!(b.slice(4, 2).unwrap().is_empty());
        assert_eq!(b.subarray(f64::NAN, ()).unwrap().len(), 6);
    }

    #[test]
    fn test_inspect_and_debug() {
        let b = buf("Hello");
        assert_eq!(b.inspect(), "<Buffer 48 65 6c 6c 6f>");
        assert_eq!(format!("{:?}", b), "<Buffer 48 65 6c 6c 6f>");
        let long = Buffer::alloc(52, (), ()).unwrap();
        assert!(long.inspect().ends_with(" ... 2 more bytes>"));
    }

    #[test]
    fn test_iteration() {
        let b = Buffer::from_bytes(&[3, 1, 2]);
        let total: u32 = b.iter().map(u32::from).sum();
        assert_eq!(total, 6);
        let collected: Vec<u8> = (&b).into_iter().collect();
        assert_eq!(collected, vec![3, 1, 2]);
    }
}
