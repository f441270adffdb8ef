//! Minimal reader for the NDR streams serialized inside PAC buffers
//! (MS-RPCE type serialization version 1).

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Cursor;

pub type NdrResult<T> = Result<T, String>;

/// Header of an RPC_UNICODE_STRING in the flat part of a structure.
/// The characters themselves come later, in the deferred part.
#[derive(Debug, Clone)]
pub struct StringHeader {
    pub length: u16,
    pub referent: u32,
}

impl StringHeader {
    pub fn is_null(&self) -> bool {
        return self.referent == 0;
    }
}

pub struct NdrReader<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> NdrReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        return Self { cursor: Cursor::new(data) };
    }

    /// Skip the common and private type headers that precede the
    /// serialized structure.
    pub fn skip_type_headers(&mut self) -> NdrResult<()> {
        let version = self.read_u8()?;
        if version != 1 {
            return Err(format!(
                "unknown serialization version {}",
                version
            ));
        }

        let endianness = self.read_u8()?;
        if endianness != 0x10 {
            return Err("big endian streams are not supported".into());
        }

        // rest of the common header, then the private header with the
        // object buffer length
        self.skip(6)?;
        self.skip(8)?;
        return Ok(());
    }

    pub fn remaining(&self) -> usize {
        let data = *self.cursor.get_ref();
        return data.len() - self.cursor.position() as usize;
    }

    pub fn align(&mut self, boundary: u64) -> NdrResult<()> {
        let misaligned = self.cursor.position() % boundary;
        if misaligned != 0 {
            self.skip((boundary - misaligned) as usize)?;
        }
        return Ok(());
    }

    pub fn skip(&mut self, count: usize) -> NdrResult<()> {
        self.read_raw(count)?;
        return Ok(());
    }

    pub fn read_raw(&mut self, count: usize) -> NdrResult<Vec<u8>> {
        if count > self.remaining() {
            return Err("unexpected end of stream".into());
        }

        let position = self.cursor.position() as usize;
        let data = *self.cursor.get_ref();
        self.cursor.set_position((position + count) as u64);
        return Ok(data[position..position + count].to_vec());
    }

    pub fn read_u8(&mut self) -> NdrResult<u8> {
        return self
            .cursor
            .read_u8()
            .map_err(|_| "unexpected end of stream".to_string());
    }

    pub fn read_u16(&mut self) -> NdrResult<u16> {
        return self
            .cursor
            .read_u16::<LittleEndian>()
            .map_err(|_| "unexpected end of stream".to_string());
    }

    pub fn read_u32(&mut self) -> NdrResult<u32> {
        return self
            .cursor
            .read_u32::<LittleEndian>()
            .map_err(|_| "unexpected end of stream".to_string());
    }

    pub fn read_i64(&mut self) -> NdrResult<i64> {
        return self
            .cursor
            .read_i64::<LittleEndian>()
            .map_err(|_| "unexpected end of stream".to_string());
    }

    /// FILETIME, serialized as two 32-bit halves with the low part
    /// first, which reads back as a little endian 64-bit value.
    pub fn read_filetime(&mut self) -> NdrResult<i64> {
        return self.read_i64();
    }

    pub fn read_string_header(&mut self) -> NdrResult<StringHeader> {
        let length = self.read_u16()?;
        let _maximum_length = self.read_u16()?;
        let referent = self.read_u32()?;
        return Ok(StringHeader { length, referent });
    }

    pub fn read_pointer(&mut self) -> NdrResult<u32> {
        return self.read_u32();
    }

    /// Deferred content of an RPC_UNICODE_STRING: a conformant
    /// varying array of UTF-16 units. Null headers produce None.
    pub fn read_deferred_string(
        &mut self,
        header: &StringHeader,
    ) -> NdrResult<Option<String>> {
        if header.is_null() {
            return Ok(None);
        }

        self.align(4)?;
        let _maximum_count = self.read_u32()?;
        let _offset = self.read_u32()?;
        let actual_count = self.read_u32()? as usize;

        if actual_count * 2 != header.length as usize {
            return Err("string length mismatch".into());
        }

        if actual_count * 2 > self.remaining() {
            return Err("string content out of bounds".into());
        }

        let mut units = Vec::with_capacity(actual_count);
        for _ in 0..actual_count {
            units.push(self.read_u16()?);
        }

        return Ok(Some(String::from_utf16_lossy(&units)));
    }
}
