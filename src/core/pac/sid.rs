use super::ndr::{NdrReader, NdrResult};
use std::fmt;

/// Windows security identifier in its binary form.
#[derive(Debug, Clone, PartialEq)]
pub struct Sid {
    pub revision: u8,
    pub identifier_authority: u64,
    pub sub_authorities: Vec<u32>,
}

impl Sid {
    /// Flat binary form: revision, sub-authority count, 6 byte
    /// authority (big endian) and the sub-authorities.
    pub fn parse(data: &[u8]) -> Result<Sid, String> {
        let mut reader = NdrReader::new(data);
        return Self::read(&mut reader);
    }

    /// SID preceded by the sub-authority conformance count, the form
    /// found in NDR deferred data.
    pub fn read_ndr(reader: &mut NdrReader) -> NdrResult<Sid> {
        reader.align(4)?;
        let _maximum_count = reader.read_u32()?;
        return Self::read(reader);
    }

    fn read(reader: &mut NdrReader) -> NdrResult<Sid> {
        let revision = reader.read_u8()?;
        let sub_authority_count = reader.read_u8()?;

        let mut identifier_authority: u64 = 0;
        for octet in reader.read_raw(6)? {
            identifier_authority = (identifier_authority << 8) | octet as u64;
        }

        let mut sub_authorities =
            Vec::with_capacity(sub_authority_count as usize);
        for _ in 0..sub_authority_count {
            sub_authorities.push(reader.read_u32()?);
        }

        return Ok(Sid {
            revision,
            identifier_authority,
            sub_authorities,
        });
    }
}

impl fmt::Display for Sid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S-{}-{}", self.revision, self.identifier_authority)?;
        for sub_authority in self.sub_authorities.iter() {
            write!(f, "-{}", sub_authority)?;
        }
        return Ok(());
    }
}
