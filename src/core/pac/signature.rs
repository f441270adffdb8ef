use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Cursor;

/// PAC_SIGNATURE_DATA: checksum over the PAC, present once keyed with
/// the server key and once with the KDC key.
#[derive(Debug, Clone, PartialEq)]
pub struct SignatureData {
    pub signature_type: i32,
    pub signature: Vec<u8>,
}

impl SignatureData {
    pub fn parse(data: &[u8]) -> Result<SignatureData, String> {
        let mut cursor = Cursor::new(data);

        let signature_type = cursor
            .read_i32::<LittleEndian>()
            .map_err(|_| "truncated signature type".to_string())?;

        return Ok(SignatureData {
            signature_type,
            signature: data[4..].to_vec(),
        });
    }
}
