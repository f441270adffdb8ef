//! Decoding of the PAC (Privilege Attribute Certificate) carried in
//! the authorization data of tickets issued by Windows KDCs.

mod client_info;
mod logon_info;
mod ndr;
mod sid;
mod signature;
mod upn_dns;

pub use client_info::ClientInfo;
pub use logon_info::{GroupMembership, LogonInfo, SidAndAttributes};
pub use sid::Sid;
pub use signature::SignatureData;
pub use upn_dns::{UpnDnsInfo, UPN_DNS_FLAG_EXTENDED};

use crate::error::Error;
use crate::Result;
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Cursor;

pub const LOGON_INFO: u32 = 1;
pub const CREDENTIALS_INFO: u32 = 2;
pub const SERVER_CHECKSUM: u32 = 6;
pub const PRIVSVR_CHECKSUM: u32 = 7;
pub const CLIENT_INFO: u32 = 10;
pub const DELEGATION_INFO: u32 = 11;
pub const UPN_DNS_INFO: u32 = 12;
pub const CLIENT_CLAIMS_INFO: u32 = 13;
pub const DEVICE_INFO: u32 = 14;
pub const DEVICE_CLAIMS_INFO: u32 = 15;
pub const TICKET_CHECKSUM: u32 = 16;

/// Decoded PAC: the ordered list of info buffers found in the
/// container.
#[derive(Debug, Clone)]
pub struct Pac {
    pub buffers: Vec<PacInfoBuffer>,
}

/// One self-describing sub-structure of the PAC. Types without a
/// known layout, and buffers whose decode fails, are kept in the raw
/// form so they can still be dumped.
#[derive(Debug, Clone)]
pub enum PacInfoBuffer {
    LogonInfo(LogonInfo),
    ClientInfo(ClientInfo),
    ServerChecksum(SignatureData),
    PrivSvrChecksum(SignatureData),
    UpnDnsInfo(UpnDnsInfo),
    Raw(u32, Vec<u8>),
}

impl Pac {
    pub fn parse(raw: &[u8]) -> Result<Pac> {
        let mut cursor = Cursor::new(raw);

        let buffer_count = read_header_u32(&mut cursor)?;
        let version = read_header_u32(&mut cursor)?;

        if version != 0 {
            return Err(Error::MalformedPacContainer(format!(
                "unsupported PAC version {}",
                version
            )));
        }

        if buffer_count as usize * 16 + 8 > raw.len() {
            return Err(Error::MalformedPacContainer(format!(
                "buffer count {} does not fit the blob",
                buffer_count
            )));
        }

        let mut buffers = Vec::with_capacity(buffer_count as usize);
        for _ in 0..buffer_count {
            let ul_type = read_header_u32(&mut cursor)?;
            let size = read_header_u32(&mut cursor)?;
            let offset = cursor
                .read_u64::<LittleEndian>()
                .map_err(|_| truncated_header())?;

            let start = offset as usize;
            let end = start + size as usize;
            if end > raw.len() {
                return Err(Error::MalformedPacContainer(format!(
                    "buffer of type {} out of range",
                    ul_type
                )));
            }

            buffers.push(PacInfoBuffer::decode(ul_type, &raw[start..end]));
        }

        return Ok(Pac { buffers });
    }
}

impl PacInfoBuffer {
    /// Decode a buffer according to its type tag. A failed decode
    /// degrades to the raw form instead of aborting the whole PAC.
    fn decode(ul_type: u32, data: &[u8]) -> PacInfoBuffer {
        let decoded = match ul_type {
            LOGON_INFO => {
                LogonInfo::parse(data).map(PacInfoBuffer::LogonInfo)
            }
            CLIENT_INFO => {
                ClientInfo::parse(data).map(PacInfoBuffer::ClientInfo)
            }
            SERVER_CHECKSUM => {
                SignatureData::parse(data).map(PacInfoBuffer::ServerChecksum)
            }
            PRIVSVR_CHECKSUM => SignatureData::parse(data)
                .map(PacInfoBuffer::PrivSvrChecksum),
            UPN_DNS_INFO => {
                UpnDnsInfo::parse(data).map(PacInfoBuffer::UpnDnsInfo)
            }
            _ => Err("unknown buffer type".to_string()),
        };

        return decoded
            .unwrap_or_else(|_| PacInfoBuffer::Raw(ul_type, data.to_vec()));
    }
}

fn read_header_u32(cursor: &mut Cursor<&[u8]>) -> Result<u32> {
    return cursor
        .read_u32::<LittleEndian>()
        .map_err(|_| truncated_header());
}

fn truncated_header() -> Error {
    return Error::MalformedPacContainer(
        "truncated container header".to_string(),
    );
}

#[cfg(test)]
pub mod tests {
    pub use super::client_info::tests::build_client_info;
    pub use super::signature::tests::build_signature;
    use super::*;

    /// Lay out a PACTYPE container: count, version and one descriptor
    /// per buffer, with the buffer data 8-aligned at the tail.
    pub fn build_pac(buffers: &[(u32, Vec<u8>)]) -> Vec<u8> {
        let mut raw = Vec::new();
        raw.extend_from_slice(&(buffers.len() as u32).to_le_bytes());
        raw.extend_from_slice(&0u32.to_le_bytes());

        let mut offset = 8 + buffers.len() * 16;
        let mut data = Vec::new();

        for (ul_type, content) in buffers {
            raw.extend_from_slice(&ul_type.to_le_bytes());
            raw.extend_from_slice(&(content.len() as u32).to_le_bytes());
            raw.extend_from_slice(&(offset as u64).to_le_bytes());

            data.extend_from_slice(content);
            offset += content.len();
            while offset % 8 != 0 {
                data.push(0);
                offset += 1;
            }
        }

        raw.extend_from_slice(&data);
        return raw;
    }

    #[test]
    fn test_parse_pac_with_client_info_and_checksums() {
        let raw = build_pac(&[
            (CLIENT_INFO, build_client_info(0, "mickey.mouse")),
            (SERVER_CHECKSUM, build_signature(16, &[0x11; 12])),
            (PRIVSVR_CHECKSUM, build_signature(16, &[0x22; 12])),
        ]);

        let pac = Pac::parse(&raw).unwrap();

        assert_eq!(3, pac.buffers.len());
        assert!(matches!(
            &pac.buffers[0],
            PacInfoBuffer::ClientInfo(ci) if ci.name == "mickey.mouse"
        ));
        assert!(matches!(
            &pac.buffers[1],
            PacInfoBuffer::ServerChecksum(s) if s.signature == vec![0x11; 12]
        ));
        assert!(matches!(
            &pac.buffers[2],
            PacInfoBuffer::PrivSvrChecksum(s) if s.signature == vec![0x22; 12]
        ));
    }

    #[test]
    fn test_unknown_buffer_type_is_kept_raw() {
        let raw = build_pac(&[(99, vec![0xca, 0xfe])]);
        let pac = Pac::parse(&raw).unwrap();

        assert!(matches!(
            &pac.buffers[0],
            PacInfoBuffer::Raw(99, data) if *data == vec![0xca, 0xfe]
        ));
    }

    #[test]
    fn test_undecodable_buffer_degrades_to_raw() {
        // too short to be a PAC_SIGNATURE_DATA
        let raw = build_pac(&[(SERVER_CHECKSUM, vec![0x01])]);
        let pac = Pac::parse(&raw).unwrap();

        assert!(matches!(
            &pac.buffers[0],
            PacInfoBuffer::Raw(SERVER_CHECKSUM, _)
        ));
    }

    #[test]
    fn test_parse_pac_with_bad_version_fails() {
        let mut raw = build_pac(&[(99, vec![0x00])]);
        raw[4] = 0x05;

        assert!(matches!(
            Pac::parse(&raw),
            Err(Error::MalformedPacContainer(_))
        ));
    }

    #[test]
    fn test_parse_pac_with_out_of_range_buffer_fails() {
        let mut raw = build_pac(&[(99, vec![0x00])]);
        // grow the declared size past the end of the blob
        raw[12] = 0xff;

        assert!(matches!(
            Pac::parse(&raw),
            Err(Error::MalformedPacContainer(_))
        ));
    }

    #[test]
    fn test_parse_truncated_pac_fails() {
        assert!(matches!(
            Pac::parse(&[0x01, 0x00]),
            Err(Error::MalformedPacContainer(_))
        ));
    }
}
