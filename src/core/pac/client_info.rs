use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Cursor;

/// PAC_CLIENT_INFO: authentication time and name of the client the
/// ticket was issued to.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientInfo {
    pub client_id: i64,
    pub name: String,
}

impl ClientInfo {
    pub fn parse(data: &[u8]) -> Result<ClientInfo, String> {
        let mut cursor = Cursor::new(data);

        let client_id = cursor
            .read_i64::<LittleEndian>()
            .map_err(|_| "truncated client id".to_string())?;
        let name_length = cursor
            .read_u16::<LittleEndian>()
            .map_err(|_| "truncated name length".to_string())?;

        let mut units = Vec::with_capacity(name_length as usize / 2);
        for _ in 0..name_length / 2 {
            units.push(
                cursor
                    .read_u16::<LittleEndian>()
                    .map_err(|_| "truncated client name".to_string())?,
            );
        }

        return Ok(ClientInfo {
            client_id,
            name: String::from_utf16_lossy(&units),
        });
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    pub fn build_client_info(client_id: i64, name: &str) -> Vec<u8> {
        let units: Vec<u16> = name.encode_utf16().collect();
        let mut raw = Vec::new();
        raw.extend_from_slice(&client_id.to_le_bytes());
        raw.extend_from_slice(&((units.len() * 2) as u16).to_le_bytes());
        for unit in units {
            raw.extend_from_slice(&unit.to_le_bytes());
        }
        return raw;
    }

    #[test]
    fn test_parse_client_info() {
        let raw = build_client_info(0x01d5e3a2b4c6d8f0, "mickey.mouse");
        let client_info = ClientInfo::parse(&raw).unwrap();

        assert_eq!(0x01d5e3a2b4c6d8f0, client_info.client_id);
        assert_eq!("mickey.mouse", client_info.name);
    }

    #[test]
    fn test_parse_truncated_client_info_fails() {
        let raw = build_client_info(0, "mickey.mouse");
        assert!(ClientInfo::parse(&raw[..12]).is_err());
    }
}
