use super::sid::Sid;
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Cursor;

/// The extended form also carries the SAM account name and the user
/// SID after the fixed fields.
pub const UPN_DNS_FLAG_EXTENDED: u32 = 0x2;

/// UPN_DNS_INFO: the user principal name and DNS domain of the
/// account, with optional SAM name and SID.
#[derive(Debug, Clone, PartialEq)]
pub struct UpnDnsInfo {
    pub upn: String,
    pub dns_domain_name: String,
    pub flags: u32,
    pub sam_name: Option<String>,
    pub sid: Option<Sid>,
}

impl UpnDnsInfo {
    pub fn parse(data: &[u8]) -> Result<UpnDnsInfo, String> {
        let mut cursor = Cursor::new(data);

        let upn_length = read_u16(&mut cursor)?;
        let upn_offset = read_u16(&mut cursor)?;
        let dns_length = read_u16(&mut cursor)?;
        let dns_offset = read_u16(&mut cursor)?;
        let flags = cursor
            .read_u32::<LittleEndian>()
            .map_err(|_| "truncated flags".to_string())?;

        let upn = read_utf16_at(data, upn_offset, upn_length)?;
        let dns_domain_name = read_utf16_at(data, dns_offset, dns_length)?;

        let mut sam_name = None;
        let mut sid = None;

        if flags & UPN_DNS_FLAG_EXTENDED != 0 {
            let sam_length = read_u16(&mut cursor)?;
            let sam_offset = read_u16(&mut cursor)?;
            let sid_length = read_u16(&mut cursor)?;
            let sid_offset = read_u16(&mut cursor)?;

            sam_name = Some(read_utf16_at(data, sam_offset, sam_length)?);
            sid = Some(Sid::parse(span(data, sid_offset, sid_length)?)?);
        }

        return Ok(UpnDnsInfo {
            upn,
            dns_domain_name,
            flags,
            sam_name,
            sid,
        });
    }
}

fn read_u16(cursor: &mut Cursor<&[u8]>) -> Result<u16, String> {
    return cursor
        .read_u16::<LittleEndian>()
        .map_err(|_| "truncated field".to_string());
}

fn span(data: &[u8], offset: u16, length: u16) -> Result<&[u8], String> {
    let start = offset as usize;
    let end = start + length as usize;
    if end > data.len() {
        return Err("field span out of bounds".into());
    }
    return Ok(&data[start..end]);
}

fn read_utf16_at(
    data: &[u8],
    offset: u16,
    length: u16,
) -> Result<String, String> {
    let raw = span(data, offset, length)?;
    let units: Vec<u16> = raw
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    return Ok(String::from_utf16_lossy(&units));
}

#[cfg(test)]
pub mod tests {
    use super::*;

    fn push_utf16(raw: &mut Vec<u8>, value: &str) -> (u16, u16) {
        let offset = raw.len() as u16;
        for unit in value.encode_utf16() {
            raw.extend_from_slice(&unit.to_le_bytes());
        }
        return (raw.len() as u16 - offset, offset);
    }

    pub fn build_upn_dns(
        upn: &str,
        dns_domain_name: &str,
        sam_name_and_sid: Option<(&str, &Sid)>,
    ) -> Vec<u8> {
        let header_length = match sam_name_and_sid {
            Some(_) => 20,
            None => 12,
        };

        let mut body: Vec<u8> = Vec::new();
        let mut header: Vec<u8> = Vec::new();

        let (upn_length, upn_offset) = push_utf16(&mut body, upn);
        let (dns_length, dns_offset) = push_utf16(&mut body, dns_domain_name);

        header.extend_from_slice(&upn_length.to_le_bytes());
        header.extend_from_slice(&(upn_offset + header_length).to_le_bytes());
        header.extend_from_slice(&dns_length.to_le_bytes());
        header.extend_from_slice(&(dns_offset + header_length).to_le_bytes());

        match sam_name_and_sid {
            Some((sam_name, sid)) => {
                header.extend_from_slice(
                    &UPN_DNS_FLAG_EXTENDED.to_le_bytes(),
                );

                let (sam_length, sam_offset) =
                    push_utf16(&mut body, sam_name);

                let sid_offset = body.len() as u16;
                body.push(sid.revision);
                body.push(sid.sub_authorities.len() as u8);
                body.extend_from_slice(
                    &sid.identifier_authority.to_be_bytes()[2..],
                );
                for sub_authority in sid.sub_authorities.iter() {
                    body.extend_from_slice(&sub_authority.to_le_bytes());
                }
                let sid_length = body.len() as u16 - sid_offset;

                header.extend_from_slice(&sam_length.to_le_bytes());
                header.extend_from_slice(
                    &(sam_offset + header_length).to_le_bytes(),
                );
                header.extend_from_slice(&sid_length.to_le_bytes());
                header.extend_from_slice(
                    &(sid_offset + header_length).to_le_bytes(),
                );
            }
            None => {
                header.extend_from_slice(&0u32.to_le_bytes());
            }
        }

        header.extend_from_slice(&body);
        return header;
    }

    fn sample_sid() -> Sid {
        return Sid {
            revision: 1,
            identifier_authority: 5,
            sub_authorities: vec![21, 1, 2, 3, 1105],
        };
    }

    #[test]
    fn test_parse_upn_dns_info() {
        let raw = build_upn_dns(
            "mickey.mouse@contoso.local",
            "CONTOSO.LOCAL",
            None,
        );

        let upn_dns = UpnDnsInfo::parse(&raw).unwrap();

        assert_eq!("mickey.mouse@contoso.local", upn_dns.upn);
        assert_eq!("CONTOSO.LOCAL", upn_dns.dns_domain_name);
        assert_eq!(0, upn_dns.flags);
        assert_eq!(None, upn_dns.sam_name);
        assert_eq!(None, upn_dns.sid);
    }

    #[test]
    fn test_parse_upn_dns_info_with_extended_names() {
        let sid = sample_sid();
        let raw = build_upn_dns(
            "mickey.mouse@contoso.local",
            "CONTOSO.LOCAL",
            Some(("mickey.mouse", &sid)),
        );

        let upn_dns = UpnDnsInfo::parse(&raw).unwrap();

        assert_eq!(UPN_DNS_FLAG_EXTENDED, upn_dns.flags);
        assert_eq!(Some("mickey.mouse".to_string()), upn_dns.sam_name);
        assert_eq!(Some(sid), upn_dns.sid);
    }

    #[test]
    fn test_parse_upn_dns_info_with_bad_span_fails() {
        let mut raw = build_upn_dns("a@b", "B", None);
        raw[2] = 0xff; // upn offset far out of the buffer
        raw[3] = 0xff;

        assert!(UpnDnsInfo::parse(&raw).is_err());
    }
}
