//! Extraction of the raw PAC blob wrapped inside the authorization
//! data of a decrypted ticket.
//!
//! The PAC travels as an ad-win2k-pac entry nested inside an
//! ad-if-relevant element. Rather than interpreting the nested bytes
//! as authorization data again, the blob is pulled out by walking the
//! raw ASN.1 value tree along the one nesting KDCs actually produce,
//! failing on any deviation.

use crate::error::Error;
use crate::Result;
use kerberos_asn1::AuthorizationDataEntry;

const TAG_SEQUENCE: u8 = 0x30;
const TAG_OCTET_STRING: u8 = 0x04;
const TAG_CTX_1: u8 = 0xa1;

/// Generic view of a decoded ASN.1 value, just enough to walk the
/// nesting without knowing the schema.
#[derive(Debug, PartialEq)]
enum DerValue {
    Primitive { tag: u8, content: Vec<u8> },
    Constructed { tag: u8, children: Vec<DerValue> },
}

/// Extract the raw PAC bytes from the authorization data of a
/// decrypted ticket. Only the first element is examined: outer
/// sequence -> first entry -> its ad-data field -> the octet string
/// inside, whose content is the PAC.
pub fn extract_pac_blob(
    auth_data: &[AuthorizationDataEntry],
) -> Result<Vec<u8>> {
    let first = auth_data.first().ok_or(Error::NoAuthorizationData)?;

    let (root, rest) =
        parse_value(&first.ad_data).map_err(Error::MalformedAuthData)?;

    if !rest.is_empty() {
        return Err(Error::MalformedAuthData(
            "trailing bytes after the outer sequence".into(),
        ));
    }

    let entries = match &root {
        DerValue::Constructed { tag: TAG_SEQUENCE, children } => children,
        _ => {
            return Err(Error::MalformedAuthData(
                "the outer value is not a sequence".into(),
            ));
        }
    };

    let entry = entries.first().ok_or_else(|| {
        Error::MalformedAuthData("the outer sequence is empty".into())
    })?;

    let fields = match entry {
        DerValue::Constructed { tag: TAG_SEQUENCE, children } => children,
        _ => {
            return Err(Error::MalformedAuthData(
                "the first entry is not a sequence".into(),
            ));
        }
    };

    let ad_data = fields.get(1).ok_or_else(|| {
        Error::MalformedAuthData("the entry has no ad-data field".into())
    })?;

    let wrapped = match ad_data {
        DerValue::Constructed { tag: TAG_CTX_1, children } => children,
        _ => {
            return Err(Error::MalformedAuthData(
                "the second field is not an ad-data tag".into(),
            ));
        }
    };

    let octets = wrapped.first().ok_or_else(|| {
        Error::MalformedAuthData("the ad-data tag is empty".into())
    })?;

    match octets {
        DerValue::Primitive { tag: TAG_OCTET_STRING, content } => {
            return Ok(content.clone());
        }
        _ => {
            return Err(Error::MalformedAuthData(
                "the ad-data value is not an octet string".into(),
            ));
        }
    }
}

fn parse_value(raw: &[u8]) -> std::result::Result<(DerValue, &[u8]), String> {
    if raw.len() < 2 {
        return Err("truncated value header".into());
    }

    let tag = raw[0];
    if tag & 0x1f == 0x1f {
        return Err("multi-byte tags are not supported".into());
    }

    let (length, length_octets) = parse_length(&raw[1..])?;
    let content_start = 1 + length_octets;

    if raw.len() < content_start + length {
        return Err("value content out of bounds".into());
    }

    let content = &raw[content_start..content_start + length];
    let rest = &raw[content_start + length..];

    if tag & 0x20 != 0 {
        let mut children = Vec::new();
        let mut remaining = content;
        while !remaining.is_empty() {
            let (child, new_remaining) = parse_value(remaining)?;
            children.push(child);
            remaining = new_remaining;
        }
        return Ok((DerValue::Constructed { tag, children }, rest));
    }

    return Ok((
        DerValue::Primitive { tag, content: content.to_vec() },
        rest,
    ));
}

fn parse_length(raw: &[u8]) -> std::result::Result<(usize, usize), String> {
    let first = raw[0];

    if first & 0x80 == 0 {
        return Ok((first as usize, 1));
    }

    let count = (first & 0x7f) as usize;
    if count == 0 || count > 4 {
        return Err("unsupported length encoding".into());
    }

    if raw.len() < 1 + count {
        return Err("truncated length".into());
    }

    let mut length = 0;
    for octet in raw[1..].iter().take(count) {
        length = (length << 8) | *octet as usize;
    }

    return Ok((length, 1 + count));
}

#[cfg(test)]
mod tests {
    use super::*;
    use kerberos_asn1::Asn1Object;
    use kerberos_constants::ad_types;

    fn wrap_pac_blob(pac_data: Vec<u8>) -> AuthorizationDataEntry {
        let ad_win = AuthorizationDataEntry {
            ad_type: ad_types::AD_WIN2K_PACK,
            ad_data: pac_data,
        };

        return AuthorizationDataEntry {
            ad_type: ad_types::AD_IF_RELEVANT,
            ad_data: vec![ad_win].build(),
        };
    }

    #[test]
    fn test_extract_pac_blob() {
        let pac_data = vec![0x11, 0x22, 0x33, 0x44];
        let ad_relevant = wrap_pac_blob(pac_data.clone());

        assert_eq!(pac_data, extract_pac_blob(&[ad_relevant]).unwrap());
    }

    #[test]
    fn test_extract_only_looks_at_the_first_element() {
        let pac_data = vec![0xaa; 16];
        let ad_relevant = wrap_pac_blob(pac_data.clone());
        let bogus = AuthorizationDataEntry {
            ad_type: ad_types::AD_IF_RELEVANT,
            ad_data: vec![0xff; 8],
        };

        assert_eq!(
            pac_data,
            extract_pac_blob(&[ad_relevant, bogus]).unwrap()
        );
    }

    #[test]
    fn test_extract_without_elements_fails() {
        let result = extract_pac_blob(&[]);
        assert!(matches!(result, Err(Error::NoAuthorizationData)));
    }

    #[test]
    fn test_extract_from_garbage_fails() {
        let entry = AuthorizationDataEntry {
            ad_type: ad_types::AD_IF_RELEVANT,
            ad_data: vec![0xde, 0xad, 0xbe, 0xef],
        };

        let result = extract_pac_blob(&[entry]);
        assert!(matches!(result, Err(Error::MalformedAuthData(_))));
    }

    #[test]
    fn test_extract_from_non_sequence_fails() {
        // a plain octet string instead of the outer sequence
        let entry = AuthorizationDataEntry {
            ad_type: ad_types::AD_IF_RELEVANT,
            ad_data: vec![0x04, 0x02, 0x01, 0x02],
        };

        let result = extract_pac_blob(&[entry]);
        assert!(matches!(result, Err(Error::MalformedAuthData(_))));
    }

    #[test]
    fn test_extract_from_empty_sequence_fails() {
        let entry = AuthorizationDataEntry {
            ad_type: ad_types::AD_IF_RELEVANT,
            ad_data: vec![0x30, 0x00],
        };

        let result = extract_pac_blob(&[entry]);
        assert!(matches!(result, Err(Error::MalformedAuthData(_))));
    }

    #[test]
    fn test_extract_from_entry_with_one_field_fails() {
        // SEQUENCE { SEQUENCE { INTEGER 1 } }: the ad-data is missing
        let entry = AuthorizationDataEntry {
            ad_type: ad_types::AD_IF_RELEVANT,
            ad_data: vec![0x30, 0x05, 0x30, 0x03, 0x02, 0x01, 0x01],
        };

        let result = extract_pac_blob(&[entry]);
        assert!(matches!(result, Err(Error::MalformedAuthData(_))));
    }
}
