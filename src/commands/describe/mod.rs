use crate::core::pac::Pac;
use crate::core::stringifier::{
    decrypted_ticket_cred_to_string, etype_to_string,
    octet_string_to_string, principal_name_type_to_string,
    ticket_cred_to_string,
};
use crate::core::{
    decrypt_enc_ticket_part, extract_pac_blob, load_file_keytab,
    load_file_ticket_creds, CredFormat, KrbUser, TicketCred, TicketCreds,
};
use crate::utils;
use crate::Result;
use chrono::{Local, TimeZone, Utc};
use kerberos_asn1::EncTicketPart;
use kerberos_crypto::Key;
use kerberos_keytab::Keytab;
use log::warn;

/// Describe the credentials of a ccache/krb file, decrypting the
/// tickets when a key is given. Keytab files are also recognized.
pub fn describe(
    filepath: Option<String>,
    user_key: Option<Key>,
    user: Option<KrbUser>,
    key_usage: i32,
) -> Result<()> {
    let filepath = match filepath {
        Some(filepath) => filepath,
        None => utils::get_env_ticket_file()
            .ok_or("Specify file or set KRB5CCNAME")?,
    };

    match load_file_ticket_creds(&filepath) {
        Ok((ticket_creds, cred_format)) => {
            println!(
                "{}",
                ccache_to_string(
                    &ticket_creds,
                    cred_format,
                    &filepath,
                    user_key.as_ref(),
                    user.as_ref(),
                    key_usage,
                )
            );
        }
        Err(_) => match load_file_keytab(&filepath) {
            Ok(keytab) => {
                println!("{}", keytab_to_string(&keytab, &filepath));
            }
            Err(_) => {
                return Err(format!(
                    "Unable to parse file '{}', is not ccache, krb nor keytab.",
                    filepath
                ))?;
            }
        },
    }

    return Ok(());
}

fn ccache_to_string(
    ticket_creds: &TicketCreds,
    cred_format: CredFormat,
    filepath: &str,
    user_key: Option<&Key>,
    user: Option<&KrbUser>,
    key_usage: i32,
) -> String {
    let mut sections = Vec::with_capacity(ticket_creds.len() + 1);

    sections.push(format!(
        "Ticket cache ({}): FILE:{}\n\
         Default principal: {}\n\
         Number of credentials: {}",
        cred_format,
        filepath,
        default_principal_to_string(ticket_creds),
        ticket_creds.len()
    ));

    for (i, ticket_cred) in ticket_creds.iter().enumerate() {
        sections.push(credential_to_string(
            i, ticket_cred, user_key, user, key_usage,
        ));
    }

    return sections.join("\n\n");
}

fn default_principal_to_string(ticket_creds: &TicketCreds) -> String {
    let cred_info = match ticket_creds.get(0) {
        Some(ticket_cred) => &ticket_cred.cred_info,
        None => return "-".to_string(),
    };

    let name = cred_info
        .pname
        .as_ref()
        .map(|pname| pname.name_string.join("/"))
        .unwrap_or("-".to_string());
    let realm = cred_info
        .prealm
        .as_ref()
        .map(|realm| realm.as_str())
        .unwrap_or("-");

    return format!("{}@{}", name, realm);
}

/// One report section per credential. A failed decryption or PAC
/// decode is logged and degrades the section to the undecrypted form,
/// so the rest of the credentials are still described.
fn credential_to_string(
    index: usize,
    ticket_cred: &TicketCred,
    user_key: Option<&Key>,
    user: Option<&KrbUser>,
    key_usage: i32,
) -> String {
    let cred_info = &ticket_cred.cred_info;

    let user_name = cred_info
        .pname
        .as_ref()
        .map(|pname| pname.name_string.join("/"))
        .unwrap_or("-".to_string());
    let user_realm = cred_info
        .prealm
        .as_ref()
        .map(|realm| realm.as_str())
        .unwrap_or("-");
    let service = ticket_cred.ticket.sname.name_string.join("/");
    let service_realm = &ticket_cred.ticket.realm;

    let body = match user_key {
        Some(user_key) => {
            match decrypt_and_decode(ticket_cred, user_key, user, key_usage)
            {
                Ok((enc_part, pac)) => decrypted_ticket_cred_to_string(
                    ticket_cred,
                    &enc_part,
                    &pac,
                    1,
                ),
                Err(err) => {
                    warn!("Credential {}: {}", index, err);
                    ticket_cred_to_string(ticket_cred, 1)
                }
            }
        }
        None => ticket_cred_to_string(ticket_cred, 1),
    };

    return format!(
        "[Credential {}] {}@{} => {}@{}\n\
         {}",
        index, user_name, user_realm, service, service_realm, body
    );
}

fn decrypt_and_decode(
    ticket_cred: &TicketCred,
    user_key: &Key,
    user: Option<&KrbUser>,
    key_usage: i32,
) -> Result<(EncTicketPart, Pac)> {
    let enc_part = decrypt_enc_ticket_part(
        &ticket_cred.ticket.enc_part,
        user_key,
        user,
        key_usage,
    )?;

    let auth_data = enc_part.authorization_data.clone().unwrap_or_default();
    let pac_blob = extract_pac_blob(&auth_data)?;
    let pac = Pac::parse(&pac_blob)?;

    return Ok((enc_part, pac));
}

fn keytab_to_string(keytab: &Keytab, filepath: &str) -> String {
    let mut sections = vec![format!("Keytab: {}", filepath)];

    for entry in keytab.entries.iter() {
        let realm = String::from_utf8_lossy(&entry.realm.data);

        let components: Vec<String> = entry
            .components
            .iter()
            .map(|c| String::from_utf8_lossy(&c.data).to_string())
            .collect();

        sections.push(format!(
            "{}@{}\n\
             Name type: {}\n\
             Key: {}\n\
             Key type: {}\n\
             Time: {}\n\
             Version: {}",
            components.join("/"),
            realm,
            principal_name_type_to_string(entry.name_type as i32),
            octet_string_to_string(&entry.key.keyvalue),
            etype_to_string(entry.key.keytype as i32),
            Utc.timestamp(entry.timestamp as i64, 0)
                .with_timezone(&Local)
                .format("%m/%d/%Y %H:%M:%S")
                .to_string(),
            entry.vno.unwrap_or(entry.vno8 as u32)
        ));
    }

    return sections.join("\n\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pac::tests::{build_client_info, build_pac};
    use crate::core::pac::CLIENT_INFO;
    use crate::core::stringifier::filetime_to_string;
    use crate::error::Error;
    use chrono::{TimeZone, Utc};
    use kerberos_asn1::{
        Asn1Object, AuthorizationDataEntry, EncryptedData, EncryptionKey,
        KerberosTime, KrbCredInfo, PrincipalName, Ticket, TransitedEncoding,
    };
    use kerberos_constants::ad_types;
    use kerberos_constants::etypes;
    use kerberos_constants::key_usages::KEY_USAGE_AS_REP_TICKET;
    use kerberos_constants::principal_names::{NT_PRINCIPAL, NT_SRV_INST};
    use kerberos_constants::ticket_flags;
    use kerberos_crypto::new_kerberos_cipher;

    const AES256_KEY_HEX: &str =
        "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

    // 01/01/2020 00:00:00 UTC as a FILETIME
    const CLIENT_ID: i64 = 132223104000000000;

    fn new_pac_auth_data() -> Vec<AuthorizationDataEntry> {
        let pac_blob = build_pac(&[(
            CLIENT_INFO,
            build_client_info(CLIENT_ID, "mickey.mouse"),
        )]);

        let ad_win = AuthorizationDataEntry {
            ad_type: ad_types::AD_WIN2K_PACK,
            ad_data: pac_blob,
        };

        let ad_relevant = AuthorizationDataEntry {
            ad_type: ad_types::AD_IF_RELEVANT,
            ad_data: vec![ad_win].build(),
        };

        return vec![ad_relevant];
    }

    fn new_ticket_cred() -> TicketCred {
        let authtime: KerberosTime = Utc.timestamp(1577836800, 0).into();
        let endtime: KerberosTime = Utc.timestamp(1577872800, 0).into();

        let session_key = EncryptionKey {
            keytype: etypes::AES256_CTS_HMAC_SHA1_96,
            keyvalue: vec![0x33; 32],
        };

        let cname = PrincipalName {
            name_type: NT_PRINCIPAL,
            name_string: vec!["mickey.mouse".to_string()],
        };

        let sname = PrincipalName {
            name_type: NT_SRV_INST,
            name_string: vec![
                "krbtgt".to_string(),
                "CONTOSO.LOCAL".to_string(),
            ],
        };

        let tkt_flags =
            ticket_flags::FORWARDABLE | ticket_flags::RENEWABLE;

        let enc_ticket_part = EncTicketPart {
            flags: tkt_flags.into(),
            key: session_key.clone(),
            crealm: "CONTOSO.LOCAL".to_string(),
            cname: cname.clone(),
            transited: TransitedEncoding::default(),
            authtime: authtime.clone(),
            starttime: Some(authtime.clone()),
            endtime: endtime.clone(),
            renew_till: Some(endtime.clone()),
            caddr: None,
            authorization_data: Some(new_pac_auth_data()),
        };

        let key = Key::from_aes_256_key_string(AES256_KEY_HEX).unwrap();
        let cipher =
            new_kerberos_cipher(etypes::AES256_CTS_HMAC_SHA1_96).unwrap();
        let ciphertext = cipher.encrypt(
            key.as_bytes(),
            KEY_USAGE_AS_REP_TICKET,
            &enc_ticket_part.build(),
        );

        let ticket = Ticket {
            tkt_vno: 5,
            realm: "CONTOSO.LOCAL".to_string(),
            sname: sname.clone(),
            enc_part: EncryptedData::new(
                etypes::AES256_CTS_HMAC_SHA1_96,
                Some(2),
                ciphertext,
            ),
        };

        let cred_info = KrbCredInfo {
            key: session_key,
            prealm: Some("CONTOSO.LOCAL".to_string()),
            pname: Some(cname),
            flags: Some(tkt_flags.into()),
            authtime: Some(authtime.clone()),
            starttime: Some(authtime),
            endtime: Some(endtime.clone()),
            renew_till: Some(endtime),
            srealm: Some("CONTOSO.LOCAL".to_string()),
            sname: Some(sname),
            caddr: None,
        };

        return TicketCred::new(ticket, cred_info);
    }

    #[test]
    fn test_credential_with_key_renders_the_decrypted_pac() {
        let ticket_cred = new_ticket_cred();
        let key = Key::from_aes_256_key_string(AES256_KEY_HEX).unwrap();

        let rendered = credential_to_string(
            0,
            &ticket_cred,
            Some(&key),
            None,
            KEY_USAGE_AS_REP_TICKET,
        );

        assert!(rendered.contains("[Decrypted]"));
        assert!(rendered.contains("[PAC]"));
        assert!(rendered.contains("client-name: mickey.mouse"));
        assert!(rendered
            .contains(&format!("client-id: {}", filetime_to_string(CLIENT_ID))));
    }

    #[test]
    fn test_credential_without_key_keeps_the_cipher() {
        let ticket_cred = new_ticket_cred();
        let cipher_b64 = base64::encode(&ticket_cred.ticket.enc_part.cipher);

        let rendered = credential_to_string(
            0,
            &ticket_cred,
            None,
            None,
            KEY_USAGE_AS_REP_TICKET,
        );

        assert!(rendered.contains(&cipher_b64));
        assert!(!rendered.contains("[Decrypted]"));
        assert!(!rendered.contains("[PAC]"));
    }

    #[test]
    fn test_credential_with_wrong_key_degrades_to_the_cipher() {
        let ticket_cred = new_ticket_cred();
        let wrong_key = Key::from_aes_256_key_string(
            "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        )
        .unwrap();

        let rendered = credential_to_string(
            0,
            &ticket_cred,
            Some(&wrong_key),
            None,
            KEY_USAGE_AS_REP_TICKET,
        );

        assert!(!rendered.contains("[Decrypted]"));
        assert!(rendered
            .contains(&base64::encode(&ticket_cred.ticket.enc_part.cipher)));
    }

    #[test]
    fn test_decrypt_and_decode_without_auth_data_fails() {
        let mut ticket_cred = new_ticket_cred();

        let enc_ticket_part = EncTicketPart {
            flags: 0u32.into(),
            key: ticket_cred.cred_info.key.clone(),
            crealm: "CONTOSO.LOCAL".to_string(),
            cname: ticket_cred.cred_info.pname.clone().unwrap(),
            transited: TransitedEncoding::default(),
            authtime: Utc.timestamp(1577836800, 0).into(),
            starttime: None,
            endtime: Utc.timestamp(1577872800, 0).into(),
            renew_till: None,
            caddr: None,
            authorization_data: None,
        };

        let key = Key::from_aes_256_key_string(AES256_KEY_HEX).unwrap();
        let cipher =
            new_kerberos_cipher(etypes::AES256_CTS_HMAC_SHA1_96).unwrap();
        ticket_cred.ticket.enc_part = EncryptedData::new(
            etypes::AES256_CTS_HMAC_SHA1_96,
            None,
            cipher.encrypt(
                key.as_bytes(),
                KEY_USAGE_AS_REP_TICKET,
                &enc_ticket_part.build(),
            ),
        );

        let result = decrypt_and_decode(
            &ticket_cred,
            &key,
            None,
            KEY_USAGE_AS_REP_TICKET,
        );

        assert!(matches!(result, Err(Error::NoAuthorizationData)));
    }

    #[test]
    fn test_report_header() {
        let ticket_creds = TicketCreds::new(vec![new_ticket_cred()]);

        let rendered = ccache_to_string(
            &ticket_creds,
            CredFormat::Ccache,
            "/tmp/tickets.ccache",
            None,
            None,
            KEY_USAGE_AS_REP_TICKET,
        );

        assert!(rendered
            .contains("Ticket cache (ccache): FILE:/tmp/tickets.ccache"));
        assert!(rendered
            .contains("Default principal: mickey.mouse@CONTOSO.LOCAL"));
        assert!(rendered.contains("Number of credentials: 1"));
        assert!(rendered.contains("[Credential 0]"));
        assert!(rendered.contains(
            "mickey.mouse@CONTOSO.LOCAL => krbtgt/CONTOSO.LOCAL@CONTOSO.LOCAL"
        ));
    }
}
