//! Render the decoded Kerberos and PAC structures as the indented
//! text blocks of the report.

use crate::core::pac::{
    self, ClientInfo, GroupMembership, LogonInfo, Pac, PacInfoBuffer,
    SidAndAttributes, SignatureData, UpnDnsInfo,
};
use crate::core::TicketCred;
use chrono::{Local, TimeZone, Utc};
use kerberos_asn1::{
    AuthorizationDataEntry, EncTicketPart, EncryptedData, EncryptionKey,
    HostAddress, KerberosTime, KrbCredInfo, PrincipalName, Ticket,
    TransitedEncoding,
};
use kerberos_constants::ad_types;
use kerberos_constants::etypes;
use kerberos_constants::principal_names;
use kerberos_constants::ticket_flags;

const NONE: &str = "-";
const NIL: &str = "nil";

/// Windows epoch (1601) to Unix epoch (1970) difference in seconds.
const FILETIME_UNIX_DIFF: i64 = 11644473600;
const FILETIME_NEVER: i64 = 0x7fff_ffff_ffff_ffff;

/// Ticket flag names by mask, in ascending flag bit order. The same
/// enumeration applies to the flags of the credential info and of the
/// decrypted ticket body.
pub const TICKET_FLAG_NAMES: &[(u32, &str)] = &[
    (ticket_flags::FORWARDABLE, "forwardable"),
    (ticket_flags::FORWARDED, "forwarded"),
    (ticket_flags::PROXIABLE, "proxiable"),
    (ticket_flags::PROXY, "proxy"),
    (ticket_flags::MAY_POSTDATE, "may_postdate"),
    (ticket_flags::POSTDATE, "postdate"),
    (ticket_flags::INVALID, "invalid"),
    (ticket_flags::RENEWABLE, "renewable"),
    (ticket_flags::INITIAL, "initial"),
    (ticket_flags::PRE_AUTHENT, "pre_authent"),
    (ticket_flags::HW_AUTHENT, "hw_authent"),
    (ticket_flags::TRANSITED_POLICY_CHECKED, "transited_policy_checked"),
    (ticket_flags::OK_AS_DELEGATE, "ok_as_delegate"),
    (ticket_flags::REQUEST_ANONYMOUS, "anonymous"),
    (ticket_flags::NAME_CANONICALIZE, "name_canonicalize"),
];

/// Names of the flags whose bit is set in the mask, in the order of
/// the table.
pub fn enabled_flag_names<'a>(
    flags: u32,
    table: &[(u32, &'a str)],
) -> Vec<&'a str> {
    let mut names = Vec::new();

    for (mask, name) in table.iter() {
        if (flags & mask) != 0 {
            names.push(*name);
        }
    }

    return names;
}

pub fn kerberos_flags_to_string(flags: u32) -> String {
    return format!(
        "{:#06x} -> {}",
        flags,
        enabled_flag_names(flags, TICKET_FLAG_NAMES).join(" ")
    );
}

fn indent(level: usize) -> String {
    let mut ind = "".to_string();
    for _ in 0..level {
        ind = format!(" {}", ind);
    }
    return ind;
}

pub fn octet_string_to_string(os: &Vec<u8>) -> String {
    let mut vs = Vec::new();

    for o in os.iter() {
        vs.push(format!("{:02x}", o));
    }
    return vs.join("");
}

pub fn kerberos_time_to_string(krb_time: &KerberosTime) -> String {
    krb_time
        .with_timezone(&Local)
        .format("%m/%d/%Y %H:%M:%S")
        .to_string()
}

/// PAC timestamps are FILETIMEs; 0 and the i64 maximum are the "not
/// set" and "never" markers.
pub fn filetime_to_string(filetime: i64) -> String {
    match filetime {
        0 => return NONE.to_string(),
        FILETIME_NEVER => return "never".to_string(),
        _ => {
            let unix_secs = filetime / 10_000_000 - FILETIME_UNIX_DIFF;
            return Utc
                .timestamp(unix_secs, 0)
                .with_timezone(&Local)
                .format("%m/%d/%Y %H:%M:%S")
                .to_string();
        }
    }
}

pub fn etype_name(etype: i32) -> Option<&'static str> {
    match etype {
        etypes::AES128_CTS_HMAC_SHA1_96 => Some("aes128-cts-hmac-sha1-96"),
        etypes::AES256_CTS_HMAC_SHA1_96 => Some("aes256-cts-hmac-sha1-96"),
        etypes::DES_CBC_CRC => Some("des-cbc-crc"),
        etypes::DES_CBC_MD5 => Some("des-cbc-md5"),
        etypes::NO_ENCRYPTION => Some("no encryption"),
        etypes::RC4_HMAC => Some("rc4-hmac"),
        etypes::RC4_HMAC_EXP => Some("rc4-hmac-exp"),
        etypes::RC4_HMAC_OLD_EXP => Some("rc4-hmac-old-exp"),
        _ => None,
    }
}

pub fn etype_to_string(etype: i32) -> String {
    match etype_name(etype) {
        Some(name) => return format!("{} -> {}", etype, name),
        None => return format!("{}", etype),
    }
}

pub fn principal_name_type_name(name_type: i32) -> Option<&'static str> {
    match name_type {
        principal_names::NT_UNKNOWN => Some("nt-unknown"),
        principal_names::NT_PRINCIPAL => Some("nt-principal"),
        principal_names::NT_SRV_INST => Some("nt-srv-inst"),
        principal_names::NT_SRV_HST => Some("nt-srv-hst"),
        principal_names::NT_SRV_XHST => Some("nt-srv-xhst"),
        principal_names::NT_UID => Some("nt-uid"),
        principal_names::NT_X500_PRINCIPAL => Some("nt-x500-principal"),
        principal_names::NT_SMTP_NAME => Some("nt-smtp-name"),
        principal_names::NT_ENTERPRISE => Some("nt-enterprise"),
        _ => None,
    }
}

pub fn principal_name_type_to_string(name_type: i32) -> String {
    match principal_name_type_name(name_type) {
        Some(name) => return format!("{} -> {}", name_type, name),
        None => return format!("{}", name_type),
    }
}

pub fn address_type_name(addr_type: i32) -> Option<&'static str> {
    match addr_type {
        2 => Some("ipv4"),
        3 => Some("directional"),
        5 => Some("chaosnet"),
        6 => Some("xns"),
        7 => Some("iso"),
        12 => Some("decnet"),
        16 => Some("appletalk-ddp"),
        20 => Some("netbios"),
        24 => Some("ipv6"),
        _ => None,
    }
}

pub fn address_type_to_string(addr_type: i32) -> String {
    match address_type_name(addr_type) {
        Some(name) => return format!("{} -> {}", addr_type, name),
        None => return format!("{}", addr_type),
    }
}

pub fn ad_type_name(ad_type: i32) -> Option<&'static str> {
    match ad_type {
        ad_types::AD_IF_RELEVANT => Some("ad-if-relevant"),
        4 => Some("ad-kdc-issued"),
        5 => Some("ad-and-or"),
        8 => Some("ad-mandatory-for-kdc"),
        ad_types::AD_WIN2K_PACK => Some("ad-win2k-pac"),
        _ => None,
    }
}

pub fn ad_type_to_string(ad_type: i32) -> String {
    match ad_type_name(ad_type) {
        Some(name) => return format!("{} -> {}", ad_type, name),
        None => return format!("{}", ad_type),
    }
}

pub fn pac_buffer_type_name(ul_type: u32) -> Option<&'static str> {
    match ul_type {
        pac::LOGON_INFO => Some("logon-info"),
        pac::CREDENTIALS_INFO => Some("credentials-info"),
        pac::SERVER_CHECKSUM => Some("server-checksum"),
        pac::PRIVSVR_CHECKSUM => Some("privsvr-checksum"),
        pac::CLIENT_INFO => Some("client-info"),
        pac::DELEGATION_INFO => Some("delegation-info"),
        pac::UPN_DNS_INFO => Some("upn-dns-info"),
        pac::CLIENT_CLAIMS_INFO => Some("client-claims-info"),
        pac::DEVICE_INFO => Some("device-info"),
        pac::DEVICE_CLAIMS_INFO => Some("device-claims-info"),
        pac::TICKET_CHECKSUM => Some("ticket-checksum"),
        _ => None,
    }
}

pub fn pac_buffer_type_to_string(ul_type: u32) -> String {
    match pac_buffer_type_name(ul_type) {
        Some(name) => return format!("{} -> {}", ul_type, name),
        None => return format!("{}", ul_type),
    }
}

pub fn checksum_type_name(checksum_type: i32) -> Option<&'static str> {
    match checksum_type {
        -138 => Some("hmac-md5"),
        15 => Some("hmac-sha1-96-aes128"),
        16 => Some("hmac-sha1-96-aes256"),
        _ => None,
    }
}

pub fn checksum_type_to_string(checksum_type: i32) -> String {
    match checksum_type_name(checksum_type) {
        Some(name) => return format!("{} -> {}", checksum_type, name),
        None => return format!("{}", checksum_type),
    }
}

pub fn principal_name_to_string(
    pname: &PrincipalName,
    indent_level: usize,
) -> String {
    let indentation = indent(indent_level);
    format!(
        "{}name-type: {}\n\
         {}name-string: {}",
        indentation,
        principal_name_type_to_string(pname.name_type),
        indentation,
        pname.name_string.join("/")
    )
}

pub fn encryption_key_to_string(
    ek: &EncryptionKey,
    indent_level: usize,
) -> String {
    let indentation = indent(indent_level);
    format!(
        "{}keytype: {}\n\
         {}keyvalue: {}",
        indentation,
        etype_to_string(ek.keytype),
        indentation,
        octet_string_to_string(&ek.keyvalue)
    )
}

pub fn encrypted_data_to_string(
    ed: &EncryptedData,
    indent_level: usize,
) -> String {
    let indentation = indent(indent_level);
    format!(
        "{}etype: {}\n\
         {}kvno: {}\n\
         {}cipher: {}",
        indentation,
        etype_to_string(ed.etype),
        indentation,
        ed.kvno.map(|v| format!("{}", v)).unwrap_or(NONE.into()),
        indentation,
        base64::encode(&ed.cipher)
    )
}

pub fn ticket_to_string(tkt: &Ticket, indent_level: usize) -> String {
    let indentation = indent(indent_level);
    format!(
        "{}tkt-vno: {}\n\
         {}realm: {}\n\
         {}sname:\n{}\n\
         {}enc-part:\n{}",
        indentation,
        tkt.tkt_vno,
        indentation,
        tkt.realm,
        indentation,
        principal_name_to_string(&tkt.sname, indent_level + 2),
        indentation,
        encrypted_data_to_string(&tkt.enc_part, indent_level + 2)
    )
}

pub fn host_address_to_string(addr: &HostAddress) -> String {
    let value = match addr.addr_type {
        2 if addr.address.len() == 4 => format!(
            "{}.{}.{}.{}",
            addr.address[0], addr.address[1], addr.address[2],
            addr.address[3]
        ),
        20 => String::from_utf8_lossy(&addr.address).trim_end().to_string(),
        _ => octet_string_to_string(&addr.address),
    };

    return format!("{} {}", address_type_to_string(addr.addr_type), value);
}

pub fn host_addresses_to_string(addrs: &[HostAddress]) -> String {
    let vs: Vec<String> =
        addrs.iter().map(|a| host_address_to_string(a)).collect();
    return vs.join(", ");
}

pub fn auth_data_types_to_string(
    entries: &[AuthorizationDataEntry],
) -> String {
    if entries.is_empty() {
        return NONE.to_string();
    }

    let vs: Vec<String> =
        entries.iter().map(|e| ad_type_to_string(e.ad_type)).collect();
    return vs.join(", ");
}

pub fn transited_encoding_to_string(te: &TransitedEncoding) -> String {
    if te.contents.is_empty() {
        return format!("{}", te.tr_type);
    }
    return format!(
        "{} {}",
        te.tr_type,
        octet_string_to_string(&te.contents)
    );
}

pub fn krb_cred_info_to_string(
    kci: &KrbCredInfo,
    indent_level: usize,
) -> String {
    let indentation = indent(indent_level);
    format!(
        "{}key:\n{}\n\
         {}prealm: {}\n\
         {}pname:\n{}\n\
         {}flags: {}\n\
         {}authtime: {}\n\
         {}starttime: {}\n\
         {}endtime: {}\n\
         {}renew-till: {}\n\
         {}srealm: {}\n\
         {}sname:\n{}\n\
         {}caddr: {}",
        indentation,
        encryption_key_to_string(&kci.key, indent_level + 2),
        indentation,
        &kci.prealm.as_ref().unwrap_or(&NONE.to_string()),
        indentation,
        &kci.pname
            .as_ref()
            .map(|v| principal_name_to_string(&v, indent_level + 2))
            .unwrap_or(NONE.into()),
        indentation,
        &kci.flags
            .as_ref()
            .map(|v| kerberos_flags_to_string(v.flags))
            .unwrap_or(NONE.into()),
        indentation,
        &kci.authtime
            .as_ref()
            .map(|v| kerberos_time_to_string(&v))
            .unwrap_or(NONE.into()),
        indentation,
        &kci.starttime
            .as_ref()
            .map(|v| kerberos_time_to_string(&v))
            .unwrap_or(NONE.into()),
        indentation,
        &kci.endtime
            .as_ref()
            .map(|v| kerberos_time_to_string(&v))
            .unwrap_or(NONE.into()),
        indentation,
        &kci.renew_till
            .as_ref()
            .map(|v| kerberos_time_to_string(&v))
            .unwrap_or(NONE.into()),
        indentation,
        &kci.srealm.as_ref().unwrap_or(&NONE.to_string()),
        indentation,
        &kci.sname
            .as_ref()
            .map(|v| principal_name_to_string(&v, indent_level + 2))
            .unwrap_or(NONE.into()),
        indentation,
        &kci.caddr
            .as_ref()
            .map(|v| host_addresses_to_string(v))
            .unwrap_or(NONE.into()),
    )
}

pub fn enc_ticket_part_to_string(
    ep: &EncTicketPart,
    indent_level: usize,
) -> String {
    let indentation = indent(indent_level);
    format!(
        "{}flags: {}\n\
         {}key:\n{}\n\
         {}crealm: {}\n\
         {}cname:\n{}\n\
         {}transited: {}\n\
         {}authtime: {}\n\
         {}starttime: {}\n\
         {}endtime: {}\n\
         {}renew-till: {}\n\
         {}caddr: {}\n\
         {}authdata-types: {}",
        indentation,
        kerberos_flags_to_string(ep.flags.flags),
        indentation,
        encryption_key_to_string(&ep.key, indent_level + 2),
        indentation,
        ep.crealm,
        indentation,
        principal_name_to_string(&ep.cname, indent_level + 2),
        indentation,
        transited_encoding_to_string(&ep.transited),
        indentation,
        kerberos_time_to_string(&ep.authtime),
        indentation,
        &ep.starttime
            .as_ref()
            .map(|v| kerberos_time_to_string(&v))
            .unwrap_or(NONE.into()),
        indentation,
        kerberos_time_to_string(&ep.endtime),
        indentation,
        &ep.renew_till
            .as_ref()
            .map(|v| kerberos_time_to_string(&v))
            .unwrap_or(NONE.into()),
        indentation,
        &ep.caddr
            .as_ref()
            .map(|v| host_addresses_to_string(v))
            .unwrap_or(NONE.into()),
        indentation,
        &ep.authorization_data
            .as_ref()
            .map(|v| auth_data_types_to_string(v))
            .unwrap_or(NONE.into()),
    )
}

pub fn ticket_cred_to_string(
    tc: &TicketCred,
    indent_level: usize,
) -> String {
    let indentation = indent(indent_level);
    format!(
        "{}[KrbCredInfo]\n\
         {}\n\
         {}[Ticket]\n\
         {}",
        indentation,
        krb_cred_info_to_string(&tc.cred_info, indent_level + 2),
        indentation,
        ticket_to_string(&tc.ticket, indent_level + 2)
    )
}

/// Same shape than ticket_cred_to_string, with the enc-part replaced
/// by its decrypted body and the PAC extracted from it.
pub fn decrypted_ticket_cred_to_string(
    tc: &TicketCred,
    enc_part: &EncTicketPart,
    pac: &Pac,
    indent_level: usize,
) -> String {
    let indentation = indent(indent_level);
    format!(
        "{}[KrbCredInfo]\n\
         {}\n\
         {}[Ticket]\n\
         {}",
        indentation,
        krb_cred_info_to_string(&tc.cred_info, indent_level + 2),
        indentation,
        decrypted_ticket_to_string(&tc.ticket, enc_part, pac, indent_level + 2)
    )
}

pub fn decrypted_ticket_to_string(
    tkt: &Ticket,
    enc_part: &EncTicketPart,
    pac: &Pac,
    indent_level: usize,
) -> String {
    let indentation = indent(indent_level);
    format!(
        "{}tkt-vno: {}\n\
         {}realm: {}\n\
         {}sname:\n{}\n\
         {}etype: {}\n\
         {}kvno: {}\n\
         {}[Decrypted]\n\
         {}\n\
         {}[PAC]\n\
         {}",
        indentation,
        tkt.tkt_vno,
        indentation,
        tkt.realm,
        indentation,
        principal_name_to_string(&tkt.sname, indent_level + 2),
        indentation,
        etype_to_string(tkt.enc_part.etype),
        indentation,
        tkt.enc_part
            .kvno
            .map(|v| format!("{}", v))
            .unwrap_or(NONE.into()),
        indentation,
        enc_ticket_part_to_string(enc_part, indent_level + 2),
        indentation,
        pac_to_string(pac, indent_level + 2)
    )
}

pub fn pac_to_string(pac: &Pac, indent_level: usize) -> String {
    let indentation = indent(indent_level);
    let mut vs = Vec::new();

    for (i, buffer) in pac.buffers.iter().enumerate() {
        vs.push(format!(
            "{}[{}]\n\
             {}",
            indentation,
            i,
            pac_info_buffer_to_string(buffer, indent_level)
        ))
    }

    return vs.join("\n");
}

pub fn pac_info_buffer_to_string(
    buffer: &PacInfoBuffer,
    indent_level: usize,
) -> String {
    let indentation = indent(indent_level);
    match buffer {
        PacInfoBuffer::LogonInfo(logon_info) => format!(
            "{}logon-info:\n{}",
            indentation,
            logon_info_to_string(logon_info, indent_level + 2)
        ),
        PacInfoBuffer::ClientInfo(client_info) => format!(
            "{}client-info:\n{}",
            indentation,
            client_info_to_string(client_info, indent_level + 2)
        ),
        PacInfoBuffer::ServerChecksum(signature) => format!(
            "{}server-checksum:\n{}",
            indentation,
            signature_data_to_string(signature, indent_level + 2)
        ),
        PacInfoBuffer::PrivSvrChecksum(signature) => format!(
            "{}privsvr-checksum:\n{}",
            indentation,
            signature_data_to_string(signature, indent_level + 2)
        ),
        PacInfoBuffer::UpnDnsInfo(upn_dns) => format!(
            "{}upn-dns-info:\n{}",
            indentation,
            upn_dns_info_to_string(upn_dns, indent_level + 2)
        ),
        PacInfoBuffer::Raw(ul_type, data) => format!(
            "{}{}:\n{}data: {}",
            indentation,
            pac_buffer_type_to_string(*ul_type),
            indent(indent_level + 2),
            octet_string_to_string(data)
        ),
    }
}

pub fn client_info_to_string(
    client_info: &ClientInfo,
    indent_level: usize,
) -> String {
    let indentation = indent(indent_level);
    format!(
        "{}client-id: {}\n\
         {}client-name: {}",
        indentation,
        filetime_to_string(client_info.client_id),
        indentation,
        client_info.name
    )
}

pub fn signature_data_to_string(
    signature: &SignatureData,
    indent_level: usize,
) -> String {
    let indentation = indent(indent_level);
    format!(
        "{}signature-type: {}\n\
         {}signature: {}",
        indentation,
        checksum_type_to_string(signature.signature_type),
        indentation,
        octet_string_to_string(&signature.signature)
    )
}

pub fn upn_dns_info_to_string(
    upn_dns: &UpnDnsInfo,
    indent_level: usize,
) -> String {
    let indentation = indent(indent_level);
    let mut lines = vec![
        format!("{}upn: {}", indentation, upn_dns.upn),
        format!(
            "{}dns-domain-name: {}",
            indentation, upn_dns.dns_domain_name
        ),
        format!("{}flags: {:#x}", indentation, upn_dns.flags),
    ];

    if let Some(sam_name) = &upn_dns.sam_name {
        lines.push(format!("{}sam-name: {}", indentation, sam_name));
    }

    if let Some(sid) = &upn_dns.sid {
        lines.push(format!("{}sid: {}", indentation, sid));
    }

    return lines.join("\n");
}

pub fn logon_info_to_string(
    logon_info: &LogonInfo,
    indent_level: usize,
) -> String {
    let indentation = indent(indent_level);
    let lines = vec![
        format!(
            "{}logon-time: {}",
            indentation,
            filetime_to_string(logon_info.logon_time)
        ),
        format!(
            "{}logoff-time: {}",
            indentation,
            filetime_to_string(logon_info.logoff_time)
        ),
        format!(
            "{}kick-off-time: {}",
            indentation,
            filetime_to_string(logon_info.kick_off_time)
        ),
        format!(
            "{}password-last-set: {}",
            indentation,
            filetime_to_string(logon_info.password_last_set)
        ),
        format!(
            "{}password-can-change: {}",
            indentation,
            filetime_to_string(logon_info.password_can_change)
        ),
        format!(
            "{}password-must-change: {}",
            indentation,
            filetime_to_string(logon_info.password_must_change)
        ),
        format!(
            "{}effective-name: {}",
            indentation,
            string_or_nil(&logon_info.effective_name)
        ),
        format!(
            "{}full-name: {}",
            indentation,
            string_or_nil(&logon_info.full_name)
        ),
        format!(
            "{}logon-script: {}",
            indentation,
            string_or_nil(&logon_info.logon_script)
        ),
        format!(
            "{}profile-path: {}",
            indentation,
            string_or_nil(&logon_info.profile_path)
        ),
        format!(
            "{}home-directory: {}",
            indentation,
            string_or_nil(&logon_info.home_directory)
        ),
        format!(
            "{}home-directory-drive: {}",
            indentation,
            string_or_nil(&logon_info.home_directory_drive)
        ),
        format!(
            "{}logon-count: {}",
            indentation, logon_info.logon_count
        ),
        format!(
            "{}bad-password-count: {}",
            indentation, logon_info.bad_password_count
        ),
        format!("{}user-id: {}", indentation, logon_info.user_id),
        format!(
            "{}primary-group-id: {}",
            indentation, logon_info.primary_group_id
        ),
        format!(
            "{}groups: {}",
            indentation,
            group_memberships_to_string(&logon_info.group_ids)
        ),
        format!(
            "{}user-flags: {:#x}",
            indentation, logon_info.user_flags
        ),
        format!(
            "{}user-session-key: {}",
            indentation,
            octet_string_to_string(&logon_info.user_session_key)
        ),
        format!(
            "{}logon-server: {}",
            indentation,
            string_or_nil(&logon_info.logon_server)
        ),
        format!(
            "{}logon-domain-name: {}",
            indentation,
            string_or_nil(&logon_info.logon_domain_name)
        ),
        format!(
            "{}logon-domain-id: {}",
            indentation,
            logon_info
                .logon_domain_id
                .as_ref()
                .map(|sid| sid.to_string())
                .unwrap_or(NIL.into())
        ),
        format!(
            "{}user-account-control: {:#x}",
            indentation, logon_info.user_account_control
        ),
        format!(
            "{}extra-sids: {}",
            indentation,
            extra_sids_to_string(&logon_info.extra_sids)
        ),
        format!(
            "{}resource-group-domain-sid: {}",
            indentation,
            logon_info
                .resource_group_domain_sid
                .as_ref()
                .map(|sid| sid.to_string())
                .unwrap_or(NIL.into())
        ),
        format!(
            "{}resource-groups: {}",
            indentation,
            group_memberships_to_string(&logon_info.resource_group_ids)
        ),
    ];

    return lines.join("\n");
}

fn string_or_nil(value: &Option<String>) -> String {
    return value.clone().unwrap_or(NIL.to_string());
}

fn group_memberships_to_string(groups: &[GroupMembership]) -> String {
    if groups.is_empty() {
        return NONE.to_string();
    }

    let vs: Vec<String> = groups
        .iter()
        .map(|g| format!("{}({:#x})", g.relative_id, g.attributes))
        .collect();
    return vs.join(" ");
}

fn extra_sids_to_string(extra_sids: &[SidAndAttributes]) -> String {
    if extra_sids.is_empty() {
        return NONE.to_string();
    }

    let vs: Vec<String> = extra_sids
        .iter()
        .map(|sa| format!("{}({:#x})", sa.sid, sa.attributes))
        .collect();
    return vs.join(" ");
}
