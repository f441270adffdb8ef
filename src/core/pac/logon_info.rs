use super::ndr::{NdrReader, NdrResult};
use super::sid::Sid;

/// Domain logon information of the authenticated user, the NDR
/// serialized KERB_VALIDATION_INFO structure.
#[derive(Debug, Clone)]
pub struct LogonInfo {
    pub logon_time: i64,
    pub logoff_time: i64,
    pub kick_off_time: i64,
    pub password_last_set: i64,
    pub password_can_change: i64,
    pub password_must_change: i64,
    pub effective_name: Option<String>,
    pub full_name: Option<String>,
    pub logon_script: Option<String>,
    pub profile_path: Option<String>,
    pub home_directory: Option<String>,
    pub home_directory_drive: Option<String>,
    pub logon_count: u16,
    pub bad_password_count: u16,
    pub user_id: u32,
    pub primary_group_id: u32,
    pub group_ids: Vec<GroupMembership>,
    pub user_flags: u32,
    pub user_session_key: Vec<u8>,
    pub logon_server: Option<String>,
    pub logon_domain_name: Option<String>,
    pub logon_domain_id: Option<Sid>,
    pub user_account_control: u32,
    pub extra_sids: Vec<SidAndAttributes>,
    pub resource_group_domain_sid: Option<Sid>,
    pub resource_group_ids: Vec<GroupMembership>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupMembership {
    pub relative_id: u32,
    pub attributes: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SidAndAttributes {
    pub sid: Sid,
    pub attributes: u32,
}

impl LogonInfo {
    pub fn parse(data: &[u8]) -> Result<LogonInfo, String> {
        let mut reader = NdrReader::new(data);
        reader.skip_type_headers()?;

        let referent = reader.read_pointer()?;
        if referent == 0 {
            return Err("null logon info pointer".into());
        }

        // flat part of the structure, pointed data comes deferred
        let logon_time = reader.read_filetime()?;
        let logoff_time = reader.read_filetime()?;
        let kick_off_time = reader.read_filetime()?;
        let password_last_set = reader.read_filetime()?;
        let password_can_change = reader.read_filetime()?;
        let password_must_change = reader.read_filetime()?;

        let effective_name_header = reader.read_string_header()?;
        let full_name_header = reader.read_string_header()?;
        let logon_script_header = reader.read_string_header()?;
        let profile_path_header = reader.read_string_header()?;
        let home_directory_header = reader.read_string_header()?;
        let home_directory_drive_header = reader.read_string_header()?;

        let logon_count = reader.read_u16()?;
        let bad_password_count = reader.read_u16()?;
        let user_id = reader.read_u32()?;
        let primary_group_id = reader.read_u32()?;
        let group_count = reader.read_u32()?;
        let group_ids_referent = reader.read_pointer()?;
        let user_flags = reader.read_u32()?;
        let user_session_key = reader.read_raw(16)?;
        let logon_server_header = reader.read_string_header()?;
        let logon_domain_name_header = reader.read_string_header()?;
        let logon_domain_id_referent = reader.read_pointer()?;
        reader.skip(8)?; // Reserved1
        let user_account_control = reader.read_u32()?;
        reader.skip(4)?; // SubAuthStatus
        reader.skip(16)?; // LastSuccessfulILogon, LastFailedILogon
        reader.skip(4)?; // FailedILogonCount
        reader.skip(4)?; // Reserved3
        let sid_count = reader.read_u32()?;
        let extra_sids_referent = reader.read_pointer()?;
        let resource_group_domain_sid_referent = reader.read_pointer()?;
        let resource_group_count = reader.read_u32()?;
        let resource_group_ids_referent = reader.read_pointer()?;

        let effective_name =
            reader.read_deferred_string(&effective_name_header)?;
        let full_name = reader.read_deferred_string(&full_name_header)?;
        let logon_script =
            reader.read_deferred_string(&logon_script_header)?;
        let profile_path =
            reader.read_deferred_string(&profile_path_header)?;
        let home_directory =
            reader.read_deferred_string(&home_directory_header)?;
        let home_directory_drive =
            reader.read_deferred_string(&home_directory_drive_header)?;

        let group_ids =
            read_group_array(&mut reader, group_ids_referent, group_count)?;

        let logon_server =
            reader.read_deferred_string(&logon_server_header)?;
        let logon_domain_name =
            reader.read_deferred_string(&logon_domain_name_header)?;

        let logon_domain_id =
            read_optional_sid(&mut reader, logon_domain_id_referent)?;

        let extra_sids =
            read_extra_sids(&mut reader, extra_sids_referent, sid_count)?;

        let resource_group_domain_sid = read_optional_sid(
            &mut reader,
            resource_group_domain_sid_referent,
        )?;

        let resource_group_ids = read_group_array(
            &mut reader,
            resource_group_ids_referent,
            resource_group_count,
        )?;

        return Ok(LogonInfo {
            logon_time,
            logoff_time,
            kick_off_time,
            password_last_set,
            password_can_change,
            password_must_change,
            effective_name,
            full_name,
            logon_script,
            profile_path,
            home_directory,
            home_directory_drive,
            logon_count,
            bad_password_count,
            user_id,
            primary_group_id,
            group_ids,
            user_flags,
            user_session_key,
            logon_server,
            logon_domain_name,
            logon_domain_id,
            user_account_control,
            extra_sids,
            resource_group_domain_sid,
            resource_group_ids,
        });
    }
}

fn read_group_array(
    reader: &mut NdrReader,
    referent: u32,
    count: u32,
) -> NdrResult<Vec<GroupMembership>> {
    if referent == 0 {
        return Ok(Vec::new());
    }

    reader.align(4)?;
    let _maximum_count = reader.read_u32()?;

    if count as usize * 8 > reader.remaining() {
        return Err("group array out of bounds".into());
    }

    let mut groups = Vec::with_capacity(count as usize);
    for _ in 0..count {
        groups.push(GroupMembership {
            relative_id: reader.read_u32()?,
            attributes: reader.read_u32()?,
        });
    }

    return Ok(groups);
}

fn read_optional_sid(
    reader: &mut NdrReader,
    referent: u32,
) -> NdrResult<Option<Sid>> {
    if referent == 0 {
        return Ok(None);
    }

    return Ok(Some(Sid::read_ndr(reader)?));
}

fn read_extra_sids(
    reader: &mut NdrReader,
    referent: u32,
    count: u32,
) -> NdrResult<Vec<SidAndAttributes>> {
    if referent == 0 {
        return Ok(Vec::new());
    }

    reader.align(4)?;
    let _maximum_count = reader.read_u32()?;

    if count as usize * 8 > reader.remaining() {
        return Err("extra sids array out of bounds".into());
    }

    let mut headers = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let sid_referent = reader.read_pointer()?;
        let attributes = reader.read_u32()?;
        headers.push((sid_referent, attributes));
    }

    let mut extra_sids = Vec::with_capacity(headers.len());
    for (sid_referent, attributes) in headers {
        if sid_referent == 0 {
            continue;
        }
        extra_sids.push(SidAndAttributes {
            sid: Sid::read_ndr(reader)?,
            attributes,
        });
    }

    return Ok(extra_sids);
}
