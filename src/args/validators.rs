use crate::core::KrbUser;
use kerberos_crypto::Key;
use std::convert::TryFrom;

pub fn is_krb_user(v: String) -> Result<(), String> {
    KrbUser::try_from(v)?;
    return Ok(());
}

pub fn is_rc4_key(v: String) -> Result<(), String> {
    Key::from_rc4_key_string(&v).map_err(|_| {
        format!(
            "Invalid RC4 key '{}', must be a string of 32 hexadecimals",
            v
        )
    })?;

    return Ok(());
}

pub fn is_aes_key(v: String) -> Result<(), String> {
    if let Ok(_) = Key::from_aes_128_key_string(&v) {
        return Ok(());
    }

    Key::from_aes_256_key_string(&v).map_err(|_| {
        format!(
            "Invalid AES key '{}', must be a string of 64 or 32 hexadecimals",
            v
        )
    })?;

    return Ok(());
}

pub fn is_i32(v: String) -> Result<(), String> {
    v.parse::<i32>().map_err(|_| {
        format!(
            "Incorrect value '{}' must be a signed integer of 32 bits (i32)",
            v
        )
    })?;

    return Ok(());
}
