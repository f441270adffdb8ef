use crate::core::KrbUser;
use crate::error::Error;
use crate::Result;
use kerberos_asn1::{Asn1Object, EncTicketPart, EncryptedData};
use kerberos_crypto::{new_kerberos_cipher, Key};

/// Decrypt the enc-part of a ticket and decode the EncTicketPart
/// inside. The key usage is taken as a parameter since the right
/// number depends on how the ticket was obtained (2 for tickets
/// issued in an AS/TGS reply).
pub fn decrypt_enc_ticket_part(
    enc_part: &EncryptedData,
    user_key: &Key,
    salt_user: Option<&KrbUser>,
    key_usage: i32,
) -> Result<EncTicketPart> {
    let cipher = new_kerberos_cipher(enc_part.etype)
        .map_err(|_| Error::UnsupportedEncryptionType(enc_part.etype))?;

    if !user_key.etypes().contains(&enc_part.etype) {
        return Err(Error::DecryptionFailed(format!(
            "the given key cannot decrypt etype {}",
            enc_part.etype
        )));
    }

    let key = match user_key {
        Key::Secret(secret) => {
            let user = salt_user.ok_or(
                "A user <domain>/<username> is required to derive \
                 the key from a password",
            )?;
            let salt = cipher.generate_salt(&user.realm, &user.name);
            cipher.generate_key_from_string(&secret, &salt)
        }
        _ => (&user_key.as_bytes()).to_vec(),
    };

    let plaintext = cipher
        .decrypt(&key, key_usage, &enc_part.cipher)
        .map_err(|error| Error::DecryptionFailed(format!("{}", error)))?;

    let (_, enc_ticket_part) = EncTicketPart::parse(&plaintext)
        .map_err(|_| Error::MalformedTicketBody)?;

    return Ok(enc_ticket_part);
}
