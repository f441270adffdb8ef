use crate::core::{CredFormat, TicketCreds};
use crate::error::Error;
use crate::Result;
use kerberos_asn1::{Asn1Object, KrbCred};
use kerberos_ccache::CCache;
use std::convert::{TryFrom, TryInto};
use std::fs;

/// Load the ticket credentials from a file
pub fn load_file_ticket_creds(
    creds_file: &str,
) -> Result<(TicketCreds, CredFormat)> {
    let (krb_cred, format) = load_file_krb_cred(creds_file)?;

    // Kerberos credentials are usually stored in plain text so this
    // should work.
    let ticket_creds = TicketCreds::try_from(krb_cred)?;
    return Ok((ticket_creds, format));
}

/// Load the Kerberos credentials from a file.
pub fn load_file_krb_cred(creds_file: &str) -> Result<(KrbCred, CredFormat)> {
    let data = fs::read(creds_file).map_err(|err| {
        let message = format!("Unable to read the file '{}'", creds_file);
        (message, err)
    })?;

    match CCache::parse(&data) {
        Ok((_, ccache)) => {
            let krb_cred = ccache.try_into().map_err(|_| {
                Error::DataError(format!(
                    "Error parsing ccache data content of file '{}'",
                    creds_file
                ))
            })?;

            return Ok((krb_cred, CredFormat::Ccache));
        }
        Err(_) => {
            let (_, krb_cred) = KrbCred::parse(&data).map_err(|_| {
                Error::DataError(format!(
                    "Error parsing content of ccache/krb file '{}'",
                    creds_file
                ))
            })?;
            return Ok((krb_cred, CredFormat::Krb));
        }
    }
}
