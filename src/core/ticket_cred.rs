//! Structs to handle tickets and their associated KrbCredInfo

use crate::error::Error;
use kerberos_asn1::{
    Asn1Object, EncKrbCredPart, KrbCred, KrbCredInfo, Ticket,
};
use kerberos_constants::etypes::NO_ENCRYPTION;
use std::convert::TryFrom;
use std::slice::Iter;

#[derive(Debug, Clone)]
pub struct TicketCreds {
    pub ticket_creds: Vec<TicketCred>,
}

impl TicketCreds {
    pub fn new(ticket_creds: Vec<TicketCred>) -> Self {
        return Self { ticket_creds };
    }

    pub fn iter(&self) -> Iter<TicketCred> {
        return self.ticket_creds.iter();
    }

    pub fn len(&self) -> usize {
        return self.ticket_creds.len();
    }

    pub fn get(&self, index: usize) -> Option<&TicketCred> {
        return self.ticket_creds.get(index);
    }
}

/// Convert from Kerberos credentials in plain text, the usual way of
/// storing them in machines. In case the credentials are encrypted
/// this will fail.
impl TryFrom<KrbCred> for TicketCreds {
    type Error = Error;

    fn try_from(krb_cred: KrbCred) -> Result<Self, Error> {
        if krb_cred.enc_part.etype != NO_ENCRYPTION {
            return Err(Error::DataError(format!(
                "Unable to decrypt the credentials"
            )));
        }

        let (_, cred_part) = EncKrbCredPart::parse(&krb_cred.enc_part.cipher)
            .map_err(|_| {
            Error::DataError(format!(
                "Error parsing credentials: EncKrbCredPart"
            ))
        })?;

        let tickets = krb_cred.tickets;
        let cred_infos = cred_part.ticket_info;

        return Ok((tickets, cred_infos).into());
    }
}

impl From<(Vec<Ticket>, Vec<KrbCredInfo>)> for TicketCreds {
    fn from((tickets, cred_infos): (Vec<Ticket>, Vec<KrbCredInfo>)) -> Self {
        let mut ticket_cred_infos = Vec::with_capacity(tickets.len());

        for (ticket, cred_info) in
            tickets.into_iter().zip(cred_infos.into_iter())
        {
            ticket_cred_infos.push(TicketCred::new(ticket, cred_info));
        }

        return Self::new(ticket_cred_infos);
    }
}

/// Ticket with its associated credential info, the unit described by
/// the report.
#[derive(Debug, Clone)]
pub struct TicketCred {
    pub ticket: Ticket,
    pub cred_info: KrbCredInfo,
}

impl TicketCred {
    pub fn new(ticket: Ticket, cred_info: KrbCredInfo) -> Self {
        return Self { ticket, cred_info };
    }
}
