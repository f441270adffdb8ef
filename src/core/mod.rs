mod authdata;
pub use authdata::extract_pac_blob;

mod cred_format;
pub use cred_format::CredFormat;

mod decrypt;
pub use decrypt::decrypt_enc_ticket_part;

mod file;
pub use file::{load_file_krb_cred, load_file_ticket_creds};

mod keytab;
pub use keytab::load_file_keytab;

mod krb_user;
pub use krb_user::KrbUser;

pub mod pac;

pub mod stringifier;

mod ticket_cred;
pub use ticket_cred::{TicketCred, TicketCreds};
