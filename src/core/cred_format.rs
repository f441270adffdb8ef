use std::fmt;

/// Formats used to store Kerberos credentials in files.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum CredFormat {
    Krb,
    Ccache,
}

impl fmt::Display for CredFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ccache => write!(f, "ccache"),
            Self::Krb => write!(f, "krb"),
        }
    }
}
