mod validators;

use crate::core::KrbUser;
use clap::{App, Arg, ArgGroup, ArgMatches};
use kerberos_constants::key_usages::KEY_USAGE_AS_REP_TICKET;
use kerberos_crypto::Key;
use std::convert::TryFrom;

pub fn args() -> App<'static, 'static> {
    App::new(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::with_name("in-file")
                .takes_value(true)
                .value_name("file")
                .help("File with the credentials to describe"),
        )
        .arg(
            Arg::with_name("password")
                .long("password")
                .short("p")
                .takes_value(true)
                .requires("user")
                .help("Password of the service account, to derive its key"),
        )
        .arg(
            Arg::with_name("rc4")
                .long("rc4")
                .visible_alias("ntlm")
                .takes_value(true)
                .help("RC4 Kerberos key (NT hash) to decrypt the tickets")
                .validator(validators::is_rc4_key),
        )
        .arg(
            Arg::with_name("aes")
                .long("aes")
                .takes_value(true)
                .help("AES Kerberos key to decrypt the tickets")
                .validator(validators::is_aes_key),
        )
        .group(
            ArgGroup::with_name("decrypt_key")
                .args(&["password", "rc4", "aes"])
                .multiple(false),
        )
        .arg(
            Arg::with_name("user")
                .long("user")
                .short("u")
                .takes_value(true)
                .help(
                    "Service account in format <domain>/<username>, \
                     used to derive the key from the password",
                )
                .validator(validators::is_krb_user),
        )
        .arg(
            Arg::with_name("key-usage")
                .long("key-usage")
                .takes_value(true)
                .value_name("number")
                .help("Key usage number to decrypt the ticket enc-part (default: 2)")
                .validator(validators::is_i32),
        )
        .arg(
            Arg::with_name("verbosity")
                .short("v")
                .multiple(true)
                .help("Increase message verbosity"),
        )
}

pub struct Arguments {
    pub in_file: Option<String>,
    pub user_key: Option<Key>,
    pub user: Option<KrbUser>,
    pub key_usage: i32,
    pub verbosity: usize,
}

pub struct ArgumentsParser<'a> {
    matches: &'a ArgMatches<'a>,
}

impl<'a> ArgumentsParser<'a> {
    pub fn parse(matches: &'a ArgMatches) -> Arguments {
        let parser = Self { matches: matches };
        return parser._parse();
    }

    fn _parse(&self) -> Arguments {
        return Arguments {
            in_file: self.matches.value_of("in-file").map(|s| s.into()),
            user_key: self.parse_user_key(),
            user: self.parse_user(),
            key_usage: self.parse_key_usage(),
            verbosity: self.matches.occurrences_of("verbosity") as usize,
        };
    }

    fn parse_user_key(&self) -> Option<Key> {
        if let Some(password) = self.matches.value_of("password") {
            return Some(Key::Secret(password.to_string()));
        } else if let Some(ntlm) = self.matches.value_of("rc4") {
            return Some(Key::from_rc4_key_string(ntlm).unwrap());
        } else if let Some(aes_key) = self.matches.value_of("aes") {
            if let Ok(key) = Key::from_aes_128_key_string(aes_key) {
                return Some(key);
            }
            return Some(Key::from_aes_256_key_string(aes_key).unwrap());
        }

        return None;
    }

    fn parse_user(&self) -> Option<KrbUser> {
        let user = self.matches.value_of("user")?;
        return Some(KrbUser::try_from(user).unwrap());
    }

    fn parse_key_usage(&self) -> i32 {
        return self
            .matches
            .value_of("key-usage")
            .map(|v| v.parse().unwrap())
            .unwrap_or(KEY_USAGE_AS_REP_TICKET);
    }
}
