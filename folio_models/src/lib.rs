use std::{fmt, net::IpAddr, ops::Deref};

use serde::{Deserialize, Serialize};

pub mod contact;

/// The network identity of the client a request originated from.
///
/// Clients whose address cannot be determined all share the `unknown`
/// identity, which also pools them into a single rate limit bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ClientIp(pub Option<IpAddr>);

impl fmt::Display for ClientIp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(ip) => ip.fmt(f),
            None => f.write_str("unknown"),
        }
    }
}

impl From<IpAddr> for ClientIp {
    fn from(ip: IpAddr) -> Self {
        Self(Some(ip))
    }
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Sensitive<T>(pub T);

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[redacted]")
    }
}

impl<T> From<T> for Sensitive<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> Deref for Sensitive<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn client_ip_display() {
        assert_eq!(
            ClientIp(Some(IpAddr::V4(Ipv4Addr::new(10, 13, 37, 7)))).to_string(),
            "10.13.37.7"
        );
        assert_eq!(ClientIp(None).to_string(), "unknown");
    }

    #[test]
    fn sensitive_debug_is_redacted() {
        let secret = Sensitive("re_hunter2".to_owned());
        assert_eq!(format!("{secret:?}"), "[redacted]");
    }
}
