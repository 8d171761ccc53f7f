//! Transport protocols a component can be bound to.
//!
//! # Examples
//!
//! ```rust
//! use rustp2p_ice::transport::Transport;
//!
//! let transport: Transport = "udp".parse().unwrap();
//! assert!(transport.is_udp());
//! assert_eq!(transport.to_string(), "udp");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Transport kind of a component.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub enum Transport {
    #[default]
    Udp,
    Tcp,
    Tls,
    Dtls,
    Sctp,
}
impl Transport {
    /// Returns true if this is UDP.
    #[inline]
    pub fn is_udp(&self) -> bool {
        self == &Transport::Udp
    }

    /// Returns true if this is TCP.
    #[inline]
    pub fn is_tcp(&self) -> bool {
        self == &Transport::Tcp
    }

    /// Returns true for transports that run on top of a TCP connection.
    pub fn is_stream_oriented(&self) -> bool {
        matches!(self, Transport::Tcp | Transport::Tls)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Transport::Udp => "udp",
            Transport::Tcp => "tcp",
            Transport::Tls => "tls",
            Transport::Dtls => "dtls",
            Transport::Sctp => "sctp",
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Transport {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "udp" => Ok(Transport::Udp),
            "tcp" => Ok(Transport::Tcp),
            "tls" => Ok(Transport::Tls),
            "dtls" => Ok(Transport::Dtls),
            "sctp" => Ok(Transport::Sctp),
            _ => Err(Error::InvalidTransport(s.to_string())),
        }
    }
}
