use std::fmt;
use std::net::SocketAddr;

use crate::transport::Transport;

/// Origin of a local candidate address.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum CandidateType {
    /// Address bound on a local interface.
    #[default]
    Host,
    /// Public mapping learned from a STUN server.
    ServerReflexive,
    /// Mapping learned from a connectivity check.
    PeerReflexive,
    /// Address allocated on a relay.
    Relayed,
}
impl CandidateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateType::Host => "host",
            CandidateType::ServerReflexive => "srflx",
            CandidateType::PeerReflexive => "prflx",
            CandidateType::Relayed => "relay",
        }
    }
}

impl fmt::Display for CandidateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transport address registered on a component by the gathering machinery.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LocalCandidate {
    address: SocketAddr,
    transport: Transport,
    candidate_type: CandidateType,
}
impl LocalCandidate {
    pub fn new(address: SocketAddr, transport: Transport, candidate_type: CandidateType) -> Self {
        Self {
            address,
            transport,
            candidate_type,
        }
    }
    pub fn host(address: SocketAddr, transport: Transport) -> Self {
        Self::new(address, transport, CandidateType::Host)
    }
    #[inline]
    pub fn address(&self) -> SocketAddr {
        self.address
    }
    #[inline]
    pub fn transport(&self) -> Transport {
        self.transport
    }
    #[inline]
    pub fn candidate_type(&self) -> CandidateType {
        self.candidate_type
    }
}

impl fmt::Display for LocalCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} ({})",
            self.address, self.transport, self.candidate_type
        )
    }
}

#[cfg(test)]
mod test {
    use super::{CandidateType, LocalCandidate};
    use crate::transport::Transport;

    #[test]
    fn test_display() {
        let candidate = LocalCandidate::new(
            "192.168.1.2:5000".parse().unwrap(),
            Transport::Udp,
            CandidateType::ServerReflexive,
        );
        assert_eq!(candidate.to_string(), "192.168.1.2:5000/udp (srflx)");
        let host = LocalCandidate::host("[::1]:9".parse().unwrap(), Transport::Tcp);
        assert_eq!(host.to_string(), "[::1]:9/tcp (host)");
    }
}
