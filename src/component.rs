use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::candidate::LocalCandidate;
use crate::error::{Error, Result};
use crate::stream::IceMediaStream;
use crate::transport::Transport;

/// A piece of a media stream requiring a single transport address.
///
/// Components are only created through
/// [`Agent::create_component`](crate::agent::Agent::create_component) and are
/// released by the stream that owns them, either in
/// [`IceMediaStream::remove_component`] or when the stream is torn down.
#[derive(Debug)]
pub struct Component {
    id: u32,
    transport: Transport,
    stream: Weak<IceMediaStream>,
    stream_name: String,
    local_candidates: Mutex<Vec<LocalCandidate>>,
    released: AtomicBool,
}

impl Component {
    pub(crate) fn new(
        id: u32,
        transport: Transport,
        stream: Weak<IceMediaStream>,
        stream_name: String,
    ) -> Self {
        Self {
            id,
            transport,
            stream,
            stream_name,
            local_candidates: Mutex::new(Vec::new()),
            released: AtomicBool::new(false),
        }
    }
    /// Id of this component, unique within its stream.
    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }
    #[inline]
    pub fn transport(&self) -> Transport {
        self.transport
    }
    pub fn stream_name(&self) -> &str {
        &self.stream_name
    }
    /// The stream this component was created by, if it is still alive.
    pub fn parent_stream(&self) -> Option<Arc<IceMediaStream>> {
        self.stream.upgrade()
    }
    pub fn is_released(&self) -> bool {
        self.released.load(Ordering::Acquire)
    }
    /// Registers a local candidate.
    /// Returns `Ok(false)` if a candidate with the same address is already known.
    pub fn add_local_candidate(&self, candidate: LocalCandidate) -> Result<bool> {
        let mut guard = self.local_candidates.lock();
        // checked under the candidate lock so it cannot race with free
        if self.is_released() {
            return Err(self.released_error());
        }
        if guard.iter().any(|c| c.address() == candidate.address()) {
            return Ok(false);
        }
        guard.push(candidate);
        Ok(true)
    }
    pub fn local_candidates(&self) -> Vec<LocalCandidate> {
        self.local_candidates.lock().clone()
    }
    pub fn local_candidate_count(&self) -> usize {
        self.local_candidates.lock().len()
    }
    /// Drops every candidate of this component. Only the first call succeeds,
    /// returning the number of candidates that were dropped.
    pub(crate) fn free(&self) -> Result<usize> {
        let mut guard = self.local_candidates.lock();
        if self.released.swap(true, Ordering::AcqRel) {
            return Err(self.released_error());
        }
        let candidates = std::mem::take(&mut *guard);
        log::debug!(
            "free component id={},stream={},candidates={}",
            self.id,
            self.stream_name,
            candidates.len()
        );
        Ok(candidates.len())
    }
    fn released_error(&self) -> Error {
        Error::ComponentReleased {
            stream: self.stream_name.clone(),
            id: self.id,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let candidates = self.local_candidates();
        write!(
            f,
            "Component id={} parent stream={} transport={}",
            self.id, self.stream_name, self.transport
        )?;
        write!(f, "\n{} local candidates:", candidates.len())?;
        for candidate in candidates {
            write!(f, "\n{candidate}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::sync::Weak;

    use super::Component;
    use crate::candidate::LocalCandidate;
    use crate::error::Error;
    use crate::transport::Transport;

    fn component() -> Component {
        Component::new(1, Transport::Udp, Weak::new(), "audio".to_string())
    }

    #[test]
    fn test_add_local_candidate() {
        let component = component();
        let addr = "10.0.0.1:4000".parse().unwrap();
        assert!(component
            .add_local_candidate(LocalCandidate::host(addr, Transport::Udp))
            .unwrap());
        assert!(!component
            .add_local_candidate(LocalCandidate::host(addr, Transport::Udp))
            .unwrap());
        assert_eq!(component.local_candidate_count(), 1);
        assert!(component.parent_stream().is_none());
    }

    #[test]
    fn test_free_once() {
        let component = component();
        let addr = "10.0.0.1:4000".parse().unwrap();
        component
            .add_local_candidate(LocalCandidate::host(addr, Transport::Udp))
            .unwrap();
        assert_eq!(component.free().unwrap(), 1);
        assert!(component.is_released());
        assert_eq!(component.local_candidate_count(), 0);
        assert!(matches!(
            component.free(),
            Err(Error::ComponentReleased { id: 1, .. })
        ));
        assert!(component
            .add_local_candidate(LocalCandidate::host(addr, Transport::Udp))
            .is_err());
    }

    #[test]
    fn test_display() {
        let component = component();
        component
            .add_local_candidate(LocalCandidate::host(
                "10.0.0.1:4000".parse().unwrap(),
                Transport::Udp,
            ))
            .unwrap();
        assert_eq!(
            component.to_string(),
            "Component id=1 parent stream=audio transport=udp\n1 local candidates:\n10.0.0.1:4000/udp (host)"
        );
    }
}
