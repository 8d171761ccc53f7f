//! Media streams from the ICE perspective, i.e. registries of components.
//!
//! A component is a piece of a media stream requiring a single transport
//! address; a media stream may require multiple components, each of which has
//! to work for the media stream as a whole to work.
//!
//! All state of a stream sits behind a single lock, so every operation below
//! observes either all or none of a concurrent mutation. Listings are copies
//! and stay valid while the stream keeps changing.
//!
//! # Examples
//!
//! ```rust
//! use rustp2p_ice::agent::Agent;
//! use rustp2p_ice::config::AgentConfig;
//! use rustp2p_ice::transport::Transport;
//!
//! # fn main() -> rustp2p_ice::error::Result<()> {
//! let agent = Agent::new(AgentConfig::default());
//! let stream = agent.create_media_stream("audio")?;
//! let rtp = agent.create_component(&stream, Transport::Udp)?;
//! let rtcp = agent.create_component(&stream, Transport::Udp)?;
//! assert_eq!((rtp.id(), rtcp.id()), (1, 2));
//!
//! stream.remove_component(&rtp)?;
//! assert_eq!(stream.component_ids(), vec![2]);
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::agent::{Agent, AgentInner};
use crate::component::Component;
use crate::error::{Error, Result};
use crate::transport::Transport;

#[derive(Debug)]
pub struct IceMediaStream {
    name: String,
    parent: Weak<AgentInner>,
    this: Weak<IceMediaStream>,
    max_components: Option<usize>,
    inner: Mutex<StreamInner>,
}

#[derive(Debug, Default)]
struct StreamInner {
    /// The next id handed out is `last_component_id + 1`.
    last_component_id: u32,
    /// Ids only grow, so key order is creation order.
    components: BTreeMap<u32, Arc<Component>>,
    freed: bool,
}

impl IceMediaStream {
    pub(crate) fn new(
        parent: Weak<AgentInner>,
        name: String,
        max_components: Option<usize>,
    ) -> Arc<IceMediaStream> {
        Arc::new_cyclic(|this| IceMediaStream {
            name,
            parent,
            this: this.clone(),
            max_components,
            inner: Mutex::new(StreamInner::default()),
        })
    }
    /// The name of this stream, equal to the media name used in the SDP description.
    pub fn name(&self) -> &str {
        &self.name
    }
    /// The agent handling the session this stream is part of, if it is still alive.
    pub fn parent_agent(&self) -> Option<Agent> {
        self.parent.upgrade().map(Agent::from_inner)
    }
    pub(crate) fn is_owned_by(&self, agent: &Arc<AgentInner>) -> bool {
        std::ptr::eq(self.parent.as_ptr(), Arc::as_ptr(agent))
    }
    /// Creates a component with the next id and registers it.
    ///
    /// Ids start at 1 and are never reused: an id allocated for a component that
    /// then fails to be constructed is skipped.
    pub(crate) fn create_component(&self, transport: Transport) -> Result<Arc<Component>> {
        let mut guard = self.inner.lock();
        if guard.freed {
            return Err(Error::StreamFreed(self.name.clone()));
        }
        guard.last_component_id = guard
            .last_component_id
            .checked_add(1)
            .ok_or_else(|| Error::ComponentIdExhausted(self.name.clone()))?;
        let id = guard.last_component_id;
        if let Some(limit) = self.max_components {
            if guard.components.len() >= limit {
                return Err(Error::ComponentLimit {
                    stream: self.name.clone(),
                    limit,
                });
            }
        }
        let component = Arc::new(Component::new(
            id,
            transport,
            self.this.clone(),
            self.name.clone(),
        ));
        guard.components.insert(id, component.clone());
        log::debug!("create component id={id},stream={},transport={transport}", self.name);
        Ok(component)
    }
    /// Returns the component with the specified id, `None` if there is no
    /// such component in this stream.
    pub fn component(&self, id: u32) -> Option<Arc<Component>> {
        self.inner.lock().components.get(&id).cloned()
    }
    /// Snapshot of the components currently registered, in creation order.
    pub fn components(&self) -> Vec<Arc<Component>> {
        self.inner.lock().components.values().cloned().collect()
    }
    /// Snapshot of the ids of the components currently registered, in creation order.
    pub fn component_ids(&self) -> Vec<u32> {
        self.inner.lock().components.keys().copied().collect()
    }
    pub fn component_count(&self) -> usize {
        self.inner.lock().components.len()
    }
    /// Removes `component` from this stream and releases it.
    ///
    /// Only the handle registered under the component's id is released. A handle
    /// that was already removed, or belongs to another stream, is left untouched
    /// and [`Error::ComponentNotFound`] is returned. If releasing fails the error
    /// is returned, but the component is already gone from the stream.
    pub fn remove_component(&self, component: &Component) -> Result<()> {
        let id = component.id();
        let mut guard = self.inner.lock();
        let registered = guard
            .components
            .get(&id)
            .is_some_and(|c| std::ptr::eq(Arc::as_ptr(c), component));
        if !registered {
            return Err(Error::ComponentNotFound {
                stream: self.name.clone(),
                id,
            });
        }
        if let Some(removed) = guard.components.remove(&id) {
            // released before unlocking so readers never see a registered but freed handle
            removed.free()?;
        }
        log::debug!("remove component id={id},stream={}", self.name);
        Ok(())
    }
    /// Releases every remaining component and empties the stream.
    /// Returns how many components were released, calling it again is a no-op.
    pub(crate) fn free_all(&self) -> usize {
        let mut guard = self.inner.lock();
        guard.freed = true;
        let components = std::mem::take(&mut guard.components);
        let mut released = 0;
        for (id, component) in components {
            match component.free() {
                Ok(_) => released += 1,
                // only reachable if the handle was released without going through this stream
                Err(e) => log::warn!("free_all stream={},id={id},e={e:?}", self.name),
            }
        }
        if released > 0 {
            log::info!("free media stream {},released={released}", self.name);
        }
        released
    }
}

impl fmt::Display for IceMediaStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let components = self.components();
        write!(
            f,
            "media stream:{} (component count={})",
            self.name,
            components.len()
        )?;
        for component in components {
            write!(f, "\n{component}")?;
        }
        Ok(())
    }
}
