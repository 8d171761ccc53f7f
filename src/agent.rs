use std::sync::Arc;

use parking_lot::Mutex;

use crate::component::Component;
use crate::config::AgentConfig;
use crate::error::{Error, Result};
use crate::stream::IceMediaStream;
use crate::transport::Transport;

/// Owner of the media streams of one session.
///
/// Streams and components can only be constructed through an `Agent`.
/// Cloning is cheap and every clone refers to the same set of streams.
#[derive(Clone, Debug)]
pub struct Agent {
    inner: Arc<AgentInner>,
}

#[derive(Debug)]
pub(crate) struct AgentInner {
    config: AgentConfig,
    streams: Mutex<Vec<Arc<IceMediaStream>>>,
}

impl Agent {
    pub fn new(config: AgentConfig) -> Agent {
        Self {
            inner: Arc::new(AgentInner {
                config,
                streams: Mutex::new(Vec::new()),
            }),
        }
    }
    pub(crate) fn from_inner(inner: Arc<AgentInner>) -> Agent {
        Self { inner }
    }
    pub fn config(&self) -> &AgentConfig {
        &self.inner.config
    }
    /// Creates a media stream named after its SDP media description.
    pub fn create_media_stream(&self, name: &str) -> Result<Arc<IceMediaStream>> {
        let mut streams = self.inner.streams.lock();
        if streams.iter().any(|s| s.name() == name) {
            return Err(Error::DuplicateStream(name.to_string()));
        }
        let stream = IceMediaStream::new(
            Arc::downgrade(&self.inner),
            name.to_string(),
            self.inner.config.max_components_per_stream,
        );
        streams.push(stream.clone());
        log::info!("create media stream {name}");
        Ok(stream)
    }
    /// Creates the next component of `stream`.
    pub fn create_component(
        &self,
        stream: &IceMediaStream,
        transport: Transport,
    ) -> Result<Arc<Component>> {
        if !stream.is_owned_by(&self.inner) {
            return Err(Error::ForeignStream(stream.name().to_string()));
        }
        stream.create_component(transport)
    }
    pub fn create_default_component(&self, stream: &IceMediaStream) -> Result<Arc<Component>> {
        self.create_component(stream, self.inner.config.default_transport)
    }
    pub fn stream(&self, name: &str) -> Option<Arc<IceMediaStream>> {
        self.inner
            .streams
            .lock()
            .iter()
            .find(|s| s.name() == name)
            .cloned()
    }
    /// Snapshot of all streams in creation order.
    pub fn streams(&self) -> Vec<Arc<IceMediaStream>> {
        self.inner.streams.lock().clone()
    }
    pub fn stream_names(&self) -> Vec<String> {
        self.inner
            .streams
            .lock()
            .iter()
            .map(|s| s.name().to_string())
            .collect()
    }
    pub fn stream_count(&self) -> usize {
        self.inner.streams.lock().len()
    }
    /// Detaches the stream from this agent and releases all of its components.
    pub fn remove_stream(&self, name: &str) -> Result<()> {
        let stream = {
            let mut streams = self.inner.streams.lock();
            let index = streams
                .iter()
                .position(|s| s.name() == name)
                .ok_or_else(|| Error::StreamNotFound(name.to_string()))?;
            streams.remove(index)
        };
        let released = stream.free_all();
        log::info!("remove media stream {name},released={released}");
        Ok(())
    }
    /// Releases every stream of this agent.
    pub fn free(&self) {
        let streams = std::mem::take(&mut *self.inner.streams.lock());
        for stream in streams {
            stream.free_all();
        }
    }
}

#[cfg(test)]
mod test {
    use super::Agent;
    use crate::config::AgentConfig;
    use crate::error::Error;
    use crate::transport::Transport;

    #[test]
    fn test_create_media_stream() {
        let agent = Agent::new(AgentConfig::default());
        let audio = agent.create_media_stream("audio").unwrap();
        agent.create_media_stream("video").unwrap();
        assert!(matches!(
            agent.create_media_stream("audio"),
            Err(Error::DuplicateStream(_))
        ));
        assert_eq!(agent.stream_names(), vec!["audio", "video"]);
        assert_eq!(agent.stream_count(), 2);
        assert_eq!(agent.stream("audio").unwrap().name(), audio.name());
        assert!(agent.stream("data").is_none());

        let parent = audio.parent_agent().unwrap();
        assert_eq!(parent.stream_count(), 2);
    }

    #[test]
    fn test_create_component() {
        let agent = Agent::new(AgentConfig::empty().set_default_transport(Transport::Tcp));
        let stream = agent.create_media_stream("audio").unwrap();
        let rtp = agent.create_component(&stream, Transport::Udp).unwrap();
        let rtcp = agent.create_default_component(&stream).unwrap();
        assert_eq!((rtp.id(), rtp.transport()), (1, Transport::Udp));
        assert_eq!((rtcp.id(), rtcp.transport()), (2, Transport::Tcp));
        assert_eq!(stream.component_count(), 2);
    }

    #[test]
    fn test_foreign_stream() {
        let agent = Agent::new(AgentConfig::default());
        let other = Agent::new(AgentConfig::default());
        let stream = other.create_media_stream("audio").unwrap();
        assert!(matches!(
            agent.create_component(&stream, Transport::Udp),
            Err(Error::ForeignStream(_))
        ));
        assert_eq!(stream.component_count(), 0);
    }

    #[test]
    fn test_component_limit() {
        let agent = Agent::new(AgentConfig::empty().set_max_components_per_stream(2));
        let stream = agent.create_media_stream("audio").unwrap();
        agent.create_default_component(&stream).unwrap();
        agent.create_default_component(&stream).unwrap();
        assert!(matches!(
            agent.create_default_component(&stream),
            Err(Error::ComponentLimit { limit: 2, .. })
        ));
    }

    #[test]
    fn test_remove_stream() {
        let agent = Agent::new(AgentConfig::default());
        let stream = agent.create_media_stream("audio").unwrap();
        let components: Vec<_> = (0..3)
            .map(|_| agent.create_default_component(&stream).unwrap())
            .collect();
        agent.remove_stream("audio").unwrap();
        assert!(components.iter().all(|c| c.is_released()));
        assert_eq!(stream.component_count(), 0);
        assert_eq!(agent.stream_count(), 0);
        assert!(matches!(
            agent.remove_stream("audio"),
            Err(Error::StreamNotFound(_))
        ));
        assert!(matches!(
            agent.create_default_component(&stream),
            Err(Error::StreamFreed(_))
        ));
    }

    #[test]
    fn test_free() {
        let agent = Agent::new(AgentConfig::default());
        let audio = agent.create_media_stream("audio").unwrap();
        let video = agent.create_media_stream("video").unwrap();
        let a = agent.create_default_component(&audio).unwrap();
        let v = agent.create_default_component(&video).unwrap();
        agent.free();
        assert!(a.is_released() && v.is_released());
        assert_eq!(agent.stream_count(), 0);
        agent.free();
    }
}
