use crate::transport::Transport;

#[derive(Clone, Debug)]
pub struct AgentConfig {
    /// Transport used by [`Agent::create_default_component`](crate::agent::Agent::create_default_component).
    pub default_transport: Transport,
    /// Upper bound of live components per media stream, `None` means unbounded.
    pub max_components_per_stream: Option<usize>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            default_transport: Transport::Udp,
            max_components_per_stream: None,
        }
    }
}

impl AgentConfig {
    pub fn empty() -> Self {
        Self::default()
    }
    pub fn set_default_transport(mut self, transport: Transport) -> Self {
        self.default_transport = transport;
        self
    }
    pub fn set_max_components_per_stream(mut self, max: usize) -> Self {
        self.max_components_per_stream.replace(max);
        self
    }
}
