//! # rustp2p-ice - Media stream registry for ICE agents
//!
//! An ICE agent negotiates connectivity for one or more media streams. Each
//! stream is made of components, and every component needs its own transport
//! address and its own connectivity checks. A stream is only usable once all
//! of its components are.
//!
//! This crate keeps track of the components of each stream:
//!
//! - [`agent`] - owner of the streams, the only way to create streams and components
//! - [`stream`] - the per stream component registry
//! - [`component`] - component handles and their release
//! - [`candidate`] - local candidates registered on a component
//! - [`transport`] - transport kinds
//!
//! ## Quick Start
//!
//! ```rust
//! use rustp2p_ice::agent::Agent;
//! use rustp2p_ice::config::AgentConfig;
//! use rustp2p_ice::transport::Transport;
//!
//! # fn main() -> rustp2p_ice::error::Result<()> {
//! let agent = Agent::new(AgentConfig::default());
//! let audio = agent.create_media_stream("audio")?;
//! agent.create_component(&audio, Transport::Udp)?;
//! agent.create_component(&audio, Transport::Udp)?;
//!
//! println!("{audio}");
//! agent.remove_stream("audio")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Thread Safety
//!
//! Streams serialize all access to their components behind one lock per
//! stream. Listings such as [`stream::IceMediaStream::components`] return
//! copies, so they can be iterated while other threads keep mutating the
//! stream.

pub mod agent;
pub mod candidate;
pub mod component;
pub mod config;
pub mod error;
pub mod stream;
pub mod transport;

pub use agent::Agent;
pub use component::Component;
pub use stream::IceMediaStream;
