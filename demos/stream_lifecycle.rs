use std::net::{Ipv4Addr, SocketAddr};

use clap::Parser;
use env_logger::Env;
use rustp2p_ice::candidate::LocalCandidate;
use rustp2p_ice::config::AgentConfig;
use rustp2p_ice::transport::Transport;
use rustp2p_ice::Agent;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Media stream names.
    /// example: --stream audio --stream video
    #[arg(short, long, default_values_t = vec!["audio".to_string()])]
    stream: Vec<String>,
    /// Components per stream
    #[arg(short, long, default_value_t = 2)]
    components: u32,
    /// Transport of the components: udp, tcp, tls, dtls or sctp
    #[arg(short, long, default_value_t = Transport::Udp)]
    transport: Transport,
    /// First local port handed to the host candidates
    #[arg(short = 'P', long, default_value_t = 5000)]
    port: u16,
}

pub fn main() -> anyhow::Result<()> {
    let Args {
        stream,
        components,
        transport,
        port,
    } = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("debug")).init();

    let agent = Agent::new(AgentConfig::empty().set_default_transport(transport));
    let mut next_port = port;
    for name in &stream {
        let media_stream = agent.create_media_stream(name)?;
        for _ in 0..components {
            let component = agent.create_default_component(&media_stream)?;
            let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, next_port));
            component.add_local_candidate(LocalCandidate::host(addr, transport))?;
            next_port = next_port.wrapping_add(1);
        }
        log::info!("{media_stream}");
    }

    if let Some(first) = agent.streams().first() {
        if let Some(component) = first.component(1) {
            first.remove_component(&component)?;
            log::info!(
                "removed component 1 of {}, remaining ids={:?}",
                first.name(),
                first.component_ids()
            );
        }
    }

    agent.free();
    log::info!("agent freed, streams={}", agent.stream_count());
    Ok(())
}
