mod udp;

pub use udp::UdpUpstreamGateway;
