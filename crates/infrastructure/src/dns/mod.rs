mod handler;

pub use handler::DnsRequestHandler;
