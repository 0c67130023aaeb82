mod handlers;
mod routes;


use crate::args::AppConfig;
use crate::proc_state::ProcState;
use engage_runtime::tokio_util::start_server;
use libs::anyhow::Error;
use libs::log;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub use routes::routes;

pub async fn serve(config: AppConfig) -> Result<(), Error> {
    let ip_addr = IpAddr::V4(Ipv4Addr::LOCALHOST);
    let addr = SocketAddr::new(ip_addr, config.port);
    let ps = ProcState::build(config)?;

    for (name, present) in ps.config.presence() {
        if !present {
            log::debug!("{} is not set", name);
        }
    }

    start_server(routes(ps), addr).await?;
    Ok(())
}
