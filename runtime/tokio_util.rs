use std::convert::Infallible;
use std::net::SocketAddr;

use libs::log;
use libs::tokio;
use libs::warp::{self, Filter, Reply};

pub fn create_basic_runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_io()
        .enable_time()
        .max_blocking_threads(16)
        .build()
}

pub fn run_local<F, R>(future: F) -> std::io::Result<R>
where
    F: std::future::Future<Output = R>,
{
    let rt = create_basic_runtime()?;
    let local = tokio::task::LocalSet::new();
    Ok(local.block_on(&rt, future))
}

/// Serves `filter` on `addr` until ctrl-c.
pub async fn start_server<F, R>(filter: F, addr: SocketAddr) -> Result<(), warp::Error>
where
    F: Filter<Extract = (R,), Error = Infallible> + Clone + Send + Sync + 'static,
    R: Reply,
{
    let (bound, server) =
        warp::serve(filter).try_bind_with_graceful_shutdown(addr, async {
            let _ = tokio::signal::ctrl_c().await;
        })?;
    log::info!("Starting server at http://{}", bound);
    server.await;
    log::info!("Server stopped");
    Ok(())
}
