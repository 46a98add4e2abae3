//! Server bootstrap.
//!
//! Owns the listening socket for the process lifetime: bind once, then
//! serve connections until an interrupt signal arrives.

use std::convert::Infallible;
use std::net::SocketAddr;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::watch;

use crate::{Req, Result, handler};

/// Bound HTTP server.
pub struct Server {
    listener: TcpListener,
}

impl Server {
    /// Bind the listening socket.
    ///
    /// Binding is separate from serving so startup can report a
    /// port-in-use conflict before printing the ready banner.
    pub async fn bind(addr: SocketAddr) -> Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self { listener })
    }

    /// Address the listener actually bound to.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve requests until SIGTERM/SIGINT.
    ///
    /// Each connection runs on its own task and is asked to shut down
    /// gracefully when the signal arrives; the accept loop itself
    /// returns without waiting for those tasks.
    pub async fn serve(self) -> Result<()> {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        tokio::spawn(async move {
            let _ = shutdown_signal().await;
            let _ = shutdown_tx.send(true);
        });

        loop {
            tokio::select! {
                result = self.listener.accept() => {
                    match result {
                        Ok((stream, _)) => {
                            let io = TokioIo::new(stream);
                            let mut shutdown_rx = shutdown_rx.clone();

                            tokio::task::spawn(async move {
                                let conn = http1::Builder::new().serve_connection(
                                    io,
                                    service_fn(|req| async move {
                                        let res = handler::dispatch(Req::from_hyper(req)).await;
                                        Ok::<_, Infallible>(res.into_hyper())
                                    }),
                                );

                                let mut conn = std::pin::pin!(conn);

                                tokio::select! {
                                    result = conn.as_mut() => {
                                        let _ = result;
                                    }
                                    _ = shutdown_rx.changed() => {
                                        conn.as_mut().graceful_shutdown();
                                        let _ = conn.await;
                                    }
                                }
                            });
                        }
                        Err(_) => {}
                    }
                }
                _ = shutdown_rx.changed() => {
                    break;
                }
            }
        }

        Ok(())
    }
}

async fn shutdown_signal() -> std::io::Result<()> {
    #[cfg(unix)]
    {
        let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())?;
        let mut sigint = signal::unix::signal(signal::unix::SignalKind::interrupt())?;

        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }

    #[cfg(not(unix))]
    {
        signal::ctrl_c().await?;
    }

    Ok(())
}
