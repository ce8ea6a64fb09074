mod api;
mod trace;

#[cfg(test)]
mod tests;

use tokio::signal;

use crate::api::config::Config;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let config = Config::from_env()?;
  let _guards = trace::init_tracing(&config, std::io::stdout());

  let app = api::routes(&config).await?;
  let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;

  tracing::info!(foodmatch = env!("CARGO_PKG_VERSION"), "listening on {}", listener.local_addr()?.to_string());

  axum::serve(listener, app.into_make_service_with_connect_info::<std::net::SocketAddr>())
    .with_graceful_shutdown(shutdown())
    .await?;

  Ok(())
}

async fn shutdown() {
  let ctrl_c = async {
    if let Err(err) = signal::ctrl_c().await {
      tracing::error!(%err, "failed to install ^C handler");
      std::future::pending::<()>().await;
    }
  };

  let terminate = async {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
      Ok(mut signal) => {
        signal.recv().await;
      }

      Err(err) => {
        tracing::error!(%err, "failed to install terminate signal handler");
        std::future::pending::<()>().await;
      }
    }
  };

  tokio::select! {
      () = ctrl_c => tracing::info!("received ^C, initiating shutdown"),
      () = terminate => tracing::info!("received terminate signal, initiating shutdown"),
  }
}
