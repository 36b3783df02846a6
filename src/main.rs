use pouch_counter::{
    clock::today_key, router, ui::DisplayFont, AppState, Config, CounterController,
    DailyCounterStore,
};
use std::sync::Arc;
use tokio::{fs, signal, sync::Notify};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    if let Some(parent) = config.data_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    let store = DailyCounterStore::open(&config.data_path).await;
    let controller = CounterController::new(store, today_key());
    info!(
        path = %controller.store().path().display(),
        date = controller.today_key(),
        count = controller.count(),
        "loaded counter"
    );

    let state = AppState::new(controller, DisplayFont::default());
    let app = router(state.clone());

    info!("listening on http://{}", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(Arc::clone(&state.exit)))
        .await?;

    state.controller.lock().await.flush().await;
    info!("shut down");

    Ok(())
}

/// Resolves on Ctrl-C, SIGTERM, or the exit button.
async fn shutdown_signal(exit: Arc<Notify>) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("failed to listen for ctrl-c: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!("failed to listen for SIGTERM: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received ctrl-c"),
        _ = terminate => info!("received SIGTERM"),
        _ = exit.notified() => {}
    }
}
