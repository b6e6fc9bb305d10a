use std::{path::Path, process, sync::Arc, time::Duration};

use autoscale_site::{
    application::{
        clock::{Clock, FixedClock, SystemClock},
        embed::EmbedFrame,
        error::AppError,
        page::LandingPage,
    },
    config,
    domain::{content::validate_tables, error::DomainError, state::NavState},
    infra::{
        error::InfraError,
        http::{self, HttpState},
        telemetry,
    },
};
use tokio::io::AsyncWriteExt;
use tracing::{Dispatch, Level, dispatcher, error, info, warn};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt()
        .with_max_level(Level::ERROR)
        .with_writer(std::io::stderr)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()
        .map_err(|err| AppError::unexpected(format!("failed to load configuration: {err}")))?;

    let command = cli_args
        .command
        .unwrap_or(config::Command::Serve(Box::<config::ServeArgs>::default()));

    telemetry::init(&settings.logging).map_err(AppError::from)?;
    preflight()?;

    match command {
        config::Command::Serve(_) => run_serve(settings).await,
        config::Command::Render(args) => run_render(settings, args).await,
    }
}

/// Reject broken content before anything is served or written.
fn preflight() -> Result<(), AppError> {
    validate_tables()?;
    let frame = EmbedFrame::lead_form();
    frame.url().map_err(|err| {
        DomainError::invariant(format!("lead form url `{}` is invalid: {err}", frame.src()))
    })?;
    Ok(())
}

async fn run_serve(settings: config::Settings) -> Result<(), AppError> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let state = HttpState::new(clock, &settings.site);
    let router = http::build_router(state);

    let listener = tokio::net::TcpListener::bind(settings.server.addr)
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))?;

    info!(
        target = "autoscale::serve",
        addr = %settings.server.addr,
        embed_refresh = settings.site.embed_refresh,
        "listening"
    );

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal(settings.server.graceful_shutdown))
        .await
        .map_err(|err| AppError::unexpected(format!("server error: {err}")))?;

    info!(target = "autoscale::serve", "server stopped");
    Ok(())
}

/// Resolve on ctrl-c, then bound the drain by the configured timeout.
async fn shutdown_signal(grace: Duration) {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        return;
    }
    info!(
        target = "autoscale::serve",
        grace_seconds = grace.as_secs(),
        "shutdown requested"
    );
    tokio::spawn(async move {
        tokio::time::sleep(grace).await;
        warn!(
            target = "autoscale::serve",
            "graceful shutdown timed out; exiting"
        );
        process::exit(1);
    });
}

async fn run_render(settings: config::Settings, args: config::RenderArgs) -> Result<(), AppError> {
    let clock: Box<dyn Clock> = match args.year {
        Some(year) => Box::new(FixedClock::new(year)?),
        None => Box::new(SystemClock),
    };

    let page = LandingPage::assemble(clock.as_ref())
        .with_nav(NavState::from_open(args.menu_open))
        .with_client_script(settings.site.client_script_url.clone());
    info!(
        target = "autoscale::render",
        year = page.year(),
        mobile_nav_open = page.nav().is_open(),
        "rendering page"
    );
    let html = page.render()?;

    match args.output.as_deref() {
        Some(path) => write_document(path, &html).await?,
        None => {
            let mut stdout = tokio::io::stdout();
            stdout
                .write_all(html.as_bytes())
                .await
                .map_err(InfraError::from)?;
            stdout.flush().await.map_err(InfraError::from)?;
        }
    }

    Ok(())
}

async fn write_document(path: &Path, html: &str) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(InfraError::from)?;
    }
    tokio::fs::write(path, html)
        .await
        .map_err(InfraError::from)?;

    info!(
        target = "autoscale::render",
        path = %path.display(),
        bytes = html.len(),
        "page written"
    );
    Ok(())
}
