use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use teamhub::{
    application::{
        ApplicationResult,
        commands::tenants::ProvisionTenantCommand,
        error::ApplicationError,
        ports::{ClockPort, SlugGeneratorPort, TokenManagerPort},
        services::ApplicationServices,
    },
    config::AppConfig,
    domain::{
        errors::DomainError,
        team::{TeamMemberRepository, TeamRepository},
        tenant::TenantRepository,
    },
    infrastructure::{
        repositories::{
            InMemoryTeamMemberRepository, InMemoryTeamRepository, InMemoryTenantRepository,
        },
        security::HmacTokenManager,
        time::SystemClock,
        util::{TransliteratingSlugGenerator, UnicodeSlugGenerator},
    },
    presentation::http::{routes::build_router, state::HttpState},
};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;

    let tenant_repo: Arc<dyn TenantRepository> = Arc::new(InMemoryTenantRepository::default());
    let team_repo: Arc<dyn TeamRepository> = Arc::new(InMemoryTeamRepository::default());
    let member_repo: Arc<dyn TeamMemberRepository> =
        Arc::new(InMemoryTeamMemberRepository::default());

    let clock: Arc<ClockPort> = Arc::new(SystemClock);
    let slugger: Arc<SlugGeneratorPort> = if config.slug_transliterate() {
        Arc::new(TransliteratingSlugGenerator)
    } else {
        Arc::new(UnicodeSlugGenerator)
    };
    let token_manager: Arc<TokenManagerPort> = Arc::new(HmacTokenManager::new(
        config.token_secret(),
        config.token_ttl(),
        Arc::clone(&clock),
    )?);

    let services = Arc::new(ApplicationServices::new(
        tenant_repo,
        team_repo,
        member_repo,
        token_manager,
        clock,
        slugger,
    ));

    seed_tenants(&services, config.seed_tenants()).await?;

    let state = HttpState {
        services: Arc::clone(&services),
    };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Provision the configured tenants. Names that collide or cannot be slugged
/// are skipped with a warning; anything else aborts startup.
async fn seed_tenants(services: &ApplicationServices, names: &[String]) -> ApplicationResult<()> {
    for name in names {
        let command = ProvisionTenantCommand { name: name.clone() };
        match services.tenant_commands.provision_tenant(command).await {
            Ok(_) => {}
            Err(
                err @ (ApplicationError::Conflict(_)
                | ApplicationError::Validation(_)
                | ApplicationError::Domain(DomainError::Validation(_))),
            ) => {
                tracing::warn!(tenant = %name, error = %err, "skipping seed tenant");
            }
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
