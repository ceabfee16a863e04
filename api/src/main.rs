use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use anyhow::{bail, Context};
use tracing::info;
use tracing_subscriber::EnvFilter;

use setting_api::{create_app, AppState, HttpConfig};
use setting_core::repositories::{
    CurrencyRepository, LanguageRepository, NotificationRepository, SettingRepository,
};
use setting_core::services::{
    AuthorizationGate, CurrencyService, JwtVerifier, LanguageService, MailBridge,
    NoopRealtimePublisher, NotificationRelay, NotificationService, RealtimePublisher,
    SettingService,
};
use setting_infra::cache::{RedisClient, RedisDenyList};
use setting_infra::database::{
    DatabasePool, MySqlCurrencyRepository, MySqlLanguageRepository, MySqlNotificationRepository,
    MySqlSettingRepository,
};
use setting_infra::messaging::{
    spawn_relay_consumers, AmqpConnection, AmqpDeadLetterSink, AmqpEmailPublisher,
};
use setting_infra::realtime::SocketIoRealtimePublisher;
use setting_infra::templates::HandlebarsRenderer;
use setting_shared::config::environment::{LogFormat, LoggingConfig};
use setting_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    init_tracing(&config.logging);

    info!(environment = %config.environment, "Starting setting service");

    // Storage
    let database = DatabasePool::new(&config.database)
        .await
        .context("Failed to connect to MySQL")?;
    if !database.health_check().await.context("Database health check failed")? {
        bail!("Database health check returned an unexpected result");
    }
    database
        .run_migrations()
        .await
        .context("Failed to apply database migrations")?;
    info!("{}", database.get_statistics());
    let pool = database.get_pool().clone();

    let currency_repository: Arc<dyn CurrencyRepository> =
        Arc::new(MySqlCurrencyRepository::new(pool.clone()));
    let language_repository: Arc<dyn LanguageRepository> =
        Arc::new(MySqlLanguageRepository::new(pool.clone()));
    let setting_repository: Arc<dyn SettingRepository> =
        Arc::new(MySqlSettingRepository::new(pool.clone()));
    let notification_repository: Arc<dyn NotificationRepository> =
        Arc::new(MySqlNotificationRepository::new(pool));

    // Authorization
    if !config.auth.has_public_key() {
        bail!("JWT_PUBLIC_KEY must be set");
    }
    let verifier = JwtVerifier::from_rsa_pem(&config.auth.public_key_pem, config.auth.leeway)
        .context("Failed to load the token public key")?;
    let redis = RedisClient::new(&config.cache)
        .await
        .context("Failed to connect to Redis")?;
    let gate = Arc::new(
        AuthorizationGate::new(Arc::new(RedisDenyList::new(redis)), Arc::new(verifier))
            .with_prefix(config.cache.deny_list_prefix.clone()),
    );

    // Messaging
    let amqp = Arc::new(AmqpConnection::new(config.amqp.clone()));
    let renderer = HandlebarsRenderer::new().context("Failed to register email templates")?;
    let mail = Arc::new(MailBridge::new(
        Arc::new(AmqpEmailPublisher::new(Arc::clone(&amqp))),
        Arc::new(renderer),
        config.mail.clone(),
    ));
    let socket = config
        .realtime
        .enabled
        .then(|| Arc::new(SocketIoRealtimePublisher::new(&config.realtime)));
    let realtime: Arc<dyn RealtimePublisher> = match &socket {
        Some(socket) => Arc::clone(socket) as Arc<dyn RealtimePublisher>,
        None => {
            info!("Realtime push disabled");
            Arc::new(NoopRealtimePublisher)
        }
    };

    // Services
    let notifications = Arc::new(NotificationService::new(
        notification_repository,
        realtime,
        Arc::clone(&mail),
    ));
    let relay = Arc::new(NotificationRelay::new(
        Arc::clone(&notifications),
        mail,
        Arc::new(AmqpDeadLetterSink::new(Arc::clone(&amqp))),
    ));
    let consumers = spawn_relay_consumers(Arc::clone(&amqp), relay);

    let state = web::Data::new(AppState::new(
        Arc::new(CurrencyService::new(Arc::clone(&currency_repository))),
        Arc::new(LanguageService::new(language_repository)),
        Arc::new(SettingService::new(setting_repository, currency_repository)),
        notifications,
    ));

    // Server
    let http_config = HttpConfig::from(&config);
    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || {
        create_app(state.clone(), Arc::clone(&gate), &http_config)
    })
    .keep_alive(Duration::from_secs(config.server.keep_alive));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    let result = server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await;

    // The server returns once a shutdown signal has been handled
    info!("Shutting down");
    for consumer in consumers {
        consumer.abort();
    }
    if let Some(socket) = socket {
        socket.close().await;
    }
    amqp.close().await;
    database.close().await;

    result.context("HTTP server failed")
}

/// Install the global subscriber, `RUST_LOG` overrides the configured level
fn init_tracing(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
    if let Err(e) = installed {
        eprintln!("Failed to install tracing subscriber: {}", e);
    }
}
