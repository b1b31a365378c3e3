//! Server module.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web::{self, Data},
    App, HttpResponse, HttpServer,
};
use actix_web_prom::PrometheusMetrics;
use phonehook_config::Config;
use phonehook_core::{CoreContext, CoreModule};
use phonehook_ghapi_interface::ApiService;
use phonehook_git_interface::GitService;
use phonehook_git_libgit2::Libgit2GitService;
use phonehook_upstream_interface::UpstreamService;
use phonehook_upstream_tarball::TarballUpstreamService;
use sentry_actix::Sentry;
use tracing::info;

use crate::{
    ghapi::MetricsApiService, health::health_check_route, metrics::build_metrics_handler,
    middlewares::VerifySignature, webhook::configure_webhook_handlers, Result, ServerError,
};

/// App context.
pub struct AppContext {
    /// Config.
    pub config: Config,
    /// Core module.
    pub core_module: CoreModule,
    /// API adapter.
    pub api_service: Box<dyn ApiService>,
    /// Git adapter.
    pub git_service: Box<dyn GitService>,
    /// Upstream release adapter.
    pub upstream_service: Box<dyn UpstreamService>,
}

impl AppContext {
    /// Create new app context.
    pub fn new(config: Config, core_module: CoreModule) -> Self {
        Self {
            config: config.clone(),
            core_module,
            api_service: Box::new(MetricsApiService::new(config.clone())),
            git_service: Box::new(Libgit2GitService::new()),
            upstream_service: Box::new(TarballUpstreamService::new(config)),
        }
    }

    /// Create new app context using adapters.
    pub fn new_with_adapters(
        config: Config,
        core_module: CoreModule,
        api_service: Box<dyn ApiService>,
        git_service: Box<dyn GitService>,
        upstream_service: Box<dyn UpstreamService>,
    ) -> Self {
        Self {
            config,
            core_module,
            api_service,
            git_service,
            upstream_service,
        }
    }

    /// Convert the context for the core module.
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            api_service: self.api_service.as_ref(),
            git_service: self.git_service.as_ref(),
            upstream_service: self.upstream_service.as_ref(),
        }
    }
}

/// Build Actix app.
pub fn build_actix_app(
    context: Data<AppContext>,
    prometheus: PrometheusMetrics,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(context.clone())
        .wrap(prometheus)
        .wrap(Sentry::new())
        .wrap(Logger::default())
        .service(
            web::scope("/webhook")
                .wrap(VerifySignature::new(&context.config))
                .configure(configure_webhook_handlers),
        )
        .route("/health", web::get().to(health_check_route))
        .route(
            "/",
            web::get().to(|| async {
                HttpResponse::Ok().json(serde_json::json!({"message": "Welcome on phonehook!" }))
            }),
        )
}

/// Run webhook server.
pub async fn run_bot_server(context: AppContext) -> Result<()> {
    let address = get_bind_address(&context.config);

    info!(
        version = context.config.version,
        address = %address,
        dry_run = context.config.dry_run,
        message = "Starting webhook server",
    );

    run_bot_server_internal(address, context).await
}

fn get_bind_address(config: &Config) -> String {
    format!("{}:{}", config.server.bind_ip, config.server.bind_port)
}

async fn run_bot_server_internal(ip_with_port: String, context: AppContext) -> Result<()> {
    let prometheus = build_metrics_handler()?;
    let context = Data::new(context);
    let cloned_context = context.clone();

    let mut server =
        HttpServer::new(move || build_actix_app(context.clone(), prometheus.clone()));

    if let Some(workers) = cloned_context.config.server.workers_count {
        server = server.workers(workers as usize);
    }

    server
        .bind(ip_with_port)
        .map_err(|e| ServerError::IoError { source: e })?
        .run()
        .await
        .map_err(|e| ServerError::IoError { source: e })
}
