use crate::adapters::{ApiIssueStore, StaticIssueStore};
use crate::configuration::{ContentSettings, ContentSource, Settings};
use crate::domain::IssueStore;
use crate::routes::{about, archive, health_check, home, issue_page};
use actix_web::dev::{Server, Service};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::web::Data;
use actix_web::{web, App, HttpMessage, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use telemetry::CustomLevelRootSpanBuilder;
use tracing_actix_web::{RequestId, TracingLogger};

/// Public origin of the site, used to build canonical links.
pub struct ApplicationBaseUrl(pub String);

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let listener = TcpListener::bind(format!(
            "{}:{}",
            configuration.application.host_name, configuration.application.application_port
        ))?;
        let port = listener.local_addr()?.port();

        let store = build_issue_store(&configuration.content)?;
        let server = run(listener, store, configuration.application.base_url)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn build_issue_store(content: &ContentSettings) -> Result<Arc<dyn IssueStore>, anyhow::Error> {
    let store: Arc<dyn IssueStore> = match content.source {
        ContentSource::Api => {
            let api_url = content.api_url()?;
            tracing::info!(api_url, "Serving issues from the content API");
            Arc::new(ApiIssueStore::new(api_url.to_string(), content.timeout())?)
        }
        ContentSource::Static => {
            tracing::info!("Serving the bundled sample issues");
            Arc::new(StaticIssueStore::sample())
        }
    };

    Ok(store)
}

pub fn run(
    listener: TcpListener,
    store: Arc<dyn IssueStore>,
    base_url: String,
) -> Result<Server, anyhow::Error> {
    let store_data: Data<dyn IssueStore> = Data::from(store);
    let base_url = Data::new(ApplicationBaseUrl(base_url));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::<CustomLevelRootSpanBuilder>::new())
            .wrap_fn(|req, srv| {
                let request_id = req.extensions().get::<RequestId>().copied();
                let res = srv.call(req);
                async move {
                    let mut res = res.await?;
                    if let Some(request_id) = request_id {
                        if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
                            res.headers_mut()
                                .insert(HeaderName::from_static("x-request-id"), value);
                        }
                    }
                    Ok(res)
                }
            })
            .route("/", web::get().to(home))
            .route("/archive", web::get().to(archive))
            .route("/posts/{slug}", web::get().to(issue_page))
            .route("/about", web::get().to(about))
            .route("/health_check", web::get().to(health_check))
            .app_data(store_data.clone())
            .app_data(base_url.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
