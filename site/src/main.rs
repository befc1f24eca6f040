use breakdown::configuration::get_configuration;
use breakdown::startup::Application;
use telemetry::{get_subscriber, init_subscriber, init_tracer};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let configuration = get_configuration()?;

    let tracer = init_tracer(&configuration.telemetry)?;
    let subscriber = get_subscriber(
        configuration.telemetry.dataset_name.clone(),
        "info".into(),
        std::io::stdout,
        &configuration.telemetry,
        &tracer,
    );
    init_subscriber(subscriber);

    let application = Application::build(configuration).await?;
    application.run_until_stopped().await?;

    for result in tracer.force_flush() {
        if let Err(e) = result {
            tracing::warn!(error.cause_chain = ?e, "Failed to flush pending spans");
        }
    }

    Ok(())
}
