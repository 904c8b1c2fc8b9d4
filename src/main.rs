use anyhow::Context;
use pages::configuration::get_config;
use pages::startup::Application;
use pages::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("info".into(), std::io::stdout);
    init_subscriber(subscriber)?;

    dotenvy::dotenv().ok();

    let settings = get_config().context("Failed to load configuration")?;
    let app = Application::build(settings)
        .await
        .context("Failed to build application")?;

    app.run_until_stop().await
}
