use once_cell::sync::Lazy;
use pages::startup::Application;
use pages::telemetry::{get_subscriber, init_subscriber};

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn request(
        &self,
        method: reqwest::Method,
        path: &str,
    ) -> reqwest::Response {
        self.client
            .request(method, format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.request(reqwest::Method::GET, path).await
    }
}

static INIT_SUBSCRIBER: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "debug".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(default_filter_level, std::io::stdout);
        init_subscriber(subscriber).expect("Failed to init telemetry");
    } else {
        let subscriber = get_subscriber(default_filter_level, std::io::sink);
        init_subscriber(subscriber).expect("Failed to init telemetry");
    }
});

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

/// Spawns the application after letting `customize` tweak the settings.
pub async fn spawn_app_with(
    customize: impl FnOnce(&mut pages::configuration::Settings),
) -> TestApp {
    Lazy::force(&INIT_SUBSCRIBER);

    let mut app_config = pages::configuration::get_config()
        .expect("Failed to load configuration");
    // Let the OS pick a free port so tests can run in parallel.
    app_config.app_settings.port = 0;
    customize(&mut app_config);

    let app = Application::build(app_config)
        .await
        .expect("Failed to build application");

    let address = format!("http://127.0.0.1:{}", app.port());

    tokio::spawn(app.run_until_stop());

    TestApp {
        address,
        client: reqwest::Client::new(),
    }
}
