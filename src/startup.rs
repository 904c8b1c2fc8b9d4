use axum::Router;
use axum::routing::IntoMakeService;
use axum::serve::Serve;

use crate::configuration::Settings;
use crate::routers;

type Server = Serve<tokio::net::TcpListener, IntoMakeService<Router>, Router>;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(settings: Settings) -> Result<Self, std::io::Error> {
        let addr = std::net::SocketAddr::from((
            settings.app_settings.host,
            settings.app_settings.port,
        ));
        let listener = tokio::net::TcpListener::bind(addr).await?;

        let resolver = settings.views.resolver();
        tracing::info!(
            "Resolving views from {}",
            resolver.prefix().display()
        );

        let app = routers::get_router(resolver);
        let server = axum::serve(listener, app.into_make_service());

        Ok(Self {
            port: server.local_addr()?.port(),
            server,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stop(self) -> Result<(), anyhow::Error> {
        tracing::info!("Listening on {}", self.server.local_addr()?);
        self.server.await?;
        Ok(())
    }
}
