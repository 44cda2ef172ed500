use tracing_subscriber::{EnvFilter, fmt};

use blog_posts::shell::config::ServerConfig;
use blog_posts::shell::{build_state, http};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = ServerConfig::from_env()?;
    let app = http::router(build_state(&config));

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        id_policy = ?config.id_policy,
        seeded = config.seed,
        "Posts API: http://{}/api/posts",
        addr
    );
    axum::serve(listener, app).await?;
    Ok(())
}
