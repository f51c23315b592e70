use tokio::net::TcpListener;
use tracing::{info, Instrument};

use crate::config::Config;
use crate::http::connection::Connection;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Listening on {}", cfg.server.listen_addr);

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let site = cfg.site.clone();
        let read_timeout = cfg.server.read_timeout();
        let span = tracing::info_span!("connection", %peer);

        tokio::spawn(
            async move {
                let mut conn = Connection::new(socket, site).with_read_timeout(read_timeout);
                if let Err(e) = conn.run().await {
                    tracing::error!("Connection error: {:#}", e);
                }
                info!("Done handling connection");
            }
            .instrument(span),
        );
    }
}
