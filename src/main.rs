use globe_scholars::App;
#[cfg(feature = "server")]
use dioxus::prelude::*;

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use clap::Parser;
    use log::{debug, info};
    use tokio::net::TcpListener;

    env_logger::init();

    let args = globe_scholars::config::Args::parse();
    let table = globe_scholars::routes::RouteTable::standard();

    if args.print_routes {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    for entry in table.entries() {
        debug!("Route {} -> {:?}", entry.location(), entry.target);
    }

    let addr = args.socket_addr()?;
    let app = axum::Router::new().serve_dioxus_application(ServeConfig::builder(), App);
    let listener = TcpListener::bind(addr).await?;

    info!("Globe Scholars portal available at http://{}", addr);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(App);
}
