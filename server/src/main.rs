use clap::Parser;
use person_common::{init_tracing, DEFAULT_PORT};
use std::net::SocketAddr;
use std::process;
use tokio::net::TcpListener;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "person-server", about = "Serves person.PersonService over gRPC")]
struct Args {
    /// Address to listen on
    #[arg(long, default_value_t = SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)))]
    addr: SocketAddr,
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("received ctrl-c, shutting down"),
        Err(e) => {
            // Without a signal handler the server just runs until killed.
            error!("unable to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

#[tokio::main]
async fn main() {
    init_tracing("server=info,person_server=info");
    let args = Args::parse();

    let listener = match TcpListener::bind(args.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("failed to listen: {}", e);
            process::exit(1);
        }
    };

    info!("Server is running on port :{}", args.addr.port());
    if let Err(e) = server::serve(listener, shutdown_signal()).await {
        error!("failed to serve: {:#}", e);
        process::exit(1);
    }
}
