use clap::Parser;
use client::{PersonClient, CALL_TIMEOUT};
use person_common::{init_tracing, DEFAULT_PORT};
use std::process;
use tokio::time::Instant;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "person-client", about = "Fetches one person from person.PersonService")]
struct Args {
    /// Server URI
    #[arg(long, default_value_t = format!("http://server:{}", DEFAULT_PORT))]
    addr: String,

    /// Id to request
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    id: i32,
}

#[tokio::main]
async fn main() {
    init_tracing("client=info,person_client=info");
    let args = Args::parse();

    let deadline = Instant::now() + CALL_TIMEOUT;
    let mut client = match PersonClient::connect(args.addr).await {
        Ok(client) => client.with_deadline(deadline),
        Err(e) => {
            error!("did not connect: {:#}", anyhow::Error::new(e));
            process::exit(1);
        }
    };

    match client.get_person(args.id).await {
        Ok(person) => info!("Person: {}", person.name),
        Err(e) => {
            error!("could not get person: {:#}", anyhow::Error::new(e));
            process::exit(1);
        }
    }
}
