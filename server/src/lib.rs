pub mod protocol;

use person_common::person::person_service_server::PersonServiceServer;
use person_common::person::FILE_DESCRIPTOR_SET;
use protocol::PersonHandler;
use std::future::Future;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::server::Router;
use tonic::transport::Server;
use tracing::info;

/// Assembles the gRPC server: the person service plus v1 server reflection.
pub fn router() -> anyhow::Result<Router> {
    let reflection = tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
        .build_v1()?;

    Ok(Server::builder()
        .add_service(PersonServiceServer::new(PersonHandler::new()))
        .add_service(reflection))
}

/// Serves on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send,
{
    let local_addr = listener.local_addr()?;
    let router = router()?;

    info!(%local_addr, "serving person.PersonService");
    router
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown)
        .await?;

    info!(%local_addr, "server stopped");
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn test_serve_stops_on_shutdown() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();

        serve(listener, async {}).await.unwrap();
    }
}
