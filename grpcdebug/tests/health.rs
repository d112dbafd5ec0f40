use grpcdebug::Error;
use grpcdebug::config::ServerConfig;
use grpcdebug::health::{self, ServingStatus};
use grpcdebug::paging::Window;
use grpcdebug::render::{Block, Field, Output, View};
use grpcdebug::service::tonic::TonicServices;
use grpcdebug::{channelz, transport};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;

async fn serve_health() -> String {
    let (reporter, service) = tonic_health::server::health_reporter();
    reporter
        .set_service_status("", tonic_health::ServingStatus::Serving)
        .await;
    reporter
        .set_service_status(
            "helloworld.Greeter",
            tonic_health::ServingStatus::NotServing,
        )
        .await;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        Server::builder()
            .add_service(service)
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });

    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    addr.to_string()
}

async fn services(addr: &str) -> TonicServices {
    let channel = transport::connect(&ServerConfig::for_target(addr))
        .await
        .unwrap();
    TonicServices::from_channel(channel)
}

#[tokio::test]
async fn statuses_from_a_live_server() {
    let addr = serve_health().await;
    let services = services(&addr).await;

    assert_eq!(health::check(&services, "").await, ServingStatus::Serving);
    assert_eq!(
        health::check(&services, "helloworld.Greeter").await,
        ServingStatus::NotServing
    );
    assert_eq!(
        health::check(&services, "no.such.Service").await,
        ServingStatus::ServiceUnknown
    );
}

#[tokio::test]
async fn report_covers_overall_status() {
    let addr = serve_health().await;
    let services = services(&addr).await;

    let Output::Report(report) = health::report(&services, ["helloworld.Greeter"]).await else {
        panic!("expected a report");
    };
    assert_eq!(
        report.blocks,
        vec![Block::Fields(vec![
            Field::new(health::OVERALL, "SERVING"),
            Field::new("helloworld.Greeter", "NOT_SERVING"),
        ])]
    );
}

#[tokio::test]
async fn missing_channelz_service_is_reported() {
    let addr = serve_health().await;
    let services = services(&addr).await;

    let err = channelz::channels(&services, Window::Exhaustive, View::Structured)
        .await
        .unwrap_err();
    match err {
        Error::Unreachable { status, .. } => {
            assert_eq!(status.code(), tonic::Code::Unimplemented)
        }
        err => panic!("unexpected error: {err}"),
    }
}

#[tokio::test]
async fn refused_connection_is_a_connect_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    drop(listener);

    let err = transport::connect(&ServerConfig::for_target(addr))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Connect { .. }), "{err}");
}
