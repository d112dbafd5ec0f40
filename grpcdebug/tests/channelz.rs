use grpcdebug::channelz::{self, ChannelSelector};
use grpcdebug::config::ServerConfig;
use grpcdebug::graph::EntityRef;
use grpcdebug::paging::Window;
use grpcdebug::proto::channelz::channelz_server::{Channelz, ChannelzServer};
use grpcdebug::proto::channelz::{
    Address, Channel, ChannelConnectivityState, ChannelData, ChannelRef, GetChannelRequest,
    GetChannelResponse, GetSocketRequest, GetSocketResponse, GetSubchannelRequest,
    GetSubchannelResponse, GetTopChannelsRequest, GetTopChannelsResponse, Socket, SocketRef,
    Subchannel, SubchannelRef, address,
};
use grpcdebug::render::{Block, Output, RenderOptions, Row, TimeFormat, View};
use grpcdebug::service::Topology;
use grpcdebug::service::tonic::TonicServices;
use grpcdebug::{Error, transport};
use std::collections::HashMap;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tonic::{Request, Response, Status};

const TARGET: &str = "dns:///backend:443";

/// A channelz service over a fixed topology.
///
/// Unknown subchannels are reported with a `NOT_FOUND` status, unknown
/// channels and sockets with an empty response.
#[derive(Debug, Default)]
struct Admin {
    channels: Vec<Channel>,
    subchannels: HashMap<i64, Subchannel>,
    sockets: HashMap<i64, Socket>,
}

fn channel_id(channel: &Channel) -> i64 {
    channel.r#ref.as_ref().map_or(0, |r| r.channel_id)
}

#[tonic::async_trait]
impl Channelz for Admin {
    async fn get_top_channels(
        &self,
        request: Request<GetTopChannelsRequest>,
    ) -> Result<Response<GetTopChannelsResponse>, Status> {
        let start = request.into_inner().start_channel_id;
        let channel = self
            .channels
            .iter()
            .filter(|c| channel_id(c) >= start)
            .cloned()
            .collect();
        Ok(Response::new(GetTopChannelsResponse {
            channel,
            end: true,
        }))
    }

    async fn get_channel(
        &self,
        request: Request<GetChannelRequest>,
    ) -> Result<Response<GetChannelResponse>, Status> {
        let id = request.into_inner().channel_id;
        let channel = self.channels.iter().find(|c| channel_id(c) == id).cloned();
        Ok(Response::new(GetChannelResponse { channel }))
    }

    async fn get_subchannel(
        &self,
        request: Request<GetSubchannelRequest>,
    ) -> Result<Response<GetSubchannelResponse>, Status> {
        let id = request.into_inner().subchannel_id;
        match self.subchannels.get(&id) {
            Some(subchannel) => Ok(Response::new(GetSubchannelResponse {
                subchannel: Some(subchannel.clone()),
            })),
            None => Err(Status::not_found(format!("no subchannel {id}"))),
        }
    }

    async fn get_socket(
        &self,
        request: Request<GetSocketRequest>,
    ) -> Result<Response<GetSocketResponse>, Status> {
        let id = request.into_inner().socket_id;
        let socket = self.sockets.get(&id).cloned();
        Ok(Response::new(GetSocketResponse { socket }))
    }
}

fn data(target: &str) -> Option<ChannelData> {
    Some(ChannelData {
        state: Some(ChannelConnectivityState { state: 3 }),
        target: target.to_string(),
        calls_started: 4,
        calls_succeeded: 3,
        calls_failed: 1,
        ..Default::default()
    })
}

fn admin() -> Admin {
    let channel = Channel {
        r#ref: Some(ChannelRef {
            channel_id: 1,
            name: String::new(),
        }),
        data: data(TARGET),
        subchannel_ref: [10, 11]
            .into_iter()
            .map(|subchannel_id| SubchannelRef {
                subchannel_id,
                name: String::new(),
            })
            .collect(),
        ..Default::default()
    };
    let subchannel = Subchannel {
        r#ref: Some(SubchannelRef {
            subchannel_id: 10,
            name: String::new(),
        }),
        data: data("10.0.0.1:443"),
        socket_ref: vec![SocketRef {
            socket_id: 20,
            name: String::new(),
        }],
        ..Default::default()
    };
    let socket = Socket {
        r#ref: Some(SocketRef {
            socket_id: 20,
            name: String::new(),
        }),
        local: Some(Address {
            address: Some(address::Address::TcpipAddress(address::TcpIpAddress {
                ip_address: vec![10, 0, 0, 2],
                port: 40000,
            })),
        }),
        ..Default::default()
    };

    Admin {
        channels: vec![channel],
        subchannels: HashMap::from([(10, subchannel)]),
        sockets: HashMap::from([(20, socket)]),
    }
}

async fn serve(admin: Admin) -> TonicServices {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        Server::builder()
            .add_service(ChannelzServer::new(admin))
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });

    let channel = transport::connect(&ServerConfig::for_target(addr.to_string()))
        .await
        .unwrap();
    TonicServices::from_channel(channel)
}

fn tabular() -> View {
    View::Tabular(RenderOptions::new(TimeFormat::Rfc3339))
}

#[tokio::test]
async fn channel_by_target_resolves_live_subchannels() {
    let services = serve(admin()).await;

    let selector = ChannelSelector::Target(TARGET.to_string());
    let output = channelz::channel(&services, &selector, tabular())
        .await
        .unwrap();
    let Output::Report(report) = output else {
        panic!("expected a report");
    };

    assert_eq!(report.blocks.len(), 2);
    let Block::Table(subchannels) = &report.blocks[1] else {
        panic!("expected the subchannel table");
    };
    let [Row::Cells(cells)] = subchannels.rows.as_slice() else {
        panic!("expected one subchannel row");
    };
    assert_eq!(cells[0], "10");
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].entity, EntityRef::Subchannel(11));
}

#[tokio::test]
async fn channels_listing_ends_on_the_server_signal() {
    let services = serve(admin()).await;

    let output = channelz::channels(&services, Window::Exhaustive, View::Structured)
        .await
        .unwrap();
    let Output::Document(doc) = output else {
        panic!("expected a document");
    };
    assert_eq!(doc[0]["data"]["target"], TARGET);
    assert_eq!(doc.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn missing_entities_are_not_found() {
    let services = serve(admin()).await;

    let err = services.get_subchannel(11).await.unwrap_err();
    assert!(
        matches!(err, Error::NotFound(EntityRef::Subchannel(11))),
        "{err}"
    );

    let err = services.get_socket(21).await.unwrap_err();
    assert!(
        matches!(err, Error::NotFound(EntityRef::Socket(21))),
        "{err}"
    );

    let err = services.get_channel(2).await.unwrap_err();
    assert!(
        matches!(err, Error::NotFound(EntityRef::Channel(2))),
        "{err}"
    );

    let socket = services.get_socket(20).await.unwrap();
    assert_eq!(socket.r#ref.map(|r| r.socket_id), Some(20));
}

#[tokio::test]
async fn unimplemented_listing_is_unreachable() {
    let services = serve(admin()).await;

    let err = channelz::servers(&services, Window::Exhaustive, tabular())
        .await
        .unwrap_err();
    match err {
        Error::Unreachable { status, .. } => {
            assert_eq!(status.code(), tonic::Code::Unimplemented)
        }
        err => panic!("unexpected error: {err}"),
    }
}
