//! `tonic` backed implementation of the service traits.
//!
//! All three services share one [`Channel`]. Every call carries its own
//! deadline, both as the `grpc-timeout` header and as a local timer, so a
//! paged listing gets a fresh budget per page.

use crate::error::{Error, Result};
use crate::graph::EntityRef;
use crate::health::ServingStatus;
use crate::proto::channelz as pb;
use crate::proto::channelz::channelz_client::ChannelzClient;
use crate::service::{ConfigStatus, HealthCheck, Page, Topology};
use crate::xds::ClientStatusSnapshot;
use envoy_types::pb::envoy::service::status::v3::{ClientStatusRequest, ClientStatusResponse};
use http::uri::PathAndQuery;
use std::future::Future;
use std::time::Duration;
use tonic::client::Grpc;
use tonic::transport::Channel;
use tonic::{Request, Response, Status};
use tonic_health::pb::HealthCheckRequest;
use tonic_health::pb::health_client::HealthClient;

/// The gRPC path for the CSDS FetchClientStatus RPC.
const CSDS_PATH: &str = "/envoy.service.status.v3.ClientStatusDiscoveryService/FetchClientStatus";

/// Deadline applied to every RPC.
pub const DEFAULT_RPC_TIMEOUT: Duration = Duration::from_secs(15);

/// Channelz, health and CSDS clients over one tonic [`Channel`].
#[derive(Clone, Debug)]
pub struct TonicServices {
    channel: Channel,
    rpc_timeout: Duration,
}

impl TonicServices {
    /// Create the services from an established [`Channel`].
    ///
    /// See [`transport::connect`](crate::transport::connect) for building one
    /// from a target descriptor.
    pub fn from_channel(channel: Channel) -> Self {
        Self {
            channel,
            rpc_timeout: DEFAULT_RPC_TIMEOUT,
        }
    }

    /// Set the per-call deadline.
    pub fn with_rpc_timeout(mut self, timeout: Duration) -> Self {
        self.rpc_timeout = timeout;
        self
    }

    fn channelz(&self) -> ChannelzClient<Channel> {
        ChannelzClient::new(self.channel.clone())
    }

    fn request<T>(&self, message: T) -> Request<T> {
        let mut request = Request::new(message);
        request.set_timeout(self.rpc_timeout);
        request
    }

    async fn call<T, F>(&self, operation: String, entity: Option<EntityRef>, call: F) -> Result<T>
    where
        F: Future<Output = std::result::Result<Response<T>, Status>>,
    {
        tracing::debug!(%operation, "calling");
        match tokio::time::timeout(self.rpc_timeout, call).await {
            Ok(Ok(response)) => Ok(response.into_inner()),
            Ok(Err(status)) => Err(Error::from_status(
                operation,
                entity,
                self.rpc_timeout,
                status,
            )),
            Err(_) => Err(Error::Timeout {
                operation,
                timeout: self.rpc_timeout,
            }),
        }
    }
}

impl Topology for TonicServices {
    async fn list_channels(&self, start_id: i64, max_results: i64) -> Result<Page<pb::Channel>> {
        let mut client = self.channelz();
        let request = self.request(pb::GetTopChannelsRequest {
            start_channel_id: start_id,
            max_results,
        });
        let response = self
            .call(
                format!("GetTopChannels(start_id={start_id})"),
                None,
                client.get_top_channels(request),
            )
            .await?;
        Ok(Page {
            items: response.channel,
            end: response.end,
        })
    }

    async fn get_channel(&self, id: i64) -> Result<pb::Channel> {
        let key = EntityRef::Channel(id);
        let mut client = self.channelz();
        let request = self.request(pb::GetChannelRequest { channel_id: id });
        let response = self
            .call(
                format!("GetChannel({id})"),
                Some(key),
                client.get_channel(request),
            )
            .await?;
        response.channel.ok_or(Error::NotFound(key))
    }

    async fn get_subchannel(&self, id: i64) -> Result<pb::Subchannel> {
        let key = EntityRef::Subchannel(id);
        let mut client = self.channelz();
        let request = self.request(pb::GetSubchannelRequest { subchannel_id: id });
        let response = self
            .call(
                format!("GetSubchannel({id})"),
                Some(key),
                client.get_subchannel(request),
            )
            .await?;
        response.subchannel.ok_or(Error::NotFound(key))
    }

    async fn list_servers(&self, start_id: i64, max_results: i64) -> Result<Page<pb::Server>> {
        let mut client = self.channelz();
        let request = self.request(pb::GetServersRequest {
            start_server_id: start_id,
            max_results,
        });
        let response = self
            .call(
                format!("GetServers(start_id={start_id})"),
                None,
                client.get_servers(request),
            )
            .await?;
        Ok(Page {
            items: response.server,
            end: response.end,
        })
    }

    async fn get_server(&self, id: i64) -> Result<pb::Server> {
        let key = EntityRef::Server(id);
        let mut client = self.channelz();
        let request = self.request(pb::GetServerRequest { server_id: id });
        let response = self
            .call(
                format!("GetServer({id})"),
                Some(key),
                client.get_server(request),
            )
            .await?;
        response.server.ok_or(Error::NotFound(key))
    }

    async fn get_socket(&self, id: i64) -> Result<pb::Socket> {
        let key = EntityRef::Socket(id);
        let mut client = self.channelz();
        let request = self.request(pb::GetSocketRequest {
            socket_id: id,
            summary: false,
        });
        let response = self
            .call(
                format!("GetSocket({id})"),
                Some(key),
                client.get_socket(request),
            )
            .await?;
        response.socket.ok_or(Error::NotFound(key))
    }

    async fn list_server_sockets(
        &self,
        server_id: i64,
        start_id: i64,
        max_results: i64,
    ) -> Result<Page<pb::SocketRef>> {
        let mut client = self.channelz();
        let request = self.request(pb::GetServerSocketsRequest {
            server_id,
            start_socket_id: start_id,
            max_results,
        });
        let response = self
            .call(
                format!("GetServerSockets({server_id}, start_id={start_id})"),
                Some(EntityRef::Server(server_id)),
                client.get_server_sockets(request),
            )
            .await?;
        Ok(Page {
            items: response.socket_ref,
            end: response.end,
        })
    }
}

impl HealthCheck for TonicServices {
    async fn check(&self, service: &str) -> Result<ServingStatus> {
        let mut client = HealthClient::new(self.channel.clone());
        let request = self.request(HealthCheckRequest {
            service: service.to_string(),
        });
        let response = self
            .call(format!("Check({service:?})"), None, client.check(request))
            .await?;
        Ok(ServingStatus::from_proto(response.status))
    }
}

impl ConfigStatus for TonicServices {
    async fn fetch_snapshot(&self) -> Result<ClientStatusSnapshot> {
        let mut grpc = Grpc::new(self.channel.clone());
        let request = self.request(ClientStatusRequest::default());
        let response = self
            .call("FetchClientStatus".to_string(), None, async move {
                grpc.ready()
                    .await
                    .map_err(|e| Status::unavailable(format!("Service was not ready: {e}")))?;
                grpc.unary(
                    request,
                    PathAndQuery::from_static(CSDS_PATH),
                    tonic_prost::ProstCodec::<ClientStatusRequest, ClientStatusResponse>::default(),
                )
                .await
            })
            .await?;
        Ok(ClientStatusSnapshot::from_response(response))
    }
}
