//! In-memory fakes of the remote services for unit tests.

use crate::error::{Error, Result};
use crate::graph::EntityRef;
use crate::health::ServingStatus;
use crate::proto::channelz::{
    Address, Channel, ChannelConnectivityState, ChannelData, ChannelRef, ChannelTrace, Server,
    ServerData, ServerRef, Socket, SocketData, SocketRef, Subchannel, SubchannelRef, address,
};
use crate::service::{ConfigStatus, HealthCheck, Page, Topology};
use crate::xds::ClientStatusSnapshot;
use prost_types::Timestamp;
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

/// 2021-01-01T00:00:00Z
pub(crate) const CREATED: Timestamp = Timestamp {
    seconds: 1_609_459_200,
    nanos: 0,
};

pub(crate) fn tcp(ip: [u8; 4], port: i32) -> Address {
    Address {
        address: Some(address::Address::TcpipAddress(address::TcpIpAddress {
            ip_address: ip.to_vec(),
            port,
        })),
    }
}

fn channel_data(target: &str) -> ChannelData {
    ChannelData {
        state: Some(ChannelConnectivityState { state: 3 }),
        target: target.to_string(),
        trace: Some(ChannelTrace {
            num_events_logged: 0,
            creation_timestamp: Some(CREATED),
            events: vec![],
        }),
        calls_started: 10,
        calls_succeeded: 8,
        calls_failed: 2,
        last_call_started_timestamp: None,
    }
}

pub(crate) fn channel(id: i64, target: &str, subchannels: &[i64]) -> Channel {
    Channel {
        r#ref: Some(ChannelRef {
            channel_id: id,
            name: String::new(),
        }),
        data: Some(channel_data(target)),
        channel_ref: vec![],
        subchannel_ref: subchannels
            .iter()
            .map(|&subchannel_id| SubchannelRef {
                subchannel_id,
                name: String::new(),
            })
            .collect(),
        socket_ref: vec![],
    }
}

pub(crate) fn subchannel(id: i64, target: &str, sockets: &[i64]) -> Subchannel {
    Subchannel {
        r#ref: Some(SubchannelRef {
            subchannel_id: id,
            name: String::new(),
        }),
        data: Some(channel_data(target)),
        channel_ref: vec![],
        subchannel_ref: vec![],
        socket_ref: sockets
            .iter()
            .map(|&socket_id| SocketRef {
                socket_id,
                name: String::new(),
            })
            .collect(),
    }
}

/// A connected socket from `ip:port` to `10.0.0.100:54321`.
pub(crate) fn socket(id: i64, ip: [u8; 4], port: i32) -> Socket {
    Socket {
        r#ref: Some(SocketRef {
            socket_id: id,
            name: String::new(),
        }),
        data: Some(SocketData {
            streams_started: 6,
            streams_succeeded: 5,
            streams_failed: 1,
            messages_sent: 12,
            messages_received: 11,
            ..Default::default()
        }),
        local: Some(tcp(ip, port)),
        remote: Some(tcp([10, 0, 0, 100], 54321)),
        security: None,
        remote_name: String::new(),
    }
}

pub(crate) fn server(id: i64, listen_sockets: &[i64]) -> Server {
    Server {
        r#ref: Some(ServerRef {
            server_id: id,
            name: String::new(),
        }),
        data: Some(ServerData {
            trace: None,
            calls_started: 3,
            calls_succeeded: 2,
            calls_failed: 1,
            last_call_started_timestamp: Some(CREATED),
        }),
        listen_socket: listen_sockets
            .iter()
            .map(|&socket_id| SocketRef {
                socket_id,
                name: String::new(),
            })
            .collect(),
    }
}

/// A channelz [`Topology`] over fixed maps, recording every call.
#[derive(Debug, Default)]
pub(crate) struct FakeTopology {
    channels: BTreeMap<i64, Channel>,
    subchannels: BTreeMap<i64, Subchannel>,
    servers: BTreeMap<i64, Server>,
    sockets: BTreeMap<i64, Socket>,
    server_sockets: BTreeMap<i64, Vec<i64>>,
    failing: Vec<EntityRef>,
    page_size: Option<usize>,
    calls: Mutex<Vec<String>>,
}

impl FakeTopology {
    pub(crate) fn with_channel(mut self, channel: Channel) -> Self {
        let id = channel.r#ref.as_ref().map_or(0, |r| r.channel_id);
        self.channels.insert(id, channel);
        self
    }

    pub(crate) fn with_subchannel(mut self, subchannel: Subchannel) -> Self {
        let id = subchannel.r#ref.as_ref().map_or(0, |r| r.subchannel_id);
        self.subchannels.insert(id, subchannel);
        self
    }

    pub(crate) fn with_server(mut self, server: Server) -> Self {
        let id = server.r#ref.as_ref().map_or(0, |r| r.server_id);
        self.servers.insert(id, server);
        self
    }

    pub(crate) fn with_socket(mut self, socket: Socket) -> Self {
        let id = socket.r#ref.as_ref().map_or(0, |r| r.socket_id);
        self.sockets.insert(id, socket);
        self
    }

    pub(crate) fn with_server_sockets(mut self, server_id: i64, sockets: &[i64]) -> Self {
        self.server_sockets.insert(server_id, sockets.to_vec());
        self
    }

    /// Point lookups of `key` fail with `UNAVAILABLE`.
    pub(crate) fn failing_on(mut self, key: EntityRef) -> Self {
        self.failing.push(key);
        self
    }

    /// Page size used when a listing asks for `max_results = 0`.
    pub(crate) fn with_page_size(mut self, size: usize) -> Self {
        self.page_size = Some(size);
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn page<T: Clone>(&self, items: &BTreeMap<i64, T>, start_id: i64, max_results: i64) -> Page<T> {
        let limit = match usize::try_from(max_results) {
            Ok(0) | Err(_) => self.page_size.unwrap_or(usize::MAX),
            Ok(n) => n,
        };
        let matching: Vec<T> = items.range(start_id..).map(|(_, v)| v.clone()).collect();
        let end = matching.len() <= limit;
        Page {
            items: matching.into_iter().take(limit).collect(),
            end,
        }
    }

    fn lookup<T: Clone>(&self, items: &BTreeMap<i64, T>, key: EntityRef) -> Result<T> {
        if self.failing.contains(&key) {
            return Err(Error::Unreachable {
                operation: format!("get {key}"),
                status: tonic::Status::unavailable("connection reset"),
            });
        }
        items.get(&key.id()).cloned().ok_or(Error::NotFound(key))
    }
}

impl Topology for FakeTopology {
    async fn list_channels(&self, start_id: i64, max_results: i64) -> Result<Page<Channel>> {
        self.record(format!("GetTopChannels({start_id}, {max_results})"));
        Ok(self.page(&self.channels, start_id, max_results))
    }

    async fn get_channel(&self, id: i64) -> Result<Channel> {
        self.record(format!("GetChannel({id})"));
        self.lookup(&self.channels, EntityRef::Channel(id))
    }

    async fn get_subchannel(&self, id: i64) -> Result<Subchannel> {
        self.record(format!("GetSubchannel({id})"));
        self.lookup(&self.subchannels, EntityRef::Subchannel(id))
    }

    async fn list_servers(&self, start_id: i64, max_results: i64) -> Result<Page<Server>> {
        self.record(format!("GetServers({start_id}, {max_results})"));
        Ok(self.page(&self.servers, start_id, max_results))
    }

    async fn get_server(&self, id: i64) -> Result<Server> {
        self.record(format!("GetServer({id})"));
        self.lookup(&self.servers, EntityRef::Server(id))
    }

    async fn get_socket(&self, id: i64) -> Result<Socket> {
        self.record(format!("GetSocket({id})"));
        self.lookup(&self.sockets, EntityRef::Socket(id))
    }

    async fn list_server_sockets(
        &self,
        server_id: i64,
        start_id: i64,
        max_results: i64,
    ) -> Result<Page<SocketRef>> {
        self.record(format!(
            "GetServerSockets({server_id}, {start_id}, {max_results})"
        ));
        let refs: BTreeMap<i64, SocketRef> = self
            .server_sockets
            .get(&server_id)
            .into_iter()
            .flatten()
            .map(|&socket_id| {
                (
                    socket_id,
                    SocketRef {
                        socket_id,
                        name: String::new(),
                    },
                )
            })
            .collect();
        Ok(self.page(&refs, start_id, max_results))
    }
}

/// A health service answering from a fixed map. Unlisted services fail.
#[derive(Debug, Default)]
pub(crate) struct FakeHealth {
    statuses: HashMap<String, ServingStatus>,
    calls: Mutex<Vec<String>>,
}

impl FakeHealth {
    pub(crate) fn with_status(mut self, service: &str, status: ServingStatus) -> Self {
        self.statuses.insert(service.to_string(), status);
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl HealthCheck for FakeHealth {
    async fn check(&self, service: &str) -> Result<ServingStatus> {
        self.calls.lock().unwrap().push(service.to_string());
        self.statuses
            .get(service)
            .copied()
            .ok_or_else(|| Error::Unreachable {
                operation: format!("Check({service:?})"),
                status: tonic::Status::not_found("unknown service"),
            })
    }
}

/// A CSDS service returning a fixed snapshot.
#[derive(Debug, Default)]
pub(crate) struct FakeConfigStatus {
    pub(crate) snapshot: ClientStatusSnapshot,
}

impl ConfigStatus for FakeConfigStatus {
    async fn fetch_snapshot(&self) -> Result<ClientStatusSnapshot> {
        Ok(self.snapshot.clone())
    }
}
