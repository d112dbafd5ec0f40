//! The remote services grpcdebug talks to.
//!
//! Commands are written against these traits so they can run over a tonic
//! channel or an in-memory fake:
//! - [`Topology`]: channelz, paged listings and point lookups by id
//! - [`HealthCheck`]: the standard health checking service
//! - [`ConfigStatus`]: the xDS client status discovery service

use crate::error::Result;
use crate::health::ServingStatus;
use crate::proto::channelz::{Channel, Server, Socket, SocketRef, Subchannel};
use crate::xds::ClientStatusSnapshot;
use std::future::Future;

pub mod tonic;

/// One page of a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items in the order the server returned them.
    pub items: Vec<T>,
    /// Set when the server says there is nothing after this page.
    pub end: bool,
}

/// Channelz queries.
///
/// Point lookups fail with [`Error::NotFound`](crate::Error::NotFound) for
/// unknown identifiers. A `max_results` of zero lets the server pick the page
/// size.
pub trait Topology: Send + Sync {
    /// Lists top level channels with ids at or above `start_id`.
    fn list_channels(
        &self,
        start_id: i64,
        max_results: i64,
    ) -> impl Future<Output = Result<Page<Channel>>> + Send;

    fn get_channel(&self, id: i64) -> impl Future<Output = Result<Channel>> + Send;

    fn get_subchannel(&self, id: i64) -> impl Future<Output = Result<Subchannel>> + Send;

    /// Lists servers with ids at or above `start_id`.
    fn list_servers(
        &self,
        start_id: i64,
        max_results: i64,
    ) -> impl Future<Output = Result<Page<Server>>> + Send;

    fn get_server(&self, id: i64) -> impl Future<Output = Result<Server>> + Send;

    fn get_socket(&self, id: i64) -> impl Future<Output = Result<Socket>> + Send;

    /// Lists the sockets accepted by `server_id` with ids at or above `start_id`.
    fn list_server_sockets(
        &self,
        server_id: i64,
        start_id: i64,
        max_results: i64,
    ) -> impl Future<Output = Result<Page<SocketRef>>> + Send;
}

/// Health checking.
pub trait HealthCheck: Send + Sync {
    /// Checks one service. The empty name is the server as a whole.
    fn check(&self, service: &str) -> impl Future<Output = Result<ServingStatus>> + Send;
}

/// Client status discovery.
pub trait ConfigStatus: Send + Sync {
    /// Fetches the xDS configuration currently applied by the target's clients.
    fn fetch_snapshot(&self) -> impl Future<Output = Result<ClientStatusSnapshot>> + Send;
}
