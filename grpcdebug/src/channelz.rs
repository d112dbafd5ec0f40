//! Channelz commands.
//!
//! Each command fetches its primary target, resolves the references its
//! report needs through a [`Resolver`], and renders the result. A failure on
//! the primary target aborts the command; children that vanished in the
//! meantime are skipped and listed in [`Report::skipped`].

use crate::decode;
use crate::error::{Error, Result};
use crate::graph::{Entity, EntityRef, Resolver, Skipped};
use crate::paging::{self, Window};
use crate::proto::channelz::{Channel, Server, Socket, Subchannel};
use crate::render::channelz::{self as tables, ServerListing};
use crate::render::{Output, Report, View};
use crate::service::Topology;
use std::convert::Infallible;
use std::str::FromStr;

/// How the `channel` command names its channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelSelector {
    Id(i64),
    /// The channel whose target is exactly this string.
    Target(String),
}

impl FromStr for ChannelSelector {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.parse() {
            Ok(id) => ChannelSelector::Id(id),
            Err(_) => ChannelSelector::Target(s.to_string()),
        })
    }
}

/// `channelz channels`
pub async fn channels<T: Topology>(topology: &T, window: Window, view: View) -> Result<Output> {
    let channels = paging::collect(window, "GetTopChannels", |start, max| {
        topology.list_channels(start, max)
    })
    .await?;
    let View::Tabular(options) = view else {
        return Output::document(&channels);
    };
    let mut report = Report::new();
    report.push(tables::channels_table(&channels, &options));
    Ok(Output::Report(report))
}

async fn find_channel<T: Topology>(topology: &T, selector: &ChannelSelector) -> Result<Channel> {
    match selector {
        ChannelSelector::Id(id) => topology.get_channel(*id).await,
        ChannelSelector::Target(target) => {
            let channels = paging::collect(Window::Exhaustive, "GetTopChannels", |start, max| {
                topology.list_channels(start, max)
            })
            .await?;
            channels
                .into_iter()
                .find(|c| c.data.as_ref().is_some_and(|d| d.target == *target))
                .ok_or_else(|| Error::TargetNotFound(target.clone()))
        }
    }
}

/// `channelz channel`: the channel, its subchannels and its trace.
pub async fn channel<T: Topology>(
    topology: &T,
    selector: &ChannelSelector,
    view: View,
) -> Result<Output> {
    let channel = find_channel(topology, selector).await?;
    let View::Tabular(options) = view else {
        return Output::document(&channel);
    };

    let mut report = Report::new();
    report.push(tables::channel_fields(&channel, &options));

    if !channel.subchannel_ref.is_empty() {
        let mut resolver = Resolver::new(topology);
        let resolution = resolver
            .resolve_refs(
                channel
                    .subchannel_ref
                    .iter()
                    .map(|r| EntityRef::Subchannel(r.subchannel_id)),
            )
            .await?;
        let subchannels: Vec<Subchannel> = resolution
            .entities
            .iter()
            .filter_map(Entity::as_subchannel)
            .cloned()
            .collect();
        report.push(tables::subchannels_table(&subchannels, &options));
        report.skipped = resolution.skipped;
    }

    let events = channel
        .data
        .as_ref()
        .and_then(|d| d.trace.as_ref())
        .map(|t| t.events.as_slice())
        .unwrap_or_default();
    if !events.is_empty() {
        report.push(tables::trace_table(events, &options));
    }
    Ok(Output::Report(report))
}

/// `channelz subchannel`: the subchannel and its sockets.
pub async fn subchannel<T: Topology>(topology: &T, id: i64, view: View) -> Result<Output> {
    let key = EntityRef::Subchannel(id);
    let mut resolver = Resolver::new(topology);
    let subchannel = resolver
        .resolve(key)
        .await?
        .as_subchannel()
        .cloned()
        .ok_or(Error::NotFound(key))?;
    let View::Tabular(options) = view else {
        return Output::document(&subchannel);
    };

    let mut report = Report::new();
    report.push(tables::subchannel_fields(&subchannel, &options));

    if !subchannel.socket_ref.is_empty() {
        let resolution = resolver.resolve_children(key).await?;
        let sockets: Vec<Socket> = resolution
            .entities
            .iter()
            .filter_map(Entity::as_socket)
            .cloned()
            .collect();
        report.push(tables::sockets_table(&sockets));
        report.skipped = resolution.skipped;
    }
    Ok(Output::Report(report))
}

/// `channelz socket`: socket details, options and security.
pub async fn socket<T: Topology>(topology: &T, id: i64, view: View) -> Result<Output> {
    let socket = topology.get_socket(id).await?;
    let View::Tabular(options) = view else {
        return Output::document(&socket);
    };

    let mut report = Report::new();
    report.push(tables::socket_fields(&socket, &options));
    let socket_options = socket
        .data
        .as_ref()
        .map(|d| d.option.as_slice())
        .unwrap_or_default();
    if !socket_options.is_empty() {
        report.push(tables::socket_options_table(socket_options));
    }
    if let Some(fields) = tables::security_fields(&socket) {
        report.push(fields);
    }
    Ok(Output::Report(report))
}

/// Resolves the listen sockets of `server` into printable addresses.
///
/// A listen address that cannot be decoded fails the whole listing.
async fn server_listing<T: Topology>(
    resolver: &mut Resolver<'_, T>,
    server: Server,
    skipped: &mut Vec<Skipped>,
) -> Result<ServerListing> {
    let refs: Vec<EntityRef> = server
        .listen_socket
        .iter()
        .map(|r| EntityRef::Socket(r.socket_id))
        .collect();
    let resolution = resolver.resolve_refs(refs).await?;
    skipped.extend(resolution.skipped);
    let listen_addresses = resolution
        .entities
        .iter()
        .filter_map(Entity::as_socket)
        .map(|s| decode::decode_optional_endpoint(s.local.as_ref()))
        .collect::<Result<Vec<_>>>()
        .map_err(|err| err.to_string());
    Ok(ServerListing {
        server,
        listen_addresses,
    })
}

/// `channelz servers`
pub async fn servers<T: Topology>(topology: &T, window: Window, view: View) -> Result<Output> {
    let servers = paging::collect(window, "GetServers", |start, max| {
        topology.list_servers(start, max)
    })
    .await?;
    let View::Tabular(options) = view else {
        return Output::document(&servers);
    };

    let mut resolver = Resolver::new(topology);
    let mut report = Report::new();
    let mut listings = Vec::with_capacity(servers.len());
    for server in servers {
        listings.push(server_listing(&mut resolver, server, &mut report.skipped).await?);
    }
    report.push(tables::servers_table(&listings, &options));
    Ok(Output::Report(report))
}

/// `channelz server`: the server and the window of its sockets.
pub async fn server<T: Topology>(
    topology: &T,
    id: i64,
    window: Window,
    view: View,
) -> Result<Output> {
    let server = topology.get_server(id).await?;
    let View::Tabular(options) = view else {
        return Output::document(&server);
    };

    let mut resolver = Resolver::new(topology);
    let mut report = Report::new();
    let listing = server_listing(&mut resolver, server, &mut report.skipped).await?;
    report.push(tables::server_fields(&listing, &options));

    let socket_refs = paging::collect(window, "GetServerSockets", |start, max| {
        topology.list_server_sockets(id, start, max)
    })
    .await?;
    if !socket_refs.is_empty() {
        let resolution = resolver
            .resolve_refs(socket_refs.iter().map(|r| EntityRef::Socket(r.socket_id)))
            .await?;
        let sockets: Vec<Socket> = resolution
            .entities
            .iter()
            .filter_map(Entity::as_socket)
            .cloned()
            .collect();
        report.push(tables::sockets_table(&sockets));
        report.skipped.extend(resolution.skipped);
    }
    Ok(Output::Report(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::channelz::{
        Address, ChannelRef, ChannelTraceEvent, Security, SocketOption, SubchannelRef, security,
    };
    use crate::render::{Block, Field, RenderOptions, Row, TimeFormat};
    use crate::testutil::{self as fixture, FakeTopology};

    fn tabular() -> View {
        View::Tabular(RenderOptions::new(TimeFormat::Rfc3339))
    }

    fn report(output: Output) -> Report {
        match output {
            Output::Report(report) => report,
            Output::Document(doc) => panic!("expected a report, got {doc}"),
        }
    }

    fn table(block: &Block) -> &crate::render::Table {
        match block {
            Block::Table(table) => table,
            Block::Fields(fields) => panic!("expected a table, got {fields:?}"),
        }
    }

    #[test]
    fn selectors() {
        assert_eq!("42".parse::<ChannelSelector>(), Ok(ChannelSelector::Id(42)));
        assert_eq!(
            "dns:///foo:443".parse::<ChannelSelector>(),
            Ok(ChannelSelector::Target("dns:///foo:443".to_string()))
        );
    }

    #[tokio::test]
    async fn channels_listing() {
        let topology = FakeTopology::default()
            .with_page_size(1)
            .with_channel(fixture::channel(1, "dns:///a", &[]))
            .with_channel(fixture::channel(2, "dns:///b", &[]));
        let output = channels(&topology, Window::Exhaustive, tabular())
            .await
            .unwrap();
        let rendered = report(output);
        assert_eq!(rendered.blocks.len(), 1);
        assert_eq!(table(&rendered.blocks[0]).rows.len(), 2);
    }

    #[tokio::test]
    async fn missing_subchannel_is_skipped() {
        let topology = FakeTopology::default()
            .with_channel(fixture::channel(1, "dns:///foo", &[10, 11]))
            .with_subchannel(fixture::subchannel(10, "10.0.0.1:443", &[]));

        let rendered = report(
            channel(&topology, &ChannelSelector::Id(1), tabular())
                .await
                .unwrap(),
        );

        assert_eq!(rendered.blocks.len(), 2);
        let subchannels = table(&rendered.blocks[1]);
        assert_eq!(subchannels.rows.len(), 1);
        assert_eq!(rendered.skipped.len(), 1);
        assert_eq!(rendered.skipped[0].entity, EntityRef::Subchannel(11));
    }

    #[tokio::test]
    async fn channel_by_target() {
        let mut traced = fixture::channel(7, "dns:///bar", &[]);
        if let Some(trace) = traced.data.as_mut().and_then(|d| d.trace.as_mut()) {
            trace.events.push(ChannelTraceEvent {
                description: "Channel created".into(),
                severity: 1,
                timestamp: None,
                child_ref: None,
            });
        }
        let topology = FakeTopology::default()
            .with_channel(fixture::channel(1, "dns:///foo", &[]))
            .with_channel(traced);

        let selector: ChannelSelector = "dns:///bar".parse().unwrap();
        let rendered = report(channel(&topology, &selector, tabular()).await.unwrap());

        let Block::Fields(fields) = &rendered.blocks[0] else {
            panic!("expected fields first");
        };
        assert_eq!(fields[0], Field::new("Channel ID", 7));
        assert_eq!(table(&rendered.blocks[1]).header[0], "Severity");
        assert_eq!(topology.calls(), vec!["GetTopChannels(0, 0)".to_string()]);
    }

    #[tokio::test]
    async fn unknown_target_and_id() {
        let topology = FakeTopology::default().with_channel(fixture::channel(1, "dns:///foo", &[]));

        let selector = ChannelSelector::Target("dns:///nope".into());
        let err = channel(&topology, &selector, tabular()).await.unwrap_err();
        assert!(matches!(err, Error::TargetNotFound(ref t) if t == "dns:///nope"));

        let err = channel(&topology, &ChannelSelector::Id(9), tabular())
            .await
            .unwrap_err();
        assert!(err.is_not_found(), "{err}");
    }

    #[tokio::test]
    async fn structured_view_is_the_entity() {
        let topology = FakeTopology::default()
            .with_channel(fixture::channel(1, "dns:///foo", &[10]));
        let output = channel(&topology, &ChannelSelector::Id(1), View::Structured)
            .await
            .unwrap();
        let again = channel(&topology, &ChannelSelector::Id(1), View::Structured)
            .await
            .unwrap();
        let Output::Document(doc) = &output else {
            panic!("expected a document");
        };
        assert_eq!(doc["data"]["target"], "dns:///foo");
        assert_eq!(output, again);
        // Children are not resolved for a structured dump.
        assert_eq!(
            topology.calls(),
            vec!["GetChannel(1)".to_string(), "GetChannel(1)".to_string()]
        );
    }

    #[tokio::test]
    async fn subchannel_sockets() {
        let topology = FakeTopology::default()
            .with_subchannel(fixture::subchannel(10, "10.0.0.1:443", &[20, 21]))
            .with_socket(fixture::socket(20, [10, 0, 0, 1], 443));

        let rendered = report(subchannel(&topology, 10, tabular()).await.unwrap());
        assert_eq!(table(&rendered.blocks[1]).rows.len(), 1);
        assert_eq!(rendered.skipped[0].entity, EntityRef::Socket(21));
    }

    #[tokio::test]
    async fn subchannel_resolves_only_its_sockets() {
        let mut sub = fixture::subchannel(10, "10.0.0.1:443", &[20]);
        sub.subchannel_ref.push(SubchannelRef {
            subchannel_id: 11,
            name: String::new(),
        });
        sub.channel_ref.push(ChannelRef {
            channel_id: 2,
            name: String::new(),
        });
        let topology = FakeTopology::default()
            .with_subchannel(sub)
            .with_socket(fixture::socket(20, [10, 0, 0, 1], 443));

        let rendered = report(subchannel(&topology, 10, tabular()).await.unwrap());
        assert!(rendered.skipped.is_empty());
        assert_eq!(
            topology.calls(),
            vec!["GetSubchannel(10)".to_string(), "GetSocket(20)".to_string()]
        );
    }

    #[tokio::test]
    async fn socket_blocks() {
        let mut s = fixture::socket(30, [127, 0, 0, 1], 50051);
        if let Some(data) = s.data.as_mut() {
            data.option.push(SocketOption {
                name: "SO_REUSEADDR".into(),
                value: "1".into(),
                additional: None,
            });
        }
        s.security = Some(Security {
            model: Some(security::Model::Other(security::OtherSecurity {
                name: "alts".into(),
                value: None,
            })),
        });
        let topology = FakeTopology::default().with_socket(s);

        let rendered = report(socket(&topology, 30, tabular()).await.unwrap());
        assert_eq!(rendered.blocks.len(), 3);
        assert_eq!(
            table(&rendered.blocks[1]).rows,
            vec![Row::Cells(vec!["SO_REUSEADDR".into(), "1".into()])]
        );
        assert_eq!(
            rendered.blocks[2],
            Block::Fields(vec![
                Field::new("Security Model", "Other"),
                Field::new("Name", "alts"),
            ])
        );
    }

    #[tokio::test]
    async fn broken_socket_fails_one_row_of_server() {
        let mut broken = fixture::socket(22, [127, 0, 0, 1], 50051);
        broken.remote = Some(Address::default());
        let topology = FakeTopology::default()
            .with_server(fixture::server(1, &[20]))
            .with_socket(fixture::socket(20, [0, 0, 0, 0], 50051))
            .with_socket(fixture::socket(21, [127, 0, 0, 1], 50051))
            .with_socket(broken)
            .with_server_sockets(1, &[20, 21, 22]);

        let rendered = report(
            server(&topology, 1, Window::Exhaustive, tabular())
                .await
                .unwrap(),
        );

        let Block::Fields(fields) = &rendered.blocks[0] else {
            panic!("expected fields first");
        };
        assert_eq!(fields[1], Field::new("Listen Addresses", "[0.0.0.0:50051]"));
        let sockets = table(&rendered.blocks[1]);
        assert_eq!(sockets.rows.len(), 3);
        assert!(matches!(&sockets.rows[0], Row::Cells(_)));
        assert!(matches!(&sockets.rows[1], Row::Cells(_)));
        assert!(matches!(&sockets.rows[2], Row::Failed { id, .. } if id == "22"));
        assert_eq!(
            topology.calls(),
            vec![
                "GetServer(1)".to_string(),
                "GetSocket(20)".to_string(),
                "GetServerSockets(1, 0, 0)".to_string(),
                "GetSocket(21)".to_string(),
                "GetSocket(22)".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn servers_listing() {
        let topology = FakeTopology::default()
            .with_server(fixture::server(1, &[20, 29]))
            .with_server(fixture::server(2, &[]))
            .with_socket(fixture::socket(20, [0, 0, 0, 0], 50051));

        let rendered = report(
            servers(&topology, Window::from_bounds(None, Some(10)), tabular())
                .await
                .unwrap(),
        );
        let listing = table(&rendered.blocks[0]);
        assert_eq!(
            listing.rows[0],
            Row::Cells(vec![
                "1".into(),
                "[0.0.0.0:50051]".into(),
                "3/2/1".into(),
                "2021-01-01T00:00:00Z".into(),
            ])
        );
        assert_eq!(listing.rows.len(), 2);
        assert_eq!(rendered.skipped[0].entity, EntityRef::Socket(29));
        assert_eq!(topology.calls()[0], "GetServers(0, 10)");
    }

    #[tokio::test]
    async fn unreachable_listen_socket_aborts() {
        let topology = FakeTopology::default()
            .with_server(fixture::server(1, &[20]))
            .with_socket(fixture::socket(20, [0, 0, 0, 0], 50051))
            .failing_on(EntityRef::Socket(20));
        let err = servers(&topology, Window::Exhaustive, tabular())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Unreachable { .. }), "{err}");
    }
}
