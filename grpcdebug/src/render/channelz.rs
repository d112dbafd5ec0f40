//! Tables and field lists for channelz entities.

use super::{Field, RenderOptions, Row, Table, counters};
use crate::decode;
use crate::error::Result;
use crate::proto::channelz::{
    Channel, ChannelData, ChannelTraceEvent, Server, Socket, SocketOption, Subchannel,
};

const TARGET_WIDTH: usize = 50;

fn created(data: &ChannelData, options: &RenderOptions) -> String {
    options.pretty_time(
        data.trace
            .as_ref()
            .and_then(|t| t.creation_timestamp.as_ref()),
    )
}

fn truncate(s: &str, width: usize) -> String {
    s.chars().take(width).collect()
}

/// `local->remote`.
pub fn address_pair(socket: &Socket) -> Result<String> {
    Ok(format!(
        "{}->{}",
        decode::decode_optional_endpoint(socket.local.as_ref())?,
        decode::decode_optional_endpoint(socket.remote.as_ref())?
    ))
}

/// Listen addresses the way a list of them is printed: `[a b]`.
pub fn address_list(addresses: &[String]) -> String {
    format!("[{}]", addresses.join(" "))
}

pub fn channels_table(channels: &[Channel], options: &RenderOptions) -> Table {
    let mut table = Table::new(vec![
        "Channel ID",
        "Target",
        "State",
        "Calls(Started/Succeeded/Failed)",
        "Created Time",
    ]);
    for channel in channels {
        let (Some(r), Some(data)) = (&channel.r#ref, &channel.data) else {
            tracing::debug!(?channel, "skipping channel without ref or data");
            continue;
        };
        table.rows.push(Row::Cells(vec![
            r.channel_id.to_string(),
            data.target.clone(),
            decode::connectivity_state(data).to_string(),
            counters(&[data.calls_started, data.calls_succeeded, data.calls_failed]),
            created(data, options),
        ]));
    }
    table
}

pub fn subchannels_table(subchannels: &[Subchannel], options: &RenderOptions) -> Table {
    let mut table = Table::new(vec![
        "Subchannel ID",
        "Target",
        "State",
        "Calls(Started/Succeeded/Failed)",
        "Created Time",
    ]);
    for subchannel in subchannels {
        let (Some(r), Some(data)) = (&subchannel.r#ref, &subchannel.data) else {
            tracing::debug!(?subchannel, "skipping subchannel without ref or data");
            continue;
        };
        table.rows.push(Row::Cells(vec![
            r.subchannel_id.to_string(),
            truncate(&data.target, TARGET_WIDTH),
            decode::connectivity_state(data).to_string(),
            counters(&[data.calls_started, data.calls_succeeded, data.calls_failed]),
            created(data, options),
        ]));
    }
    table
}

fn channel_like_fields(
    id_label: &str,
    id: Option<i64>,
    data: Option<&ChannelData>,
    options: &RenderOptions,
) -> Vec<Field> {
    let default = ChannelData::default();
    let data = data.unwrap_or(&default);
    vec![
        Field::new(id_label, id.unwrap_or_default()),
        Field::new("Target", &data.target),
        Field::new("State", decode::connectivity_state(data)),
        Field::new("Calls Started", data.calls_started),
        Field::new("Calls Succeeded", data.calls_succeeded),
        Field::new("Calls Failed", data.calls_failed),
        Field::new("Created Time", created(data, options)),
    ]
}

pub fn channel_fields(channel: &Channel, options: &RenderOptions) -> Vec<Field> {
    channel_like_fields(
        "Channel ID",
        channel.r#ref.as_ref().map(|r| r.channel_id),
        channel.data.as_ref(),
        options,
    )
}

pub fn subchannel_fields(subchannel: &Subchannel, options: &RenderOptions) -> Vec<Field> {
    channel_like_fields(
        "Subchannel ID",
        subchannel.r#ref.as_ref().map(|r| r.subchannel_id),
        subchannel.data.as_ref(),
        options,
    )
}

pub fn trace_table(events: &[ChannelTraceEvent], options: &RenderOptions) -> Table {
    let mut table = Table::new(vec!["Severity", "Time", "Child Ref", "Description"]);
    table.rows = events
        .iter()
        .map(|event| {
            Row::Cells(vec![
                decode::severity(event.severity).to_string(),
                options.pretty_time(event.timestamp.as_ref()),
                decode::child_ref(event.child_ref.as_ref()),
                event.description.clone(),
            ])
        })
        .collect();
    table
}

/// One row per socket. A socket whose addresses cannot be decoded becomes a
/// failed row.
pub fn sockets_table(sockets: &[Socket]) -> Table {
    let mut table = Table::new(vec![
        "Socket ID",
        "Local->Remote",
        "Streams(Started/Succeeded/Failed)",
        "Messages(Sent/Received)",
    ]);
    for socket in sockets {
        let (Some(r), Some(data)) = (&socket.r#ref, &socket.data) else {
            tracing::debug!(?socket, "skipping socket without ref or data");
            continue;
        };
        let row = match address_pair(socket) {
            Ok(addresses) => Row::Cells(vec![
                r.socket_id.to_string(),
                addresses,
                counters(&[
                    data.streams_started,
                    data.streams_succeeded,
                    data.streams_failed,
                ]),
                counters(&[data.messages_sent, data.messages_received]),
            ]),
            Err(err) => {
                tracing::warn!(socket_id = r.socket_id, "cannot render socket: {err}");
                Row::Failed {
                    id: r.socket_id.to_string(),
                    reason: err.to_string(),
                }
            }
        };
        table.rows.push(row);
    }
    table
}

pub fn socket_fields(socket: &Socket, options: &RenderOptions) -> Vec<Field> {
    let data = socket.data.clone().unwrap_or_default();
    let address = address_pair(socket).unwrap_or_else(|err| {
        tracing::warn!("cannot render socket address: {err}");
        format!("error: {err}")
    });
    vec![
        Field::new(
            "Socket ID",
            socket.r#ref.as_ref().map_or(0, |r| r.socket_id),
        ),
        Field::new("Address", address),
        Field::new("Streams Started", data.streams_started),
        Field::new("Streams Succeeded", data.streams_succeeded),
        Field::new("Streams Failed", data.streams_failed),
        Field::new("Messages Sent", data.messages_sent),
        Field::new("Messages Received", data.messages_received),
        Field::new("Keep Alives Sent", data.keep_alives_sent),
        Field::new(
            "Last Local Stream Created",
            options.pretty_time(data.last_local_stream_created_timestamp.as_ref()),
        ),
        Field::new(
            "Last Remote Stream Created",
            options.pretty_time(data.last_remote_stream_created_timestamp.as_ref()),
        ),
        Field::new(
            "Last Message Sent",
            options.pretty_time(data.last_message_sent_timestamp.as_ref()),
        ),
        Field::new(
            "Last Message Received",
            options.pretty_time(data.last_message_received_timestamp.as_ref()),
        ),
        Field::new(
            "Local Flow Control Window",
            data.local_flow_control_window.unwrap_or_default(),
        ),
        Field::new(
            "Remote Flow Control Window",
            data.remote_flow_control_window.unwrap_or_default(),
        ),
    ]
}

pub fn socket_options_table(socket_options: &[SocketOption]) -> Table {
    let mut table = Table::new(vec!["Socket Option Name", "Value"]);
    table.rows = socket_options
        .iter()
        .map(|o| Row::Cells(vec![o.name.clone(), decode::decode_socket_option(o)]))
        .collect();
    table
}

/// Security details of a socket, if it has any.
pub fn security_fields(socket: &Socket) -> Option<Vec<Field>> {
    let security = socket.security.as_ref()?;
    Some(match decode::decode_security(security) {
        Ok(view) => std::iter::once(Field::new("Security Model", view.model_name))
            .chain(view.detail.into_iter().map(|(l, v)| Field::new(l, v)))
            .collect(),
        Err(err) => {
            tracing::warn!("cannot render socket security: {err}");
            vec![Field::new("Security Model", format!("error: {err}"))]
        }
    })
}

/// A server together with its resolved listen addresses.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerListing {
    pub server: Server,
    pub listen_addresses: std::result::Result<Vec<String>, String>,
}

pub fn servers_table(servers: &[ServerListing], options: &RenderOptions) -> Table {
    let mut table = Table::new(vec![
        "Server ID",
        "Listen Addresses",
        "Calls(Started/Succeeded/Failed)",
        "Last Call Started",
    ]);
    for listing in servers {
        let server = &listing.server;
        let id = server.r#ref.as_ref().map_or(0, |r| r.server_id).to_string();
        let row = match &listing.listen_addresses {
            Ok(addresses) => {
                let data = server.data.clone().unwrap_or_default();
                Row::Cells(vec![
                    id,
                    address_list(addresses),
                    counters(&[data.calls_started, data.calls_succeeded, data.calls_failed]),
                    options.pretty_time(data.last_call_started_timestamp.as_ref()),
                ])
            }
            Err(reason) => Row::Failed {
                id,
                reason: reason.clone(),
            },
        };
        table.rows.push(row);
    }
    table
}

pub fn server_fields(listing: &ServerListing, options: &RenderOptions) -> Vec<Field> {
    let server = &listing.server;
    let data = server.data.clone().unwrap_or_default();
    let addresses = match &listing.listen_addresses {
        Ok(addresses) => address_list(addresses),
        Err(reason) => format!("error: {reason}"),
    };
    vec![
        Field::new(
            "Server ID",
            server.r#ref.as_ref().map_or(0, |r| r.server_id),
        ),
        Field::new("Listen Addresses", addresses),
        Field::new("Calls Started", data.calls_started),
        Field::new("Calls Succeeded", data.calls_succeeded),
        Field::new("Calls Failed", data.calls_failed),
        Field::new(
            "Last Call Started",
            options.pretty_time(data.last_call_started_timestamp.as_ref()),
        ),
    ]
}
