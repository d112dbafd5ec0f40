//! Decoders for the oneof payloads carried by channelz entities.
//!
//! Every decoder matches its oneof exhaustively. An absent variant is what
//! prost leaves behind for a tag it does not know, so it is reported as
//! [`Error::UnsupportedVariant`] rather than rendered as a default.

use crate::error::{Error, Result};
use crate::proto::channelz::{
    Address, ChannelData, Security, SocketOption, address, channel_connectivity_state,
    channel_trace_event, security,
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

/// Renders an address in its canonical display form.
///
/// TCP addresses render as `ip:port` (`[ip]:port` for IPv6), Unix domain
/// sockets as `unix:<path>` and other addresses by their human readable name.
pub fn decode_endpoint(addr: &Address) -> Result<String> {
    match &addr.address {
        Some(address::Address::TcpipAddress(tcp)) => {
            let ip = decode_ip(&tcp.ip_address)?;
            Ok(match u16::try_from(tcp.port) {
                Ok(port) => SocketAddr::new(ip, port).to_string(),
                // -1 means the port does not apply.
                Err(_) => ip.to_string(),
            })
        }
        Some(address::Address::UdsAddress(uds)) => Ok(format!("unix:{}", uds.filename)),
        Some(address::Address::OtherAddress(other)) => Ok(other.name.clone()),
        None => Err(Error::UnsupportedVariant {
            field: "address",
            detail: "no known address type is populated".to_string(),
        }),
    }
}

/// Like [`decode_endpoint`], but an address the server left out renders empty.
pub fn decode_optional_endpoint(addr: Option<&Address>) -> Result<String> {
    addr.map_or_else(|| Ok(String::new()), decode_endpoint)
}

fn decode_ip(bytes: &[u8]) -> Result<IpAddr> {
    if let Ok(octets) = <[u8; 4]>::try_from(bytes) {
        return Ok(IpAddr::V4(Ipv4Addr::from(octets)));
    }
    if let Ok(octets) = <[u8; 16]>::try_from(bytes) {
        let ip = Ipv6Addr::from(octets);
        // Dual stack listeners report IPv4 peers as `::ffff:a.b.c.d`.
        return Ok(match ip.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => IpAddr::V6(ip),
        });
    }
    Err(Error::Malformed {
        what: "tcpip address".to_string(),
        reason: format!("expected 4 or 16 address bytes, got {}", bytes.len()),
    })
}

/// The display form of a socket's security descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityView {
    /// `TLS` or `Other`.
    pub model_name: &'static str,
    /// Labelled details, in display order.
    pub detail: Vec<(&'static str, String)>,
}

/// Decodes a security descriptor into its model name and details.
pub fn decode_security(descriptor: &Security) -> Result<SecurityView> {
    match &descriptor.model {
        Some(security::Model::Tls(tls)) => {
            let detail = match &tls.cipher_suite {
                Some(security::tls::CipherSuite::StandardName(name)) => {
                    ("Standard Name", name.clone())
                }
                Some(security::tls::CipherSuite::OtherName(name)) => ("Other Name", name.clone()),
                None => {
                    return Err(Error::UnsupportedVariant {
                        field: "cipher suite",
                        detail: "no known cipher suite name type is populated".to_string(),
                    });
                }
            };
            Ok(SecurityView {
                model_name: "TLS",
                detail: vec![detail],
            })
        }
        Some(security::Model::Other(other)) => Ok(SecurityView {
            model_name: "Other",
            detail: vec![("Name", other.name.clone())],
        }),
        None => Err(Error::UnsupportedVariant {
            field: "security model",
            detail: "no known security model is populated".to_string(),
        }),
    }
}

/// Renders a socket option value.
///
/// The human readable value wins. Otherwise the opaque payload is shown by its
/// type name and base64 bytes.
pub fn decode_socket_option(option: &SocketOption) -> String {
    if !option.value.is_empty() {
        return option.value.clone();
    }
    match &option.additional {
        Some(any) => {
            let type_name = any.type_url.rsplit('/').next().unwrap_or(&any.type_url);
            format!("{type_name}({})", STANDARD.encode(&any.value))
        }
        None => String::new(),
    }
}

/// The connectivity state name as the proto enum spells it.
pub fn connectivity_state(data: &ChannelData) -> &'static str {
    let raw = data.state.map(|s| s.state).unwrap_or_default();
    channel_connectivity_state::State::try_from(raw)
        .unwrap_or(channel_connectivity_state::State::Unknown)
        .as_str_name()
}

/// The trace event severity name as the proto enum spells it.
pub fn severity(raw: i32) -> &'static str {
    channel_trace_event::Severity::try_from(raw)
        .unwrap_or(channel_trace_event::Severity::CtUnknown)
        .as_str_name()
}

/// Renders the child a trace event refers to, if any.
pub fn child_ref(child: Option<&channel_trace_event::ChildRef>) -> String {
    match child {
        Some(channel_trace_event::ChildRef::ChannelRef(r)) => {
            format!("channel({})", r.channel_id)
        }
        Some(channel_trace_event::ChildRef::SubchannelRef(r)) => {
            format!("subchannel({})", r.subchannel_id)
        }
        None => String::new(),
    }
}
