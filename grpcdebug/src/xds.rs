//! xDS client status snapshots.
//!
//! A CSDS response is converted once into a [`ClientStatusSnapshot`]: a flat,
//! ordered list of typed config entries per xDS client. The legacy per-type
//! dumps and the generic config list both end up in the same shape, so
//! ordering, filtering and status flattening only deal with one model.

use crate::error::{Error, Result};
use crate::proto::json;
use crate::render::{Output, RenderOptions, Report, Row, Table};
use crate::service::ConfigStatus;
use envoy_types::pb::envoy::admin::v3 as admin;
use envoy_types::pb::envoy::config::cluster::v3::Cluster;
use envoy_types::pb::envoy::config::endpoint::v3::ClusterLoadAssignment;
use envoy_types::pb::envoy::config::listener::v3::Listener;
use envoy_types::pb::envoy::config::route::v3::RouteConfiguration;
use envoy_types::pb::envoy::service::status::v3 as csds;
use envoy_types::pb::google::protobuf as wkt;
use prost::Message;
use prost_types::{Any, Timestamp};
use serde::Serialize;
use std::collections::BTreeSet;
use std::str::FromStr;

pub const LISTENER_TYPE_URL: &str = "type.googleapis.com/envoy.config.listener.v3.Listener";
pub const ROUTE_TYPE_URL: &str = "type.googleapis.com/envoy.config.route.v3.RouteConfiguration";
pub const CLUSTER_TYPE_URL: &str = "type.googleapis.com/envoy.config.cluster.v3.Cluster";
pub const ENDPOINT_TYPE_URL: &str =
    "type.googleapis.com/envoy.config.endpoint.v3.ClusterLoadAssignment";

/// The kind of resource an entry holds.
///
/// The declaration order is the canonical dump order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum XdsType {
    Listener,
    Route,
    Cluster,
    Endpoint,
    Other,
}

impl XdsType {
    /// Classifies a type URL by its trailing segment.
    pub fn from_type_url(type_url: &str) -> Self {
        match type_segment(type_url).to_ascii_lowercase().as_str() {
            "listener" => XdsType::Listener,
            "routeconfiguration" => XdsType::Route,
            "cluster" => XdsType::Cluster,
            "clusterloadassignment" => XdsType::Endpoint,
            _ => XdsType::Other,
        }
    }

    pub fn type_url(&self) -> Option<&'static str> {
        match self {
            XdsType::Listener => Some(LISTENER_TYPE_URL),
            XdsType::Route => Some(ROUTE_TYPE_URL),
            XdsType::Cluster => Some(CLUSTER_TYPE_URL),
            XdsType::Endpoint => Some(ENDPOINT_TYPE_URL),
            XdsType::Other => None,
        }
    }
}

/// `type.googleapis.com/envoy.config.listener.v3.Listener` -> `Listener`.
fn type_segment(type_url: &str) -> &str {
    type_url.rsplit(['/', '.']).next().unwrap_or(type_url)
}

/// Everything the remote xDS clients report.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClientStatusSnapshot {
    pub clients: Vec<ClientSnapshot>,
}

/// The configuration one xDS client currently holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClientSnapshot {
    pub node_id: String,
    pub node_cluster: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub client_scope: String,
    pub entries: Vec<XdsConfigEntry>,
}

/// One managed resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XdsConfigEntry {
    pub config_type: XdsType,
    pub type_url: String,
    /// Known without decoding the payload for listeners and generic entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `ACKED`, `NACKED`, `REQUESTED`, ...
    pub client_status: String,
    pub version: String,
    #[serde(serialize_with = "json::timestamp")]
    pub last_updated: Option<Timestamp>,
    #[serde(serialize_with = "json::any")]
    pub payload: Option<Any>,
}

impl ClientStatusSnapshot {
    pub fn from_response(response: csds::ClientStatusResponse) -> Self {
        Self {
            clients: response
                .config
                .into_iter()
                .map(ClientSnapshot::from_config)
                .collect(),
        }
    }

    pub fn entry_count(&self) -> usize {
        self.clients.iter().map(|c| c.entries.len()).sum()
    }
}

impl ClientSnapshot {
    #[allow(deprecated)]
    fn from_config(config: csds::ClientConfig) -> Self {
        let (node_id, node_cluster) = config
            .node
            .map(|node| (node.id, node.cluster))
            .unwrap_or_default();

        let mut entries = Vec::new();
        for per_xds in config.xds_config {
            expand_per_xds(per_xds, &mut entries);
        }
        entries.extend(config.generic_xds_configs.into_iter().map(from_generic));

        Self {
            node_id,
            node_cluster,
            client_scope: config.client_scope,
            entries,
        }
    }
}

fn expand_per_xds(per_xds: csds::PerXdsConfig, entries: &mut Vec<XdsConfigEntry>) {
    use csds::per_xds_config::PerXdsConfig as Dump;

    match per_xds.per_xds_config {
        Some(Dump::ListenerConfig(dump)) => {
            for listener in dump.dynamic_listeners {
                let state = listener.active_state.unwrap_or_default();
                entries.push(legacy_entry(
                    XdsType::Listener,
                    Some(listener.name),
                    listener.client_status,
                    state.version_info,
                    state.listener,
                    state.last_updated,
                ));
            }
        }
        Some(Dump::RouteConfig(dump)) => {
            for route in dump.dynamic_route_configs {
                entries.push(legacy_entry(
                    XdsType::Route,
                    None,
                    route.client_status,
                    route.version_info,
                    route.route_config,
                    route.last_updated,
                ));
            }
        }
        Some(Dump::ClusterConfig(dump)) => {
            for cluster in dump.dynamic_active_clusters {
                entries.push(legacy_entry(
                    XdsType::Cluster,
                    None,
                    cluster.client_status,
                    cluster.version_info,
                    cluster.cluster,
                    cluster.last_updated,
                ));
            }
        }
        Some(Dump::EndpointConfig(dump)) => {
            for endpoint in dump.dynamic_endpoint_configs {
                entries.push(legacy_entry(
                    XdsType::Endpoint,
                    None,
                    endpoint.client_status,
                    endpoint.version_info,
                    endpoint.endpoint_config,
                    endpoint.last_updated,
                ));
            }
        }
        Some(Dump::ScopedRouteConfig(_)) => {
            tracing::debug!("skipping scoped route config dump");
        }
        None => {
            let err = Error::UnsupportedVariant {
                field: "per xDS config",
                detail: "no config type set".to_string(),
            };
            tracing::warn!("skipping xDS config: {err}");
        }
    }
}

fn legacy_entry(
    config_type: XdsType,
    name: Option<String>,
    client_status: i32,
    version: String,
    payload: Option<wkt::Any>,
    last_updated: Option<wkt::Timestamp>,
) -> XdsConfigEntry {
    let payload = payload.map(any);
    let type_url = match &payload {
        Some(any) if !any.type_url.is_empty() => any.type_url.clone(),
        _ => config_type.type_url().unwrap_or_default().to_string(),
    };
    XdsConfigEntry {
        config_type,
        type_url,
        name,
        client_status: status_name(client_status),
        version,
        last_updated: last_updated.map(timestamp),
        payload,
    }
}

fn from_generic(config: csds::client_config::GenericXdsConfig) -> XdsConfigEntry {
    XdsConfigEntry {
        config_type: XdsType::from_type_url(&config.type_url),
        type_url: config.type_url,
        name: Some(config.name).filter(|name| !name.is_empty()),
        client_status: status_name(config.client_status),
        version: config.version_info,
        last_updated: config.last_updated.map(timestamp),
        payload: config.xds_config.map(any),
    }
}

fn status_name(raw: i32) -> String {
    admin::ClientResourceStatus::try_from(raw)
        .map(|status| status.as_str_name().to_string())
        .unwrap_or_else(|_| raw.to_string())
}

fn any(value: wkt::Any) -> Any {
    Any {
        type_url: value.type_url,
        value: value.value,
    }
}

fn timestamp(value: wkt::Timestamp) -> Timestamp {
    Timestamp {
        seconds: value.seconds,
        nanos: value.nanos,
    }
}

/// The set of resource types to keep, by lowercased type URL trailing segment.
///
/// An empty filter keeps everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeFilter {
    wanted: BTreeSet<String>,
}

impl TypeFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.wanted.is_empty()
    }

    pub fn matches(&self, entry: &XdsConfigEntry) -> bool {
        self.wanted.is_empty()
            || self
                .wanted
                .contains(&type_segment(&entry.type_url).to_ascii_lowercase())
    }
}

impl FromStr for TypeFilter {
    type Err = String;

    /// Parses a comma separated list such as `lds,cluster` or
    /// `envoy.config.route.v3.RouteConfiguration`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut wanted = BTreeSet::new();
        for tag in s.split(',').map(str::trim) {
            if tag.is_empty() {
                return Err(format!("empty xDS type in {s:?}"));
            }
            let segment = match tag.to_ascii_lowercase().as_str() {
                "lds" | "listener" => "listener".to_string(),
                "rds" | "route" | "routeconfiguration" => "routeconfiguration".to_string(),
                "cds" | "cluster" => "cluster".to_string(),
                "eds" | "endpoint" | "clusterloadassignment" => "clusterloadassignment".to_string(),
                other => type_segment(other).to_string(),
            };
            wanted.insert(segment);
        }
        Ok(Self { wanted })
    }
}

/// Drops the entries `filter` rejects and orders the rest Listener, Route,
/// Cluster, Endpoint, then anything else, keeping the source order within a
/// type.
pub fn sort_and_filter(
    mut snapshot: ClientStatusSnapshot,
    filter: &TypeFilter,
) -> ClientStatusSnapshot {
    for client in &mut snapshot.clients {
        client.entries.retain(|entry| filter.matches(entry));
        client.entries.sort_by_key(|entry| entry.config_type);
    }
    snapshot
}

/// One line of the status table.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusRow {
    pub name: String,
    pub status: String,
    pub version: String,
    pub type_url: String,
    pub last_updated: Option<Timestamp>,
}

/// The name a resource is known by, decoding the payload when the entry does
/// not carry it.
pub fn resource_name(entry: &XdsConfigEntry) -> Result<String> {
    if let Some(name) = &entry.name {
        return Ok(name.clone());
    }
    let Some(payload) = &entry.payload else {
        return Ok(String::new());
    };
    let bytes = payload.value.as_slice();
    let decoded = match entry.config_type {
        XdsType::Listener => Listener::decode(bytes).map(|l| l.name),
        XdsType::Route => RouteConfiguration::decode(bytes).map(|r| r.name),
        XdsType::Cluster => Cluster::decode(bytes).map(|c| c.name),
        XdsType::Endpoint => ClusterLoadAssignment::decode(bytes).map(|e| e.cluster_name),
        XdsType::Other => return Ok(String::new()),
    };
    decoded.map_err(|err| Error::Malformed {
        what: payload.type_url.clone(),
        reason: err.to_string(),
    })
}

/// One row per managed resource. Entries whose payload does not decode are
/// skipped with a warning.
pub fn to_status_rows(snapshot: &ClientStatusSnapshot) -> Vec<StatusRow> {
    let mut rows = Vec::new();
    for entry in snapshot.clients.iter().flat_map(|c| &c.entries) {
        let name = match resource_name(entry) {
            Ok(name) => name,
            Err(err) => {
                tracing::warn!(type_url = %entry.type_url, "skipping xDS resource: {err}");
                continue;
            }
        };
        rows.push(StatusRow {
            name,
            status: entry.client_status.clone(),
            version: entry.version.clone(),
            type_url: entry.type_url.clone(),
            last_updated: entry.last_updated,
        });
    }
    rows
}

pub fn status_table(rows: &[StatusRow], options: &RenderOptions) -> Table {
    let mut table = Table::new(vec!["Name", "Status", "Version", "Type", "Last Updated"]);
    table.rows = rows
        .iter()
        .map(|row| {
            Row::Cells(vec![
                row.name.clone(),
                row.status.clone(),
                row.version.clone(),
                row.type_url.clone(),
                options.pretty_time(row.last_updated.as_ref()),
            ])
        })
        .collect();
    table
}

/// Fills in the names carried inside the payloads, so a dump can be read
/// without decoding them.
fn name_entries(snapshot: &mut ClientStatusSnapshot) {
    for entry in snapshot.clients.iter_mut().flat_map(|c| &mut c.entries) {
        if entry.name.is_none() {
            entry.name = resource_name(entry).ok().filter(|name| !name.is_empty());
        }
    }
}

/// `xds config`: the ordered, filtered snapshot as a document.
pub async fn config<C: ConfigStatus>(service: &C, filter: &TypeFilter) -> Result<Output> {
    let mut snapshot = sort_and_filter(service.fetch_snapshot().await?, filter);
    if snapshot.entry_count() == 0 && !filter.is_empty() {
        tracing::debug!(?filter, "no xDS config of the requested types");
    }
    name_entries(&mut snapshot);
    Output::document(&snapshot)
}

/// `xds status`: one row per managed resource.
pub async fn status<C: ConfigStatus>(
    service: &C,
    filter: &TypeFilter,
    options: RenderOptions,
) -> Result<Output> {
    let snapshot = sort_and_filter(service.fetch_snapshot().await?, filter);
    let mut report = Report::new();
    report.push(status_table(&to_status_rows(&snapshot), &options));
    Ok(Output::Report(report))
}
