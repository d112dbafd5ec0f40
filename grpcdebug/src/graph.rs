//! Identifier-linked channelz entity graph.
//!
//! Entities only point at each other through numeric ids. The [`Graph`] arena
//! holds what has been fetched during one command, keyed by [`EntityRef`], and
//! the [`Resolver`] is the single place references get turned into entities.

use crate::error::{Error, Result};
use crate::proto::channelz::{Channel, Server, Socket, SocketRef, Subchannel};
use crate::service::Topology;
use std::collections::BTreeMap;
use std::fmt;

/// A typed reference to a channelz entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityRef {
    Channel(i64),
    Subchannel(i64),
    Server(i64),
    Socket(i64),
}

impl EntityRef {
    /// The numeric id, without its kind.
    pub fn id(&self) -> i64 {
        match *self {
            EntityRef::Channel(id)
            | EntityRef::Subchannel(id)
            | EntityRef::Server(id)
            | EntityRef::Socket(id) => id,
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityRef::Channel(id) => write!(f, "channel {id}"),
            EntityRef::Subchannel(id) => write!(f, "subchannel {id}"),
            EntityRef::Server(id) => write!(f, "server {id}"),
            EntityRef::Socket(id) => write!(f, "socket {id}"),
        }
    }
}

/// A fetched channelz entity.
#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Channel(Channel),
    Subchannel(Subchannel),
    Server(Server),
    Socket(Socket),
}

impl Entity {
    /// The reference the entity carries about itself, if the server set one.
    pub fn entity_ref(&self) -> Option<EntityRef> {
        match self {
            Entity::Channel(c) => c.r#ref.as_ref().map(|r| EntityRef::Channel(r.channel_id)),
            Entity::Subchannel(s) => s
                .r#ref
                .as_ref()
                .map(|r| EntityRef::Subchannel(r.subchannel_id)),
            Entity::Server(s) => s.r#ref.as_ref().map(|r| EntityRef::Server(r.server_id)),
            Entity::Socket(s) => s.r#ref.as_ref().map(|r| EntityRef::Socket(r.socket_id)),
        }
    }

    /// The references one level down that a report renders, in the order the
    /// server listed them: subchannels of a channel, sockets of a subchannel
    /// and listen sockets of a server.
    pub fn child_refs(&self) -> Vec<EntityRef> {
        match self {
            Entity::Channel(c) => c
                .subchannel_ref
                .iter()
                .map(|r| EntityRef::Subchannel(r.subchannel_id))
                .collect(),
            Entity::Subchannel(s) => socket_refs(&s.socket_ref),
            Entity::Server(s) => socket_refs(&s.listen_socket),
            Entity::Socket(_) => Vec::new(),
        }
    }

    pub fn as_channel(&self) -> Option<&Channel> {
        match self {
            Entity::Channel(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_subchannel(&self) -> Option<&Subchannel> {
        match self {
            Entity::Subchannel(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_server(&self) -> Option<&Server> {
        match self {
            Entity::Server(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_socket(&self) -> Option<&Socket> {
        match self {
            Entity::Socket(s) => Some(s),
            _ => None,
        }
    }
}

fn socket_refs(refs: &[SocketRef]) -> Vec<EntityRef> {
    refs.iter().map(|r| EntityRef::Socket(r.socket_id)).collect()
}

/// Arena of the entities fetched for one command.
#[derive(Debug, Default)]
pub struct Graph {
    entities: BTreeMap<EntityRef, Entity>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: EntityRef, entity: Entity) {
        self.entities.insert(key, entity);
    }

    pub fn get(&self, key: EntityRef) -> Option<&Entity> {
        self.entities.get(&key)
    }

    pub fn contains(&self, key: EntityRef) -> bool {
        self.entities.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// A child reference that could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub entity: EntityRef,
    pub reason: String,
}

/// The outcome of resolving a list of references.
///
/// `entities` keeps the order of the references that resolved.
#[derive(Debug, Default)]
pub struct Resolution {
    pub entities: Vec<Entity>,
    pub skipped: Vec<Skipped>,
}

/// Resolves references against a [`Topology`], caching into a [`Graph`].
#[derive(Debug)]
pub struct Resolver<'a, T> {
    topology: &'a T,
    graph: Graph,
}

impl<'a, T: Topology> Resolver<'a, T> {
    pub fn new(topology: &'a T) -> Self {
        Self {
            topology,
            graph: Graph::new(),
        }
    }

    /// Point lookup. Fails with [`Error::NotFound`] if the entity is gone.
    pub async fn resolve(&mut self, key: EntityRef) -> Result<&Entity> {
        if !self.graph.contains(key) {
            let entity = fetch(self.topology, key).await?;
            self.graph.insert(key, entity);
        }
        self.graph.get(key).ok_or(Error::NotFound(key))
    }

    /// Resolves `refs` one at a time, skipping the ones that no longer exist.
    ///
    /// Any failure other than a missing entity aborts the resolution.
    pub async fn resolve_refs(
        &mut self,
        refs: impl IntoIterator<Item = EntityRef>,
    ) -> Result<Resolution> {
        let mut resolution = Resolution::default();
        for key in refs {
            match self.resolve(key).await {
                Ok(entity) => resolution.entities.push(entity.clone()),
                Err(err @ Error::NotFound(_)) => {
                    tracing::debug!(entity = %key, "skipping missing entity: {err}");
                    resolution.skipped.push(Skipped {
                        entity: key,
                        reason: err.to_string(),
                    });
                }
                Err(err) => return Err(err),
            }
        }
        Ok(resolution)
    }

    /// Resolves `parent`, then every entity it references one level down.
    ///
    /// A missing parent is fatal; missing children are skipped.
    pub async fn resolve_children(&mut self, parent: EntityRef) -> Result<Resolution> {
        let refs = self.resolve(parent).await?.child_refs();
        self.resolve_refs(refs).await
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

async fn fetch<T: Topology>(topology: &T, key: EntityRef) -> Result<Entity> {
    Ok(match key {
        EntityRef::Channel(id) => Entity::Channel(topology.get_channel(id).await?),
        EntityRef::Subchannel(id) => Entity::Subchannel(topology.get_subchannel(id).await?),
        EntityRef::Server(id) => Entity::Server(topology.get_server(id).await?),
        EntityRef::Socket(id) => Entity::Socket(topology.get_socket(id).await?),
    })
}
