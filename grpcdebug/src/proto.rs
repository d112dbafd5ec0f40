//! Wire model for the `grpc.channelz.v1` service.
//!
//! The bindings are checked in under `src/generated` and regenerated with the
//! `gen-proto` feature.

#[allow(clippy::all, missing_docs)]
pub mod channelz {
    include!("generated/grpc_channelz_v1.rs");
}

/// Serialization helpers referenced by the generated `serde` attributes.
///
/// Well known types serialize the way the protobuf JSON mapping renders them:
/// timestamps as RFC 3339 strings, durations as seconds with an `s` suffix,
/// bytes as base64.
pub(crate) mod json {
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;
    use prost_types::{Any, Duration, Timestamp};
    use serde::Serializer;
    use serde::ser::SerializeStruct;

    /// A zero timestamp means unknown and is written as an empty string.
    pub(crate) fn timestamp<S>(value: &Option<Timestamp>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) if ts.seconds == 0 && ts.nanos == 0 => serializer.serialize_str(""),
            Some(ts) => serializer.serialize_str(&ts.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub(crate) fn duration<S>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(d) => serializer.serialize_str(&d.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub(crate) fn bytes<S>(value: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&STANDARD.encode(value))
    }

    pub(crate) fn any<S>(value: &Option<Any>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(any) => {
                let mut s = serializer.serialize_struct("Any", 2)?;
                s.serialize_field("type_url", &any.type_url)?;
                s.serialize_field("value", &STANDARD.encode(&any.value))?;
                s.end()
            }
            None => serializer.serialize_none(),
        }
    }
}
