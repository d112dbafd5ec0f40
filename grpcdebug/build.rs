// This build file is used to generate the channelz bindings as a one-off,
// but is only rerun with the `gen-proto` feature enabled.
// This keeps protoc out of the regular build.

#[cfg(feature = "gen-proto")]
const SERDE_FIELDS: &[(&str, &str)] = &[
    ("ChannelData.last_call_started_timestamp", "timestamp"),
    ("ChannelTraceEvent.timestamp", "timestamp"),
    ("ChannelTrace.creation_timestamp", "timestamp"),
    ("ServerData.last_call_started_timestamp", "timestamp"),
    (
        "SocketData.last_local_stream_created_timestamp",
        "timestamp",
    ),
    (
        "SocketData.last_remote_stream_created_timestamp",
        "timestamp",
    ),
    ("SocketData.last_message_sent_timestamp", "timestamp"),
    ("SocketData.last_message_received_timestamp", "timestamp"),
    ("Address.TcpIpAddress.ip_address", "bytes"),
    ("Address.OtherAddress.value", "any"),
    ("Security.Tls.local_certificate", "bytes"),
    ("Security.Tls.remote_certificate", "bytes"),
    ("Security.OtherSecurity.value", "any"),
    ("SocketOption.additional", "any"),
    ("SocketOptionTimeout.duration", "duration"),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "gen-proto")]
    {
        let mut config = tonic_prost_build::configure()
            .out_dir("src/generated")
            .build_server(true)
            .build_client(true)
            .build_transport(false)
            .type_attribute(
                ".grpc.channelz.v1",
                "#[derive(serde::Serialize)]\n#[serde(rename_all = \"snake_case\")]",
            );
        for (field, helper) in SERDE_FIELDS {
            config = config.field_attribute(
                format!(".grpc.channelz.v1.{field}"),
                format!("#[serde(serialize_with = \"crate::proto::json::{helper}\")]"),
            );
        }
        config.compile_protos(&["proto/grpc/channelz/v1/channelz.proto"], &["proto"])?;
    }

    Ok(())
}
