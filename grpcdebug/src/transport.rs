//! Turns a [`ServerConfig`] into a connected tonic [`Channel`].

use crate::config::{Security, ServerConfig};
use crate::error::{Error, Result};
use std::time::Duration;
use tonic::transport::{Certificate, Channel, ClientTlsConfig, Endpoint};

/// How long to wait for the connection to be established.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// The URI dialed for `config`, with a scheme matching its security.
pub fn endpoint_uri(config: &ServerConfig) -> String {
    let address = config.real_address.as_str();
    if address.contains("://") {
        return address.to_string();
    }
    match config.effective_security() {
        Security::Insecure => format!("http://{address}"),
        Security::Tls => format!("https://{address}"),
    }
}

/// Builds the endpoint for `config` without connecting.
pub async fn endpoint(config: &ServerConfig) -> Result<Endpoint> {
    let uri = endpoint_uri(config);
    let endpoint = Endpoint::from_shared(uri.clone())
        .map_err(|e| Error::InvalidTarget {
            target: config.real_address.clone(),
            reason: e.to_string(),
        })?
        .connect_timeout(CONNECT_TIMEOUT);

    if config.effective_security() == Security::Insecure {
        return Ok(endpoint);
    }

    let Some(path) = config.credential_file.as_ref() else {
        return Err(Error::InvalidTarget {
            target: config.real_address.clone(),
            reason: "TLS requires a credential file".to_string(),
        });
    };
    let pem = tokio::fs::read(path)
        .await
        .map_err(|source| Error::Credential {
            path: path.clone(),
            source,
        })?;
    let mut tls = ClientTlsConfig::new().ca_certificate(Certificate::from_pem(pem));
    if let Some(name) = &config.server_name_override {
        tls = tls.domain_name(name.clone());
    }
    endpoint.tls_config(tls).map_err(|source| Error::Connect {
        target: uri,
        source,
    })
}

/// Connects to the target described by `config`.
pub async fn connect(config: &ServerConfig) -> Result<Channel> {
    let endpoint = endpoint(config).await?;
    tracing::debug!(
        address = %endpoint.uri(),
        security = %config.effective_security(),
        "connecting"
    );
    endpoint.connect().await.map_err(|source| Error::Connect {
        target: config.real_address.clone(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_follows_security() {
        let mut config = ServerConfig::for_target("localhost:50051");
        assert_eq!(endpoint_uri(&config), "http://localhost:50051");

        config.security = Security::Tls;
        assert_eq!(endpoint_uri(&config), "https://localhost:50051");

        config.real_address = "http://10.0.0.1:80".into();
        assert_eq!(endpoint_uri(&config), "http://10.0.0.1:80");
    }

    #[tokio::test]
    async fn tls_without_credentials_is_rejected() {
        let config = ServerConfig {
            security: Security::Tls,
            ..ServerConfig::for_target("localhost:443")
        };
        let err = endpoint(&config).await.unwrap_err();
        assert!(matches!(err, Error::InvalidTarget { .. }), "{err}");
    }

    #[tokio::test]
    async fn unreadable_credentials_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig {
            credential_file: Some(dir.path().join("nope.pem")),
            ..ServerConfig::for_target("localhost:443")
        };
        let err = endpoint(&config).await.unwrap_err();
        match err {
            Error::Credential { path, .. } => assert_eq!(path, dir.path().join("nope.pem")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn invalid_address_is_rejected() {
        let config = ServerConfig::for_target("not a uri");
        assert!(matches!(
            endpoint(&config).await,
            Err(Error::InvalidTarget { .. })
        ));
    }
}
