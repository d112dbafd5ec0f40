//! Target descriptors and the `grpcdebug_config` file.
//!
//! The config file maps the name a user types to how to reach it:
//!
//! ```text
//! Server prod-frontend
//!     RealAddress frontend.example.com:443
//!     Security tls
//!     CredentialFile /etc/certs/ca.pem
//!     ServerNameOverride frontend.example.com
//! ```
//!
//! It is looked up from `$GRPCDEBUG_CONFIG`, then `./grpcdebug_config`, then
//! `grpcdebug_config` in the user config directory.

use crate::error::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "GRPCDEBUG_CONFIG";

/// File name of the config file in the working and user config directories.
pub const CONFIG_FILE_NAME: &str = "grpcdebug_config";

/// How to secure the connection to a target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Security {
    #[default]
    Insecure,
    Tls,
}

impl FromStr for Security {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "insecure" => Ok(Security::Insecure),
            "tls" => Ok(Security::Tls),
            other => Err(format!("unsupported security model {other:?}")),
        }
    }
}

impl fmt::Display for Security {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Security::Insecure => f.write_str("Insecure"),
            Security::Tls => f.write_str("TLS"),
        }
    }
}

/// How to connect to one target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfig {
    /// The name the user refers to the target by.
    pub pattern: String,
    /// The address to dial.
    pub real_address: String,
    pub security: Security,
    /// PEM encoded CA certificates used to verify the server.
    pub credential_file: Option<PathBuf>,
    /// Name to verify the server certificate against.
    pub server_name_override: Option<String>,
}

impl ServerConfig {
    /// An insecure descriptor that dials `target` as is.
    pub fn for_target(target: impl Into<String>) -> Self {
        let target = target.into();
        Self {
            pattern: target.clone(),
            real_address: target,
            ..Default::default()
        }
    }

    /// A credential file implies TLS even without an explicit `Security tls`.
    pub fn effective_security(&self) -> Security {
        if self.credential_file.is_some() {
            Security::Tls
        } else {
            self.security
        }
    }
}

/// A parsed config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub servers: Vec<ServerConfig>,
}

impl ConfigFile {
    /// Parses config file contents. `path` is only used in error messages.
    pub fn parse(path: &Path, contents: &str) -> Result<Self> {
        let error = |line: usize, reason: String| Error::Config {
            path: path.to_path_buf(),
            line,
            reason,
        };

        let mut servers: Vec<ServerConfig> = Vec::new();
        for (index, raw) in contents.lines().enumerate() {
            let line = index + 1;
            let stem = raw.trim();
            if stem.is_empty() || stem.starts_with('#') {
                continue;
            }

            let mut tokens = stem.split_whitespace();
            let (Some(key), Some(value), None) = (tokens.next(), tokens.next(), tokens.next())
            else {
                return Err(error(
                    line,
                    format!("expected `<Key> <Value>`, got {stem:?}"),
                ));
            };

            if key == "Server" {
                servers.push(ServerConfig {
                    pattern: value.to_string(),
                    ..Default::default()
                });
                continue;
            }

            let Some(current) = servers.last_mut() else {
                return Err(error(line, format!("{key} appears before any Server line")));
            };
            match key {
                "RealAddress" => current.real_address = value.to_string(),
                "Security" => current.security = value.parse().map_err(|e| error(line, e))?,
                "CredentialFile" => current.credential_file = Some(PathBuf::from(value)),
                "ServerNameOverride" => current.server_name_override = Some(value.to_string()),
                other => tracing::debug!(line, key = other, "ignoring unknown config option"),
            }
        }

        for server in &mut servers {
            if server.real_address.is_empty() {
                server.real_address = server.pattern.clone();
            }
        }

        tracing::debug!(path = %path.display(), servers = servers.len(), "loaded server configs");
        Ok(Self {
            path: path.to_path_buf(),
            servers,
        })
    }

    /// Reads and parses the file at `path`.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await?;
        Self::parse(path, &contents)
    }

    /// The first server whose pattern equals `target`.
    pub fn lookup(&self, target: &str) -> Option<&ServerConfig> {
        self.servers.iter().find(|s| s.pattern == target)
    }
}

/// Config file locations, in lookup order.
pub fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
        paths.push(PathBuf::from(path));
    }
    paths.push(PathBuf::from(".").join(CONFIG_FILE_NAME));
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join(CONFIG_FILE_NAME));
    }
    paths
}

/// Loads the first config file that exists among `paths`.
///
/// A file named explicitly through the environment must exist.
pub async fn find_config(paths: &[PathBuf]) -> Result<Option<ConfigFile>> {
    let explicit = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty());
    for path in paths {
        let required = explicit.as_deref() == Some(path.as_os_str());
        if required || tokio::fs::try_exists(path).await.unwrap_or(false) {
            return ConfigFile::load(path).await.map(Some);
        }
    }
    Ok(None)
}

/// Resolves `target` through the config file, if any.
///
/// Targets without an entry are dialed as given, insecurely.
pub async fn resolve_target(target: &str) -> Result<ServerConfig> {
    let config = find_config(&candidate_paths()).await?;
    let resolved = config
        .as_ref()
        .and_then(|c| c.lookup(target))
        .cloned()
        .unwrap_or_else(|| ServerConfig::for_target(target));
    tracing::debug!(?resolved, "resolved target");
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    const SAMPLE: &str = "\
Server prod
    RealAddress 10.0.0.5:443
    Security TLS
    CredentialFile /etc/ca.pem
    ServerNameOverride prod.example.com

Server staging
    RealAddress localhost:50051
    Colour blue
Server bare
";

    #[test]
    fn parses_server_blocks() {
        let file = ConfigFile::parse(Path::new("cfg"), SAMPLE).unwrap();
        assert_eq!(file.servers.len(), 3);

        let prod = file.lookup("prod").unwrap();
        assert_eq!(prod.real_address, "10.0.0.5:443");
        assert_eq!(prod.security, Security::Tls);
        assert_eq!(
            prod.credential_file.as_deref(),
            Some(Path::new("/etc/ca.pem"))
        );
        assert_eq!(
            prod.server_name_override.as_deref(),
            Some("prod.example.com")
        );

        let staging = file.lookup("staging").unwrap();
        assert_eq!(staging.security, Security::Insecure);
        assert_eq!(staging.real_address, "localhost:50051");

        assert_eq!(file.lookup("bare").unwrap().real_address, "bare");
        assert!(file.lookup("prod.example.com").is_none());
    }

    #[test]
    fn option_before_server_is_an_error() {
        let err = ConfigFile::parse(Path::new("cfg"), "\nRealAddress x:1\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "cfg:2: RealAddress appears before any Server line"
        );
    }

    #[test]
    fn bad_lines_are_errors() {
        let err = ConfigFile::parse(Path::new("cfg"), "Server a\n  Security\n").unwrap_err();
        assert!(matches!(err, Error::Config { line: 2, .. }), "{err}");

        let err = ConfigFile::parse(Path::new("cfg"), "Server a\n  Security ssh\n").unwrap_err();
        assert!(
            err.to_string().contains("unsupported security model"),
            "{err}"
        );
    }

    #[test]
    fn credential_file_implies_tls() {
        let mut config = ServerConfig::for_target("x:1");
        assert_eq!(config.effective_security(), Security::Insecure);
        config.credential_file = Some(PathBuf::from("ca.pem"));
        assert_eq!(config.effective_security(), Security::Tls);
    }

    #[tokio::test]
    async fn finds_first_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let present = dir.path().join(CONFIG_FILE_NAME);
        let mut file = std::fs::File::create(&present).unwrap();
        writeln!(file, "Server local\n  RealAddress 127.0.0.1:9000").unwrap();

        let config = find_config(&[missing, present.clone()])
            .await
            .unwrap()
            .unwrap();
        assert_eq!(config.path, present);
        assert_eq!(
            config.lookup("local").unwrap().real_address,
            "127.0.0.1:9000"
        );

        assert!(find_config(&[]).await.unwrap().is_none());
    }
}
