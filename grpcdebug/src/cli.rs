//! Command line surface and dispatch.

use crate::channelz::{self, ChannelSelector};
use crate::config::{self, Security, ServerConfig};
use crate::error::Result;
use crate::health;
use crate::paging::Window;
use crate::render::{Output, RenderOptions, TimeFormat, View};
use crate::service::tonic::TonicServices;
use crate::service::{ConfigStatus, HealthCheck, Topology};
use crate::transport;
use crate::xds::{self, TypeFilter};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Inspect a gRPC server through its admin services.
#[derive(Debug, Parser)]
#[command(name = "grpcdebug", version)]
pub struct Cli {
    /// Address of the server, or a pattern from the config file.
    pub target: String,

    /// Print verbose information for debugging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print exact timestamps instead of relative ones.
    #[arg(short = 't', long, global = true)]
    pub timestamp: bool,

    /// Security model of the connection: insecure or tls.
    #[arg(long, global = true)]
    pub security: Option<Security>,

    /// PEM file with the CA certificates that verify the server.
    #[arg(long = "credential_file", global = true)]
    pub credential_file: Option<PathBuf>,

    /// Name the server certificate is verified against.
    #[arg(long = "server_name_override", global = true)]
    pub server_name_override: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Display channelz states in a human readable way.
    Channelz(ChannelzArgs),
    /// Check the health status of the target's services.
    Health {
        /// Services to check in addition to the overall status.
        services: Vec<String>,
    },
    /// Fetch xDS related information.
    #[command(subcommand)]
    Xds(XdsCommand),
}

#[derive(Debug, Args)]
pub struct ChannelzArgs {
    /// Print the entities as JSON.
    #[arg(short = 'o', long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: ChannelzCommand,
}

/// Bounds of a paged listing. Without either bound the whole list is fetched.
#[derive(Debug, Clone, Copy, Args)]
pub struct WindowArgs {
    #[arg(short = 's', long = "start_id")]
    pub start_id: Option<i64>,
    #[arg(short = 'm', long = "max_results")]
    pub max_results: Option<i64>,
}

impl WindowArgs {
    pub fn window(&self) -> Window {
        Window::from_bounds(self.start_id, self.max_results)
    }
}

#[derive(Debug, Subcommand)]
pub enum ChannelzCommand {
    /// List client channels.
    Channels(WindowArgs),
    /// Display one channel, by id or by exact target.
    Channel {
        #[arg(value_name = "ID_OR_TARGET")]
        selector: ChannelSelector,
    },
    /// Display one subchannel.
    Subchannel { id: i64 },
    /// Display one socket.
    Socket { id: i64 },
    /// List servers.
    Servers(WindowArgs),
    /// Display one server and its sockets.
    Server {
        id: i64,
        #[command(flatten)]
        window: WindowArgs,
    },
}

#[derive(Debug, Subcommand)]
pub enum XdsCommand {
    /// Dump the operating xDS configs.
    Config(XdsArgs),
    /// Print the config synchronization status.
    Status(XdsArgs),
}

#[derive(Debug, Args)]
pub struct XdsArgs {
    /// Comma separated resource types, e.g. `lds,cds`.
    #[arg(long = "type", value_name = "TYPES")]
    pub types: Option<TypeFilter>,
}

impl XdsArgs {
    fn filter(&self) -> TypeFilter {
        self.types.clone().unwrap_or_default()
    }
}

impl Cli {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::new(if self.timestamp {
            TimeFormat::Rfc3339
        } else {
            TimeFormat::Relative
        })
    }

    /// Applies the connection flags on top of the resolved descriptor.
    pub fn apply_overrides(&self, mut config: ServerConfig) -> ServerConfig {
        if let Some(security) = self.security {
            config.security = security;
        }
        if let Some(path) = &self.credential_file {
            config.credential_file = Some(path.clone());
        }
        if let Some(name) = &self.server_name_override {
            config.server_name_override = Some(name.clone());
        }
        config
    }

    /// Resolves the target, connects and runs the command.
    pub async fn run(&self) -> Result<Output> {
        let config = self.apply_overrides(config::resolve_target(&self.target).await?);
        let channel = transport::connect(&config).await?;
        let services = TonicServices::from_channel(channel);
        dispatch(&services, &self.command, self.render_options()).await
    }
}

/// Runs `command` against `services`.
pub async fn dispatch<S>(services: &S, command: &Command, options: RenderOptions) -> Result<Output>
where
    S: Topology + HealthCheck + ConfigStatus,
{
    match command {
        Command::Channelz(args) => {
            let view = if args.json {
                View::Structured
            } else {
                View::Tabular(options)
            };
            match &args.command {
                ChannelzCommand::Channels(window) => {
                    channelz::channels(services, window.window(), view).await
                }
                ChannelzCommand::Channel { selector } => {
                    channelz::channel(services, selector, view).await
                }
                ChannelzCommand::Subchannel { id } => {
                    channelz::subchannel(services, *id, view).await
                }
                ChannelzCommand::Socket { id } => channelz::socket(services, *id, view).await,
                ChannelzCommand::Servers(window) => {
                    channelz::servers(services, window.window(), view).await
                }
                ChannelzCommand::Server { id, window } => {
                    channelz::server(services, *id, window.window(), view).await
                }
            }
        }
        Command::Health { services: names } => {
            Ok(health::report(services, names.iter().cloned()).await)
        }
        Command::Xds(XdsCommand::Config(args)) => xds::config(services, &args.filter()).await,
        Command::Xds(XdsCommand::Status(args)) => {
            xds::status(services, &args.filter(), options).await
        }
    }
}
