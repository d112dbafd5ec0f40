//! A diagnostic client for gRPC servers.
//!
//! `grpcdebug` talks to the admin services a gRPC server can expose and
//! prints what it finds:
//!
//! - [channelz](channelz): live channels, subchannels, servers and sockets,
//!   either as JSON or as tables.
//! - [health](health): the serving status of the server and its services.
//! - [xds](xds): the xDS configuration a client holds, fetched over CSDS.
//!
//! The remote services sit behind the traits in [`service`], so every command
//! pipeline can be driven by [`service::tonic::TonicServices`] or by an
//! in-memory implementation.
//!
//! # Example
//!
//! ```no_run
//! # async fn run() -> grpcdebug::Result<()> {
//! use grpcdebug::config::ServerConfig;
//! use grpcdebug::paging::Window;
//! use grpcdebug::render::{RenderOptions, View};
//! use grpcdebug::service::tonic::TonicServices;
//!
//! let channel = grpcdebug::transport::connect(&ServerConfig::for_target("localhost:50051")).await?;
//! let services = TonicServices::from_channel(channel);
//! let view = View::Tabular(RenderOptions::default());
//! let output = grpcdebug::channelz::channels(&services, Window::Exhaustive, view).await?;
//! grpcdebug::output::write_output(&mut std::io::stdout(), &output)?;
//! # Ok(())
//! # }
//! ```

pub mod channelz;
pub mod cli;
pub mod config;
pub mod decode;
pub mod error;
pub mod graph;
pub mod health;
pub mod output;
pub mod paging;
pub mod proto;
pub mod render;
pub mod service;
pub mod transport;
pub mod xds;

#[cfg(test)]
mod testutil;

pub use error::{Error, Result};
