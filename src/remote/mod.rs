//! Client for the remote `/codigos` HTTP resource.

pub mod client;

pub use client::{RemoteClient, RemoteCode};
