//! gh-prtree - Pull request dependency trees for GitHub
//!
//! This library fetches the open pull requests of a repository, rebuilds the
//! stacking relationships implied by their base and head branches, and renders
//! the result as a Mermaid flowchart, a Graphviz digraph, or JSON.
//!
//! # Architecture
//!
//! The crate is split into an effectful shell and a pure core:
//! - [`platform`], [`auth`], [`repo`] and [`fetch`] talk to GitHub and git
//! - [`graph`] builds the branch/PR graph and infers stacking links
//! - [`render`] serializes a graph in one of the supported formats
//!
//! The core never performs I/O; it receives a fully materialized list of
//! pull requests and returns strings.

pub mod auth;
pub mod config;
pub mod error;
pub mod fetch;
pub mod graph;
pub mod platform;
pub mod render;
pub mod repo;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
