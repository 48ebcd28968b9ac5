// ABOUTME: Adds a public key to root's authorized_keys inside an LXD container.
// ABOUTME: Provides the container file transport and the pull-merge-push pipeline.

//! # addkey-lxd
//!
//! Pull-modify-push of `/root/.ssh/authorized_keys` inside a container.
//!
//! The [`Transport`] trait abstracts moving a whole file in or out of a
//! container; [`LxcTransport`] implements it with `lxc file pull` and
//! `lxc file push`. [`add_key`] runs the pipeline against any transport.
//!
//! ## Example
//!
//! ```no_run
//! use addkey_lxd::{add_key, LxcTransport, RemoteFile};
//! use std::path::Path;
//!
//! let transport = LxcTransport::default();
//! let remote = RemoteFile::root_authorized_keys("web1");
//! let added = add_key(&transport, &remote, Path::new("/home/me/.ssh/id_rsa.pub"))
//!     .expect("key should be added");
//! println!("added {}", added.algorithm());
//! ```

mod error;
mod pipeline;
mod transport;

pub use error::{AddKeyError, Result, TransportError};
pub use pipeline::add_key;
pub use transport::{
    FileAttrs, LxcTransport, RemoteFile, Transport, DEFAULT_LXC_BINARY, ROOT_AUTHORIZED_KEYS,
};
