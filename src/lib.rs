//! Local form-submission echo server.
//!
//! Simulates a hosted forms backend so a static contact page can be
//! tested from a local server without cross-origin errors. POST bodies
//! are parsed and echoed to the terminal, every other request falls
//! through to static file serving from the working directory.
//!
//! ```rust,no_run
//! use form_echo::Server;
//!
//! #[tokio::main]
//! async fn main() {
//!     let server = Server::bind(([0, 0, 0, 0], 8000).into()).await.unwrap();
//!     server.serve().await.unwrap();
//! }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

mod error;
mod form;
mod handler;
mod req;
mod res;
mod server;
mod static_files;

pub use error::{Error, Result};
pub use form::Submission;
pub use req::Req;
pub use res::{Res, ResBuilder};
pub use server::Server;

/// Port the local server listens on. Fixed by design: the contact page
/// under test points at `http://localhost:8000`.
pub const PORT: u16 = 8000;
