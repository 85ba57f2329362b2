//! Runtime services around the catalog: event broker, logging, and HTTP serving.

pub mod graphql;
pub mod http_server;
pub mod logging;
pub mod pubsub;

pub use graphql::GraphqlService;
pub use logging::init_tracing;
pub use pubsub::{BOOK_ADDED, BookBroker, Broker};
