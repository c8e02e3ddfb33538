mod color;
mod id;
mod profile;

pub use color::{ConnectionColor, ConnectionColorError};
pub use id::ConnectionId;
pub use profile::{
    Connection, ConnectionBody, DEFAULT_COLOR, DEFAULT_HTTP_PORT, DEFAULT_USERNAME,
};
