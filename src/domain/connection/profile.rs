use serde::{Deserialize, Serialize};

use super::color::ConnectionColor;
use super::id::ConnectionId;

pub const DEFAULT_HTTP_PORT: u16 = 8123;
pub const DEFAULT_USERNAME: &str = "default";
pub const DEFAULT_COLOR: &str = "#000000";

/// Connection settings as entered in the connection dialog, before they are persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionBody {
    pub name: String,
    pub host: String,
    pub port: u16,
    pub secure: bool,
    pub database: String,
    pub username: String,
    pub password: String,
    pub color: ConnectionColor,
}

impl Default for ConnectionBody {
    fn default() -> Self {
        Self {
            name: String::new(),
            host: String::new(),
            port: DEFAULT_HTTP_PORT,
            secure: false,
            database: String::new(),
            username: DEFAULT_USERNAME.to_string(),
            password: String::new(),
            color: ConnectionColor::default(),
        }
    }
}

impl ConnectionBody {
    /// The connection name, or `host:port` when no name was given.
    pub fn display_name(&self) -> String {
        if self.name.trim().is_empty() {
            format!("{}:{}", self.host, self.port)
        } else {
            self.name.trim().to_string()
        }
    }

    fn scheme(&self) -> &'static str {
        if self.secure { "https" } else { "http" }
    }

    /// HTTP interface endpoint, e.g. `https://host:8443`.
    pub fn to_url(&self) -> String {
        format!("{}://{}:{}", self.scheme(), self.host, self.port)
    }

    /// For logging - password replaced with ****
    pub fn to_masked_url(&self) -> String {
        format!(
            "{}://{}:****@{}:{}/{}",
            self.scheme(),
            self.username,
            self.host,
            self.port,
            self.database
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub id: ConnectionId,
    #[serde(flatten)]
    pub body: ConnectionBody,
}

impl Connection {
    pub fn new(body: ConnectionBody) -> Self {
        Self {
            id: ConnectionId::new(),
            body,
        }
    }

    pub fn with_id(id: ConnectionId, body: ConnectionBody) -> Self {
        Self { id, body }
    }

    pub fn display_name(&self) -> String {
        self.body.display_name()
    }
}
