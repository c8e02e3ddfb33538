use serde::{Deserialize, Serialize};

use crate::domain::connection::{
    Connection, ConnectionBody, ConnectionColor, ConnectionId, DEFAULT_HTTP_PORT,
    DEFAULT_USERNAME,
};

pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
pub struct ConnectionConfigFile {
    pub version: u32,
    #[serde(default)]
    pub connections: Vec<ConnectionConfigEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConnectionConfigEntry {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub secure: bool,
    #[serde(default)]
    pub database: String,
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub color: ConnectionColor,
}

fn default_port() -> u16 {
    DEFAULT_HTTP_PORT
}

fn default_username() -> String {
    DEFAULT_USERNAME.to_string()
}

impl ConnectionConfigEntry {
    pub fn from_connection(connection: &Connection) -> Self {
        let body = &connection.body;
        Self {
            id: connection.id.as_str().to_string(),
            name: body.name.clone(),
            host: body.host.clone(),
            port: body.port,
            secure: body.secure,
            database: body.database.clone(),
            username: body.username.clone(),
            password: body.password.clone(),
            color: body.color.clone(),
        }
    }

    pub fn to_connection(&self) -> Connection {
        Connection::with_id(
            ConnectionId::from_string(&self.id),
            ConnectionBody {
                name: self.name.clone(),
                host: self.host.clone(),
                port: self.port,
                secure: self.secure,
                database: self.database.clone(),
                username: self.username.clone(),
                password: self.password.clone(),
                color: self.color.clone(),
            },
        )
    }
}

impl ConnectionConfigFile {
    pub fn from_connections(connections: &[Connection]) -> Self {
        Self {
            version: CURRENT_VERSION,
            connections: connections
                .iter()
                .map(ConnectionConfigEntry::from_connection)
                .collect(),
        }
    }

    pub fn to_connections(&self) -> Vec<Connection> {
        self.connections
            .iter()
            .map(ConnectionConfigEntry::to_connection)
            .collect()
    }
}
