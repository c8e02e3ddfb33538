use std::collections::HashMap;

use crate::domain::connection::{DEFAULT_COLOR, DEFAULT_HTTP_PORT, DEFAULT_USERNAME};
use crate::domain::{Connection, ConnectionBody, ConnectionColor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionField {
    Name,
    Host,
    Port,
    Secure,
    Database,
    Username,
    Password,
    Color,
}

impl ConnectionField {
    pub fn all() -> &'static [ConnectionField] {
        &[
            ConnectionField::Name,
            ConnectionField::Host,
            ConnectionField::Port,
            ConnectionField::Secure,
            ConnectionField::Database,
            ConnectionField::Username,
            ConnectionField::Password,
            ConnectionField::Color,
        ]
    }

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            ConnectionField::Host | ConnectionField::Port | ConnectionField::Username
        )
    }
}

/// Raw form values, one string per field, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionForm {
    pub name: String,
    pub host: String,
    pub port: String,
    pub secure: String,
    pub database: String,
    pub username: String,
    pub password: String,
    pub color: String,
}

impl Default for ConnectionForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            host: String::new(),
            port: DEFAULT_HTTP_PORT.to_string(),
            secure: false.to_string(),
            database: String::new(),
            username: DEFAULT_USERNAME.to_string(),
            password: String::new(),
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

impl ConnectionForm {
    pub fn from_body(body: &ConnectionBody) -> Self {
        Self {
            name: body.name.clone(),
            host: body.host.clone(),
            port: body.port.to_string(),
            secure: body.secure.to_string(),
            database: body.database.clone(),
            username: body.username.clone(),
            password: body.password.clone(),
            color: body.color.to_string(),
        }
    }

    pub fn value(&self, field: ConnectionField) -> &str {
        match field {
            ConnectionField::Name => &self.name,
            ConnectionField::Host => &self.host,
            ConnectionField::Port => &self.port,
            ConnectionField::Secure => &self.secure,
            ConnectionField::Database => &self.database,
            ConnectionField::Username => &self.username,
            ConnectionField::Password => &self.password,
            ConnectionField::Color => &self.color,
        }
    }

    pub fn value_mut(&mut self, field: ConnectionField) -> &mut String {
        match field {
            ConnectionField::Name => &mut self.name,
            ConnectionField::Host => &mut self.host,
            ConnectionField::Port => &mut self.port,
            ConnectionField::Secure => &mut self.secure,
            ConnectionField::Database => &mut self.database,
            ConnectionField::Username => &mut self.username,
            ConnectionField::Password => &mut self.password,
            ConnectionField::Color => &mut self.color,
        }
    }

    /// `None` while any field fails to parse; run validation to learn which.
    pub fn to_body(&self) -> Option<ConnectionBody> {
        let port = self.port.trim().parse::<u16>().ok().filter(|p| *p > 0)?;
        let secure = self.secure.trim().parse::<bool>().ok()?;
        let color = ConnectionColor::new(self.color.as_str()).ok()?;
        if self.host.trim().is_empty() || self.username.trim().is_empty() {
            return None;
        }

        Some(ConnectionBody {
            name: self.name.trim().to_string(),
            host: self.host.trim().to_string(),
            port,
            secure,
            database: self.database.trim().to_string(),
            username: self.username.trim().to_string(),
            password: self.password.clone(),
            color,
        })
    }
}

/// Async request the dialog is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogRequest {
    Testing,
    Saving,
}

#[derive(Debug, Clone, Default)]
pub struct ConnectionDialogState {
    pub is_open: bool,
    /// `Some` when editing an existing connection, `None` when creating one.
    pub editing: Option<Connection>,
    pub form: ConnectionForm,
    /// Last test succeeded and the form has not changed since.
    pub tested: bool,
    pub validation_errors: HashMap<ConnectionField, String>,
    pub pending: Option<DialogRequest>,
}

impl ConnectionDialogState {
    pub fn open(&mut self, connection: Option<Connection>) {
        self.reset();
        if let Some(connection) = &connection {
            self.form = ConnectionForm::from_body(&connection.body);
        }
        self.editing = connection;
        self.is_open = true;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn has_errors(&self) -> bool {
        !self.validation_errors.is_empty()
    }
}
