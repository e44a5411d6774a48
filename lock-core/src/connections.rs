//! Identity provider connections enabled for the widget.

/// A username/password connection hosted by the identity service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConnection {
    pub name: String,
    /// Users of this connection sign in with a username besides their email.
    pub requires_username: bool,
}

impl DatabaseConnection {
    /// Connection named `name`.
    pub fn new(name: impl Into<String>, requires_username: bool) -> Self {
        Self {
            name: name.into(),
            requires_username,
        }
    }
}

/// Read access to the configured connections.
pub trait Connections: Send + Sync {
    fn databases(&self) -> &[DatabaseConnection];

    /// The connection used by database screens (the first one configured).
    fn database(&self) -> Option<&DatabaseConnection> {
        self.databases().first()
    }

    fn is_empty(&self) -> bool {
        self.databases().is_empty()
    }

    /// Whether any database connection asks for a username.
    fn requires_username(&self) -> bool {
        self.databases().iter().any(|db| db.requires_username)
    }
}

/// Connections configured locally instead of fetched from the service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfflineConnections {
    databases: Vec<DatabaseConnection>,
}

impl OfflineConnections {
    /// No connections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a database connection.
    pub fn database(
        &mut self,
        name: impl Into<String>,
        requires_username: bool,
    ) -> &mut Self {
        self.databases
            .push(DatabaseConnection::new(name, requires_username));
        self
    }

    /// Keep only the connections named in `allowed`. An empty list keeps
    /// everything.
    pub fn select<S: AsRef<str>>(&self, allowed: &[S]) -> Self {
        if allowed.is_empty() {
            return self.clone();
        }

        let databases = self
            .databases
            .iter()
            .filter(|db| allowed.iter().any(|name| name.as_ref() == db.name))
            .cloned()
            .collect();
        Self { databases }
    }
}

impl Connections for OfflineConnections {
    fn databases(&self) -> &[DatabaseConnection] {
        &self.databases
    }
}
