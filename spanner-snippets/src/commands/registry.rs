use std::collections::BTreeMap;

use tracing::warn;

use super::{AdminCommand, CreateDatabase, DataCommand, QueryAlbums, WriteMutations, WriteUsingDml};

pub enum Handler {
    Admin(Box<dyn AdminCommand>),
    Data(Box<dyn DataCommand>),
}

impl Handler {
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin(_))
    }
}

/// Immutable map from command name to handler.
pub struct Registry {
    handlers: BTreeMap<String, Handler>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Every command this binary ships.
    pub fn standard() -> Self {
        Self::builder()
            .admin("createdatabase", CreateDatabase)
            .data("write", WriteMutations)
            .data("dmlwrite", WriteUsingDml)
            .data("query", QueryAlbums)
            .build()
    }

    pub fn get(&self, name: &str) -> Option<&Handler> {
        self.handlers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[derive(Default)]
pub struct RegistryBuilder {
    admin: BTreeMap<String, Box<dyn AdminCommand>>,
    data: BTreeMap<String, Box<dyn DataCommand>>,
}

impl RegistryBuilder {
    #[must_use]
    pub fn admin(mut self, name: &str, command: impl AdminCommand + 'static) -> Self {
        self.admin.insert(name.to_string(), Box::new(command));
        self
    }

    #[must_use]
    pub fn data(mut self, name: &str, command: impl DataCommand + 'static) -> Self {
        self.data.insert(name.to_string(), Box::new(command));
        self
    }

    /// Merges both tables. A name registered as both admin and data command
    /// resolves to the admin command.
    pub fn build(self) -> Registry {
        let mut handlers: BTreeMap<String, Handler> = self
            .data
            .into_iter()
            .map(|(name, cmd)| (name, Handler::Data(cmd)))
            .collect();

        for (name, cmd) in self.admin {
            if handlers.contains_key(&name) {
                warn!(command = %name, "command registered as both admin and data; using admin");
            }
            handlers.insert(name, Handler::Admin(cmd));
        }

        Registry { handlers }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{SpyAdminCommand, SpyDataCommand};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_standard_registry() {
        let registry = Registry::standard();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, vec!["createdatabase", "dmlwrite", "query", "write"]);

        assert!(registry.get("createdatabase").unwrap().is_admin());
        assert!(!registry.get("write").unwrap().is_admin());
        assert!(!registry.get("dmlwrite").unwrap().is_admin());
        assert!(!registry.get("query").unwrap().is_admin());
    }

    #[test]
    fn test_unknown_name_is_absent() {
        let registry = Registry::standard();
        assert!(registry.get("read").is_none());
        assert!(!registry.contains("CREATEDATABASE"));
    }

    #[test]
    fn test_admin_wins_on_collision_regardless_of_order() {
        let (admin, _) = SpyAdminCommand::new();
        let (data, _) = SpyDataCommand::new();
        let registry = Registry::builder().data("dup", data).admin("dup", admin).build();
        assert_eq!(registry.len(), 1);
        assert!(registry.get("dup").unwrap().is_admin());

        let (admin, _) = SpyAdminCommand::new();
        let (data, _) = SpyDataCommand::new();
        let registry = Registry::builder().admin("dup", admin).data("dup", data).build();
        assert!(registry.get("dup").unwrap().is_admin());
    }
}
