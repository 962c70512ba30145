//! Whole-secret document operations.
//!
//! Create, fetch, list, and delete secret documents within a namespace.
//! The version lifecycle never deletes a secret document; only these
//! operations do.

use tracing::{error, info};

use super::Cabinet;
use crate::core::domain::{EnvType, Namespace, Secret, SecretReply};
use crate::core::store::Insert;
use crate::core::validation::validate_name;
use crate::error::{Result, SecretError};

fn fail(err: crate::error::Error) -> SecretReply {
    error!(error = %err, "secret operation failed");
    SecretReply::fail(err.to_string())
}

fn validate_namespace(ns: &Namespace) -> Result<()> {
    validate_name("project", &ns.project_name)?;
    validate_name("service", &ns.service_name)?;

    Ok(())
}

impl Cabinet {
    /// Create an empty secret document.
    pub fn create_secret(
        &self,
        ns: &Namespace,
        name: &str,
        env_name: &str,
        env_type: EnvType,
    ) -> SecretReply {
        self.try_create(ns, name, env_name, env_type)
            .unwrap_or_else(fail)
    }

    fn try_create(
        &self,
        ns: &Namespace,
        name: &str,
        env_name: &str,
        env_type: EnvType,
    ) -> Result<SecretReply> {
        validate_namespace(ns)?;
        validate_name("secret", name)?;
        validate_name("env", env_name)?;

        let secret = Secret::new(name, env_name, env_type);
        match self.store.insert(ns, &secret)? {
            Insert::Created => {}
            Insert::AlreadyExists => {
                return Err(SecretError::AlreadyExists(name.to_string()).into())
            }
        }

        info!(namespace = %ns, secret = %name, "secret created");
        Ok(SecretReply::ok(format!("secret '{}' created", name)).with_secret(Some(secret)))
    }

    /// Fetch one secret document by name.
    pub fn get_secret(&self, ns: &Namespace, name: &str) -> SecretReply {
        self.try_get(ns, name).unwrap_or_else(fail)
    }

    fn try_get(&self, ns: &Namespace, name: &str) -> Result<SecretReply> {
        validate_namespace(ns)?;
        validate_name("secret", name)?;

        let secret = self
            .store
            .read(ns, name)?
            .ok_or_else(|| SecretError::NotFound(name.to_string()))?;

        Ok(SecretReply::ok(format!("secret '{}' found", name)).with_secret(Some(secret)))
    }

    /// List all secret documents in a namespace.
    pub fn list_secrets(&self, ns: &Namespace) -> SecretReply {
        self.try_list_secrets(ns).unwrap_or_else(fail)
    }

    fn try_list_secrets(&self, ns: &Namespace) -> Result<SecretReply> {
        validate_namespace(ns)?;

        let secrets = self.store.list(ns)?;
        Ok(SecretReply::ok(format!("{} secret(s) in '{}'", secrets.len(), ns))
            .with_secrets(secrets))
    }

    /// Delete a whole secret document, including all its versions.
    pub fn delete_secret(&self, ns: &Namespace, name: &str) -> SecretReply {
        self.try_delete(ns, name).unwrap_or_else(fail)
    }

    fn try_delete(&self, ns: &Namespace, name: &str) -> Result<SecretReply> {
        validate_namespace(ns)?;
        validate_name("secret", name)?;

        let deleted = self.store.remove(ns, name)?;
        if deleted == 0 {
            return Err(SecretError::NotFound(name.to_string()).into());
        }

        info!(namespace = %ns, secret = %name, "secret deleted");
        Ok(SecretReply::ok(format!("secret '{}' deleted", name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::crypto::Key;
    use crate::core::store::Memory;

    fn ns() -> Namespace {
        Namespace::new("billing", "api")
    }

    fn cabinet() -> Cabinet {
        Cabinet::with_store(Memory::new(), Key::derive("secrets test key"))
    }

    #[test]
    fn test_create_and_duplicate() {
        let cabinet = cabinet();

        let reply = cabinet.create_secret(&ns(), "db-password", "primary", EnvType::Test);
        assert!(reply.status);
        assert!(reply.secret.unwrap().versions.is_empty());

        let reply = cabinet.create_secret(&ns(), "db-password", "primary", EnvType::Test);
        assert!(!reply.status);
        assert!(reply.message.contains("already exists"));
    }

    #[test]
    fn test_get_and_list() {
        let cabinet = cabinet();
        cabinet.create_secret(&ns(), "alpha", "primary", EnvType::Development);
        cabinet.create_secret(&ns(), "beta", "primary", EnvType::Production);

        let reply = cabinet.get_secret(&ns(), "alpha");
        assert!(reply.status);
        assert_eq!(reply.secret.unwrap().env_type, EnvType::Development);

        let reply = cabinet.get_secret(&ns(), "missing");
        assert!(!reply.status);

        let reply = cabinet.list_secrets(&ns());
        assert_eq!(reply.secrets.unwrap().len(), 2);
    }

    #[test]
    fn test_delete() {
        let cabinet = cabinet();
        cabinet.create_secret(&ns(), "doomed", "primary", EnvType::Test);

        let reply = cabinet.delete_secret(&ns(), "doomed");
        assert!(reply.status);

        let reply = cabinet.delete_secret(&ns(), "doomed");
        assert!(!reply.status);
        assert!(reply.message.contains("not found"));
    }
}
