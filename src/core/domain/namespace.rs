//! Namespace type.
//!
//! A namespace is the `(projectName, serviceName)` pair that identifies
//! where a secret's documents live: one database per project, one
//! collection per service in document-database terms; one directory level
//! each in the filesystem backend.

use serde::{Deserialize, Serialize};

/// Storage location of a secret: project plus service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Namespace {
    pub project_name: String,
    pub service_name: String,
}

impl Namespace {
    pub fn new(project_name: impl Into<String>, service_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            service_name: service_name.into(),
        }
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.project_name, self.service_name)
    }
}
