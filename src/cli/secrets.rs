//! Secret document commands.

use dialoguer::Confirm;
use tracing::info;

use crate::cli::output;
use crate::core::domain::{EnvType, Namespace, SecretReply};
use crate::core::Cabinet;
use crate::error::{Result, ValidationError};

fn finish(reply: SecretReply) -> Result<()> {
    if !reply.status {
        output::error(&reply.message);
        std::process::exit(1);
    }

    output::success(&reply.message);
    Ok(())
}

/// Create a secret document.
pub fn create(ns: &Namespace, name: &str, env_name: &str, env_type: &str) -> Result<()> {
    let env_type: EnvType = env_type.parse().map_err(|reason| ValidationError::InvalidName {
        field: "env type",
        value: env_type.to_string(),
        reason,
    })?;

    info!("creating secret {} in {}", name, ns);
    let cabinet = Cabinet::open()?;
    finish(cabinet.create_secret(ns, name, env_name, env_type))
}

/// Show one secret document.
pub fn show(ns: &Namespace, name: &str) -> Result<()> {
    let cabinet = Cabinet::open()?;
    let reply = cabinet.get_secret(ns, name);

    if !reply.status {
        output::error(&reply.message);
        std::process::exit(1);
    }

    if let Some(secret) = reply.secret {
        println!();
        output::header(&output::name(&secret.secret_name));
        output::rule();
        output::kv("env", format!("{} ({})", secret.env_name, secret.env_type));
        output::kv("versions", secret.versions.len());
        output::kv("created", secret.created_at.to_rfc3339());
        output::kv("updated", secret.updated_at.to_rfc3339());
        output::kv("last access", secret.last_access_at.to_rfc3339());
    }

    Ok(())
}

/// List secret documents in the namespace.
pub fn list(ns: &Namespace, json: bool) -> Result<()> {
    let cabinet = Cabinet::open()?;
    let reply = cabinet.list_secrets(ns);

    if !reply.status {
        output::error(&reply.message);
        std::process::exit(1);
    }

    let secrets = reply.secrets.unwrap_or_default();

    if json {
        let result = serde_json::json!({
            "namespace": ns,
            "secrets": secrets,
            "count": secrets.len(),
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if secrets.is_empty() {
        output::dimmed("no secrets stored");
    } else {
        println!();
        output::header(&format!("{} secrets in {}", secrets.len(), output::name(&ns.to_string())));
        output::rule();
        for secret in &secrets {
            output::list_item(&format!(
                "{} ({}, {} versions)",
                secret.secret_name,
                secret.env_type,
                secret.versions.len()
            ));
        }
    }

    Ok(())
}

/// Delete a secret document after confirmation.
pub fn rm(ns: &Namespace, name: &str, yes: bool) -> Result<()> {
    if !yes {
        let prompt = format!("delete secret '{}' and all its versions?", name);
        if !Confirm::new().with_prompt(prompt).default(false).interact()? {
            output::dimmed("aborted");
            return Ok(());
        }
    }

    let cabinet = Cabinet::open()?;
    finish(cabinet.delete_secret(ns, name))
}
