//! Version lifecycle commands.

use dialoguer::Confirm;
use tracing::info;

use crate::cli::output;
use crate::core::domain::{Namespace, Selection, VersionReply};
use crate::core::Cabinet;
use crate::error::Result;

fn selection(ns: &Namespace, secret: &str, decrypted: bool) -> Selection {
    let sel = Selection::new(ns.clone(), secret);
    if decrypted {
        sel.decrypted()
    } else {
        sel
    }
}

/// Report a reply: success message, or error message and exit code 1.
fn finish(reply: VersionReply) -> Result<()> {
    if !reply.status {
        output::error(&reply.message);
        std::process::exit(1);
    }

    output::success(&reply.message);
    Ok(())
}

/// Add a new version to a secret.
pub fn add(ns: &Namespace, secret: &str, version: &str, value: &str) -> Result<()> {
    info!("adding version {} to {}", version, secret);
    let cabinet = Cabinet::open()?;
    finish(cabinet.add_version(&selection(ns, secret, false), version, value))
}

/// Update the value of an existing version.
pub fn update(ns: &Namespace, secret: &str, version: &str, value: &str) -> Result<()> {
    info!("updating version {} of {}", version, secret);
    let cabinet = Cabinet::open()?;
    finish(cabinet.update_version(&selection(ns, secret, false), version, value))
}

/// Delete a version after confirmation.
pub fn rm(ns: &Namespace, secret: &str, version: &str, yes: bool) -> Result<()> {
    if !yes {
        let prompt = format!("delete version '{}' of '{}'?", version, secret);
        if !Confirm::new().with_prompt(prompt).default(false).interact()? {
            output::dimmed("aborted");
            return Ok(());
        }
    }

    let cabinet = Cabinet::open()?;
    finish(cabinet.remove_version(&selection(ns, secret, false), version))
}

/// Roll back to a target version after confirmation.
pub fn rollback(ns: &Namespace, secret: &str, version: &str, yes: bool) -> Result<()> {
    if !yes {
        let prompt = format!(
            "roll back '{}' to version '{}', deleting every newer version?",
            secret, version
        );
        if !Confirm::new().with_prompt(prompt).default(false).interact()? {
            output::dimmed("aborted");
            return Ok(());
        }
    }

    let cabinet = Cabinet::open()?;
    finish(cabinet.rollback(&selection(ns, secret, false), version))
}

/// Show the latest version of a secret.
pub fn latest(ns: &Namespace, secret: &str, decrypt: bool) -> Result<()> {
    let cabinet = Cabinet::open()?;
    let reply = cabinet.latest(&selection(ns, secret, decrypt));

    if !reply.status {
        output::error(&reply.message);
        std::process::exit(1);
    }

    if let Some(credential) = reply.credential {
        // Plain output for scripting - no decoration
        println!("{}", credential.value);
    }
    Ok(())
}

/// List all versions of a secret.
pub fn list(ns: &Namespace, secret: &str, decrypt: bool, json: bool) -> Result<()> {
    let cabinet = Cabinet::open()?;
    let reply = cabinet.list_versions(&selection(ns, secret, decrypt));

    if !reply.status {
        output::error(&reply.message);
        std::process::exit(1);
    }

    let versions = reply.versions.unwrap_or_default();

    if json {
        let result = serde_json::json!({
            "secret": secret,
            "versions": versions,
            "count": versions.len(),
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if versions.is_empty() {
        output::dimmed("no versions stored");
    } else {
        println!();
        output::header(&format!("{} versions of {}", versions.len(), output::name(secret)));
        output::rule();
        for credential in &versions {
            if decrypt {
                output::kv(&credential.version, &credential.value);
            } else {
                output::list_item(&credential.version);
            }
        }
    }

    Ok(())
}
