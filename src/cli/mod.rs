//! Command-line interface.

pub mod completions;
pub mod init;
pub mod output;
pub mod secrets;
pub mod versions;

use clap::{Parser, Subcommand};

use crate::core::domain::Namespace;
use crate::error::Result;

/// Cabinet - versioned, encrypted secret store.
#[derive(Parser)]
#[command(
    name = "cabinet",
    about = "Versioned, encrypted secret store",
    version
)]
pub struct Cli {
    /// Project name (top level of the namespace)
    #[arg(short, long, global = true, env = "CABINET_PROJECT", default_value = "default")]
    pub project: String,

    /// Service name (second level of the namespace)
    #[arg(short, long, global = true, env = "CABINET_SERVICE", default_value = "default")]
    pub service: String,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate an encryption key and write .cabinet.toml
    Init,

    /// Manage secret documents
    Secret {
        #[command(subcommand)]
        action: SecretAction,
    },

    /// Add a new version to a secret
    Add {
        /// Secret name
        secret: String,
        /// Version identifier (e.g., v1)
        version: String,
        /// Plaintext value (encrypted before storage)
        value: String,
    },

    /// Update the value of an existing version
    Update {
        /// Secret name
        secret: String,
        /// Version identifier
        version: String,
        /// New plaintext value
        value: String,
    },

    /// Delete a version
    Rm {
        /// Secret name
        secret: String,
        /// Version identifier
        version: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Roll back to a target version, deleting everything newer
    Rollback {
        /// Secret name
        secret: String,
        /// Target version identifier
        version: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the latest version of a secret
    Latest {
        /// Secret name
        secret: String,
        /// Print the decrypted value instead of ciphertext
        #[arg(long)]
        decrypt: bool,
    },

    /// List all versions of a secret
    List {
        /// Secret name
        secret: String,
        /// Show decrypted values instead of ciphertext
        #[arg(long)]
        decrypt: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Secret document subcommands.
#[derive(Subcommand)]
pub enum SecretAction {
    /// Create a secret document
    Create {
        /// Secret name
        name: String,
        /// Environment name
        #[arg(long, default_value = "default")]
        env_name: String,
        /// Environment type: production, test, or development
        #[arg(long, default_value = "development")]
        env_type: String,
    },

    /// Show one secret document
    Show {
        /// Secret name
        name: String,
    },

    /// List secret documents in the namespace
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a secret document and all its versions
    Rm {
        /// Secret name
        name: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(cli: Cli) -> Result<()> {
    use Command::*;

    let namespace = Namespace::new(cli.project, cli.service);

    match cli.command {
        Init => init::execute(),
        Secret { action } => match action {
            SecretAction::Create {
                name,
                env_name,
                env_type,
            } => secrets::create(&namespace, &name, &env_name, &env_type),
            SecretAction::Show { name } => secrets::show(&namespace, &name),
            SecretAction::List { json } => secrets::list(&namespace, json),
            SecretAction::Rm { name, yes } => secrets::rm(&namespace, &name, yes),
        },
        Add {
            secret,
            version,
            value,
        } => versions::add(&namespace, &secret, &version, &value),
        Update {
            secret,
            version,
            value,
        } => versions::update(&namespace, &secret, &version, &value),
        Rm {
            secret,
            version,
            yes,
        } => versions::rm(&namespace, &secret, &version, yes),
        Rollback {
            secret,
            version,
            yes,
        } => versions::rollback(&namespace, &secret, &version, yes),
        Latest { secret, decrypt } => versions::latest(&namespace, &secret, decrypt),
        List {
            secret,
            decrypt,
            json,
        } => versions::list(&namespace, &secret, decrypt, json),
        Completions { shell } => completions::execute(shell),
    }
}
