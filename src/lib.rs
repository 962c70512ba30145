//! Cabinet - a versioned, encrypted secret store.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Key + config bootstrap
//! │   ├── secrets       # Whole-secret document commands
//! │   ├── versions      # Version lifecycle commands
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── cabinet/      # Version lifecycle engine
//!     ├── compare       # Numeric-aware version ordering
//!     ├── config        # .cabinet.toml management
//!     ├── crypto        # AES-256-GCM encryption boundary
//!     ├── domain/       # Secret documents, namespaces, replies
//!     ├── keys          # Key material resolution
//!     └── store/        # Document store trait + backends
//! ```
//!
//! # Features
//!
//! - Versioned secret values under a project/service/secret namespace
//! - AES-256-GCM encryption with per-operation nonces; values are never
//!   stored in plaintext
//! - Numeric-aware "latest" resolution (`v2` before `v10`)
//! - Rollback by pruning everything above a target version
//! - Extensible document store backends (filesystem, in-memory)

pub mod cli;
pub mod core;
pub mod error;
