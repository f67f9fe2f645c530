//! workers-preview - Cloudflare Workers preview deployments for CI.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── publish       # Register, publish, upload secrets
//! │   ├── teardown      # Delete script and assets namespace
//! │   ├── comment       # PR comment fragments
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # .workers-preview.toml settings
//!     ├── exec          # External command runner
//!     ├── wrangler      # wrangler invocation convention
//!     ├── manifest      # wrangler.toml environment edits
//!     ├── secrets       # Secret name -> value mapping
//!     ├── publish       # Publish sequence
//!     ├── api           # Cloudflare REST client
//!     ├── namespace     # KV namespace discovery
//!     ├── teardown      # Teardown sequence
//!     └── comment       # Comment formatting
//! ```
//!
//! # Example
//!
//! ```
//! use workers_preview::core::comment::{format_image, PreviewImage};
//!
//! let html = format_image(&PreviewImage {
//!     building_log_url: "https://ci/log/1".to_string(),
//!     image_url: "https://img/1.png".to_string(),
//! });
//! assert_eq!(html, r#"<a href="https://ci/log/1"><img width="300" src="https://img/1.png"></a>"#);
//! ```

pub mod cli;
pub mod core;
pub mod error;
