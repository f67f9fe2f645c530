//! Constants used throughout workers-preview.
//!
//! Centralizes magic strings and configuration values.

/// Package runner used to invoke wrangler.
pub const PACKAGE_RUNNER: &str = "npx";

/// The wrangler package passed to the runner.
pub const WRANGLER_PACKAGE: &str = "@cloudflare/wrangler";

/// Wrangler project file in the deployment's working directory.
pub const WRANGLER_CONFIG: &str = "wrangler.toml";

/// Optional helper settings file.
pub const SETTINGS_FILE: &str = ".workers-preview.toml";

/// Environment copied and renamed when none is given.
pub const DEFAULT_ENVIRONMENT: &str = "preview";

/// Cloudflare REST API root.
pub const API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Child-process variable carrying the account id.
pub const ACCOUNT_ID_VAR: &str = "CF_ACCOUNT_ID";

/// Child-process variable carrying the API token.
pub const API_TOKEN_VAR: &str = "CF_API_TOKEN";

/// Substring in wrangler output that overrides a non-zero exit.
pub const SUCCESS_MARKER: &str = "Success";

/// Page size when listing namespaces over the API.
pub const NAMESPACE_PAGE_SIZE: u32 = 100;

/// Attribution appended to preview comments.
pub const COMMENT_FOOTER: &str =
    "<sub>[cloudflare-workers-preview](https://github.com/shidil/cloudflare-workers-preview)</sub>";

/// Width of the preview screenshot in comments.
pub const PREVIEW_IMAGE_WIDTH: u32 = 300;
