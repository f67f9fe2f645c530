//! Test fixtures and constants.

/// wrangler.toml with a `preview` template environment and a site bucket.
pub const MANIFEST: &str = r#"name = "my-site"
type = "webpack"
account_id = ""
workers_dev = true

[site]
bucket = "./public"

[env.preview]
workers_dev = true
"#;

/// wrangler.toml with no env sections.
pub const MANIFEST_NO_ENV: &str = "name = \"my-site\"\ntype = \"webpack\"\n";

/// `kv:namespace list` output with progress noise around the JSON.
pub const NAMESPACE_LISTING: &str = r#"🕵️  Fetching namespaces...
[
  {
    "id": "abc123",
    "title": "__pr-42-workers_sites_assets"
  },
  {
    "id": "def456",
    "title": "__main-workers_sites_assets"
  }
]
"#;
