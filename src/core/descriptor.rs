//! Deployment descriptor rendering and writing.
//!
//! The descriptor is a fly.io `fly.toml`. Values are substituted verbatim:
//! a quote or newline inside a value is not escaped and can produce a
//! document fly.io will reject.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::core::record::ConfigRecord;
use crate::error::{FileError, Result};

/// Render the descriptor text for a complete record.
pub fn render(record: &ConfigRecord) -> String {
    format!(
        r#"app = "{app_name}"
"kill_signal" = "SIGINT"
"kill_timeout" = 5
"processes" = []

[env]
    BASIC_AUTH_ENABLE = "true"
    BASIC_AUTH_USERNAME = "{basic_auth_username}"
    BASIC_AUTH_PASSWORD = "{basic_auth_password}"
    BUILDER_GITHUB_ENABLED = "true"
    BUILDER_GITHUB_ORG_NAME = "{builder_org_name}"
    BUILDER_GITHUB_REPO_NAME = "{builder_repo_name}"
    BUILDER_GITHUB_TOKEN = "{builder_token}"
    BUILDER_GITHUB_WORKFLOW_FILE_NAME = "{builder_workflow_file_name}"
    PROFILE_ACCOUNT_NAME = "{profile_account_name}"
    PROFILE_ACCOUNT_PASS = "{profile_account_pass}"
    PROFILE_CERT_BASE64 = "{profile_cert_base64}"
    PROFILE_CERT_PASS = "{profile_cert_pass}"
    PROFILE_NAME = "{profile_name}"
    REDIRECT_HTTPS = "true"

[experimental]
  allowed_public_ports = []
  auto_rollback = true

[[services]]
  http_checks = []
  internal_port = 8080
  processes = ["app"]
  protocol = "tcp"
  script_checks = []
  [services.concurrency]
    hard_limit = 25
    soft_limit = 20
    type = "connections"

  [[services.ports]]
    force_https = true
    handlers = ["http"]
    port = 80

  [[services.ports]]
    handlers = ["tls", "http"]
    port = 443

  [[services.tcp_checks]]
    grace_period = "1s"
    interval = "15s"
    restart_limit = 0
    timeout = "2s"
"#,
        app_name = record.app_name,
        basic_auth_username = record.basic_auth_username,
        basic_auth_password = record.basic_auth_password,
        builder_org_name = record.builder_org_name,
        builder_repo_name = record.builder_repo_name,
        builder_token = record.builder_token,
        builder_workflow_file_name = record.builder_workflow_file_name,
        profile_account_name = record.profile_account_name,
        profile_account_pass = record.profile_account_pass,
        profile_cert_base64 = record.profile_cert_base64,
        profile_cert_pass = record.profile_cert_pass,
        profile_name = record.profile_name,
    )
}

/// Write the descriptor, creating or truncating `path`.
///
/// The write is not atomic: a crash part way through can leave a
/// truncated file behind.
///
/// # Errors
///
/// Returns `FileError::Write` if the file cannot be created or written.
pub fn persist(path: impl AsRef<Path>, text: &str) -> Result<()> {
    let path = path.as_ref();
    let wrap = |source: std::io::Error| FileError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(path)
        .map_err(wrap)?;
    file.write_all(text.as_bytes()).map_err(wrap)?;
    file.flush().map_err(wrap)?;

    debug!(path = %path.display(), bytes = text.len(), "descriptor written");
    Ok(())
}
