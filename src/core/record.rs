//! Configuration record.
//!
//! Holds every value collected for one run. Fields are asked in a fixed
//! order and the record is only handed to rendering once complete.

use tracing::{debug, info};
use zeroize::Zeroize;

use crate::core::cert;
use crate::core::constants::DEFAULT_WORKFLOW_FILE;
use crate::core::prompt::{Field, Prompter};
use crate::error::Result;

pub const APP_NAME: Field = Field {
    name: "app_name",
    prompt: "Enter a name for your fly.io app",
    secret: false,
};

pub const BASIC_AUTH_USERNAME: Field = Field {
    name: "basic_auth_username",
    prompt: "Enter the username you'd like to use to log into your app",
    secret: false,
};

pub const BASIC_AUTH_PASSWORD: Field = Field {
    name: "basic_auth_password",
    prompt: "And the password",
    secret: true,
};

pub const BUILDER_ORG_NAME: Field = Field {
    name: "builder_org_name",
    prompt: "Enter the GitHub username that owns your builder repo (created from https://github.com/SignTools/SignTools-CI)",
    secret: false,
};

pub const BUILDER_REPO_NAME: Field = Field {
    name: "builder_repo_name",
    prompt: "Enter the name of the builder repo you created from the template",
    secret: false,
};

pub const BUILDER_TOKEN: Field = Field {
    name: "builder_token",
    prompt: "Enter the GitHub token you created for the builder repo",
    secret: true,
};

pub const BUILDER_WORKFLOW_FILE_NAME: Field = Field {
    name: "builder_workflow_file_name",
    prompt: "Your builder repository's workflow file name. Leave blank if you didn't change it from the default 'sign.yml'",
    secret: false,
};

pub const PROFILE_ACCOUNT_NAME: Field = Field {
    name: "profile_account_name",
    prompt: "Your Apple developer account's name (e-mail)",
    secret: false,
};

pub const PROFILE_ACCOUNT_PASS: Field = Field {
    name: "profile_account_pass",
    prompt: "Your Apple developer account's password",
    secret: true,
};

pub const PROFILE_CERT_PATH: Field = Field {
    name: "profile_cert_path",
    prompt: "Your signing profile's certificate (p12). Drag and drop the file into the terminal window, or enter the path to the file",
    secret: false,
};

pub const PROFILE_CERT_PASS: Field = Field {
    name: "profile_cert_pass",
    prompt: "Your signing profile's certificate password",
    secret: true,
};

pub const PROFILE_NAME: Field = Field {
    name: "profile_name",
    prompt: "A friendly name to display your signing profile on the website",
    secret: false,
};

/// Every prompt in the order it is asked.
pub const FIELDS: [Field; 12] = [
    APP_NAME,
    BASIC_AUTH_USERNAME,
    BASIC_AUTH_PASSWORD,
    BUILDER_ORG_NAME,
    BUILDER_REPO_NAME,
    BUILDER_TOKEN,
    BUILDER_WORKFLOW_FILE_NAME,
    PROFILE_ACCOUNT_NAME,
    PROFILE_ACCOUNT_PASS,
    PROFILE_CERT_PATH,
    PROFILE_CERT_PASS,
    PROFILE_NAME,
];

/// All values substituted into the deployment descriptor.
///
/// String contents are wiped when the record is dropped. The record is
/// not `Clone`, so no copy of the secrets outlives that wipe:
///
/// ```compile_fail
/// fn copy(record: &flycfg::ConfigRecord) -> flycfg::ConfigRecord {
///     record.clone()
/// }
/// ```
pub struct ConfigRecord {
    pub app_name: String,
    pub basic_auth_username: String,
    pub basic_auth_password: String,
    pub builder_org_name: String,
    pub builder_repo_name: String,
    pub builder_token: String,
    pub builder_workflow_file_name: String,
    pub profile_account_name: String,
    pub profile_account_pass: String,
    /// Base64 of the certificate file, not its path.
    pub profile_cert_base64: String,
    pub profile_cert_pass: String,
    pub profile_name: String,
}

impl ConfigRecord {
    /// Ask for every field in order and build a complete record.
    ///
    /// A blank workflow file name becomes `sign.yml`. The certificate is
    /// read as soon as its path is entered, after stripping one layer of
    /// surrounding double quotes.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Unavailable` if input ends early, or
    /// `FileError::Certificate` if the certificate cannot be read.
    pub fn collect<P: Prompter + ?Sized>(prompter: &mut P) -> Result<Self> {
        let app_name = prompter.ask(&APP_NAME)?;
        let basic_auth_username = prompter.ask(&BASIC_AUTH_USERNAME)?;
        let basic_auth_password = prompter.ask(&BASIC_AUTH_PASSWORD)?;
        let builder_org_name = prompter.ask(&BUILDER_ORG_NAME)?;
        let builder_repo_name = prompter.ask(&BUILDER_REPO_NAME)?;
        let builder_token = prompter.ask(&BUILDER_TOKEN)?;

        let mut builder_workflow_file_name = prompter.ask(&BUILDER_WORKFLOW_FILE_NAME)?;
        if builder_workflow_file_name.is_empty() {
            debug!("using default workflow file");
            builder_workflow_file_name = DEFAULT_WORKFLOW_FILE.to_string();
        }

        let profile_account_name = prompter.ask(&PROFILE_ACCOUNT_NAME)?;
        let profile_account_pass = prompter.ask(&PROFILE_ACCOUNT_PASS)?;

        let cert_path = prompter.ask(&PROFILE_CERT_PATH)?;
        let profile_cert_base64 = cert::encode_file(cert::unquote(&cert_path))?;

        let profile_cert_pass = prompter.ask(&PROFILE_CERT_PASS)?;
        let profile_name = prompter.ask(&PROFILE_NAME)?;

        info!(app = %app_name, "configuration collected");

        Ok(Self {
            app_name,
            basic_auth_username,
            basic_auth_password,
            builder_org_name,
            builder_repo_name,
            builder_token,
            builder_workflow_file_name,
            profile_account_name,
            profile_account_pass,
            profile_cert_base64,
            profile_cert_pass,
            profile_name,
        })
    }
}

impl std::fmt::Debug for ConfigRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const REDACTED: &str = "<redacted>";

        f.debug_struct("ConfigRecord")
            .field("app_name", &self.app_name)
            .field("basic_auth_username", &self.basic_auth_username)
            .field("basic_auth_password", &REDACTED)
            .field("builder_org_name", &self.builder_org_name)
            .field("builder_repo_name", &self.builder_repo_name)
            .field("builder_token", &REDACTED)
            .field("builder_workflow_file_name", &self.builder_workflow_file_name)
            .field("profile_account_name", &self.profile_account_name)
            .field("profile_account_pass", &REDACTED)
            .field("profile_cert_base64", &REDACTED)
            .field("profile_cert_pass", &REDACTED)
            .field("profile_name", &self.profile_name)
            .finish()
    }
}

impl Drop for ConfigRecord {
    fn drop(&mut self) {
        self.app_name.zeroize();
        self.basic_auth_username.zeroize();
        self.basic_auth_password.zeroize();
        self.builder_org_name.zeroize();
        self.builder_repo_name.zeroize();
        self.builder_token.zeroize();
        self.builder_workflow_file_name.zeroize();
        self.profile_account_name.zeroize();
        self.profile_account_pass.zeroize();
        self.profile_cert_base64.zeroize();
        self.profile_cert_pass.zeroize();
        self.profile_name.zeroize();
    }
}
