//! Test fixtures and constants.

/// Certificate bytes from the reference scenario, base64 `AQID`.
pub const CERT_BYTES: &[u8] = &[0x01, 0x02, 0x03];

/// One answer per prompt, in prompt order.
pub struct Answers<'a> {
    pub app_name: &'a str,
    pub basic_auth_username: &'a str,
    pub basic_auth_password: &'a str,
    pub builder_org_name: &'a str,
    pub builder_repo_name: &'a str,
    pub builder_token: &'a str,
    pub builder_workflow_file_name: &'a str,
    pub profile_account_name: &'a str,
    pub profile_account_pass: &'a str,
    pub profile_cert_path: &'a str,
    pub profile_cert_pass: &'a str,
    pub profile_name: &'a str,
}

impl<'a> Answers<'a> {
    /// Reference scenario answers with the given certificate path.
    pub fn scenario(cert_path: &'a str) -> Self {
        Self {
            app_name: "demo",
            basic_auth_username: "u",
            basic_auth_password: "p",
            builder_org_name: "org",
            builder_repo_name: "repo",
            builder_token: "tok",
            builder_workflow_file_name: "",
            profile_account_name: "a@b.com",
            profile_account_pass: "pw",
            profile_cert_path: cert_path,
            profile_cert_pass: "cp",
            profile_name: "Main",
        }
    }

    /// Newline-terminated stdin for these answers.
    pub fn stdin(&self) -> String {
        [
            self.app_name,
            self.basic_auth_username,
            self.basic_auth_password,
            self.builder_org_name,
            self.builder_repo_name,
            self.builder_token,
            self.builder_workflow_file_name,
            self.profile_account_name,
            self.profile_account_pass,
            self.profile_cert_path,
            self.profile_cert_pass,
            self.profile_name,
        ]
        .iter()
        .map(|line| format!("{}\n", line))
        .collect()
    }
}
