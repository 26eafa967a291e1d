pub const APP_NAME: &str = "SwiftPoint Logistics";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");
pub const GIT_COMMIT: Option<&str> = option_env!("GIT_COMMIT");

pub const SUPPORT_PHONE: &str = "0722 250 875";
pub const SUPPORT_EMAIL: &str = "support@swiftpointlogistics.co.ke";

/// Release tag when built from a tagged checkout, otherwise the crate version,
/// with the short commit appended when known.
pub fn version_label() -> String {
    let release = GIT_TAG.map_or_else(|| format!("v{APP_VERSION}"), str::to_string);
    match GIT_COMMIT {
        Some(commit) => format!("{release} ({commit})"),
        None => release,
    }
}
