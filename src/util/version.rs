pub const APP_NAME: &str = "MarginMint";
pub const APP_TAGLINE: &str = "CPG Margin Calculator";
pub const APP_AUTHOR: &str = "JUNE";
pub const APP_AUTHOR_URL: &str = "https://www.june.cx";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

/// Version string shown in the header: the git tag when the build was
/// made from one, otherwise the crate version.
pub fn version_label() -> String {
    if let Some(tag) = GIT_TAG {
        tag.to_string()
    } else {
        format!("v{}", APP_VERSION)
    }
}
