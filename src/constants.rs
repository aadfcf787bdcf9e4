//! Common constants used throughout the skel application.

/// Parameter document candidates inside a template set, tried in order.
/// The first entry is the canonical location used when none exists yet.
pub const VALUES_FILES: [&str; 3] = ["values.yaml", "values.yml", "values.json"];

/// Subdirectory of a template set that holds its template entries
pub const TEMPLATES_DIR: &str = "templates";

/// Marker suffix stripped once from the end of rendered entry paths
pub const TEMPLATE_SUFFIX: &str = ".skl";

/// Environment variable consulted for the default editor command
pub const EDITOR_ENV: &str = "EDITOR";

/// Templates root relative to the user's home directory
pub const USER_TEMPLATES_DIR: &str = ".local/share/skel";

/// Fallback templates root when no home directory is available
pub const SYSTEM_TEMPLATES_ROOT: &str = "/usr/local/share/skel";
