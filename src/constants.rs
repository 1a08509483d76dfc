//! Common constants used throughout the stamp application.

/// Name of the bundled template directory, resolved next to the executable
pub const DEFAULT_TEMPLATE: &str = "react-lib";

/// Extensions copied verbatim, never passed through the template engine
pub const SKIP_RENDER_EXTENSIONS: [&str; 2] = [".ts", ".tsx"];

/// Extensions excluded from the target entirely (empty in the default setup)
pub const SKIP_COPY_EXTENSIONS: [&str; 0] = [];
