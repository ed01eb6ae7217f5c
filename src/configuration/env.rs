//! Build-environment helpers.
//!
//! The demos show extra debug scaffolding (axes rig) in development
//! builds only, so the scenes stay clean in release.

/// Whether this is a development build.
pub fn is_dev() -> bool {
    cfg!(debug_assertions)
}
