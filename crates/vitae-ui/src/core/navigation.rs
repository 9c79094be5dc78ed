//! Navigation seam used by commands that leave the current view.

/// Client-side router.
pub trait Router {
    /// Navigate to an in-app path.
    fn navigate_to(&self, path: &str);
}
