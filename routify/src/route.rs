/// A handler sequence paired with the path it is registered under.
///
/// The handler sequence is shared: re-prefixing a route during a merge produces
/// a new route that points at the same handlers.
#[derive(Debug)]
pub struct Route<H> {
    handlers: std::sync::Arc<[H]>,
    path: String,
}

impl<H> Route<H> {
    pub(crate) fn new(handlers: std::sync::Arc<[H]>, path: String) -> Self {
        Self { handlers, path }
    }

    pub(crate) fn prefixed(&self, prefix: &str) -> Self {
        Self {
            handlers: self.handlers.clone(),
            path: format!("{prefix}{path}", path = self.path),
        }
    }

    #[must_use]
    pub fn handlers(&self) -> &[H] {
        &self.handlers
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether both routes share the same handler sequence.
    #[must_use]
    pub fn shares_handlers(&self, other: &Self) -> bool {
        std::sync::Arc::ptr_eq(&self.handlers, &other.handlers)
    }
}

impl<H> Clone for Route<H> {
    fn clone(&self) -> Self {
        Self {
            handlers: self.handlers.clone(),
            path: self.path.clone(),
        }
    }
}
