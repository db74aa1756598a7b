use crate::{Route, Server, Verb};

/// What a path is computed for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Context {
    /// Prefix applied to routes merged from a child. Always carries the parameter.
    Prefix,
    /// A route registered for the given verb. Carries the parameter for member verbs only.
    Verb(Verb),
}

impl From<Verb> for Context {
    fn from(verb: Verb) -> Self {
        Self::Verb(verb)
    }
}

/// Declarative set of routes for one resource.
///
/// A router named `accounts` with parameter `accountId` registers collection
/// routes (`list`, `post`) under `/accounts` and member routes (`del`, `get`,
/// `patch`, `put`) under `/accounts/:accountId`. Routers nest with
/// [`extend`](Self::extend) and are replayed onto a [`Server`] with
/// [`routify`](Self::routify).
#[derive(Debug)]
pub struct Router<H> {
    name: Option<String>,
    param: Option<String>,
    routes: [Vec<Route<H>>; 6],
}

impl<H> Router<H> {
    #[must_use]
    pub fn new(name: Option<String>, param: Option<String>) -> Self {
        Self {
            name: name.filter(|n| !n.is_empty()),
            param: param.filter(|p| !p.is_empty()),
            routes: Default::default(),
        }
    }

    /// Router contributing no path segment.
    #[must_use]
    pub fn root() -> Self {
        Self::new(None, None)
    }

    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(Some(name.into()), None)
    }

    #[must_use]
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = Some(param.into()).filter(|p| !p.is_empty());
        self
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn param(&self) -> Option<&str> {
        self.param.as_deref()
    }

    /// Computes the path this router contributes in the given context.
    ///
    /// An unnamed router contributes nothing, regardless of its parameter.
    #[must_use]
    pub fn make_path(&self, context: impl Into<Context>) -> String {
        let Some(name) = &self.name else {
            return String::new();
        };

        let use_param = match context.into() {
            Context::Prefix => true,
            Context::Verb(verb) => verb.is_member(),
        };

        match &self.param {
            Some(param) if use_param => format!("/{name}/:{param}"),
            _ => format!("/{name}"),
        }
    }

    #[must_use]
    pub fn prefix(&self) -> String {
        self.make_path(Context::Prefix)
    }

    #[must_use]
    pub fn path_for(&self, verb: Verb) -> String {
        self.make_path(verb)
    }

    pub fn del<I: IntoIterator<Item = H>>(&mut self, handlers: I) -> &mut Self {
        self.register(Verb::Del, handlers)
    }

    pub fn get<I: IntoIterator<Item = H>>(&mut self, handlers: I) -> &mut Self {
        self.register(Verb::Get, handlers)
    }

    pub fn list<I: IntoIterator<Item = H>>(&mut self, handlers: I) -> &mut Self {
        self.register(Verb::List, handlers)
    }

    pub fn patch<I: IntoIterator<Item = H>>(&mut self, handlers: I) -> &mut Self {
        self.register(Verb::Patch, handlers)
    }

    pub fn post<I: IntoIterator<Item = H>>(&mut self, handlers: I) -> &mut Self {
        self.register(Verb::Post, handlers)
    }

    pub fn put<I: IntoIterator<Item = H>>(&mut self, handlers: I) -> &mut Self {
        self.register(Verb::Put, handlers)
    }

    /// Appends a route for `verb`. An empty handler sequence is kept as is.
    pub fn register<I: IntoIterator<Item = H>>(&mut self, verb: Verb, handlers: I) -> &mut Self {
        let handlers = handlers.into_iter().collect::<std::sync::Arc<[H]>>();
        let path = self.path_for(verb);

        tracing::trace!(%verb, %path, handlers = handlers.len(), "Registering route");
        self.routes[verb.index()].push(Route::new(handlers, path));
        self
    }

    #[must_use]
    pub fn routes_for(&self, verb: Verb) -> &[Route<H>] {
        &self.routes[verb.index()]
    }

    /// All routes, verb by verb in [`Verb::ORDER`], each verb in list order.
    pub fn routes(&self) -> impl Iterator<Item = (Verb, &Route<H>)> + '_ {
        Verb::ORDER.into_iter().flat_map(move |verb| {
            self.routes_for(verb)
                .iter()
                .map(move |route| (verb, route))
        })
    }

    pub fn iterate_routes<F: FnMut(Verb, &Route<H>)>(&self, mut visitor: F) {
        for (verb, route) in self.routes() {
            visitor(verb, route);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.iter().all(Vec::is_empty)
    }

    /// Merges the routes of `child` under this router's prefix.
    ///
    /// Every visited route is inserted at the front of its verb's list, so the
    /// routes of the latest merge come before older ones and before the routes
    /// registered directly on this router.
    pub fn extend(&mut self, child: &Self) {
        let prefix = self.prefix();

        tracing::debug!(
            %prefix,
            child = child.name().unwrap_or_default(),
            routes = child.len(),
            "Extending router"
        );

        let routes = &mut self.routes;
        child.iterate_routes(|verb, route| {
            routes[verb.index()].insert(0, route.prefixed(&prefix));
        });
    }

    /// Replays every route onto `server`, `list` routes as `get`.
    ///
    /// # Errors
    ///
    /// Stops at, and returns, the first error raised by `server`.
    pub fn routify<S: Server<H>>(&self, mut server: S) -> Result<(), S::Error> {
        tracing::debug!(
            name = self.name().unwrap_or_default(),
            routes = self.len(),
            "Applying routes"
        );

        for (verb, route) in self.routes() {
            let method = verb.method();
            tracing::trace!(%verb, %method, path = route.path(), "Applying route");
            server.dispatch(method, route.path(), route.handlers())?;
        }

        Ok(())
    }
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::root()
    }
}

impl<H> Clone for Router<H> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            param: self.param.clone(),
            routes: self.routes.clone(),
        }
    }
}
