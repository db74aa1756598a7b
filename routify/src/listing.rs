use crate::{Method, Server};

/// A [`Server`] that only writes down what it is asked to register.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Listing {
    entries: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Entry {
    pub method: Method,
    pub path: String,
    pub handlers: usize,
}

impl Listing {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    fn record<H>(&mut self, method: Method, path: &str, handlers: &[H]) {
        self.entries.push(Entry {
            method,
            path: String::from(path),
            handlers: handlers.len(),
        });
    }
}

impl<H> Server<H> for Listing {
    type Error = std::convert::Infallible;

    fn del(&mut self, path: &str, handlers: &[H]) -> Result<(), Self::Error> {
        self.record(Method::Del, path, handlers);
        Ok(())
    }

    fn get(&mut self, path: &str, handlers: &[H]) -> Result<(), Self::Error> {
        self.record(Method::Get, path, handlers);
        Ok(())
    }

    fn patch(&mut self, path: &str, handlers: &[H]) -> Result<(), Self::Error> {
        self.record(Method::Patch, path, handlers);
        Ok(())
    }

    fn post(&mut self, path: &str, handlers: &[H]) -> Result<(), Self::Error> {
        self.record(Method::Post, path, handlers);
        Ok(())
    }

    fn put(&mut self, path: &str, handlers: &[H]) -> Result<(), Self::Error> {
        self.record(Method::Put, path, handlers);
        Ok(())
    }
}

impl std::fmt::Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for entry in &self.entries {
            writeln!(
                f,
                "{method:<5} {path} ({handlers})",
                method = entry.method,
                path = entry.path,
                handlers = entry.handlers
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Router;

    fn listing() -> Listing {
        let mut accounts = Router::named("accounts").with_param("accountId");
        accounts.list([1, 2]).get([3]);

        let mut orders = Router::named("orders").with_param("orderId");
        orders.post([4]).del([]);

        accounts.extend(&orders);

        let mut listing = Listing::new();
        accounts.routify(&mut listing).unwrap();
        listing
    }

    #[test]
    fn records_in_replay_order() {
        let listing = listing();
        let entries = listing
            .entries()
            .iter()
            .map(|e| (e.method, e.path.as_str(), e.handlers))
            .collect::<Vec<_>>();

        assert_eq!(
            entries,
            vec![
                (Method::Get, "/accounts", 2),
                (Method::Post, "/accounts/:accountId/orders", 1),
                (Method::Del, "/accounts/:accountId/orders/:orderId", 0),
                (Method::Get, "/accounts/:accountId", 1),
            ]
        );
    }

    #[test]
    fn json() {
        let mut router = Router::named("accounts");
        router.list(["h"]);

        let mut listing = Listing::new();
        router.routify(&mut listing).unwrap();

        assert_eq!(
            serde_json::to_string(&listing).unwrap(),
            r#"[{"method":"get","path":"/accounts","handlers":1}]"#
        );
    }

    #[test]
    fn display() {
        let listing = listing();
        assert_eq!(
            listing.to_string(),
            "get   /accounts (2)\n\
             post  /accounts/:accountId/orders (1)\n\
             del   /accounts/:accountId/orders/:orderId (0)\n\
             get   /accounts/:accountId (1)\n"
        );
    }
}
