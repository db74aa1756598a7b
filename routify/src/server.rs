use crate::Method;

/// A live server routes are replayed onto.
///
/// Each operation receives the fully computed path and the ordered handlers of
/// one route. Whatever the server makes of them, including failing, is up to
/// the implementation.
pub trait Server<H> {
    type Error;

    fn del(&mut self, path: &str, handlers: &[H]) -> Result<(), Self::Error>;

    fn get(&mut self, path: &str, handlers: &[H]) -> Result<(), Self::Error>;

    fn patch(&mut self, path: &str, handlers: &[H]) -> Result<(), Self::Error>;

    fn post(&mut self, path: &str, handlers: &[H]) -> Result<(), Self::Error>;

    fn put(&mut self, path: &str, handlers: &[H]) -> Result<(), Self::Error>;

    fn dispatch(&mut self, method: Method, path: &str, handlers: &[H]) -> Result<(), Self::Error> {
        match method {
            Method::Del => self.del(path, handlers),
            Method::Get => self.get(path, handlers),
            Method::Patch => self.patch(path, handlers),
            Method::Post => self.post(path, handlers),
            Method::Put => self.put(path, handlers),
        }
    }
}

impl<H, S: Server<H> + ?Sized> Server<H> for &mut S {
    type Error = S::Error;

    fn del(&mut self, path: &str, handlers: &[H]) -> Result<(), Self::Error> {
        (**self).del(path, handlers)
    }

    fn get(&mut self, path: &str, handlers: &[H]) -> Result<(), Self::Error> {
        (**self).get(path, handlers)
    }

    fn patch(&mut self, path: &str, handlers: &[H]) -> Result<(), Self::Error> {
        (**self).patch(path, handlers)
    }

    fn post(&mut self, path: &str, handlers: &[H]) -> Result<(), Self::Error> {
        (**self).post(path, handlers)
    }

    fn put(&mut self, path: &str, handlers: &[H]) -> Result<(), Self::Error> {
        (**self).put(path, handlers)
    }
}
