/// One link of a consumer chain.
///
/// `H` is the callback handler stored by the owning [`ConsumerNode`](crate::ConsumerNode),
/// `D` is the data offered to the chain and `R` is what a consumer returns once it
/// claims the data.
///
/// The node always asks [`is_can_handle`](Consumer::is_can_handle) first and calls
/// [`handle`](Consumer::handle) only when it answered `true`. The predicate must not
/// change the answer for the same data between calls.
pub trait Consumer<H, D, R> {
    fn is_can_handle(&self, data: &D) -> bool;

    /// Consumes `data`. `handler` is the callback handler of the node this consumer
    /// is mounted in; whether it is called here or handed off elsewhere is up to
    /// the implementation.
    fn handle(&mut self, handler: &H, data: D) -> R;

    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Consumer made of two closures.
pub struct FnConsumer<P, F> {
    name: String,
    predicate: P,
    handle: F,
}

impl<P, F> FnConsumer<P, F> {
    pub fn new(name: impl Into<String>, predicate: P, handle: F) -> Self {
        Self {
            name: name.into(),
            predicate,
            handle,
        }
    }
}

impl<H, D, R, P, F> Consumer<H, D, R> for FnConsumer<P, F>
where
    P: Fn(&D) -> bool,
    F: FnMut(&H, D) -> R,
{
    fn is_can_handle(&self, data: &D) -> bool {
        (self.predicate)(data)
    }

    fn handle(&mut self, handler: &H, data: D) -> R {
        (self.handle)(handler, data)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<P, F> std::fmt::Debug for FnConsumer<P, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnConsumer").field("name", &self.name).finish()
    }
}
