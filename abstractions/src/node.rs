use log::trace;

use crate::{Consumer, Unclaimed};

/// A node of a consumer chain: the callback handler, the consumer itself and an
/// owned link to the next node.
///
/// Data offered to the head is tested by every node in turn. The first consumer
/// that can handle it produces the result and nothing after it is consulted.
pub struct ConsumerNode<H, D, R> {
    handler: H,
    consumer: Box<dyn Consumer<H, D, R>>,
    next: Option<Box<ConsumerNode<H, D, R>>>,
}

impl<H, D, R> ConsumerNode<H, D, R> {
    pub fn new<C>(handler: H, consumer: C) -> Self
    where
        C: Consumer<H, D, R> + 'static,
    {
        Self {
            handler,
            consumer: Box::new(consumer),
            next: None,
        }
    }

    /// The handler this node was built with. It is the same reference the consumer
    /// receives in [`Consumer::handle`].
    pub fn callback_handler(&self) -> &H {
        &self.handler
    }

    /// Appends `next` after the last node of this chain.
    ///
    /// Called on any node it always lands at the tail, never right after `self`.
    /// `next` is moved in, so a node cannot be linked into its own chain.
    pub fn set_next_consumer(&mut self, next: ConsumerNode<H, D, R>) {
        let mut tail = &mut self.next;
        while let Some(node) = tail {
            tail = &mut node.next;
        }

        trace!("linking consumer {}", next.consumer.name());
        *tail = Some(Box::new(next));
    }

    pub fn with_next(mut self, next: ConsumerNode<H, D, R>) -> Self {
        self.set_next_consumer(next);
        self
    }

    /// Offers `data` to the chain. `None` means no consumer claimed it.
    pub fn on_consume(&mut self, data: D) -> Option<R> {
        self.try_consume(data).ok()
    }

    /// Same traversal as [`on_consume`](Self::on_consume), but the data comes back
    /// inside [`Unclaimed`] when the chain is exhausted.
    pub fn try_consume(&mut self, data: D) -> Result<R, Unclaimed<D>> {
        let mut node = self;
        loop {
            if node.consumer.is_can_handle(&data) {
                trace!("consumer {} handles the data", node.consumer.name());
                return Ok(node.consumer.handle(&node.handler, data));
            }

            match node.next.as_deref_mut() {
                Some(next) => {
                    trace!(
                        "consumer {} passes the data to {}",
                        node.consumer.name(),
                        next.consumer.name()
                    );
                    node = next;
                }
                None => {
                    trace!("consumer {} is the tail, data unclaimed", node.consumer.name());
                    return Err(Unclaimed(data));
                }
            }
        }
    }

    pub fn name(&self) -> &str {
        self.consumer.name()
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn next_consumer(&self) -> Option<&ConsumerNode<H, D, R>> {
        self.next.as_deref()
    }

    /// Nodes from this one to the tail, in traversal order.
    pub fn iter(&self) -> Iter<'_, H, D, R> {
        Iter { node: Some(self) }
    }

    /// Number of nodes from this one to the tail, this one included.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn names(&self) -> Vec<&str> {
        self.iter().map(ConsumerNode::name).collect()
    }
}

impl<H, D, R> Drop for ConsumerNode<H, D, R> {
    fn drop(&mut self) {
        // unlink iteratively, long chains would otherwise recurse once per node
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

impl<H, D, R> std::fmt::Debug for ConsumerNode<H, D, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

pub struct Iter<'a, H, D, R> {
    node: Option<&'a ConsumerNode<H, D, R>>,
}

impl<'a, H, D, R> Iterator for Iter<'a, H, D, R> {
    type Item = &'a ConsumerNode<H, D, R>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node?;
        self.node = node.next_consumer();
        Some(node)
    }
}
