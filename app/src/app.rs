use std::io;
use std::rc::Rc;

use abstractions::{ConsumerNode, Unclaimed};
use common::RouteConfig;
use log::{info, trace};

use crate::reporter::{Reporter, Summary};
use crate::rules::RuleConsumer;

pub type RuleChain = ConsumerNode<Rc<Reporter>, String, io::Result<()>>;

pub struct App {
    chain: RuleChain,
}

impl App {
    /// Chains the configured rules in order, `fallback` last when requested.
    /// Without any rule the chain is a lone `fallback`.
    pub fn new(config: &RouteConfig, fallback: bool, reporter: Rc<Reporter>) -> Self {
        let node = |consumer: RuleConsumer| -> RuleChain {
            ConsumerNode::new(Rc::clone(&reporter), consumer)
        };

        let mut rules = config.rules.iter().map(RuleConsumer::from);
        let head = rules.next().unwrap_or_else(RuleConsumer::fallback);
        let mut chain = node(head);

        for rule in rules {
            chain.set_next_consumer(node(rule));
        }

        if fallback {
            chain.set_next_consumer(node(RuleConsumer::fallback()));
        }

        info!("rule chain: {:?}", chain);
        Self { chain }
    }

    pub fn route(&mut self, line: String) -> io::Result<()> {
        match self.chain.try_consume(line) {
            Ok(written) => written,
            Err(Unclaimed(line)) => {
                trace!("no rule claimed {line:?}");
                self.reporter().unclaimed(&line)
            }
        }
    }

    pub fn route_all<I>(&mut self, lines: I) -> io::Result<Summary>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        for line in lines {
            self.route(line?)?;
        }

        self.reporter().flush()?;
        Ok(self.reporter().summary())
    }

    pub fn chain(&self) -> &RuleChain {
        &self.chain
    }

    fn reporter(&self) -> &Reporter {
        self.chain.callback_handler()
    }
}
