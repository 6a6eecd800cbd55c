use std::io;
use std::rc::Rc;

use abstractions::Consumer;
use common::{RuleConfig, RuleKind};
use log::debug;

use crate::reporter::Reporter;

pub const FALLBACK: &str = "fallback";

#[derive(Debug, Clone)]
pub struct RuleConsumer {
    name: String,
    kind: RuleKind,
}

impl RuleConsumer {
    pub fn new(name: impl Into<String>, kind: RuleKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn fallback() -> Self {
        Self::new(FALLBACK, RuleKind::Any)
    }
}

impl From<&RuleConfig> for RuleConsumer {
    fn from(rule: &RuleConfig) -> Self {
        Self::new(rule.name.clone(), rule.kind.clone())
    }
}

impl Consumer<Rc<Reporter>, String, io::Result<()>> for RuleConsumer {
    fn is_can_handle(&self, line: &String) -> bool {
        self.kind.matches(line)
    }

    fn handle(&mut self, reporter: &Rc<Reporter>, line: String) -> io::Result<()> {
        debug!("rule {} claimed {line:?}", self.name);
        reporter.claimed(&self.name, &line)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
