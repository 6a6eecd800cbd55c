use std::cell::{Cell, RefCell};
use std::io::{self, Write};

/// Callback handler shared by every rule of the chain: writes one line per routed
/// input and counts what was claimed.
pub struct Reporter {
    out: RefCell<Box<dyn Write>>,
    claimed: Cell<usize>,
    unclaimed: Cell<usize>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub claimed: usize,
    pub unclaimed: usize,
}

impl Summary {
    pub fn exit_code(&self) -> i32 {
        if self.unclaimed == 0 {
            0
        } else {
            1
        }
    }
}

impl Reporter {
    pub fn new(out: impl Write + 'static) -> Self {
        Self {
            out: RefCell::new(Box::new(out)),
            claimed: Cell::new(0),
            unclaimed: Cell::new(0),
        }
    }

    pub fn claimed(&self, rule: &str, line: &str) -> io::Result<()> {
        writeln!(self.out.borrow_mut(), "{rule}\t{line}")?;
        self.claimed.set(self.claimed.get() + 1);
        Ok(())
    }

    pub fn unclaimed(&self, line: &str) -> io::Result<()> {
        writeln!(self.out.borrow_mut(), "-\t{line}")?;
        self.unclaimed.set(self.unclaimed.get() + 1);
        Ok(())
    }

    pub fn flush(&self) -> io::Result<()> {
        self.out.borrow_mut().flush()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            claimed: self.claimed.get(),
            unclaimed: self.unclaimed.get(),
        }
    }
}
