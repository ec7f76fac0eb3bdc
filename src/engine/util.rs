use std::{cell::RefCell, io, rc::Rc};

use super::{config::Config, dict::Dictionary, inter::Interpreter};

pub fn intr() -> Interpreter {
    Interpreter::new(Dictionary::with_builtins(), Config::default())
}

/// Runs `script` on a fresh interpreter and returns the final stack.
pub fn eval(script: &str) -> anyhow::Result<Vec<i32>> {
    let mut intr = intr();
    intr.run(script)?;
    Ok(intr.stack().to_vec())
}

/// Output sink that stays readable after being handed to an interpreter.
#[derive(Debug, Clone, Default)]
pub struct SharedBuf(Rc<RefCell<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl io::Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
