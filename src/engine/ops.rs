use std::io::Write;

use super::{error::Error, input::Span, inter::Interpreter};

// Binary operations
type BinOp = fn(i32, i32) -> Result<i32, Error>;

/// `( x y -- op(x, y) )`
fn binary_op(op: BinOp, intr: &mut Interpreter) -> Result<(), Error> {
    let y = intr.pop()?;
    let x = intr.pop()?;
    intr.push(op(x, y)?)
}

pub fn add(intr: &mut Interpreter) -> Result<(), Error> {
    binary_op(|x, y| Ok(x.wrapping_add(y)), intr)
}

pub fn subtract(intr: &mut Interpreter) -> Result<(), Error> {
    binary_op(|x, y| Ok(x.wrapping_sub(y)), intr)
}

pub fn mul(intr: &mut Interpreter) -> Result<(), Error> {
    binary_op(|x, y| Ok(x.wrapping_mul(y)), intr)
}

/// Fails before touching the stack when the divisor on top is zero.
fn nonzero_divisor(intr: &Interpreter) -> Result<(), Error> {
    match intr.peek(0)? {
        0 => Err(Error::DivisionByZero),
        _ => Ok(()),
    }
}

pub fn div(intr: &mut Interpreter) -> Result<(), Error> {
    nonzero_divisor(intr)?;
    binary_op(|x, y| Ok(x.wrapping_div(y)), intr)
}

pub fn modulus(intr: &mut Interpreter) -> Result<(), Error> {
    nonzero_divisor(intr)?;
    binary_op(|x, y| Ok(x.wrapping_rem(y)), intr)
}

// Stack operations
pub fn drop(intr: &mut Interpreter) -> Result<(), Error> {
    intr.pop()?;
    Ok(())
}

pub fn dup(intr: &mut Interpreter) -> Result<(), Error> {
    let x = intr.peek(0)?;
    intr.push(x)
}

pub fn swap(intr: &mut Interpreter) -> Result<(), Error> {
    let y = intr.pop()?;
    let x = intr.pop()?;
    intr.push(y)?;
    intr.push(x)
}

pub fn over(intr: &mut Interpreter) -> Result<(), Error> {
    let x = intr.peek(1)?;
    intr.push(x)
}

pub fn nip(intr: &mut Interpreter) -> Result<(), Error> {
    let y = intr.pop()?;
    intr.pop()?;
    intr.push(y)
}

pub fn rot(intr: &mut Interpreter) -> Result<(), Error> {
    let z = intr.pop()?;
    let y = intr.pop()?;
    let x = intr.pop()?;
    intr.push(y)?;
    intr.push(z)?;
    intr.push(x)
}

// Quotations

/// `[`: captures raw text up to the next `]` and pushes its handle.
///
/// The first `]` closes the quotation, even after another `[`.
pub fn quote(intr: &mut Interpreter) -> Result<(), Error> {
    let start = intr.cursor();
    let close = intr
        .frame_rest()
        .find(']')
        .ok_or(Error::UnterminatedQuotation)?;
    let body = Span::new(start, close);
    intr.set_cursor(body.end() + 1);

    let handle = intr.quotes_mut().capture(body);
    cs_debug!("quote #{}: {:?}", handle, intr.source().slice(body));
    intr.push(handle)
}

/// `do`: runs a captured quotation on the shared stack. Unknown handles
/// are consumed and otherwise ignored.
pub fn invoke(intr: &mut Interpreter) -> Result<(), Error> {
    let handle = intr.pop()?;
    match intr.quotes().get(handle) {
        Some(body) => {
            cs_debug!("do #{}", handle);
            intr.run_span(body)
        }
        None => {
            cs_warn!("do: no quotation #{}, ignoring", handle);
            Ok(())
        }
    }
}

// Console
pub fn out(intr: &mut Interpreter) -> Result<(), Error> {
    let x = intr.pop()?;
    writeln!(intr.output(), "{}", x)?;
    Ok(())
}

pub fn bye(intr: &mut Interpreter) -> Result<(), Error> {
    intr.halt();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{
        config::Config,
        dict::Dictionary,
        error::ResultCode,
        util::{eval, intr, SharedBuf},
    };

    #[test]
    fn test_arithmetic() -> anyhow::Result<()> {
        assert_eq!(eval("7 3 -")?, [4]);
        assert_eq!(eval("3 7 -")?, [-4]);
        assert_eq!(eval("6 7 *")?, [42]);
        assert_eq!(eval("7 2 /")?, [3]);
        assert_eq!(eval("0 7 - 2 /")?, [-3]);
        assert_eq!(eval("7 3 mod")?, [1]);
        assert_eq!(eval("0 7 - 2 mod")?, [-1]);
        assert_eq!(eval("2147483647 1 +")?, [i32::MIN]);
        Ok(())
    }

    #[test]
    fn test_division_by_zero() {
        let mut intr = intr();
        let res = intr.run("1 0 /");
        assert_eq!(ResultCode::of(&res), ResultCode::DivisionByZero);
        assert_eq!(intr.stack(), &[1, 0]);

        intr.reset();
        assert!(matches!(intr.run("7 0 mod"), Err(Error::DivisionByZero)));
        assert_eq!(intr.stack(), &[7, 0]);

        // a quotation failing the same way leaves the caller's values too
        intr.reset();
        assert!(matches!(intr.run("9 [ 0 / ] do"), Err(Error::DivisionByZero)));
        assert_eq!(intr.stack(), &[9, 0]);
    }

    #[test]
    fn test_stack_words() -> anyhow::Result<()> {
        assert_eq!(eval("1 2 drop")?, [1]);
        assert_eq!(eval("1 dup")?, [1, 1]);
        assert_eq!(eval("1 2 swap")?, [2, 1]);
        assert_eq!(eval("1 2 over")?, [1, 2, 1]);
        assert_eq!(eval("1 2 nip")?, [2]);
        assert_eq!(eval("1 2 3 rot")?, [2, 3, 1]);
        Ok(())
    }

    #[test]
    fn test_quotation() -> anyhow::Result<()> {
        assert_eq!(eval("[ 1 2 + ] do")?, [3]);
        assert_eq!(eval("10 [ 2 * ] do")?, [20]);
        assert_eq!(eval("[ 1 ] [ 2 ]")?, [0, 1]);
        assert_eq!(eval("[ 1 ] [ 2 ] do swap do")?, [2, 1]);
        assert!(eval("[ ] do")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_quotation_reuse() -> anyhow::Result<()> {
        let mut intr = intr();
        intr.run("[ 1 + ]")?;
        assert_eq!(intr.quote_text(0), Some(" 1 + "));
        intr.run("drop 5 0 do 0 do")?;
        assert_eq!(intr.stack(), &[7]);
        Ok(())
    }

    #[test]
    fn test_unterminated_quotation() {
        let mut intr = intr();
        let res = intr.run("[ 1 2 +");
        assert_eq!(ResultCode::of(&res), ResultCode::UnterminatedQuotation);
        assert!(intr.stack().is_empty());
        assert!(intr.quotes().is_empty());
    }

    #[test]
    fn test_quotation_ends_with_frame() {
        // a capture inside a quotation body cannot see past the body
        let mut intr = intr();
        let res = intr.run("[ [ ] do ]");
        assert!(matches!(res, Err(Error::UnterminatedQuotation)));
    }

    #[test]
    fn test_capture_is_not_nest_aware() {
        let mut intr = intr();
        let res = intr.run("[ [ 1 ] 2 ] do");
        assert!(matches!(res, Err(Error::UnknownWord(name)) if name == "]"));
        assert_eq!(intr.quote_text(0), Some(" [ 1 "));
    }

    #[test]
    fn test_invalid_handle_is_noop() -> anyhow::Result<()> {
        assert_eq!(eval("5 7 do")?, [5]);
        assert_eq!(eval("5 [ 1 ] drop 1 do")?, [5]);
        assert_eq!(eval("5 0 1 - do")?, [5]);
        Ok(())
    }

    #[test]
    fn test_nested_error_propagates() {
        let mut intr = intr();
        let res = intr.run("[ 1 nope ] do 2");
        assert!(matches!(res, Err(Error::UnknownWord(name)) if name == "nope"));
        assert_eq!(intr.stack(), &[1]);

        let res = intr.run("[ + ] do");
        assert!(matches!(res, Err(Error::StackUnderflow)));
    }

    #[test]
    fn test_recursion_is_bounded() {
        let mut intr = Interpreter::new(
            Dictionary::with_builtins(),
            Config {
                max_nesting: 8,
                ..Config::default()
            },
        );
        let res = intr.run("[ 0 do ] do");
        assert!(matches!(res, Err(Error::NestingTooDeep(8))));
        assert_eq!(intr.cursor(), 0);
    }

    #[test]
    fn test_bye_in_quotation_halts_caller() -> anyhow::Result<()> {
        assert_eq!(eval("1 [ 2 bye 3 ] do 4")?, [1, 2]);
        Ok(())
    }

    #[test]
    fn test_out() -> anyhow::Result<()> {
        let buf = SharedBuf::default();
        let mut intr = intr().with_output(buf.clone());
        intr.run("16 16 + dup out . 7 [ out ] do")?;
        assert_eq!(buf.contents(), "32\n32\n7\n");
        assert!(intr.stack().is_empty());
        Ok(())
    }
}
