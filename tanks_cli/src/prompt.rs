use std::{
    cell::RefCell,
    io::{BufRead, Write},
    ops::RangeInclusive,
    rc::Rc,
};

use tanks_core::{Acknowledge, ShotInput};
use tracing::warn;

struct ConsoleIo<R, W> {
    input: R,
    output: W,
}

/// Line based prompts over a reader and a writer
///
/// Clones share the same streams, so one handle can serve as the shot input
/// and another as the between-turn pause without either buffering ahead.
pub struct Console<R, W> {
    io: Rc<RefCell<ConsoleIo<R, W>>>,
}

impl<R, W> Clone for Console<R, W> {
    fn clone(&self) -> Self {
        Self {
            io: self.io.clone(),
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            io: Rc::new(RefCell::new(ConsoleIo { input, output })),
        }
    }

    /// Show `prompt` and wait for one line. `None` once the input is exhausted.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        let mut io = self.io.borrow_mut();

        write!(io.output, "{}", prompt).ok();
        io.output.flush().ok();

        let mut line = String::new();
        match io.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(err) => {
                warn!(%err, "failed to read from input");
                None
            }
        }
    }

    pub fn say(&self, message: &str) {
        writeln!(self.io.borrow_mut().output, "{}", message).ok();
    }
}

impl<R: BufRead, W: Write> ShotInput for Console<R, W> {
    fn prompt_number(&mut self, prompt: &str, range: RangeInclusive<f64>) -> Option<f64> {
        loop {
            let line = self.read_line(prompt)?;

            match line.trim().parse::<f64>() {
                Ok(number) if number.is_finite() && range.contains(&number) => return Some(number),
                Ok(number) if number.is_finite() => self.say(&format!(
                    "Please enter a value in the range [{}, {}]",
                    range.start(),
                    range.end()
                )),
                _ => self.say("Please enter a number"),
            }
        }
    }
}

impl<R: BufRead, W: Write> Acknowledge for Console<R, W> {
    fn acknowledge(&mut self, prompt: &str) {
        self.read_line(prompt);
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use tanks_core::common::interface::ANY_NUMBER;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(console: &Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.io.borrow().output.clone()).unwrap()
    }

    #[test]
    fn reads_a_number() {
        let mut console = console(" 39.6 \n");
        assert_eq!(console.prompt_number("velocity >", ANY_NUMBER), Some(39.6));
        assert_eq!(transcript(&console), "velocity >");
    }

    #[test]
    fn reprompts_until_numeric() {
        let mut console = console("fast\n\ninf\n45\n");

        assert_eq!(console.prompt_number("angle >", ANY_NUMBER), Some(45.0));
        assert_eq!(
            transcript(&console),
            "angle >Please enter a number\n\
             angle >Please enter a number\n\
             angle >Please enter a number\n\
             angle >"
        );
    }

    #[test]
    fn reprompts_until_in_range() {
        let mut console = console("-5\n91\n90\n");

        assert_eq!(console.prompt_number("angle >", 0.0..=90.0), Some(90.0));
        assert!(transcript(&console).contains("Please enter a value in the range [0, 90]"));
    }

    #[test]
    fn closed_input_gives_up() {
        let mut console = console("nope\n");
        assert_eq!(console.prompt_number("velocity >", ANY_NUMBER), None);
    }

    #[test]
    fn clones_share_the_stream() {
        let mut input = console("10\n\n20\n");
        let mut pause = input.clone();

        assert_eq!(input.prompt_number("v >", ANY_NUMBER), Some(10.0));
        pause.acknowledge("continue >");
        assert_eq!(input.prompt_number("v >", ANY_NUMBER), Some(20.0));
        assert_eq!(transcript(&input), "v >continue >v >");
    }
}
