//! Interactive menu loop
//!
//! Reads one option per line, runs the matching operation and prints its
//! outcome. Every operation failure is reported as a single line and the
//! menu comes back; only I/O failures on the terminal itself end the loop.

use crate::input::decode_line;
use shopline_core::ExError;
use shopline_store::Gateway;
use std::io::{self, BufRead, Write};
use thiserror::Error;

const MENU: &str = "\
----- Main Menu -----
1. Create customer
2. List customers
3. Update customer
4. Delete customer
5. Create product
6. List products
7. Update product
8. Delete product
9. Create order
10. Add line to order
11. List orders
12. Delete order
0. Exit";

/// Why an operation stopped before printing its result
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("{0}")]
    Operation(#[from] ExError),

    #[error("end of input")]
    EndOfInput,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

pub type StepResult = Result<(), ShellError>;

pub struct Shell<'g, R, W> {
    pub(crate) gateway: &'g Gateway,
    input: R,
    pub(crate) output: W,
}

impl<'g, R: BufRead, W: Write> Shell<'g, R, W> {
    pub fn new(gateway: &'g Gateway, input: R, output: W) -> Self {
        Self {
            gateway,
            input,
            output,
        }
    }

    /// Run until option 0 or end of input
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{}", MENU)?;

            let choice = match self.prompt("Choose an option: ") {
                Ok(choice) => choice,
                Err(ShellError::Operation(e)) => {
                    writeln!(self.output, "Error: {}", e)?;
                    continue;
                }
                Err(ShellError::EndOfInput) => return self.farewell(),
                Err(ShellError::Io(e)) => return Err(e),
            };

            let step = match choice.trim() {
                "0" => return self.farewell(),
                "1" => self.create_customer(),
                "2" => self.list_customers(),
                "3" => self.update_customer(),
                "4" => self.delete_customer(),
                "5" => self.create_product(),
                "6" => self.list_products(),
                "7" => self.update_product(),
                "8" => self.delete_product(),
                "9" => self.create_order(),
                "10" => self.add_order_line(),
                "11" => self.list_orders(),
                "12" => self.delete_order(),
                _ => {
                    writeln!(self.output, "Invalid option. Try again.")?;
                    continue;
                }
            };

            match step {
                Ok(()) => {}
                Err(ShellError::Operation(e)) => writeln!(self.output, "Error: {}", e)?,
                Err(ShellError::EndOfInput) => return self.farewell(),
                Err(ShellError::Io(e)) => return Err(e),
            }
        }
    }

    fn farewell(&mut self) -> io::Result<()> {
        writeln!(self.output, "Exiting...")?;
        self.output.flush()
    }

    /// Print `label` and read one line without its line terminator
    ///
    /// A line that is not valid UTF-8 fails the current operation only.
    pub(crate) fn prompt(&mut self, label: &str) -> Result<String, ShellError> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(ShellError::EndOfInput);
        }
        Ok(decode_line(raw)?)
    }

    /// Prompt and parse in one step; the parse error aborts the operation
    pub(crate) fn prompt_parsed<T>(
        &mut self,
        label: &str,
        parse: fn(&str) -> Result<T, ExError>,
    ) -> Result<T, ShellError> {
        let raw = self.prompt(label)?;
        Ok(parse(&raw)?)
    }
}
