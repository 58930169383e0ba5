//! Customer menu options (1-4)

use crate::input::parse_id;
use crate::shell::{Shell, StepResult};
use shopline_engine as engine;
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> Shell<'_, R, W> {
    pub(crate) fn create_customer(&mut self) -> StepResult {
        let name = self.prompt("Customer name: ")?;
        let email = self.prompt("Customer email: ")?;

        let customer = engine::create_customer(&name, &email, self.gateway)?;
        writeln!(self.output, "Customer created: {}", customer)?;
        Ok(())
    }

    pub(crate) fn list_customers(&mut self) -> StepResult {
        let customers = engine::list_customers(self.gateway)?;
        if customers.is_empty() {
            writeln!(self.output, "No customers.")?;
        }
        for customer in &customers {
            writeln!(self.output, "{}", customer)?;
        }
        Ok(())
    }

    pub(crate) fn update_customer(&mut self) -> StepResult {
        let customer_id = self.prompt_parsed("Customer ID: ", parse_id)?;
        let name = self.prompt("New customer name: ")?;
        let email = self.prompt("New customer email: ")?;

        engine::update_customer(customer_id, &name, &email, self.gateway)?;
        writeln!(self.output, "Customer {} updated.", customer_id)?;
        Ok(())
    }

    pub(crate) fn delete_customer(&mut self) -> StepResult {
        let customer_id = self.prompt_parsed("Customer ID to delete: ", parse_id)?;

        engine::delete_customer(customer_id, self.gateway)?;
        writeln!(self.output, "Customer {} deleted.", customer_id)?;
        Ok(())
    }
}
