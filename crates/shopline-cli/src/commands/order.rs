//! Order menu options (9-12)

use crate::input::{parse_id, parse_quantity};
use crate::shell::{Shell, StepResult};
use shopline_engine as engine;
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> Shell<'_, R, W> {
    pub(crate) fn create_order(&mut self) -> StepResult {
        let customer_id = self.prompt_parsed("Customer ID: ", parse_id)?;

        let order = engine::create_order(customer_id, self.gateway)?;
        writeln!(self.output, "Order created: {}", order)?;
        Ok(())
    }

    pub(crate) fn add_order_line(&mut self) -> StepResult {
        let order_id = self.prompt_parsed("Order ID: ", parse_id)?;
        let product_id = self.prompt_parsed("Product ID: ", parse_id)?;
        let quantity = self.prompt_parsed("Quantity: ", parse_quantity)?;

        let order = engine::add_order_line(order_id, product_id, quantity, self.gateway)?;
        if let Some(line) = order.lines().last() {
            writeln!(self.output, "Line added to order {}: {}", order_id, line)?;
        }
        Ok(())
    }

    /// Each order followed by its lines, indented
    pub(crate) fn list_orders(&mut self) -> StepResult {
        let orders = engine::list_orders(self.gateway)?;
        if orders.is_empty() {
            writeln!(self.output, "No orders.")?;
        }
        for order in &orders {
            writeln!(self.output, "{}", order)?;
            for line in order.lines() {
                writeln!(self.output, "    {}", line)?;
            }
        }
        Ok(())
    }

    pub(crate) fn delete_order(&mut self) -> StepResult {
        let order_id = self.prompt_parsed("Order ID to delete: ", parse_id)?;

        engine::delete_order(order_id, self.gateway)?;
        writeln!(self.output, "Order {} deleted.", order_id)?;
        Ok(())
    }
}
