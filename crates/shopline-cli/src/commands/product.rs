//! Product menu options (5-8)

use crate::input::{parse_id, parse_price};
use crate::shell::{Shell, StepResult};
use shopline_engine as engine;
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> Shell<'_, R, W> {
    pub(crate) fn create_product(&mut self) -> StepResult {
        let name = self.prompt("Product name: ")?;
        let price = self.prompt_parsed("Product price: ", parse_price)?;

        let product = engine::create_product(&name, price, self.gateway)?;
        writeln!(self.output, "Product created: {}", product)?;
        Ok(())
    }

    pub(crate) fn list_products(&mut self) -> StepResult {
        let products = engine::list_products(self.gateway)?;
        if products.is_empty() {
            writeln!(self.output, "No products.")?;
        }
        for product in &products {
            writeln!(self.output, "{}", product)?;
        }
        Ok(())
    }

    pub(crate) fn update_product(&mut self) -> StepResult {
        let product_id = self.prompt_parsed("Product ID: ", parse_id)?;
        let name = self.prompt("New product name: ")?;
        let price = self.prompt_parsed("New product price: ", parse_price)?;

        engine::update_product(product_id, &name, price, self.gateway)?;
        writeln!(self.output, "Product {} updated.", product_id)?;
        Ok(())
    }

    pub(crate) fn delete_product(&mut self) -> StepResult {
        let product_id = self.prompt_parsed("Product ID to delete: ", parse_id)?;

        engine::delete_product(product_id, self.gateway)?;
        writeln!(self.output, "Product {} deleted.", product_id)?;
        Ok(())
    }
}
