//! Read access to order lines
//!
//! Lines are written through their order, so this repository only reads.

use crate::errors::Result;
use crate::gateway::Gateway;
use shopline_core::{EntityId, OrderLine};

pub struct OrderLineRepo;

impl OrderLineRepo {
    pub fn list_all(gateway: &Gateway) -> Result<Vec<OrderLine>> {
        gateway.list()
    }

    pub fn find_by_id(gateway: &Gateway, id: EntityId) -> Result<Option<OrderLine>> {
        gateway.get(id)
    }

    pub fn count(gateway: &Gateway) -> Result<i64> {
        gateway.count::<OrderLine>()
    }
}
