//! Customer and order entities
//!
//! Orders are thin request records: the production pipeline consumes
//! furniture items, which the orchestrator creates alongside the order.

use crate::entities::{require_age, require_non_empty, ValidationError};

/// A request for some quantity of one furniture type.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    furniture_type: String,
    quantity: u32,
}

impl Order {
    pub fn new(furniture_type: impl Into<String>, quantity: u32) -> Result<Self, ValidationError> {
        let furniture_type = furniture_type.into();
        require_non_empty("furniture type", &furniture_type)?;
        if quantity == 0 {
            return Err(ValidationError::ZeroQuantity);
        }
        Ok(Self {
            furniture_type,
            quantity,
        })
    }

    pub fn furniture_type(&self) -> &str {
        &self.furniture_type
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// A customer with their placed orders.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    name: String,
    age: u32,
    phone: String,
    orders: Vec<Order>,
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        phone: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let phone = phone.into();
        require_non_empty("customer name", &name)?;
        require_age(age)?;
        require_non_empty("phone", &phone)?;
        Ok(Self {
            name,
            age,
            phone,
            orders: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Record a new order against this customer.
    pub fn place_order(
        &mut self,
        furniture_type: impl Into<String>,
        quantity: u32,
    ) -> Result<&Order, ValidationError> {
        let order = Order::new(furniture_type, quantity)?;
        self.orders.push(order);
        Ok(self.orders.last().expect("just pushed"))
    }
}
