use thiserror::Error;

use crate::model::EntityId;

/// Result type alias using ShopError
pub type Result<T> = std::result::Result<T, ShopError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and shell output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Field validation
    InvalidName,
    InvalidEmail,
    InvalidPrice,
    InvalidQuantity,
    /// Operator input that could not be parsed (non-numeric id, price, ...)
    InvalidInput,

    // Lookup / lifecycle
    NotFound,
    NotPersisted,
    IdentityConflict,

    // Integration/IO
    Persistence,
    Io,

    // Internal
    Internal,
}

/// Coarse classification of error kinds
///
/// Validation failures never have a persistence side effect, not-found
/// failures never mutate anything, persistence failures come from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Persistence,
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidName => "ERR_INVALID_NAME",
            ExErrorKind::InvalidEmail => "ERR_INVALID_EMAIL",
            ExErrorKind::InvalidPrice => "ERR_INVALID_PRICE",
            ExErrorKind::InvalidQuantity => "ERR_INVALID_QUANTITY",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::NotPersisted => "ERR_NOT_PERSISTED",
            ExErrorKind::IdentityConflict => "ERR_IDENTITY_CONFLICT",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Get the category this kind belongs to
    pub fn category(&self) -> ErrorCategory {
        match self {
            ExErrorKind::InvalidName
            | ExErrorKind::InvalidEmail
            | ExErrorKind::InvalidPrice
            | ExErrorKind::InvalidQuantity
            | ExErrorKind::InvalidInput
            | ExErrorKind::NotPersisted => ErrorCategory::Validation,
            ExErrorKind::NotFound => ErrorCategory::NotFound,
            ExErrorKind::Persistence | ExErrorKind::Io => ErrorCategory::Persistence,
            ExErrorKind::IdentityConflict | ExErrorKind::Internal => ErrorCategory::Internal,
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context (operation, entity, identity) for the operator.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity: Option<&'static str>,
    entity_id: Option<EntityId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity type context ("customer", "product", ...)
    pub fn with_entity(mut self, entity: &'static str) -> Self {
        self.entity = Some(entity);
        self
    }

    /// Add entity identity context
    pub fn with_entity_id(mut self, id: EntityId) -> Self {
        self.entity_id = Some(id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the error category
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity type context, if any
    pub fn entity(&self) -> Option<&'static str> {
        self.entity
    }

    /// Get the entity identity context, if any
    pub fn entity_id(&self) -> Option<EntityId> {
        self.entity_id
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy raised by the entity model and the service rules
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShopError {
    // ===== Field validation =====
    /// A name field was set to an empty string
    #[error("The {entity} name cannot be empty")]
    EmptyName { entity: &'static str },

    /// An email was set to a value without '@'
    #[error("Invalid email: an email address must contain '@'")]
    InvalidEmail,

    /// A price was set to zero, a negative value or a non-finite value
    #[error("The price must be a finite number greater than zero (got {price})")]
    NonPositivePrice { price: f64 },

    /// A quantity was set to zero or a negative value
    #[error("The quantity must be greater than zero (got {quantity})")]
    NonPositiveQuantity { quantity: i64 },

    // ===== Lookup =====
    #[error("Customer with ID {customer_id} not found")]
    CustomerNotFound { customer_id: EntityId },

    #[error("Product with ID {product_id} not found")]
    ProductNotFound { product_id: EntityId },

    #[error("Order with ID {order_id} not found")]
    OrderNotFound { order_id: EntityId },

    // ===== Lifecycle =====
    /// The operation needs an entity that has been saved at least once
    #[error("The {entity} has not been saved yet")]
    NotPersisted { entity: &'static str },

    /// The persistence layer tried to give a persisted entity a new identity
    #[error("The {entity} already has ID {current}; refusing to reassign it to {requested}")]
    IdentityReassigned {
        entity: &'static str,
        current: EntityId,
        requested: EntityId,
    },
}

impl ShopError {
    /// Whether this is a field validation failure
    pub fn is_validation(&self) -> bool {
        ExError::from(self.clone()).category() == ErrorCategory::Validation
    }

    /// Whether this is an identity lookup failure
    pub fn is_not_found(&self) -> bool {
        ExError::from(self.clone()).category() == ErrorCategory::NotFound
    }
}

/// Conversion from ShopError to ExError
impl From<ShopError> for ExError {
    fn from(err: ShopError) -> Self {
        let message = err.to_string();
        match err {
            ShopError::EmptyName { entity } => ExError::new(ExErrorKind::InvalidName)
                .with_entity(entity)
                .with_message(message),

            ShopError::InvalidEmail => ExError::new(ExErrorKind::InvalidEmail)
                .with_entity("customer")
                .with_message(message),

            ShopError::NonPositivePrice { .. } => ExError::new(ExErrorKind::InvalidPrice)
                .with_entity("product")
                .with_message(message),

            ShopError::NonPositiveQuantity { .. } => ExError::new(ExErrorKind::InvalidQuantity)
                .with_entity("order_line")
                .with_message(message),

            ShopError::CustomerNotFound { customer_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity("customer")
                .with_entity_id(customer_id)
                .with_message(message),

            ShopError::ProductNotFound { product_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity("product")
                .with_entity_id(product_id)
                .with_message(message),

            ShopError::OrderNotFound { order_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity("order")
                .with_entity_id(order_id)
                .with_message(message),

            ShopError::NotPersisted { entity } => ExError::new(ExErrorKind::NotPersisted)
                .with_entity(entity)
                .with_message(message),

            ShopError::IdentityReassigned {
                entity, current, ..
            } => ExError::new(ExErrorKind::IdentityConflict)
                .with_entity(entity)
                .with_entity_id(current)
                .with_message(message),
        }
    }
}
