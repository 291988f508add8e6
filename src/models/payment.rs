use crate::error::{AppError, AppResult, FieldError};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InitiatePaymentRequest {
    /// Amount in currency units; converted to minor units for the gateway.
    pub amount: f64,
    /// Client-chosen merchant transaction id, usually the order id. A uuid
    /// is generated when absent.
    pub order_id: Option<String>,
}

impl InitiatePaymentRequest {
    pub fn validate(&self) -> AppResult<()> {
        if self.amount <= 0.0 {
            return Err(AppError::validation(vec![FieldError::new(
                "amount",
                "Amount must be a positive number",
            )]));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InitiatePaymentResponse {
    pub redirect_url: String,
    pub merchant_transaction_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_must_be_positive() {
        let req = InitiatePaymentRequest {
            amount: 0.0,
            order_id: None,
        };
        assert!(req.validate().is_err());

        let req = InitiatePaymentRequest {
            amount: 199.0,
            order_id: Some("ord-1".to_string()),
        };
        assert!(req.validate().is_ok());
    }
}
