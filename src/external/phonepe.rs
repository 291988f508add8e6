use crate::config::PhonePeConfig;
use crate::error::{AppError, AppResult};
use crate::models::{InitiatePaymentRequest, InitiatePaymentResponse};
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

pub const PAY_ENDPOINT: &str = "/pg/v1/pay";

/// X-VERIFY checksum mandated by the gateway:
/// `hex(sha256(base64_payload + endpoint + salt_key)) + "###" + salt_index`.
pub fn generate_checksum(
    payload_b64: &str,
    endpoint: &str,
    salt_key: &str,
    salt_index: &str,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(payload_b64.as_bytes());
    hasher.update(endpoint.as_bytes());
    hasher.update(salt_key.as_bytes());
    let digest = hasher.finalize();
    format!("{:x}###{}", digest, salt_index)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PaymentInstrument {
    #[serde(rename = "type")]
    instrument_type: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PayPayload {
    merchant_id: String,
    merchant_transaction_id: String,
    /// Minor currency units (paise).
    amount: i64,
    redirect_url: String,
    redirect_mode: String,
    payment_instrument: PaymentInstrument,
}

#[derive(Debug, Serialize)]
struct PayRequestBody {
    request: String,
}

#[derive(Debug, Deserialize)]
struct RedirectInfo {
    url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InstrumentResponse {
    redirect_info: RedirectInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PayResponseData {
    instrument_response: InstrumentResponse,
}

#[derive(Debug, Deserialize)]
struct PayResponse {
    data: PayResponseData,
}

#[derive(Clone)]
pub struct PhonePeClient {
    client: Client,
    config: PhonePeConfig,
}

impl PhonePeClient {
    pub fn new(config: PhonePeConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub async fn initiate_payment(
        &self,
        req: &InitiatePaymentRequest,
    ) -> AppResult<InitiatePaymentResponse> {
        let merchant_transaction_id = req
            .order_id
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        let payload = PayPayload {
            merchant_id: self.config.merchant_id.clone(),
            merchant_transaction_id: merchant_transaction_id.clone(),
            amount: (req.amount * 100.0).round() as i64,
            redirect_url: format!(
                "{}?orderId={}",
                self.config.redirect_url, merchant_transaction_id
            ),
            redirect_mode: "REDIRECT".to_string(),
            payment_instrument: PaymentInstrument {
                instrument_type: "PAY_PAGE".to_string(),
            },
        };

        let payload_b64 =
            base64::engine::general_purpose::STANDARD.encode(serde_json::to_vec(&payload)?);
        let checksum = generate_checksum(
            &payload_b64,
            PAY_ENDPOINT,
            &self.config.salt_key,
            &self.config.salt_index,
        );

        let response = self
            .client
            .post(&self.config.base_url)
            .header("Content-Type", "application/json")
            .header("X-VERIFY", checksum)
            .json(&PayRequestBody {
                request: payload_b64,
            })
            .send()
            .await?;

        if response.status().is_success() {
            let body: PayResponse = response.json().await?;
            Ok(InitiatePaymentResponse {
                redirect_url: body.data.instrument_response.redirect_info.url,
                merchant_transaction_id,
            })
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(AppError::ExternalApiError(format!(
                "Payment initiation failed: {error_text}"
            )))
        }
    }

    /// Status checks sign the status path with an empty payload and proxy
    /// the gateway body back verbatim.
    pub async fn check_status(&self, transaction_id: &str) -> AppResult<serde_json::Value> {
        let endpoint = format!(
            "/pg/v1/status/{}/{}",
            self.config.merchant_id, transaction_id
        );
        let checksum = generate_checksum(
            "",
            &endpoint,
            &self.config.salt_key,
            &self.config.salt_index,
        );

        let url = format!(
            "{}/{}/{}",
            self.config.status_url, self.config.merchant_id, transaction_id
        );

        let response = self
            .client
            .get(&url)
            .header("X-VERIFY", checksum)
            .send()
            .await?;

        if response.status().is_success() {
            let body: serde_json::Value = response.json().await?;
            Ok(body)
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(AppError::ExternalApiError(format!(
                "Payment status check failed: {error_text}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Digests pinned against the gateway's documented recipe; if these move,
    // the wire contract broke.
    #[test]
    fn test_checksum_pay_endpoint_regression() {
        let checksum = generate_checksum("eyJhIjoxfQ==", PAY_ENDPOINT, "test-salt", "1");
        assert_eq!(
            checksum,
            "2bd694f415f3feb143177a322db0e92f07f3bd98cfde970071857acc94345b8d###1"
        );
    }

    #[test]
    fn test_checksum_status_endpoint_regression() {
        let checksum =
            generate_checksum("", "/pg/v1/status/MERCHANT1/TXN1", "test-salt", "2");
        assert_eq!(
            checksum,
            "7cc709a3df258d14d902c7e0060fdd7245da29537a573f126f904f6bd91eb5a4###2"
        );
    }

    #[test]
    fn test_checksum_depends_on_salt() {
        let a = generate_checksum("payload", PAY_ENDPOINT, "salt-a", "1");
        let b = generate_checksum("payload", PAY_ENDPOINT, "salt-b", "1");
        assert_ne!(a, b);
    }

    #[test]
    fn test_pay_payload_wire_shape() {
        let payload = PayPayload {
            merchant_id: "MERCHANT1".to_string(),
            merchant_transaction_id: "TXN1".to_string(),
            amount: 19900,
            redirect_url: "https://example.com/payment-success?orderId=TXN1".to_string(),
            redirect_mode: "REDIRECT".to_string(),
            payment_instrument: PaymentInstrument {
                instrument_type: "PAY_PAGE".to_string(),
            },
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["merchantId"], "MERCHANT1");
        assert_eq!(json["merchantTransactionId"], "TXN1");
        assert_eq!(json["amount"], 19900);
        assert_eq!(json["redirectMode"], "REDIRECT");
        assert_eq!(json["paymentInstrument"]["type"], "PAY_PAGE");
    }
}
