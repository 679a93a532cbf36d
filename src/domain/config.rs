use serde::{Deserialize, Serialize};

/// Stripe connection parameters configured for the gateway.
///
/// Every key is optional; a missing flag reads as `false` and a missing
/// string leaves the matching widget attribute out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionParams {
    pub public_key: Option<String>,
    pub secret_key: Option<String>,
    pub store_name: Option<String>,
    pub store_image: Option<String>,
    pub prefill: bool,
    pub remember_me: bool,
    pub locale: Option<String>,
    pub enable_billing_address: bool,
    pub enable_shipping_address: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayConfig {
    pub gateway_name: String,
    #[serde(default)]
    pub auto_capture: bool,
    #[serde(default)]
    pub template_path: Option<String>,
    #[serde(default)]
    pub connection_params: ConnectionParams,
}
