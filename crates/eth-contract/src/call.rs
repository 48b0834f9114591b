use serde::Serialize;

/// A call/transaction object for `eth_call` or `eth_sendTransaction`.
///
/// Only the fields the proxy knows are set; everything else (nonce, fees,
/// signing, transport) is the sender's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    pub to: String,
    /// `0x`-prefixed call data.
    pub data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<String>,
}
