/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 2/11/25
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// Envelope returned by the token endpoint
pub struct TokenResponse {
    /// Whether the server reports the call as successful
    pub success: bool,
    /// Registration token issued by the server
    pub token: String,
}
