/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 2/11/25
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// Envelope returned by the positions listing endpoint
pub struct PositionsResponse {
    /// Whether the server reports the call as successful
    pub success: bool,
    /// Positions a user can be registered with
    pub positions: Vec<Position>,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
/// A single selectable position
pub struct Position {
    /// Numeric position identifier
    pub id: u32,
    /// Human-readable position name
    pub name: String,
}
