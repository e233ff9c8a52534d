/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 2/11/25
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
/// Envelope returned by the users listing endpoint
pub struct UsersResponse {
    /// Whether the server reports the call as successful
    pub success: bool,
    /// Users of the requested page, kept as opaque JSON records
    pub users: Vec<Value>,
    /// Total number of pages available with the requested page size
    pub total_pages: u32,
    /// Total number of registered users
    pub total_users: u32,
    /// Number of users in this page
    pub count: u32,
    /// Links to the neighboring pages
    pub links: PageLinks,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// Pagination links accompanying a users listing
pub struct PageLinks {
    /// URL of the next page, absent on the last one
    pub next_url: Option<String>,
    /// URL of the previous page, absent on the first one
    pub prev_url: Option<String>,
}
