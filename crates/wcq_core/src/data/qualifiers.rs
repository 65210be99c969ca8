//! Static lists fixed before the simulation window opens.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticQualifiers {
    /// Tournament hosts; qualify through CONCACAF without playing.
    pub hosts: Vec<String>,
    /// AFC teams that clinched before the snapshot.
    pub afc_pre_qualified: Vec<String>,
    pub ofc_direct: Option<String>,
    pub ofc_playoff: Option<String>,
    /// Every UEFA entrant; groups without live data are filled from here.
    pub uefa_pool: Vec<String>,
}
