use serde::{Deserialize, Serialize};

/// What the responder does with a query once it owns it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainMode {
    /// Synthesize the reply and stop.
    #[default]
    Terminate,
    /// Hand the query to the next handler, printing its reply on the way out.
    Forward,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResponderConfig {
    /// Addresses handed out as A records to IPv4 clients
    #[serde(default = "default_ipv4_addresses")]
    pub ipv4_addresses: Vec<String>,

    /// Addresses handed out as AAAA records to IPv6 clients
    #[serde(default)]
    pub ipv6_addresses: Vec<String>,

    #[serde(default)]
    pub ttl: u32,

    #[serde(default)]
    pub srv_priority: u16,

    #[serde(default)]
    pub srv_weight: u16,

    /// Repeat the answer records in the additional section
    #[serde(default = "default_true")]
    pub mirror_answers: bool,

    #[serde(default)]
    pub chain: ChainMode,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            ipv4_addresses: default_ipv4_addresses(),
            ipv6_addresses: Vec::new(),
            ttl: 0,
            srv_priority: 0,
            srv_weight: 0,
            mirror_answers: true,
            chain: ChainMode::Terminate,
        }
    }
}

fn default_ipv4_addresses() -> Vec<String> {
    vec![
        "192.168.1.1".to_string(),
        "192.168.2.1".to_string(),
        "192.168.2.2".to_string(),
        "192.168.3.2".to_string(),
    ]
}

fn default_true() -> bool {
    true
}
