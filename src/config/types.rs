use serde::Deserialize;

/// Containers a di minion runs, in the order their logs are dumped.
pub const DEFAULT_CONTAINERS: [&str; 7] = [
    "minion",
    "etcd",
    "swarm",
    "ovs-vswitchd",
    "ovsdb-server",
    "ovn-controller",
    "ovn-northd",
];

pub const DEFAULT_RUNTIME: &str = "docker";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Shell-style command used to reach the container runtime.
    pub runtime: String,
    pub containers: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            runtime: DEFAULT_RUNTIME.to_string(),
            containers: DEFAULT_CONTAINERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    /// Apply command-line overrides on top of this config.
    ///
    /// An empty `containers` slice means "no override", not "no containers".
    pub fn with_overrides(mut self, runtime: Option<&str>, containers: &[String]) -> Self {
        if let Some(runtime) = runtime {
            self.runtime = runtime.to_string();
        }
        if !containers.is_empty() {
            self.containers = containers.to_vec();
        }
        self
    }
}
