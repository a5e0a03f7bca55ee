use serde::{Deserialize, Serialize};

fn default_print_all() -> bool {
    false
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    /// Print every result instead of only the best one
    #[serde(default = "default_print_all")]
    pub print_all: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            print_all: default_print_all(),
        }
    }
}
