/// What the builder does when a word extends a word that is already a leaf,
/// e.g. inserting `"bears"` after `"bear"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrefixPolicy {
    /// The leaf becomes a node with two children: a terminal leaf for the
    /// shorter word and a leaf carrying the rest of the longer one.
    #[default]
    Preserve,
    /// The rest of the longer word is dropped and it cannot be completed.
    Drop,
}

impl std::str::FromStr for PrefixPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "preserve" => Ok(Self::Preserve),
            "drop" => Ok(Self::Drop),
            other => Err(format!("unknown prefix policy {other:?}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BuildOptions {
    #[serde(default)]
    pub prefix_policy: PrefixPolicy,
}

impl BuildOptions {
    pub fn with_prefix_policy(mut self, prefix_policy: PrefixPolicy) -> Self {
        self.prefix_policy = prefix_policy;
        self
    }
}
