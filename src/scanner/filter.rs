/// Package name allow-list and deny-list. The deny-list always wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageFilter {
    exclusive: Vec<String>,
    exclude: Vec<String>,
}

impl PackageFilter {
    pub fn new(exclusive: Vec<String>, exclude: Vec<String>) -> Self {
        Self { exclusive, exclude }
    }

    pub fn allows(&self, name: &str) -> bool {
        if !self.exclusive.is_empty() && !self.exclusive.iter().any(|n| n == name) {
            return false;
        }
        !self.exclude.iter().any(|n| n == name)
    }
}
