// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Panel read options

/// Options for reading panels
#[derive(Debug, Clone, PartialEq)]
pub struct ReadOptions {
    /// Map each foreign material once per batch
    pub memoize_materials: bool,
    /// Fetch each node once per surface
    pub memoize_nodes: bool,
    /// Warn when a resolved boundary does not close
    pub check_boundary_closure: bool,
    /// Distance under which boundary end points count as coincident
    pub closure_tolerance: f64,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            memoize_materials: true,
            memoize_nodes: true,
            check_boundary_closure: true,
            closure_tolerance: 1e-9,
        }
    }
}

impl ReadOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from environment variables
    ///
    /// Unset or unparsable variables keep their default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            memoize_materials: env_or("FEMLINK_MEMOIZE_MATERIALS", defaults.memoize_materials),
            memoize_nodes: env_or("FEMLINK_MEMOIZE_NODES", defaults.memoize_nodes),
            check_boundary_closure: env_or("FEMLINK_CHECK_CLOSURE", defaults.check_boundary_closure),
            closure_tolerance: env_or("FEMLINK_CLOSURE_TOLERANCE", defaults.closure_tolerance),
        }
    }

    /// Set whether materials are memoized per batch
    pub fn with_material_memo(mut self, enabled: bool) -> Self {
        self.memoize_materials = enabled;
        self
    }

    /// Set whether nodes are memoized per surface
    pub fn with_node_memo(mut self, enabled: bool) -> Self {
        self.memoize_nodes = enabled;
        self
    }

    /// Set whether boundary closure is checked
    pub fn with_closure_check(mut self, enabled: bool) -> Self {
        self.check_boundary_closure = enabled;
        self
    }

    /// Set the closure tolerance
    pub fn with_closure_tolerance(mut self, tolerance: f64) -> Self {
        self.closure_tolerance = tolerance;
        self
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let options = ReadOptions::new()
            .with_material_memo(false)
            .with_closure_tolerance(1e-6);
        assert!(!options.memoize_materials);
        assert!(options.memoize_nodes);
        assert_eq!(options.closure_tolerance, 1e-6);
    }

    #[test]
    fn test_from_env_reads_set_variables() {
        std::env::set_var("FEMLINK_CLOSURE_TOLERANCE", " 1e-4 ");
        std::env::set_var("FEMLINK_MEMOIZE_NODES", "false");
        let options = ReadOptions::from_env();
        std::env::remove_var("FEMLINK_CLOSURE_TOLERANCE");
        std::env::remove_var("FEMLINK_MEMOIZE_NODES");

        assert_eq!(options.closure_tolerance, 1e-4);
        assert!(!options.memoize_nodes);
        assert!(options.memoize_materials);
        assert!(options.check_boundary_closure);
    }

    #[test]
    fn test_env_fallback() {
        assert!(env_or("FEMLINK_TEST_UNSET_VARIABLE", true));
        assert_eq!(env_or("FEMLINK_TEST_UNSET_VARIABLE", 0.5), 0.5);
    }
}
