#[derive(Debug, Clone)]
pub struct Config {
    /// Tree depth, 1..=8. Overhead rises steeply at 7/8.
    pub max_depth: usize,
    /// Occupancy above which a node keeps subdividing (until max depth).
    pub max_leaf_elements: u32,
    /// Initial element store capacity; grows on demand.
    pub initial_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_depth: 6,
            max_leaf_elements: 16,
            initial_capacity: 256,
        }
    }
}
