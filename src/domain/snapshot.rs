use super::GridCoord;

/// The set of active cells reported by an engine at one point in time.
///
/// Snapshots are values: the view keeps the latest one and replaces it
/// wholesale, it never edits one in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    active_cells: Vec<GridCoord>,
}

impl Snapshot {
    pub fn new(active_cells: Vec<GridCoord>) -> Self {
        Self { active_cells }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Active cells in the order the engine reported them
    pub fn active_cells(&self) -> &[GridCoord] {
        &self.active_cells
    }

    pub fn len(&self) -> usize {
        self.active_cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active_cells.is_empty()
    }

    pub fn contains(&self, coord: GridCoord) -> bool {
        self.active_cells.contains(&coord)
    }
}

impl FromIterator<GridCoord> for Snapshot {
    fn from_iter<I: IntoIterator<Item = GridCoord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot() {
        let snapshot = Snapshot::empty();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.len(), 0);
    }

    #[test]
    fn test_preserves_engine_order() {
        let snapshot: Snapshot = [(4, 1), (0, 9), (2, 2)]
            .into_iter()
            .map(GridCoord::from)
            .collect();

        assert_eq!(
            snapshot.active_cells(),
            &[GridCoord::new(4, 1), GridCoord::new(0, 9), GridCoord::new(2, 2)]
        );
        assert!(snapshot.contains(GridCoord::new(0, 9)));
        assert!(!snapshot.contains(GridCoord::new(9, 0)));
    }
}
