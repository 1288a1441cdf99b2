/// Material held by a single grid cell.
/// Closed set: every cell is exactly one of these four.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Material {
    #[default]
    Empty,
    Sand,
    Water,
    Stone,
}

impl Material {
    /// All materials in palette order
    pub const ALL: [Material; 4] = [
        Material::Sand,
        Material::Water,
        Material::Stone,
        Material::Empty,
    ];

    /// Check if the cell holds nothing
    pub const fn is_empty(self) -> bool {
        matches!(self, Material::Empty)
    }

    /// Display name for UI. Empty is presented as the eraser.
    pub const fn name(self) -> &'static str {
        match self {
            Material::Empty => "Erase",
            Material::Sand => "Sand",
            Material::Water => "Water",
            Material::Stone => "Stone",
        }
    }

    /// One-line behaviour summary for the legend
    pub const fn description(self) -> &'static str {
        match self {
            Material::Empty => "Removes anything under the brush",
            Material::Sand => "Falls & piles up",
            Material::Water => "Flows & spreads",
            Material::Stone => "Falls then stays fixed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert_eq!(Material::default(), Material::Empty);
        assert!(Material::default().is_empty());
    }

    #[test]
    fn test_only_empty_is_empty() {
        let non_empty: Vec<_> = Material::ALL.iter().filter(|m| !m.is_empty()).collect();
        assert_eq!(non_empty.len(), 3);
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = Material::ALL.iter().map(|m| m.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Material::ALL.len());
    }
}
