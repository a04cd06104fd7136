use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum Category {
    Leadership,
    Executive,
    Technical,
    Operations,
    Business,
    Finance,
    #[serde(alias = "Human Resources", alias = "HR")]
    HumanResources,
    External,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Self::Leadership,
        Self::Executive,
        Self::Technical,
        Self::Operations,
        Self::Business,
        Self::Finance,
        Self::HumanResources,
        Self::External,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Leadership => "Leadership",
            Self::Executive => "Executive",
            Self::Technical => "Technical",
            Self::Operations => "Operations",
            Self::Business => "Business",
            Self::Finance => "Finance",
            Self::HumanResources => "Human Resources",
            Self::External => "External",
        }
    }

    /// 0 is the innermost ring, 3 the outermost.
    pub fn tier(self) -> u8 {
        match self {
            Self::Leadership => 0,
            Self::Executive => 1,
            Self::Technical
            | Self::Operations
            | Self::Business
            | Self::Finance
            | Self::HumanResources => 2,
            Self::External => 3,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers_grow_outward() {
        assert!(Category::Leadership.tier() < Category::Executive.tier());
        assert!(Category::Executive.tier() < Category::Technical.tier());
        assert!(Category::Finance.tier() < Category::External.tier());
    }

    #[test]
    fn test_human_resources_aliases() {
        let parsed: Vec<Category> =
            serde_json::from_str(r#"["HumanResources", "Human Resources", "HR"]"#).unwrap();
        assert!(parsed.iter().all(|category| *category == Category::HumanResources));
    }

    #[test]
    fn test_index_matches_all_order() {
        for (position, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), position);
        }
    }
}
