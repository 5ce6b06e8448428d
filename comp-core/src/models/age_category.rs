use serde::{Deserialize, Serialize};

/// Age bands that change which social-insurance premiums apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeCategory {
    Under40,
    /// 40 to 64 inclusive; pays the nursing-care premium.
    NursingCare,
    Senior65Plus,
}

impl AgeCategory {
    pub fn from_age(age: u32) -> Self {
        match age {
            0..=39 => Self::Under40,
            40..=64 => Self::NursingCare,
            _ => Self::Senior65Plus,
        }
    }

    pub fn pays_nursing_care(&self) -> bool {
        matches!(self, Self::NursingCare)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Under40 => "under 40",
            Self::NursingCare => "40 to 64",
            Self::Senior65Plus => "65 and over",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn from_age_uses_inclusive_bounds() {
        assert_eq!(AgeCategory::from_age(39), AgeCategory::Under40);
        assert_eq!(AgeCategory::from_age(40), AgeCategory::NursingCare);
        assert_eq!(AgeCategory::from_age(64), AgeCategory::NursingCare);
        assert_eq!(AgeCategory::from_age(65), AgeCategory::Senior65Plus);
    }

    #[test]
    fn only_middle_band_pays_nursing_care() {
        assert!(!AgeCategory::Under40.pays_nursing_care());
        assert!(AgeCategory::NursingCare.pays_nursing_care());
        assert!(!AgeCategory::Senior65Plus.pays_nursing_care());
    }
}
