use std::fmt;

/// Numbering plan assumption handed to the phone matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionHint {
    /// No national plan; only numbers written in international form
    International,
    /// Polish numbering plan
    Poland,
    /// North American numbering plan
    UnitedStates,
    /// German numbering plan
    Germany,
}

impl RegionHint {
    /// Order in which region passes run over a page
    ///
    /// International matching comes first; each later plan accepts more
    /// national formats and so produces more false positives.
    pub const SCAN_ORDER: [RegionHint; 4] = [
        RegionHint::International,
        RegionHint::Poland,
        RegionHint::UnitedStates,
        RegionHint::Germany,
    ];

    /// Returns the ISO 3166 region code, or None for international matching
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::International => None,
            Self::Poland => Some("PL"),
            Self::UnitedStates => Some("US"),
            Self::Germany => Some("DE"),
        }
    }

    /// Prefix dialed from this region to reach another country
    pub(crate) fn idd_prefix(&self) -> Option<&'static str> {
        match self {
            Self::International => None,
            Self::Poland | Self::Germany => Some("00"),
            Self::UnitedStates => Some("011"),
        }
    }
}

impl fmt::Display for RegionHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code().unwrap_or("none"))
    }
}
