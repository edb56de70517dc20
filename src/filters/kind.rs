/// Closed set of cosmetic filters applied to captured frames.
///
/// Deserializing an unrecognised name yields [`FilterKind::None`], so a stale or misspelled
/// filter id degrades to the identity rather than failing.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    /// Warm tone shift.
    Vintage,
    /// Luma desaturation.
    BlackWhite,
    /// Cool "dreamy" look with synthesized light leaks and a centre glow.
    Blue,
    /// Per-pixel uniform film grain.
    Grains,
    /// Saturation boost plus contrast ("cartoon").
    Peachy,
    /// Identity; the buffer is not touched. Unknown names deserialize to this variant.
    #[default]
    #[serde(other)]
    None,
}

impl FilterKind {
    /// Every filter, in picker order.
    pub const ALL: [FilterKind; 6] = [
        FilterKind::None,
        FilterKind::Vintage,
        FilterKind::BlackWhite,
        FilterKind::Blue,
        FilterKind::Grains,
        FilterKind::Peachy,
    ];

    /// Canonical identifier.
    pub fn name(self) -> &'static str {
        match self {
            FilterKind::None => "none",
            FilterKind::Vintage => "vintage",
            FilterKind::BlackWhite => "blackwhite",
            FilterKind::Blue => "blue",
            FilterKind::Grains => "grains",
            FilterKind::Peachy => "peachy",
        }
    }

    /// Human-facing label.
    pub fn label(self) -> &'static str {
        match self {
            FilterKind::None => "Normal",
            FilterKind::Vintage => "Vintage",
            FilterKind::BlackWhite => "B&W",
            FilterKind::Blue => "Blue Light",
            FilterKind::Grains => "Grains",
            FilterKind::Peachy => "Peachy",
        }
    }

    /// Lenient lookup by name or alias. Unknown names map to [`FilterKind::None`].
    pub fn from_name(name: &str) -> FilterKind {
        let key = name.trim().to_ascii_lowercase();
        match key.as_str() {
            "" | "none" | "normal" => FilterKind::None,
            "vintage" => FilterKind::Vintage,
            "blackwhite" | "black_white" | "black-white" | "bw" | "b&w" | "mono" => {
                FilterKind::BlackWhite
            }
            "blue" | "dreamy" | "blue_light" | "blue-light" => FilterKind::Blue,
            "grains" | "grain" | "noise" => FilterKind::Grains,
            "peachy" | "cartoon" => FilterKind::Peachy,
            other => {
                tracing::warn!(filter = other, "unknown filter name, using identity");
                FilterKind::None
            }
        }
    }

    /// Whether applying this filter changes anything at all.
    pub fn is_identity(self) -> bool {
        self == FilterKind::None
    }
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for FilterKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(FilterKind::from_name(s))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filters/kind.rs"]
mod tests;
