use crate::foundation::core::Rgba8;

/// A decorative photo strip style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct StripTemplate {
    /// Stable identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Strip background.
    pub background: Rgba8,
    /// Border drawn around each photo.
    pub frame: Rgba8,
}

/// Built-in templates, in picker order. The first entry is the fallback.
pub static TEMPLATES: [StripTemplate; 5] = [
    StripTemplate {
        id: "classic",
        name: "Classic",
        background: Rgba8::opaque(0xEE, 0xF4, 0xF7),
        frame: Rgba8::opaque(0xDF, 0xE2, 0xE6),
    },
    StripTemplate {
        id: "rose",
        name: "Rose",
        background: Rgba8::opaque(0xF7, 0xDD, 0xE2),
        frame: Rgba8::opaque(0xE8, 0xA0, 0xAE),
    },
    StripTemplate {
        id: "golden",
        name: "Golden",
        background: Rgba8::opaque(0xF6, 0xE7, 0xB8),
        frame: Rgba8::opaque(0xE5, 0xC1, 0x5A),
    },
    StripTemplate {
        id: "olive",
        name: "Olive",
        background: Rgba8::opaque(0xE3, 0xE6, 0xD3),
        frame: Rgba8::opaque(0x8F, 0x9A, 0x5E),
    },
    StripTemplate {
        id: "peach",
        name: "Peach",
        background: Rgba8::opaque(0xFB, 0xE3, 0xD6),
        frame: Rgba8::opaque(0xF4, 0xB0, 0x8C),
    },
];

/// Look up a template by id (case-insensitive).
pub fn template_by_id(id: &str) -> Option<&'static StripTemplate> {
    let id = id.trim();
    TEMPLATES.iter().find(|t| t.id.eq_ignore_ascii_case(id))
}

/// Look up a template by id, falling back to the first template.
pub fn template_or_default(id: &str) -> &'static StripTemplate {
    template_by_id(id).unwrap_or(&TEMPLATES[0])
}

#[cfg(test)]
#[path = "../../tests/unit/strip/template.rs"]
mod tests;
