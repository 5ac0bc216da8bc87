//! Text glyphs used to encode and decode a [`Maze`](crate::Maze).

use crate::cell::CellType;
use crate::error::MazeError;

/// One glyph per [`CellType`].
///
/// Glyphs are strings so that multi-codepoint symbols (for example emoji
/// with a variation selector) can stand for a single cell. Decoding matches
/// the longest glyph at each position; anything else decodes to
/// [`CellType::Unknown`] one `char` at a time.
///
/// A set only round-trips when it passes [`validate`](Glyphs::validate):
/// with wall `"##"` and unknown `"#"`, two adjacent unknown cells encode to
/// `"##"` and decode back as one wall.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Glyphs {
    pub start: String,
    pub goal: String,
    pub wall: String,
    pub free: String,
    pub unknown: String,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            start: "S".to_string(),
            goal: "G".to_string(),
            wall: "#".to_string(),
            free: "O".to_string(),
            unknown: "?".to_string(),
        }
    }
}

impl Glyphs {
    /// Set the start glyph (builder).
    pub fn with_start(mut self, glyph: impl Into<String>) -> Self {
        self.start = glyph.into();
        self
    }

    /// Set the goal glyph (builder).
    pub fn with_goal(mut self, glyph: impl Into<String>) -> Self {
        self.goal = glyph.into();
        self
    }

    /// Set the wall glyph (builder).
    pub fn with_wall(mut self, glyph: impl Into<String>) -> Self {
        self.wall = glyph.into();
        self
    }

    /// Set the free glyph (builder).
    pub fn with_free(mut self, glyph: impl Into<String>) -> Self {
        self.free = glyph.into();
        self
    }

    /// Set the unknown glyph (builder).
    pub fn with_unknown(mut self, glyph: impl Into<String>) -> Self {
        self.unknown = glyph.into();
        self
    }

    /// The glyph that encodes `kind`.
    pub fn glyph(&self, kind: CellType) -> &str {
        match kind {
            CellType::Start => &self.start,
            CellType::Goal => &self.goal,
            CellType::Wall => &self.wall,
            CellType::Free => &self.free,
            CellType::Unknown => &self.unknown,
        }
    }

    /// Check that every glyph is non-empty and that no glyph is a prefix of
    /// another (equal glyphs included), so every encoded row decodes back
    /// to the same cells.
    pub fn validate(&self) -> Result<(), MazeError> {
        for (i, a) in CellType::ALL.iter().enumerate() {
            let ga = self.glyph(*a);
            if ga.is_empty() {
                return Err(MazeError::InvalidGlyphs(format!(
                    "empty glyph for {a:?}"
                )));
            }
            for b in &CellType::ALL[i + 1..] {
                let gb = self.glyph(*b);
                if ga == gb {
                    return Err(MazeError::InvalidGlyphs(format!(
                        "{a:?} and {b:?} share the glyph \u{201c}{ga}\u{201d}"
                    )));
                }
                if ga.starts_with(gb) || gb.starts_with(ga) {
                    return Err(MazeError::InvalidGlyphs(format!(
                        "glyphs \u{201c}{ga}\u{201d} ({a:?}) and \u{201c}{gb}\u{201d} ({b:?}) prefix one another"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Decode one line of text into cell types.
    pub(crate) fn decode_line(&self, line: &str) -> Vec<CellType> {
        let mut table: Vec<(&str, CellType)> = CellType::ALL
            .iter()
            .map(|&k| (self.glyph(k), k))
            .filter(|(g, _)| !g.is_empty())
            .collect();
        // Longest first so a glyph that prefixes another cannot shadow it.
        table.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        let mut kinds = Vec::new();
        let mut rest = line;
        while let Some(ch) = rest.chars().next() {
            match table.iter().find(|(g, _)| rest.starts_with(*g)) {
                Some((g, kind)) => {
                    kinds.push(*kind);
                    rest = &rest[g.len()..];
                }
                None => {
                    kinds.push(CellType::Unknown);
                    rest = &rest[ch.len_utf8()..];
                }
            }
        }
        kinds
    }
}
