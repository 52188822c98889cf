/// Geometry visualization mode.
///
/// Selects which index set the catalog hands out and, downstream, which
/// primitive topology the renderer submits. `FlatShading` and `SmoothShading`
/// are accepted values that currently share the solid triangle path; shading
/// differentiation is an extension point, not a bug.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum VisualizationMode {
    Wireframe,
    #[default]
    Solid,
    FlatShading,
    SmoothShading,
}

impl VisualizationMode {
    /// Parses a mode name from the input surface.
    ///
    /// Unrecognized names fall back to `Solid` with a warning rather than
    /// failing; the render loop must never die on a bad mode string.
    pub fn parse(name: &str) -> Self {
        match name {
            "Wireframe" => Self::Wireframe,
            "Solid" => Self::Solid,
            "FlatShading" => Self::FlatShading,
            "SmoothShading" => Self::SmoothShading,
            other => {
                log::warn!("unknown visualization mode {other:?}; falling back to Solid");
                Self::Solid
            }
        }
    }

    /// True when this mode draws the solid triangle list.
    ///
    /// Only `Wireframe` selects the edge list; every other value (including
    /// the shading placeholders) resolves to triangles.
    #[inline]
    pub fn is_solid(self) -> bool {
        !matches!(self, Self::Wireframe)
    }

    /// Cycles to the next mode, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::Wireframe => Self::Solid,
            Self::Solid => Self::FlatShading,
            Self::FlatShading => Self::SmoothShading,
            Self::SmoothShading => Self::Wireframe,
        }
    }
}

impl std::fmt::Display for VisualizationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Wireframe => "Wireframe",
            Self::Solid => "Solid",
            Self::FlatShading => "FlatShading",
            Self::SmoothShading => "SmoothShading",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_names() {
        assert_eq!(VisualizationMode::parse("Wireframe"), VisualizationMode::Wireframe);
        assert_eq!(VisualizationMode::parse("Solid"), VisualizationMode::Solid);
        assert_eq!(VisualizationMode::parse("FlatShading"), VisualizationMode::FlatShading);
        assert_eq!(VisualizationMode::parse("SmoothShading"), VisualizationMode::SmoothShading);
    }

    #[test]
    fn parse_unknown_falls_back_to_solid() {
        assert_eq!(VisualizationMode::parse("Bogus"), VisualizationMode::Solid);
        assert_eq!(VisualizationMode::parse(""), VisualizationMode::Solid);
    }

    #[test]
    fn shading_placeholders_draw_solid() {
        assert!(VisualizationMode::Solid.is_solid());
        assert!(VisualizationMode::FlatShading.is_solid());
        assert!(VisualizationMode::SmoothShading.is_solid());
        assert!(!VisualizationMode::Wireframe.is_solid());
    }

    #[test]
    fn cycle_visits_every_mode() {
        let mut mode = VisualizationMode::Solid;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(mode);
            mode = mode.next();
        }
        assert_eq!(mode, VisualizationMode::Solid);
        assert_eq!(seen.len(), 4);
        seen.dedup();
        assert_eq!(seen.len(), 4);
    }
}
