use serde::{Deserialize, Serialize};

/// Whether increasing data x maps to increasing or decreasing pixel x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlotDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// Direction toggles that feed [`PlotDirection::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionToggles {
    /// Number of series drawn in the view.
    pub series_count: usize,
    /// `is_increasing` of the first series.
    pub first_series_increasing: bool,
    /// View-level reverse-plot toggle.
    pub reverse_plot: bool,
    /// Overlay direction override; falls back to the first series when unset.
    pub overlay_increasing: Option<bool>,
}

impl PlotDirection {
    #[must_use]
    pub fn from_increasing(increasing: bool) -> Self {
        if increasing {
            Self::LeftToRight
        } else {
            Self::RightToLeft
        }
    }

    #[must_use]
    pub fn is_left_to_right(self) -> bool {
        self == Self::LeftToRight
    }

    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::LeftToRight => Self::RightToLeft,
            Self::RightToLeft => Self::LeftToRight,
        }
    }

    /// Collapses the direction toggles into the single direction a view draws with.
    ///
    /// A single series draws in its own order XOR `reverse_plot`. An overlay
    /// draws in `overlay_increasing` (first series when unset) XOR
    /// `reverse_plot`; per-series order is ignored for overlays.
    #[must_use]
    pub fn resolve(toggles: DirectionToggles) -> Self {
        let base_increasing = if toggles.series_count > 1 {
            toggles
                .overlay_increasing
                .unwrap_or(toggles.first_series_increasing)
        } else {
            toggles.first_series_increasing
        };
        Self::from_increasing(base_increasing ^ toggles.reverse_plot)
    }
}

#[cfg(test)]
mod tests {
    use super::{DirectionToggles, PlotDirection};

    fn toggles(
        count: usize,
        first: bool,
        reverse: bool,
        overlay: Option<bool>,
    ) -> DirectionToggles {
        DirectionToggles {
            series_count: count,
            first_series_increasing: first,
            reverse_plot: reverse,
            overlay_increasing: overlay,
        }
    }

    #[test]
    fn single_series_follows_own_order_and_reverse_toggle() {
        let resolve = |first, reverse| PlotDirection::resolve(toggles(1, first, reverse, None));
        assert_eq!(resolve(true, false), PlotDirection::LeftToRight);
        assert_eq!(resolve(false, false), PlotDirection::RightToLeft);
        assert_eq!(resolve(false, true), PlotDirection::LeftToRight);
    }

    #[test]
    fn single_series_ignores_overlay_toggle() {
        assert_eq!(
            PlotDirection::resolve(toggles(1, true, false, Some(false))),
            PlotDirection::LeftToRight
        );
    }

    #[test]
    fn overlay_toggle_takes_precedence_over_first_series() {
        assert_eq!(
            PlotDirection::resolve(toggles(3, true, false, Some(false))),
            PlotDirection::RightToLeft
        );
        assert_eq!(
            PlotDirection::resolve(toggles(3, true, true, Some(false))),
            PlotDirection::LeftToRight
        );
        assert_eq!(
            PlotDirection::resolve(toggles(2, false, false, None)),
            PlotDirection::RightToLeft
        );
    }
}
