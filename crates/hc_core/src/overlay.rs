use crate::needs::PlatformNeeds;

/// On-screen display level as carried by the `OnScreenDisplayLevel`
/// setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayLevel {
    Disabled,
    Minimal,
    Extended,
    Full,
    External,
}

impl OverlayLevel {
    /// Map a raw setting value to a level.
    ///
    /// Values outside `0..=4` fall back to `Minimal`, matching the
    /// original default case.
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            0 => OverlayLevel::Disabled,
            2 => OverlayLevel::Extended,
            3 => OverlayLevel::Full,
            4 => OverlayLevel::External,
            _ => OverlayLevel::Minimal,
        }
    }

    /// The `(ON_SCREEN_DISPLAY, ON_SCREEN_DISPLAY_COMPLEX)` pair this
    /// level demands. Extended and above need hardware telemetry.
    pub fn osd_needs(self) -> (bool, bool) {
        match self {
            OverlayLevel::Disabled => (false, false),
            OverlayLevel::Minimal => (true, false),
            OverlayLevel::Extended | OverlayLevel::Full | OverlayLevel::External => (true, true),
        }
    }

    /// Apply this level's demand onto a need set, leaving non-OSD bits
    /// untouched.
    pub fn apply_to(self, needs: &mut PlatformNeeds) {
        let (osd, complex) = self.osd_needs();
        needs.set(PlatformNeeds::ON_SCREEN_DISPLAY, osd);
        needs.set(PlatformNeeds::ON_SCREEN_DISPLAY_COMPLEX, complex);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_mapping_is_total() {
        assert_eq!(OverlayLevel::from_raw(0).osd_needs(), (false, false));
        assert_eq!(OverlayLevel::from_raw(1).osd_needs(), (true, false));
        assert_eq!(OverlayLevel::from_raw(2).osd_needs(), (true, true));
        assert_eq!(OverlayLevel::from_raw(3).osd_needs(), (true, true));
        assert_eq!(OverlayLevel::from_raw(4).osd_needs(), (true, true));
    }

    #[test]
    fn unknown_levels_default_to_minimal() {
        assert_eq!(OverlayLevel::from_raw(-1), OverlayLevel::Minimal);
        assert_eq!(OverlayLevel::from_raw(5), OverlayLevel::Minimal);
        assert_eq!(OverlayLevel::from_raw(i64::MAX), OverlayLevel::Minimal);
    }

    #[test]
    fn apply_preserves_foreign_bits() {
        let mut needs = PlatformNeeds::AUTO_TDP;
        OverlayLevel::Extended.apply_to(&mut needs);
        assert!(needs.auto_tdp());
        assert!(needs.on_screen_display());
        assert!(needs.on_screen_display_complex());

        OverlayLevel::Disabled.apply_to(&mut needs);
        assert!(needs.auto_tdp());
        assert!(!needs.on_screen_display());
        assert!(!needs.on_screen_display_complex());
    }
}
