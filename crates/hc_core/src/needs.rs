/// Bitset of currently-demanded features driving external tool lifecycle.
///
/// Each bit is owned by exactly one producer: `AUTO_TDP` by the
/// power-profile store, `FRAMERATE_LIMITER` by the profile store, and the
/// two OSD bits by the overlay-level setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlatformNeeds(u8);

impl PlatformNeeds {
    pub const NONE: PlatformNeeds = PlatformNeeds(0);
    pub const AUTO_TDP: PlatformNeeds = PlatformNeeds(1 << 0);
    pub const FRAMERATE_LIMITER: PlatformNeeds = PlatformNeeds(1 << 1);
    pub const ON_SCREEN_DISPLAY: PlatformNeeds = PlatformNeeds(1 << 2);
    pub const ON_SCREEN_DISPLAY_COMPLEX: PlatformNeeds = PlatformNeeds(1 << 3);

    /// Mask inclusion: every bit of `flag` is set in `self`.
    pub const fn contains(self, flag: PlatformNeeds) -> bool {
        self.0 & flag.0 == flag.0
    }

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    pub fn insert(&mut self, flag: PlatformNeeds) {
        self.0 |= flag.0;
    }

    pub fn remove(&mut self, flag: PlatformNeeds) {
        self.0 &= !flag.0;
    }

    /// Insert or remove `flag` depending on `enabled`.
    pub fn set(&mut self, flag: PlatformNeeds, enabled: bool) {
        if enabled {
            self.insert(flag);
        } else {
            self.remove(flag);
        }
    }

    // Named predicates, one per feature bit.

    pub const fn auto_tdp(self) -> bool {
        self.contains(Self::AUTO_TDP)
    }

    pub const fn framerate_limiter(self) -> bool {
        self.contains(Self::FRAMERATE_LIMITER)
    }

    pub const fn on_screen_display(self) -> bool {
        self.contains(Self::ON_SCREEN_DISPLAY)
    }

    pub const fn on_screen_display_complex(self) -> bool {
        self.contains(Self::ON_SCREEN_DISPLAY_COMPLEX)
    }
}
