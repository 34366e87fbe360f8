use crate::needs::PlatformNeeds;
use crate::overlay::OverlayLevel;

/// Probed-once installation state of the two reconciled tools.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstalledTools {
    pub rtss: bool,
    pub hwinfo: bool,
}

/// Start/stop effect issued by a reconciliation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolCommand {
    StartRtss,
    StopRtss { force_kill: bool },
    StartHwinfo,
    StopHwinfo { force_kill: bool },
}

/// Compute the minimal start/stop effects for a need transition.
///
/// Dependencies: RTSS serves AutoTDP, the framerate limiter and the OSD;
/// HWiNFO serves only the complex OSD. The branches are evaluated in
/// fixed priority order — an active OSD subsumes the other RTSS needs,
/// so they are not separately examined. Starts are edge-triggered:
/// a need that merely persists produces no command.
///
/// Effects on uninstalled tools are skipped, not errors.
pub fn reconcile(
    current: PlatformNeeds,
    previous: PlatformNeeds,
    installed: InstalledTools,
) -> Vec<ToolCommand> {
    if current == previous {
        return Vec::new();
    }

    let mut commands = Vec::new();

    if current.on_screen_display() {
        if !previous.on_screen_display() && installed.rtss {
            commands.push(ToolCommand::StartRtss);
        }
        if current.on_screen_display_complex() {
            // Fresh OSD activation, or an upgrade from simple to complex.
            if (!previous.on_screen_display() || !previous.on_screen_display_complex())
                && installed.hwinfo
            {
                commands.push(ToolCommand::StartHwinfo);
            }
        } else if previous.on_screen_display()
            && previous.on_screen_display_complex()
            && installed.hwinfo
        {
            // Downgrade from complex: telemetry is no longer consumed.
            commands.push(ToolCommand::StopHwinfo { force_kill: true });
        }
    } else if current.auto_tdp() || current.framerate_limiter() {
        if !previous.auto_tdp() && !previous.framerate_limiter() && installed.rtss {
            commands.push(ToolCommand::StartRtss);
        }
        if previous.on_screen_display() && installed.hwinfo {
            commands.push(ToolCommand::StopHwinfo { force_kill: true });
        }
    } else if previous.on_screen_display() || previous.auto_tdp() || previous.framerate_limiter() {
        if installed.hwinfo {
            commands.push(ToolCommand::StopHwinfo { force_kill: true });
        }
        if installed.rtss {
            commands.push(ToolCommand::StopRtss { force_kill: false });
        }
    }

    commands
}

/// Owns the live need set and the last-reconciled snapshot.
///
/// Producers fold their deltas into `current` through the setters; a
/// reconciliation pass diffs against `previous` and then advances it
/// unconditionally, so a repeated pass over unchanged state is a no-op.
#[derive(Debug, Default)]
pub struct NeedTracker {
    current: PlatformNeeds,
    previous: PlatformNeeds,
}

impl NeedTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> PlatformNeeds {
        self.current
    }

    pub fn previous(&self) -> PlatformNeeds {
        self.previous
    }

    /// Set or clear a single need bit.
    pub fn set(&mut self, flag: PlatformNeeds, enabled: bool) {
        self.current.set(flag, enabled);
    }

    /// Re-evaluate the two OSD bits from an overlay level.
    pub fn set_overlay_level(&mut self, level: OverlayLevel) {
        level.apply_to(&mut self.current);
    }

    /// Run one reconciliation pass and advance the snapshot.
    pub fn reconcile(&mut self, installed: InstalledTools) -> Vec<ToolCommand> {
        let commands = reconcile(self.current, self.previous, installed);
        self.previous = self.current;
        commands
    }
}
