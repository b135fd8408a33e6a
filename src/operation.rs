use std::cell::Cell;
use std::fmt;

/// Everything the page can ask the backend to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
    ListPorts,
    GetChipInfo,
    Backup,
    Restore,
    Erase,
}

impl OperationKind {
    pub const ALL: [OperationKind; 5] = [
        OperationKind::ListPorts,
        OperationKind::GetChipInfo,
        OperationKind::Backup,
        OperationKind::Restore,
        OperationKind::Erase,
    ];

    /// Whether the operation opens the serial link. Only one of these may be
    /// in flight at a time.
    pub fn uses_device(self) -> bool {
        !matches!(self, OperationKind::ListPorts)
    }

    fn index(self) -> usize {
        match self {
            OperationKind::ListPorts => 0,
            OperationKind::GetChipInfo => 1,
            OperationKind::Backup => 2,
            OperationKind::Restore => 3,
            OperationKind::Erase => 4,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationKind::ListPorts => "list_ports",
            OperationKind::GetChipInfo => "chip_info",
            OperationKind::Backup => "backup",
            OperationKind::Restore => "restore",
            OperationKind::Erase => "erase",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OperationStatus {
    #[default]
    Idle,
    Running,
    Succeeded,
    Failed,
}

/// Per-kind lifecycle flags. Single-threaded; the browser never touches this
/// from two threads.
#[derive(Debug, Default)]
pub struct OperationTracker {
    statuses: [Cell<OperationStatus>; 5],
}

impl OperationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self, kind: OperationKind) -> OperationStatus {
        self.statuses[kind.index()].get()
    }

    pub fn is_running(&self, kind: OperationKind) -> bool {
        self.status(kind) == OperationStatus::Running
    }

    /// The device operation currently holding the serial link, if any.
    pub fn running_device_operation(&self) -> Option<OperationKind> {
        OperationKind::ALL
            .into_iter()
            .find(|kind| kind.uses_device() && self.is_running(*kind))
    }

    /// Mark `kind` as running, or name the operation that blocks it.
    pub fn try_begin(&self, kind: OperationKind) -> Result<(), OperationKind> {
        if self.is_running(kind) {
            return Err(kind);
        }
        if kind.uses_device() {
            if let Some(blocker) = self.running_device_operation() {
                return Err(blocker);
            }
        }
        self.statuses[kind.index()].set(OperationStatus::Running);
        Ok(())
    }

    pub fn finish(&self, kind: OperationKind, succeeded: bool) {
        let status = if succeeded {
            OperationStatus::Succeeded
        } else {
            OperationStatus::Failed
        };
        self.statuses[kind.index()].set(status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let tracker = OperationTracker::new();
        for kind in OperationKind::ALL {
            assert_eq!(tracker.status(kind), OperationStatus::Idle);
        }
        assert_eq!(tracker.running_device_operation(), None);
    }

    #[test]
    fn same_kind_is_rejected_while_running() {
        let tracker = OperationTracker::new();
        assert!(tracker.try_begin(OperationKind::Backup).is_ok());
        assert_eq!(
            tracker.try_begin(OperationKind::Backup),
            Err(OperationKind::Backup)
        );
    }

    #[test]
    fn device_operations_exclude_each_other() {
        let tracker = OperationTracker::new();
        tracker.try_begin(OperationKind::Backup).unwrap();
        assert_eq!(
            tracker.try_begin(OperationKind::Erase),
            Err(OperationKind::Backup)
        );
        assert_eq!(
            tracker.try_begin(OperationKind::GetChipInfo),
            Err(OperationKind::Backup)
        );
    }

    #[test]
    fn port_listing_runs_alongside_device_work() {
        let tracker = OperationTracker::new();
        tracker.try_begin(OperationKind::Restore).unwrap();
        assert!(tracker.try_begin(OperationKind::ListPorts).is_ok());
    }

    #[test]
    fn finish_releases_the_link() {
        let tracker = OperationTracker::new();
        tracker.try_begin(OperationKind::Erase).unwrap();
        tracker.finish(OperationKind::Erase, false);

        assert_eq!(tracker.status(OperationKind::Erase), OperationStatus::Failed);
        assert!(tracker.try_begin(OperationKind::Backup).is_ok());
        tracker.finish(OperationKind::Backup, true);
        assert_eq!(
            tracker.status(OperationKind::Backup),
            OperationStatus::Succeeded
        );
    }
}
