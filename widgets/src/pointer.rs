use std::cell::Cell;
use std::rc::Rc;

/// Coordinate used while no pointer is over the dock.
pub const ABSENT: f32 = f32::INFINITY;

#[derive(Debug, Clone, Copy)]
struct Sample {
    x: f32,
    version: u64,
}

/// Horizontal pointer position shared by a dock and its icons.
///
/// There is exactly one `PointerSignal` per dock and it is the only handle
/// that can write. Icons observe it through [`PointerReader`]s.
#[derive(Debug)]
pub struct PointerSignal {
    cell: Rc<Cell<Sample>>,
}

impl PointerSignal {
    pub fn new() -> Self {
        Self {
            cell: Rc::new(Cell::new(Sample {
                x: ABSENT,
                version: 0,
            })),
        }
    }

    pub fn set(&self, x: f32) {
        let sample = self.cell.get();
        self.cell.set(Sample {
            x,
            version: sample.version.wrapping_add(1),
        });
    }

    pub fn clear(&self) {
        if self.is_present() {
            self.set(ABSENT);
        }
    }

    pub fn get(&self) -> f32 {
        self.cell.get().x
    }

    pub fn is_present(&self) -> bool {
        self.get().is_finite()
    }

    pub fn version(&self) -> u64 {
        self.cell.get().version
    }

    pub fn reader(&self) -> PointerReader {
        PointerReader {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl Default for PointerSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of a [`PointerSignal`].
#[derive(Debug, Clone)]
pub struct PointerReader {
    cell: Rc<Cell<Sample>>,
}

impl PointerReader {
    pub fn get(&self) -> f32 {
        self.cell.get().x
    }

    pub fn is_present(&self) -> bool {
        self.get().is_finite()
    }

    pub fn version(&self) -> u64 {
        self.cell.get().version
    }

    /// Whether the signal has been written since `version` was observed.
    pub fn changed_since(&self, version: u64) -> bool {
        self.version() != version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_absent() {
        let signal = PointerSignal::new();
        assert!(!signal.is_present());
        assert_eq!(signal.get(), ABSENT);
        assert_eq!(signal.version(), 0);
    }

    #[test]
    fn readers_observe_writes() {
        let signal = PointerSignal::new();
        let a = signal.reader();
        let b = a.clone();

        signal.set(120.0);
        assert_eq!(a.get(), 120.0);
        assert_eq!(b.get(), 120.0);
        assert!(a.is_present());

        signal.clear();
        assert!(!b.is_present());
    }

    #[test]
    fn clear_only_bumps_version_when_present() {
        let signal = PointerSignal::new();
        let reader = signal.reader();
        signal.clear();
        assert!(!reader.changed_since(0));

        signal.set(10.0);
        let seen = reader.version();
        signal.clear();
        assert!(reader.changed_since(seen));
        let seen = reader.version();
        signal.clear();
        assert!(!reader.changed_since(seen));
    }

    #[test]
    fn repeated_moves_are_all_observable() {
        let signal = PointerSignal::new();
        let reader = signal.reader();
        signal.set(5.0);
        let seen = reader.version();
        signal.set(5.0);
        assert!(reader.changed_since(seen));
    }
}
