use serde::{Deserialize, Serialize};

/// A progress clock: `kind` segments, `value` of them filled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ClockSpec {
    pub kind: u32,
    pub value: u32,
}

impl ClockSpec {
    pub fn new(kind: u32, value: u32) -> Self {
        Self { kind, value }
    }

    pub fn is_valid(&self) -> bool {
        self.kind > 0 && self.value <= self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_validity() {
        assert!(ClockSpec::new(4, 0).is_valid());
        assert!(ClockSpec::new(8, 8).is_valid());
        assert!(!ClockSpec::new(6, 7).is_valid());
        assert!(!ClockSpec::new(0, 0).is_valid());
    }
}
