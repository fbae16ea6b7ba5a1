//! This module defines all available compute devices

pub mod cpu;

#[cfg(feature = "wgpu")]
pub mod wgpu;

/// A concrete compute target: the host processor or one enumerated
/// accelerator.
///
/// Accelerators are indexed in adapter enumeration order. The benchmark
/// only ever dispatches to the first one, but the index keeps device tags
/// unambiguous on multi-adapter machines.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Device {
    Cpu,
    Accel(usize),
}

impl Device {
    #[inline]
    pub fn is_accel(&self) -> bool {
        matches!(self, Device::Accel(_))
    }
}

impl core::fmt::Display for Device {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Device::Cpu => write!(f, "cpu"),
            Device::Accel(idx) => write!(f, "gpu:{idx}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Device;

    #[test]
    fn test_device_tags() {
        assert_eq!(Device::Cpu.to_string(), "cpu");
        assert_eq!(Device::Accel(0).to_string(), "gpu:0");
        assert_eq!(Device::Accel(1).to_string(), "gpu:1");
        assert!(!Device::Cpu.is_accel());
        assert!(Device::Accel(0).is_accel());
    }
}
