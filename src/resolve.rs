//! Maps device requests onto concrete devices using the engine's reported
//! accelerator count.

use crate::{config::DeviceRequest, devices::Device, Engine};

/// `cpu` resolves unconditionally; `gpu` and `auto` take the first
/// accelerator when one exists and otherwise fall back to the CPU.
/// Resolution never hard-fails.
pub fn resolve(engine: &Engine, request: DeviceRequest) -> Device {
    match request {
        DeviceRequest::Cpu => Device::Cpu,
        DeviceRequest::Gpu | DeviceRequest::Auto => first_accel_or_cpu(engine),
    }
}

/// The other side of a comparison: the CPU for an accelerator, the first
/// accelerator for the CPU. With no accelerator present the complement of
/// the CPU is the CPU itself, which callers treat as "nothing to compare".
pub fn complement_of(engine: &Engine, device: Device) -> Device {
    if device.is_accel() {
        Device::Cpu
    } else {
        first_accel_or_cpu(engine)
    }
}

fn first_accel_or_cpu(engine: &Engine) -> Device {
    if engine.accelerator_count() > 0 {
        Device::Accel(0)
    } else {
        Device::Cpu
    }
}
