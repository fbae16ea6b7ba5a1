use dotbench::{resolve, Device, DeviceRequest, Engine};

#[test]
fn test_cpu_request_is_unconditional() {
    let engine = Engine::new();
    assert_eq!(resolve::resolve(&engine, DeviceRequest::Cpu), Device::Cpu);
}

#[test]
fn test_auto_follows_accelerator_count() {
    let engine = Engine::new();
    let device = resolve::resolve(&engine, DeviceRequest::Auto);
    if engine.accelerator_count() > 0 {
        assert_eq!(device, Device::Accel(0));
    } else {
        assert_eq!(device, Device::Cpu);
    }
}

#[test]
fn test_gpu_request_falls_back_like_auto() {
    let engine = Engine::new();
    assert_eq!(
        resolve::resolve(&engine, DeviceRequest::Gpu),
        resolve::resolve(&engine, DeviceRequest::Auto)
    );
}

#[test]
fn test_host_engine_has_no_accelerators() {
    let engine = Engine::host();
    assert_eq!(engine.accelerator_count(), 0);
    assert_eq!(resolve::resolve(&engine, DeviceRequest::Gpu), Device::Cpu);
    assert_eq!(resolve::resolve(&engine, DeviceRequest::Auto), Device::Cpu);
}

#[test]
fn test_complement() {
    let engine = Engine::host();
    // without an accelerator the complement of the CPU is the CPU itself
    assert_eq!(resolve::complement_of(&engine, Device::Cpu), Device::Cpu);
    assert_eq!(
        resolve::complement_of(&engine, Device::Accel(0)),
        Device::Cpu
    );

    let engine = Engine::new();
    if engine.accelerator_count() > 0 {
        assert_eq!(
            resolve::complement_of(&engine, Device::Cpu),
            Device::Accel(0)
        );
    }
}

#[test]
fn test_engine_by_name() -> dotbench::Result<()> {
    let engine = Engine::named("host")?;
    assert_eq!(engine.name(), "host");
    assert!(Engine::named("cuda").is_err());
    Ok(())
}
