use core::cell::RefCell;

use wgpu::util::DeviceExt;

use crate::error::EngineError;

use super::PipelineCache;

/// Owns the adapter, device and queue the accelerator backend works
/// against, plus the pipeline cache shared by every kernel.
pub struct WgpuContext {
    pub adapter: wgpu::Adapter,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub(crate) pipelines: RefCell<PipelineCache>,
    adapter_summaries: Vec<String>,
    accel_count: usize,
}

impl WgpuContext {
    /// Requests the highest-performance adapter offered for `backends` and
    /// opens a device on it.
    ///
    /// Returns [`EngineError::NoAdapter`] when the platform exposes no
    /// adapter at all. Software rasterizers (llvmpipe and friends) report
    /// `DeviceType::Cpu`; they still yield a working context but are not
    /// counted as accelerators.
    pub fn new(backends: wgpu::Backends) -> crate::Result<WgpuContext> {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends,
            ..Default::default()
        });

        let mut adapter_summaries = Vec::new();
        let mut accel_count = 0;
        for adapter in instance.enumerate_adapters(backends) {
            let info = adapter.get_info();
            if info.device_type != wgpu::DeviceType::Cpu {
                accel_count += 1;
            }
            adapter_summaries.push(format!(
                "{} ({:?}, {:?})",
                info.name, info.backend, info.device_type
            ));
        }

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: None,
            force_fallback_adapter: false,
        }))
        .ok_or(EngineError::NoAdapter)?;

        let info = adapter.get_info();
        log::debug!(
            "wgpu adapter: {} ({:?}, {:?})",
            info.name,
            info.backend,
            info.device_type
        );

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: None,
                required_features: wgpu::Features::empty(),
                required_limits: adapter.limits(),
            },
            None,
        ))?;

        Ok(WgpuContext {
            adapter,
            device,
            queue,
            pipelines: RefCell::new(PipelineCache::default()),
            adapter_summaries,
            accel_count,
        })
    }

    /// Number of enumerated adapters that are not software rasterizers.
    #[inline]
    pub fn accel_count(&self) -> usize {
        self.accel_count
    }

    /// One human-readable line per enumerated adapter.
    #[inline]
    pub fn adapter_summaries(&self) -> &[String] {
        &self.adapter_summaries
    }

    /// Uploads `data` into a new storage buffer.
    pub fn storage_from_slice(&self, data: &[f32]) -> wgpu::Buffer {
        self.device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: None,
                contents: bytemuck::cast_slice(data),
                usage: wgpu::BufferUsages::STORAGE
                    | wgpu::BufferUsages::COPY_DST
                    | wgpu::BufferUsages::COPY_SRC,
            })
    }

    /// An uninitialized storage buffer sized for `len` f32 values.
    pub fn storage_empty(&self, len: usize) -> wgpu::Buffer {
        self.device.create_buffer(&wgpu::BufferDescriptor {
            label: None,
            size: (len * core::mem::size_of::<f32>()) as u64,
            usage: wgpu::BufferUsages::STORAGE
                | wgpu::BufferUsages::COPY_DST
                | wgpu::BufferUsages::COPY_SRC,
            mapped_at_creation: false,
        })
    }

    /// Copies `buf` into a staging buffer, maps it, and returns the values.
    ///
    /// Blocks until the GPU has finished all work submitted so far, so a
    /// readback doubles as a completion barrier for preceding kernels.
    pub fn read_to_vec(&self, buf: &wgpu::Buffer) -> crate::Result<Vec<f32>> {
        let staging = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: None,
            size: buf.size(),
            usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });
        encoder.copy_buffer_to_buffer(buf, 0, &staging, 0, buf.size());
        self.queue.submit(Some(encoder.finish()));

        let slice = staging.slice(..);
        let (sender, receiver) = futures_intrusive::channel::shared::oneshot_channel();
        slice.map_async(wgpu::MapMode::Read, move |res| {
            let _ = sender.send(res);
        });

        self.device.poll(wgpu::Maintain::Wait);

        let Some(Ok(())) = pollster::block_on(receiver.receive()) else {
            return Err(EngineError::BufferRead.into());
        };

        let mapped = slice.get_mapped_range();
        let read = bytemuck::cast_slice::<u8, f32>(&mapped).to_vec();
        drop(mapped);
        staging.unmap();
        Ok(read)
    }
}
