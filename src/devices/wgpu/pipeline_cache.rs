use std::borrow::Cow;
use std::collections::HashMap;

/// Compute pipelines keyed by their WGSL source.
///
/// Kernel sources embed their dimensions as shader constants, so a run
/// compiles each kernel once (during warmup) and every later dispatch
/// reuses the cached pipeline.
#[derive(Debug, Default)]
pub struct PipelineCache {
    pipelines: HashMap<String, wgpu::ComputePipeline>,
}

impl PipelineCache {
    pub fn get(&mut self, device: &wgpu::Device, src: &str) -> &wgpu::ComputePipeline {
        self.pipelines.entry(src.to_string()).or_insert_with(|| {
            let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: None,
                source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(src)),
            });

            device.create_compute_pipeline(&wgpu::ComputePipelineDescriptor {
                label: None,
                layout: None,
                module: &module,
                entry_point: "main",
            })
        })
    }
}
