use super::WgpuContext;

/// Binds `args` in order as bind group 0 and dispatches `workgroups` of the
/// compute shader `src` (entry point `main`).
///
/// The command buffer is submitted but not awaited. Callers that need the
/// result on the host poll the device afterwards; a readback does this
/// implicitly.
pub fn launch_kernel(ctx: &WgpuContext, src: &str, workgroups: [u32; 3], args: &[&wgpu::Buffer]) {
    let mut pipelines = ctx.pipelines.borrow_mut();
    let pipeline = pipelines.get(&ctx.device, src);

    let entries = args
        .iter()
        .enumerate()
        .map(|(binding, buf)| wgpu::BindGroupEntry {
            binding: binding as u32,
            resource: buf.as_entire_binding(),
        })
        .collect::<Vec<_>>();

    let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: None,
        layout: &pipeline.get_bind_group_layout(0),
        entries: &entries,
    });

    let mut encoder = ctx
        .device
        .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });
    {
        let mut cpass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
            label: None,
            timestamp_writes: None,
        });
        cpass.set_pipeline(pipeline);
        cpass.set_bind_group(0, &bind_group, &[]);
        cpass.dispatch_workgroups(workgroups[0], workgroups[1], workgroups[2]);
    }

    ctx.queue.submit(Some(encoder.finish()));
}
