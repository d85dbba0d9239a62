//! Headless device for renderer tests.

/// Device and queue on wgpu's noop backend: validation runs, nothing executes.
pub(crate) fn noop_device() -> (wgpu::Device, wgpu::Queue) {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::NOOP,
        backend_options: wgpu::BackendOptions {
            noop: wgpu::NoopBackendOptions { enable: true },
            ..Default::default()
        },
        ..Default::default()
    });

    let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions::default()))
        .expect("noop adapter");

    let (device, queue) =
        pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor::default()))
            .expect("noop device");

    // Anything escaping an error scope fails the test.
    device.on_uncaptured_error(std::sync::Arc::new(|err: wgpu::Error| {
        panic!("uncaptured wgpu error: {err}");
    }));

    (device, queue)
}
