/// Creates a WGSL shader module and logs its compilation diagnostics.
///
/// Creation runs inside a validation error scope, so a broken shader is
/// reported here and never reaches the device's uncaptured-error handler.
/// Returns `None` when the module failed validation; callers skip drawing.
pub(crate) fn create_wgsl_module(
    device: &wgpu::Device,
    label: &str,
    source: &str,
) -> Option<wgpu::ShaderModule> {
    let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    let info = pollster::block_on(module.get_compilation_info());
    for msg in &info.messages {
        let at = msg
            .location
            .as_ref()
            .map(|l| format!("{}:{}", l.line_number, l.line_position))
            .unwrap_or_else(|| "?".to_string());

        match msg.message_type {
            wgpu::CompilationMessageType::Error => {
                log::error!("shader {label} failed to compile at {at}: {}", msg.message)
            }
            wgpu::CompilationMessageType::Warning => {
                log::warn!("shader {label} warning at {at}: {}", msg.message)
            }
            wgpu::CompilationMessageType::Info => {
                log::debug!("shader {label} at {at}: {}", msg.message)
            }
        }
    }

    match pollster::block_on(scope.pop()) {
        Some(err) => {
            log::error!("shader {label} rejected: {err}");
            None
        }
        None => Some(module),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::noop_device;

    #[test]
    fn valid_shader_builds() {
        let (device, _queue) = noop_device();
        let module = create_wgsl_module(&device, "mesh", include_str!("shaders/mesh.wgsl"));
        assert!(module.is_some());
    }

    #[test]
    fn broken_shader_is_rejected_without_panicking() {
        let (device, _queue) = noop_device();
        assert!(create_wgsl_module(&device, "broken", "fn vs_main( -> {").is_none());
    }

    #[test]
    fn device_stays_usable_after_rejected_shader() {
        let (device, _queue) = noop_device();
        assert!(create_wgsl_module(&device, "broken", "@vertex fn vs_main() {").is_none());
        assert!(create_wgsl_module(&device, "mesh", include_str!("shaders/mesh.wgsl")).is_some());
    }
}
