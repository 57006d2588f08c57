//! wgpu-based Sobel kernel (Metal / Vulkan / DX12).

use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::consts::{GPU_WORKGROUP_SIDE, MIN_STENCIL_SIDE};
use crate::error::{GradError, Result};
use crate::image::Image;
use crate::validate::check_gray_pair;

use super::SobelKernel;

// Must match `Params` in shaders/sobel.wgsl.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct SobelParams {
    width: u32,
    height: u32,
}

// Each 8-bit sample is widened to one u32 storage element.
const BYTES_PER_GPU_SAMPLE: u64 = 4;

/// Check that a `width` x `height` image fits the device's storage buffers
/// and dispatch grid. Exceeding either is a wgpu validation error, which the
/// default handler turns into a panic.
fn check_device_limits(width: usize, height: usize, limits: &wgpu::Limits) -> Result<()> {
    let too_large = |what: &str| {
        GradError::Accelerator(format!("{width}x{height} image exceeds the GPU {what}"))
    };

    let bytes = (width as u64)
        .checked_mul(height as u64)
        .and_then(|n| n.checked_mul(BYTES_PER_GPU_SAMPLE))
        .ok_or_else(|| too_large("buffer size limit"))?;
    let max_bytes = u64::from(limits.max_storage_buffer_binding_size).min(limits.max_buffer_size);
    if bytes > max_bytes {
        return Err(too_large("buffer size limit"));
    }

    let max_groups = u64::from(limits.max_compute_workgroups_per_dimension);
    let side = u64::from(GPU_WORKGROUP_SIDE);
    let groups = |n: usize| (n.saturating_sub(2) as u64).div_ceil(side);
    if groups(width) > max_groups || groups(height) > max_groups {
        return Err(too_large("dispatch size limit"));
    }
    Ok(())
}

pub struct WgpuKernel {
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    adapter_name: String,
    sobel_pipeline: wgpu::ComputePipeline,
}

impl WgpuKernel {
    pub fn new() -> Result<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: None,
            force_fallback_adapter: false,
        }))
        .map_err(|e| GradError::Accelerator(format!("No suitable GPU adapter found: {e}")))?;

        let adapter_name = adapter.get_info().name.clone();
        tracing::info!("GPU adapter: {adapter_name}");

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("gradkit"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                ..Default::default()
            },
        ))
        .map_err(|e| GradError::Accelerator(format!("Failed to create GPU device: {e}")))?;

        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sobel"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/sobel.wgsl").into()),
        });
        let sobel_pipeline = device.create_compute_pipeline(&wgpu::ComputePipelineDescriptor {
            label: Some("sobel"),
            layout: None,
            module: &module,
            entry_point: Some("main"),
            compilation_options: Default::default(),
            cache: None,
        });

        Ok(Self {
            device: Arc::new(device),
            queue: Arc::new(queue),
            adapter_name,
            sobel_pipeline,
        })
    }

    fn create_storage(&self, data: &[u32]) -> wgpu::Buffer {
        self.device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: None,
                contents: bytemuck::cast_slice(data),
                usage: wgpu::BufferUsages::STORAGE
                    | wgpu::BufferUsages::COPY_SRC
                    | wgpu::BufferUsages::COPY_DST,
            })
    }

    fn create_uniform<T: Pod>(&self, data: &T) -> wgpu::Buffer {
        self.device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: None,
                contents: bytemuck::bytes_of(data),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            })
    }

    fn download_u32(&self, buffer: &wgpu::Buffer) -> Result<Vec<u32>> {
        let size = buffer.size();
        let staging = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: None,
            size,
            usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let mut enc = self.device.create_command_encoder(&Default::default());
        enc.copy_buffer_to_buffer(buffer, 0, &staging, 0, size);
        self.queue.submit(std::iter::once(enc.finish()));

        let slice = staging.slice(..);
        let (tx, rx) = std::sync::mpsc::sync_channel(1);
        slice.map_async(wgpu::MapMode::Read, move |r| {
            tx.send(r).ok();
        });
        self.device.poll(wgpu::PollType::wait_indefinitely()).ok();
        rx.recv()
            .map_err(|_| GradError::Accelerator("GPU channel closed".into()))?
            .map_err(|e| GradError::Accelerator(format!("Buffer mapping failed: {e}")))?;

        let data = slice.get_mapped_range();
        let result: Vec<u32> = bytemuck::cast_slice(&data).to_vec();
        drop(data);
        staging.unmap();
        Ok(result)
    }
}

impl SobelKernel for WgpuKernel {
    fn name(&self) -> &str {
        &self.adapter_name
    }

    fn is_accelerated(&self) -> bool {
        true
    }

    fn apply(&self, src: &Image, dst: &mut Image) -> Result<()> {
        check_gray_pair(src, dst)?;
        let (w, h) = (src.width(), src.height());
        if w < MIN_STENCIL_SIDE || h < MIN_STENCIL_SIDE {
            return Ok(());
        }
        check_device_limits(w, h, &self.device.limits())?;

        let input: Vec<u32> = src.data().iter().map(|&v| v as u32).collect();
        // Seed the output with the current destination so the border survives.
        let seed: Vec<u32> = dst.data().iter().map(|&v| v as u32).collect();
        let in_buf = self.create_storage(&input);
        let out_buf = self.create_storage(&seed);
        let uniform = self.create_uniform(&SobelParams {
            width: w as u32,
            height: h as u32,
        });

        let layout = self.sobel_pipeline.get_bind_group_layout(0);
        let bg = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: None,
            layout: &layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: in_buf.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: out_buf.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: uniform.as_entire_binding(),
                },
            ],
        });

        let mut enc = self.device.create_command_encoder(&Default::default());
        {
            let mut pass = enc.begin_compute_pass(&Default::default());
            pass.set_pipeline(&self.sobel_pipeline);
            pass.set_bind_group(0, &bg, &[]);
            pass.dispatch_workgroups(
                ((w - 2) as u32).div_ceil(GPU_WORKGROUP_SIDE),
                ((h - 2) as u32).div_ceil(GPU_WORKGROUP_SIDE),
                1,
            );
        }
        self.queue.submit(std::iter::once(enc.finish()));

        let result = self.download_u32(&out_buf)?;
        for (out, v) in dst.data_mut().iter_mut().zip(result) {
            *out = v as u8;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_accept_typical_frame() {
        let limits = wgpu::Limits::default();
        assert!(check_device_limits(1920, 1080, &limits).is_ok());
        assert!(check_device_limits(4096, 4096, &limits).is_ok());
    }

    #[test]
    fn test_limits_reject_oversized_buffer() {
        let limits = wgpu::Limits::default();
        // 36 Mpx widened to u32 is past the default 128 MiB binding size.
        let err = check_device_limits(6000, 6000, &limits).unwrap_err();
        assert!(matches!(err, GradError::Accelerator(ref m) if m.contains("buffer size")));
    }

    #[test]
    fn test_limits_reject_overflowing_size() {
        let limits = wgpu::Limits::default();
        assert!(check_device_limits(usize::MAX, usize::MAX, &limits).is_err());
    }

    #[test]
    fn test_limits_reject_too_many_workgroups() {
        let limits = wgpu::Limits {
            max_compute_workgroups_per_dimension: 4,
            ..wgpu::Limits::default()
        };
        // 4 groups of 16 cover 64 interior columns, so 66 wide fits.
        assert!(check_device_limits(66, 10, &limits).is_ok());
        let err = check_device_limits(67, 10, &limits).unwrap_err();
        assert!(matches!(err, GradError::Accelerator(ref m) if m.contains("dispatch")));
    }
}
