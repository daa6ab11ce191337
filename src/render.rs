use crate::constants::{CLEAR_ALPHA, MSAA_SAMPLES};
use crate::core::constants::PARTICLE_COLOR_BRIGHT;
use crate::core::{srgb_hex_to_linear, Camera, ParticleField, SceneConfig};
use crate::input;
use glam::Mat4;
use web_sys as web;

mod helpers;
mod particles;
mod targets;
use particles::{create_particle_resources, ParticleResources, SceneUniforms};
use targets::RenderTargets;

/// Per-frame inputs for the particle scene.
pub struct SceneFrame {
    pub model: Mat4,
    pub line_opacity: f32,
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,
    scene: ParticleResources,
    camera: Camera,
    sprite_half: f32,
    line_color: [f32; 4],
    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        field: &ParticleField,
        scene_config: &SceneConfig,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // Transparent canvas: the page background shows through the cloud.
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "[gpu] surface {}x{} format={:?} alpha={:?}",
            width,
            height,
            format,
            alpha_mode
        );

        let targets = RenderTargets::new(&device, width, height, format, MSAA_SAMPLES);
        let scene = create_particle_resources(&device, field, format, MSAA_SAMPLES);
        let camera = Camera::new(input::aspect_ratio(width, height));
        // Match perspective-attenuated point sprites: a sprite of `point_size`
        // covers point_size * tan(fovy / 2) world units.
        let sprite_half = scene_config.point_size * (camera.fovy_radians * 0.5).tan() * 0.5;
        let line_color = srgb_hex_to_linear(PARTICLE_COLOR_BRIGHT).extend(1.0).to_array();

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            scene,
            camera,
            sprite_half,
            line_color,
            width,
            height,
        })
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
            self.camera.set_aspect(input::aspect_ratio(width, height));
        }
    }

    pub fn render(&mut self, frame: &SceneFrame) -> Result<(), wgpu::SurfaceError> {
        let proj = self.camera.projection_matrix();
        let uniforms = SceneUniforms {
            view_proj: self.camera.view_projection().to_cols_array_2d(),
            model: frame.model.to_cols_array_2d(),
            proj_scale: [proj.x_axis.x, proj.y_axis.y],
            sprite_half: self.sprite_half,
            line_opacity: frame.line_opacity,
            line_color: self.line_color,
        };
        self.queue.write_buffer(
            &self.scene.uniform_buffer,
            0,
            bytemuck::bytes_of(&uniforms),
        );

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.msaa_view,
                    resolve_target: Some(&view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.0,
                            g: 0.0,
                            b: 0.0,
                            a: CLEAR_ALPHA,
                        }),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.scene.bind_group, &[]);

            if self.scene.line_vertex_count > 0 {
                rpass.set_pipeline(&self.scene.lines_pipeline);
                rpass.set_vertex_buffer(0, self.scene.line_buffer.slice(..));
                rpass.draw(0..self.scene.line_vertex_count, 0..1);
            }
            if self.scene.point_count > 0 {
                rpass.set_pipeline(&self.scene.points_pipeline);
                rpass.set_vertex_buffer(0, self.scene.point_buffer.slice(..));
                rpass.draw(0..6, 0..self.scene.point_count);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }
}
