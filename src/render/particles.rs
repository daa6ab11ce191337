use super::helpers::{make_scene_pipeline, PipelineSpec};
use crate::core::ParticleField;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) proj_scale: [f32; 2],
    pub(crate) sprite_half: f32,
    pub(crate) line_opacity: f32,
    pub(crate) line_color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct PointInstance {
    position: [f32; 3],
    color: [f32; 3],
}

const POINT_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
const LINE_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

pub(crate) struct ParticleResources {
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) points_pipeline: wgpu::RenderPipeline,
    pub(crate) lines_pipeline: wgpu::RenderPipeline,
    pub(crate) point_buffer: wgpu::Buffer,
    pub(crate) point_count: u32,
    pub(crate) line_buffer: wgpu::Buffer,
    pub(crate) line_vertex_count: u32,
}

pub(crate) fn create_particle_resources(
    device: &wgpu::Device,
    field: &ParticleField,
    color_format: wgpu::TextureFormat,
    sample_count: u32,
) -> ParticleResources {
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("scene_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("scene_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });

    let points_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("points_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::POINTS_WGSL.into()),
    });
    let lines_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("lines_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::LINES_WGSL.into()),
    });

    let points_pipeline = make_scene_pipeline(
        device,
        &pl,
        &points_shader,
        PipelineSpec {
            label: "points_pipeline",
            vs_entry: "vs_points",
            fs_entry: "fs_points",
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<PointInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &POINT_ATTRS,
            }],
            topology: wgpu::PrimitiveTopology::TriangleList,
        },
        color_format,
        sample_count,
    );
    let lines_pipeline = make_scene_pipeline(
        device,
        &pl,
        &lines_shader,
        PipelineSpec {
            label: "lines_pipeline",
            vs_entry: "vs_lines",
            fs_entry: "fs_lines",
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<[f32; 3]>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &LINE_ATTRS,
            }],
            topology: wgpu::PrimitiveTopology::LineList,
        },
        color_format,
        sample_count,
    );

    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("scene_uniforms"),
        size: std::mem::size_of::<SceneUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("scene_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    let mut instances: Vec<PointInstance> = field
        .positions
        .iter()
        .zip(&field.colors)
        .map(|(p, c)| PointInstance {
            position: p.to_array(),
            color: c.to_array(),
        })
        .collect();
    let point_count = instances.len() as u32;
    // Zero-sized vertex buffers are not allowed; keep one dummy entry.
    if instances.is_empty() {
        instances.push(PointInstance {
            position: [0.0; 3],
            color: [0.0; 3],
        });
    }
    let point_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("point_instances"),
        contents: bytemuck::cast_slice(&instances),
        usage: wgpu::BufferUsages::VERTEX,
    });

    let mut line_vertices: Vec<[f32; 3]> = field
        .lines
        .iter()
        .flat_map(|[a, b]| [a.to_array(), b.to_array()])
        .collect();
    let line_vertex_count = line_vertices.len() as u32;
    if line_vertices.is_empty() {
        line_vertices.push([0.0; 3]);
    }
    let line_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("line_vertices"),
        contents: bytemuck::cast_slice(&line_vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });

    ParticleResources {
        uniform_buffer,
        bind_group,
        points_pipeline,
        lines_pipeline,
        point_buffer,
        point_count,
        line_buffer,
        line_vertex_count,
    }
}
