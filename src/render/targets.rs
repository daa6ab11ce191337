use super::helpers;
/// Multisampled color target the scene is drawn into before being resolved
/// onto the swapchain texture.
pub(crate) struct RenderTargets {
    pub(crate) msaa_tex: wgpu::Texture,
    pub(crate) msaa_view: wgpu::TextureView,
    format: wgpu::TextureFormat,
    sample_count: u32,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Self {
        let (msaa_tex, msaa_view) = create_msaa(device, width, height, format, sample_count);
        Self {
            msaa_tex,
            msaa_view,
            format,
            sample_count,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        let (tex, view) = create_msaa(device, width, height, self.format, self.sample_count);
        self.msaa_tex.destroy();
        self.msaa_tex = tex;
        self.msaa_view = view;
    }
}

fn create_msaa(
    device: &wgpu::Device,
    width: u32,
    height: u32,
    format: wgpu::TextureFormat,
    sample_count: u32,
) -> (wgpu::Texture, wgpu::TextureView) {
    helpers::create_color_texture_device(
        device,
        "msaa_color",
        width.max(1),
        height.max(1),
        format,
        sample_count,
        wgpu::TextureUsages::RENDER_ATTACHMENT,
    )
}
