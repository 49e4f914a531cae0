//! Texture loading and ownership
//!
//! Every image the app draws is decoded once at startup, uploaded as an
//! sRGB texture and kept in a [`TextureArena`]. Bodies refer to their
//! texture by [`VisualHandle`], which is the arena index.

use std::path::Path;

use image::RgbaImage;
use orrery_core::{AssetLoadError, VisualHandle};

/// A texture uploaded to the GPU with its sprite bind group
pub struct GpuTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub bind_group: wgpu::BindGroup,
    pub width: u32,
    pub height: u32,
}

/// Decode an image file into RGBA8 pixels
pub fn decode_rgba(path: &Path) -> Result<RgbaImage, AssetLoadError> {
    let decoded = image::open(path).map_err(|e| AssetLoadError::image(path, e.to_string()))?;
    Ok(decoded.to_rgba8())
}

/// Owns all loaded textures
#[derive(Default)]
pub struct TextureArena {
    textures: Vec<GpuTexture>,
}

impl TextureArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `path` and upload it, returning the handle of the new texture
    pub fn load(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        path: &Path,
    ) -> Result<VisualHandle, AssetLoadError> {
        let pixels = decode_rgba(path)?;
        let label = path.display().to_string();
        let texture = Self::upload(device, queue, layout, sampler, &pixels, &label);

        let handle = VisualHandle::new(self.textures.len() as u32);
        log::debug!("Loaded {} ({}x{}) as visual {}", label, texture.width, texture.height, handle.index());
        self.textures.push(texture);
        Ok(handle)
    }

    fn upload(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        pixels: &RgbaImage,
        label: &str,
    ) -> GpuTexture {
        let (width, height) = pixels.dimensions();
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            pixels.as_raw(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });

        GpuTexture {
            texture,
            view,
            bind_group,
            width,
            height,
        }
    }

    pub fn get(&self, visual: VisualHandle) -> Option<&GpuTexture> {
        self.textures.get(visual.index())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Release every texture
    pub fn clear(&mut self) {
        for texture in self.textures.drain(..) {
            texture.texture.destroy();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_names_the_path() {
        let err = decode_rgba(Path::new("image/DoesNotExist.png")).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("DoesNotExist.png"), "{}", message);
        assert!(message.starts_with("Unable to load image"));
    }

    #[test]
    fn test_decode_png_to_rgba() {
        let path = std::env::temp_dir().join("orrery_texture_decode_test.png");
        let mut source = image::RgbImage::new(3, 2);
        source.put_pixel(1, 1, image::Rgb([10, 20, 30]));
        source.save(&path).unwrap();

        let pixels = decode_rgba(&path).unwrap();
        assert_eq!(pixels.dimensions(), (3, 2));
        assert_eq!(pixels.get_pixel(1, 1).0, [10, 20, 30, 255]);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_empty_arena_has_no_textures() {
        let arena = TextureArena::new();
        assert!(arena.is_empty());
        assert!(arena.get(VisualHandle::new(0)).is_none());
    }
}
