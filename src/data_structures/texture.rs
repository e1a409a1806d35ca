//! The user-image texture resource and its GPU upload.
//!
//! [`TextureResource`] wraps the decoded user image together with the fixed
//! sampling state the mock-up assets expect: clamp-to-edge wrapping, sRGB
//! colour, no vertical flip (the GLB UV layout already matches the image
//! origin), and a UV transform that letterboxes non-square images on the
//! acrylic material.

use anyhow::*;
use cgmath::Vector2;
use image::GenericImageView;

use crate::catalog::MaterialKind;

/// Offset/repeat applied to texture coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UvTransform {
    pub offset: Vector2<f32>,
    pub repeat: Vector2<f32>,
}

impl UvTransform {
    pub fn identity() -> Self {
        Self {
            offset: Vector2::new(0.0, 0.0),
            repeat: Vector2::new(1.0, 1.0),
        }
    }
}

impl Default for UvTransform {
    fn default() -> Self {
        Self::identity()
    }
}

/// UV transform that fits an image of the given pixel size into a square UV
/// cell without distortion, centered.
///
/// Only the acrylic mock-up has a square front face that needs this; every
/// other material keeps the identity transform and lets the asset's UVs
/// stretch the image as authored.
pub fn aspect_correction(kind: MaterialKind, width: u32, height: u32) -> UvTransform {
    if kind != MaterialKind::Acrylic || width == 0 || height == 0 {
        return UvTransform::identity();
    }
    let aspect = width as f32 / height as f32;
    if aspect > 1.0 {
        // wider than tall: shrink vertically, center the band
        UvTransform {
            repeat: Vector2::new(1.0, 1.0 / aspect),
            offset: Vector2::new(0.0, (1.0 - 1.0 / aspect) / 2.0),
        }
    } else {
        UvTransform {
            repeat: Vector2::new(aspect, 1.0),
            offset: Vector2::new((1.0 - aspect) / 2.0, 0.0),
        }
    }
}

/// The user's image prepared for the textured front surface.
#[derive(Debug)]
pub struct TextureResource {
    image: Option<image::DynamicImage>,
    kind: MaterialKind,
    pub wrap_u: wgpu::AddressMode,
    pub wrap_v: wgpu::AddressMode,
    /// Source pixels are perceptually encoded; sampled through an sRGB view.
    pub srgb: bool,
    /// UV origin already matches the GLB layout, so no flip on upload.
    pub flip_y: bool,
    pub uv_transform: UvTransform,
}

impl TextureResource {
    /// A resource whose pixels are not decoded yet.
    ///
    /// The UV transform stays identity until [`set_image`](Self::set_image)
    /// supplies dimensions; the acrylic correction is applied then, never
    /// skipped.
    pub fn pending(kind: MaterialKind) -> Self {
        Self {
            image: None,
            kind,
            wrap_u: wgpu::AddressMode::ClampToEdge,
            wrap_v: wgpu::AddressMode::ClampToEdge,
            srgb: true,
            flip_y: false,
            uv_transform: UvTransform::identity(),
        }
    }

    /// Decode raw image file bytes (PNG, JPEG, ...) and prepare the resource.
    pub fn from_bytes(bytes: &[u8], kind: MaterialKind) -> Result<Self> {
        let img = image::load_from_memory(bytes)?;
        Ok(Self::from_image(img, kind))
    }

    pub fn from_image(img: image::DynamicImage, kind: MaterialKind) -> Self {
        let mut resource = Self::pending(kind);
        resource.set_image(img);
        resource
    }

    /// Attach decoded pixels and recompute the aspect-dependent UV transform.
    pub fn set_image(&mut self, img: image::DynamicImage) {
        let (width, height) = img.dimensions();
        self.uv_transform = aspect_correction(self.kind, width, height);
        self.image = Some(img);
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.image.as_ref().map(|img| img.dimensions())
    }

    pub fn kind(&self) -> MaterialKind {
        self.kind
    }

    /// Upload the decoded image to the GPU with this resource's sampling
    /// state. Fails if the pixels have not resolved yet.
    pub fn upload(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        label: Option<&str>,
    ) -> Result<GpuTexture> {
        let img = self
            .image
            .as_ref()
            .context("texture upload requested before the image resolved")?;
        let dimensions = img.dimensions();
        let rgba = if self.flip_y {
            img.flipv().to_rgba8()
        } else {
            img.to_rgba8()
        };

        let size = wgpu::Extent3d {
            width: dimensions.0,
            height: dimensions.1,
            depth_or_array_layers: 1,
        };
        let format = if self.srgb {
            wgpu::TextureFormat::Rgba8UnormSrgb
        } else {
            wgpu::TextureFormat::Rgba8Unorm
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label,
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                aspect: wgpu::TextureAspect::All,
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
            },
            &rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * dimensions.0),
                rows_per_image: Some(dimensions.1),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: self.wrap_u,
            address_mode_v: self.wrap_v,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Linear,
            ..Default::default()
        });

        Ok(GpuTexture {
            texture,
            view,
            sampler,
        })
    }
}

/// A GPU texture with its view and sampler.
#[derive(Debug)]
pub struct GpuTexture {
    #[allow(unused)]
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}
