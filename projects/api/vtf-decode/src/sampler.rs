//! Filtered reads of a [`VtfTexture`] at normalized coordinates.
//!
//! [`VtfTexture::sample_bilinear`] blends the four texels nearest to a coordinate within one
//! mip level. [`VtfTexture::sample`] additionally blends the two mip levels nearest to a
//! fractional level (trilinear filtering).
//!
//! Coordinates are in `[0, 1)` across the level, texel centres at `(i + 0.5) / size`.
//! How coordinates outside of that range and texels past the edges are treated is set per
//! axis by an [`AddressMode`].

use crate::layout::LevelLayout;
use crate::util::{abs, floor, trunc};
use crate::VtfTexture;
use likely_stable::unlikely;
use vtf_decode_format::format::{Pixel, TextureFlags};

/// Largest coordinate [`AddressMode::Clamp`] keeps, just short of the far edge.
const CLAMP_MAX: f32 = 1.0 - 1e-6;

/// How coordinates past the edges of a texture are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum AddressMode {
    /// The texture repeats.
    #[default]
    Wrap,
    /// The edge texels extend forever.
    Clamp,
}

impl AddressMode {
    /// Brings a finite normalized coordinate into `[0, 1)`.
    #[inline]
    fn normalize(self, coord: f32) -> f32 {
        match self {
            // Mirrors negative coordinates, so that -0.25 samples the same place as 0.25.
            AddressMode::Wrap => abs(coord - trunc(coord)),
            AddressMode::Clamp => coord.clamp(0.0, CLAMP_MAX),
        }
    }

    /// Maps a texel index which may lie past either edge onto `0..size`.
    #[inline]
    fn resolve(self, index: i64, size: u32) -> u32 {
        match self {
            AddressMode::Wrap => index.rem_euclid(size as i64) as u32,
            AddressMode::Clamp => index.clamp(0, size as i64 - 1) as u32,
        }
    }
}

/// Addressing used when sampling a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct SamplerSettings {
    /// Addressing along `u` (the x axis).
    pub horizontal: AddressMode,
    /// Addressing along `v` (the y axis).
    pub vertical: AddressMode,
}

impl SamplerSettings {
    /// Creates settings with the given horizontal and vertical addressing.
    pub const fn new(horizontal: AddressMode, vertical: AddressMode) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Settings requested by a texture's flags: [`TextureFlags::CLAMP_S`] clamps horizontally,
    /// [`TextureFlags::CLAMP_T`] vertically. Everything else wraps.
    pub fn from_flags(flags: TextureFlags) -> Self {
        let mode = |flag| {
            if flags.contains(flag) {
                AddressMode::Clamp
            } else {
                AddressMode::Wrap
            }
        };

        Self::new(mode(TextureFlags::CLAMP_S), mode(TextureFlags::CLAMP_T))
    }
}

impl VtfTexture {
    /// Addressing requested by the texture's flags. See [`SamplerSettings::from_flags`].
    #[inline]
    pub fn sampler_settings(&self) -> SamplerSettings {
        SamplerSettings::from_flags(self.flags())
    }

    /// Bilinearly samples depth slice `z` of a face of a frame at mip level `mip`,
    /// addressed as the texture's flags request.
    ///
    /// Returns [`Pixel::default`] if the texture is invalid, `u` or `v` isn't finite, or
    /// `mip`, `frame` or `face` is out of range. `z` is clamped to the slices of the level.
    pub fn sample_bilinear(
        &self,
        u: f32,
        v: f32,
        z: u32,
        mip: u32,
        frame: u32,
        face: u32,
    ) -> Pixel {
        self.sample_bilinear_with(u, v, z, mip, frame, face, self.sampler_settings())
    }

    /// [`VtfTexture::sample_bilinear`] with explicit addressing.
    #[allow(clippy::too_many_arguments)]
    pub fn sample_bilinear_with(
        &self,
        u: f32,
        v: f32,
        z: u32,
        mip: u32,
        frame: u32,
        face: u32,
        settings: SamplerSettings,
    ) -> Pixel {
        if unlikely(!u.is_finite() || !v.is_finite()) {
            return Pixel::default();
        }

        let Some(layout) = self.layout() else {
            return Pixel::default();
        };
        let Some(level) = layout.level(mip) else {
            return Pixel::default();
        };
        let z = z.min(level.depth - 1);
        let Some(slice) = level.slice_offset(frame, face, z, &layout) else {
            return Pixel::default();
        };

        let px = settings.horizontal.normalize(u) * level.width as f32 - 0.5;
        let py = settings.vertical.normalize(v) * level.height as f32 - 0.5;
        let (x0, y0) = (floor(px), floor(py));
        let (fx, fy) = (px - x0, py - y0);
        let (x0, y0) = (x0 as i64, y0 as i64);

        let columns = [
            settings.horizontal.resolve(x0, level.width),
            settings.horizontal.resolve(x0 + 1, level.width),
        ];
        let rows = [
            settings.vertical.resolve(y0, level.height),
            settings.vertical.resolve(y0 + 1, level.height),
        ];

        let texel = |x: u32, y: u32| {
            let offset = texel_offset(&level, slice, x, y);
            self.read_pixel(offset, layout.format())
        };

        texel(columns[0], rows[0]) * ((1.0 - fx) * (1.0 - fy))
            + texel(columns[1], rows[0]) * (fx * (1.0 - fy))
            + texel(columns[0], rows[1]) * ((1.0 - fx) * fy)
            + texel(columns[1], rows[1]) * (fx * fy)
    }

    /// Trilinearly samples depth slice `z` of a face of a frame at fractional mip level `mip`,
    /// addressed as the texture's flags request.
    ///
    /// `mip` is clamped to the levels of the texture. A whole `mip` samples only that level;
    /// otherwise the two neighbouring levels are sampled and blended by the fraction of `mip`.
    ///
    /// Returns [`Pixel::default`] if `mip` isn't finite, and in the cases listed for
    /// [`VtfTexture::sample_bilinear`].
    pub fn sample(&self, u: f32, v: f32, z: u32, mip: f32, frame: u32, face: u32) -> Pixel {
        self.sample_with(u, v, z, mip, frame, face, self.sampler_settings())
    }

    /// [`VtfTexture::sample`] with explicit addressing.
    #[allow(clippy::too_many_arguments)]
    pub fn sample_with(
        &self,
        u: f32,
        v: f32,
        z: u32,
        mip: f32,
        frame: u32,
        face: u32,
        settings: SamplerSettings,
    ) -> Pixel {
        let mip_levels = self.mip_levels();
        if unlikely(mip_levels == 0 || !mip.is_finite()) {
            return Pixel::default();
        }

        let mip = mip.clamp(0.0, (mip_levels - 1) as f32);
        let finer = floor(mip);
        if finer == mip {
            return self.sample_bilinear_with(u, v, z, mip as u32, frame, face, settings);
        }

        let coarser = finer + 1.0;
        let frac = mip - finer;
        let fine = self.sample_bilinear_with(u, v, z, finer as u32, frame, face, settings);
        let coarse = self.sample_bilinear_with(u, v, z, coarser as u32, frame, face, settings);
        fine * (1.0 - frac) + coarse * frac
    }
}

/// Offset of texel (`x`, `y`) of the slice starting at `slice`. Both must lie within the level.
#[inline(always)]
fn texel_offset(level: &LevelLayout, slice: usize, x: u32, y: u32) -> usize {
    // Within the level's frame, whose size was computed with checked arithmetic.
    slice + (y as usize * level.width as usize + x as usize) * level.pixel_size
}
