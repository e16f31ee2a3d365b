use fast_image_resize::{FilterType, ResizeAlg, ResizeOptions, Resizer};
use image::{DynamicImage, GenericImageView};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::types::Dimensions;

/// Scale `original` to `target_height`, keeping the aspect ratio.
///
/// The width is `floor(target_height * width / height)`, computed in integer
/// arithmetic so exact ratios never lose a pixel to float rounding.
pub fn calculate_target_dimensions(
    original: Dimensions,
    target_height: u32,
) -> Option<Dimensions> {
    if original.width == 0 || original.height == 0 || target_height == 0 {
        return None;
    }

    let new_width =
        u64::from(target_height) * u64::from(original.width) / u64::from(original.height);
    let new_width = u32::try_from(new_width).ok().filter(|w| *w > 0)?;

    Some(Dimensions::new(new_width, target_height))
}

/// Resample `src` to exactly `target` with a Lanczos3 convolution.
///
/// Images that already have the target size are returned as a copy.
pub fn resize_to_dimensions(src: &DynamicImage, target: Dimensions) -> Result<DynamicImage> {
    let (width, height) = src.dimensions();
    if width == target.width && height == target.height {
        debug!("Image already {}; skipping resample", target);
        return Ok(src.clone());
    }

    info!("Original size: {}x{}, New size: {}", width, height, target);

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let mut dst_image = DynamicImage::new(target.width, target.height, src.color());
    resizer.resize(src, &mut dst_image, &resize_options)?;

    Ok(dst_image)
}

/// Resize for a named emblem, mapping a degenerate aspect ratio to [`Error::ZeroWidth`].
pub fn resize_to_height(
    name: &str,
    src: &DynamicImage,
    target_height: u32,
) -> Result<(DynamicImage, Dimensions)> {
    if target_height == 0 {
        return Err(Error::ZeroSize {
            arg: "target_height",
            size: target_height,
        });
    }

    let (width, height) = src.dimensions();
    let target = calculate_target_dimensions(Dimensions::new(width, height), target_height)
        .ok_or_else(|| Error::ZeroWidth {
            name: name.to_string(),
            width,
            height,
        })?;

    if target_height > height {
        warn!(
            "Target height {} is larger than original height {}; upscaling {}x{}",
            target_height, height, width, height
        );
    }

    let resized = resize_to_dimensions(src, target)?;
    Ok((resized, target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    struct WarnCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for WarnCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn count_warnings(f: impl FnOnce()) -> usize {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(WarnCounter(count.clone()));
        tracing::subscriber::with_default(subscriber, f);
        count.load(Ordering::SeqCst)
    }

    fn dims(width: u32, height: u32) -> Dimensions {
        Dimensions::new(width, height)
    }

    #[test]
    fn exact_ratio_scales_cleanly() {
        assert_eq!(calculate_target_dimensions(dims(1000, 500), 64), Some(dims(128, 64)));
    }

    #[test]
    fn fractional_width_is_truncated() {
        // 64 * 1001 / 500 = 128.128
        assert_eq!(calculate_target_dimensions(dims(1001, 500), 64), Some(dims(128, 64)));
        // 64 * 1999 / 1000 = 127.936, still truncated rather than rounded
        assert_eq!(calculate_target_dimensions(dims(1999, 1000), 64), Some(dims(127, 64)));
    }

    #[test]
    fn portrait_and_square_sources() {
        assert_eq!(calculate_target_dimensions(dims(500, 1000), 64), Some(dims(32, 64)));
        assert_eq!(calculate_target_dimensions(dims(512, 512), 64), Some(dims(64, 64)));
    }

    #[test]
    fn upscaling_keeps_the_ratio() {
        assert_eq!(calculate_target_dimensions(dims(30, 20), 64), Some(dims(96, 64)));
    }

    #[test]
    fn upscale_warning_comes_from_resize_not_the_math() {
        let math_warnings = count_warnings(|| {
            calculate_target_dimensions(dims(30, 20), 64);
        });
        assert_eq!(math_warnings, 0);

        let src = DynamicImage::ImageRgba8(RgbaImage::new(30, 20));
        let resize_warnings = count_warnings(|| {
            resize_to_height("silver", &src, 64).unwrap();
        });
        assert_eq!(resize_warnings, 1);
    }

    #[test]
    fn integer_math_avoids_float_drift() {
        // (64 / 3) * 3 in floating point lands just below 64
        assert_eq!(calculate_target_dimensions(dims(3, 3), 64), Some(dims(64, 64)));
        assert_eq!(calculate_target_dimensions(dims(49, 49), 64), Some(dims(64, 64)));
    }

    #[test]
    fn large_sources_do_not_overflow() {
        let out = calculate_target_dimensions(dims(u32::MAX, u32::MAX / 2), 64).unwrap();
        assert_eq!(out.height, 64);
        assert_eq!(out.width, 128);
    }

    #[test]
    fn aspect_ratio_within_one_pixel() {
        for (w, h) in [(1000, 500), (1001, 500), (333, 777), (1920, 1080), (7, 3)] {
            let out = calculate_target_dimensions(dims(w, h), 64).unwrap();
            let exact = 64.0 * w as f64 / h as f64;
            assert!((exact - out.width as f64).abs() < 1.0, "{w}x{h} -> {out}");
        }
    }

    #[test]
    fn degenerate_inputs_have_no_target() {
        assert_eq!(calculate_target_dimensions(dims(1, 100), 64), None);
        assert_eq!(calculate_target_dimensions(dims(0, 100), 64), None);
        assert_eq!(calculate_target_dimensions(dims(100, 0), 64), None);
        assert_eq!(calculate_target_dimensions(dims(100, 100), 0), None);
    }

    #[test]
    fn resize_produces_requested_size_and_color_type() {
        let src = DynamicImage::ImageRgba8(RgbaImage::from_pixel(200, 100, Rgba([200, 40, 10, 255])));
        let (out, target) = resize_to_height("bronze", &src, 64).unwrap();
        assert_eq!(target, dims(128, 64));
        assert_eq!(out.dimensions(), (128, 64));
        assert_eq!(out.color(), src.color());
        // A flat colour survives Lanczos resampling, up to fixed-point rounding.
        let px = out.to_rgba8().get_pixel(64, 32).0;
        for (got, want) in px.iter().zip([200u8, 40, 10, 255]) {
            assert!(got.abs_diff(want) <= 1, "{px:?}");
        }
    }

    #[test]
    fn same_size_is_passed_through() {
        let src = DynamicImage::ImageRgba8(RgbaImage::from_pixel(64, 64, Rgba([1, 2, 3, 4])));
        let (out, _) = resize_to_height("gold", &src, 64).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn tall_sliver_is_a_zero_width_error() {
        let src = DynamicImage::ImageRgba8(RgbaImage::new(1, 200));
        let err = resize_to_height("legend", &src, 64).unwrap_err();
        assert!(matches!(err, Error::ZeroWidth { width: 1, height: 200, .. }));
    }
}
