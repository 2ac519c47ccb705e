use image::{Rgba, RgbaImage};

/// Paints a round-capped segment `width` pixels wide between two buffer-space
/// points. A zero-length segment paints a single disc.
pub fn draw_segment(
    image: &mut RgbaImage,
    from: (f32, f32),
    to: (f32, f32),
    width: f32,
    color: Rgba<u8>,
) {
    let (image_width, image_height) = image.dimensions();
    if image_width == 0 || image_height == 0 {
        return;
    }

    let radius = (width / 2.0).max(0.5);

    let left = (from.0.min(to.0) - radius).floor().max(0.0);
    let right = (from.0.max(to.0) + radius)
        .ceil()
        .min(image_width as f32 - 1.0);
    let top = (from.1.min(to.1) - radius).floor().max(0.0);
    let bottom = (from.1.max(to.1) + radius)
        .ceil()
        .min(image_height as f32 - 1.0);

    if left > right || top > bottom {
        return;
    }

    for y in top as u32..=bottom as u32 {
        for x in left as u32..=right as u32 {
            let center = (x as f32 + 0.5, y as f32 + 0.5);
            if distance_to_segment(center, from, to) <= radius {
                image.put_pixel(x, y, color);
            }
        }
    }
}

fn distance_to_segment(point: (f32, f32), from: (f32, f32), to: (f32, f32)) -> f32 {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let length_squared = dx * dx + dy * dy;

    let t = if length_squared == 0.0 {
        0.0
    } else {
        (((point.0 - from.0) * dx + (point.1 - from.1) * dy) / length_squared).clamp(0.0, 1.0)
    };

    let (closest_x, closest_y) = (from.0 + t * dx, from.1 + t * dy);
    ((point.0 - closest_x).powi(2) + (point.1 - closest_y).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn painted(image: &RgbaImage) -> usize {
        image.pixels().filter(|p| **p == WHITE).count()
    }

    #[test]
    fn horizontal_segment_covers_its_path() {
        let mut image = RgbaImage::from_pixel(40, 20, BLACK);
        draw_segment(&mut image, (5.0, 10.0), (30.0, 10.0), 4.0, WHITE);

        for x in 5..30 {
            assert_eq!(*image.get_pixel(x, 10), WHITE, "gap at x={}", x);
        }
        assert_eq!(*image.get_pixel(0, 0), BLACK);
        assert_eq!(*image.get_pixel(10, 2), BLACK);
    }

    #[test]
    fn caps_are_round() {
        let mut image = RgbaImage::from_pixel(40, 40, BLACK);
        draw_segment(&mut image, (20.0, 20.0), (20.0, 20.0), 10.0, WHITE);

        assert_eq!(*image.get_pixel(20, 20), WHITE);
        assert_eq!(*image.get_pixel(16, 20), WHITE);
        // corners of the bounding square stay untouched
        assert_eq!(*image.get_pixel(15, 15), BLACK);
        assert_eq!(*image.get_pixel(24, 24), BLACK);
    }

    #[test]
    fn wider_brush_paints_more() {
        let mut thin = RgbaImage::from_pixel(50, 50, BLACK);
        let mut thick = RgbaImage::from_pixel(50, 50, BLACK);
        draw_segment(&mut thin, (10.0, 10.0), (40.0, 40.0), 1.0, WHITE);
        draw_segment(&mut thick, (10.0, 10.0), (40.0, 40.0), 10.0, WHITE);

        assert!(painted(&thin) > 0);
        assert!(painted(&thick) > painted(&thin));
    }

    #[test]
    fn segments_outside_the_buffer_are_clipped() {
        let mut image = RgbaImage::from_pixel(10, 10, BLACK);
        draw_segment(&mut image, (-50.0, -50.0), (-40.0, -40.0), 4.0, WHITE);
        assert_eq!(painted(&image), 0);

        draw_segment(&mut image, (-5.0, 5.0), (15.0, 5.0), 2.0, WHITE);
        assert!(painted(&image) >= 10);
    }
}
