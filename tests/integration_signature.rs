//! End-to-end tests for signature generation and comparison.
//!
//! These verify the behavior a caller actually relies on:
//! - identical inputs classify as Identical
//! - rescaled and brightness-shifted copies stay within Same
//! - unrelated images land in the far bands
//! - degenerate images are handled without error

use image::imageops::{self, FilterType};
use image::{GrayImage, Luma};
use image_signature::{
    compare, normalized_distance, GeneratorConfig, LumaBuffer, SignatureGenerator,
    SignatureSimilarity,
};

/// A smooth synthetic image with non-trivial detail, so that rescaled
/// versions keep the same local-contrast structure.
fn detailed_image(width: u32, height: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| {
        let fx = x as f64 / width as f64;
        let fy = y as f64 / height as f64;

        let value = 128.0
            + 55.0 * (fx * 11.0).sin() * (fy * 7.0).cos()
            + 40.0 * ((fx + fy) * 5.0).sin();

        Luma([value.clamp(0.0, 255.0) as u8])
    })
}

/// An unrelated second image with a very different structure.
fn other_image(width: u32, height: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| {
        if (x / 8 + y / 8) % 2 == 0 {
            Luma([30])
        } else {
            Luma([220])
        }
    })
}

fn generator() -> SignatureGenerator {
    SignatureGenerator::new(GeneratorConfig::new()).unwrap()
}

#[test]
fn identical_images_compare_as_identical() {
    let generator = generator();
    let image = detailed_image(128, 128);

    let first = generator.generate(&image).unwrap();
    let second = generator.generate(&image).unwrap();

    assert_eq!(compare(&first, &second), SignatureSimilarity::Identical);
}

#[test]
fn downscaled_images_compare_as_identical_or_same() {
    let generator = generator();
    let image = detailed_image(128, 128);
    let downscaled = imageops::resize(&image, 64, 64, FilterType::Triangle);

    let first = generator.generate(&image).unwrap();
    let second = generator.generate(&downscaled).unwrap();

    let result = compare(&first, &second);
    assert!(
        result <= SignatureSimilarity::Same,
        "expected Identical or Same, got {result}"
    );
}

#[test]
fn upscaled_images_compare_as_identical_or_same() {
    let generator = generator();
    let image = detailed_image(128, 128);
    let upscaled = imageops::resize(&image, 256, 256, FilterType::Triangle);

    let first = generator.generate(&image).unwrap();
    let second = generator.generate(&upscaled).unwrap();

    let result = compare(&first, &second);
    assert!(
        result <= SignatureSimilarity::Same,
        "expected Identical or Same, got {result}"
    );
}

#[test]
fn stretched_images_compare_as_identical_or_same() {
    let generator = generator();
    let image = detailed_image(128, 128);
    let stretched = imageops::resize(&image, 256, 128, FilterType::Triangle);

    let first = generator.generate(&image).unwrap();
    let second = generator.generate(&stretched).unwrap();

    let result = compare(&first, &second);
    assert!(
        result <= SignatureSimilarity::Same,
        "expected Identical or Same, got {result}"
    );
}

#[test]
fn brightness_shifted_copies_compare_as_identical_or_same() {
    let generator = generator();
    let image = detailed_image(128, 128);
    let brightened = GrayImage::from_fn(128, 128, |x, y| {
        Luma([image.get_pixel(x, y).0[0].saturating_add(25)])
    });

    let first = generator.generate(&image).unwrap();
    let second = generator.generate(&brightened).unwrap();

    let result = compare(&first, &second);
    assert!(
        result <= SignatureSimilarity::Same,
        "expected Identical or Same, got {result}"
    );
}

#[test]
fn unrelated_images_land_in_the_far_bands() {
    let generator = generator();

    let first = generator.generate(&detailed_image(128, 128)).unwrap();
    let second = generator.generate(&other_image(128, 128)).unwrap();

    let result = compare(&first, &second);
    assert!(
        result >= SignatureSimilarity::Dissimilar,
        "expected Dissimilar or Different, got {result}"
    );
}

#[test]
fn distance_is_symmetric_for_same_configuration_signatures() {
    let generator = generator();

    let first = generator.generate(&detailed_image(96, 96)).unwrap();
    let second = generator.generate(&other_image(96, 96)).unwrap();

    assert_eq!(
        normalized_distance(&first, &second),
        normalized_distance(&second, &first)
    );
}

#[test]
fn uniform_images_compare_to_themselves_as_identical() {
    let generator = generator();

    for side in 1..=16u32 {
        let image = GrayImage::from_pixel(side, side, Luma([99]));

        let first = generator.generate(&image).unwrap();
        let second = generator.generate(&image).unwrap();

        assert_eq!(first.len(), 648);
        assert_eq!(compare(&first, &second), SignatureSimilarity::Identical);
    }
}

#[test]
fn dynamic_image_adapter_feeds_the_generator() {
    let generator = generator();
    let image = detailed_image(64, 64);
    let dynamic = image::DynamicImage::ImageLuma8(image.clone());

    let from_gray = generator.generate(&image).unwrap();
    let from_dynamic = generator
        .generate(&LumaBuffer::from_dynamic(&dynamic))
        .unwrap();

    assert_eq!(from_gray, from_dynamic);
}

#[test]
fn custom_autocrop_collaborators_plug_in_from_the_crate_root() {
    use image_signature::{Autocrop, EntropyCrop};

    let generator = SignatureGenerator::with_autocrop(
        GeneratorConfig::new(),
        Box::new(EntropyCrop::default()) as Box<dyn Autocrop>,
    )
    .unwrap();

    let signature = generator.generate(&detailed_image(64, 64)).unwrap();
    assert_eq!(signature.len(), 648);
}

#[test]
fn grid_size_controls_signature_length_end_to_end() {
    let image = detailed_image(100, 80);

    for grid_size in [1u32, 4, 9, 11] {
        let generator =
            SignatureGenerator::new(GeneratorConfig::new().grid_size(grid_size)).unwrap();
        let signature = generator.generate(&image).unwrap();

        assert_eq!(signature.len(), (grid_size as usize).pow(2) * 8);
    }
}
