use std::path::PathBuf;

use deckgen::{DeckError, Manifest, compose};

fn write_png(path: &PathBuf, width: u32, height: u32) {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([40, 90, 160, 255]));
    image::DynamicImage::ImageRgba8(img)
        .save_with_format(path, image::ImageFormat::Png)
        .unwrap();
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("deck_compose").join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn qualifying_descriptors_become_slides_in_order() {
    let dir = scratch_dir("order");
    let a = dir.join("a.png");
    let b = dir.join("b.png");
    write_png(&a, 200, 100);
    write_png(&b, 100, 200);

    // The three-descriptor contract example: last entry has an empty image.
    let manifest: Manifest = serde_json::from_str(&format!(
        r#"{{"slides":[
            {{"title":"Intro","image":"{}"}},
            {{"image":"{}"}},
            {{"title":"x","image":""}}
        ]}}"#,
        a.display(),
        b.display()
    ))
    .unwrap();

    let deck = compose(&manifest).unwrap();
    assert_eq!(deck.slides.len(), 2);

    let first = &deck.slides[0];
    assert_eq!(first.title.as_ref().unwrap().text, "Intro");
    assert_eq!(first.picture.image.width_px, 200);

    let second = &deck.slides[1];
    assert!(second.title.is_none());
    assert_eq!(second.picture.image.width_px, 100);
}

#[test]
fn canvas_and_centering_are_invariant() {
    let dir = scratch_dir("geometry");
    let wide = dir.join("wide.png");
    let tall = dir.join("tall.png");
    write_png(&wide, 400, 100);
    write_png(&tall, 100, 400);

    let manifest: Manifest = serde_json::from_str(&format!(
        r#"{{"slides":[{{"image":"{}"}},{{"image":"{}"}}]}}"#,
        wide.display(),
        tall.display()
    ))
    .unwrap();

    let deck = compose(&manifest).unwrap();
    assert!((deck.slide_width.to_inches() - 13.333).abs() < 1e-6);
    assert_eq!(deck.slide_height.to_inches(), 7.5);

    for slide in &deck.slides {
        let f = slide.picture.frame;
        // centered in integer EMU, independent of aspect ratio
        assert_eq!(f.left.0, (deck.slide_width.0 - f.width.0) / 2);
        assert!((f.left.to_inches() - 2.396).abs() < 0.002);
        assert_eq!(f.top.to_inches(), 1.0);
    }

    // heights follow the source aspect ratios
    let w = deck.slides[0].picture.frame;
    let t = deck.slides[1].picture.frame;
    assert_eq!(w.height, w.width.scale(100, 400));
    assert_eq!(t.height, t.width.scale(400, 100));
}

#[test]
fn whitespace_title_produces_untitled_slide() {
    let dir = scratch_dir("ws_title");
    let a = dir.join("a.png");
    write_png(&a, 64, 64);

    let manifest: Manifest = serde_json::from_str(&format!(
        r#"{{"slides":[{{"title":"   ","image":"{}"}}]}}"#,
        a.display()
    ))
    .unwrap();

    let deck = compose(&manifest).unwrap();
    assert_eq!(deck.slides.len(), 1);
    assert!(deck.slides[0].title.is_none());
}

#[test]
fn missing_image_aborts_composition() {
    let manifest: Manifest =
        serde_json::from_str(r#"{"slides":[{"title":"x","image":"target/nope.png"}]}"#).unwrap();

    let err = compose(&manifest).unwrap_err();
    assert!(matches!(err, DeckError::ImageLoad(_)));
    assert!(err.to_string().contains("nope.png"));
}
