use super::*;
use crate::color::{DEFAULT_DARK, WHITE};
use crate::images::{decode_uploaded_image, image_prompt_for, sniff_content_type, UnavailableReason};
use crate::layout::{contain_fit, Rect, TextAlign};
use crate::pipeline::truncate_chars;
use crate::pptx::{xml_text, SlideBuilder};
use crate::render::{background_fill, prepare_image, GRADIENT_FALLBACK_FILL};
use base64::Engine;
use std::cell::RefCell;
use std::io::Cursor;

fn encoded_image(format: image::ImageFormat, width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([200u8, 30u8, 30u8]));
    let mut buffer = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut buffer, format)
        .expect("Failed to encode test image");
    buffer.into_inner()
}

fn offline_resolver() -> ImageResolver {
    ImageResolver::new(ImageResolverConfig {
        endpoint: "http://127.0.0.1:1/prompt/{prompt}".to_string(),
        timeout_ms: 500,
        retries: 0,
        retry_delay_ms: 0,
    })
    .expect("Failed to build resolver")
}

#[test]
fn test_parse_hex_forms() {
    assert_eq!(Rgb::parse_hex("#FFFFFF"), Some(WHITE));
    assert_eq!(Rgb::parse_hex("1e293b"), Some(Rgb::new(0x1E, 0x29, 0x3B)));
    assert_eq!(Rgb::parse_hex("#fff"), Some(WHITE));
    assert_eq!(Rgb::parse_hex("#12345"), None);
    assert_eq!(Rgb::parse_hex("zzzzzz"), None);
    assert_eq!(Rgb::parse_hex(""), None);
    assert_eq!(Rgb::new(0x0A, 0xB0, 0xFF).to_hex(), "0AB0FF");
}

#[test]
fn test_luminance_threshold() {
    assert!(WHITE.is_light());
    assert!(!Rgb::new(0, 0, 0).is_light());
    // 0x80 grey sits just above the midpoint
    assert!(Rgb::new(0x80, 0x80, 0x80).is_light());
    assert!(!Rgb::new(0x7F, 0x7F, 0x7F).is_light());
}

#[test]
fn test_contrast_light_background_prefers_dark() {
    let colors = adjust("#FFFFFF", "#FFFFFF", "#EEEEEE");
    assert_eq!(colors.title, Rgb::new(0, 0, 0));
    assert_eq!(colors.text, DEFAULT_DARK);

    // dark candidates survive on a light background
    let colors = adjust("F5F5F5", "#112233", "#445566");
    assert_eq!(colors.title, Rgb::new(0x11, 0x22, 0x33));
    assert_eq!(colors.text, Rgb::new(0x44, 0x55, 0x66));
}

#[test]
fn test_contrast_dark_background_prefers_light() {
    let colors = adjust("#1E293B", "#000000", "#333333");
    assert_eq!(colors.title, WHITE);
    assert_eq!(colors.text, WHITE);

    let colors = adjust("#000000", "#FFD700", "#E0E0E0");
    assert_eq!(colors.title, Rgb::new(0xFF, 0xD7, 0x00));
    assert_eq!(colors.text, Rgb::new(0xE0, 0xE0, 0xE0));
}

#[test]
fn test_contrast_gradient_is_always_light() {
    let gradient = "linear-gradient(135deg, #FFFFFF 0%, #F0F0F0 100%)";
    let colors = adjust(gradient, "#000000", "#222222");
    assert_eq!(colors.title, WHITE);
    assert_eq!(colors.text, WHITE);
    assert!(matches!(Background::parse(gradient), Background::Gradient(_)));
}

#[test]
fn test_contrast_malformed_input_never_fails() {
    // malformed background counts as the default dark color
    let colors = adjust("not-a-color", "#000000", "#000000");
    assert_eq!(colors.title, WHITE);
    assert_eq!(colors.text, WHITE);

    // malformed candidates fall back to dark, which a light background keeps
    let colors = adjust("#FFFFFF", "???", "");
    assert_eq!(colors.title, DEFAULT_DARK);
    assert_eq!(colors.text, DEFAULT_DARK);
}

#[test]
fn test_plan_without_images_is_text_only() {
    let design = DesignConfig::default();
    let slide = SlideRecord::new("Plain").with_bullets(["one", "two"]);
    let plan = plan(&slide, &design, false);

    assert_eq!(plan.kind, LayoutKind::TextOnly);
    assert!(plan.image_region.is_none());
    assert_eq!(plan.title.font_size_pt, 32);
    assert_eq!(plan.title.align, TextAlign::Left);
    let body = plan.body.expect("content slide should plan a body");
    assert_eq!(body.font_size_pt, 18);
    // title and body span 90% of the slide width
    assert_eq!(plan.title.rect.width, layout::inches_to_emu(12.0));
    assert_eq!(body.rect.width, plan.title.rect.width);
}

#[test]
fn test_plan_image_layout_geometry() {
    let design = DesignConfig::default();
    let slide = SlideRecord::new("Pictured").with_bullets(["one"]);
    let plan = plan(&slide, &design, true);

    assert_eq!(plan.kind, LayoutKind::Image);
    assert_eq!(plan.title.font_size_pt, 28);
    let image = plan.image_region.expect("image layout should plan an image region");
    let body = plan.body.expect("content slide should plan a body");
    let (slide_w, slide_h) = AspectRatio::Widescreen16x9.slide_size_emu();

    // text column on the left, image on the right, no overlap
    assert!(plan.title.rect.width <= slide_w * 41 / 100);
    assert!(body.rect.y >= plan.title.rect.bottom());
    assert_eq!(body.rect.x, plan.title.rect.x);
    assert!(image.x >= plan.title.rect.right());
    assert!(image.right() <= slide_w);
    // vertically centered
    assert!((image.y - (slide_h - image.bottom())).abs() <= 1);
}

#[test]
fn test_plan_title_hint_suppresses_body_and_centers() {
    let design = DesignConfig::default();
    let slide = SlideRecord::new("Welcome")
        .with_bullets(["hidden"])
        .with_layout(LayoutHint::Title);

    let text_only = plan(&slide, &design, false);
    assert!(text_only.body.is_none());
    assert_eq!(text_only.title.font_size_pt, 44);
    assert_eq!(text_only.title.align, TextAlign::Center);

    let with_image = plan(&slide, &design, true);
    assert!(with_image.body.is_none());
    assert_eq!(with_image.title.font_size_pt, 36);
    assert_eq!(with_image.title.align, TextAlign::Center);
    assert!(slide.visible_bullets().is_empty());
}

#[test]
fn test_theme_color_precedence() {
    let mut design = DesignConfig {
        global_background: Some("#000000".to_string()),
        global_title_color: Some("#FFFFFF".to_string()),
        ..DesignConfig::default()
    };
    design.layouts.insert(
        "title".to_string(),
        LayoutColors {
            background: Some("#1E3A8A".to_string()),
            ..LayoutColors::default()
        },
    );

    let title_colors = layout::resolve_theme_colors(&design, LayoutHint::Title);
    assert_eq!(title_colors.background, "#1E3A8A");
    assert_eq!(title_colors.title, "#FFFFFF");
    // neither override nor global set: built-in default
    assert_eq!(title_colors.text, "333333");

    let content_colors = layout::resolve_theme_colors(&design, LayoutHint::Content);
    assert_eq!(content_colors.background, "#000000");

    let defaults = layout::resolve_theme_colors(&DesignConfig::default(), LayoutHint::Content);
    assert_eq!(defaults.background, "FFFFFF");
    assert_eq!(defaults.title, "000000");
}

#[test]
fn test_contain_fit_preserves_aspect() {
    let region = Rect::from_inches(7.0, 1.0, 5.0, 5.0);

    let wide = contain_fit(region, 1600, 800);
    assert_eq!(wide.width, region.width);
    assert_eq!(wide.height, region.height / 2);
    assert!(region.contains(&wide));
    assert_eq!(wide.y - region.y, region.bottom() - wide.bottom());

    let tall = contain_fit(region, 300, 900);
    assert_eq!(tall.height, region.height);
    assert!(region.contains(&tall));
    assert!((tall.width * 3 - tall.height).abs() <= 3);
}

#[test]
fn test_visible_bullets_trims_and_filters() {
    let slide = SlideRecord::new("T").with_bullets(["  a  ", "", "   ", "b"]);
    assert_eq!(slide.visible_bullets(), vec!["a", "b"]);
}

#[test]
fn test_parse_outline_accepts_array() {
    let raw = r#"[
        {"title": " Intro ", "bullets": ["a", " ", "b"], "imagePrompt": "a red bicycle"},
        {"title": "Next", "bullets": []}
    ]"#;
    let slides = parse_outline(raw).expect("array outline should parse");
    assert_eq!(slides.len(), 2);
    assert_eq!(slides[0].title, "Intro");
    assert_eq!(slides[0].bullets, vec!["a", "b"]);
    assert_eq!(slides[0].image_prompt.as_deref(), Some("a red bicycle"));
    assert_eq!(slides[1].image_prompt, None);
}

#[test]
fn test_parse_outline_accepts_code_fence() {
    let raw = "```json\n[{\"title\": \"Fenced\", \"bullets\": [\"x\"]}]\n```";
    let slides = parse_outline(raw).expect("fenced outline should parse");
    assert_eq!(slides[0].title, "Fenced");
}

#[test]
fn test_parse_outline_accepts_single_line_fence() {
    for raw in [
        r#"```[{"title": "A"}]```"#,
        r#"```json [{"title": "B", "bullets": ["x"]}]```"#,
    ] {
        let slides = parse_outline(raw).expect("single-line fence should parse");
        assert_eq!(slides.len(), 1, "{raw}");
    }
}

#[test]
fn test_parse_outline_rejects_other_shapes() {
    for raw in [
        r#"{"data": [{"title": "A"}]}"#,
        r#"{"slides": [{"title": "A"}]}"#,
        r#""just text""#,
        r#"["a", "b"]"#,
        "not json at all",
    ] {
        let result = parse_outline(raw);
        assert!(
            matches!(result, Err(DeckError::OutlineParseError(_))),
            "expected parse error for {raw}, got {result:?}"
        );
    }
}

#[test]
fn test_build_outline_prompt_mentions_shape_and_count() {
    let prompt = build_outline_prompt("  Rust ownership  ", 7);
    assert!(prompt.contains("exactly 7 slides"));
    assert!(prompt.contains("\"imagePrompt\""));
    assert!(prompt.ends_with("Rust ownership"));
}

#[test]
fn test_resolve_disabled_never_fetches() {
    let resolver = offline_resolver();
    let slide = SlideRecord::new("Anything").with_image_prompt("a cat");
    match resolver.resolve(&slide, false) {
        ImageResolution::Unavailable(reason) => assert_eq!(reason, UnavailableReason::Disabled),
        ImageResolution::Available(_) => panic!("images are disabled"),
    }
}

#[test]
fn test_resolve_unreachable_endpoint_is_unavailable() {
    let resolver = offline_resolver();
    let slide = SlideRecord::new("Remote").with_image_prompt("a red bicycle");
    match resolver.resolve(&slide, true) {
        ImageResolution::Unavailable(reason) => assert_eq!(reason, UnavailableReason::FetchFailed),
        ImageResolution::Available(_) => panic!("endpoint is unreachable"),
    }
}

#[test]
fn test_resolve_without_prompt() {
    let resolver = offline_resolver();
    let slide = SlideRecord::new("Untitled prompt-less slide");
    match resolver.resolve(&slide, true) {
        ImageResolution::Unavailable(reason) => assert_eq!(reason, UnavailableReason::NoPrompt),
        ImageResolution::Available(_) => panic!("nothing to build a prompt from"),
    }
}

#[test]
fn test_image_prompt_falls_back_to_title() {
    let slide = SlideRecord::new(" Solar Power ").with_image_prompt("   ");
    assert_eq!(image_prompt_for(&slide), Some("Solar Power"));

    let slide = SlideRecord::new("Title").with_image_prompt(" wind farm ");
    assert_eq!(image_prompt_for(&slide), Some("wind farm"));

    // no prompt at all means no image request
    assert_eq!(image_prompt_for(&SlideRecord::new("Title only")), None);
    let blank = SlideRecord::new("  ").with_image_prompt("");
    assert_eq!(image_prompt_for(&blank), None);
}

#[test]
fn test_prompt_url_is_percent_encoded() {
    let resolver = offline_resolver();
    assert_eq!(
        resolver.prompt_url("  a red bicycle & more "),
        "http://127.0.0.1:1/prompt/a%20red%20bicycle%20%26%20more"
    );
}

#[test]
fn test_uploaded_image_takes_precedence() {
    let png = encoded_image(image::ImageFormat::Png, 4, 4);
    let encoded = base64::engine::general_purpose::STANDARD.encode(&png);
    let slide = SlideRecord::new("Upload")
        .with_image_prompt("ignored prompt")
        .with_uploaded_image(format!("data:image/png;base64,{}", encoded));

    // the offline endpoint would fail, so success proves no fetch happened
    let resolution = offline_resolver().resolve(&slide, true);
    let image = resolution.image().expect("uploaded image should be available");
    assert_eq!(image.bytes, png);
    assert_eq!(image.content_type, "image/png");
    assert_eq!(image.origin, images::ImageOrigin::Uploaded);
}

#[test]
fn test_uploaded_image_decode_failures() {
    assert!(decode_uploaded_image("data:image/png;base64,@@@not base64@@@").is_err());
    assert!(decode_uploaded_image("data:image/png,plain").is_err());
    let text = base64::engine::general_purpose::STANDARD.encode(b"hello world");
    assert!(decode_uploaded_image(&text).is_err());

    let slide = SlideRecord::new("Broken").with_uploaded_image("%%%");
    match offline_resolver().resolve(&slide, true) {
        ImageResolution::Unavailable(reason) => assert_eq!(reason, UnavailableReason::Undecodable),
        ImageResolution::Available(_) => panic!("upload is not an image"),
    }
}

#[test]
fn test_uploaded_image_without_padding_or_prefix() {
    let png = encoded_image(image::ImageFormat::Png, 2, 3);
    let encoded = base64::engine::general_purpose::STANDARD_NO_PAD.encode(&png);
    let image = decode_uploaded_image(&encoded).expect("unpadded base64 should decode");
    assert_eq!(image.bytes, png);
    assert_eq!(sniff_content_type(&image.bytes), Some("image/png"));
}

#[test]
fn test_uploaded_image_type_comes_from_bytes() {
    let png = encoded_image(image::ImageFormat::Png, 3, 3);
    let encoded = base64::engine::general_purpose::STANDARD.encode(&png);
    let image = decode_uploaded_image(&format!("data:image/jpeg;base64,{}", encoded))
        .expect("mislabelled png should still decode");
    assert_eq!(image.content_type, "image/png");
}

#[test]
fn test_prepare_image_reencodes_unsupported_formats() {
    let bmp = encoded_image(image::ImageFormat::Bmp, 6, 3);
    let resolved = ResolvedImage {
        bytes: bmp,
        content_type: "image/bmp".to_string(),
        origin: images::ImageOrigin::Uploaded,
    };
    let prepared = prepare_image(&resolved).expect("bmp should convert");
    assert_eq!(prepared.format, pptx::MediaFormat::Png);
    assert_eq!((prepared.width, prepared.height), (6, 3));
    assert_eq!(sniff_content_type(&prepared.bytes), Some("image/png"));
}

#[test]
fn test_prepare_image_rejects_truncated_data() {
    let mut png = encoded_image(image::ImageFormat::Png, 8, 8);
    png.truncate(24);
    let resolved = ResolvedImage {
        bytes: png,
        content_type: "image/png".to_string(),
        origin: images::ImageOrigin::Uploaded,
    };
    assert!(matches!(prepare_image(&resolved), Err(DeckError::RenderError(_))));
}

#[test]
fn test_gradient_background_renders_solid_fallback() {
    let gradient = Background::parse("linear-gradient(90deg, #fff, #eee)");
    assert_eq!(background_fill(&gradient), GRADIENT_FALLBACK_FILL);
    assert_eq!(background_fill(&Background::parse("#ABCDEF")), Rgb::new(0xAB, 0xCD, 0xEF));
}

#[test]
fn test_render_embeds_placeholder_when_image_is_corrupt() {
    let design = DesignConfig::default();
    let slide = SlideRecord::new("Corrupt").with_bullets(["x"]);
    let plan = plan(&slide, &design, true);
    let image = ImageResolution::Available(ResolvedImage {
        bytes: b"\x89PNG\r\n\x1a\nbroken".to_vec(),
        content_type: "image/png".to_string(),
        origin: images::ImageOrigin::Uploaded,
    });

    let mut deck = DeckHandle::new("Test");
    render_slide(&mut deck, &slide, &plan, &image).expect("corrupt image must not fail the slide");
    assert_eq!(deck.slide_count(), 1);

    let rendered = deck.finalize().expect("deck should finalize");
    let mut archive =
        zip::ZipArchive::new(Cursor::new(rendered.bytes)).expect("deck should be a zip archive");
    let mut xml = String::new();
    std::io::Read::read_to_string(
        &mut archive.by_name("ppt/slides/slide1.xml").expect("slide part"),
        &mut xml,
    )
    .expect("slide xml should be utf-8");
    assert!(xml.contains(render::IMAGE_PLACEHOLDER_TEXT));
    assert!(!xml.contains("<p:pic>"));
}

fn off_slide_region() -> Rect {
    Rect {
        x: 12_000_000,
        y: 0,
        width: 1_000_000,
        height: 1_000_000,
    }
}

#[test]
fn test_render_rejects_regions_off_the_slide() {
    let design = DesignConfig::default();
    let slide = SlideRecord::new("Overflow").with_bullets(["x"]);
    let mut plan = plan(&slide, &design, true);
    plan.image_region = Some(off_slide_region());

    let mut deck = DeckHandle::new("Test");
    let result = render_slide(
        &mut deck,
        &slide,
        &plan,
        &ImageResolution::Unavailable(UnavailableReason::Disabled),
    );
    assert!(matches!(result, Err(DeckError::RenderError(_))), "got {result:?}");
    assert_eq!(deck.slide_count(), 0);
}

#[test]
fn test_assemble_aborts_on_failing_slide() {
    let assembler = DeckAssembler::new(offline_resolver(), "Aborted");
    let slides = vec![
        SlideRecord::new("A").with_bullets(["one"]),
        SlideRecord::new("Broken").with_bullets(["two"]),
        SlideRecord::new("C").with_bullets(["three"]),
    ];
    let rendered = RefCell::new(Vec::new());

    let result = assembler.assemble_with(
        &slides,
        &DesignConfig::default(),
        |deck, slide, plan, image| {
            rendered.borrow_mut().push(slide.title.clone());
            if slide.title == "Broken" {
                let mut broken = plan.clone();
                broken.image_region = Some(off_slide_region());
                return render_slide(deck, slide, &broken, image);
            }
            render_slide(deck, slide, plan, image)
        },
    );

    match result {
        Err(DeckError::AssemblyError { slide, message }) => {
            assert_eq!(slide, 2);
            assert!(message.contains("outside the slide"), "message: {message}");
        }
        other => panic!("expected an assembly error, got {other:?}"),
    }
    // nothing after the failing slide is rendered
    assert_eq!(*rendered.borrow(), vec!["A", "Broken"]);
}

#[test]
fn test_slide_builder_escapes_text() {
    let design = DesignConfig::default();
    let slide = SlideRecord::new("Q&A <live>");
    let plan = plan(&slide, &design, false);
    let mut builder = SlideBuilder::new(&slide.title);
    builder.add_text_box("Title", &plan.title, "Arial", &["Q&A <live>"], false);
    assert_eq!(builder.shape_count(), 1);
    assert_eq!(xml_text("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    assert_eq!(xml_text("bell\u{7}char"), "bellchar");
}

#[test]
fn test_deck_file_name() {
    assert_eq!(deck_file_name("Q3 Review: Growth!"), "q3-review-growth.pptx");
    assert_eq!(deck_file_name("   "), "presentation.pptx");
}

#[test]
fn test_assemble_rejects_empty_input() {
    let assembler = DeckAssembler::new(offline_resolver(), "Empty");
    let result = assembler.assemble(&[], &DesignConfig::default());
    assert!(matches!(result, Err(DeckError::EmptyInputError)));
}

#[test]
fn test_config_validation() {
    assert!(Config::default().validate().is_ok());

    let config = Config {
        image_endpoint: "https://example.com/no-placeholder".to_string(),
        ..Config::default()
    };
    assert!(matches!(config.validate(), Err(DeckError::ConfigError(_))));

    let config = Config {
        image_endpoint: "ftp://example.com/{prompt}".to_string(),
        ..Config::default()
    };
    assert!(matches!(config.validate(), Err(DeckError::ConfigError(_))));
}

#[test]
fn test_design_config_json_defaults() {
    let design: DesignConfig =
        serde_json::from_str(r##"{"globalBackground": "#FFFFFF", "includeImages": true}"##)
            .expect("design should parse");
    assert_eq!(design.font, "Arial");
    assert!(design.include_images);
    assert!(design.layouts.is_empty());

    let slide: SlideRecord =
        serde_json::from_str(r#"{"title": "End", "bullets": ["done"], "layout": "title"}"#)
            .expect("slide should parse");
    assert_eq!(slide.hint(), LayoutHint::Title);
}

#[test]
fn test_source_kind_from_extension() {
    assert_eq!(SourceKind::from_extension("PDF"), Some(SourceKind::Pdf));
    assert_eq!(SourceKind::from_extension(".docx"), Some(SourceKind::Word));
    assert_eq!(SourceKind::from_extension("xlsx"), Some(SourceKind::Excel));
    assert_eq!(SourceKind::from_extension("txt"), Some(SourceKind::Text));
    assert_eq!(SourceKind::from_extension("exe"), None);
}

#[test]
fn test_truncate_chars_respects_char_boundaries() {
    assert_eq!(truncate_chars("héllo", 2), "hé");
    assert_eq!(truncate_chars("abc", 10), "abc");
}

struct FixedExtractor(&'static str);

impl TextExtractor for FixedExtractor {
    fn extract_text(&self, _bytes: &[u8], _kind: SourceKind) -> Result<String> {
        Ok(self.0.to_string())
    }
}

struct RecordingGenerator {
    response: String,
    prompts: RefCell<Vec<String>>,
}

impl OutlineGenerator for RecordingGenerator {
    fn generate_outline(&self, prompt_text: &str, _slide_count: usize) -> Result<String> {
        self.prompts.borrow_mut().push(prompt_text.to_string());
        Ok(self.response.clone())
    }
}

#[test]
fn test_converter_runs_full_pipeline() {
    let config = Config {
        max_source_chars: 5,
        ..Config::default()
    };
    let extractor = FixedExtractor("abcdefghij");
    let generator = RecordingGenerator {
        response: r#"[{"title": "One", "bullets": ["a"]}, {"title": "Two"}, {"title": "Three"}]"#
            .to_string(),
        prompts: RefCell::new(Vec::new()),
    };
    let assembler = DeckAssembler::new(offline_resolver(), "Converted");
    let converter = Converter::new(&config, &extractor, &generator, &assembler);

    let deck = converter
        .convert(
            ConversionSource::Document {
                bytes: b"%PDF".to_vec(),
                kind: SourceKind::Pdf,
            },
            2,
            &DesignConfig::default(),
        )
        .expect("conversion should succeed");

    assert_eq!(deck.slide_count, 2);
    assert_eq!(deck.slide_titles, vec!["One", "Two"]);
    let prompts = generator.prompts.borrow();
    assert!(prompts[0].ends_with("abcde"));
}

#[test]
fn test_converter_rejects_bad_inputs() {
    let config = Config::default();
    let extractor = FixedExtractor("   ");
    let generator = RecordingGenerator {
        response: r#"{"slides": []}"#.to_string(),
        prompts: RefCell::new(Vec::new()),
    };
    let assembler = DeckAssembler::new(offline_resolver(), "Bad");
    let converter = Converter::new(&config, &extractor, &generator, &assembler);
    let design = DesignConfig::default();

    let result = converter.convert(ConversionSource::Topic("Rust".to_string()), 0, &design);
    assert!(matches!(result, Err(DeckError::ValidationError(_))));

    let result = converter.convert(
        ConversionSource::Document {
            bytes: Vec::new(),
            kind: SourceKind::Text,
        },
        3,
        &design,
    );
    assert!(matches!(result, Err(DeckError::ExtractionError(_))));

    let result = converter.convert(ConversionSource::Topic("Rust".to_string()), 3, &design);
    assert!(matches!(result, Err(DeckError::OutlineParseError(_))));

    let empty = RecordingGenerator {
        response: "[]".to_string(),
        prompts: RefCell::new(Vec::new()),
    };
    let converter = Converter::new(&config, &extractor, &empty, &assembler);
    let result = converter.convert(ConversionSource::Topic("Rust".to_string()), 3, &design);
    assert!(matches!(result, Err(DeckError::EmptyInputError)));
}
