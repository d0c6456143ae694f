use pagecanvas::test_utils::MockDocument;
use pagecanvas::{Layout, LayoutConfig, Margins};

fn config(margin: f64, spacing: f64) -> LayoutConfig {
    LayoutConfig {
        margin: Margins::uniform(margin),
        page_spacing: spacing,
        ..LayoutConfig::default()
    }
}

#[test]
fn test_three_page_stack_heights_and_tops() {
    // 3 pages of heights {100, 150, 120}, spacing 10, margins 5:
    // layout height = 5+100+10+150+10+120+5 = 400.
    let doc = MockDocument::new(vec![(600.0, 100.0), (600.0, 150.0), (600.0, 120.0)]);
    let mut layout = Layout::new(config(5.0, 10.0));
    layout.set_size(800.0, 200.0, &doc);

    assert_eq!(layout.display_height(), 400.0);
    assert_eq!(layout.visible_page_top(1).unwrap(), 115.0);

    layout.scroll_relative(0.0, 50.0);
    assert_eq!(layout.visible_page_top(1).unwrap(), 65.0);
}

#[test]
fn test_mixed_page_widths_center_independently() {
    let doc = MockDocument::new(vec![(400.0, 100.0), (600.0, 100.0), (200.0, 100.0)]);
    let mut layout = Layout::new(config(10.0, 10.0));
    layout.set_size(800.0, 600.0, &doc);

    // Canvas width: 10 + max(600, 800) + 10 = 820.
    let (width, _) = layout.layout_size();
    assert_eq!(width, 820.0);

    let pages = layout.pages();
    assert_eq!(pages[0].x, 210.0, "(820-400)/2");
    assert_eq!(pages[1].x, 110.0, "(820-600)/2");
    assert_eq!(pages[2].x, 310.0, "(820-200)/2");
}

#[test]
fn test_relayout_after_page_set_mutation() {
    let mut doc = MockDocument::uniform(2, 600.0, 100.0);
    let mut layout = Layout::new(config(5.0, 10.0));
    layout.set_size(800.0, 200.0, &doc);
    assert_eq!(layout.display_height(), 5.0 + 100.0 + 10.0 + 100.0 + 5.0);

    // Page appended (e.g. lazy load): a layout pass picks it up.
    doc.page_sizes.push((600.0, 50.0));
    layout.layout_pages(&doc);
    assert_eq!(layout.pages().len(), 3);
    assert_eq!(layout.display_height(), 5.0 + 100.0 + 10.0 + 100.0 + 10.0 + 50.0 + 5.0);
}

#[test]
fn test_shrinking_document_reclamps_scroll() {
    let mut doc = MockDocument::uniform(10, 600.0, 100.0);
    let mut layout = Layout::new(config(5.0, 10.0));
    layout.set_size(800.0, 200.0, &doc);

    layout.scroll_relative(0.0, 1_000_000.0);
    let (_, at_end) = layout.scroll_position();
    assert!(at_end > 0.0);

    // Document shrinks to one page; the old offset is now far past the
    // end of the canvas and must be clamped, proxies included.
    doc.page_sizes.truncate(1);
    layout.layout_pages(&doc);
    let (_, height) = layout.layout_size();
    let (_, scroll_y) = layout.scroll_position();
    assert!(
        scroll_y <= (height - 200.0).max(0.0),
        "scroll_y {} exceeds new max for canvas height {}",
        scroll_y,
        height
    );
    assert_eq!(layout.scrollbar_vertical().value(), scroll_y);
}

#[test]
fn test_zoom_style_resize_keeps_scroll_in_range() {
    // Page sizes double (zoom in): geometry is rebuilt from the new
    // sizes, scroll position survives where still valid.
    let mut doc = MockDocument::uniform(5, 400.0, 200.0);
    let mut layout = Layout::new(config(10.0, 10.0));
    layout.set_size(600.0, 400.0, &doc);
    layout.scroll_relative(0.0, 300.0);

    doc.page_sizes = vec![(800.0, 400.0); 5];
    layout.layout_pages(&doc);

    let (scroll_x, scroll_y) = layout.scroll_position();
    let (width, height) = layout.layout_size();
    assert_eq!(layout.pages()[1].y, 10.0 + 400.0 + 10.0);
    assert!(scroll_x <= width - 600.0);
    assert!(scroll_y <= height - 400.0);
    assert_eq!(layout.scrollbar_horizontal().range(), width);
    assert_eq!(layout.scrollbar_vertical().range(), height);
}

#[test]
fn test_layout_pages_is_idempotent_for_unchanged_inputs() {
    let doc = MockDocument::new(vec![(300.0, 80.0), (500.0, 120.0), (450.0, 90.0)]);
    let mut layout = Layout::new(config(7.0, 12.0));
    layout.set_size(640.0, 480.0, &doc);

    let first = layout.pages().to_vec();
    let first_size = layout.layout_size();
    for _ in 0..3 {
        layout.layout_pages(&doc);
    }
    assert_eq!(layout.pages(), &first[..], "repeated passes must not drift");
    assert_eq!(layout.layout_size(), first_size);
}
