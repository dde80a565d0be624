use drawpad::{ColorPalette, Palette, ToolKind, ToolPalette};
use egui::Color32;

#[test]
fn test_color_palette_lookup() {
    let palette = ColorPalette;
    assert_eq!(palette.count(), 16);

    for index in 0..palette.count() {
        let entry = palette.get(index).expect("index in range");
        assert_eq!(entry.index, index);
        // lookups are stable
        assert_eq!(palette.get(index), Some(entry));
    }

    assert_eq!(palette.get(0).unwrap().color, Color32::BLACK);
    assert_eq!(palette.get(15).unwrap().name, "Cayenne");
    assert_eq!(palette.get(16), None);
    assert_eq!(palette.get(usize::MAX), None);
}

#[test]
fn test_tool_palette_lookup() {
    let palette = ToolPalette;
    assert_eq!(palette.count(), 5);

    let kinds: Vec<ToolKind> = palette.iter().map(|entry| entry.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ToolKind::Brush,
            ToolKind::Eraser,
            ToolKind::RectangleStamp,
            ToolKind::TriangleStamp,
            ToolKind::EllipseStamp,
        ]
    );

    assert_eq!(palette.get(2).unwrap().label, "Square");
    assert_eq!(palette.get(5), None);
}

#[test]
fn test_palette_colors_are_distinct() {
    let colors: Vec<Color32> = ColorPalette.iter().map(|entry| entry.color).collect();
    for (i, a) in colors.iter().enumerate() {
        for b in &colors[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
