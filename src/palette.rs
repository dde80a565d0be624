use egui::Color32;

use crate::tools::ToolKind;

/// A fixed, ordered table that can be looked up by index.
pub trait Palette {
    type Entry;

    fn count(&self) -> usize;

    /// Returns `None` for indices outside `0..count()`.
    fn get(&self, index: usize) -> Option<Self::Entry>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorEntry {
    pub index: usize,
    pub name: &'static str,
    pub color: Color32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolEntry {
    pub index: usize,
    pub icon: &'static str,
    pub label: &'static str,
    pub kind: ToolKind,
}

const COLORS: [(&str, Color32); 16] = [
    ("Black", Color32::from_rgb(0, 0, 0)),
    ("Gray", Color32::from_rgb(128, 128, 128)),
    ("Brown", Color32::from_rgb(153, 102, 51)),
    ("Cantaloupe", Color32::from_rgb(255, 212, 121)),
    ("Orange", Color32::from_rgb(255, 128, 0)),
    ("Yellow", Color32::from_rgb(255, 255, 0)),
    ("Asparagus", Color32::from_rgb(146, 144, 0)),
    ("Green", Color32::from_rgb(0, 255, 0)),
    ("Teal", Color32::from_rgb(0, 145, 147)),
    ("Sky", Color32::from_rgb(118, 214, 255)),
    ("Blue", Color32::from_rgb(0, 0, 255)),
    ("Purple", Color32::from_rgb(128, 0, 128)),
    ("Magenta", Color32::from_rgb(255, 64, 255)),
    ("Pink", Color32::from_rgb(255, 45, 85)),
    ("Red", Color32::from_rgb(255, 0, 0)),
    ("Cayenne", Color32::from_rgb(148, 17, 0)),
];

const TOOLS: [(&str, &str, ToolKind); 5] = [
    ("🖌", "Brush", ToolKind::Brush),
    ("⌫", "Eraser", ToolKind::Eraser),
    ("◻", "Square", ToolKind::RectangleStamp),
    ("△", "Triangle", ToolKind::TriangleStamp),
    ("○", "Circle", ToolKind::EllipseStamp),
];

/// The 16 swatches offered by the color picker.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorPalette;

impl Palette for ColorPalette {
    type Entry = ColorEntry;

    fn count(&self) -> usize {
        COLORS.len()
    }

    fn get(&self, index: usize) -> Option<ColorEntry> {
        COLORS.get(index).map(|&(name, color)| ColorEntry { index, name, color })
    }
}

impl ColorPalette {
    pub fn iter(&self) -> impl Iterator<Item = ColorEntry> + '_ {
        (0..self.count()).filter_map(|index| self.get(index))
    }
}

/// The five tools shown in the tool panel.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolPalette;

impl Palette for ToolPalette {
    type Entry = ToolEntry;

    fn count(&self) -> usize {
        TOOLS.len()
    }

    fn get(&self, index: usize) -> Option<ToolEntry> {
        TOOLS.get(index).map(|&(icon, label, kind)| ToolEntry {
            index,
            icon,
            label,
            kind,
        })
    }
}

impl ToolPalette {
    pub fn iter(&self) -> impl Iterator<Item = ToolEntry> + '_ {
        (0..self.count()).filter_map(|index| self.get(index))
    }
}
