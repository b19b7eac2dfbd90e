//! Color editor system
//!
//! Replays a scripted list of component edits against the three-way color
//! editor, the way arrow-key presses drive it interactively.

use cgx_core::{ColorEditor, Component};

use crate::config::ColorConfig;

/// Final state of a color session
#[derive(Debug, Clone, Copy)]
pub struct ColorReport {
    pub editor: ColorEditor,
    pub edits_applied: usize,
}

impl ColorReport {
    /// One `name = value` pair per component, in editing order
    pub fn components(&self) -> Vec<(&'static str, f64)> {
        Component::ALL
            .iter()
            .map(|&c| (c.name(), self.editor.get(c)))
            .collect()
    }
}

pub struct ColorSystem;

impl ColorSystem {
    pub fn run(config: &ColorConfig) -> ColorReport {
        let mut editor = ColorEditor::new(config.initial_rgb());

        for edit in &config.edits {
            editor.apply(*edit);
            log::debug!(
                "{} {:+} -> rgb {:?}",
                edit.component.name(),
                edit.delta,
                editor.rgb()
            );
        }

        let report = ColorReport {
            editor,
            edits_applied: config.edits.len(),
        };
        let line = report
            .components()
            .iter()
            .map(|(name, value)| format!("{}={:5.3}", name, value))
            .collect::<Vec<_>>()
            .join(" ");
        log::info!("Color after {} edits: {}", report.edits_applied, line);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgx_core::{ColorEdit, Rgb};

    #[test]
    fn test_no_edits_reports_initial_color() {
        let report = ColorSystem::run(&ColorConfig::default());
        assert_eq!(report.editor.rgb(), Rgb::WHITE);
        assert_eq!(report.edits_applied, 0);
        assert_eq!(report.components().len(), 10);
    }

    #[test]
    fn test_scripted_edits() {
        let config = ColorConfig {
            initial: [0.0, 0.0, 0.0],
            edits: vec![
                ColorEdit { component: Component::V, delta: 1.0 },
                ColorEdit { component: Component::S, delta: 1.0 },
                ColorEdit { component: Component::H, delta: 2.0 / 6.0 },
            ],
        };
        let report = ColorSystem::run(&config);
        assert_eq!(report.edits_applied, 3);
        // Hue 1/3 at full saturation and value is green
        assert!(report.editor.rgb().max_abs_diff(Rgb::new(0.0, 1.0, 0.0)) < 1e-9);
        assert_eq!(report.editor.selected(), Component::H);
    }
}
